//! Akyl Jer terminal portal library.
//!
//! This library provides the navigation shell, the list and dashboard
//! controllers, rendering and the async runtime for the terminal portal.
//!
//! # Example
//!
//! ```rust
//! use akyljer_tui::{Action, App, Route};
//! use crossterm::event::{KeyCode, KeyEvent};
//!
//! let mut app = App::new(Default::default(), "http://localhost:8000".to_string());
//! let requests = app.update(Action::Navigate(Route::Events));
//! assert!(!requests.is_empty());
//! assert!(matches!(
//!     app.handle_input(KeyEvent::from(KeyCode::Char('q'))),
//!     Some(Action::Quit)
//! ));
//! ```

pub mod action;
pub mod app;
pub mod cli;
pub mod runtime;
pub mod ui;

pub use action::Action;
pub use app::{App, FOOTER_HEIGHT, HEADER_HEIGHT, Route};
pub use ui::toast::{Toast, ToastLevel};
