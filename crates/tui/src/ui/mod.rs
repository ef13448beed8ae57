//! UI rendering modules for the terminal portal.
//!
//! Rendering is separated from the controllers in `app`; screen functions
//! receive borrowed state through render config structs.

pub mod components;
pub mod screens;
pub mod theme;
pub mod toast;

pub use toast::{Toast, ToastLevel};
