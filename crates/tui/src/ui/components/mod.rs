//! Reusable widgets.

mod filter_input;

pub use filter_input::FilterInput;
