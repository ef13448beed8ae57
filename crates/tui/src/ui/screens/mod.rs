//! Screen rendering for the four portal pages.

pub mod dashboard;
pub mod records;
