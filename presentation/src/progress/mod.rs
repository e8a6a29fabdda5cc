//! Terminal progress display

pub mod reporter;
pub mod timer;
