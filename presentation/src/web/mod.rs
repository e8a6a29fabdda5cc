//! Server-rendered single page

pub mod page;

pub use page::{PageOutcome, SearchPage};
