//! Answers: the search mode, the structured answer shape, and the
//! heuristic that pulls that shape out of free-form model text.

pub mod extraction;
pub mod mode;
pub mod structured;
