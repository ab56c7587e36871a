//! Core definitions shared by the longseq crates: the error taxonomy and the
//! `Result` alias.

pub mod error;
pub mod result;

pub use result::Result;
