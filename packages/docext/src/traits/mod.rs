//! Core trait abstractions.
//!
//! - [`fetcher::Fetcher`] - where document bytes come from
//! - [`parser::DocumentParser`] - how bytes of one format become text

pub mod fetcher;
pub mod parser;
