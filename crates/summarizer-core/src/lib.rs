//! Shared error plumbing for the summarizer crates

#![allow(clippy::must_use_candidate)]

mod error;

pub use error::{ErrorBody, ErrorKind, HttpError};
