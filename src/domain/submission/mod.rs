//! Submission aggregate: frozen builds and their judge scores.

mod aggregate;

pub use aggregate::{rank_submissions, Submission};
