#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! The conversation session and its decode path.
//!
//! The remote service keeps dialog state per session on its side, so this
//! crate owns the two invariants the adapter is built around:
//! - at most one turn in flight per interactor, and
//! - a turn either yields a fully decoded response or nothing at all.

mod decode;
mod interactor;

pub use decode::decode_turn;
pub use interactor::LexInteractor;
