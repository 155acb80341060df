#![deny(
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

//! The node-facing conversation adapter.
//!
//! A [`LexNode`] is what the middleware service handler holds: it is built
//! once from a parameter source and then answers turn requests with a
//! boolean outcome, leaving the caller's response record untouched on
//! failure.

mod node;

pub use node::LexNode;
