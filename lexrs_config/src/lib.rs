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

//! Configuration sourcing and validation for the conversation adapter.
//!
//! The middleware's parameter store is consumed through the
//! [`ParameterSource`] trait only; [`build_configuration`] turns a source
//! into a complete, validated [`lexrs_core::LexConfiguration`] or fails with
//! the first missing required value.

mod source;
mod validator;

pub use source::{FileParameterSource, ParameterSource};
pub use validator::{
    ACCEPT_TYPE_KEY, BOT_ALIAS_KEY, BOT_NAME_KEY, CONNECT_TIMEOUT_MS_KEY, CONTENT_TYPE_KEY,
    REGION_KEY, REQUEST_TIMEOUT_MS_KEY, USER_ID_KEY, build_configuration,
};
