//! # CLI Command Implementations
//!
//! Each subcommand of `vendor-private` lives in its own file with an `Args`
//! struct derived with `clap` and an `execute` function that calls into the
//! `vendor_private` library.

pub mod check;
pub mod completions;
pub mod sync;
