//! # buildbump-core
//!
//! Core types for buildbump.
//!
//! Holds the version file configuration, the rule that recognizes the `BUILD` declaration
//! inside a C++ version header, the splice that rewrites only its digits, and the outcome
//! types reported back to the caller.

pub mod build_number;
pub mod bump_outcome;
pub mod config;

pub use build_number::{
    BUILD_FIELD_MAX, BuildMatch, BuildNumber, BuildNumberMatcher, DeclarationMatcher,
    extract_build_number, next_build_number, splice_value,
};
pub use bump_outcome::{BumpOutcome, SkipReason};
pub use config::BumpConfig;
