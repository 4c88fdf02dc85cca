//! The compiled form of a pattern and the routines that run it against a
//! cursor
mod any_match;
mod build;
mod rep_match;
mod scal_match;
mod shared;

pub(crate) use any_match::seq_match;
pub(crate) use build::mk_pattern;
pub(crate) use shared::{AnyMatcher, ScalMatcher};
