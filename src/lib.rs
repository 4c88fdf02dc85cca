#![warn(missing_docs)]
//! Regular-expression style matching over sequences of arbitrary elements.
//!
//! A [Pattern] is built from [Term]s, each of which tests elements with
//! [Predicate]s. Searching a sequence yields non-overlapping [Match]es
//! carrying the captured elements and subsequences, which can then be
//! rewritten with [Pattern::replace].
//!
//! Quantifiers never backtrack. A lazy quantifier decides where to stop by
//! looking one element ahead with the simplest test of the term that
//! follows it.
pub mod config;
pub(crate) mod cursor;
pub mod error;
pub mod logging;
pub mod matched;
pub(crate) mod matcher;
pub mod pattern;
pub mod predicate;
pub mod property;
pub mod reduce;
pub mod replace;
pub mod search;
pub mod term;

pub use config::SearchConfig;
pub use error::{EvalError, PatternError};
pub use logging::{LogStrategy, Logger};
pub use matched::Match;
pub use pattern::Pattern;
pub use predicate::Predicate;
pub use property::{PropValue, Properties};
pub use replace::replace_matches;
pub use search::SearchEngine;
pub use term::{Greed, Term};
