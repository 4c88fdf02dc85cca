//! A validated, compiled list of terms

use std::borrow::Cow;
use std::fmt::{self, Display};

use itertools::Itertools;

use crate::config::SearchConfig;
use crate::error::{EvalError, PatternError};
use crate::matched::Match;
use crate::matcher::{mk_pattern, AnyMatcher, ScalMatcher};
use crate::search::SearchEngine;
use crate::term::Term;

/// A sequence of terms every match must satisfy in order. Immutable once
/// built, so a single pattern can serve any number of concurrent searches.
pub struct Pattern<E> {
  terms: Vec<Term<E>>,
  matchers: Vec<AnyMatcher<E>>,
  leaves: Vec<ScalMatcher<E>>,
}
impl<E> Pattern<E> {
  /// Validate and compile the terms. Fails if there are no terms or if
  /// any of them is malformed, see [PatternError].
  pub fn new(terms: impl IntoIterator<Item = Term<E>>) -> Result<Self, PatternError> {
    let terms = terms.into_iter().collect::<Vec<_>>();
    let (matchers, leaves) = mk_pattern(&terms)?;
    Ok(Self { terms, matchers, leaves })
  }

  /// The terms this pattern was built from
  pub fn terms(&self) -> &[Term<E>] { &self.terms }

  pub(crate) fn matchers(&self) -> &[AnyMatcher<E>] { &self.matchers }
  pub(crate) fn leaves(&self) -> &[ScalMatcher<E>] { &self.leaves }

  /// Search with non-default settings
  pub fn searcher(&self, config: SearchConfig) -> SearchEngine<'_, E> {
    SearchEngine::new(self, config)
  }
}

impl<E: Clone> Pattern<E> {
  /// Find every non-overlapping match, from left to right
  pub fn find(&self, seq: &[E]) -> Result<Vec<Match<E>>, EvalError> {
    self.searcher(SearchConfig::default()).find(seq)
  }

  /// Replace every match with the output of the transform. If nothing
  /// matches, the input is returned as-is.
  pub fn replace<'s, I: IntoIterator<Item = E>>(
    &self,
    seq: &'s [E],
    transform: impl FnMut(&Match<E>) -> I,
  ) -> Result<Cow<'s, [E]>, EvalError> {
    self.searcher(SearchConfig::default()).replace(seq, transform)
  }

  /// Replace every match with a single element
  pub fn replace_to_one<'s>(
    &self,
    seq: &'s [E],
    mut transform: impl FnMut(&Match<E>) -> E,
  ) -> Result<Cow<'s, [E]>, EvalError> {
    self.replace(seq, |m| [transform(m)])
  }
}

impl<E> Clone for Pattern<E> {
  fn clone(&self) -> Self {
    Self {
      terms: self.terms.clone(),
      matchers: self.matchers.clone(),
      leaves: self.leaves.clone(),
    }
  }
}

impl<E> Display for Pattern<E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "[{}]", self.terms.iter().join(", "))
  }
}

impl<E> fmt::Debug for Pattern<E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Pattern{self}")
  }
}
