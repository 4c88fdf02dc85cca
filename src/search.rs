//! The sliding-window scan

use std::borrow::Cow;

use crate::config::SearchConfig;
use crate::cursor::MatchCursor;
use crate::error::EvalError;
use crate::matched::Match;
use crate::matcher::seq_match;
use crate::pattern::Pattern;
use crate::replace::replace_matches;

/// Runs a pattern against sequences with a fixed configuration
pub struct SearchEngine<'p, E> {
  pattern: &'p Pattern<E>,
  config: SearchConfig,
}
impl<'p, E> SearchEngine<'p, E> {
  /// Search for the pattern according to the configuration
  pub fn new(pattern: &'p Pattern<E>, config: SearchConfig) -> Self {
    Self { pattern, config }
  }
  /// The pattern searched for
  pub fn pattern(&self) -> &'p Pattern<E> { self.pattern }
  /// The settings of the search
  pub fn config(&self) -> &SearchConfig { &self.config }
}

impl<'p, E: Clone> SearchEngine<'p, E> {
  /// Find matches from left to right. Every position is tried as a start
  /// until a match is found, then the scan resumes after it, so matches
  /// never overlap. Matches that consume nothing are dropped.
  ///
  /// The first error raised by a predicate aborts the search.
  pub fn find(&self, seq: &[E]) -> Result<Vec<Match<E>>, EvalError> {
    let logger = &self.config.logger;
    // formatting is skipped entirely when the messages would be dropped
    let verbose = !logger.is_discard();
    let mut cursor = MatchCursor::new(seq, self.pattern.leaves());
    let mut start = 0;
    while start < seq.len() {
      if let Some(limit) = self.config.limit {
        if limit <= cursor.matches().len() {
          if verbose {
            logger.log(format!("Stopping at {start} after {limit} matches"));
          }
          break;
        }
      }
      cursor.begin(start);
      if seq_match(self.pattern.matchers(), &mut cursor)? {
        if cursor.accept() {
          if verbose {
            logger.log(format!("Matched {}..{}", cursor.start(), cursor.pos()));
          }
          start = cursor.pos();
          continue;
        }
        if verbose {
          logger.log(format!("Discarded empty match at {start}"));
        }
      }
      start += 1;
    }
    Ok(cursor.into_matches())
  }

  /// Find matches as in [SearchEngine::find] and replace each with the
  /// output of the transform
  pub fn replace<'s, I: IntoIterator<Item = E>>(
    &self,
    seq: &'s [E],
    transform: impl FnMut(&Match<E>) -> I,
  ) -> Result<Cow<'s, [E]>, EvalError> {
    let matches = self.find(seq)?;
    Ok(replace_matches(seq, &matches, transform))
  }
}
