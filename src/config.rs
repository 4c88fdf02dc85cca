//! Settings of a search

use crate::logging::Logger;

/// Knobs of [crate::SearchEngine]. The default finds every match and logs
/// nothing.
#[derive(Clone, Debug, Default)]
pub struct SearchConfig {
  /// Stop scanning after this many matches
  pub limit: Option<usize>,
  /// Receives a line for every accepted or discarded match
  pub logger: Logger,
}
impl SearchConfig {
  /// Same as [Default::default]
  pub fn new() -> Self { Self::default() }
  /// Stop after `limit` matches
  #[must_use]
  pub fn with_limit(self, limit: usize) -> Self {
    Self { limit: Some(limit), ..self }
  }
  /// Send diagnostics to the logger
  #[must_use]
  pub fn with_logger(self, logger: Logger) -> Self { Self { logger, ..self } }
}
