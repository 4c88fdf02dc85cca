//! Results of a search

use hashbrown::HashMap;

/// A run of the searched sequence that matched a pattern, together with the
/// captures made while matching it. The elements are copies, so the match
/// stays valid whatever happens to the original sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match<E> {
  start: usize,
  elements: Vec<E>,
  variables: HashMap<String, E>,
  groups: HashMap<String, Vec<E>>,
}
impl<E> Match<E> {
  /// A match without captures. Useful for stitching matches obtained some
  /// other way, see [crate::replace_matches].
  pub fn new(start: usize, elements: Vec<E>) -> Self {
    Self::from_parts(start, elements, HashMap::new(), HashMap::new())
  }

  pub(crate) fn from_parts(
    start: usize,
    elements: Vec<E>,
    variables: HashMap<String, E>,
    groups: HashMap<String, Vec<E>>,
  ) -> Self {
    Self { start, elements, variables, groups }
  }

  /// Add a single-element capture
  #[must_use]
  pub fn with_variable(mut self, name: impl Into<String>, value: E) -> Self {
    self.variables.insert(name.into(), value);
    self
  }

  /// Add a subsequence capture
  #[must_use]
  pub fn with_group(mut self, name: impl Into<String>, value: Vec<E>) -> Self {
    self.groups.insert(name.into(), value);
    self
  }

  /// Index of the first matched element
  pub fn start(&self) -> usize { self.start }
  /// Index after the last matched element
  pub fn end(&self) -> usize { self.start + self.elements.len() }
  /// Number of matched elements
  pub fn len(&self) -> usize { self.elements.len() }
  /// Always false for matches returned by a search
  pub fn is_empty(&self) -> bool { self.elements.is_empty() }
  /// The matched elements
  pub fn elements(&self) -> &[E] { &self.elements }
  /// The element captured under the name by a single-element term
  pub fn variable(&self, name: &str) -> Option<&E> { self.variables.get(name) }
  /// The elements captured under the name by a group or quantifier
  pub fn group(&self, name: &str) -> Option<&[E]> {
    self.groups.get(name).map(Vec::as_slice)
  }
  /// All single-element captures
  pub fn variables(&self) -> &HashMap<String, E> { &self.variables }
  /// All subsequence captures
  pub fn groups(&self) -> &HashMap<String, Vec<E>> { &self.groups }
}
