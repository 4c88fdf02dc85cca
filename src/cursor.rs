//! Mutable state of a single search

use hashbrown::HashMap;

use crate::matched::Match;
use crate::matcher::ScalMatcher;

/// What a capture recorded, as indices into the searched sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Binding {
  Element(usize),
  Span(usize, usize),
}

/// A point the cursor can be rewound to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Mark {
  pub pos: usize,
  bindings: usize,
}

/// Read position, bindings and results of one `find` call. Every attempt
/// starts with [MatchCursor::begin], which forgets the bindings of the
/// previous attempt, but accepted matches accumulate until the cursor is
/// consumed.
pub(crate) struct MatchCursor<'a, E> {
  seq: &'a [E],
  leaves: &'a [ScalMatcher<E>],
  start: usize,
  pos: usize,
  bindings: Vec<(&'a str, Binding)>,
  matches: Vec<Match<E>>,
}
impl<'a, E> MatchCursor<'a, E> {
  pub fn new(seq: &'a [E], leaves: &'a [ScalMatcher<E>]) -> Self {
    Self { seq, leaves, start: 0, pos: 0, bindings: Vec::new(), matches: Vec::new() }
  }

  /// Start a new attempt
  pub fn begin(&mut self, start: usize) {
    self.start = start;
    self.pos = start;
    self.bindings.clear();
  }

  pub fn start(&self) -> usize { self.start }
  pub fn pos(&self) -> usize { self.pos }
  pub fn exhausted(&self) -> bool { self.seq.len() <= self.pos }
  pub fn peek(&self) -> Option<&'a E> { self.seq.get(self.pos) }
  pub fn peek_at(&self, pos: usize) -> Option<&'a E> { self.seq.get(pos) }
  pub fn advance(&mut self) { self.pos += 1 }

  pub fn mark(&self) -> Mark { Mark { pos: self.pos, bindings: self.bindings.len() } }

  /// Rewind position and bindings
  pub fn reset(&mut self, mark: Mark) {
    self.pos = mark.pos;
    self.bindings.truncate(mark.bindings);
  }

  /// Leaf of the flattened pattern at the index, if any
  pub fn leaf(&self, i: usize) -> Option<&'a ScalMatcher<E>> { self.leaves.get(i) }

  pub fn bind_element(&mut self, name: &'a str, pos: usize) {
    self.bindings.push((name, Binding::Element(pos)))
  }

  pub fn bind_span(&mut self, name: &'a str, start: usize, end: usize) {
    self.bindings.push((name, Binding::Span(start, end)))
  }

  pub fn matches(&self) -> &[Match<E>] { &self.matches }
  pub fn into_matches(self) -> Vec<Match<E>> { self.matches }
}

impl<'a, E: Clone> MatchCursor<'a, E> {
  /// Variables and groups bound during the current attempt. A name bound
  /// several times refers to the latest binding.
  pub fn snapshot(&self) -> (HashMap<String, E>, HashMap<String, Vec<E>>) {
    let mut variables = HashMap::new();
    let mut groups = HashMap::new();
    for (name, binding) in self.bindings.iter() {
      match *binding {
        Binding::Element(i) => {
          groups.remove(*name);
          variables.insert(name.to_string(), self.seq[i].clone());
        },
        Binding::Span(start, end) => {
          variables.remove(*name);
          groups.insert(name.to_string(), self.seq[start..end].to_vec());
        },
      }
    }
    (variables, groups)
  }

  /// Record the current attempt as a match. Empty attempts are rejected.
  pub fn accept(&mut self) -> bool {
    if self.pos == self.start {
      return false;
    }
    let (variables, groups) = self.snapshot();
    let elements = self.seq[self.start..self.pos].to_vec();
    self.matches.push(Match::from_parts(self.start, elements, variables, groups));
    true
  }
}
