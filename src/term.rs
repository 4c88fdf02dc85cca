//! The combinator tree patterns are written in

use std::fmt::{self, Display};

use itertools::Itertools;

use crate::predicate::Predicate;

/// How many elements a quantifier prefers to consume
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Greed {
  /// As many as possible
  Greedy,
  /// As few as possible while the next term could still match
  Lazy,
}

/// A node of a pattern
pub enum Term<E> {
  /// Consumes exactly one element that satisfies the predicate
  Literal(Predicate<E>),
  /// Consumes one element that satisfies either operand
  Or(Box<Term<E>>, Box<Term<E>>),
  /// Consumes one element that satisfies both operands
  And(Box<Term<E>>, Box<Term<E>>),
  /// Consumes one element that doesn't satisfy the operand
  Not(Box<Term<E>>),
  /// Consumes one run per child, in order
  Group(Vec<Term<E>>),
  /// Consumes the body if it matches, nothing otherwise
  Optional(Box<Term<E>>),
  /// Consumes consecutive repetitions of the body
  Repeat {
    /// The repeated term
    body: Box<Term<E>>,
    /// Whether at least one repetition is required
    nonzero: bool,
    /// How many repetitions to prefer
    greed: Greed,
  },
  /// Records what the body consumed under a name
  Capture(String, Box<Term<E>>),
}
impl<E> Term<E> {
  /// Consume one element satisfying the predicate
  pub fn lit(pred: Predicate<E>) -> Self { Self::Literal(pred) }

  /// Consume one run per term, in order
  pub fn group(terms: impl IntoIterator<Item = Term<E>>) -> Self {
    Self::Group(terms.into_iter().collect())
  }

  /// Consume one element satisfying either term
  #[must_use]
  pub fn or(self, other: impl Into<Term<E>>) -> Self {
    Self::Or(Box::new(self), Box::new(other.into()))
  }

  /// Consume one element satisfying both terms
  #[must_use]
  pub fn and(self, other: impl Into<Term<E>>) -> Self {
    Self::And(Box::new(self), Box::new(other.into()))
  }

  /// Consume one element not satisfying this term
  #[must_use]
  pub fn invert(self) -> Self { Self::Not(Box::new(self)) }

  /// Match this term or nothing
  #[must_use]
  pub fn optional(self) -> Self { Self::Optional(Box::new(self)) }

  /// `+?`, one or more repetitions, yielding to the term that follows
  #[must_use]
  pub fn one_or_more(self) -> Self { self.repeat(true, Greed::Lazy) }

  /// `*?`, any number of repetitions, yielding to the term that follows
  #[must_use]
  pub fn zero_or_more(self) -> Self { self.repeat(false, Greed::Lazy) }

  /// `+`, the longest run of one or more repetitions
  #[must_use]
  pub fn one_or_more_greedy(self) -> Self { self.repeat(true, Greed::Greedy) }

  /// `*`, the longest run of repetitions, possibly none
  #[must_use]
  pub fn zero_or_more_greedy(self) -> Self {
    self.repeat(false, Greed::Greedy)
  }

  fn repeat(self, nonzero: bool, greed: Greed) -> Self {
    Self::Repeat { body: Box::new(self), nonzero, greed }
  }

  /// Bind whatever this term consumes to the name. Single-element terms bind
  /// a variable, groups and quantifiers bind a group.
  #[must_use]
  pub fn capture_as(self, name: impl Into<String>) -> Self {
    Self::Capture(name.into(), Box::new(self))
  }

  /// Whether the term may legitimately consume no elements, so that it can
  /// be skipped at the end of the input
  #[must_use]
  pub fn is_optional(&self) -> bool {
    match self {
      Self::Literal(_) | Self::Or(..) | Self::And(..) | Self::Not(_) => false,
      Self::Optional(_) => true,
      Self::Repeat { nonzero, .. } => !nonzero,
      Self::Capture(_, body) => body.is_optional(),
      Self::Group(children) => children.iter().all(Self::is_optional),
    }
  }

  /// Whether the term always consumes exactly one element
  #[must_use]
  pub fn is_single(&self) -> bool {
    match self {
      Self::Literal(_) | Self::Or(..) | Self::And(..) | Self::Not(_) => true,
      Self::Capture(_, body) => body.is_single(),
      Self::Group(_) | Self::Optional(_) | Self::Repeat { .. } => false,
    }
  }
}

impl<E> From<Predicate<E>> for Term<E> {
  fn from(value: Predicate<E>) -> Self { Self::Literal(value) }
}

impl<E> Clone for Term<E> {
  fn clone(&self) -> Self {
    match self {
      Self::Literal(p) => Self::Literal(p.clone()),
      Self::Or(a, b) => Self::Or(a.clone(), b.clone()),
      Self::And(a, b) => Self::And(a.clone(), b.clone()),
      Self::Not(a) => Self::Not(a.clone()),
      Self::Group(children) => Self::Group(children.clone()),
      Self::Optional(body) => Self::Optional(body.clone()),
      Self::Repeat { body, nonzero, greed } =>
        Self::Repeat { body: body.clone(), nonzero: *nonzero, greed: *greed },
      Self::Capture(name, body) => Self::Capture(name.clone(), body.clone()),
    }
  }
}

impl<E> Display for Term<E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Literal(p) => write!(f, "{p}"),
      Self::Or(a, b) => write!(f, "{a} or {b}"),
      Self::And(a, b) => write!(f, "{a} and {b}"),
      Self::Not(a) => write!(f, "not [{a}]"),
      Self::Group(children) => write!(f, "({})", children.iter().join(", ")),
      Self::Optional(body) => write!(f, "[{body}]?"),
      Self::Repeat { body, nonzero, greed } => {
        let count = if *nonzero { '+' } else { '*' };
        let lazy = if *greed == Greed::Lazy { "?" } else { "" };
        write!(f, "[{body}]{count}{lazy}")
      },
      Self::Capture(name, body) => write!(f, "{name}=[{body}]"),
    }
  }
}

impl<E> fmt::Debug for Term<E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Term({self})")
  }
}
