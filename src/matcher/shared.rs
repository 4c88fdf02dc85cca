use std::fmt::{self, Display};

use itertools::Itertools;

use crate::predicate::Predicate;

/// Tests a single element
pub(crate) enum ScalMatcher<E> {
  Pred(Predicate<E>),
  Or(Box<ScalMatcher<E>>, Box<ScalMatcher<E>>),
  And(Box<ScalMatcher<E>>, Box<ScalMatcher<E>>),
  Not(Box<ScalMatcher<E>>),
  /// Binds the element to the name if the body accepts it
  Capture(String, Box<ScalMatcher<E>>),
}

/// What a repetition does after every successful step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Lookahead {
  /// Keep going
  Greedy,
  /// Stop as soon as the leaf at this index of the flattened pattern
  /// accepts the next element. Degrades to [Lookahead::Greedy] if there is
  /// no such leaf.
  Lazy { next: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CaptureKind {
  /// The body consumes exactly one element, bind that
  Element,
  /// Bind the slice the body consumed
  Span,
}

pub(crate) enum AnyMatcher<E> {
  Scalar(ScalMatcher<E>),
  Group(Vec<AnyMatcher<E>>),
  Optional(Box<AnyMatcher<E>>),
  Repeat { body: Box<AnyMatcher<E>>, nonzero: bool, lookahead: Lookahead },
  Capture { name: String, body: Box<AnyMatcher<E>>, kind: CaptureKind },
}
impl<E> AnyMatcher<E> {
  /// Whether this can be skipped when the input runs out
  pub fn is_optional(&self) -> bool {
    match self {
      Self::Scalar(_) => false,
      Self::Optional(_) => true,
      Self::Repeat { nonzero, .. } => !nonzero,
      Self::Capture { body, .. } => body.is_optional(),
      Self::Group(children) => children.iter().all(Self::is_optional),
    }
  }

  /// The simplest test that decides whether this could start on an element,
  /// ignoring any quantifiers, captures or trailing group members
  pub fn head(&self) -> &ScalMatcher<E> {
    match self {
      Self::Scalar(scal) => scal,
      Self::Group(children) => children[0].head(),
      Self::Optional(body)
      | Self::Repeat { body, .. }
      | Self::Capture { body, .. } => body.head(),
    }
  }
}

impl<E> Clone for ScalMatcher<E> {
  fn clone(&self) -> Self {
    match self {
      Self::Pred(p) => Self::Pred(p.clone()),
      Self::Or(a, b) => Self::Or(a.clone(), b.clone()),
      Self::And(a, b) => Self::And(a.clone(), b.clone()),
      Self::Not(a) => Self::Not(a.clone()),
      Self::Capture(name, a) => Self::Capture(name.clone(), a.clone()),
    }
  }
}

impl<E> Clone for AnyMatcher<E> {
  fn clone(&self) -> Self {
    match self {
      Self::Scalar(scal) => Self::Scalar(scal.clone()),
      Self::Group(children) => Self::Group(children.clone()),
      Self::Optional(body) => Self::Optional(body.clone()),
      Self::Repeat { body, nonzero, lookahead } =>
        Self::Repeat { body: body.clone(), nonzero: *nonzero, lookahead: *lookahead },
      Self::Capture { name, body, kind } =>
        Self::Capture { name: name.clone(), body: body.clone(), kind: *kind },
    }
  }
}

// ################ Display ################

impl<E> Display for ScalMatcher<E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Pred(p) => write!(f, "{p}"),
      Self::Or(a, b) => write!(f, "{a} or {b}"),
      Self::And(a, b) => write!(f, "{a} and {b}"),
      Self::Not(a) => write!(f, "not [{a}]"),
      Self::Capture(name, a) => write!(f, "{name}=[{a}]"),
    }
  }
}

impl<E> Display for AnyMatcher<E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Scalar(s) => write!(f, "{s}"),
      Self::Group(children) => write!(f, "({})", children.iter().join(", ")),
      Self::Optional(body) => write!(f, "[{body}]?"),
      Self::Repeat { body, nonzero, lookahead } => {
        let count = if *nonzero { '+' } else { '*' };
        match lookahead {
          Lookahead::Greedy => write!(f, "[{body}]{count}"),
          Lookahead::Lazy { next } => write!(f, "[{body}]{count}?->#{next}"),
        }
      },
      Self::Capture { name, body, .. } => write!(f, "{name}=[{body}]"),
    }
  }
}
