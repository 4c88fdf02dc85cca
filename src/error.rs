//! Errors raised while building a pattern and while evaluating predicates
//! against elements.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// A pattern or predicate could not be constructed. These are always raised
/// before any element is inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
  /// A pattern must contain at least one term
  EmptyPattern,
  /// A group must contain at least one term
  EmptyGroup,
  /// The captured term cannot report an unambiguous span
  UnsupportedCapture {
    /// Name the capture would have bound
    name: String,
    /// Description of the rejected term
    term: String,
  },
  /// A logical combinator was given an operand that may consume other than
  /// exactly one element
  NotSingleElement {
    /// Description of the rejected operand
    term: String,
  },
  /// A property predicate referenced a property the element type doesn't
  /// have
  UnknownProperty {
    /// Name of the element type in the property table
    type_name: String,
    /// The missing property
    property: String,
  },
  /// A property predicate was given a regex that doesn't compile
  BadRegex {
    /// The offending source
    pattern: String,
    /// Message from the regex compiler
    message: String,
  },
}
impl PatternError {
  /// A general description of this type of error
  #[must_use]
  pub fn description(&self) -> &'static str {
    match self {
      Self::EmptyPattern => "Pattern must not be empty",
      Self::EmptyGroup => "Group must not be empty",
      Self::UnsupportedCapture { .. } => "Term cannot be captured",
      Self::NotSingleElement { .. } =>
        "Logical combinators only accept single-element operands",
      Self::UnknownProperty { .. } => "Property not found",
      Self::BadRegex { .. } => "Invalid regular expression",
    }
  }
}
impl fmt::Display for PatternError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let description = self.description();
    match self {
      Self::EmptyPattern | Self::EmptyGroup => write!(f, "{description}"),
      Self::UnsupportedCapture { name, term } =>
        write!(f, "{description}: {term} as {name:?}"),
      Self::NotSingleElement { term } => write!(f, "{description}: {term}"),
      Self::UnknownProperty { type_name, property } =>
        write!(f, "{description}: {type_name}.{property}"),
      Self::BadRegex { pattern, message } =>
        write!(f, "{description} {pattern:?}: {message}"),
    }
  }
}
impl Error for PatternError {}

/// A predicate failed while testing an element. This aborts the whole
/// search that was running it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalError {
  /// Description of the predicate that failed, if known
  pub predicate: Option<Arc<String>>,
  /// What went wrong
  pub message: Arc<String>,
}
impl EvalError {
  /// Create an error not yet attributed to a predicate
  pub fn new(message: impl Into<String>) -> Self {
    Self { predicate: None, message: Arc::new(message.into()) }
  }
  /// Attribute the error to a predicate unless it already is
  #[must_use]
  pub fn in_predicate(self, description: &Arc<String>) -> Self {
    let predicate = self.predicate.or_else(|| Some(description.clone()));
    Self { predicate, ..self }
  }
}
impl fmt::Display for EvalError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.predicate {
      Some(pred) => write!(f, "Predicate {pred} failed: {}", self.message),
      None => write!(f, "Predicate failed: {}", self.message),
    }
  }
}
impl Error for EvalError {}

#[cfg(test)]
mod test {
  use std::sync::Arc;

  use super::{EvalError, PatternError};

  #[test]
  fn test_display() {
    let err = PatternError::UnsupportedCapture {
      name: "x".to_string(),
      term: "[== a]?".to_string(),
    };
    assert_eq!(err.to_string(), "Term cannot be captured: [== a]? as \"x\"");
    assert_eq!(PatternError::EmptyPattern.to_string(), "Pattern must not be empty");
  }

  #[test]
  fn test_attribution() {
    let first = Arc::new("first".to_string());
    let second = Arc::new("second".to_string());
    let err = EvalError::new("boom").in_predicate(&first).in_predicate(&second);
    assert_eq!(err.predicate, Some(first), "innermost predicate wins");
    assert_eq!(err.to_string(), "Predicate first failed: boom");
  }
}
