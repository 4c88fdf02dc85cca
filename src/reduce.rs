//! Predicates applied to whole sequences. Evaluation stops as soon as the
//! outcome is known, so errors past that point are never raised.

use itertools::process_results;

use crate::error::EvalError;
use crate::predicate::Predicate;

impl<E> Predicate<E> {
  /// Whether every element matches. True for an empty sequence.
  pub fn all(&self, seq: &[E]) -> Result<bool, EvalError> {
    process_results(seq.iter().map(|e| self.test(e)), |mut results| results.all(|b| b))
  }

  /// Whether at least one element matches. False for an empty sequence.
  pub fn any(&self, seq: &[E]) -> Result<bool, EvalError> {
    process_results(seq.iter().map(|e| self.test(e)), |mut results| results.any(|b| b))
  }

  /// Whether no element matches. True for an empty sequence.
  pub fn none(&self, seq: &[E]) -> Result<bool, EvalError> { Ok(!self.any(seq)?) }
}

#[cfg(test)]
mod test {
  use crate::error::EvalError;
  use crate::predicate::Predicate;

  #[test]
  fn test_reducers() {
    let star = Predicate::eq("*");
    assert!(star.all(&["*", "*", "*"]).unwrap());
    assert!(!star.all(&["*", "*", "1"]).unwrap());
    assert!(star.any(&["1", "1", "*"]).unwrap());
    assert!(star.none(&["1", "1", "1"]).unwrap());
    assert!(!star.none(&["*", "*", "1"]).unwrap());
  }

  #[test]
  fn test_empty() {
    let star = Predicate::eq("*");
    assert!(star.all(&[]).unwrap());
    assert!(!star.any(&[]).unwrap());
    assert!(star.none(&[]).unwrap());
  }

  #[test]
  fn test_stops_early() {
    let checked = Predicate::fallible("checked", |s: &&str| match *s {
      "?" => Err(EvalError::new("unknown")),
      s => Ok(s == "*"),
    });
    assert!(!checked.all(&["1", "?"]).unwrap());
    assert!(checked.any(&["*", "?"]).unwrap());
    assert!(checked.all(&["*", "?"]).is_err());
  }
}
