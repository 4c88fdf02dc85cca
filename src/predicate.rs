//! Single-element tests, the atoms every pattern is built from.

use std::fmt::{self, Debug, Display};
use std::hash::Hash;
use std::sync::Arc;

use hashbrown::HashSet;
use itertools::Itertools;
use trait_set::trait_set;

use crate::error::EvalError;

trait_set! {
  /// The stored form of every predicate: a pure test on a single element
  /// which is allowed to fail
  pub trait PredFn<E> = Fn(&E) -> Result<bool, EvalError> + Send + Sync;
}

/// A named, pure test on a single element. Cloning is cheap; clones share
/// the same closure.
pub struct Predicate<E> {
  test: Arc<dyn PredFn<E>>,
  description: Arc<String>,
}
impl<E> Predicate<E> {
  /// Wrap an infallible test
  pub fn new(
    description: impl Display,
    test: impl Fn(&E) -> bool + Send + Sync + 'static,
  ) -> Self {
    Self::fallible(description, move |e: &E| Ok(test(e)))
  }

  /// Wrap a test that can fail. An error raised here aborts any search that
  /// reaches it.
  pub fn fallible(
    description: impl Display,
    test: impl Fn(&E) -> Result<bool, EvalError> + Send + Sync + 'static,
  ) -> Self {
    Self { test: Arc::new(test), description: Arc::new(description.to_string()) }
  }

  /// Matches every element
  pub fn anything() -> Self { Self::new(".", |_: &E| true) }

  /// Run the test
  pub fn test(&self, element: &E) -> Result<bool, EvalError> {
    (self.test)(element).map_err(|e| e.in_predicate(&self.description))
  }

  /// Printable form of the test
  pub fn description(&self) -> &str { &self.description }

  /// Matches if either test matches, trying `self` first
  #[must_use]
  pub fn or(self, other: Self) -> Self
  where E: 'static {
    let description = format!("{self} or {other}");
    Self::fallible(description, move |e: &E| {
      Ok(self.test(e)? || other.test(e)?)
    })
  }

  /// Matches if both tests match, trying `self` first
  #[must_use]
  pub fn and(self, other: Self) -> Self
  where E: 'static {
    let description = format!("{self} and {other}");
    Self::fallible(description, move |e: &E| {
      Ok(self.test(e)? && other.test(e)?)
    })
  }

  /// Matches exactly the elements this doesn't
  #[must_use]
  pub fn invert(self) -> Self
  where E: 'static {
    let description = format!("not [{self}]");
    Self::fallible(description, move |e: &E| Ok(!self.test(e)?))
  }
}

impl<E: PartialEq + Debug + Send + Sync + 'static> Predicate<E> {
  /// Matches elements equal to the value
  pub fn eq(value: E) -> Self {
    Self::new(format!("== {value:?}"), move |e: &E| *e == value)
  }
}

impl<E: Hash + Eq + Debug + Send + Sync + 'static> Predicate<E> {
  /// Matches elements contained in the collection
  pub fn one_of(values: impl IntoIterator<Item = E>) -> Self {
    let values = values.into_iter().collect::<Vec<_>>();
    let description = format!("in [{}]", values.iter().map(|v| format!("{v:?}")).join(", "));
    let set = values.into_iter().collect::<HashSet<_>>();
    Self::new(description, move |e: &E| set.contains(e))
  }
}

impl<T: Send + Sync + 'static> Predicate<Option<T>> {
  /// Matches absent elements
  pub fn is_none() -> Self { Self::new("== None", |e: &Option<T>| e.is_none()) }
}

impl<E> Clone for Predicate<E> {
  fn clone(&self) -> Self {
    Self { test: self.test.clone(), description: self.description.clone() }
  }
}

impl<E> Display for Predicate<E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.description)
  }
}

impl<E> Debug for Predicate<E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Predicate({})", self.description)
  }
}

#[cfg(test)]
mod test {
  use super::Predicate;
  use crate::error::EvalError;

  #[test]
  fn test_builtins() {
    let comma = Predicate::eq(",");
    assert!(comma.test(&",").unwrap());
    assert!(!comma.test(&"x").unwrap());
    let ids = Predicate::one_of(["E", "p", "λ"]);
    assert!(ids.test(&"λ").unwrap());
    assert!(!ids.test(&"is").unwrap());
    assert_eq!(ids.description(), "in [\"E\", \"p\", \"λ\"]");
    assert!(Predicate::<&str>::anything().test(&"whatever").unwrap());
    assert!(Predicate::<Option<u8>>::is_none().test(&None).unwrap());
    assert!(!Predicate::<Option<u8>>::is_none().test(&Some(1)).unwrap());
  }

  #[test]
  fn test_combinators() {
    let e_or_l = Predicate::eq("E").or(Predicate::eq("λ"));
    assert_eq!(e_or_l.to_string(), "== \"E\" or == \"λ\"");
    assert!(e_or_l.test(&"λ").unwrap());
    let short = Predicate::new("short", |s: &&str| s.chars().count() == 1);
    let short_not_e = short.and(Predicate::eq("E").invert());
    assert!(short_not_e.test(&"λ").unwrap());
    assert!(!short_not_e.test(&"E").unwrap());
    assert!(!short_not_e.test(&"is").unwrap());
  }

  #[test]
  fn test_short_circuit() {
    let boom = Predicate::fallible("boom", |_: &&str| Err(EvalError::new("no")));
    let either = Predicate::eq("a").or(boom.clone());
    assert!(either.test(&"a").unwrap(), "right side is never reached");
    let err = either.test(&"b").unwrap_err();
    assert_eq!(err.predicate.as_deref().map(String::as_str), Some("boom"));
    assert!(boom.invert().test(&"a").is_err());
  }
}
