//! Predicates over named properties of an element.
//!
//! Elements expose their properties through a [Properties] table, which maps
//! each property name to an accessor. Predicates are then built by name, and
//! a name missing from the table is reported when the predicate is built
//! rather than when it first runs.

use std::fmt::{self, Display};
use std::sync::Arc;

use hashbrown::{HashMap, HashSet};
use itertools::Itertools;
use ordered_float::OrderedFloat;
use regex::Regex;
use trait_set::trait_set;

use crate::error::{EvalError, PatternError};
use crate::predicate::Predicate;

/// The value of a property
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PropValue {
  /// Text, the only kind regexes apply to
  Str(String),
  /// An integer
  Int(i64),
  /// A float. Compared bit-for-bit after normalizing NaN, so it can key sets
  Float(OrderedFloat<f64>),
  /// A flag
  Bool(bool),
  /// Absent value
  Null,
}

impl From<&str> for PropValue {
  fn from(value: &str) -> Self { Self::Str(value.to_string()) }
}
impl From<String> for PropValue {
  fn from(value: String) -> Self { Self::Str(value) }
}
impl From<i64> for PropValue {
  fn from(value: i64) -> Self { Self::Int(value) }
}
impl From<f64> for PropValue {
  fn from(value: f64) -> Self { Self::Float(OrderedFloat(value)) }
}
impl From<bool> for PropValue {
  fn from(value: bool) -> Self { Self::Bool(value) }
}
impl<T: Into<PropValue>> From<Option<T>> for PropValue {
  fn from(value: Option<T>) -> Self { value.map_or(Self::Null, T::into) }
}

impl Display for PropValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Str(s) => write!(f, "{s:?}"),
      Self::Int(i) => write!(f, "{i}"),
      Self::Float(n) => write!(f, "{n}"),
      Self::Bool(b) => write!(f, "{b}"),
      Self::Null => write!(f, "null"),
    }
  }
}

trait_set! {
  /// Reads one property of an element
  pub trait Accessor<E> = Fn(&E) -> PropValue + Send + Sync;
}

/// The named properties of an element type
pub struct Properties<E> {
  type_name: Arc<String>,
  accessors: HashMap<String, Arc<dyn Accessor<E>>>,
}
impl<E: 'static> Properties<E> {
  /// An empty table. The type name only appears in descriptions and errors.
  pub fn new(type_name: impl Into<String>) -> Self {
    Self { type_name: Arc::new(type_name.into()), accessors: HashMap::new() }
  }

  /// Register a property, replacing any earlier one with the same name
  #[must_use]
  pub fn with(
    mut self,
    name: impl Into<String>,
    accessor: impl Fn(&E) -> PropValue + Send + Sync + 'static,
  ) -> Self {
    self.accessors.insert(name.into(), Arc::new(accessor));
    self
  }

  fn accessor(&self, name: &str) -> Result<Arc<dyn Accessor<E>>, PatternError> {
    self.accessors.get(name).cloned().ok_or_else(|| {
      PatternError::UnknownProperty {
        type_name: self.type_name.to_string(),
        property: name.to_string(),
      }
    })
  }

  /// Read a property of an element
  pub fn get(&self, element: &E, name: &str) -> Result<PropValue, PatternError> {
    Ok((self.accessor(name)?)(element))
  }

  /// Matches elements whose property equals the value
  pub fn eq(
    &self,
    name: &str,
    value: impl Into<PropValue>,
  ) -> Result<Predicate<E>, PatternError> {
    let accessor = self.accessor(name)?;
    let value = value.into();
    let description = format!("{}.{name} == {value}", self.type_name);
    Ok(Predicate::new(description, move |e: &E| accessor(e) == value))
  }

  /// Matches elements whose property is a string and matches the regex in
  /// its entirety. Applying it to a property of another kind is an error.
  pub fn regex(
    &self,
    name: &str,
    pattern: &str,
  ) -> Result<Predicate<E>, PatternError> {
    let accessor = self.accessor(name)?;
    let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(|e| {
      PatternError::BadRegex { pattern: pattern.to_string(), message: e.to_string() }
    })?;
    let description = format!("{}.{name} =~ {pattern}", self.type_name);
    let property = format!("{}.{name}", self.type_name);
    Ok(Predicate::fallible(description, move |e: &E| match accessor(e) {
      PropValue::Str(s) => Ok(regex.is_match(&s)),
      other => Err(EvalError::new(format!("{property} is {other}, not a string"))),
    }))
  }

  /// Matches elements whose property is one of the values
  pub fn one_of<V: Into<PropValue>>(
    &self,
    name: &str,
    values: impl IntoIterator<Item = V>,
  ) -> Result<Predicate<E>, PatternError> {
    let accessor = self.accessor(name)?;
    let values = values.into_iter().map(|v| v.into()).collect::<Vec<PropValue>>();
    let description =
      format!("{}.{name} in [{}]", self.type_name, values.iter().join(", "));
    let set = values.into_iter().collect::<HashSet<_>>();
    Ok(Predicate::new(description, move |e: &E| set.contains(&accessor(e))))
  }
}

impl<E> Clone for Properties<E> {
  fn clone(&self) -> Self {
    Self { type_name: self.type_name.clone(), accessors: self.accessors.clone() }
  }
}

#[cfg(test)]
mod test {
  use super::{PropValue, Properties};
  use crate::error::PatternError;

  struct Token {
    text: &'static str,
    len: Option<i64>,
  }

  fn props() -> Properties<Token> {
    Properties::new("Token")
      .with("text", |t: &Token| PropValue::from(t.text))
      .with("len", |t: &Token| PropValue::from(t.len))
  }

  #[test]
  fn test_eq_and_one_of() {
    let tok = Token { text: "NNS", len: Some(3) };
    let eq = props().eq("len", 3_i64).unwrap();
    assert_eq!(eq.description(), "Token.len == 3");
    assert!(eq.test(&tok).unwrap());
    let one_of = props().one_of("text", ["NN", "NNS"]).unwrap();
    assert_eq!(one_of.description(), "Token.text in [\"NN\", \"NNS\"]");
    assert!(one_of.test(&tok).unwrap());
    let unknown = Token { text: "?", len: None };
    assert!(props().eq("len", None::<i64>).unwrap().test(&unknown).unwrap());
  }

  #[test]
  fn test_regex_matches_whole_value() {
    let noun = props().regex("text", "NN[PS]{0,2}").unwrap();
    assert!(noun.test(&Token { text: "NNPS", len: None }).unwrap());
    assert!(!noun.test(&Token { text: "xNN", len: None }).unwrap());
    assert!(!noun.test(&Token { text: "NNx", len: None }).unwrap());
    let err = props().regex("len", ".*").unwrap().test(&Token { text: "", len: Some(1) });
    assert_eq!(
      err.unwrap_err().to_string(),
      "Predicate Token.len =~ .* failed: Token.len is 1, not a string"
    );
  }

  #[test]
  fn test_get() {
    let tok = Token { text: "NNS", len: None };
    assert_eq!(props().get(&tok, "text"), Ok(PropValue::from("NNS")));
    assert_eq!(props().get(&tok, "len"), Ok(PropValue::Null));
    assert!(matches!(props().get(&tok, "lemma"), Err(PatternError::UnknownProperty { .. })));
  }

  #[test]
  fn test_construction_errors() {
    assert_eq!(
      props().eq("lemma", "be").err(),
      Some(PatternError::UnknownProperty {
        type_name: "Token".to_string(),
        property: "lemma".to_string()
      })
    );
    assert!(matches!(props().regex("text", "(NN"), Err(PatternError::BadRegex { .. })));
  }
}
