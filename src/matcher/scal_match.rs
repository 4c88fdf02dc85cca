use super::shared::ScalMatcher;
use crate::error::EvalError;

/// Test a single element. `Or` and `And` stop at the first operand that
/// decides the outcome, so errors in the other operand stay hidden.
///
/// The names of the captures that fired are pushed to `names`. Nothing is
/// left there if the element is rejected, so captures under a `Not` never
/// bind.
pub(crate) fn scal_match<'a, E>(
  matcher: &'a ScalMatcher<E>,
  element: &E,
  names: &mut Vec<&'a str>,
) -> Result<bool, EvalError> {
  let mark = names.len();
  let matched = match matcher {
    ScalMatcher::Pred(pred) => pred.test(element)?,
    ScalMatcher::Or(a, b) =>
      scal_match(a, element, names)? || scal_match(b, element, names)?,
    ScalMatcher::And(a, b) =>
      scal_match(a, element, names)? && scal_match(b, element, names)?,
    ScalMatcher::Not(a) => !scal_match(a, element, names)?,
    ScalMatcher::Capture(name, a) => {
      let matched = scal_match(a, element, names)?;
      if matched {
        names.push(name);
      }
      matched
    },
  };
  if !matched {
    names.truncate(mark);
  }
  Ok(matched)
}

#[cfg(test)]
mod test {
  use super::scal_match;
  use crate::error::EvalError;
  use crate::matcher::ScalMatcher;
  use crate::predicate::Predicate;

  fn pred(p: Predicate<i32>) -> Box<ScalMatcher<i32>> {
    Box::new(ScalMatcher::Pred(p))
  }

  fn capture(name: &str, body: Box<ScalMatcher<i32>>) -> Box<ScalMatcher<i32>> {
    Box::new(ScalMatcher::Capture(name.to_string(), body))
  }

  #[test]
  fn test_logic() {
    let even = || pred(Predicate::new("even", |i: &i32| i % 2 == 0));
    let small = || pred(Predicate::new("small", |i: &i32| *i < 10));
    let even_and_small = ScalMatcher::And(even(), small());
    assert!(scal_match(&even_and_small, &4, &mut Vec::new()).unwrap());
    assert!(!scal_match(&even_and_small, &14, &mut Vec::new()).unwrap());
    let odd_or_small = ScalMatcher::Or(Box::new(ScalMatcher::Not(even())), small());
    assert!(scal_match(&odd_or_small, &3, &mut Vec::new()).unwrap());
    assert!(scal_match(&odd_or_small, &2, &mut Vec::new()).unwrap());
    assert!(!scal_match(&odd_or_small, &12, &mut Vec::new()).unwrap());
  }

  #[test]
  fn test_captured_operands() {
    let even = || pred(Predicate::new("even", |i: &i32| i % 2 == 0));
    let small = || pred(Predicate::new("small", |i: &i32| *i < 10));
    let either = ScalMatcher::Or(capture("even", even()), capture("small", small()));
    let mut names = Vec::new();
    assert!(scal_match(&either, &3, &mut names).unwrap());
    assert_eq!(names, ["small"]);
    names.clear();
    assert!(scal_match(&either, &4, &mut names).unwrap());
    assert_eq!(names, ["even"], "right side is never tested");
    let both = ScalMatcher::And(capture("even", even()), capture("small", small()));
    names.clear();
    assert!(!scal_match(&both, &14, &mut names).unwrap());
    assert!(names.is_empty(), "rejected elements bind nothing");
    let neither = ScalMatcher::Not(capture("even", even()));
    assert!(scal_match(&neither, &3, &mut names).unwrap());
    assert!(!scal_match(&neither, &4, &mut names).unwrap());
    assert!(names.is_empty());
  }

  #[test]
  fn test_errors_propagate() {
    let boom = || {
      pred(Predicate::fallible("boom", |_: &i32| Err(EvalError::new("bad"))))
    };
    let never = || pred(Predicate::new("never", |_: &i32| false));
    let guarded = ScalMatcher::And(never(), boom());
    assert!(!scal_match(&guarded, &1, &mut Vec::new()).unwrap(), "boom is never evaluated");
    let exposed = ScalMatcher::Or(never(), boom());
    let err = scal_match(&exposed, &1, &mut Vec::new()).unwrap_err();
    assert_eq!(err.to_string(), "Predicate boom failed: bad");
  }
}
