use super::any_match::any_match;
use super::scal_match::scal_match;
use super::shared::{AnyMatcher, Lookahead};
use crate::cursor::MatchCursor;
use crate::error::EvalError;

/// Consume repetitions of `body`. The first repetition decides whether the
/// quantifier matches at all; after that a greedy quantifier continues while
/// the body matches, and a lazy one also stops on the first element the
/// following leaf would accept.
///
/// Consumption is never revisited: if a later matcher fails because of
/// what was taken here, the attempt fails.
pub(crate) fn rep_match<'a, E>(
  body: &'a AnyMatcher<E>,
  nonzero: bool,
  lookahead: Lookahead,
  cursor: &mut MatchCursor<'a, E>,
) -> Result<bool, EvalError> {
  let first = cursor.mark();
  if !any_match(body, cursor)? {
    cursor.reset(first);
    return Ok(!nonzero);
  }
  let next = match lookahead {
    Lookahead::Greedy => None,
    Lookahead::Lazy { next } => cursor.leaf(next),
  };
  while !cursor.exhausted() {
    let mark = cursor.mark();
    let candidate = mark.pos;
    if !any_match(body, cursor)? || cursor.pos() == candidate {
      cursor.reset(mark);
      break;
    }
    if let (Some(next), Some(element)) = (next, cursor.peek_at(candidate)) {
      // only tested, the leaf binds when it actually matches
      if scal_match(next, element, &mut Vec::new())? {
        cursor.reset(mark);
        break;
      }
    }
  }
  Ok(true)
}

#[cfg(test)]
mod test {
  use crate::cursor::MatchCursor;
  use crate::matcher::{mk_pattern, seq_match};
  use crate::predicate::Predicate;
  use crate::term::Term;

  fn tok(s: &'static str) -> Term<&'static str> { Predicate::eq(s).into() }

  /// Run the terms once at the start of the input and report how far they
  /// got
  fn consumed(terms: &[Term<&'static str>], input: &[&'static str]) -> Option<usize> {
    let (matchers, leaves) = mk_pattern(terms).unwrap();
    let mut cursor = MatchCursor::new(input, &leaves);
    cursor.begin(0);
    seq_match(&matchers, &mut cursor).unwrap().then(|| cursor.pos())
  }

  #[test]
  fn test_greedy_takes_everything() {
    let any = Term::lit(Predicate::anything());
    let input = ["a", "b", "c", "b"];
    assert_eq!(consumed(&[any.clone().one_or_more_greedy()], &input), Some(4));
    assert_eq!(consumed(&[any.one_or_more_greedy(), tok("b")], &input), None);
  }

  #[test]
  fn test_lazy_yields_to_next_leaf() {
    let any = Term::lit(Predicate::anything());
    let input = ["a", "b", "c", "b"];
    assert_eq!(consumed(&[any.clone().one_or_more(), tok("b")], &input), Some(2));
    assert_eq!(consumed(&[any.clone().zero_or_more(), tok("b")], &input), Some(2));
    assert_eq!(consumed(&[any.one_or_more()], &input), Some(4), "no next leaf");
  }

  #[test]
  fn test_zero_repetitions() {
    let input = ["x", "y"];
    assert_eq!(consumed(&[tok("a").zero_or_more_greedy(), tok("x")], &input), Some(1));
    assert_eq!(consumed(&[tok("a").one_or_more_greedy(), tok("x")], &input), None);
  }

  #[test]
  fn test_empty_body_terminates() {
    let input = ["x", "x"];
    let body = Term::group([tok("a").optional()]);
    assert_eq!(consumed(&[body.zero_or_more_greedy(), tok("x")], &input), Some(1));
  }
}
