use super::rep_match::rep_match;
use super::scal_match::scal_match;
use super::shared::{AnyMatcher, CaptureKind};
use crate::cursor::MatchCursor;
use crate::error::EvalError;

/// Try to consume a run matching `matcher` at the cursor. On failure the
/// cursor may be left anywhere past its starting point; the caller is
/// responsible for rewinding it.
pub(crate) fn any_match<'a, E>(
  matcher: &'a AnyMatcher<E>,
  cursor: &mut MatchCursor<'a, E>,
) -> Result<bool, EvalError> {
  match matcher {
    AnyMatcher::Scalar(scal) => {
      let Some(element) = cursor.peek() else { return Ok(false) };
      let mut names = Vec::new();
      if !scal_match(scal, element, &mut names)? {
        return Ok(false);
      }
      let pos = cursor.pos();
      for name in names {
        cursor.bind_element(name, pos);
      }
      cursor.advance();
      Ok(true)
    },
    AnyMatcher::Group(children) => seq_match(children, cursor),
    AnyMatcher::Optional(body) => {
      let mark = cursor.mark();
      if !any_match(body, cursor)? {
        cursor.reset(mark);
      }
      Ok(true)
    },
    AnyMatcher::Repeat { body, nonzero, lookahead } =>
      rep_match(body, *nonzero, *lookahead, cursor),
    AnyMatcher::Capture { name, body, kind } => {
      let start = cursor.pos();
      if !any_match(body, cursor)? {
        return Ok(false);
      }
      match kind {
        CaptureKind::Element => cursor.bind_element(name, start),
        CaptureKind::Span => cursor.bind_span(name, start, cursor.pos()),
      }
      Ok(true)
    },
  }
}

/// Consume one run per matcher, in order. Once the input runs out, the
/// remaining matchers are skipped if they are all optional.
pub(crate) fn seq_match<'a, E>(
  matchers: &'a [AnyMatcher<E>],
  cursor: &mut MatchCursor<'a, E>,
) -> Result<bool, EvalError> {
  for (i, matcher) in matchers.iter().enumerate() {
    if cursor.exhausted() {
      return Ok(matchers[i..].iter().all(AnyMatcher::is_optional));
    }
    if !any_match(matcher, cursor)? {
      return Ok(false);
    }
  }
  Ok(true)
}
