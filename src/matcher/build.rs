use super::shared::{AnyMatcher, CaptureKind, Lookahead, ScalMatcher};
use crate::error::PatternError;
use crate::term::{Greed, Term};

/// The compiled pattern and its flattened leaves
pub(crate) type Compiled<E> = (Vec<AnyMatcher<E>>, Vec<ScalMatcher<E>>);

/// Validate the terms and compile them. Alongside the matchers, returns the
/// head of every leaf in depth-first order, which lazy quantifiers consult to
/// decide when to stop.
pub(crate) fn mk_pattern<E>(
  terms: &[Term<E>],
) -> Result<Compiled<E>, PatternError> {
  if terms.is_empty() {
    return Err(PatternError::EmptyPattern);
  }
  let mut leaves = Vec::new();
  let matchers = terms
    .iter()
    .map(|term| mk_any(term, &mut leaves))
    .collect::<Result<Vec<_>, _>>()?;
  Ok((matchers, leaves))
}

/// Whether the flattening descends into this term instead of treating it as
/// a leaf
fn is_transparent<E>(term: &Term<E>) -> bool {
  match term {
    Term::Group(_) => true,
    Term::Capture(_, body) | Term::Optional(body) => is_transparent(body),
    _ => false,
  }
}

/// Compile a term at a level the flattening reaches
fn mk_any<E>(
  term: &Term<E>,
  leaves: &mut Vec<ScalMatcher<E>>,
) -> Result<AnyMatcher<E>, PatternError> {
  match term {
    Term::Group(children) => {
      if children.is_empty() {
        return Err(PatternError::EmptyGroup);
      }
      let children = children
        .iter()
        .map(|child| mk_any(child, leaves))
        .collect::<Result<Vec<_>, _>>()?;
      Ok(AnyMatcher::Group(children))
    },
    Term::Capture(name, body) if is_transparent(body) => {
      let kind = capture_kind(name, body)?;
      let body = Box::new(mk_any(body, leaves)?);
      Ok(AnyMatcher::Capture { name: name.clone(), body, kind })
    },
    Term::Optional(body) if is_transparent(body) =>
      Ok(AnyMatcher::Optional(Box::new(mk_any(body, leaves)?))),
    _ => {
      // this leaf is about to be pushed at leaves.len()
      let matcher = mk_leaf(term, leaves.len() + 1)?;
      leaves.push(matcher.head().clone());
      Ok(matcher)
    },
  }
}

/// Compile a term below the level of the flattening. Lazy quantifiers in
/// here yield to the leaf at `next`.
fn mk_leaf<E>(
  term: &Term<E>,
  next: usize,
) -> Result<AnyMatcher<E>, PatternError> {
  match term {
    Term::Literal(_) | Term::Or(..) | Term::And(..) | Term::Not(_) =>
      Ok(AnyMatcher::Scalar(mk_scalar(term)?)),
    Term::Group(children) => {
      if children.is_empty() {
        return Err(PatternError::EmptyGroup);
      }
      let children = children
        .iter()
        .map(|child| mk_leaf(child, next))
        .collect::<Result<Vec<_>, _>>()?;
      Ok(AnyMatcher::Group(children))
    },
    Term::Optional(body) =>
      Ok(AnyMatcher::Optional(Box::new(mk_leaf(body, next)?))),
    Term::Repeat { body, nonzero, greed } => {
      let lookahead = match greed {
        Greed::Greedy => Lookahead::Greedy,
        Greed::Lazy => Lookahead::Lazy { next },
      };
      let body = Box::new(mk_leaf(body, next)?);
      Ok(AnyMatcher::Repeat { body, nonzero: *nonzero, lookahead })
    },
    Term::Capture(name, body) => {
      let kind = capture_kind(name, body)?;
      let body = Box::new(mk_leaf(body, next)?);
      Ok(AnyMatcher::Capture { name: name.clone(), body, kind })
    },
  }
}

/// Decide what a capture binds. An optional term may or may not have
/// consumed the element it was offered, so it has no well-defined span.
fn capture_kind<E>(
  name: &str,
  body: &Term<E>,
) -> Result<CaptureKind, PatternError> {
  match body {
    Term::Literal(_) | Term::Or(..) | Term::And(..) | Term::Not(_) =>
      Ok(CaptureKind::Element),
    Term::Group(_) | Term::Repeat { .. } => Ok(CaptureKind::Span),
    Term::Capture(_, inner) => capture_kind(name, inner),
    Term::Optional(_) => Err(PatternError::UnsupportedCapture {
      name: name.to_string(),
      term: body.to_string(),
    }),
  }
}

/// Term MUST be a single-element term
fn mk_scalar<E>(term: &Term<E>) -> Result<ScalMatcher<E>, PatternError> {
  Ok(match term {
    Term::Literal(p) => ScalMatcher::Pred(p.clone()),
    Term::Or(a, b) =>
      ScalMatcher::Or(Box::new(mk_operand(a)?), Box::new(mk_operand(b)?)),
    Term::And(a, b) =>
      ScalMatcher::And(Box::new(mk_operand(a)?), Box::new(mk_operand(b)?)),
    Term::Not(a) => ScalMatcher::Not(Box::new(mk_operand(a)?)),
    Term::Capture(name, body) =>
      ScalMatcher::Capture(name.clone(), Box::new(mk_operand(body)?)),
    _ => return Err(PatternError::NotSingleElement { term: term.to_string() }),
  })
}

fn mk_operand<E>(term: &Term<E>) -> Result<ScalMatcher<E>, PatternError> {
  if !term.is_single() {
    return Err(PatternError::NotSingleElement { term: term.to_string() });
  }
  mk_scalar(term)
}

#[cfg(test)]
mod test {
  use itertools::Itertools;

  use super::mk_pattern;
  use crate::error::PatternError;
  use crate::predicate::Predicate;
  use crate::term::Term;

  fn tok(s: &'static str) -> Term<&'static str> { Predicate::eq(s).into() }

  fn show(terms: &[Term<&'static str>]) -> (String, String) {
    let (matchers, leaves) = mk_pattern(terms).unwrap();
    (matchers.iter().join(" "), leaves.iter().join(" | "))
  }

  #[test]
  fn test_flattening_sees_past_groups() {
    let (matchers, leaves) = show(&[
      tok("is"),
      Term::group([tok("the").optional(), tok(".").invert().one_or_more()])
        .capture_as("noun"),
      tok("."),
    ]);
    assert_eq!(
      matchers,
      "== \"is\" noun=[([== \"the\"]?, [not [== \".\"]]+?->#3)] == \".\""
    );
    assert_eq!(leaves, "== \"is\" | == \"the\" | not [== \".\"] | == \".\"");
  }

  #[test]
  fn test_nested_lazy_yields_past_enclosing_leaf() {
    let inner = Term::group([tok("a"), tok("b").zero_or_more()]);
    let (matchers, leaves) = show(&[inner.one_or_more_greedy(), tok("c")]);
    assert_eq!(matchers, "[(== \"a\", [== \"b\"]*?->#1)]+ == \"c\"");
    assert_eq!(leaves, "== \"a\" | == \"c\"");
  }

  #[test]
  fn test_last_lazy_has_no_successor() {
    let (matchers, leaves) = show(&[tok("a"), tok(",").zero_or_more()]);
    assert_eq!(matchers, "== \"a\" [== \",\"]*?->#2");
    assert_eq!(leaves.split(" | ").count(), 2, "index 2 is out of range");
  }

  #[test]
  fn test_captured_operand() {
    let (matchers, leaves) = show(&[tok("a").capture_as("x").or(tok("b")), tok("c")]);
    assert_eq!(matchers, "x=[== \"a\"] or == \"b\" == \"c\"");
    assert_eq!(leaves, "x=[== \"a\"] or == \"b\" | == \"c\"");
    assert!(matches!(
      mk_pattern(&[tok("a").one_or_more().capture_as("x").or(tok("b"))]),
      Err(PatternError::NotSingleElement { .. })
    ));
  }

  #[test]
  fn test_errors() {
    assert_eq!(mk_pattern::<&str>(&[]).err(), Some(PatternError::EmptyPattern));
    assert_eq!(
      mk_pattern(&[tok("a"), Term::group([])]).err(),
      Some(PatternError::EmptyGroup)
    );
    assert_eq!(
      mk_pattern(&[tok("a").optional().capture_as("x")]).err(),
      Some(PatternError::UnsupportedCapture {
        name: "x".to_string(),
        term: "[== \"a\"]?".to_string()
      })
    );
    assert!(matches!(
      mk_pattern(&[tok("a").or(tok("b").one_or_more())]),
      Err(PatternError::NotSingleElement { .. })
    ));
    assert!(matches!(
      mk_pattern(&[Term::group([tok("a")]).invert()]),
      Err(PatternError::NotSingleElement { .. })
    ));
  }
}
