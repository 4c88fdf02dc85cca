//! Splicing replacements into a sequence

use std::borrow::Cow;

use crate::matched::Match;

/// Replace each match with the output of the transform, keeping everything
/// between the matches. If there are no matches, the input is borrowed.
///
/// # Panics
///
/// if the matches are out of order, overlap, or extend past the end of
/// `seq`. Matches returned by a single search never do.
pub fn replace_matches<'s, E: Clone, I: IntoIterator<Item = E>>(
  seq: &'s [E],
  matches: &[Match<E>],
  mut transform: impl FnMut(&Match<E>) -> I,
) -> Cow<'s, [E]> {
  if matches.is_empty() {
    return Cow::Borrowed(seq);
  }
  let mut output = Vec::with_capacity(seq.len());
  let mut last_end = 0;
  for m in matches {
    output.extend_from_slice(&seq[last_end..m.start()]);
    output.extend(transform(m));
    last_end = m.end();
  }
  output.extend_from_slice(&seq[last_end..]);
  Cow::Owned(output)
}
