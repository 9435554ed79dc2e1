use std::{fmt, iter, ops::Range};

use regex_automata::Span;

/// A single non-overlapping occurrence of a pattern in a haystack.
///
/// Offsets are byte offsets into the haystack.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Match<'h> {
    haystack: &'h str,
    span: Span,
}

impl<'h> Match<'h> {
    pub(crate) fn new(haystack: &'h str, span: Span) -> Match<'h> {
        Match { haystack, span }
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.span.start
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.span.end
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.span.start..self.span.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.span.end - self.span.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.start >= self.span.end
    }

    /// The matched text.
    ///
    /// Follows `str` slicing rules: panics if an offset falls inside a
    /// multi-byte character, which can only happen for a zero-width match
    /// produced under a non-default NFA configuration.
    #[inline]
    pub fn as_str(&self) -> &'h str {
        &self.haystack[self.range()]
    }

    /// The matched bytes. Never panics.
    #[inline]
    pub fn as_bytes(&self) -> &'h [u8] {
        &self.haystack.as_bytes()[self.range()]
    }
}

impl fmt::Debug for Match<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Match")
            .field("start", &self.start())
            .field("end", &self.end())
            .field("text", &self.as_str())
            .finish()
    }
}

/// The group offsets of a single match.
///
/// Group 0 is the whole match and is always present. A group that did not
/// participate in the match is `None`, and that sentinel is preserved through
/// every derived form, since an empty string is a valid zero-width match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Captures {
    whole: Span,
    groups: Vec<Option<Span>>,
}

impl Captures {
    pub(crate) fn new(whole: Span, groups: Vec<Option<Span>>) -> Captures {
        Captures { whole, groups }
    }

    /// A match with only group 0 populated. Used when submatches were not
    /// requested.
    pub(crate) fn from_span(whole: Span, group_len: usize) -> Captures {
        Captures {
            whole,
            groups: vec![None; group_len.saturating_sub(1)],
        }
    }

    /// The span of the whole match.
    #[inline]
    pub fn span(&self) -> Span {
        self.whole
    }

    /// Total number of groups, including group 0.
    #[inline]
    pub fn group_len(&self) -> usize {
        self.groups.len() + 1
    }

    /// The span of group `i`, or `None` if the group did not participate in
    /// this match. `get(0)` always returns `Some`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<Span> {
        match i {
            0 => Some(self.whole),
            _ => *self.groups.get(i - 1)?,
        }
    }

    /// Group spans in order, group 0 first.
    pub fn iter(&self) -> impl Iterator<Item = Option<Span>> + '_ {
        iter::once(Some(self.whole)).chain(self.groups.iter().copied())
    }

    /// Flat `start, end` offset pairs, group 0 first, `-1, -1` for a group
    /// that did not participate.
    pub fn to_index(&self) -> Vec<isize> {
        let mut index = Vec::with_capacity(2 * self.group_len());
        for span in self.iter() {
            match span {
                Some(span) => {
                    index.extend([span.start as isize, span.end as isize])
                }
                None => index.extend([-1, -1]),
            }
        }
        index
    }

    /// The text of every group, sliced from `haystack` with the same spans
    /// [`to_index`](Self::to_index) reports.
    pub fn texts<'h>(&self, haystack: &'h str) -> Vec<Option<&'h str>> {
        self.iter()
            .map(|span| span.map(|span| &haystack[span]))
            .collect()
    }
}
