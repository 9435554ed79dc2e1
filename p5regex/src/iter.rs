use std::iter::FusedIterator;

use regex_automata::MatchError;

use crate::{
    engine::{BacktrackEngine, Matcher},
    matches::{Captures, Match},
};

/// An iterator over successive non-overlapping matches.
///
/// The next search starts at the end of the previous match, or one character
/// further when the match was empty, so the scan always makes progress and
/// finishes within `haystack.len() + 1` searches. An empty match directly
/// after a non-empty one is reported, the way Perl and JavaScript global
/// matching behaves, except at the very end of the haystack where the scan
/// stops instead: `a*` over `"baaab"` yields `(0, 0)`, `(1, 4)`, `(4, 4)` and
/// `(5, 5)`, while `.*` over `"abcdef"` yields `(0, 6)` alone.
///
/// A [`Matcher`] failure is yielded once as an `Err` and ends the iteration;
/// no search is retried.
pub struct TryMatches<'m, 'h, M> {
    matcher: &'m M,
    haystack: &'h [u8],
    /// Offset the next search starts at; past `haystack.len()` means done.
    at: usize,
    want_submatches: bool,
    done: bool,
}

impl<'m, 'h, M: Matcher> TryMatches<'m, 'h, M> {
    pub fn new(
        matcher: &'m M,
        haystack: &'h [u8],
        want_submatches: bool,
    ) -> TryMatches<'m, 'h, M> {
        TryMatches { matcher, haystack, at: 0, want_submatches, done: false }
    }
}

impl<M: Matcher> Iterator for TryMatches<'_, '_, M> {
    type Item = Result<Captures, MatchError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.at > self.haystack.len() {
            return None;
        }
        let caps = match self.matcher.search(
            self.haystack,
            self.at,
            self.want_submatches,
        ) {
            Ok(Some(caps)) => caps,
            Ok(None) => {
                self.done = true;
                return None;
            }
            Err(err) => {
                self.done = true;
                return Some(Err(err));
            }
        };
        let span = caps.span();
        if span.is_empty() {
            // Step over one character, not one byte, so the next search
            // starts on a UTF-8 boundary.
            let mut next = span.end + 1;
            while next < self.haystack.len()
                && is_utf8_continuation(self.haystack[next])
            {
                next += 1;
            }
            self.at = next;
        } else {
            self.at = span.end;
            // The only match left after a non-empty match flush against the
            // end of the haystack would be the empty one at `at`, which is
            // not reported there.
            if self.at == self.haystack.len() {
                self.done = true;
            }
        }
        Some(Ok(caps))
    }
}

impl<M: Matcher> FusedIterator for TryMatches<'_, '_, M> {}

#[inline]
fn is_utf8_continuation(byte: u8) -> bool {
    byte & 0b1100_0000 == 0b1000_0000
}

/// Yielded by [`Regex::try_find_iter`](crate::Regex::try_find_iter). Same
/// semantics as [`TryMatches`], projected to whole-match [`Match`] values.
pub struct TryFindMatches<'r, 'h> {
    haystack: &'h str,
    it: TryMatches<'r, 'h, BacktrackEngine>,
}

impl<'r, 'h> TryFindMatches<'r, 'h> {
    pub(crate) fn new(
        engine: &'r BacktrackEngine,
        haystack: &'h str,
    ) -> TryFindMatches<'r, 'h> {
        TryFindMatches {
            haystack,
            it: TryMatches::new(engine, haystack.as_bytes(), false),
        }
    }
}

impl<'h> Iterator for TryFindMatches<'_, 'h> {
    type Item = Result<Match<'h>, MatchError>;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = self.it.next()?;
        Some(caps.map(|caps| Match::new(self.haystack, caps.span())))
    }
}

impl FusedIterator for TryFindMatches<'_, '_> {}

/// Yielded by [`Regex::try_captures_iter`](crate::Regex::try_captures_iter).
/// Same semantics as [`TryMatches`], with every group span populated.
pub struct TryCapturesMatches<'r, 'h> {
    it: TryMatches<'r, 'h, BacktrackEngine>,
}

impl<'r, 'h> TryCapturesMatches<'r, 'h> {
    pub(crate) fn new(
        engine: &'r BacktrackEngine,
        haystack: &'h str,
    ) -> TryCapturesMatches<'r, 'h> {
        TryCapturesMatches {
            it: TryMatches::new(engine, haystack.as_bytes(), true),
        }
    }
}

impl Iterator for TryCapturesMatches<'_, '_> {
    type Item = Result<Captures, MatchError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.it.next()
    }
}

impl FusedIterator for TryCapturesMatches<'_, '_> {}
