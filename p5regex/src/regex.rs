use std::fmt;

use bon::bon;
use itertools::Itertools;
use regex_automata::{
    nfa::thompson::{
        self,
        backtrack::{self, BoundedBacktracker},
    },
    util::syntax,
    MatchError, Span,
};

use crate::{
    engine::{BacktrackEngine, Matcher},
    iter::{TryCapturesMatches, TryFindMatches, TryMatches},
    matches::Match,
    template::Template,
    BuildError,
};

/// A compiled regular expression with Perl/JavaScript iteration semantics.
///
/// A `Regex` can test whether a haystack matches, report the offsets and text
/// of every non-overlapping match and of every capture group, and replace
/// matches with a template. Searching is unanchored; use `^`, `$`, `\A` or
/// `\z` in the pattern to anchor it.
///
/// # Example
///
/// ```
/// use p5regex::Regex;
///
/// let re = Regex::new(r"[0-9]{4}-[0-9]{2}-[0-9]{2}")?;
/// assert!(re.is_match("due 2010-03-14"));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Iteration semantics
///
/// Unlike [`regex`](https://docs.rs/regex/) and RE2, an empty match directly
/// after a non-empty one is reported, the way Perl and JavaScript global
/// matching behaves; see [the crate docs](crate#iteration-semantics).
///
/// # Failure policy
///
/// The engine bounds the work a single search may do and reports a
/// [`MatchError`] when the bound is exceeded, so every find operation returns
/// a `Result`. [`is_match`](Regex::is_match) and [`replace`](Regex::replace)
/// absorb the error instead and degrade to `false` and the unchanged input.
///
/// # Synchronization and cloning
///
/// A `Regex` is immutable once built and can be used from any number of
/// threads simultaneously (`Send + Sync`). Searches pluck a scratch cache
/// from an internal thread safe pool; under heavy cross-thread use of one
/// `Regex` value on short haystacks that pool can become a point of
/// contention, which cloning avoids: a clone shares the read-only compiled
/// pattern but gets a fresh pool.
#[derive(Clone)]
pub struct Regex {
    engine: BacktrackEngine,
    pattern: Box<str>,
}

#[bon]
impl Regex {
    /// Compiles a regular expression with the default configuration.
    pub fn new(pattern: &str) -> Result<Regex, BuildError> {
        Self::builder().build(pattern)
    }

    /// Compiles a regular expression, panicking if it is invalid.
    ///
    /// Only for patterns known at build time; compile anything else with
    /// [`Regex::new`].
    ///
    /// # Panics
    ///
    /// When the pattern cannot be compiled.
    pub fn must_compile(pattern: &str) -> Regex {
        match Regex::new(pattern) {
            Ok(re) => re,
            Err(err) => {
                panic!("failed to compile regex {pattern:?}: {err}")
            }
        }
    }

    /// Return a builder for configuring the construction of a `Regex`.
    ///
    /// # Example
    ///
    /// ```
    /// use p5regex::{syntax, Regex};
    ///
    /// let re = Regex::builder()
    ///     .syntax(syntax::Config::new().case_insensitive(true))
    ///     .build("abc")?;
    /// assert!(re.is_match("ABC"));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[builder(builder_type = Builder, finish_fn(name = build))]
    pub fn builder(
        #[builder(field)] syntax: syntax::Config,
        #[builder(finish_fn)] pattern: &str,
        /// Thompson NFA configuration. Defaults to `utf8(false)`: offsets are
        /// plain byte offsets and an empty match may fall between the bytes
        /// of one codepoint.
        #[builder(default = thompson::Config::new().utf8(false))]
        thompson: thompson::Config,
        /// Backtracking engine configuration. `visited_capacity` bounds the
        /// work a single search may do; exceeding it surfaces as a
        /// [`MatchError`].
        #[builder(default)]
        backtrack: backtrack::Config,
    ) -> Result<Regex, BuildError> {
        let re = BoundedBacktracker::builder()
            .syntax(syntax)
            .thompson(thompson)
            .configure(backtrack)
            .build(pattern)?;
        Ok(Regex {
            engine: BacktrackEngine::new(re),
            pattern: pattern.into(),
        })
    }
}

impl<S: builder::State> Builder<'_, S> {
    /// Configure the syntax options used when parsing the pattern:
    /// case-insensitivity, multi-line mode, and so on.
    pub fn syntax(mut self, syntax: syntax::Config) -> Self {
        self.syntax = syntax;
        self
    }
}

/// High level convenience routines for searching a haystack.
///
/// Every `find_all` style routine takes the same match-count limit: `-1`
/// means every match, `0` none, `n > 0` at most `n`.
impl Regex {
    /// Returns true if the regex matches somewhere in `haystack`.
    ///
    /// Never fails: an engine error yields `false`. Use
    /// [`try_is_match`](Regex::try_is_match) to observe the error instead.
    ///
    /// # Example
    ///
    /// ```
    /// use p5regex::Regex;
    ///
    /// let re = Regex::new("foo[0-9]+bar")?;
    /// assert!(re.is_match("foo12345bar"));
    /// assert!(!re.is_match("foobar"));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[inline]
    pub fn is_match(&self, haystack: &str) -> bool {
        self.try_is_match(haystack).unwrap_or(false)
    }

    /// Fallible form of [`is_match`](Regex::is_match).
    pub fn try_is_match(&self, haystack: &str) -> Result<bool, MatchError> {
        Ok(self.engine.search(haystack.as_bytes(), 0, false)?.is_some())
    }

    /// The first match, or `None` if the regex does not match.
    ///
    /// # Example
    ///
    /// ```
    /// use p5regex::Regex;
    ///
    /// let re = Regex::new("foo[0-9]+")?;
    /// let m = re.find("foo12345")?.unwrap();
    /// assert_eq!((m.start(), m.end(), m.as_str()), (0, 8, "foo12345"));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn find<'h>(
        &self,
        haystack: &'h str,
    ) -> Result<Option<Match<'h>>, MatchError> {
        Ok(self
            .engine
            .search(haystack.as_bytes(), 0, false)?
            .map(|caps| Match::new(haystack, caps.span())))
    }

    /// Byte offsets of the first match.
    pub fn find_index(
        &self,
        haystack: &str,
    ) -> Result<Option<Span>, MatchError> {
        Ok(self.find(haystack)?.map(|m| m.span()))
    }

    /// The text of every group of the first match, group 0 first; `None`
    /// marks a group that did not participate.
    pub fn find_submatch<'h>(
        &self,
        haystack: &'h str,
    ) -> Result<Option<Vec<Option<&'h str>>>, MatchError> {
        Ok(self
            .engine
            .search(haystack.as_bytes(), 0, true)?
            .map(|caps| caps.texts(haystack)))
    }

    /// Group offsets of the first match as flat `start, end` pairs, `-1, -1`
    /// for a group that did not participate.
    ///
    /// # Example
    ///
    /// ```
    /// use p5regex::Regex;
    ///
    /// let re = Regex::new(r"(a)(x)?b")?;
    /// assert_eq!(
    ///     re.find_submatch_index("cab")?,
    ///     Some(vec![1, 3, 1, 2, -1, -1]),
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn find_submatch_index(
        &self,
        haystack: &str,
    ) -> Result<Option<Vec<isize>>, MatchError> {
        Ok(self
            .engine
            .search(haystack.as_bytes(), 0, true)?
            .map(|caps| caps.to_index()))
    }

    /// Iterator over every non-overlapping match. See [`TryMatches`] for the
    /// iteration semantics.
    ///
    /// [`TryMatches`]: crate::TryMatches
    pub fn try_find_iter<'r, 'h>(
        &'r self,
        haystack: &'h str,
    ) -> TryFindMatches<'r, 'h> {
        TryFindMatches::new(&self.engine, haystack)
    }

    /// Iterator over the group offsets of every non-overlapping match.
    pub fn try_captures_iter<'r, 'h>(
        &'r self,
        haystack: &'h str,
    ) -> TryCapturesMatches<'r, 'h> {
        TryCapturesMatches::new(&self.engine, haystack)
    }

    /// At most `limit` matches, in order.
    pub fn find_all<'h>(
        &self,
        haystack: &'h str,
        limit: isize,
    ) -> Result<Vec<Match<'h>>, MatchError> {
        self.try_find_iter(haystack).take(take_len(limit)).try_collect()
    }

    /// Byte offsets of at most `limit` matches.
    pub fn find_all_index(
        &self,
        haystack: &str,
        limit: isize,
    ) -> Result<Vec<Span>, MatchError> {
        self.try_find_iter(haystack)
            .take(take_len(limit))
            .map_ok(|m| m.span())
            .try_collect()
    }

    /// The matched bytes of at most `limit` matches.
    pub fn find_all_bytes<'h>(
        &self,
        haystack: &'h str,
        limit: isize,
    ) -> Result<Vec<&'h [u8]>, MatchError> {
        self.try_find_iter(haystack)
            .take(take_len(limit))
            .map_ok(|m| m.as_bytes())
            .try_collect()
    }

    /// Group texts of at most `limit` matches; `None` marks a group that did
    /// not participate.
    pub fn find_all_submatch<'h>(
        &self,
        haystack: &'h str,
        limit: isize,
    ) -> Result<Vec<Vec<Option<&'h str>>>, MatchError> {
        self.try_captures_iter(haystack)
            .take(take_len(limit))
            .map_ok(|caps| caps.texts(haystack))
            .try_collect()
    }

    /// Group offsets of at most `limit` matches, each as flat `start, end`
    /// pairs with `-1, -1` sentinels.
    ///
    /// # Example
    ///
    /// ```
    /// use p5regex::Regex;
    ///
    /// let re = Regex::new("a(b*)")?;
    /// assert_eq!(
    ///     re.find_all_submatch_index("abbaab", -1)?,
    ///     vec![
    ///         vec![0, 3, 1, 3],
    ///         vec![3, 4, 4, 4],
    ///         vec![4, 6, 5, 6],
    ///     ],
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn find_all_submatch_index(
        &self,
        haystack: &str,
        limit: isize,
    ) -> Result<Vec<Vec<isize>>, MatchError> {
        self.try_captures_iter(haystack)
            .take(take_len(limit))
            .map_ok(|caps| caps.to_index())
            .try_collect()
    }
}

/// Replacement routines.
impl Regex {
    /// Replaces up to `limit` matches (`-1` for all) with `template`.
    ///
    /// `$N` and `${N}` in the template substitute the text of capture group
    /// `N` (`$0` is the whole match); `$$` is a literal `$`. A group that did
    /// not participate in a match substitutes the empty string.
    ///
    /// Never fails: on an engine error the input is returned unchanged, never
    /// a partially replaced string. Use [`try_replace`](Regex::try_replace)
    /// to observe the error instead.
    ///
    /// # Example
    ///
    /// ```
    /// use p5regex::Regex;
    ///
    /// let re = Regex::new(r"(\w+)@(\w+)")?;
    /// assert_eq!(re.replace("mail a@b c@d", "$2.$1", 1), "mail b.a c@d");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn replace(
        &self,
        haystack: &str,
        template: &str,
        limit: isize,
    ) -> String {
        self.try_replace(haystack, template, limit)
            .unwrap_or_else(|_| haystack.to_owned())
    }

    /// Replaces every match. Equivalent to
    /// [`replace(haystack, template, -1)`](Regex::replace).
    pub fn replace_all(&self, haystack: &str, template: &str) -> String {
        self.replace(haystack, template, -1)
    }

    /// Fallible form of [`replace`](Regex::replace).
    ///
    /// The unmatched spans of the input reappear untouched and in order
    /// around the expanded templates.
    pub fn try_replace(
        &self,
        haystack: &str,
        template: &str,
        limit: isize,
    ) -> Result<String, MatchError> {
        let template = Template::parse(template);
        let mut dst = String::with_capacity(haystack.len());
        let mut last = 0;
        let it = self
            .try_captures_iter_impl(haystack, template.needs_submatches())
            .take(take_len(limit));
        for caps in it {
            let caps = caps?;
            let span = caps.span();
            dst.push_str(&haystack[last..span.start]);
            template.expand(&caps, haystack, &mut dst);
            last = span.end;
        }
        dst.push_str(&haystack[last..]);
        Ok(dst)
    }

    fn try_captures_iter_impl<'r, 'h>(
        &'r self,
        haystack: &'h str,
        want_submatches: bool,
    ) -> TryMatches<'r, 'h, BacktrackEngine> {
        TryMatches::new(&self.engine, haystack.as_bytes(), want_submatches)
    }
}

/// Pattern properties.
impl Regex {
    /// The pattern string this regex was compiled from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Number of capture groups, including the implicit group 0 for the
    /// whole match.
    pub fn group_len(&self) -> usize {
        self.engine.group_len()
    }
}

impl fmt::Debug for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Regex").field(&self.pattern).finish()
    }
}

/// Uniform match-count limit: `-1` unbounded, `0` none, `n > 0` at most `n`.
fn take_len(limit: isize) -> usize {
    if limit < 0 {
        usize::MAX
    } else {
        limit as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Case = (&'static str, &'static str, Option<Vec<Vec<isize>>>);

    /// Builds `n` matches from a flat list of `x.len() / n` offsets each.
    fn build(n: usize, x: &[isize]) -> Option<Vec<Vec<isize>>> {
        assert!(n > 0 && x.len() % n == 0);
        Some(x.chunks(x.len() / n).map(<[isize]>::to_vec).collect())
    }

    /// For each pattern/haystack pair, the expected output of
    /// `find_all_submatch_index`. The single, index-only and textual results
    /// are derived from it, so the table only records the one form.
    fn cases() -> Vec<Case> {
        let mut cases: Vec<Case> = vec![
            ("", "", build(1, &[0, 0])),
            ("^abcdefg", "abcdefg", build(1, &[0, 7])),
            ("a+", "baaab", build(1, &[1, 4])),
            ("abcd..", "abcdef", build(1, &[0, 6])),
            ("a", "a", build(1, &[0, 1])),
            ("x", "y", None),
            ("b", "abc", build(1, &[1, 2])),
            (".", "a", build(1, &[0, 1])),
            (".*", "abcdef", build(1, &[0, 6])),
            ("^", "abcde", build(1, &[0, 0])),
            ("$", "abcde", build(1, &[5, 5])),
            ("^abcd$", "abcd", build(1, &[0, 4])),
            ("^bcd'", "abcdef", None),
            ("^abcd$", "abcde", None),
            ("a*", "baaab", build(4, &[0, 0, 1, 4, 4, 4, 5, 5])),
            ("[a-z]+", "abcd", build(1, &[0, 4])),
            ("[^a-z]+", "ab1234cd", build(1, &[2, 6])),
            (r"[a\-\]z]+", "az]-bcz", build(2, &[0, 4, 6, 7])),
            (r"[^\n]+", "abcd\n", build(1, &[0, 4])),
            ("()", "", build(1, &[0, 0, 0, 0])),
            ("(a)", "a", build(1, &[0, 1, 0, 1])),
            ("(.)(.)", "ba", build(1, &[0, 2, 0, 1, 1, 2])),
            ("(.*)", "", build(1, &[0, 0, 0, 0])),
            ("(.*)", "abcd", build(1, &[0, 4, 0, 4])),
            ("(..)(..)", "abcd", build(1, &[0, 4, 0, 2, 2, 4])),
            (
                "(([^xyz]*)(d))",
                "abcd",
                build(1, &[0, 4, 0, 4, 0, 3, 3, 4]),
            ),
            (
                "((a|b|c)*(d))",
                "abcd",
                build(1, &[0, 4, 0, 4, 2, 3, 3, 4]),
            ),
            (
                "(((a|b|c)*)(d))",
                "abcd",
                build(1, &[0, 4, 0, 4, 0, 3, 2, 3, 3, 4]),
            ),
            (
                r"\a\f\n\r\t\v",
                "\x07\x0C\n\r\t\x0B",
                build(1, &[0, 6]),
            ),
            (
                r"[\a\f\n\r\t\v]+",
                "\x07\x0C\n\r\t\x0B",
                build(1, &[0, 6]),
            ),
            ("a*(|(b))c*", "aacc", build(1, &[0, 4, 2, 2, -1, -1])),
            ("(.*).*", "ab", build(1, &[0, 2, 0, 2])),
            ("[.]", ".", build(1, &[0, 1])),
            ("/$", "/abc/", build(1, &[4, 5])),
            ("/$", "/abc", None),
            // multiple matches
            (".", "abc", build(3, &[0, 1, 1, 2, 2, 3])),
            (
                "(.)",
                "abc",
                build(3, &[0, 1, 0, 1, 1, 2, 1, 2, 2, 3, 2, 3]),
            ),
            (".(.)", "abcd", build(2, &[0, 2, 1, 2, 2, 4, 3, 4])),
            ("ab*", "abbaab", build(3, &[0, 3, 3, 4, 4, 6])),
            (
                "a(b*)",
                "abbaab",
                build(3, &[0, 3, 1, 3, 3, 4, 4, 4, 4, 6, 5, 6]),
            ),
            // anchors mid-haystack
            ("ab$", "cab", build(1, &[1, 3])),
            ("axxb$", "axxcb", None),
            ("data", "daXY data", build(1, &[5, 9])),
            ("da(.)a$", "daXY data", build(1, &[5, 9, 7, 8])),
            ("zx+", "zzx", build(1, &[1, 3])),
            ("ab$", "abcab", build(1, &[3, 5])),
            ("(aa)*$", "a", build(1, &[1, 1, -1, -1])),
            ("(?:.|(?:.a))", "", None),
            ("(?:A(?:A|a))", "Aa", build(1, &[0, 2])),
            ("(?:A|(?:A|a))", "a", build(1, &[0, 1])),
            (r"(?-s)(?:(?:^).)", "\n", None),
            (r"(?s)(?:(?:^).)", "\n", build(1, &[0, 1])),
            (r"(?:(?:^).)", "\n", None),
            (r"\b", "x", build(2, &[0, 0, 1, 1])),
            (r"\b", "xx", build(2, &[0, 0, 2, 2])),
            (r"\b", "x y", build(4, &[0, 0, 1, 1, 2, 2, 3, 3])),
            (r"\b", "xx yy", build(4, &[0, 0, 2, 2, 3, 3, 5, 5])),
            (r"\B", "x", None),
            (r"\B", "xx", build(1, &[1, 1])),
            (r"\B", "x y", None),
            (r"\B", "xx yy", build(2, &[1, 1, 4, 4])),
            (r"(?i)\W", "x", None),
            (r"(?i)\W", "k", None),
            (r"(?i)\W", "s", None),
            // can backslash-escape any punctuation
            (r"\`", "`", build(1, &[0, 1])),
            (r"[\`]+", "`", build(1, &[0, 1])),
        ];
        // long set of matches
        let alphanum = "qwertyuiopasdfghjklzxcvbnm1234567890";
        let long: Vec<isize> = (0..alphanum.len() as isize)
            .flat_map(|i| [i, i + 1])
            .collect();
        cases.push((".", alphanum, build(36, &long)));
        cases
    }

    #[test]
    fn find_all_submatch_index_table() {
        for (pattern, haystack, want) in cases() {
            let re = Regex::must_compile(pattern);
            let got = re.find_all_submatch_index(haystack, -1).unwrap();
            assert_eq!(
                got,
                want.unwrap_or_default(),
                "pattern {pattern:?} over {haystack:?}",
            );
        }
    }

    #[test]
    fn find_all_index_table() {
        for (pattern, haystack, want) in cases() {
            let re = Regex::must_compile(pattern);
            let got = re.find_all_index(haystack, -1).unwrap();
            let want: Vec<Span> = want
                .unwrap_or_default()
                .iter()
                .map(|m| Span { start: m[0] as usize, end: m[1] as usize })
                .collect();
            assert_eq!(got, want, "pattern {pattern:?} over {haystack:?}");
        }
    }

    #[test]
    fn find_all_table() {
        for (pattern, haystack, want) in cases() {
            let re = Regex::must_compile(pattern);
            let got = re.find_all(haystack, -1).unwrap();
            let want = want.unwrap_or_default();
            assert_eq!(
                got.len(),
                want.len(),
                "pattern {pattern:?} over {haystack:?}",
            );
            for (m, w) in got.iter().zip(&want) {
                let expected = &haystack[w[0] as usize..w[1] as usize];
                assert_eq!(
                    m.as_str(),
                    expected,
                    "pattern {pattern:?} over {haystack:?}",
                );
                assert_eq!(m.as_bytes(), expected.as_bytes());
            }
        }
    }

    #[test]
    fn find_submatch_index_table() {
        for (pattern, haystack, want) in cases() {
            let re = Regex::must_compile(pattern);
            let got = re.find_submatch_index(haystack).unwrap();
            let want = want.and_then(|w| w.into_iter().next());
            assert_eq!(got, want, "pattern {pattern:?} over {haystack:?}");
        }
    }

    #[test]
    fn find_index_table() {
        for (pattern, haystack, want) in cases() {
            let re = Regex::must_compile(pattern);
            let got = re.find_index(haystack).unwrap();
            let want = want
                .and_then(|w| w.into_iter().next())
                .map(|m| Span { start: m[0] as usize, end: m[1] as usize });
            assert_eq!(got, want, "pattern {pattern:?} over {haystack:?}");
        }
    }

    #[test]
    fn is_match_table() {
        for (pattern, haystack, want) in cases() {
            let re = Regex::must_compile(pattern);
            assert_eq!(
                re.is_match(haystack),
                want.is_some(),
                "pattern {pattern:?} over {haystack:?}",
            );
        }
    }

    #[test]
    fn find_submatch_sentinels_are_none() {
        let re = Regex::must_compile("a*(|(b))c*");
        assert_eq!(
            re.find_submatch("aacc").unwrap(),
            Some(vec![Some("aacc"), Some(""), None]),
        );
        assert_eq!(Regex::must_compile("x").find_submatch("abc").unwrap(), None);
    }

    #[test]
    fn find_all_limit() {
        let re = Regex::must_compile(".");
        assert_eq!(re.find_all("abc", -1).unwrap().len(), 3);
        assert_eq!(re.find_all("abc", 0).unwrap().len(), 0);
        assert_eq!(re.find_all("abc", 2).unwrap().len(), 2);
        assert_eq!(re.find_all("abc", 5).unwrap().len(), 3);
    }

    #[test]
    fn replace() {
        let re = Regex::must_compile("a+");
        assert_eq!(re.replace_all("baaab", "x"), "bxb");
        assert_eq!(re.replace("baaab", "x", 0), "baaab");

        let re = Regex::must_compile("a(b*)");
        assert_eq!(re.replace_all("abbaab", "[$1]"), "[bb][][b]");
        assert_eq!(re.replace("abbaab", "[$1]", 1), "[bb]aab");

        // Empty matches replace like JavaScript's `"baaab".replace(/a*/g, "-")`.
        let re = Regex::must_compile("a*");
        assert_eq!(re.replace_all("baaab", "-"), "-b--b-");
    }

    #[test]
    fn replace_template_markers() {
        let re = Regex::must_compile(r"(\w+)@(\w+)");
        assert_eq!(re.replace_all("a@b", "$2.$1"), "b.a");
        assert_eq!(re.replace_all("a@b", "${2}.${1}"), "b.a");
        assert_eq!(re.replace_all("a@b", "$$$1"), "$a");
        assert_eq!(re.replace_all("a@b", "$9"), "");
        assert_eq!(re.replace_all("a@b", "$"), "$");
    }

    #[test]
    fn engine_failure_is_absorbed() {
        let re = Regex::builder()
            .backtrack(backtrack::Config::new().visited_capacity(64))
            .build("a+")
            .unwrap();
        let haystack = "a".repeat(1 << 16);

        assert!(re.try_is_match(&haystack).is_err());
        assert!(re.find(&haystack).is_err());
        assert!(re.find_all(&haystack, -1).is_err());
        assert!(re.try_replace(&haystack, "x", -1).is_err());

        assert!(!re.is_match(&haystack));
        assert_eq!(re.replace_all(&haystack, "x"), haystack);
    }

    #[test]
    fn compile_error_is_recoverable() {
        assert!(Regex::new("a(").is_err());
    }

    #[test]
    #[should_panic(expected = "failed to compile")]
    fn must_compile_panics_on_invalid_pattern() {
        Regex::must_compile("a(");
    }

    #[test]
    fn syntax_config() {
        let re = Regex::builder()
            .syntax(syntax::Config::new().case_insensitive(true))
            .build("abc")
            .unwrap();
        assert!(re.is_match("xABCx"));
    }

    #[test]
    fn pattern_properties() {
        let re = Regex::must_compile("(a)(b(c))");
        assert_eq!(re.pattern(), "(a)(b(c))");
        assert_eq!(re.group_len(), 4);
        assert_eq!(Regex::must_compile("a").group_len(), 1);
        assert_eq!(format!("{re:?}"), r#"Regex("(a)(b(c))")"#);
    }

    #[test]
    fn clones_share_the_compiled_pattern() {
        let re = Regex::must_compile("a+");
        let clone = re.clone();
        assert_eq!(
            clone.find_all_index("baaab", -1).unwrap(),
            re.find_all_index("baaab", -1).unwrap(),
        );
    }
}
