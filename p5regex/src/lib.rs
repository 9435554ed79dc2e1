/*!
A Perl5/JavaScript-flavored regular expression facade: match testing, submatch
retrieval and template replacement, layered over a pluggable matching engine.

Pattern syntax and single-search execution come from [`regex-automata`]'s
bounded backtracker. This crate owns everything above that boundary: how one
search result leads to the next, what the group offsets of a match look like,
and how failures surface (or deliberately don't).

[`regex-automata`]: https://docs.rs/regex-automata/

## Usage
```
use p5regex::Regex;

let re = Regex::new(r"\w+")?;
assert!(re.is_match("hello world"));

let words: Vec<&str> = re
    .find_all("hello world", -1)?
    .iter()
    .map(|m| m.as_str())
    .collect();
assert_eq!(words, vec!["hello", "world"]);
# Ok::<(), Box<dyn std::error::Error>>(())
```

## Iteration semantics
Matches are non-overlapping and scanned left to right: after a non-empty
match the next search starts at its end, after an empty match one character
further, so the scan always makes progress. Unlike the convention used by
[`regex`](https://docs.rs/regex/) and RE2, an empty match directly after a
non-empty one is reported, the way Perl and JavaScript global matching
behaves; a non-empty match flush against the end of the haystack ends the
scan instead.

```
use p5regex::Regex;

let re = Regex::new("a*")?;
let spans: Vec<(usize, usize)> = re
    .find_all_index("baaab", -1)?
    .iter()
    .map(|span| (span.start, span.end))
    .collect();
// The stricter convention would skip (4, 4).
assert_eq!(spans, vec![(0, 0), (1, 4), (4, 4), (5, 5)]);

let re = Regex::new(".*")?;
assert_eq!(re.find_all_index("abcdef", -1)?.len(), 1);
# Ok::<(), Box<dyn std::error::Error>>(())
```

## Groups and sentinels
Each match carries one offset pair per capture group, group 0 being the whole
match. A group that did not participate is reported as `None` (or as the
`-1, -1` pair in the flat index form), never as an empty string, since an
empty string is a valid zero-width match. All offsets are byte offsets.

```
use p5regex::Regex;

let re = Regex::new(r"(aa)*$")?;
assert_eq!(re.find_submatch_index("a")?, Some(vec![1, 1, -1, -1]));
# Ok::<(), Box<dyn std::error::Error>>(())
```

## Replacement
[`Regex::replace`] substitutes a template per match, resolving `$N`/`${N}`
group references, and copies the unmatched stretches of the input through
untouched.

```
use p5regex::Regex;

let re = Regex::new(r"(\w+)@(\w+)")?;
assert_eq!(re.replace_all("mail: a@b", "$2.$1"), "mail: b.a");
# Ok::<(), Box<dyn std::error::Error>>(())
```

## Failure policy
Two failure kinds exist: [`BuildError`] when a pattern cannot be compiled,
and [`MatchError`] when the engine cannot complete a search (its backtracking
budget is bounded; see [`backtrack::Config::visited_capacity`]). The find
operations surface `MatchError` in their `Result`, since an empty result
there would be ambiguous with "no match". [`Regex::is_match`] and
[`Regex::replace`] absorb it instead and degrade to `false` and the
unchanged input.
*/

mod engine;
mod iter;
mod matches;
mod regex;
mod template;

pub use crate::{
    engine::{BacktrackEngine, Matcher},
    iter::{TryCapturesMatches, TryFindMatches, TryMatches},
    matches::{Captures, Match},
    regex::{Builder, Regex},
};
pub use regex_automata::{
    nfa::thompson::{self, backtrack, BuildError},
    util::syntax,
    MatchError, Span,
};
