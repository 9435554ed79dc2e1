use std::{
    panic::{RefUnwindSafe, UnwindSafe},
    sync::Arc,
};

use regex_automata::{
    nfa::thompson::backtrack::{self, BoundedBacktracker},
    util::pool::Pool,
    Input, MatchError, PatternID,
};

use crate::matches::Captures;

/// The boundary to the pattern-matching engine.
///
/// An implementation returns the single leftmost match beginning at or after
/// `at`, together with the span of every capturing group when
/// `want_submatches` is set. When it is not set, only group 0 has to be
/// populated; it is an optimization hint, not a correctness requirement.
///
/// [`TryMatches`](crate::TryMatches) drives any conforming implementation;
/// nothing above this trait inspects pattern syntax or engine internals.
pub trait Matcher {
    /// Total number of capture groups in the pattern, including the implicit
    /// group 0 for the whole match.
    fn group_len(&self) -> usize;

    /// The leftmost match beginning at or after `at`, or `None` when the rest
    /// of the haystack cannot match.
    fn search(
        &self,
        haystack: &[u8],
        at: usize,
        want_submatches: bool,
    ) -> Result<Option<Captures>, MatchError>;
}

/// The type of the closure we use to create new caches. We need to spell out
/// all of the marker traits or else we risk leaking `!MARKER` impls.
type CachePoolFn =
    Box<dyn Fn() -> backtrack::Cache + Send + Sync + UnwindSafe + RefUnwindSafe>;

type CachePool = Pool<backtrack::Cache, CachePoolFn>;

/// A [`BoundedBacktracker`] behind the [`Matcher`] seam.
///
/// The backtracker's `try_*` search API is fallible: exceeding its visited
/// capacity surfaces as a [`MatchError`] instead of taking unbounded time,
/// which is what the facade's failure policy is built on.
pub struct BacktrackEngine {
    re: Arc<BoundedBacktracker>,
    /// A thread safe pool of caches.
    ///
    /// A `Cache` is plucked from this pool before running a search. Cloning
    /// the engine creates a fresh pool, so clones moved into separate threads
    /// each get the pool's "thread owner" optimization instead of contending
    /// on one mutex.
    pool: CachePool,
}

impl BacktrackEngine {
    pub(crate) fn new(re: BoundedBacktracker) -> BacktrackEngine {
        BacktrackEngine::from_arc(Arc::new(re))
    }

    fn from_arc(re: Arc<BoundedBacktracker>) -> BacktrackEngine {
        let pool = {
            let re = Arc::clone(&re);
            let create: CachePoolFn = Box::new(move || re.create_cache());
            Pool::new(create)
        };
        BacktrackEngine { re, pool }
    }

    /// The longest haystack a single search will accept before reporting a
    /// [`MatchError`].
    pub fn max_haystack_len(&self) -> usize {
        self.re.max_haystack_len()
    }
}

impl Clone for BacktrackEngine {
    fn clone(&self) -> BacktrackEngine {
        BacktrackEngine::from_arc(Arc::clone(&self.re))
    }
}

impl Matcher for BacktrackEngine {
    fn group_len(&self) -> usize {
        self.re.get_nfa().group_info().group_len(PatternID::ZERO)
    }

    fn search(
        &self,
        haystack: &[u8],
        at: usize,
        want_submatches: bool,
    ) -> Result<Option<Captures>, MatchError> {
        let input = Input::new(haystack).span(at..haystack.len());
        let mut cache = self.pool.get();
        if !want_submatches {
            let m = self.re.try_find(&mut cache, input)?;
            return Ok(
                m.map(|m| Captures::from_span(m.span(), self.group_len()))
            );
        }
        let mut caps = self.re.create_captures();
        self.re.try_search(&mut cache, &input, &mut caps)?;
        let Some(m) = caps.get_match() else {
            return Ok(None);
        };
        let groups = (1..caps.group_len()).map(|i| caps.get_group(i)).collect();
        Ok(Some(Captures::new(m.span(), groups)))
    }
}
