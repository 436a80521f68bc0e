// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Sorted set of unique members, each with a score.
//!
//! The skip list keeps members in `(score, member)` order and answers rank and
//! range queries; a hash map from member to score makes membership and score
//! lookups O(1) and gives the skip list the exact key it needs for deletes.
//!
//! | Redis | Here |
//! |-------|------|
//! | `ZADD` | `add` |
//! | `ZSCORE` | `score` |
//! | `ZREM` | `remove` |
//! | `ZINCRBY` | `incr` |
//! | `ZRANK` / `ZREVRANK` | `rank` / `rev_rank` |
//! | `ZRANGE` / `ZREVRANGE` | `range_by_rank` / `rev_range_by_rank` |
//! | `ZRANGEBYSCORE` | `range_by_score` |
//! | `ZCOUNT` | `count` |
//! | `ZREMRANGEBYSCORE` / `ZREMRANGEBYRANK` | `remove_range_by_score` / `remove_range_by_rank` |
//! | `ZPOPMIN` / `ZPOPMAX` | `pop_min` / `pop_max` |

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::range::{RangeResult, get_range_by_rank, get_range_by_score};
use crate::skip_list::SkipList;

pub struct SortedSet<M> {
    list: SkipList<M>,
    scores: FxHashMap<M, f64>,
}

fn pairs<M: Clone>(result: RangeResult<'_, M>) -> Vec<(M, f64)> {
    result
        .nodes
        .iter()
        .map(|e| (e.item().clone(), e.score()))
        .collect()
}

impl<M: Ord + Hash + Clone> SortedSet<M> {
    pub fn new() -> Self {
        SortedSet { list: SkipList::new(), scores: FxHashMap::default() }
    }

    /// A set whose internal shape is reproducible from `seed`.
    pub fn seeded(seed: u64) -> Self {
        SortedSet { list: SkipList::seeded(seed), scores: FxHashMap::default() }
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn contains(&self, member: &M) -> bool {
        self.scores.contains_key(member)
    }

    pub fn score(&self, member: &M) -> Option<f64> {
        self.scores.get(member).copied()
    }

    /// Add `member` or move it to `score`. Returns true if it was not present.
    ///
    /// # Panics
    ///
    /// Panics if `score` is NaN.
    pub fn add(&mut self, member: M, score: f64) -> bool {
        assert!(!score.is_nan(), "score is NaN");
        match self.scores.get(&member).copied() {
            Some(old) if old == score => false,
            Some(old) => {
                self.list.delete(old, &member);
                self.list.insert(score, member.clone());
                self.scores.insert(member, score);
                false
            }
            None => {
                self.list.insert(score, member.clone());
                self.scores.insert(member, score);
                true
            }
        }
    }

    pub fn remove(&mut self, member: &M) -> bool {
        match self.scores.remove(member) {
            Some(score) => self.list.delete(score, member),
            None => false,
        }
    }

    /// Add `delta` to the member's score (absent members start at 0) and
    /// return the new score.
    ///
    /// # Panics
    ///
    /// Panics if the new score is NaN, e.g. `inf + -inf`.
    pub fn incr(&mut self, member: M, delta: f64) -> f64 {
        let score = self.score(&member).unwrap_or(0.0) + delta;
        self.add(member, score);
        score
    }

    /// 0-based position in ascending score order.
    pub fn rank(&self, member: &M) -> Option<usize> {
        let score = self.score(member)?;
        self.list.rank(score, member)
    }

    /// 0-based position in descending score order.
    pub fn rev_rank(&self, member: &M) -> Option<usize> {
        self.rank(member).map(|r| self.len() - 1 - r)
    }

    /// Members with rank in `[start, end]`, ascending.
    pub fn range_by_rank(&self, start: usize, end: usize) -> Vec<(M, f64)> {
        pairs(get_range_by_rank(&self.list, start, end, false))
    }

    /// Members with descending rank in `[start, end]`, highest score first.
    pub fn rev_range_by_rank(&self, start: usize, end: usize) -> Vec<(M, f64)> {
        let len = self.len();
        if start > end || start >= len {
            return Vec::new();
        }
        let end = end.min(len - 1);
        pairs(get_range_by_rank(&self.list, len - 1 - end, len - 1 - start, true))
    }

    /// Members with score in `[min, max]`, ascending, after `offset`, at most `limit`.
    pub fn range_by_score(
        &self,
        min: f64,
        max: f64,
        offset: usize,
        limit: Option<usize>,
    ) -> Vec<(M, f64)> {
        pairs(get_range_by_score(&self.list, min, max, offset, limit))
    }

    /// Number of members with score in `[min, max]`.
    pub fn count(&self, min: f64, max: f64) -> usize {
        self.list.count_in_range(min, max)
    }

    pub fn remove_range_by_score(&mut self, min: f64, max: f64) -> usize {
        let doomed = self.range_by_score(min, max, 0, None);
        let removed = self.list.delete_range_by_score(min, max);
        debug_assert_eq!(removed, doomed.len());
        for (member, _) in &doomed {
            self.scores.remove(member);
        }
        removed
    }

    pub fn remove_range_by_rank(&mut self, start: usize, end: usize) -> usize {
        let doomed = self.range_by_rank(start, end);
        let removed = self.list.delete_range_by_rank(start, end);
        debug_assert_eq!(removed, doomed.len());
        for (member, _) in &doomed {
            self.scores.remove(member);
        }
        removed
    }

    /// Remove and return the member with the lowest score.
    pub fn pop_min(&mut self) -> Option<(M, f64)> {
        let (member, score) = {
            let first = self.list.first()?;
            (first.item().clone(), first.score())
        };
        self.remove(&member);
        Some((member, score))
    }

    /// Remove and return the member with the highest score.
    pub fn pop_max(&mut self) -> Option<(M, f64)> {
        let (member, score) = {
            let last = self.list.last()?;
            (last.item().clone(), last.score())
        };
        self.remove(&member);
        Some((member, score))
    }

    /// Members in ascending `(score, member)` order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&M, f64)> + '_ {
        self.list.iter().map(|e| (e.item(), e.score()))
    }
}

impl<M: Ord + Hash + Clone> Default for SortedSet<M> {
    fn default() -> Self {
        Self::new()
    }
}
