// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Windowed range queries built on the list's public operations.
//!
//! These are free functions rather than methods: they only read the list
//! through `first_in_range`, `last_in_range`, `get_by_rank`, and entry links.

use crate::level::LevelGenerator;
use crate::order::TieBreak;
use crate::skip_list::{Entry, SkipList};

/// A window of matching entries plus the total number of matches.
#[derive(Debug, PartialEq, Eq)]
pub struct RangeResult<'a, T> {
    pub nodes: Vec<Entry<'a, T>>,
    /// Every match in the range, including those skipped by `offset` or cut
    /// off by `limit`.
    pub total_in_range: usize,
}

impl<T> Default for RangeResult<'_, T> {
    fn default() -> Self {
        RangeResult { nodes: Vec::new(), total_in_range: 0 }
    }
}

impl<'a, T> RangeResult<'a, T> {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The payloads of the collected entries, in result order.
    pub fn items(&self) -> Vec<&'a T> {
        self.nodes.iter().map(|e| e.item()).collect()
    }
}

/// Walk from `start` via `step` while entries satisfy `in_range`, skipping
/// `offset`, collecting up to `limit`, and counting all of them.
fn window<'a, T>(
    start: Option<Entry<'a, T>>,
    step: impl Fn(&Entry<'a, T>) -> Option<Entry<'a, T>>,
    in_range: impl Fn(f64) -> bool,
    offset: usize,
    limit: Option<usize>,
) -> RangeResult<'a, T> {
    let mut result = RangeResult::default();
    let mut x = start;

    // Skip offset entries.
    while let Some(e) = x {
        if result.total_in_range == offset || !in_range(e.score()) {
            break;
        }
        result.total_in_range += 1;
        x = step(&e);
    }

    // Collect entries up to limit.
    while let Some(e) = x {
        if limit.is_some_and(|l| result.nodes.len() >= l) || !in_range(e.score()) {
            break;
        }
        result.nodes.push(e);
        result.total_in_range += 1;
        x = step(&e);
    }

    // Count the rest of the range.
    while let Some(e) = x {
        if !in_range(e.score()) {
            break;
        }
        result.total_in_range += 1;
        x = step(&e);
    }

    result
}

/// Entries with score in `[min, max]` in ascending order, after skipping
/// `offset` matches and keeping at most `limit` (`None` = no limit).
pub fn get_range_by_score<T, C, L>(
    list: &SkipList<T, C, L>,
    min: f64,
    max: f64,
    offset: usize,
    limit: Option<usize>,
) -> RangeResult<'_, T>
where
    C: TieBreak<T>,
    L: LevelGenerator,
{
    window(
        list.first_in_range(min, max),
        |e| e.next(),
        |score| score <= max,
        offset,
        limit,
    )
}

/// Entries with score in `[min, max]` in descending order, like Redis
/// `ZREVRANGEBYSCORE max min LIMIT offset count`.
pub fn get_range_by_score_rev<T, C, L>(
    list: &SkipList<T, C, L>,
    max: f64,
    min: f64,
    offset: usize,
    limit: Option<usize>,
) -> RangeResult<'_, T>
where
    C: TieBreak<T>,
    L: LevelGenerator,
{
    window(
        list.last_in_range(min, max),
        |e| e.prev(),
        |score| score >= min,
        offset,
        limit,
    )
}

/// Entries with 0-based rank in `[start, end]` (`end` clamped to the last
/// rank), ascending or, with `reverse`, from `end` down to `start`.
pub fn get_range_by_rank<T, C, L>(
    list: &SkipList<T, C, L>,
    start: usize,
    end: usize,
    reverse: bool,
) -> RangeResult<'_, T>
where
    C: TieBreak<T>,
    L: LevelGenerator,
{
    let len = list.len();
    if start > end || start >= len {
        return RangeResult::default();
    }
    let end = end.min(len - 1);
    let count = end - start + 1;

    // One descent to the boundary, then walk level 0.
    let mut nodes = Vec::with_capacity(count);
    let mut x = list.get_by_rank(if reverse { end } else { start });
    while let Some(e) = x {
        if nodes.len() == count {
            break;
        }
        nodes.push(e);
        x = if reverse { e.prev() } else { e.next() };
    }

    let total_in_range = nodes.len();
    RangeResult { nodes, total_in_range }
}
