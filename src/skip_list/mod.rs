// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Ranked Skip List
//!
//! A skip list ordered by `(score, item)` that tracks, for every forward link,
//! how many level-0 hops it jumps over. Summing those spans along a search
//! path gives the exact rank of any entry in O(log n), which is what sorted
//! sets need for `ZRANK` and `ZRANGE`.
//!
//! # Span Semantics
//!
//! - `node.levels[i].span` = number of level-0 hops from `node` to
//!   `node.levels[i].forward`
//! - If `forward` is null, `span` is the number of entries after `node`
//! - Summing spans from the header to an entry gives `rank + 1`
//!
//! ```text
//! Level 2: HEAD --------------3--------------> C ----------------> NULL
//! Level 1: HEAD ------1------> A ------2-----> C ------1------> D  NULL
//! Level 0: HEAD --1--> A --1--> B --1--> C --1--> D               NULL
//! ```
//!
//! # Storage
//!
//! Nodes live in an arena addressed by `u32` indices, with slot 0 reserved for
//! the header. Each node owns exactly as many level slots as its height.
//! Deleted slots go on a free list and are reused by later inserts.
//!
//! # Operations
//!
//! - `insert(score, item)`: O(log n)
//! - `delete(score, item)`: O(log n)
//! - `rank(score, item)` / `get_rank(score, item)`: O(log n)
//! - `get_by_rank(rank)`: O(log n)
//! - `first_in_range(min, max)` / `last_in_range(min, max)`: O(log n)
//! - `count_in_range(min, max)`: O(log n)
//! - `delete_range_by_score(min, max)`: O(log n + k)
//! - `delete_range_by_rank(start, end)`: O(log n + k)
//!
//! Scores compare with plain `<`, `==`, `<=`. NaN scores are rejected on
//! insert, and NaN range bounds match nothing.

mod iter;
mod node;

use std::fmt;

use smallvec::SmallVec;

use crate::error::InsertError;
use crate::level::{Geometric, LevelGenerator, MAX_LEVEL};
use crate::order::{Natural, TieBreak};

pub use iter::{Cursor, Iter};
pub use node::{Entry, NodeId};

use node::{HEAD, Idx, Level, Levels, NULL, Node};

/// Score-ordered skip list with O(log n) rank queries.
pub struct SkipList<T, C = Natural, L = Geometric> {
    /// Arena of nodes. Slot 0 is the header.
    nodes: Vec<Node<T>>,
    /// Free list for reusing removed node slots.
    free_list: Vec<Idx>,
    /// Last entry at level 0.
    tail: Idx,
    /// Number of entries (not counting the header).
    len: usize,
    /// Height of the tallest entry, at least 1.
    level: usize,
    tie_break: C,
    levels: L,
}

impl<T: Ord> SkipList<T> {
    /// An empty list ordering ties by `T: Ord`, with an OS-seeded generator.
    pub fn new() -> Self {
        SkipList::with_levels(Natural, Geometric::new())
    }

    /// An empty list whose shape is fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        SkipList::with_levels(Natural, Geometric::seeded(seed))
    }
}

impl<T, C: TieBreak<T>> SkipList<T, C> {
    /// An empty list ordering ties with `tie_break`.
    pub fn with_tie_break(tie_break: C) -> Self {
        SkipList::with_levels(tie_break, Geometric::new())
    }
}

impl<T: Ord> Default for SkipList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: TieBreak<T>, L: LevelGenerator> SkipList<T, C, L> {
    /// An empty list with an explicit tie-break and level generator.
    pub fn with_levels(tie_break: C, levels: L) -> Self {
        SkipList {
            nodes: vec![Node::new_head(MAX_LEVEL)],
            free_list: Vec::new(),
            tail: NULL,
            len: 0,
            level: 1,
            tie_break,
            levels,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of levels currently in use.
    pub fn level(&self) -> usize {
        self.level
    }

    pub fn tie_break(&self) -> &C {
        &self.tie_break
    }

    // --- Node access helpers ---

    fn node(&self, idx: Idx) -> &Node<T> {
        &self.nodes[idx as usize]
    }

    fn node_mut(&mut self, idx: Idx) -> &mut Node<T> {
        &mut self.nodes[idx as usize]
    }

    fn link(&self, idx: Idx, level: usize) -> Level {
        self.node(idx).levels[level]
    }

    fn forward(&self, idx: Idx, level: usize) -> Idx {
        self.node(idx).levels[level].forward
    }

    fn score_of(&self, idx: Idx) -> f64 {
        self.node(idx).score
    }

    /// Whether the node at `idx` sorts strictly before `(score, item)`.
    fn precedes(&self, idx: Idx, score: f64, item: &T) -> bool {
        let node = self.node(idx);
        node.score < score || (node.score == score && self.tie_break.less(node.item(), item))
    }

    /// Whether the node at `idx` is exactly `(score, item)`.
    fn matches(&self, idx: Idx, score: f64, item: &T) -> bool {
        let node = self.node(idx);
        node.score == score && self.tie_break.equivalent(node.item(), item)
    }

    fn entry(&self, idx: Idx) -> Option<Entry<'_, T>> {
        Entry::at(&self.nodes, idx)
    }

    // --- Invariant checking ---

    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        let head = self.node(HEAD);
        assert_eq!(head.height(), MAX_LEVEL, "INVARIANT VIOLATED: header height");
        assert!(
            (1..=MAX_LEVEL).contains(&self.level),
            "INVARIANT VIOLATED: level={} out of range",
            self.level
        );

        // Position of every reachable node: header = 0, entry at rank r = r + 1.
        let mut position = vec![usize::MAX; self.nodes.len()];
        position[HEAD as usize] = 0;
        let mut prev = NULL;
        let mut idx = self.forward(HEAD, 0);
        let mut count = 0usize;
        let mut tallest = 1usize;
        while idx != NULL {
            count += 1;
            let node = self.node(idx);
            assert!(node.is_live(), "INVARIANT VIOLATED: free slot {} is linked", idx);
            assert!(
                (1..=MAX_LEVEL).contains(&node.height()),
                "INVARIANT VIOLATED: node {} height={}",
                idx,
                node.height()
            );
            assert_eq!(
                node.backward, prev,
                "INVARIANT VIOLATED: backward of node {} is {}, expected {}",
                idx, node.backward, prev
            );
            if prev != NULL {
                let before = self.node(prev);
                assert!(
                    !(node.score < before.score)
                        && !(node.score == before.score
                            && self.tie_break.less(node.item(), before.item())),
                    "INVARIANT VIOLATED: node {} sorts before its predecessor {}",
                    idx,
                    prev
                );
            }
            tallest = tallest.max(node.height());
            position[idx as usize] = count;
            prev = idx;
            idx = node.levels[0].forward;
        }
        assert_eq!(
            count, self.len,
            "INVARIANT VIOLATED: level-0 count={} != len={}",
            count, self.len
        );
        assert_eq!(self.tail, prev, "INVARIANT VIOLATED: tail={} expected {}", self.tail, prev);
        assert_eq!(
            tallest, self.level,
            "INVARIANT VIOLATED: tallest node={} != level={}",
            tallest, self.level
        );

        // Spans: every link covers exactly the hops between its endpoints.
        let check_links = |idx: Idx, height: usize| {
            for i in 0..height {
                let link = self.link(idx, i);
                let from = position[idx as usize];
                let expected = if link.forward == NULL {
                    self.len - from
                } else {
                    let to = position[link.forward as usize];
                    assert!(to != usize::MAX, "INVARIANT VIOLATED: link to unreachable node");
                    assert!(
                        self.node(link.forward).height() > i,
                        "INVARIANT VIOLATED: level {} link into a node of height {}",
                        i,
                        self.node(link.forward).height()
                    );
                    to - from
                };
                assert_eq!(
                    link.span, expected,
                    "INVARIANT VIOLATED: node {} level {} span={} expected {}",
                    idx, i, link.span, expected
                );
            }
        };
        check_links(HEAD, self.level);
        for i in self.level..MAX_LEVEL {
            assert_eq!(
                self.forward(HEAD, i),
                NULL,
                "INVARIANT VIOLATED: header level {} above level={} is linked",
                i,
                self.level
            );
        }
        let mut idx = self.forward(HEAD, 0);
        while idx != NULL {
            check_links(idx, self.node(idx).height());
            idx = self.forward(idx, 0);
        }

        assert_eq!(
            self.free_list.len() + self.len + 1,
            self.nodes.len(),
            "INVARIANT VIOLATED: arena has leaked slots"
        );
    }

    #[cfg(not(debug_assertions))]
    #[inline(always)]
    fn check_invariants(&self) {}

    // --- Core operations ---

    /// Insert `item` with `score`. Equal pairs are kept as distinct entries.
    ///
    /// # Panics
    ///
    /// Panics if `score` is NaN or memory for the node cannot be allocated.
    /// See [`try_insert`](Self::try_insert) for the fallible version.
    pub fn insert(&mut self, score: f64, item: T) -> NodeId {
        match self.try_insert(score, item) {
            Ok(id) => id,
            Err(err) => panic!("skip list insert failed: {}", err),
        }
    }

    /// Insert `item` with `score`, reserving all memory before touching the
    /// structure so that a failure leaves the list unchanged.
    pub fn try_insert(&mut self, score: f64, item: T) -> Result<NodeId, InsertError> {
        if score.is_nan() {
            return Err(InsertError::NanScore);
        }

        let height = self.levels.random_height().clamp(1, MAX_LEVEL);
        let mut levels = Levels::new();
        levels
            .try_reserve_exact(height)
            .map_err(|_| InsertError::OutOfMemory)?;
        levels.extend(std::iter::repeat(Level::EMPTY).take(height));
        if self.free_list.is_empty() {
            self.nodes.try_reserve(1).map_err(|_| InsertError::OutOfMemory)?;
        }

        // update[i] is the last node at level i that sorts before the new
        // entry; rank[i] is its position counted in level-0 hops.
        let mut update = [HEAD; MAX_LEVEL];
        let mut rank = [0usize; MAX_LEVEL];
        let mut x = HEAD;
        for i in (0..self.level).rev() {
            rank[i] = if i + 1 == self.level { 0 } else { rank[i + 1] };
            loop {
                let next = self.forward(x, i);
                if next == NULL || !self.precedes(next, score, &item) {
                    break;
                }
                rank[i] += self.link(x, i).span;
                x = next;
            }
            update[i] = x;
        }

        if height > self.level {
            let len = self.len;
            for i in self.level..height {
                rank[i] = 0;
                update[i] = HEAD;
                self.node_mut(HEAD).levels[i].span = len;
            }
            self.level = height;
        }

        let new_idx = self.alloc_node(Node {
            item: Some(item),
            score,
            backward: NULL,
            levels,
        });

        for i in 0..height {
            let pred = update[i];
            let old = self.link(pred, i);
            let hops = rank[0] - rank[i];
            self.node_mut(new_idx).levels[i] = Level {
                forward: old.forward,
                span: old.span - hops,
            };
            self.node_mut(pred).levels[i] = Level { forward: new_idx, span: hops + 1 };
        }

        // Levels the new node does not reach still gain one hop underneath.
        for i in height..self.level {
            self.node_mut(update[i]).levels[i].span += 1;
        }

        self.node_mut(new_idx).backward = if update[0] == HEAD { NULL } else { update[0] };
        let next = self.forward(new_idx, 0);
        if next != NULL {
            self.node_mut(next).backward = new_idx;
        } else {
            self.tail = new_idx;
        }

        self.len += 1;
        self.check_invariants();
        Ok(NodeId(new_idx))
    }

    fn alloc_node(&mut self, node: Node<T>) -> Idx {
        if let Some(idx) = self.free_list.pop() {
            *self.node_mut(idx) = node;
            idx
        } else {
            let idx = self.nodes.len() as Idx;
            self.nodes.push(node);
            idx
        }
    }

    /// Delete the entry equal to `(score, item)`. Returns whether one was found.
    pub fn delete(&mut self, score: f64, item: &T) -> bool {
        self.remove(score, item).is_some()
    }

    /// Delete the entry equal to `(score, item)`, returning its payload.
    pub fn remove(&mut self, score: f64, item: &T) -> Option<T> {
        let mut update = [HEAD; MAX_LEVEL];
        let mut x = HEAD;
        for i in (0..self.level).rev() {
            loop {
                let next = self.forward(x, i);
                if next == NULL || !self.precedes(next, score, item) {
                    break;
                }
                x = next;
            }
            update[i] = x;
        }

        let x = self.forward(x, 0);
        if x == NULL || !self.matches(x, score, item) {
            return None;
        }
        let removed = self.unlink(x, &update);
        self.check_invariants();
        Some(removed)
    }

    /// Unlink `x` given its predecessors at every level, and free its slot.
    fn unlink(&mut self, x: Idx, update: &[Idx; MAX_LEVEL]) -> T {
        for i in 0..self.level {
            let pred = update[i];
            if self.forward(pred, i) == x {
                let gone = self.link(x, i);
                let link = &mut self.node_mut(pred).levels[i];
                link.span = link.span + gone.span - 1;
                link.forward = gone.forward;
            } else {
                self.node_mut(pred).levels[i].span -= 1;
            }
        }

        let next = self.forward(x, 0);
        let back = self.node(x).backward;
        if next != NULL {
            self.node_mut(next).backward = back;
        } else {
            self.tail = back;
        }

        while self.level > 1 && self.forward(HEAD, self.level - 1) == NULL {
            self.level -= 1;
        }
        self.len -= 1;
        self.free_node(x)
    }

    fn free_node(&mut self, idx: Idx) -> T {
        let node = self.node_mut(idx);
        node.levels = SmallVec::new();
        node.backward = NULL;
        let item = node.item.take();
        self.free_list.push(idx);
        match item {
            Some(item) => item,
            None => unreachable!("freed slot {} held no item", idx),
        }
    }

    /// 0-based rank of `(score, item)`, or `None` if it is not in the list.
    pub fn rank(&self, score: f64, item: &T) -> Option<usize> {
        let mut x = HEAD;
        let mut rank = 0usize;
        for i in (0..self.level).rev() {
            loop {
                let next = self.forward(x, i);
                if next == NULL || !self.precedes(next, score, item) {
                    break;
                }
                rank += self.link(x, i).span;
                x = next;
            }
            let next = self.forward(x, i);
            if next != NULL && self.matches(next, score, item) {
                return Some(rank + self.link(x, i).span - 1);
            }
        }
        None
    }

    /// 0-based rank of `(score, item)`, or `self.len()` if it is not present.
    ///
    /// Valid ranks are `0..len`, so `len` can never be mistaken for a hit.
    /// Prefer [`rank`](Self::rank) in new code.
    pub fn get_rank(&self, score: f64, item: &T) -> usize {
        self.rank(score, item).unwrap_or(self.len)
    }

    /// Index of the node at 0-based `rank`, or `NULL`.
    fn find_by_rank(&self, rank: usize) -> Idx {
        if rank >= self.len {
            return NULL;
        }
        let mut x = HEAD;
        let mut traversed = 0usize;
        for i in (0..self.level).rev() {
            loop {
                let link = self.link(x, i);
                if link.forward == NULL || traversed + link.span > rank {
                    break;
                }
                traversed += link.span;
                x = link.forward;
            }
        }
        self.forward(x, 0)
    }

    /// The entry at 0-based `rank`.
    pub fn get_by_rank(&self, rank: usize) -> Option<Entry<'_, T>> {
        self.entry(self.find_by_rank(rank))
    }

    /// Resolve a handle returned by `insert`.
    pub fn get(&self, id: NodeId) -> Option<Entry<'_, T>> {
        let idx = id.0;
        if idx == HEAD || idx as usize >= self.nodes.len() || !self.node(idx).is_live() {
            return None;
        }
        self.entry(idx)
    }

    pub fn first(&self) -> Option<Entry<'_, T>> {
        self.entry(self.forward(HEAD, 0))
    }

    pub fn last(&self) -> Option<Entry<'_, T>> {
        self.entry(self.tail)
    }

    /// Whether any entry could have a score in `[min, max]`.
    fn is_in_range(&self, min: f64, max: f64) -> bool {
        if min.is_nan() || max.is_nan() || min > max {
            return false;
        }
        if self.tail == NULL || self.score_of(self.tail) < min {
            return false;
        }
        let first = self.forward(HEAD, 0);
        if first == NULL || self.score_of(first) > max {
            return false;
        }
        true
    }

    fn find_first_in_range(&self, min: f64, max: f64) -> Idx {
        if !self.is_in_range(min, max) {
            return NULL;
        }
        let mut x = HEAD;
        for i in (0..self.level).rev() {
            loop {
                let next = self.forward(x, i);
                if next == NULL || !(self.score_of(next) < min) {
                    break;
                }
                x = next;
            }
        }
        let x = self.forward(x, 0);
        if x == NULL || self.score_of(x) > max {
            return NULL;
        }
        x
    }

    fn find_last_in_range(&self, min: f64, max: f64) -> Idx {
        if !self.is_in_range(min, max) {
            return NULL;
        }
        let mut x = HEAD;
        for i in (0..self.level).rev() {
            loop {
                let next = self.forward(x, i);
                if next == NULL || !(self.score_of(next) <= max) {
                    break;
                }
                x = next;
            }
        }
        if x == HEAD || self.score_of(x) < min {
            return NULL;
        }
        x
    }

    /// The lowest-ranked entry with a score in `[min, max]`.
    pub fn first_in_range(&self, min: f64, max: f64) -> Option<Entry<'_, T>> {
        self.entry(self.find_first_in_range(min, max))
    }

    /// The highest-ranked entry with a score in `[min, max]`.
    pub fn last_in_range(&self, min: f64, max: f64) -> Option<Entry<'_, T>> {
        self.entry(self.find_last_in_range(min, max))
    }

    /// Number of entries whose score satisfies `keep_going`, counted from the
    /// front. `keep_going` must be monotone along level 0.
    fn count_while(&self, keep_going: impl Fn(f64) -> bool) -> usize {
        let mut x = HEAD;
        let mut traversed = 0usize;
        for i in (0..self.level).rev() {
            loop {
                let link = self.link(x, i);
                if link.forward == NULL || !keep_going(self.score_of(link.forward)) {
                    break;
                }
                traversed += link.span;
                x = link.forward;
            }
        }
        traversed
    }

    /// Number of entries with a score in `[min, max]`.
    pub fn count_in_range(&self, min: f64, max: f64) -> usize {
        if !self.is_in_range(min, max) {
            return 0;
        }
        let at_most_max = self.count_while(|s| s <= max);
        let below_min = self.count_while(|s| s < min);
        at_most_max - below_min
    }

    /// Delete every entry with a score in `[min, max]`. Returns how many were removed.
    pub fn delete_range_by_score(&mut self, min: f64, max: f64) -> usize {
        if !self.is_in_range(min, max) {
            return 0;
        }
        let mut update = [HEAD; MAX_LEVEL];
        let mut x = HEAD;
        for i in (0..self.level).rev() {
            loop {
                let next = self.forward(x, i);
                if next == NULL || !(self.score_of(next) < min) {
                    break;
                }
                x = next;
            }
            update[i] = x;
        }

        let mut removed = 0usize;
        let mut x = self.forward(x, 0);
        while x != NULL && self.score_of(x) <= max {
            let next = self.forward(x, 0);
            drop(self.unlink(x, &update));
            removed += 1;
            x = next;
        }
        self.check_invariants();
        removed
    }

    /// Delete entries with 0-based rank in `[start, end]`; `end` is clamped to
    /// the last rank. Returns how many were removed.
    pub fn delete_range_by_rank(&mut self, start: usize, end: usize) -> usize {
        if start > end || start >= self.len {
            return 0;
        }
        let end = end.min(self.len - 1);

        let mut update = [HEAD; MAX_LEVEL];
        let mut x = HEAD;
        let mut traversed = 0usize;
        for i in (0..self.level).rev() {
            loop {
                let link = self.link(x, i);
                if link.forward == NULL || traversed + link.span > start {
                    break;
                }
                traversed += link.span;
                x = link.forward;
            }
            update[i] = x;
        }

        let mut removed = 0usize;
        let mut x = self.forward(x, 0);
        while x != NULL && start + removed <= end {
            let next = self.forward(x, 0);
            drop(self.unlink(x, &update));
            removed += 1;
            x = next;
        }
        self.check_invariants();
        removed
    }

    /// Cheap structural check: scores never decrease along level 0 and the
    /// level-0 count matches `len`. Debug builds run a much stricter audit
    /// after every mutation.
    pub fn validate(&self) -> bool {
        let mut count = 0usize;
        let mut x = self.forward(HEAD, 0);
        while x != NULL {
            count += 1;
            let next = self.forward(x, 0);
            if next != NULL && self.score_of(x) > self.score_of(next) {
                return false;
            }
            x = next;
        }
        count == self.len
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.nodes[HEAD as usize] = Node::new_head(MAX_LEVEL);
        self.free_list.clear();
        self.tail = NULL;
        self.len = 0;
        self.level = 1;
        self.check_invariants();
    }

    // --- Traversal ---

    /// Iterate entries in ascending `(score, item)` order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.nodes, self.forward(HEAD, 0), self.tail, self.len)
    }

    /// A cursor on the first entry (or at the end if empty).
    pub fn cursor_front(&self) -> Cursor<'_, T> {
        Cursor::new(&self.nodes, self.forward(HEAD, 0))
    }

    /// A cursor on the last entry (or at the end if empty).
    pub fn cursor_back(&self) -> Cursor<'_, T> {
        Cursor::new(&self.nodes, self.tail)
    }

    /// A cursor on `entry`, which must come from this list.
    pub fn cursor_at(&self, entry: Entry<'_, T>) -> Cursor<'_, T> {
        debug_assert!(self.get(entry.id()).is_some());
        Cursor::new(&self.nodes, entry.idx())
    }
}

impl<'a, T, C: TieBreak<T>, L: LevelGenerator> IntoIterator for &'a SkipList<T, C, L> {
    type Item = Entry<'a, T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C: TieBreak<T>, L: LevelGenerator> Extend<(f64, T)> for SkipList<T, C, L> {
    fn extend<I: IntoIterator<Item = (f64, T)>>(&mut self, iter: I) {
        for (score, item) in iter {
            self.insert(score, item);
        }
    }
}

impl<T: Ord> FromIterator<(f64, T)> for SkipList<T> {
    fn from_iter<I: IntoIterator<Item = (f64, T)>>(iter: I) -> Self {
        let mut list = SkipList::new();
        list.extend(iter);
        list
    }
}

impl<T: fmt::Debug, C: TieBreak<T>, L: LevelGenerator> fmt::Debug for SkipList<T, C, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|e| (e.score(), e.item())))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruits(n: usize) -> SkipList<&'static str> {
        let names = ["apple", "banana", "cherry", "date", "elderberry", "fig", "grape"];
        let mut list = SkipList::seeded(1);
        for (i, name) in names.iter().take(n).enumerate() {
            list.insert((i + 1) as f64, *name);
        }
        list
    }

    fn items<C: TieBreak<T>, L: LevelGenerator, T: Clone>(list: &SkipList<T, C, L>) -> Vec<T> {
        list.iter().map(|e| e.item().clone()).collect()
    }

    #[test]
    fn empty_list() {
        let list: SkipList<i32> = SkipList::seeded(0);
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert_eq!(list.level(), 1);
        assert!(list.first().is_none());
        assert!(list.last().is_none());
        assert!(list.get_by_rank(0).is_none());
        assert_eq!(list.get_rank(1.0, &1), 0);
        assert_eq!(list.rank(1.0, &1), None);
        assert!(list.first_in_range(0.0, 10.0).is_none());
        assert!(list.last_in_range(0.0, 10.0).is_none());
        assert_eq!(list.count_in_range(0.0, 10.0), 0);
        assert!(list.validate());
        assert!(list.cursor_front().is_end());
    }

    #[test]
    fn insert_one() {
        let mut list = SkipList::seeded(0);
        let id = list.insert(1.0, "apple");
        assert_eq!(list.len(), 1);
        let entry = list.get(id).unwrap();
        assert_eq!(entry.score(), 1.0);
        assert_eq!(*entry.item(), "apple");
        assert_eq!(list.first(), Some(entry));
        assert_eq!(list.last(), Some(entry));
    }

    #[test]
    fn insert_out_of_order() {
        let mut list = SkipList::seeded(0);
        list.insert(1.0, "apple");
        list.insert(3.0, "cherry");
        list.insert(2.0, "banana");
        assert_eq!(items(&list), vec!["apple", "banana", "cherry"]);
        let scores: Vec<_> = list.iter().map(|e| e.score()).collect();
        assert_eq!(scores, vec![1.0, 2.0, 3.0]);
        assert_eq!(list.get_rank(2.0, &"banana"), 1);
        assert_eq!(*list.get_by_rank(2).unwrap().item(), "cherry");
    }

    #[test]
    fn equal_scores_use_tie_break() {
        let mut list = SkipList::seeded(0);
        list.insert(2.0, "banana");
        list.insert(2.0, "blueberry");
        list.insert(2.0, "blackberry");
        list.insert(1.0, "apple");
        list.insert(3.0, "cherry");
        assert_eq!(
            items(&list),
            vec!["apple", "banana", "blackberry", "blueberry", "cherry"]
        );
        assert_eq!(list.rank(2.0, &"blueberry"), Some(3));
    }

    #[test]
    fn custom_tie_break() {
        let mut list = SkipList::with_levels(
            |a: &&str, b: &&str| a > b,
            Geometric::seeded(9),
        );
        list.insert(1.0, "apple");
        list.insert(1.0, "banana");
        list.insert(1.0, "cherry");
        assert_eq!(items(&list), vec!["cherry", "banana", "apple"]);
        assert!(list.delete(1.0, &"banana"));
        assert_eq!(items(&list), vec!["cherry", "apple"]);
    }

    #[test]
    fn duplicate_pairs_are_distinct() {
        let mut list = SkipList::seeded(0);
        let a = list.insert(1.0, 7);
        let b = list.insert(1.0, 7);
        assert_ne!(a, b);
        assert_eq!(list.len(), 2);
        assert!(list.delete(1.0, &7));
        assert_eq!(list.len(), 1);
        assert!(list.delete(1.0, &7));
        assert!(list.is_empty());
        assert!(!list.delete(1.0, &7));
    }

    #[test]
    fn delete_missing_is_noop() {
        let mut list = fruits(2);
        assert!(!list.delete(3.0, &"cherry"));
        assert!(!list.delete(1.0, &"orange"));
        assert!(!list.delete(2.5, &"banana"));
        assert_eq!(list.len(), 2);
        assert!(list.validate());
    }

    #[test]
    fn delete_first_middle_last() {
        let mut list = fruits(5);
        assert!(list.delete(3.0, &"cherry"));
        assert!(list.delete(1.0, &"apple"));
        assert!(list.delete(5.0, &"elderberry"));
        assert_eq!(items(&list), vec!["banana", "date"]);
        assert_eq!(*list.first().unwrap().item(), "banana");
        assert_eq!(*list.last().unwrap().item(), "date");
        assert_eq!(list.first().unwrap().prev(), None);
    }

    #[test]
    fn remove_returns_payload() {
        let mut list = SkipList::seeded(3);
        list.insert(4.0, String::from("four"));
        assert_eq!(list.remove(4.0, &String::from("four")), Some(String::from("four")));
        assert_eq!(list.remove(4.0, &String::from("four")), None);
    }

    #[test]
    fn rank_lookups() {
        let list = fruits(5);
        for (i, name) in ["apple", "banana", "cherry", "date", "elderberry"].iter().enumerate() {
            assert_eq!(list.get_rank((i + 1) as f64, name), i);
            assert_eq!(*list.get_by_rank(i).unwrap().item(), *name);
        }
        assert_eq!(list.get_rank(6.0, &"fig"), list.len());
        assert_eq!(list.get_rank(1.0, &"orange"), list.len());
        assert!(list.get_by_rank(5).is_none());
        assert!(list.get_by_rank(100).is_none());
    }

    #[test]
    fn range_bounds() {
        let list = fruits(5);
        assert_eq!(*list.first_in_range(2.0, 4.0).unwrap().item(), "banana");
        assert_eq!(*list.last_in_range(2.0, 4.0).unwrap().item(), "date");
        assert_eq!(list.first_in_range(0.0, 10.0), list.first());
        assert_eq!(list.last_in_range(0.0, 10.0), list.last());
        assert!(list.first_in_range(6.0, 10.0).is_none());
        assert!(list.first_in_range(10.0, 5.0).is_none());
        assert!(list.first_in_range(2.5, 2.9).is_none());
        assert!(list.last_in_range(2.5, 2.9).is_none());
        assert!(list.first_in_range(f64::NAN, 3.0).is_none());
        assert!(list.last_in_range(1.0, f64::NAN).is_none());
        assert_eq!(list.count_in_range(2.0, 4.0), 3);
        assert_eq!(list.count_in_range(2.5, 2.9), 0);
        assert_eq!(list.count_in_range(f64::NEG_INFINITY, f64::INFINITY), 5);
    }

    #[test]
    fn delete_range_by_score_middle() {
        let mut list = fruits(6);
        assert_eq!(list.delete_range_by_score(2.0, 4.0), 3);
        assert_eq!(items(&list), vec!["apple", "elderberry", "fig"]);
        assert_eq!(list.delete_range_by_score(4.0, 2.0), 0);
        assert_eq!(list.delete_range_by_score(f64::NAN, 2.0), 0);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn delete_range_by_rank_middle() {
        let mut list = fruits(6);
        assert_eq!(list.delete_range_by_rank(1, 3), 3);
        assert_eq!(items(&list), vec!["apple", "elderberry", "fig"]);
        assert_eq!(list.delete_range_by_rank(1, 100), 2);
        assert_eq!(items(&list), vec!["apple"]);
        assert_eq!(list.delete_range_by_rank(1, 0), 0);
        assert_eq!(list.delete_range_by_rank(5, 9), 0);
    }

    #[test]
    fn nan_rejected() {
        let mut list = SkipList::seeded(0);
        assert_eq!(list.try_insert(f64::NAN, 1), Err(InsertError::NanScore));
        assert!(list.is_empty());
        assert_eq!(list.rank(f64::NAN, &1), None);
    }

    #[test]
    #[should_panic(expected = "score is NaN")]
    fn insert_nan_panics() {
        let mut list = SkipList::seeded(0);
        list.insert(f64::NAN, 1);
    }

    #[test]
    fn infinities_are_ordinary_scores() {
        let mut list = SkipList::seeded(0);
        list.insert(1e9, "large");
        list.insert(-1e9, "small");
        list.insert(0.0, "zero");
        list.insert(f64::INFINITY, "infinity");
        list.insert(f64::NEG_INFINITY, "negative infinity");
        assert_eq!(
            items(&list),
            vec!["negative infinity", "small", "zero", "large", "infinity"]
        );
        assert_eq!(list.rank(f64::INFINITY, &"infinity"), Some(4));
    }

    #[test]
    fn reverse_iteration() {
        let list = fruits(3);
        let back: Vec<_> = list.iter().rev().map(|e| *e.item()).collect();
        assert_eq!(back, vec!["cherry", "banana", "apple"]);
        assert_eq!(list.iter().len(), 3);
    }

    #[test]
    fn iterator_meets_in_the_middle() {
        let list = fruits(4);
        let mut iter = list.iter();
        assert_eq!(*iter.next().unwrap().item(), "apple");
        assert_eq!(*iter.next_back().unwrap().item(), "date");
        assert_eq!(*iter.next().unwrap().item(), "banana");
        assert_eq!(*iter.next_back().unwrap().item(), "cherry");
        assert!(iter.next().is_none());
        assert!(iter.next_back().is_none());
    }

    #[test]
    fn cursor_moves_both_ways() {
        let list = fruits(2);
        let mut a = list.cursor_front();
        let b = list.cursor_front();
        let end = list.cursor_at(list.last().unwrap());
        assert!(a == b);
        assert!(a != end);

        a.move_next();
        assert!(a != b);
        assert!(a == end);
        assert_eq!(a.item(), Some(&"banana"));
        assert_eq!(a.score(), Some(2.0));

        a.move_prev();
        assert_eq!(a.item(), Some(&"apple"));
        a.move_prev();
        assert!(a.is_end());
        a.move_next();
        assert!(a.is_end());
    }

    #[test]
    fn slots_are_reused() {
        let mut list = SkipList::seeded(5);
        for i in 0..50 {
            list.insert(i as f64, i);
        }
        let arena = list.nodes.len();
        for i in 0..50 {
            assert!(list.delete(i as f64, &i));
        }
        for i in 0..50 {
            list.insert(i as f64, i);
        }
        assert_eq!(list.nodes.len(), arena);
    }

    #[test]
    fn level_shrinks_when_tall_nodes_leave() {
        let mut list = SkipList::seeded(11);
        for i in 0..500 {
            list.insert(i as f64, i);
        }
        assert!(list.level() > 1);
        list.delete_range_by_rank(0, 499);
        assert!(list.is_empty());
        assert_eq!(list.level(), 1);
    }

    #[test]
    fn clear_resets() {
        let mut list = fruits(6);
        list.clear();
        assert!(list.is_empty());
        assert!(list.first().is_none());
        list.insert(1.0, "again");
        assert_eq!(items(&list), vec!["again"]);
    }

    #[test]
    fn stale_handle_resolves_to_none() {
        let mut list = SkipList::seeded(0);
        let id = list.insert(1.0, 1);
        list.delete(1.0, &1);
        assert!(list.get(id).is_none());
    }

    #[test]
    fn stress_test() {
        let mut list = SkipList::seeded(1234);
        for i in 0..1000 {
            // Scatter scores so inserts land all over the list.
            list.insert(((i * 7919) % 1000) as f64, i);
        }
        assert_eq!(list.len(), 1000);
        for r in 0..1000 {
            let e = list.get_by_rank(r).unwrap();
            assert_eq!(e.score(), r as f64, "failed at rank {}", r);
            assert_eq!(list.rank(e.score(), e.item()), Some(r));
        }

        // Remove every other entry from the end.
        for r in (0..500).rev() {
            assert_eq!(list.delete_range_by_rank(r * 2, r * 2), 1);
        }
        assert_eq!(list.len(), 500);
        for r in 0..500 {
            let expected = (r * 2 + 1) as f64;
            assert_eq!(list.get_by_rank(r).unwrap().score(), expected);
        }
        assert!(list.validate());
    }
}
