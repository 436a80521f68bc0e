// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Arena nodes and the read-only views handed out to callers.

use std::fmt;

use smallvec::SmallVec;

/// Node index type. u32 saves space vs usize on 64-bit.
pub(crate) type Idx = u32;

/// Null index marker.
pub(crate) const NULL: Idx = Idx::MAX;

/// The header always lives in slot 0.
pub(crate) const HEAD: Idx = 0;

/// One forward link and the number of level-0 hops it covers.
///
/// When `forward` is `NULL`, `span` is the number of nodes after this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Level {
    pub(crate) forward: Idx,
    pub(crate) span: usize,
}

impl Level {
    pub(crate) const EMPTY: Level = Level { forward: NULL, span: 0 };
}

/// Most nodes are one or two levels high with P = 0.25.
pub(crate) type Levels = SmallVec<[Level; 4]>;

pub(crate) struct Node<T> {
    /// `None` for the header and for slots on the free list.
    pub(crate) item: Option<T>,
    pub(crate) score: f64,
    pub(crate) backward: Idx,
    /// One slot per level this node participates in.
    pub(crate) levels: Levels,
}

impl<T> Node<T> {
    pub(crate) fn new_head(height: usize) -> Self {
        Node {
            item: None,
            score: f64::NEG_INFINITY,
            backward: NULL,
            levels: SmallVec::from_elem(Level::EMPTY, height),
        }
    }

    pub(crate) fn height(&self) -> usize {
        self.levels.len()
    }

    pub(crate) fn item(&self) -> &T {
        match &self.item {
            Some(item) => item,
            None => unreachable!("header or free slot read as an entry"),
        }
    }

    pub(crate) fn is_live(&self) -> bool {
        self.item.is_some()
    }
}

/// Handle to a node, returned by `insert`.
///
/// Handles are plain arena indices. A handle whose entry has been deleted may
/// later name a different entry that reused the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) Idx);

/// Read-only view of one entry in the list.
pub struct Entry<'a, T> {
    nodes: &'a [Node<T>],
    idx: Idx,
}

impl<'a, T> Entry<'a, T> {
    pub(crate) fn new(nodes: &'a [Node<T>], idx: Idx) -> Self {
        debug_assert!(idx != NULL && idx != HEAD);
        Entry { nodes, idx }
    }

    /// Wrap `idx`, mapping the null index to `None`.
    pub(crate) fn at(nodes: &'a [Node<T>], idx: Idx) -> Option<Self> {
        if idx == NULL || idx == HEAD {
            return None;
        }
        Some(Entry::new(nodes, idx))
    }

    fn node(&self) -> &'a Node<T> {
        &self.nodes[self.idx as usize]
    }

    pub fn score(&self) -> f64 {
        self.node().score
    }

    pub fn item(&self) -> &'a T {
        self.node().item()
    }

    pub fn id(&self) -> NodeId {
        NodeId(self.idx)
    }

    /// Number of levels this entry was promoted to.
    pub fn height(&self) -> usize {
        self.node().height()
    }

    /// The entry after this one in score order.
    pub fn next(&self) -> Option<Entry<'a, T>> {
        Entry::at(self.nodes, self.node().levels[0].forward)
    }

    /// The entry before this one in score order.
    pub fn prev(&self) -> Option<Entry<'a, T>> {
        Entry::at(self.nodes, self.node().backward)
    }

    pub(crate) fn idx(&self) -> Idx {
        self.idx
    }
}

impl<T> Clone for Entry<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Entry<'_, T> {}

/// Entries are equal when they are the same node of the same list.
impl<T> PartialEq for Entry<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.nodes, other.nodes) && self.idx == other.idx
    }
}

impl<T> Eq for Entry<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Entry<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("score", &self.score())
            .field("item", self.item())
            .finish()
    }
}
