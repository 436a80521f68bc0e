// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Level-0 traversal: a double-ended iterator and a positioned cursor.

use std::iter::FusedIterator;

use super::node::{Entry, Idx, Node, NULL};

/// Iterator over entries in score order. Use `.rev()` for descending order.
pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    front: Idx,
    back: Idx,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(nodes: &'a [Node<T>], front: Idx, back: Idx, len: usize) -> Self {
        Iter { nodes, front, back, remaining: len }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = Entry<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let entry = Entry::new(self.nodes, self.front);
        self.front = self.nodes[self.front as usize].levels[0].forward;
        self.remaining -= 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let entry = Entry::new(self.nodes, self.back);
        self.back = self.nodes[self.back as usize].backward;
        self.remaining -= 1;
        Some(entry)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// A cursor that can step both ways along level 0.
///
/// The cursor may sit past either end, in which case `score` and `item`
/// return `None` and further moves leave it there.
pub struct Cursor<'a, T> {
    nodes: &'a [Node<T>],
    current: Idx,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(nodes: &'a [Node<T>], current: Idx) -> Self {
        Cursor { nodes, current }
    }

    pub fn move_next(&mut self) {
        if self.current != NULL {
            self.current = self.nodes[self.current as usize].levels[0].forward;
        }
    }

    pub fn move_prev(&mut self) {
        if self.current != NULL {
            self.current = self.nodes[self.current as usize].backward;
        }
    }

    pub fn is_end(&self) -> bool {
        self.current == NULL
    }

    pub fn entry(&self) -> Option<Entry<'a, T>> {
        Entry::at(self.nodes, self.current)
    }

    pub fn score(&self) -> Option<f64> {
        self.entry().map(|e| e.score())
    }

    pub fn item(&self) -> Option<&'a T> {
        self.entry().map(|e| e.item())
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Cursor { nodes: self.nodes, current: self.current }
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.nodes, other.nodes) && self.current == other.current
    }
}

impl<T> Eq for Cursor<'_, T> {}
