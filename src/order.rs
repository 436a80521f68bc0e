// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Ordering of entries that share a score.

/// Strict weak ordering used to break ties between equal scores.
///
/// `less(a, b)` returns true when `a` sorts strictly before `b`. Two items
/// are considered the same entry when neither is less than the other.
pub trait TieBreak<T> {
    fn less(&self, a: &T, b: &T) -> bool;

    fn equivalent(&self, a: &T, b: &T) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }
}

/// Tie-break by the payload's `Ord` implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord> TieBreak<T> for Natural {
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Any `Fn(&T, &T) -> bool` closure acting as "less than".
impl<T, F> TieBreak<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}
