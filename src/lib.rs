// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Skiprank - a score-ordered skip list with exact ranks.
//!
//! Entries are `(score, item)` pairs kept in ascending score order, with ties
//! broken by a comparator on the item. Every forward link records how many
//! entries it skips, so rank lookups, rank ranges, and score ranges are all
//! O(log n). This is the structure behind Redis sorted sets.
//!
//! # Quick Start
//!
//! ```
//! use skiprank::SkipList;
//! use skiprank::range::get_range_by_rank;
//!
//! let mut list = SkipList::new();
//! list.insert(1.0, "apple");
//! list.insert(3.0, "cherry");
//! list.insert(2.0, "banana");
//!
//! assert_eq!(list.get_rank(2.0, &"banana"), 1);
//! assert_eq!(*list.get_by_rank(2).unwrap().item(), "cherry");
//!
//! let top = get_range_by_rank(&list, 0, 1, true);
//! assert_eq!(top.items(), vec![&"banana", &"apple"]);
//! ```
//!
//! # Modules
//!
//! - [`skip_list`]: the container, entries, iterators, and cursors
//! - [`range`]: offset/limit and rank-window queries
//! - [`sorted_set`]: member-keyed sorted set on top of the list
//! - [`level`]: injectable random height generation
//! - [`order`]: tie-break comparators

pub mod error;
pub mod level;
pub mod order;
pub mod range;
pub mod skip_list;
pub mod sorted_set;

pub use error::InsertError;
pub use level::{Geometric, LevelGenerator, MAX_LEVEL, P};
pub use order::{Natural, TieBreak};
pub use skip_list::{Cursor, Entry, Iter, NodeId, SkipList};
pub use sorted_set::SortedSet;
