//! AFL Fuzz harness for the ranked skip list
//!
//! This harness checks the properties the structure promises:
//! 1. Order: level-0 traversal matches a sorted Vec of the same entries
//! 2. Rank consistency: get_rank(get_by_rank(i)) == i
//! 3. Range deletes remove exactly what the model removes
//!
//! Model: every byte sequence decodes to a list of operations applied to both
//! a skip list and a sorted Vec. Scores come from a small domain so ties are
//! frequent.

use afl::fuzz;
use skiprank::range::get_range_by_rank;
use skiprank::{Geometric, Natural, SkipList};

/// Operation types the fuzzer can generate
#[derive(Debug, Clone, Copy)]
enum FuzzOp {
    Insert { score: u8, item: u8 },
    Delete { score: u8, item: u8 },
    DeleteRangeByScore { min: u8, max: u8 },
    DeleteRangeByRank { start: u8, end: u8 },
}

impl FuzzOp {
    fn from_bytes(bytes: &[u8]) -> Option<(FuzzOp, &[u8])> {
        if bytes.len() < 3 {
            return None;
        }

        let (a, b) = (bytes[1], bytes[2]);
        let rest = &bytes[3..];
        let op = match bytes[0] % 8 {
            0..=3 => FuzzOp::Insert { score: a % 16, item: b % 8 },
            4 | 5 => FuzzOp::Delete { score: a % 16, item: b % 8 },
            6 => FuzzOp::DeleteRangeByScore { min: a % 18, max: b % 18 },
            _ => FuzzOp::DeleteRangeByRank { start: a, end: b },
        };
        Some((op, rest))
    }
}

fn sorted_position(model: &[(f64, u8)], score: f64, item: u8) -> usize {
    model.partition_point(|&(s, i)| s < score || (s == score && i < item))
}

fn main() {
    fuzz!(|data: &[u8]| {
        // Seed the level generator from the input so crashes reproduce.
        let seed = data.iter().fold(0u64, |acc, &b| acc.rotate_left(8) ^ b as u64);
        let mut list = SkipList::with_levels(Natural, Geometric::seeded(seed));
        let mut model: Vec<(f64, u8)> = Vec::new();
        let mut remaining = data;

        while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
            remaining = rest;
            match op {
                FuzzOp::Insert { score, item } => {
                    let score = score as f64;
                    list.insert(score, item);
                    let at = sorted_position(&model, score, item);
                    model.insert(at, (score, item));
                }
                FuzzOp::Delete { score, item } => {
                    let score = score as f64;
                    let at = sorted_position(&model, score, item);
                    let expected = model.get(at) == Some(&(score, item));
                    if expected {
                        model.remove(at);
                    }
                    assert_eq!(list.delete(score, &item), expected, "delete {:?}", op);
                }
                FuzzOp::DeleteRangeByScore { min, max } => {
                    let (min, max) = (min as f64, max as f64);
                    let before = model.len();
                    model.retain(|&(s, _)| !(min <= s && s <= max));
                    assert_eq!(list.delete_range_by_score(min, max), before - model.len());
                }
                FuzzOp::DeleteRangeByRank { start, end } => {
                    let (start, end) = (start as usize, end as usize);
                    let expected = if start > end || start >= model.len() {
                        0
                    } else {
                        model.drain(start..=end.min(model.len() - 1)).count()
                    };
                    assert_eq!(list.delete_range_by_rank(start, end), expected);
                }
            }
            assert_eq!(list.len(), model.len());
        }

        assert!(list.validate());
        let got: Vec<_> = list.iter().map(|e| (e.score(), *e.item())).collect();
        assert_eq!(got, model);

        for i in 0..list.len() {
            let e = match list.get_by_rank(i) {
                Some(e) => e,
                None => panic!("rank {} missing, len {}", i, list.len()),
            };
            assert_eq!(list.get_rank(e.score(), e.item()), i);
        }

        if !model.is_empty() {
            let all = get_range_by_rank(&list, 0, usize::MAX, true);
            assert_eq!(all.total_in_range, model.len());
        }
    });
}
