//! Random primitives: uniform integer draws and uniform picks.
//!
//! Sequences and keyed mappings both implement [`Pickable`], which
//! materializes the candidate values into one list. [`pick`] then draws
//! uniformly from that list, so there is a single selection path for
//! every kind of collection.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::BuildHasher;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::{DiceError, DiceResult};

/// Draw an integer uniformly from the closed interval `[min, max]`.
///
/// Returns [`DiceError::InvalidRange`] when `max < min`.
pub fn uniform_int<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> DiceResult<i64> {
    if max < min {
        return Err(DiceError::InvalidRange { min, max });
    }
    Ok(rng.random_range(min..=max))
}

/// A collection whose values can be drawn at random.
///
/// Only the values take part in selection; keys of a mapping are ignored
/// and no ordering is assumed.
pub trait Pickable {
    /// The type of the values being picked.
    type Item;

    /// All candidate values, in any order.
    fn candidates(&self) -> Vec<&Self::Item>;
}

impl<T> Pickable for [T] {
    type Item = T;

    fn candidates(&self) -> Vec<&T> {
        self.iter().collect()
    }
}

impl<T, const N: usize> Pickable for [T; N] {
    type Item = T;

    fn candidates(&self) -> Vec<&T> {
        self.iter().collect()
    }
}

impl<T> Pickable for Vec<T> {
    type Item = T;

    fn candidates(&self) -> Vec<&T> {
        self.iter().collect()
    }
}

impl<T> Pickable for VecDeque<T> {
    type Item = T;

    fn candidates(&self) -> Vec<&T> {
        self.iter().collect()
    }
}

impl<K, V, S: BuildHasher> Pickable for HashMap<K, V, S> {
    type Item = V;

    fn candidates(&self) -> Vec<&V> {
        self.values().collect()
    }
}

impl<K, V> Pickable for BTreeMap<K, V> {
    type Item = V;

    fn candidates(&self) -> Vec<&V> {
        self.values().collect()
    }
}

// A lone value is a collection of one; `None` is an empty one.
impl<T> Pickable for Option<T> {
    type Item = T;

    fn candidates(&self) -> Vec<&T> {
        self.iter().collect()
    }
}

/// Pick one value uniformly at random. Returns `None` for an empty collection.
///
/// The collection is never mutated.
pub fn pick<'a, C, R>(rng: &mut R, collection: &'a C) -> Option<&'a C::Item>
where
    C: Pickable + ?Sized,
    R: Rng + ?Sized,
{
    collection.candidates().choose(rng).copied()
}
