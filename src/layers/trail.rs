use std::collections::VecDeque;
use std::num::NonZeroUsize;

use crate::foundation::core::Point3;

/// How many past positions a [`Trail`] keeps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TrailCapacity {
    /// Keep every position. Memory grows by one point per frame.
    Unbounded,
    /// Keep the most recent `n` positions, dropping the oldest first.
    Bounded(NonZeroUsize),
}

impl TrailCapacity {
    /// Default bound, in points.
    pub const DEFAULT_BOUND: usize = 4096;

    /// Bounded capacity; `None` for zero.
    pub fn bounded(n: usize) -> Option<Self> {
        NonZeroUsize::new(n).map(Self::Bounded)
    }
}

impl Default for TrailCapacity {
    fn default() -> Self {
        Self::Bounded(NonZeroUsize::new(Self::DEFAULT_BOUND).unwrap_or(NonZeroUsize::MIN))
    }
}

/// Append-only history of a moving marker, oldest first.
#[derive(Clone, Debug, Default)]
pub struct Trail {
    points: VecDeque<Point3>,
    capacity: TrailCapacity,
    pushed: u64,
}

impl Trail {
    /// Empty trail.
    pub fn new(capacity: TrailCapacity) -> Self {
        let points = match capacity {
            TrailCapacity::Unbounded => VecDeque::new(),
            TrailCapacity::Bounded(n) => VecDeque::with_capacity(n.get().min(1024)),
        };
        Self {
            points,
            capacity,
            pushed: 0,
        }
    }

    /// Append `p`, dropping the oldest point when full.
    pub fn push(&mut self, p: Point3) {
        if let TrailCapacity::Bounded(n) = self.capacity
            && self.points.len() == n.get()
        {
            self.points.pop_front();
        }
        self.points.push_back(p);
        self.pushed += 1;
    }

    /// Points currently kept.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True before the first push.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total positions ever pushed, including ones since dropped.
    pub fn pushed(&self) -> u64 {
        self.pushed
    }

    /// Points dropped to respect the capacity.
    pub fn dropped(&self) -> u64 {
        self.pushed - self.points.len() as u64
    }

    /// Configured capacity.
    pub fn capacity(&self) -> TrailCapacity {
        self.capacity
    }

    /// Kept points, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Point3> + '_ {
        self.points.iter()
    }

    /// Most recent point.
    pub fn last(&self) -> Option<Point3> {
        self.points.back().copied()
    }

    /// Copy of the kept points, oldest first.
    pub fn to_vec(&self) -> Vec<Point3> {
        self.points.iter().copied().collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layers/trail.rs"]
mod tests;
