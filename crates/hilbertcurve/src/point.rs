//! Lightweight N‑dimensional lattice point returned by the transforms.

use std::{fmt, ops::Deref, vec::Vec};

use smallvec::SmallVec;

/// Compact N‑dimensional point; index `i` is the coordinate on axis `i`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point(pub SmallVec<[u64; 8]>);

impl Point {
    /// Create a new `Point` from a backing vector.
    pub fn new(vec: impl Into<SmallVec<[u64; 8]>>) -> Self {
        Self(vec.into())
    }

    /// Manhattan (L1) distance between two points.
    ///
    /// Preconditions: both points must have the same dimensionality. In debug
    /// builds a mismatch triggers a `debug_assert!`; in release builds the
    /// distance is computed over the shared prefix of axes.
    pub fn manhattan_distance(&self, other: &Self) -> u64 {
        debug_assert!(
            self.len() == other.len(),
            "Point::manhattan_distance called with differing dimensions: {} vs {}",
            self.len(),
            other.len()
        );
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| a.abs_diff(*b))
            .fold(0u64, u64::saturating_add)
    }

    /// True when the points differ by exactly one step on exactly one axis.
    pub fn is_adjacent(&self, other: &Self) -> bool {
        self.len() == other.len() && self.manhattan_distance(other) == 1
    }

    /// Return the point's coordinates as a slice.
    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    /// Dimensionality of the point.
    pub fn dimension(&self) -> u32 {
        self.0.len() as u32
    }
}

impl From<Point> for Vec<u64> {
    fn from(val: Point) -> Self {
        val.0.to_vec()
    }
}

impl From<&Point> for Vec<u64> {
    fn from(val: &Point) -> Self {
        val.0.to_vec()
    }
}

impl AsRef<[u64]> for Point {
    fn as_ref(&self) -> &[u64] {
        &self.0
    }
}

impl Deref for Point {
    type Target = [u64];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point() {
        let v = Point::new(vec![2, 2]);
        assert_eq!(v.len(), 2);
        assert_eq!(v.dimension(), 2);
        assert_eq!(Vec::<u64>::from(&v), vec![2, 2]);
    }

    #[test]
    fn manhattan_distance() {
        let a = Point::new(vec![2, 2]);
        assert_eq!(a.manhattan_distance(&Point::new(vec![2, 1])), 1);
        assert_eq!(a.manhattan_distance(&Point::new(vec![0, 2])), 2);
        assert_eq!(a.manhattan_distance(&Point::new(vec![0, 0])), 4);
        assert_eq!(a.manhattan_distance(&a), 0);

        let far = Point::new(vec![u64::MAX, u64::MAX]);
        let origin = Point::new(vec![0, 0]);
        assert_eq!(far.manhattan_distance(&origin), u64::MAX);
    }

    #[test]
    fn adjacency() {
        let a = Point::new(vec![1, 1, 1]);
        assert!(a.is_adjacent(&Point::new(vec![1, 2, 1])));
        assert!(a.is_adjacent(&Point::new(vec![0, 1, 1])));
        assert!(!a.is_adjacent(&Point::new(vec![2, 2, 1])));
        assert!(!a.is_adjacent(&a));
    }

    #[test]
    fn display() {
        assert_eq!(Point::new(vec![2, 3, 0]).to_string(), "[2, 3, 0]");
    }
}
