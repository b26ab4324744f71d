//! Box and triangle value types

use glam::IVec3;
use serde::{Deserialize, Serialize};

/// Three vertices in emission order
///
/// Winding is whatever the triangulators produce; nothing here checks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    pub vertices: [IVec3; 3],
}

impl Triangle {
    pub const fn new(a: IVec3, b: IVec3, c: IVec3) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// Apply `f` to every vertex, keeping order
    pub fn map(self, f: impl Fn(IVec3) -> IVec3) -> Self {
        Self {
            vertices: self.vertices.map(f),
        }
    }
}

/// Axis-aligned box given by two opposite corners.
///
/// `near` is `(x, y, z)` and `far` is `(a, b, c)`. The corners are not
/// normalized: `near` may be greater than `far` on any axis, and an axis with
/// equal coordinates is a collapsed (degenerate) pair.
///
/// Serialized as the flat table row `[x, y, z, a, b, c]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[i32; 6]", into = "[i32; 6]")]
pub struct Cuboid {
    pub near: IVec3,
    pub far: IVec3,
}

impl Cuboid {
    /// Create from the six table scalars `(x, y, z, a, b, c)`
    pub const fn new(x: i32, y: i32, z: i32, a: i32, b: i32, c: i32) -> Self {
        Self {
            near: IVec3::new(x, y, z),
            far: IVec3::new(a, b, c),
        }
    }

    pub const fn from_corners(near: IVec3, far: IVec3) -> Self {
        Self { near, far }
    }

    /// True when no axis pair is collapsed
    #[inline]
    pub fn is_proper(&self) -> bool {
        self.near.cmpne(self.far).all()
    }

    /// The eight corners, picking near or far per axis (x varies fastest)
    pub fn corners(&self) -> [IVec3; 8] {
        let (n, f) = (self.near, self.far);
        std::array::from_fn(|i| {
            IVec3::new(
                if i & 1 == 0 { n.x } else { f.x },
                if i & 2 == 0 { n.y } else { f.y },
                if i & 4 == 0 { n.z } else { f.z },
            )
        })
    }
}

impl From<[i32; 6]> for Cuboid {
    fn from(row: [i32; 6]) -> Self {
        let [x, y, z, a, b, c] = row;
        Cuboid::new(x, y, z, a, b, c)
    }
}

impl From<Cuboid> for [i32; 6] {
    fn from(cuboid: Cuboid) -> Self {
        let (n, f) = (cuboid.near, cuboid.far);
        [n.x, n.y, n.z, f.x, f.y, f.z]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_is_proper() {
        assert!(Cuboid::new(0, 0, 0, 8, 3, 3).is_proper());
        assert!(Cuboid::new(7, 3, 6, 8, 2, 7).is_proper());
        assert!(!Cuboid::new(0, 0, 0, 0, 3, 3).is_proper());
        assert!(!Cuboid::new(0, 0, 0, 8, 3, 0).is_proper());
    }

    #[test]
    fn test_corners_are_distinct_for_proper_box() {
        let corners: HashSet<_> = Cuboid::new(0, 0, 0, 8, 3, 3).corners().into_iter().collect();
        assert_eq!(corners.len(), 8);
        assert!(corners.contains(&IVec3::new(8, 3, 3)));
        assert!(corners.contains(&IVec3::new(0, 3, 0)));
    }

    #[test]
    fn test_table_row_conversion() {
        let cuboid = Cuboid::from([-3, 1, 2, 0, 2, 3]);
        assert_eq!(cuboid.near, IVec3::new(-3, 1, 2));
        assert_eq!(cuboid.far, IVec3::new(0, 2, 3));
        assert_eq!(<[i32; 6]>::from(cuboid), [-3, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn test_triangle_map_keeps_order() {
        let t = Triangle::new(IVec3::X, IVec3::Y, IVec3::Z).map(|p| p * 2);
        assert_eq!(t.vertices, [IVec3::X * 2, IVec3::Y * 2, IVec3::Z * 2]);
    }
}
