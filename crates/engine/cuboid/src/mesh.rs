//! Whole-box triangulators

use crate::face::Face;
use crate::face_builder::face_triangles;
use crate::geometry::{Cuboid, Triangle};
use serde::{Deserialize, Serialize};

/// How a box is turned into triangles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Triangulation {
    /// Six faces, 12 triangles for a proper box
    #[default]
    Full,
    /// Four triangles over the near corner and its three axis neighbours.
    /// Used for small decorations where a full box is not worth it.
    Half,
}

impl Triangulation {
    pub fn triangulate(self, cuboid: Cuboid) -> Vec<Triangle> {
        match self {
            Triangulation::Full => surface_triangles(cuboid),
            Triangulation::Half => half_triangles(cuboid).to_vec(),
        }
    }
}

/// Per-face triangles of a box, in [`Face::ALL`] order.
///
/// A proper box gives two triangles per face. A box with a collapsed axis
/// gives some faces none and others several.
pub fn surface_faces(cuboid: Cuboid) -> impl Iterator<Item = (Face, Vec<Triangle>)> {
    Face::iter().map(move |face| {
        let (near, far) = face.probe(cuboid);
        (face, face_triangles(near, far))
    })
}

/// Triangulate the full surface of a box
pub fn surface_triangles(cuboid: Cuboid) -> Vec<Triangle> {
    surface_faces(cuboid)
        .flat_map(|(_, triangles)| triangles)
        .collect()
}

/// Triangulate a box as the corner shape spanned by `near` and the three
/// points one axis step towards `far`.
///
/// With points `p0 = near`, `p1..p3` = `near` with x, y, z taken from `far`,
/// triangle `i` is every point except `p[i]`, in ascending index order.
pub fn half_triangles(cuboid: Cuboid) -> [Triangle; 4] {
    let (n, f) = (cuboid.near, cuboid.far);
    let points = [n, n.with_x(f.x), n.with_y(f.y), n.with_z(f.z)];
    HALF_KEEP.map(|[a, b, c]| Triangle::new(points[a], points[b], points[c]))
}

/// Point indices kept by half-box triangle `i` (all but `i`)
const HALF_KEEP: [[usize; 3]; 4] = [[1, 2, 3], [0, 2, 3], [0, 1, 3], [0, 1, 2]];
