use crate::axis::Axis;
use crate::geometry::Cuboid;
use glam::IVec3;

/// Face direction for box faces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Left,   // -X
    Bottom, // -Y
    Back,   // -Z
    Front,  // +Z
    Top,    // +Y
    Right,  // +X
}

impl Face {
    /// All six faces in surface emission order: the three faces touching
    /// `near`, then the three touching `far`
    pub const ALL: [Face; 6] = [
        Face::Left,
        Face::Bottom,
        Face::Back,
        Face::Front,
        Face::Top,
        Face::Right,
    ];

    /// Axis this face is perpendicular to
    #[inline]
    pub fn axis(self) -> Axis {
        match self {
            Face::Left | Face::Right => Axis::X,
            Face::Bottom | Face::Top => Axis::Y,
            Face::Back | Face::Front => Axis::Z,
        }
    }

    /// Get the outward normal for this face, assuming `near < far` on every axis
    #[inline]
    pub fn normal(self) -> IVec3 {
        match self {
            Face::Left => IVec3::NEG_X,
            Face::Right => IVec3::X,
            Face::Bottom => IVec3::NEG_Y,
            Face::Top => IVec3::Y,
            Face::Back => IVec3::NEG_Z,
            Face::Front => IVec3::Z,
        }
    }

    /// Corner pair handed to the face triangulator for this face.
    ///
    /// One coordinate of the box is substituted so the pair collapses on this
    /// face's axis. For a proper box exactly that axis collapses.
    pub fn probe(self, cuboid: Cuboid) -> (IVec3, IVec3) {
        let (n, f) = (cuboid.near, cuboid.far);
        match self {
            Face::Left => (n, IVec3::new(n.x, f.y, f.z)),
            Face::Bottom => (n, IVec3::new(f.x, n.y, f.z)),
            Face::Back => (n, IVec3::new(f.x, f.y, n.z)),
            Face::Front => (IVec3::new(n.x, n.y, f.z), f),
            Face::Top => (IVec3::new(n.x, f.y, n.z), f),
            Face::Right => (IVec3::new(f.x, n.y, n.z), f),
        }
    }

    /// Iterator over all faces
    #[inline]
    pub fn iter() -> impl Iterator<Item = Face> {
        Self::ALL.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_substitutions() {
        let cuboid = Cuboid::new(1, 2, 3, 4, 5, 6);
        let probes: Vec<_> = Face::iter().map(|face| face.probe(cuboid)).collect();
        assert_eq!(
            probes,
            vec![
                (IVec3::new(1, 2, 3), IVec3::new(1, 5, 6)),
                (IVec3::new(1, 2, 3), IVec3::new(4, 2, 6)),
                (IVec3::new(1, 2, 3), IVec3::new(4, 5, 3)),
                (IVec3::new(1, 2, 6), IVec3::new(4, 5, 6)),
                (IVec3::new(1, 5, 3), IVec3::new(4, 5, 6)),
                (IVec3::new(4, 2, 3), IVec3::new(4, 5, 6)),
            ]
        );
    }

    #[test]
    fn test_probe_collapses_own_axis_only() {
        let cuboid = Cuboid::new(0, 0, 0, 8, 3, 3);
        for face in Face::iter() {
            let (near, far) = face.probe(cuboid);
            for axis in Axis::ALL {
                let collapsed = axis.component(near) == axis.component(far);
                assert_eq!(collapsed, axis == face.axis(), "{:?} on {:?}", face, axis);
            }
        }
    }

    #[test]
    fn test_normals_match_axis() {
        for face in Face::iter() {
            let n = face.normal();
            assert_eq!(face.axis().component(n).abs(), 1);
            assert_eq!(n.abs().element_sum(), 1);
        }
    }
}
