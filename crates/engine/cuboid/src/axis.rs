use glam::IVec3;

/// Cyclic permutation `(a, b, c) -> (b, c, a)`
#[inline]
pub fn rotate_forward(p: IVec3) -> IVec3 {
    IVec3::new(p.y, p.z, p.x)
}

/// Cyclic permutation `(a, b, c) -> (c, a, b)`, the inverse of [`rotate_forward`]
#[inline]
pub fn rotate_backward(p: IVec3) -> IVec3 {
    IVec3::new(p.z, p.x, p.y)
}

/// Coordinate axis
///
/// The face builder only knows how to emit a quad lying on a fixed X plane.
/// `to_x` moves an axis into the X slot so the same builder serves the Y and
/// Z planes, and `from_x` moves the result back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All three axes in test order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Coordinate of `p` along this axis
    #[inline]
    pub fn component(self, p: IVec3) -> i32 {
        match self {
            Axis::X => p.x,
            Axis::Y => p.y,
            Axis::Z => p.z,
        }
    }

    /// Permute `p` so this axis lands in the X slot
    #[inline]
    pub fn to_x(self, p: IVec3) -> IVec3 {
        match self {
            Axis::X => p,
            Axis::Y => rotate_forward(p),
            Axis::Z => rotate_backward(p),
        }
    }

    /// Undo [`Axis::to_x`]
    #[inline]
    pub fn from_x(self, p: IVec3) -> IVec3 {
        match self {
            Axis::X => p,
            Axis::Y => rotate_backward(p),
            Axis::Z => rotate_forward(p),
        }
    }

    /// Convert to char (x, y, z)
    pub fn to_char(self) -> char {
        match self {
            Axis::X => 'x',
            Axis::Y => 'y',
            Axis::Z => 'z',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [IVec3; 4] = [
        IVec3::new(0, 0, 0),
        IVec3::new(1, 2, 3),
        IVec3::new(-4, 7, -1),
        IVec3::new(8, 8, 3),
    ];

    #[test]
    fn test_rotations() {
        assert_eq!(rotate_forward(IVec3::new(1, 2, 3)), IVec3::new(2, 3, 1));
        assert_eq!(rotate_backward(IVec3::new(1, 2, 3)), IVec3::new(3, 1, 2));
    }

    #[test]
    fn test_rotations_are_inverses() {
        for p in SAMPLES {
            assert_eq!(rotate_backward(rotate_forward(p)), p);
            assert_eq!(rotate_forward(rotate_backward(p)), p);
        }
    }

    #[test]
    fn test_to_x_moves_axis_into_x_slot() {
        let p = IVec3::new(1, 2, 3);
        assert_eq!(Axis::X.to_x(p).x, 1);
        assert_eq!(Axis::Y.to_x(p).x, 2);
        assert_eq!(Axis::Z.to_x(p).x, 3);
    }

    #[test]
    fn test_from_x_undoes_to_x() {
        for axis in Axis::ALL {
            for p in SAMPLES {
                assert_eq!(axis.from_x(axis.to_x(p)), p, "axis {}", axis.to_char());
                assert_eq!(axis.component(p), axis.to_x(p).x);
            }
        }
    }
}
