use crate::axis::Axis;
use crate::geometry::Triangle;
use glam::IVec3;

/// Build the two triangles of a quad lying on the plane `X = x`.
///
/// `(y, z)` and `(b, c)` are opposite corners of the quad in the YZ plane.
/// The corner list is read from the flattened scalars
/// `[y, z, b, c, y, c, b, z]` as four pairs `q0..q3`, and emitted as
/// `(q0, q1, q2)` then `(q0, q1, q3)`. Printed output depends on this exact
/// order.
pub fn face_quad(x: i32, y: i32, z: i32, b: i32, c: i32) -> [Triangle; 2] {
    let flat = [y, z, b, c, y, c, b, z];
    let q: [IVec3; 4] = std::array::from_fn(|i| IVec3::new(x, flat[2 * i], flat[2 * i + 1]));
    [Triangle::new(q[0], q[1], q[2]), Triangle::new(q[0], q[1], q[3])]
}

/// Triangulate every face whose axis pair is collapsed between `near` and `far`.
///
/// Axes are tested independently in X, Y, Z order, so the result holds 0, 2,
/// 4 or 6 triangles. Y and Z faces are permuted into the X slot, built with
/// [`face_quad`], and permuted back.
pub fn face_triangles(near: IVec3, far: IVec3) -> Vec<Triangle> {
    let mut triangles = Vec::new();
    for axis in Axis::ALL {
        if axis.component(near) != axis.component(far) {
            continue;
        }
        let n = axis.to_x(near);
        let f = axis.to_x(far);
        triangles.extend(
            face_quad(n.x, n.y, n.z, f.y, f.z)
                .into_iter()
                .map(|t| t.map(|p| axis.from_x(p))),
        );
    }
    triangles
}
