//! Figures: colored groups of boxes and the built-in hamster tables

use crate::error::{Error, Result};
use crate::geometry::{Cuboid, Triangle};
use crate::mesh::{surface_faces, Triangulation};

pub const BODY_COLOR: [f32; 3] = [1.0, 0.84, 0.0];
pub const HEAD_COLOR: [f32; 3] = [1.0, 0.9, 0.05];
pub const OTHER_COLOR: [f32; 3] = [0.32, 0.26, 0.1];

const BODY: [Cuboid; 1] = [Cuboid::new(0, 0, 0, 8, 3, 3)];

const HEAD: [Cuboid; 1] = [Cuboid::new(7, 0, 3, 11, 3, 6)];

const EARS: [Cuboid; 2] = [
    Cuboid::new(7, 0, 6, 8, 1, 7), // left
    Cuboid::new(7, 3, 6, 8, 2, 7), // right
];

const TAIL_AND_FEET: [Cuboid; 7] = [
    Cuboid::new(-3, 1, 2, 0, 2, 3), // tail
    Cuboid::new(-3, 1, 3, -2, 2, 5),
    Cuboid::new(-4, 1, 4, -3, 2, 5),
    Cuboid::new(7, 0, -1, 8, 1, 0), // feet
    Cuboid::new(7, 2, -1, 8, 3, 0),
    Cuboid::new(0, 2, -1, 1, 3, 0),
    Cuboid::new(0, 0, -1, 1, 1, 0),
];

// First draft: one flat list, short tail, box ears
const PROTOTYPE: [Cuboid; 9] = [
    Cuboid::new(0, 0, 0, 8, 3, 3),
    Cuboid::new(7, 0, 3, 11, 3, 6),
    Cuboid::new(7, 0, 6, 8, 1, 7),
    Cuboid::new(7, 2, 6, 8, 3, 7),
    Cuboid::new(-1, 1, 2, 0, 2, 3),
    Cuboid::new(7, 0, -1, 8, 1, 0),
    Cuboid::new(7, 2, -1, 8, 3, 0),
    Cuboid::new(0, 2, -1, 1, 3, 0),
    Cuboid::new(0, 0, -1, 1, 1, 0),
];

/// Named list of boxes sharing a color and a triangulation
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub name: String,
    pub color: [f32; 3],
    pub triangulation: Triangulation,
    pub boxes: Vec<Cuboid>,
}

impl Part {
    pub fn new(
        name: impl Into<String>,
        color: [f32; 3],
        triangulation: Triangulation,
        boxes: impl Into<Vec<Cuboid>>,
    ) -> Self {
        Self {
            name: name.into(),
            color,
            triangulation,
            boxes: boxes.into(),
        }
    }
}

/// Triangles of a single box, tagged with the part it came from
#[derive(Debug, Clone, PartialEq)]
pub struct MeshGroup<'a> {
    pub part: &'a str,
    /// Index of the box within its part
    pub index: usize,
    pub color: [f32; 3],
    pub triangles: Vec<Triangle>,
}

/// Ordered list of parts
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Figure {
    pub parts: Vec<Part>,
}

impl Figure {
    pub fn new(parts: Vec<Part>) -> Self {
        Self { parts }
    }

    /// The colored hamster: body, head, half-box ears, tail and feet
    pub fn hamster() -> Self {
        Self::new(vec![
            Part::new("body", BODY_COLOR, Triangulation::Full, BODY),
            Part::new("head", HEAD_COLOR, Triangulation::Full, HEAD),
            Part::new("ears", OTHER_COLOR, Triangulation::Half, EARS),
            Part::new("tail_and_feet", OTHER_COLOR, Triangulation::Full, TAIL_AND_FEET),
        ])
    }

    /// The earlier single-list hamster, every box fully triangulated
    pub fn prototype() -> Self {
        Self::new(vec![Part::new(
            "hamster",
            BODY_COLOR,
            Triangulation::Full,
            PROTOTYPE,
        )])
    }

    pub fn box_count(&self) -> usize {
        self.parts.iter().map(|part| part.boxes.len()).sum()
    }

    /// Triangulate every box, one group per box in table order
    pub fn groups(&self) -> impl Iterator<Item = MeshGroup<'_>> {
        self.parts.iter().flat_map(|part| {
            tracing::debug!(
                "[Figure::groups] part '{}': {} boxes, {:?}",
                part.name,
                part.boxes.len(),
                part.triangulation
            );
            part.boxes
                .iter()
                .enumerate()
                .map(move |(index, &cuboid)| MeshGroup {
                    part: &part.name,
                    index,
                    color: part.color,
                    triangles: part.triangulation.triangulate(cuboid),
                })
        })
    }

    /// Check the table before generating from it.
    ///
    /// Every fully triangulated box must produce exactly one face per face
    /// probe, every color must lie in `[0, 1]`, and the figure must hold at
    /// least one box.
    pub fn validate(&self) -> Result<()> {
        if self.box_count() == 0 {
            return Err(Error::EmptyFigure);
        }

        for part in &self.parts {
            if part.color.iter().any(|c| !(0.0..=1.0).contains(c)) {
                return Err(Error::InvalidColor {
                    part: part.name.clone(),
                    color: part.color,
                });
            }

            if part.triangulation != Triangulation::Full {
                continue;
            }

            for (index, &cuboid) in part.boxes.iter().enumerate() {
                let bad_face = surface_faces(cuboid).find(|(_, triangles)| triangles.len() != 2);
                if let Some((face, triangles)) = bad_face {
                    tracing::warn!(
                        "[Figure::validate] part '{}' box {}: {:?} face produced {} triangles",
                        part.name,
                        index,
                        face,
                        triangles.len()
                    );
                    return Err(Error::DegenerateBox {
                        part: part.name.clone(),
                        index,
                        near: cuboid.near,
                        far: cuboid.far,
                    });
                }
            }
        }

        Ok(())
    }
}
