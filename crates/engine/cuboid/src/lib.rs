//! Box-to-triangle decomposition for cuboid figures.
//!
//! A figure is a table of axis-aligned boxes grouped into colored parts. Each
//! box is triangulated either as a full surface (12 triangles) or as the
//! cheaper half-box corner shape (4 triangles), and the result is written out
//! as static initializer text for another program.
//!
//! ```
//! use cuboid::{mesh::surface_triangles, Cuboid};
//!
//! let body = Cuboid::new(0, 0, 0, 8, 3, 3);
//! assert_eq!(surface_triangles(body).len(), 12);
//! ```

pub mod axis;
pub mod config;
pub mod error;
pub mod face;
pub mod face_builder;
pub mod figure;
pub mod format;
pub mod geometry;
pub mod mesh;

pub use axis::{rotate_backward, rotate_forward, Axis};
pub use config::{FigureConfig, PartConfig};
pub use error::{Error, Result};
pub use face::Face;
pub use face_builder::{face_quad, face_triangles};
pub use figure::{Figure, MeshGroup, Part};
pub use format::OutputFormat;
pub use geometry::{Cuboid, Triangle};
pub use mesh::{half_triangles, surface_faces, surface_triangles, Triangulation};

// Re-export glam for convenience
pub use glam;
