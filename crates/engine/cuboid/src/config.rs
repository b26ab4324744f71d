//! Figure tables loaded from TOML
//!
//! ```toml
//! [[part]]
//! name = "body"
//! color = [1.0, 0.84, 0.0]
//! boxes = [[0, 0, 0, 8, 3, 3]]
//!
//! [[part]]
//! name = "ears"
//! color = [0.32, 0.26, 0.1]
//! triangulation = "half"
//! boxes = [[7, 0, 6, 8, 1, 7], [7, 3, 6, 8, 2, 7]]
//! ```

use crate::error::Result;
use crate::figure::{Figure, Part};
use crate::geometry::Cuboid;
use crate::mesh::Triangulation;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One `[[part]]` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartConfig {
    pub name: String,
    pub color: [f32; 3],
    #[serde(default)]
    pub triangulation: Triangulation,
    pub boxes: Vec<Cuboid>,
}

/// Top-level figure file
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FigureConfig {
    #[serde(rename = "part", default)]
    pub parts: Vec<PartConfig>,
}

impl From<PartConfig> for Part {
    fn from(config: PartConfig) -> Self {
        Part::new(config.name, config.color, config.triangulation, config.boxes)
    }
}

impl From<&Part> for PartConfig {
    fn from(part: &Part) -> Self {
        Self {
            name: part.name.clone(),
            color: part.color,
            triangulation: part.triangulation,
            boxes: part.boxes.clone(),
        }
    }
}

impl From<FigureConfig> for Figure {
    fn from(config: FigureConfig) -> Self {
        Figure::new(config.parts.into_iter().map(Part::from).collect())
    }
}

impl From<&Figure> for FigureConfig {
    fn from(figure: &Figure) -> Self {
        Self {
            parts: figure.parts.iter().map(PartConfig::from).collect(),
        }
    }
}

impl Figure {
    /// Parse a figure from TOML text and check it with [`Figure::validate`]
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: FigureConfig = toml::from_str(text)?;
        let figure = Figure::from(config);
        figure.validate()?;
        Ok(figure)
    }

    /// Load a figure file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let figure = Self::from_toml_str(&text)?;
        tracing::debug!(
            "[Figure::load] {}: {} parts, {} boxes",
            path.display(),
            figure.parts.len(),
            figure.box_count()
        );
        Ok(figure)
    }
}
