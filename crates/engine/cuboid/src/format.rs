//! Text serializers for pasting figure data into C++ source
//!
//! Coordinates are integers printed with a `.0f` suffix so every value reads
//! as a float literal.

use crate::error::Result;
use crate::figure::MeshGroup;
use glam::IVec3;
use std::fmt;
use std::io::Write;

/// Output text layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One `X.0f,Y.0f,Z.0f,` line per vertex
    Coords,
    /// One `Triangle({...}),` initializer per triangle, blank line after each box
    #[default]
    Triangles,
    /// One line per box repeating its color once per vertex
    Colors,
}

/// Displays a point as `X.0f,Y.0f,Z.0f,`
struct FloatLiteral(IVec3);

impl fmt::Display for FloatLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.0f,{}.0f,{}.0f,", self.0.x, self.0.y, self.0.z)
    }
}

impl OutputFormat {
    /// Write one box group
    pub fn write_group<W: Write>(self, out: &mut W, group: &MeshGroup<'_>) -> Result<()> {
        match self {
            OutputFormat::Coords => {
                for p in group.triangles.iter().flat_map(|t| t.vertices) {
                    writeln!(out, "{}", FloatLiteral(p))?;
                }
            }
            OutputFormat::Triangles => {
                for t in &group.triangles {
                    let [a, b, c] = t.vertices.map(FloatLiteral);
                    writeln!(out, "Triangle({{{} {} {}}}),", a, b, c)?;
                }
                writeln!(out)?;
            }
            OutputFormat::Colors => {
                let [r, g, b] = group.color;
                for _ in 0..group.triangles.len() * 3 {
                    write!(out, "{}, {}, {}, ", r, g, b)?;
                }
                writeln!(out)?;
            }
        }
        Ok(())
    }

    /// Write every group in order, returning the number of triangles written
    pub fn write_all<'a, W, I>(self, out: &mut W, groups: I) -> Result<usize>
    where
        W: Write,
        I: IntoIterator<Item = MeshGroup<'a>>,
    {
        let mut triangle_count = 0;
        for group in groups {
            self.write_group(out, &group)?;
            triangle_count += group.triangles.len();
        }
        out.flush()?;
        Ok(triangle_count)
    }

    /// Render to a string
    pub fn render<'a>(self, groups: impl IntoIterator<Item = MeshGroup<'a>>) -> Result<String> {
        let mut buf = Vec::new();
        self.write_all(&mut buf, groups)?;
        // Every byte written above comes from ASCII formatting
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
