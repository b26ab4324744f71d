//! End-to-end output checks against captured golden text
//!
//! The golden files were captured from the generator that produced the
//! figure data used by the game and the colored-cube demo.

use cuboid::{Figure, OutputFormat};

const HAMSTER_TRIANGLES: &str = include_str!("golden/hamster_triangles.txt");
const PROTOTYPE_COORDS: &str = include_str!("golden/prototype_coords.txt");

/// Report the first differing line instead of two huge strings
fn assert_text_eq(actual: &str, expected: &str) {
    for (i, (a, e)) in actual.lines().zip(expected.lines()).enumerate() {
        assert_eq!(a, e, "line {} differs", i + 1);
    }
    assert_eq!(actual.lines().count(), expected.lines().count());
    assert_eq!(actual, expected);
}

#[test]
fn test_hamster_triangles_match_golden() {
    let figure = Figure::hamster();
    let text = OutputFormat::Triangles.render(figure.groups()).unwrap();
    assert_text_eq(&text, HAMSTER_TRIANGLES);
}

#[test]
fn test_prototype_coords_match_golden() {
    let figure = Figure::prototype();
    let text = OutputFormat::Coords.render(figure.groups()).unwrap();
    assert_text_eq(&text, PROTOTYPE_COORDS);
}

#[test]
fn test_hamster_colors_line_up_with_triangles() {
    let figure = Figure::hamster();
    let colors = OutputFormat::Colors.render(figure.groups()).unwrap();
    let lines: Vec<_> = colors.lines().collect();
    assert_eq!(lines.len(), figure.box_count());

    // body: 12 triangles, 36 vertices, 3 values each
    assert_eq!(lines[0].matches(", ").count(), 36 * 3);
    assert!(lines[0].starts_with("1, 0.84, 0, "));
    assert!(lines[1].starts_with("1, 0.9, 0.05, "));
    // ears: 4 triangles
    assert_eq!(lines[2].matches(", ").count(), 12 * 3);
    assert!(lines[2].starts_with("0.32, 0.26, 0.1, "));
}

#[test]
fn test_body_worked_example() {
    let figure = Figure::hamster();
    let body = figure.groups().next().unwrap();
    assert_eq!(body.triangles.len(), 12);
    for p in body.triangles.iter().flat_map(|t| t.vertices) {
        assert!([0, 8].contains(&p.x));
        assert!([0, 3].contains(&p.y));
        assert!([0, 3].contains(&p.z));
    }
}
