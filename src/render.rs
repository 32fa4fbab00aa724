//! SVG output for a grown tree.
//!
//! The canvas is a square of side `2 * (radius + border)`. Tree
//! coordinates are origin-centered, so every point is shifted by
//! `(radius + border, radius + border)` to put the disk in the middle.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use glam::DVec2;
use grow_core::branch::Branch;
use grow_core::tree::Tree;

/// Stroke and margin settings for the drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SvgStyle {
    /// Margin around the disk, in drawing units (centimetres).
    pub border: f64,
    pub stroke_width: f64,
    /// Stroke color as RGB percentages.
    pub stroke: [f64; 3],
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            border: 1.0,
            stroke_width: 0.01,
            stroke: [30.0, 65.0, 80.0],
        }
    }
}

impl SvgStyle {
    /// Side length of the square canvas for a disk of `radius`.
    pub fn canvas_size(&self, radius: f64) -> f64 {
        (radius + self.border) * 2.0
    }

    fn center(&self, radius: f64) -> DVec2 {
        DVec2::splat(radius + self.border)
    }
}

/// Writes `branches` as an SVG document, one `<line>` per branch in order.
///
/// ### Parameters
/// - `out` - Destination for the document.
/// - `branches` - Segments to draw, in growth order.
/// - `radius` - Disk radius used to size the canvas.
/// - `style` - Stroke and margin settings.
pub fn write_svg<W: Write>(
    mut out: W,
    branches: &[Branch],
    radius: f64,
    style: &SvgStyle,
) -> io::Result<()> {
    let size = style.canvas_size(radius);
    let center = style.center(radius);
    let [r, g, b] = style.stroke;

    writeln!(out, r#"<?xml version="1.0" encoding="utf-8" ?>"#)?;
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{size}cm" height="{size}cm" viewBox="0 0 {size} {size}">"#
    )?;
    for branch in branches {
        let start = branch.base() + center;
        let end = branch.tip() + center;
        writeln!(
            out,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="rgb({r}%,{g}%,{b}%)" stroke-width="{}" />"#,
            start.x, start.y, end.x, end.y, style.stroke_width
        )?;
    }
    writeln!(out, "</svg>")?;
    out.flush()
}

/// Renders `tree` into a file at `path`, replacing any existing file.
pub fn save(path: &Path, tree: &Tree, style: &SvgStyle) -> io::Result<()> {
    let file = File::create(path)?;
    write_svg(
        BufWriter::new(file),
        tree.branches(),
        tree.disk_radius(),
        style,
    )
}
