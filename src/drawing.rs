// Polygon, start-vertex marker and class label rendering

use ab_glyph::{FontRef, PxScale};
use anyhow::{Context, Result};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut, draw_text_mut};

use crate::colors;
use crate::labels::Annotation;

const START_MARKER_RADIUS: i32 = 5;
const LABEL_SCALE: f32 = 18.0;

/// Load the embedded label font.
pub fn label_font() -> Result<FontRef<'static>> {
    FontRef::try_from_slice(include_bytes!("../assets/DejaVuSans.ttf"))
        .context("loading embedded label font")
}

/// Render one annotation onto the image: the closed quadrilateral, then a
/// filled yellow circle on the start vertex, then the category text. Later
/// draws occlude earlier ones, so the order is part of the contract.
pub fn draw_annotation(img: &mut RgbImage, ann: &Annotation, font: &FontRef<'_>) {
    let color = colors::class_color(&ann.category);
    // Difficult instances get a thin stroke so they read as secondary.
    let thickness = if ann.is_difficult() { 1 } else { 2 };

    let corners = ann.points.map(|(x, y)| (x as i32, y as i32));
    for i in 0..4 {
        draw_thick_line_segment(img, corners[i], corners[(i + 1) % 4], color, thickness);
    }

    let (x0, y0) = corners[0];
    draw_filled_circle_mut(img, (x0, y0), START_MARKER_RADIUS, colors::START_MARKER);
    draw_text_mut(
        img,
        color,
        x0,
        y0,
        PxScale::from(LABEL_SCALE),
        font,
        &ann.category,
    );
}

/// Stroke a line segment `thickness` pixels wide by repeating it at one-pixel
/// x and y offsets, which widens the stroke regardless of the segment angle.
/// `draw_line_segment_mut` clips to the image bounds, so off-image
/// coordinates are harmless.
fn draw_thick_line_segment(
    img: &mut RgbImage,
    start: (i32, i32),
    end: (i32, i32),
    color: Rgb<u8>,
    thickness: u32,
) {
    let (sx, sy) = (start.0 as f32, start.1 as f32);
    let (ex, ey) = (end.0 as f32, end.1 as f32);
    for t in 0..thickness {
        let o = t as f32;
        draw_line_segment_mut(img, (sx + o, sy), (ex + o, ey), color);
        draw_line_segment_mut(img, (sx, sy + o), (ex, ey + o), color);
    }
}
