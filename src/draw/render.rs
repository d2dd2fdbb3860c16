//! Cairo-based rendering functions for shapes.

use super::color::Color;
use super::shape::Shape;
use crate::util;

/// Renders a single shape to a Cairo context.
///
/// Dispatches to the appropriate internal rendering function based on shape
/// type. Handles all shape variants: Stroke, Rect, Circle, and Triangle.
///
/// # Arguments
/// * `ctx` - Cairo drawing context to render to
/// * `shape` - The shape to render
pub fn render_shape(ctx: &cairo::Context, shape: &Shape) {
    match shape {
        Shape::Stroke {
            points,
            color,
            thick,
        } => {
            render_stroke_borrowed(ctx, points, *color, *thick);
        }
        Shape::Rect {
            x,
            y,
            w,
            h,
            color,
            thick,
            filled,
        } => {
            render_rect(ctx, *x, *y, *w, *h, *color, *thick, *filled);
        }
        Shape::Circle {
            cx,
            cy,
            radius,
            color,
            thick,
            filled,
        } => {
            render_circle(ctx, *cx, *cy, *radius, *color, *thick, *filled);
        }
        Shape::Triangle {
            apex_x,
            apex_y,
            base_x,
            base_y,
            color,
            thick,
            filled,
        } => {
            render_triangle(ctx, *apex_x, *apex_y, *base_x, *base_y, *color, *thick, *filled);
        }
    }
}

/// Render a freehand stroke (polyline through points).
///
/// Accepts a borrowed slice so live previews avoid cloning the points vector
/// on every pointer sample.
pub fn render_stroke_borrowed(
    ctx: &cairo::Context,
    points: &[(i32, i32)],
    color: Color,
    thick: f64,
) {
    if points.is_empty() {
        return;
    }

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(thick);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    // Start at first point
    let (x0, y0) = points[0];
    ctx.move_to(x0 as f64, y0 as f64);

    // Draw lines through all points
    for &(x, y) in &points[1..] {
        ctx.line_to(x as f64, y as f64);
    }

    let _ = ctx.stroke();
}

/// Render a rectangle (outline or filled)
#[allow(clippy::too_many_arguments)]
fn render_rect(
    ctx: &cairo::Context,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    color: Color,
    thick: f64,
    filled: bool,
) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(thick);
    ctx.set_line_join(cairo::LineJoin::Miter);

    // Normalize to handle any caller passing negative dimensions
    // (the editor already normalizes, but this ensures consistent rendering)
    let (norm_x, norm_w) = if w >= 0 {
        (x as f64, w as f64)
    } else {
        ((x + w) as f64, (-w) as f64)
    };
    let (norm_y, norm_h) = if h >= 0 {
        (y as f64, h as f64)
    } else {
        ((y + h) as f64, (-h) as f64)
    };

    ctx.rectangle(norm_x, norm_y, norm_w, norm_h);
    if filled {
        let _ = ctx.fill();
    } else {
        let _ = ctx.stroke();
    }
}

/// Render a circle around its center point
fn render_circle(
    ctx: &cairo::Context,
    cx: i32,
    cy: i32,
    radius: f64,
    color: Color,
    thick: f64,
    filled: bool,
) {
    if radius <= 0.0 {
        return;
    }

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(thick);

    ctx.arc(cx as f64, cy as f64, radius, 0.0, 2.0 * std::f64::consts::PI);
    if filled {
        let _ = ctx.fill();
    } else {
        let _ = ctx.stroke();
    }
}

/// Render an isosceles triangle (apex above a horizontal base)
#[allow(clippy::too_many_arguments)]
fn render_triangle(
    ctx: &cairo::Context,
    apex_x: i32,
    apex_y: i32,
    base_x: i32,
    base_y: i32,
    color: Color,
    thick: f64,
    filled: bool,
) {
    // Third vertex mirrors the dragged base vertex across the apex column
    let mirror_x = util::mirrored_base_x(apex_x, base_x);

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(thick);
    ctx.set_line_join(cairo::LineJoin::Miter);

    ctx.move_to(apex_x as f64, apex_y as f64);
    ctx.line_to(base_x as f64, base_y as f64);
    ctx.line_to(mirror_x as f64, base_y as f64);
    ctx.close_path();
    if filled {
        let _ = ctx.fill();
    } else {
        let _ = ctx.stroke();
    }
}
