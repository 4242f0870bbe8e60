// Pure rasterizers: shapes in, pixel coordinates out. Nothing is drawn here,
// so the exact pixel sets can be checked without a surface.

use crate::types::Point;

/// Every pixel with `(px-cx)^2 + (py-cy)^2 <= r^2`, row by row, left to right.
/// Brute force over the bounding box; radii stay small.
pub fn circle_pixels(center: Point, radius: u32) -> Vec<Point> {
    let r = radius as i64;
    let r2 = r * r;
    let mut out = Vec::with_capacity(((2 * r + 1) * (2 * r + 1)) as usize);
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r2 {
                out.push(Point::new(center.x + dx as i32, center.y + dy as i32));
            }
        }
    }
    out
}

/// Bresenham line from `from` to `to`, both endpoints included.
pub fn line_pixels(from: Point, to: Point) -> Vec<Point> {
    let (mut x0, mut y0, x1, y1) = (from.x, from.y, to.x, to.y);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let mut out = Vec::with_capacity(dx.max(-dy) as usize + 1);
    loop {
        out.push(Point::new(x0, y0));
        if x0 == x1 && y0 == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x0 += sx; }
        if e2 <= dx { err += dx; y0 += sy; }
    }
    out
}
