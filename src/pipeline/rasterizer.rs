use glam::{IVec2, Vec2};

/// Walk the pixels of the line from `start` to `end`, both inclusive.
///
/// Coordinates are truncated toward zero before stepping, same as casting to
/// integer screen coordinates.
pub fn bresenham<F>(start: Vec2, end: Vec2, mut plot: F)
where
    F: FnMut(IVec2),
{
    let mut x0 = start.x as i32;
    let mut y0 = start.y as i32;
    let x1 = end.x as i32;
    let y1 = end.y as i32;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        plot(IVec2::new(x0, y0));

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Like `bresenham`, but stamps a `width` x `width` square on every step so
/// lines come out `width` pixels thick. The square is centred on the line,
/// rounding toward the top-left for even widths.
pub fn thick_line<F>(start: Vec2, end: Vec2, width: u32, mut plot: F)
where
    F: FnMut(IVec2),
{
    let width = width.max(1) as i32;
    let lo = -(width / 2);
    let hi = lo + width;

    bresenham(start, end, |pos| {
        for oy in lo..hi {
            for ox in lo..hi {
                plot(pos + IVec2::new(ox, oy));
            }
        }
    });
}
