//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
use crate::{Area, Color, DriverRegistry, MAX_POLY_POINTS, Vec2i};

/// Host-supplied pixel output. The engine plots every pixel through it and never keeps a framebuffer.
pub trait PixelSink {
    /// Writes one pixel. Coordinates outside the display are passed through unchanged.
    fn plot(&mut self, x: i16, y: i16, c: Color);
}

impl<F: FnMut(i16, i16, Color)> PixelSink for F {
    fn plot(&mut self, x: i16, y: i16, c: Color) { self(x, y, c) }
}

/// Software rasterizer bound to a pixel sink and the acceleration drivers.
///
/// Coordinates are inclusive on both ends. Nothing is clipped: keeping the output on the display is
/// the caller's business.
pub struct Canvas<S: PixelSink> {
    sink: S,
    drivers: DriverRegistry,
    width: i16,
    height: i16,
}

impl<S: PixelSink> Canvas<S> {
    /// Creates a canvas for a `width` x `height` display.
    pub fn new(sink: S, width: i16, height: i16) -> Self { Self { sink, drivers: DriverRegistry::new(), width, height } }

    /// Display width in pixels.
    pub fn width(&self) -> i16 { self.width }

    /// Display height in pixels.
    pub fn height(&self) -> i16 { self.height }

    /// Shared access to the pixel sink.
    pub fn sink(&self) -> &S { &self.sink }

    /// Mutable access to the pixel sink.
    pub fn sink_mut(&mut self) -> &mut S { &mut self.sink }

    /// Returns the pixel sink, consuming the canvas.
    pub fn into_sink(self) -> S { self.sink }

    /// Acceleration drivers consulted before software drawing.
    pub fn drivers(&self) -> &DriverRegistry { &self.drivers }

    /// Mutable access to the acceleration drivers.
    pub fn drivers_mut(&mut self) -> &mut DriverRegistry { &mut self.drivers }

    #[inline]
    fn plot(&mut self, x: i32, y: i32, c: Color) { self.sink.plot(x as i16, y as i16, c) }

    /// Plots a single pixel.
    pub fn draw_pixel(&mut self, x: i16, y: i16, c: Color) { self.sink.plot(x, y, c) }

    /// Fills the whole display.
    pub fn fill_screen(&mut self, c: Color) { self.fill_frame(0, 0, self.width - 1, self.height - 1, c) }

    /// Fills the rectangle spanned by two corners, in any order.
    pub fn fill_frame(&mut self, x1: i16, y1: i16, x2: i16, y2: i16, c: Color) {
        let a = Area::new(x1, y1, x2, y2).normalized();
        if let Some(accel) = self.drivers.fill_frame() {
            if accel(a.xs, a.ys, a.xe, a.ye, c).is_ok() {
                return;
            }
        }
        for y in a.ys as i32..=a.ye as i32 {
            for x in a.xs as i32..=a.xe as i32 {
                self.plot(x, y, c);
            }
        }
    }

    pub(crate) fn fill_area(&mut self, a: Area, c: Color) { self.fill_frame(a.xs, a.ys, a.xe, a.ye, c) }

    /// Plots every second pixel of the rectangle in both directions.
    pub fn draw_mesh(&mut self, x1: i16, y1: i16, x2: i16, y2: i16, c: Color) {
        let a = Area::new(x1, y1, x2, y2).normalized();
        for y in (a.ys as i32..=a.ye as i32).step_by(2) {
            for x in (a.xs as i32..=a.xe as i32).step_by(2) {
                self.plot(x, y, c);
            }
        }
    }

    /// Strokes the outline of a rectangle.
    pub fn draw_frame(&mut self, x1: i16, y1: i16, x2: i16, y2: i16, c: Color) {
        self.draw_line(x1, y1, x2, y1, c);
        self.draw_line(x1, y2, x2, y2, c);
        self.draw_line(x1, y1, x1, y2, c);
        self.draw_line(x2, y1, x2, y2, c);
    }

    /// Draws a line with Bresenham's algorithm, after offering it to the line accelerator.
    pub fn draw_line(&mut self, x1: i16, y1: i16, x2: i16, y2: i16, c: Color) {
        if let Some(accel) = self.drivers.draw_line() {
            if accel(x1, y1, x2, y2, c).is_ok() {
                return;
            }
        }

        let dx = x2 as i32 - x1 as i32;
        let dy = y2 as i32 - y1 as i32;
        let dxabs = dx.abs();
        let dyabs = dy.abs();
        let sgndx = if dx > 0 { 1 } else { -1 };
        let sgndy = if dy > 0 { 1 } else { -1 };
        let mut x = dyabs >> 1;
        let mut y = dxabs >> 1;
        let mut drawx = x1 as i32;
        let mut drawy = y1 as i32;

        self.plot(drawx, drawy, c);

        if dxabs >= dyabs {
            for _ in 0..dxabs {
                y += dyabs;
                if y >= dxabs {
                    y -= dxabs;
                    drawy += sgndy;
                }
                drawx += sgndx;
                self.plot(drawx, drawy, c);
            }
        } else {
            for _ in 0..dyabs {
                x += dxabs;
                if x >= dyabs {
                    x -= dyabs;
                    drawx += sgndx;
                }
                drawy += sgndy;
                self.plot(drawx, drawy, c);
            }
        }
    }

    /// Strokes a circle. Negative centers and non-positive radii draw nothing.
    pub fn draw_circle(&mut self, x0: i16, y0: i16, r: i16, c: Color) { self.draw_arc(x0, y0, r, 0xFF, c) }

    /// Strokes the octants of a circle selected by `mask`.
    ///
    /// Bit 0 is the octant right of the top (`x0 + x, y0 - y`), following clockwise order towards
    /// the top-left (bit 3), bottom-left (bits 4 and 5) and bottom-right (bits 6 and 7).
    pub fn draw_arc(&mut self, x0: i16, y0: i16, r: i16, mask: u8, c: Color) {
        if x0 < 0 || y0 < 0 || r <= 0 {
            return;
        }
        let (x0, y0) = (x0 as i32, y0 as i32);
        let mut xd = 1 - ((r as i32) << 1);
        let mut yd = 0;
        let mut e = 0;
        let mut x = r as i32;
        let mut y = 0;

        while x >= y {
            if mask & 0x01 != 0 {
                self.plot(x0 + x, y0 - y, c);
            }
            if mask & 0x02 != 0 {
                self.plot(x0 + y, y0 - x, c);
            }
            if mask & 0x04 != 0 {
                self.plot(x0 - y, y0 - x, c);
            }
            if mask & 0x08 != 0 {
                self.plot(x0 - x, y0 - y, c);
            }
            if mask & 0x10 != 0 {
                self.plot(x0 - x, y0 + y, c);
            }
            if mask & 0x20 != 0 {
                self.plot(x0 - y, y0 + x, c);
            }
            if mask & 0x40 != 0 {
                self.plot(x0 + y, y0 + x, c);
            }
            if mask & 0x80 != 0 {
                self.plot(x0 + x, y0 + y, c);
            }

            y += 1;
            e += yd;
            yd += 2;
            if (e << 1) + xd > 0 {
                x -= 1;
                e += xd;
                xd += 2;
            }
        }
    }

    /// Fills a disc with vertical spans, then strokes its outline.
    pub fn fill_circle(&mut self, x0: i16, y0: i16, r: i16, c: Color) {
        if x0 < 0 || y0 < 0 || r <= 0 {
            return;
        }
        let mut xd = 3 - ((r as i32) << 1);
        let mut x = 0i32;
        let mut y = r as i32;
        let (cx, cy) = (x0 as i32, y0 as i32);

        while x <= y {
            if y > 0 {
                self.vline(cx - x, cy - y, cy + y, c);
                self.vline(cx + x, cy - y, cy + y, c);
            }
            if x > 0 {
                self.vline(cx - y, cy - x, cy + x, c);
                self.vline(cx + y, cy - x, cy + x, c);
            }
            if xd < 0 {
                xd += (x << 2) + 6;
            } else {
                xd += ((x - y) << 2) + 10;
                y -= 1;
            }
            x += 1;
        }
        self.draw_circle(x0, y0, r, c);
    }

    fn vline(&mut self, x: i32, y1: i32, y2: i32, c: Color) { self.draw_line(x as i16, y1 as i16, x as i16, y2 as i16, c) }

    /// Fills a rectangle with rounded corners of radius `r`.
    pub fn fill_round_frame(&mut self, x1: i16, y1: i16, x2: i16, y2: i16, r: i16, c: Color) {
        let a = Area::new(x1, y1, x2, y2).normalized();
        if r <= 0 {
            return;
        }
        let (x1, y1, x2, y2, r) = (a.xs as i32, a.ys as i32, a.xe as i32, a.ye as i32, r as i32);
        let mut xd = 3 - (r << 1);
        let mut x = 0;
        let mut y = r;

        self.fill_frame((x1 + r) as i16, y1 as i16, (x2 - r) as i16, y2 as i16, c);

        while x <= y {
            if y > 0 {
                self.vline(x2 + x - r, y1 - y + r, y + y2 - r, c);
                self.vline(x1 - x + r, y1 - y + r, y + y2 - r, c);
            }
            if x > 0 {
                self.vline(x1 - y + r, y1 - x + r, x + y2 - r, c);
                self.vline(x2 + y - r, y1 - x + r, x + y2 - r, c);
            }
            if xd < 0 {
                xd += (x << 2) + 6;
            } else {
                xd += ((x - y) << 2) + 10;
                y -= 1;
            }
            x += 1;
        }
    }

    /// Strokes a rectangle with rounded corners. A radius larger than either far corner draws nothing.
    pub fn draw_round_frame(&mut self, x1: i16, y1: i16, x2: i16, y2: i16, r: i16, c: Color) {
        let a = Area::new(x1, y1, x2, y2).normalized();
        let (x1, y1, x2, y2) = (a.xs, a.ys, a.xe, a.ye);
        if r > x2 || r > y2 {
            return;
        }

        self.draw_line(x1 + r, y1, x2 - r, y1, c);
        self.draw_line(x1 + r, y2, x2 - r, y2, c);
        self.draw_line(x1, y1 + r, x1, y2 - r, c);
        self.draw_line(x2, y1 + r, x2, y2 - r, c);
        self.draw_arc(x1 + r, y1 + r, r, 0x0C, c);
        self.draw_arc(x2 - r, y1 + r, r, 0x03, c);
        self.draw_arc(x1 + r, y2 - r, r, 0x30, c);
        self.draw_arc(x2 - r, y2 - r, r, 0xC0, c);
    }

    /// Fills (or strokes, when `filled` is false) a polygon of up to [`MAX_POLY_POINTS`] vertices.
    ///
    /// Each edge covers the half-open scanline range `[y1, y2)`, except that the bottom-most scanline
    /// also takes the lower end of the edges reaching it, so the bottom row is not lost.
    pub fn fill_poly(&mut self, points: &[Vec2i], filled: bool, c: Color) {
        let n = points.len();
        if n == 0 || n > MAX_POLY_POINTS {
            return;
        }

        if !filled {
            for i in 0..n {
                let p = points[(i + n - 1) % n];
                let q = points[i];
                self.draw_line(p.x as i16, p.y as i16, q.x as i16, q.y as i16, c);
            }
            return;
        }

        let miny = points.iter().map(|p| p.y).min().unwrap_or(0);
        let maxy = points.iter().map(|p| p.y).max().unwrap_or(0);
        let mut ints = [0i32; MAX_POLY_POINTS];

        for y in miny..=maxy {
            let mut count = 0;
            for i in 0..n {
                let prev = points[(i + n - 1) % n];
                let cur = points[i];
                if prev.y == cur.y {
                    continue;
                }
                let (x1, y1, x2, y2) = if prev.y < cur.y { (prev.x, prev.y, cur.x, cur.y) } else { (cur.x, cur.y, prev.x, prev.y) };

                if y >= y1 && y < y2 {
                    ints[count] = (((y - y1) * (x2 - x1)) as f32 / (y2 - y1) as f32 + 0.5 + x1 as f32) as i32;
                    count += 1;
                } else if y == maxy && y == y2 {
                    ints[count] = x2;
                    count += 1;
                }
            }

            // insertion sort, the list is tiny
            for i in 1..count {
                let v = ints[i];
                let mut j = i;
                while j > 0 && ints[j - 1] > v {
                    ints[j] = ints[j - 1];
                    j -= 1;
                }
                ints[j] = v;
            }

            for pair in ints[..count].chunks_exact(2) {
                self.draw_line(pair[0] as i16, y as i16, pair[1] as i16, y as i16, c);
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::{Driver, GuiResult};
    use std::{cell::RefCell, collections::HashSet, rc::Rc};

    pub(crate) type Plots = Rc<RefCell<Vec<(i16, i16, Color)>>>;

    pub(crate) fn recording_canvas(width: i16, height: i16) -> (Canvas<impl FnMut(i16, i16, Color)>, Plots) {
        let plots: Plots = Rc::new(RefCell::new(Vec::new()));
        let sink = plots.clone();
        (Canvas::new(move |x: i16, y: i16, c: Color| sink.borrow_mut().push((x, y, c)), width, height), plots)
    }

    fn pixel_set(plots: &Plots) -> HashSet<(i16, i16)> { plots.borrow().iter().map(|&(x, y, _)| (x, y)).collect() }

    #[test]
    fn line_plots_both_ends() {
        let (mut canvas, plots) = recording_canvas(32, 32);
        canvas.draw_line(0, 0, 5, 2, Color::RED);
        let p = plots.borrow();
        assert_eq!(p.len(), 6);
        assert_eq!((p[0].0, p[0].1), (0, 0));
        assert_eq!((p[5].0, p[5].1), (5, 2));
    }

    #[test]
    fn steep_and_reversed_lines() {
        let (mut canvas, plots) = recording_canvas(32, 32);
        canvas.draw_line(3, 9, 3, 2, Color::RED);
        assert_eq!(pixel_set(&plots), (2..=9).map(|y| (3, y)).collect());
    }

    #[test]
    fn fill_frame_normalizes_corners() {
        let (mut canvas, plots) = recording_canvas(32, 32);
        canvas.fill_frame(4, 3, 1, 1, Color::BLUE);
        let expected: HashSet<_> = (1..=3).flat_map(|y| (1..=4).map(move |x| (x, y))).collect();
        assert_eq!(plots.borrow().len(), 12);
        assert_eq!(pixel_set(&plots), expected);
    }

    #[test]
    fn fill_poly_square_is_inclusive() {
        let (mut canvas, plots) = recording_canvas(32, 32);
        let square = [Vec2i::new(0, 0), Vec2i::new(10, 0), Vec2i::new(10, 10), Vec2i::new(0, 10)];
        canvas.fill_poly(&square, true, Color::GREEN);
        let expected: HashSet<_> = (0..=10).flat_map(|y| (0..=10).map(move |x| (x, y))).collect();
        assert_eq!(pixel_set(&plots), expected);
        assert_eq!(plots.borrow().len(), 121);
    }

    #[test]
    fn fill_poly_rejects_too_many_points() {
        let (mut canvas, plots) = recording_canvas(64, 64);
        let points: Vec<Vec2i> = (0..=MAX_POLY_POINTS as i32).map(|i| Vec2i::new(i, i % 3)).collect();
        canvas.fill_poly(&points, true, Color::GREEN);
        canvas.fill_poly(&[], true, Color::GREEN);
        assert!(plots.borrow().is_empty());
    }

    #[test]
    fn circle_guards_degenerate_input() {
        let (mut canvas, plots) = recording_canvas(32, 32);
        canvas.draw_circle(-1, 5, 3, Color::RED);
        canvas.draw_circle(5, 5, 0, Color::RED);
        canvas.fill_circle(5, -2, 4, Color::RED);
        assert!(plots.borrow().is_empty());
    }

    #[test]
    fn circle_is_symmetric() {
        let (mut canvas, plots) = recording_canvas(32, 32);
        canvas.draw_circle(10, 10, 5, Color::RED);
        let set = pixel_set(&plots);
        for &(x, y) in set.iter() {
            assert!(set.contains(&(20 - x, y)));
            assert!(set.contains(&(x, 20 - y)));
        }
        assert!(set.contains(&(15, 10)));
        assert!(set.contains(&(10, 5)));
    }

    #[test]
    fn arc_mask_selects_octants() {
        let (mut canvas, plots) = recording_canvas(32, 32);
        canvas.draw_arc(10, 10, 4, 0x01, Color::RED);
        assert!(plots.borrow().iter().all(|&(x, y, _)| x >= 10 && y <= 10));
    }

    #[test]
    fn round_frame_rejects_large_radius() {
        let (mut canvas, plots) = recording_canvas(32, 32);
        canvas.draw_round_frame(0, 0, 4, 20, 5, Color::RED);
        assert!(plots.borrow().is_empty());
        canvas.draw_round_frame(0, 0, 20, 20, 5, Color::RED);
        assert!(pixel_set(&plots).contains(&(10, 0)));
    }

    #[test]
    fn mesh_skips_every_other_pixel() {
        let (mut canvas, plots) = recording_canvas(32, 32);
        canvas.draw_mesh(0, 0, 4, 4, Color::RED);
        assert_eq!(plots.borrow().len(), 9);
    }

    fn accepted_fill(_: i16, _: i16, _: i16, _: i16, _: Color) -> GuiResult { Ok(()) }
    fn refused_fill(_: i16, _: i16, _: i16, _: i16, _: Color) -> GuiResult { Err(crate::GuiError::Busy) }

    #[test]
    fn fill_accelerator_short_circuits_software() {
        let (mut canvas, plots) = recording_canvas(32, 32);
        canvas.drivers_mut().register(Driver::FillFrame(accepted_fill));
        canvas.fill_frame(0, 0, 3, 3, Color::RED);
        assert!(plots.borrow().is_empty());

        canvas.drivers_mut().register(Driver::FillFrame(refused_fill));
        canvas.fill_frame(0, 0, 3, 3, Color::RED);
        assert_eq!(plots.borrow().len(), 16);
    }
}
