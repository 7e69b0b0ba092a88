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
use crate::{Bitmap, Canvas, Color, Gui, PixelSink, Vec2i};

/// Access to the drawing surface of a type.
pub trait CanvasAccess {
    /// Pixel sink of the surface.
    type Sink: PixelSink;

    /// Runs `f` on the surface.
    fn with_canvas<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut Canvas<Self::Sink>) -> R;
}

/// Drawing primitives for every type with a surface, so the screen can be drawn on directly
/// through a [`Gui`] outside any window.
pub trait DrawOps: CanvasAccess {
    /// Plots one pixel.
    fn draw_pixel(&mut self, x: i16, y: i16, c: Color) { self.with_canvas(|cv| cv.draw_pixel(x, y, c)) }

    /// Fills the whole display.
    fn fill_screen(&mut self, c: Color) { self.with_canvas(|cv| cv.fill_screen(c)) }

    /// Fills a rectangle.
    fn fill_frame(&mut self, x1: i16, y1: i16, x2: i16, y2: i16, c: Color) { self.with_canvas(|cv| cv.fill_frame(x1, y1, x2, y2, c)) }

    /// Plots every second pixel of a rectangle.
    fn draw_mesh(&mut self, x1: i16, y1: i16, x2: i16, y2: i16, c: Color) { self.with_canvas(|cv| cv.draw_mesh(x1, y1, x2, y2, c)) }

    /// Outlines a rectangle.
    fn draw_frame(&mut self, x1: i16, y1: i16, x2: i16, y2: i16, c: Color) { self.with_canvas(|cv| cv.draw_frame(x1, y1, x2, y2, c)) }

    /// Draws a line.
    fn draw_line(&mut self, x1: i16, y1: i16, x2: i16, y2: i16, c: Color) { self.with_canvas(|cv| cv.draw_line(x1, y1, x2, y2, c)) }

    /// Outlines a circle.
    fn draw_circle(&mut self, x0: i16, y0: i16, r: i16, c: Color) { self.with_canvas(|cv| cv.draw_circle(x0, y0, r, c)) }

    /// Fills a circle.
    fn fill_circle(&mut self, x0: i16, y0: i16, r: i16, c: Color) { self.with_canvas(|cv| cv.fill_circle(x0, y0, r, c)) }

    /// Draws the octants of a circle selected by `mask`.
    fn draw_arc(&mut self, x0: i16, y0: i16, r: i16, mask: u8, c: Color) { self.with_canvas(|cv| cv.draw_arc(x0, y0, r, mask, c)) }

    /// Fills a rectangle with rounded corners.
    fn fill_round_frame(&mut self, x1: i16, y1: i16, x2: i16, y2: i16, r: i16, c: Color) {
        self.with_canvas(|cv| cv.fill_round_frame(x1, y1, x2, y2, r, c))
    }

    /// Outlines a rectangle with rounded corners.
    fn draw_round_frame(&mut self, x1: i16, y1: i16, x2: i16, y2: i16, r: i16, c: Color) {
        self.with_canvas(|cv| cv.draw_round_frame(x1, y1, x2, y2, r, c))
    }

    /// Fills or outlines a polygon.
    fn fill_poly(&mut self, points: &[Vec2i], filled: bool, c: Color) { self.with_canvas(|cv| cv.fill_poly(points, filled, c)) }

    /// Blits an RGB565 bitmap.
    fn draw_bmp(&mut self, x: i16, y: i16, bmp: &Bitmap) { self.with_canvas(|cv| cv.draw_bmp(x, y, bmp)) }
}

impl<T: CanvasAccess> DrawOps for T {}

impl<S: PixelSink> CanvasAccess for Gui<'_, S> {
    type Sink = S;

    fn with_canvas<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut Canvas<S>) -> R,
    {
        f(self.canvas_mut())
    }
}
