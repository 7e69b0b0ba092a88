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
use crate::{Area, Canvas, Color, Font, Glyphs, PixelSink, VectorGlyphs};
use bitflags::bitflags;

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Placement of a text block inside its rectangle.
    pub struct Alignment : u8 {
        /// Lines start at the left edge.
        const H_LEFT = 1;
        /// Lines are centered horizontally.
        const H_CENTER = 2;
        /// Lines end at the right edge.
        const H_RIGHT = 4;
        /// Block starts at the top edge.
        const V_TOP = 8;
        /// Block is centered vertically.
        const V_CENTER = 16;
        /// Block ends at the bottom edge.
        const V_BOTTOM = 32;

        /// Top-left corner.
        const TOP_LEFT = Self::V_TOP.bits() | Self::H_LEFT.bits();
        /// Top edge, centered.
        const TOP_CENTER = Self::V_TOP.bits() | Self::H_CENTER.bits();
        /// Top-right corner.
        const TOP_RIGHT = Self::V_TOP.bits() | Self::H_RIGHT.bits();
        /// Left edge, vertically centered.
        const CENTER_LEFT = Self::V_CENTER.bits() | Self::H_LEFT.bits();
        /// Centered on both axes.
        const CENTER = Self::V_CENTER.bits() | Self::H_CENTER.bits();
        /// Right edge, vertically centered.
        const CENTER_RIGHT = Self::V_CENTER.bits() | Self::H_RIGHT.bits();
        /// Bottom-left corner.
        const BOTTOM_LEFT = Self::V_BOTTOM.bits() | Self::H_LEFT.bits();
        /// Bottom edge, centered.
        const BOTTOM_CENTER = Self::V_BOTTOM.bits() | Self::H_CENTER.bits();
        /// Bottom-right corner.
        const BOTTOM_RIGHT = Self::V_BOTTOM.bits() | Self::H_RIGHT.bits();
    }
}

#[derive(Debug, Copy, Clone)]
/// A block of text laid out inside a rectangle.
pub struct Text<'t> {
    /// Content; `\n` starts a new line.
    pub text: &'t str,
    /// Font used for every glyph.
    pub font: &'t Font<'t>,
    /// Target rectangle.
    pub area: Area,
    /// Glyph color.
    pub fc: Color,
    /// Glyph background color.
    pub bc: Color,
    /// Placement inside `area`.
    pub align: Alignment,
    /// Pixels between glyphs.
    pub h_space: i16,
    /// Pixels between lines.
    pub v_space: i16,
}

impl<S: PixelSink> Canvas<S> {
    /// Draws one character with its cell's top-left corner at `(x, y)`.
    /// Characters missing from the font are ignored.
    pub fn put_char(&mut self, ch: char, x: i16, y: i16, fc: Color, bc: Color, font: &Font) {
        if let Some(code) = font.code_of(ch) {
            self.put_glyph(code, x, y, fc, bc, font);
        }
    }

    pub(crate) fn put_glyph(&mut self, code: u8, x: i16, y: i16, fc: Color, bc: Color, font: &Font) {
        if font.char_width == 0 {
            return;
        }
        let width = font.glyph_width(code);

        let encoding = font.glyphs;
        let shade = |on: bool, alpha: u8| match encoding {
            Glyphs::EightBpp(_) => Color::blend(fc, bc, alpha),
            _ if on => fc,
            _ => bc,
        };

        let accel = self.drivers().fill_area();
        match encoding {
            Glyphs::Vector(ref v) => self.put_vector_glyph(v, code, x, y, width, font, fc),
            _ => match accel {
                Some(open) => {
                    let push = open(x, y, x + width - 1, y + font.char_height - 1);
                    font.for_each_pixel(code, |_, _, on, alpha| push(shade(on, alpha)));
                }
                None => font.for_each_pixel(code, |dx, dy, on, alpha| self.draw_pixel(x + dx, y + dy, shade(on, alpha))),
            },
        }
    }

    fn put_vector_glyph(&mut self, v: &VectorGlyphs, code: u8, x: i16, y: i16, width: i16, font: &Font, fc: Color) {
        if v.code_width <= 0 || v.code_height <= 0 {
            return;
        }
        let Some(strokes) = v.glyphs.get((code as u16).saturating_sub(font.start_char) as usize) else { return };
        let sx = |b: u8| (x as i32 + (b as i32 - 48) * width as i32 / v.code_width as i32) as i16;
        let sy = |b: u8| (y as i32 + (b as i32 - 48) * font.char_height as i32 / v.code_height as i32) as i16;

        for t in strokes.chunks_exact(4) {
            if t.contains(&0) {
                break;
            }
            self.draw_line(sx(t[0]), sy(t[1]), sx(t[2]), sy(t[3]), fc);
        }
    }

    /// Lays out and draws a text block.
    ///
    /// Nothing is drawn when the font is unset or the rectangle is shorter than one line. A block
    /// taller than the rectangle with bottom or center alignment, or a line wider than the
    /// rectangle, stops drawing at that point.
    pub fn put_text(&mut self, txt: &Text) {
        let font = txt.font;
        let a = txt.area;
        if !font.is_set() || a.ye - a.ys < font.char_height {
            return;
        }

        let rc = i32::try_from(txt.text.split('\n').count()).unwrap_or(i32::MAX);
        let mut yp = 0i32;
        if txt.align.intersects(Alignment::V_CENTER | Alignment::V_BOTTOM) {
            let block = i32::from(font.char_height).saturating_mul(rc).saturating_add(i32::from(txt.v_space).saturating_mul(rc - 1));
            yp = span(a.ys, a.ye) - block;
            if yp < 0 {
                return;
            }
        }
        if txt.align.contains(Alignment::V_CENTER) {
            yp >>= 1;
        }
        let mut yp = a.ys + yp as i16;

        for line in txt.text.split('\n') {
            let mut xp = span(a.xs, a.xe) - font.line_width(line, txt.h_space);
            if xp < 0 {
                return;
            }
            if txt.align.contains(Alignment::H_LEFT) {
                xp = 0;
            } else if txt.align.contains(Alignment::H_CENTER) {
                xp >>= 1;
            }
            let mut xp = a.xs + xp as i16;

            for code in line.chars().filter_map(|ch| font.code_of(ch)) {
                self.put_glyph(code, xp, yp, txt.fc, txt.bc, font);
                xp += font.glyph_width(code) + txt.h_space;
            }
            let Some(next) = yp.checked_add(font.char_height + txt.v_space) else { return };
            yp = next;
        }
    }
}

/// Pixel count of an inclusive coordinate range.
fn span(start: i16, end: i16) -> i32 { i32::from(end) - i32::from(start) + 1 }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Driver, PushPixelFn, canvas::tests::recording_canvas};
    use std::cell::{Cell, RefCell};

    const SOLID: [u8; 40] = [0xFF; 40];

    fn block_font() -> Font<'static> { Font::one_bpp(&SOLID, 8, 8, b'A' as u16, b'E' as u16) }

    fn text<'t>(s: &'t str, font: &'t Font<'t>, area: Area, align: Alignment) -> Text<'t> {
        Text { text: s, font, area, fc: Color::WHITE, bc: Color::BLACK, align, h_space: 0, v_space: 0 }
    }

    #[test]
    fn centered_line_starts_at_half_the_slack() {
        let font = block_font();
        let (mut canvas, plots) = recording_canvas(128, 32);
        canvas.put_text(&text("ABCDE", &font, Area::new(20, 0, 79, 9), Alignment::CENTER));
        let p = plots.borrow();
        assert_eq!(p.len(), 5 * 64);
        assert_eq!(p.iter().map(|e| e.0).min(), Some(30));
        assert_eq!(p.iter().map(|e| e.0).max(), Some(69));
        assert_eq!(p.iter().map(|e| e.1).min(), Some(1));
    }

    #[test]
    fn right_and_bottom_alignment() {
        let font = block_font();
        let (mut canvas, plots) = recording_canvas(128, 64);
        canvas.put_text(&text("A\nB", &font, Area::new(0, 0, 31, 31), Alignment::BOTTOM_RIGHT));
        let p = plots.borrow();
        assert_eq!(p.iter().map(|e| e.0).min(), Some(24));
        assert_eq!(p.iter().map(|e| e.1).min(), Some(16));
        assert_eq!(p.iter().map(|e| e.1).max(), Some(31));
    }

    #[test]
    fn refuses_unusable_rectangles() {
        let font = block_font();
        let (mut canvas, plots) = recording_canvas(128, 64);
        canvas.put_text(&text("A", &font, Area::new(0, 0, 31, 6), Alignment::TOP_LEFT));
        canvas.put_text(&text("ABCDE", &font, Area::new(0, 0, 20, 20), Alignment::TOP_LEFT));
        canvas.put_text(&text("A\nB\nC", &font, Area::new(0, 0, 20, 20), Alignment::CENTER));
        canvas.put_text(&text("A", &Font::EMPTY, Area::new(0, 0, 31, 31), Alignment::TOP_LEFT));
        assert!(plots.borrow().is_empty());
    }

    #[test]
    fn oversized_text_is_refused_without_overflow() {
        let font = block_font();
        let (mut canvas, plots) = recording_canvas(128, 128);
        let wide = "A".repeat(4100);
        canvas.put_text(&text(&wide, &font, Area::new(0, 0, 99, 99), Alignment::CENTER));
        canvas.put_text(&text(&wide, &font, Area::new(0, 0, 99, 99), Alignment::TOP_LEFT));
        let tall = "A\n".repeat(5000);
        canvas.put_text(&text(&tall, &font, Area::new(0, 0, 99, 99), Alignment::BOTTOM_LEFT));
        assert!(plots.borrow().is_empty());
    }

    #[test]
    fn eight_bpp_glyphs_blend() {
        let data = [0u8, 255, 128, 64];
        let font = Font::eight_bpp(&data, 2, 2, b'x' as u16, b'x' as u16);
        let (mut canvas, plots) = recording_canvas(16, 16);
        canvas.put_char('x', 3, 4, Color::WHITE, Color::BLACK, &font);
        let p = plots.borrow();
        assert_eq!(p[0], (3, 4, Color::BLACK));
        assert_eq!(p[1], (4, 4, Color::rgb(254, 254, 254)));
        assert_eq!(p[2], (3, 5, Color::rgb(127, 127, 127)));
    }

    #[test]
    fn vector_glyph_strokes_are_scaled() {
        const STROKES: &[u8] = b"0044\0";
        let table: [&[u8]; 1] = [STROKES];
        let glyphs = VectorGlyphs { glyphs: &table, code_width: 4, code_height: 4 };
        let mut font = Font::vector(glyphs, 8, 8);
        font.end_char = 0;
        let (mut canvas, plots) = recording_canvas(32, 32);
        canvas.put_char('\0', 2, 2, Color::RED, Color::BLACK, &font);
        let p = plots.borrow();
        assert_eq!(p.first().map(|e| (e.0, e.1)), Some((2, 2)));
        assert_eq!(p.last().map(|e| (e.0, e.1)), Some((10, 10)));
    }

    thread_local! {
        static OPENED: Cell<Option<(i16, i16, i16, i16)>> = const { Cell::new(None) };
        static STREAM: RefCell<Vec<Color>> = const { RefCell::new(Vec::new()) };
    }

    fn push(c: Color) { STREAM.with(|s| s.borrow_mut().push(c)) }

    fn open(x1: i16, y1: i16, x2: i16, y2: i16) -> PushPixelFn {
        OPENED.with(|o| o.set(Some((x1, y1, x2, y2))));
        push
    }

    #[test]
    fn fill_area_driver_streams_glyphs() {
        let data = [0b01u8, 0b10];
        let font = Font::one_bpp(&data, 2, 2, b'A' as u16, b'A' as u16);
        let (mut canvas, plots) = recording_canvas(16, 16);
        canvas.drivers_mut().register(Driver::FillArea(open));
        canvas.put_char('A', 5, 6, Color::WHITE, Color::BLACK, &font);
        assert!(plots.borrow().is_empty());
        assert_eq!(OPENED.with(|o| o.get()), Some((5, 6, 6, 7)));
        assert_eq!(STREAM.with(|s| s.borrow().clone()), vec![Color::WHITE, Color::BLACK, Color::BLACK, Color::WHITE]);
    }
}
