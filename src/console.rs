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
use crate::{Area, Canvas, Color, Font, PixelSink};

#[derive(Debug, Copy, Clone)]
/// Sequential text writer over a fixed screen region.
///
/// Text wraps at the right edge; once the bottom is reached the region is cleared and writing
/// restarts at the top.
pub struct Console {
    area: Area,
    x_pos: i16,
    y_pos: i16,
    fore_color: Color,
    back_color: Color,
}

impl Console {
    pub(crate) fn new(area: Area, fore_color: Color, back_color: Color) -> Self {
        // the cursor parks at the far corner so the first character wraps to the start
        Self { area, x_pos: area.xe, y_pos: area.ye, fore_color, back_color }
    }

    /// Region the console writes into.
    pub fn area(&self) -> Area { self.area }

    /// Current cursor position.
    pub fn cursor(&self) -> (i16, i16) { (self.x_pos, self.y_pos) }

    pub(crate) fn set_area(&mut self, area: Area) { self.area = area }

    pub(crate) fn set_fore_color(&mut self, c: Color) { self.fore_color = c }

    pub(crate) fn set_back_color(&mut self, c: Color) { self.back_color = c }

    pub(crate) fn put_string<S: PixelSink>(&mut self, canvas: &mut Canvas<S>, font: &Font, h_space: i16, v_space: i16, s: &str) {
        let a = self.area;
        for ch in s.chars() {
            if ch == '\n' {
                self.x_pos = canvas.width();
                continue;
            }
            let Some(code) = font.code_of(ch) else { continue };
            let cw = font.glyph_width(code);

            self.x_pos += cw + h_space;
            if self.x_pos + cw > a.xe {
                self.x_pos = a.xs;
                self.y_pos += font.char_height + v_space;
            }
            if self.y_pos + font.char_height > a.ye {
                self.x_pos = a.xs;
                self.y_pos = a.ys;
                canvas.fill_area(a, self.back_color);
            }

            canvas.put_glyph(code, self.x_pos, self.y_pos, self.fore_color, self.back_color, font);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::tests::recording_canvas;

    const SOLID: [u8; 16] = [0xFF; 16];

    #[test]
    fn first_character_clears_and_starts_at_top() {
        let font = Font::one_bpp(&SOLID, 4, 4, b'A' as u16, b'D' as u16);
        let (mut canvas, plots) = recording_canvas(40, 40);
        let mut console = Console::new(Area::new(4, 4, 35, 35), Color::WHITE, Color::BLACK);
        console.put_string(&mut canvas, &font, 1, 1, "A");
        assert_eq!(console.cursor(), (4, 4));
        assert_eq!(plots.borrow().len(), 32 * 32 + 16);
    }

    #[test]
    fn wraps_at_right_edge() {
        let font = Font::one_bpp(&SOLID, 4, 4, b'A' as u16, b'D' as u16);
        let (mut canvas, _plots) = recording_canvas(40, 40);
        let mut console = Console::new(Area::new(0, 0, 15, 30), Color::WHITE, Color::BLACK);
        console.put_string(&mut canvas, &font, 1, 1, "ABC");
        assert_eq!(console.cursor(), (10, 0));
        console.put_string(&mut canvas, &font, 1, 1, "D");
        assert_eq!(console.cursor(), (0, 5));
        console.put_string(&mut canvas, &font, 1, 1, "\nA");
        assert_eq!(console.cursor(), (0, 10));
    }
}
