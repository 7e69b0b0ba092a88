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
/// Latin-1 to code page 437 substitutions used by the classic µGUI bitmap fonts.
pub const CP437_REMAP: [(u8, u8); 8] = [
    (0xF6, 0x94), // ö
    (0xD6, 0x99), // Ö
    (0xFC, 0x81), // ü
    (0xDC, 0x9A), // Ü
    (0xE4, 0x84), // ä
    (0xC4, 0x8E), // Ä
    (0xB5, 0xE6), // µ
    (0xB0, 0xF8), // °
];

#[derive(Debug, Copy, Clone)]
/// Glyph strokes of a vector font.
///
/// Each glyph is a byte string of 4-byte tuples `x1 y1 x2 y2`, every coordinate stored as
/// `b'0' + value` inside a `code_width` x `code_height` box. A zero byte ends the glyph.
pub struct VectorGlyphs<'a> {
    /// One stroke list per character code, indexed from the font's start character.
    pub glyphs: &'a [&'a [u8]],
    /// Width of the coordinate box.
    pub code_width: i16,
    /// Height of the coordinate box.
    pub code_height: i16,
}

#[derive(Debug, Copy, Clone)]
/// Glyph data and its encoding.
pub enum Glyphs<'a> {
    /// One bit per pixel; each row packed into `ceil(char_width / 8)` bytes, least significant bit first.
    OneBpp(&'a [u8]),
    /// One coverage byte per pixel, `char_width` bytes per row.
    EightBpp(&'a [u8]),
    /// Line strokes scaled into the glyph box.
    Vector(VectorGlyphs<'a>),
}

#[derive(Debug, Copy, Clone)]
/// Font descriptor. The glyph data is borrowed from the host.
pub struct Font<'a> {
    /// Glyph data.
    pub glyphs: Glyphs<'a>,
    /// Width of the glyph cell.
    pub char_width: i16,
    /// Height of the glyph cell.
    pub char_height: i16,
    /// First character code present.
    pub start_char: u16,
    /// Last character code present.
    pub end_char: u16,
    /// Optional per-glyph advance widths, indexed from `start_char`.
    pub widths: Option<&'a [u8]>,
    /// Code substitutions applied before the range check.
    pub remap: &'a [(u8, u8)],
}

impl<'a> Font<'a> {
    /// A font without glyphs; text drawn with it is dropped.
    pub const EMPTY: Font<'static> = Font {
        glyphs: Glyphs::OneBpp(&[]),
        char_width: 0,
        char_height: 0,
        start_char: 0,
        end_char: 0,
        widths: None,
        remap: &[],
    };

    /// Describes a 1-bpp bitmap font covering `start_char..=end_char`.
    pub const fn one_bpp(data: &'a [u8], char_width: i16, char_height: i16, start_char: u16, end_char: u16) -> Self {
        Self { glyphs: Glyphs::OneBpp(data), char_width, char_height, start_char, end_char, widths: None, remap: &[] }
    }

    /// Describes an 8-bpp coverage font covering `start_char..=end_char`.
    pub const fn eight_bpp(data: &'a [u8], char_width: i16, char_height: i16, start_char: u16, end_char: u16) -> Self {
        Self { glyphs: Glyphs::EightBpp(data), char_width, char_height, start_char, end_char, widths: None, remap: &[] }
    }

    /// Describes a vector font with a `char_width` x `char_height` cell covering all 8-bit codes.
    pub const fn vector(glyphs: VectorGlyphs<'a>, char_width: i16, char_height: i16) -> Self {
        Self { glyphs: Glyphs::Vector(glyphs), char_width, char_height, start_char: 0, end_char: 255, widths: None, remap: &[] }
    }

    /// Attaches a proportional width table.
    pub const fn with_widths(mut self, widths: &'a [u8]) -> Self {
        self.widths = Some(widths);
        self
    }

    /// Attaches a code substitution table such as [`CP437_REMAP`].
    pub const fn with_remap(mut self, remap: &'a [(u8, u8)]) -> Self {
        self.remap = remap;
        self
    }

    /// Returns `false` for a font without glyph data.
    pub fn is_set(&self) -> bool {
        match self.glyphs {
            Glyphs::OneBpp(d) | Glyphs::EightBpp(d) => !d.is_empty(),
            Glyphs::Vector(v) => !v.glyphs.is_empty(),
        }
    }

    /// Maps a character to its glyph code, or `None` when the font does not carry it.
    pub fn code_of(&self, ch: char) -> Option<u8> {
        let raw = u8::try_from(u32::from(ch)).ok()?;
        let code = self.remap.iter().find(|(from, _)| *from == raw).map_or(raw, |&(_, to)| to);
        if (code as u16) < self.start_char || (code as u16) > self.end_char {
            return None;
        }
        Some(code)
    }

    /// Advance width of a glyph code.
    pub fn glyph_width(&self, code: u8) -> i16 {
        match self.widths {
            Some(w) => (code as u16)
                .checked_sub(self.start_char)
                .and_then(|i| w.get(i as usize))
                .map_or(self.char_width, |&v| v as i16),
            None => self.char_width,
        }
    }

    /// Advance width of a character, `None` when the font does not carry it.
    pub fn char_advance(&self, ch: char) -> Option<i16> { self.code_of(ch).map(|code| self.glyph_width(code)) }

    /// Width of one line of text, with `h_space` pixels between glyphs.
    ///
    /// Widened to `i32` since a long line easily outgrows screen coordinates.
    pub fn line_width(&self, line: &str, h_space: i16) -> i32 {
        let h_space = i32::from(h_space);
        let sum = line
            .chars()
            .filter_map(|ch| self.char_advance(ch))
            .fold(0i32, |acc, w| acc.saturating_add(i32::from(w) + h_space));
        sum.saturating_sub(h_space).max(0)
    }

    /// Visits the pixels of a glyph in row-major order, handing each offset with its bit or coverage to `f`.
    ///
    /// Vector glyphs are not pixel based and are skipped here.
    pub(crate) fn for_each_pixel<F: FnMut(i16, i16, bool, u8)>(&self, code: u8, mut f: F) {
        let width = self.glyph_width(code) as usize;
        let cw = self.char_width as usize;
        let ch = self.char_height as usize;
        let glyph = (code as u16).saturating_sub(self.start_char) as usize;

        match self.glyphs {
            Glyphs::OneBpp(data) => {
                let bn = cw.div_ceil(8);
                let mut index = glyph * ch * bn;
                for y in 0..ch {
                    let mut remaining = width;
                    let mut x = 0;
                    for _ in 0..bn {
                        let Some(&byte) = data.get(index) else { return };
                        index += 1;
                        let mut b = byte;
                        for _ in 0..8 {
                            if remaining == 0 {
                                break;
                            }
                            f(x, y as i16, b & 0x01 != 0, 0);
                            b >>= 1;
                            x += 1;
                            remaining -= 1;
                        }
                    }
                }
            }
            Glyphs::EightBpp(data) => {
                let mut index = glyph * ch * cw;
                for y in 0..ch {
                    for x in 0..width {
                        let Some(&alpha) = data.get(index) else { return };
                        f(x as i16, y as i16, true, alpha);
                        index += 1;
                    }
                    index += cw.saturating_sub(width);
                }
            }
            Glyphs::Vector(_) => {}
        }
    }
}

impl Default for Font<'_> {
    fn default() -> Self { Font::EMPTY }
}
