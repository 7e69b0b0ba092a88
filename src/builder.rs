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
use crate::Font;
use fontdue::*;
use std::io::{Error, ErrorKind, Result};

/// One rasterized glyph: coverage bitmap plus its placement relative to the baseline.
struct Glyph {
    xmin: i32,
    ymin: i32,
    width: usize,
    height: usize,
    advance: i32,
    coverage: Vec<u8>,
}

/// Host-side font rasterized from a TrueType file into 8-bit coverage cells.
///
/// Typical use is a build script or a simulator that turns a `.ttf` into a [`Font`] the display
/// code can use unchanged.
pub struct OwnedFont {
    data: Vec<u8>,
    widths: Vec<u8>,
    char_width: i16,
    char_height: i16,
    start_char: u16,
    end_char: u16,
}

impl OwnedFont {
    /// Rasterizes the characters `start_char..=end_char` at `px` pixels.
    ///
    /// Every glyph gets a cell as wide as the widest advance and as tall as the line height; the
    /// width table records each glyph's own advance.
    pub fn rasterize(ttf: &[u8], px: f32, start_char: u8, end_char: u8) -> Result<Self> {
        if end_char < start_char {
            return Err(Error::new(ErrorKind::InvalidInput, "empty character range"));
        }
        let font = fontdue::Font::from_bytes(ttf, FontSettings::default()).map_err(|error| Error::new(ErrorKind::Other, format!("{}", error)))?;

        let glyphs: Vec<Glyph> = (start_char..=end_char)
            .map(|c| {
                let (m, coverage) = font.rasterize(c as char, px);
                Glyph { xmin: m.xmin, ymin: m.ymin, width: m.width, height: m.height, advance: m.advance_width.round() as i32, coverage }
            })
            .collect();
        let line_metrics = font.horizontal_line_metrics(px);
        let ascent = line_metrics.as_ref().map(|m| m.ascent.round() as i32).unwrap_or(px.round() as i32);
        let line_size = line_metrics.as_ref().map(|m| m.new_line_size.round() as i32).unwrap_or(px.round() as i32);
        Ok(Self::pack(&glyphs, ascent, line_size, start_char))
    }

    /// Places each glyph on the baseline of a fixed-size cell.
    fn pack(glyphs: &[Glyph], ascent: i32, line_size: i32, start_char: u8) -> Self {
        let max_advance = glyphs.iter().map(|g| g.advance).max().unwrap_or(0);
        let max_extent = glyphs.iter().map(|g| g.xmin.max(0) + g.width as i32).max().unwrap_or(0);
        let cell_w = max_advance.max(max_extent).clamp(1, u8::MAX as i32);
        let cell_h = line_size.clamp(1, i16::MAX as i32);

        let (cw, chh) = (cell_w as usize, cell_h as usize);
        let mut data = vec![0u8; glyphs.len() * cw * chh];
        let mut widths = Vec::with_capacity(glyphs.len());
        for (i, g) in glyphs.iter().enumerate() {
            let cell = &mut data[i * cw * chh..(i + 1) * cw * chh];
            let top = ascent - g.ymin - g.height as i32;
            let left = g.xmin.max(0);
            for row in 0..g.height {
                let y = top + row as i32;
                if y < 0 || y >= cell_h {
                    continue;
                }
                for col in 0..g.width {
                    let x = left + col as i32;
                    if x >= cell_w {
                        break;
                    }
                    cell[y as usize * cw + x as usize] = g.coverage[row * g.width + col];
                }
            }
            widths.push(g.advance.clamp(0, cell_w) as u8);
        }

        let end_char = start_char as u16 + glyphs.len().saturating_sub(1) as u16;
        Self { data, widths, char_width: cell_w as i16, char_height: cell_h as i16, start_char: start_char as u16, end_char }
    }

    /// Borrows the glyphs as a drawable font.
    pub fn font(&self) -> Font<'_> {
        Font::eight_bpp(&self.data, self.char_width, self.char_height, self.start_char, self.end_char).with_widths(&self.widths)
    }

    /// Cell size as (width, height).
    pub fn cell(&self) -> (i16, i16) { (self.char_width, self.char_height) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_is_rejected() {
        assert!(OwnedFont::rasterize(b"not a font", 12.0, b' ', b'~').is_err());
        assert!(OwnedFont::rasterize(&[], 12.0, b'B', b'A').is_err());
    }

    #[test]
    fn glyphs_sit_on_the_baseline() {
        // a 2x2 block resting on the baseline and a 1x1 descender dot
        let glyphs = [
            Glyph { xmin: 1, ymin: 0, width: 2, height: 2, advance: 4, coverage: vec![10, 20, 30, 40] },
            Glyph { xmin: 0, ymin: -1, width: 1, height: 1, advance: 2, coverage: vec![255] },
        ];
        let owned = OwnedFont::pack(&glyphs, 4, 6, b'a');
        assert_eq!(owned.cell(), (4, 6));

        let font = owned.font();
        assert_eq!((font.start_char, font.end_char), (b'a' as u16, b'b' as u16));
        assert_eq!(font.line_width("ab", 0), 6);

        let mut lit = Vec::new();
        font.for_each_pixel(b'a', |x, y, _, v| {
            if v != 0 {
                lit.push((x, y, v));
            }
        });
        assert_eq!(lit, vec![(1, 2, 10), (2, 2, 20), (1, 3, 30), (2, 3, 40)]);

        lit.clear();
        font.for_each_pixel(b'b', |x, y, _, v| {
            if v != 0 {
                lit.push((x, y, v));
            }
        });
        assert_eq!(lit, vec![(0, 4, 255)]);
    }
}
