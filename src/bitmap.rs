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
use crate::{Canvas, Color, PixelSink};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Bit depth of a bitmap.
pub enum BitDepth {
    /// 1 bit per pixel.
    One,
    /// 2 bits per pixel.
    Two,
    /// 4 bits per pixel.
    Four,
    /// 8 bits per pixel.
    Eight,
    /// 16 bits per pixel.
    Sixteen,
    /// 32 bits per pixel.
    ThirtyTwo,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Pixel layout of a bitmap.
pub enum ColorModel {
    /// 8:8:8 red, green, blue.
    Rgb888,
    /// 5:6:5 red, green, blue.
    Rgb565,
    /// 5:5:5 red, green, blue.
    Rgb555,
}

#[derive(Debug, Copy, Clone)]
/// Raw pixel buffer borrowed from the host.
///
/// Only 16-bit RGB565 buffers can be drawn; pixels are stored row by row in native byte order.
pub struct Bitmap<'a> {
    /// Pixel bytes.
    pub data: &'a [u8],
    /// Width in pixels.
    pub width: i16,
    /// Height in pixels.
    pub height: i16,
    /// Bits per pixel.
    pub bpp: BitDepth,
    /// Channel layout.
    pub color_model: ColorModel,
}

impl<'a> Bitmap<'a> {
    /// Wraps an RGB565 buffer of `width * height` native-endian pixels.
    pub const fn rgb565(data: &'a [u8], width: i16, height: i16) -> Self {
        Self { data, width, height, bpp: BitDepth::Sixteen, color_model: ColorModel::Rgb565 }
    }
}

impl<S: PixelSink> Canvas<S> {
    /// Blits a bitmap with its top-left corner at `(x, y)`.
    /// Buffers that are empty or not 16 bits per pixel are ignored.
    pub fn draw_bmp(&mut self, x: i16, y: i16, bmp: &Bitmap) {
        if bmp.data.is_empty() || bmp.bpp != BitDepth::Sixteen || bmp.width <= 0 {
            return;
        }
        let mut pixels = bmp.data.chunks_exact(2).map(|p| u16::from_ne_bytes([p[0], p[1]]));
        for row in 0..bmp.height {
            for col in 0..bmp.width {
                let Some(v) = pixels.next() else { return };
                self.draw_pixel(x + col, y + row, Color::from_rgb565(v));
            }
        }
    }
}

#[cfg(any(feature = "builder", feature = "png_source"))]
pub use owned::OwnedBitmap;

#[cfg(any(feature = "builder", feature = "png_source"))]
mod owned {
    use super::*;
    use png::{BitDepth as PngDepth, ColorType, Decoder, Transformations};
    use std::io::{Cursor, Error, ErrorKind};

    /// RGB565 bitmap decoded on the host, ready to be borrowed as a [`Bitmap`].
    pub struct OwnedBitmap {
        data: Vec<u8>,
        width: i16,
        height: i16,
    }

    impl OwnedBitmap {
        /// Decodes an 8-bit grayscale or RGB(A) PNG. Alpha is dropped.
        pub fn from_png(bytes: &[u8]) -> std::io::Result<Self> {
            let mut decoder = Decoder::new(Cursor::new(bytes));
            decoder.set_transformations(Transformations::normalize_to_color8());
            let mut reader = decoder
                .read_info()
                .map_err(|e| Error::new(ErrorKind::Other, format!("PNG decode error: {}", e)))?;
            let buf_size = reader
                .output_buffer_size()
                .ok_or_else(|| Error::new(ErrorKind::Other, "PNG decoder did not report output size"))?;
            let mut img = vec![0; buf_size];
            let info = reader.next_frame(&mut img)?;

            if info.bit_depth != PngDepth::Eight {
                return Err(Error::new(ErrorKind::Other, format!("Unsupported PNG bit depth: {:?}", info.bit_depth)));
            }
            let width = i16::try_from(info.width).map_err(|_| Error::new(ErrorKind::Other, "PNG is too wide"))?;
            let height = i16::try_from(info.height).map_err(|_| Error::new(ErrorKind::Other, "PNG is too tall"))?;

            let pixel_size = match info.color_type {
                ColorType::Grayscale => 1,
                ColorType::GrayscaleAlpha => 2,
                ColorType::Rgb => 3,
                ColorType::Rgba => 4,
                ColorType::Indexed => return Err(Error::new(ErrorKind::Other, "Indexed PNGs are not supported")),
            };

            let mut data = Vec::with_capacity(info.width as usize * info.height as usize * 2);
            for y in 0..info.height as usize {
                let line = &img[y * info.line_size..(y + 1) * info.line_size];
                for px in line.chunks_exact(pixel_size).take(info.width as usize) {
                    let color = match pixel_size {
                        1 | 2 => Color::rgb(px[0], px[0], px[0]),
                        _ => Color::rgb(px[0], px[1], px[2]),
                    };
                    data.extend_from_slice(&color.to_rgb565().to_ne_bytes());
                }
            }
            Ok(Self { data, width, height })
        }

        /// Borrows the pixels as a drawable bitmap.
        pub fn bitmap(&self) -> Bitmap<'_> { Bitmap::rgb565(&self.data, self.width, self.height) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::tests::recording_canvas;

    fn pixels(values: &[u16]) -> Vec<u8> { values.iter().flat_map(|v| v.to_ne_bytes()).collect() }

    #[test]
    fn blits_rows_from_origin() {
        let data = pixels(&[0xF800, 0x07E0, 0x001F, 0xFFFF]);
        let bmp = Bitmap::rgb565(&data, 2, 2);
        let (mut canvas, plots) = recording_canvas(16, 16);
        canvas.draw_bmp(4, 5, &bmp);
        assert_eq!(
            *plots.borrow(),
            vec![
                (4, 5, Color::rgb(0xF8, 0, 0)),
                (5, 5, Color::rgb(0, 0xFC, 0)),
                (4, 6, Color::rgb(0, 0, 0xF8)),
                (5, 6, Color::rgb(0xF8, 0xFC, 0xF8)),
            ]
        );
    }

    #[test]
    fn other_depths_are_ignored() {
        let data = pixels(&[0xFFFF; 4]);
        let mut bmp = Bitmap::rgb565(&data, 2, 2);
        bmp.bpp = BitDepth::Eight;
        let (mut canvas, plots) = recording_canvas(16, 16);
        canvas.draw_bmp(0, 0, &bmp);
        canvas.draw_bmp(0, 0, &Bitmap::rgb565(&[], 2, 2));
        assert!(plots.borrow().is_empty());
    }

    #[cfg(any(feature = "builder", feature = "png_source"))]
    #[test]
    fn png_decodes_to_rgb565() {
        let rgb = [255u8, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255];
        let mut encoded = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut encoded, 2, 2);
            encoder.set_color(png::ColorType::Rgb);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&rgb).unwrap();
            writer.finish().unwrap();
        }

        let owned = OwnedBitmap::from_png(&encoded).unwrap();
        let bmp = owned.bitmap();
        assert_eq!((bmp.width, bmp.height), (2, 2));
        assert_eq!(bmp.data, pixels(&[0xF800, 0x07E0, 0x001F, 0xFFFF]).as_slice());

        let (mut canvas, plots) = recording_canvas(16, 16);
        canvas.draw_bmp(1, 1, &bmp);
        assert_eq!(plots.borrow()[0], (1, 1, Color::rgb(0xF8, 0, 0)));
        assert_eq!(plots.borrow()[3], (2, 2, Color::rgb(0xF8, 0xFC, 0xF8)));
    }

    #[cfg(any(feature = "builder", feature = "png_source"))]
    #[test]
    fn png_garbage_is_an_error() {
        assert!(OwnedBitmap::from_png(b"not a png").is_err());
    }
}
