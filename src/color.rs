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
/// Packed `0xRRGGBB` color as handed to the pixel sink.
#[derive(Default, Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Color(pub u32);

impl Color {
    /// Creates a color from its 8-bit channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32) }

    /// Red channel.
    pub const fn r(self) -> u8 { (self.0 >> 16) as u8 }

    /// Green channel.
    pub const fn g(self) -> u8 { (self.0 >> 8) as u8 }

    /// Blue channel.
    pub const fn b(self) -> u8 { self.0 as u8 }

    /// Returns the packed `0xRRGGBB` value.
    pub const fn raw(self) -> u32 { self.0 & 0x00FF_FFFF }

    /// Expands an RGB565 pixel by shifting each channel to the top of its byte.
    pub const fn from_rgb565(v: u16) -> Self {
        let r = ((v >> 11) & 0x1F) << 3;
        let g = ((v >> 5) & 0x3F) << 2;
        let b = (v & 0x1F) << 3;
        Self::rgb(r as u8, g as u8, b as u8)
    }

    /// Packs the color into RGB565, dropping the low bits of each channel.
    pub const fn to_rgb565(self) -> u16 { ((self.r() as u16 >> 3) << 11) | ((self.g() as u16 >> 2) << 5) | (self.b() as u16 >> 3) }

    /// Mixes `fg` over `bg` with an 8-bit coverage value, per channel.
    pub fn blend(fg: Color, bg: Color, alpha: u8) -> Color {
        let a = alpha as u32;
        let mix = |f: u8, b: u8| ((f as u32 * a + b as u32 * (256 - a)) >> 8) as u8;
        Color::rgb(mix(fg.r(), bg.r()), mix(fg.g(), bg.g()), mix(fg.b(), bg.b()))
    }
}

// web palette
#[allow(missing_docs)]
impl Color {
    pub const MAROON: Color = Color(0x800000);
    pub const DARK_RED: Color = Color(0x8B0000);
    pub const BROWN: Color = Color(0xA52A2A);
    pub const FIREBRICK: Color = Color(0xB22222);
    pub const CRIMSON: Color = Color(0xDC143C);
    pub const RED: Color = Color(0xFF0000);
    pub const TOMATO: Color = Color(0xFF6347);
    pub const CORAL: Color = Color(0xFF7F50);
    pub const INDIAN_RED: Color = Color(0xCD5C5C);
    pub const LIGHT_CORAL: Color = Color(0xF08080);
    pub const DARK_SALMON: Color = Color(0xE9967A);
    pub const SALMON: Color = Color(0xFA8072);
    pub const LIGHT_SALMON: Color = Color(0xFFA07A);
    pub const ORANGE_RED: Color = Color(0xFF4500);
    pub const DARK_ORANGE: Color = Color(0xFF8C00);
    pub const ORANGE: Color = Color(0xFFA500);
    pub const GOLD: Color = Color(0xFFD700);
    pub const DARK_GOLDEN_ROD: Color = Color(0xB8860B);
    pub const GOLDEN_ROD: Color = Color(0xDAA520);
    pub const PALE_GOLDEN_ROD: Color = Color(0xEEE8AA);
    pub const DARK_KHAKI: Color = Color(0xBDB76B);
    pub const KHAKI: Color = Color(0xF0E68C);
    pub const OLIVE: Color = Color(0x808000);
    pub const YELLOW: Color = Color(0xFFFF00);
    pub const YELLOW_GREEN: Color = Color(0x9ACD32);
    pub const DARK_OLIVE_GREEN: Color = Color(0x556B2F);
    pub const OLIVE_DRAB: Color = Color(0x6B8E23);
    pub const LAWN_GREEN: Color = Color(0x7CFC00);
    pub const CHART_REUSE: Color = Color(0x7FFF00);
    pub const GREEN_YELLOW: Color = Color(0xADFF2F);
    pub const DARK_GREEN: Color = Color(0x006400);
    pub const GREEN: Color = Color(0x00FF00);
    pub const FOREST_GREEN: Color = Color(0x228B22);
    pub const LIME: Color = Color(0x00FF00);
    pub const LIME_GREEN: Color = Color(0x32CD32);
    pub const LIGHT_GREEN: Color = Color(0x90EE90);
    pub const PALE_GREEN: Color = Color(0x98FB98);
    pub const DARK_SEA_GREEN: Color = Color(0x8FBC8F);
    pub const MEDIUM_SPRING_GREEN: Color = Color(0x00FA9A);
    pub const SPRING_GREEN: Color = Color(0x00FF7F);
    pub const SEA_GREEN: Color = Color(0x2E8B57);
    pub const MEDIUM_AQUA_MARINE: Color = Color(0x66CDAA);
    pub const MEDIUM_SEA_GREEN: Color = Color(0x3CB371);
    pub const LIGHT_SEA_GREEN: Color = Color(0x20B2AA);
    pub const DARK_SLATE_GRAY: Color = Color(0x2F4F4F);
    pub const TEAL: Color = Color(0x008080);
    pub const DARK_CYAN: Color = Color(0x008B8B);
    pub const AQUA: Color = Color(0x00FFFF);
    pub const CYAN: Color = Color(0x00FFFF);
    pub const LIGHT_CYAN: Color = Color(0xE0FFFF);
    pub const DARK_TURQUOISE: Color = Color(0x00CED1);
    pub const TURQUOISE: Color = Color(0x40E0D0);
    pub const MEDIUM_TURQUOISE: Color = Color(0x48D1CC);
    pub const PALE_TURQUOISE: Color = Color(0xAFEEEE);
    pub const AQUA_MARINE: Color = Color(0x7FFFD4);
    pub const POWDER_BLUE: Color = Color(0xB0E0E6);
    pub const CADET_BLUE: Color = Color(0x5F9EA0);
    pub const STEEL_BLUE: Color = Color(0x4682B4);
    pub const CORN_FLOWER_BLUE: Color = Color(0x6495ED);
    pub const DEEP_SKY_BLUE: Color = Color(0x00BFFF);
    pub const DODGER_BLUE: Color = Color(0x1E90FF);
    pub const LIGHT_BLUE: Color = Color(0xADD8E6);
    pub const SKY_BLUE: Color = Color(0x87CEEB);
    pub const LIGHT_SKY_BLUE: Color = Color(0x87CEFA);
    pub const MIDNIGHT_BLUE: Color = Color(0x191970);
    pub const NAVY: Color = Color(0x000080);
    pub const DARK_BLUE: Color = Color(0x00008B);
    pub const MEDIUM_BLUE: Color = Color(0x0000CD);
    pub const BLUE: Color = Color(0x0000FF);
    pub const ROYAL_BLUE: Color = Color(0x4169E1);
    pub const BLUE_VIOLET: Color = Color(0x8A2BE2);
    pub const INDIGO: Color = Color(0x4B0082);
    pub const DARK_SLATE_BLUE: Color = Color(0x483D8B);
    pub const SLATE_BLUE: Color = Color(0x6A5ACD);
    pub const MEDIUM_SLATE_BLUE: Color = Color(0x7B68EE);
    pub const MEDIUM_PURPLE: Color = Color(0x9370DB);
    pub const DARK_MAGENTA: Color = Color(0x8B008B);
    pub const DARK_VIOLET: Color = Color(0x9400D3);
    pub const DARK_ORCHID: Color = Color(0x9932CC);
    pub const MEDIUM_ORCHID: Color = Color(0xBA55D3);
    pub const PURPLE: Color = Color(0x800080);
    pub const THISTLE: Color = Color(0xD8BFD8);
    pub const PLUM: Color = Color(0xDDA0DD);
    pub const VIOLET: Color = Color(0xEE82EE);
    pub const MAGENTA: Color = Color(0xFF00FF);
    pub const ORCHID: Color = Color(0xDA70D6);
    pub const MEDIUM_VIOLET_RED: Color = Color(0xC71585);
    pub const PALE_VIOLET_RED: Color = Color(0xDB7093);
    pub const DEEP_PINK: Color = Color(0xFF1493);
    pub const HOT_PINK: Color = Color(0xFF69B4);
    pub const LIGHT_PINK: Color = Color(0xFFB6C1);
    pub const PINK: Color = Color(0xFFC0CB);
    pub const ANTIQUE_WHITE: Color = Color(0xFAEBD7);
    pub const BEIGE: Color = Color(0xF5F5DC);
    pub const BISQUE: Color = Color(0xFFE4C4);
    pub const BLANCHED_ALMOND: Color = Color(0xFFEBCD);
    pub const WHEAT: Color = Color(0xF5DEB3);
    pub const CORN_SILK: Color = Color(0xFFF8DC);
    pub const LEMON_CHIFFON: Color = Color(0xFFFACD);
    pub const LIGHT_GOLDEN_ROD_YELLOW: Color = Color(0xFAFAD2);
    pub const LIGHT_YELLOW: Color = Color(0xFFFFE0);
    pub const SADDLE_BROWN: Color = Color(0x8B4513);
    pub const SIENNA: Color = Color(0xA0522D);
    pub const CHOCOLATE: Color = Color(0xD2691E);
    pub const PERU: Color = Color(0xCD853F);
    pub const SANDY_BROWN: Color = Color(0xF4A460);
    pub const BURLY_WOOD: Color = Color(0xDEB887);
    pub const TAN: Color = Color(0xD2B48C);
    pub const ROSY_BROWN: Color = Color(0xBC8F8F);
    pub const MOCCASIN: Color = Color(0xFFE4B5);
    pub const NAVAJO_WHITE: Color = Color(0xFFDEAD);
    pub const PEACH_PUFF: Color = Color(0xFFDAB9);
    pub const MISTY_ROSE: Color = Color(0xFFE4E1);
    pub const LAVENDER_BLUSH: Color = Color(0xFFF0F5);
    pub const LINEN: Color = Color(0xFAF0E6);
    pub const OLD_LACE: Color = Color(0xFDF5E6);
    pub const PAPAYA_WHIP: Color = Color(0xFFEFD5);
    pub const SEA_SHELL: Color = Color(0xFFF5EE);
    pub const MINT_CREAM: Color = Color(0xF5FFFA);
    pub const SLATE_GRAY: Color = Color(0x708090);
    pub const LIGHT_SLATE_GRAY: Color = Color(0x778899);
    pub const LIGHT_STEEL_BLUE: Color = Color(0xB0C4DE);
    pub const LAVENDER: Color = Color(0xE6E6FA);
    pub const FLORAL_WHITE: Color = Color(0xFFFAF0);
    pub const ALICE_BLUE: Color = Color(0xF0F8FF);
    pub const GHOST_WHITE: Color = Color(0xF8F8FF);
    pub const HONEYDEW: Color = Color(0xF0FFF0);
    pub const IVORY: Color = Color(0xFFFFF0);
    pub const AZURE: Color = Color(0xF0FFFF);
    pub const SNOW: Color = Color(0xFFFAFA);
    pub const BLACK: Color = Color(0x000000);
    pub const DIM_GRAY: Color = Color(0x696969);
    pub const GRAY: Color = Color(0x808080);
    pub const DARK_GRAY: Color = Color(0xA9A9A9);
    pub const SILVER: Color = Color(0xC0C0C0);
    pub const LIGHT_GRAY: Color = Color(0xD3D3D3);
    pub const GAINSBORO: Color = Color(0xDCDCDC);
    pub const WHITE_SMOKE: Color = Color(0xF5F5F5);
    pub const WHITE: Color = Color(0xFFFFFF);
}

impl From<u32> for Color {
    fn from(v: u32) -> Self { Color(v & 0x00FF_FFFF) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb565_expansion_shifts_channels() {
        assert_eq!(Color::from_rgb565(0xFFFF), Color::rgb(0xF8, 0xFC, 0xF8));
        assert_eq!(Color::from_rgb565(0xF800), Color::rgb(0xF8, 0, 0));
        assert_eq!(Color::from_rgb565(0x07E0), Color::rgb(0, 0xFC, 0));
        assert_eq!(Color::from_rgb565(0x001F), Color::rgb(0, 0, 0xF8));
        assert_eq!(Color::rgb(0xF8, 0xFC, 0xF8).to_rgb565(), 0xFFFF);
    }

    #[test]
    fn blend_uses_integer_weights() {
        assert_eq!(Color::blend(Color::WHITE, Color::BLACK, 0), Color::BLACK);
        assert_eq!(Color::blend(Color::WHITE, Color::BLACK, 128), Color::rgb(127, 127, 127));
        assert_eq!(Color::blend(Color::RED, Color::BLUE, 255), Color::rgb(254, 0, 0));
    }
}
