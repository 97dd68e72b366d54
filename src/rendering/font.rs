//! Font data: bitmap glyph tables keyed by single-byte character codes.
//!
//! Decoding font files is left to the caller; this module only holds the decoded
//! glyphs. [`Font::builtin`] provides a small 5x7 font covering printable ASCII.

/// One bitmap glyph.
///
/// `rows` holds one integer per scanline, top row first. Each row is bit-packed with
/// the leftmost pixel in the most significant bit of the row's width rounded up to a
/// whole number of bytes, so a 5-pixel-wide row uses bits 7..=3.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    pub width: u32,
    pub height: u32,
    /// Horizontal offset from the pen position to the glyph's left edge.
    pub x_offset: i32,
    /// Offset from the baseline to the glyph's bottom edge (positive is up).
    pub y_offset: i32,
    /// Pen advance after drawing this glyph.
    pub advance: u32,
    pub rows: Vec<u32>,
}

impl Glyph {
    /// Whether the pixel at column `x`, row `y` is set. Out-of-range pixels are unset.
    pub fn bit(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let padded = self.width.div_ceil(8) * 8;
        if padded > 32 {
            return false;
        }
        let Some(row) = self.rows.get(y as usize) else {
            return false;
        };
        (row >> (padded - 1 - x)) & 1 == 1
    }
}

/// A bitmap font: up to 256 glyphs indexed by byte value.
#[derive(Debug, Clone, PartialEq)]
pub struct BitmapFont {
    size: u32,
    ascent: i32,
    default_char: Option<u8>,
    glyphs: Vec<Option<Glyph>>,
}

impl BitmapFont {
    /// An empty font whose glyphs are drawn 1:1 at point size `size`.
    pub fn new(size: u32, ascent: i32) -> Self {
        Self {
            size: size.max(1),
            ascent,
            default_char: None,
            glyphs: vec![None; 256],
        }
    }

    /// Native point size.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Distance from the top of the text box to the baseline, in native pixels.
    pub fn ascent(&self) -> i32 {
        self.ascent
    }

    pub fn insert(&mut self, code: u8, glyph: Glyph) {
        self.glyphs[code as usize] = Some(glyph);
    }

    /// Character substituted for codes without a glyph.
    pub fn set_default_char(&mut self, code: Option<u8>) {
        self.default_char = code;
    }

    /// Looks up `code`, falling back to the default character.
    pub fn glyph(&self, code: u8) -> Option<&Glyph> {
        self.glyphs[code as usize]
            .as_ref()
            .or_else(|| self.default_char.and_then(|d| self.glyphs[d as usize].as_ref()))
    }

    /// Number of codes with a glyph.
    pub fn glyph_count(&self) -> usize {
        self.glyphs.iter().filter(|g| g.is_some()).count()
    }
}

/// A face in an outline format (TrueType/OpenType). Only its name and raw bytes are
/// kept; text operations on it are rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineFace {
    pub name: String,
    pub data: Vec<u8>,
}

/// A loaded font, tagged by format.
#[derive(Debug, Clone, PartialEq)]
pub enum Font {
    Bitmap(BitmapFont),
    Outline(OutlineFace),
}

impl Font {
    /// Short format name used in logs and errors.
    pub fn format_name(&self) -> &'static str {
        match self {
            Font::Bitmap(_) => "bitmap",
            Font::Outline(_) => "outline",
        }
    }

    /// The built-in 5x7 font (native size 7, advance 6). Lower-case letters reuse the
    /// upper-case shapes and unknown codes render as `?`.
    pub fn builtin() -> Font {
        let mut font = BitmapFont::new(BUILTIN_HEIGHT, BUILTIN_HEIGHT as i32);
        for (ch, rows) in BUILTIN_GLYPHS {
            let glyph = Glyph {
                width: BUILTIN_WIDTH,
                height: BUILTIN_HEIGHT,
                x_offset: 0,
                y_offset: 0,
                advance: BUILTIN_WIDTH + 1,
                rows: rows.iter().map(|r| (*r as u32) << 3).collect(),
            };
            let code = *ch as u8;
            if code.is_ascii_uppercase() {
                font.insert(code.to_ascii_lowercase(), glyph.clone());
            }
            font.insert(code, glyph);
        }
        font.set_default_char(Some(b'?'));
        Font::Bitmap(font)
    }
}

impl From<BitmapFont> for Font {
    fn from(font: BitmapFont) -> Self {
        Font::Bitmap(font)
    }
}

const BUILTIN_WIDTH: u32 = 5;
const BUILTIN_HEIGHT: u32 = 7;

#[rustfmt::skip]
const BUILTIN_GLYPHS: &[(char, [u8; 7])] = &[
    (' ', [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000]),
    ('!', [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100]),
    ('"', [0b01010, 0b01010, 0b01010, 0b00000, 0b00000, 0b00000, 0b00000]),
    ('#', [0b01010, 0b01010, 0b11111, 0b01010, 0b11111, 0b01010, 0b01010]),
    ('$', [0b00100, 0b01111, 0b10100, 0b01110, 0b00101, 0b11110, 0b00100]),
    ('%', [0b11000, 0b11001, 0b00010, 0b00100, 0b01000, 0b10011, 0b00011]),
    ('&', [0b01100, 0b10010, 0b10100, 0b01000, 0b10101, 0b10010, 0b01101]),
    ('\'', [0b00100, 0b00100, 0b01000, 0b00000, 0b00000, 0b00000, 0b00000]),
    ('(', [0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010]),
    (')', [0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000]),
    ('*', [0b00000, 0b00100, 0b10101, 0b01110, 0b10101, 0b00100, 0b00000]),
    ('+', [0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000]),
    (',', [0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b00100, 0b01000]),
    ('-', [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000]),
    ('.', [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100]),
    ('/', [0b00000, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b00000]),
    ('0', [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110]),
    ('1', [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
    ('2', [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111]),
    ('3', [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110]),
    ('4', [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010]),
    ('5', [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110]),
    ('6', [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110]),
    ('7', [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000]),
    ('8', [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110]),
    ('9', [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100]),
    (':', [0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b01100, 0b00000]),
    (';', [0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b00100, 0b01000]),
    ('<', [0b00010, 0b00100, 0b01000, 0b10000, 0b01000, 0b00100, 0b00010]),
    ('=', [0b00000, 0b00000, 0b11111, 0b00000, 0b11111, 0b00000, 0b00000]),
    ('>', [0b01000, 0b00100, 0b00010, 0b00001, 0b00010, 0b00100, 0b01000]),
    ('?', [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100]),
    ('@', [0b01110, 0b10001, 0b00001, 0b01101, 0b10101, 0b10101, 0b01110]),
    ('A', [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
    ('B', [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110]),
    ('C', [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110]),
    ('D', [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100]),
    ('E', [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111]),
    ('F', [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000]),
    ('G', [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111]),
    ('H', [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
    ('I', [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
    ('J', [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100]),
    ('K', [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001]),
    ('L', [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111]),
    ('M', [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001]),
    ('N', [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001]),
    ('O', [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
    ('P', [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000]),
    ('Q', [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101]),
    ('R', [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001]),
    ('S', [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110]),
    ('T', [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100]),
    ('U', [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
    ('V', [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100]),
    ('W', [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010]),
    ('X', [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001]),
    ('Y', [0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100]),
    ('Z', [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111]),
    ('[', [0b01110, 0b01000, 0b01000, 0b01000, 0b01000, 0b01000, 0b01110]),
    ('\\', [0b00000, 0b10000, 0b01000, 0b00100, 0b00010, 0b00001, 0b00000]),
    (']', [0b01110, 0b00010, 0b00010, 0b00010, 0b00010, 0b00010, 0b01110]),
    ('^', [0b00100, 0b01010, 0b10001, 0b00000, 0b00000, 0b00000, 0b00000]),
    ('_', [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b11111]),
    ('`', [0b01000, 0b00100, 0b00010, 0b00000, 0b00000, 0b00000, 0b00000]),
    ('{', [0b00010, 0b00100, 0b00100, 0b01000, 0b00100, 0b00100, 0b00010]),
    ('|', [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100]),
    ('}', [0b01000, 0b00100, 0b00100, 0b00010, 0b00100, 0b00100, 0b01000]),
    ('~', [0b00000, 0b00000, 0b01000, 0b10101, 0b00010, 0b00000, 0b00000]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_bits_are_msb_first_in_padded_row() {
        let g = Glyph {
            width: 3,
            height: 2,
            x_offset: 0,
            y_offset: 0,
            advance: 4,
            rows: vec![0b1010_0000, 0b0100_0000],
        };
        assert!(g.bit(0, 0));
        assert!(!g.bit(1, 0));
        assert!(g.bit(2, 0));
        assert!(g.bit(1, 1));
        assert!(!g.bit(3, 0));
        assert!(!g.bit(0, 2));
    }

    #[test]
    fn builtin_covers_printable_ascii() {
        let Font::Bitmap(font) = Font::builtin() else {
            panic!("builtin font must be a bitmap font");
        };
        assert_eq!(font.glyph_count(), 95);
        for code in 32u8..127 {
            assert!(font.glyph(code).is_some(), "missing glyph {}", code);
        }
        assert_eq!(font.glyph(b'a'), font.glyph(b'A'));
        // Unknown codes fall back to '?'.
        assert_eq!(font.glyph(200), font.glyph(b'?'));
        let a = font.glyph(b'A').unwrap();
        assert!(a.bit(0, 1) && a.bit(4, 1) && !a.bit(0, 0));
    }

    #[test]
    fn empty_font_has_no_glyphs() {
        let font = BitmapFont::new(0, 10);
        assert_eq!(font.size(), 1);
        assert!(font.glyph(b'x').is_none());
    }
}
