//! Braille cell bit packing.
//!
//! A braille character packs a 2x4 block of dots into the low 8 bits of a
//! codepoint in `U+2800..=U+28FF`. Dots are numbered column-major for the
//! first three rows, with the fourth row added later by Unicode:
//!
//! ```text
//!    bit 0  bit 3
//!    bit 1  bit 4
//!    bit 2  bit 5
//!    bit 6  bit 7
//! ```

/// Samples per cell horizontally.
pub const CELL_WIDTH: usize = 2;

/// Samples per cell vertically.
pub const CELL_HEIGHT: usize = 4;

/// Codepoint of the empty braille pattern (no dots).
pub const BRAILLE_BASE: u32 = 0x2800;

/// Bit index of the dot at `(dx, dy)` inside a cell.
///
/// `dx` is `0..2`, `dy` is `0..4`.
#[inline]
pub const fn dot_bit(dx: usize, dy: usize) -> u32 {
    debug_assert!(dx < CELL_WIDTH && dy < CELL_HEIGHT);
    if dy <= 2 {
        (3 * dx + dy) as u32
    } else {
        (2 * dy + dx) as u32
    }
}

/// One braille character, stored as its 8-bit dot mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BrailleCell(u8);

impl BrailleCell {
    /// No dots raised (`U+2800`).
    pub const EMPTY: BrailleCell = BrailleCell(0x00);

    /// All eight dots raised (`U+28FF`).
    pub const FULL: BrailleCell = BrailleCell(0xFF);

    #[inline]
    pub const fn from_mask(mask: u8) -> Self {
        Self(mask)
    }

    #[inline]
    pub const fn mask(self) -> u8 {
        self.0
    }

    /// Raise the dot at `(dx, dy)`.
    #[inline]
    pub fn set_dot(&mut self, dx: usize, dy: usize) {
        self.0 |= 1 << dot_bit(dx, dy);
    }

    #[inline]
    pub const fn is_set(self, dx: usize, dy: usize) -> bool {
        self.0 & (1 << dot_bit(dx, dy)) != 0
    }

    /// Flip every dot.
    #[inline]
    pub const fn inverted(self) -> Self {
        Self(self.0 ^ 0xFF)
    }

    /// The braille character for this mask.
    #[inline]
    pub fn to_char(self) -> char {
        // BRAILLE_BASE + 0..=255 stays inside the Braille Patterns block
        char::from_u32(BRAILLE_BASE + self.0 as u32).unwrap_or('\u{2800}')
    }

    /// Recover a cell from a braille character, if it is one.
    #[inline]
    pub fn from_char(c: char) -> Option<Self> {
        let offset = (c as u32).checked_sub(BRAILLE_BASE)?;
        u8::try_from(offset).ok().map(Self)
    }
}

impl From<BrailleCell> for char {
    fn from(cell: BrailleCell) -> Self {
        cell.to_char()
    }
}
