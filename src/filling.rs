//! The kinds of liquid a bottle can hold.

use core::fmt;

/// A single unit of coloured liquid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Filling {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
    Brown,
    Black,
}

impl Filling {
    /// Every filling, in the order tables pick them from.
    pub const ALL: [Filling; 8] = [
        Filling::Red,
        Filling::Blue,
        Filling::Green,
        Filling::Yellow,
        Filling::Purple,
        Filling::Orange,
        Filling::Brown,
        Filling::Black,
    ];

    /// Glyph used when drawing the board.
    pub fn symbol(&self) -> &'static str {
        match self {
            Filling::Red => "🟥",
            Filling::Blue => "🟦",
            Filling::Green => "🟩",
            Filling::Yellow => "🟨",
            Filling::Purple => "🟪",
            Filling::Orange => "🟧",
            Filling::Brown => "🟫",
            Filling::Black => "⬛",
        }
    }
}

impl fmt::Display for Filling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
