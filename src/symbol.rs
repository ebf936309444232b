/// A token identifier.
///
/// Values below [`FIRST_SYNTHETIC`] are raw input bytes; everything from
/// [`FIRST_SYNTHETIC`] upward was created by a merge. Symbols are 16 bits wide
/// because that is the width a checkpoint stores them in.
pub type Symbol = u16;

/// The first id handed out to a merged symbol.
pub const FIRST_SYNTHETIC: Symbol = 256;

/// Returns true if the symbol is an original input byte.
pub fn is_byte(symbol: Symbol) -> bool {
    symbol < FIRST_SYNTHETIC
}

/// State of a single slot in the symbol stream.
///
/// Holes are tracked out of band so that byte 0 is an ordinary symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// A slot holding a symbol of the current tokenization.
    Live(Symbol),

    /// A logically deleted slot, skipped by every traversal.
    Hole,
}

impl Slot {
    /// Returns the symbol if the slot is live.
    #[inline]
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Slot::Live(s) => Some(s),
            Slot::Hole => None,
        }
    }

    #[inline]
    pub fn is_hole(self) -> bool {
        matches!(self, Slot::Hole)
    }
}

impl From<u8> for Slot {
    fn from(byte: u8) -> Self {
        Slot::Live(Symbol::from(byte))
    }
}
