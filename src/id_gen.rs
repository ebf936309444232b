use crate::error::{Error, Result};
use crate::symbol::{Symbol, FIRST_SYNTHETIC};

/// Hands out ids for merged symbols.
///
/// Ids start at [`FIRST_SYNTHETIC`] and increase by one per merge. They are
/// never reused: a merged symbol stays in the vocabulary even once it no
/// longer appears in the stream.
#[derive(Debug)]
pub(crate) struct IdGenerator {
    next: u32,
}

impl IdGenerator {
    pub(crate) fn new() -> Self {
        Self {
            next: u32::from(FIRST_SYNTHETIC),
        }
    }

    /// The id the next call to [`get`](Self::get) will return.
    pub(crate) fn peek(&self) -> Result<Symbol> {
        Symbol::try_from(self.next).map_err(|_| Error::SymbolSpaceExhausted { next: self.next })
    }

    /// Takes the next id.
    pub(crate) fn get(&mut self) -> Result<Symbol> {
        let id = self.peek()?;
        self.next += 1;
        Ok(id)
    }

    /// Number of ids handed out so far.
    pub(crate) fn issued(&self) -> usize {
        (self.next - u32::from(FIRST_SYNTHETIC)) as usize
    }
}
