/// The direction a cell's state change pushes its neighbors' counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delta {
    Increment,
    Decrement,
}

/// A single grid position packed into one byte
///
/// The high bit is the alive flag and the low 7 bits hold the number of alive
/// Moore neighbors (0 to 8).
///
/// ```rust
/// use yagol::Cell;
///
/// let cell = Cell::DEAD.with_alive(true);
/// assert!(cell.is_alive());
/// assert_eq!(cell.neighbor_count(), 0);
/// assert_eq!(cell.bits(), 0x80);
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell(u8);

impl Cell {
    const ALIVE_MASK: u8 = 0b1000_0000;
    const COUNT_MASK: u8 = 0b0111_1111;

    pub const DEAD: Cell = Cell(0);

    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_alive(self) -> bool {
        self.0 & Self::ALIVE_MASK != 0
    }
    #[inline]
    pub const fn neighbor_count(self) -> u8 {
        self.0 & Self::COUNT_MASK
    }

    /// Returns this cell with the alive flag replaced, leaving the count bits alone
    #[inline]
    pub const fn with_alive(self, alive: bool) -> Self {
        if alive {
            Self(self.0 | Self::ALIVE_MASK)
        } else {
            Self(self.0 & Self::COUNT_MASK)
        }
    }

    /// Returns this cell with its neighbor count moved by one in the given direction
    ///
    /// The count never leaves the low 7 bits as long as the grid keeps its
    /// counts consistent, which is checked in debug builds.
    #[inline]
    pub fn with_delta(self, delta: Delta) -> Self {
        let count = self.neighbor_count();
        let count = match delta {
            Delta::Increment => {
                debug_assert!(count < 8, "neighbor count overflow");
                count + 1
            }
            Delta::Decrement => {
                debug_assert!(count > 0, "neighbor count underflow");
                count - 1
            }
        };
        Self((self.0 & Self::ALIVE_MASK) | count)
    }
}
