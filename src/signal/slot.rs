//! Position of a light within an intersection.

use super::LIGHT_COUNT;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of one of the four lights of an intersection.
///
/// A `Slot` is always in `0..LIGHT_COUNT`; the only ways to obtain one are
/// the checked constructor, the constants, and `next`, which wraps around.
///
/// ```rust
/// use crossroads::Slot;
///
/// assert_eq!(Slot::new(3).map(Slot::next), Some(Slot::FIRST));
/// assert!(Slot::new(4).is_none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Slot(u8);

impl Slot {
    pub const FIRST: Slot = Slot(0);

    /// Every slot, in handover order.
    pub const ALL: [Slot; LIGHT_COUNT] = [Slot(0), Slot(1), Slot(2), Slot(3)];

    /// Checked constructor. Returns `None` for `index >= LIGHT_COUNT`.
    pub fn new(index: usize) -> Option<Slot> {
        Self::ALL.get(index).copied()
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The slot that receives activity on handover.
    pub const fn next(self) -> Slot {
        Slot(((self.0 as usize + 1) % LIGHT_COUNT) as u8)
    }
}

impl TryFrom<usize> for Slot {
    type Error = SlotOutOfRange;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Slot::new(index).ok_or(SlotOutOfRange { index })
    }
}

impl From<Slot> for usize {
    fn from(slot: Slot) -> usize {
        slot.index()
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raised when a raw index does not name a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("slot index {index} out of range (expected 0..{max})", max = LIGHT_COUNT)]
pub struct SlotOutOfRange {
    pub index: usize,
}
