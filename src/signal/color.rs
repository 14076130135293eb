//! The three signal colors and their cycle order.

use crate::core::State;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A signal color.
///
/// The only meaningful order is the cycle `Red -> Green -> Orange -> Red`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum Color {
    #[default]
    Red,
    Green,
    Orange,
}

impl Color {
    /// All colors in cycle order, starting from the initial one.
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Orange];

    /// Cyclic successor.
    ///
    /// ```rust
    /// use crossroads::Color;
    ///
    /// assert_eq!(Color::Red.next(), Color::Green);
    /// assert_eq!(Color::Green.next(), Color::Orange);
    /// assert_eq!(Color::Orange.next(), Color::Red);
    /// ```
    pub const fn next(self) -> Color {
        match self {
            Color::Red => Color::Green,
            Color::Green => Color::Orange,
            Color::Orange => Color::Red,
        }
    }

    /// Lowercase name, as shown to users.
    pub const fn as_str(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Orange => "orange",
        }
    }
}

impl State for Color {
    fn name(&self) -> &str {
        match self {
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Orange => "Orange",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
