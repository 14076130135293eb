//! A single three-color signal.

use super::color::Color;
use crate::core::{Advance, State};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single traffic light.
///
/// Lights are immutable `Copy` values: every transition produces a new
/// light, so earlier values stay valid snapshots.
///
/// # Example
///
/// ```rust
/// use crossroads::{Color, Light};
///
/// let red = Light::default();
/// let green = red.advance();
///
/// assert!(red.is_red());
/// assert_eq!(green.color(), Color::Green);
/// assert_eq!(green.advance().advance(), red);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Light {
    color: Color,
}

impl Light {
    /// Create a light showing `color`.
    pub const fn new(color: Color) -> Self {
        Self { color }
    }

    pub const fn color(self) -> Color {
        self.color
    }

    /// Lowercase color name for display.
    pub const fn color_name(self) -> &'static str {
        self.color.as_str()
    }

    pub fn is_red(self) -> bool {
        self.color == Color::Red
    }

    pub fn is_green(self) -> bool {
        self.color == Color::Green
    }

    pub fn is_orange(self) -> bool {
        self.color == Color::Orange
    }

    /// Copy of this light with a different color.
    pub const fn with_color(self, color: Color) -> Self {
        Self { color }
    }

    /// Next light in the cycle: red to green, green to orange, orange to red.
    pub const fn advance(self) -> Self {
        self.with_color(self.color.next())
    }
}

impl State for Light {
    fn name(&self) -> &str {
        self.color.name()
    }
}

impl Advance for Light {
    fn advance(&self) -> Self {
        Light::advance(*self)
    }
}

impl From<Color> for Light {
    fn from(color: Color) -> Self {
        Self::new(color)
    }
}

impl fmt::Display for Light {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.color, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_light_is_red() {
        let light = Light::default();
        assert!(light.is_red());
        assert!(!light.is_green());
        assert!(!light.is_orange());
    }

    #[test]
    fn advance_follows_strict_cycle() {
        let red = Light::new(Color::Red);
        assert_eq!(red.advance(), Light::new(Color::Green));
        assert_eq!(red.advance().advance(), Light::new(Color::Orange));
        assert_eq!(red.advance().advance().advance(), red);
    }

    #[test]
    fn advance_produces_new_value() {
        let green = Light::new(Color::Green);
        let orange = green.advance();

        assert!(green.is_green());
        assert!(orange.is_orange());
    }

    #[test]
    fn trait_advance_matches_inherent() {
        for color in Color::ALL {
            let light = Light::new(color);
            assert_eq!(<Light as Advance>::advance(&light), light.advance());
        }
    }

    #[test]
    fn with_color_replaces_color_only() {
        let light = Light::default().with_color(Color::Orange);
        assert_eq!(light.color(), Color::Orange);
        assert_eq!(light.color_name(), "orange");
        assert_eq!(light.name(), "Orange");
    }

    #[test]
    fn light_serializes_correctly() {
        let light = Light::new(Color::Green);
        let json = serde_json::to_string(&light).unwrap();
        assert_eq!(json, r#"{"color":"Green"}"#);
        let deserialized: Light = serde_json::from_str(&json).unwrap();
        assert_eq!(light, deserialized);
    }
}
