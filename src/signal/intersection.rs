//! Four-way intersection: four lights, one of them active at a time.
//!
//! Only the active light ever leaves red. Advancing the intersection is two
//! explicit sub-steps over a single snapshot:
//!
//! 1. the active light takes its next color;
//! 2. if that move was the orange-to-red edge, activity is handed over to
//!    the next slot.
//!
//! Both happen before the new value is returned, so no caller can observe a
//! red active light whose handover has not happened yet.

use super::error::{IntersectionError, Violation};
use super::{Color, Light, Slot, LIGHT_COUNT};
use crate::core::{Advance, State};
use serde::{Deserialize, Serialize};
use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// A four-way intersection.
///
/// Immutable `Copy` value. For every slot other than `active`, the light
/// is red; this holds for every value produced by this type's constructors,
/// `advance`, and deserialization.
///
/// # Example
///
/// ```rust
/// use crossroads::{Color, Intersection, Slot};
///
/// let start = Intersection::reset();
/// let green = start.advance();
/// let orange = green.advance();
/// let handed_over = orange.advance();
///
/// assert_eq!(green.active_light().color(), Color::Green);
/// assert!(orange.handover_pending());
/// assert_eq!(handed_over.active(), Slot::ALL[1]);
/// assert!(handed_over.lights().iter().all(|light| light.is_red()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawIntersection")]
pub struct Intersection {
    active: Slot,
    lights: [Light; LIGHT_COUNT],
}

/// Unchecked wire shape, validated on the way in.
#[derive(Deserialize)]
struct RawIntersection {
    active: usize,
    lights: [Light; LIGHT_COUNT],
}

impl TryFrom<RawIntersection> for Intersection {
    type Error = IntersectionError;

    fn try_from(raw: RawIntersection) -> Result<Self, Self::Error> {
        Intersection::from_parts(raw.active, raw.lights)
    }
}

impl Default for Intersection {
    fn default() -> Self {
        Self {
            active: Slot::FIRST,
            lights: [Light::default(); LIGHT_COUNT],
        }
    }
}

impl Intersection {
    /// Initial intersection: slot 0 active, every light red.
    pub fn reset() -> Self {
        Self::default()
    }

    /// Assemble an intersection from raw parts.
    ///
    /// Every problem is reported, not just the first: an out-of-range
    /// `active`, and each non-active light that is not red.
    ///
    /// ```rust
    /// use crossroads::{Color, Intersection, Light};
    ///
    /// let green = Light::new(Color::Green);
    /// let red = Light::default();
    ///
    /// assert!(Intersection::from_parts(2, [red, red, green, red]).is_ok());
    ///
    /// let err = Intersection::from_parts(0, [red, green, green, red]).unwrap_err();
    /// assert_eq!(err.violations().len(), 2);
    /// ```
    pub fn from_parts(
        active: usize,
        lights: [Light; LIGHT_COUNT],
    ) -> Result<Self, IntersectionError> {
        let slot = Slot::new(active);

        let mut checks: Vec<Validation<(), NonEmptyVec<Violation>>> = Vec::new();
        if slot.is_none() {
            checks.push(Validation::fail(Violation::ActiveOutOfRange {
                index: active,
            }));
        }
        for other in Slot::ALL.into_iter().filter(|s| Some(*s) != slot) {
            let color = lights[other.index()].color();
            let check = if color == Color::Red {
                Validation::success(())
            } else {
                Validation::fail(Violation::InactiveNotRed { slot: other, color })
            };
            checks.push(check);
        }

        match (Validation::all_vec(checks), slot) {
            (Validation::Success(_), Some(active)) => Ok(Self { active, lights }),
            (Validation::Failure(violations), _) => Err(violations.into()),
            (Validation::Success(_), None) => Err(IntersectionError::Invalid {
                violations: vec![Violation::ActiveOutOfRange { index: active }],
            }),
        }
    }

    /// Slot of the light currently allowed to leave red.
    pub const fn active(&self) -> Slot {
        self.active
    }

    pub fn active_light(&self) -> Light {
        self.light(self.active)
    }

    pub fn light(&self, slot: Slot) -> Light {
        self.lights[slot.index()]
    }

    pub const fn lights(&self) -> &[Light; LIGHT_COUNT] {
        &self.lights
    }

    /// Colors of all four lights, in slot order.
    pub fn colors(&self) -> [Color; LIGHT_COUNT] {
        self.lights.map(Light::color)
    }

    /// True when the next `advance` hands activity to the next slot.
    pub fn handover_pending(&self) -> bool {
        self.active_light().is_orange()
    }

    /// Copy with the active light set to `color`; other lights untouched.
    pub fn with_active_color(self, color: Color) -> Self {
        let mut lights = self.lights;
        lights[self.active.index()] = self.active_light().with_color(color);
        Self { lights, ..self }
    }

    /// Next intersection state.
    pub fn advance(self) -> Self {
        let before = self.active_light();
        let after = before.advance();
        let lit = self.with_active_color(after.color());

        if completes_cycle(before, after) {
            lit.handed_over()
        } else {
            lit
        }
    }

    fn handed_over(self) -> Self {
        Self {
            active: self.active.next(),
            ..self
        }
    }
}

/// The orange-to-red edge, the only one that triggers handover.
fn completes_cycle(before: Light, after: Light) -> bool {
    before.is_orange() && after.is_red()
}

impl State for Intersection {
    fn name(&self) -> &str {
        self.lights[self.active.index()].name()
    }
}

impl Advance for Intersection {
    fn advance(&self) -> Self {
        Intersection::advance(*self)
    }
}

impl fmt::Display for Intersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, light) in self.lights.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{light}")?;
        }
        write!(f, "] active={}", self.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Light {
        Light::new(Color::Red)
    }

    #[test]
    fn reset_is_all_red_with_first_slot_active() {
        let intersection = Intersection::reset();
        assert_eq!(intersection.active(), Slot::FIRST);
        assert_eq!(intersection.colors(), [Color::Red; LIGHT_COUNT]);
        assert_eq!(intersection, Intersection::default());
    }

    #[test]
    fn red_and_green_keep_active_slot() {
        let green = Intersection::reset().advance();
        assert_eq!(green.active(), Slot::FIRST);
        assert_eq!(green.active_light().color(), Color::Green);

        let orange = green.advance();
        assert_eq!(orange.active(), Slot::FIRST);
        assert_eq!(orange.active_light().color(), Color::Orange);
    }

    #[test]
    fn orange_turns_red_and_hands_over_in_one_step() {
        let orange = Intersection::reset().with_active_color(Color::Orange);
        let next = orange.advance();

        assert_eq!(next.light(Slot::FIRST).color(), Color::Red);
        assert_eq!(next.active(), Slot::ALL[1]);
        assert_eq!(next.active_light().color(), Color::Red);
    }

    #[test]
    fn last_slot_hands_over_to_first() {
        let last = Intersection::from_parts(3, [red(), red(), red(), Light::new(Color::Orange)])
            .unwrap();
        assert_eq!(last.advance(), Intersection::reset());
    }

    #[test]
    fn handover_pending_only_on_orange() {
        let start = Intersection::reset();
        assert!(!start.handover_pending());
        assert!(!start.advance().handover_pending());
        assert!(start.advance().advance().handover_pending());
    }

    #[test]
    fn advance_does_not_modify_original() {
        let start = Intersection::reset();
        let _ = start.advance();
        assert_eq!(start, Intersection::reset());
    }

    #[test]
    fn with_active_color_touches_only_active_slot() {
        let at_two = Intersection::from_parts(2, [red(); LIGHT_COUNT]).unwrap();
        let green = at_two.with_active_color(Color::Green);

        assert_eq!(green.colors(), [Color::Red, Color::Red, Color::Green, Color::Red]);
        assert_eq!(green.active(), at_two.active());
    }

    #[test]
    fn from_parts_rejects_out_of_range_active() {
        let err = Intersection::from_parts(4, [red(); LIGHT_COUNT]).unwrap_err();
        assert_eq!(
            err.violations(),
            &[Violation::ActiveOutOfRange { index: 4 }]
        );
    }

    #[test]
    fn from_parts_accumulates_all_violations() {
        let lights = [
            Light::new(Color::Green),
            Light::new(Color::Orange),
            red(),
            Light::new(Color::Green),
        ];
        let err = Intersection::from_parts(7, lights).unwrap_err();

        assert_eq!(err.violations().len(), 4);
        assert!(err
            .violations()
            .contains(&Violation::ActiveOutOfRange { index: 7 }));
        assert!(err.violations().contains(&Violation::InactiveNotRed {
            slot: Slot::ALL[1],
            color: Color::Orange,
        }));
    }

    #[test]
    fn error_message_lists_violations() {
        let err = Intersection::from_parts(0, [red(), Light::new(Color::Green), red(), red()])
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid intersection: light 1 shows green but is not the active light"
        );
    }

    #[test]
    fn display_shows_colors_and_active_slot() {
        let intersection = Intersection::reset().advance();
        assert_eq!(intersection.to_string(), "[green red red red] active=0");
    }

    #[test]
    fn name_is_active_light_name() {
        assert_eq!(Intersection::reset().name(), "Red");
        assert_eq!(Intersection::reset().advance().name(), "Green");
    }

    #[test]
    fn serde_round_trip_and_rejection() {
        let state = Intersection::reset().advance();
        let json = serde_json::to_string(&state).unwrap();
        let back: Intersection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);

        let bad = r#"{"active":0,"lights":[{"color":"Red"},{"color":"Green"},{"color":"Red"},{"color":"Red"}]}"#;
        assert!(serde_json::from_str::<Intersection>(bad).is_err());
    }
}
