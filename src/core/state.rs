//! Core traits for signal states.
//!
//! Every value a driver can step through implements `State` (inspection)
//! and `Advance` (the single externally triggered transition).

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure - no side effects. States are immutable values
/// describing the current position in a state machine.
///
/// # Required Traits
///
/// - `Clone`: States must be cloneable for history tracking
/// - `PartialEq`: States must be comparable for equality-based testing
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States must be encodable for UI diffing
///
/// # Example
///
/// ```rust
/// use crossroads::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Beacon {
///     Off,
///     Flashing,
/// }
///
/// impl State for Beacon {
///     fn name(&self) -> &str {
///         match self {
///             Self::Off => "Off",
///             Self::Flashing => "Flashing",
///         }
///     }
/// }
///
/// assert_eq!(Beacon::Flashing.name(), "Flashing");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// A state machine with exactly one outgoing transition per state.
///
/// `Default` is the initial value, the one a driver returns to on reset.
/// `advance` must be total: there is no state it cannot leave.
///
/// # Example
///
/// ```rust
/// use crossroads::core::{Advance, State};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
/// enum Beacon {
///     #[default]
///     Off,
///     On,
/// }
///
/// impl State for Beacon {
///     fn name(&self) -> &str {
///         match self {
///             Self::Off => "Off",
///             Self::On => "On",
///         }
///     }
/// }
///
/// impl Advance for Beacon {
///     fn advance(&self) -> Self {
///         match self {
///             Self::Off => Self::On,
///             Self::On => Self::Off,
///         }
///     }
/// }
///
/// assert_eq!(Beacon::default().advance().advance(), Beacon::Off);
/// ```
pub trait Advance: State + Default {
    /// Compute the next state. Never mutates `self`.
    fn advance(&self) -> Self;
}
