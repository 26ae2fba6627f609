//! Events raised by a sampled button.

use crate::time::TimeDuration;
use embedded_hal::digital::PinState;

/// Callback slot signature: debounced level and time since the previous
/// confirmed transition.
pub type EventHandler<'a, D> = &'a mut dyn FnMut(PinState, D);

/// Event produced by a single `sample()` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent<D: TimeDuration> {
    /// The debounced level flipped.
    StateChanged {
        /// New debounced level.
        level: PinState,
        /// Time spent in the previous level.
        elapsed: D,
    },
    /// The button is still resting in its active level.
    Held {
        /// Current debounced level (always the active level).
        level: PinState,
        /// Time since the button became active.
        elapsed: D,
    },
}

impl<D: TimeDuration> ButtonEvent<D> {
    /// Debounced level carried by the event.
    pub fn level(&self) -> PinState {
        match *self {
            ButtonEvent::StateChanged { level, .. } | ButtonEvent::Held { level, .. } => level,
        }
    }

    /// Elapsed time carried by the event.
    pub fn elapsed(&self) -> D {
        match *self {
            ButtonEvent::StateChanged { elapsed, .. } | ButtonEvent::Held { elapsed, .. } => {
                elapsed
            }
        }
    }
}
