//! Button configuration.

use embedded_hal::digital::PinState;

/// Default number of consecutive identical readings required to trust a level.
pub const DEFAULT_WINDOW: usize = 3;

/// Default number of `sample()` calls between held-repeat events.
pub const DEFAULT_REPEAT_INTERVAL: u32 = 10;

/// Static configuration applied when a button is constructed.
///
/// Built with chained `const fn` setters:
///
/// ```
/// use embedded_hal::digital::PinState;
/// use sampled_button::ButtonConfig;
///
/// const CONFIG: ButtonConfig = ButtonConfig::new()
///     .active_level(PinState::High)
///     .repeat_interval(25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig {
    /// Raw level that counts as "pressed". `Low` suits a switch to ground with a pull-up.
    pub active_level: PinState,

    /// Samples between held-repeat events. Zero is treated as one.
    pub repeat_interval: u32,

    /// Assumed debounced level before the first confirmed window.
    ///
    /// `None` seeds the level from the first uniform window without raising
    /// an event.
    pub initial_state: Option<PinState>,
}

impl ButtonConfig {
    /// Creates the default configuration: active-low, repeat every
    /// [`DEFAULT_REPEAT_INTERVAL`] samples, seeded initial state.
    pub const fn new() -> Self {
        Self {
            active_level: PinState::Low,
            repeat_interval: DEFAULT_REPEAT_INTERVAL,
            initial_state: None,
        }
    }

    /// Sets the level considered pressed.
    pub const fn active_level(mut self, level: PinState) -> Self {
        self.active_level = level;
        self
    }

    /// Sets the held-repeat cadence in samples.
    pub const fn repeat_interval(mut self, samples: u32) -> Self {
        self.repeat_interval = samples;
        self
    }

    /// Trusts `level` as the debounced state before any sample is taken.
    pub const fn initial_state(mut self, level: PinState) -> Self {
        self.initial_state = Some(level);
        self
    }
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Clamps a repeat interval to the smallest usable cadence.
#[inline]
pub(crate) const fn clamp_interval(samples: u32) -> u32 {
    if samples == 0 { 1 } else { samples }
}
