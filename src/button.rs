//! Debounced button with click and held-repeat events.
//!
//! Provides [`SampledButton`], which samples a single digital input at a caller
//! chosen cadence, filters contact bounce with a sliding window of raw
//! readings, and reports confirmed level changes and periodic "still held"
//! notifications.

use crate::event::{ButtonEvent, EventHandler};
use crate::time::{TimeInstant, TimeSource};
use crate::types::{ButtonConfig, DEFAULT_WINDOW, clamp_interval};
use embedded_hal::digital::{InputPin, PinState};
use heapless::Deque;

/// A push button debounced by sampling.
///
/// Each call to [`sample`](Self::sample) reads the pin once and pushes the
/// reading into a window of the last `N` readings. A level is trusted only
/// once all `N` readings agree. A trusted level that differs from the current
/// debounced state raises [`ButtonEvent::StateChanged`]. While the debounced
/// state rests at the active level, every `repeat_interval`-th sample raises
/// [`ButtonEvent::Held`].
///
/// The button never blocks and never sleeps. Handlers run inline inside
/// `sample()`, so a slow handler delays the caller's sampling loop.
///
/// # Type Parameters
/// * `'a` - Lifetime of the time source and handler references
/// * `I` - Time instant type
/// * `P` - Input pin type
/// * `T` - Time source implementation type
/// * `N` - Number of agreeing readings required to trust a level
pub struct SampledButton<
    'a,
    I: TimeInstant,
    P: InputPin,
    T: TimeSource<I>,
    const N: usize = DEFAULT_WINDOW,
> {
    pin: P,
    time_source: &'a T,
    window: Deque<PinState, N>,
    stable_state: Option<PinState>,
    last_transition: Option<I>,
    sample_count: u32,
    repeat_interval: u32,
    active_level: PinState,
    on_state_change: Option<EventHandler<'a, I::Duration>>,
    on_held: Option<EventHandler<'a, I::Duration>>,
}

impl<'a, I: TimeInstant, P: InputPin, T: TimeSource<I>> SampledButton<'a, I, P, T> {
    /// Creates an active-low button with the default window and repeat interval.
    ///
    /// No pin read or clock read happens here.
    pub fn new(pin: P, time_source: &'a T) -> Self {
        Self::with_window(pin, time_source, ButtonConfig::new())
    }

    /// Creates a button with the default window and the given configuration.
    pub fn with_config(pin: P, time_source: &'a T, config: ButtonConfig) -> Self {
        Self::with_window(pin, time_source, config)
    }
}

impl<'a, I: TimeInstant, P: InputPin, T: TimeSource<I>, const N: usize>
    SampledButton<'a, I, P, T, N>
{
    /// Creates a button whose debounce window holds `N` readings.
    pub fn with_window(pin: P, time_source: &'a T, config: ButtonConfig) -> Self {
        const { assert!(N > 0, "debounce window must hold at least one reading") };

        Self {
            pin,
            time_source,
            window: Deque::new(),
            stable_state: config.initial_state,
            last_transition: None,
            sample_count: 0,
            repeat_interval: clamp_interval(config.repeat_interval),
            active_level: config.active_level,
            on_state_change: None,
            on_held: None,
        }
    }

    /// Samples the pin once and runs the debounce state machine.
    ///
    /// Returns the event raised by this sample, if any. The event is returned
    /// whether or not a handler is registered for it. At most one event is
    /// raised per call: a sample that confirms a transition never also raises
    /// a held-repeat.
    ///
    /// # Errors
    /// Propagates a failed pin read. Nothing is updated in that case, so the
    /// failed read does not count as a sample.
    pub fn sample(&mut self) -> Result<Option<ButtonEvent<I::Duration>>, P::Error> {
        let raw = PinState::from(self.pin.is_high()?);
        self.sample_count = self.sample_count.wrapping_add(1);

        let now = self.time_source.now();
        let since = *self.last_transition.get_or_insert(now);

        if self.window.is_full() {
            self.window.pop_front();
        }
        let pushed = self.window.push_back(raw);
        debug_assert!(pushed.is_ok());

        if !self.window.is_full() || self.window.iter().any(|reading| *reading != raw) {
            return Ok(None);
        }

        let elapsed = now.duration_since(since);

        let event = match self.stable_state {
            None => {
                self.stable_state = Some(raw);
                self.last_transition = Some(now);
                #[cfg(feature = "defmt")]
                defmt::trace!("button seeded at {}", raw);
                None
            }
            Some(stable) if stable != raw => {
                self.stable_state = Some(raw);
                self.last_transition = Some(now);
                #[cfg(feature = "defmt")]
                defmt::debug!(
                    "button changed to {} after {} ms",
                    raw,
                    crate::time::TimeDuration::as_millis(&elapsed)
                );
                Some(ButtonEvent::StateChanged {
                    level: raw,
                    elapsed,
                })
            }
            Some(stable)
                if stable == self.active_level && self.sample_count % self.repeat_interval == 0 =>
            {
                #[cfg(feature = "defmt")]
                defmt::trace!("button held at sample {}", self.sample_count);
                Some(ButtonEvent::Held {
                    level: stable,
                    elapsed,
                })
            }
            Some(_) => None,
        };

        if let Some(event) = event {
            self.dispatch(event);
        }
        Ok(event)
    }

    fn dispatch(&mut self, event: ButtonEvent<I::Duration>) {
        let slot = match event {
            ButtonEvent::StateChanged { .. } => &mut self.on_state_change,
            ButtonEvent::Held { .. } => &mut self.on_held,
        };
        if let Some(handler) = slot {
            handler(event.level(), event.elapsed());
        }
    }

    /// Registers the handler run on every confirmed level change, replacing any previous one.
    pub fn set_state_change_handler(&mut self, handler: EventHandler<'a, I::Duration>) {
        self.on_state_change = Some(handler);
    }

    /// Registers the handler run on held-repeat events, replacing any previous one.
    pub fn set_held_handler(&mut self, handler: EventHandler<'a, I::Duration>) {
        self.on_held = Some(handler);
    }

    /// Removes the state change handler.
    pub fn clear_state_change_handler(&mut self) {
        self.on_state_change = None;
    }

    /// Removes the held-repeat handler.
    pub fn clear_held_handler(&mut self) {
        self.on_held = None;
    }

    /// Returns the debounced level, or `None` until the first window has been confirmed.
    pub fn state(&self) -> Option<PinState> {
        self.stable_state
    }

    /// Returns true if the debounced level equals the active level.
    pub fn is_active(&self) -> bool {
        self.stable_state == Some(self.active_level)
    }

    /// Returns the raw level that counts as pressed.
    pub fn active_level(&self) -> PinState {
        self.active_level
    }

    /// Changes the raw level that counts as pressed. Takes effect on the next sample.
    pub fn set_active_level(&mut self, level: PinState) {
        self.active_level = level;
    }

    /// Returns the number of samples between held-repeat events.
    pub fn repeat_interval(&self) -> u32 {
        self.repeat_interval
    }

    /// Sets the number of samples between held-repeat events. Zero is clamped to one.
    pub fn set_repeat_interval(&mut self, samples: u32) {
        self.repeat_interval = clamp_interval(samples);
    }

    /// Returns the number of successful samples taken. Wraps at `u32::MAX`.
    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    /// Consumes the button and hands back the pin.
    pub fn release(self) -> P {
        self.pin
    }
}
