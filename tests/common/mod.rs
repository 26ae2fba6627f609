//! Shared test infrastructure for sampled-button integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use core::convert::Infallible;
use embedded_hal::digital::{ErrorKind, ErrorType, InputPin};
use sampled_button::{ButtonEvent, Millis, MillisDuration, PinState, SampledButton, TimeSource};

// ============================================================================
// Mock Pins
// ============================================================================

/// Input pin whose level is driven by the test through a shared cell
pub struct MockPin<'l> {
    level: &'l Cell<bool>,
    reads: usize,
}

impl<'l> MockPin<'l> {
    pub fn new(level: &'l Cell<bool>) -> Self {
        Self { level, reads: 0 }
    }

    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl ErrorType for MockPin<'_> {
    type Error = Infallible;
}

impl InputPin for MockPin<'_> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.reads += 1;
        Ok(self.level.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

/// Input pin that fails while `broken` is set
pub struct FlakyPin<'l> {
    level: &'l Cell<bool>,
    broken: &'l Cell<bool>,
}

impl<'l> FlakyPin<'l> {
    pub fn new(level: &'l Cell<bool>, broken: &'l Cell<bool>) -> Self {
        Self { level, broken }
    }
}

impl ErrorType for FlakyPin<'_> {
    type Error = ErrorKind;
}

impl InputPin for FlakyPin<'_> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        if self.broken.get() {
            Err(ErrorKind::Other)
        } else {
            Ok(self.level.get())
        }
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<Millis>,
    reads: Cell<usize>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(Millis(0)),
            reads: Cell::new(0),
        }
    }

    /// Advance time by the given number of milliseconds, wrapping like a hardware counter
    pub fn advance(&self, millis: u32) {
        let current = self.current_time.get();
        self.current_time.set(Millis(current.0.wrapping_add(millis)));
    }

    pub fn set_time(&self, time: Millis) {
        self.current_time.set(time);
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl TimeSource<Millis> for MockTimeSource {
    fn now(&self) -> Millis {
        self.reads.set(self.reads.get() + 1);
        self.current_time.get()
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub type TestButton<'a, 'l> = SampledButton<'a, Millis, MockPin<'l>, MockTimeSource>;

/// Drives `levels` into the pin one sample at a time and collects what each sample raised
pub fn feed(
    button: &mut TestButton<'_, '_>,
    line: &Cell<bool>,
    levels: &[u8],
) -> Vec<Option<ButtonEvent<MillisDuration>>> {
    levels
        .iter()
        .map(|level| {
            line.set(*level != 0);
            button.sample().unwrap()
        })
        .collect()
}

/// Same as [`feed`], advancing the clock by `step_ms` after every sample
pub fn feed_timed(
    button: &mut TestButton<'_, '_>,
    line: &Cell<bool>,
    timer: &MockTimeSource,
    levels: &[u8],
    step_ms: u32,
) -> Vec<Option<ButtonEvent<MillisDuration>>> {
    levels
        .iter()
        .map(|level| {
            line.set(*level != 0);
            let event = button.sample().unwrap();
            timer.advance(step_ms);
            event
        })
        .collect()
}

pub fn level(raw: u8) -> PinState {
    PinState::from(raw != 0)
}
