#![no_std]
#![no_main]

use core::convert::Infallible;
use cortex_m_rt::entry;
use embedded_hal::digital::{ErrorType, InputPin};
use panic_halt as _;
use sampled_button::{
    ButtonConfig, ButtonEvent, Millis, MillisDuration, PinState, SampledButton, TimeSource,
};

// ============================================================================
// Minimal Hardware Types
// ============================================================================

/// Pin that reports a level the optimizer cannot predict
pub struct MinimalPin;

impl ErrorType for MinimalPin {
    type Error = Infallible;
}

impl InputPin for MinimalPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(core::hint::black_box(true))
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(core::hint::black_box(false))
    }
}

/// Clock frozen at a value the optimizer cannot predict
pub struct MinimalTimeSource;

impl TimeSource<Millis> for MinimalTimeSource {
    fn now(&self) -> Millis {
        Millis(core::hint::black_box(0))
    }
}

// ============================================================================
// Test Buttons
// ============================================================================

// This function uses the library to prevent optimizer from removing code
#[inline(never)]
fn test_buttons() {
    let time_source = MinimalTimeSource;

    // Polling only, default window
    let mut button = SampledButton::new(MinimalPin, &time_source);
    for _ in 0..8 {
        if let Ok(Some(event)) = button.sample() {
            core::hint::black_box(event);
        }
    }
    core::hint::black_box(button.state());

    // Handlers registered, default window
    let mut clicks = 0u32;
    let mut helds = 0u32;
    let mut on_change = |_: PinState, _: MillisDuration| clicks += 1;
    let mut on_held = |_: PinState, _: MillisDuration| helds += 1;

    let config = ButtonConfig::new()
        .active_level(PinState::High)
        .repeat_interval(4);
    let mut button = SampledButton::with_config(MinimalPin, &time_source, config);
    button.set_state_change_handler(&mut on_change);
    button.set_held_handler(&mut on_held);
    for _ in 0..8 {
        let _ = button.sample();
    }
    core::hint::black_box(button);

    // Wider window
    let mut button: SampledButton<'_, Millis, _, _, 8> =
        SampledButton::with_window(MinimalPin, &time_source, ButtonConfig::new());
    for _ in 0..16 {
        if let Ok(Some(ButtonEvent::StateChanged { level, .. })) = button.sample() {
            core::hint::black_box(level);
        }
    }
    core::hint::black_box(button);
}

#[entry]
fn main() -> ! {
    // Call test function to ensure all code is included
    test_buttons();

    // Halt - this is a size analysis binary, not meant to run
    loop {
        cortex_m::asm::nop();
    }
}
