#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`SampledButton`**: Debounces one digital input and raises events from a periodic `sample()` call
//! - **`ButtonEvent`**: What a sample produced (`StateChanged` on a confirmed flip, `Held` while active)
//! - **`ButtonConfig`**: Active level, held-repeat cadence and optional initial level
//! - **`EventHandler`**: Optional callback slot invoked inline for each event
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`Millis`**: Ready-made wrapping 32-bit millisecond instant
//!
//! Pins are anything implementing `embedded_hal::digital::InputPin`. Levels are
//! reported as `embedded_hal::digital::PinState`.

// Re-export PinState from embedded-hal for user convenience
pub use embedded_hal::digital::PinState;

pub mod time;
pub mod types;
pub mod event;
pub mod button;

pub use button::SampledButton;
pub use event::{ButtonEvent, EventHandler};
pub use time::{Millis, MillisDuration, TimeDuration, TimeInstant, TimeSource};
pub use types::{ButtonConfig, DEFAULT_REPEAT_INTERVAL, DEFAULT_WINDOW};
