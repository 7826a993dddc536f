//! Tick grid configuration.
//!
//! This module contains [`TickSpacing`], the validated granularity of the
//! tick grid that positions are placed on, with presets for the standard
//! fee tiers.

mod tick_spacing;

pub use tick_spacing::TickSpacing;
