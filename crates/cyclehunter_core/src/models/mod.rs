//! Data models for Cycle Hunter.
//!
//! This module contains the value types held by the settings store:
//! - Reference frames for body positions
//! - Display colours stored as decimal channels
//! - Lookback multiples and body selections
//! - Price bars supplied to the chart

mod body;
mod color;
mod enums;
mod lookback;
mod price_bar;

// Re-export all public types
pub use body::BodySelection;
pub use color::Color;
pub use enums::Frame;
pub use lookback::LookbackMultiple;
pub use price_bar::PriceBar;
