//! Display colour with exact decimal channels.

use rust_decimal::Decimal;

use crate::config::{ConfigError, ConfigResult};

/// RGBA colour with every channel in `[0, 1]`.
///
/// Channels are exact decimals so a colour written to the settings file
/// reads back equal to the one that was saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    red: Decimal,
    green: Decimal,
    blue: Decimal,
    opacity: Decimal,
}

impl Color {
    /// Create a colour, validating that each channel lies in `[0, 1]`.
    pub fn new(
        red: Decimal,
        green: Decimal,
        blue: Decimal,
        opacity: Decimal,
    ) -> ConfigResult<Self> {
        Ok(Self {
            red: check_channel("red", red)?,
            green: check_channel("green", green)?,
            blue: check_channel("blue", blue)?,
            opacity: check_channel("opacity", opacity)?,
        })
    }

    /// Opaque mid gray (0x808080), the default for every generated multiple.
    pub fn gray() -> Self {
        let level = Decimal::from(128) / Decimal::from(255);
        Self {
            red: level,
            green: level,
            blue: level,
            opacity: Decimal::ONE,
        }
    }

    pub fn red(&self) -> Decimal {
        self.red
    }

    pub fn green(&self) -> Decimal {
        self.green
    }

    pub fn blue(&self) -> Decimal {
        self.blue
    }

    pub fn opacity(&self) -> Decimal {
        self.opacity
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::gray()
    }
}

fn check_channel(channel: &'static str, value: Decimal) -> ConfigResult<Decimal> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(ConfigError::InvalidColor { channel, value });
    }
    Ok(value)
}
