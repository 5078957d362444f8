//! Lookback multiples: candidate period lengths drawn on the chart.

use rust_decimal::Decimal;

use super::color::Color;
use crate::config::{ConfigError, ConfigResult};

/// A named lookback multiplier with its display colour and selection flag.
///
/// Equality and hashing cover every field, so two multiples with the same
/// name, value, colour and flag are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LookbackMultiple {
    /// Display label, may encode a formula such as `sqrt(phi) ^ 3`.
    name: String,
    /// Exact multiplier, always greater than zero.
    multiple: Decimal,
    color: Color,
    enabled: bool,
}

impl LookbackMultiple {
    /// Create a lookback multiple.
    ///
    /// Returns [`ConfigError::InvalidMultiple`] unless `multiple > 0`.
    pub fn new(
        name: impl Into<String>,
        multiple: Decimal,
        color: Color,
        enabled: bool,
    ) -> ConfigResult<Self> {
        check_multiple(multiple)?;
        Ok(Self {
            name: name.into(),
            multiple,
            color,
            enabled,
        })
    }

    /// Disabled gray entry for the default catalogs.
    pub(crate) fn generated(name: impl Into<String>, multiple: Decimal) -> Self {
        debug_assert!(multiple > Decimal::ZERO, "generated multiple must be positive");
        Self {
            name: name.into(),
            multiple,
            color: Color::gray(),
            enabled: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn multiple(&self) -> Decimal {
        self.multiple
    }

    /// Change the multiplier; the current value is kept on error.
    pub fn set_multiple(&mut self, multiple: Decimal) -> ConfigResult<()> {
        check_multiple(multiple)?;
        self.multiple = multiple;
        Ok(())
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

impl std::fmt::Display for LookbackMultiple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.multiple)
    }
}

fn check_multiple(multiple: Decimal) -> ConfigResult<()> {
    if multiple <= Decimal::ZERO {
        return Err(ConfigError::InvalidMultiple(multiple));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn rejects_non_positive_multiple() {
        let zero = LookbackMultiple::new("0", Decimal::ZERO, Color::gray(), false);
        assert!(matches!(zero, Err(ConfigError::InvalidMultiple(_))));

        let negative = LookbackMultiple::new("-3", Decimal::from(-3), Color::gray(), false);
        assert!(negative.is_err());
    }

    #[test]
    fn set_multiple_keeps_value_on_error() {
        let mut lm = LookbackMultiple::new("7", Decimal::from(7), Color::gray(), false).unwrap();
        assert!(lm.set_multiple(Decimal::ZERO).is_err());
        assert_eq!(lm.multiple(), Decimal::from(7));

        lm.set_multiple(Decimal::new(35, 1)).unwrap();
        assert_eq!(lm.multiple(), Decimal::new(35, 1));
    }

    #[test]
    fn structurally_equal_multiples_collide() {
        let a = LookbackMultiple::generated("5", Decimal::from(5));
        let b = LookbackMultiple::generated("5", Decimal::from(5));
        let mut toggled = b.clone();
        toggled.set_enabled(true);

        assert_eq!(a, b);
        assert_ne!(a, toggled);

        let set: HashSet<_> = [a, b, toggled].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn display_shows_name_and_value() {
        let lm = LookbackMultiple::generated("sqrt( 2 )", Decimal::new(1414, 3));
        assert_eq!(lm.to_string(), "sqrt( 2 ) (1.414)");
    }
}
