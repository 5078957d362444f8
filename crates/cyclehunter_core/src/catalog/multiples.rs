//! Default custom and fixed lookback multiples.

use std::collections::BTreeSet;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use super::CatalogRevision;
use crate::models::LookbackMultiple;

/// Largest integer in the simplified custom catalog.
const SIMPLIFIED_MAX: u32 = 14;

/// Step and ceiling of each arithmetic sequence in the extended catalog.
const EXTENDED_SEQUENCES: [(u32, u32); 7] = [
    (7, 168),
    (19, 19 * 24),
    (11, 11 * 24),
    (12, 12 * 24),
    (37, 37 * 24),
    (49, 49 * 12),
    (72, 72 * 12),
];

/// Custom (integer) multiples for the given revision, ascending, disabled.
pub fn default_custom_multiples(revision: CatalogRevision) -> Vec<LookbackMultiple> {
    let integers: Vec<u32> = match revision {
        CatalogRevision::Simplified => (1..=SIMPLIFIED_MAX).collect(),
        CatalogRevision::Extended => extended_integers().into_iter().collect(),
    };

    integers
        .into_iter()
        .map(|n| LookbackMultiple::generated(n.to_string(), Decimal::from(n)))
        .collect()
}

/// Integers of the extended catalog, deduplicated and sorted.
///
/// Zero belongs to every generating sequence but is not a usable multiple,
/// so it is removed from the union.
pub fn extended_integers() -> BTreeSet<u32> {
    let mut integers: BTreeSet<u32> = (0..60).collect();

    for (step, ceiling) in EXTENDED_SEQUENCES {
        integers.extend((0..=ceiling).step_by(step as usize));
    }

    // Perfect squares below 19^2
    integers.extend((0..19u32).map(|i| i * i));

    integers.remove(&0);
    integers
}

/// Golden-ratio derived multiples, in display order:
/// `sqrt(phi)^1..=8`, `sqrt(1 + phi^2)`, then `sqrt(2)`, `sqrt(3)`, `sqrt(5)`.
///
/// Powers are built by repeated multiplication rather than `powi` so the
/// results are bit-identical on every platform.
pub fn default_fixed_multiples() -> Vec<LookbackMultiple> {
    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let root_phi = phi.sqrt();

    let mut entries: Vec<(String, f64)> = Vec::with_capacity(12);

    let mut power = 1.0;
    for i in 1..=8 {
        power *= root_phi;
        entries.push((format!("sqrt(phi) ^ {}", i), power));
    }

    entries.push((
        "sqrt( (1^2) + (phi^2) )".to_string(),
        (1.0 + phi * phi).sqrt(),
    ));

    for i in [2u32, 3, 5] {
        entries.push((format!("sqrt( {} )", i), f64::from(i).sqrt()));
    }

    entries
        .into_iter()
        .filter_map(|(name, value)| {
            let multiple = Decimal::from_f64(value)?;
            Some(LookbackMultiple::generated(name, multiple))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(value: Decimal, expected: &str) -> bool {
        let expected: Decimal = expected.parse().unwrap();
        (value - expected).abs() < Decimal::new(1, 3)
    }

    #[test]
    fn simplified_is_one_through_fourteen() {
        let multiples = default_custom_multiples(CatalogRevision::Simplified);
        assert_eq!(multiples.len(), 14);

        for (i, lm) in multiples.iter().enumerate() {
            let n = i as u32 + 1;
            assert_eq!(lm.name(), n.to_string());
            assert_eq!(lm.multiple(), Decimal::from(n));
            assert!(!lm.is_enabled());
        }
    }

    #[test]
    fn extended_is_sorted_unique_union() {
        let integers: Vec<u32> = extended_integers().into_iter().collect();

        assert_eq!(integers.first(), Some(&1));
        assert!(integers.windows(2).all(|w| w[0] < w[1]));
        assert!(!integers.contains(&0));

        for n in [1, 59, 168, 456, 264, 288, 888, 588, 864, 324] {
            assert!(integers.contains(&n), "missing {}", n);
        }
        // 60 is a multiple of 12, 61 is in no sequence.
        assert!(integers.contains(&60));
        assert!(!integers.contains(&61));
    }

    #[test]
    fn extended_catalog_follows_integer_order() {
        let multiples = default_custom_multiples(CatalogRevision::Extended);
        let integers = extended_integers();
        assert_eq!(multiples.len(), integers.len());

        for (lm, n) in multiples.iter().zip(integers) {
            assert_eq!(lm.multiple(), Decimal::from(n));
            assert_eq!(lm.name(), n.to_string());
        }
    }

    #[test]
    fn fixed_catalog_order_and_names() {
        let multiples = default_fixed_multiples();
        let names: Vec<&str> = multiples.iter().map(|lm| lm.name()).collect();

        assert_eq!(
            names,
            vec![
                "sqrt(phi) ^ 1",
                "sqrt(phi) ^ 2",
                "sqrt(phi) ^ 3",
                "sqrt(phi) ^ 4",
                "sqrt(phi) ^ 5",
                "sqrt(phi) ^ 6",
                "sqrt(phi) ^ 7",
                "sqrt(phi) ^ 8",
                "sqrt( (1^2) + (phi^2) )",
                "sqrt( 2 )",
                "sqrt( 3 )",
                "sqrt( 5 )",
            ]
        );
    }

    #[test]
    fn fixed_catalog_regression_values() {
        let m = default_fixed_multiples();

        assert!(approx(m[0].multiple(), "1.272"));
        assert!(approx(m[1].multiple(), "1.618"));
        assert!(approx(m[2].multiple(), "2.058"));
        assert!(approx(m[3].multiple(), "2.618"));
        assert!(approx(m[4].multiple(), "3.330"));
        assert!(approx(m[5].multiple(), "4.236"));
        assert!(approx(m[6].multiple(), "5.388"));
        assert!(approx(m[7].multiple(), "6.854"));
        assert!(approx(m[8].multiple(), "1.902"));
        assert!(approx(m[9].multiple(), "1.414"));
        assert!(approx(m[10].multiple(), "1.732"));
        assert!(approx(m[11].multiple(), "2.236"));
    }
}
