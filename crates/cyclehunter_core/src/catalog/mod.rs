//! Default candidate catalogs.
//!
//! Whenever no saved settings exist, or they cannot be read, the store is
//! populated from here. Every function is a pure function of no input, so
//! two machines without saved state always start from identical catalogs.
//!
//! # Example
//!
//! ```
//! use cyclehunter_core::catalog::{CatalogRevision, DefaultCatalog};
//!
//! let catalog = DefaultCatalog::generate(CatalogRevision::Simplified);
//! assert_eq!(catalog.custom_multiples.len(), 14);
//! assert_eq!(catalog.fixed_multiples.len(), 12);
//! ```

mod bodies;
mod multiples;

pub use bodies::default_body_selections;
pub use multiples::{default_custom_multiples, default_fixed_multiples, extended_integers};

use crate::models::{BodySelection, LookbackMultiple};

/// Named version of the default custom-multiple catalog.
///
/// Only the custom integer catalog differs between revisions; bodies and
/// fixed multiples are shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogRevision {
    /// Integers 1 through 14.
    #[default]
    Simplified,
    /// Union of several integer sequences (multiples of 7, 11, 12, 19, 37,
    /// 49, 72, perfect squares and 1..59) in ascending order.
    Extended,
}

impl std::fmt::Display for CatalogRevision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogRevision::Simplified => write!(f, "simplified"),
            CatalogRevision::Extended => write!(f, "extended"),
        }
    }
}

/// The three default lists, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultCatalog {
    pub body_selections: Vec<BodySelection>,
    pub custom_multiples: Vec<LookbackMultiple>,
    pub fixed_multiples: Vec<LookbackMultiple>,
}

impl DefaultCatalog {
    pub fn generate(revision: CatalogRevision) -> Self {
        let catalog = Self {
            body_selections: default_body_selections(),
            custom_multiples: default_custom_multiples(revision),
            fixed_multiples: default_fixed_multiples(),
        };
        tracing::debug!(
            "Generated {} default catalog: {} bodies, {} custom multiples, {} fixed multiples",
            revision,
            catalog.body_selections.len(),
            catalog.custom_multiples.len(),
            catalog.fixed_multiples.len()
        );
        catalog
    }
}
