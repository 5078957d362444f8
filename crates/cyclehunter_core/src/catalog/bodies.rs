//! Default body catalog.

use crate::models::BodySelection;

/// Geocentric markers and planets, in display order.
const GEOCENTRIC_BODIES: [&str; 13] = [
    "Ascendant",
    "CalendarDay",
    "Sun",
    "Moon",
    "Mercury",
    "Venus",
    "Mars",
    "Jupiter",
    "Saturn",
    "Uranus",
    "Neptune",
    "Pluto",
    "TrueNorthNode",
];

/// Heliocentric planets, in display order.
const HELIOCENTRIC_BODIES: [&str; 9] = [
    "Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune", "Pluto",
];

/// All selectable bodies, geocentric block first, every entry disabled.
pub fn default_body_selections() -> Vec<BodySelection> {
    GEOCENTRIC_BODIES
        .iter()
        .map(|name| BodySelection::geocentric(*name))
        .chain(
            HELIOCENTRIC_BODIES
                .iter()
                .map(|name| BodySelection::heliocentric(*name)),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Frame;

    #[test]
    fn geocentric_block_comes_first() {
        let bodies = default_body_selections();
        assert_eq!(bodies.len(), 22);

        let names: Vec<String> = bodies.iter().map(|ps| ps.display_name()).collect();
        assert_eq!(names[0], "G.Ascendant");
        assert_eq!(names[2], "G.Sun");
        assert_eq!(names[12], "G.TrueNorthNode");
        assert_eq!(names[13], "H.Mercury");
        assert_eq!(names[15], "H.Earth");
        assert_eq!(names[21], "H.Pluto");

        assert!(bodies[..13].iter().all(|ps| ps.frame() == Frame::Geocentric));
        assert!(bodies[13..].iter().all(|ps| ps.frame() == Frame::Heliocentric));
    }

    #[test]
    fn display_names_are_unique() {
        let bodies = default_body_selections();
        let mut names: Vec<String> = bodies.iter().map(|ps| ps.display_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), bodies.len());
    }
}
