//! Body name lookup for the Swiss Ephemeris numbering.
//!
//! The ephemeris library identifies bodies by integer constants; the rest of
//! the application uses the names stored in [`BodySelection`](crate::models::BodySelection).

/// Returned by [`body_id_for_name`] for names the ephemeris does not know.
///
/// Lies outside every ephemeris constant, including `-1` (ecliptic and
/// nutation).
pub const UNKNOWN_BODY_ID: i32 = -9999;

/// Name and Swiss Ephemeris ID of every body the application can request.
const BODIES: [(&str, i32); 25] = [
    ("Sun", 0),
    ("Moon", 1),
    ("Mercury", 2),
    ("Venus", 3),
    ("Mars", 4),
    ("Jupiter", 5),
    ("Saturn", 6),
    ("Uranus", 7),
    ("Neptune", 8),
    ("Pluto", 9),
    ("MeanNorthNode", 10),
    ("TrueNorthNode", 11),
    ("MeanLunarApogee", 12),
    ("OsculatingLunarApogee", 13),
    ("Earth", 14),
    ("Chiron", 15),
    ("Pholus", 16),
    ("Ceres", 17),
    ("Pallas", 18),
    ("Juno", 19),
    ("Vesta", 20),
    ("InterpolatedLunarApogee", 21),
    ("InterpolatedLunarPerigee", 22),
    ("Isis", 48),
    ("Nibiru", 49),
];

/// Ephemeris ID for a body name, or [`UNKNOWN_BODY_ID`].
pub fn body_id_for_name(name: &str) -> i32 {
    BODIES
        .iter()
        .find(|(body, _)| *body == name)
        .map_or(UNKNOWN_BODY_ID, |(_, id)| *id)
}

/// Body name for an ephemeris ID.
pub fn body_name_for_id(id: i32) -> Option<&'static str> {
    let name = BODIES
        .iter()
        .find(|(_, body_id)| *body_id == id)
        .map(|(name, _)| *name);
    if name.is_none() {
        tracing::error!("Unknown planet id given: {}", id);
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_round_trip() {
        for (name, id) in BODIES {
            assert_eq!(body_id_for_name(name), id);
            assert_eq!(body_name_for_id(id), Some(name));
        }
    }

    #[test]
    fn unknown_name_returns_sentinel() {
        assert_eq!(body_id_for_name("Vulcan"), UNKNOWN_BODY_ID);
        // Calendar markers have no ephemeris body.
        assert_eq!(body_id_for_name("CalendarDay"), UNKNOWN_BODY_ID);
        assert_eq!(body_id_for_name("sun"), UNKNOWN_BODY_ID);
    }

    #[test]
    fn unknown_id_returns_none() {
        assert_eq!(body_name_for_id(UNKNOWN_BODY_ID), None);
        assert_eq!(body_name_for_id(30), None);
    }
}
