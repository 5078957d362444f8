//! Body selections: which celestial bodies or calendar markers are plotted.

use super::enums::Frame;

/// A body or marker together with the frame it is viewed in.
///
/// The display name is derived from the body name and frame on every call,
/// so changing the frame also changes the label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BodySelection {
    /// Canonical name without the frame prefix (e.g. "Sun", "CalendarDay").
    body_name: String,
    frame: Frame,
    enabled: bool,
}

impl BodySelection {
    pub fn new(body_name: impl Into<String>, frame: Frame, enabled: bool) -> Self {
        Self {
            body_name: body_name.into(),
            frame,
            enabled,
        }
    }

    /// Disabled geocentric selection.
    pub fn geocentric(body_name: impl Into<String>) -> Self {
        Self::new(body_name, Frame::Geocentric, false)
    }

    /// Disabled heliocentric selection.
    pub fn heliocentric(body_name: impl Into<String>) -> Self {
        Self::new(body_name, Frame::Heliocentric, false)
    }

    pub fn body_name(&self) -> &str {
        &self.body_name
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    pub fn set_frame(&mut self, frame: Frame) {
        self.frame = frame;
    }

    pub fn is_heliocentric(&self) -> bool {
        self.frame == Frame::Heliocentric
    }

    /// Label in the form "G.Moon" or "H.Earth".
    pub fn display_name(&self) -> String {
        format!("{}{}", self.frame.prefix(), self.body_name)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

impl std::fmt::Display for BodySelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_uses_frame_prefix() {
        assert_eq!(BodySelection::geocentric("Moon").display_name(), "G.Moon");
        assert_eq!(BodySelection::heliocentric("Earth").display_name(), "H.Earth");
    }

    #[test]
    fn display_matches_display_name() {
        let selections = [
            BodySelection::geocentric("TrueNorthNode"),
            BodySelection::heliocentric("Pluto"),
        ];
        for ps in selections {
            assert_eq!(format!("{}", ps), ps.display_name());
        }
    }

    #[test]
    fn display_name_follows_frame_change() {
        let mut ps = BodySelection::geocentric("Mars");
        ps.set_frame(Frame::Heliocentric);
        assert_eq!(ps.display_name(), "H.Mars");
        assert!(ps.is_heliocentric());

        ps.set_frame(Frame::Geocentric);
        assert_eq!(ps.display_name(), "G.Mars");
        assert_eq!(ps.to_string(), ps.display_name());
    }
}
