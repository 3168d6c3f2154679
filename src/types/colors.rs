use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe color enum instead of strings.
///
/// Variant names follow the wire vocabulary, so the derived serde
/// implementation round-trips Notion's `*_background` forms untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum Color {
    #[default]
    Default,
    Gray,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    GrayBackground,
    BrownBackground,
    RedBackground,
    OrangeBackground,
    YellowBackground,
    GreenBackground,
    BlueBackground,
    PurpleBackground,
    PinkBackground,
}

impl std::str::FromStr for Color {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Color::Default),
            "gray" => Ok(Color::Gray),
            "brown" => Ok(Color::Brown),
            "red" => Ok(Color::Red),
            "orange" => Ok(Color::Orange),
            "yellow" => Ok(Color::Yellow),
            "green" => Ok(Color::Green),
            "blue" => Ok(Color::Blue),
            "purple" => Ok(Color::Purple),
            "pink" => Ok(Color::Pink),
            "gray_background" | "light_gray" => Ok(Color::GrayBackground),
            "brown_background" | "light_brown" => Ok(Color::BrownBackground),
            "red_background" | "light_red" => Ok(Color::RedBackground),
            "orange_background" | "light_orange" => Ok(Color::OrangeBackground),
            "yellow_background" | "light_yellow" => Ok(Color::YellowBackground),
            "green_background" | "light_green" => Ok(Color::GreenBackground),
            "blue_background" | "light_blue" => Ok(Color::BlueBackground),
            "purple_background" | "light_purple" => Ok(Color::PurpleBackground),
            "pink_background" | "light_pink" => Ok(Color::PinkBackground),
            _ => Err(ValidationError::InvalidColor(s.to_string())),
        }
    }
}

impl Color {
    /// Convert to the wire string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Default => "default",
            Color::Gray => "gray",
            Color::Brown => "brown",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Purple => "purple",
            Color::Pink => "pink",
            Color::GrayBackground => "gray_background",
            Color::BrownBackground => "brown_background",
            Color::RedBackground => "red_background",
            Color::OrangeBackground => "orange_background",
            Color::YellowBackground => "yellow_background",
            Color::GreenBackground => "green_background",
            Color::BlueBackground => "blue_background",
            Color::PurpleBackground => "purple_background",
            Color::PinkBackground => "pink_background",
        }
    }

    /// Whether this is one of the `*_background` colors.
    pub fn is_background(&self) -> bool {
        self.as_str().ends_with("_background")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn round_trips_wire_strings() {
        for color in [
            Color::Default,
            Color::Blue,
            Color::GrayBackground,
            Color::PinkBackground,
        ] {
            assert_eq!(Color::from_str(color.as_str()).unwrap(), color);
        }
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&Color::GrayBackground).unwrap();
        assert_eq!(json, "\"gray_background\"");

        let color: Color = serde_json::from_str("\"yellow_background\"").unwrap();
        assert_eq!(color, Color::YellowBackground);
    }

    #[test]
    fn accepts_legacy_light_names() {
        assert_eq!(Color::from_str("light_gray").unwrap(), Color::GrayBackground);
    }

    #[test]
    fn rejects_unknown_names() {
        assert!(Color::from_str("ultraviolet").is_err());
    }
}
