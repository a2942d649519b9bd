use serde::{Deserialize, Serialize};
use std::fmt;

/// Bodies the ephemeris layer knows how to position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Chiron,
    NorthNode,
    SouthNode,
}

impl Body {
    /// Planets sampled from the provider, in chart order.
    pub const PLANETS: [Body; 11] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
        Body::Chiron,
    ];

    /// The seven planets used by the classical (and vedic) rule tables.
    pub const CLASSICAL: [Body; 7] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
            Body::Chiron => "Chiron",
            Body::NorthNode => "North Node",
            Body::SouthNode => "South Node",
        }
    }

    /// Name used in sidereal charts (nodes become Rahu and Ketu).
    pub fn vedic_name(self) -> &'static str {
        match self {
            Body::NorthNode => "Rahu",
            Body::SouthNode => "Ketu",
            other => other.name(),
        }
    }

    /// Resolve either the western or the vedic display name.
    pub fn from_name(name: &str) -> Option<Body> {
        match name {
            "Rahu" => return Some(Body::NorthNode),
            "Ketu" => return Some(Body::SouthNode),
            _ => {}
        }
        Self::PLANETS
            .iter()
            .chain([Body::NorthNode, Body::SouthNode].iter())
            .copied()
            .find(|body| body.name() == name)
    }

    pub fn is_luminary(self) -> bool {
        matches!(self, Body::Sun | Body::Moon)
    }

    pub fn is_node(self) -> bool {
        matches!(self, Body::NorthNode | Body::SouthNode)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude in degrees, north positive
    pub lat: f64,
    /// Longitude in degrees, east positive
    pub lon: f64,
}

impl GeoLocation {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObserverMode {
    #[default]
    Geocentric,
    Topocentric,
}

/// Where positions are observed from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observer {
    pub mode: ObserverMode,
    pub location: GeoLocation,
}

impl Observer {
    pub fn geocentric(location: GeoLocation) -> Self {
        Self {
            mode: ObserverMode::Geocentric,
            location,
        }
    }

    pub fn topocentric(location: GeoLocation) -> Self {
        Self {
            mode: ObserverMode::Topocentric,
            location,
        }
    }
}

/// Position of a body as returned by an ephemeris provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawPosition {
    /// Ecliptic longitude in degrees (0-360)
    pub ecliptic_longitude: f64,
    /// Right ascension in degrees (0-360)
    pub right_ascension: f64,
    /// Declination in degrees
    pub declination: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_names() {
        assert_eq!(Body::NorthNode.name(), "North Node");
        assert_eq!(Body::NorthNode.vedic_name(), "Rahu");
        assert_eq!(Body::SouthNode.vedic_name(), "Ketu");
        assert_eq!(Body::Sun.vedic_name(), "Sun");
    }

    #[test]
    fn test_body_from_name() {
        assert_eq!(Body::from_name("Rahu"), Some(Body::NorthNode));
        assert_eq!(Body::from_name("South Node"), Some(Body::SouthNode));
        assert_eq!(Body::from_name("Chiron"), Some(Body::Chiron));
        assert_eq!(Body::from_name("Ascendant"), None);
    }

    #[test]
    fn test_geo_location_validity() {
        assert!(GeoLocation::new(51.5, -0.12).is_valid());
        assert!(!GeoLocation::new(91.0, 0.0).is_valid());
        assert!(!GeoLocation::new(0.0, f64::NAN).is_valid());
    }
}
