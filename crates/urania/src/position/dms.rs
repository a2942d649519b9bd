//! Degree/minute/second decomposition of ecliptic longitudes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::position::angle::normalize_degrees;
use crate::zodiac::Sign;

/// A longitude expressed as sign + degree/minute/second within the sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZodiacPosition {
    /// Absolute ecliptic longitude in [0, 360)
    pub longitude: f64,
    pub sign: Sign,
    /// Whole degrees within the sign, 0-29
    pub degree: u8,
    /// 0-59
    pub minute: u8,
    /// 0-59
    pub second: u8,
}

impl ZodiacPosition {
    /// Decompose a longitude, rounding to the nearest arc second.
    ///
    /// Rounding up carries through minutes, degrees and the sign, so
    /// 29°59'59.9" Aries becomes 0°00'00" Taurus.
    pub fn from_longitude(longitude: f64) -> Self {
        let longitude = normalize_degrees(longitude);
        let total_seconds = (longitude * 3600.0).round() as u64 % (360 * 3600);

        let second = (total_seconds % 60) as u8;
        let minute = ((total_seconds / 60) % 60) as u8;
        let degree_total = total_seconds / 3600;

        Self {
            longitude,
            sign: Sign::from_index((degree_total / 30) as usize),
            degree: (degree_total % 30) as u8,
            minute,
            second,
        }
    }

    /// Longitude rebuilt from the decomposed fields.
    pub fn to_longitude(&self) -> f64 {
        self.sign.start_longitude()
            + self.degree as f64
            + self.minute as f64 / 60.0
            + self.second as f64 / 3600.0
    }

    /// Degrees elapsed inside the sign, unrounded.
    pub fn degree_in_sign(&self) -> f64 {
        self.longitude % 30.0
    }
}

impl fmt::Display for ZodiacPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}°{:02}'{:02}\" {}",
            self.degree, self.minute, self.second, self.sign
        )
    }
}

/// A signed angle such as a declination, split into d/m/s.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignedDms {
    pub negative: bool,
    pub degrees: u16,
    pub minutes: u8,
    pub seconds: u8,
}

impl SignedDms {
    pub fn from_degrees(value: f64) -> Self {
        let total_seconds = (value.abs() * 3600.0).round() as u64;
        Self {
            negative: value < 0.0 && total_seconds > 0,
            degrees: (total_seconds / 3600) as u16,
            minutes: ((total_seconds / 60) % 60) as u8,
            seconds: (total_seconds % 60) as u8,
        }
    }

    pub fn to_degrees(&self) -> f64 {
        let magnitude =
            self.degrees as f64 + self.minutes as f64 / 60.0 + self.seconds as f64 / 3600.0;
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }
}

impl fmt::Display for SignedDms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = if self.negative { 'S' } else { 'N' };
        write!(
            f,
            "{:02}{}{:02}'{:02}\"",
            self.degrees, direction, self.minutes, self.seconds
        )
    }
}
