//! Natal chart computation: positions, houses, aspects, patterns and the
//! sidereal extension.

pub mod aspects;
pub mod chart;
pub mod ephemeris;
pub mod error;
pub mod geocoding;
pub mod houses;
pub mod patterns;
pub mod position;
pub mod service;
pub mod vedic;
pub mod zodiac;

pub use chart::{compute_chart, ChartOptions, ChartRequest, ChartRules, ChartSnapshot, ResolvedLocation, ZodiacMode};
pub use error::{ChartError, RulesError};
pub use service::{ChartDefaults, ChartService};
