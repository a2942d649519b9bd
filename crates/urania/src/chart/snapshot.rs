use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::aspects::{Aspect, OrbStrictness};
use crate::chart::derived::{HarmonicChart, Midpoint};
use crate::chart::request::{ResolvedLocation, ZodiacMode};
use crate::ephemeris::ObserverMode;
use crate::houses::HouseSystem;
use crate::patterns::Pattern;
use crate::position::{CelestialPoint, ChartAngle, ZodiacPosition};
use crate::vedic::VedicChart;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMetadata {
    pub local_date_time: NaiveDateTime,
    pub utc: DateTime<Utc>,
    pub julian_day: f64,
    pub location: ResolvedLocation,
    pub house_system: HouseSystem,
    /// Quadrant system computed by trisection
    pub approximated: bool,
    pub zodiac: ZodiacMode,
    pub strictness: OrbStrictness,
    pub observer: ObserverMode,
    /// Degrees subtracted from tropical longitudes, sidereal charts only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ayanamsa: Option<f64>,
}

/// A computed chart. Read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSnapshot {
    id: Uuid,
    metadata: ChartMetadata,
    points: Vec<CelestialPoint>,
    houses: BTreeMap<u8, f64>,
    angles: BTreeMap<ChartAngle, ZodiacPosition>,
    aspects: Vec<Aspect>,
    patterns: Vec<Pattern>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vedic: Option<VedicChart>,
    harmonics: Vec<HarmonicChart>,
    midpoints: Vec<Midpoint>,
}

pub(crate) struct SnapshotParts {
    pub metadata: ChartMetadata,
    pub points: Vec<CelestialPoint>,
    pub houses: BTreeMap<u8, f64>,
    pub angles: BTreeMap<ChartAngle, ZodiacPosition>,
    pub aspects: Vec<Aspect>,
    pub patterns: Vec<Pattern>,
    pub vedic: Option<VedicChart>,
    pub harmonics: Vec<HarmonicChart>,
    pub midpoints: Vec<Midpoint>,
}

impl ChartSnapshot {
    pub(crate) fn from_parts(parts: SnapshotParts) -> Self {
        Self {
            id: Uuid::new_v4(),
            metadata: parts.metadata,
            points: parts.points,
            houses: parts.houses,
            angles: parts.angles,
            aspects: parts.aspects,
            patterns: parts.patterns,
            vedic: parts.vedic,
            harmonics: parts.harmonics,
            midpoints: parts.midpoints,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn metadata(&self) -> &ChartMetadata {
        &self.metadata
    }

    pub fn points(&self) -> &[CelestialPoint] {
        &self.points
    }

    pub fn point(&self, name: &str) -> Option<&CelestialPoint> {
        self.points.iter().find(|point| point.name() == name)
    }

    /// Cusp longitude keyed by house number.
    pub fn houses(&self) -> &BTreeMap<u8, f64> {
        &self.houses
    }

    pub fn angles(&self) -> &BTreeMap<ChartAngle, ZodiacPosition> {
        &self.angles
    }

    pub fn angle(&self, angle: ChartAngle) -> Option<&ZodiacPosition> {
        self.angles.get(&angle)
    }

    pub fn aspects(&self) -> &[Aspect] {
        &self.aspects
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn vedic(&self) -> Option<&VedicChart> {
        self.vedic.as_ref()
    }

    pub fn harmonics(&self) -> &[HarmonicChart] {
        &self.harmonics
    }

    pub fn midpoints(&self) -> &[Midpoint] {
        &self.midpoints
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
