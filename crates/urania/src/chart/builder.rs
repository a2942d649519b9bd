//! Chart pipeline: ephemeris samples to a finished snapshot.

use chrono::{DateTime, Utc};
use log::debug;
use std::collections::BTreeMap;

use crate::aspects::{
    declination_aspects, sidereal_aspects, Aspect, AspectCalculator, AspectSettings,
};
use crate::chart::derived::{harmonic_chart, midpoints};
use crate::chart::request::{ChartRequest, ZodiacMode};
use crate::chart::rules::ChartRules;
use crate::chart::snapshot::{ChartMetadata, ChartSnapshot, SnapshotParts};
use crate::ephemeris::time::{julian_day, local_sidereal_time, mean_obliquity};
use crate::ephemeris::{Body, EphemerisError, EphemerisProvider, Observer, ObserverMode};
use crate::error::ChartError;
use crate::houses::{HouseSystem, HouseTable};
use crate::patterns::detect_patterns;
use crate::position::angle::{ecliptic_to_declination, normalize_degrees};
use crate::position::motion::{mean_north_node, sample_with_speed, south_node_of, MEAN_NODE_SPEED};
use crate::position::sidereal::to_sidereal;
use crate::position::{AngleSet, CelestialPoint, ChartAngle, MovingPoint, Placement, ZodiacPosition};
use crate::vedic::{compute_vedic, nakshatra_label};

pub const PART_OF_FORTUNE: &str = "Part of Fortune";

/// Longitude, declination and speed before house assignment.
struct Sampled {
    name: String,
    longitude: f64,
    declination: f64,
    speed: f64,
}

/// Compute a complete chart.
///
/// Any ephemeris failure other than an unsupported body aborts the request;
/// unsupported bodies are left out of the chart.
pub fn compute_chart(
    request: &ChartRequest,
    provider: &dyn EphemerisProvider,
    rules: &ChartRules,
) -> Result<ChartSnapshot, ChartError> {
    let instant = request.resolve_instant()?;
    let utc = instant.utc;
    let location = request.location.geo();
    let jd = julian_day(utc);
    let obliquity = mean_obliquity(jd);
    let lst = local_sidereal_time(jd, location.lon);
    debug!("Chart for {} UTC (JD {:.5}, LST {:.4}°)", utc, jd, lst);

    let observer = match request.options.observer {
        ObserverMode::Geocentric => Observer::geocentric(location),
        ObserverMode::Topocentric => Observer::topocentric(location),
    };

    let ayanamsa = match request.zodiac {
        ZodiacMode::Tropical => None,
        ZodiacMode::Sidereal => Some(rules.ayanamsa.value_at(jd)),
    };
    let correct = |longitude: f64| match ayanamsa {
        Some(value) => to_sidereal(longitude, value),
        None => normalize_degrees(longitude),
    };

    let planets = sample_planets(provider, utc, &observer)?;
    debug!("Sampled {} planets", planets.len());

    let north = mean_north_node(jd);
    let nodes = [(Body::NorthNode, north), (Body::SouthNode, south_node_of(north))].map(
        |(body, longitude)| Sampled {
            name: body.name().to_string(),
            longitude,
            declination: ecliptic_to_declination(longitude, 0.0, obliquity),
            speed: MEAN_NODE_SPEED,
        },
    );

    let angles = AngleSet::compute(lst, location.lat, obliquity).map(correct);
    let system = HouseSystem::from_code(&request.house_system);
    let houses = HouseTable::compute(system, angles.ascendant, angles.midheaven);
    debug!(
        "Houses: {} (approximated: {}), ascendant {:.4}°",
        system, houses.approximated, angles.ascendant
    );

    let mut points = Vec::new();
    for sampled in planets {
        let lon = correct(sampled.longitude);
        let placement = place(sampled.name, lon, sampled.declination, &houses);
        points.push(CelestialPoint::Planet(MovingPoint::new(placement, sampled.speed)));
    }
    for sampled in nodes {
        let lon = correct(sampled.longitude);
        let placement = place(sampled.name, lon, sampled.declination, &houses);
        points.push(CelestialPoint::Node(MovingPoint::new(placement, sampled.speed)));
    }
    for (angle, lon) in angles.iter() {
        let declination = ecliptic_to_declination(lon, 0.0, obliquity);
        points.push(CelestialPoint::Angle(place(angle.name(), lon, declination, &houses)));
    }
    if let Some(fortune) = part_of_fortune(&points, angles.ascendant, &houses, obliquity) {
        points.push(fortune);
    }
    if request.options.include_fixed_stars {
        for star in &rules.fixed_stars {
            let lon = correct(star.longitude_at(jd));
            points.push(CelestialPoint::FixedStar(place(
                star.name.clone(),
                lon,
                star.declination_at(jd, obliquity),
                &houses,
            )));
        }
    }
    if request.zodiac == ZodiacMode::Sidereal {
        for point in points.iter_mut() {
            let label = nakshatra_label(point.longitude());
            point.placement_mut().nakshatra = Some(label);
        }
    }
    debug!("Placed {} points", points.len());

    let (aspects, patterns) = match request.zodiac {
        ZodiacMode::Tropical => {
            let settings = AspectSettings {
                strictness: request.strictness,
                include_nodes: request.options.include_nodes,
            };
            let mut all = AspectCalculator::new(&rules.orbs).compute(&points, &settings);
            all.extend(declination_aspects(&points, request.options.include_nodes));
            let patterns = detect_patterns(&points, &all);
            let shown: Vec<Aspect> = all
                .into_iter()
                .filter(|aspect| request.options.include_minor_aspects || !aspect.aspect_type.is_minor())
                .collect();
            (shown, patterns)
        }
        ZodiacMode::Sidereal => (
            sidereal_aspects(&points, request.options.include_nodes),
            Vec::new(),
        ),
    };
    debug!("Found {} aspects and {} patterns", aspects.len(), patterns.len());

    let vedic = match request.zodiac {
        ZodiacMode::Sidereal => {
            let chart = compute_vedic(&points, &houses, angles.ascendant, utc, &rules.vedic);
            debug!(
                "Vedic: {} yogas, {} drishti, dasha present: {}",
                chart.yogas.len(),
                chart.drishti.len(),
                chart.dasha.is_some()
            );
            Some(chart)
        }
        ZodiacMode::Tropical => None,
    };

    let harmonics = rules
        .harmonics
        .iter()
        .map(|&n| harmonic_chart(&points, n))
        .collect();
    let midpoints = midpoints(&points);

    let metadata = ChartMetadata {
        local_date_time: instant.local,
        utc,
        julian_day: jd,
        location: request.location.clone(),
        house_system: system,
        approximated: houses.approximated,
        zodiac: request.zodiac,
        strictness: request.strictness,
        observer: request.options.observer,
        ayanamsa,
    };

    let house_map: BTreeMap<u8, f64> = houses
        .cusps()
        .into_iter()
        .map(|cusp| (cusp.index, cusp.longitude))
        .collect();
    let angle_map: BTreeMap<ChartAngle, ZodiacPosition> = angles
        .iter()
        .map(|(angle, lon)| (angle, ZodiacPosition::from_longitude(lon)))
        .collect();

    Ok(ChartSnapshot::from_parts(SnapshotParts {
        metadata,
        points,
        houses: house_map,
        angles: angle_map,
        aspects,
        patterns,
        vedic,
        harmonics,
        midpoints,
    }))
}

fn sample_planets(
    provider: &dyn EphemerisProvider,
    utc: DateTime<Utc>,
    observer: &Observer,
) -> Result<Vec<Sampled>, ChartError> {
    let mut sampled = Vec::with_capacity(Body::PLANETS.len());
    for body in Body::PLANETS {
        match sample_with_speed(provider, body, utc, observer) {
            Ok((raw, speed)) => sampled.push(Sampled {
                name: body.name().to_string(),
                longitude: raw.ecliptic_longitude,
                declination: raw.declination,
                speed,
            }),
            Err(EphemerisError::UnsupportedBody(body)) => {
                debug!("Skipping {}: not provided by the ephemeris", body);
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(sampled)
}

/// Ascendant + Moon − Sun by day, Ascendant + Sun − Moon by night.
///
/// Night means the Sun sits below the horizon, in houses 1-6.
fn part_of_fortune(
    points: &[CelestialPoint],
    ascendant: f64,
    houses: &HouseTable,
    obliquity: f64,
) -> Option<CelestialPoint> {
    let sun = points.iter().find(|p| p.name() == Body::Sun.name())?;
    let moon = points.iter().find(|p| p.name() == Body::Moon.name())?;
    let night = (1..=6).contains(&sun.house());
    let lon = if night {
        normalize_degrees(ascendant + sun.longitude() - moon.longitude())
    } else {
        normalize_degrees(ascendant + moon.longitude() - sun.longitude())
    };
    Some(CelestialPoint::AuxiliaryPoint(place(
        PART_OF_FORTUNE,
        lon,
        ecliptic_to_declination(lon, 0.0, obliquity),
        houses,
    )))
}

/// Placement whose house is read from the same rounded position it reports.
fn place(name: impl Into<String>, longitude: f64, declination: f64, houses: &HouseTable) -> Placement {
    let mut placement = Placement::new(name, longitude, declination, 1);
    placement.house = houses.house_of_position(&placement.zodiac);
    placement
}
