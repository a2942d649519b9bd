//! Vimshottari dasha calculation.
//!
//! Dashas are time periods ruled by planets, calculated based on the Moon's nakshatra.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::ephemeris::Body;
use crate::vedic::nakshatra::nakshatra_for_longitude;
use crate::vedic::rules::DashaRules;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashaLevel {
    Mahadasha,
    Antardasha,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaPeriod {
    pub planet: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(rename = "durationYears")]
    pub duration_years: f64,
    pub level: DashaLevel,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub children: Vec<DashaPeriod>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaCycle {
    pub system: String,
    #[serde(rename = "birthDateTime")]
    pub birth_date_time: DateTime<Utc>,
    #[serde(rename = "moonNakshatra")]
    pub moon_nakshatra: String,
    /// Years left in the first period at birth
    #[serde(rename = "balanceYears")]
    pub balance_years: f64,
    pub periods: Vec<DashaPeriod>,
}

impl DashaCycle {
    /// Mahadasha running at `instant`, if inside the cycle.
    pub fn period_at(&self, instant: DateTime<Utc>) -> Option<&DashaPeriod> {
        self.periods
            .iter()
            .find(|period| period.start <= instant && instant < period.end)
    }
}

fn years_to_duration(years: f64, year_days: f64) -> Duration {
    Duration::milliseconds((years * year_days * 86_400_000.0).round() as i64)
}

/// Compute the Vimshottari cycle from the Moon's sidereal longitude.
///
/// The first period is the unexpired balance of the birth lord; the nine
/// full periods that follow complete the 120-year sequence.
pub fn compute_vimshottari(
    birth: DateTime<Utc>,
    moon_longitude: f64,
    rules: &DashaRules,
) -> Option<DashaCycle> {
    let moon = nakshatra_for_longitude(moon_longitude);
    let start_index = rules.position_of(moon.nakshatra.lord)?;
    let count = rules.sequence.len();
    let start_lord = rules.sequence[start_index];
    let balance_years = (1.0 - moon.progress) * start_lord.years;

    let mut periods = Vec::with_capacity(count + 1);
    let mut current_start = birth;
    for offset in 0..=count {
        let seq_index = (start_index + offset) % count;
        let years = if offset == 0 {
            balance_years
        } else {
            rules.sequence[seq_index].years
        };
        let period = build_period(rules, seq_index, current_start, years);
        current_start = period.end;
        periods.push(period);
    }

    Some(DashaCycle {
        system: "vimshottari".to_string(),
        birth_date_time: birth,
        moon_nakshatra: moon.nakshatra.name,
        balance_years,
        periods,
    })
}

fn build_period(
    rules: &DashaRules,
    seq_index: usize,
    start: DateTime<Utc>,
    duration_years: f64,
) -> DashaPeriod {
    let lord = rules.sequence[seq_index].lord;
    let end = start + years_to_duration(duration_years, rules.year_days);
    let total = rules.total_years();
    let count = rules.sequence.len();

    let mut children = Vec::with_capacity(count);
    let mut child_start = start;
    for offset in 0..count {
        let child = rules.sequence[(seq_index + offset) % count];
        let child_years = duration_years * child.years / total;
        // the last sub-period closes exactly on the parent's end
        let child_end = if offset + 1 == count {
            end
        } else {
            child_start + years_to_duration(child_years, rules.year_days)
        };
        children.push(DashaPeriod {
            planet: lord_name(child.lord),
            start: child_start,
            end: child_end,
            duration_years: child_years,
            level: DashaLevel::Antardasha,
            children: Vec::new(),
        });
        child_start = child_end;
    }

    DashaPeriod {
        planet: lord_name(lord),
        start,
        end,
        duration_years,
        level: DashaLevel::Mahadasha,
        children,
    }
}

fn lord_name(lord: Body) -> String {
    lord.vedic_name().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn birth() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(1990, 5, 17, 6, 30, 0).unwrap()
    }

    #[test]
    fn test_starting_lord_from_moon() {
        // 45° sidereal is Rohini, ruled by the Moon
        let cycle = compute_vimshottari(birth(), 45.0, &DashaRules::default()).unwrap();
        assert_eq!(cycle.moon_nakshatra, "Rohini");
        assert_eq!(cycle.periods[0].planet, "Moon");
        assert_eq!(cycle.periods[1].planet, "Mars");
        assert_eq!(cycle.periods[2].planet, "Rahu");
        assert_eq!(cycle.periods.len(), 10);
    }

    #[test]
    fn test_balance_from_progress() {
        // exactly at the start of Ashwini the whole Ketu period remains
        let cycle = compute_vimshottari(birth(), 0.0, &DashaRules::default()).unwrap();
        assert!((cycle.balance_years - 7.0).abs() < 1e-9);
        // halfway through Ashwini
        let half = compute_vimshottari(birth(), 360.0 / 54.0, &DashaRules::default()).unwrap();
        assert!((half.balance_years - 3.5).abs() < 1e-9);
    }

    #[test]
    fn test_full_periods_sum_to_120() {
        let cycle = compute_vimshottari(birth(), 200.0, &DashaRules::default()).unwrap();
        let full: f64 = cycle.periods[1..].iter().map(|p| p.duration_years).sum();
        assert!((full - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_periods_are_contiguous() {
        let cycle = compute_vimshottari(birth(), 123.4, &DashaRules::default()).unwrap();
        assert_eq!(cycle.periods[0].start, birth());
        for pair in cycle.periods.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn test_antardashas_fill_mahadasha() {
        let cycle = compute_vimshottari(birth(), 77.7, &DashaRules::default()).unwrap();
        for period in &cycle.periods {
            assert_eq!(period.children.len(), 9);
            assert_eq!(period.children[0].planet, period.planet);
            assert_eq!(period.children[0].start, period.start);
            assert_eq!(period.children[8].end, period.end);
            let sum: f64 = period.children.iter().map(|c| c.duration_years).sum();
            assert!((sum - period.duration_years).abs() < 1e-9);
        }
    }

    #[test]
    fn test_period_at() {
        let cycle = compute_vimshottari(birth(), 45.0, &DashaRules::default()).unwrap();
        assert_eq!(cycle.period_at(birth()).map(|p| p.planet.as_str()), Some("Moon"));
        assert!(cycle.period_at(birth() - Duration::days(1)).is_none());
    }
}
