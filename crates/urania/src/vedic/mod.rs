pub mod dashas;
pub mod dignity;
pub mod drishti;
pub mod nakshatra;
pub mod rules;
pub mod types;
pub mod vargas;
pub mod yogas;

use chrono::{DateTime, Utc};

use crate::houses::HouseTable;
use crate::position::CelestialPoint;

pub use dashas::{compute_vimshottari, DashaCycle, DashaLevel, DashaPeriod};
pub use dignity::{classify, dignities, Dignity};
pub use drishti::{graha_drishti, Drishti};
pub use nakshatra::{nakshatra_for_longitude, nakshatra_label, Nakshatra, NakshatraPlacement};
pub use rules::{DashaLord, DashaRules, VedicRules};
pub use types::VedicChart;
pub use vargas::{navamsa_chart, navamsa_longitude, VargaChart, VargaPlacement};
pub use yogas::{identify_yogas, Yoga, YogaIntensity};

/// Run every sidereal analysis over an already-corrected point set.
pub fn compute_vedic(
    points: &[CelestialPoint],
    houses: &HouseTable,
    ascendant: f64,
    birth: DateTime<Utc>,
    rules: &VedicRules,
) -> VedicChart {
    let dasha = points
        .iter()
        .find(|point| point.name() == "Moon")
        .and_then(|moon| compute_vimshottari(birth, moon.longitude(), &rules.dasha));

    VedicChart {
        dignities: dignities(points, rules),
        navamsa: navamsa_chart(points, ascendant),
        yogas: identify_yogas(points, houses, rules),
        dasha,
        drishti: graha_drishti(points),
    }
}
