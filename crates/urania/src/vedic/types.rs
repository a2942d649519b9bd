//! Sidereal chart additions bundled for the snapshot.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::vedic::dashas::DashaCycle;
use crate::vedic::dignity::Dignity;
use crate::vedic::drishti::Drishti;
use crate::vedic::vargas::VargaChart;
use crate::vedic::yogas::Yoga;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VedicChart {
    pub dignities: BTreeMap<String, Dignity>,
    pub navamsa: VargaChart,
    pub yogas: Vec<Yoga>,
    /// Absent when the chart has no Moon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dasha: Option<DashaCycle>,
    pub drishti: Vec<Drishti>,
}
