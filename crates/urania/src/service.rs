//! Async front door: resolve a city, then compute its chart.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::aspects::OrbStrictness;
use crate::chart::{compute_chart, ChartOptions, ChartRequest, ChartRules, ChartSnapshot, ResolvedLocation, ZodiacMode};
use crate::ephemeris::EphemerisProvider;
use crate::error::ChartError;
use crate::geocoding::{GeocodeQuery, Geocoder};

/// Request settings applied to every chart the service computes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDefaults {
    pub house_system: String,
    pub zodiac: ZodiacMode,
    pub strictness: OrbStrictness,
    pub options: ChartOptions,
}

impl Default for ChartDefaults {
    fn default() -> Self {
        Self {
            house_system: "placidus".to_string(),
            zodiac: ZodiacMode::Tropical,
            strictness: OrbStrictness::Standard,
            options: ChartOptions::default(),
        }
    }
}

pub struct ChartService {
    geocoder: Arc<dyn Geocoder>,
    provider: Arc<dyn EphemerisProvider>,
    rules: Arc<ChartRules>,
    defaults: ChartDefaults,
}

impl ChartService {
    pub fn new(
        geocoder: Arc<dyn Geocoder>,
        provider: Arc<dyn EphemerisProvider>,
        rules: Arc<ChartRules>,
    ) -> Self {
        Self {
            geocoder,
            provider,
            rules,
            defaults: ChartDefaults::default(),
        }
    }

    pub fn with_defaults(mut self, defaults: ChartDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn defaults(&self) -> &ChartDefaults {
        &self.defaults
    }

    pub async fn resolve(&self, query: &GeocodeQuery) -> Result<ResolvedLocation, ChartError> {
        let result = self.geocoder.lookup(query).await?;
        debug!("Resolved {} to {}", query, result.display_address);
        Ok(result.into())
    }

    /// Geocode `query` and compute the chart for the local date and time there.
    pub async fn chart_for_city(
        &self,
        query: &GeocodeQuery,
        date: &str,
        time: &str,
    ) -> Result<ChartSnapshot, ChartError> {
        let location = self.resolve(query).await?;
        let request = ChartRequest::new(date, time, location)
            .with_house_system(self.defaults.house_system.clone())
            .with_zodiac(self.defaults.zodiac)
            .with_strictness(self.defaults.strictness)
            .with_options(self.defaults.options);
        self.chart(&request)
    }

    /// Compute a chart for an already-resolved request.
    pub fn chart(&self, request: &ChartRequest) -> Result<ChartSnapshot, ChartError> {
        let snapshot = compute_chart(request, self.provider.as_ref(), &self.rules)?;
        info!(
            "Computed chart {} ({} points, {} aspects)",
            snapshot.id(),
            snapshot.points().len(),
            snapshot.aspects().len()
        );
        Ok(snapshot)
    }
}
