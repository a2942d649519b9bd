use async_trait::async_trait;
use std::collections::HashMap;

use crate::geocoding::{GeocodeError, GeocodeQuery, GeocodeResult, Geocoder};

/// Static city table used when no lookup service is configured.
///
/// Entries are keyed on city and country together, so a city name that
/// exists in several countries never resolves to the wrong one.
#[derive(Debug, Clone)]
pub struct FallbackGeocoder {
    cities: HashMap<(String, String), GeocodeResult>,
}

fn entry(lat: f64, lon: f64, tz: &str, address: &str) -> GeocodeResult {
    GeocodeResult {
        latitude: lat,
        longitude: lon,
        time_zone: tz.to_string(),
        display_address: address.to_string(),
    }
}

fn city_key(city: &str) -> String {
    city.trim().to_lowercase()
}

/// Lowercased country with common names and codes folded together.
fn country_key(country: &str) -> String {
    let normalized = country.trim().to_lowercase().replace('.', "");
    let code = match normalized.as_str() {
        "us" | "usa" | "united states" | "united states of america" | "america" => "us",
        "gb" | "uk" | "united kingdom" | "great britain" | "england" => "gb",
        "fr" | "france" => "fr",
        "jp" | "japan" => "jp",
        "au" | "australia" => "au",
        "in" | "india" => "in",
        "de" | "germany" | "deutschland" => "de",
        "br" | "brazil" | "brasil" => "br",
        "ca" | "canada" => "ca",
        other => other,
    };
    code.to_string()
}

impl FallbackGeocoder {
    pub fn new() -> Self {
        let table = [
            ("New York", "US", entry(40.7128, -74.0060, "America/New_York", "New York, NY, USA")),
            ("London", "GB", entry(51.5074, -0.1278, "Europe/London", "London, United Kingdom")),
            ("Paris", "FR", entry(48.8566, 2.3522, "Europe/Paris", "Paris, France")),
            ("Tokyo", "JP", entry(35.6762, 139.6503, "Asia/Tokyo", "Tokyo, Japan")),
            ("Sydney", "AU", entry(-33.8688, 151.2093, "Australia/Sydney", "Sydney, NSW, Australia")),
            ("Los Angeles", "US", entry(34.0522, -118.2437, "America/Los_Angeles", "Los Angeles, CA, USA")),
            ("Mumbai", "IN", entry(19.0760, 72.8777, "Asia/Kolkata", "Mumbai, Maharashtra, India")),
            ("Delhi", "IN", entry(28.7041, 77.1025, "Asia/Kolkata", "Delhi, India")),
            ("Berlin", "DE", entry(52.5200, 13.4050, "Europe/Berlin", "Berlin, Germany")),
            ("São Paulo", "BR", entry(-23.5505, -46.6333, "America/Sao_Paulo", "São Paulo, SP, Brazil")),
        ];
        let cities = table
            .into_iter()
            .map(|(city, country, result)| ((city_key(city), country_key(country)), result))
            .collect();
        Self { cities }
    }

    /// Add or replace a city.
    pub fn with_city(mut self, city: &str, country: &str, result: GeocodeResult) -> Self {
        self.cities.insert((city_key(city), country_key(country)), result);
        self
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Synchronous form of `lookup`; matches city and country.
    pub fn resolve(&self, query: &GeocodeQuery) -> Result<GeocodeResult, GeocodeError> {
        let key = (city_key(&query.city), country_key(&query.country));
        let found = self
            .cities
            .get(&key)
            .cloned()
            .ok_or_else(|| GeocodeError::NotFound(query.to_string()))?;
        if !(-90.0..=90.0).contains(&found.latitude) || !(-180.0..=180.0).contains(&found.longitude) {
            return Err(GeocodeError::InvalidCoordinates {
                query: query.to_string(),
                lat: found.latitude,
                lon: found.longitude,
            });
        }
        Ok(found)
    }
}

impl Default for FallbackGeocoder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Geocoder for FallbackGeocoder {
    async fn lookup(&self, query: &GeocodeQuery) -> Result<GeocodeResult, GeocodeError> {
        self.resolve(query)
    }
}
