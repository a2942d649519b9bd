#[cfg(feature = "swiss-ephemeris")]
pub mod adapter;
pub mod parallax;
pub mod provider;
pub mod time;
pub mod types;

#[cfg(feature = "swiss-ephemeris")]
pub use adapter::SwissEphemerisAdapter;
pub use provider::{EphemerisError, EphemerisProvider, StaticEphemeris};
pub use types::{Body, GeoLocation, Observer, ObserverMode, RawPosition};
