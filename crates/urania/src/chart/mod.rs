pub mod builder;
pub mod derived;
pub mod request;
pub mod rules;
pub mod snapshot;

pub use builder::{compute_chart, PART_OF_FORTUNE};
pub use derived::{harmonic_chart, midpoints, HarmonicChart, HarmonicPoint, Midpoint};
pub use request::{ChartOptions, ChartRequest, ResolvedInstant, ResolvedLocation, ZodiacMode};
pub use rules::ChartRules;
pub use snapshot::{ChartMetadata, ChartSnapshot};
