pub mod calculator;
pub mod declination;
pub mod orbs;
pub mod sidereal;
pub mod types;

pub use calculator::{AspectCalculator, AspectSettings};
pub use declination::declination_aspects;
pub use orbs::{OrbPreset, OrbStrictness, OrbTable};
pub use sidereal::sidereal_aspects;
pub use types::{Aspect, AspectType};
