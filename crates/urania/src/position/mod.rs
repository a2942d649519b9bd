pub mod angle;
pub mod angles;
pub mod dms;
pub mod motion;
pub mod points;
pub mod sidereal;
pub mod stars;

pub use angles::{AngleSet, ChartAngle};
pub use dms::{SignedDms, ZodiacPosition};
pub use points::{CelestialPoint, MovingPoint, Placement};
pub use sidereal::AyanamsaModel;
pub use stars::FixedStar;
