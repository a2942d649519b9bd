pub mod detector;
pub mod graph;
pub mod types;

pub use detector::{detect_patterns, PatternDetector};
pub use graph::AspectGraph;
pub use types::{Pattern, PatternTier, PatternType};
