pub mod assign;
pub mod systems;

pub use assign::{house_of, whole_sign_house, HouseCusp, HouseTable};
pub use systems::HouseSystem;
