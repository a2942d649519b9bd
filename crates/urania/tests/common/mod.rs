#![allow(dead_code)]

use urania::position::{CelestialPoint, MovingPoint, Placement};

pub fn planet(name: &str, lon: f64, speed: f64) -> CelestialPoint {
    CelestialPoint::Planet(MovingPoint::new(Placement::new(name, lon, 0.0, 1), speed))
}

pub fn planet_dec(name: &str, lon: f64, dec: f64) -> CelestialPoint {
    CelestialPoint::Planet(MovingPoint::new(Placement::new(name, lon, dec, 1), 1.0))
}

pub fn node(name: &str, lon: f64) -> CelestialPoint {
    CelestialPoint::Node(MovingPoint::new(Placement::new(name, lon, 0.0, 1), -0.05))
}
