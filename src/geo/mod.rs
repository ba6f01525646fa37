//! Geographic primitives: validated coordinates and map search links

pub mod coordinate;
pub mod maps;

pub use coordinate::Coordinate;
pub use maps::MapsSearch;
