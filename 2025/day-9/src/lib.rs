//! Largest rectangles between red tiles.
//!
//! `part1` ignores the shape the tiles trace; `part2` only accepts rectangles
//! lying inside or on the rectilinear polygon they form.

mod classifier;
mod error;
mod parser;
mod polygon;
mod solver;

pub mod part1;
pub mod part2;

pub use classifier::Classifier;
pub use error::{Error, MalformedPolygon};
pub use parser::parse_points;
pub use polygon::{Bounds, Edge, Polygon};
pub use solver::{candidates, Candidate, Rectangle, Solver};

pub type Point = glam::I64Vec2;
