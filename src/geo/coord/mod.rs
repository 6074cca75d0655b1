pub mod coordinate;
pub mod point;
