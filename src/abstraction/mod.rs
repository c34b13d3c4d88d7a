//! Trait contracts the search driver is generic over.

pub mod problem;

pub use problem::Problem;
