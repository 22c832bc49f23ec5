pub mod ids;
pub mod matched;
pub mod bounds;
pub mod terminals;

pub use ids::*;
pub use matched::*;
pub use bounds::*;
pub use terminals::*;
