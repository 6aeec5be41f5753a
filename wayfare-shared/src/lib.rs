pub mod ids;
pub mod sources;

pub use ids::{IdGenerator, SequenceIds, UuidIds};
pub use sources::GroundingSource;
