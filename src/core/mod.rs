pub mod color;
pub mod depth;
pub mod geometry;
pub mod koch;
pub mod snowflake;

pub use color::Color;
pub use depth::Depth;
pub use geometry::{Point, Segment};
pub use snowflake::Snowflake;
