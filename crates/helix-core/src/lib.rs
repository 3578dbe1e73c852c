pub mod animation;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod state;
pub mod tilt;
pub mod vitals;

pub use animation::*;
pub use constants::*;
pub use error::*;
pub use geometry::*;
pub use state::*;
pub use tilt::*;
pub use vitals::*;
