pub mod errors;
pub mod math;
pub mod rng;

pub use errors::*;
pub use math::*;
pub use rng::*;
