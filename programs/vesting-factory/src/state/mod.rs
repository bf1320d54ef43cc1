pub mod factory;
pub mod registry;
pub mod schedule;

pub use factory::*;
pub use registry::*;
pub use schedule::*;
