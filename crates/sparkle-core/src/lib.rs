pub mod constants;
pub mod engine;
pub mod layers;
pub mod params;
pub mod particles;
pub mod pointer;
pub mod scheduler;
pub mod snapshot;

pub use engine::*;
pub use layers::*;
pub use params::*;
pub use particles::*;
pub use pointer::*;
pub use scheduler::*;
pub use snapshot::*;
