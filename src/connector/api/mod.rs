pub mod container;
pub mod controller;
pub mod resources;
pub mod response;
pub mod router;

pub use container::{Container, ContainerConfig};
pub use controller::{AppState, StatsController};
pub use resources::ApiEntity;
pub use router::build_router;
