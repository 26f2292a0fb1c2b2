pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::{build_router, Container, ContainerConfig, StatsController};
