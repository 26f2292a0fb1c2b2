use std::sync::Arc;

use super::Container;

pub mod entity_controller;
pub mod plant_disease_controller;
pub mod stats_controller;
pub mod user_concept_controller;

pub use stats_controller::StatsController;

pub type AppState = Arc<Container>;
