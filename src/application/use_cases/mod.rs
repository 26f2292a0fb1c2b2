mod association_service;
mod entity_service;
mod plant_disease_service;
mod user_concept_service;

pub use association_service::*;
pub use entity_service::EntityService;
pub use plant_disease_service::*;
pub use user_concept_service::*;

use crate::domain::{CategoryDisease, ConceptType, User};

pub type UserService = EntityService<User>;
pub type ConceptTypeService = EntityService<ConceptType>;
pub type CategoryDiseaseService = EntityService<CategoryDisease>;
