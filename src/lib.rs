pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use cli::Commands;

pub use application::{
    AssociationService, AssociationStore, CategoryDiseaseService, ConceptTypeService,
    EntityService, EntityStore, PlantDiseaseService, UnitOfWork, UserConceptService, UserService,
};

pub use connector::{
    build_router, Container, ContainerConfig, DuckdbAssociationStore, DuckdbEntityStore,
    DuckdbUnitOfWork, StatsController,
};

pub use domain::{
    CategoryDisease, ConceptType, DomainError, Entity, PlantDisease, ServiceResponse, User,
    UserConcept,
};
