use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use duckdb::Connection;
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::{
    AssociationService, CategoryDiseaseService, ConceptTypeService, EntityService,
    PlantDiseaseService, UserConceptService, UserService,
};
use crate::connector::adapter::{
    open_connection, open_in_memory, DuckdbAssociation, DuckdbAssociationStore,
    DuckdbEntityStore, DuckdbRecord, DuckdbUnitOfWork,
};
use crate::domain::DomainError;

pub struct ContainerConfig {
    pub data_dir: String,
    /// Keep everything in an in-memory DuckDB database. Nothing survives
    /// the process; used by tests and throwaway runs.
    pub memory_storage: bool,
}

/// Composition root. Owns the shared connection and hands out
/// request-scoped services, each with a fresh unit of work.
pub struct Container {
    conn: Arc<Mutex<Connection>>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let conn = if config.memory_storage {
            debug!("Using in-memory DuckDB storage");
            open_in_memory()?
        } else {
            if config.data_dir.trim().is_empty() {
                return Err(DomainError::invalid_input("data dir must not be empty").into());
            }
            let db_path = PathBuf::from(&config.data_dir).join("ontologia.duckdb");
            debug!("Using DuckDB storage at {:?}", db_path);
            open_connection(&db_path)?
        };

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            config,
        })
    }

    /// A fresh unit of work bound to the shared connection.
    pub fn unit_of_work(&self) -> Arc<DuckdbUnitOfWork> {
        Arc::new(DuckdbUnitOfWork::new(Arc::clone(&self.conn)))
    }

    pub fn entity_service<E: DuckdbRecord>(&self) -> EntityService<E> {
        let unit_of_work = self.unit_of_work();
        Self::entity_service_in(&unit_of_work)
    }

    pub fn user_service(&self) -> UserService {
        self.entity_service()
    }

    pub fn concept_type_service(&self) -> ConceptTypeService {
        self.entity_service()
    }

    pub fn category_disease_service(&self) -> CategoryDiseaseService {
        self.entity_service()
    }

    pub fn user_concept_service(&self) -> UserConceptService {
        let unit_of_work = self.unit_of_work();
        UserConceptService::new(
            Self::entity_service_in(&unit_of_work),
            Self::association_service_in(&unit_of_work),
            Self::association_service_in(&unit_of_work),
        )
    }

    pub fn plant_disease_service(&self) -> PlantDiseaseService {
        let unit_of_work = self.unit_of_work();
        PlantDiseaseService::new(
            Self::entity_service_in(&unit_of_work),
            Self::association_service_in(&unit_of_work),
            Self::association_service_in(&unit_of_work),
        )
    }

    pub fn data_dir(&self) -> &str {
        &self.config.data_dir
    }

    pub fn memory_storage(&self) -> bool {
        self.config.memory_storage
    }

    fn entity_service_in<E: DuckdbRecord>(unit_of_work: &Arc<DuckdbUnitOfWork>) -> EntityService<E> {
        EntityService::new(
            Arc::new(DuckdbEntityStore::<E>::new(Arc::clone(unit_of_work))),
            unit_of_work.clone(),
        )
    }

    fn association_service_in<A>(unit_of_work: &Arc<DuckdbUnitOfWork>) -> AssociationService<A>
    where
        A: DuckdbAssociation,
        A::Child: DuckdbRecord,
        A::Parent: DuckdbRecord,
    {
        AssociationService::new(
            Arc::new(DuckdbAssociationStore::<A>::new(Arc::clone(unit_of_work))),
            Arc::new(DuckdbEntityStore::<A::Child>::new(Arc::clone(unit_of_work))),
            unit_of_work.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_data_dir_is_rejected() {
        let result = Container::new(ContainerConfig {
            data_dir: "  ".to_string(),
            memory_storage: false,
        });

        assert!(result.is_err());
    }

    #[test]
    fn test_creates_missing_data_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let data_dir = dir.path().join("nested").join("ontologia");

        let container = Container::new(ContainerConfig {
            data_dir: data_dir.to_string_lossy().to_string(),
            memory_storage: false,
        })
        .expect("container");

        assert!(data_dir.join("ontologia.duckdb").exists());
        assert!(!container.memory_storage());
    }
}
