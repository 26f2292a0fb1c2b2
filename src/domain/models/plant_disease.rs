use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entity::{current_timestamp, Entity};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantDisease {
    id: Uuid,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_on: i64,
    modified_on: i64,
}

impl PlantDisease {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        let now = current_timestamp();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description,
            is_active: true,
            created_on: now,
            modified_on: now,
        }
    }

    /// Reconstitutes from persisted data (used by adapters and resource mapping).
    pub fn reconstitute(
        id: Uuid,
        name: String,
        description: Option<String>,
        is_active: bool,
        created_on: i64,
        modified_on: i64,
    ) -> Self {
        Self {
            id,
            name,
            description,
            is_active,
            created_on,
            modified_on,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_on(&self) -> i64 {
        self.created_on
    }

    pub fn modified_on(&self) -> i64 {
        self.modified_on
    }
}

impl Entity for PlantDisease {
    const NAME: &'static str = "PlantDisease";

    fn id(&self) -> Uuid {
        self.id
    }

    fn overwrite_from(&mut self, other: &Self) {
        self.name = other.name.clone();
        self.description = other.description.clone();
        self.is_active = other.is_active;
        self.created_on = other.created_on;
        self.modified_on = other.modified_on;
    }
}
