//! Request and response payloads for the HTTP API.
//!
//! Save resources are what clients post; resources are what the API
//! returns. Mapping between them and domain entities lives here so the
//! domain stays free of wire concerns.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::connector::adapter::DuckdbRecord;
use crate::domain::{
    current_timestamp, CategoryDisease, ConceptType, Entity, PlantDisease, User, UserConcept,
};

const MAX_NAME_LENGTH: usize = 100;
const MAX_DESCRIPTION_LENGTH: usize = 500;

/// An entity family exposed under `/api/{ROUTE}`.
pub trait ApiEntity: DuckdbRecord {
    const ROUTE: &'static str;

    type SaveResource: DeserializeOwned + Send + 'static;
    type Resource: Serialize + Send + 'static;

    /// Validates the payload and maps it to a domain entity.
    /// Returns every validation message on failure.
    fn from_save_resource(resource: Self::SaveResource) -> Result<Self, Vec<String>>;

    fn to_resource(&self) -> Self::Resource;
}

fn check_name(field: &str, value: &str, errors: &mut Vec<String>) {
    if value.trim().is_empty() {
        errors.push(format!("The {} field is required.", field));
    } else if value.chars().count() > MAX_NAME_LENGTH {
        errors.push(format!(
            "The field {} must be a string with a maximum length of {}.",
            field, MAX_NAME_LENGTH
        ));
    }
}

fn check_description(field: &str, value: Option<&str>, errors: &mut Vec<String>) {
    if let Some(value) = value {
        if value.chars().count() > MAX_DESCRIPTION_LENGTH {
            errors.push(format!(
                "The field {} must be a string with a maximum length of {}.",
                field, MAX_DESCRIPTION_LENGTH
            ));
        }
    }
}

/// Shared shape of the concept-like save payloads. Each family renames the
/// name/description keys on the wire through its own wrapper.
struct ConceptFields {
    id: Uuid,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_on: i64,
    modified_on: i64,
}

impl ConceptFields {
    #[allow(clippy::too_many_arguments)]
    fn validate(
        name_field: &str,
        description_field: &str,
        id: Option<Uuid>,
        name: String,
        description: Option<String>,
        is_active: Option<bool>,
        created_on: Option<i64>,
        modified_on: Option<i64>,
    ) -> Result<Self, Vec<String>> {
        let mut errors = Vec::new();
        check_name(name_field, &name, &mut errors);
        check_description(description_field, description.as_deref(), &mut errors);
        if !errors.is_empty() {
            return Err(errors);
        }

        let now = current_timestamp();
        Ok(Self {
            id: id.unwrap_or_else(Uuid::new_v4),
            name: name.trim().to_string(),
            description,
            is_active: is_active.unwrap_or(true),
            created_on: created_on.unwrap_or(now),
            modified_on: modified_on.unwrap_or(now),
        })
    }
}

// User

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveUserResource {
    pub id: Option<Uuid>,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub email: String,
    pub is_active: Option<bool>,
    pub created_on: Option<i64>,
    pub modified_on: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResource {
    pub id: Uuid,
    pub user_name: String,
    pub email: String,
    pub is_active: bool,
    pub created_on: i64,
    pub modified_on: i64,
}

impl ApiEntity for User {
    const ROUTE: &'static str = "users";

    type SaveResource = SaveUserResource;
    type Resource = UserResource;

    fn from_save_resource(resource: SaveUserResource) -> Result<Self, Vec<String>> {
        let mut errors = Vec::new();
        check_name("UserName", &resource.user_name, &mut errors);
        if !resource.email.contains('@') {
            errors.push("The Email field is not a valid e-mail address.".to_string());
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        let now = current_timestamp();
        Ok(User::reconstitute(
            resource.id.unwrap_or_else(Uuid::new_v4),
            resource.user_name.trim().to_string(),
            resource.email.trim().to_string(),
            resource.is_active.unwrap_or(true),
            resource.created_on.unwrap_or(now),
            resource.modified_on.unwrap_or(now),
        ))
    }

    fn to_resource(&self) -> UserResource {
        UserResource {
            id: self.id(),
            user_name: self.user_name().to_string(),
            email: self.email().to_string(),
            is_active: self.is_active(),
            created_on: self.created_on(),
            modified_on: self.modified_on(),
        }
    }
}

// UserConcept

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveUserConceptResource {
    pub id: Option<Uuid>,
    #[serde(default)]
    pub user_concept_name: String,
    pub user_concept_description: Option<String>,
    pub is_active: Option<bool>,
    pub created_on: Option<i64>,
    pub modified_on: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserConceptResource {
    pub id: Uuid,
    pub user_concept_name: String,
    pub user_concept_description: Option<String>,
    pub is_active: bool,
    pub created_on: i64,
    pub modified_on: i64,
}

impl ApiEntity for UserConcept {
    const ROUTE: &'static str = "userconcepts";

    type SaveResource = SaveUserConceptResource;
    type Resource = UserConceptResource;

    fn from_save_resource(resource: SaveUserConceptResource) -> Result<Self, Vec<String>> {
        let fields = ConceptFields::validate(
            "UserConceptName",
            "UserConceptDescription",
            resource.id,
            resource.user_concept_name,
            resource.user_concept_description,
            resource.is_active,
            resource.created_on,
            resource.modified_on,
        )?;
        Ok(UserConcept::reconstitute(
            fields.id,
            fields.name,
            fields.description,
            fields.is_active,
            fields.created_on,
            fields.modified_on,
        ))
    }

    fn to_resource(&self) -> UserConceptResource {
        UserConceptResource {
            id: self.id(),
            user_concept_name: self.name().to_string(),
            user_concept_description: self.description().map(String::from),
            is_active: self.is_active(),
            created_on: self.created_on(),
            modified_on: self.modified_on(),
        }
    }
}

// ConceptType

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveConceptTypeResource {
    pub id: Option<Uuid>,
    #[serde(default)]
    pub concept_type_name: String,
    pub concept_type_description: Option<String>,
    pub is_active: Option<bool>,
    pub created_on: Option<i64>,
    pub modified_on: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptTypeResource {
    pub id: Uuid,
    pub concept_type_name: String,
    pub concept_type_description: Option<String>,
    pub is_active: bool,
    pub created_on: i64,
    pub modified_on: i64,
}

impl ApiEntity for ConceptType {
    const ROUTE: &'static str = "concepttypes";

    type SaveResource = SaveConceptTypeResource;
    type Resource = ConceptTypeResource;

    fn from_save_resource(resource: SaveConceptTypeResource) -> Result<Self, Vec<String>> {
        let fields = ConceptFields::validate(
            "ConceptTypeName",
            "ConceptTypeDescription",
            resource.id,
            resource.concept_type_name,
            resource.concept_type_description,
            resource.is_active,
            resource.created_on,
            resource.modified_on,
        )?;
        Ok(ConceptType::reconstitute(
            fields.id,
            fields.name,
            fields.description,
            fields.is_active,
            fields.created_on,
            fields.modified_on,
        ))
    }

    fn to_resource(&self) -> ConceptTypeResource {
        ConceptTypeResource {
            id: self.id(),
            concept_type_name: self.name().to_string(),
            concept_type_description: self.description().map(String::from),
            is_active: self.is_active(),
            created_on: self.created_on(),
            modified_on: self.modified_on(),
        }
    }
}

// PlantDisease

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavePlantDiseaseResource {
    pub id: Option<Uuid>,
    #[serde(default)]
    pub plant_disease_name: String,
    pub plant_disease_description: Option<String>,
    pub is_active: Option<bool>,
    pub created_on: Option<i64>,
    pub modified_on: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantDiseaseResource {
    pub id: Uuid,
    pub plant_disease_name: String,
    pub plant_disease_description: Option<String>,
    pub is_active: bool,
    pub created_on: i64,
    pub modified_on: i64,
}

impl ApiEntity for PlantDisease {
    const ROUTE: &'static str = "plantdiseases";

    type SaveResource = SavePlantDiseaseResource;
    type Resource = PlantDiseaseResource;

    fn from_save_resource(resource: SavePlantDiseaseResource) -> Result<Self, Vec<String>> {
        let fields = ConceptFields::validate(
            "PlantDiseaseName",
            "PlantDiseaseDescription",
            resource.id,
            resource.plant_disease_name,
            resource.plant_disease_description,
            resource.is_active,
            resource.created_on,
            resource.modified_on,
        )?;
        Ok(PlantDisease::reconstitute(
            fields.id,
            fields.name,
            fields.description,
            fields.is_active,
            fields.created_on,
            fields.modified_on,
        ))
    }

    fn to_resource(&self) -> PlantDiseaseResource {
        PlantDiseaseResource {
            id: self.id(),
            plant_disease_name: self.name().to_string(),
            plant_disease_description: self.description().map(String::from),
            is_active: self.is_active(),
            created_on: self.created_on(),
            modified_on: self.modified_on(),
        }
    }
}

// CategoryDisease

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveCategoryDiseaseResource {
    pub id: Option<Uuid>,
    #[serde(default)]
    pub category_disease_name: String,
    pub category_disease_description: Option<String>,
    pub is_active: Option<bool>,
    pub created_on: Option<i64>,
    pub modified_on: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDiseaseResource {
    pub id: Uuid,
    pub category_disease_name: String,
    pub category_disease_description: Option<String>,
    pub is_active: bool,
    pub created_on: i64,
    pub modified_on: i64,
}

impl ApiEntity for CategoryDisease {
    const ROUTE: &'static str = "categorydiseases";

    type SaveResource = SaveCategoryDiseaseResource;
    type Resource = CategoryDiseaseResource;

    fn from_save_resource(resource: SaveCategoryDiseaseResource) -> Result<Self, Vec<String>> {
        let fields = ConceptFields::validate(
            "CategoryDiseaseName",
            "CategoryDiseaseDescription",
            resource.id,
            resource.category_disease_name,
            resource.category_disease_description,
            resource.is_active,
            resource.created_on,
            resource.modified_on,
        )?;
        Ok(CategoryDisease::reconstitute(
            fields.id,
            fields.name,
            fields.description,
            fields.is_active,
            fields.created_on,
            fields.modified_on,
        ))
    }

    fn to_resource(&self) -> CategoryDiseaseResource {
        CategoryDiseaseResource {
            id: self.id(),
            category_disease_name: self.name().to_string(),
            category_disease_description: self.description().map(String::from),
            is_active: self.is_active(),
            created_on: self.created_on(),
            modified_on: self.modified_on(),
        }
    }
}
