use std::path::Path;

use duckdb::types::{Type, Value};
use duckdb::{Connection, Row};
use tracing::debug;
use uuid::Uuid;

use crate::domain::{
    Association, CategoryDisease, ConceptType, DomainError, Entity, PlantDisease,
    PlantDiseaseCategoryDisease, User, UserConcept, UserConceptConceptType,
    UserConceptPlantDisease, UserConceptUser,
};

/// Table mapping for an entity. `COLUMNS[0]` is the primary key.
pub trait DuckdbRecord: Entity {
    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];

    /// Values in `COLUMNS` order.
    fn to_values(&self) -> Vec<Value>;

    /// Builds the entity from a row selected in `COLUMNS` order.
    fn from_row(row: &Row<'_>) -> duckdb::Result<Self>;
}

/// Join table mapping for an association edge.
pub trait DuckdbAssociation: Association {
    const TABLE: &'static str;
    const PARENT_COLUMN: &'static str;
    const CHILD_COLUMN: &'static str;
}

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY,
    user_name TEXT NOT NULL,
    email TEXT NOT NULL,
    is_active BOOLEAN NOT NULL DEFAULT TRUE,
    created_on BIGINT NOT NULL,
    modified_on BIGINT NOT NULL
);

CREATE TABLE IF NOT EXISTS user_concepts (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    description TEXT,
    is_active BOOLEAN NOT NULL DEFAULT TRUE,
    created_on BIGINT NOT NULL,
    modified_on BIGINT NOT NULL
);

CREATE TABLE IF NOT EXISTS concept_types (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    description TEXT,
    is_active BOOLEAN NOT NULL DEFAULT TRUE,
    created_on BIGINT NOT NULL,
    modified_on BIGINT NOT NULL
);

CREATE TABLE IF NOT EXISTS plant_diseases (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    description TEXT,
    is_active BOOLEAN NOT NULL DEFAULT TRUE,
    created_on BIGINT NOT NULL,
    modified_on BIGINT NOT NULL
);

CREATE TABLE IF NOT EXISTS category_diseases (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    description TEXT,
    is_active BOOLEAN NOT NULL DEFAULT TRUE,
    created_on BIGINT NOT NULL,
    modified_on BIGINT NOT NULL
);

CREATE TABLE IF NOT EXISTS user_concept_users (
    user_id TEXT NOT NULL REFERENCES users(id),
    user_concept_id TEXT NOT NULL REFERENCES user_concepts(id),
    PRIMARY KEY (user_id, user_concept_id)
);

CREATE TABLE IF NOT EXISTS user_concept_concept_types (
    concept_type_id TEXT NOT NULL REFERENCES concept_types(id),
    user_concept_id TEXT NOT NULL REFERENCES user_concepts(id),
    PRIMARY KEY (concept_type_id, user_concept_id)
);

CREATE TABLE IF NOT EXISTS plant_disease_category_diseases (
    category_disease_id TEXT NOT NULL REFERENCES category_diseases(id),
    plant_disease_id TEXT NOT NULL REFERENCES plant_diseases(id),
    PRIMARY KEY (category_disease_id, plant_disease_id)
);

CREATE TABLE IF NOT EXISTS user_concept_plant_diseases (
    user_concept_id TEXT NOT NULL REFERENCES user_concepts(id),
    plant_disease_id TEXT NOT NULL REFERENCES plant_diseases(id),
    PRIMARY KEY (user_concept_id, plant_disease_id)
);
"#;

pub fn open_connection(db_path: &Path) -> Result<Connection, DomainError> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let conn = Connection::open(db_path)
        .map_err(|e| DomainError::storage(format!("Failed to open DuckDB database: {}", e)))?;
    initialize_schema(&conn)?;
    Ok(conn)
}

pub fn open_in_memory() -> Result<Connection, DomainError> {
    let conn = Connection::open_in_memory()
        .map_err(|e| DomainError::storage(format!("Failed to open DuckDB in-memory DB: {}", e)))?;
    initialize_schema(&conn)?;
    Ok(conn)
}

fn initialize_schema(conn: &Connection) -> Result<(), DomainError> {
    conn.execute_batch(SCHEMA)
        .map_err(|e| DomainError::storage(format!("Failed to initialize schema: {}", e)))?;

    debug!("DuckDB ontology schema initialized");
    Ok(())
}

pub(crate) fn uuid_value(id: Uuid) -> Value {
    Value::Text(id.to_string())
}

fn optional_text(value: Option<&str>) -> Value {
    value.map_or(Value::Null, |v| Value::Text(v.to_string()))
}

fn uuid_column(row: &Row<'_>, idx: usize) -> duckdb::Result<Uuid> {
    let raw: String = row.get(idx)?;
    Uuid::parse_str(&raw)
        .map_err(|e| duckdb::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

const CONCEPT_COLUMNS: &[&str] = &[
    "id",
    "name",
    "description",
    "is_active",
    "created_on",
    "modified_on",
];

impl DuckdbRecord for User {
    const TABLE: &'static str = "users";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "user_name",
        "email",
        "is_active",
        "created_on",
        "modified_on",
    ];

    fn to_values(&self) -> Vec<Value> {
        vec![
            uuid_value(self.id()),
            Value::Text(self.user_name().to_string()),
            Value::Text(self.email().to_string()),
            Value::Boolean(self.is_active()),
            Value::BigInt(self.created_on()),
            Value::BigInt(self.modified_on()),
        ]
    }

    fn from_row(row: &Row<'_>) -> duckdb::Result<Self> {
        Ok(User::reconstitute(
            uuid_column(row, 0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
            row.get(5)?,
        ))
    }
}

impl DuckdbRecord for UserConcept {
    const TABLE: &'static str = "user_concepts";
    const COLUMNS: &'static [&'static str] = CONCEPT_COLUMNS;

    fn to_values(&self) -> Vec<Value> {
        vec![
            uuid_value(self.id()),
            Value::Text(self.name().to_string()),
            optional_text(self.description()),
            Value::Boolean(self.is_active()),
            Value::BigInt(self.created_on()),
            Value::BigInt(self.modified_on()),
        ]
    }

    fn from_row(row: &Row<'_>) -> duckdb::Result<Self> {
        Ok(UserConcept::reconstitute(
            uuid_column(row, 0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
            row.get(5)?,
        ))
    }
}

impl DuckdbRecord for ConceptType {
    const TABLE: &'static str = "concept_types";
    const COLUMNS: &'static [&'static str] = CONCEPT_COLUMNS;

    fn to_values(&self) -> Vec<Value> {
        vec![
            uuid_value(self.id()),
            Value::Text(self.name().to_string()),
            optional_text(self.description()),
            Value::Boolean(self.is_active()),
            Value::BigInt(self.created_on()),
            Value::BigInt(self.modified_on()),
        ]
    }

    fn from_row(row: &Row<'_>) -> duckdb::Result<Self> {
        Ok(ConceptType::reconstitute(
            uuid_column(row, 0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
            row.get(5)?,
        ))
    }
}

impl DuckdbRecord for PlantDisease {
    const TABLE: &'static str = "plant_diseases";
    const COLUMNS: &'static [&'static str] = CONCEPT_COLUMNS;

    fn to_values(&self) -> Vec<Value> {
        vec![
            uuid_value(self.id()),
            Value::Text(self.name().to_string()),
            optional_text(self.description()),
            Value::Boolean(self.is_active()),
            Value::BigInt(self.created_on()),
            Value::BigInt(self.modified_on()),
        ]
    }

    fn from_row(row: &Row<'_>) -> duckdb::Result<Self> {
        Ok(PlantDisease::reconstitute(
            uuid_column(row, 0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
            row.get(5)?,
        ))
    }
}

impl DuckdbRecord for CategoryDisease {
    const TABLE: &'static str = "category_diseases";
    const COLUMNS: &'static [&'static str] = CONCEPT_COLUMNS;

    fn to_values(&self) -> Vec<Value> {
        vec![
            uuid_value(self.id()),
            Value::Text(self.name().to_string()),
            optional_text(self.description()),
            Value::Boolean(self.is_active()),
            Value::BigInt(self.created_on()),
            Value::BigInt(self.modified_on()),
        ]
    }

    fn from_row(row: &Row<'_>) -> duckdb::Result<Self> {
        Ok(CategoryDisease::reconstitute(
            uuid_column(row, 0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
            row.get(5)?,
        ))
    }
}

impl DuckdbAssociation for UserConceptUser {
    const TABLE: &'static str = "user_concept_users";
    const PARENT_COLUMN: &'static str = "user_id";
    const CHILD_COLUMN: &'static str = "user_concept_id";
}

impl DuckdbAssociation for UserConceptConceptType {
    const TABLE: &'static str = "user_concept_concept_types";
    const PARENT_COLUMN: &'static str = "concept_type_id";
    const CHILD_COLUMN: &'static str = "user_concept_id";
}

impl DuckdbAssociation for PlantDiseaseCategoryDisease {
    const TABLE: &'static str = "plant_disease_category_diseases";
    const PARENT_COLUMN: &'static str = "category_disease_id";
    const CHILD_COLUMN: &'static str = "plant_disease_id";
}

impl DuckdbAssociation for UserConceptPlantDisease {
    const TABLE: &'static str = "user_concept_plant_diseases";
    const PARENT_COLUMN: &'static str = "user_concept_id";
    const CHILD_COLUMN: &'static str = "plant_disease_id";
}
