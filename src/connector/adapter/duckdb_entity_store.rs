use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use duckdb::params;
use uuid::Uuid;

use crate::application::EntityStore;
use crate::domain::{DomainError, Entity};

use super::duckdb_schema::{uuid_value, DuckdbRecord};
use super::duckdb_unit_of_work::{DuckdbUnitOfWork, StagedWrite};

/// Entity store for any table described by [`DuckdbRecord`].
pub struct DuckdbEntityStore<E: DuckdbRecord> {
    unit_of_work: Arc<DuckdbUnitOfWork>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: DuckdbRecord> DuckdbEntityStore<E> {
    pub fn new(unit_of_work: Arc<DuckdbUnitOfWork>) -> Self {
        Self {
            unit_of_work,
            _entity: PhantomData,
        }
    }

    fn select_sql() -> String {
        format!("SELECT {} FROM {}", E::COLUMNS.join(", "), E::TABLE)
    }

    fn insert_sql() -> String {
        let placeholders = vec!["?"; E::COLUMNS.len()].join(", ");
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            E::TABLE,
            E::COLUMNS.join(", "),
            placeholders
        )
    }

    fn update_sql() -> String {
        let assignments = E::COLUMNS[1..]
            .iter()
            .map(|column| format!("{} = ?", column))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "UPDATE {} SET {} WHERE {} = ?",
            E::TABLE,
            assignments,
            E::COLUMNS[0]
        )
    }
}

#[async_trait]
impl<E: DuckdbRecord> EntityStore<E> for DuckdbEntityStore<E> {
    async fn list(&self) -> Result<Vec<E>, DomainError> {
        let conn = self.unit_of_work.connection().lock().await;
        let sql = format!("{} ORDER BY created_on, {}", Self::select_sql(), E::COLUMNS[0]);
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| DomainError::storage(format!("Failed to prepare statement: {}", e)))?;

        let rows = stmt
            .query_map([], |row| E::from_row(row))
            .map_err(|e| DomainError::storage(format!("Failed to query {}: {}", E::TABLE, e)))?;

        let mut entities = Vec::new();
        for row in rows {
            entities
                .push(row.map_err(|e| DomainError::storage(format!("Failed to read row: {}", e)))?);
        }
        Ok(entities)
    }

    async fn add(&self, entity: &E) -> Result<(), DomainError> {
        self.unit_of_work
            .stage(StagedWrite::new(
                Self::insert_sql(),
                entity.to_values(),
                format!("insert {} {}", E::NAME, entity.id()),
            ))
            .await;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<E>, DomainError> {
        let conn = self.unit_of_work.connection().lock().await;
        let sql = format!("{} WHERE {} = ?", Self::select_sql(), E::COLUMNS[0]);
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| DomainError::storage(format!("Failed to prepare statement: {}", e)))?;

        match stmt.query_row(params![id.to_string()], |row| E::from_row(row)) {
            Ok(entity) => Ok(Some(entity)),
            Err(duckdb::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(DomainError::storage(format!(
                "Failed to query {}: {}",
                E::NAME,
                e
            ))),
        }
    }

    async fn update(&self, entity: &E) -> Result<(), DomainError> {
        let mut values = entity.to_values();
        let id = values.remove(0);
        values.push(id);

        self.unit_of_work
            .stage(StagedWrite::new(
                Self::update_sql(),
                values,
                format!("update {} {}", E::NAME, entity.id()),
            ))
            .await;
        Ok(())
    }

    async fn remove(&self, entity: &E) -> Result<(), DomainError> {
        self.unit_of_work
            .stage(StagedWrite::new(
                format!("DELETE FROM {} WHERE {} = ?", E::TABLE, E::COLUMNS[0]),
                vec![uuid_value(entity.id())],
                format!("delete {} {}", E::NAME, entity.id()),
            ))
            .await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CategoryDisease;

    #[test]
    fn test_update_sql_sets_every_column_but_the_key() {
        let sql = DuckdbEntityStore::<CategoryDisease>::update_sql();

        assert_eq!(
            sql,
            "UPDATE category_diseases SET name = ?, description = ?, is_active = ?, \
             created_on = ?, modified_on = ? WHERE id = ?"
        );
    }

    #[test]
    fn test_insert_sql_has_one_placeholder_per_column() {
        let sql = DuckdbEntityStore::<CategoryDisease>::insert_sql();

        assert_eq!(sql.matches('?').count(), CategoryDisease::COLUMNS.len());
    }
}
