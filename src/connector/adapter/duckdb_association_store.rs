use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use duckdb::params;
use uuid::Uuid;

use crate::application::AssociationStore;
use crate::domain::{DomainError, Entity};

use super::duckdb_schema::{uuid_value, DuckdbAssociation, DuckdbRecord};
use super::duckdb_unit_of_work::{DuckdbUnitOfWork, StagedWrite};

/// Join-table store for any edge described by [`DuckdbAssociation`].
pub struct DuckdbAssociationStore<A: DuckdbAssociation> {
    unit_of_work: Arc<DuckdbUnitOfWork>,
    _edge: PhantomData<fn() -> A>,
}

impl<A: DuckdbAssociation> DuckdbAssociationStore<A>
where
    A::Child: DuckdbRecord,
    A::Parent: DuckdbRecord,
{
    pub fn new(unit_of_work: Arc<DuckdbUnitOfWork>) -> Self {
        Self {
            unit_of_work,
            _edge: PhantomData,
        }
    }

    fn list_children_sql() -> String {
        let columns = <A::Child as DuckdbRecord>::COLUMNS
            .iter()
            .map(|column| format!("c.{}", column))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "SELECT {columns} FROM {child} c \
             JOIN {join} j ON j.{child_col} = c.{child_key} \
             WHERE j.{parent_col} = ? \
             ORDER BY c.created_on, c.{child_key}",
            columns = columns,
            child = <A::Child as DuckdbRecord>::TABLE,
            join = A::TABLE,
            child_col = A::CHILD_COLUMN,
            child_key = <A::Child as DuckdbRecord>::COLUMNS[0],
            parent_col = A::PARENT_COLUMN,
        )
    }

    fn describe(verb: &str, parent_id: Uuid, child_id: Uuid) -> String {
        format!(
            "{} {} {} to {} {}",
            verb,
            <A::Child as Entity>::NAME,
            child_id,
            <A::Parent as Entity>::NAME,
            parent_id
        )
    }
}

#[async_trait]
impl<A: DuckdbAssociation> AssociationStore<A> for DuckdbAssociationStore<A>
where
    A::Child: DuckdbRecord,
    A::Parent: DuckdbRecord,
{
    async fn list_by_parent_id(&self, parent_id: Uuid) -> Result<Vec<A::Child>, DomainError> {
        let conn = self.unit_of_work.connection().lock().await;
        let mut stmt = conn
            .prepare(&Self::list_children_sql())
            .map_err(|e| DomainError::storage(format!("Failed to prepare statement: {}", e)))?;

        let rows = stmt
            .query_map(params![parent_id.to_string()], |row| {
                <A::Child as DuckdbRecord>::from_row(row)
            })
            .map_err(|e| DomainError::storage(format!("Failed to query {}: {}", A::TABLE, e)))?;

        let mut children = Vec::new();
        for row in rows {
            children
                .push(row.map_err(|e| DomainError::storage(format!("Failed to read row: {}", e)))?);
        }
        Ok(children)
    }

    async fn assign(&self, parent_id: Uuid, child_id: Uuid) -> Result<(), DomainError> {
        let sql = format!(
            "INSERT OR IGNORE INTO {} ({}, {}) VALUES (?, ?)",
            A::TABLE,
            A::PARENT_COLUMN,
            A::CHILD_COLUMN
        );
        self.unit_of_work
            .stage(StagedWrite::new(
                sql,
                vec![uuid_value(parent_id), uuid_value(child_id)],
                Self::describe("assign", parent_id, child_id),
            ))
            .await;
        Ok(())
    }

    async fn unassign(&self, parent_id: Uuid, child_id: Uuid) -> Result<(), DomainError> {
        let sql = format!(
            "DELETE FROM {} WHERE {} = ? AND {} = ?",
            A::TABLE,
            A::PARENT_COLUMN,
            A::CHILD_COLUMN
        );
        self.unit_of_work
            .stage(StagedWrite::new(
                sql,
                vec![uuid_value(parent_id), uuid_value(child_id)],
                Self::describe("unassign", parent_id, child_id),
            ))
            .await;
        Ok(())
    }
}
