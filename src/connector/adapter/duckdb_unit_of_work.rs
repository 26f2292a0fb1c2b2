use std::sync::Arc;

use async_trait::async_trait;
use duckdb::types::Value;
use duckdb::{params_from_iter, Connection};
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::UnitOfWork;
use crate::domain::DomainError;

/// A single statement waiting for the next commit.
#[derive(Debug, Clone)]
pub struct StagedWrite {
    sql: String,
    params: Vec<Value>,
    action: String,
}

impl StagedWrite {
    pub fn new(sql: impl Into<String>, params: Vec<Value>, action: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params,
            action: action.into(),
        }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn action(&self) -> &str {
        &self.action
    }
}

/// Request-scoped unit of work over a shared DuckDB connection.
///
/// Stores stage their writes here; `complete` replays them inside one
/// transaction. Reads go straight to the connection and never see staged
/// writes.
pub struct DuckdbUnitOfWork {
    conn: Arc<Mutex<Connection>>,
    staged: Mutex<Vec<StagedWrite>>,
}

impl DuckdbUnitOfWork {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self {
            conn,
            staged: Mutex::new(Vec::new()),
        }
    }

    pub fn connection(&self) -> &Arc<Mutex<Connection>> {
        &self.conn
    }

    pub async fn stage(&self, write: StagedWrite) {
        debug!("Staged: {}", write.action());
        self.staged.lock().await.push(write);
    }

    pub async fn pending(&self) -> usize {
        self.staged.lock().await.len()
    }
}

#[async_trait]
impl UnitOfWork for DuckdbUnitOfWork {
    async fn complete(&self) -> Result<(), DomainError> {
        let writes = std::mem::take(&mut *self.staged.lock().await);
        if writes.is_empty() {
            return Ok(());
        }

        let mut conn = self.conn.lock().await;
        let tx = conn
            .transaction()
            .map_err(|e| DomainError::storage(format!("Failed to begin transaction: {}", e)))?;

        for write in &writes {
            tx.execute(write.sql(), params_from_iter(write.params.iter()))
                .map_err(|e| {
                    DomainError::storage(format!("Failed to {}: {}", write.action(), e))
                })?;
        }

        tx.commit()
            .map_err(|e| DomainError::storage(format!("Failed to commit: {}", e)))?;

        debug!("Committed {} staged writes", writes.len());
        Ok(())
    }
}
