mod duckdb_association_store;
mod duckdb_entity_store;
mod duckdb_schema;
mod duckdb_unit_of_work;

pub use duckdb_association_store::*;
pub use duckdb_entity_store::*;
pub use duckdb_schema::{open_connection, open_in_memory, DuckdbAssociation, DuckdbRecord};
pub use duckdb_unit_of_work::*;
