mod association_store;
mod entity_store;
mod unit_of_work;

pub use association_store::*;
pub use entity_store::*;
pub use unit_of_work::*;
