mod association;
mod category_disease;
mod concept_type;
mod entity;
mod plant_disease;
mod service_response;
mod user;
mod user_concept;

pub use association::*;
pub use category_disease::*;
pub use concept_type::*;
pub use entity::*;
pub use plant_disease::*;
pub use service_response::*;
pub use user::*;
pub use user_concept::*;
