use crate::domain::{CategoryDisease, ConceptType, Entity, PlantDisease, User, UserConcept};

/// A many-to-many edge between two entity families.
///
/// The child is the primary entity of the edge: assign and unassign
/// return the refreshed child, and listings by parent id yield children.
pub trait Association: Send + Sync + 'static {
    type Parent: Entity;
    type Child: Entity;
}

/// Links a [`UserConcept`] to the [`User`] that owns it.
#[derive(Debug, Clone, Copy)]
pub struct UserConceptUser;

impl Association for UserConceptUser {
    type Parent = User;
    type Child = UserConcept;
}

/// Classifies a [`UserConcept`] under a [`ConceptType`].
#[derive(Debug, Clone, Copy)]
pub struct UserConceptConceptType;

impl Association for UserConceptConceptType {
    type Parent = ConceptType;
    type Child = UserConcept;
}

/// Groups a [`PlantDisease`] under a [`CategoryDisease`].
#[derive(Debug, Clone, Copy)]
pub struct PlantDiseaseCategoryDisease;

impl Association for PlantDiseaseCategoryDisease {
    type Parent = CategoryDisease;
    type Child = PlantDisease;
}

/// Attaches a [`PlantDisease`] to a [`UserConcept`].
#[derive(Debug, Clone, Copy)]
pub struct UserConceptPlantDisease;

impl Association for UserConceptPlantDisease {
    type Parent = UserConcept;
    type Child = PlantDisease;
}
