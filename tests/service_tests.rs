use ontologia::{
    CategoryDisease, ConceptType, Container, ContainerConfig, Entity, PlantDisease, User,
    UserConcept,
};
use tempfile::tempdir;
use uuid::Uuid;

fn memory_container() -> Container {
    Container::new(ContainerConfig {
        data_dir: String::new(),
        memory_storage: true,
    })
    .expect("container")
}

#[tokio::test]
async fn plant_disease_can_be_filed_under_a_category() {
    let container = memory_container();
    let diseases = container.plant_disease_service();

    let fungal = container
        .category_disease_service()
        .save(CategoryDisease::new("Fungal", None))
        .await
        .into_resource()
        .expect("category saved");
    let blight = diseases
        .save(PlantDisease::new("Blight", None))
        .await
        .into_resource()
        .expect("disease saved");

    let assigned = diseases
        .assign_plant_disease_to_category_disease(fungal.id(), blight.id())
        .await;
    assert!(assigned.is_success());
    assert_eq!(assigned.resource().map(|d| d.name()), Some("Blight"));

    let listed = diseases
        .list_by_category_disease_id(fungal.id())
        .await
        .expect("list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id(), blight.id());
}

#[tokio::test]
async fn assigning_twice_lists_the_child_once() {
    let container = memory_container();
    let concepts = container.user_concept_service();

    let user = container
        .user_service()
        .save(User::new("ada", "ada@example.com"))
        .await
        .into_resource()
        .expect("user saved");
    let concept = concepts
        .save(UserConcept::new("Photosynthesis", None))
        .await
        .into_resource()
        .expect("concept saved");

    for _ in 0..2 {
        let response = concepts
            .assign_user_concept_to_user(user.id(), concept.id())
            .await;
        assert!(response.is_success(), "{}", response.message());
    }

    let listed = concepts.list_by_user_id(user.id()).await.expect("list");
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn unassign_removes_the_edge_but_keeps_the_child() {
    let container = memory_container();
    let concepts = container.user_concept_service();

    let kind = container
        .concept_type_service()
        .save(ConceptType::new("Process", None))
        .await
        .into_resource()
        .expect("concept type saved");
    let concept = concepts
        .save(UserConcept::new("Respiration", None))
        .await
        .into_resource()
        .expect("concept saved");

    assert!(concepts
        .assign_user_concept_to_concept_type(kind.id(), concept.id())
        .await
        .is_success());

    let response = concepts
        .unassign_user_concept_to_concept_type(kind.id(), concept.id())
        .await;
    assert!(response.is_success());
    assert_eq!(response.resource().map(|c| c.id()), Some(concept.id()));

    assert!(concepts
        .list_by_concept_type_id(kind.id())
        .await
        .expect("list")
        .is_empty());
    assert!(concepts.get_by_id(concept.id()).await.is_success());
}

#[tokio::test]
async fn assigning_a_missing_child_fails_without_persisting() {
    let container = memory_container();
    let diseases = container.plant_disease_service();

    let concept = container
        .user_concept_service()
        .save(UserConcept::new("Pathogens", None))
        .await
        .into_resource()
        .expect("concept saved");

    let response = diseases
        .assign_plant_disease_to_user_concept(concept.id(), Uuid::new_v4())
        .await;
    assert!(!response.is_success());
    assert!(response
        .message()
        .starts_with("An error occurred while assigning PlantDisease to UserConcept:"));

    assert!(diseases
        .list_by_user_concept_id(concept.id())
        .await
        .expect("list")
        .is_empty());
}

#[tokio::test]
async fn update_of_a_missing_id_reports_not_found() {
    let container = memory_container();
    let users = container.user_service();

    let response = users
        .update(Uuid::new_v4(), User::new("ghost", "ghost@example.com"))
        .await;
    assert!(!response.is_success());
    assert_eq!(response.message(), "User Not Found");
    assert!(users.list().await.expect("list").is_empty());
}

#[tokio::test]
async fn update_overwrites_fields_and_keeps_identity() {
    let container = memory_container();
    let types = container.concept_type_service();

    let original = types
        .save(ConceptType::new("Organism", None))
        .await
        .into_resource()
        .expect("saved");

    let response = types
        .update(
            original.id(),
            ConceptType::new("Living organism", Some("Any living thing".to_string())),
        )
        .await;
    let updated = response.into_resource().expect("updated");

    assert_eq!(updated.id(), original.id());
    assert_eq!(updated.name(), "Living organism");
    assert_eq!(
        types
            .get_by_id(original.id())
            .await
            .into_resource()
            .expect("reload")
            .description(),
        Some("Any living thing")
    );
}

#[tokio::test]
async fn saving_a_duplicate_id_fails() {
    let container = memory_container();
    let users = container.user_service();

    let user = User::new("grace", "grace@example.com");
    assert!(users.save(user.clone()).await.is_success());

    let response = users.save(user).await;
    assert!(!response.is_success());
    assert!(response.message().starts_with("An error while saving User:"));
    assert_eq!(users.list().await.expect("list").len(), 1);
}

#[tokio::test]
async fn delete_returns_the_removed_entity() {
    let dir = tempdir().expect("tempdir");
    let container = Container::new(ContainerConfig {
        data_dir: dir.path().to_string_lossy().to_string(),
        memory_storage: false,
    })
    .expect("container");
    let categories = container.category_disease_service();

    let viral = categories
        .save(CategoryDisease::new("Viral", None))
        .await
        .into_resource()
        .expect("saved");

    let response = categories.delete(viral.id()).await;
    assert_eq!(response.resource().map(|c| c.name()), Some("Viral"));
    assert_eq!(
        categories.get_by_id(viral.id()).await.message(),
        "CategoryDisease Not Found"
    );
}
