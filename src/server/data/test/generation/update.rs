use super::*;

fn empty_update(id: i32) -> UpdateGenerationParams {
    UpdateGenerationParams {
        id,
        name: None,
        number: None,
        description: None,
        released_at: None,
    }
}

/// Tests that absent fields leave stored values untouched.
///
/// Expected: Ok with only the name changed
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let generation = factory::generation::GenerationFactory::new(db)
        .description(Some("old".to_string()))
        .build()
        .await?;

    let repo = GenerationRepository::new(db);
    let updated = repo
        .update(UpdateGenerationParams {
            name: Some("Renamed".to_string()),
            ..empty_update(generation.id)
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.number, generation.number);
    assert_eq!(updated.description.as_deref(), Some("old"));

    Ok(())
}

/// Tests that an explicit null clears a nullable field.
///
/// Expected: Ok with the description removed
#[tokio::test]
async fn explicit_null_clears_description() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let generation = factory::generation::GenerationFactory::new(db)
        .description(Some("to be removed".to_string()))
        .build()
        .await?;

    let repo = GenerationRepository::new(db);
    let updated = repo
        .update(UpdateGenerationParams {
            description: Some(None),
            ..empty_update(generation.id)
        })
        .await?
        .unwrap();

    assert!(updated.description.is_none());

    Ok(())
}

/// Tests updating a generation that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_generation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GenerationRepository::new(db);
    let updated = repo.update(empty_update(4242)).await?;

    assert!(updated.is_none());

    Ok(())
}
