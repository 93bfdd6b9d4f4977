use super::*;

/// Tests deleting an existing generation.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_existing_generation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let generation = factory::create_generation(db).await?;

    let repo = GenerationRepository::new(db);
    assert!(repo.delete(generation.id).await?);

    let stored = entity::prelude::Generation::find_by_id(generation.id)
        .one(db)
        .await?;
    assert!(stored.is_none());

    Ok(())
}

/// Tests deleting a generation that doesn't exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_generation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GenerationRepository::new(db);
    assert!(!repo.delete(4242).await?);

    Ok(())
}

/// Tests the usage count that backs the referential delete check.
///
/// Expected: count reflects the Pokemon belonging to the generation
#[tokio::test]
async fn counts_pokemon_referencing_the_generation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let generation = factory::create_generation(db).await?;
    let other = factory::create_generation(db).await?;
    factory::create_pokemon(db, generation.id).await?;
    factory::create_pokemon(db, generation.id).await?;

    let repo = GenerationRepository::new(db);
    assert_eq!(repo.count_pokemon_usage(generation.id).await?, 2);
    assert_eq!(repo.count_pokemon_usage(other.id).await?, 0);

    Ok(())
}
