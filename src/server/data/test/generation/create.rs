use super::*;

/// Tests creating a generation with every field supplied.
///
/// Expected: Ok with the stored values round-tripped
#[tokio::test]
async fn creates_generation_with_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GenerationRepository::new(db);
    let generation = repo
        .create(CreateGenerationParams {
            name: "Kanto".to_string(),
            number: 1,
            description: Some("The first region".to_string()),
            released_at: NaiveDate::from_ymd_opt(1996, 2, 27),
        })
        .await?;

    assert_eq!(generation.name, "Kanto");
    assert_eq!(generation.number, 1);
    assert_eq!(generation.released_at, NaiveDate::from_ymd_opt(1996, 2, 27));

    let stored = entity::prelude::Generation::find_by_id(generation.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.description.as_deref(), Some("The first region"));

    Ok(())
}

/// Tests creating a generation with only the mandatory fields.
///
/// Expected: Ok with optional fields stored as NULL
#[tokio::test]
async fn creates_generation_without_optional_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GenerationRepository::new(db);
    let generation = repo
        .create(CreateGenerationParams {
            name: "Johto".to_string(),
            number: 2,
            description: None,
            released_at: None,
        })
        .await?;

    assert!(generation.description.is_none());
    assert!(generation.released_at.is_none());

    Ok(())
}
