use super::*;

/// Tests creating a type together with outgoing relationship edges of every
/// kind.
///
/// Expected: Ok with one edge row per (target, relation) pair
#[tokio::test]
async fn creates_type_with_relation_edges() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let fire = factory::create_type(db).await?;
    let grass = factory::create_type(db).await?;
    let dragon = factory::create_type(db).await?;

    let repo = PokeTypeRepository::new(db);
    let id = repo
        .create(
            create_params(
                "Water",
                TypeRelations {
                    strong_against: vec![fire.id],
                    weak_against: vec![grass.id],
                    immune_to: vec![dragon.id],
                },
            ),
            "water".to_string(),
        )
        .await?;

    let edges = entity::prelude::TypeRelationship::find()
        .filter(entity::type_relationship::Column::SourceTypeId.eq(id))
        .all(db)
        .await?;

    assert_eq!(edges.len(), 3);
    assert!(edges
        .iter()
        .any(|e| e.target_type_id == fire.id && e.relation == "STRONG_AGAINST"));
    assert!(edges
        .iter()
        .any(|e| e.target_type_id == grass.id && e.relation == "WEAK_AGAINST"));
    assert!(edges
        .iter()
        .any(|e| e.target_type_id == dragon.id && e.relation == "IMMUNE_TO"));

    Ok(())
}

/// Tests that duplicate (target, relation) pairs in the payload collapse to
/// one edge.
///
/// Expected: Ok with a single edge row
#[tokio::test]
async fn deduplicates_relation_edges() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let fire = factory::create_type(db).await?;

    let repo = PokeTypeRepository::new(db);
    let id = repo
        .create(
            create_params(
                "Water",
                TypeRelations {
                    strong_against: vec![fire.id, fire.id],
                    weak_against: vec![],
                    immune_to: vec![],
                },
            ),
            "water".to_string(),
        )
        .await?;

    let edges = entity::prelude::TypeRelationship::find()
        .filter(entity::type_relationship::Column::SourceTypeId.eq(id))
        .all(db)
        .await?;

    assert_eq!(edges.len(), 1);

    Ok(())
}

/// Tests that the stored row carries the supplied slug and color.
///
/// Expected: Ok with the row persisted as given
#[tokio::test]
async fn stores_slug_and_color() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PokeTypeRepository::new(db);
    let id = repo
        .create(
            CreateTypeParams {
                name: "Fire".to_string(),
                slug: None,
                description: Some("Burns".to_string()),
                color_hex: Some("#FF5733".to_string()),
                relations: TypeRelations::default(),
            },
            "fire".to_string(),
        )
        .await?;

    let stored = entity::prelude::PokeType::find_by_id(id).one(db).await?.unwrap();
    assert_eq!(stored.slug, "fire");
    assert_eq!(stored.color_hex.as_deref(), Some("#FF5733"));

    Ok(())
}
