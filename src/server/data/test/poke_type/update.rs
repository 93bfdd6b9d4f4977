use super::*;

/// Tests that a scalar-only update leaves the relationship edges alone.
///
/// Expected: Ok with the edge set unchanged
#[tokio::test]
async fn scalar_update_keeps_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let fire = factory::create_type(db).await?;

    let repo = PokeTypeRepository::new(db);
    let water_id = repo
        .create(
            create_params(
                "Water",
                TypeRelations {
                    strong_against: vec![fire.id],
                    weak_against: vec![],
                    immune_to: vec![],
                },
            ),
            "water".to_string(),
        )
        .await?;

    let updated = repo
        .update(
            UpdateTypeParams {
                name: Some("Hydro".to_string()),
                ..empty_update(water_id)
            },
            Some("hydro".to_string()),
        )
        .await?;
    assert!(updated);

    let stored = entity::prelude::PokeType::find_by_id(water_id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name, "Hydro");
    assert_eq!(stored.slug, "hydro");

    let edges = entity::prelude::TypeRelationship::find()
        .filter(entity::type_relationship::Column::SourceTypeId.eq(water_id))
        .all(db)
        .await?;
    assert_eq!(edges.len(), 1);

    Ok(())
}

/// Tests that a present relations object replaces every outgoing edge.
///
/// Expected: Ok with only the new edge set remaining
#[tokio::test]
async fn relations_update_is_wholesale() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let fire = factory::create_type(db).await?;
    let grass = factory::create_type(db).await?;

    let repo = PokeTypeRepository::new(db);
    let water_id = repo
        .create(
            create_params(
                "Water",
                TypeRelations {
                    strong_against: vec![fire.id],
                    weak_against: vec![],
                    immune_to: vec![],
                },
            ),
            "water".to_string(),
        )
        .await?;

    repo.update(
        UpdateTypeParams {
            relations: Some(TypeRelations {
                strong_against: vec![],
                weak_against: vec![grass.id],
                immune_to: vec![],
            }),
            ..empty_update(water_id)
        },
        None,
    )
    .await?;

    let edges = entity::prelude::TypeRelationship::find()
        .filter(entity::type_relationship::Column::SourceTypeId.eq(water_id))
        .all(db)
        .await?;
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].target_type_id, grass.id);
    assert_eq!(edges[0].relation, "WEAK_AGAINST");

    Ok(())
}

/// Tests that clearing via an empty relations object removes every edge.
///
/// Expected: Ok with no outgoing edges left
#[tokio::test]
async fn empty_relations_clear_all_edges() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let fire = factory::create_type(db).await?;

    let repo = PokeTypeRepository::new(db);
    let water_id = repo
        .create(
            create_params(
                "Water",
                TypeRelations {
                    strong_against: vec![fire.id],
                    weak_against: vec![],
                    immune_to: vec![],
                },
            ),
            "water".to_string(),
        )
        .await?;

    repo.update(
        UpdateTypeParams {
            relations: Some(TypeRelations::default()),
            ..empty_update(water_id)
        },
        None,
    )
    .await?;

    let edges = entity::prelude::TypeRelationship::find()
        .filter(entity::type_relationship::Column::SourceTypeId.eq(water_id))
        .all(db)
        .await?;
    assert!(edges.is_empty());

    Ok(())
}

/// Tests updating a type that doesn't exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PokeTypeRepository::new(db);
    assert!(!repo.update(empty_update(4242), None).await?);

    Ok(())
}
