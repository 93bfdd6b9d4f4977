use super::*;

/// Tests that both edge directions are loaded with the joined far-side type.
///
/// Expected: Ok with one outgoing edge for Water and one incoming for Fire
#[tokio::test]
async fn loads_both_edge_directions() -> Result<(), DbErr> {
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

    let water = repo.get_by_id_with_relations(water_id).await?.unwrap();
    assert_eq!(water.outgoing.len(), 1);
    assert!(water.incoming.is_empty());
    let (edge, target) = &water.outgoing[0];
    assert_eq!(edge.relation, "STRONG_AGAINST");
    assert_eq!(target.as_ref().unwrap().id, fire.id);

    let fire_side = repo.get_by_id_with_relations(fire.id).await?.unwrap();
    assert!(fire_side.outgoing.is_empty());
    assert_eq!(fire_side.incoming.len(), 1);
    let (edge, source) = &fire_side.incoming[0];
    assert_eq!(edge.relation, "STRONG_AGAINST");
    assert_eq!(source.as_ref().unwrap().id, water_id);

    Ok(())
}

/// Tests fetching a type that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PokeTypeRepository::new(db);
    assert!(repo.get_by_id_with_relations(4242).await?.is_none());

    Ok(())
}
