use super::*;
use sea_orm::{ActiveModelTrait, ActiveValue};

/// Tests that deleting a type removes edges in both directions.
///
/// Expected: Ok(true) with no edge touching the deleted type left
#[tokio::test]
async fn deletes_type_and_edges_in_both_directions() -> Result<(), DbErr> {
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
                    weak_against: vec![grass.id],
                    immune_to: vec![],
                },
            ),
            "water".to_string(),
        )
        .await?;

    // An incoming edge from another type.
    repo.update(
        UpdateTypeParams {
            relations: Some(TypeRelations {
                strong_against: vec![water_id],
                weak_against: vec![],
                immune_to: vec![],
            }),
            ..empty_update(grass.id)
        },
        None,
    )
    .await?;

    assert!(repo.delete(water_id).await?);

    let remaining = entity::prelude::TypeRelationship::find()
        .filter(
            sea_orm::Condition::any()
                .add(entity::type_relationship::Column::SourceTypeId.eq(water_id))
                .add(entity::type_relationship::Column::TargetTypeId.eq(water_id)),
        )
        .all(db)
        .await?;
    assert!(remaining.is_empty());

    let stored = entity::prelude::PokeType::find_by_id(water_id).one(db).await?;
    assert!(stored.is_none());

    Ok(())
}

/// Tests the usage count that backs the referential delete check.
///
/// Expected: count reflects the Pokemon holding the type
#[tokio::test]
async fn counts_pokemon_holding_the_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let fire = factory::create_type(db).await?;
    let generation = factory::create_generation(db).await?;
    let pokemon = factory::create_pokemon(db, generation.id).await?;

    entity::pokemon_type::ActiveModel {
        pokemon_id: ActiveValue::Set(pokemon.id),
        type_id: ActiveValue::Set(fire.id),
        slot: ActiveValue::Set(1),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let repo = PokeTypeRepository::new(db);
    assert_eq!(repo.count_pokemon_usage(fire.id).await?, 1);

    Ok(())
}
