use super::*;

/// Tests that deletion cascades the Pokemon's own media, type and evolution
/// rows while leaving other Pokemon alone.
///
/// Expected: Ok(true) with every owned row gone
#[tokio::test]
async fn cascades_own_related_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let generation = factory::create_generation(db).await?;
    let fire = factory::create_type(db).await?;
    let charmander = factory::create_pokemon(db, generation.id).await?;
    let charizard = factory::create_pokemon(db, generation.id).await?;

    let mut params = create_params("Charmeleon", 5, generation.id, vec![fire.id]);
    params.media = vec![media_input(
        MediaKind::Image,
        "https://cdn.example/charmeleon.png",
        true,
    )];
    params.pre_evolution_id = Some(charmander.id);
    params.next_evolution_ids = vec![charizard.id];

    let repo = PokemonRepository::new(db);
    let id = repo.create(params, "charmeleon".to_string(), None).await?;

    assert!(repo.delete(id).await?);

    assert!(entity::prelude::Pokemon::find_by_id(id).one(db).await?.is_none());
    assert!(entity::prelude::PokemonType::find()
        .filter(entity::pokemon_type::Column::PokemonId.eq(id))
        .all(db)
        .await?
        .is_empty());
    assert!(entity::prelude::PokemonMedia::find()
        .filter(entity::pokemon_media::Column::PokemonId.eq(id))
        .all(db)
        .await?
        .is_empty());
    assert!(entity::prelude::PokemonEvolution::find()
        .filter(
            sea_orm::Condition::any()
                .add(entity::pokemon_evolution::Column::FromPokemonId.eq(id))
                .add(entity::pokemon_evolution::Column::ToPokemonId.eq(id)),
        )
        .all(db)
        .await?
        .is_empty());

    // Neighbors survive untouched.
    assert!(entity::prelude::Pokemon::find_by_id(charmander.id)
        .one(db)
        .await?
        .is_some());
    assert!(entity::prelude::Pokemon::find_by_id(charizard.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a Pokemon that doesn't exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_pokemon() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PokemonRepository::new(db);
    assert!(!repo.delete(4242).await?);

    Ok(())
}
