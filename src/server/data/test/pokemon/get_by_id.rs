use super::*;

/// Tests that the assembled view lists types sorted by slot, contiguous from
/// slot 1.
///
/// Expected: slots [1, 2] in payload order
#[tokio::test]
async fn view_types_are_slot_sorted_and_contiguous() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let generation = factory::create_generation(db).await?;
    let water = factory::create_type(db).await?;
    let ice = factory::create_type(db).await?;

    let repo = PokemonRepository::new(db);
    let id = repo
        .create(
            create_params("Lapras", 131, generation.id, vec![water.id, ice.id]),
            "lapras".to_string(),
            None,
        )
        .await?;

    let view = Pokemon::from_related(repo.get_by_id(id).await?.unwrap())?;

    let slots: Vec<i32> = view.types.iter().map(|t| t.slot).collect();
    assert_eq!(slots, vec![1, 2]);
    let ids: Vec<i32> = view.types.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![water.id, ice.id]);

    Ok(())
}

/// Tests the base-stat round trip: one provided stat, five explicit nulls.
///
/// Expected: hp is 45 and every other stat is None in the view
#[tokio::test]
async fn view_base_stats_default_to_null_individually() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let generation = factory::create_generation(db).await?;
    let fire = factory::create_type(db).await?;

    let mut params = create_params("Charmander", 4, generation.id, vec![fire.id]);
    params.base_stats.hp = Some(45);

    let repo = PokemonRepository::new(db);
    let id = repo.create(params, "charmander".to_string(), None).await?;

    let view = Pokemon::from_related(repo.get_by_id(id).await?.unwrap())?;

    assert_eq!(view.base_stats.hp, Some(45));
    assert_eq!(view.base_stats.attack, None);
    assert_eq!(view.base_stats.defense, None);
    assert_eq!(view.base_stats.sp_attack, None);
    assert_eq!(view.base_stats.sp_defense, None);
    assert_eq!(view.base_stats.speed, None);

    Ok(())
}

/// Tests that the view resolves both evolution directions.
///
/// Expected: pre-evolution and next-evolution references in the view
#[tokio::test]
async fn view_includes_evolution_chain() -> Result<(), DbErr> {
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
    params.pre_evolution_id = Some(charmander.id);
    params.next_evolution_ids = vec![charizard.id];

    let repo = PokemonRepository::new(db);
    let id = repo.create(params, "charmeleon".to_string(), None).await?;

    let view = Pokemon::from_related(repo.get_by_id(id).await?.unwrap())?;

    assert_eq!(view.pre_evolution.unwrap().id, charmander.id);
    let evolution_ids: Vec<i32> = view.evolutions.iter().map(|e| e.id).collect();
    assert_eq!(evolution_ids, vec![charizard.id]);
    assert_eq!(view.generation.unwrap().id, generation.id);

    Ok(())
}

/// Tests fetching a Pokemon that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_pokemon() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PokemonRepository::new(db);
    assert!(repo.get_by_id(4242).await?.is_none());

    Ok(())
}
