use super::*;

/// Tests the listing order: generation number ascending, then index number.
///
/// Expected: rows sorted by (generation number, index number)
#[tokio::test]
async fn orders_by_generation_number_then_index() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let kanto = factory::generation::GenerationFactory::new(db)
        .number(1001)
        .build()
        .await?;
    let johto = factory::generation::GenerationFactory::new(db)
        .number(1002)
        .build()
        .await?;

    let totodile = factory::pokemon::PokemonFactory::new(db, johto.id)
        .index_number(10158)
        .build()
        .await?;
    let ivysaur = factory::pokemon::PokemonFactory::new(db, kanto.id)
        .index_number(10002)
        .build()
        .await?;
    let bulbasaur = factory::pokemon::PokemonFactory::new(db, kanto.id)
        .index_number(10001)
        .build()
        .await?;

    let repo = PokemonRepository::new(db);
    let (results, total) = repo.get_filtered_paginated(&list_params()).await?;

    assert_eq!(total, 3);
    let ids: Vec<i32> = results.iter().map(|r| r.pokemon.id).collect();
    assert_eq!(ids, vec![bulbasaur.id, ivysaur.id, totodile.id]);

    Ok(())
}

/// Tests the case-insensitive substring name filter.
///
/// Expected: only the matching Pokemon, regardless of case
#[tokio::test]
async fn filters_by_name_substring_case_insensitive() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let generation = factory::create_generation(db).await?;
    let charmander = factory::pokemon::PokemonFactory::new(db, generation.id)
        .name("Charmander")
        .build()
        .await?;
    factory::pokemon::PokemonFactory::new(db, generation.id)
        .name("Squirtle")
        .build()
        .await?;

    let repo = PokemonRepository::new(db);
    let (results, total) = repo
        .get_filtered_paginated(&ListPokemonParams {
            search: Some("CHARM".to_string()),
            ..list_params()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(results[0].pokemon.id, charmander.id);

    Ok(())
}

/// Tests the exact generation filter.
///
/// Expected: only Pokemon of the requested generation
#[tokio::test]
async fn filters_by_generation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let kanto = factory::create_generation(db).await?;
    let johto = factory::create_generation(db).await?;
    let pidgey = factory::create_pokemon(db, kanto.id).await?;
    factory::create_pokemon(db, johto.id).await?;

    let repo = PokemonRepository::new(db);
    let (results, total) = repo
        .get_filtered_paginated(&ListPokemonParams {
            generation_id: Some(kanto.id),
            ..list_params()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(results[0].pokemon.id, pidgey.id);

    Ok(())
}

/// Tests the type-membership filter.
///
/// Expected: only Pokemon holding the requested type
#[tokio::test]
async fn filters_by_type_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let generation = factory::create_generation(db).await?;
    let fire = factory::create_type(db).await?;
    let water = factory::create_type(db).await?;

    let repo = PokemonRepository::new(db);
    let charmander = repo
        .create(
            create_params("Charmander", 4, generation.id, vec![fire.id]),
            "charmander".to_string(),
            None,
        )
        .await?;
    repo.create(
        create_params("Squirtle", 7, generation.id, vec![water.id]),
        "squirtle".to_string(),
        None,
    )
    .await?;

    let (results, total) = repo
        .get_filtered_paginated(&ListPokemonParams {
            type_id: Some(fire.id),
            ..list_params()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(results[0].pokemon.id, charmander);

    Ok(())
}

/// Tests the weak-to filter: with Water STRONG_AGAINST Fire, asking for
/// Pokemon weak to Water must return the Fire holders.
///
/// Expected: Charmander is in the result set, Squirtle is not
#[tokio::test]
async fn weak_to_filter_returns_holders_of_targeted_types() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let kanto = factory::create_generation(db).await?;
    let fire = factory::create_type(db).await?;
    let water = factory::create_type(db).await?;
    add_strong_against_edge(db, water.id, fire.id).await?;

    let repo = PokemonRepository::new(db);
    let charmander = repo
        .create(
            create_params("Charmander", 4, kanto.id, vec![fire.id]),
            "charmander".to_string(),
            None,
        )
        .await?;
    repo.create(
        create_params("Squirtle", 7, kanto.id, vec![water.id]),
        "squirtle".to_string(),
        None,
    )
    .await?;

    let (results, total) = repo
        .get_filtered_paginated(&ListPokemonParams {
            weak_to_type_id: Some(water.id),
            ..list_params()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(results[0].pokemon.id, charmander);

    Ok(())
}

/// Tests the strong-against filter: with Water STRONG_AGAINST Fire, asking
/// for Pokemon strong against Fire must return the Water holders.
///
/// Expected: Squirtle is in the result set, Charmander is not
#[tokio::test]
async fn strong_against_filter_returns_holders_of_source_types() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let kanto = factory::create_generation(db).await?;
    let fire = factory::create_type(db).await?;
    let water = factory::create_type(db).await?;
    add_strong_against_edge(db, water.id, fire.id).await?;

    let repo = PokemonRepository::new(db);
    repo.create(
        create_params("Charmander", 4, kanto.id, vec![fire.id]),
        "charmander".to_string(),
        None,
    )
    .await?;
    let squirtle = repo
        .create(
            create_params("Squirtle", 7, kanto.id, vec![water.id]),
            "squirtle".to_string(),
            None,
        )
        .await?;

    let (results, total) = repo
        .get_filtered_paginated(&ListPokemonParams {
            strong_against_type_id: Some(fire.id),
            ..list_params()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(results[0].pokemon.id, squirtle);

    Ok(())
}

/// Tests that a filter resolving to no candidate types yields an empty page
/// without touching the main query.
///
/// Expected: empty result set with total 0
#[tokio::test]
async fn weak_to_filter_without_edges_yields_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let generation = factory::create_generation(db).await?;
    let normal = factory::create_type(db).await?;
    factory::create_pokemon(db, generation.id).await?;

    let repo = PokemonRepository::new(db);
    let (results, total) = repo
        .get_filtered_paginated(&ListPokemonParams {
            weak_to_type_id: Some(normal.id),
            ..list_params()
        })
        .await?;

    assert!(results.is_empty());
    assert_eq!(total, 0);

    Ok(())
}

/// Tests pagination math: page size bounds each page, total covers all rows.
///
/// Expected: two rows on page 1, one on page 2, total 3 on both
#[tokio::test]
async fn paginates_results() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let generation = factory::create_generation(db).await?;
    for _ in 0..3 {
        factory::create_pokemon(db, generation.id).await?;
    }

    let repo = PokemonRepository::new(db);

    let (page_one, total) = repo
        .get_filtered_paginated(&ListPokemonParams {
            page: 1,
            page_size: 2,
            ..list_params()
        })
        .await?;
    assert_eq!(total, 3);
    assert_eq!(page_one.len(), 2);

    let (page_two, total) = repo
        .get_filtered_paginated(&ListPokemonParams {
            page: 2,
            page_size: 2,
            ..list_params()
        })
        .await?;
    assert_eq!(total, 3);
    assert_eq!(page_two.len(), 1);

    Ok(())
}
