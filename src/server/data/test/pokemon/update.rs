use super::*;

/// Tests that a supplied type list replaces the previous one and its payload
/// order becomes the new slot order, regardless of prior state.
///
/// Expected: exactly the new types, in the new order
#[tokio::test]
async fn replaces_type_list_in_payload_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let generation = factory::create_generation(db).await?;
    let grass = factory::create_type(db).await?;
    let poison = factory::create_type(db).await?;

    let repo = PokemonRepository::new(db);
    let id = repo
        .create(
            create_params("Bulbasaur", 1, generation.id, vec![grass.id]),
            "bulbasaur".to_string(),
            None,
        )
        .await?;

    repo.update(
        UpdatePokemonParams {
            type_ids: Some(vec![poison.id, grass.id]),
            ..empty_update(id)
        },
        None,
        None,
    )
    .await?;

    let view = Pokemon::from_related(repo.get_by_id(id).await?.unwrap())?;
    let assigned: Vec<(i32, i32)> = view.types.iter().map(|t| (t.slot, t.id)).collect();
    assert_eq!(assigned, vec![(1, poison.id), (2, grass.id)]);

    Ok(())
}

/// Tests that an update with nothing provided changes nothing.
///
/// Expected: name, types and stats untouched
#[tokio::test]
async fn absent_fields_leave_everything_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let generation = factory::create_generation(db).await?;
    let fire = factory::create_type(db).await?;

    let mut params = create_params("Charmander", 4, generation.id, vec![fire.id]);
    params.base_stats.hp = Some(39);

    let repo = PokemonRepository::new(db);
    let id = repo.create(params, "charmander".to_string(), None).await?;

    repo.update(empty_update(id), None, None).await?;

    let view = Pokemon::from_related(repo.get_by_id(id).await?.unwrap())?;
    assert_eq!(view.name, "Charmander");
    assert_eq!(view.base_stats.hp, Some(39));
    assert_eq!(view.types.len(), 1);

    Ok(())
}

/// Tests the per-field patch semantics for nullable scalars.
///
/// Expected: patched fields change, explicit null clears, the rest stay
#[tokio::test]
async fn explicit_null_clears_nullable_scalars() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let generation = factory::create_generation(db).await?;
    let fire = factory::create_type(db).await?;

    let mut params = create_params("Charmander", 4, generation.id, vec![fire.id]);
    params.description = Some("A fire lizard".to_string());
    params.base_stats.hp = Some(39);
    params.base_stats.speed = Some(65);

    let repo = PokemonRepository::new(db);
    let id = repo.create(params, "charmander".to_string(), None).await?;

    repo.update(
        UpdatePokemonParams {
            description: Some(None),
            base_stats: BaseStatsPatch {
                hp: Some(None),
                attack: Some(Some(52)),
                ..Default::default()
            },
            ..empty_update(id)
        },
        None,
        None,
    )
    .await?;

    let stored = entity::prelude::Pokemon::find_by_id(id).one(db).await?.unwrap();
    assert_eq!(stored.description, None);
    assert_eq!(stored.base_hp, None);
    assert_eq!(stored.base_attack, Some(52));
    // Untouched stat survives the patch.
    assert_eq!(stored.base_speed, Some(65));

    Ok(())
}

/// Tests that a supplied media list replaces every stored row and re-derives
/// the primary pointers.
///
/// Expected: old rows gone, pointers at the new rows
#[tokio::test]
async fn media_replacement_is_wholesale() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let generation = factory::create_generation(db).await?;
    let electric = factory::create_type(db).await?;

    let mut params = create_params("Pikachu", 25, generation.id, vec![electric.id]);
    params.media = vec![media_input(
        MediaKind::Image,
        "https://cdn.example/old.png",
        true,
    )];

    let repo = PokemonRepository::new(db);
    let id = repo.create(params, "pikachu".to_string(), None).await?;

    repo.update(
        UpdatePokemonParams {
            media: Some(vec![
                media_input(MediaKind::Image, "https://cdn.example/new.png", false),
                media_input(MediaKind::Audio, "https://cdn.example/cry.ogg", false),
            ]),
            ..empty_update(id)
        },
        None,
        None,
    )
    .await?;

    let media = entity::prelude::PokemonMedia::find()
        .filter(entity::pokemon_media::Column::PokemonId.eq(id))
        .all(db)
        .await?;
    assert_eq!(media.len(), 2);
    assert!(media.iter().all(|m| m.url != "https://cdn.example/old.png"));

    let new_image = media
        .iter()
        .find(|m| m.url == "https://cdn.example/new.png")
        .unwrap();
    let cry = media
        .iter()
        .find(|m| m.url == "https://cdn.example/cry.ogg")
        .unwrap();

    let stored = entity::prelude::Pokemon::find_by_id(id).one(db).await?.unwrap();
    assert_eq!(stored.primary_image_media_id, Some(new_image.id));
    assert_eq!(stored.primary_audio_media_id, Some(cry.id));

    Ok(())
}

/// Tests that an empty media list clears the rows and both pointers.
///
/// Expected: no media rows, both pointers NULL
#[tokio::test]
async fn empty_media_list_clears_rows_and_pointers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let generation = factory::create_generation(db).await?;
    let electric = factory::create_type(db).await?;

    let mut params = create_params("Pikachu", 25, generation.id, vec![electric.id]);
    params.media = vec![media_input(
        MediaKind::Image,
        "https://cdn.example/front.png",
        true,
    )];

    let repo = PokemonRepository::new(db);
    let id = repo.create(params, "pikachu".to_string(), None).await?;

    repo.update(
        UpdatePokemonParams {
            media: Some(vec![]),
            ..empty_update(id)
        },
        None,
        None,
    )
    .await?;

    let media_count = entity::prelude::PokemonMedia::find()
        .filter(entity::pokemon_media::Column::PokemonId.eq(id))
        .all(db)
        .await?;
    assert!(media_count.is_empty());

    let stored = entity::prelude::Pokemon::find_by_id(id).one(db).await?.unwrap();
    assert_eq!(stored.primary_image_media_id, None);
    assert_eq!(stored.primary_audio_media_id, None);

    Ok(())
}

/// Tests that each evolution direction is replaced independently.
///
/// Expected: updating outgoing edges keeps the incoming edge, and clearing
/// the pre-evolution keeps the outgoing edges
#[tokio::test]
async fn evolution_directions_update_independently() -> Result<(), DbErr> {
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
    let other = factory::create_pokemon(db, generation.id).await?;

    let mut params = create_params("Charmeleon", 5, generation.id, vec![fire.id]);
    params.pre_evolution_id = Some(charmander.id);
    params.next_evolution_ids = vec![charizard.id];

    let repo = PokemonRepository::new(db);
    let id = repo.create(params, "charmeleon".to_string(), None).await?;

    // Replace only the outgoing direction.
    repo.update(
        UpdatePokemonParams {
            next_evolution_ids: Some(vec![other.id]),
            ..empty_update(id)
        },
        None,
        None,
    )
    .await?;

    let view = Pokemon::from_related(repo.get_by_id(id).await?.unwrap())?;
    assert_eq!(view.pre_evolution.as_ref().unwrap().id, charmander.id);
    let outgoing: Vec<i32> = view.evolutions.iter().map(|e| e.id).collect();
    assert_eq!(outgoing, vec![other.id]);

    // Clear only the incoming direction.
    repo.update(
        UpdatePokemonParams {
            pre_evolution: Some(None),
            ..empty_update(id)
        },
        None,
        None,
    )
    .await?;

    let view = Pokemon::from_related(repo.get_by_id(id).await?.unwrap())?;
    assert!(view.pre_evolution.is_none());
    let outgoing: Vec<i32> = view.evolutions.iter().map(|e| e.id).collect();
    assert_eq!(outgoing, vec![other.id]);

    Ok(())
}

/// Tests updating a Pokemon that doesn't exist.
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
    assert!(!repo.update(empty_update(4242), None, None).await?);

    Ok(())
}
