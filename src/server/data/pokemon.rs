use std::collections::{BTreeSet, HashMap};

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    data::poke_type::{strong_against_sources, strong_against_targets},
    model::pokemon::{
        select_primary_media, CreatePokemonParams, ListPokemonParams, MediaInput, PokemonRelated,
        UpdatePokemonParams,
    },
};

pub struct PokemonRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PokemonRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the Pokemon row with its type slots, media rows (including the
    /// primary pointers) and evolution edges in one transaction. `slug` is
    /// the already-derived unique slug.
    pub async fn create(
        &self,
        params: CreatePokemonParams,
        slug: String,
        audit_user_id: Option<i32>,
    ) -> Result<i32, DbErr> {
        let txn = self.db.begin().await?;
        let now = Utc::now();

        let created = entity::pokemon::ActiveModel {
            name: ActiveValue::Set(params.name),
            slug: ActiveValue::Set(slug),
            index_number: ActiveValue::Set(params.index_number),
            generation_id: ActiveValue::Set(params.generation_id),
            classification: ActiveValue::Set(params.classification),
            description: ActiveValue::Set(params.description),
            height_meters: ActiveValue::Set(params.height_meters),
            weight_kilograms: ActiveValue::Set(params.weight_kilograms),
            is_legendary: ActiveValue::Set(params.is_legendary),
            is_mythical: ActiveValue::Set(params.is_mythical),
            base_hp: ActiveValue::Set(params.base_stats.hp),
            base_attack: ActiveValue::Set(params.base_stats.attack),
            base_defense: ActiveValue::Set(params.base_stats.defense),
            base_sp_attack: ActiveValue::Set(params.base_stats.sp_attack),
            base_sp_defense: ActiveValue::Set(params.base_stats.sp_defense),
            base_speed: ActiveValue::Set(params.base_stats.speed),
            created_by_id: ActiveValue::Set(audit_user_id),
            updated_by_id: ActiveValue::Set(audit_user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        insert_type_slots(&txn, created.id, &params.type_ids).await?;

        if !params.media.is_empty() {
            let (primary_image, primary_audio) =
                insert_media(&txn, created.id, &params.media).await?;
            set_primary_pointers(&txn, created.id, primary_image, primary_audio).await?;
        }

        if let Some(pre_evolution_id) = params.pre_evolution_id {
            insert_evolution_edge(&txn, pre_evolution_id, created.id).await?;
        }
        for target_id in &params.next_evolution_ids {
            insert_evolution_edge(&txn, created.id, *target_id).await?;
        }

        txn.commit().await?;

        Ok(created.id)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<PokemonRelated>, DbErr> {
        let Some(row) = entity::prelude::Pokemon::find_by_id(id)
            .find_also_related(entity::prelude::Generation)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.load_related(vec![row]).await?.into_iter().next())
    }

    /// Ids from `ids` that do not exist.
    pub async fn find_missing(&self, ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let wanted: BTreeSet<i32> = ids.iter().copied().collect();
        let found: BTreeSet<i32> = entity::prelude::Pokemon::find()
            .filter(entity::pokemon::Column::Id.is_in(wanted.clone()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|p| p.id)
            .collect();

        Ok(wanted.difference(&found).copied().collect())
    }

    /// Pokemon among `target_ids` that already have a pre-evolution edge from
    /// a Pokemon other than `exclude_source`. Creating another incoming edge
    /// for them would violate the at-most-one-pre-evolution constraint.
    pub async fn evolution_conflicts(
        &self,
        target_ids: &[i32],
        exclude_source: Option<i32>,
    ) -> Result<Vec<i32>, DbErr> {
        if target_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut query = entity::prelude::PokemonEvolution::find()
            .filter(entity::pokemon_evolution::Column::ToPokemonId.is_in(target_ids.to_vec()));
        if let Some(source_id) = exclude_source {
            query =
                query.filter(entity::pokemon_evolution::Column::FromPokemonId.ne(source_id));
        }

        let edges = query.all(self.db).await?;

        Ok(edges.into_iter().map(|e| e.to_pokemon_id).collect())
    }

    /// Filtered, paginated listing ordered by generation number then index
    /// number. Type-membership filters are resolved to Pokemon id sets first
    /// and intersected; an empty intersection short-circuits to no results.
    pub async fn get_filtered_paginated(
        &self,
        params: &ListPokemonParams,
    ) -> Result<(Vec<PokemonRelated>, u64), DbErr> {
        let mut allowed: Option<BTreeSet<i32>> = None;

        if let Some(type_id) = params.type_id {
            let ids = self.pokemon_ids_with_types(&[type_id]).await?;
            allowed = Some(intersect(allowed, ids));
        }
        if let Some(weak_to) = params.weak_to_type_id {
            let holder_types = strong_against_targets(self.db, weak_to).await?;
            let ids = self.pokemon_ids_with_types(&holder_types).await?;
            allowed = Some(intersect(allowed, ids));
        }
        if let Some(strong_against) = params.strong_against_type_id {
            let holder_types = strong_against_sources(self.db, strong_against).await?;
            let ids = self.pokemon_ids_with_types(&holder_types).await?;
            allowed = Some(intersect(allowed, ids));
        }

        if let Some(set) = &allowed {
            if set.is_empty() {
                return Ok((Vec::new(), 0));
            }
        }

        let mut query = entity::prelude::Pokemon::find()
            .find_also_related(entity::prelude::Generation);
        if let Some(search) = &params.search {
            query = query.filter(entity::pokemon::Column::Name.contains(search));
        }
        if let Some(generation_id) = params.generation_id {
            query = query.filter(entity::pokemon::Column::GenerationId.eq(generation_id));
        }
        if let Some(set) = allowed {
            query = query.filter(entity::pokemon::Column::Id.is_in(set));
        }

        let paginator = query
            .order_by_asc(entity::generation::Column::Number)
            .order_by_asc(entity::pokemon::Column::IndexNumber)
            .paginate(self.db, params.page_size);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(params.page.saturating_sub(1)).await?;

        let related = self.load_related(rows).await?;

        Ok((related, total))
    }

    /// Applies the scalar patch and replaces whichever collections are
    /// present, all inside one transaction. Returns `false` when the id does
    /// not exist.
    pub async fn update(
        &self,
        params: UpdatePokemonParams,
        slug: Option<String>,
        audit_user_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let Some(existing) = entity::prelude::Pokemon::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(false);
        };

        let id = params.id;
        let txn = self.db.begin().await?;

        let mut active: entity::pokemon::ActiveModel = existing.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(slug) = slug {
            active.slug = ActiveValue::Set(slug);
        }
        if let Some(index_number) = params.index_number {
            active.index_number = ActiveValue::Set(index_number);
        }
        if let Some(generation_id) = params.generation_id {
            active.generation_id = ActiveValue::Set(generation_id);
        }
        if let Some(classification) = params.classification {
            active.classification = ActiveValue::Set(classification);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(height_meters) = params.height_meters {
            active.height_meters = ActiveValue::Set(height_meters);
        }
        if let Some(weight_kilograms) = params.weight_kilograms {
            active.weight_kilograms = ActiveValue::Set(weight_kilograms);
        }
        if let Some(is_legendary) = params.is_legendary {
            active.is_legendary = ActiveValue::Set(is_legendary);
        }
        if let Some(is_mythical) = params.is_mythical {
            active.is_mythical = ActiveValue::Set(is_mythical);
        }
        if let Some(hp) = params.base_stats.hp {
            active.base_hp = ActiveValue::Set(hp);
        }
        if let Some(attack) = params.base_stats.attack {
            active.base_attack = ActiveValue::Set(attack);
        }
        if let Some(defense) = params.base_stats.defense {
            active.base_defense = ActiveValue::Set(defense);
        }
        if let Some(sp_attack) = params.base_stats.sp_attack {
            active.base_sp_attack = ActiveValue::Set(sp_attack);
        }
        if let Some(sp_defense) = params.base_stats.sp_defense {
            active.base_sp_defense = ActiveValue::Set(sp_defense);
        }
        if let Some(speed) = params.base_stats.speed {
            active.base_speed = ActiveValue::Set(speed);
        }
        active.updated_by_id = ActiveValue::Set(audit_user_id);
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(&txn).await?;

        if let Some(type_ids) = params.type_ids {
            entity::prelude::PokemonType::delete_many()
                .filter(entity::pokemon_type::Column::PokemonId.eq(id))
                .exec(&txn)
                .await?;
            insert_type_slots(&txn, id, &type_ids).await?;
        }

        if let Some(media) = params.media {
            entity::prelude::PokemonMedia::delete_many()
                .filter(entity::pokemon_media::Column::PokemonId.eq(id))
                .exec(&txn)
                .await?;
            let (primary_image, primary_audio) = insert_media(&txn, id, &media).await?;
            set_primary_pointers(&txn, id, primary_image, primary_audio).await?;
        }

        if let Some(pre_evolution) = params.pre_evolution {
            entity::prelude::PokemonEvolution::delete_many()
                .filter(entity::pokemon_evolution::Column::ToPokemonId.eq(id))
                .exec(&txn)
                .await?;
            if let Some(pre_evolution_id) = pre_evolution {
                insert_evolution_edge(&txn, pre_evolution_id, id).await?;
            }
        }

        if let Some(next_evolution_ids) = params.next_evolution_ids {
            entity::prelude::PokemonEvolution::delete_many()
                .filter(entity::pokemon_evolution::Column::FromPokemonId.eq(id))
                .exec(&txn)
                .await?;
            for target_id in next_evolution_ids {
                insert_evolution_edge(&txn, id, target_id).await?;
            }
        }

        txn.commit().await?;

        Ok(true)
    }

    /// Cascades the Pokemon's own media, type and evolution rows before
    /// removing the row itself, all in one transaction.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::PokemonMedia::delete_many()
            .filter(entity::pokemon_media::Column::PokemonId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::PokemonType::delete_many()
            .filter(entity::pokemon_type::Column::PokemonId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::PokemonEvolution::delete_many()
            .filter(
                Condition::any()
                    .add(entity::pokemon_evolution::Column::FromPokemonId.eq(id))
                    .add(entity::pokemon_evolution::Column::ToPokemonId.eq(id)),
            )
            .exec(&txn)
            .await?;

        let result = entity::prelude::Pokemon::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Distinct ids of Pokemon holding any of the given types.
    async fn pokemon_ids_with_types(&self, type_ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if type_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: BTreeSet<i32> = entity::prelude::PokemonType::find()
            .filter(entity::pokemon_type::Column::TypeId.is_in(type_ids.to_vec()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|row| row.pokemon_id)
            .collect();

        Ok(ids.into_iter().collect())
    }

    /// Batch-loads type slots, media and both evolution directions for a page
    /// of Pokemon rows.
    async fn load_related(
        &self,
        rows: Vec<(entity::pokemon::Model, Option<entity::generation::Model>)>,
    ) -> Result<Vec<PokemonRelated>, DbErr> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = rows.iter().map(|(p, _)| p.id).collect();

        let slots = entity::prelude::PokemonType::find()
            .filter(entity::pokemon_type::Column::PokemonId.is_in(ids.clone()))
            .all(self.db)
            .await?;

        let type_ids: BTreeSet<i32> = slots.iter().map(|s| s.type_id).collect();
        let types: HashMap<i32, entity::poke_type::Model> = if type_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::PokeType::find()
                .filter(entity::poke_type::Column::Id.is_in(type_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|t| (t.id, t))
                .collect()
        };

        let media = entity::prelude::PokemonMedia::find()
            .filter(entity::pokemon_media::Column::PokemonId.is_in(ids.clone()))
            .order_by_asc(entity::pokemon_media::Column::Id)
            .all(self.db)
            .await?;

        let incoming = entity::prelude::PokemonEvolution::find()
            .filter(entity::pokemon_evolution::Column::ToPokemonId.is_in(ids.clone()))
            .all(self.db)
            .await?;
        let outgoing = entity::prelude::PokemonEvolution::find()
            .filter(entity::pokemon_evolution::Column::FromPokemonId.is_in(ids))
            .all(self.db)
            .await?;

        // One query for every Pokemon on the far side of any edge.
        let mut neighbor_ids: BTreeSet<i32> = BTreeSet::new();
        neighbor_ids.extend(incoming.iter().map(|e| e.from_pokemon_id));
        neighbor_ids.extend(outgoing.iter().map(|e| e.to_pokemon_id));

        let neighbors: HashMap<i32, entity::pokemon::Model> = if neighbor_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Pokemon::find()
                .filter(entity::pokemon::Column::Id.is_in(neighbor_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|p| (p.id, p))
                .collect()
        };

        Ok(rows
            .into_iter()
            .map(|(pokemon, generation)| {
                let id = pokemon.id;
                PokemonRelated {
                    pokemon,
                    generation,
                    types: slots
                        .iter()
                        .filter(|s| s.pokemon_id == id)
                        .map(|s| (s.clone(), types.get(&s.type_id).cloned()))
                        .collect(),
                    media: media
                        .iter()
                        .filter(|m| m.pokemon_id == id)
                        .cloned()
                        .collect(),
                    incoming: incoming
                        .iter()
                        .filter(|e| e.to_pokemon_id == id)
                        .map(|e| (e.clone(), neighbors.get(&e.from_pokemon_id).cloned()))
                        .collect(),
                    outgoing: outgoing
                        .iter()
                        .filter(|e| e.from_pokemon_id == id)
                        .map(|e| (e.clone(), neighbors.get(&e.to_pokemon_id).cloned()))
                        .collect(),
                }
            })
            .collect())
    }
}

fn intersect(allowed: Option<BTreeSet<i32>>, ids: Vec<i32>) -> BTreeSet<i32> {
    let set: BTreeSet<i32> = ids.into_iter().collect();
    match allowed {
        None => set,
        Some(prev) => prev.intersection(&set).copied().collect(),
    }
}

/// Inserts slot rows in payload order; slots are re-derived 1-based on every
/// replace.
async fn insert_type_slots<C: ConnectionTrait>(
    conn: &C,
    pokemon_id: i32,
    type_ids: &[i32],
) -> Result<(), DbErr> {
    for (index, type_id) in type_ids.iter().enumerate() {
        entity::pokemon_type::ActiveModel {
            pokemon_id: ActiveValue::Set(pokemon_id),
            type_id: ActiveValue::Set(*type_id),
            slot: ActiveValue::Set(index as i32 + 1),
            ..Default::default()
        }
        .insert(conn)
        .await?;
    }

    Ok(())
}

/// Inserts media rows in payload order and returns the row ids chosen as
/// primary image and primary audio by the deterministic reducer.
async fn insert_media<C: ConnectionTrait>(
    conn: &C,
    pokemon_id: i32,
    media: &[MediaInput],
) -> Result<(Option<i32>, Option<i32>), DbErr> {
    let mut inserted_ids = Vec::with_capacity(media.len());

    for item in media {
        let row = entity::pokemon_media::ActiveModel {
            pokemon_id: ActiveValue::Set(pokemon_id),
            kind: ActiveValue::Set(item.kind.as_str().to_string()),
            url: ActiveValue::Set(item.url.clone()),
            title: ActiveValue::Set(item.title.clone()),
            is_primary: ActiveValue::Set(item.is_primary),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(conn)
        .await?;

        inserted_ids.push(row.id);
    }

    let selection = select_primary_media(media);

    Ok((
        selection.image.map(|index| inserted_ids[index]),
        selection.audio.map(|index| inserted_ids[index]),
    ))
}

async fn set_primary_pointers<C: ConnectionTrait>(
    conn: &C,
    pokemon_id: i32,
    primary_image: Option<i32>,
    primary_audio: Option<i32>,
) -> Result<(), DbErr> {
    entity::pokemon::ActiveModel {
        id: ActiveValue::Set(pokemon_id),
        primary_image_media_id: ActiveValue::Set(primary_image),
        primary_audio_media_id: ActiveValue::Set(primary_audio),
        ..Default::default()
    }
    .update(conn)
    .await?;

    Ok(())
}

async fn insert_evolution_edge<C: ConnectionTrait>(
    conn: &C,
    from_pokemon_id: i32,
    to_pokemon_id: i32,
) -> Result<(), DbErr> {
    entity::pokemon_evolution::ActiveModel {
        from_pokemon_id: ActiveValue::Set(from_pokemon_id),
        to_pokemon_id: ActiveValue::Set(to_pokemon_id),
        ..Default::default()
    }
    .insert(conn)
    .await?;

    Ok(())
}
