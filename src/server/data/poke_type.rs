use std::collections::{BTreeSet, HashMap};

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::poke_type::{
    CreateTypeParams, TypeRelation, TypeRelations, TypeWithRelations, UpdateTypeParams,
};

pub struct PokeTypeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PokeTypeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the type row and its outgoing relationship edges in one
    /// transaction. `slug` is the already-derived unique slug.
    pub async fn create(&self, params: CreateTypeParams, slug: String) -> Result<i32, DbErr> {
        let txn = self.db.begin().await?;
        let now = Utc::now();

        let created = entity::poke_type::ActiveModel {
            name: ActiveValue::Set(params.name),
            slug: ActiveValue::Set(slug),
            description: ActiveValue::Set(params.description),
            color_hex: ActiveValue::Set(params.color_hex),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        insert_relation_edges(&txn, created.id, &params.relations).await?;

        txn.commit().await?;

        Ok(created.id)
    }

    /// All types ordered by name, each with both directions of its edges.
    pub async fn get_all_with_relations(&self) -> Result<Vec<TypeWithRelations>, DbErr> {
        let types = entity::prelude::PokeType::find()
            .order_by_asc(entity::poke_type::Column::Name)
            .all(self.db)
            .await?;

        self.load_relations(types).await
    }

    pub async fn get_by_id_with_relations(
        &self,
        id: i32,
    ) -> Result<Option<TypeWithRelations>, DbErr> {
        let Some(poke_type) = entity::prelude::PokeType::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.load_relations(vec![poke_type]).await?.into_iter().next())
    }

    /// Ids from `ids` that do not exist. Used to report unknown references
    /// before writing anything.
    pub async fn find_missing(&self, ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let wanted: BTreeSet<i32> = ids.iter().copied().collect();
        let found: BTreeSet<i32> = entity::prelude::PokeType::find()
            .filter(entity::poke_type::Column::Id.is_in(wanted.clone()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|t| t.id)
            .collect();

        Ok(wanted.difference(&found).copied().collect())
    }

    /// Applies the scalar patch and, when `relations` is present, replaces
    /// every outgoing edge — all inside one transaction. Returns `false`
    /// when the id does not exist.
    pub async fn update(&self, params: UpdateTypeParams, slug: Option<String>) -> Result<bool, DbErr> {
        let Some(existing) = entity::prelude::PokeType::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(false);
        };

        let txn = self.db.begin().await?;

        let mut active: entity::poke_type::ActiveModel = existing.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(slug) = slug {
            active.slug = ActiveValue::Set(slug);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(color_hex) = params.color_hex {
            active.color_hex = ActiveValue::Set(color_hex);
        }
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(&txn).await?;

        if let Some(relations) = params.relations {
            entity::prelude::TypeRelationship::delete_many()
                .filter(entity::type_relationship::Column::SourceTypeId.eq(params.id))
                .exec(&txn)
                .await?;

            insert_relation_edges(&txn, params.id, &relations).await?;
        }

        txn.commit().await?;

        Ok(true)
    }

    /// Removes the type and every relationship edge touching it, in one
    /// transaction. Referential checks belong to the service layer.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::TypeRelationship::delete_many()
            .filter(
                Condition::any()
                    .add(entity::type_relationship::Column::SourceTypeId.eq(id))
                    .add(entity::type_relationship::Column::TargetTypeId.eq(id)),
            )
            .exec(&txn)
            .await?;

        let result = entity::prelude::PokeType::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Number of Pokemon holding this type in any slot.
    pub async fn count_pokemon_usage(&self, id: i32) -> Result<u64, DbErr> {
        entity::prelude::PokemonType::find()
            .filter(entity::pokemon_type::Column::TypeId.eq(id))
            .count(self.db)
            .await
    }

    /// Batch-loads both edge directions for the given types and joins the
    /// type on the far side of each edge.
    async fn load_relations(
        &self,
        types: Vec<entity::poke_type::Model>,
    ) -> Result<Vec<TypeWithRelations>, DbErr> {
        if types.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = types.iter().map(|t| t.id).collect();

        let outgoing = entity::prelude::TypeRelationship::find()
            .filter(entity::type_relationship::Column::SourceTypeId.is_in(ids.clone()))
            .order_by_asc(entity::type_relationship::Column::Id)
            .all(self.db)
            .await?;
        let incoming = entity::prelude::TypeRelationship::find()
            .filter(entity::type_relationship::Column::TargetTypeId.is_in(ids))
            .order_by_asc(entity::type_relationship::Column::Id)
            .all(self.db)
            .await?;

        // One query for every type on the far side of any edge.
        let mut far_ids: BTreeSet<i32> = BTreeSet::new();
        far_ids.extend(outgoing.iter().map(|e| e.target_type_id));
        far_ids.extend(incoming.iter().map(|e| e.source_type_id));

        let far_types: HashMap<i32, entity::poke_type::Model> = if far_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::PokeType::find()
                .filter(entity::poke_type::Column::Id.is_in(far_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|t| (t.id, t))
                .collect()
        };

        Ok(types
            .into_iter()
            .map(|poke_type| {
                let id = poke_type.id;
                TypeWithRelations {
                    poke_type,
                    outgoing: outgoing
                        .iter()
                        .filter(|e| e.source_type_id == id)
                        .map(|e| (e.clone(), far_types.get(&e.target_type_id).cloned()))
                        .collect(),
                    incoming: incoming
                        .iter()
                        .filter(|e| e.target_type_id == id)
                        .map(|e| (e.clone(), far_types.get(&e.source_type_id).cloned()))
                        .collect(),
                }
            })
            .collect())
    }
}

/// Inserts the outgoing edges for a type, skipping duplicate
/// (target, relation) pairs in the input.
async fn insert_relation_edges<C: ConnectionTrait>(
    conn: &C,
    source_type_id: i32,
    relations: &TypeRelations,
) -> Result<(), DbErr> {
    let mut seen: BTreeSet<(i32, &'static str)> = BTreeSet::new();

    for (target_type_id, relation) in relations.edges() {
        if !seen.insert((target_type_id, relation.as_str())) {
            continue;
        }

        entity::type_relationship::ActiveModel {
            source_type_id: ActiveValue::Set(source_type_id),
            target_type_id: ActiveValue::Set(target_type_id),
            relation: ActiveValue::Set(relation.as_str().to_string()),
            ..Default::default()
        }
        .insert(conn)
        .await?;
    }

    Ok(())
}

/// Target type ids of the given type's STRONG_AGAINST edges.
pub async fn strong_against_targets(
    db: &DatabaseConnection,
    source_type_id: i32,
) -> Result<Vec<i32>, DbErr> {
    let edges = entity::prelude::TypeRelationship::find()
        .filter(entity::type_relationship::Column::SourceTypeId.eq(source_type_id))
        .filter(entity::type_relationship::Column::Relation.eq(TypeRelation::StrongAgainst.as_str()))
        .all(db)
        .await?;

    Ok(edges.into_iter().map(|e| e.target_type_id).collect())
}

/// Source type ids of STRONG_AGAINST edges targeting the given type.
pub async fn strong_against_sources(
    db: &DatabaseConnection,
    target_type_id: i32,
) -> Result<Vec<i32>, DbErr> {
    let edges = entity::prelude::TypeRelationship::find()
        .filter(entity::type_relationship::Column::TargetTypeId.eq(target_type_id))
        .filter(entity::type_relationship::Column::Relation.eq(TypeRelation::StrongAgainst.as_str()))
        .all(db)
        .await?;

    Ok(edges.into_iter().map(|e| e.source_type_id).collect())
}
