use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicI32 = std::sync::atomic::AtomicI32::new(1);

/// Monotonically increasing value for unique test identifiers (slugs,
/// numbers, emails) across all factories.
pub fn next_id() -> i32 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a generation and a Pokemon belonging to it.
pub async fn create_pokemon_with_generation(
    db: &DatabaseConnection,
) -> Result<(entity::generation::Model, entity::pokemon::Model), DbErr> {
    let generation = crate::factory::generation::create_generation(db).await?;
    let pokemon = crate::factory::pokemon::create_pokemon(db, generation.id).await?;

    Ok((generation, pokemon))
}
