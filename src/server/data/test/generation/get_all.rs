use super::*;

/// Tests that the listing is ordered by the ordinal number, not insertion
/// order.
///
/// Expected: Ok with generations sorted by number ascending
#[tokio::test]
async fn lists_generations_ordered_by_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::generation::GenerationFactory::new(db)
        .name("Hoenn")
        .number(300)
        .build()
        .await?;
    factory::generation::GenerationFactory::new(db)
        .name("Kanto")
        .number(100)
        .build()
        .await?;
    factory::generation::GenerationFactory::new(db)
        .name("Johto")
        .number(200)
        .build()
        .await?;

    let repo = GenerationRepository::new(db);
    let generations = repo.get_all().await?;

    let numbers: Vec<i32> = generations.iter().map(|g| g.number).collect();
    assert_eq!(numbers, vec![100, 200, 300]);

    Ok(())
}
