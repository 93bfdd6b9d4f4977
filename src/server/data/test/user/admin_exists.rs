use super::*;

/// Tests the admin-existence check that gates the bootstrap code.
///
/// Expected: false with only editors, true once an admin exists
#[tokio::test]
async fn reports_admin_presence() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    assert!(!repo.admin_exists().await?);

    factory::create_user(db).await?;
    assert!(!repo.admin_exists().await?);

    factory::create_admin(db).await?;
    assert!(repo.admin_exists().await?);

    Ok(())
}
