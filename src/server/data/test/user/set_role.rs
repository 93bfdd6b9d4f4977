use super::*;

/// Tests promoting an editor to admin.
///
/// Expected: Ok(Some) with the new role persisted
#[tokio::test]
async fn changes_the_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo.set_role(user.id, UserRole::Admin).await?.unwrap();

    assert_eq!(updated.role, UserRole::Admin);
    assert_eq!(repo.find_by_id(user.id).await?.unwrap().role, UserRole::Admin);

    Ok(())
}

/// Tests changing the role of a user that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    assert!(repo.set_role(4242, UserRole::Editor).await?.is_none());

    Ok(())
}
