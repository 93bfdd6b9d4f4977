use super::*;

/// Tests creating a user and looking it up by id and email.
///
/// Expected: Ok with the stored role parsed into the domain enum
#[tokio::test]
async fn creates_and_finds_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo
        .create(CreateUserParams {
            email: "oak@pallet.town".to_string(),
            name: "Professor Oak".to_string(),
            role: UserRole::Admin,
        })
        .await?;

    assert_eq!(created.role, UserRole::Admin);

    let by_id = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(by_id.email, "oak@pallet.town");

    let by_email = repo.find_by_email("oak@pallet.town").await?.unwrap();
    assert_eq!(by_email.id, created.id);

    assert!(repo.find_by_email("elm@newbark.town").await?.is_none());

    Ok(())
}
