use super::*;

/// Tests user pagination ordered by email.
///
/// Expected: pages bounded by the page size, total covering all rows
#[tokio::test]
async fn paginates_users_ordered_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_pokedex_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("c@example.com")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .email("a@example.com")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .email("b@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let (page_one, total) = repo.get_all_paginated(0, 2).await?;
    assert_eq!(total, 3);
    let emails: Vec<&str> = page_one.iter().map(|u| u.email.as_str()).collect();
    assert_eq!(emails, vec!["a@example.com", "b@example.com"]);

    let (page_two, _) = repo.get_all_paginated(1, 2).await?;
    assert_eq!(page_two.len(), 1);
    assert_eq!(page_two[0].email, "c@example.com");

    Ok(())
}
