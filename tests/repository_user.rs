use chrono::NaiveDate;
use users_api::domain::entities::NewUser;
use users_api::domain::repositories::UserRepository;
use users_api::error::AppError;
use users_api::infrastructure::persistence::InMemoryUserRepository;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_user(email: &str, birth_date: NaiveDate) -> NewUser {
    NewUser {
        email: email.to_string(),
        first_name: "John".to_string(),
        last_name: "Tray".to_string(),
        birth_date,
        address: None,
        phone_number: None,
    }
}

#[tokio::test]
async fn test_insert_assigns_sequential_ids() {
    let repo = InMemoryUserRepository::new();

    let first = repo
        .insert(new_user("a@mail.com", date(1990, 1, 1)))
        .await
        .unwrap();
    let second = repo
        .insert(new_user("b@mail.com", date(1991, 1, 1)))
        .await
        .unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(repo.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_find_by_id() {
    let repo = InMemoryUserRepository::new();

    let inserted = repo
        .insert(new_user("a@mail.com", date(1990, 1, 1)))
        .await
        .unwrap();

    let found = repo.find_by_id(inserted.id).await.unwrap();
    assert_eq!(found, Some(inserted));

    let missing = repo.find_by_id(99).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_update_replaces_stored_record() {
    let repo = InMemoryUserRepository::new();

    let mut user = repo
        .insert(new_user("a@mail.com", date(1990, 1, 1)))
        .await
        .unwrap();
    user.first_name = "Jane".to_string();

    let updated = repo.update(user.clone()).await.unwrap();
    assert_eq!(updated.first_name, "Jane");

    let stored = repo.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(stored.first_name, "Jane");
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let repo = InMemoryUserRepository::new();

    let mut user = repo
        .insert(new_user("a@mail.com", date(1990, 1, 1)))
        .await
        .unwrap();
    user.id = 42;

    let result = repo.update(user).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
}

#[tokio::test]
async fn test_delete() {
    let repo = InMemoryUserRepository::new();

    let user = repo
        .insert(new_user("a@mail.com", date(1990, 1, 1)))
        .await
        .unwrap();

    assert!(repo.delete(user.id).await.unwrap());
    assert!(!repo.delete(user.id).await.unwrap());
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_range_query_is_inclusive_and_ordered() {
    let repo = InMemoryUserRepository::new();

    repo.insert(new_user("a@mail.com", date(1990, 5, 10)))
        .await
        .unwrap();
    repo.insert(new_user("b@mail.com", date(1995, 8, 20)))
        .await
        .unwrap();
    repo.insert(new_user("c@mail.com", date(2000, 1, 1)))
        .await
        .unwrap();

    let matches = repo
        .find_by_birth_date_range(date(1990, 5, 10), date(1995, 8, 20))
        .await
        .unwrap();

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].email, "a@mail.com");
    assert_eq!(matches[1].email, "b@mail.com");
}

#[tokio::test]
async fn test_range_query_no_matches() {
    let repo = InMemoryUserRepository::new();

    repo.insert(new_user("a@mail.com", date(1990, 5, 10)))
        .await
        .unwrap();

    let matches = repo
        .find_by_birth_date_range(date(2010, 1, 1), date(2020, 1, 1))
        .await
        .unwrap();

    assert!(matches.is_empty());
}
