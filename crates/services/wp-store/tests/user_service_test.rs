//! User service unit tests.

use std::sync::Arc;

use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use mockall::predicate::eq;

use common::AppError;
use domain::{legacy_hash, NewUser, UpdateUser, User};
use wp_store_lib::repository::{MockUserRepository, Page, PageParams};
use wp_store_lib::service::{UserManager, UserService};

fn create_test_user(id: u64, password_hash: &str) -> User {
    User {
        id,
        login: "admin".to_string(),
        password_hash: password_hash.to_string(),
        nicename: "admin".to_string(),
        email: "admin@example.com".to_string(),
        url: String::new(),
        registered: NaiveDate::from_ymd_opt(2008, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap(),
        activation_key: String::new(),
        status: 0,
        display_name: "Admin".to_string(),
    }
}

fn from_new(id: u64, new_user: NewUser) -> User {
    User {
        id,
        login: new_user.login.clone(),
        nicename: new_user.nicename(),
        password_hash: new_user.password_hash,
        email: new_user.email,
        url: new_user.url,
        registered: new_user.registered.unwrap_or(NaiveDateTime::MIN),
        activation_key: String::new(),
        status: 0,
        display_name: new_user.display_name,
    }
}

fn new_user(registered: Option<NaiveDateTime>) -> NewUser {
    NewUser {
        login: "ada".to_string(),
        password_hash: legacy_hash("secret"),
        email: "ada@example.com".to_string(),
        url: String::new(),
        display_name: "Ada".to_string(),
        registered,
    }
}

#[tokio::test]
async fn test_create_user_stamps_registration() {
    let mut repo = MockUserRepository::new();
    repo.expect_create()
        .withf(|u: &NewUser| u.registered.is_some())
        .returning(|u| Ok(from_new(2, u)));

    let service = UserManager::new(Arc::new(repo));
    let user = service.create_user(new_user(None)).await.unwrap();

    let now = Local::now().naive_local();
    assert!(user.registered <= now);
    assert!(user.registered > now - Duration::minutes(1));
}

#[tokio::test]
async fn test_create_user_keeps_given_registration() {
    let given = NaiveDate::from_ymd_opt(2005, 6, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();

    let mut repo = MockUserRepository::new();
    repo.expect_create().returning(|u| Ok(from_new(3, u)));

    let service = UserManager::new(Arc::new(repo));
    let user = service.create_user(new_user(Some(given))).await.unwrap();

    assert_eq!(user.registered, given);
}

#[tokio::test]
async fn test_get_user_by_login_not_found() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_login().returning(|_| Ok(None));

    let service = UserManager::new(Arc::new(repo));
    let result = service.get_user_by_login("nobody").await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_check_password_legacy_hash() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_login()
        .with(eq("admin"))
        .returning(|_| Ok(Some(create_test_user(1, "5f4dcc3b5aa765d61d8327deb882cf99"))));

    let service = UserManager::new(Arc::new(repo));

    assert_eq!(service.check_password("admin", "password").await.unwrap(), Some(true));
    assert_eq!(service.check_password("admin", "wrong").await.unwrap(), Some(false));
}

#[tokio::test]
async fn test_check_password_phpass_is_unverifiable() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_login().returning(|_| {
        Ok(Some(create_test_user(1, "$P$BWx2Nn7aUjH5cvnYvRmDKqXr0z2iXm/")))
    });

    let service = UserManager::new(Arc::new(repo));

    assert_eq!(service.check_password("admin", "password").await.unwrap(), None);
}

#[tokio::test]
async fn test_set_password_stores_legacy_hash() {
    let mut repo = MockUserRepository::new();
    repo.expect_update()
        .withf(|id: &u64, changes: &UpdateUser| {
            *id == 1
                && changes.password_hash.as_deref() == Some("5f4dcc3b5aa765d61d8327deb882cf99")
                && changes.email.is_none()
        })
        .returning(|id, changes| Ok(create_test_user(id, &changes.password_hash.unwrap_or_default())));

    let service = UserManager::new(Arc::new(repo));
    let user = service.set_password(1, "password").await.unwrap();

    assert_eq!(user.password_hash, legacy_hash("password"));
}

#[tokio::test]
async fn test_delete_user_success() {
    let mut repo = MockUserRepository::new();
    repo.expect_delete().with(eq(4u64)).returning(|_| Ok(()));

    let service = UserManager::new(Arc::new(repo));

    assert!(service.delete_user(4).await.is_ok());
}

#[tokio::test]
async fn test_users_page_passes_params_through() {
    let mut repo = MockUserRepository::new();
    repo.expect_page()
        .withf(|p: &PageParams| p.page == 2 && p.limit() == 100)
        .returning(|p| Ok(Page::new(vec![create_test_user(101, "")], &p, 101)));

    let service = UserManager::new(Arc::new(repo));
    let page = service.users_page(PageParams::new(2, 500)).await.unwrap();

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total_pages, 2);
}
