//! Repository tests against SeaORM's mock MySQL connection.

use std::sync::Arc;

use chrono::{Local, NaiveDate, NaiveDateTime};
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult, Transaction};

use domain::{NewComment, NewLink, NewUser, Permalink, PostFilter, COMMENTS_CLOSED_MESSAGE};
use wp_store_lib::repository::entities::{link, post, term, user};
use wp_store_lib::repository::{
    PostRepository, PostStore, SiteRepository, SiteStore, TermRepository, TermStore,
    UserRepository, UserStore,
};
use wp_store_lib::WpStore;

fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, 0, 0)
        .unwrap()
}

fn post_row(id: u64, slug: &str, comment_status: &str) -> post::Model {
    post::Model {
        id,
        post_author: 1,
        post_date: at(2008, 3, 14, 21),
        post_date_gmt: at(2008, 3, 14, 20),
        post_content: "Welcome to WordPress.".to_string(),
        post_title: "Hello world!".to_string(),
        post_excerpt: String::new(),
        post_status: "publish".to_string(),
        comment_status: comment_status.to_string(),
        ping_status: "open".to_string(),
        post_password: String::new(),
        post_name: slug.to_string(),
        to_ping: String::new(),
        pinged: String::new(),
        post_modified: at(2008, 3, 14, 21),
        post_modified_gmt: at(2008, 3, 14, 20),
        post_content_filtered: String::new(),
        post_parent: 0,
        guid: format!("http://example.com/?p={}", id),
        menu_order: 0,
        post_type: "post".to_string(),
        post_mime_type: String::new(),
        comment_count: 0,
    }
}

fn shared(db: MockDatabase) -> Arc<DatabaseConnection> {
    Arc::new(db.into_connection())
}

/// Statements issued so far; every store holding the connection must be dropped first
fn transaction_log(db: Arc<DatabaseConnection>) -> Vec<Transaction> {
    Arc::try_unwrap(db)
        .ok()
        .expect("connection still shared")
        .into_transaction_log()
}

/// Logged statements with their values inlined, one per line
fn logged_sql(db: Arc<DatabaseConnection>) -> String {
    transaction_log(db)
        .iter()
        .flat_map(|txn| txn.statements().iter().map(|stmt| stmt.to_string()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[tokio::test]
async fn test_find_by_permalink_matches_day_and_slug() {
    let db = shared(
        MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results([vec![post_row(1, "hello-world", "open")]]),
    );
    let store = PostStore::new(db.clone());

    let found = store
        .find_by_permalink(&Permalink::new(2008, 3, 14, "hello-world"))
        .await
        .unwrap();

    assert_eq!(found.map(|p| p.id), Some(1));

    drop(store);
    let sql = logged_sql(db);
    assert!(sql.contains("wp_posts"));
    assert!(sql.contains("post_name"));
    assert!(sql.contains("hello-world"));
    assert!(sql.contains("`wp_posts`.`post_date` >= '2008-03-14 00:00:00"));
    assert!(sql.contains("`wp_posts`.`post_date` < '2008-03-15 00:00:00"));
    assert!(sql.contains("`wp_posts`.`post_name` = 'hello-world'"));
}

#[tokio::test]
async fn test_find_by_permalink_slug_mismatch() {
    let db = shared(
        MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results([Vec::<post::Model>::new()]),
    );
    let store = PostStore::new(db);

    let found = store
        .find_by_permalink(&Permalink::new(2008, 3, 14, "goodbye-world"))
        .await
        .unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn test_find_by_permalink_impossible_date_skips_query() {
    let db = shared(MockDatabase::new(DatabaseBackend::MySql));
    let store = PostStore::new(db.clone());

    let found = store
        .find_by_permalink(&Permalink::new(2008, 2, 30, "hello-world"))
        .await
        .unwrap();

    assert!(found.is_none());
    drop(store);
    assert!(transaction_log(db).is_empty());
}

#[tokio::test]
async fn test_list_published_orders_newest_first() {
    let db = shared(
        MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results([vec![post_row(2, "second", "open"), post_row(1, "first", "open")]]),
    );
    let store = PostStore::new(db.clone());

    let posts = store.list(PostFilter::published()).await.unwrap();

    assert_eq!(posts.len(), 2);
    drop(store);
    let sql = logged_sql(db);
    assert!(sql.contains("post_status"));
    assert!(sql.contains("publish"));
    assert!(sql.contains("ORDER BY `wp_posts`.`post_date` DESC"));
}

#[tokio::test]
async fn test_tags_join_through_taxonomy() {
    let db = shared(
        MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results([vec![term::Model {
                term_id: 3,
                name: "Rust".to_string(),
                slug: "rust".to_string(),
                term_group: 0,
            }]]),
    );
    let store = TermStore::new(db.clone());

    let tags = store.terms_for_post(1, "post_tag").await.unwrap();

    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].slug, "rust");
    drop(store);
    let sql = logged_sql(db);
    assert!(sql.contains("INNER JOIN `wp_term_taxonomy`"));
    assert!(sql.contains("INNER JOIN `wp_term_relationships`"));
    assert!(sql.contains("`wp_term_relationships`.`object_id` = 1"));
    assert!(sql.contains("`wp_term_taxonomy`.`taxonomy` = 'post_tag'"));
    assert!(!sql.contains("'category'"));
    assert!(sql.contains("DISTINCT"));
}

#[tokio::test]
async fn test_categories_filter_excludes_tags() {
    let db = shared(
        MockDatabase::new(DatabaseBackend::MySql).append_query_results([Vec::<term::Model>::new()]),
    );
    let store = TermStore::new(db.clone());

    let categories = store.terms_for_post(1, "category").await.unwrap();

    assert!(categories.is_empty());
    drop(store);
    let sql = logged_sql(db);
    assert!(sql.contains("`wp_term_taxonomy`.`taxonomy` = 'category'"));
    assert!(!sql.contains("'post_tag'"));
}

#[tokio::test]
async fn test_posts_for_term_joins_back_to_posts() {
    let db = shared(
        MockDatabase::new(DatabaseBackend::MySql).append_query_results([vec![
            post_row(2, "second", "open"),
            post_row(1, "hello-world", "open"),
        ]]),
    );
    let store = TermStore::new(db.clone());

    let posts = store.posts_for_term(3).await.unwrap();

    let ids: Vec<_> = posts.iter().map(|p| p.id).collect();
    assert_eq!(ids, [2, 1]);
    drop(store);
    let sql = logged_sql(db);
    assert!(sql.contains("FROM `wp_posts`"));
    assert!(sql.contains(
        "INNER JOIN `wp_term_relationships` ON `wp_posts`.`ID` = `wp_term_relationships`.`object_id`"
    ));
    assert!(sql.contains("INNER JOIN `wp_term_taxonomy` ON `wp_term_relationships`.`term_taxonomy_id` = `wp_term_taxonomy`.`term_taxonomy_id`"));
    assert!(sql.contains("`wp_term_taxonomy`.`term_id` = 3"));
    assert!(sql.contains("ORDER BY `wp_posts`.`post_date` DESC"));
}

#[tokio::test]
async fn test_delete_term_touches_only_terms_table() {
    let db = shared(
        MockDatabase::new(DatabaseBackend::MySql).append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }]),
    );
    let store = TermStore::new(db.clone());

    store.delete(3).await.unwrap();

    drop(store);
    let sql = logged_sql(db);
    assert!(sql.contains("DELETE FROM `wp_terms` WHERE `wp_terms`.`term_id` = 3"));
    assert!(!sql.contains("wp_term_taxonomy"));
    assert!(!sql.contains("wp_term_relationships"));
}

#[tokio::test]
async fn test_comment_on_closed_post_issues_no_insert() {
    let db = shared(
        MockDatabase::new(DatabaseBackend::MySql)
            .append_query_results([vec![post_row(1, "hello-world", "closed")]]),
    );
    let store = WpStore::from_connection(db.clone());

    let input = NewComment {
        post_id: Some(1),
        author: Some("Ada".to_string()),
        author_email: Some("ada@example.com".to_string()),
        content: Some("First!".to_string()),
        ..NewComment::default()
    };
    let err = store.comments().create_comment(input).await.unwrap_err();

    assert_eq!(err.record_errors().unwrap().base(), [COMMENTS_CLOSED_MESSAGE]);
    drop(store);
    let log = transaction_log(db);
    assert_eq!(log.len(), 1);
    assert!(!format!("{:?}", log).contains("INSERT"));
}

#[tokio::test]
async fn test_create_user_stamps_registration_on_insert() {
    let registered = Local::now().naive_local();
    let db = shared(
        MockDatabase::new(DatabaseBackend::MySql)
            .append_exec_results([MockExecResult {
                last_insert_id: 5,
                rows_affected: 1,
            }])
            .append_query_results([vec![user::Model {
                id: 5,
                user_login: "ada".to_string(),
                user_pass: String::new(),
                user_nicename: "ada".to_string(),
                user_email: "ada@example.com".to_string(),
                user_url: String::new(),
                user_registered: registered,
                user_activation_key: String::new(),
                user_status: 0,
                display_name: "Ada".to_string(),
            }]]),
    );
    let store = UserStore::new(db.clone());

    let user = store
        .create(NewUser {
            login: "ada".to_string(),
            email: "ada@example.com".to_string(),
            display_name: "Ada".to_string(),
            ..NewUser::default()
        })
        .await
        .unwrap();

    assert_eq!(user.id, 5);
    drop(store);
    let sql = logged_sql(db);
    assert!(sql.contains("INSERT INTO `wp_users`"));
    assert!(sql.contains("`user_registered`"));
}

#[tokio::test]
async fn test_create_link_defaults_to_visible() {
    let db = shared(
        MockDatabase::new(DatabaseBackend::MySql)
            .append_exec_results([MockExecResult {
                last_insert_id: 3,
                rows_affected: 1,
            }])
            .append_query_results([vec![link::Model {
                link_id: 3,
                link_url: "https://www.rust-lang.org/".to_string(),
                link_name: "Rust".to_string(),
                link_image: String::new(),
                link_target: String::new(),
                link_description: String::new(),
                link_visible: "Y".to_string(),
                link_owner: 1,
                link_rating: 0,
                link_updated: at(2008, 3, 14, 12),
                link_rel: String::new(),
                link_notes: String::new(),
                link_rss: String::new(),
            }]]),
    );
    let store = SiteStore::new(db.clone());

    let link = store
        .create_link(NewLink {
            url: "https://www.rust-lang.org/".to_string(),
            name: "Rust".to_string(),
            owner_id: 1,
            ..NewLink::default()
        })
        .await
        .unwrap();

    assert!(link.is_visible());
    drop(store);
    let sql = logged_sql(db);
    assert!(sql.contains("INSERT INTO `wp_links`"));
    assert!(sql.contains("'Y'"));
}
