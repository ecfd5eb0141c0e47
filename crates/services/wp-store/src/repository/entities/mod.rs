//! SeaORM entities bound to the WordPress tables.
//!
//! Table and key column names are owned by WordPress; every entity declares
//! its own primary key instead of relying on an `id` convention.

pub mod comment;
pub mod link;
pub mod option;
pub mod post;
pub mod post_meta;
pub mod term;
pub mod term_relationship;
pub mod term_taxonomy;
pub mod user;
pub mod user_meta;
