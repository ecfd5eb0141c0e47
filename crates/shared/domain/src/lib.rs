//! Domain layer - WordPress records and the rules that apply to them.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The persistence crate maps its SeaORM models onto these types.

pub mod comment;
pub mod constants;
pub mod error;
pub mod password;
pub mod post;
pub mod site;
pub mod term;
pub mod user;
pub mod validation;

pub use comment::{Comment, CommentDraft, NewComment, UpdateComment};
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use password::{legacy_hash, verify_legacy_hash, HashScheme};
pub use post::{NewPost, Permalink, Post, PostFilter, PostMeta, UpdatePost};
pub use site::{Link, NewLink, SiteOption, UpdateLink};
pub use term::{NewTerm, Term, TermRelationship, TermTaxonomy, UpdateTerm};
pub use user::{NewUser, UpdateUser, User, UserMeta};
pub use validation::RecordErrors;
