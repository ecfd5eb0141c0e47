//! Repository layer for data access.
//!
//! One repository per aggregate; associations are read through explicit
//! methods that name their join path.

mod base;
mod comment_repository;
pub mod entities;
mod post_repository;
mod site_repository;
mod term_repository;
mod user_repository;

pub use base::{KeyOf, Page, PageParams, Table, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use comment_repository::{CommentRepository, CommentStore};
pub use post_repository::{PostRepository, PostStore};
pub use site_repository::{SiteRepository, SiteStore};
pub use term_repository::{TermRepository, TermStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use comment_repository::MockCommentRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use post_repository::MockPostRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use site_repository::MockSiteRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use term_repository::MockTermRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
