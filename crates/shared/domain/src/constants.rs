//! Domain-level constants.
//!
//! Values stored by WordPress itself. They are part of the external schema
//! contract and must match what the CMS writes.

// =============================================================================
// Posts
// =============================================================================

/// `post_status` of a published post
pub const POST_STATUS_PUBLISH: &str = "publish";

/// `post_status` of a draft
pub const POST_STATUS_DRAFT: &str = "draft";

// =============================================================================
// Comments
// =============================================================================

/// `comment_status` / `ping_status` value that accepts new entries
pub const COMMENT_STATUS_OPEN: &str = "open";

/// `comment_status` value that rejects new entries
pub const COMMENT_STATUS_CLOSED: &str = "closed";

/// `comment_approved` value of an approved comment (the column default)
pub const COMMENT_APPROVED: &str = "1";

// =============================================================================
// Taxonomies
// =============================================================================

/// Taxonomy of post tags
pub const TAXONOMY_POST_TAG: &str = "post_tag";

/// Taxonomy of post categories
pub const TAXONOMY_CATEGORY: &str = "category";

// =============================================================================
// Links & Options
// =============================================================================

/// `link_visible` value of a visible blogroll link
pub const LINK_VISIBLE: &str = "Y";

/// `autoload` value of an option loaded on every request
pub const OPTION_AUTOLOAD_YES: &str = "yes";

// =============================================================================
// Validation
// =============================================================================

/// Message attached to a required field that is missing or blank.
/// The `validator` derive attributes repeat this literal.
pub const BLANK_MESSAGE: &str = "can't be blank";

/// Base error raised when commenting on a post that does not accept comments
pub const COMMENTS_CLOSED_MESSAGE: &str = "Sorry, comments are closed for this post";

/// Field error raised when a comment points at a post that does not exist
pub const MISSING_POST_MESSAGE: &str = "must reference an existing post";
