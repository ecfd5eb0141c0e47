//! Terms, taxonomies and the relationships that attach them to posts.
//!
//! A [`Term`] is a bare name ("technology"). A [`TermTaxonomy`] places that
//! term under one classification scheme ("category", "post_tag"), and a
//! [`TermRelationship`] ties a taxonomy entry to a post.

use serde::{Deserialize, Serialize};

/// Classification value (`wp_terms` row)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub group: i64,
}

/// A term placed under a taxonomy (`wp_term_taxonomy` row)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermTaxonomy {
    pub id: u64,
    pub term_id: u64,
    pub taxonomy: String,
    pub description: String,
    pub parent_id: u64,
    /// Number of objects WordPress counted for this entry
    pub count: i64,
}

/// Join row between a post and a taxonomy entry (`wp_term_relationships`).
/// Identified only by the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TermRelationship {
    pub object_id: u64,
    pub term_taxonomy_id: u64,
    pub term_order: i32,
}

/// Term creation data; the term is registered under `taxonomy` at once
#[derive(Debug, Clone, Deserialize)]
pub struct NewTerm {
    pub name: String,
    pub slug: String,
    pub taxonomy: String,
    #[serde(default)]
    pub description: String,
}

/// Term update data; `None` leaves the column untouched
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTerm {
    pub name: Option<String>,
    pub slug: Option<String>,
}
