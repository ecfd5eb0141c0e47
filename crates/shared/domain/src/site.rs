//! Site-wide records without associations: blogroll links and options.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::constants::{LINK_VISIBLE, OPTION_AUTOLOAD_YES};

/// Blogroll link (`wp_links` row)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub id: u64,
    pub url: String,
    pub name: String,
    pub image: String,
    pub target: String,
    pub description: String,
    pub visible: String,
    pub owner_id: u64,
    pub rating: i32,
    pub updated: NaiveDateTime,
    pub rel: String,
    pub notes: String,
    pub rss: String,
}

impl Link {
    pub fn is_visible(&self) -> bool {
        self.visible == LINK_VISIBLE
    }
}

/// Link creation data
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewLink {
    pub url: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub target: String,
    /// Defaults to visible (`Y`)
    pub visible: Option<String>,
    #[serde(default)]
    pub owner_id: u64,
}

/// Link update data; `None` leaves the column untouched
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateLink {
    pub url: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub visible: Option<String>,
}

/// Named site setting (`wp_options` row)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteOption {
    pub id: u64,
    pub name: String,
    /// Raw value; WordPress stores arrays PHP-serialized
    pub value: String,
    pub autoload: String,
}

impl SiteOption {
    pub fn autoloads(&self) -> bool {
        self.autoload == OPTION_AUTOLOAD_YES
    }
}
