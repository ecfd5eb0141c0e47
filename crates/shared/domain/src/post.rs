//! Post domain entity and related types.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::constants::{COMMENT_STATUS_OPEN, POST_STATUS_PUBLISH};
use crate::error::{DomainError, DomainResult};

/// Blog post (`wp_posts` row)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub author_id: u64,
    /// Publish date in the blog's local time
    pub date: NaiveDateTime,
    pub date_gmt: NaiveDateTime,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub status: String,
    pub comment_status: String,
    pub ping_status: String,
    /// URL slug (`post_name`)
    pub slug: String,
    pub modified: NaiveDateTime,
    pub modified_gmt: NaiveDateTime,
    pub parent_id: u64,
    pub guid: String,
    pub menu_order: i32,
    pub post_type: String,
    pub mime_type: String,
    pub comment_count: i64,
}

impl Post {
    /// Published status and a publish date that is not in the future.
    pub fn is_published_at(&self, now: NaiveDateTime) -> bool {
        self.status == POST_STATUS_PUBLISH && self.date <= now
    }

    /// [`Post::is_published_at`] against the local wall clock, which is the
    /// clock WordPress writes `post_date` in.
    pub fn is_published(&self) -> bool {
        self.is_published_at(Local::now().naive_local())
    }

    /// Whether new comments may be attached to this post
    pub fn accepts_comments(&self) -> bool {
        self.comment_status == COMMENT_STATUS_OPEN
    }

    pub fn permalink(&self) -> Permalink {
        Permalink::for_post(self)
    }
}

/// Post creation data
#[derive(Debug, Clone, Deserialize)]
pub struct NewPost {
    pub author_id: u64,
    pub title: String,
    pub slug: String,
    pub content: String,
    #[serde(default)]
    pub excerpt: String,
    pub status: String,
    pub comment_status: String,
    pub post_type: String,
    /// Defaults to the creation time
    pub date: Option<NaiveDateTime>,
}

/// Post update data; `None` leaves the column untouched
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePost {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub status: Option<String>,
    pub comment_status: Option<String>,
    pub date: Option<NaiveDateTime>,
}

/// Options for listing posts.
///
/// The published scope and the newest-first ordering are spelled out here
/// instead of being applied implicitly.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostFilter {
    /// Only rows whose status is `publish`
    #[serde(default)]
    pub published_only: bool,
    /// Restrict to a `post_type` (e.g. `post`, `page`)
    pub post_type: Option<String>,
    pub limit: Option<u64>,
}

impl PostFilter {
    pub fn published() -> Self {
        Self {
            published_only: true,
            ..Self::default()
        }
    }
}

/// Key/value row attached to a post (`wp_postmeta`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMeta {
    pub id: u64,
    pub post_id: u64,
    pub key: Option<String>,
    pub value: Option<String>,
}

/// Date-based permalink: `/YYYY/MM/DD/slug/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permalink {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub slug: String,
}

impl Permalink {
    pub fn new(year: i32, month: u32, day: u32, slug: impl Into<String>) -> Self {
        Self {
            year,
            month,
            day,
            slug: slug.into(),
        }
    }

    pub fn for_post(post: &Post) -> Self {
        Self::new(
            post.date.year(),
            post.date.month(),
            post.date.day(),
            post.slug.clone(),
        )
    }

    /// Parse a `/YYYY/MM/DD/slug/` path; surrounding slashes are optional.
    pub fn parse(path: &str) -> DomainResult<Self> {
        let parts: Vec<&str> = path.trim_matches('/').split('/').collect();
        let [year, month, day, slug] = parts.as_slice() else {
            return Err(DomainError::validation(format!(
                "Permalink must look like /YYYY/MM/DD/slug/, got {:?}",
                path
            )));
        };

        let year: i32 = number(year, "year")?;
        let month: u32 = number(month, "month")?;
        let day: u32 = number(day, "day")?;

        if slug.is_empty() {
            return Err(DomainError::validation("Permalink slug cannot be empty"));
        }

        Ok(Self::new(year, month, day, *slug))
    }

    /// The calendar day this permalink points at, if it exists
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    /// Half-open `[start, end)` range of publish dates on that day
    pub fn day_range(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let date = self.date()?;
        let start = date.and_hms_opt(0, 0, 0)?;
        let end = date.succ_opt()?.and_hms_opt(0, 0, 0)?;
        Some((start, end))
    }
}

/// Unsigned decimal path segment; out-of-range values are rejected, not wrapped
fn number<T: FromStr>(part: &str, name: &str) -> DomainResult<T> {
    let invalid = || DomainError::validation(format!("Invalid {} in permalink: {:?}", name, part));
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    part.parse().map_err(|_| invalid())
}

impl fmt::Display for Permalink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "/{:04}/{:02}/{:02}/{}/",
            self.year, self.month, self.day, self.slug
        )
    }
}
