//! Comment domain entity and related types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::COMMENT_APPROVED;
use crate::validation::RecordErrors;

/// Reader comment (`wp_comments` row)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub post_id: u64,
    pub author: String,
    pub author_email: String,
    pub author_url: String,
    pub author_ip: String,
    pub date: NaiveDateTime,
    pub date_gmt: NaiveDateTime,
    pub content: String,
    pub karma: i32,
    pub approved: String,
    pub agent: String,
    pub comment_type: String,
    pub parent_id: u64,
    pub user_id: u64,
}

/// Comment submission as received from a caller.
///
/// Every required field is optional here so that a missing value is reported
/// as a validation error instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NewComment {
    #[validate(required(message = "can't be blank"))]
    pub post_id: Option<u64>,
    #[validate(
        required(message = "can't be blank"),
        length(min = 1, message = "can't be blank")
    )]
    pub author: Option<String>,
    #[validate(
        required(message = "can't be blank"),
        length(min = 1, message = "can't be blank")
    )]
    pub author_email: Option<String>,
    #[validate(
        required(message = "can't be blank"),
        length(min = 1, message = "can't be blank")
    )]
    pub content: Option<String>,
    pub author_url: Option<String>,
    pub author_ip: Option<String>,
    pub agent: Option<String>,
    pub parent_id: Option<u64>,
    pub user_id: Option<u64>,
    /// Moderation state; defaults to approved
    pub approved: Option<String>,
}

impl NewComment {
    /// Trim surrounding whitespace from the text fields so that whitespace-only
    /// values count as blank.
    pub fn sanitized(mut self) -> Self {
        trim_all([
            &mut self.author,
            &mut self.author_email,
            &mut self.content,
            &mut self.author_url,
        ]);
        self
    }

    /// Presence errors, one entry per missing or blank required field
    pub fn field_errors(&self) -> RecordErrors {
        match self.validate() {
            Ok(()) => RecordErrors::new(),
            Err(errors) => errors.into(),
        }
    }

    /// Convert into a draft carrying only present values.
    pub fn into_draft(self) -> Result<CommentDraft, RecordErrors> {
        let errors = self.field_errors();
        let (Some(post_id), Some(author), Some(author_email), Some(content)) =
            (self.post_id, self.author, self.author_email, self.content)
        else {
            return Err(errors);
        };
        errors.into_result()?;

        Ok(CommentDraft {
            post_id,
            author,
            author_email,
            content,
            author_url: self.author_url.unwrap_or_default(),
            author_ip: self.author_ip.unwrap_or_default(),
            agent: self.agent.unwrap_or_default(),
            parent_id: self.parent_id.unwrap_or(0),
            user_id: self.user_id.unwrap_or(0),
            approved: self
                .approved
                .unwrap_or_else(|| COMMENT_APPROVED.to_string()),
        })
    }
}

/// A comment that passed field validation and is ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDraft {
    pub post_id: u64,
    pub author: String,
    pub author_email: String,
    pub content: String,
    pub author_url: String,
    pub author_ip: String,
    pub agent: String,
    pub parent_id: u64,
    pub user_id: u64,
    pub approved: String,
}

/// Comment update data; `None` leaves the column untouched
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateComment {
    #[validate(length(min = 1, message = "can't be blank"))]
    pub author: Option<String>,
    #[validate(length(min = 1, message = "can't be blank"))]
    pub author_email: Option<String>,
    #[validate(length(min = 1, message = "can't be blank"))]
    pub content: Option<String>,
    pub author_url: Option<String>,
    pub approved: Option<String>,
}

impl UpdateComment {
    /// Same trimming as [`NewComment::sanitized`]
    pub fn sanitized(mut self) -> Self {
        trim_all([
            &mut self.author,
            &mut self.author_email,
            &mut self.content,
            &mut self.author_url,
        ]);
        self
    }

    pub fn field_errors(&self) -> RecordErrors {
        match self.validate() {
            Ok(()) => RecordErrors::new(),
            Err(errors) => errors.into(),
        }
    }
}

fn trim_all<const N: usize>(fields: [&mut Option<String>; N]) {
    for value in fields.into_iter().flatten() {
        let trimmed = value.trim();
        if trimmed.len() != value.len() {
            *value = trimmed.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BLANK_MESSAGE;

    fn complete() -> NewComment {
        NewComment {
            post_id: Some(1),
            author: Some("Mr WordPress".to_string()),
            author_email: Some("wp@example.com".to_string()),
            content: Some("Hi, this is a comment.".to_string()),
            ..NewComment::default()
        }
    }

    #[test]
    fn test_complete_comment_is_valid() {
        let draft = complete().into_draft().unwrap();
        assert_eq!(draft.post_id, 1);
        assert_eq!(draft.approved, COMMENT_APPROVED);
        assert_eq!(draft.parent_id, 0);
        assert_eq!(draft.author_url, "");
    }

    #[test]
    fn test_each_missing_field_is_reported_once() {
        let cases: [(&str, fn(&mut NewComment)); 4] = [
            ("post_id", |c| c.post_id = None),
            ("author", |c| c.author = None),
            ("author_email", |c| c.author_email = None),
            ("content", |c| c.content = None),
        ];

        for (field, clear) in cases {
            let mut comment = complete();
            clear(&mut comment);

            let errors = comment.into_draft().unwrap_err();
            assert_eq!(errors.len(), 1, "field {}", field);
            assert_eq!(errors.on(field), [BLANK_MESSAGE.to_string()]);
        }
    }

    #[test]
    fn test_all_missing_fields_are_reported_together() {
        let errors = NewComment::default().into_draft().unwrap_err();
        let fields: Vec<&str> = errors.fields().collect();
        assert_eq!(fields, vec!["author", "author_email", "content", "post_id"]);
    }

    #[test]
    fn test_whitespace_only_is_blank() {
        let mut comment = complete();
        comment.content = Some("   \n".to_string());

        let errors = comment.sanitized().into_draft().unwrap_err();
        assert_eq!(errors.on("content"), [BLANK_MESSAGE.to_string()]);
    }

    #[test]
    fn test_sanitized_trims_values() {
        let mut comment = complete();
        comment.author = Some("  Jane ".to_string());
        let draft = comment.sanitized().into_draft().unwrap();
        assert_eq!(draft.author, "Jane");
    }

    #[test]
    fn test_update_rejects_blank_values() {
        let update = UpdateComment {
            content: Some(String::new()),
            ..UpdateComment::default()
        };
        assert_eq!(update.field_errors().on("content"), [BLANK_MESSAGE.to_string()]);
        assert!(UpdateComment::default().field_errors().is_empty());
    }

    #[test]
    fn test_update_whitespace_only_is_blank() {
        let update = UpdateComment {
            content: Some("   ".to_string()),
            author: Some(" Jane ".to_string()),
            ..UpdateComment::default()
        }
        .sanitized();

        assert_eq!(update.field_errors().on("content"), [BLANK_MESSAGE.to_string()]);
        assert_eq!(update.author.as_deref(), Some("Jane"));
    }
}
