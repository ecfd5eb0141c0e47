//! User domain entity and related types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::RecordErrors;

/// Blog user (`wp_users` row)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub login: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub nicename: String,
    pub email: String,
    pub url: String,
    pub registered: NaiveDateTime,
    #[serde(skip_serializing)]
    pub activation_key: String,
    pub status: i32,
    pub display_name: String,
}

/// User creation data
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NewUser {
    pub login: String,
    /// Already hashed; see [`crate::password::legacy_hash`]
    pub password_hash: String,
    pub email: String,
    #[serde(default)]
    pub url: String,
    pub display_name: String,
    /// Stamped with the creation time when left empty
    #[validate(required(message = "can't be blank"))]
    pub registered: Option<NaiveDateTime>,
}

impl NewUser {
    /// Fill an unset registration time with `now`; a caller-supplied value wins.
    pub fn stamp_registration(&mut self, now: NaiveDateTime) {
        self.registered.get_or_insert(now);
    }

    pub fn field_errors(&self) -> RecordErrors {
        match self.validate() {
            Ok(()) => RecordErrors::new(),
            Err(errors) => errors.into(),
        }
    }

    /// `user_nicename` WordPress derives from the login
    pub fn nicename(&self) -> String {
        self.login
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '-' })
            .collect()
    }
}

/// User update data; `None` leaves the column untouched
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUser {
    pub email: Option<String>,
    pub url: Option<String>,
    pub display_name: Option<String>,
    pub password_hash: Option<String>,
}

/// Key/value row attached to a user (`wp_usermeta`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMeta {
    pub id: u64,
    pub user_id: u64,
    pub key: Option<String>,
    pub value: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BLANK_MESSAGE;

    fn at(date: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn new_user() -> NewUser {
        NewUser {
            login: "Admin User".to_string(),
            password_hash: "5f4dcc3b5aa765d61d8327deb882cf99".to_string(),
            email: "admin@example.com".to_string(),
            display_name: "admin".to_string(),
            ..NewUser::default()
        }
    }

    #[test]
    fn test_unstamped_user_is_invalid() {
        let errors = new_user().field_errors();
        assert_eq!(errors.on("registered"), [BLANK_MESSAGE.to_string()]);
    }

    #[test]
    fn test_stamp_fills_missing_registration() {
        let mut user = new_user();
        user.stamp_registration(at("2024-05-01 12:00:00"));

        assert_eq!(user.registered, Some(at("2024-05-01 12:00:00")));
        assert!(user.field_errors().is_empty());
    }

    #[test]
    fn test_stamp_keeps_supplied_registration() {
        let mut user = new_user();
        user.registered = Some(at("2005-01-01 00:00:00"));
        user.stamp_registration(at("2024-05-01 12:00:00"));

        assert_eq!(user.registered, Some(at("2005-01-01 00:00:00")));
    }

    #[test]
    fn test_nicename() {
        assert_eq!(new_user().nicename(), "admin-user");
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User {
            id: 1,
            login: "admin".to_string(),
            password_hash: "secret".to_string(),
            nicename: "admin".to_string(),
            email: "admin@example.com".to_string(),
            url: String::new(),
            registered: at("2024-05-01 12:00:00"),
            activation_key: String::new(),
            status: 0,
            display_name: "admin".to_string(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret"));
        assert!(json.contains("\"login\":\"admin\""));
    }
}
