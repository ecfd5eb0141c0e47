//! Legacy password digests.
//!
//! WordPress before 2.5 stored `user_pass` as a bare hex MD5 digest. Current
//! releases write phpass "portable" hashes (`$P$...`) or bcrypt, and neither
//! is implemented here. [`legacy_hash`] therefore only produces and checks the
//! old MD5 form: a value it writes is accepted by WordPress (which upgrades it
//! on next login), but it cannot verify passwords of accounts already on
//! phpass.

/// Storage scheme of a `user_pass` value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashScheme {
    /// 32 hex characters, pre-2.5 MD5
    LegacyMd5,
    /// phpass portable hash (`$P$` / `$H$`)
    Phpass,
    /// Anything else (bcrypt `$wp$2y$`, plugins, ...)
    Unknown,
}

impl HashScheme {
    pub fn detect(stored: &str) -> Self {
        if stored.len() == 32 && stored.bytes().all(|b| b.is_ascii_hexdigit()) {
            HashScheme::LegacyMd5
        } else if stored.starts_with("$P$") || stored.starts_with("$H$") {
            HashScheme::Phpass
        } else {
            HashScheme::Unknown
        }
    }
}

/// Hex MD5 digest of `password`.
///
/// Not WordPress's real password scheme; see the module docs.
pub fn legacy_hash(password: &str) -> String {
    format!("{:x}", md5::compute(password))
}

/// Check `password` against a stored `user_pass`.
///
/// `None` when the stored value uses a scheme this crate cannot verify.
pub fn verify_legacy_hash(password: &str, stored: &str) -> Option<bool> {
    match HashScheme::detect(stored) {
        HashScheme::LegacyMd5 => Some(legacy_hash(password).eq_ignore_ascii_case(stored)),
        HashScheme::Phpass | HashScheme::Unknown => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_hash_is_hex_md5() {
        assert_eq!(legacy_hash("password"), "5f4dcc3b5aa765d61d8327deb882cf99");
        assert_eq!(legacy_hash(""), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn test_verify_legacy_hash() {
        let stored = legacy_hash("hunter22");
        assert_eq!(verify_legacy_hash("hunter22", &stored), Some(true));
        assert_eq!(verify_legacy_hash("hunter23", &stored), Some(false));
        assert_eq!(
            verify_legacy_hash("hunter22", &stored.to_uppercase()),
            Some(true)
        );
    }

    #[test]
    fn test_phpass_hashes_are_not_verified() {
        let stored = "$P$BNy6Hn7rc2a7SbKqYmWqMIPjGmd5bU/";
        assert_eq!(HashScheme::detect(stored), HashScheme::Phpass);
        assert_eq!(verify_legacy_hash("password", stored), None);
    }

    #[test]
    fn test_detect_unknown_scheme() {
        assert_eq!(HashScheme::detect("$wp$2y$10$abc"), HashScheme::Unknown);
        assert_eq!(HashScheme::detect("not-a-hash"), HashScheme::Unknown);
    }
}
