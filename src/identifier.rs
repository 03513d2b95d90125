//! Project identifier shapes.
//!
//! Modrinth addresses a project either by its 8-character ID or by its slug.
//! The API resolves both on the same route, so the client never rejects an
//! identifier; [`IdentifierKind::classify`] is informational.

/// Characters allowed in a slug besides ASCII letters and digits.
const SLUG_PUNCTUATION: &str = "!@$()`.+,\"-'_";

const ID_LEN: usize = 8;
const SLUG_MIN_LEN: usize = 3;
const SLUG_MAX_LEN: usize = 64;

/// The shape a project identifier appears to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    /// Eight ASCII alphanumeric characters, e.g. `AANobbMI`.
    Id,
    /// A 3-64 character human-readable slug, e.g. `sodium`.
    Slug,
    /// Neither shape. The request is still sent as-is.
    Unrecognized,
}

impl IdentifierKind {
    /// Classify an identifier.
    ///
    /// An 8-character alphanumeric string is reported as [`IdentifierKind::Id`]
    /// even though it is also a valid slug.
    ///
    /// ```
    /// use modrinth::IdentifierKind;
    ///
    /// assert_eq!(IdentifierKind::classify("AANobbMI"), IdentifierKind::Id);
    /// assert_eq!(IdentifierKind::classify("fabric-api"), IdentifierKind::Slug);
    /// assert_eq!(IdentifierKind::classify("a/b"), IdentifierKind::Unrecognized);
    /// ```
    pub fn classify(identifier: &str) -> Self {
        let len = identifier.chars().count();

        if len == ID_LEN && identifier.chars().all(|c| c.is_ascii_alphanumeric()) {
            return IdentifierKind::Id;
        }

        let slug_chars = identifier
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || SLUG_PUNCTUATION.contains(c));

        if (SLUG_MIN_LEN..=SLUG_MAX_LEN).contains(&len) && slug_chars {
            IdentifierKind::Slug
        } else {
            IdentifierKind::Unrecognized
        }
    }
}
