//! User data model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum allowed length for a user name, in characters.
pub const USER_NAME_MAX: usize = 255;

/// Number of records returned by a list query when no limit is supplied.
pub const DEFAULT_LIST_LIMIT: i64 = 10;

/// Validation errors returned by the user value constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The name is empty after trimming.
    #[error("user name must not be empty")]
    EmptyName,
    /// The name exceeds the column width.
    #[error("user name must be at most {max} characters")]
    NameTooLong {
        /// Maximum permitted length in characters.
        max: usize,
    },
    /// A list limit below zero.
    #[error("limit must not be negative")]
    NegativeLimit,
}

/// Store-assigned user identifier.
///
/// Identifiers are never reused or mutated once assigned. Any `i64` is a
/// well-formed identifier; whether it refers to a user is the store's call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique, human readable user name.
///
/// Equality is case-sensitive; `"Alice"` and `"alice"` are distinct names.
/// Leading and trailing whitespace is preserved as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Validate and construct a [`UserName`].
    ///
    /// # Examples
    /// ```
    /// use users_backend::domain::{UserName, UserValidationError};
    ///
    /// assert!(UserName::new("alice").is_ok());
    /// assert_eq!(UserName::new("  "), Err(UserValidationError::EmptyName));
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, UserValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        if name.chars().count() > USER_NAME_MAX {
            return Err(UserValidationError::NameTooLong {
                max: USER_NAME_MAX,
            });
        }
        Ok(Self(name))
    }

    /// Borrow the name as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<UserName> for String {
    fn from(value: UserName) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Application user.
///
/// Serialises as `{"id": 1, "name": "alice"}`.
///
/// # Examples
/// ```
/// use users_backend::domain::{User, UserId, UserName};
///
/// let user = User::new(UserId::new(1), UserName::new("alice").expect("valid name"));
/// assert_eq!(user.id().get(), 1);
/// assert_eq!(user.name().as_str(), "alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: UserName,
}

impl User {
    /// Build a user from validated parts.
    pub fn new(id: UserId, name: UserName) -> Self {
        Self { id, name }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Current name.
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Replace the name, keeping the identifier.
    pub fn renamed(self, name: UserName) -> Self {
        Self { id: self.id, name }
    }
}

/// Upper bound on the number of records a list query returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLimit(i64);

impl ListLimit {
    /// Validate and construct a limit.
    pub fn new(limit: i64) -> Result<Self, UserValidationError> {
        if limit < 0 {
            return Err(UserValidationError::NegativeLimit);
        }
        Ok(Self(limit))
    }

    /// Access the raw bound.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl Default for ListLimit {
    fn default() -> Self {
        Self(DEFAULT_LIST_LIMIT)
    }
}
