//! Identifier types for portfolio entities.
//!
//! Strongly-typed identifiers for legs and leg groups. Groups refer to
//! legs by id only, so a group never owns or borrows the legs it lists.

use std::fmt;

/// Unique identifier for a portfolio leg.
///
/// # Examples
///
/// ```
/// use pricer_risk::portfolio::LegId;
///
/// let id = LegId::new("LEG001");
/// assert_eq!(id.as_str(), "LEG001");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LegId(String);

impl LegId {
    /// Creates a new leg ID.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LegId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LegId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for LegId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Unique identifier for a group of legs.
///
/// # Examples
///
/// ```
/// use pricer_risk::portfolio::GroupId;
///
/// let id: GroupId = "hedges".into();
/// assert_eq!(id.to_string(), "hedges");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupId(String);

impl GroupId {
    /// Creates a new group ID.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for GroupId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for GroupId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
