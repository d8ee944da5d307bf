//! Static user roster and role gates.
//!
//! The roster is fixed for the life of a session: users are never created
//! or destroyed at runtime. Roles gate which task-desk operations an actor
//! may perform; the checks themselves live in the task services so the
//! core stays safe independent of any UI.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors returned while constructing roster values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RosterError {
    /// The user identifier is empty after trimming.
    #[error("user id must not be empty")]
    EmptyUserId,

    /// The user display name is empty after trimming.
    #[error("user name must not be empty")]
    EmptyUserName,
}

/// Error returned while parsing stored roles.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

/// Opaque user identifier from the roster.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a validated user identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::EmptyUserId`] when the value is blank after
    /// trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, RosterError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(RosterError::EmptyUserId);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role held by a roster user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Creates tasks, reviews submissions, deletes tasks.
    Admin,
    /// Works assigned tasks: start and submit only.
    Member,
}

impl Role {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Member => "member",
        }
    }

    /// Returns whether this role carries admin privileges.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Role {
    type Error = ParseRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "admin" => Ok(Self::Admin),
            "member" => Ok(Self::Member),
            _ => Err(ParseRoleError(value.to_owned())),
        }
    }
}

/// A member of the static roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    role: Role,
    avatar: String,
}

impl User {
    /// Creates a validated user.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::EmptyUserName`] when the display name is
    /// blank after trimming.
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        role: Role,
        avatar: impl Into<String>,
    ) -> Result<Self, RosterError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RosterError::EmptyUserName);
        }
        Ok(Self {
            id,
            name,
            role,
            avatar: avatar.into(),
        })
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the avatar initials.
    #[must_use]
    pub fn avatar(&self) -> &str {
        &self.avatar
    }
}

/// The static user roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    users: Vec<User>,
}

impl Roster {
    /// Creates a roster from an explicit user list.
    #[must_use]
    pub fn new(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: users.into_iter().collect(),
        }
    }

    /// Returns the default studio roster: one admin and four members.
    #[must_use]
    pub fn studio_default() -> Self {
        let entries = [
            ("admin1", "Jane Doe", Role::Admin, "JD"),
            ("u1", "Vito", Role::Member, "VT"),
            ("u2", "Rashid", Role::Member, "RS"),
            ("u3", "Rafael", Role::Member, "RF"),
            ("u4", "Sarah", Role::Member, "SR"),
        ];
        let users = entries
            .into_iter()
            .filter_map(|(id, name, role, avatar)| {
                let user_id = UserId::new(id).ok()?;
                User::new(user_id, name, role, avatar).ok()
            })
            .collect();
        Self { users }
    }

    /// Returns all roster users in declaration order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Looks a user up by identifier.
    #[must_use]
    pub fn find_by_id(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id() == id)
    }

    /// Looks a user up by display name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&User> {
        self.users.iter().find(|user| user.name() == name)
    }

    /// Returns whether `name` belongs to any roster user.
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.find_by_name(name).is_some()
    }

    /// Returns the member-role users, the pool of assignable PICs.
    pub fn members(&self) -> impl Iterator<Item = &User> {
        self.users.iter().filter(|user| !user.role().is_admin())
    }
}
