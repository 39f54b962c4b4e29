use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A shared budget group of one or more users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Household {
    pub id: Uuid,
    pub name: String,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Admin,
    Member,
}

/// Relates a user to a household. A household keeps at least one admin;
/// the backend enforces that, this layer only tolerates transient gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Membership {
    pub id: Uuid,
    pub household_id: Uuid,
    pub user_id: Uuid,
    pub role: MemberRole,
    pub joined_at: DateTime<Utc>,
}

/// Roster view of a membership, enriched with the member's email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub membership_id: Uuid,
    pub user_id: Uuid,
    pub role: MemberRole,
    pub joined_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// An email-keyed offer to join a household, not yet accepted by a
/// registered user. Deleted exactly once, when a matching user signs in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingInvitation {
    pub id: Uuid,
    /// Stored lower-cased; the invitee may not have an account yet.
    pub email: String,
    pub household_id: Uuid,
    pub invited_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Canonical form of an invitation email key.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}
