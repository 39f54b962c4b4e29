use std::collections::HashMap;

use uuid::Uuid;

use crate::domain::{Household, Member, MemberRole, Membership, PendingInvitation};
use crate::errors::StoreError;

/// Abstraction over the backend service holding households, memberships and
/// invitations. Implementations translate their transport errors into
/// [`StoreError`], keeping uniqueness violations distinguishable as
/// [`StoreError::Conflict`].
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait HouseholdStore: Send + Sync {
    async fn memberships_for_user(&self, user_id: Uuid) -> Result<Vec<Membership>, StoreError>;

    async fn household(&self, household_id: Uuid) -> Result<Household, StoreError>;

    async fn create_household(
        &self,
        name: &str,
        created_by: Uuid,
    ) -> Result<Household, StoreError>;

    async fn delete_household(&self, household_id: Uuid) -> Result<(), StoreError>;

    async fn add_membership(
        &self,
        household_id: Uuid,
        user_id: Uuid,
        role: MemberRole,
    ) -> Result<Membership, StoreError>;

    async fn remove_membership(&self, membership_id: Uuid) -> Result<(), StoreError>;

    /// The membership linking `user_id` to `household_id`, if any.
    async fn membership_of(
        &self,
        household_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Membership>, StoreError>;

    /// Total member count per household. Households the backend returned no
    /// rows for are simply absent from the map.
    async fn member_counts(
        &self,
        household_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, usize>, StoreError>;

    async fn members_with_emails(&self, household_id: Uuid) -> Result<Vec<Member>, StoreError>;

    async fn user_id_by_email(&self, email: &str) -> Result<Option<Uuid>, StoreError>;

    /// Pending invitations keyed by a lower-cased email, oldest first.
    async fn pending_invitations_for_email(
        &self,
        email: &str,
    ) -> Result<Vec<PendingInvitation>, StoreError>;

    async fn pending_invitations_for_household(
        &self,
        household_id: Uuid,
    ) -> Result<Vec<PendingInvitation>, StoreError>;

    async fn find_invitation(
        &self,
        household_id: Uuid,
        email: &str,
    ) -> Result<Option<PendingInvitation>, StoreError>;

    async fn create_invitation(
        &self,
        household_id: Uuid,
        email: &str,
        invited_by: Uuid,
    ) -> Result<PendingInvitation, StoreError>;

    async fn delete_invitation(&self, invitation_id: Uuid) -> Result<(), StoreError>;
}
