use tracing::debug;
use uuid::Uuid;

use crate::domain::household::normalize_email;
use crate::domain::{Member, MemberRole, PendingInvitation};
use crate::errors::{MembershipError, StoreError, ValidationError};
use crate::household::store::HouseholdStore;

/// What happened to an invite request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InviteOutcome {
    /// The email belongs to a registered user who was added directly.
    MemberAdded,
    /// No account yet; a pending invitation was recorded.
    InvitationCreated,
    AlreadyMember,
    AlreadyInvited,
}

/// Roster operations for one household: listing members, inviting by email,
/// cancelling invitations and removing members. Email delivery of the invite
/// link is the shell's concern.
pub struct MembershipService<S> {
    store: S,
}

impl<S: HouseholdStore> MembershipService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn members(&self, household_id: Uuid) -> Result<Vec<Member>, StoreError> {
        self.store.members_with_emails(household_id).await
    }

    pub async fn pending_invitations(
        &self,
        household_id: Uuid,
    ) -> Result<Vec<PendingInvitation>, StoreError> {
        self.store.pending_invitations_for_household(household_id).await
    }

    /// Invites `raw_email` into the household. Registered users are added
    /// directly as members; unknown addresses get a pending invitation keyed
    /// by the lower-cased email.
    pub async fn invite(
        &self,
        household_id: Uuid,
        raw_email: &str,
        invited_by: Uuid,
    ) -> Result<InviteOutcome, MembershipError> {
        let email = validated_email(raw_email)?;

        if let Some(user_id) = self.store.user_id_by_email(&email).await? {
            if self.store.membership_of(household_id, user_id).await?.is_some() {
                return Ok(InviteOutcome::AlreadyMember);
            }
            return match self
                .store
                .add_membership(household_id, user_id, MemberRole::Member)
                .await
            {
                Ok(_) => Ok(InviteOutcome::MemberAdded),
                // Lost a race against another admin; the user is in.
                Err(StoreError::Conflict(_)) => {
                    debug!(household = %household_id, "membership already present");
                    Ok(InviteOutcome::AlreadyMember)
                }
                Err(err) => Err(err.into()),
            };
        }

        if self.store.find_invitation(household_id, &email).await?.is_some() {
            return Ok(InviteOutcome::AlreadyInvited);
        }
        self.store
            .create_invitation(household_id, &email, invited_by)
            .await?;
        Ok(InviteOutcome::InvitationCreated)
    }

    pub async fn cancel_invitation(&self, invitation_id: Uuid) -> Result<(), StoreError> {
        self.store.delete_invitation(invitation_id).await
    }

    pub async fn remove_member(&self, membership_id: Uuid) -> Result<(), StoreError> {
        self.store.remove_membership(membership_id).await
    }
}

/// Whether `user_id` administers the household described by `members`.
pub fn is_admin(members: &[Member], user_id: Uuid) -> bool {
    members
        .iter()
        .any(|m| m.user_id == user_id && m.role == MemberRole::Admin)
}

fn validated_email(raw: &str) -> Result<String, ValidationError> {
    let email = normalize_email(raw);
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(ValidationError::InvalidEmail(raw.to_string())),
    }
}
