use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::CoreConfig;
use crate::domain::household::normalize_email;
use crate::domain::{Household, MemberRole, Membership};
use crate::errors::{ResolveError, StoreError};
use crate::household::store::HouseholdStore;

/// Maps a signed-in user to exactly one active household, reconciling
/// outstanding invitations and creating a default household when none
/// exists. Run once per sign-in; safe to re-run.
pub struct HouseholdResolver<S> {
    store: S,
    default_name: String,
}

impl<S: HouseholdStore> HouseholdResolver<S> {
    pub fn new(store: S, config: &CoreConfig) -> Self {
        Self {
            store,
            default_name: config.default_household_name.clone(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn resolve(&self, user_id: Uuid, email: &str) -> Result<Household, ResolveError> {
        let invited_household = self.reconcile_invitation(user_id, email).await;

        let memberships = self.store.memberships_for_user(user_id).await?;
        match memberships.as_slice() {
            [] => match invited_household {
                Some(household_id) => Ok(self.store.household(household_id).await?),
                None => self.create_default_household(user_id).await,
            },
            [only] => Ok(self.store.household(only.household_id).await?),
            several => {
                let selected = self.most_populated(several).await?;
                Ok(self.store.household(selected).await?)
            }
        }
    }

    /// Consumes at most one pending invitation for the user's email and
    /// returns the household it pointed at. Every failure in here is
    /// absorbed: the flow continues as if no invitation existed.
    async fn reconcile_invitation(&self, user_id: Uuid, email: &str) -> Option<Uuid> {
        let key = normalize_email(email);
        let invitations = match self.store.pending_invitations_for_email(&key).await {
            Ok(invitations) => invitations,
            Err(err) => {
                warn!(error = %err, "invitation lookup failed, continuing without");
                return None;
            }
        };
        let invitation = invitations.into_iter().next()?;

        match self
            .store
            .add_membership(invitation.household_id, user_id, MemberRole::Member)
            .await
        {
            Ok(_) => {}
            // The pairing already exists, e.g. from a retried sign-in.
            Err(StoreError::Conflict(_)) => {
                debug!(household = %invitation.household_id, "invited user already a member");
            }
            Err(err) => {
                warn!(error = %err, "could not accept invitation, continuing without");
                return None;
            }
        }

        if let Err(err) = self.store.delete_invitation(invitation.id).await {
            warn!(error = %err, invitation = %invitation.id, "consumed invitation not deleted");
        }
        Some(invitation.household_id)
    }

    /// Household creation and the admin insert are two separate calls; if
    /// the second fails the first is undone so no partial state survives.
    async fn create_default_household(&self, user_id: Uuid) -> Result<Household, ResolveError> {
        debug!(user = %user_id, "no memberships found, creating default household");
        let household = self
            .store
            .create_household(&self.default_name, user_id)
            .await?;
        match self
            .store
            .add_membership(household.id, user_id, MemberRole::Admin)
            .await
        {
            Ok(_) => Ok(household),
            Err(cause) => match self.store.delete_household(household.id).await {
                Ok(()) => Err(ResolveError::DataAccess(cause)),
                Err(rollback) => Err(ResolveError::Compensation {
                    household: household.id,
                    cause,
                    rollback,
                }),
            },
        }
    }

    /// Picks the household with the strictly greatest member count; ties go
    /// to the first household in the original membership listing order.
    async fn most_populated(&self, memberships: &[Membership]) -> Result<Uuid, StoreError> {
        let household_ids: Vec<Uuid> = memberships.iter().map(|m| m.household_id).collect();
        let counts = self.store.member_counts(&household_ids).await?;

        let mut selected = household_ids[0];
        let mut max_members = counts.get(&selected).copied().unwrap_or(0);
        for id in &household_ids[1..] {
            let members = counts.get(id).copied().unwrap_or(0);
            if members > max_members {
                max_members = members;
                selected = *id;
            }
        }
        Ok(selected)
    }
}
