//! Account administration service — application-layer orchestration
//!
//! Every operator-facing use-case lives here. The console front-ends are thin
//! wrappers that read input, delegate to this service and print the outcome.

use std::sync::Arc;

use tracing::{info, warn};
use validator::Validate;

use super::report::{AssignmentOutcome, BatchReport};
use crate::domain::{
    AppError, AppResult, ClaimsBundle, ContractorAssignment, CreateAdminDto, IdentityProvider,
};

/// Returned after an admin account was created and tagged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedAdmin {
    pub uid: String,
    pub email: String,
}

/// Account service — orchestrates account lifecycle and role tagging.
///
/// Generic over `P: IdentityProvider` so it stays decoupled from the
/// concrete provider client.
pub struct AccountService<P: IdentityProvider> {
    provider: Arc<P>,
}

impl<P: IdentityProvider> AccountService<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    // ── Account lifecycle ───────────────────────────────────────

    /// Create an account and tag it `{role: "admin"}`.
    ///
    /// Creation and tagging are two separate provider calls. If tagging
    /// fails the new account is kept as it is and the error carries its uid
    /// so the role can be assigned by hand.
    pub async fn create_admin(&self, dto: CreateAdminDto) -> AppResult<CreatedAdmin> {
        dto.validate()?;

        let uid = self
            .provider
            .create_account(&dto.email, &dto.password)
            .await?;
        info!(uid = %uid, email = %dto.email, "Account created");

        if let Err(source) = self.provider.set_claims(&uid, &ClaimsBundle::admin()).await {
            warn!(uid = %uid, error = %source, "Admin role not assigned to new account");
            return Err(AppError::RoleNotAssigned { uid, source });
        }

        info!(uid = %uid, "Admin role assigned");
        Ok(CreatedAdmin {
            uid,
            email: dto.email,
        })
    }

    /// Delete the account registered under `email`. Returns its uid.
    pub async fn delete_admin(&self, email: &str) -> AppResult<String> {
        let account = self
            .provider
            .lookup_account_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound {
                entity: "Account",
                field: "email",
                value: email.to_string(),
            })?;

        self.provider.delete_account(&account.uid).await?;

        info!(uid = %account.uid, email, "Account deleted");
        Ok(account.uid)
    }

    // ── Role tagging ────────────────────────────────────────────

    /// Replace the account's claims with `claims`.
    ///
    /// Claims previously set on the account and absent from `claims` are
    /// dropped; pass the complete bundle every time.
    pub async fn set_role(&self, uid: &str, claims: &ClaimsBundle) -> AppResult<()> {
        claims.check()?;
        self.provider.set_claims(uid, claims).await?;
        info!(uid, claims = ?claims, "Claims replaced");
        Ok(())
    }

    pub async fn assign_contractor(&self, assignment: &ContractorAssignment) -> AppResult<()> {
        self.set_role(&assignment.uid, &assignment.claims()).await
    }

    /// Apply every registry entry in order.
    ///
    /// Entries are independent: a failure is recorded and the next entry is
    /// still attempted. `observe` sees each outcome as soon as it is known.
    pub async fn assign_contractors<F>(
        &self,
        registry: &[ContractorAssignment],
        mut observe: F,
    ) -> BatchReport
    where
        F: FnMut(&AssignmentOutcome),
    {
        let mut report = BatchReport::default();

        for assignment in registry {
            let result = self.assign_contractor(assignment).await;
            if let Err(e) = &result {
                warn!(uid = %assignment.uid, department = %assignment.department, error = %e, "Contractor assignment failed");
            }

            let outcome = AssignmentOutcome {
                assignment: assignment.clone(),
                result,
            };
            observe(&outcome);
            report.outcomes.push(outcome);
        }

        report
    }
}
