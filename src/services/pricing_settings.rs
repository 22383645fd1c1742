//! Per-account pricing configuration
//!
//! Built once at start-up and shared through `AppState`. Accounts keep a
//! partial override set merged over the deployment baseline. Any invalid
//! account or request value falls back to the baseline's value.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::pricing::{resolve_pricing, Pricing, PricingOverrides};

#[derive(Clone, Default)]
pub struct PricingSettingsService {
    /// Built-in defaults with the deployment overrides applied, sanitized
    baseline: Pricing,
    accounts: Arc<RwLock<HashMap<Uuid, PricingOverrides>>>,
}

impl PricingSettingsService {
    pub fn new(deployment: PricingOverrides) -> Self {
        Self {
            baseline: resolve_pricing(&deployment, &Pricing::default()),
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Pricing for callers with no account
    pub fn default_pricing(&self) -> Pricing {
        self.baseline
    }

    /// Overrides stored for the account (empty when none)
    pub fn stored_overrides(&self, account_id: Uuid) -> PricingOverrides {
        self.accounts
            .read()
            .get(&account_id)
            .copied()
            .unwrap_or_default()
    }

    pub fn effective_pricing(&self, account_id: Uuid) -> Pricing {
        resolve_pricing(&self.stored_overrides(account_id), &self.baseline)
    }

    /// Effective pricing with per-request overrides on top
    pub fn pricing_for_request(
        &self,
        account_id: Option<Uuid>,
        request: Option<&PricingOverrides>,
    ) -> Pricing {
        let stored = account_id
            .map(|id| self.stored_overrides(id))
            .unwrap_or_default();
        let layered = match request {
            Some(overrides) => stored.overlay(overrides),
            None => stored,
        };
        resolve_pricing(&layered, &self.baseline)
    }

    /// Replace the account's overrides and return the resulting pricing
    pub fn save_overrides(&self, account_id: Uuid, overrides: PricingOverrides) -> Pricing {
        if overrides.is_empty() {
            self.accounts.write().remove(&account_id);
        } else {
            self.accounts.write().insert(account_id, overrides);
        }
        tracing::debug!(account_id = %account_id, "Pricing overrides saved");
        self.effective_pricing(account_id)
    }

    /// Drop the account's overrides. Returns whether any were stored.
    pub fn reset(&self, account_id: Uuid) -> bool {
        self.accounts.write().remove(&account_id).is_some()
    }
}
