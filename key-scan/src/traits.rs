use crate::error::Result;
use crate::types::{Credential, Outcome, ProbeTarget};
use std::future::Future;

/// Trait for endpoint probers.
///
/// Implementations never fail: every transport or protocol problem is
/// folded into an [`Outcome`] so the caller can move on to the next target.
pub trait Prober: Send + Sync {
    /// Probe a single target with the credential
    fn probe(
        &self,
        target: &ProbeTarget,
        credential: &Credential,
    ) -> impl Future<Output = Outcome> + Send;
}

/// Trait for sources of probe targets
pub trait CatalogSource: Send + Sync {
    /// Fetch every target that has a usable endpoint
    fn fetch_catalog(&self) -> impl Future<Output = Result<Vec<ProbeTarget>>> + Send;
}

/// Trait for configuration validation
pub trait ConfigValidator: Send + Sync {
    type Config;

    /// Validate configuration
    fn validate(&self, config: &Self::Config) -> Result<()>;
}
