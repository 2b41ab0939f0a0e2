//! Chain parameter registry
//!
//! Owns the single active [`ParameterBundle`] for the process lifetime.
//! The registry starts unselected, transitions to selected exactly once
//! during startup, and is read-only from then on. Reading before selection
//! is a startup-ordering bug and panics rather than returning an error.

use log::info;

use crate::chain::bundle::{create_bundle, ChainParamsError, ParameterBundle};

/// Registry holding the active chain parameters.
///
/// Construct one at process start, call [`Registry::select_network`] once,
/// then share read-only references with every component that needs the
/// parameters. No locking is required after selection because nothing
/// mutates the bundle on the production code path.
#[derive(Debug, Default)]
pub struct Registry {
    active: Option<ParameterBundle>,
}

impl Registry {
    /// A registry in the unselected state
    pub const fn new() -> Self {
        Registry { active: None }
    }

    /// Construct and install the bundle for a network identifier.
    ///
    /// Intended to be called exactly once per process, before any reader
    /// exists. Calling it again replaces the previous bundle; callers that
    /// have already handed out references cannot reach this by construction
    /// (it requires `&mut self`).
    pub fn select_network(&mut self, identifier: &str) -> Result<&ParameterBundle, ChainParamsError> {
        let bundle = create_bundle(identifier)?;
        info!(
            "selected chain parameters: network={} genesis={}",
            bundle.network, bundle.consensus.genesis_hash
        );
        Ok(self.active.insert(bundle))
    }

    /// Whether a network has been selected
    pub fn is_selected(&self) -> bool {
        self.active.is_some()
    }

    /// The active bundle.
    ///
    /// # Panics
    ///
    /// Panics if no network has been selected. This is deliberate: querying
    /// parameters before selection indicates a startup-ordering bug, never
    /// a condition callers should handle at runtime.
    pub fn active_bundle(&self) -> &ParameterBundle {
        self.active
            .as_ref()
            .expect("chain parameters queried before a network was selected")
    }

    /// Override one deployment's signaling window on the active bundle.
    ///
    /// Test harnesses only. Must not run concurrently with readers; call it
    /// during single-threaded test setup.
    ///
    /// # Panics
    ///
    /// Panics if no network has been selected.
    #[cfg(any(test, feature = "test-overrides"))]
    pub fn update_deployment_parameters(
        &mut self,
        pos: crate::consensus::DeploymentPos,
        start_time: i64,
        timeout: i64,
    ) {
        self.active
            .as_mut()
            .expect("deployment override before a network was selected")
            .update_deployment_parameters(pos, start_time, timeout);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::bundle::Network;
    use crate::consensus::DeploymentPos;

    #[test]
    fn test_starts_unselected() {
        let registry = Registry::new();
        assert!(!registry.is_selected());
    }

    #[test]
    #[should_panic(expected = "before a network was selected")]
    fn test_active_bundle_before_select_panics() {
        let registry = Registry::new();
        let _ = registry.active_bundle();
    }

    #[test]
    fn test_select_then_read() {
        let mut registry = Registry::new();
        registry.select_network("main").unwrap();
        assert!(registry.is_selected());
        assert_eq!(registry.active_bundle().network, Network::Main);
    }

    #[test]
    fn test_select_unknown_network_fails_and_stays_unselected() {
        let mut registry = Registry::new();
        let err = registry.select_network("bogus").unwrap_err();
        assert!(matches!(err, ChainParamsError::UnknownNetwork(_)));
        assert!(!registry.is_selected());
    }

    #[test]
    fn test_reselect_replaces_bundle() {
        let mut registry = Registry::new();
        registry.select_network("main").unwrap();
        registry.select_network("regtest").unwrap();
        assert_eq!(registry.active_bundle().network, Network::Regtest);
    }

    #[test]
    fn test_deployment_override_on_selected_bundle() {
        let mut registry = Registry::new();
        registry.select_network("regtest").unwrap();

        let before = registry.active_bundle().clone();
        registry.update_deployment_parameters(DeploymentPos::Segwit, 100, 200);

        let after = registry.active_bundle();
        let segwit = after.consensus.deployment(DeploymentPos::Segwit);
        assert_eq!((segwit.start_time, segwit.timeout), (100, 200));

        // Only the named deployment moved
        assert_eq!(
            after.consensus.deployment(DeploymentPos::TestDummy),
            before.consensus.deployment(DeploymentPos::TestDummy)
        );
        assert_eq!(
            after.consensus.deployment(DeploymentPos::Csv),
            before.consensus.deployment(DeploymentPos::Csv)
        );
        assert_eq!(after.encoding, before.encoding);
        assert_eq!(after.checkpoints, before.checkpoints);
        assert_eq!(after.genesis, before.genesis);
    }
}
