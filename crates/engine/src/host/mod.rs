//! Integration interface onto the host token engine's own state.
//!
//! The dynamic provider reads tokens that other components defined inside the
//! host engine. The engine exposes them through three hops, each of which may
//! be absent:
//!
//! 1. [`HostEngine`]: the engine itself, which may not be initialized yet,
//! 2. [`TokenContext`]: the per-component cached token context, which exists
//!    only once the engine has scanned that component,
//! 3. [`TokenHandle`]: a named token inside that context.
//!
//! Host integrations adapt their concrete objects to these traits; the
//! in-memory implementations in [`memory`] serve embedders and tests.

use std::{fmt::Debug, sync::Arc};

use crossmod_registry::ComponentError;
use crossmod_types::{ComponentId, InputArguments};

pub mod memory;
mod null;

pub use memory::{FnTokenHandle, MemoryHostEngine, MemoryToken, MemoryTokenContext};
pub use null::NullHostEngine;

/// Host engine surface consumed by the dynamic provider.
pub trait HostEngine: Debug + Send + Sync {
    /// Whether the engine's conditions subsystem has finished initializing.
    fn is_ready(&self) -> bool;

    /// Token context the engine keeps for `component`, if it scanned it.
    fn component_token_context(&self, component: &ComponentId) -> Option<Arc<dyn TokenContext>>;
}

/// Tokens defined by one component inside the host engine.
pub trait TokenContext: Debug + Send + Sync {
    fn get_token(&self, name: &str) -> Option<Arc<dyn TokenHandle>>;
}

/// Externally owned token whose concrete type is unknown to this crate.
pub trait TokenHandle: Debug + Send + Sync {
    fn name(&self) -> &str;

    /// Produces the token's values for `input`.
    ///
    /// Returns `None` when the handle does not expose a value-producing
    /// capability, and `Some(Err(_))` when invoking it failed.
    fn try_produce_values(&self, input: &InputArguments) -> Option<Result<Vec<String>, ComponentError>>;
}
