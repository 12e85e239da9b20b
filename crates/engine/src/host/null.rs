use std::sync::Arc;

use crossmod_types::ComponentId;

use super::{HostEngine, TokenContext};

/// Host engine stand-in used when no token engine is installed.
///
/// Never ready and never has token contexts, so dynamic lookups yield nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHostEngine;

impl HostEngine for NullHostEngine {
    fn is_ready(&self) -> bool {
        false
    }

    fn component_token_context(&self, _component: &ComponentId) -> Option<Arc<dyn TokenContext>> {
        None
    }
}
