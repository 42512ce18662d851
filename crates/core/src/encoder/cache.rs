use alloy::primitives::Address;
use tracing::debug;

use crate::types::{form::FormState, payload::CallPayload};

/// What a cached call list was derived from.
///
/// `inputs` is `None` when the call list does not depend on the form, leaving
/// the account identity as the only key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheKey {
    pub account: Option<Address>,
    pub inputs: Option<FormState>,
}

#[derive(Debug, Default)]
pub struct CallCache {
    entry: Option<(CacheKey, Vec<CallPayload>)>,
    builds: u64,
}

impl CallCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_fresh(&self, key: &CacheKey) -> bool {
        matches!(&self.entry, Some((cached, _)) if cached == key)
    }

    /// Returns the cached calls for `key`, rebuilding them on a key change.
    /// A failed build leaves the previous entry in place.
    pub fn get_or_try_build<E>(
        &mut self,
        key: CacheKey,
        build: impl FnOnce(Option<Address>) -> Result<Vec<CallPayload>, E>,
    ) -> Result<&[CallPayload], E> {
        if !self.is_fresh(&key) {
            debug!(account = ?key.account, "rebuilding order calls");
            let calls = build(key.account)?;
            self.builds += 1;
            self.entry = Some((key, calls));
        }

        Ok(self
            .entry
            .as_ref()
            .map(|(_, calls)| calls.as_slice())
            .unwrap_or_default())
    }

    /// Number of rebuilds so far.
    pub fn builds(&self) -> u64 {
        self.builds
    }
}
