use std::sync::atomic::{AtomicBool, Ordering};

use alloy::{primitives::Address, signers::local::PrivateKeySigner};
use hookah_core::AccountProvider;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("missing signer: pass --private-key or set PRIVATE_KEY")]
    MissingKey,
    #[error("invalid private key: {0}")]
    InvalidKey(String),
}

/// The wallet as the form sees it: an optional signer that the user can
/// connect and disconnect.
#[derive(Debug)]
pub struct WalletSession {
    signer: Option<PrivateKeySigner>,
    connected: AtomicBool,
}

impl WalletSession {
    pub fn new(signer: Option<PrivateKeySigner>) -> Self {
        let connected = signer.is_some();
        Self {
            signer,
            connected: AtomicBool::new(connected),
        }
    }

    pub fn from_key(key: Option<&str>) -> Result<Self, WalletError> {
        let signer = key.map(parse_signer).transpose()?;
        Ok(Self::new(signer))
    }

    pub fn signer(&self) -> Option<&PrivateKeySigner> {
        self.signer.as_ref()
    }

    pub fn is_available(&self) -> bool {
        self.signer.is_some()
    }

    /// Flips the connection and returns the new state. Without a signer the
    /// session stays disconnected.
    pub fn toggle(&self) -> bool {
        if self.signer.is_none() {
            return false;
        }
        !self.connected.fetch_xor(true, Ordering::SeqCst)
    }
}

impl AccountProvider for WalletSession {
    fn account(&self) -> Option<Address> {
        if self.connected.load(Ordering::SeqCst) {
            self.signer.as_ref().map(PrivateKeySigner::address)
        } else {
            None
        }
    }
}

pub fn parse_signer(key: &str) -> Result<PrivateKeySigner, WalletError> {
    key.trim()
        .parse::<PrivateKeySigner>()
        .map_err(|err| WalletError::InvalidKey(err.to_string()))
}
