// Copyright 2026 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::error::TransferError;
use crate::voucher::is_valid_ibc_denom;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_IBC_CRO_DENOM: &str =
    "ibc/6B5A664BF0AF4F71B2F0BAA33141E2F1321242FBD5D19762F541EC971ACB0865";

/// 86400 seconds
pub const DEFAULT_IBC_TIMEOUT_NANOS: u64 = 86_400_000_000_000;

pub const DEFAULT_SOURCE_PORT: &str = "transfer";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransferParams {
    /// Voucher denomination of the native token of the counterparty hub chain.
    /// default: `ibc/6B5A664BF0AF4F71B2F0BAA33141E2F1321242FBD5D19762F541EC971ACB0865`
    pub ibc_cro_denom: String,

    /// How long, in nanoseconds, an outgoing transfer stays valid.
    /// default: 1 day
    pub ibc_timeout: u64,

    /// Port outgoing transfers are sent from.
    /// default: `transfer`
    pub source_port: String,
}

impl Default for TransferParams {
    fn default() -> Self {
        TransferParams {
            ibc_cro_denom: DEFAULT_IBC_CRO_DENOM.to_string(),
            ibc_timeout: DEFAULT_IBC_TIMEOUT_NANOS,
            source_port: DEFAULT_SOURCE_PORT.to_string(),
        }
    }
}

impl TransferParams {
    /// Parses and validates params encoded the way they appear in genesis.
    pub fn from_json_str(raw: &str) -> Result<Self, TransferError> {
        let params: TransferParams = serde_json::from_str(raw)
            .map_err(|err| TransferError::invalid_params(err.to_string()))?;
        params.validate()?;
        Ok(params)
    }

    pub fn ibc_timeout_duration(&self) -> Duration {
        Duration::from_nanos(self.ibc_timeout)
    }

    pub fn validate(&self) -> Result<(), TransferError> {
        if !is_valid_ibc_denom(&self.ibc_cro_denom) {
            return Err(TransferError::invalid_params(format!(
                "'{}' is not a valid ibc voucher denomination",
                self.ibc_cro_denom
            )));
        }
        if self.ibc_timeout == 0 {
            return Err(TransferError::invalid_params("ibc timeout must be positive"));
        }
        if self.source_port.trim().is_empty() {
            return Err(TransferError::invalid_params(
                "source port must not be empty",
            ));
        }
        Ok(())
    }
}
