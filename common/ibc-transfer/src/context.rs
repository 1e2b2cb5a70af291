// Copyright 2026 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::error::TransferError;
use std::time::Duration;
use tendermint::block::Height;
use tendermint::chain;
use time::OffsetDateTime;

/// Execution context handed to keeper operations: the header information
/// of the block currently being executed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeeperContext {
    pub chain_id: chain::Id,
    pub block_height: Height,
    pub block_time: OffsetDateTime,
}

impl KeeperContext {
    pub fn new(chain_id: chain::Id, block_height: Height, block_time: OffsetDateTime) -> Self {
        KeeperContext {
            chain_id,
            block_height,
            block_time,
        }
    }

    pub fn block_time_unix_nanos(&self) -> i128 {
        self.block_time.unix_timestamp_nanos()
    }

    /// Unix timestamp, in nanoseconds, `after` the current block time.
    pub fn timestamp_after(&self, after: Duration) -> Result<u64, TransferError> {
        let timestamp = self
            .block_time_unix_nanos()
            .checked_add(after.as_nanos() as i128)
            .ok_or(TransferError::TimestampOverflow)?;

        u64::try_from(timestamp).map_err(|_| TransferError::TimestampOverflow)
    }
}
