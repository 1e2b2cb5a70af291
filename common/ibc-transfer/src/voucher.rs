// Copyright 2026 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

//! Helpers for moving ibc vouchers (`ibc/{HASH}` denominations) back to the
//! chain they originate from.

use crate::coin::Coin;
use crate::context::KeeperContext;
use crate::denom_trace::{is_valid_channel_id, parse_hex_hash, DenomTrace, DENOM_PREFIX};
use crate::error::TransferError;
use crate::keeper::TransferKeeper;
use crate::msgs::{MsgTransfer, MsgTransferResponse, TimeoutHeight};
use crate::params::{TransferParams, DEFAULT_SOURCE_PORT};
use tracing::debug;

const VOUCHER_HASH_HEX_LEN: usize = 64;

/// `ibc/` followed by 64 uppercase hex characters
pub fn is_valid_ibc_denom(denom: &str) -> bool {
    denom
        .strip_prefix(DENOM_PREFIX)
        .and_then(|rest| rest.strip_prefix('/'))
        .map(|hash| {
            hash.len() == VOUCHER_HASH_HEX_LEN
                && hash
                    .chars()
                    .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
        })
        .unwrap_or(false)
}

/// Voucher denomination `base_denom` receives after a single hop over `channel_id`
/// of the transfer port.
pub fn ibc_denom_for(channel_id: &str, base_denom: &str) -> String {
    DenomTrace::new(format!("{DEFAULT_SOURCE_PORT}/{channel_id}"), base_denom).ibc_denom()
}

/// Resolves the channel the voucher was received over.
pub fn source_channel_id<K>(
    keeper: &K,
    ctx: &KeeperContext,
    ibc_denom: &str,
) -> Result<String, TransferError>
where
    K: TransferKeeper + ?Sized,
{
    let hash = match ibc_denom.split_once('/') {
        Some((DENOM_PREFIX, hash)) if is_valid_ibc_denom(ibc_denom) => parse_hex_hash(hash)?,
        _ => {
            return Err(TransferError::invalid_denom(
                ibc_denom,
                "not an ibc voucher denomination",
            ))
        }
    };

    let trace = keeper
        .get_denom_trace(ctx, &hash)
        .ok_or_else(|| TransferError::UnknownDenomTrace {
            hash: hash.to_string(),
        })?;

    // only single hop vouchers, i.e. `{port}/{channel}`, can be sent back directly
    let channel = match trace.path.split('/').collect::<Vec<_>>().as_slice() {
        [port, channel] if !port.is_empty() && is_valid_channel_id(channel) => {
            Some(channel.to_string())
        }
        _ => None,
    };

    channel.ok_or(TransferError::InvalidTracePath { path: trace.path })
}

/// Sends `coin`, a voucher, back over the channel it was received on.
pub fn transfer_voucher_to_source<K>(
    keeper: &K,
    ctx: &KeeperContext,
    params: &TransferParams,
    sender: &str,
    receiver: &str,
    coin: Coin,
) -> Result<Option<MsgTransferResponse>, TransferError>
where
    K: TransferKeeper + ?Sized,
{
    let source_channel = source_channel_id(keeper, ctx, &coin.denom)?;
    let timeout_timestamp = ctx.timestamp_after(params.ibc_timeout_duration())?;

    let msg = MsgTransfer {
        source_port: params.source_port.clone(),
        source_channel,
        token: coin,
        sender: sender.to_string(),
        receiver: receiver.to_string(),
        timeout_height: TimeoutHeight::Never,
        timeout_timestamp,
        memo: String::new(),
    };

    debug!(
        "sending {} from {} to {} over {}/{}",
        msg.token, msg.sender, msg.receiver, msg.source_port, msg.source_channel
    );
    keeper.transfer(ctx, &msg)
}
