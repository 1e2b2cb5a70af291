// Copyright 2026 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::context::KeeperContext;
use crate::denom_trace::DenomTrace;
use crate::error::TransferError;
use crate::hex_bytes::HexBytes;
use crate::msgs::{MsgTransfer, MsgTransferResponse};
use std::sync::Arc;

/// Capabilities of the ICS-20 transfer application that the module relies on.
///
/// Implementations get injected at construction time, which lets tests
/// substitute a deterministic keeper for the real one.
pub trait TransferKeeper: Send + Sync {
    /// Initiates a cross-chain token transfer.
    ///
    /// `Ok(None)` means the transfer was accepted but the keeper has no response
    /// to report.
    fn transfer(
        &self,
        ctx: &KeeperContext,
        msg: &MsgTransfer,
    ) -> Result<Option<MsgTransferResponse>, TransferError>;

    /// Looks up the denom trace stored under the given hash.
    fn get_denom_trace(&self, ctx: &KeeperContext, denom_trace_hash: &HexBytes)
        -> Option<DenomTrace>;
}

impl<K: TransferKeeper + ?Sized> TransferKeeper for &K {
    fn transfer(
        &self,
        ctx: &KeeperContext,
        msg: &MsgTransfer,
    ) -> Result<Option<MsgTransferResponse>, TransferError> {
        (**self).transfer(ctx, msg)
    }

    fn get_denom_trace(
        &self,
        ctx: &KeeperContext,
        denom_trace_hash: &HexBytes,
    ) -> Option<DenomTrace> {
        (**self).get_denom_trace(ctx, denom_trace_hash)
    }
}

impl<K: TransferKeeper + ?Sized> TransferKeeper for Box<K> {
    fn transfer(
        &self,
        ctx: &KeeperContext,
        msg: &MsgTransfer,
    ) -> Result<Option<MsgTransferResponse>, TransferError> {
        (**self).transfer(ctx, msg)
    }

    fn get_denom_trace(
        &self,
        ctx: &KeeperContext,
        denom_trace_hash: &HexBytes,
    ) -> Option<DenomTrace> {
        (**self).get_denom_trace(ctx, denom_trace_hash)
    }
}

impl<K: TransferKeeper + ?Sized> TransferKeeper for Arc<K> {
    fn transfer(
        &self,
        ctx: &KeeperContext,
        msg: &MsgTransfer,
    ) -> Result<Option<MsgTransferResponse>, TransferError> {
        (**self).transfer(ctx, msg)
    }

    fn get_denom_trace(
        &self,
        ctx: &KeeperContext,
        denom_trace_hash: &HexBytes,
    ) -> Option<DenomTrace> {
        (**self).get_denom_trace(ctx, denom_trace_hash)
    }
}
