// Copyright 2026 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransferError {
    #[error("'{denom}' is not a valid denomination for transfer: {reason}")]
    InvalidDenom { denom: String, reason: String },

    #[error("failed to decode hex hash: {source}")]
    InvalidHexHash {
        #[from]
        source: hex::FromHexError,
    },

    #[error("expected hash size to be {expected} bytes, got {got} bytes")]
    UnexpectedHashLength { expected: usize, got: usize },

    #[error("denom trace for hash {hash} does not exist")]
    UnknownDenomTrace { hash: String },

    #[error("denom trace path '{path}' is not a single port/channel hop")]
    InvalidTracePath { path: String },

    #[error("the transfer request does not specify a token")]
    MissingToken,

    #[error("invalid coin '{coin}': {reason}")]
    InvalidCoin { coin: String, reason: String },

    #[error("'{raw}' is not a valid token amount")]
    InvalidAmount { raw: String },

    #[error("the transfer timeout overflows the timestamp range")]
    TimestampOverflow,

    #[error("invalid transfer params: {reason}")]
    InvalidParams { reason: String },
}

impl TransferError {
    pub(crate) fn invalid_denom<D, R>(denom: D, reason: R) -> Self
    where
        D: Into<String>,
        R: Into<String>,
    {
        TransferError::InvalidDenom {
            denom: denom.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_params<R: Into<String>>(reason: R) -> Self {
        TransferError::InvalidParams {
            reason: reason.into(),
        }
    }
}
