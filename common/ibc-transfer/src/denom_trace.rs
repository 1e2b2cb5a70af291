// Copyright 2026 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

//! ICS-20 denomination traces.
//!
//! A token that travelled over IBC is represented on the receiving chain by a
//! voucher denomination of the form `ibc/{HASH}`, where `HASH` is the uppercase
//! hex encoding of `sha256(path + "/" + base_denom)`.

use crate::error::TransferError;
use crate::hex_bytes::HexBytes;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt::{self, Display, Formatter};

/// Prefix of every voucher denomination.
pub const DENOM_PREFIX: &str = "ibc";

/// Size, in bytes, of a denom trace hash.
pub const DENOM_TRACE_HASH_SIZE: usize = 32;

const CHANNEL_PREFIX: &str = "channel-";

/// The source tracing information of a fungible token: the chain of port/channel
/// identifiers it travelled over and its denomination on the origin chain.
#[derive(Clone, Default, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DenomTrace {
    /// Chain of port/channel identifiers used for tracing the source of the token,
    /// e.g. `transfer/channel-0`.
    pub path: String,

    /// Base denomination of the relayed fungible token.
    pub base_denom: String,
}

impl DenomTrace {
    pub fn new<P, B>(path: P, base_denom: B) -> Self
    where
        P: Into<String>,
        B: Into<String>,
    {
        DenomTrace {
            path: path.into(),
            base_denom: base_denom.into(),
        }
    }

    /// Splits a full denomination path into its trace and base denomination.
    ///
    /// Leading `{port}/{channel}` pairs form the path for as long as the channel
    /// segment looks like an ibc-go channel identifier; whatever remains is the
    /// base denomination, slashes included.
    ///
    /// - `transfer/channel-1/uatom` => `{ path: "transfer/channel-1", base_denom: "uatom" }`
    /// - `uatom` => `{ path: "", base_denom: "uatom" }`
    /// - `transfer/channel-1/gamm/pool/1` => `{ path: "transfer/channel-1", base_denom: "gamm/pool/1" }`
    pub fn parse(raw_denom: &str) -> Self {
        let segments = raw_denom.split('/').collect::<Vec<_>>();
        if segments.len() == 1 {
            return DenomTrace::new("", raw_denom);
        }

        let mut path = Vec::new();
        let mut base = Vec::new();
        let length = segments.len();
        let mut i = 0;
        while i < length {
            if i < length - 1 && length > 2 && is_valid_channel_id(segments[i + 1]) {
                path.push(segments[i]);
                path.push(segments[i + 1]);
            } else {
                base.extend_from_slice(&segments[i..]);
                break;
            }
            i += 2;
        }

        DenomTrace::new(path.join("/"), base.join("/"))
    }

    /// Whether the token has never left its origin chain.
    pub fn is_native(&self) -> bool {
        self.path.is_empty()
    }

    /// Receiving denomination prefix, composed of the trace and a separator.
    pub fn prefix(&self) -> String {
        if self.path.is_empty() {
            String::new()
        } else {
            format!("{}/", self.path)
        }
    }

    /// `path/base_denom`, or only the base denomination if there is no trace.
    pub fn full_denom_path(&self) -> String {
        if self.path.is_empty() {
            self.base_denom.clone()
        } else {
            format!("{}{}", self.prefix(), self.base_denom)
        }
    }

    pub fn hash(&self) -> HexBytes {
        let digest = Sha256::digest(self.full_denom_path().as_bytes());
        HexBytes::from(digest.to_vec())
    }

    /// The voucher denomination (`ibc/{HASH}`) of this trace, or the base
    /// denomination if the trace is empty.
    pub fn ibc_denom(&self) -> String {
        if self.path.is_empty() {
            return self.base_denom.clone();
        }
        format!("{DENOM_PREFIX}/{}", self.hash())
    }
}

impl Display for DenomTrace {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_denom_path())
    }
}

/// `channel-{sequence}` with a decimal sequence
pub fn is_valid_channel_id(channel_id: &str) -> bool {
    channel_id
        .strip_prefix(CHANNEL_PREFIX)
        .map(|sequence| !sequence.is_empty() && sequence.parse::<u64>().is_ok())
        .unwrap_or(false)
}

/// Parses a hex encoded hash and checks its size.
/// An empty hash is accepted as is.
pub fn parse_hex_hash(hex_hash: &str) -> Result<HexBytes, TransferError> {
    let hash: HexBytes = hex_hash.parse()?;
    if !hash.is_empty() && hash.len() != DENOM_TRACE_HASH_SIZE {
        return Err(TransferError::UnexpectedHashLength {
            expected: DENOM_TRACE_HASH_SIZE,
            got: hash.len(),
        });
    }
    Ok(hash)
}

/// Checks that the denomination is either a valid base denomination (e.g. `uatom`)
/// or a well-formed voucher (`ibc/{hash}`).
pub fn validate_ibc_denom(denom: &str) -> Result<(), TransferError> {
    if denom.trim().is_empty() {
        return Err(TransferError::invalid_denom(
            denom,
            "denomination should not be empty",
        ));
    }

    if let Err(err) = denom.parse::<cosmrs::Denom>() {
        return Err(TransferError::invalid_denom(denom, err.to_string()));
    }

    if denom == DENOM_PREFIX {
        return Err(TransferError::invalid_denom(
            denom,
            "denomination should be prefixed with the format 'ibc/{hash(trace + \"/\" + denom)}'",
        ));
    }

    match denom.split_once('/') {
        Some((DENOM_PREFIX, hash)) => {
            if hash.trim().is_empty() {
                return Err(TransferError::invalid_denom(
                    denom,
                    "denomination should be of the form 'ibc/{hash}'",
                ));
            }
            parse_hex_hash(hash)
                .map(|_| ())
                .map_err(|err| TransferError::invalid_denom(denom, err.to_string()))
        }
        _ => Ok(()),
    }
}
