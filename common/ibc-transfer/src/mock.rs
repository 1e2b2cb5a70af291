// Copyright 2026 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

//! Deterministic stand-in for the transfer keeper, for use in test suites.
//!
//! Transfers are accepted without doing anything and only two denom trace
//! hashes are known:
//!
//! | hash | trace |
//! |---|---|
//! | [`BASETCRO_DENOM_TRACE_HASH`] | `transfer/channel-0/basetcro` |
//! | [`CORRECT_IBC_TOKEN_DENOM_TRACE_HASH`] | `transfer/channel-0/correctIBCToken` |

use crate::context::KeeperContext;
use crate::denom_trace::DenomTrace;
use crate::error::TransferError;
use crate::hex_bytes::HexBytes;
use crate::keeper::TransferKeeper;
use crate::msgs::{MsgTransfer, MsgTransferResponse};
use tracing::{debug, trace};

/// `sha256("transfer/channel-0/basetcro")`
pub const BASETCRO_DENOM_TRACE_HASH: &str =
    "6B5A664BF0AF4F71B2F0BAA33141E2F1321242FBD5D19762F541EC971ACB0865";

// not an actual hash of its trace
pub const CORRECT_IBC_TOKEN_DENOM_TRACE_HASH: &str =
    "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

pub const MOCK_TRACE_PATH: &str = "transfer/channel-0";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IbcKeeperMock;

impl IbcKeeperMock {
    pub fn new() -> Self {
        IbcKeeperMock
    }

    /// The lookup as a `(trace, found)` pair, an empty trace accompanies `found = false`.
    pub fn lookup(&self, denom_trace_hash: &HexBytes) -> (DenomTrace, bool) {
        match self.known_trace(denom_trace_hash) {
            Some(trace) => (trace, true),
            None => (DenomTrace::default(), false),
        }
    }

    fn known_trace(&self, denom_trace_hash: &HexBytes) -> Option<DenomTrace> {
        let hash = denom_trace_hash.to_string();
        let trace = if hash == BASETCRO_DENOM_TRACE_HASH {
            Some(DenomTrace::new(MOCK_TRACE_PATH, "basetcro"))
        } else if hash == CORRECT_IBC_TOKEN_DENOM_TRACE_HASH {
            Some(DenomTrace::new(MOCK_TRACE_PATH, "correctIBCToken"))
        } else {
            None
        };

        match &trace {
            Some(found) => trace!("resolved denom trace {hash} to {found}"),
            None => trace!("no denom trace is known for {hash}"),
        }
        trace
    }
}

impl TransferKeeper for IbcKeeperMock {
    fn transfer(
        &self,
        _ctx: &KeeperContext,
        msg: &MsgTransfer,
    ) -> Result<Option<MsgTransferResponse>, TransferError> {
        debug!(
            "ignoring transfer of '{}' over {}/{}",
            msg.token, msg.source_port, msg.source_channel
        );
        Ok(None)
    }

    fn get_denom_trace(
        &self,
        _ctx: &KeeperContext,
        denom_trace_hash: &HexBytes,
    ) -> Option<DenomTrace> {
        self.known_trace(denom_trace_hash)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::coin::Coin;
    use crate::msgs::TimeoutHeight;
    use std::sync::Arc;
    use std::thread;
    use tendermint::block::Height;
    use time::OffsetDateTime;

    fn ctx() -> KeeperContext {
        KeeperContext::new(
            "cronos_777-1".parse().unwrap(),
            Height::from(1u32),
            OffsetDateTime::UNIX_EPOCH,
        )
    }

    fn hash(raw: &str) -> HexBytes {
        raw.parse().unwrap()
    }

    #[test]
    fn resolves_basetcro_trace() {
        let trace = IbcKeeperMock.get_denom_trace(&ctx(), &hash(BASETCRO_DENOM_TRACE_HASH));
        assert_eq!(
            trace,
            Some(DenomTrace {
                path: "transfer/channel-0".to_string(),
                base_denom: "basetcro".to_string(),
            })
        );
    }

    #[test]
    fn resolves_correct_ibc_token_trace() {
        let trace = IbcKeeperMock.get_denom_trace(
            &ctx(),
            &hash("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA"),
        );
        assert_eq!(
            trace,
            Some(DenomTrace {
                path: "transfer/channel-0".to_string(),
                base_denom: "correctIBCToken".to_string(),
            })
        );
    }

    #[test]
    fn known_hash_is_the_hash_of_its_trace() {
        let trace = DenomTrace::new(MOCK_TRACE_PATH, "basetcro");
        assert_eq!(
            IbcKeeperMock.get_denom_trace(&ctx(), &trace.hash()),
            Some(trace)
        );
    }

    #[test]
    fn keys_are_compared_by_canonical_rendering() {
        // lowercase input decodes to the same bytes, hence the same uppercase rendering
        let lowercase = hash(&BASETCRO_DENOM_TRACE_HASH.to_lowercase());
        assert!(IbcKeeperMock.get_denom_trace(&ctx(), &lowercase).is_some());
    }

    #[test]
    fn unknown_hashes_are_not_found() {
        let unknown = [
            HexBytes::default(),
            hash("0000000000000000000000000000000000000000000000000000000000000000"),
            // one nibble off
            hash("6B5A664BF0AF4F71B2F0BAA33141E2F1321242FBD5D19762F541EC971ACB0866"),
            // truncated
            hash("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA"),
            // extended
            hash("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA"),
            DenomTrace::new(MOCK_TRACE_PATH, "correctIBCToken").hash(),
        ];

        for hash in unknown {
            assert_eq!(IbcKeeperMock.get_denom_trace(&ctx(), &hash), None);
            assert_eq!(IbcKeeperMock.lookup(&hash), (DenomTrace::default(), false));
        }
    }

    #[test]
    fn lookup_reports_found_flag() {
        let (trace, found) = IbcKeeperMock.lookup(&hash(CORRECT_IBC_TOKEN_DENOM_TRACE_HASH));
        assert!(found);
        assert_eq!(trace.base_denom, "correctIBCToken");
        assert_eq!(trace.path, MOCK_TRACE_PATH);
    }

    #[test]
    fn transfer_of_empty_request_succeeds_without_response() {
        let res = IbcKeeperMock.transfer(&ctx(), &MsgTransfer::default());
        assert_eq!(res, Ok(None));
    }

    #[test]
    fn transfer_of_arbitrary_request_succeeds_without_response() {
        let msg = MsgTransfer {
            source_port: "transfer".to_string(),
            source_channel: "channel-404".to_string(),
            token: Coin::new(u128::MAX, "not a denom"),
            sender: String::new(),
            receiver: "whoever".to_string(),
            timeout_height: TimeoutHeight::At {
                revision_number: 0,
                revision_height: 1,
            },
            timeout_timestamp: u64::MAX,
            memo: "🦀".to_string(),
        };
        assert_eq!(IbcKeeperMock.transfer(&ctx(), &msg), Ok(None));
    }

    #[test]
    fn concurrent_calls_are_deterministic() {
        let keeper: Arc<dyn TransferKeeper> = Arc::new(IbcKeeperMock::new());
        let expected = IbcKeeperMock.get_denom_trace(&ctx(), &hash(BASETCRO_DENOM_TRACE_HASH));

        let handles = (0..8)
            .map(|_| {
                let keeper = Arc::clone(&keeper);
                thread::spawn(move || {
                    let ctx = ctx();
                    (0..100)
                        .map(|_| {
                            let transfer = keeper.transfer(&ctx, &MsgTransfer::default());
                            let known =
                                keeper.get_denom_trace(&ctx, &hash(BASETCRO_DENOM_TRACE_HASH));
                            let unknown = keeper.get_denom_trace(&ctx, &HexBytes::from([0u8; 32]));
                            (transfer, known, unknown)
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect::<Vec<_>>();

        for handle in handles {
            for (transfer, known, unknown) in handle.join().unwrap() {
                assert_eq!(transfer, Ok(None));
                assert_eq!(known, expected);
                assert_eq!(unknown, None);
            }
        }
    }
}
