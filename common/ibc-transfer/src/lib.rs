// Copyright 2026 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

pub mod coin;
pub mod context;
pub mod denom_trace;
pub mod error;
pub mod hex_bytes;
pub mod keeper;
pub mod msgs;
pub mod params;
pub mod voucher;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use coin::Coin;
pub use context::KeeperContext;
pub use denom_trace::DenomTrace;
pub use error::TransferError;
pub use hex_bytes::HexBytes;
pub use keeper::TransferKeeper;
pub use msgs::{MsgTransfer, MsgTransferResponse, TimeoutHeight};
pub use params::TransferParams;

#[cfg(any(test, feature = "mock"))]
pub use mock::IbcKeeperMock;
