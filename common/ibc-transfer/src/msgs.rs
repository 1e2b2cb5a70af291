// Copyright 2026 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::coin::Coin;
use crate::error::TransferError;
use ibc_proto::google::protobuf::Any;
use ibc_proto::ibc::applications::transfer::v1::{
    MsgTransfer as RawMsgTransfer, MsgTransferResponse as RawMsgTransferResponse,
};
use ibc_proto::ibc::core::client::v1::Height as RawHeight;
use prost::Message;
use serde::{Deserialize, Serialize};

pub const MSG_TRANSFER_TYPE_URL: &str = "/ibc.applications.transfer.v1.MsgTransfer";

/// Block height after which the transfer packet can no longer be received on the counterparty.
#[derive(Serialize, Deserialize, Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TimeoutHeight {
    #[default]
    Never,
    At {
        revision_number: u64,
        revision_height: u64,
    },
}

impl From<Option<RawHeight>> for TimeoutHeight {
    fn from(raw: Option<RawHeight>) -> Self {
        match raw {
            // zero height is the protobuf encoding of "no timeout"
            Some(height) if height.revision_number != 0 || height.revision_height != 0 => {
                TimeoutHeight::At {
                    revision_number: height.revision_number,
                    revision_height: height.revision_height,
                }
            }
            _ => TimeoutHeight::Never,
        }
    }
}

impl From<TimeoutHeight> for Option<RawHeight> {
    fn from(height: TimeoutHeight) -> Self {
        match height {
            TimeoutHeight::Never => None,
            TimeoutHeight::At {
                revision_number,
                revision_height,
            } => Some(RawHeight {
                revision_number,
                revision_height,
            }),
        }
    }
}

/// Request to send `token` from `sender` over `source_port`/`source_channel` to `receiver`
/// on the counterparty chain.
#[derive(Serialize, Deserialize, Clone, Default, Debug, PartialEq, Eq)]
pub struct MsgTransfer {
    pub source_port: String,
    pub source_channel: String,
    pub token: Coin,
    pub sender: String,
    pub receiver: String,
    pub timeout_height: TimeoutHeight,
    /// Timeout in unix nanoseconds, 0 disables it.
    pub timeout_timestamp: u64,
    pub memo: String,
}

impl MsgTransfer {
    pub fn to_any(&self) -> Any {
        Any {
            type_url: MSG_TRANSFER_TYPE_URL.to_string(),
            value: RawMsgTransfer::from(self.clone()).encode_to_vec(),
        }
    }
}

impl From<MsgTransfer> for RawMsgTransfer {
    fn from(msg: MsgTransfer) -> Self {
        RawMsgTransfer {
            source_port: msg.source_port,
            source_channel: msg.source_channel,
            token: Some(msg.token.into()),
            sender: msg.sender,
            receiver: msg.receiver,
            timeout_height: msg.timeout_height.into(),
            timeout_timestamp: msg.timeout_timestamp,
            memo: msg.memo,
            ..Default::default()
        }
    }
}

impl TryFrom<RawMsgTransfer> for MsgTransfer {
    type Error = TransferError;

    fn try_from(raw: RawMsgTransfer) -> Result<Self, Self::Error> {
        let token: Coin = raw.token.ok_or(TransferError::MissingToken)?.try_into()?;

        Ok(MsgTransfer {
            source_port: raw.source_port,
            source_channel: raw.source_channel,
            token,
            sender: raw.sender,
            receiver: raw.receiver,
            timeout_height: raw.timeout_height.into(),
            timeout_timestamp: raw.timeout_timestamp,
            memo: raw.memo,
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct MsgTransferResponse {
    /// Sequence number of the sent packet.
    pub sequence: u64,
}

impl From<RawMsgTransferResponse> for MsgTransferResponse {
    fn from(raw: RawMsgTransferResponse) -> Self {
        MsgTransferResponse {
            sequence: raw.sequence,
        }
    }
}

impl From<MsgTransferResponse> for RawMsgTransferResponse {
    fn from(response: MsgTransferResponse) -> Self {
        RawMsgTransferResponse {
            sequence: response.sequence,
            ..Default::default()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use ibc_proto::cosmos::base::v1beta1::Coin as ProtoCoin;

    fn msg() -> MsgTransfer {
        MsgTransfer {
            source_port: "transfer".to_string(),
            source_channel: "channel-0".to_string(),
            token: Coin::new(1000, "basetcro"),
            sender: "crc1sender".to_string(),
            receiver: "cro1receiver".to_string(),
            timeout_height: TimeoutHeight::At {
                revision_number: 1,
                revision_height: 100,
            },
            timeout_timestamp: 1_700_000_000_000_000_000,
            memo: "hello".to_string(),
        }
    }

    #[test]
    fn raw_message_carries_all_fields() {
        let raw = RawMsgTransfer::from(msg());
        assert_eq!(raw.source_port, "transfer");
        assert_eq!(raw.source_channel, "channel-0");
        assert_eq!(
            raw.token,
            Some(ProtoCoin {
                denom: "basetcro".to_string(),
                amount: "1000".to_string()
            })
        );
        assert_eq!(
            raw.timeout_height,
            Some(RawHeight {
                revision_number: 1,
                revision_height: 100
            })
        );
        assert_eq!(MsgTransfer::try_from(raw).unwrap(), msg());
    }

    #[test]
    fn raw_message_without_token_is_rejected() {
        let raw = RawMsgTransfer {
            token: None,
            ..RawMsgTransfer::from(msg())
        };
        assert_eq!(
            MsgTransfer::try_from(raw).unwrap_err(),
            TransferError::MissingToken
        );
    }

    #[test]
    fn zero_timeout_height_means_never() {
        let zero = Some(RawHeight {
            revision_number: 0,
            revision_height: 0,
        });
        assert_eq!(TimeoutHeight::from(zero), TimeoutHeight::Never);
        assert_eq!(TimeoutHeight::from(None), TimeoutHeight::Never);
        assert_eq!(Option::<RawHeight>::from(TimeoutHeight::Never), None);
    }

    #[test]
    fn any_encoding() {
        let any = msg().to_any();
        assert_eq!(any.type_url, MSG_TRANSFER_TYPE_URL);

        let decoded = RawMsgTransfer::decode(any.value.as_slice()).unwrap();
        assert_eq!(MsgTransfer::try_from(decoded).unwrap(), msg());
    }
}
