// Copyright 2026 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::error::TransferError;
use ibc_proto::cosmos::base::v1beta1::Coin as ProtoCoin;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use cosmrs::Coin as CosmosCoin;

#[derive(Serialize, Deserialize, Clone, Default, Debug, PartialEq, Eq, Hash)]
pub struct Coin {
    pub amount: u128,
    pub denom: String,
}

impl Coin {
    pub fn new<S: Into<String>>(amount: u128, denom: S) -> Self {
        Coin {
            amount,
            denom: denom.into(),
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

impl FromStr for Coin {
    type Err = TransferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pos = s
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(|| TransferError::InvalidCoin {
                coin: s.to_string(),
                reason: "missing denomination".to_string(),
            })?;
        let (amount, denom) = s.split_at(pos);

        if amount.is_empty() {
            return Err(TransferError::InvalidCoin {
                coin: s.to_string(),
                reason: "missing amount or non-digit characters in amount".to_string(),
            });
        }

        Ok(Coin {
            amount: parse_amount(amount)?,
            denom: denom.to_string(),
        })
    }
}

fn parse_amount(raw: &str) -> Result<u128, TransferError> {
    raw.parse().map_err(|_| TransferError::InvalidAmount {
        raw: raw.to_string(),
    })
}

impl From<Coin> for ProtoCoin {
    fn from(coin: Coin) -> Self {
        ProtoCoin {
            denom: coin.denom,
            amount: coin.amount.to_string(),
        }
    }
}

impl TryFrom<ProtoCoin> for Coin {
    type Error = TransferError;

    fn try_from(coin: ProtoCoin) -> Result<Self, Self::Error> {
        Ok(Coin {
            amount: parse_amount(&coin.amount)?,
            denom: coin.denom,
        })
    }
}

impl TryFrom<Coin> for CosmosCoin {
    type Error = TransferError;

    fn try_from(coin: Coin) -> Result<Self, Self::Error> {
        let denom = coin
            .denom
            .parse::<cosmrs::Denom>()
            .map_err(|err| TransferError::InvalidCoin {
                coin: coin.to_string(),
                reason: err.to_string(),
            })?;

        Ok(CosmosCoin {
            denom,
            amount: coin.amount,
        })
    }
}

impl From<CosmosCoin> for Coin {
    fn from(coin: CosmosCoin) -> Self {
        Coin {
            amount: coin.amount,
            denom: coin.denom.to_string(),
        }
    }
}
