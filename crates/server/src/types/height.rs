// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::ValidationError;
use std::fmt;
use std::str::FromStr;

/// Non-negative block number taken from a path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockHeight(u64);

impl BlockHeight {
    pub fn new(height: u64) -> Self {
        Self(height)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Quantity encoding used by `eth_*` methods: `0x` followed by lowercase
    /// hex digits without leading zeros (`0` is `0x0`).
    pub fn to_hex(&self) -> String {
        format!("{:#x}", self.0)
    }
}

impl From<u64> for BlockHeight {
    fn from(height: u64) -> Self {
        Self(height)
    }
}

impl fmt::Display for BlockHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BlockHeight {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::MissingHeight);
        }

        // u64::from_str accepts a leading '+', which is not a valid height here
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidHeight);
        }

        s.parse::<u64>()
            .map(Self)
            .map_err(|_| ValidationError::InvalidHeight)
    }
}
