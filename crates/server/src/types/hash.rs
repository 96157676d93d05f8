// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::ValidationError;
use std::fmt;
use std::str::FromStr;

const HASH_HEX_LEN: usize = 64;

/// 32-byte transaction hash taken from a path segment.
///
/// Accepted with or without a `0x` prefix, in any letter case. The hex digits
/// are kept exactly as given; each chain decides how to present them upstream.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TxHash(String);

impl TxHash {
    /// The 64 hex characters, without prefix.
    pub fn bare(&self) -> &str {
        &self.0
    }

    /// `0x` followed by the 64 hex characters.
    pub fn prefixed(&self) -> String {
        format!("0x{}", self.0)
    }
}

/// Format: "0x" followed by the hex characters as given
impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.0)
    }
}

impl FromStr for TxHash {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::MissingHash);
        }

        let hex_str = s.strip_prefix("0x").unwrap_or(s);
        if hex_str.len() != HASH_HEX_LEN || !hex_str.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ValidationError::InvalidHash);
        }

        Ok(Self(hex_str.to_string()))
    }
}
