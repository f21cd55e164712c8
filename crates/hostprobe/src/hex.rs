//! Hex encoding and decoding.

use crate::error::{HostError, Result};

/// Encode bytes as a lowercase hex string, two digits per byte.
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    ::hex::encode(bytes)
}

/// Decode a hex string into bytes.
///
/// Both upper and lower case digits are accepted. Input of odd length or
/// containing anything other than hex digits is rejected with
/// [`HostError::Format`].
pub fn decode(input: &str) -> Result<Vec<u8>> {
    ::hex::decode(input).map_err(|e| HostError::format(input, e.to_string()))
}
