//! Destination Address Shape Check
//!
//! Locks carry the recipient's address on the destination Cosmos chain as a
//! plain string. The bridge only checks that it looks like an account
//! address; the relayer is responsible for decoding it.
//!
//! ## Accepted Shape
//!
//! ```text
//! cosmos1 | 38..=58 lowercase ASCII letters or digits
//! ```
//!
//! 38 characters is the data part of a bech32 address for a 20-byte account
//! (32 payload + 6 checksum characters), 58 for a 32-byte account. The
//! bech32 checksum and the exclusion of `1`, `b`, `i`, `o` are not enforced.

use crate::error::ContractError;

/// Human-readable part plus separator expected on destination addresses
pub const DESTINATION_PREFIX: &str = "cosmos1";

/// Shortest accepted suffix after the prefix
pub const MIN_SUFFIX_LEN: usize = 38;

/// Longest accepted suffix after the prefix
pub const MAX_SUFFIX_LEN: usize = 58;

/// Validate a destination address.
///
/// Returns `InvalidDestinationAddress` for an empty string and
/// `InvalidDestinationAddressFormat` for anything not matching the shape.
pub fn validate_destination_address(address: &str) -> Result<(), ContractError> {
    if address.is_empty() {
        return Err(ContractError::InvalidDestinationAddress);
    }

    let well_formed = match address.strip_prefix(DESTINATION_PREFIX) {
        Some(suffix) => {
            (MIN_SUFFIX_LEN..=MAX_SUFFIX_LEN).contains(&suffix.len())
                && suffix
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        }
        None => false,
    };

    if !well_formed {
        return Err(ContractError::InvalidDestinationAddressFormat {
            address: address.to_string(),
        });
    }

    Ok(())
}
