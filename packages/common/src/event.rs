//! Lock event wire format
//!
//! The `tokens_locked` event is the only coupling between the bridge and the
//! off-chain relayer. Its attribute order is part of the contract:
//!
//! ```text
//! sender, destination_address, amount, lock_id, event_version
//! ```
//!
//! New fields may only ever be appended after `event_version`, together with
//! a bump of [`TokensLocked::VERSION`].

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Event, Uint128};
use thiserror::Error;

/// Attribute keys of the lock event, in wire order
pub const LOCK_EVENT_FIELDS: [&str; 4] = ["sender", "destination_address", "amount", "lock_id"];

/// Errors raised when decoding a lock event on the relayer side
#[derive(Error, Debug, PartialEq)]
pub enum EventDecodeError {
    #[error("Not a lock event: {ty}")]
    WrongEventType { ty: String },

    #[error("Lock event attribute {index} should be {expected}, got {got}")]
    UnexpectedAttribute {
        index: usize,
        expected: String,
        got: String,
    },

    #[error("Lock event is missing attribute {key}")]
    MissingAttribute { key: String },

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Unsupported lock event version: {version}")]
    UnsupportedVersion { version: String },
}

/// A successful lock, as announced to the relayer
#[cw_serde]
pub struct TokensLocked {
    /// Account the tokens were pulled from
    pub sender: Addr,
    /// Recipient on the destination chain
    pub destination_address: String,
    /// Locked amount in base units
    pub amount: Uint128,
    /// Sequential lock identifier (first lock is 1)
    pub lock_id: u64,
}

impl TokensLocked {
    pub const EVENT_TYPE: &'static str = "tokens_locked";
    pub const VERSION: &'static str = "1";

    pub fn to_event(&self) -> Event {
        Event::new(Self::EVENT_TYPE)
            .add_attribute(LOCK_EVENT_FIELDS[0], self.sender.as_str())
            .add_attribute(LOCK_EVENT_FIELDS[1], &self.destination_address)
            .add_attribute(LOCK_EVENT_FIELDS[2], self.amount.to_string())
            .add_attribute(LOCK_EVENT_FIELDS[3], self.lock_id.to_string())
            .add_attribute("event_version", Self::VERSION)
    }

    /// Decode a lock event as seen on chain.
    ///
    /// Accepts both the raw type and the `wasm-` prefixed type the chain
    /// reports, and ignores the runtime's `_`-prefixed attributes such as
    /// `_contract_address`.
    pub fn from_event(event: &Event) -> Result<Self, EventDecodeError> {
        if !Self::is_lock_event(event) {
            return Err(EventDecodeError::WrongEventType {
                ty: event.ty.clone(),
            });
        }

        let attrs: Vec<_> = event
            .attributes
            .iter()
            .filter(|a| !a.key.starts_with('_'))
            .collect();

        let mut values = Vec::with_capacity(LOCK_EVENT_FIELDS.len());
        for (index, key) in LOCK_EVENT_FIELDS.iter().enumerate() {
            let attr = attrs.get(index).ok_or(EventDecodeError::MissingAttribute {
                key: key.to_string(),
            })?;
            if attr.key != *key {
                return Err(EventDecodeError::UnexpectedAttribute {
                    index,
                    expected: key.to_string(),
                    got: attr.key.clone(),
                });
            }
            values.push(attr.value.as_str());
        }

        let version = attrs
            .get(LOCK_EVENT_FIELDS.len())
            .filter(|a| a.key == "event_version")
            .ok_or(EventDecodeError::MissingAttribute {
                key: "event_version".to_string(),
            })?;
        if version.value != Self::VERSION {
            return Err(EventDecodeError::UnsupportedVersion {
                version: version.value.clone(),
            });
        }

        let amount = values[2]
            .parse::<u128>()
            .map_err(|_| EventDecodeError::InvalidValue {
                key: "amount".to_string(),
                value: values[2].to_string(),
            })?;
        let lock_id = values[3]
            .parse::<u64>()
            .map_err(|_| EventDecodeError::InvalidValue {
                key: "lock_id".to_string(),
                value: values[3].to_string(),
            })?;

        Ok(Self {
            sender: Addr::unchecked(values[0]),
            destination_address: values[1].to_string(),
            amount: Uint128::new(amount),
            lock_id,
        })
    }

    /// Decode every lock event in a transaction's event list, in order.
    pub fn collect(events: &[Event]) -> Result<Vec<Self>, EventDecodeError> {
        events
            .iter()
            .filter(|e| Self::is_lock_event(e))
            .map(Self::from_event)
            .collect()
    }

    fn is_lock_event(event: &Event) -> bool {
        let ty = event.ty.strip_prefix("wasm-").unwrap_or(&event.ty);
        ty == Self::EVENT_TYPE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::Attribute;

    fn sample() -> TokensLocked {
        TokensLocked {
            sender: Addr::unchecked("terra1user"),
            destination_address: "cosmos1abc123def456ghi789jkl012mno345pqr678st".to_string(),
            amount: Uint128::new(100_000_000_000_000_000_000),
            lock_id: 1,
        }
    }

    #[test]
    fn test_attribute_order() {
        let event = sample().to_event();
        let keys: Vec<&str> = event.attributes.iter().map(|a| a.key.as_str()).collect();

        assert_eq!(event.ty, "tokens_locked");
        assert_eq!(
            keys,
            vec!["sender", "destination_address", "amount", "lock_id", "event_version"]
        );
        assert_eq!(event.attributes[2].value, "100000000000000000000");
        assert_eq!(event.attributes[3].value, "1");
    }

    #[test]
    fn test_decode_chain_event() {
        // What the chain reports: prefixed type, runtime attribute first
        let mut event = sample().to_event();
        event.ty = "wasm-tokens_locked".to_string();
        event.attributes.insert(
            0,
            Attribute {
                key: "_contract_address".to_string(),
                value: "contract1".to_string(),
            },
        );

        assert_eq!(TokensLocked::from_event(&event).unwrap(), sample());
    }

    #[test]
    fn test_decode_rejects_reordered_fields() {
        let event = Event::new("tokens_locked")
            .add_attribute("destination_address", "cosmos1xyz")
            .add_attribute("sender", "terra1user")
            .add_attribute("amount", "1")
            .add_attribute("lock_id", "1")
            .add_attribute("event_version", "1");

        let err = TokensLocked::from_event(&event).unwrap_err();
        assert_eq!(
            err,
            EventDecodeError::UnexpectedAttribute {
                index: 0,
                expected: "sender".to_string(),
                got: "destination_address".to_string(),
            }
        );
    }

    #[test]
    fn test_decode_rejects_unknown_version() {
        let mut event = sample().to_event();
        event.attributes[4].value = "2".to_string();

        let err = TokensLocked::from_event(&event).unwrap_err();
        assert_eq!(
            err,
            EventDecodeError::UnsupportedVersion {
                version: "2".to_string()
            }
        );
    }

    #[test]
    fn test_decode_rejects_bad_amount() {
        let mut event = sample().to_event();
        event.attributes[2].value = "-5".to_string();

        assert!(matches!(
            TokensLocked::from_event(&event),
            Err(EventDecodeError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_collect_skips_other_events() {
        let mut execute = Event::new("execute");
        execute.attributes.push(Attribute {
            key: "_contract_address".to_string(),
            value: "contract1".to_string(),
        });
        let events = vec![
            execute,
            sample().to_event(),
            Event::new("wasm").add_attribute("action", "lock_tokens"),
        ];

        let locks = TokensLocked::collect(&events).unwrap();
        assert_eq!(locks, vec![sample()]);
    }

    #[test]
    fn test_wrong_type() {
        let event = Event::new("transfer");
        assert_eq!(
            TokensLocked::from_event(&event).unwrap_err(),
            EventDecodeError::WrongEventType {
                ty: "transfer".to_string()
            }
        );
    }
}
