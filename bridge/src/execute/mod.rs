//! Execute handlers for the WeFi lock bridge.
//!
//! This module contains all execute message handlers, organized by category:
//! - `outgoing` - LockTokens handler
//! - `admin` - Pause, unpause, ownership transfer, and emergency withdrawal

mod admin;
mod outgoing;

pub use admin::*;
pub use outgoing::*;
