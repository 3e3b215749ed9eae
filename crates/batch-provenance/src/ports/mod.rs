//! # Ports Layer
//!
//! - `inbound` - the provenance API this crate exposes to the host
//! - `outbound` - the collaborator interfaces this crate requires

pub mod inbound;
pub mod outbound;
