//! `frc-can` library: FRC CAN 2.0B identifiers, the universal heartbeat,
//! and a polling frame dispatcher for co-processors in a `no_std`
//! environment. The crate exposes the infrastructure modules (bit codec),
//! protocol logic (transport, messages, dispatcher, heartbeat supervision),
//! and the shared error types.
#![no_std]
//==================================================================================
/// Domain and low-level errors (frame construction, message extraction,
/// handler registration, dispatch transport).
pub mod error;
/// Bit-level helpers used to pack and unpack message payloads.
pub mod infra;
/// FRC CAN protocol implementation: transport, identifiers, lookup tables,
/// messages, dispatching and supervision.
pub mod protocol;
//==================================================================================
