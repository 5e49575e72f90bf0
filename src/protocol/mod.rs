//! High-level components of the FRC CAN layer: lookup tables, message
//! payloads, CAN transport, the polling dispatcher, and heartbeat supervision.
pub mod dispatcher;
pub mod lookups;
pub mod messages;
pub mod supervision;
pub mod transport;
