//! Typed payloads for the system messages shared by every FRC CAN device.
pub mod heartbeat;
