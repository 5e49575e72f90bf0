//! Payload codecs: bit-level field access for fixed CAN payloads.
pub mod bits;
