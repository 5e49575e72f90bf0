//! FRC CAN transport layer: frame representation, 29-bit identifier
//! management, and bus abstraction traits.
//!
//! ## Timing Constants
//!
//! Defaults used by the dispatcher and the heartbeat monitor when no explicit
//! configuration is provided.

pub mod can_frame;
pub mod can_id;
pub mod traits;

/// Default receive window of one dispatcher step (ms).
///
/// A step blocks at most this long waiting for a frame before running its
/// timeout and iteration callbacks. Short windows keep iteration callbacks
/// (sensor sampling, status transmission) responsive.
///
/// # Recommended Values
///
/// - **10 ms**: Default, matches the listener timeout of typical FRC
///   co-processor firmware.
/// - **100 ms**: Upper bound when the step also detects heartbeat loss; the
///   robot controller broadcasts its heartbeat every 20 ms.
pub const DEFAULT_RECEIVE_TIMEOUT_MS: u32 = 10;

/// Window after which a missing heartbeat means the robot is lost (ms).
///
/// The field heartbeat is broadcast every 20 ms; five missed periods are
/// treated as a communication loss.
pub const DEFAULT_HEARTBEAT_TIMEOUT_MS: u32 = 100;
