//! Minimal abstraction for an asynchronous CAN bus. Allows the library to plug
//! into various implementations (embedded HAL, desktop driver, test double).
use crate::protocol::transport::can_frame::CanFrame;
use core::future::Future;

/// Contract to send and receive CAN frames asynchronously.
///
/// The dispatcher is the only caller: handlers hand outbound frames back as
/// return values instead of touching the bus, which keeps transmit order
/// deterministic.
pub trait CanBus {
    type Error: core::fmt::Debug;
    /// Emit a frame on the bus. Fire-and-forget from the caller's point of view.
    fn send<'a>(
        &'a mut self,
        frame: &'a CanFrame,
    ) -> impl Future<Output = Result<(), Self::Error>> + 'a;
    /// Retrieve the next available frame, waiting until one arrives.
    ///
    /// Must be cancel-safe: the dispatcher drops this future when its receive
    /// window elapses, and no frame may be lost when that happens.
    fn recv<'a>(&'a mut self) -> impl Future<Output = Result<CanFrame, Self::Error>> + 'a;
    /// Whether another frame is already queued, without waiting.
    fn has_pending(&mut self) -> bool;
}
