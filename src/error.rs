//! Error definitions shared across library modules.
//! Each type models a specific failure scenario (frame construction,
//! heartbeat extraction, handler registration, dispatch loop transport).
use thiserror_no_std::Error;

//==================================================================================FRAME_ERROR
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Errors that can occur while building a classic CAN frame.
pub enum FrameError {
    /// Classic CAN carries at most eight payload bytes.
    #[error("Payload too long: {len} bytes (max 8)")]
    PayloadTooLong { len: usize },
    /// Remote requests announce a DLC in the 0..=8 range.
    #[error("Invalid DLC for remote request: {dlc}")]
    InvalidDlc { dlc: usize },
    /// Raw identifier does not fit the 11-bit or 29-bit range.
    #[error("Identifier out of range: {raw:#X}")]
    InvalidId { raw: u32 },
}

//==================================================================================EXTRACTION_ERROR
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Failures while extracting a typed message from a raw CAN frame.
pub enum ExtractionError {
    /// Frame identifier does not belong to the requested message.
    #[error("Unexpected identifier {id:#X}")]
    UnexpectedId { id: u32 },
    /// Remote requests carry no payload to decode.
    #[error("Remote request carries no payload")]
    RemoteFrame,
    /// Payload length does not match the message layout.
    #[error("Invalid data length: expected {expected}, got {actual}")]
    InvalidDataLen { expected: usize, actual: usize },
}

//==================================================================================REGISTRATION_ERROR
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Rejections raised while wiring callbacks into a dispatcher.
///
/// Both variants leave the dispatcher unchanged.
pub enum RegistrationError {
    /// A handler is already registered for this identifier; the first one stays active.
    #[error("Handler already registered for identifier {id:#X}")]
    DuplicateId { id: u32 },
    /// The fixed-capacity table has no free slot left.
    #[error("Handler table full (capacity {capacity})")]
    TableFull { capacity: usize },
}

//==================================================================================DISPATCH_ERROR
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
/// Transport failures surfaced by the dispatch loop.
pub enum DispatchError<E: core::fmt::Debug> {
    /// CAN bus failed while waiting for a frame.
    #[error("CAN bus receive error: {0:?}")]
    Receive(E),
    /// CAN bus rejected an outbound frame produced by a callback.
    #[error("CAN bus send error: {0:?}")]
    Send(E),
}
