//! In-memory representation of a classic CAN 2.0 frame.
//!
//! A frame is either a data frame or a remote transmission request; the
//! distinction is carried by [`FrameKind`] and matched exhaustively by the
//! dispatcher. Frames are immutable once built.
use crate::error::FrameError;
use embedded_can::{ExtendedId, Id, StandardId};

/// Classic CAN payload capacity.
pub const MAX_PAYLOAD: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameKind {
    /// Carries up to eight payload bytes.
    Data,
    /// Asks the addressee to transmit data for this identifier.
    Remote,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Raw CAN frame as read from or written to the bus.
pub struct CanFrame {
    #[cfg_attr(feature = "defmt", defmt(Debug2Format))]
    id: Id,
    kind: FrameKind,
    /// Payload buffer; bytes past `len` are always zero.
    data: [u8; MAX_PAYLOAD],
    /// Data length code (0 to 8). For remote requests, the requested length.
    len: usize,
}

impl CanFrame {
    /// Build a data frame for any identifier flavour.
    pub fn new_data(id: impl Into<Id>, payload: &[u8]) -> Result<Self, FrameError> {
        if payload.len() > MAX_PAYLOAD {
            return Err(FrameError::PayloadTooLong { len: payload.len() });
        }
        let mut data = [0u8; MAX_PAYLOAD];
        data[..payload.len()].copy_from_slice(payload);
        Ok(Self {
            id: id.into(),
            kind: FrameKind::Data,
            data,
            len: payload.len(),
        })
    }

    /// Data frame carrying a full eight-byte payload. Cannot fail.
    pub fn from_payload(id: impl Into<Id>, data: [u8; MAX_PAYLOAD]) -> Self {
        Self {
            id: id.into(),
            kind: FrameKind::Data,
            data,
            len: MAX_PAYLOAD,
        }
    }

    /// Build a remote transmission request announcing `dlc` bytes.
    pub fn new_remote_request(id: impl Into<Id>, dlc: usize) -> Result<Self, FrameError> {
        if dlc > MAX_PAYLOAD {
            return Err(FrameError::InvalidDlc { dlc });
        }
        Ok(Self {
            id: id.into(),
            kind: FrameKind::Remote,
            data: [0u8; MAX_PAYLOAD],
            len: dlc,
        })
    }

    /// Data frame with a 29-bit identifier given as a raw value.
    pub fn extended(raw_id: u32, payload: &[u8]) -> Result<Self, FrameError> {
        Self::new_data(extended_id(raw_id)?, payload)
    }

    /// Remote request with a 29-bit identifier given as a raw value.
    pub fn extended_remote(raw_id: u32, dlc: usize) -> Result<Self, FrameError> {
        Self::new_remote_request(extended_id(raw_id)?, dlc)
    }

    /// Data frame with an 11-bit identifier given as a raw value.
    pub fn standard(raw_id: u16, payload: &[u8]) -> Result<Self, FrameError> {
        let id = StandardId::new(raw_id).ok_or(FrameError::InvalidId { raw: raw_id as u32 })?;
        Self::new_data(id, payload)
    }

    #[inline]
    pub fn id(&self) -> Id {
        self.id
    }

    /// Identifier value without its 11/29-bit tag; the key used by handler tables.
    #[inline]
    pub fn raw_id(&self) -> u32 {
        match self.id {
            Id::Standard(id) => id.as_raw() as u32,
            Id::Extended(id) => id.as_raw(),
        }
    }

    #[inline]
    pub fn is_extended(&self) -> bool {
        matches!(self.id, Id::Extended(_))
    }

    #[inline]
    pub fn kind(&self) -> FrameKind {
        self.kind
    }

    #[inline]
    pub fn is_remote_request(&self) -> bool {
        self.kind == FrameKind::Remote
    }

    /// Populated payload bytes. Always empty for remote requests.
    #[inline]
    pub fn payload(&self) -> &[u8] {
        match self.kind {
            FrameKind::Data => &self.data[..self.len],
            FrameKind::Remote => &[],
        }
    }

    #[inline]
    pub fn dlc(&self) -> usize {
        self.len
    }
}

fn extended_id(raw: u32) -> Result<ExtendedId, FrameError> {
    ExtendedId::new(raw).ok_or(FrameError::InvalidId { raw })
}

impl embedded_can::Frame for CanFrame {
    fn new(id: impl Into<Id>, data: &[u8]) -> Option<Self> {
        Self::new_data(id, data).ok()
    }

    fn new_remote(id: impl Into<Id>, dlc: usize) -> Option<Self> {
        Self::new_remote_request(id, dlc).ok()
    }

    fn is_extended(&self) -> bool {
        CanFrame::is_extended(self)
    }

    fn is_remote_frame(&self) -> bool {
        self.is_remote_request()
    }

    fn id(&self) -> Id {
        self.id
    }

    fn dlc(&self) -> usize {
        self.len
    }

    fn data(&self) -> &[u8] {
        self.payload()
    }
}
