//! Creation and decomposition of the 29-bit extended identifiers used by
//! FRC CAN devices.
//!
//! # Bit layout
//!
//! ```text
//! Bits 24-28 ( 5 bits) : Device type
//! Bits 16-23 ( 8 bits) : Manufacturer
//! Bits  6-15 (10 bits) : API
//! Bits  0-5  ( 6 bits) : Device number
//! ```
//!
//! The four ranges partition the 29-bit space. Encoding masks every field to
//! its width and keeps the low-order bits: out-of-range inputs are truncated,
//! never rejected.
use crate::protocol::lookups::{DeviceType, Manufacturer};
use core::fmt;

pub const DEVICE_TYPE_LSB: u32 = 24;
pub const DEVICE_TYPE_MASK: u32 = 0x1F;
pub const MANUFACTURER_LSB: u32 = 16;
pub const MANUFACTURER_MASK: u32 = 0xFF;
pub const API_LSB: u32 = 6;
pub const API_MASK: u32 = 0x3FF;
pub const DEVICE_NUMBER_LSB: u32 = 0;
pub const DEVICE_NUMBER_MASK: u32 = 0x3F;

/// Union of all field masks; equals the 29-bit extended identifier range.
pub const MESSAGE_ID_MASK: u32 = (DEVICE_TYPE_MASK << DEVICE_TYPE_LSB)
    | (MANUFACTURER_MASK << MANUFACTURER_LSB)
    | (API_MASK << API_LSB)
    | (DEVICE_NUMBER_MASK << DEVICE_NUMBER_LSB);

//==================================================================================FREE_FUNCTIONS
/// Pack the four fields into a raw identifier.
pub const fn encode(device_type: u8, manufacturer: u8, api: u16, device_number: u8) -> u32 {
    ((device_type as u32 & DEVICE_TYPE_MASK) << DEVICE_TYPE_LSB)
        | ((manufacturer as u32 & MANUFACTURER_MASK) << MANUFACTURER_LSB)
        | ((api as u32 & API_MASK) << API_LSB)
        | ((device_number as u32 & DEVICE_NUMBER_MASK) << DEVICE_NUMBER_LSB)
}

/// Split a raw identifier into its four fields. Bits above 28 are ignored.
pub const fn decode(id: u32) -> IdFields {
    IdFields {
        device_type: ((id >> DEVICE_TYPE_LSB) & DEVICE_TYPE_MASK) as u8,
        manufacturer: ((id >> MANUFACTURER_LSB) & MANUFACTURER_MASK) as u8,
        api: ((id >> API_LSB) & API_MASK) as u16,
        device_number: ((id >> DEVICE_NUMBER_LSB) & DEVICE_NUMBER_MASK) as u8,
    }
}

//==================================================================================ID_FIELDS
/// Decomposed view of an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IdFields {
    pub device_type: u8,
    pub manufacturer: u8,
    pub api: u16,
    pub device_number: u8,
}

impl IdFields {
    #[inline]
    pub const fn encode(&self) -> u32 {
        encode(
            self.device_type,
            self.manufacturer,
            self.api,
            self.device_number,
        )
    }
}

//==================================================================================MESSAGE_ID
/// Extended CAN identifier following the FRC field layout.
///
/// # Example
///
/// ```
/// use frc_can::protocol::lookups::{DeviceType, Manufacturer};
/// use frc_can::protocol::transport::can_id::MessageId;
///
/// let id = MessageId::builder()
///     .device_type(DeviceType::Miscellaneous.into())
///     .manufacturer(Manufacturer::TeamUse.into())
///     .api(1)
///     .device_number(1)
///     .build();
///
/// assert_eq!(id.raw(), 0x0A08_0041);
/// assert_eq!(id.device_type_kind(), Some(DeviceType::Miscellaneous));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MessageId(u32);

impl MessageId {
    /// Build from individual fields, masking each one to its width.
    #[inline]
    pub const fn new(device_type: u8, manufacturer: u8, api: u16, device_number: u8) -> Self {
        Self(encode(device_type, manufacturer, api, device_number))
    }

    /// Wrap a raw identifier as-is, without re-deriving its fields.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(&self) -> u32 {
        self.0
    }

    pub const fn builder() -> MessageIdBuilder {
        MessageIdBuilder::new()
    }

    #[inline]
    pub const fn fields(&self) -> IdFields {
        decode(self.0)
    }

    /// Device type (bits 24-28, 5 bits).
    #[inline]
    pub const fn device_type(&self) -> u8 {
        ((self.0 >> DEVICE_TYPE_LSB) & DEVICE_TYPE_MASK) as u8
    }

    /// Manufacturer (bits 16-23, 8 bits).
    #[inline]
    pub const fn manufacturer(&self) -> u8 {
        ((self.0 >> MANUFACTURER_LSB) & MANUFACTURER_MASK) as u8
    }

    /// API (bits 6-15, 10 bits).
    #[inline]
    pub const fn api(&self) -> u16 {
        ((self.0 >> API_LSB) & API_MASK) as u16
    }

    /// Device number (bits 0-5, 6 bits).
    #[inline]
    pub const fn device_number(&self) -> u8 {
        ((self.0 >> DEVICE_NUMBER_LSB) & DEVICE_NUMBER_MASK) as u8
    }

    pub fn device_type_kind(&self) -> Option<DeviceType> {
        DeviceType::try_from(self.device_type()).ok()
    }

    pub fn manufacturer_kind(&self) -> Option<Manufacturer> {
        Manufacturer::try_from(self.manufacturer()).ok()
    }

    // Single-field replacement; the other bits of the raw value are kept.

    #[inline]
    pub const fn with_device_type(self, device_type: u8) -> Self {
        Self(replace(self.0, device_type as u32, DEVICE_TYPE_LSB, DEVICE_TYPE_MASK))
    }

    #[inline]
    pub const fn with_manufacturer(self, manufacturer: u8) -> Self {
        Self(replace(
            self.0,
            manufacturer as u32,
            MANUFACTURER_LSB,
            MANUFACTURER_MASK,
        ))
    }

    #[inline]
    pub const fn with_api(self, api: u16) -> Self {
        Self(replace(self.0, api as u32, API_LSB, API_MASK))
    }

    #[inline]
    pub const fn with_device_number(self, device_number: u8) -> Self {
        Self(replace(
            self.0,
            device_number as u32,
            DEVICE_NUMBER_LSB,
            DEVICE_NUMBER_MASK,
        ))
    }
}

#[inline]
const fn replace(raw: u32, value: u32, lsb: u32, mask: u32) -> u32 {
    (raw & !(mask << lsb)) | ((value & mask) << lsb)
}

impl From<u32> for MessageId {
    #[inline]
    fn from(raw: u32) -> Self {
        Self::from_raw(raw)
    }
}

impl From<MessageId> for u32 {
    #[inline]
    fn from(id: MessageId) -> Self {
        id.raw()
    }
}

impl From<IdFields> for MessageId {
    #[inline]
    fn from(fields: IdFields) -> Self {
        Self(fields.encode())
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "device_type: {:x}", self.device_type())?;
        if let Some(kind) = self.device_type_kind() {
            write!(f, " ({})", kind.name())?;
        }
        write!(f, " manufacturer: {}", self.manufacturer())?;
        if let Some(kind) = self.manufacturer_kind() {
            write!(f, " ({})", kind.name())?;
        }
        write!(
            f,
            " api: {:#x} device_number: {:#x}",
            self.api(),
            self.device_number()
        )
    }
}

//==================================================================================MESSAGE_ID_BUILDER
/// Fluent builder; every field defaults to zero.
#[derive(Debug, Default, Clone, Copy)]
pub struct MessageIdBuilder {
    fields: IdFields,
}

impl MessageIdBuilder {
    pub const fn new() -> Self {
        Self {
            fields: IdFields {
                device_type: 0,
                manufacturer: 0,
                api: 0,
                device_number: 0,
            },
        }
    }

    pub const fn device_type(mut self, device_type: u8) -> Self {
        self.fields.device_type = device_type;
        self
    }

    pub const fn manufacturer(mut self, manufacturer: u8) -> Self {
        self.fields.manufacturer = manufacturer;
        self
    }

    pub const fn api(mut self, api: u16) -> Self {
        self.fields.api = api;
        self
    }

    pub const fn device_number(mut self, device_number: u8) -> Self {
        self.fields.device_number = device_number;
        self
    }

    /// Pack the collected fields. Never fails: oversize values are masked.
    pub const fn build(self) -> MessageId {
        MessageId(self.fields.encode())
    }
}

//==================================================================================TESTS
#[cfg(test)]
#[path = "tests.rs"]
mod tests;
