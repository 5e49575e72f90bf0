//! Universal heartbeat broadcast by the robot controller.
//!
//! # Payload layout (MSB first inside each byte)
//!
//! ```text
//! [0]: HHHHHmmm   H: time_of_day_hour (5)      m: time_of_day_minute, high 3
//! [1]: mmmSSSSS   m: time_of_day_minute, low 3 S: time_of_day_second, high 5
//! [2]: sDDDDDMM   s: time_of_day_second, low 1 D: time_of_day_day (5)  M: month, high 2
//! [3]: mmYYYYYY   m: time_of_day_month, low 2  Y: time_of_day_year (6)
//! [4]: TTTWtaer   T: tournament_type (3)  W: system_watchdog  t: test_mode
//!                 a: autonomous  e: enabled  r: red_alliance
//! [5]: RRRRRRNN   R: replay_number (6)    N: match_number, high 2
//! [6]: NNNNNNNN   N: match_number, low 8
//! [7]: SSSSSSSS   match_time_seconds (8)
//! ```
//!
//! Setters mask their input to the field width; bits belonging to other
//! fields are never modified.
use crate::error::ExtractionError;
use crate::infra::codec::bits::{BitField, SplitField};
use crate::protocol::transport::can_frame::{CanFrame, FrameKind};
use core::fmt;
use embedded_can::ExtendedId;

/// Identifier of the heartbeat (29-bit extended).
pub const HEARTBEAT_ID: u32 = 0x0101_1840;

const HEARTBEAT_EXT_ID: ExtendedId = match ExtendedId::new(HEARTBEAT_ID) {
    Some(id) => id,
    None => panic!("heartbeat identifier exceeds 29 bits"),
};

/// Heartbeat payload length in bytes.
pub const HEARTBEAT_LEN: usize = 8;

const TIME_OF_DAY_HOUR: BitField = BitField::new(0, 3, 0x1F);
const TIME_OF_DAY_MINUTE: SplitField =
    SplitField::new(BitField::new(0, 0, 0x07), BitField::new(1, 5, 0x07), 3);
const TIME_OF_DAY_SECOND: SplitField =
    SplitField::new(BitField::new(1, 0, 0x1F), BitField::new(2, 7, 0x01), 1);
const TIME_OF_DAY_DAY: BitField = BitField::new(2, 2, 0x1F);
const TIME_OF_DAY_MONTH: SplitField =
    SplitField::new(BitField::new(2, 0, 0x03), BitField::new(3, 6, 0x03), 2);
const TIME_OF_DAY_YEAR: BitField = BitField::new(3, 0, 0x3F);
const TOURNAMENT_TYPE: BitField = BitField::new(4, 5, 0x07);
const SYSTEM_WATCHDOG: BitField = BitField::new(4, 4, 0x01);
const TEST_MODE: BitField = BitField::new(4, 3, 0x01);
const AUTONOMOUS: BitField = BitField::new(4, 2, 0x01);
const ENABLED: BitField = BitField::new(4, 1, 0x01);
const RED_ALLIANCE: BitField = BitField::new(4, 0, 0x01);
const REPLAY_NUMBER: BitField = BitField::new(5, 2, 0x3F);
const MATCH_NUMBER: SplitField =
    SplitField::new(BitField::new(5, 0, 0x03), BitField::new(6, 0, 0xFF), 8);
const MATCH_TIME_BYTE: usize = 7;

/// Heartbeat payload with typed accessors over an owned 8-byte buffer.
///
/// # Example
///
/// ```
/// use frc_can::protocol::messages::heartbeat::HeartbeatMsg;
///
/// let mut hb = HeartbeatMsg::new();
/// hb.set_match_number(0x3FF);
/// hb.set_enabled(true);
///
/// assert_eq!(hb.as_bytes()[5] & 0b11, 0b11);
/// assert_eq!(hb.as_bytes()[6], 0xFF);
/// assert!(hb.enabled());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HeartbeatMsg {
    data: [u8; HEARTBEAT_LEN],
}

impl HeartbeatMsg {
    /// Zeroed heartbeat.
    #[inline]
    pub const fn new() -> Self {
        Self {
            data: [0; HEARTBEAT_LEN],
        }
    }

    /// Wrap an existing payload without copying field by field.
    #[inline]
    pub const fn from_bytes(data: [u8; HEARTBEAT_LEN]) -> Self {
        Self { data }
    }

    #[inline]
    pub const fn as_bytes(&self) -> &[u8; HEARTBEAT_LEN] {
        &self.data
    }

    #[inline]
    pub const fn into_bytes(self) -> [u8; HEARTBEAT_LEN] {
        self.data
    }

    /// Identifier the heartbeat travels on; handy for acceptance filters.
    #[inline]
    pub const fn id(&self) -> u32 {
        HEARTBEAT_ID
    }

    /// Whether `frame` is a heartbeat data frame (identifier and kind only).
    pub fn is_heartbeat(frame: &CanFrame) -> bool {
        frame.is_extended() && frame.raw_id() == HEARTBEAT_ID && frame.kind() == FrameKind::Data
    }

    /// Decode a received frame, checking identifier, kind and length.
    pub fn from_frame(frame: &CanFrame) -> Result<Self, ExtractionError> {
        if !frame.is_extended() || frame.raw_id() != HEARTBEAT_ID {
            return Err(ExtractionError::UnexpectedId {
                id: frame.raw_id(),
            });
        }
        if frame.kind() == FrameKind::Remote {
            return Err(ExtractionError::RemoteFrame);
        }
        let payload = frame.payload();
        let invalid_len = ExtractionError::InvalidDataLen {
            expected: HEARTBEAT_LEN,
            actual: payload.len(),
        };
        let data: [u8; HEARTBEAT_LEN] = payload.try_into().map_err(|_| invalid_len)?;
        Ok(Self { data })
    }

    /// Build the extended data frame carrying this payload.
    pub fn to_frame(&self) -> CanFrame {
        CanFrame::from_payload(HEARTBEAT_EXT_ID, self.data)
    }

    //==============================================================================TIME_OF_DAY
    /// Hour (byte 0, bits 7:3, 5 bits).
    #[inline]
    pub fn time_of_day_hour(&self) -> u8 {
        TIME_OF_DAY_HOUR.get(&self.data)
    }

    #[inline]
    pub fn set_time_of_day_hour(&mut self, value: u8) {
        TIME_OF_DAY_HOUR.set(&mut self.data, value)
    }

    /// Minute (byte 0 bits 2:0 high, byte 1 bits 7:5 low, 6 bits).
    #[inline]
    pub fn time_of_day_minute(&self) -> u8 {
        TIME_OF_DAY_MINUTE.get(&self.data) as u8
    }

    #[inline]
    pub fn set_time_of_day_minute(&mut self, value: u8) {
        TIME_OF_DAY_MINUTE.set(&mut self.data, value as u16)
    }

    /// Second (byte 1 bits 4:0 high, byte 2 bit 7 low, 6 bits).
    #[inline]
    pub fn time_of_day_second(&self) -> u8 {
        TIME_OF_DAY_SECOND.get(&self.data) as u8
    }

    #[inline]
    pub fn set_time_of_day_second(&mut self, value: u8) {
        TIME_OF_DAY_SECOND.set(&mut self.data, value as u16)
    }

    /// Day of month (byte 2, bits 6:2, 5 bits).
    #[inline]
    pub fn time_of_day_day(&self) -> u8 {
        TIME_OF_DAY_DAY.get(&self.data)
    }

    #[inline]
    pub fn set_time_of_day_day(&mut self, value: u8) {
        TIME_OF_DAY_DAY.set(&mut self.data, value)
    }

    /// Month (byte 2 bits 1:0 high, byte 3 bits 7:6 low, 4 bits).
    #[inline]
    pub fn time_of_day_month(&self) -> u8 {
        TIME_OF_DAY_MONTH.get(&self.data) as u8
    }

    #[inline]
    pub fn set_time_of_day_month(&mut self, value: u8) {
        TIME_OF_DAY_MONTH.set(&mut self.data, value as u16)
    }

    /// Year offset (byte 3, bits 5:0, 6 bits).
    #[inline]
    pub fn time_of_day_year(&self) -> u8 {
        TIME_OF_DAY_YEAR.get(&self.data)
    }

    #[inline]
    pub fn set_time_of_day_year(&mut self, value: u8) {
        TIME_OF_DAY_YEAR.set(&mut self.data, value)
    }

    //==============================================================================MATCH_STATE
    /// Tournament type (byte 4, bits 7:5, 3 bits).
    #[inline]
    pub fn tournament_type(&self) -> u8 {
        TOURNAMENT_TYPE.get(&self.data)
    }

    #[inline]
    pub fn set_tournament_type(&mut self, value: u8) {
        TOURNAMENT_TYPE.set(&mut self.data, value)
    }

    /// System watchdog (byte 4, bit 4). Set while the robot is allowed to actuate.
    #[inline]
    pub fn system_watchdog(&self) -> bool {
        SYSTEM_WATCHDOG.get(&self.data) != 0
    }

    #[inline]
    pub fn set_system_watchdog(&mut self, value: bool) {
        SYSTEM_WATCHDOG.set(&mut self.data, value as u8)
    }

    #[inline]
    pub fn test_mode(&self) -> bool {
        TEST_MODE.get(&self.data) != 0
    }

    #[inline]
    pub fn set_test_mode(&mut self, value: bool) {
        TEST_MODE.set(&mut self.data, value as u8)
    }

    #[inline]
    pub fn autonomous(&self) -> bool {
        AUTONOMOUS.get(&self.data) != 0
    }

    #[inline]
    pub fn set_autonomous(&mut self, value: bool) {
        AUTONOMOUS.set(&mut self.data, value as u8)
    }

    #[inline]
    pub fn enabled(&self) -> bool {
        ENABLED.get(&self.data) != 0
    }

    #[inline]
    pub fn set_enabled(&mut self, value: bool) {
        ENABLED.set(&mut self.data, value as u8)
    }

    #[inline]
    pub fn red_alliance(&self) -> bool {
        RED_ALLIANCE.get(&self.data) != 0
    }

    #[inline]
    pub fn set_red_alliance(&mut self, value: bool) {
        RED_ALLIANCE.set(&mut self.data, value as u8)
    }

    /// Replay number (byte 5, bits 7:2, 6 bits).
    #[inline]
    pub fn replay_number(&self) -> u8 {
        REPLAY_NUMBER.get(&self.data)
    }

    #[inline]
    pub fn set_replay_number(&mut self, value: u8) {
        REPLAY_NUMBER.set(&mut self.data, value)
    }

    /// Match number (byte 5 bits 1:0 high, byte 6 low, 10 bits).
    #[inline]
    pub fn match_number(&self) -> u16 {
        MATCH_NUMBER.get(&self.data)
    }

    #[inline]
    pub fn set_match_number(&mut self, value: u16) {
        MATCH_NUMBER.set(&mut self.data, value)
    }

    /// Match time in seconds; occupies the whole of byte 7.
    #[inline]
    pub fn match_time_seconds(&self) -> u8 {
        self.data[MATCH_TIME_BYTE]
    }

    #[inline]
    pub fn set_match_time_seconds(&mut self, value: u8) {
        self.data[MATCH_TIME_BYTE] = value;
    }
}

impl From<[u8; HEARTBEAT_LEN]> for HeartbeatMsg {
    fn from(data: [u8; HEARTBEAT_LEN]) -> Self {
        Self::from_bytes(data)
    }
}

impl TryFrom<&CanFrame> for HeartbeatMsg {
    type Error = ExtractionError;
    fn try_from(frame: &CanFrame) -> Result<Self, Self::Error> {
        Self::from_frame(frame)
    }
}

impl fmt::Display for HeartbeatMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Heartbeat data:")?;
        writeln!(
            f,
            " time/date: {}:{}:{} {}/{}/{}",
            self.time_of_day_hour(),
            self.time_of_day_minute(),
            self.time_of_day_second(),
            self.time_of_day_day(),
            self.time_of_day_month(),
            self.time_of_day_year()
        )?;
        writeln!(f, " tournament_type: {}", self.tournament_type())?;
        writeln!(f, " system_watchdog: {}", self.system_watchdog())?;
        writeln!(f, " test_mode: {}", self.test_mode())?;
        writeln!(f, " autonomous: {}", self.autonomous())?;
        writeln!(f, " enabled: {}", self.enabled())?;
        writeln!(f, " red_alliance: {}", self.red_alliance())?;
        writeln!(f, " replay_number: {}", self.replay_number())?;
        writeln!(f, " match_number: {}", self.match_number())?;
        write!(f, " match_time: {} s ", self.match_time_seconds())?;
        for (i, byte) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ":")?;
            }
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}
