//! Lookup tables for the enumerated fields of an FRC message identifier.
//!
//! Values follow the WPILib CAN addressing tables. Unknown codes stay
//! representable as raw integers inside [`MessageId`](crate::protocol::transport::can_id::MessageId);
//! these enums only name the assigned ones.

//==================================================================================DEVICE_TYPE
#[repr(u8)]
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceType {
    Broadcast = 0,
    RobotController = 1,
    MotorController = 2,
    RelayController = 3,
    GyroSensor = 4,
    Accelerometer = 5,
    UltrasonicSensor = 6,
    GeartoothSensor = 7,
    PowerDistributionModule = 8,
    PneumaticsController = 9,
    Miscellaneous = 10,
    IoBreakout = 11,
    FirmwareUpdate = 31,
}

#[derive(Debug, PartialEq, Eq)]
pub struct InvalidDeviceType(pub u8);

impl DeviceType {
    /// Short human-readable label.
    pub const fn name(&self) -> &'static str {
        match self {
            DeviceType::Broadcast => "Broadcast",
            DeviceType::RobotController => "Robot Controller",
            DeviceType::MotorController => "Motor Controller",
            DeviceType::RelayController => "Relay Controller",
            DeviceType::GyroSensor => "Gyro",
            DeviceType::Accelerometer => "Accelerometer",
            DeviceType::UltrasonicSensor => "Ultrasonic",
            DeviceType::GeartoothSensor => "Geartooth",
            DeviceType::PowerDistributionModule => "Power Dist",
            DeviceType::PneumaticsController => "Pneumatics Controller",
            DeviceType::Miscellaneous => "Misc",
            DeviceType::IoBreakout => "IO Breakout",
            DeviceType::FirmwareUpdate => "Firmware Update",
        }
    }
}

impl From<DeviceType> for u8 {
    fn from(device_type: DeviceType) -> Self {
        device_type as u8
    }
}

impl TryFrom<u8> for DeviceType {
    type Error = InvalidDeviceType;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(DeviceType::Broadcast),
            1 => Ok(DeviceType::RobotController),
            2 => Ok(DeviceType::MotorController),
            3 => Ok(DeviceType::RelayController),
            4 => Ok(DeviceType::GyroSensor),
            5 => Ok(DeviceType::Accelerometer),
            6 => Ok(DeviceType::UltrasonicSensor),
            7 => Ok(DeviceType::GeartoothSensor),
            8 => Ok(DeviceType::PowerDistributionModule),
            9 => Ok(DeviceType::PneumaticsController),
            10 => Ok(DeviceType::Miscellaneous),
            11 => Ok(DeviceType::IoBreakout),
            31 => Ok(DeviceType::FirmwareUpdate),
            other => Err(InvalidDeviceType(other)),
        }
    }
}

//==================================================================================MANUFACTURER
#[repr(u8)]
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Manufacturer {
    Broadcast = 0,
    Ni = 1,
    LuminaryMicro = 2,
    Deka = 3,
    CtrElectronics = 4,
    RevRobotics = 5,
    Grapple = 6,
    Mindsensors = 7,
    TeamUse = 8,
    KauaiLabs = 9,
    Copperforge = 10,
    PlayingWithFusion = 11,
    Studica = 12,
    TheThriftyBot = 13,
    Redux = 14,
    AndyMark = 15,
    VividHosting = 16,
}

#[derive(Debug, PartialEq, Eq)]
pub struct InvalidManufacturer(pub u8);

impl Manufacturer {
    /// Short human-readable label.
    pub const fn name(&self) -> &'static str {
        match self {
            Manufacturer::Broadcast => "Broadcast",
            Manufacturer::Ni => "NI",
            Manufacturer::LuminaryMicro => "Luminary Micro",
            Manufacturer::Deka => "DEKA",
            Manufacturer::CtrElectronics => "CTRE",
            Manufacturer::RevRobotics => "REV",
            Manufacturer::Grapple => "Grapple",
            Manufacturer::Mindsensors => "Mindsensors",
            Manufacturer::TeamUse => "Team Use",
            Manufacturer::KauaiLabs => "Kauai Labs",
            Manufacturer::Copperforge => "Copperforge",
            Manufacturer::PlayingWithFusion => "Playing With Fusion",
            Manufacturer::Studica => "Studica",
            Manufacturer::TheThriftyBot => "The Thrifty Bot",
            Manufacturer::Redux => "Redux",
            Manufacturer::AndyMark => "AndyMark",
            Manufacturer::VividHosting => "Vivid Hosting",
        }
    }
}

impl From<Manufacturer> for u8 {
    fn from(manufacturer: Manufacturer) -> Self {
        manufacturer as u8
    }
}

impl TryFrom<u8> for Manufacturer {
    type Error = InvalidManufacturer;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Manufacturer::Broadcast),
            1 => Ok(Manufacturer::Ni),
            2 => Ok(Manufacturer::LuminaryMicro),
            3 => Ok(Manufacturer::Deka),
            4 => Ok(Manufacturer::CtrElectronics),
            5 => Ok(Manufacturer::RevRobotics),
            6 => Ok(Manufacturer::Grapple),
            7 => Ok(Manufacturer::Mindsensors),
            8 => Ok(Manufacturer::TeamUse),
            9 => Ok(Manufacturer::KauaiLabs),
            10 => Ok(Manufacturer::Copperforge),
            11 => Ok(Manufacturer::PlayingWithFusion),
            12 => Ok(Manufacturer::Studica),
            13 => Ok(Manufacturer::TheThriftyBot),
            14 => Ok(Manufacturer::Redux),
            15 => Ok(Manufacturer::AndyMark),
            16 => Ok(Manufacturer::VividHosting),
            other => Err(InvalidManufacturer(other)),
        }
    }
}
