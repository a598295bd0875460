use std::fmt::{Debug, Display};
use windows::core::GUID;

/// Identifier of a virtual desktop as reported by the shell.
#[derive(PartialEq, Eq, Clone, Copy)]
#[repr(transparent)]
pub struct DesktopId(pub(crate) GUID);

impl Default for DesktopId {
    fn default() -> Self {
        DesktopId(GUID::zeroed())
    }
}

impl DesktopId {
    pub fn new(data: (u32, u16, u16, [u8; 8])) -> Self {
        DesktopId(GUID::from_values(data.0, data.1, data.2, data.3))
    }

    pub const fn from_u128(uuid: u128) -> Self {
        DesktopId(GUID::from_u128(uuid))
    }

    pub fn get_data(&self) -> (u32, u16, u16, [u8; 8]) {
        (self.0.data1, self.0.data2, self.0.data3, self.0.data4)
    }

    pub fn to_u128(&self) -> u128 {
        ((self.0.data1 as u128) << 96)
            | ((self.0.data2 as u128) << 80)
            | ((self.0.data3 as u128) << 64)
            | u64::from_be_bytes(self.0.data4) as u128
    }

    /// The all-zero identifier, the shell gives it for windows which are not
    /// on any particular desktop.
    pub fn is_empty(&self) -> bool {
        self.to_u128() == 0
    }
}

impl From<GUID> for DesktopId {
    fn from(guid: GUID) -> Self {
        DesktopId(guid)
    }
}

impl From<DesktopId> for GUID {
    fn from(id: DesktopId) -> Self {
        id.0
    }
}

impl Display for DesktopId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let d4 = &self.0.data4;
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
            self.0.data1, self.0.data2, self.0.data3, d4[0], d4[1], d4[2], d4[3], d4[4], d4[5], d4[6], d4[7]
        )
    }
}

impl Debug for DesktopId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DesktopId({})", self)
    }
}
