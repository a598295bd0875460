#![allow(non_upper_case_globals)]

use windows::core::GUID;

/// In-memory layout of the `VirtualDesktopManager` coclass identifier
pub const CLSID_VirtualDesktopManager_BYTES: [u8; 16] = [
    0x86, 0x90, 0x50, 0xaa, 0xa9, 0x5c, 0x25, 0x4c, 0x8f, 0x95, 0x58, 0x9d, 0x3c, 0x07, 0xb4, 0x8a,
];

/// `aa509086-5ca9-4c25-8f95-589d3c07b48a`
pub const CLSID_VirtualDesktopManager: GUID = guid_from_bytes(&CLSID_VirtualDesktopManager_BYTES);

/// Reinterpret sixteen bytes in the platform's GUID memory layout, where the
/// first three fields are little-endian.
pub const fn guid_from_bytes(b: &[u8; 16]) -> GUID {
    GUID {
        data1: u32::from_le_bytes([b[0], b[1], b[2], b[3]]),
        data2: u16::from_le_bytes([b[4], b[5]]),
        data3: u16::from_le_bytes([b[6], b[7]]),
        data4: [b[8], b[9], b[10], b[11], b[12], b[13], b[14], b[15]],
    }
}
