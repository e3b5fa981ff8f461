//! Native status codes.
//!
//! A status code packs a severity bit, a facility (the subsystem that raised
//! it) and a 16-bit sub-code:
//!
//! ```text
//!  31  30..27  26..16     15..0
//! [S] [flags] [facility] [code]
//! ```

use std::fmt;
use std::fmt::{Display, Formatter};

pub const FACILITY_NULL: u16 = 0;
pub const FACILITY_DISPATCH: u16 = 2;
pub const FACILITY_WIN32: u16 = 7;
/// Errors raised by script engines and other controls.
pub const FACILITY_CONTROL: u16 = 10;
pub const FACILITY_URT: u16 = 19;

const SEVERITY_ERROR: u32 = 0x8000_0000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HResult(pub i32);

impl HResult {
    pub const S_OK: HResult = HResult(0);
    pub const E_FAIL: HResult = HResult(0x8000_4005_u32 as i32);
    pub const E_INVALIDARG: HResult = HResult(0x8007_0057_u32 as i32);
    pub const DISP_E_MEMBERNOTFOUND: HResult = HResult(0x8002_0003_u32 as i32);
    pub const DISP_E_UNKNOWNNAME: HResult = HResult(0x8002_0006_u32 as i32);
    pub const DISP_E_BADPARAMCOUNT: HResult = HResult(0x8002_000E_u32 as i32);
    pub const COR_E_MISSINGMEMBER: HResult = HResult(0x8013_1512_u32 as i32);

    /// Builds a failure code from a facility and sub-code.
    pub fn from_parts(facility: u16, code: u16) -> Self {
        let raw = SEVERITY_ERROR | (((facility as u32) & 0x1FFF) << 16) | code as u32;
        HResult(raw as i32)
    }

    pub fn facility(self) -> u16 {
        (((self.0 as u32) >> 16) & 0x1FFF) as u16
    }

    pub fn code(self) -> u16 {
        ((self.0 as u32) & 0xFFFF) as u16
    }

    pub fn is_success(self) -> bool {
        self.0 >= 0
    }

    pub fn as_unsigned(self) -> u32 {
        self.0 as u32
    }
}

impl From<u32> for HResult {
    fn from(raw: u32) -> Self {
        HResult(raw as i32)
    }
}

impl Display for HResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.as_unsigned())
    }
}
