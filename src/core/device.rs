//! Viewport size classes
//!
//! Layout hint for presentation code; the poll pipeline ignores it.

use serde::Serialize;

/// Widths below this are mobile
pub const MOBILE_MAX_WIDTH: u32 = 768;

/// Widths below this (and at least `MOBILE_MAX_WIDTH`) are tablet
pub const TABLET_MAX_WIDTH: u32 = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceClass {
    pub fn from_width(width_px: u32) -> Self {
        if width_px < MOBILE_MAX_WIDTH {
            DeviceClass::Mobile
        } else if width_px < TABLET_MAX_WIDTH {
            DeviceClass::Tablet
        } else {
            DeviceClass::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == DeviceClass::Mobile
    }

    pub fn is_tablet(self) -> bool {
        self == DeviceClass::Tablet
    }
}
