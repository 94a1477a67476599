//! Translation between pixel formats and their configuration names.
use core::fmt;
use core::str::FromStr;

use image_plane::ParseNameError;

use crate::format::PixelFormat;

/// The canonical name of every predefined format.
static NAMES: [(PixelFormat, &str); 47] = [
    (PixelFormat::ABGR32, "ABGR32"),
    (PixelFormat::ARGB32, "ARGB32"),
    (PixelFormat::BGR24, "BGR24"),
    (PixelFormat::BGR32, "BGR32"),
    (PixelFormat::BGR4444, "BGR4444"),
    (PixelFormat::BGR5551, "BGR5551"),
    (PixelFormat::BGR565, "BGR565"),
    (PixelFormat::BGRA32, "BGRA32"),
    (PixelFormat::BGRA4444, "BGRA4444"),
    (PixelFormat::BGGR10_PACKED, "BGGR10_PACKED"),
    (PixelFormat::RGB24, "RGB24"),
    (PixelFormat::RGB32, "RGB32"),
    (PixelFormat::RGB4444, "RGB4444"),
    (PixelFormat::RGB5551, "RGB5551"),
    (PixelFormat::RGB565, "RGB565"),
    (PixelFormat::RGBA32, "RGBA32"),
    (PixelFormat::RGBA4444, "RGBA4444"),
    (PixelFormat::RGBT32, "RGBT32"),
    (PixelFormat::RGGB10_PACKED, "RGGB10_PACKED"),
    (PixelFormat::Y_U_V12_LIMITED_RANGE, "Y_U_V12"),
    (PixelFormat::YUV24, "YUV24"),
    (PixelFormat::YUVA32, "YUVA32"),
    (PixelFormat::YUVT32, "YUVT32"),
    (PixelFormat::Y_V_U12_LIMITED_RANGE, "Y_V_U12"),
    (PixelFormat::YVU24, "YVU24"),
    (PixelFormat::Y_UV12_LIMITED_RANGE, "Y_UV12"),
    (PixelFormat::Y_VU12_LIMITED_RANGE, "Y_VU12"),
    (PixelFormat::YUYV16, "YUYV16"),
    (PixelFormat::UYVY16, "UYVY16"),
    (PixelFormat::Y8_FULL_RANGE, "Y8"),
    (PixelFormat::Y10, "Y10"),
    (PixelFormat::Y10_PACKED, "Y10_PACKED"),
    (PixelFormat::Y16, "Y16"),
    (PixelFormat::Y32, "Y32"),
    (PixelFormat::Y64, "Y64"),
    (PixelFormat::YA16, "YA16"),
    (PixelFormat::RGB48, "RGB48"),
    (PixelFormat::RGBA64, "RGBA64"),
    (PixelFormat::Y_U_V24_LIMITED_RANGE, "Y_U_V24"),
    (PixelFormat::Y_U_V24_FULL_RANGE, "Y_U_V24_FULL_RANGE"),
    (PixelFormat::Y8_LIMITED_RANGE, "Y8_LIMITED_RANGE"),
    (PixelFormat::Y_UV12_FULL_RANGE, "Y_UV12_FULL_RANGE"),
    (PixelFormat::Y_VU12_FULL_RANGE, "Y_VU12_FULL_RANGE"),
    (PixelFormat::Y_U_V12_FULL_RANGE, "Y_U_V12_FULL_RANGE"),
    (PixelFormat::Y_V_U12_FULL_RANGE, "Y_V_U12_FULL_RANGE"),
    (PixelFormat::F32, "F32"),
    (PixelFormat::F64, "F64"),
];

/// Names accepted when parsing but never printed.
static ALIASES: [(PixelFormat, &str); 6] = [
    (PixelFormat::Y_U_V12_LIMITED_RANGE, "Y_U_V12_LIMITED_RANGE"),
    (PixelFormat::Y_V_U12_LIMITED_RANGE, "Y_V_U12_LIMITED_RANGE"),
    (PixelFormat::Y_UV12_LIMITED_RANGE, "Y_UV12_LIMITED_RANGE"),
    (PixelFormat::Y_VU12_LIMITED_RANGE, "Y_VU12_LIMITED_RANGE"),
    (PixelFormat::Y_U_V24_LIMITED_RANGE, "Y_U_V24_LIMITED_RANGE"),
    (PixelFormat::Y8_FULL_RANGE, "Y8_FULL_RANGE"),
];

impl PixelFormat {
    /// The canonical name of a predefined format.
    pub fn name(self) -> Option<&'static str> {
        if self == PixelFormat::UNDEFINED {
            return Some("UNDEFINED");
        }

        NAMES
            .iter()
            .find(|(format, _)| *format == self)
            .map(|&(_, name)| name)
    }
}

/// Predefined formats print their name, others their raw value.
impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{:#018x}", self.into_raw()),
        }
    }
}

/// Parses names case-insensitively, with or without a `FORMAT_` prefix.
impl FromStr for PixelFormat {
    type Err = ParseNameError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let trimmed = name.trim();
        let bare = match trimmed.get(..7) {
            Some(prefix) if prefix.eq_ignore_ascii_case("FORMAT_") => &trimmed[7..],
            _ => trimmed,
        };

        if bare.eq_ignore_ascii_case("UNDEFINED") {
            return Ok(PixelFormat::UNDEFINED);
        }

        NAMES
            .iter()
            .chain(ALIASES.iter())
            .find(|(_, known)| known.eq_ignore_ascii_case(bare))
            .map(|&(format, _)| format)
            .ok_or_else(|| ParseNameError::new("pixel format", name))
    }
}
