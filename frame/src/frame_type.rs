use core::fmt;
use core::str::FromStr;

use image_plane::{DataType, ParseNameError};

use crate::format::PixelFormat;
use crate::layout::{plane_layout, PlaneLayout};

/// The memory row that holds the top of the image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PixelOrigin {
    #[default]
    Invalid,
    /// The first row in memory is the top row.
    UpperLeft,
    /// The first row in memory is the bottom row.
    LowerLeft,
}

/// Size, pixel format and origin of a frame.
///
/// Ordered by width, height, format and origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameType {
    width: u32,
    height: u32,
    format: PixelFormat,
    origin: PixelOrigin,
}

impl PixelOrigin {
    pub const fn name(self) -> &'static str {
        match self {
            PixelOrigin::Invalid => "INVALID",
            PixelOrigin::UpperLeft => "UPPER_LEFT",
            PixelOrigin::LowerLeft => "LOWER_LEFT",
        }
    }
}

impl fmt::Display for PixelOrigin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PixelOrigin {
    type Err = ParseNameError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        [PixelOrigin::Invalid, PixelOrigin::UpperLeft, PixelOrigin::LowerLeft]
            .into_iter()
            .find(|origin| origin.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| ParseNameError::new("pixel origin", name))
    }
}

impl FrameType {
    /// A frame type, or the invalid frame type if the size violates the format's multiples.
    pub const fn new(width: u32, height: u32, format: PixelFormat, origin: PixelOrigin) -> Self {
        if format.into_raw() != PixelFormat::UNDEFINED.into_raw() {
            let (wm, hm) = (format.width_multiple(), format.height_multiple());

            if wm == 0 || hm == 0 || width % wm != 0 || height % hm != 0 {
                return FrameType::INVALID;
            }
        }

        FrameType {
            width,
            height,
            format,
            origin,
        }
    }

    pub const INVALID: Self = FrameType {
        width: 0,
        height: 0,
        format: PixelFormat::UNDEFINED,
        origin: PixelOrigin::Invalid,
    };

    pub const fn with_dimensions(self, width: u32, height: u32) -> Self {
        Self::new(width, height, self.format, self.origin)
    }

    pub const fn with_format(self, format: PixelFormat) -> Self {
        Self::new(self.width, self.height, format, self.origin)
    }

    pub const fn with_origin(self, origin: PixelOrigin) -> Self {
        Self::new(self.width, self.height, self.format, origin)
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    pub const fn pixel_format(&self) -> PixelFormat {
        self.format
    }

    pub const fn pixel_origin(&self) -> PixelOrigin {
        self.origin
    }

    pub const fn pixels(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub const fn channels(&self) -> u32 {
        self.format.channels()
    }

    pub const fn data_type(&self) -> DataType {
        self.format.data_type()
    }

    pub const fn bytes_per_data_type(&self) -> usize {
        self.format.bytes_per_data_type()
    }

    pub const fn planes(&self) -> u32 {
        self.format.planes()
    }

    pub const fn is_valid(&self) -> bool {
        self.width != 0
            && self.height != 0
            && self.format.into_raw() != PixelFormat::UNDEFINED.into_raw()
            && !matches!(self.origin, PixelOrigin::Invalid)
    }

    pub const fn is_pixel_format_compatible(&self, format: PixelFormat) -> bool {
        self.format.is_compatible(format)
    }

    /// Same size, compatible formats and, unless allowed to differ, the same origin.
    pub const fn is_frame_type_compatible(
        &self,
        other: &FrameType,
        allow_different_origins: bool,
    ) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.format.is_compatible(other.format)
            && (allow_different_origins || self.origin as u8 == other.origin as u8)
    }

    pub fn plane_layout(&self, plane: u32) -> Option<PlaneLayout> {
        plane_layout(self.format, self.width, self.height, plane)
    }

    /// The bytes of all planes without any padding, `None` if that does not fit a `usize`.
    pub fn frame_type_size(&self) -> Option<usize> {
        (0..self.planes())
            .filter_map(|plane| self.plane_layout(plane))
            .try_fold(0usize, |total, layout| {
                (layout.width as usize)
                    .checked_mul(layout.height as usize)?
                    .checked_mul(layout.channels as usize)?
                    .checked_mul(self.bytes_per_data_type())?
                    .checked_add(total)
            })
    }
}
