//! The self-describing pixel format.
use image_plane::DataType;
use image_plane::DataType::{F32, F64, U16, U32, U64, U8};

/// A pixel format packed into 64 bits.
///
/// From the low end, the value holds a 16-bit predefined id, then 8 bits each for the channel
/// count, the [`DataType`] tag, the plane count, and the width and height multiples. The id is `0`
/// for a pure generic format which is fully described by the remaining fields. Predefined formats
/// with a byte layout that is not a plain interleaving of elements, such as bit-packed or
/// sub-sampled formats, have a channel count field of `0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PixelFormat(u64);

/// The families of byte layouts a pixel format can have.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormatFamily {
    /// One or more planes of interleaved elements of one data type.
    Generic { data_type: DataType, channels: u32 },
    /// One 16-bit value per pixel holding all channels, e.g. 5-6-5.
    Packed16 { channels: u32 },
    /// A 10-bit Bayer mosaic, 4 pixels packed into 5 bytes.
    Bayer10Packed,
    /// 10-bit luma, 4 pixels packed into 5 bytes.
    Luma10Packed,
    /// Three planes, chroma at half width and height.
    YuvPlanar420 { chroma: ChromaOrder },
    /// A luma plane and one interleaved chroma plane at half width and height.
    YuvSemiPlanar420 { chroma: ChromaOrder },
    /// One plane, two pixels share one pair of chroma samples.
    Yuv422Packed { luma_first: bool },
    /// Three full resolution planes.
    YuvPlanar444,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChromaOrder {
    Uv,
    Vu,
}

/// Where the alpha channel is stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlphaPosition {
    First,
    Last,
}

/// Bits per color channel of an RGB-like format, `0` for absent channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ChannelBits {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
    pub alpha: u32,
}

const CHANNELS_SHIFT: u32 = 16;
const DATA_TYPE_SHIFT: u32 = 24;
const PLANES_SHIFT: u32 = 32;
const WIDTH_MULTIPLE_SHIFT: u32 = 40;
const HEIGHT_MULTIPLE_SHIFT: u32 = 48;

const PREDEFINED_MASK: u64 = 0xFFFF;

const fn encode(
    id: u16,
    data_type: DataType,
    channels: u8,
    planes: u8,
    width_multiple: u8,
    height_multiple: u8,
) -> PixelFormat {
    PixelFormat(
        id as u64
            | (channels as u64) << CHANNELS_SHIFT
            | (data_type as u64) << DATA_TYPE_SHIFT
            | (planes as u64) << PLANES_SHIFT
            | (width_multiple as u64) << WIDTH_MULTIPLE_SHIFT
            | (height_multiple as u64) << HEIGHT_MULTIPLE_SHIFT,
    )
}

const fn interleaved(id: u16, data_type: DataType, channels: u8) -> PixelFormat {
    encode(id, data_type, channels, 1, 1, 1)
}

const fn opaque(id: u16, data_type: DataType, planes: u8, wm: u8, hm: u8) -> PixelFormat {
    encode(id, data_type, 0, planes, wm, hm)
}


impl PixelFormat {
    pub const UNDEFINED: Self = PixelFormat(0);

    pub const ABGR32: Self = interleaved(1, U8, 4);
    pub const ARGB32: Self = interleaved(2, U8, 4);
    pub const BGR24: Self = interleaved(3, U8, 3);
    pub const BGR32: Self = interleaved(4, U8, 4);
    pub const BGR4444: Self = opaque(5, U16, 1, 1, 1);
    pub const BGR5551: Self = opaque(6, U16, 1, 1, 1);
    pub const BGR565: Self = opaque(7, U16, 1, 1, 1);
    pub const BGRA32: Self = interleaved(8, U8, 4);
    pub const BGRA4444: Self = opaque(9, U16, 1, 1, 1);
    pub const BGGR10_PACKED: Self = opaque(10, U8, 1, 4, 2);
    pub const RGB24: Self = interleaved(11, U8, 3);
    pub const RGB32: Self = interleaved(12, U8, 4);
    pub const RGB4444: Self = opaque(13, U16, 1, 1, 1);
    pub const RGB5551: Self = opaque(14, U16, 1, 1, 1);
    pub const RGB565: Self = opaque(15, U16, 1, 1, 1);
    pub const RGBA32: Self = interleaved(16, U8, 4);
    pub const RGBA4444: Self = opaque(17, U16, 1, 1, 1);
    /// RGB with a transparency channel of unspecified meaning.
    pub const RGBT32: Self = interleaved(18, U8, 4);
    pub const RGGB10_PACKED: Self = opaque(19, U8, 1, 4, 2);
    pub const Y_U_V12_LIMITED_RANGE: Self = opaque(20, U8, 3, 2, 2);
    pub const YUV24: Self = interleaved(21, U8, 3);
    pub const YUVA32: Self = interleaved(22, U8, 4);
    pub const YUVT32: Self = interleaved(23, U8, 4);
    pub const Y_V_U12_LIMITED_RANGE: Self = opaque(24, U8, 3, 2, 2);
    pub const YVU24: Self = interleaved(25, U8, 3);
    pub const Y_UV12_LIMITED_RANGE: Self = opaque(26, U8, 2, 2, 2);
    pub const Y_VU12_LIMITED_RANGE: Self = opaque(27, U8, 2, 2, 2);
    pub const YUYV16: Self = opaque(28, U8, 1, 2, 1);
    pub const UYVY16: Self = opaque(29, U8, 1, 2, 1);
    pub const Y8_FULL_RANGE: Self = interleaved(30, U8, 1);
    pub const Y10: Self = interleaved(31, U16, 1);
    pub const Y10_PACKED: Self = opaque(32, U8, 1, 4, 1);
    pub const Y16: Self = interleaved(33, U16, 1);
    pub const Y32: Self = interleaved(34, U32, 1);
    pub const Y64: Self = interleaved(35, U64, 1);
    pub const YA16: Self = interleaved(36, U8, 2);
    pub const RGB48: Self = interleaved(37, U16, 3);
    pub const RGBA64: Self = interleaved(38, U16, 4);
    pub const Y_U_V24_LIMITED_RANGE: Self = opaque(39, U8, 3, 1, 1);
    pub const Y_U_V24_FULL_RANGE: Self = opaque(40, U8, 3, 1, 1);
    pub const Y8_LIMITED_RANGE: Self = interleaved(41, U8, 1);
    pub const Y_UV12_FULL_RANGE: Self = opaque(42, U8, 2, 2, 2);
    pub const Y_VU12_FULL_RANGE: Self = opaque(43, U8, 2, 2, 2);
    pub const Y_U_V12_FULL_RANGE: Self = opaque(44, U8, 3, 2, 2);
    pub const Y_V_U12_FULL_RANGE: Self = opaque(45, U8, 3, 2, 2);
    pub const F32: Self = interleaved(46, F32, 1);
    pub const F64: Self = interleaved(47, F64, 1);

    pub const Y8: Self = Self::Y8_FULL_RANGE;
    pub const Y_U_V12: Self = Self::Y_U_V12_LIMITED_RANGE;
    pub const Y_V_U12: Self = Self::Y_V_U12_LIMITED_RANGE;
    pub const Y_UV12: Self = Self::Y_UV12_LIMITED_RANGE;
    pub const Y_VU12: Self = Self::Y_VU12_LIMITED_RANGE;
    pub const Y_U_V24: Self = Self::Y_U_V24_LIMITED_RANGE;

    /// Every predefined format, each distinct value once.
    pub const DEFINED: [Self; 47] = [
        Self::ABGR32,
        Self::ARGB32,
        Self::BGR24,
        Self::BGR32,
        Self::BGR4444,
        Self::BGR5551,
        Self::BGR565,
        Self::BGRA32,
        Self::BGRA4444,
        Self::BGGR10_PACKED,
        Self::RGB24,
        Self::RGB32,
        Self::RGB4444,
        Self::RGB5551,
        Self::RGB565,
        Self::RGBA32,
        Self::RGBA4444,
        Self::RGBT32,
        Self::RGGB10_PACKED,
        Self::Y_U_V12_LIMITED_RANGE,
        Self::YUV24,
        Self::YUVA32,
        Self::YUVT32,
        Self::Y_V_U12_LIMITED_RANGE,
        Self::YVU24,
        Self::Y_UV12_LIMITED_RANGE,
        Self::Y_VU12_LIMITED_RANGE,
        Self::YUYV16,
        Self::UYVY16,
        Self::Y8_FULL_RANGE,
        Self::Y10,
        Self::Y10_PACKED,
        Self::Y16,
        Self::Y32,
        Self::Y64,
        Self::YA16,
        Self::RGB48,
        Self::RGBA64,
        Self::Y_U_V24_LIMITED_RANGE,
        Self::Y_U_V24_FULL_RANGE,
        Self::Y8_LIMITED_RANGE,
        Self::Y_UV12_FULL_RANGE,
        Self::Y_VU12_FULL_RANGE,
        Self::Y_U_V12_FULL_RANGE,
        Self::Y_V_U12_FULL_RANGE,
        Self::F32,
        Self::F64,
    ];

    pub const fn from_raw(raw: u64) -> Self {
        PixelFormat(raw)
    }

    pub const fn into_raw(self) -> u64 {
        self.0
    }

    /// A pure generic format.
    ///
    /// Returns [`PixelFormat::UNDEFINED`] unless `channels` is in `1..32`, `planes` in `1..256`
    /// and both multiples in `1..256`.
    pub const fn generic(
        data_type: DataType,
        channels: u32,
        planes: u32,
        width_multiple: u32,
        height_multiple: u32,
    ) -> Self {
        if !data_type.is_defined()
            || channels == 0
            || channels >= 32
            || planes == 0
            || planes >= 256
            || width_multiple == 0
            || width_multiple >= 256
            || height_multiple == 0
            || height_multiple >= 256
        {
            return Self::UNDEFINED;
        }

        encode(
            0,
            data_type,
            channels as u8,
            planes as u8,
            width_multiple as u8,
            height_multiple as u8,
        )
    }

    /// A pure generic format of unsigned integers with 8, 16, 32 or 64 bits.
    pub const fn generic_with_bits(bits_per_channel: u32, channels: u32) -> Self {
        Self::generic(DataType::unsigned_with_bits(bits_per_channel), channels, 1, 1, 1)
    }

    /// A single plane, interleaved pure generic format.
    pub const fn interleaved(data_type: DataType, channels: u32) -> Self {
        Self::generic(data_type, channels, 1, 1, 1)
    }

    const fn field(self, shift: u32) -> u32 {
        ((self.0 >> shift) & 0xFF) as u32
    }

    pub const fn predefined_id(self) -> u16 {
        (self.0 & PREDEFINED_MASK) as u16
    }

    pub const fn data_type(self) -> DataType {
        match DataType::from_raw(self.field(DATA_TYPE_SHIFT) as u8) {
            Some(data_type) => data_type,
            None => DataType::Undefined,
        }
    }

    pub const fn bytes_per_data_type(self) -> usize {
        self.data_type().bytes()
    }

    /// The raw channel field, `0` for formats that are not generic.
    pub const fn generic_channels(self) -> u32 {
        self.field(CHANNELS_SHIFT)
    }

    /// The number of channels, also for bit-packed and sub-sampled formats.
    pub const fn channels(self) -> u32 {
        if self.is_generic() {
            return self.generic_channels();
        }

        match self {
            Self::Y10_PACKED => 1,
            Self::BGR4444 | Self::RGB4444 | Self::BGRA4444 | Self::RGBA4444 => 4,
            Self::BGR5551
            | Self::BGR565
            | Self::RGB5551
            | Self::RGB565
            | Self::BGGR10_PACKED
            | Self::RGGB10_PACKED
            | Self::Y_U_V12_LIMITED_RANGE
            | Self::Y_U_V12_FULL_RANGE
            | Self::Y_V_U12_LIMITED_RANGE
            | Self::Y_V_U12_FULL_RANGE
            | Self::Y_UV12_LIMITED_RANGE
            | Self::Y_UV12_FULL_RANGE
            | Self::Y_VU12_LIMITED_RANGE
            | Self::Y_VU12_FULL_RANGE
            | Self::Y_U_V24_LIMITED_RANGE
            | Self::Y_U_V24_FULL_RANGE
            | Self::YUYV16
            | Self::UYVY16 => 3,
            _ => 0,
        }
    }

    pub const fn planes(self) -> u32 {
        self.field(PLANES_SHIFT)
    }

    pub const fn width_multiple(self) -> u32 {
        self.field(WIDTH_MULTIPLE_SHIFT)
    }

    pub const fn height_multiple(self) -> u32 {
        self.field(HEIGHT_MULTIPLE_SHIFT)
    }

    /// Bits of one pixel of a generic format, `0` otherwise.
    pub const fn generic_bits_per_pixel(self) -> u32 {
        if !self.is_generic() {
            return 0;
        }

        self.generic_channels() * self.bytes_per_data_type() as u32 * 8
    }

    pub const fn is_generic(self) -> bool {
        self.data_type().is_defined() && self.generic_channels() != 0 && self.planes() != 0
    }

    pub const fn is_pure_generic(self) -> bool {
        self.is_generic() && self.predefined_id() == 0
    }

    /// Strip the predefined id, keeping all layout fields.
    pub const fn make_generic(self) -> Self {
        PixelFormat(self.0 & !PREDEFINED_MASK)
    }

    /// Whether several pixels share groups of bytes.
    pub const fn is_packed(self) -> bool {
        matches!(self, Self::BGGR10_PACKED | Self::RGGB10_PACKED | Self::Y10_PACKED)
    }

    pub fn family(self) -> Option<FormatFamily> {
        if self.is_generic() {
            return Some(FormatFamily::Generic {
                data_type: self.data_type(),
                channels: self.generic_channels(),
            });
        }

        Some(match self {
            Self::BGR4444
            | Self::BGRA4444
            | Self::RGB4444
            | Self::RGBA4444
            | Self::BGR5551
            | Self::BGR565
            | Self::RGB5551
            | Self::RGB565 => FormatFamily::Packed16 {
                channels: self.channels(),
            },
            Self::BGGR10_PACKED | Self::RGGB10_PACKED => FormatFamily::Bayer10Packed,
            Self::Y10_PACKED => FormatFamily::Luma10Packed,
            Self::Y_U_V12_LIMITED_RANGE | Self::Y_U_V12_FULL_RANGE => FormatFamily::YuvPlanar420 {
                chroma: ChromaOrder::Uv,
            },
            Self::Y_V_U12_LIMITED_RANGE | Self::Y_V_U12_FULL_RANGE => FormatFamily::YuvPlanar420 {
                chroma: ChromaOrder::Vu,
            },
            Self::Y_UV12_LIMITED_RANGE | Self::Y_UV12_FULL_RANGE => {
                FormatFamily::YuvSemiPlanar420 {
                    chroma: ChromaOrder::Uv,
                }
            }
            Self::Y_VU12_LIMITED_RANGE | Self::Y_VU12_FULL_RANGE => {
                FormatFamily::YuvSemiPlanar420 {
                    chroma: ChromaOrder::Vu,
                }
            }
            Self::YUYV16 => FormatFamily::Yuv422Packed { luma_first: true },
            Self::UYVY16 => FormatFamily::Yuv422Packed { luma_first: false },
            Self::Y_U_V24_LIMITED_RANGE | Self::Y_U_V24_FULL_RANGE => FormatFamily::YuvPlanar444,
            _ => return None,
        })
    }

    /// Identical formats, or generic formats of the same data type and channels where at least
    /// one side is pure generic.
    pub const fn is_compatible(self, other: Self) -> bool {
        if self.0 == other.0 {
            return true;
        }

        self.is_generic()
            && other.is_generic()
            && (self.is_pure_generic() || other.is_pure_generic())
            && self.data_type() as u8 == other.data_type() as u8
            && self.generic_channels() == other.generic_channels()
    }

    pub const fn alpha_channel(self) -> Option<AlphaPosition> {
        match self {
            Self::ABGR32 | Self::ARGB32 => Some(AlphaPosition::First),
            Self::BGRA32
            | Self::BGRA4444
            | Self::RGBA32
            | Self::RGBA4444
            | Self::RGBA64
            | Self::YA16
            | Self::YUVA32 => Some(AlphaPosition::Last),
            _ => None,
        }
    }

    pub const fn has_alpha(self) -> bool {
        self.alpha_channel().is_some()
    }

    /// The format with an additional alpha channel at `position`.
    ///
    /// A format that already has alpha is returned unchanged, [`PixelFormat::UNDEFINED`] if no
    /// such format exists.
    pub const fn with_alpha(self, position: AlphaPosition) -> Self {
        if self.has_alpha() {
            return self;
        }

        let last = matches!(position, AlphaPosition::Last);
        match self {
            Self::BGR24 if last => Self::BGRA32,
            Self::BGR24 => Self::ABGR32,
            Self::RGB24 if last => Self::RGBA32,
            Self::RGB24 => Self::ARGB32,
            Self::RGB48 if last => Self::RGBA64,
            Self::Y8 if last => Self::YA16,
            Self::YUV24 if last => Self::YUVA32,
            _ => Self::UNDEFINED,
        }
    }

    /// The format without its alpha channel, or itself if it has none.
    pub const fn without_alpha(self) -> Self {
        match self {
            Self::ABGR32 | Self::BGRA32 => Self::BGR24,
            Self::ARGB32 | Self::RGBA32 => Self::RGB24,
            Self::RGBA64 => Self::RGB48,
            Self::YA16 => Self::Y8,
            Self::YUVA32 => Self::YUV24,
            other => other,
        }
    }

    /// Bits per color channel, all zero for formats that are not RGB-like.
    pub const fn channel_bits(self) -> ChannelBits {
        const fn bits(red: u32, green: u32, blue: u32, alpha: u32) -> ChannelBits {
            ChannelBits {
                red,
                green,
                blue,
                alpha,
            }
        }

        match self {
            Self::ABGR32 | Self::ARGB32 | Self::BGRA32 | Self::RGBA32 => bits(8, 8, 8, 8),
            Self::BGR24 | Self::BGR32 | Self::RGB24 | Self::RGB32 | Self::RGBT32 => {
                bits(8, 8, 8, 0)
            }
            Self::BGR4444 | Self::RGB4444 => bits(4, 4, 4, 0),
            Self::BGRA4444 | Self::RGBA4444 => bits(4, 4, 4, 4),
            Self::BGR5551 | Self::RGB5551 => bits(5, 5, 5, 0),
            Self::BGR565 | Self::RGB565 => bits(5, 6, 5, 0),
            Self::BGGR10_PACKED | Self::RGGB10_PACKED => bits(10, 10, 10, 0),
            Self::RGB48 => bits(16, 16, 16, 0),
            Self::RGBA64 => bits(16, 16, 16, 16),
            _ => bits(0, 0, 0, 0),
        }
    }

    /// The interleaved single plane format holding the same channels.
    pub const fn generic_single_plane(self) -> Self {
        if self.is_generic() {
            return self;
        }

        match self {
            Self::BGR4444 | Self::BGR5551 | Self::BGR565 => Self::BGR24,
            Self::BGRA4444 => Self::BGRA32,
            Self::RGB4444 | Self::RGB5551 | Self::RGB565 => Self::RGB24,
            Self::RGBA4444 => Self::RGBA32,
            Self::Y_UV12_LIMITED_RANGE
            | Self::Y_UV12_FULL_RANGE
            | Self::UYVY16
            | Self::YUYV16
            | Self::Y_U_V12_LIMITED_RANGE
            | Self::Y_U_V12_FULL_RANGE
            | Self::Y_U_V24_LIMITED_RANGE
            | Self::Y_U_V24_FULL_RANGE => Self::YUV24,
            Self::Y_VU12_LIMITED_RANGE
            | Self::Y_VU12_FULL_RANGE
            | Self::Y_V_U12_LIMITED_RANGE
            | Self::Y_V_U12_FULL_RANGE => Self::YVU24,
            _ => Self::UNDEFINED,
        }
    }

    /// A common format with the given bits per pixel.
    pub const fn find_by_bits(bits_per_pixel: u32) -> Self {
        match bits_per_pixel {
            8 => Self::Y8,
            16 => Self::YA16,
            24 => Self::RGB24,
            32 => Self::RGBA32,
            64 => Self::Y64,
            128 => Self::interleaved(DataType::U64, 2),
            _ => Self::UNDEFINED,
        }
    }

    /// A common predefined format with the given element type and channels.
    pub const fn find(data_type: DataType, channels: u32) -> Self {
        match (data_type, channels) {
            (DataType::U8, 1) => Self::Y8,
            (DataType::U8, 2) => Self::YA16,
            (DataType::U8, 3) => Self::RGB24,
            (DataType::U8, 4) => Self::RGBA32,
            (DataType::U16, 3) => Self::RGB48,
            (DataType::U16, 4) => Self::RGBA64,
            _ => Self::UNDEFINED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_fields() {
        let format = PixelFormat::Y_UV12;
        assert_eq!(format.predefined_id(), 26);
        assert_eq!(format.data_type(), DataType::U8);
        assert_eq!(format.generic_channels(), 0);
        assert_eq!(format.channels(), 3);
        assert_eq!(format.planes(), 2);
        assert_eq!(format.width_multiple(), 2);
        assert_eq!(format.height_multiple(), 2);

        assert_eq!(PixelFormat::RGB24.into_raw(), 0x0001_0101_0103_000B);
    }

    #[test]
    fn generic_construction() {
        let format = PixelFormat::generic(DataType::F32, 2, 1, 1, 1);
        assert!(format.is_pure_generic());
        assert_eq!(format.generic_bits_per_pixel(), 64);

        assert_eq!(PixelFormat::generic(DataType::U8, 0, 1, 1, 1), PixelFormat::UNDEFINED);
        assert_eq!(PixelFormat::generic(DataType::U8, 32, 1, 1, 1), PixelFormat::UNDEFINED);
        assert_eq!(PixelFormat::generic(DataType::U8, 1, 256, 1, 1), PixelFormat::UNDEFINED);
        assert_eq!(PixelFormat::generic(DataType::U8, 1, 1, 0, 1), PixelFormat::UNDEFINED);
        assert_eq!(
            PixelFormat::generic(DataType::Undefined, 1, 1, 1, 1),
            PixelFormat::UNDEFINED
        );

        assert_eq!(PixelFormat::generic_with_bits(16, 3).data_type(), DataType::U16);
        assert_eq!(PixelFormat::generic_with_bits(12, 3), PixelFormat::UNDEFINED);
    }

    #[test]
    fn make_generic_strips_id() {
        let generic = PixelFormat::RGB24.make_generic();
        assert!(generic.is_pure_generic());
        assert_eq!(generic, PixelFormat::interleaved(DataType::U8, 3));
        assert!(!PixelFormat::Y_UV12.make_generic().is_generic());
    }

    #[test]
    fn compatibility() {
        let pure = PixelFormat::interleaved(DataType::U8, 3);
        assert!(PixelFormat::RGB24.is_compatible(pure));
        assert!(pure.is_compatible(PixelFormat::BGR24));
        assert!(!PixelFormat::RGB24.is_compatible(PixelFormat::BGR24));
        assert!(!PixelFormat::RGB24.is_compatible(PixelFormat::interleaved(DataType::U8, 4)));
        assert!(!PixelFormat::Y_UV12.is_compatible(PixelFormat::Y_UV12_FULL_RANGE));
    }

    #[test]
    fn alpha() {
        assert_eq!(PixelFormat::ARGB32.alpha_channel(), Some(AlphaPosition::First));
        assert_eq!(PixelFormat::YA16.alpha_channel(), Some(AlphaPosition::Last));
        assert!(!PixelFormat::RGBT32.has_alpha());

        assert_eq!(PixelFormat::BGR24.with_alpha(AlphaPosition::First), PixelFormat::ABGR32);
        assert_eq!(PixelFormat::RGB48.with_alpha(AlphaPosition::Last), PixelFormat::RGBA64);
        assert_eq!(PixelFormat::RGB48.with_alpha(AlphaPosition::First), PixelFormat::UNDEFINED);
        assert_eq!(PixelFormat::RGBA32.with_alpha(AlphaPosition::First), PixelFormat::RGBA32);
        assert_eq!(PixelFormat::Y16.with_alpha(AlphaPosition::Last), PixelFormat::UNDEFINED);

        assert_eq!(PixelFormat::ABGR32.without_alpha(), PixelFormat::BGR24);
        assert_eq!(PixelFormat::YUVA32.without_alpha(), PixelFormat::YUV24);
        assert_eq!(PixelFormat::Y_UV12.without_alpha(), PixelFormat::Y_UV12);
    }

    #[test]
    fn channel_bits() {
        assert_eq!(PixelFormat::RGB565.channel_bits(), ChannelBits { red: 5, green: 6, blue: 5, alpha: 0 });
        assert_eq!(PixelFormat::RGBA64.channel_bits().alpha, 16);
        assert_eq!(
            PixelFormat::interleaved(DataType::U8, 3).channel_bits(),
            ChannelBits::default()
        );
    }

    #[test]
    fn single_plane_equivalents() {
        assert_eq!(PixelFormat::Y_UV12.generic_single_plane(), PixelFormat::YUV24);
        assert_eq!(PixelFormat::Y_V_U12_FULL_RANGE.generic_single_plane(), PixelFormat::YVU24);
        assert_eq!(PixelFormat::RGB565.generic_single_plane(), PixelFormat::RGB24);
        assert_eq!(PixelFormat::RGB24.generic_single_plane(), PixelFormat::RGB24);
        assert_eq!(PixelFormat::Y10_PACKED.generic_single_plane(), PixelFormat::UNDEFINED);
    }

    #[test]
    fn reverse_lookup() {
        assert_eq!(PixelFormat::find_by_bits(24), PixelFormat::RGB24);
        assert_eq!(PixelFormat::find_by_bits(128).generic_bits_per_pixel(), 128);
        assert_eq!(PixelFormat::find_by_bits(12), PixelFormat::UNDEFINED);
        assert_eq!(PixelFormat::find(DataType::U8, 2), PixelFormat::YA16);
        assert_eq!(PixelFormat::find(DataType::U16, 3), PixelFormat::RGB48);
        assert_eq!(PixelFormat::find(DataType::F32, 1), PixelFormat::UNDEFINED);
    }

    #[test]
    fn families() {
        assert_eq!(
            PixelFormat::Y_VU12.family(),
            Some(FormatFamily::YuvSemiPlanar420 { chroma: ChromaOrder::Vu })
        );
        assert_eq!(PixelFormat::RGBA4444.family(), Some(FormatFamily::Packed16 { channels: 4 }));
        assert_eq!(
            PixelFormat::F64.family(),
            Some(FormatFamily::Generic { data_type: DataType::F64, channels: 1 })
        );
        assert_eq!(PixelFormat::UNDEFINED.family(), None);

        for format in PixelFormat::DEFINED {
            assert!(format.family().is_some(), "{format:?}");
        }
    }
}
