//! Maps a pixel format and image size to the geometry of each plane.
use crate::format::{FormatFamily, PixelFormat};

/// The geometry of one plane of an image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlaneLayout {
    /// Width in pixels of the plane, for bit-packed formats in bytes.
    pub width: u32,
    pub height: u32,
    pub channels: u32,
    /// The plane width in elements must be a multiple of this.
    pub width_elements_multiple: u32,
    /// The plane height in rows must be a multiple of this.
    pub height_elements_multiple: u32,
}

impl PlaneLayout {
    const fn new(width: u32, height: u32, channels: u32) -> Self {
        PlaneLayout {
            width,
            height,
            channels,
            width_elements_multiple: 1,
            height_elements_multiple: 1,
        }
    }
}

/// The layout of plane `plane` of an image of `width` by `height` pixels.
///
/// Returns `None` for an unknown format, a plane index out of range, or a size that is empty or
/// not a multiple of the format's width and height multiples.
pub fn plane_layout(format: PixelFormat, width: u32, height: u32, plane: u32) -> Option<PlaneLayout> {
    let family = format.family()?;

    let (width_multiple, height_multiple) = (format.width_multiple(), format.height_multiple());
    if width == 0 || height == 0 || width_multiple == 0 || height_multiple == 0 {
        return None;
    }

    if width % width_multiple != 0 || height % height_multiple != 0 || plane >= format.planes() {
        return None;
    }

    let full = |channels| PlaneLayout::new(width, height, channels);
    let half = |channels| PlaneLayout::new(width / 2, height / 2, channels);

    Some(match family {
        FormatFamily::Generic { channels, .. } => full(channels),
        FormatFamily::Packed16 { .. } => full(1),
        FormatFamily::Bayer10Packed => PlaneLayout {
            width: width / 4 * 5,
            height,
            channels: 1,
            width_elements_multiple: 5,
            height_elements_multiple: 2,
        },
        FormatFamily::Luma10Packed => PlaneLayout {
            width: width / 4 * 5,
            height,
            channels: 1,
            width_elements_multiple: 5,
            height_elements_multiple: 1,
        },
        FormatFamily::YuvPlanar420 { .. } if plane == 0 => full(1),
        FormatFamily::YuvPlanar420 { .. } => half(1),
        FormatFamily::YuvSemiPlanar420 { .. } if plane == 0 => full(1),
        FormatFamily::YuvSemiPlanar420 { .. } => half(2),
        FormatFamily::Yuv422Packed { .. } => full(2),
        FormatFamily::YuvPlanar444 => full(1),
    })
}

/// The channels of a plane, `0` if the plane does not exist.
pub fn plane_channels(format: PixelFormat, plane: u32) -> u32 {
    smallest_layout(format, plane).map_or(0, |layout| layout.channels)
}

/// The bytes of one pixel of a plane.
///
/// Returns `0` for planes of bit-packed formats, where pixels can not be addressed by a byte
/// offset, and for planes that do not exist.
pub fn plane_bytes_per_pixel(format: PixelFormat, plane: u32) -> usize {
    match smallest_layout(format, plane) {
        Some(layout)
            if layout.width_elements_multiple == 1 && layout.height_elements_multiple == 1 =>
        {
            layout.channels as usize * format.bytes_per_data_type()
        }
        _ => 0,
    }
}

/// Convert the row stride of external memory into padding elements of a plane.
///
/// Fails if the stride is shorter than a row or does not end on an element boundary.
pub fn stride_bytes_to_padding_elements(
    format: PixelFormat,
    width: u32,
    stride_bytes: usize,
    plane: u32,
) -> Option<u32> {
    let element_size = format.bytes_per_data_type();
    if element_size == 0 {
        return None;
    }

    let layout = plane_layout(format, width, format.height_multiple(), plane)?;
    let width_bytes = layout.width as usize * layout.channels as usize * element_size;

    let padding_bytes = stride_bytes.checked_sub(width_bytes)?;
    if padding_bytes % element_size != 0 {
        return None;
    }

    u32::try_from(padding_bytes / element_size).ok()
}

fn smallest_layout(format: PixelFormat, plane: u32) -> Option<PlaneLayout> {
    plane_layout(format, format.width_multiple(), format.height_multiple(), plane)
}
