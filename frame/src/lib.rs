//! Multi-plane image frames with self-describing pixel formats.
//!
//! A [`PixelFormat`] is a 64-bit value. Predefined formats carry an id, generic formats are
//! fully described by their data type, channel count, plane count and size multiples. A
//! [`FrameType`] adds dimensions and a pixel origin, and a [`Frame`] holds one
//! [`Plane`](image_plane::Plane) per plane of its format.
//!
//! # Usage
//!
//! Allocating a frame, writing to it and referencing part of it:
//! 1. Describe the frame with a format, dimensions and an origin
//! 2. Allocate the planes, possibly with padding
//! 3. Take a view of a rectangle, which shares the memory of the frame
//!
//! ```
//! use image_frame::{CopyMode, Frame, FrameType, PixelFormat, PixelOrigin};
//!
//! let frame_type = FrameType::new(4, 4, PixelFormat::Y_UV12, PixelOrigin::UpperLeft);
//! let mut frame = Frame::with_padding(frame_type, &[4])?;
//! assert_eq!(frame.number_planes(), 2);
//!
//! // The interleaved chroma plane is half the size in each direction.
//! frame.pixel_mut::<u8>(1, 1, 1)?.copy_from_slice(&[0x40, 0xc0]);
//!
//! let view = frame.sub_frame(2, 2, 2, 2, CopyMode::UseKeepLayout)?;
//! assert!(view.is_read_only());
//! assert_eq!(view.pixel::<u8>(0, 0, 1)?, &[0x40, 0xc0]);
//! # use image_frame::FrameError;
//! # Ok::<(), FrameError>(())
//! ```
//!
//! Formats can be inspected and found by their properties:
//!
//! ```
//! use image_frame::{DataType, PixelFormat};
//!
//! let format: PixelFormat = "FORMAT_RGB24".parse()?;
//! assert_eq!(format, PixelFormat::find(DataType::U8, 3));
//! assert_eq!(format.to_string(), "RGB24");
//! assert!(format.is_compatible(PixelFormat::interleaved(DataType::U8, 3)));
//! # use image_frame::ParseNameError;
//! # Ok::<(), ParseNameError>(())
//! ```
#![deny(unsafe_code)]

mod error;
/// The pixel format encoding and catalogue.
mod format;
/// Frames and their planes.
mod frame;
mod frame_type;
/// Plane geometry of each format family.
mod layout;
mod names;
mod timestamp;

pub use crate::error::FrameError;
pub use crate::format::{AlphaPosition, ChannelBits, ChromaOrder, FormatFamily, PixelFormat};
pub use crate::frame::{Frame, PlaneInitializer};
pub use crate::frame_type::{FrameType, PixelOrigin};
pub use crate::layout::{
    plane_bytes_per_pixel, plane_channels, plane_layout, stride_bytes_to_padding_elements,
    PlaneLayout,
};
pub use crate::timestamp::Timestamp;

pub use image_plane::{
    AdvancedCopyMode, CopyMode, DataType, ParseNameError, Plane, PlaneError, PlaneSource,
    PlaneSpec,
};
