// Distributed under The MIT License (MIT)
//
// Copyright (c) 2019, 2020 The `image-rs` developers
//! # Plane
//!
//! A strided block of image data that knows who owns its memory.
//!
//! A [`Plane`] describes `height` rows of `width` pixels, each made of `channels` elements of
//! `element_size` bytes, with some padding elements at the end of every row. Its memory is either
//! an aligned allocation owned by the plane, or memory borrowed from elsewhere. Borrowed memory is
//! writable only when it was handed over as a unique borrow, so a read-only plane is a type-level
//! fact rather than a flag that must be checked.
//!
//! ## Usage
//!
//! ```
//! use image_plane::{AdvancedCopyMode, Plane, PlaneSpec};
//!
//! let spec = PlaneSpec::of::<u8>(4, 2, 3).with_padding(2);
//! let mut plane = Plane::new(spec).unwrap();
//! plane.row_mut::<u8>(1).unwrap()[0] = 0xff;
//!
//! // Padded rows are kept apart, the row length excludes the padding.
//! assert_eq!(plane.stride_bytes(), 14);
//! assert_eq!(plane.row_bytes(1).unwrap().len(), 12);
//!
//! // An owning plane is copied, never shared, by the default mode.
//! let copy = Plane::from_plane(&plane, AdvancedCopyMode::UseOrCopy).unwrap();
//! assert!(copy.is_owner() && copy.is_continuous());
//! ```
// The only module allowed to be `unsafe` is `buf`, which declares the aligned chunk as `Pod`.
#![deny(unsafe_code)]

mod buf;
mod copy_mode;
mod data_type;
mod error;
mod plane;

pub use crate::copy_mode::{AdvancedCopyMode, CopyAction, CopyMode, DeepCopy};
pub use crate::data_type::{DataType, Element};
pub use crate::error::{ParseNameError, PlaneError};
pub use crate::plane::{ByteLayout, Plane, PlaneSource, PlaneSpec};
