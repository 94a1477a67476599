// Distributed under The MIT License (MIT)
//
// Copyright (c) 2019, 2020 The `image-rs` developers
//! A single strided plane of image data.
use core::{fmt, mem, ops::Range};

use tracing::{debug, trace};

use crate::buf::Buffer;
use crate::copy_mode::{AdvancedCopyMode, CopyAction, CopyMode, DeepCopy};
use crate::data_type::{DataType, Element};
use crate::error::PlaneError;

/// The geometry of a plane.
///
/// All quantities are in elements, not bytes. A row consists of `width * channels` elements
/// followed by `padding_elements` unused elements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PlaneSpec {
    pub width: u32,
    pub height: u32,
    pub channels: u32,
    /// The size of one element in bytes.
    pub element_size: u32,
    pub padding_elements: u32,
}

/// Byte quantities derived from a valid [`PlaneSpec`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ByteLayout {
    /// The bytes of a row without padding.
    pub width_bytes: usize,
    /// The distance between the starts of two consecutive rows.
    pub stride_bytes: usize,
    pub rows: usize,
    /// `stride_bytes * rows`.
    pub size: usize,
    /// The bytes actually addressed, the last row does not need its padding.
    pub min_len: usize,
}

/// Caller memory a plane is built from.
#[derive(Debug)]
pub enum PlaneSource<'data> {
    /// Memory that may only be read.
    Shared(&'data [u8]),
    /// Memory that may also be written.
    Exclusive(&'data mut [u8]),
}

/// A strided block of image data with an explicit owner.
///
/// A plane either owns an aligned allocation, or references memory it borrows for `'data`. A
/// borrowed plane is writable only if it was built from a unique borrow. The default plane is
/// invalid and holds no memory.
#[derive(Default)]
pub struct Plane<'data> {
    storage: Storage<'data>,
    spec: PlaneSpec,
    layout: ByteLayout,
}

#[derive(Default)]
enum Storage<'data> {
    #[default]
    None,
    Owned(Buffer),
    Shared(&'data [u8]),
    Exclusive(&'data mut [u8]),
}

impl PlaneSpec {
    /// A plane without padding.
    pub const fn new(width: u32, height: u32, channels: u32, element_size: u32) -> Self {
        PlaneSpec {
            width,
            height,
            channels,
            element_size,
            padding_elements: 0,
        }
    }

    /// A plane of `T` elements.
    pub fn of<T: Element>(width: u32, height: u32, channels: u32) -> Self {
        Self::new(width, height, channels, mem::size_of::<T>() as u32)
    }

    /// A plane of elements with the size of a data type.
    pub fn with_data_type(width: u32, height: u32, channels: u32, data_type: DataType) -> Self {
        Self::new(width, height, channels, data_type.bytes() as u32)
    }

    /// The same geometry with `padding_elements` unused elements after every row.
    pub const fn with_padding(self, padding_elements: u32) -> Self {
        PlaneSpec {
            padding_elements,
            ..self
        }
    }

    /// Whether the geometry describes a non-empty plane that fits the address space.
    pub fn is_valid(&self) -> bool {
        self.byte_layout().is_ok()
    }

    /// Compute the byte quantities, failing on empty or overflowing geometry.
    pub fn byte_layout(&self) -> Result<ByteLayout, PlaneError> {
        if self.width == 0 || self.height == 0 || self.channels == 0 || self.element_size == 0 {
            return Err(PlaneError::InvalidLayout);
        }

        let element_size = self.element_size as usize;
        let rows = self.height as usize;

        let width_elements = (self.width as usize).checked_mul(self.channels as usize);
        let stride_elements =
            width_elements.and_then(|width| width.checked_add(self.padding_elements as usize));

        let width_bytes = width_elements.and_then(|width| width.checked_mul(element_size));
        let stride_bytes = stride_elements.and_then(|stride| stride.checked_mul(element_size));
        let size = stride_bytes
            .and_then(|stride| stride.checked_mul(rows))
            .filter(|&size| size <= isize::MAX as usize);

        match (width_bytes, stride_bytes, size) {
            (Some(width_bytes), Some(stride_bytes), Some(size)) => Ok(ByteLayout {
                width_bytes,
                stride_bytes,
                rows,
                size,
                min_len: size - (stride_bytes - width_bytes),
            }),
            _ => Err(PlaneError::InvalidLayout),
        }
    }
}

impl ByteLayout {
    /// Restrict caller memory to the bytes described by this layout.
    fn view<'a>(&self, data: &'a [u8]) -> Result<&'a [u8], PlaneError> {
        self.check_len(data.len())?;
        Ok(&data[..data.len().min(self.size)])
    }

    fn view_mut<'a>(&self, data: &'a mut [u8]) -> Result<&'a mut [u8], PlaneError> {
        self.check_len(data.len())?;
        let len = data.len().min(self.size);
        Ok(&mut data[..len])
    }

    fn check_len(&self, actual: usize) -> Result<(), PlaneError> {
        if actual < self.min_len {
            return Err(PlaneError::BufferTooSmall {
                required: self.min_len,
                actual,
            });
        }

        Ok(())
    }
}

impl PlaneSource<'_> {
    /// The referenced caller memory.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            PlaneSource::Shared(data) => data,
            PlaneSource::Exclusive(data) => data,
        }
    }
}

impl<'data> Plane<'data> {
    /// Allocate a zeroed, owning plane.
    pub fn new(spec: PlaneSpec) -> Result<Self, PlaneError> {
        let layout = spec.byte_layout()?;
        let buffer = allocate(layout.size)?;

        Ok(Plane {
            storage: Storage::Owned(buffer),
            spec,
            layout,
        })
    }

    /// Reference read-only memory.
    ///
    /// The memory must hold at least the rows described by `spec`, the padding of the last row
    /// may be missing.
    pub fn with_data(spec: PlaneSpec, data: &'data [u8]) -> Result<Self, PlaneError> {
        let layout = spec.byte_layout()?;
        let data = layout.view(data)?;

        Ok(Plane {
            storage: Storage::Shared(data),
            spec,
            layout,
        })
    }

    /// Reference writable memory.
    pub fn with_data_mut(spec: PlaneSpec, data: &'data mut [u8]) -> Result<Self, PlaneError> {
        let layout = spec.byte_layout()?;
        let data = layout.view_mut(data)?;

        Ok(Plane {
            storage: Storage::Exclusive(data),
            spec,
            layout,
        })
    }

    /// Allocate an owning plane and copy the rows of `source` into it.
    ///
    /// The rows of `source` are `source_padding_elements` apart, the new plane has the padding of
    /// `spec`. Padding bytes are only copied if `copy_padding` is set and both paddings agree,
    /// otherwise they stay zero.
    pub fn copy_of(
        spec: PlaneSpec,
        source: &[u8],
        source_padding_elements: u32,
        copy_padding: bool,
    ) -> Result<Self, PlaneError> {
        let layout = spec.byte_layout()?;
        let source_layout = spec
            .with_padding(source_padding_elements)
            .byte_layout()?;
        let source = source_layout.view(source)?;

        let mut buffer = allocate(layout.size)?;
        copy_rows(
            buffer.as_bytes_mut(),
            &layout,
            source,
            &source_layout,
            copy_padding,
        );

        Ok(Plane {
            storage: Storage::Owned(buffer),
            spec,
            layout,
        })
    }

    /// Build a plane from caller memory, referencing or copying it.
    ///
    /// The padding of `spec` describes the layout of `source`. Caller memory is never owned, so
    /// the modes resolve as for a non-owning source plane.
    pub fn from_memory(
        spec: PlaneSpec,
        source: PlaneSource<'data>,
        mode: CopyMode,
    ) -> Result<Self, PlaneError> {
        match (mode.action(), source) {
            (CopyAction::Alias, PlaneSource::Shared(data)) => Self::with_data(spec, data),
            (CopyAction::Alias, PlaneSource::Exclusive(data)) => Self::with_data_mut(spec, data),
            (CopyAction::Copy(deep), source) => {
                let target = if deep.keeps_layout() {
                    spec
                } else {
                    spec.with_padding(0)
                };

                Self::copy_of(
                    target,
                    source.as_bytes(),
                    spec.padding_elements,
                    deep.copies_padding(),
                )
            }
        }
    }

    /// Build a plane from another plane, referencing it read-only or copying it.
    pub fn from_plane(source: &'data Plane<'_>, mode: AdvancedCopyMode) -> Result<Self, PlaneError> {
        match mode.action(source.is_owner()) {
            CopyAction::Alias => Ok(source.alias()),
            CopyAction::Copy(deep) => source.deep_copy(deep),
        }
    }

    /// Build a plane from another plane, referencing it writable or copying it.
    ///
    /// A reference to a read-only source stays read-only.
    pub fn from_plane_mut(
        source: &'data mut Plane<'_>,
        mode: AdvancedCopyMode,
    ) -> Result<Self, PlaneError> {
        match mode.action(source.is_owner()) {
            CopyAction::Alias => Ok(source.alias_mut()),
            CopyAction::Copy(deep) => source.deep_copy(deep),
        }
    }

    /// A read-only reference to the memory of this plane, keeping its layout.
    pub fn alias(&self) -> Plane<'_> {
        let storage = match &self.storage {
            Storage::None => Storage::None,
            Storage::Owned(buffer) => Storage::Shared(buffer.as_bytes()),
            Storage::Shared(data) => Storage::Shared(data),
            Storage::Exclusive(data) => Storage::Shared(data),
        };

        Plane {
            storage,
            spec: self.spec,
            layout: self.layout,
        }
    }

    /// A reference to the memory of this plane, writable unless this plane is read-only.
    pub fn alias_mut(&mut self) -> Plane<'_> {
        let storage = match &mut self.storage {
            Storage::None => Storage::None,
            Storage::Owned(buffer) => Storage::Exclusive(buffer.as_bytes_mut()),
            Storage::Shared(data) => Storage::Shared(data),
            Storage::Exclusive(data) => Storage::Exclusive(data),
        };

        Plane {
            storage,
            spec: self.spec,
            layout: self.layout,
        }
    }

    /// An owning copy of this plane, independent of any borrow.
    pub fn deep_copy<'any>(&self, deep: DeepCopy) -> Result<Plane<'any>, PlaneError> {
        let mut plane = Plane::default();
        plane.copy_from(self, deep, true)?;
        Ok(plane)
    }

    /// Re-populate this plane from another plane.
    ///
    /// When the mode resolves to a reference, this plane becomes a read-only alias of `source`.
    /// Otherwise see [`Plane::copy_from`]. An invalid source releases this plane.
    pub fn copy(
        &mut self,
        source: &'data Plane<'_>,
        mode: AdvancedCopyMode,
        reallocate: bool,
    ) -> Result<(), PlaneError> {
        if !source.is_valid() {
            self.release();
            return Ok(());
        }

        match mode.action(source.is_owner()) {
            CopyAction::Alias => {
                *self = source.alias();
                Ok(())
            }
            CopyAction::Copy(deep) => self.copy_from(source, deep, reallocate),
        }
    }

    /// Copy the content of `source` into memory owned by this plane.
    ///
    /// The existing allocation is reused when this plane owns exactly as many bytes as the copy
    /// needs. Otherwise the plane is released and reallocated, unless `reallocate` is unset in
    /// which case this fails with [`PlaneError::ReallocationRequired`] and nothing changes. If
    /// the new allocation fails the plane stays released.
    pub fn copy_from(
        &mut self,
        source: &Plane<'_>,
        deep: DeepCopy,
        reallocate: bool,
    ) -> Result<(), PlaneError> {
        if !source.is_valid() {
            self.release();
            return Ok(());
        }

        let padding_elements = if deep.keeps_layout() {
            source.spec.padding_elements
        } else {
            0
        };

        let spec = source.spec.with_padding(padding_elements);
        let layout = spec.byte_layout()?;

        let mut buffer = match mem::take(&mut self.storage) {
            Storage::Owned(buffer) if buffer.len() == layout.size => buffer,
            storage if !reallocate => {
                self.storage = storage;
                return Err(PlaneError::ReallocationRequired);
            }
            storage => {
                if let Storage::Owned(buffer) = &storage {
                    trace!(bytes = buffer.len(), "releasing plane memory");
                }

                drop(storage);
                *self = Plane::default();
                allocate(layout.size)?
            }
        };

        copy_rows(
            buffer.as_bytes_mut(),
            &layout,
            source.as_bytes(),
            &source.layout,
            deep.copies_padding(),
        );

        trace!(bytes = layout.size, ?deep, "copied plane");

        *self = Plane {
            storage: Storage::Owned(buffer),
            spec,
            layout,
        };

        Ok(())
    }

    /// Free owned memory and return to the invalid state.
    pub fn release(&mut self) {
        if self.is_owner() {
            trace!(bytes = self.layout.size, "releasing plane memory");
        }

        *self = Plane::default();
    }

    /// A read-only reference to a rectangle of this plane.
    ///
    /// Coordinates are in pixels of this plane. The rows of the view keep the stride of this
    /// plane, the remainder of each row is its padding.
    pub fn sub_plane(
        &self,
        left: u32,
        top: u32,
        width: u32,
        height: u32,
    ) -> Result<Plane<'_>, PlaneError> {
        let (spec, offset) = self.sub_region(left, top, width, height)?;
        Plane::with_data(spec, &self.as_bytes()[offset..])
    }

    /// A reference to a rectangle of this plane, writable unless this plane is read-only.
    pub fn sub_plane_mut(
        &mut self,
        left: u32,
        top: u32,
        width: u32,
        height: u32,
    ) -> Result<Plane<'_>, PlaneError> {
        let (spec, offset) = self.sub_region(left, top, width, height)?;

        match &mut self.storage {
            Storage::None => Err(PlaneError::OutOfBounds),
            Storage::Owned(buffer) => Plane::with_data_mut(spec, &mut buffer.as_bytes_mut()[offset..]),
            Storage::Shared(data) => Plane::with_data(spec, &data[offset..]),
            Storage::Exclusive(data) => Plane::with_data_mut(spec, &mut data[offset..]),
        }
    }

    fn sub_region(
        &self,
        left: u32,
        top: u32,
        width: u32,
        height: u32,
    ) -> Result<(PlaneSpec, usize), PlaneError> {
        if !self.is_valid() || width == 0 || height == 0 {
            return Err(PlaneError::OutOfBounds);
        }

        if u64::from(left) + u64::from(width) > u64::from(self.spec.width)
            || u64::from(top) + u64::from(height) > u64::from(self.spec.height)
        {
            return Err(PlaneError::OutOfBounds);
        }

        let stride_elements = self.stride_elements();
        let sub_elements = width as usize * self.spec.channels as usize;
        let padding_elements = u32::try_from(stride_elements - sub_elements)
            .map_err(|_| PlaneError::InvalidLayout)?;

        let spec = PlaneSpec {
            width,
            height,
            padding_elements,
            ..self.spec
        };

        let offset = top as usize * self.layout.stride_bytes + left as usize * self.bytes_per_pixel();
        Ok((spec, offset))
    }

    /// Copy a rectangle of `source` into this plane.
    ///
    /// Both planes must agree in channels and element size. Coordinates and sizes are in pixels
    /// of the respective plane.
    #[allow(clippy::too_many_arguments)]
    pub fn paste(
        &mut self,
        left: u32,
        top: u32,
        source: &Plane<'_>,
        source_left: u32,
        source_top: u32,
        width: u32,
        height: u32,
    ) -> Result<(), PlaneError> {
        if self.spec.channels != source.spec.channels
            || self.spec.element_size != source.spec.element_size
        {
            return Err(PlaneError::InvalidLayout);
        }

        let (target_spec, target_offset) = self.sub_region(left, top, width, height)?;
        let (source_spec, source_offset) = source.sub_region(source_left, source_top, width, height)?;

        let target_layout = target_spec.byte_layout()?;
        let source_layout = source_spec.byte_layout()?;

        let target = &mut self.as_bytes_mut()?[target_offset..];
        let source = &source.as_bytes()[source_offset..];

        copy_rows(target, &target_layout, source, &source_layout, false);
        Ok(())
    }

    /// Set every byte to `value`, optionally leaving the padding untouched.
    pub fn fill(&mut self, value: u8, skip_padding: bool) -> Result<(), PlaneError> {
        let layout = self.layout;
        let bytes = self.as_bytes_mut()?;

        if !skip_padding || layout.width_bytes == layout.stride_bytes {
            bytes.fill(value);
        } else {
            for row in 0..layout.rows {
                bytes[row * layout.stride_bytes..][..layout.width_bytes].fill(value);
            }
        }

        Ok(())
    }

    /// Set every pixel to `value`, one entry per channel, leaving the padding untouched.
    pub fn fill_pixels<T: bytemuck::Pod>(&mut self, value: &[T]) -> Result<(), PlaneError> {
        self.check_pixel_value::<T>(value.len())?;
        let pixel: &[u8] = bytemuck::cast_slice(value);

        for y in 0..self.spec.height {
            self.row_bytes_mut(y)?
                .chunks_exact_mut(pixel.len())
                .for_each(|target| target.copy_from_slice(pixel));
        }

        Ok(())
    }

    /// Whether any pixel equals `value`, one entry per channel.
    pub fn contains_pixel<T>(&self, value: &[T]) -> Result<bool, PlaneError>
    where
        T: bytemuck::Pod + PartialEq,
    {
        self.check_pixel_value::<T>(value.len())?;
        let bytes = mem::size_of::<T>();

        // Rows of caller memory need not be aligned for `T`.
        let matches = |pixel: &[u8]| {
            pixel.chunks_exact(bytes).zip(value).all(|(element, expected)| {
                let mut decoded = T::zeroed();
                bytemuck::bytes_of_mut(&mut decoded).copy_from_slice(element);
                decoded == *expected
            })
        };

        for y in 0..self.spec.height {
            if self.row_bytes(y)?.chunks_exact(self.bytes_per_pixel()).any(matches) {
                return Ok(true);
            }
        }

        Ok(false)
    }

    fn check_pixel_value<T>(&self, channels: usize) -> Result<(), PlaneError> {
        if !self.is_valid() {
            return Err(PlaneError::InvalidLayout);
        }

        if channels != self.spec.channels as usize
            || mem::size_of::<T>() != self.spec.element_size as usize
        {
            return Err(PlaneError::PixelValue {
                channels: self.spec.channels,
                element_size: self.spec.element_size,
            });
        }

        Ok(())
    }

    /// The geometry of this plane, including its padding.
    pub fn spec(&self) -> PlaneSpec {
        self.spec
    }

    /// The byte quantities derived from the geometry.
    pub fn byte_layout(&self) -> ByteLayout {
        self.layout
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.spec.width
    }

    /// Height in rows.
    pub fn height(&self) -> u32 {
        self.spec.height
    }

    /// Elements per pixel.
    pub fn channels(&self) -> u32 {
        self.spec.channels
    }

    /// Bytes per element.
    pub fn element_size(&self) -> u32 {
        self.spec.element_size
    }

    /// Unused elements at the end of every row.
    pub fn padding_elements(&self) -> u32 {
        self.spec.padding_elements
    }

    /// Unused bytes at the end of every row.
    pub fn padding_bytes(&self) -> usize {
        self.layout.stride_bytes - self.layout.width_bytes
    }

    /// The distance in bytes between the starts of two consecutive rows.
    pub fn stride_bytes(&self) -> usize {
        self.layout.stride_bytes
    }

    /// The row stride in elements, `0` for an invalid plane.
    pub fn stride_elements(&self) -> usize {
        match self.spec.element_size {
            0 => 0,
            size => self.layout.stride_bytes / size as usize,
        }
    }

    /// Bytes of a row without padding.
    pub fn width_bytes(&self) -> usize {
        self.layout.width_bytes
    }

    /// Elements of a row without padding.
    pub fn width_elements(&self) -> usize {
        self.spec.width as usize * self.spec.channels as usize
    }

    /// The bytes of one pixel, `0` if a row does not divide evenly into pixels.
    pub fn bytes_per_pixel(&self) -> usize {
        let width = self.spec.width as usize;

        if width == 0 || self.layout.width_bytes % width != 0 {
            return 0;
        }

        self.layout.width_bytes / width
    }

    /// The declared extent in bytes, `stride_bytes * height`.
    pub fn size(&self) -> usize {
        self.layout.size
    }

    /// Whether the plane holds memory, owned or borrowed.
    pub fn is_valid(&self) -> bool {
        !matches!(self.storage, Storage::None)
    }

    /// Whether the plane owns its allocation and frees it on drop.
    pub fn is_owner(&self) -> bool {
        matches!(self.storage, Storage::Owned(_))
    }

    /// Whether the plane references memory it may not write.
    pub fn is_read_only(&self) -> bool {
        matches!(self.storage, Storage::Shared(_))
    }

    /// Whether rows follow each other without padding.
    pub fn is_continuous(&self) -> bool {
        self.spec.padding_elements == 0
    }

    /// The memory of this plane.
    ///
    /// For a plane referencing caller memory, the padding of the last row may be missing.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.storage {
            Storage::None => &[],
            Storage::Owned(buffer) => buffer.as_bytes(),
            Storage::Shared(data) => data,
            Storage::Exclusive(data) => data,
        }
    }

    /// The writable memory of this plane, an error for read-only planes.
    pub fn as_bytes_mut(&mut self) -> Result<&mut [u8], PlaneError> {
        match &mut self.storage {
            Storage::None => Ok(&mut [][..]),
            Storage::Owned(buffer) => Ok(buffer.as_bytes_mut()),
            Storage::Shared(_) => Err(PlaneError::ReadOnly),
            Storage::Exclusive(data) => Ok(&mut **data),
        }
    }

    /// The bytes of a row, without padding.
    pub fn row_bytes(&self, y: u32) -> Result<&[u8], PlaneError> {
        let start = self.row_start(y)?;
        Ok(&self.as_bytes()[start..][..self.layout.width_bytes])
    }

    /// The writable bytes of a row, without padding.
    pub fn row_bytes_mut(&mut self, y: u32) -> Result<&mut [u8], PlaneError> {
        let start = self.row_start(y)?;
        let width_bytes = self.layout.width_bytes;
        Ok(&mut self.as_bytes_mut()?[start..][..width_bytes])
    }

    /// The elements of a row, without padding.
    pub fn row<T: bytemuck::Pod>(&self, y: u32) -> Result<&[T], PlaneError> {
        bytemuck::try_cast_slice(self.row_bytes(y)?).map_err(PlaneError::Cast)
    }

    pub fn row_mut<T: bytemuck::Pod>(&mut self, y: u32) -> Result<&mut [T], PlaneError> {
        bytemuck::try_cast_slice_mut(self.row_bytes_mut(y)?).map_err(PlaneError::Cast)
    }

    /// The elements of one pixel.
    pub fn pixel<T: bytemuck::Pod>(&self, x: u32, y: u32) -> Result<&[T], PlaneError> {
        let range = self.pixel_range(x)?;
        let row = self.row_bytes(y)?;
        bytemuck::try_cast_slice(&row[range]).map_err(PlaneError::Cast)
    }

    pub fn pixel_mut<T: bytemuck::Pod>(&mut self, x: u32, y: u32) -> Result<&mut [T], PlaneError> {
        let range = self.pixel_range(x)?;
        let row = self.row_bytes_mut(y)?;
        bytemuck::try_cast_slice_mut(&mut row[range]).map_err(PlaneError::Cast)
    }

    /// The address range `[start, start + size)` of this plane, for overlap checks.
    pub fn memory_range(&self) -> Option<Range<usize>> {
        if !self.is_valid() {
            return None;
        }

        let start = self.as_bytes().as_ptr() as usize;
        Some(start..start + self.layout.size)
    }

    fn row_start(&self, y: u32) -> Result<usize, PlaneError> {
        if !self.is_valid() || y >= self.spec.height {
            return Err(PlaneError::OutOfBounds);
        }

        Ok(y as usize * self.layout.stride_bytes)
    }

    fn pixel_range(&self, x: u32) -> Result<Range<usize>, PlaneError> {
        if x >= self.spec.width {
            return Err(PlaneError::OutOfBounds);
        }

        let bytes = self.bytes_per_pixel();
        let start = x as usize * bytes;
        Ok(start..start + bytes)
    }
}

impl fmt::Debug for Plane<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let storage = match self.storage {
            Storage::None => "none",
            Storage::Owned(_) => "owned",
            Storage::Shared(_) => "shared",
            Storage::Exclusive(_) => "exclusive",
        };

        f.debug_struct("Plane")
            .field("storage", &storage)
            .field("spec", &self.spec)
            .field("stride_bytes", &self.layout.stride_bytes)
            .finish()
    }
}

fn allocate(bytes: usize) -> Result<Buffer, PlaneError> {
    let buffer = Buffer::try_new(bytes).map_err(|_| PlaneError::AllocationFailed { bytes })?;
    debug!(bytes, "allocated plane memory");
    Ok(buffer)
}

/// Copy the rows described by `source_layout` into `target`.
///
/// Both layouts must agree in row width and row count. Equal strides copy as one block when the
/// padding is absent or requested, anything else copies row by row.
fn copy_rows(
    target: &mut [u8],
    target_layout: &ByteLayout,
    source: &[u8],
    source_layout: &ByteLayout,
    copy_padding: bool,
) {
    debug_assert_eq!(target_layout.width_bytes, source_layout.width_bytes);
    debug_assert_eq!(target_layout.rows, source_layout.rows);

    let same_stride = target_layout.stride_bytes == source_layout.stride_bytes;
    let no_padding = target_layout.stride_bytes == target_layout.width_bytes;

    if same_stride && (no_padding || copy_padding) {
        let len = source.len().min(target.len()).min(target_layout.size);
        target[..len].copy_from_slice(&source[..len]);
        return;
    }

    let width = target_layout.width_bytes;
    for row in 0..target_layout.rows {
        let from = &source[row * source_layout.stride_bytes..][..width];
        target[row * target_layout.stride_bytes..][..width].copy_from_slice(from);
    }
}
