//! A multi-plane image of one pixel format.
use image_plane::{
    AdvancedCopyMode, CopyAction, CopyMode, DataType, DeepCopy, Plane, PlaneError, PlaneSource,
    PlaneSpec,
};
use tracing::{debug, trace};

use crate::error::FrameError;
use crate::format::PixelFormat;
use crate::frame_type::{FrameType, PixelOrigin};
use crate::layout::plane_layout;
use crate::timestamp::Timestamp;

/// An image made of planes laid out as its [`FrameType`] describes.
///
/// Every plane either owns its memory or borrows it for `'data`. A frame is valid if its type is
/// valid and it holds one valid plane for every plane of its pixel format. An invalid frame holds
/// exactly one invalid plane.
#[derive(Debug)]
pub struct Frame<'data> {
    frame_type: FrameType,
    planes: Vec<Plane<'data>>,
    timestamp: Timestamp,
    relative_timestamp: Timestamp,
}

/// How one plane of a new frame gets its memory.
#[derive(Debug)]
pub enum PlaneInitializer<'data> {
    /// Allocate new memory with some padding elements per row.
    Allocate { padding_elements: u32 },
    /// Reference or copy caller memory whose rows have some padding elements.
    Memory {
        source: PlaneSource<'data>,
        padding_elements: u32,
        copy_mode: CopyMode,
    },
}

impl<'data> PlaneInitializer<'data> {
    /// New zeroed memory.
    pub fn allocate(padding_elements: u32) -> Self {
        PlaneInitializer::Allocate { padding_elements }
    }

    /// Read-only caller memory, referenced or copied.
    pub fn shared(data: &'data [u8], padding_elements: u32, copy_mode: CopyMode) -> Self {
        PlaneInitializer::Memory {
            source: PlaneSource::Shared(data),
            padding_elements,
            copy_mode,
        }
    }

    /// Writable caller memory, referenced or copied.
    pub fn exclusive(data: &'data mut [u8], padding_elements: u32, copy_mode: CopyMode) -> Self {
        PlaneInitializer::Memory {
            source: PlaneSource::Exclusive(data),
            padding_elements,
            copy_mode,
        }
    }

    fn build(self, spec: PlaneSpec) -> Result<Plane<'data>, PlaneError> {
        match self {
            PlaneInitializer::Allocate { padding_elements } => {
                Plane::new(spec.with_padding(padding_elements))
            }
            PlaneInitializer::Memory {
                source,
                padding_elements,
                copy_mode,
            } => Plane::from_memory(spec.with_padding(padding_elements), source, copy_mode),
        }
    }
}

impl Default for Frame<'_> {
    fn default() -> Self {
        Frame {
            frame_type: FrameType::INVALID,
            planes: vec![Plane::default()],
            timestamp: Timestamp::INVALID,
            relative_timestamp: Timestamp::INVALID,
        }
    }
}

impl<'data> Frame<'data> {
    /// Allocate a frame without padding.
    pub fn new(frame_type: FrameType) -> Result<Self, FrameError> {
        Self::with_padding(frame_type, &[])
    }

    /// Allocate a frame with padding elements per plane, `0` for planes not listed.
    pub fn with_padding(frame_type: FrameType, padding_elements: &[u32]) -> Result<Self, FrameError> {
        let initializers = (0..).map(|plane| {
            PlaneInitializer::allocate(padding_elements.get(plane).copied().unwrap_or(0))
        });

        let planes = build_planes(&frame_type, initializers)?;
        Ok(Frame::from_parts(frame_type, planes, Timestamp::INVALID))
    }

    /// Build a frame with one initializer per plane.
    ///
    /// Either all planes are built or the whole construction fails.
    pub fn with_planes(
        frame_type: FrameType,
        initializers: Vec<PlaneInitializer<'data>>,
        timestamp: Timestamp,
    ) -> Result<Self, FrameError> {
        let expected = frame_type.planes();
        if initializers.len() != expected as usize {
            return Err(FrameError::PlaneCount {
                expected,
                actual: initializers.len(),
            });
        }

        let planes = build_planes(&frame_type, initializers)?;
        Ok(Frame::from_parts(frame_type, planes, timestamp))
    }

    /// Build a frame from another frame, referencing it read-only or copying it.
    ///
    /// An invalid source results in an invalid frame.
    pub fn from_frame(source: &'data Frame<'_>, mode: AdvancedCopyMode) -> Result<Self, FrameError> {
        if !source.is_valid() {
            return Ok(Frame::default());
        }

        let planes = source
            .planes
            .iter()
            .map(|plane| Plane::from_plane(plane, mode))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(source.derived(planes))
    }

    /// Build a frame from another frame, referencing it writable or copying it.
    ///
    /// References to read-only planes stay read-only.
    pub fn from_frame_mut(
        source: &'data mut Frame<'_>,
        mode: AdvancedCopyMode,
    ) -> Result<Self, FrameError> {
        if !source.is_valid() {
            return Ok(Frame::default());
        }

        let (frame_type, timestamp, relative_timestamp) =
            (source.frame_type, source.timestamp, source.relative_timestamp);

        let planes = source
            .planes
            .iter_mut()
            .map(|plane| Plane::from_plane_mut(plane, mode))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Frame {
            frame_type,
            planes,
            timestamp,
            relative_timestamp,
        })
    }

    /// An owning, continuous copy of this frame.
    pub fn to_owned_frame<'any>(&self) -> Result<Frame<'any>, FrameError> {
        let mut frame = Frame::default();
        frame.copy_from(self, true)?;
        Ok(frame)
    }

    fn from_parts(frame_type: FrameType, planes: Vec<Plane<'data>>, timestamp: Timestamp) -> Self {
        Frame {
            frame_type,
            planes,
            timestamp,
            relative_timestamp: Timestamp::INVALID,
        }
    }

    /// A frame with the type and timestamps of this one.
    fn derived<'a>(&self, planes: Vec<Plane<'a>>) -> Frame<'a> {
        Frame {
            frame_type: self.frame_type,
            planes,
            timestamp: self.timestamp,
            relative_timestamp: self.relative_timestamp,
        }
    }

    /// Reconfigure this frame, reallocating only when needed.
    ///
    /// Reallocates if the frame type or plane count changes, if ownership or writability is
    /// forced but missing, or if a listed padding differs from the current one. The new planes
    /// are owned, with the listed padding or none. The timestamp is always updated.
    ///
    /// Returns whether the frame was reallocated. An invalid frame type releases the frame.
    pub fn set(
        &mut self,
        frame_type: FrameType,
        force_owner: bool,
        force_writable: bool,
        padding_elements: &[u32],
        timestamp: Timestamp,
    ) -> Result<bool, FrameError> {
        if !frame_type.is_valid() {
            self.release();
            self.timestamp = timestamp;
            return Ok(false);
        }

        let reallocate = self.frame_type != frame_type
            || (force_owner && !self.is_owner())
            || (force_writable && self.is_read_only())
            || self.planes.len() != frame_type.planes() as usize
            || padding_elements
                .iter()
                .zip(&self.planes)
                .any(|(&padding, plane)| padding != plane.padding_elements());

        if !reallocate {
            self.timestamp = timestamp;
            return Ok(false);
        }

        debug!(from = ?self.frame_type, to = ?frame_type, "reallocating frame");
        self.release();

        let initializers = (0..).map(|plane| {
            PlaneInitializer::allocate(padding_elements.get(plane).copied().unwrap_or(0))
        });

        let planes = build_planes(&frame_type, initializers)?;
        *self = Frame::from_parts(frame_type, planes, timestamp);
        Ok(true)
    }

    /// Copy the content of `source` into owned, continuous planes of this frame.
    ///
    /// Adopts the type of `source` and reuses plane memory of matching size. On failure this
    /// frame is released.
    pub fn copy_from(&mut self, source: &Frame<'_>, copy_timestamp: bool) -> Result<(), FrameError> {
        if !source.is_valid() {
            return Err(FrameError::InvalidFrame);
        }

        if copy_timestamp {
            self.timestamp = source.timestamp;
            self.relative_timestamp = source.relative_timestamp;
        }

        self.frame_type = source.frame_type;
        self.planes.truncate(source.planes.len());

        for (index, plane) in source.planes.iter().enumerate() {
            let result = if index < self.planes.len() {
                self.planes[index].copy_from(plane, DeepCopy::RemovePadding, true)
            } else {
                plane
                    .deep_copy(DeepCopy::RemovePadding)
                    .map(|copy| self.planes.push(copy))
            };

            if let Err(err) = result {
                self.release();
                return Err(err.into());
            }
        }

        Ok(())
    }

    /// Paste `source` with its top left corner at (`left`, `top`) of this frame.
    ///
    /// Only the intersection of both images is written. An empty intersection succeeds without
    /// writing, even into a read-only frame. On error nothing changes, including the timestamps.
    /// Both frames need compatible formats and equal origins, and the offset must be a multiple
    /// of the format's multiples. Bit-packed formats only support pasting a frame of the same
    /// size at the origin.
    pub fn copy_at(
        &mut self,
        left: i32,
        top: i32,
        source: &Frame<'_>,
        copy_timestamp: bool,
    ) -> Result<(), FrameError> {
        if !self.is_valid() || !source.is_valid() {
            return Err(FrameError::InvalidFrame);
        }

        let format = self.pixel_format();
        if !format.is_compatible(source.pixel_format()) || self.pixel_origin() != source.pixel_origin() {
            return Err(FrameError::Incompatible);
        }

        if left.unsigned_abs() % format.width_multiple() != 0
            || top.unsigned_abs() % format.height_multiple() != 0
        {
            return Err(FrameError::Misaligned {
                left: left.into(),
                top: top.into(),
            });
        }

        let whole = left == 0
            && top == 0
            && self.frame_type.is_frame_type_compatible(&source.frame_type, false);

        if !whole && format.is_packed() {
            return Err(FrameError::PackedFormat);
        }

        let (width, height) = (i64::from(self.width()), i64::from(self.height()));
        let (source_width, source_height) = (i64::from(source.width()), i64::from(source.height()));
        let (left, top) = (i64::from(left), i64::from(top));

        let x_start = left.max(0);
        let y_start = top.max(0);
        let x_end = (left + source_width).min(width);
        let y_end = (top + source_height).min(height);

        let empty = x_start >= x_end || y_start >= y_end;
        if !empty && self.is_read_only() {
            return Err(PlaneError::ReadOnly.into());
        }

        if copy_timestamp {
            self.timestamp = source.timestamp;
            self.relative_timestamp = source.relative_timestamp;
        }

        if empty {
            return Ok(());
        }

        if whole {
            for (target, plane) in self.planes.iter_mut().zip(&source.planes) {
                target.paste(0, 0, plane, 0, 0, plane.width(), plane.height())?;
            }

            return Ok(());
        }

        let x_size = x_end - x_start;
        let y_size = y_end - y_start;
        let x_source = x_start - left;
        let y_source = y_start - top;

        // Sub-sampled planes scale the rectangle by their ratio to the image size.
        let scale = |value: i64, plane: u32, image: i64| (value * i64::from(plane) / image) as u32;

        for (target, plane) in self.planes.iter_mut().zip(&source.planes) {
            target.paste(
                scale(x_start, target.width(), width),
                scale(y_start, target.height(), height),
                plane,
                scale(x_source, plane.width(), source_width),
                scale(y_source, plane.height(), source_height),
                scale(x_size, target.width(), width),
                scale(y_size, target.height(), height),
            )?;
        }

        Ok(())
    }

    /// A read-only view of a rectangle of this frame, or a copy of it.
    ///
    /// The rectangle must lie within the frame and its position and size must be multiples of
    /// the format's multiples. Views keep the row stride of this frame, so
    /// [`CopyMode::CopyKeepLayoutCopyPaddingData`] is rejected.
    pub fn sub_frame(
        &self,
        left: u32,
        top: u32,
        width: u32,
        height: u32,
        copy_mode: CopyMode,
    ) -> Result<Frame<'_>, FrameError> {
        let regions = self.sub_regions(left, top, width, height, copy_mode)?;

        let planes = self
            .planes
            .iter()
            .zip(regions)
            .map(|(plane, region)| {
                let view = plane.sub_plane(region.left, region.top, region.width, region.height)?;
                detach(view, copy_mode)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut frame = self.derived(planes);
        frame.frame_type = self.frame_type.with_dimensions(width, height);
        Ok(frame)
    }

    /// A view of a rectangle of this frame, writable unless this frame is read-only.
    pub fn sub_frame_mut(
        &mut self,
        left: u32,
        top: u32,
        width: u32,
        height: u32,
        copy_mode: CopyMode,
    ) -> Result<Frame<'_>, FrameError> {
        let regions = self.sub_regions(left, top, width, height, copy_mode)?;

        let frame_type = self.frame_type.with_dimensions(width, height);
        let (timestamp, relative_timestamp) = (self.timestamp, self.relative_timestamp);

        let planes = self
            .planes
            .iter_mut()
            .zip(regions)
            .map(|(plane, region)| {
                let view = plane.sub_plane_mut(region.left, region.top, region.width, region.height)?;
                detach(view, copy_mode)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Frame {
            frame_type,
            planes,
            timestamp,
            relative_timestamp,
        })
    }

    fn sub_regions(
        &self,
        left: u32,
        top: u32,
        width: u32,
        height: u32,
        copy_mode: CopyMode,
    ) -> Result<Vec<Region>, FrameError> {
        if !self.is_valid() {
            return Err(FrameError::InvalidFrame);
        }

        if copy_mode == CopyMode::CopyKeepLayoutCopyPaddingData {
            return Err(FrameError::UnsupportedCopyMode);
        }

        if width == 0
            || height == 0
            || u64::from(left) + u64::from(width) > u64::from(self.width())
            || u64::from(top) + u64::from(height) > u64::from(self.height())
        {
            return Err(FrameError::OutOfBounds);
        }

        let format = self.pixel_format();
        let (wm, hm) = (format.width_multiple(), format.height_multiple());

        if left % wm != 0 || top % hm != 0 || width % wm != 0 || height % hm != 0 {
            return Err(FrameError::Misaligned {
                left: left.into(),
                top: top.into(),
            });
        }

        if format.is_packed() && left != 0 {
            return Err(FrameError::PackedFormat);
        }

        (0..self.number_planes())
            .map(|plane| {
                // The offset is the size of the plane region before the rectangle.
                let offset = plane_layout(format, left.max(wm), top.max(hm), plane)
                    .ok_or(FrameError::InvalidLayout { plane })?;
                let size = plane_layout(format, width, height, plane)
                    .ok_or(FrameError::InvalidLayout { plane })?;

                Ok(Region {
                    left: if left == 0 { 0 } else { offset.width },
                    top: if top == 0 { 0 } else { offset.height },
                    width: size.width,
                    height: size.height,
                })
            })
            .collect()
    }

    /// Replace the planes with continuous copies if any plane has padding.
    pub fn make_continuous(&mut self) -> Result<(), FrameError> {
        if self.is_valid() && !self.is_continuous() {
            *self = self.to_owned_frame()?;
        }

        Ok(())
    }

    /// Replace the planes with owned, continuous copies if any plane is borrowed.
    pub fn make_owner(&mut self) -> Result<(), FrameError> {
        if self.is_valid() && !self.is_owner() {
            *self = self.to_owned_frame()?;
        }

        Ok(())
    }

    /// Whether any plane of this frame overlaps any plane of `other` in memory.
    ///
    /// A frame always intersects itself.
    pub fn have_intersecting_memory(&self, other: &Frame<'_>) -> bool {
        if core::ptr::eq(self as *const _ as *const u8, other as *const _ as *const u8) {
            return true;
        }

        self.planes
            .iter()
            .filter_map(Plane::memory_range)
            .any(|ours| {
                other
                    .planes
                    .iter()
                    .filter_map(Plane::memory_range)
                    .any(|theirs| ours.start < theirs.end && theirs.start < ours.end)
            })
    }

    /// Set every byte of a plane to `value`, optionally leaving the padding untouched.
    pub fn fill(&mut self, value: u8, plane: u32, skip_padding: bool) -> Result<(), FrameError> {
        self.planes
            .get_mut(plane as usize)
            .ok_or(FrameError::PlaneIndex(plane))?
            .fill(value, skip_padding)?;
        Ok(())
    }

    /// Set every pixel of a plane to `value`, one entry per plane channel, leaving the padding
    /// untouched.
    pub fn fill_pixels<T: bytemuck::Pod>(
        &mut self,
        value: &[T],
        plane: u32,
    ) -> Result<(), FrameError> {
        if self.pixel_format().is_packed() {
            return Err(FrameError::PackedFormat);
        }

        self.planes
            .get_mut(plane as usize)
            .ok_or(FrameError::PlaneIndex(plane))?
            .fill_pixels(value)?;
        Ok(())
    }

    /// Whether any pixel of a plane equals `value`.
    pub fn contains_pixel<T>(&self, value: &[T], plane: u32) -> Result<bool, FrameError>
    where
        T: bytemuck::Pod + PartialEq,
    {
        if self.pixel_format().is_packed() {
            return Err(FrameError::PackedFormat);
        }

        Ok(self.plane(plane)?.contains_pixel(value)?)
    }

    /// Point the leading planes at new caller memory with their current layout.
    ///
    /// Shared memory makes a plane read-only, exclusive memory makes it writable. Only planes
    /// that borrow their memory can be redirected. On error no plane changes.
    pub fn update_memory(&mut self, sources: Vec<PlaneSource<'data>>) -> Result<(), FrameError> {
        if sources.is_empty() || sources.len() > self.planes.len() {
            return Err(FrameError::PlaneCount {
                expected: self.number_planes(),
                actual: sources.len(),
            });
        }

        if !self.is_valid() {
            return Err(FrameError::InvalidFrame);
        }

        if let Some(owned) = self.planes[..sources.len()].iter().position(Plane::is_owner) {
            return Err(FrameError::OwnedPlane(owned as u32));
        }

        let planes = self
            .planes
            .iter()
            .zip(sources)
            .map(|(plane, source)| {
                Plane::from_memory(plane.spec(), source, CopyMode::UseKeepLayout)
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (index, plane) in planes.into_iter().enumerate() {
            self.planes[index] = plane;
        }

        Ok(())
    }

    /// Free owned memory and return to the invalid state.
    pub fn release(&mut self) {
        trace!(frame_type = ?self.frame_type, "releasing frame");
        *self = Frame::default();
    }

    /// Dimensions, pixel format and origin of this frame.
    pub fn frame_type(&self) -> &FrameType {
        &self.frame_type
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.frame_type.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.frame_type.height()
    }

    pub fn pixel_format(&self) -> PixelFormat {
        self.frame_type.pixel_format()
    }

    pub fn pixel_origin(&self) -> PixelOrigin {
        self.frame_type.pixel_origin()
    }

    /// Channels of the pixel format, `0` for an unknown format.
    pub fn channels(&self) -> u32 {
        self.frame_type.channels()
    }

    pub fn data_type(&self) -> DataType {
        self.frame_type.data_type()
    }

    /// Planes held by this frame, `1` for an invalid frame.
    pub fn number_planes(&self) -> u32 {
        self.planes.len() as u32
    }

    pub fn planes(&self) -> &[Plane<'data>] {
        &self.planes
    }

    /// One plane, an error if the index is out of range.
    pub fn plane(&self, plane: u32) -> Result<&Plane<'data>, FrameError> {
        self.planes
            .get(plane as usize)
            .ok_or(FrameError::PlaneIndex(plane))
    }

    /// Width of a plane in pixels, `0` if the plane does not exist.
    pub fn plane_width(&self, plane: u32) -> u32 {
        self.plane(plane).map_or(0, Plane::width)
    }

    pub fn plane_height(&self, plane: u32) -> u32 {
        self.plane(plane).map_or(0, Plane::height)
    }

    pub fn plane_channels(&self, plane: u32) -> u32 {
        self.plane(plane).map_or(0, Plane::channels)
    }

    pub fn plane_width_bytes(&self, plane: u32) -> usize {
        self.plane(plane).map_or(0, Plane::width_bytes)
    }

    /// Row stride of a plane in bytes, `0` if the plane does not exist.
    pub fn stride_bytes(&self, plane: u32) -> usize {
        self.plane(plane).map_or(0, Plane::stride_bytes)
    }

    /// Padding of a plane in elements per row.
    pub fn padding_elements(&self, plane: u32) -> u32 {
        self.plane(plane).map_or(0, Plane::padding_elements)
    }

    /// Bytes of a plane including padding.
    pub fn size(&self, plane: u32) -> usize {
        self.plane(plane).map_or(0, Plane::size)
    }

    pub fn is_plane_owner(&self, plane: u32) -> bool {
        self.plane(plane).is_ok_and(Plane::is_owner)
    }

    /// The capture time, invalid unless set.
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// A timestamp relative to an application-defined origin, e.g. a media file position.
    pub fn relative_timestamp(&self) -> Timestamp {
        self.relative_timestamp
    }

    pub fn set_timestamp(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    pub fn set_relative_timestamp(&mut self, timestamp: Timestamp) {
        self.relative_timestamp = timestamp;
    }

    /// Whether the frame type is valid and every plane holds memory.
    pub fn is_valid(&self) -> bool {
        self.frame_type.is_valid()
            && self.planes.len() == self.frame_type.planes() as usize
            && self.planes.iter().all(Plane::is_valid)
    }

    /// Whether every plane owns its memory.
    pub fn is_owner(&self) -> bool {
        self.planes.iter().all(Plane::is_owner)
    }

    /// Whether any plane is read-only.
    pub fn is_read_only(&self) -> bool {
        self.planes.iter().any(Plane::is_read_only)
    }

    /// Whether no plane has padding.
    pub fn is_continuous(&self) -> bool {
        self.planes.iter().all(Plane::is_continuous)
    }

    /// The elements of a row of a plane.
    pub fn row<T: bytemuck::Pod>(&self, y: u32, plane: u32) -> Result<&[T], FrameError> {
        Ok(self.plane(plane)?.row(y)?)
    }

    /// The writable elements of a row of a plane.
    pub fn row_mut<T: bytemuck::Pod>(&mut self, y: u32, plane: u32) -> Result<&mut [T], FrameError> {
        let plane = self
            .planes
            .get_mut(plane as usize)
            .ok_or(FrameError::PlaneIndex(plane))?;
        Ok(plane.row_mut(y)?)
    }

    /// The elements of one pixel of a plane.
    ///
    /// In bit-packed formats only the first pixel of a row can be addressed.
    pub fn pixel<T: bytemuck::Pod>(&self, x: u32, y: u32, plane: u32) -> Result<&[T], FrameError> {
        self.check_pixel_x(x)?;
        Ok(self.plane(plane)?.pixel(x, y)?)
    }

    pub fn pixel_mut<T: bytemuck::Pod>(
        &mut self,
        x: u32,
        y: u32,
        plane: u32,
    ) -> Result<&mut [T], FrameError> {
        self.check_pixel_x(x)?;
        let plane = self
            .planes
            .get_mut(plane as usize)
            .ok_or(FrameError::PlaneIndex(plane))?;
        Ok(plane.pixel_mut(x, y)?)
    }

    fn check_pixel_x(&self, x: u32) -> Result<(), FrameError> {
        if x > 0 && self.pixel_format().is_packed() {
            return Err(FrameError::PackedFormat);
        }

        Ok(())
    }
}

/// A rectangle in pixels of one plane.
#[derive(Clone, Copy, Debug)]
struct Region {
    left: u32,
    top: u32,
    width: u32,
    height: u32,
}

fn build_planes<'data>(
    frame_type: &FrameType,
    initializers: impl IntoIterator<Item = PlaneInitializer<'data>>,
) -> Result<Vec<Plane<'data>>, FrameError> {
    if !frame_type.is_valid() {
        return Err(FrameError::InvalidFrameType);
    }

    (0..frame_type.planes())
        .zip(initializers)
        .map(|(plane, initializer)| {
            let layout = frame_type
                .plane_layout(plane)
                .ok_or(FrameError::InvalidLayout { plane })?;

            let spec = PlaneSpec::with_data_type(
                layout.width,
                layout.height,
                layout.channels,
                frame_type.data_type(),
            );

            Ok(initializer.build(spec)?)
        })
        .collect()
}

/// Keep a view or turn it into an owned copy, as the copy mode says.
fn detach(view: Plane<'_>, copy_mode: CopyMode) -> Result<Plane<'_>, PlaneError> {
    match copy_mode.action() {
        CopyAction::Alias => Ok(view),
        CopyAction::Copy(deep) => view.deep_copy(deep),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_type(width: u32, height: u32, format: PixelFormat) -> FrameType {
        FrameType::new(width, height, format, PixelOrigin::UpperLeft)
    }

    #[test]
    fn default_is_invalid() {
        let frame = Frame::default();
        assert!(!frame.is_valid());
        assert_eq!(frame.number_planes(), 1);
        assert!(!frame.plane(0).unwrap().is_valid());
        assert!(!frame.timestamp().is_valid());
    }

    #[test]
    fn allocated_planes() {
        let frame = Frame::with_padding(frame_type(4, 4, PixelFormat::Y_U_V12), &[3]).unwrap();
        assert!(frame.is_valid() && frame.is_owner() && !frame.is_read_only());
        assert_eq!(frame.number_planes(), 3);
        assert_eq!(frame.plane(0).unwrap().padding_elements(), 3);
        assert_eq!(frame.plane(1).unwrap().padding_elements(), 0);
        assert_eq!(frame.plane(2).unwrap().width(), 2);
        assert!(!frame.is_continuous());
    }

    #[test]
    fn invalid_type_fails() {
        assert!(matches!(
            Frame::new(FrameType::INVALID),
            Err(FrameError::InvalidFrameType)
        ));
    }

    #[test]
    fn initializer_count() {
        let result = Frame::with_planes(
            frame_type(2, 2, PixelFormat::Y_UV12),
            vec![PlaneInitializer::allocate(0)],
            Timestamp::INVALID,
        );
        assert!(matches!(
            result,
            Err(FrameError::PlaneCount {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn atomic_construction() {
        let luma = [0u8; 4];
        let chroma = [0u8; 1];
        let result = Frame::with_planes(
            frame_type(2, 2, PixelFormat::Y_UV12),
            vec![
                PlaneInitializer::shared(&luma, 0, CopyMode::UseKeepLayout),
                PlaneInitializer::shared(&chroma, 0, CopyMode::UseKeepLayout),
            ],
            Timestamp::INVALID,
        );
        assert!(matches!(
            result,
            Err(FrameError::Plane(PlaneError::BufferTooSmall { .. }))
        ));
    }

    #[test]
    fn set_only_updates_timestamp() {
        let mut frame = Frame::default();
        let target = frame_type(4, 2, PixelFormat::RGB24);

        assert!(frame.set(target, true, true, &[], Timestamp::new(1.0)).unwrap());
        let memory = frame.plane(0).unwrap().memory_range();

        assert!(!frame.set(target, true, true, &[], Timestamp::new(2.0)).unwrap());
        assert_eq!(frame.plane(0).unwrap().memory_range(), memory);
        assert_eq!(frame.timestamp(), Timestamp::new(2.0));

        assert!(frame.set(target, false, false, &[1], Timestamp::new(3.0)).unwrap());
        assert_eq!(frame.plane(0).unwrap().padding_elements(), 1);
        assert_eq!(frame.timestamp(), Timestamp::new(3.0));
    }

    #[test]
    fn set_forces_ownership() {
        let memory = [0u8; 8];
        let target = frame_type(4, 2, PixelFormat::Y8);
        let mut frame = Frame::with_planes(
            target,
            vec![PlaneInitializer::shared(&memory, 0, CopyMode::UseKeepLayout)],
            Timestamp::INVALID,
        )
        .unwrap();

        assert!(!frame.set(target, false, false, &[], Timestamp::INVALID).unwrap());
        assert!(frame.is_read_only());

        assert!(frame.set(target, false, true, &[], Timestamp::INVALID).unwrap());
        assert!(frame.is_owner() && !frame.is_read_only());
    }

    #[test]
    fn set_owns_exclusive_memory_only_when_forced() {
        let mut memory = [0u8; 8];
        let target = frame_type(4, 2, PixelFormat::Y8);
        let mut frame = Frame::with_planes(
            target,
            vec![PlaneInitializer::exclusive(&mut memory, 0, CopyMode::UseKeepLayout)],
            Timestamp::INVALID,
        )
        .unwrap();
        assert!(!frame.is_owner() && !frame.is_read_only());

        assert!(!frame.set(target, false, true, &[], Timestamp::INVALID).unwrap());
        assert!(!frame.is_owner());

        assert!(frame.set(target, true, false, &[], Timestamp::new(2.0)).unwrap());
        assert!(frame.is_owner() && !frame.is_read_only());
        assert_eq!(frame.timestamp(), Timestamp::new(2.0));
    }

    #[test]
    fn set_invalid_type_releases() {
        let mut frame = Frame::new(frame_type(2, 2, PixelFormat::Y8)).unwrap();
        assert!(!frame.set(FrameType::INVALID, false, false, &[], Timestamp::new(1.0)).unwrap());
        assert!(!frame.is_valid());
        assert_eq!(frame.number_planes(), 1);
    }

    #[test]
    fn copy_from_strips_padding() {
        let mut source = Frame::with_padding(frame_type(2, 2, PixelFormat::Y_UV12), &[2, 4]).unwrap();
        source.fill(9, 0, true).unwrap();
        source.set_timestamp(Timestamp::new(5.0));

        let mut target = Frame::default();
        target.copy_from(&source, true).unwrap();

        assert!(target.is_valid() && target.is_owner() && target.is_continuous());
        assert_eq!(target.frame_type(), source.frame_type());
        assert_eq!(target.plane(0).unwrap().as_bytes(), &[9, 9, 9, 9]);
        assert_eq!(target.timestamp(), Timestamp::new(5.0));

        assert!(matches!(
            target.copy_from(&Frame::default(), false),
            Err(FrameError::InvalidFrame)
        ));
    }

    #[test]
    fn paste_checks() {
        let source = Frame::new(frame_type(2, 2, PixelFormat::Y_UV12)).unwrap();
        let mut target = Frame::new(frame_type(4, 4, PixelFormat::Y_UV12)).unwrap();

        assert!(matches!(
            target.copy_at(1, 0, &source, false),
            Err(FrameError::Misaligned { left: 1, top: 0 })
        ));

        let rgb = Frame::new(frame_type(2, 2, PixelFormat::RGB24)).unwrap();
        assert!(matches!(
            target.copy_at(0, 0, &rgb, false),
            Err(FrameError::Incompatible)
        ));

        let flipped = Frame::new(source.frame_type().with_origin(PixelOrigin::LowerLeft)).unwrap();
        assert!(matches!(
            target.copy_at(0, 0, &flipped, false),
            Err(FrameError::Incompatible)
        ));

        assert!(target.copy_at(-2, 4, &source, false).is_ok());
    }

    #[test]
    fn paste_sub_sampled() {
        let mut source = Frame::new(frame_type(2, 2, PixelFormat::Y_UV12)).unwrap();
        source.fill(1, 0, false).unwrap();
        source.fill(2, 1, false).unwrap();

        let mut target = Frame::new(frame_type(4, 4, PixelFormat::Y_UV12)).unwrap();
        target.copy_at(2, 2, &source, false).unwrap();

        assert_eq!(target.row::<u8>(1, 0).unwrap(), &[0, 0, 0, 0]);
        assert_eq!(target.row::<u8>(2, 0).unwrap(), &[0, 0, 1, 1]);
        assert_eq!(target.row::<u8>(3, 0).unwrap(), &[0, 0, 1, 1]);
        assert_eq!(target.row::<u8>(0, 1).unwrap(), &[0, 0, 0, 0]);
        assert_eq!(target.row::<u8>(1, 1).unwrap(), &[0, 0, 2, 2]);
    }

    #[test]
    fn packed_paste_whole_frame_only() {
        let mut source = Frame::new(frame_type(8, 2, PixelFormat::BGGR10_PACKED)).unwrap();
        source.fill(3, 0, false).unwrap();
        let mut target = Frame::new(*source.frame_type()).unwrap();

        target.copy_at(0, 0, &source, false).unwrap();
        assert!(target.plane(0).unwrap().as_bytes().iter().all(|&b| b == 3));

        assert!(matches!(
            target.copy_at(4, 0, &source, false),
            Err(FrameError::PackedFormat)
        ));
    }

    #[test]
    fn failed_paste_keeps_timestamps() {
        let mut source = Frame::new(frame_type(8, 2, PixelFormat::BGGR10_PACKED)).unwrap();
        source.set_timestamp(Timestamp::new(9.0));
        source.set_relative_timestamp(Timestamp::new(3.0));
        let mut target = Frame::new(frame_type(16, 2, PixelFormat::BGGR10_PACKED)).unwrap();

        assert!(matches!(
            target.copy_at(4, 0, &source, true),
            Err(FrameError::PackedFormat)
        ));
        assert!(!target.timestamp().is_valid());
        assert!(!target.relative_timestamp().is_valid());
    }

    #[test]
    fn paste_outside_read_only_frame() {
        let memory = [0u8; 4];
        let mut target = Frame::with_planes(
            frame_type(2, 2, PixelFormat::Y8),
            vec![PlaneInitializer::shared(&memory, 0, CopyMode::UseKeepLayout)],
            Timestamp::INVALID,
        )
        .unwrap();
        let mut source = Frame::new(frame_type(2, 2, PixelFormat::Y8)).unwrap();
        source.set_timestamp(Timestamp::new(1.0));

        target.copy_at(10, 10, &source, true).unwrap();
        target.copy_at(-2, 0, &source, false).unwrap();
        assert_eq!(target.timestamp(), Timestamp::new(1.0));

        assert!(matches!(
            target.copy_at(0, 0, &source, false),
            Err(FrameError::Plane(PlaneError::ReadOnly))
        ));
    }

    #[test]
    fn typed_fill_and_search() {
        let mut frame = Frame::new(frame_type(4, 2, PixelFormat::Y_UV12)).unwrap();
        frame.fill_pixels::<u8>(&[16], 0).unwrap();
        frame.fill_pixels::<u8>(&[128, 64], 1).unwrap();

        assert_eq!(frame.row::<u8>(1, 0).unwrap(), &[16, 16, 16, 16]);
        assert_eq!(frame.row::<u8>(0, 1).unwrap(), &[128, 64, 128, 64]);
        assert!(frame.contains_pixel::<u8>(&[128, 64], 1).unwrap());
        assert!(!frame.contains_pixel::<u8>(&[64, 128], 1).unwrap());

        assert!(matches!(
            frame.fill_pixels::<u8>(&[1, 2, 3], 1),
            Err(FrameError::Plane(PlaneError::PixelValue { .. }))
        ));
        assert!(matches!(
            frame.contains_pixel::<u8>(&[1], 2),
            Err(FrameError::PlaneIndex(2))
        ));

        let mut packed = Frame::new(frame_type(4, 1, PixelFormat::Y10_PACKED)).unwrap();
        assert!(matches!(
            packed.fill_pixels::<u8>(&[1], 0),
            Err(FrameError::PackedFormat)
        ));
    }

    #[test]
    fn update_memory_redirects_borrowed_planes() {
        let first = [1u8, 2, 3, 4, 5, 6];
        let mut second = [7u8, 8, 9, 10, 11, 12];
        let mut frame = Frame::with_planes(
            frame_type(2, 2, PixelFormat::Y8),
            vec![PlaneInitializer::shared(&first, 1, CopyMode::UseKeepLayout)],
            Timestamp::INVALID,
        )
        .unwrap();
        assert_eq!(frame.row::<u8>(1, 0).unwrap(), &[4, 5]);

        frame.update_memory(vec![PlaneSource::Exclusive(&mut second)]).unwrap();
        assert!(!frame.is_read_only() && !frame.is_owner());
        assert_eq!(frame.padding_elements(0), 1);
        assert_eq!(frame.row::<u8>(1, 0).unwrap(), &[10, 11]);

        assert!(matches!(
            frame.update_memory(Vec::new()),
            Err(FrameError::PlaneCount { expected: 1, actual: 0 })
        ));
        assert!(matches!(
            frame.update_memory(vec![PlaneSource::Shared(&[0u8; 2])]),
            Err(FrameError::Plane(PlaneError::BufferTooSmall { .. }))
        ));
        assert_eq!(frame.row::<u8>(1, 0).unwrap(), &[10, 11]);

        let mut owned = Frame::new(frame_type(2, 2, PixelFormat::Y8)).unwrap();
        assert!(matches!(
            owned.update_memory(vec![PlaneSource::Shared(&first)]),
            Err(FrameError::OwnedPlane(0))
        ));
        assert!(matches!(
            Frame::default().update_memory(vec![PlaneSource::Shared(&first)]),
            Err(FrameError::InvalidFrame)
        ));
    }

    #[test]
    fn sub_frame_copy_modes() {
        let mut frame = Frame::new(frame_type(4, 4, PixelFormat::Y8)).unwrap();
        for (index, value) in frame.row_mut::<u8>(0, 0).unwrap().iter_mut().enumerate() {
            *value = index as u8;
        }
        for y in 1..4 {
            for (x, value) in frame.row_mut::<u8>(y, 0).unwrap().iter_mut().enumerate() {
                *value = (y * 4) as u8 + x as u8;
            }
        }

        let view = frame.sub_frame(1, 1, 2, 2, CopyMode::UseKeepLayout).unwrap();
        assert!(view.is_read_only());
        assert_eq!(view.plane(0).unwrap().padding_elements(), 2);
        assert_eq!(view.row::<u8>(1, 0).unwrap(), &[9, 10]);

        let copy = frame.sub_frame(1, 1, 2, 2, CopyMode::CopyRemovePaddingLayout).unwrap();
        assert!(copy.is_owner() && copy.is_continuous());
        assert_eq!(copy.plane(0).unwrap().as_bytes(), &[5, 6, 9, 10]);

        assert!(matches!(
            frame.sub_frame(0, 0, 2, 2, CopyMode::CopyKeepLayoutCopyPaddingData),
            Err(FrameError::UnsupportedCopyMode)
        ));
        assert!(matches!(
            frame.sub_frame(3, 0, 2, 2, CopyMode::UseKeepLayout),
            Err(FrameError::OutOfBounds)
        ));
    }

    #[test]
    fn sub_frame_sub_sampled() {
        let mut frame = Frame::new(frame_type(4, 4, PixelFormat::Y_UV12)).unwrap();
        frame.pixel_mut::<u8>(1, 1, 1).unwrap().copy_from_slice(&[7, 8]);

        let view = frame.sub_frame(2, 2, 2, 2, CopyMode::UseKeepLayout).unwrap();
        assert_eq!(view.plane(1).unwrap().width(), 1);
        assert_eq!(view.pixel::<u8>(0, 0, 1).unwrap(), &[7, 8]);

        assert!(matches!(
            frame.sub_frame(1, 0, 2, 2, CopyMode::UseKeepLayout),
            Err(FrameError::Misaligned { .. })
        ));
    }

    #[test]
    fn packed_pixels_only_at_row_start() {
        let frame = Frame::new(frame_type(4, 1, PixelFormat::Y10_PACKED)).unwrap();
        assert!(frame.pixel::<u8>(0, 0, 0).is_ok());
        assert!(matches!(frame.pixel::<u8>(1, 0, 0), Err(FrameError::PackedFormat)));
        assert!(matches!(
            frame.sub_frame(4, 0, 4, 1, CopyMode::UseKeepLayout),
            Err(FrameError::OutOfBounds)
        ));
    }

    #[test]
    fn make_owner_copies_borrowed() {
        let memory = [1u8, 2, 0, 3, 4];
        let mut frame = Frame::with_planes(
            frame_type(2, 2, PixelFormat::Y8),
            vec![PlaneInitializer::shared(&memory, 1, CopyMode::UseKeepLayout)],
            Timestamp::new(4.0),
        )
        .unwrap();
        assert!(!frame.is_owner() && !frame.is_continuous());

        frame.make_owner().unwrap();
        assert!(frame.is_owner() && frame.is_continuous());
        assert_eq!(frame.plane(0).unwrap().as_bytes(), &[1, 2, 3, 4]);
        assert_eq!(frame.timestamp(), Timestamp::new(4.0));
    }

    #[test]
    fn plane_accessors() {
        let frame = Frame::with_padding(frame_type(4, 2, PixelFormat::Y_UV12), &[0, 3]).unwrap();
        assert_eq!(frame.channels(), 3);
        assert_eq!(frame.data_type(), DataType::U8);
        assert_eq!(frame.plane_width(1), 2);
        assert_eq!(frame.plane_height(1), 1);
        assert_eq!(frame.plane_channels(1), 2);
        assert_eq!(frame.plane_width_bytes(1), 4);
        assert_eq!(frame.stride_bytes(1), 7);
        assert_eq!(frame.padding_elements(1), 3);
        assert_eq!(frame.size(1), 7);
        assert!(frame.is_plane_owner(0));

        assert_eq!(frame.plane_width(2), 0);
        assert!(!frame.is_plane_owner(2));
    }

    #[test]
    fn release_resets() {
        let mut frame = Frame::new(frame_type(2, 2, PixelFormat::Y_U_V12)).unwrap();
        frame.set_timestamp(Timestamp::new(1.0));
        frame.release();

        assert!(!frame.is_valid());
        assert_eq!(frame.number_planes(), 1);
        assert!(!frame.timestamp().is_valid());
        assert_eq!(*frame.frame_type(), FrameType::INVALID);
    }
}
