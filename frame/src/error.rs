use image_plane::PlaneError;

/// Errors of frame construction and whole-frame operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum FrameError {
    #[error("invalid frame type")]
    InvalidFrameType,
    #[error("no layout for plane {plane} of the frame type")]
    InvalidLayout { plane: u32 },
    #[error("expected {expected} plane initializers, got {actual}")]
    PlaneCount { expected: u32, actual: usize },
    #[error("plane index {0} out of range")]
    PlaneIndex(u32),
    #[error(transparent)]
    Plane(#[from] PlaneError),
    /// The frame is not valid, or the operation needs a valid source.
    #[error("frame is invalid")]
    InvalidFrame,
    /// Only planes that borrow their memory can be pointed at other memory.
    #[error("plane {0} owns its memory")]
    OwnedPlane(u32),
    #[error("frames differ in pixel format or origin")]
    Incompatible,
    #[error("offset ({left}, {top}) is not a multiple of the pixel format's multiples")]
    Misaligned { left: i64, top: i64 },
    #[error("region out of bounds")]
    OutOfBounds,
    #[error("copy mode is not supported by this operation")]
    UnsupportedCopyMode,
    /// Bit-packed pixels can not be addressed at arbitrary horizontal offsets.
    #[error("operation is not supported for bit-packed pixel formats")]
    PackedFormat,
}
