/// Errors of plane construction, copies and element access.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PlaneError {
    /// Dimensions, channels or element size are zero or overflow the address space.
    #[error("invalid plane layout")]
    InvalidLayout,
    #[error("failed to allocate {bytes} bytes")]
    AllocationFailed { bytes: usize },
    #[error("plane is read-only")]
    ReadOnly,
    /// The copy needs a new allocation but the caller forbade reallocation.
    #[error("plane must be reallocated but reallocation is not permitted")]
    ReallocationRequired,
    #[error("buffer of {actual} bytes is too small, {required} bytes are required")]
    BufferTooSmall { required: usize, actual: usize },
    #[error("coordinate out of bounds")]
    OutOfBounds,
    /// A pixel value does not match the channels or element size of the plane.
    #[error("pixel value must have {channels} elements of {element_size} bytes")]
    PixelValue { channels: u32, element_size: u32 },
    #[error("can not reinterpret plane bytes: {0:?}")]
    Cast(bytemuck::PodCastError),
}

/// A name that is not part of a translation table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} name `{name}`")]
pub struct ParseNameError {
    kind: &'static str,
    name: String,
}

impl ParseNameError {
    pub fn new(kind: &'static str, name: &str) -> Self {
        ParseNameError {
            kind,
            name: name.to_owned(),
        }
    }

    /// The name that failed to parse.
    pub fn name(&self) -> &str {
        &self.name
    }
}
