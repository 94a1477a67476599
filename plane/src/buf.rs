// Distributed under The MIT License (MIT)
//
// Copyright (c) 2019 The `image-rs` developers
#![allow(unsafe_code)]
use core::mem;

use std::collections::TryReserveError;

macro_rules! def_max_align {
    (
        $($($arch:literal),* = $num:literal),*
    ) => {
        $(
            /// A byte-like-type that is aligned to the required max alignment.
            ///
            /// This type does not contain padding and implements `Pod`. Every scalar element type
            /// a plane can hold has an alignment of at most this value.
            #[derive(Clone, Copy)]
            #[cfg(
                any($(target_arch = $arch),*),
            )]
            #[repr(align($num))]
            #[repr(C)]
            pub(crate) struct MaxAligned([u8; $num]);

            #[cfg(
                any($(target_arch = $arch),*),
            )]
            pub(crate) const MAX_ALIGN: usize = $num;
        )*


        #[derive(Clone, Copy)]
        #[cfg(
            not(any(
                $(any($(target_arch = $arch),*)),*
            )),
        )]
        #[repr(align(8))]
        #[repr(C)]
        pub(crate) struct MaxAligned([u8; 8]);

        #[cfg(
            not(any(
                $(any($(target_arch = $arch),*)),*
            )),
        )]
        pub(crate) const MAX_ALIGN: usize = 8;
    }
}

def_max_align! {
    "x86", "x86_64" = 32,
    "arm" = 16,
    "aarch64" = 16,
    "wasm32" = 16
}

// SAFETY: a plain byte array with an alignment attribute, no padding and no invalid bit patterns.
unsafe impl bytemuck::Zeroable for MaxAligned {}
unsafe impl bytemuck::Pod for MaxAligned {}

/// Allocates and manages the raw bytes of an owning plane.
///
/// The allocation is made of [`MaxAligned`] chunks so the first byte is aligned for any element
/// type. The chunk count is rounded up, the buffer remembers the exact logical byte length it was
/// requested with and only ever exposes that many bytes.
#[derive(Clone, Default)]
pub(crate) struct Buffer {
    /// The backing memory.
    inner: Vec<MaxAligned>,
    /// The logical number of bytes.
    len: usize,
}

impl Buffer {
    const ELEMENT: MaxAligned = MaxAligned([0; MAX_ALIGN]);

    /// Allocate a new, zeroed buffer with a number of bytes.
    ///
    /// Reports an allocator failure instead of aborting.
    pub fn try_new(length: usize) -> Result<Self, TryReserveError> {
        let alloc_len = Self::alloc_len(length);
        let mut inner = Vec::new();
        inner.try_reserve_exact(alloc_len)?;
        inner.resize(alloc_len, Self::ELEMENT);

        Ok(Buffer { inner, len: length })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn as_bytes(&self) -> &[u8] {
        &bytemuck::cast_slice(self.inner.as_slice())[..self.len]
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut bytemuck::cast_slice_mut(self.inner.as_mut_slice())[..self.len]
    }

    /// Retrieve the byte capacity of the allocated storage.
    pub fn capacity(&self) -> usize {
        self.inner.capacity() * mem::size_of::<MaxAligned>()
    }

    /// Calculates the number of elements to have a byte buffer of requested length.
    fn alloc_len(length: usize) -> usize {
        const CHUNK_SIZE: usize = mem::size_of::<MaxAligned>();
        assert!(CHUNK_SIZE > 1);

        // We allocated enough chunks for at least the length. This can never overflow.
        length / CHUNK_SIZE + usize::from(length % CHUNK_SIZE != 0)
    }
}

impl core::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Buffer")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .finish()
    }
}
