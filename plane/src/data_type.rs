// Distributed under The MIT License (MIT)
//
// Copyright (c) 2019, 2020 The `image-rs` developers
use core::fmt;
use core::str::FromStr;

use crate::error::ParseNameError;

/// The scalar type of every element stored in a plane.
///
/// The discriminants are stable, they are part of the packed pixel format encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum DataType {
    #[default]
    Undefined = 0,
    U8 = 1,
    I8 = 2,
    U16 = 3,
    I16 = 4,
    U32 = 5,
    I32 = 6,
    U64 = 7,
    I64 = 8,
    F16 = 9,
    F32 = 10,
    F64 = 11,
}

/// A scalar type that may be stored as the element of a plane.
pub trait Element: bytemuck::Pod {
    const DATA_TYPE: DataType;
}

macro_rules! element {
    ($($ty:ty => $dt:ident),*) => {
        $(
            impl Element for $ty {
                const DATA_TYPE: DataType = DataType::$dt;
            }
        )*
    };
}

element!(
    u8 => U8, i8 => I8, u16 => U16, i16 => I16, u32 => U32, i32 => I32,
    u64 => U64, i64 => I64, f32 => F32, f64 => F64
);

impl DataType {
    /// All data types except `Undefined`.
    pub const DEFINED: [DataType; 11] = [
        DataType::U8,
        DataType::I8,
        DataType::U16,
        DataType::I16,
        DataType::U32,
        DataType::I32,
        DataType::U64,
        DataType::I64,
        DataType::F16,
        DataType::F32,
        DataType::F64,
    ];

    /// The data type of a Rust element type.
    pub const fn of<T: Element>() -> Self {
        T::DATA_TYPE
    }

    /// Decode the tag stored in a pixel format.
    pub const fn from_raw(raw: u8) -> Option<Self> {
        Some(match raw {
            0 => DataType::Undefined,
            1 => DataType::U8,
            2 => DataType::I8,
            3 => DataType::U16,
            4 => DataType::I16,
            5 => DataType::U32,
            6 => DataType::I32,
            7 => DataType::U64,
            8 => DataType::I64,
            9 => DataType::F16,
            10 => DataType::F32,
            11 => DataType::F64,
            _ => return None,
        })
    }

    /// The unsigned integer type with the given number of bits.
    pub const fn unsigned_with_bits(bits: u32) -> Self {
        match bits {
            8 => DataType::U8,
            16 => DataType::U16,
            32 => DataType::U32,
            64 => DataType::U64,
            _ => DataType::Undefined,
        }
    }

    /// The size of one element in bytes, `0` for `Undefined`.
    pub const fn bytes(self) -> usize {
        match self {
            DataType::Undefined => 0,
            DataType::U8 | DataType::I8 => 1,
            DataType::U16 | DataType::I16 | DataType::F16 => 2,
            DataType::U32 | DataType::I32 | DataType::F32 => 4,
            DataType::U64 | DataType::I64 | DataType::F64 => 8,
        }
    }

    pub const fn is_defined(self) -> bool {
        !matches!(self, DataType::Undefined)
    }

    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            DataType::I8
                | DataType::I16
                | DataType::I32
                | DataType::I64
                | DataType::F16
                | DataType::F32
                | DataType::F64
        )
    }

    pub const fn is_float(self) -> bool {
        matches!(self, DataType::F16 | DataType::F32 | DataType::F64)
    }

    /// The canonical configuration name.
    pub const fn name(self) -> &'static str {
        match self {
            DataType::Undefined => "UNDEFINED",
            DataType::U8 => "UNSIGNED_INTEGER_8",
            DataType::I8 => "SIGNED_INTEGER_8",
            DataType::U16 => "UNSIGNED_INTEGER_16",
            DataType::I16 => "SIGNED_INTEGER_16",
            DataType::U32 => "UNSIGNED_INTEGER_32",
            DataType::I32 => "SIGNED_INTEGER_32",
            DataType::U64 => "UNSIGNED_INTEGER_64",
            DataType::I64 => "SIGNED_INTEGER_64",
            DataType::F16 => "SIGNED_FLOAT_16",
            DataType::F32 => "SIGNED_FLOAT_32",
            DataType::F64 => "SIGNED_FLOAT_64",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DataType {
    type Err = ParseNameError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        core::iter::once(DataType::Undefined)
            .chain(DataType::DEFINED)
            .find(|dt| dt.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseNameError::new("data type", name))
    }
}
