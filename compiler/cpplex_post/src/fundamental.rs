//! Fundamental (built-in) C++ types attached to decoded literals.
//!
//! Sizes follow the LP64 data model: `int` is 4 bytes, `long` and
//! `long long` are 8, `wchar_t` is a signed 4-byte type.

/// A C++ fundamental type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FundamentalType {
    SignedChar,
    ShortInt,
    Int,
    LongInt,
    LongLongInt,
    UnsignedChar,
    UnsignedShortInt,
    UnsignedInt,
    UnsignedLongInt,
    UnsignedLongLongInt,
    WcharT,
    Char,
    Char16T,
    Char32T,
    Bool,
    Float,
    Double,
    /// Represented here as an `f64`; literal data is 8 bytes.
    LongDouble,
    Void,
    NullptrT,
}

impl FundamentalType {
    /// Size of one object of this type, in bytes.
    pub fn width(self) -> usize {
        match self {
            Self::SignedChar | Self::UnsignedChar | Self::Char | Self::Bool => 1,
            Self::ShortInt | Self::UnsignedShortInt | Self::Char16T => 2,
            Self::Int | Self::UnsignedInt | Self::WcharT | Self::Char32T | Self::Float => 4,
            Self::LongInt
            | Self::LongLongInt
            | Self::UnsignedLongInt
            | Self::UnsignedLongLongInt
            | Self::Double
            | Self::LongDouble
            | Self::NullptrT => 8,
            Self::Void => 0,
        }
    }
}
