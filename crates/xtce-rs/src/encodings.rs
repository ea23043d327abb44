// crates/xtce-rs/src/encodings.rs

//! Raw wire representations of values.

use crate::algorithms::UnnamedAlgorithm;

/// Signed number representation of an integer encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegerEncodingScheme {
    #[default]
    Unsigned,
    SignMagnitude,
    TwosComplement,
    OnesComplement,
}

/// Floating point representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FloatEncodingScheme {
    #[default]
    Ieee754_1985,
    MilStd1750A,
}

/// Character set of a string encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Charset {
    #[default]
    UsAscii,
    Iso8859_1,
    Windows1252,
    Utf8,
    Utf16,
    Utf16Le,
    Utf16Be,
    Utf32,
    Utf32Le,
    Utf32Be,
}

impl Charset {
    /// IANA name used in `StringDataEncoding/@encoding`.
    pub fn as_str(self) -> &'static str {
        match self {
            Charset::UsAscii => "US-ASCII",
            Charset::Iso8859_1 => "ISO-8859-1",
            Charset::Windows1252 => "Windows-1252",
            Charset::Utf8 => "UTF-8",
            Charset::Utf16 => "UTF-16",
            Charset::Utf16Le => "UTF-16LE",
            Charset::Utf16Be => "UTF-16BE",
            Charset::Utf32 => "UTF-32",
            Charset::Utf32Le => "UTF-32LE",
            Charset::Utf32Be => "UTF-32BE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerEncoding {
    pub bits: u32,
    pub little_endian: bool,
    pub scheme: IntegerEncodingScheme,
}

impl IntegerEncoding {
    pub const fn new(bits: u32, little_endian: bool, scheme: IntegerEncodingScheme) -> Self {
        Self {
            bits,
            little_endian,
            scheme,
        }
    }

    /// Big-endian unsigned encoding of the given width.
    pub const fn unsigned(bits: u32) -> Self {
        Self::new(bits, false, IntegerEncodingScheme::Unsigned)
    }

    /// Big-endian two's complement encoding of the given width.
    pub const fn twos_complement(bits: u32) -> Self {
        Self::new(bits, false, IntegerEncodingScheme::TwosComplement)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloatEncoding {
    pub bits: u32,
    pub little_endian: bool,
    pub scheme: FloatEncodingScheme,
}

impl FloatEncoding {
    pub const fn new(bits: u32, little_endian: bool) -> Self {
        Self {
            bits,
            little_endian,
            scheme: FloatEncodingScheme::Ieee754_1985,
        }
    }
}

/// Binary blob encoding.
///
/// Without `bits` the size is variable: either a leading size tag of
/// `length_bits` bits, or whatever a custom decoder consumes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BinaryEncoding {
    pub bits: Option<u32>,
    pub length_bits: Option<u32>,
    pub encoder: Option<UnnamedAlgorithm>,
    pub decoder: Option<UnnamedAlgorithm>,
}

impl BinaryEncoding {
    pub fn fixed(bits: u32) -> Self {
        Self {
            bits: Some(bits),
            ..Default::default()
        }
    }

    pub fn leading_size(length_bits: u32) -> Self {
        Self {
            length_bits: Some(length_bits),
            ..Default::default()
        }
    }
}

/// Default maximum size of a variable string (1 MiB).
pub const DEFAULT_STRING_MAX_BITS: u32 = 8_388_608;

/// String encoding. With `bits` the string occupies a fixed field, otherwise
/// it is sized by a leading size tag and/or a termination sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringEncoding {
    pub bits: Option<u32>,
    pub length_bits: Option<u32>,
    pub max_bits: u32,
    pub charset: Charset,
    pub termination: Option<Vec<u8>>,
}

impl Default for StringEncoding {
    fn default() -> Self {
        Self {
            bits: None,
            length_bits: None,
            max_bits: DEFAULT_STRING_MAX_BITS,
            charset: Charset::UsAscii,
            termination: Some(vec![0]),
        }
    }
}

/// Integer-encoded time value, `offset + scale * raw` seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerTimeEncoding {
    pub bits: u32,
    pub little_endian: bool,
    pub scheme: IntegerEncodingScheme,
    pub offset: f64,
    pub scale: f64,
}

impl IntegerTimeEncoding {
    pub fn new(bits: u32) -> Self {
        Self {
            bits,
            little_endian: false,
            scheme: IntegerEncodingScheme::Unsigned,
            offset: 0.0,
            scale: 1.0,
        }
    }

    pub fn raw(&self) -> IntegerEncoding {
        IntegerEncoding::new(self.bits, self.little_endian, self.scheme)
    }
}

/// Float-encoded time value, `offset + scale * raw` seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatTimeEncoding {
    pub bits: u32,
    pub little_endian: bool,
    pub scheme: FloatEncodingScheme,
    pub offset: f64,
    pub scale: f64,
}

impl FloatTimeEncoding {
    pub fn new(bits: u32) -> Self {
        Self {
            bits,
            little_endian: false,
            scheme: FloatEncodingScheme::Ieee754_1985,
            offset: 0.0,
            scale: 1.0,
        }
    }

    pub fn raw(&self) -> FloatEncoding {
        FloatEncoding {
            bits: self.bits,
            little_endian: self.little_endian,
            scheme: self.scheme,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Encoding {
    Integer(IntegerEncoding),
    Float(FloatEncoding),
    Binary(BinaryEncoding),
    String(StringEncoding),
    IntegerTime(IntegerTimeEncoding),
    FloatTime(FloatTimeEncoding),
}

impl Encoding {
    /// Statically known width in bits.
    pub fn bits(&self) -> Option<u32> {
        match self {
            Encoding::Integer(e) => Some(e.bits),
            Encoding::Float(e) => Some(e.bits),
            Encoding::Binary(e) => e.bits,
            Encoding::String(e) => e.bits,
            Encoding::IntegerTime(e) => Some(e.bits),
            Encoding::FloatTime(e) => Some(e.bits),
        }
    }

    /// Byte order flag of the fixed-width numeric encodings.
    pub fn little_endian(&self) -> Option<bool> {
        match self {
            Encoding::Integer(e) => Some(e.little_endian),
            Encoding::Float(e) => Some(e.little_endian),
            Encoding::IntegerTime(e) => Some(e.little_endian),
            Encoding::FloatTime(e) => Some(e.little_endian),
            Encoding::Binary(_) | Encoding::String(_) => None,
        }
    }
}

impl From<IntegerEncoding> for Encoding {
    fn from(e: IntegerEncoding) -> Self {
        Encoding::Integer(e)
    }
}

impl From<FloatEncoding> for Encoding {
    fn from(e: FloatEncoding) -> Self {
        Encoding::Float(e)
    }
}

impl From<BinaryEncoding> for Encoding {
    fn from(e: BinaryEncoding) -> Self {
        Encoding::Binary(e)
    }
}

impl From<StringEncoding> for Encoding {
    fn from(e: StringEncoding) -> Self {
        Encoding::String(e)
    }
}

impl From<IntegerTimeEncoding> for Encoding {
    fn from(e: IntegerTimeEncoding) -> Self {
        Encoding::IntegerTime(e)
    }
}

impl From<FloatTimeEncoding> for Encoding {
    fn from(e: FloatTimeEncoding) -> Self {
        Encoding::FloatTime(e)
    }
}

// --- Common fixed-width encodings ---

const fn uint(bits: u32, little_endian: bool) -> Encoding {
    Encoding::Integer(IntegerEncoding::new(
        bits,
        little_endian,
        IntegerEncodingScheme::Unsigned,
    ))
}

const fn int(bits: u32, little_endian: bool) -> Encoding {
    Encoding::Integer(IntegerEncoding::new(
        bits,
        little_endian,
        IntegerEncodingScheme::TwosComplement,
    ))
}

const fn float(bits: u32, little_endian: bool) -> Encoding {
    Encoding::Float(FloatEncoding {
        bits,
        little_endian,
        scheme: FloatEncodingScheme::Ieee754_1985,
    })
}

pub const UINT1_T: Encoding = uint(1, false);
pub const UINT2_T: Encoding = uint(2, false);
pub const UINT3_T: Encoding = uint(3, false);
pub const UINT4_T: Encoding = uint(4, false);
pub const UINT5_T: Encoding = uint(5, false);
pub const UINT6_T: Encoding = uint(6, false);
pub const UINT7_T: Encoding = uint(7, false);
pub const UINT8_T: Encoding = uint(8, false);
pub const UINT9_T: Encoding = uint(9, false);
pub const UINT10_T: Encoding = uint(10, false);
pub const UINT11_T: Encoding = uint(11, false);
pub const UINT12_T: Encoding = uint(12, false);
pub const UINT13_T: Encoding = uint(13, false);
pub const UINT14_T: Encoding = uint(14, false);
pub const UINT15_T: Encoding = uint(15, false);
pub const UINT16_T: Encoding = uint(16, false);
pub const UINT16LE_T: Encoding = uint(16, true);
pub const UINT24_T: Encoding = uint(24, false);
pub const UINT32_T: Encoding = uint(32, false);
pub const UINT32LE_T: Encoding = uint(32, true);

pub const INT8_T: Encoding = int(8, false);
pub const INT16_T: Encoding = int(16, false);
pub const INT16LE_T: Encoding = int(16, true);
pub const INT24_T: Encoding = int(24, false);
pub const INT32_T: Encoding = int(32, false);
pub const INT32LE_T: Encoding = int(32, true);

/// Booleans travel as a full byte.
pub const BOOL_T: Encoding = UINT8_T;

pub const FLOAT32_T: Encoding = float(32, false);
pub const FLOAT32LE_T: Encoding = float(32, true);
pub const FLOAT64_T: Encoding = float(64, false);
pub const FLOAT64LE_T: Encoding = float(64, true);
