// crates/xtce-rs/src/model/encoding.rs

use serde::Serialize;

use super::algorithms::InputAlgorithm;
use super::common::{DynamicValue, IntegerValue};

/// The single encoding child of a type. Absolute time types wrap an integer
/// or float encoding into `<Encoding>`.
#[derive(Debug, Serialize)]
pub enum DataEncoding {
    #[serde(rename = "IntegerDataEncoding")]
    Integer(IntegerDataEncoding),
    #[serde(rename = "FloatDataEncoding")]
    Float(FloatDataEncoding),
    #[serde(rename = "BinaryDataEncoding")]
    Binary(BinaryDataEncoding),
    #[serde(rename = "StringDataEncoding")]
    String(StringDataEncoding),
    #[serde(rename = "Encoding")]
    Time(TimeEncoding),
}

#[derive(Debug, Serialize, Default)]
pub struct IntegerDataEncoding {
    #[serde(rename = "@sizeInBits")]
    pub size_in_bits: u32,
    #[serde(rename = "@encoding")]
    pub encoding: String,
    #[serde(rename = "@byteOrder", skip_serializing_if = "Option::is_none")]
    pub byte_order: Option<String>,
    #[serde(rename = "DefaultCalibrator", skip_serializing_if = "Option::is_none")]
    pub default_calibrator: Option<DefaultCalibrator>,
}

#[derive(Debug, Serialize, Default)]
pub struct FloatDataEncoding {
    #[serde(rename = "@sizeInBits")]
    pub size_in_bits: u32,
    #[serde(rename = "@encoding")]
    pub encoding: String,
    #[serde(rename = "@byteOrder")]
    pub byte_order: String,
    #[serde(rename = "DefaultCalibrator", skip_serializing_if = "Option::is_none")]
    pub default_calibrator: Option<DefaultCalibrator>,
}

/// Holds exactly one of the calibrator kinds.
#[derive(Debug, Serialize, Default)]
pub struct DefaultCalibrator {
    #[serde(rename = "PolynomialCalibrator", skip_serializing_if = "Option::is_none")]
    pub polynomial: Option<PolynomialCalibrator>,
    #[serde(rename = "SplineCalibrator", skip_serializing_if = "Option::is_none")]
    pub spline: Option<SplineCalibrator>,
}

#[derive(Debug, Serialize, Default)]
pub struct PolynomialCalibrator {
    #[serde(rename = "Term")]
    pub terms: Vec<Term>,
}

#[derive(Debug, Serialize)]
pub struct Term {
    #[serde(rename = "@coefficient")]
    pub coefficient: String,
    #[serde(rename = "@exponent")]
    pub exponent: u32,
}

#[derive(Debug, Serialize, Default)]
pub struct SplineCalibrator {
    #[serde(rename = "SplinePoint")]
    pub points: Vec<SplinePoint>,
}

#[derive(Debug, Serialize)]
pub struct SplinePoint {
    #[serde(rename = "@raw")]
    pub raw: String,
    #[serde(rename = "@calibrated")]
    pub calibrated: String,
}

#[derive(Debug, Serialize, Default)]
pub struct BinaryDataEncoding {
    #[serde(rename = "SizeInBits")]
    pub size_in_bits: IntegerValue,
    #[serde(rename = "FromBinaryTransformAlgorithm", skip_serializing_if = "Option::is_none")]
    pub from_binary: Option<InputAlgorithm>,
    #[serde(rename = "ToBinaryTransformAlgorithm", skip_serializing_if = "Option::is_none")]
    pub to_binary: Option<InputAlgorithm>,
}

#[derive(Debug, Serialize, Default)]
pub struct StringDataEncoding {
    #[serde(rename = "@encoding")]
    pub encoding: String,
    #[serde(rename = "SizeInBits", skip_serializing_if = "Option::is_none")]
    pub size_in_bits: Option<FixedStringSize>,
    #[serde(rename = "Variable", skip_serializing_if = "Option::is_none")]
    pub variable: Option<VariableStringSize>,
}

/// `<SizeInBits>` of a fixed-size string.
#[derive(Debug, Serialize, Default)]
pub struct FixedStringSize {
    #[serde(rename = "Fixed")]
    pub fixed: FixedSize,
    #[serde(rename = "TerminationChar", skip_serializing_if = "Option::is_none")]
    pub termination_char: Option<String>,
    #[serde(rename = "LeadingSize", skip_serializing_if = "Option::is_none")]
    pub leading_size: Option<LeadingSize>,
}

#[derive(Debug, Serialize, Default)]
pub struct FixedSize {
    #[serde(rename = "FixedValue")]
    pub fixed_value: u32,
}

#[derive(Debug, Serialize, Default)]
pub struct VariableStringSize {
    #[serde(rename = "@maxSizeInBits")]
    pub max_size_in_bits: u32,
    #[serde(rename = "DynamicValue")]
    pub dynamic_value: DynamicValue,
    #[serde(rename = "LeadingSize", skip_serializing_if = "Option::is_none")]
    pub leading_size: Option<LeadingSize>,
    #[serde(rename = "TerminationChar", skip_serializing_if = "Option::is_none")]
    pub termination_char: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LeadingSize {
    #[serde(rename = "@sizeInBitsOfSizeTag")]
    pub size_in_bits_of_size_tag: u32,
}

/// `<Encoding offset=".." scale=".." units="seconds">` around a raw encoding.
#[derive(Debug, Serialize)]
pub struct TimeEncoding {
    #[serde(rename = "@offset")]
    pub offset: String,
    #[serde(rename = "@scale")]
    pub scale: String,
    #[serde(rename = "@units")]
    pub units: String,
    #[serde(rename = "$value")]
    pub raw: Box<DataEncoding>,
}
