// crates/xtce-rs/src/datatypes.rs

//! Data types shared by parameters, arguments and aggregate members.
//!
//! Every kind embeds a [`TypeInfo`] with the fields all kinds have in common
//! (descriptions, units, ancillary data, raw encoding). [`DataType`] is the
//! closed union of kinds; [`Member`], `Parameter` and `Argument` add the
//! role-specific fields around it.

use chrono::{DateTime, Utc};

use crate::ancillary::AncillaryData;
use crate::calibrators::Calibrator;
use crate::encodings::Encoding;
use crate::error::MdbError;
use crate::references::ParameterRef;
use crate::value::Value;

/// Fields common to every data type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeInfo {
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub extra: AncillaryData,
    pub units: Option<String>,
    pub encoding: Option<Encoding>,
}

/// Builder methods for everything that carries a [`TypeInfo`].
macro_rules! type_info_builders {
    ($($t:ty),* $(,)?) => {
        $(
            impl $t {
                pub fn with_encoding(mut self, encoding: impl Into<Encoding>) -> Self {
                    self.info.encoding = Some(encoding.into());
                    self
                }

                pub fn with_units(mut self, units: impl Into<String>) -> Self {
                    self.info.units = Some(units.into());
                    self
                }

                pub fn with_short_description(mut self, text: impl Into<String>) -> Self {
                    self.info.short_description = Some(text.into());
                    self
                }

                pub fn with_long_description(mut self, text: impl Into<String>) -> Self {
                    self.info.long_description = Some(text.into());
                    self
                }

                pub fn with_extra(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
                    self.info.extra.append(name, value);
                    self
                }
            }
        )*
    };
}

// --- Absolute time ---

/// Well-known reference epochs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Epoch {
    Gps,
    J2000,
    Tai,
    Unix,
}

impl Epoch {
    pub fn as_str(self) -> &'static str {
        match self {
            Epoch::Gps => "GPS",
            Epoch::J2000 => "J2000",
            Epoch::Tai => "TAI",
            Epoch::Unix => "UNIX",
        }
    }
}

/// What an absolute time value counts from.
#[derive(Debug, Clone, PartialEq)]
pub enum TimeReference {
    Epoch(Epoch),
    Instant(DateTime<Utc>),
    /// Offset from the value of another time parameter.
    Parameter(ParameterRef),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AbsoluteTimeType {
    pub info: TypeInfo,
    pub reference: TimeReference,
}

impl AbsoluteTimeType {
    pub fn new(reference: TimeReference) -> Self {
        Self {
            info: TypeInfo::default(),
            reference,
        }
    }

    pub fn epoch(epoch: Epoch) -> Self {
        Self::new(TimeReference::Epoch(epoch))
    }
}

// --- Aggregate ---

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateType {
    pub info: TypeInfo,
    pub members: Vec<Member>,
}

impl AggregateType {
    pub fn new(members: Vec<Member>) -> Self {
        Self {
            info: TypeInfo::default(),
            members,
        }
    }

    /// Finds a direct member by name.
    pub fn find_member(&self, name: &str) -> Result<&Member, MdbError> {
        self.members
            .iter()
            .find(|m| m.name == name)
            .ok_or_else(|| MdbError::Lookup(format!("No member named '{}'", name)))
    }
}

// --- Array ---

/// Number of elements of an array.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayLength {
    Fixed(u32),
    /// Taken at runtime from the value of an integer parameter.
    Dynamic(ParameterRef),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayType {
    pub info: TypeInfo,
    pub element: Box<DataType>,
    pub length: ArrayLength,
}

impl ArrayType {
    pub fn new(element: impl Into<DataType>, length: ArrayLength) -> Self {
        Self {
            info: TypeInfo::default(),
            element: Box::new(element.into()),
            length,
        }
    }

    pub fn fixed(element: impl Into<DataType>, length: u32) -> Self {
        Self::new(element, ArrayLength::Fixed(length))
    }
}

// --- Binary / String ---

/// Lengths are in bytes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BinaryType {
    pub info: TypeInfo,
    pub min_length: Option<u32>,
    pub max_length: Option<u32>,
}

impl BinaryType {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Lengths are in characters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringType {
    pub info: TypeInfo,
    pub min_length: Option<u32>,
    pub max_length: Option<u32>,
}

impl StringType {
    pub fn new() -> Self {
        Self::default()
    }
}

// --- Boolean ---

#[derive(Debug, Clone, PartialEq)]
pub struct BooleanType {
    pub info: TypeInfo,
    pub zero_string_value: String,
    pub one_string_value: String,
}

impl Default for BooleanType {
    fn default() -> Self {
        Self {
            info: TypeInfo::default(),
            zero_string_value: "False".to_string(),
            one_string_value: "True".to_string(),
        }
    }
}

impl BooleanType {
    pub fn new() -> Self {
        Self::default()
    }

    /// Boolean with custom labels for `false` and `true`.
    pub fn labeled(zero: impl Into<String>, one: impl Into<String>) -> Self {
        Self {
            zero_string_value: zero.into(),
            one_string_value: one.into(),
            ..Default::default()
        }
    }

    pub fn label(&self, value: bool) -> &str {
        if value {
            &self.one_string_value
        } else {
            &self.zero_string_value
        }
    }
}

// --- Enumerated ---

/// One value/label pair of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub value: i64,
    pub label: String,
    pub description: Option<String>,
}

impl Choice {
    pub fn new(value: i64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            description: None,
        }
    }
}

impl<V: Into<i64>, L: Into<String>> From<(V, L)> for Choice {
    fn from((value, label): (V, L)) -> Self {
        Choice::new(value.into(), label)
    }
}

impl<V: Into<i64>, L: Into<String>, D: Into<String>> From<(V, L, D)> for Choice {
    fn from((value, label, description): (V, L, D)) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            description: Some(description.into()),
        }
    }
}

/// Conversion helper for Rust enums used as enumeration choices.
///
/// Implement it on a fieldless enum and pass `T::choices()` to
/// [`EnumeratedType::new`].
pub trait ChoiceSource: Sized {
    fn variants() -> Vec<Self>;
    fn value(&self) -> i64;
    fn label(&self) -> &'static str;

    fn choices() -> Vec<Choice> {
        Self::variants()
            .iter()
            .map(|v| Choice::new(v.value(), v.label()))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnumeratedType {
    pub info: TypeInfo,
    pub choices: Vec<Choice>,
}

impl EnumeratedType {
    pub fn new<C: Into<Choice>>(choices: impl IntoIterator<Item = C>) -> Self {
        Self {
            info: TypeInfo::default(),
            choices: choices.into_iter().map(Into::into).collect(),
        }
    }

    /// Label of the first choice with this value.
    pub fn label_for(&self, value: i64) -> Result<&str, MdbError> {
        self.choices
            .iter()
            .find(|c| c.value == value)
            .map(|c| c.label.as_str())
            .ok_or_else(|| MdbError::Lookup(format!("No enumeration label for value {}", value)))
    }
}

// --- Numeric ---

#[derive(Debug, Clone, PartialEq)]
pub struct FloatType {
    pub info: TypeInfo,
    /// 32 or 64. Unset means the width of the encoding, or 32.
    pub bits: Option<u32>,
    pub minimum: Option<f64>,
    pub minimum_inclusive: bool,
    pub maximum: Option<f64>,
    pub maximum_inclusive: bool,
    pub calibrator: Option<Calibrator>,
}

impl Default for FloatType {
    fn default() -> Self {
        Self {
            info: TypeInfo::default(),
            bits: None,
            minimum: None,
            minimum_inclusive: true,
            maximum: None,
            maximum_inclusive: true,
            calibrator: None,
        }
    }
}

impl FloatType {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_calibrator(mut self, calibrator: impl Into<Calibrator>) -> Self {
        self.calibrator = Some(calibrator.into());
        self
    }

    pub fn with_range(mut self, minimum: Option<f64>, maximum: Option<f64>) -> Self {
        self.minimum = minimum;
        self.maximum = maximum;
        self
    }

    /// Engineering width written to `@sizeInBits`.
    pub fn effective_bits(&self) -> u32 {
        self.bits
            .or_else(|| match &self.info.encoding {
                Some(enc @ (Encoding::Float(_) | Encoding::FloatTime(_))) => enc.bits(),
                _ => None,
            })
            .unwrap_or(32)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntegerType {
    pub info: TypeInfo,
    pub signed: bool,
    /// Unset means the width of the encoding, or 32.
    pub bits: Option<u32>,
    pub minimum: Option<i64>,
    pub maximum: Option<i64>,
    pub calibrator: Option<Calibrator>,
}

impl Default for IntegerType {
    fn default() -> Self {
        Self {
            info: TypeInfo::default(),
            signed: true,
            bits: None,
            minimum: None,
            maximum: None,
            calibrator: None,
        }
    }
}

impl IntegerType {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unsigned() -> Self {
        Self {
            signed: false,
            ..Default::default()
        }
    }

    pub fn with_calibrator(mut self, calibrator: impl Into<Calibrator>) -> Self {
        self.calibrator = Some(calibrator.into());
        self
    }

    pub fn with_range(mut self, minimum: Option<i64>, maximum: Option<i64>) -> Self {
        self.minimum = minimum;
        self.maximum = maximum;
        self
    }

    /// Engineering width written to `@sizeInBits`.
    pub fn effective_bits(&self) -> u32 {
        self.bits
            .or_else(|| match &self.info.encoding {
                Some(enc @ (Encoding::Integer(_) | Encoding::IntegerTime(_))) => enc.bits(),
                _ => None,
            })
            .unwrap_or(32)
    }
}

type_info_builders!(
    AbsoluteTimeType,
    AggregateType,
    ArrayType,
    BinaryType,
    BooleanType,
    EnumeratedType,
    FloatType,
    IntegerType,
    StringType,
);

// --- Union ---

#[derive(Debug, Clone, PartialEq)]
pub enum DataType {
    AbsoluteTime(AbsoluteTimeType),
    Aggregate(AggregateType),
    Array(ArrayType),
    Binary(BinaryType),
    Boolean(BooleanType),
    Enumerated(EnumeratedType),
    Float(FloatType),
    Integer(IntegerType),
    String(StringType),
}

impl DataType {
    pub fn info(&self) -> &TypeInfo {
        match self {
            DataType::AbsoluteTime(t) => &t.info,
            DataType::Aggregate(t) => &t.info,
            DataType::Array(t) => &t.info,
            DataType::Binary(t) => &t.info,
            DataType::Boolean(t) => &t.info,
            DataType::Enumerated(t) => &t.info,
            DataType::Float(t) => &t.info,
            DataType::Integer(t) => &t.info,
            DataType::String(t) => &t.info,
        }
    }

    pub fn info_mut(&mut self) -> &mut TypeInfo {
        match self {
            DataType::AbsoluteTime(t) => &mut t.info,
            DataType::Aggregate(t) => &mut t.info,
            DataType::Array(t) => &mut t.info,
            DataType::Binary(t) => &mut t.info,
            DataType::Boolean(t) => &mut t.info,
            DataType::Enumerated(t) => &mut t.info,
            DataType::Float(t) => &mut t.info,
            DataType::Integer(t) => &mut t.info,
            DataType::String(t) => &mut t.info,
        }
    }

    pub fn encoding(&self) -> Option<&Encoding> {
        self.info().encoding.as_ref()
    }

    /// Human readable kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            DataType::AbsoluteTime(_) => "absolute time",
            DataType::Aggregate(_) => "aggregate",
            DataType::Array(_) => "array",
            DataType::Binary(_) => "binary",
            DataType::Boolean(_) => "boolean",
            DataType::Enumerated(_) => "enumerated",
            DataType::Float(_) => "float",
            DataType::Integer(_) => "integer",
            DataType::String(_) => "string",
        }
    }

    /// Renders a literal the way this type presents it: booleans as their
    /// labels, integers on enumerations as the matching label.
    pub fn format_value(&self, value: &Value) -> Result<String, MdbError> {
        match (self, value) {
            (DataType::Boolean(t), Value::Bool(b)) => Ok(t.label(*b).to_string()),
            (DataType::Enumerated(t), Value::Integer(v)) => Ok(t.label_for(*v)?.to_string()),
            _ => Ok(value.to_xml_value()),
        }
    }
}

macro_rules! data_type_from {
    ($($variant:ident => $t:ty),* $(,)?) => {
        $(
            impl From<$t> for DataType {
                fn from(t: $t) -> Self {
                    DataType::$variant(t)
                }
            }
        )*
    };
}

data_type_from!(
    AbsoluteTime => AbsoluteTimeType,
    Aggregate => AggregateType,
    Array => ArrayType,
    Binary => BinaryType,
    Boolean => BooleanType,
    Enumerated => EnumeratedType,
    Float => FloatType,
    Integer => IntegerType,
    String => StringType,
);

/// A named field of an aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub name: String,
    pub initial_value: Option<Value>,
    pub data_type: DataType,
}

impl Member {
    pub fn new(name: impl Into<String>, data_type: impl Into<DataType>) -> Self {
        Self {
            name: name.into(),
            initial_value: None,
            data_type: data_type.into(),
        }
    }

    pub fn with_initial_value(mut self, value: impl Into<Value>) -> Self {
        self.initial_value = Some(value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encodings::{FLOAT64_T, UINT16_T, UINT8_T};

    #[test]
    fn test_label_for() {
        let t = EnumeratedType::new([(0, "HIGH"), (2, "LOW")]);
        assert_eq!(t.label_for(2).ok(), Some("LOW"));
        assert!(matches!(t.label_for(5), Err(MdbError::Lookup(_))));
    }

    #[test]
    fn test_choice_with_description() {
        let t = EnumeratedType::new([(1, "ON", "Powered")]);
        assert_eq!(t.choices[0].description.as_deref(), Some("Powered"));
    }

    #[test]
    fn test_find_member() {
        let agg = AggregateType::new(vec![
            Member::new("a", IntegerType::new().with_encoding(UINT8_T)),
            Member::new("b", BooleanType::new()),
        ]);
        assert_eq!(agg.find_member("b").map(|m| m.name.as_str()).ok(), Some("b"));
        assert!(matches!(agg.find_member("z"), Err(MdbError::Lookup(_))));
    }

    #[test]
    fn test_bits_follow_encoding_when_unset() {
        let t = IntegerType::unsigned().with_encoding(UINT16_T);
        assert_eq!(t.effective_bits(), 16);

        let explicit = IntegerType {
            bits: Some(64),
            ..IntegerType::new().with_encoding(UINT16_T)
        };
        assert_eq!(explicit.effective_bits(), 64);

        assert_eq!(IntegerType::new().effective_bits(), 32);
        assert_eq!(FloatType::new().with_encoding(FLOAT64_T).effective_bits(), 64);
    }

    #[test]
    fn test_format_value_uses_labels() {
        let b: DataType = BooleanType::labeled("Not Present", "Present").into();
        assert_eq!(b.format_value(&Value::Bool(true)).ok().as_deref(), Some("Present"));

        let e: DataType = EnumeratedType::new([(2, "LOW")]).into();
        assert_eq!(e.format_value(&Value::Integer(2)).ok().as_deref(), Some("LOW"));

        let i: DataType = IntegerType::new().into();
        assert_eq!(i.format_value(&Value::Integer(2)).ok().as_deref(), Some("2"));
    }

    #[derive(Clone, Copy)]
    enum Mode {
        Safe,
        Nominal,
    }

    impl ChoiceSource for Mode {
        fn variants() -> Vec<Self> {
            vec![Mode::Safe, Mode::Nominal]
        }
        fn value(&self) -> i64 {
            *self as i64
        }
        fn label(&self) -> &'static str {
            match self {
                Mode::Safe => "SAFE",
                Mode::Nominal => "NOMINAL",
            }
        }
    }

    #[test]
    fn test_choices_from_rust_enum() {
        let t = EnumeratedType::new(Mode::choices());
        assert_eq!(t.label_for(1).ok(), Some("NOMINAL"));
    }
}
