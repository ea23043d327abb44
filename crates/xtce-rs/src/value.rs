// crates/xtce-rs/src/value.rs

//! Literal values used for initial values, argument defaults, assignments and
//! comparison operands.

use core::fmt;

/// A literal attached to the model.
///
/// Values are rendered into XTCE attributes through [`Value::to_xml_value`].
/// Booleans and integers may be rendered differently when the receiving data
/// type is known (boolean labels, enumeration labels); that decision belongs
/// to the generator.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Binary(Vec<u8>),
    /// The symbolic name of an enum-like constant.
    Symbol(String),
}

impl Value {
    /// Converts the value to its XTCE attribute text.
    ///
    /// Binary values become lowercase hex and booleans `true`/`false`.
    /// Floats always carry a fractional part (`1.0`).
    pub fn to_xml_value(&self) -> String {
        match self {
            Value::Bool(true) => "true".to_string(),
            Value::Bool(false) => "false".to_string(),
            Value::Integer(v) => v.to_string(),
            Value::Float(v) => format!("{:?}", v),
            Value::String(s) | Value::Symbol(s) => s.clone(),
            Value::Binary(bytes) => hex::encode(bytes),
        }
    }

    /// Creates a symbolic value, e.g. the name of an enumeration constant.
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_xml_value())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

macro_rules! integer_value {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Integer(i64::from(v))
                }
            }
        )*
    };
}

integer_value!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Binary(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Binary(v.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_is_lower_hex() {
        assert_eq!(Value::from(vec![0xAB, 0x01]).to_xml_value(), "ab01");
    }

    #[test]
    fn test_bool_and_symbol() {
        assert_eq!(Value::from(true).to_xml_value(), "true");
        assert_eq!(Value::from(false).to_xml_value(), "false");
        assert_eq!(Value::symbol("NORMAL").to_xml_value(), "NORMAL");
    }

    #[test]
    fn test_numbers_use_display() {
        assert_eq!(Value::from(7).to_xml_value(), "7");
        assert_eq!(Value::from(-3i64).to_xml_value(), "-3");
        assert_eq!(Value::from(1.5).to_xml_value(), "1.5");
        assert_eq!(Value::from(2.0).to_xml_value(), "2.0");
    }
}
