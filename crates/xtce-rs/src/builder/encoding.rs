// crates/xtce-rs/src/builder/encoding.rs

//! Contains builder functions for data encodings, calibrators and the inline
//! algorithms used by binary encodings and verifiers.

use super::format::format_float;
use super::{Context, build_ancillary_data_set};
use crate::algorithms::{InputParameter, UnnamedAlgorithm};
use crate::calibrators::Calibrator;
use crate::encodings::{
    BinaryEncoding, Encoding, FloatEncoding, FloatEncodingScheme, IntegerEncoding,
    IntegerEncodingScheme, StringEncoding,
};
use crate::error::MdbError;
use crate::model::algorithms::{AlgorithmText, InputAlgorithm, InputParameterInstanceRef, InputSet};
use crate::model::common::{DynamicValue, IntegerValue};
use crate::model::encoding::{
    BinaryDataEncoding, DataEncoding, DefaultCalibrator, FixedSize, FixedStringSize,
    FloatDataEncoding, IntegerDataEncoding, LeadingSize, PolynomialCalibrator, SplineCalibrator,
    SplinePoint, StringDataEncoding, Term, TimeEncoding, VariableStringSize,
};

/// Placeholder accepted by the processing system where the schema insists
/// on a dynamic size.
pub(super) const IGNORED_PARAMETER: &str = "_yamcs_ignore";

/// Converts an encoding, nesting `calibrator` inside numeric encodings.
pub(super) fn build_data_encoding(
    ctx: &Context<'_>,
    encoding: &Encoding,
    calibrator: Option<&Calibrator>,
) -> Result<DataEncoding, MdbError> {
    let default_calibrator = calibrator.map(build_calibrator).transpose()?;
    match encoding {
        Encoding::Integer(e) => Ok(DataEncoding::Integer(build_integer_encoding(
            e,
            default_calibrator,
        ))),
        Encoding::Float(e) => Ok(DataEncoding::Float(build_float_encoding(
            e,
            default_calibrator,
        ))),
        Encoding::IntegerTime(e) => Ok(DataEncoding::Time(TimeEncoding {
            offset: format_float(e.offset),
            scale: format_float(e.scale),
            units: "seconds".to_string(),
            raw: Box::new(DataEncoding::Integer(build_integer_encoding(&e.raw(), None))),
        })),
        Encoding::FloatTime(e) => Ok(DataEncoding::Time(TimeEncoding {
            offset: format_float(e.offset),
            scale: format_float(e.scale),
            units: "seconds".to_string(),
            raw: Box::new(DataEncoding::Float(build_float_encoding(&e.raw(), None))),
        })),
        Encoding::Binary(e) => Ok(DataEncoding::Binary(build_binary_encoding(ctx, e)?)),
        Encoding::String(e) => Ok(DataEncoding::String(build_string_encoding(e))),
    }
}

fn build_integer_encoding(
    encoding: &IntegerEncoding,
    default_calibrator: Option<DefaultCalibrator>,
) -> IntegerDataEncoding {
    let scheme = match encoding.scheme {
        IntegerEncodingScheme::Unsigned => "unsigned",
        IntegerEncodingScheme::SignMagnitude => "signMagnitude",
        IntegerEncodingScheme::TwosComplement => "twosComplement",
        IntegerEncodingScheme::OnesComplement => "onesComplement",
    };
    // Byte order is meaningless below two bytes.
    let byte_order = (encoding.bits > 8).then(|| byte_order(encoding.little_endian));
    IntegerDataEncoding {
        size_in_bits: encoding.bits,
        encoding: scheme.to_string(),
        byte_order,
        default_calibrator,
    }
}

fn build_float_encoding(
    encoding: &FloatEncoding,
    default_calibrator: Option<DefaultCalibrator>,
) -> FloatDataEncoding {
    let scheme = match encoding.scheme {
        FloatEncodingScheme::Ieee754_1985 => "IEEE754_1985",
        FloatEncodingScheme::MilStd1750A => "MILSTD_1750A",
    };
    FloatDataEncoding {
        size_in_bits: encoding.bits,
        encoding: scheme.to_string(),
        byte_order: byte_order(encoding.little_endian),
        default_calibrator,
    }
}

fn byte_order(little_endian: bool) -> String {
    if little_endian {
        "leastSignificantByteFirst".to_string()
    } else {
        "mostSignificantByteFirst".to_string()
    }
}

fn build_calibrator(calibrator: &Calibrator) -> Result<DefaultCalibrator, MdbError> {
    match calibrator {
        Calibrator::Polynomial(poly) => Ok(DefaultCalibrator {
            polynomial: Some(PolynomialCalibrator {
                terms: poly
                    .coefficients
                    .iter()
                    .enumerate()
                    .map(|(exponent, c)| Term {
                        coefficient: format_float(*c),
                        exponent: exponent as u32,
                    })
                    .collect(),
            }),
            spline: None,
        }),
        Calibrator::Interpolate(interp) => {
            interp.validate()?;
            Ok(DefaultCalibrator {
                polynomial: None,
                spline: Some(SplineCalibrator {
                    points: interp
                        .xp
                        .iter()
                        .zip(&interp.fp)
                        .map(|(x, f)| SplinePoint {
                            raw: format_float(*x),
                            calibrated: format_float(*f),
                        })
                        .collect(),
                }),
            })
        }
    }
}

fn build_binary_encoding(
    ctx: &Context<'_>,
    encoding: &BinaryEncoding,
) -> Result<BinaryDataEncoding, MdbError> {
    let mut model = BinaryDataEncoding::default();

    match encoding.bits {
        Some(bits) => model.size_in_bits = IntegerValue::fixed(i64::from(bits)),
        None => {
            model.size_in_bits = IntegerValue::dynamic(DynamicValue::of(IGNORED_PARAMETER));
            if let Some(length_bits) = encoding.length_bits {
                if encoding.encoder.is_some() {
                    return Err(MdbError::Export(
                        "It is not possible to have both an encoder and a leading-size binary"
                            .to_string(),
                    ));
                }
                if encoding.decoder.is_some() {
                    return Err(MdbError::Export(
                        "It is not possible to have both a decoder and a leading-size binary"
                            .to_string(),
                    ));
                }
                model.from_binary = Some(java_transform(
                    "LeadingSizeBinaryDecoder",
                    format!("org.yamcs.algo.LeadingSizeBinaryDecoder({})", length_bits),
                ));
                model.to_binary = Some(java_transform(
                    "LeadingSizeBinaryEncoder",
                    format!("org.yamcs.algo.LeadingSizeBinaryEncoder({})", length_bits),
                ));
            }
        }
    }

    if let Some(decoder) = &encoding.decoder {
        model.from_binary = Some(build_input_algorithm(ctx, decoder)?);
    }
    if let Some(encoder) = &encoding.encoder {
        model.to_binary = Some(build_input_algorithm(ctx, encoder)?);
    }
    Ok(model)
}

fn java_transform(name: &str, text: String) -> InputAlgorithm {
    InputAlgorithm {
        name: name.to_string(),
        ancillary_data_set: None,
        algorithm_text: AlgorithmText {
            language: "Java".to_string(),
            text,
        },
        input_set: None,
    }
}

fn build_string_encoding(encoding: &StringEncoding) -> StringDataEncoding {
    let termination_char = encoding.termination.as_ref().map(hex::encode);
    let leading_size = encoding.length_bits.map(|bits| LeadingSize {
        size_in_bits_of_size_tag: bits,
    });

    match encoding.bits {
        Some(bits) => StringDataEncoding {
            encoding: encoding.charset.as_str().to_string(),
            size_in_bits: Some(FixedStringSize {
                fixed: FixedSize { fixed_value: bits },
                termination_char,
                leading_size,
            }),
            variable: None,
        },
        None => StringDataEncoding {
            encoding: encoding.charset.as_str().to_string(),
            size_in_bits: None,
            variable: Some(VariableStringSize {
                max_size_in_bits: encoding.max_bits,
                dynamic_value: DynamicValue::of(IGNORED_PARAMETER),
                leading_size,
                termination_char,
            }),
        },
    }
}

/// `<InputSet>` of an algorithm, `None` without inputs.
pub(super) fn build_input_set(
    ctx: &Context<'_>,
    inputs: &[InputParameter],
) -> Result<Option<InputSet>, MdbError> {
    if inputs.is_empty() {
        return Ok(None);
    }
    let inputs = inputs
        .iter()
        .map(|input| {
            Ok(InputParameterInstanceRef {
                parameter_ref: ctx.parameter_ref(&input.parameter)?,
                input_name: input.name.clone(),
            })
        })
        .collect::<Result<Vec<_>, MdbError>>()?;
    Ok(Some(InputSet { inputs }))
}

/// An unnamed algorithm in its embedded form.
pub(super) fn build_input_algorithm(
    ctx: &Context<'_>,
    algorithm: &UnnamedAlgorithm,
) -> Result<InputAlgorithm, MdbError> {
    Ok(InputAlgorithm {
        name: "Unnamed".to_string(),
        ancillary_data_set: build_ancillary_data_set(&algorithm.extra),
        algorithm_text: AlgorithmText {
            language: algorithm.language.clone(),
            text: algorithm.text.clone(),
        },
        input_set: build_input_set(ctx, &algorithm.inputs)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calibrators::{Interpolate, Polynomial};
    use crate::encodings::{IntegerTimeEncoding, UINT8_T, UINT16LE_T};
    use crate::system::System;

    #[test]
    fn test_single_byte_integer_has_no_byte_order() {
        let root = System::new("Sat");
        let ctx = Context::new(&root);
        match build_data_encoding(&ctx, &UINT8_T, None).unwrap() {
            DataEncoding::Integer(e) => assert!(e.byte_order.is_none()),
            other => panic!("unexpected {:?}", other),
        }
        match build_data_encoding(&ctx, &UINT16LE_T, None).unwrap() {
            DataEncoding::Integer(e) => {
                assert_eq!(e.byte_order.as_deref(), Some("leastSignificantByteFirst"))
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_polynomial_terms_follow_coefficient_order() {
        let cal = build_calibrator(&Polynomial::new(vec![0.5, 2.0]).into()).unwrap();
        let terms = cal.polynomial.unwrap().terms;
        assert_eq!(terms[0].coefficient, "0.5");
        assert_eq!(terms[1].exponent, 1);
    }

    #[test]
    fn test_spline_is_validated() {
        let bad = Calibrator::Interpolate(Interpolate {
            xp: vec![1.0, 0.0],
            fp: vec![0.0, 1.0],
        });
        assert!(matches!(build_calibrator(&bad), Err(MdbError::Export(_))));
    }

    #[test]
    fn test_leading_size_with_decoder_is_rejected() {
        let root = System::new("Sat");
        let ctx = Context::new(&root);
        let enc = BinaryEncoding {
            decoder: Some(UnnamedAlgorithm::java("org.example.Decoder")),
            ..BinaryEncoding::leading_size(16)
        };
        let err = build_binary_encoding(&ctx, &enc).unwrap_err();
        assert!(err.to_string().contains("decoder and a leading-size binary"));
    }

    #[test]
    fn test_time_encoding_wraps_raw_encoding() {
        let root = System::new("Sat");
        let ctx = Context::new(&root);
        let enc = Encoding::IntegerTime(IntegerTimeEncoding {
            scale: 0.001,
            ..IntegerTimeEncoding::new(32)
        });
        match build_data_encoding(&ctx, &enc, None).unwrap() {
            DataEncoding::Time(t) => {
                assert_eq!(t.scale, "0.001");
                assert_eq!(t.offset, "0.0");
                assert!(matches!(*t.raw, DataEncoding::Integer(_)));
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
