// crates/xtce-rs/src/algorithms.rs

//! Custom algorithms, both named (registered in a system) and the inline
//! unnamed form used by verifiers and binary encodings.

use crate::ancillary::{AncillaryData, Aliases};
use crate::references::{ContainerRef, ParameterRef};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputParameter {
    pub parameter: ParameterRef,
    /// Name under which the algorithm sees the value.
    pub name: Option<String>,
    /// The algorithm does not run until a value is available.
    pub required: bool,
}

impl InputParameter {
    pub fn new(parameter: impl Into<ParameterRef>) -> Self {
        Self {
            parameter: parameter.into(),
            name: None,
            required: false,
        }
    }

    pub fn named(parameter: impl Into<ParameterRef>, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(parameter)
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputParameter {
    pub parameter: ParameterRef,
    pub name: Option<String>,
}

impl OutputParameter {
    pub fn new(parameter: impl Into<ParameterRef>) -> Self {
        Self {
            parameter: parameter.into(),
            name: None,
        }
    }

    pub fn named(parameter: impl Into<ParameterRef>, name: impl Into<String>) -> Self {
        Self {
            parameter: parameter.into(),
            name: Some(name.into()),
        }
    }
}

/// When an algorithm runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    OnParameterUpdate(ParameterRef),
    OnContainerUpdate(ContainerRef),
}

/// A named algorithm registered in a system.
#[derive(Debug, Clone, PartialEq)]
pub struct Algorithm {
    pub name: String,
    pub aliases: Aliases,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub extra: AncillaryData,
    pub language: String,
    pub text: String,
    pub inputs: Vec<InputParameter>,
    pub outputs: Vec<OutputParameter>,
    pub triggers: Vec<Trigger>,
}

impl Algorithm {
    pub fn new(
        name: impl Into<String>,
        language: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            aliases: Aliases::new(),
            short_description: None,
            long_description: None,
            extra: AncillaryData::new(),
            language: language.into(),
            text: text.into(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            triggers: Vec::new(),
        }
    }

    pub fn with_input(mut self, input: InputParameter) -> Self {
        self.inputs.push(input);
        self
    }

    pub fn with_output(mut self, output: OutputParameter) -> Self {
        self.outputs.push(output);
        self
    }

    pub fn with_trigger(mut self, trigger: Trigger) -> Self {
        self.triggers.push(trigger);
        self
    }

    pub fn with_short_description(mut self, text: impl Into<String>) -> Self {
        self.short_description = Some(text.into());
        self
    }
}

/// An inline algorithm without its own identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnnamedAlgorithm {
    pub language: String,
    pub text: String,
    pub inputs: Vec<InputParameter>,
    pub extra: AncillaryData,
}

impl UnnamedAlgorithm {
    pub fn new(language: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            text: text.into(),
            inputs: Vec::new(),
            extra: AncillaryData::new(),
        }
    }

    pub fn java(text: impl Into<String>) -> Self {
        Self::new("Java", text)
    }

    pub fn javascript(text: impl Into<String>) -> Self {
        Self::new("JavaScript", text)
    }

    pub fn with_input(mut self, input: InputParameter) -> Self {
        self.inputs.push(input);
        self
    }
}

/// Decodes binary data to a hex string.
pub fn hex_string_decoder() -> UnnamedAlgorithm {
    UnnamedAlgorithm::java("org.yamcs.algo.HexStringDecoder")
}

/// Consumes whatever remains of the packet.
pub fn remaining_binary_decoder() -> UnnamedAlgorithm {
    UnnamedAlgorithm::java("org.yamcs.algo.RemainingBinaryDecoder")
}

/// Reverses the byte order while decoding.
pub fn reverse_binary_decoder() -> UnnamedAlgorithm {
    UnnamedAlgorithm::java("org.yamcs.algo.ReverseBinaryDecoder")
}

/// Reverses the byte order while encoding.
pub fn reverse_binary_encoder() -> UnnamedAlgorithm {
    UnnamedAlgorithm::java("org.yamcs.algo.ReverseBinaryEncoder")
}
