// crates/xtce-rs/src/verifiers.rs

//! Command verifiers.

use crate::algorithms::UnnamedAlgorithm;
use crate::ancillary::AncillaryData;
use crate::expressions::Expression;
use crate::references::{ContainerRef, ParameterRef};

/// Overall command outcome decided by a verifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationAction {
    Success,
    Fail,
}

impl TerminationAction {
    pub fn as_str(self) -> &'static str {
        match self {
            TerminationAction::Success => "SUCCESS",
            TerminationAction::Fail => "FAIL",
        }
    }
}

/// Lifecycle stage checked by a verifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VerifierKind {
    TransferredToRange,
    SentFromRange,
    Received,
    Accepted,
    Queued,
    Execution,
    Complete,
    Failed,
}

impl VerifierKind {
    /// XTCE element name.
    pub fn element_name(self) -> &'static str {
        match self {
            VerifierKind::TransferredToRange => "TransferredToRangeVerifier",
            VerifierKind::SentFromRange => "SentFromRangeVerifier",
            VerifierKind::Received => "ReceivedVerifier",
            VerifierKind::Accepted => "AcceptedVerifier",
            VerifierKind::Queued => "QueuedVerifier",
            VerifierKind::Execution => "ExecutionVerifier",
            VerifierKind::Complete => "CompleteVerifier",
            VerifierKind::Failed => "FailedVerifier",
        }
    }
}

/// What a verifier looks at.
#[derive(Debug, Clone, PartialEq)]
pub enum Check {
    /// Reception of a container.
    Container(ContainerRef),
    /// A condition on parameter values.
    Expression(Expression),
    /// An inline algorithm.
    Algorithm(UnnamedAlgorithm),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Verifier {
    pub kind: VerifierKind,
    pub check: Check,
    /// Seconds after command release the check window closes.
    pub timeout: f64,
    /// Seconds after command release the check window opens.
    pub delay: f64,
    pub name: Option<String>,
    pub on_success: Option<TerminationAction>,
    pub on_fail: Option<TerminationAction>,
    pub on_timeout: Option<TerminationAction>,
    pub extra: AncillaryData,
    /// Only written for complete and failed verifiers.
    pub return_parameter: Option<ParameterRef>,
}

impl Verifier {
    /// Generic constructor. Every kind except `Failed` fails the command when
    /// the check fails; complete verifiers also succeed it when the check
    /// passes, and failed verifiers fail it when their check passes.
    pub fn new(kind: VerifierKind, check: Check, timeout: f64) -> Self {
        let (on_success, on_fail) = match kind {
            VerifierKind::Complete => (Some(TerminationAction::Success), Some(TerminationAction::Fail)),
            VerifierKind::Failed => (Some(TerminationAction::Fail), None),
            _ => (None, Some(TerminationAction::Fail)),
        };
        Self {
            kind,
            check,
            timeout,
            delay: 0.0,
            name: None,
            on_success,
            on_fail,
            on_timeout: None,
            extra: AncillaryData::new(),
            return_parameter: None,
        }
    }

    pub fn transferred_to_range(check: Check, timeout: f64) -> Self {
        Self::new(VerifierKind::TransferredToRange, check, timeout)
    }

    pub fn sent_from_range(check: Check, timeout: f64) -> Self {
        Self::new(VerifierKind::SentFromRange, check, timeout)
    }

    pub fn received(check: Check, timeout: f64) -> Self {
        Self::new(VerifierKind::Received, check, timeout)
    }

    pub fn accepted(check: Check, timeout: f64) -> Self {
        Self::new(VerifierKind::Accepted, check, timeout)
    }

    pub fn queued(check: Check, timeout: f64) -> Self {
        Self::new(VerifierKind::Queued, check, timeout)
    }

    pub fn execution(check: Check, timeout: f64) -> Self {
        Self::new(VerifierKind::Execution, check, timeout)
    }

    pub fn complete(check: Check, timeout: f64) -> Self {
        Self::new(VerifierKind::Complete, check, timeout)
    }

    pub fn failed(check: Check, timeout: f64) -> Self {
        Self::new(VerifierKind::Failed, check, timeout)
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn on_success(mut self, action: Option<TerminationAction>) -> Self {
        self.on_success = action;
        self
    }

    pub fn on_fail(mut self, action: Option<TerminationAction>) -> Self {
        self.on_fail = action;
        self
    }

    pub fn on_timeout(mut self, action: Option<TerminationAction>) -> Self {
        self.on_timeout = action;
        self
    }

    /// Parameter carrying the command result. Only complete and failed
    /// verifiers write it; other kinds ignore it.
    pub fn with_return_parameter(mut self, parameter: impl Into<ParameterRef>) -> Self {
        self.return_parameter = Some(parameter.into());
        self
    }

    /// True if any outcome of this verifier completes the command successfully.
    pub fn can_succeed(&self) -> bool {
        [self.on_success, self.on_fail, self.on_timeout]
            .contains(&Some(TerminationAction::Success))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check() -> Check {
        Check::Container(ContainerRef::by_path("/Sat/ack"))
    }

    #[test]
    fn test_kind_defaults() {
        let received = Verifier::received(check(), 5.0);
        assert_eq!(received.on_fail, Some(TerminationAction::Fail));
        assert_eq!(received.on_success, None);

        let complete = Verifier::complete(check(), 5.0);
        assert_eq!(complete.on_success, Some(TerminationAction::Success));
        assert_eq!(complete.on_fail, Some(TerminationAction::Fail));

        let failed = Verifier::failed(check(), 5.0);
        assert_eq!(failed.on_success, Some(TerminationAction::Fail));
        assert_eq!(failed.on_fail, None);
    }

    #[test]
    fn test_can_succeed() {
        assert!(Verifier::complete(check(), 1.0).can_succeed());
        assert!(!Verifier::accepted(check(), 1.0).can_succeed());
        assert!(
            Verifier::accepted(check(), 1.0)
                .on_timeout(Some(TerminationAction::Success))
                .can_succeed()
        );
    }
}
