// crates/xtce-rs-lint/src/verifiers.rs

use log::warn;
use xtce_rs::System;
use xtce_rs::verifiers::Verifier;

/// Checks that every concrete command has at least one verifier that ends
/// the command successfully, whichever way its check resolves.
///
/// Abstract commands are skipped; verifiers are not inherited from base
/// commands.
pub fn check_complete_verifiers(system: &System) -> bool {
    let mut ok = true;
    crate::walk(system, &mut |system: &System| {
        for command in system.commands().filter(|c| !c.is_abstract) {
            if !command.verifiers().into_iter().any(Verifier::can_succeed) {
                warn!(
                    "Command {}/{} has no verifier that can complete the command successfully",
                    system.qualified_name(),
                    command.name
                );
                ok = false;
            }
        }
    });
    ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use xtce_rs::Command;
    use xtce_rs::expressions::eq;
    use xtce_rs::verifiers::{Check, TerminationAction};

    fn check() -> Check {
        Check::Expression(eq("/Sat/status", 1))
    }

    #[test]
    fn test_complete_verifier_succeeds() {
        let mut sat = System::new("Sat");
        sat.add_command(Command::new("ok").with_verifier(Verifier::complete(check(), 10.0)))
            .unwrap();
        assert!(check_complete_verifiers(&sat));
    }

    #[test]
    fn test_accepted_only_is_reported() {
        let mut sat = System::new("Sat");
        sat.add_command(Command::new("bad").with_verifier(Verifier::accepted(check(), 10.0)))
            .unwrap();
        assert!(!check_complete_verifiers(&sat));
    }

    #[test]
    fn test_timeout_success_counts() {
        let mut sat = System::new("Sat");
        let verifier =
            Verifier::execution(check(), 5.0).on_timeout(Some(TerminationAction::Success));
        sat.add_command(Command::new("wait").with_verifier(verifier))
            .unwrap();
        assert!(check_complete_verifiers(&sat));
    }

    #[test]
    fn test_abstract_commands_are_skipped() {
        let mut sat = System::new("Sat");
        sat.add_command(Command::new("base").as_abstract()).unwrap();
        assert!(check_complete_verifiers(&sat));
    }
}
