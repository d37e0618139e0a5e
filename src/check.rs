//! The comparison decision tree.
//!
//! Pure function of its inputs; the caller is responsible for printing
//! the failure message and choosing the exit code.

use crate::context::ExecutionContext;
use crate::manager::{PackageManagerSpec, SupportedManager, UsedPackageManager};
use crate::messages;
use crate::version;

/// Result of checking the used manager against the wanted one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Everything in order; stay silent and exit zero.
    Pass,
    /// Policy violated; the message tells the user how to comply.
    Fail(String),
}

/// Compare the wanted manager against the one actually running us.
pub fn compare(
    wanted: &PackageManagerSpec,
    used: Option<&UsedPackageManager>,
    ctx: &ExecutionContext,
) -> Outcome {
    // Installed as someone else's dependency: their users are not bound
    // by our package manager policy.
    if ctx.is_dependency_install {
        return Outcome::Pass;
    }

    let Some(manager) = SupportedManager::from_name(&wanted.name) else {
        return Outcome::Fail(messages::invalid_manager(&wanted.name));
    };

    // Nothing detectable is running us (direct invocation, unsupported
    // launcher). Not a violation.
    let Some(used) = used else {
        return Outcome::Pass;
    };

    if used.name != manager.name() {
        return Outcome::Fail(messages::mismatch(
            manager,
            wanted.version_range.as_deref(),
            ctx.node_major,
        ));
    }

    if let Some(range) = wanted.version_range.as_deref() {
        if !version::range_satisfied(range, &used.version) {
            return Outcome::Fail(messages::version_mismatch(
                manager,
                range,
                &used.version,
                ctx.node_major,
            ));
        }
    }

    Outcome::Pass
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wanted(name: &str, range: Option<&str>) -> PackageManagerSpec {
        PackageManagerSpec::new(name, range.map(String::from))
    }

    fn used(name: &str, version: &str) -> UsedPackageManager {
        UsedPackageManager {
            name: name.to_string(),
            version: version.to_string(),
        }
    }

    fn ctx() -> ExecutionContext {
        ExecutionContext::default()
    }

    #[test]
    fn matching_manager_without_range_passes() {
        for manager in SupportedManager::ALL {
            let outcome = compare(
                &wanted(manager.name(), None),
                Some(&used(manager.name(), "1.0.0")),
                &ctx(),
            );
            assert_eq!(outcome, Outcome::Pass, "{} should pass", manager);
        }
    }

    #[test]
    fn different_manager_fails_with_wanted_instruction() {
        let outcome = compare(&wanted("pnpm", None), Some(&used("npm", "9.0.0")), &ctx());
        match outcome {
            Outcome::Fail(message) => {
                assert!(message.contains("Use \"pnpm install\" for installation in this project"));
            }
            Outcome::Pass => panic!("npm running against a pnpm policy should fail"),
        }
    }

    #[test]
    fn every_cross_pair_fails() {
        for wanted_manager in SupportedManager::ALL {
            for used_manager in SupportedManager::ALL {
                if wanted_manager == used_manager {
                    continue;
                }
                let outcome = compare(
                    &wanted(wanted_manager.name(), None),
                    Some(&used(used_manager.name(), "1.0.0")),
                    &ctx(),
                );
                assert!(
                    matches!(outcome, Outcome::Fail(_)),
                    "{} under {} should fail",
                    wanted_manager,
                    used_manager
                );
            }
        }
    }

    #[test]
    fn unsupported_wanted_name_fails_regardless_of_used() {
        let outcome = compare(&wanted("bun", None), Some(&used("bun", "1.0.0")), &ctx());
        match outcome {
            Outcome::Fail(message) => {
                assert!(message.contains("\"bun\" is not a valid package manager"));
                assert!(message.contains("npm, cnpm, pnpm, or yarn"));
            }
            Outcome::Pass => panic!("unsupported manager name should fail"),
        }
    }

    #[test]
    fn unsupported_wanted_name_fails_even_when_undetectable() {
        let outcome = compare(&wanted("bun", None), None, &ctx());
        match outcome {
            Outcome::Fail(message) => {
                assert!(message.contains("\"bun\" is not a valid package manager"));
            }
            Outcome::Pass => panic!("validity check must precede the absent-used pass"),
        }
    }

    #[test]
    fn dependency_install_passes_no_matter_what() {
        let ctx = ExecutionContext {
            is_dependency_install: true,
            node_major: None,
        };
        assert_eq!(
            compare(&wanted("bun", None), Some(&used("npm", "9.0.0")), &ctx),
            Outcome::Pass
        );
        assert_eq!(
            compare(&wanted("pnpm", Some("^7.0.0")), Some(&used("pnpm", "6.0.0")), &ctx),
            Outcome::Pass
        );
    }

    #[test]
    fn undetectable_used_manager_passes() {
        assert_eq!(compare(&wanted("pnpm", Some("^7.0.0")), None, &ctx()), Outcome::Pass);
        assert_eq!(compare(&wanted("yarn", None), None, &ctx()), Outcome::Pass);
    }

    #[test]
    fn version_below_range_fails_with_expected_and_actual() {
        let outcome = compare(
            &wanted("pnpm", Some("^7.0.0")),
            Some(&used("pnpm", "6.9.0")),
            &ctx(),
        );
        match outcome {
            Outcome::Fail(message) => {
                assert!(message.contains("expected ^7.0.0 but got 6.9.0"));
            }
            Outcome::Pass => panic!("pnpm 6.9.0 should not satisfy ^7.0.0"),
        }
    }

    #[test]
    fn version_inside_range_passes() {
        let outcome = compare(
            &wanted("pnpm", Some("^7.0.0")),
            Some(&used("pnpm", "7.2.1")),
            &ctx(),
        );
        assert_eq!(outcome, Outcome::Pass);
    }

    #[test]
    fn name_mismatch_wins_over_version_mismatch() {
        let outcome = compare(
            &wanted("pnpm", Some("^7.0.0")),
            Some(&used("yarn", "1.22.0")),
            &ctx(),
        );
        match outcome {
            Outcome::Fail(message) => {
                assert!(message.contains("Use \"pnpm install\""));
                assert!(!message.contains("Wrong version"));
            }
            Outcome::Pass => panic!("yarn under a pnpm policy should fail"),
        }
    }

    #[test]
    fn unparseable_range_fails_as_version_mismatch() {
        let outcome = compare(
            &wanted("pnpm", Some("not-a-range")),
            Some(&used("pnpm", "7.0.0")),
            &ctx(),
        );
        match outcome {
            Outcome::Fail(message) => {
                assert!(message.contains("expected not-a-range but got 7.0.0"));
            }
            Outcome::Pass => panic!("an unsatisfiable range should never pass"),
        }
    }

    #[test]
    fn normalized_cnpm_detection_matches_cnpm_policy() {
        let outcome = compare(&wanted("cnpm", None), Some(&used("cnpm", "3.28.0")), &ctx());
        assert_eq!(outcome, Outcome::Pass);
    }
}
