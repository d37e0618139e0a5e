//! Remediation message templates.
//!
//! Each supported manager has a template record describing how to tell
//! the user to switch to it. Keeping the texts in one table keeps the
//! comparator free of per-manager branching.

use crate::manager::SupportedManager;

/// Help block appended for managers that may not be installed yet.
struct InstallHelp {
    /// Name as it reads in prose ("Yarn", not "yarn").
    prose_name: &'static str,
    /// Package to install globally when corepack is unavailable.
    package: &'static str,
    docs_url: &'static str,
    /// Pin the wanted version range in the install command.
    versioned_install: bool,
    /// Append a "Fix it by running ..." line to version mismatches.
    version_fix_hint: bool,
}

/// Per-manager remediation texts.
struct ManagerTemplate {
    instruction: &'static str,
    help: Option<InstallHelp>,
}

const NPM_TEMPLATE: ManagerTemplate = ManagerTemplate {
    instruction: "Use \"npm install\" for installation in this project",
    help: None,
};

const CNPM_TEMPLATE: ManagerTemplate = ManagerTemplate {
    instruction: "Use \"cnpm install\" for installation in this project",
    help: None,
};

const PNPM_TEMPLATE: ManagerTemplate = ManagerTemplate {
    instruction: "Use \"pnpm install\" for installation in this project.",
    help: Some(InstallHelp {
        prose_name: "pnpm",
        package: "pnpm",
        docs_url: "https://pnpm.js.org/",
        versioned_install: true,
        version_fix_hint: true,
    }),
};

const YARN_TEMPLATE: ManagerTemplate = ManagerTemplate {
    instruction: "Use \"yarn\" for installation in this project.",
    help: Some(InstallHelp {
        prose_name: "Yarn",
        package: "yarn",
        docs_url: "https://yarnpkg.com/",
        versioned_install: false,
        version_fix_hint: false,
    }),
};

fn template(manager: SupportedManager) -> &'static ManagerTemplate {
    match manager {
        SupportedManager::Npm => &NPM_TEMPLATE,
        SupportedManager::Cnpm => &CNPM_TEMPLATE,
        SupportedManager::Pnpm => &PNPM_TEMPLATE,
        SupportedManager::Yarn => &YARN_TEMPLATE,
    }
}

/// Message for a wanted manager outside the supported set.
pub fn invalid_manager(name: &str) -> String {
    format!(
        "\"{}\" is not a valid package manager. Available package managers are: {}.",
        name,
        supported_list()
    )
}

/// Message for an install run with the wrong manager.
pub fn mismatch(
    manager: SupportedManager,
    version_range: Option<&str>,
    node_major: Option<u32>,
) -> String {
    let template = template(manager);
    let mut message = template.instruction.to_string();
    if let Some(help) = &template.help {
        let range = if help.versioned_install { version_range } else { None };
        let command = install_command(help.package, range, node_major);
        message.push_str(&format!(
            "\n\nIf you don't have {}, install it via \"{}\".\nFor more details, go to {}",
            help.prose_name, command, help.docs_url
        ));
    }
    message
}

/// Message for the right manager at the wrong version.
pub fn version_mismatch(
    manager: SupportedManager,
    range: &str,
    actual: &str,
    node_major: Option<u32>,
) -> String {
    let mut message = format!(
        "Wrong version of {} installed, expected {} but got {}.",
        manager.name(),
        range,
        actual
    );
    if let Some(help) = template(manager)
        .help
        .as_ref()
        .filter(|h| h.version_fix_hint)
    {
        let command = install_command(help.package, Some(range), node_major);
        message.push_str(&format!("\n\nFix it by running \"{}\".", command));
    }
    message
}

/// Command for getting a manager onto the machine.
///
/// Node 14 shipped corepack, which provisions the manager declared in
/// the manifest by itself. Older or unknown runtimes get a direct
/// global install instead.
pub fn install_command(package: &str, version_range: Option<&str>, node_major: Option<u32>) -> String {
    if matches!(node_major, Some(major) if major >= 14) {
        return "corepack enable".to_string();
    }
    match version_range {
        Some(range) => format!("npm i -g {}@{}", package, range),
        None => format!("npm i -g {}", package),
    }
}

/// The supported set as prose: `npm, cnpm, pnpm, or yarn`.
fn supported_list() -> String {
    let names: Vec<&str> = SupportedManager::ALL.iter().map(|m| m.name()).collect();
    match names.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{}, or {}", rest.join(", "), last),
        Some((last, _)) => (*last).to_string(),
        None => String::new(),
    }
}
