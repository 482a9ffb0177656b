//! Starter configuration written by `folio init`.
//!
//! The templates live beside the crate as real TOML so they stay parseable. `folio init` writes
//! them with every setting commented out, leaving a file that changes nothing until edited.

/// Template for a project-local `.folio.toml`.
const LOCAL_TEMPLATE: &str = include_str!("../templates/config.toml");

/// Template for `~/.folio.toml`.
const GLOBAL_TEMPLATE: &str = include_str!("../templates/config-global.toml");

/// Returns the project-local starter configuration.
pub fn local_template() -> String {
    disable_settings(LOCAL_TEMPLATE)
}

/// Returns the global starter configuration.
pub fn global_template() -> String {
    disable_settings(GLOBAL_TEMPLATE)
}

/// Comments out every setting and table header, keeping blank lines and existing comments.
fn disable_settings(template: &str) -> String {
    template
        .lines()
        .map(|line| {
            if line.is_empty() || line.starts_with('#') {
                format!("{line}\n")
            } else {
                format!("# {line}\n")
            }
        })
        .collect()
}
