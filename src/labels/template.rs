//! Label template expansion

use super::{validate, FormState};
use std::fmt;

/// Number of labels produced for a valid form
pub const LABEL_COUNT: usize = 5;

/// Separator between clauses of the router rule
const RULE_SEPARATOR: &str = " || ";

/// Which half of a label a copy action targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelToken {
    #[default]
    Key,
    Value,
}

impl LabelToken {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Key => Self::Value,
            Self::Value => Self::Key,
        };
    }
}

/// A single docker label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
}

impl ConfigEntry {
    /// Get the key or value text, verbatim
    pub fn token(&self, token: LabelToken) -> &str {
        match token {
            LabelToken::Key => &self.key,
            LabelToken::Value => &self.value,
        }
    }
}

impl fmt::Display for ConfigEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}

/// Expand a form into the fixed label set.
///
/// Returns an empty vector when the form does not validate. Each template
/// line is split on its first colon, so a colon inside `app_name` ends up
/// splitting the key path.
pub fn expand(state: &FormState) -> Vec<ConfigEntry> {
    if !validate(state) {
        return Vec::new();
    }

    render_lines(state)
        .iter()
        .map(String::as_str)
        .map(split_line)
        .collect()
}

/// Render every label as `key: value`, one per line
pub fn export_all(entries: &[ConfigEntry]) -> String {
    entries
        .iter()
        .map(ConfigEntry::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// One `key:value` line per label; values may contain any character
fn render_lines(state: &FormState) -> [String; LABEL_COUNT] {
    let app = &state.app_name;
    let rule = host_rule(&state.domains);

    [
        "traefik.enable:true".to_string(),
        format!("traefik.http.routers.{app}.entrypoints:websecure"),
        format!("traefik.http.routers.{app}.rule:{rule}"),
        format!("traefik.http.routers.{app}.tls.certresolver:myresolver"),
        format!("traefik.http.services.{app}.loadbalancer.server.port:80"),
    ]
}

fn split_line(line: &str) -> ConfigEntry {
    let (key, value) = line.split_once(':').unwrap_or((line, ""));
    ConfigEntry {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn host_rule(domains: &[String]) -> String {
    domains
        .iter()
        .map(|d| format!("Host(`{d}`)"))
        .collect::<Vec<_>>()
        .join(RULE_SEPARATOR)
}
