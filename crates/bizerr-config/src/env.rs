use std::{borrow::Cow, sync::OnceLock};

use regex::{Captures, Regex};

/// Substitute `{{ env.VAR }}` placeholders in raw configuration text
///
/// `{{ env.VAR | default("value") }}` falls back to `value` when `VAR` is
/// unset. Comment lines are copied verbatim so commented-out entries never
/// require their variables.
pub fn expand_env(input: &str) -> anyhow::Result<String> {
    let lines = input
        .split_inclusive('\n')
        .map(|line| {
            if line.trim_start().starts_with('#') {
                Ok(Cow::Borrowed(line))
            } else {
                expand_line(line)
            }
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(lines.concat())
}

fn placeholder() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    // 1: scoped key, 2: optional default
    PLACEHOLDER.get_or_init(|| {
        Regex::new(r#"\{\{\s*([A-Za-z0-9_.]+)\s*(?:\|\s*default\("([^"]*)"\)\s*)?\}\}"#)
            .expect("placeholder pattern must compile")
    })
}

fn expand_line(line: &str) -> anyhow::Result<Cow<'_, str>> {
    let mut failure = None;

    let expanded = placeholder().replace_all(line, |captures: &Captures<'_>| {
        let default = captures.get(2).map(|m| m.as_str());

        lookup(&captures[1], default).unwrap_or_else(|e| {
            failure.get_or_insert(e);
            String::new()
        })
    });

    match failure {
        Some(e) => Err(e),
        None => Ok(expanded),
    }
}

fn lookup(key: &str, default: Option<&str>) -> anyhow::Result<String> {
    let var = key
        .strip_prefix("env.")
        .filter(|var| !var.is_empty() && !var.contains('.'))
        .ok_or_else(|| anyhow::anyhow!("only `env.` placeholders are supported: `{key}`"))?;

    match std::env::var(var) {
        Ok(value) => Ok(value),
        Err(_) => default
            .map(str::to_owned)
            .ok_or_else(|| anyhow::anyhow!("environment variable not set: `{var}`")),
    }
}
