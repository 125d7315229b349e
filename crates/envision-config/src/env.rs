use std::sync::OnceLock;

use regex::Regex;

/// Expand `{{ env.VAR }}` placeholders in raw config text
///
/// An optional fallback is supported via `{{ env.VAR | default("value") }}`;
/// without one, an unset variable is an error. Expansion happens on the raw
/// TOML before deserialization so config structs hold plain strings. Comment
/// lines are passed through untouched, letting commented-out examples
/// reference variables that are not set.
pub fn expand_env(input: &str) -> Result<String, String> {
    let mut output = String::with_capacity(input.len());

    for (i, line) in input.lines().enumerate() {
        if i > 0 {
            output.push('\n');
        }

        if line.trim_start().starts_with('#') {
            output.push_str(line);
        } else {
            output.push_str(&expand_line(line)?);
        }
    }

    if input.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}

fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Group 1: dotted key (e.g. `env.API_KEY`), group 2: optional default value
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*([a-zA-Z0-9_.]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#).expect("must be valid regex")
    })
}

fn expand_line(line: &str) -> Result<String, String> {
    let mut result = String::with_capacity(line.len());
    let mut last_end = 0;

    for captures in placeholder_re().captures_iter(line) {
        let overall = captures.get(0).expect("capture 0 always present");
        result.push_str(&line[last_end..overall.start()]);

        let key = captures.get(1).expect("key group always present").as_str();
        let fallback = captures.get(2).map(|m| m.as_str());

        let Some(("env", var_name)) = key.split_once('.') else {
            return Err(format!("only variables scoped with 'env.' are supported: `{key}`"));
        };

        match std::env::var(var_name) {
            Ok(value) => result.push_str(&value),
            Err(_) => match fallback {
                Some(value) => result.push_str(value),
                None => return Err(format!("environment variable not found: `{var_name}`")),
            },
        }

        last_end = overall.end();
    }

    result.push_str(&line[last_end..]);
    Ok(result)
}
