use crate::board::Rules;

use super::ProtocolError;

/// Settings adjustable through `setoption`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EngineOptions {
    pub rules: Rules,
}

impl EngineOptions {
    #[must_use]
    pub fn new(rules: Rules) -> Self {
        EngineOptions { rules }
    }

    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "option name FriendlyHop type check value {}",
            self.rules.friendly_hop
        )
    }

    pub fn apply_setoption(&mut self, name: &str, value: Option<&str>) -> Result<(), ProtocolError> {
        let normalized = name.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "friendlyhop" | "friendly hop" => {
                self.rules.friendly_hop = parse_check(name, value)?;
                Ok(())
            }
            _ => Err(ProtocolError::UnknownOption {
                name: name.to_string(),
            }),
        }
    }
}

fn parse_check(name: &str, value: Option<&str>) -> Result<bool, ProtocolError> {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("true" | "1" | "on") => Ok(true),
        Some("false" | "0" | "off") => Ok(false),
        _ => Err(ProtocolError::InvalidOptionValue {
            name: name.to_string(),
            value: value.unwrap_or_default().to_string(),
        }),
    }
}

/// Split `setoption name <name...> value <value...>` into its name and value.
#[must_use]
pub fn parse_setoption(parts: &[&str]) -> Option<(String, Option<String>)> {
    let (&first, rest) = parts.split_first()?;
    if first != "setoption" {
        return None;
    }

    let name_at = rest.iter().position(|&p| p == "name")?;
    let value_at = rest
        .iter()
        .position(|&p| p == "value")
        .filter(|&at| at > name_at);

    let name = rest[name_at + 1..value_at.unwrap_or(rest.len())].join(" ");
    if name.is_empty() {
        return None;
    }
    let value = value_at
        .map(|at| rest[at + 1..].join(" "))
        .filter(|v| !v.is_empty());

    Some((name, value))
}
