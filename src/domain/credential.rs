use std::fmt;

const KEY_PREFIX: &str = "AIza";
const KEY_BODY_LEN: usize = 35;

/// API key supplied by the user.
///
/// Always trimmed and non-empty. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Returns `None` for empty or whitespace-only input.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() { None } else { Some(Self(trimmed.to_string())) }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Advisory check against the provider's key shape: `AIza` followed by
    /// 35 alphanumeric, `-` or `_` characters.
    pub fn has_expected_format(&self) -> bool {
        let Some(body) = self.0.strip_prefix(KEY_PREFIX) else {
            return false;
        };
        body.len() == KEY_BODY_LEN
            && body.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    }

    /// Short non-secret hint for status output, e.g. `AIza…wxyz`.
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 8 {
            return "*".repeat(chars.len());
        }
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}…{}", head, tail)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}
