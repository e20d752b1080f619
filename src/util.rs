use std::fmt;

use regex::Regex;

lazy_static::lazy_static! {
    static ref IDENTIFIER_RE: Regex =
        Regex::new(r"^([A-Za-z\d_.-]+):([A-Za-z\d_./-]+)$").unwrap();
}

/// A namespaced `namespace:path` identifier, the conventional shape of
/// plugin ids ("HytaleOne:Query").
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    namespace: String,
    path: String,
}

impl Identifier {
    /// Splits a `namespace:path` string, or None when it does not have that
    /// shape.
    pub fn parse<S: AsRef<str>>(text: S) -> Option<Self> {
        let captures = IDENTIFIER_RE.captures(text.as_ref())?;
        Some(Self {
            namespace: captures.get(1)?.as_str().to_string(),
            path: captures.get(2)?.as_str().to_string(),
        })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}
