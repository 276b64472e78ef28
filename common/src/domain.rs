//! # Scan Target
//!
//! The domain handed to every external tool. It doubles as the name of the
//! output directory, so it is kept byte-for-byte as the user typed it and must
//! name exactly one path component below the output root.

use std::fmt;
use std::path::{Component, Path};
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Domain(String);

impl Domain {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Domain {
    type Err = String;

    /// Accepts any non-blank string that is a single plain file name.
    ///
    /// Absolute paths, separators, `.` and `..` are rejected, since joining
    /// them onto the output root would land outside of it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err("domain must not be empty".to_owned());
        }

        let mut components = Path::new(s).components();
        let single_name = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if !single_name || s.contains(['/', '\\']) {
            return Err(format!("`{s}` is a path, not a domain"));
        }

        Ok(Self(s.to_owned()))
    }
}

impl AsRef<str> for Domain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
