// SPDX-License-Identifier: MPL-2.0
//! Workspace mode.

use std::fmt;
use std::str::FromStr;

/// Whether prompts edit the current image or create new ones from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Edit,
    Create,
}

impl Mode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Edit => "edit",
            Mode::Create => "create",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "edit" => Ok(Mode::Edit),
            "create" => Ok(Mode::Create),
            other => Err(format!("unknown mode '{other}' (use edit or create)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Create".parse::<Mode>(), Ok(Mode::Create));
        assert_eq!(" edit ".parse::<Mode>(), Ok(Mode::Edit));
        assert!("paint".parse::<Mode>().is_err());
    }

    #[test]
    fn default_is_edit() {
        assert_eq!(Mode::default(), Mode::Edit);
        assert_eq!(Mode::Create.to_string(), "create");
    }
}
