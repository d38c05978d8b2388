//! Project color enum.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Named color assigned to a project for client-side display.
///
/// The wire form is the lowercase color name; any other value is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProjectColor {
    Red,
    Orange,
    Yellow,
    Green,
    #[default]
    Blue,
    Purple,
    Gray,
}

impl ProjectColor {
    /// All allowed colors.
    pub const ALL: [ProjectColor; 7] = [
        ProjectColor::Red,
        ProjectColor::Orange,
        ProjectColor::Yellow,
        ProjectColor::Green,
        ProjectColor::Blue,
        ProjectColor::Purple,
        ProjectColor::Gray,
    ];

    /// Returns the lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectColor::Red => "red",
            ProjectColor::Orange => "orange",
            ProjectColor::Yellow => "yellow",
            ProjectColor::Green => "green",
            ProjectColor::Blue => "blue",
            ProjectColor::Purple => "purple",
            ProjectColor::Gray => "gray",
        }
    }
}

impl fmt::Display for ProjectColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProjectColor {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectColor::ALL
            .iter()
            .find(|c| c.as_str() == s.to_lowercase())
            .copied()
            .ok_or_else(|| {
                ValidationError::invalid_value("color", format!("'{}' is not an allowed color", s))
            })
    }
}
