//! Water body shape categories.
//!
//! Shape is carried alongside every calculation but never changes the zone
//! classification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    #[default]
    Circle,
    Oval,
    River,
    Triangle,
    Irregular,
}

const DISPLAY_NAMES: [&str; 5] = ["Circle", "Oval", "River", "Triangle", "Irregular"];

const TAGS: [&str; 5] = ["circle", "oval", "river", "triangle", "irregular"];

const DESCRIPTIONS: [&str; 5] = [
    "Round pond or lake",
    "Oval shaped lake",
    "Long narrow water body",
    "Triangular reservoir",
    "Complex shoreline",
];

impl Shape {
    pub const ALL: [Shape; 5] = [
        Shape::Circle,
        Shape::Oval,
        Shape::River,
        Shape::Triangle,
        Shape::Irregular,
    ];

    fn index(self) -> usize {
        self as usize
    }

    pub fn display_name(self) -> &'static str {
        DISPLAY_NAMES[self.index()]
    }

    pub fn tag(self) -> &'static str {
        TAGS[self.index()]
    }

    pub fn description(self) -> &'static str {
        DESCRIPTIONS[self.index()]
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Shape {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Shape::ALL
            .iter()
            .copied()
            .find(|sh| sh.tag().eq_ignore_ascii_case(tag))
            .ok_or_else(|| ParseError::Shape(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_shapes_count() {
        assert_eq!(Shape::ALL.len(), 5);
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(Shape::River.description(), "Long narrow water body");
        assert_eq!(Shape::Irregular.display_name(), "Irregular");
    }

    #[test]
    fn test_parse_tags() {
        for s in Shape::ALL {
            assert_eq!(s.tag().parse::<Shape>(), Ok(s));
        }
        assert_eq!(
            "square".parse::<Shape>(),
            Err(ParseError::Shape("square".to_string()))
        );
    }
}
