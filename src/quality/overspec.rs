//! Over-specification detection.
//!
//! Each rule is an independent named predicate; a prompt is over-specified
//! when any of them matches.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

static BARE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d+\b").expect("Invalid regex for bare numbers"));

static SIZING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:radius|diameter|height|width|depth|×|x)\b")
        .expect("Invalid regex for sizing keywords")
});

static COORDINATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b[xyz]\s*=\s*-?\d+").expect("Invalid regex for coordinates")
});

/// Block names the model is told not to mention.
pub const BUILDING_MATERIALS: &[&str] = &[
    "terracotta",
    "quartz",
    "glass",
    "wool",
    "concrete",
    "prismarine",
    "andesite",
    "stone",
    "sandstone",
    "redstone",
    "glowstone",
    "lantern",
    "beacon",
    "piston",
    "cobblestone",
];

static BUILDING_MATERIAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b(?:{})\b", BUILDING_MATERIALS.join("|")))
        .expect("Invalid regex for building materials")
});

/// A single over-specification rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverSpecRule {
    /// A standalone integer such as `5` or `128`.
    BareNumber,
    /// A sizing keyword: radius, diameter, height, width, depth, `×` or `x`.
    Sizing,
    /// An axis assignment such as `y=64` or `X = -12`.
    Coordinate,
    /// A named block material such as `quartz` or `cobblestone`.
    BuildingMaterial,
}

impl OverSpecRule {
    /// All rules, in evaluation order.
    pub const ALL: [OverSpecRule; 4] = [
        OverSpecRule::BareNumber,
        OverSpecRule::Sizing,
        OverSpecRule::Coordinate,
        OverSpecRule::BuildingMaterial,
    ];

    fn pattern(&self) -> &'static Regex {
        match self {
            OverSpecRule::BareNumber => &BARE_NUMBER,
            OverSpecRule::Sizing => &SIZING,
            OverSpecRule::Coordinate => &COORDINATE,
            OverSpecRule::BuildingMaterial => &BUILDING_MATERIAL,
        }
    }

    /// Returns true if this rule matches anywhere in `text`.
    pub fn matches(&self, text: &str) -> bool {
        self.pattern().is_match(text)
    }

    /// Returns the first rule that matches `text`, if any.
    pub fn first_match(text: &str) -> Option<OverSpecRule> {
        Self::ALL.into_iter().find(|rule| rule.matches(text))
    }
}

impl fmt::Display for OverSpecRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OverSpecRule::BareNumber => "bare number",
            OverSpecRule::Sizing => "sizing keyword",
            OverSpecRule::Coordinate => "coordinate",
            OverSpecRule::BuildingMaterial => "building material",
        };
        f.write_str(name)
    }
}

/// Returns true if any over-specification rule matches `text`.
pub fn is_over_specified(text: &str) -> bool {
    OverSpecRule::first_match(text).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_number() {
        let rule = OverSpecRule::BareNumber;
        assert!(rule.matches("Construct a 5 block wide tower (Tech)"));
        assert!(rule.matches("Build 12 pillars"));
        assert!(!rule.matches("Build a tower for the first king"));
        assert!(!rule.matches("Recreate the R2D2 droid"));
    }

    #[test]
    fn test_sizing_keywords() {
        let rule = OverSpecRule::Sizing;
        assert!(rule.matches("A dome with a large RADIUS"));
        assert!(rule.matches("Double the height of the spire"));
        assert!(rule.matches("a hall of great width"));
        assert!(rule.matches("a 3×3 room"));
        assert!(rule.matches("a room, x wide"));
        assert!(!rule.matches("Build a heightened lookout"));
        assert!(!rule.matches("Recreate a xylophone"));
    }

    #[test]
    fn test_coordinates() {
        let rule = OverSpecRule::Coordinate;
        assert!(rule.matches("Place the gate at y=64"));
        assert!(rule.matches("Center it at X = -12"));
        assert!(rule.matches("z=0 marks the origin"));
        assert!(!rule.matches("Build a maze"));
        assert!(!rule.matches("Let w=5 be the width"));
    }

    #[test]
    fn test_building_materials() {
        let rule = OverSpecRule::BuildingMaterial;
        assert!(rule.matches("A Quartz palace"));
        assert!(rule.matches("Erect a beacon of hope on a coastal cliff (History/Science)"));
        assert!(rule.matches("a cobblestone bridge"));
        assert!(!rule.matches("A glassy lake at dusk"));
        assert!(!rule.matches("The Rolling Stones stage (Pop)"));
    }

    #[test]
    fn test_rules_are_independent() {
        let text = "Build a tower at y=64";
        assert!(OverSpecRule::Coordinate.matches(text));
        assert!(OverSpecRule::BareNumber.matches(text));
        assert!(!OverSpecRule::Sizing.matches(text));
        assert!(!OverSpecRule::BuildingMaterial.matches(text));
    }

    #[test]
    fn test_first_match_follows_rule_order() {
        assert_eq!(
            OverSpecRule::first_match("A 5 block wide tower"),
            Some(OverSpecRule::BareNumber)
        );
        assert_eq!(
            OverSpecRule::first_match("A lantern lit alley"),
            Some(OverSpecRule::BuildingMaterial)
        );
        assert_eq!(OverSpecRule::first_match("A misty fjord at dawn"), None);
    }

    #[test]
    fn test_is_over_specified() {
        assert!(is_over_specified("Build a tower of glass"));
        assert!(!is_over_specified(
            "Build a tall obelisk honoring ancient stargazers (History)"
        ));
    }
}
