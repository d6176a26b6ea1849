//! Facet definitions for the project catalog filter.

use serde::{Deserialize, Serialize};

/// Area value that is matched against a project's work style instead of its location.
pub const FULL_REMOTE: &str = "フルリモート";

pub const AREA_OPTIONS: &[&str] = &[
    FULL_REMOTE,
    "東京都",
    "神奈川県",
    "埼玉県",
    "千葉県",
    "大阪府",
    "京都府",
    "兵庫県",
    "愛知県",
    "福岡県",
    "北海道",
];

pub const PRICE_OPTIONS: &[&str] = &["50万～", "60万～", "70万～", "80万～", "90万～", "100万～"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacetKey {
    Skill,
    Position,
    Area,
    Price,
}

impl FacetKey {
    /// Declaration order, also the order badges are rendered in.
    pub const ALL: [FacetKey; 4] = [FacetKey::Skill, FacetKey::Position, FacetKey::Area, FacetKey::Price];

    pub fn label(&self) -> &'static str {
        match self {
            FacetKey::Skill => "スキル",
            FacetKey::Position => "ポジション",
            FacetKey::Area => "エリア",
            FacetKey::Price => "単価",
        }
    }

    pub fn tab_label(&self) -> &'static str {
        match self {
            FacetKey::Skill => "スキルでさがす",
            FacetKey::Position => "ポジションでさがす",
            FacetKey::Area => "エリアでさがす",
            FacetKey::Price => "単価でさがす",
        }
    }

    /// Compile-time option list, `None` for facets loaded from storage.
    pub fn static_options(&self) -> Option<&'static [&'static str]> {
        match self {
            FacetKey::Skill | FacetKey::Position => None,
            FacetKey::Area => Some(AREA_OPTIONS),
            FacetKey::Price => Some(PRICE_OPTIONS),
        }
    }

    /// Storage table holding the option names of a dynamic facet.
    pub fn option_table(&self) -> Option<&'static str> {
        match self {
            FacetKey::Skill => Some("skills"),
            FacetKey::Position => Some("positions"),
            FacetKey::Area | FacetKey::Price => None,
        }
    }
}

impl std::fmt::Display for FacetKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facet {
    pub key: FacetKey,
    pub label: String,
    pub values: Vec<String>,
}

impl Facet {
    pub fn new(key: FacetKey, values: Vec<impl Into<String>>) -> Self {
        Self { key, label: key.label().to_string(), values: values.into_iter().map(|v| v.into()).collect() }
    }

    /// Facet built from the compile-time options, empty for dynamic facets.
    pub fn from_static(key: FacetKey) -> Self {
        Self::new(key, key.static_options().unwrap_or_default().to_vec())
    }
}

/// Parses a price option such as `70万～` into its floor, in units of 10,000 yen.
pub fn price_threshold(value: &str) -> Option<f64> {
    let digits: String = value.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<f64>().ok()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_thresholds_parse_leading_amount() {
        assert_eq!(price_threshold("70万～"), Some(70.0));
        assert_eq!(price_threshold("100万～"), Some(100.0));
        assert_eq!(price_threshold("～70万"), None);
        assert_eq!(price_threshold(""), None);
    }

    #[test]
    fn every_price_option_has_a_threshold() {
        for option in PRICE_OPTIONS {
            assert!(price_threshold(option).is_some(), "{option}");
        }
    }

    #[test]
    fn only_area_and_price_are_static() {
        assert_eq!(FacetKey::Skill.static_options(), None);
        assert_eq!(FacetKey::Position.static_options(), None);
        assert_eq!(Facet::from_static(FacetKey::Area).values.first().map(String::as_str), Some(FULL_REMOTE));
        assert_eq!(Facet::from_static(FacetKey::Skill).values, Vec::<String>::new());
        assert_eq!(FacetKey::Skill.option_table(), Some("skills"));
    }
}
