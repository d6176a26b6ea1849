//! Per-facet selection state.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::facet::FacetKey;

/// A set of chosen values that remembers the order they were picked in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderedSelection(IndexSet<String>);

impl OrderedSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `value`. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, value: &str) -> bool {
        if self.0.shift_remove(value) {
            false
        } else {
            self.0.insert(value.to_string());
            true
        }
    }

    pub fn clear(&mut self, value: &str) {
        self.0.shift_remove(value);
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.contains(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for OrderedSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedValue {
    pub facet: FacetKey,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionState {
    pub skill: OrderedSelection,
    pub position: OrderedSelection,
    pub area: OrderedSelection,
    pub price: OrderedSelection,
}

impl SelectionState {
    pub fn get(&self, facet: FacetKey) -> &OrderedSelection {
        match facet {
            FacetKey::Skill => &self.skill,
            FacetKey::Position => &self.position,
            FacetKey::Area => &self.area,
            FacetKey::Price => &self.price,
        }
    }

    pub fn get_mut(&mut self, facet: FacetKey) -> &mut OrderedSelection {
        match facet {
            FacetKey::Skill => &mut self.skill,
            FacetKey::Position => &mut self.position,
            FacetKey::Area => &mut self.area,
            FacetKey::Price => &mut self.price,
        }
    }

    pub fn toggle(&mut self, facet: FacetKey, value: &str) -> bool {
        self.get_mut(facet).toggle(value)
    }

    pub fn clear(&mut self, facet: FacetKey, value: &str) {
        self.get_mut(facet).clear(value);
    }

    pub fn is_selected(&self, facet: FacetKey, value: &str) -> bool {
        self.get(facet).contains(value)
    }

    /// Every selected value, facet by facet in declaration order, each in pick order.
    pub fn all_selections(&self) -> Vec<SelectedValue> {
        FacetKey::ALL
            .iter()
            .flat_map(|facet| {
                self.get(*facet).iter().map(move |value| SelectedValue { facet: *facet, value: value.to_string() })
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        FacetKey::ALL.iter().all(|facet| self.get(*facet).is_empty())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores_previous_state() {
        let mut state = SelectionState::default();
        state.toggle(FacetKey::Skill, "Rust");
        state.toggle(FacetKey::Area, "東京都");
        let before = state.clone();

        for facet in FacetKey::ALL {
            for value in ["Rust", "東京都", "PM", "70万～"] {
                state.toggle(facet, value);
                state.toggle(facet, value);
                assert_eq!(state, before);
            }
        }
    }

    #[test]
    fn toggle_reports_membership() {
        let mut selection = OrderedSelection::new();
        assert!(selection.toggle("React"));
        assert!(selection.contains("React"));
        assert!(!selection.toggle("React"));
        assert!(selection.is_empty());
    }

    #[test]
    fn clear_is_a_no_op_for_absent_values() {
        let mut state = SelectionState::default();
        state.toggle(FacetKey::Position, "PM");
        state.clear(FacetKey::Position, "SE");
        state.clear(FacetKey::Skill, "PM");
        assert!(state.is_selected(FacetKey::Position, "PM"));
        state.clear(FacetKey::Position, "PM");
        assert!(state.is_empty());
    }

    #[test]
    fn all_selections_follow_facet_then_pick_order() {
        let mut state = SelectionState::default();
        state.toggle(FacetKey::Price, "70万～");
        state.toggle(FacetKey::Skill, "Vue");
        state.toggle(FacetKey::Area, "大阪府");
        state.toggle(FacetKey::Skill, "Go");
        state.toggle(FacetKey::Position, "PM");
        state.toggle(FacetKey::Skill, "AWS");
        state.toggle(FacetKey::Skill, "Go");
        state.toggle(FacetKey::Skill, "Go");

        let badges: Vec<(FacetKey, String)> =
            state.all_selections().into_iter().map(|s| (s.facet, s.value)).collect();
        assert_eq!(
            badges,
            vec![
                (FacetKey::Skill, "Vue".to_string()),
                (FacetKey::Skill, "AWS".to_string()),
                (FacetKey::Skill, "Go".to_string()),
                (FacetKey::Position, "PM".to_string()),
                (FacetKey::Area, "大阪府".to_string()),
                (FacetKey::Price, "70万～".to_string()),
            ]
        );
    }
}
