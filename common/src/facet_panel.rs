//! Open/closed state of the facet value panel.
//!
//! The panel is either closed or open on exactly one facet. The active category
//! tab is remembered while closed so reopening shows the last facet.

use serde::{Deserialize, Serialize};

use crate::facet::FacetKey;

/// Number of option buttons rendered before "show all" is pressed.
pub const COLLAPSED_OPTION_COUNT: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelState {
    Closed,
    Open { facet: FacetKey, show_all: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetPanel {
    active_facet: FacetKey,
    state: PanelState,
}

impl Default for FacetPanel {
    fn default() -> Self {
        Self { active_facet: FacetKey::Skill, state: PanelState::Closed }
    }
}

impl FacetPanel {
    pub fn active_facet(&self) -> FacetKey {
        self.active_facet
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn open_facet(&self) -> Option<FacetKey> {
        match self.state {
            PanelState::Open { facet, .. } => Some(facet),
            PanelState::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open_facet().is_some()
    }

    pub fn shows_all(&self) -> bool {
        matches!(self.state, PanelState::Open { show_all: true, .. })
    }

    /// Click on the selection summary.
    pub fn toggle_summary(&mut self) {
        self.state = match self.state {
            PanelState::Closed => PanelState::Open { facet: self.active_facet, show_all: false },
            PanelState::Open { .. } => PanelState::Closed,
        };
    }

    /// Click on a category tab.
    pub fn select_tab(&mut self, facet: FacetKey) {
        self.active_facet = facet;
        if let PanelState::Open { .. } = self.state {
            self.state = PanelState::Open { facet, show_all: false };
        }
    }

    /// Pointer-down anywhere outside the panel.
    pub fn pointer_down_outside(&mut self) {
        self.state = PanelState::Closed;
    }

    pub fn expand(&mut self) {
        if let PanelState::Open { facet, .. } = self.state {
            self.state = PanelState::Open { facet, show_all: true };
        }
    }

    /// The slice of `options` the panel currently renders.
    pub fn visible_options<'a>(&self, options: &'a [String]) -> &'a [String] {
        if self.shows_all() || options.len() <= COLLAPSED_OPTION_COUNT {
            options
        } else {
            &options[..COLLAPSED_OPTION_COUNT]
        }
    }

    pub fn has_hidden_options(&self, options: &[String]) -> bool {
        self.visible_options(options).len() < options.len()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::SelectionState;

    #[test]
    fn starts_closed_on_skill() {
        let panel = FacetPanel::default();
        assert_eq!(panel.state(), PanelState::Closed);
        assert_eq!(panel.active_facet(), FacetKey::Skill);
    }

    #[test]
    fn summary_click_toggles_on_active_facet() {
        let mut panel = FacetPanel::default();
        panel.select_tab(FacetKey::Area);
        assert_eq!(panel.state(), PanelState::Closed);
        panel.toggle_summary();
        assert_eq!(panel.open_facet(), Some(FacetKey::Area));
        panel.toggle_summary();
        assert_eq!(panel.state(), PanelState::Closed);
    }

    #[test]
    fn switching_tab_while_open_resets_show_all() {
        let mut panel = FacetPanel::default();
        panel.toggle_summary();
        panel.expand();
        assert!(panel.shows_all());
        panel.select_tab(FacetKey::Position);
        assert_eq!(panel.state(), PanelState::Open { facet: FacetKey::Position, show_all: false });
    }

    #[test]
    fn outside_click_closes_without_touching_selection() {
        let mut selection = SelectionState::default();
        selection.toggle(FacetKey::Skill, "React");
        let before = selection.clone();

        let mut panel = FacetPanel::default();
        panel.toggle_summary();
        assert_eq!(panel.open_facet(), Some(FacetKey::Skill));
        panel.pointer_down_outside();
        assert_eq!(panel.state(), PanelState::Closed);
        assert_eq!(selection, before);

        panel.pointer_down_outside();
        assert_eq!(panel.state(), PanelState::Closed);
    }

    #[test]
    fn expand_is_ignored_while_closed() {
        let mut panel = FacetPanel::default();
        panel.expand();
        assert_eq!(panel.state(), PanelState::Closed);
    }

    #[test]
    fn options_are_truncated_until_expanded() {
        let options: Vec<String> = (0..20).map(|i| format!("skill-{i}")).collect();
        let mut panel = FacetPanel::default();
        panel.toggle_summary();
        assert_eq!(panel.visible_options(&options).len(), COLLAPSED_OPTION_COUNT);
        assert!(panel.has_hidden_options(&options));
        panel.expand();
        assert_eq!(panel.visible_options(&options).len(), 20);
        assert!(!panel.has_hidden_options(&options));

        let few: Vec<String> = vec!["a".into(), "b".into()];
        let mut panel = FacetPanel::default();
        panel.toggle_summary();
        assert_eq!(panel.visible_options(&few).len(), 2);
    }
}
