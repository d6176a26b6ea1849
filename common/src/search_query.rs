//! Shared catalog search models and helpers.

use serde::{Deserialize, Serialize};

use crate::{
    catalog_filter::{filter_by_keyword, search},
    project::Project,
    search_result::CatalogResultPage,
    selection::SelectionState,
};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CatalogSearch {
    pub keyword: String,
    pub selection: SelectionState,
}

impl CatalogSearch {
    pub fn is_empty(&self) -> bool {
        self.keyword.trim().is_empty() && self.selection.is_empty()
    }

    /// Facet predicate first, then the keyword terms.
    pub fn apply(&self, projects: &[Project]) -> Vec<Project> {
        filter_by_keyword(search(&self.selection, projects), &self.keyword)
    }

    pub fn apply_page(&self, projects: &[Project], page_number: u64) -> CatalogResultPage {
        CatalogResultPage::paginate(self.clone(), self.apply(projects), page_number)
    }
}
