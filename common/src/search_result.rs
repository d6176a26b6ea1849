use serde::{Deserialize, Serialize};

use crate::{project::Project, search_const::PAGE_SIZE, search_query::CatalogSearch};


/// One page of the filtered catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogResultPage {
    pub query: CatalogSearch,
    /// Length of the whole filtered set, not of this page.
    pub hit_count: u64,
    pub page_number: u64,
    pub page_count: u64,
    pub results: Vec<Project>,
}

impl CatalogResultPage {
    /// Cuts page `page_number` out of `filtered`, clamping past-the-end pages to the last one.
    pub fn paginate(query: CatalogSearch, filtered: Vec<Project>, page_number: u64) -> Self {
        let hit_count = filtered.len() as u64;
        let page_count = hit_count.div_ceil(PAGE_SIZE).max(1);
        let page_number = page_number.min(page_count - 1);
        let results = filtered
            .into_iter()
            .skip((page_number * PAGE_SIZE) as usize)
            .take(PAGE_SIZE as usize)
            .collect();
        Self { query, hit_count, page_number, page_count, results }
    }

    pub fn has_previous(&self) -> bool {
        self.page_number > 0
    }

    pub fn has_next(&self) -> bool {
        self.page_number + 1 < self.page_count
    }
}
