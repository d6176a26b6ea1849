use dioxus::prelude::*;

use common::search_query::CatalogSearch;
use crate::{
    components::catalog_components::catalog_view::CatalogView,
    data_definitions::url_param::UrlParam,
};


fn search_title(search: &CatalogSearch) -> String {
    let keyword = search.keyword.trim();
    if keyword.is_empty() {
        return "案件検索 - ZENSHIN Freelance".to_string();
    }
    let short: String = keyword.chars().take(18).collect();
    let ellipsis = if keyword.chars().count() > 18 { "..." } else { "" };
    format!("{short}{ellipsis} - 案件検索")
}

/// Search results for the search encoded in the url.
#[component]
pub fn SearchPage(search: UrlParam<CatalogSearch>, current_page: u64) -> Element {
    rsx! {
        Title { "{search_title(&search.0)}" }
        CatalogView { search: search.0.clone(), current_page }
    }
}
