use common::{
    backend_error::failure_message,
    facet::{Facet, FacetKey},
    search_query::CatalogSearch,
};
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::{
    api::{catalog_api::{list_projects, load_facets}, error_message},
    components::{
        catalog_components::{
            catalog_list_controls::CatalogListControls,
            facet_filter_panel::FacetFilterPanel,
            keyword_search_bar::KeywordSearchBar,
            project_card::ProjectCard,
        },
        error_boundary::ComponentErrorDisplay,
        suspend_boundary::SuspendWrapper,
    },
    routes::Route,
};

fn static_facets() -> Vec<Facet> {
    FacetKey::ALL.into_iter().map(Facet::from_static).collect()
}

/// Records `applied` and reports whether it differs from the last applied search.
fn follow_applied(last_applied: &mut CatalogSearch, applied: &CatalogSearch) -> bool {
    if last_applied == applied {
        return false;
    }
    *last_applied = applied.clone();
    true
}

/// Search controls over the project list. `search` is the applied search from the url;
/// edits go to a draft that only reaches the list when a search is triggered.
#[component]
pub fn CatalogView(search: ReadSignal<CatalogSearch>, current_page: ReadSignal<u64>) -> Element {
    let mut draft = use_signal(|| search.read().clone());
    let mut last_applied = use_signal(|| search.read().clone());
    // navigation does not reset signals, so follow the url; paging keeps unsearched edits
    use_effect(move || {
        let applied = search.read().clone();
        if follow_applied(&mut last_applied.write(), &applied) {
            draft.set(applied);
        }
    });
    let trigger_search = Callback::new(move |_: ()| {
        navigator().push(Route::search_page_from_query(draft.read().clone()));
    });

    let facets = use_resource(move || async move {
        match load_facets().await {
            Ok(facets) => facets,
            Err(e) => {
                warn!("facet options unavailable: {e}");
                static_facets()
            }
        }
    });
    let facets = use_memo(move || facets.read().clone().unwrap_or_else(static_facets));

    rsx! {
        div {
            id: "x-catalog-view",
            style: "
                display: flex;
                flex-direction: column;
                gap: 16px;
                width: 100%;
                max-width: 1100px;
                margin: 0 auto;
                padding: 24px 16px;
                box-sizing: border-box;
            ",
            KeywordSearchBar { draft, trigger_search }
            FacetFilterPanel { facets, draft, trigger_search }
            SuspendWrapper {
                CatalogResults { search, current_page }
            }
        }
    }
}

#[component]
fn CatalogResults(search: ReadSignal<CatalogSearch>, current_page: ReadSignal<u64>) -> Element {
    let projects = use_resource(move || list_projects()).suspend()?.cloned();
    let projects = match projects {
        Err(e) => return rsx! {
            ComponentErrorDisplay { error_txt: failure_message("案件の取得に失敗しました：", error_message(&e)) }
        },
        Ok(p) => p,
    };
    let page = search.read().apply_page(&projects, current_page());

    rsx! {
        CatalogListControls {
            search: page.query.clone(),
            hit_count: page.hit_count,
            page_number: page.page_number,
            page_count: page.page_count,
        }
        if page.results.is_empty() {
            div {
                style: "padding: 48px 0; text-align: center; color: #6B7280; font-size: 16px;",
                "条件に一致する案件はありません"
            }
        }
        div {
            style: "
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
                gap: 16px;
            ",
            for project in page.results {
                ProjectCard { key: "{project.id}", project: project.clone() }
            }
        }
    }
}
