use common::search_query::CatalogSearch;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

#[component]
pub fn KeywordSearchBar(mut draft: Signal<CatalogSearch>, trigger_search: Callback<()>) -> Element {
    let search_oninput = move |event: Event<FormData>| {
        draft.write().keyword = event.value();
    };
    let search_onkeydown = move |event: Event<KeyboardData>| {
        if event.key() == Key::Enter {
            trigger_search(());
        }
    };
    rsx! {
        div {
            id: "x-keyword-search-box",
            style: "
                display: flex;
                align-items: center;
                gap: 12px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 44px;
                border: 1px solid rgba(101, 101, 101, 0.8);
                box-sizing: border-box;
            ",
            Icon { icon: MdSearch, style: "width: 20px; height: 20px; color: #6B7280;" }
            input {
                r#type: "text",
                placeholder: "キーワードで案件を探す",
                style: "
                    flex: 1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 16px;
                ",
                value: "{draft.read().keyword}",
                oninput: search_oninput,
                onkeydown: search_onkeydown,
            }
        }
    }
}
