//! Hit count and page buttons above the project list.

use common::search_query::CatalogSearch;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdArrowBack, MdArrowForward}};

use crate::routes::Route;

#[component]
pub fn CatalogListControls(search: ReadSignal<CatalogSearch>, hit_count: u64, page_number: u64, page_count: u64) -> Element {
    let go_to_page = move |page: u64| {
        navigator().push(Route::SearchPage { search: search.read().clone().into(), current_page: page });
    };
    rsx! {
        div {
            id: "x-catalog-list-controls",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 6px;
                padding: 7px;
                width: 100%;
                box-sizing: border-box;
            ",
            h2 {
                style: "font-size: 18px; font-weight: 500; color: rgb(75, 87, 112); margin: 0;",
                "案件数：{hit_count}件"
            }
            div { style: "flex-grow: 1;" }
            if page_count > 1 {
                div {
                    style: "
                        display: flex;
                        flex-direction: row;
                        align-items: center;
                        gap: 8px;
                    ",
                    NavigationButton {
                        icon: MdArrowBack,
                        label: "前のページ",
                        disabled: page_number == 0,
                        onclick: move |_| go_to_page(page_number.saturating_sub(1)),
                    }
                    for page in 0..page_count {
                        PageNumberButton {
                            key: "{page}",
                            page,
                            is_current: page == page_number,
                            onclick: move |_| go_to_page(page),
                        }
                    }
                    NavigationButton {
                        icon: MdArrowForward,
                        label: "次のページ",
                        disabled: page_number + 1 >= page_count,
                        onclick: move |_| go_to_page(page_number + 1),
                    }
                }
            }
        }
    }
}

#[component]
fn PageNumberButton(page: u64, is_current: bool, onclick: Callback<()>) -> Element {
    let (background, color) = if is_current { ("#2563EB", "white") } else { ("white", "#111827") };
    let label = page + 1;
    rsx! {
        button {
            style: "
                min-width: 32px;
                height: 32px;
                border: 1px solid #D1D5DB;
                border-radius: 8px;
                background: {background};
                color: {color};
                cursor: pointer;
            ",
            onclick: move |_| {
                if !is_current {
                    onclick(());
                }
            },
            "{label}"
        }
    }
}

#[component]
pub fn NavigationButton<I: dioxus_free_icons::IconShape + Clone + PartialEq + 'static>(icon: I, label: String, disabled: ReadSignal<bool>, onclick: Callback<()>) -> Element {
    let btn_color = use_memo(move || if *disabled.read() { "rgba(0,0,0,0.3)" } else { "rgba(0,0,0,1)" });
    let btn_cursor = use_memo(move || if *disabled.read() { "not-allowed" } else { "pointer" });
    rsx! {
        button {
            title: "{label}",
            disabled: *disabled.read(),
            style: "
                width: 32px;
                height: 32px;
                background: white;
                border: none;
                border-radius: 8px;
                padding: 4px;
                box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
                cursor: {btn_cursor};
            ",
            onclick: move |_| {
                if !*disabled.read() {
                    onclick(());
                }
            },
            Icon { icon: icon, style: "width: 24px; height: 24px; color: {btn_color};" }
        }
    }
}
