//! Category tabs, selection badges and the option panel of the catalog search.

use common::{
    facet::{Facet, FacetKey},
    facet_panel::FacetPanel,
    search_query::CatalogSearch,
};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdSearch, md_navigation_icons::{MdArrowDropDown, MdArrowDropUp, MdClose}}};

#[derive(Clone, Copy)]
struct FacetPanelContext {
    panel: Signal<FacetPanel>,
    draft: Signal<CatalogSearch>,
}

const BACKDROP_Z_LEVEL: u32 = 999;

/// Tabs, summary, search button and options share one layer, above the backdrop while open.
fn controls_z_level(is_open: bool) -> u32 {
    if is_open { BACKDROP_Z_LEVEL + 1 } else { 1 }
}

#[component]
pub fn FacetFilterPanel(facets: ReadSignal<Vec<Facet>>, draft: Signal<CatalogSearch>, trigger_search: Callback<()>) -> Element {
    let mut panel = use_signal(FacetPanel::default);
    use_context_provider(|| FacetPanelContext { panel, draft });

    let open_facet = panel.read().open_facet();
    let open_values = open_facet.map(|key| {
        facets.read().iter().find(|f| f.key == key).map(|f| f.values.clone()).unwrap_or_default()
    });

    let z_level = use_memo(move || controls_z_level(panel.read().is_open()));

    rsx! {
        if open_facet.is_some() {
            // pointer down anywhere outside the panel closes it
            div {
                style: "
                    position: fixed;
                    top: 0px;
                    left: 0px;
                    width: 100vw;
                    height: 100vh;
                    z-index: {BACKDROP_Z_LEVEL};
                    background-color: rgba(0,0,0,0.05);
                ",
                onmousedown: move |_| panel.write().pointer_down_outside(),
            }
        }
        div {
            id: "x-facet-filter-panel",
            style: "
                position: relative;
                z-index: {z_level()};
                display: flex;
                flex-direction: column;
                gap: 10px;
                padding: 16px;
                background-color: white;
                border: 1px solid #E5E7EB;
                border-radius: 10px;
            ",
            div {
                style: "display: flex; flex-direction: row; gap: 8px; flex-wrap: wrap;",
                for facet in FacetKey::ALL {
                    FacetTab { key: "{facet}", facet }
                }
            }

            div {
                style: "position: relative; display: flex; flex-direction: row; gap: 12px; align-items: stretch;",
                SelectionSummary {}
                button {
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 6px;
                        padding: 0 20px;
                        border: none;
                        border-radius: 8px;
                        background-color: #2563EB;
                        color: white;
                        font-size: 15px;
                        font-weight: 700;
                        cursor: pointer;
                        flex-shrink: 0;
                    ",
                    onclick: move |_| trigger_search(()),
                    Icon { icon: MdSearch, style: "width: 20px; height: 20px;" }
                    "検索する"
                }
                if let Some(values) = open_values {
                    FacetOptionList { values }
                }
            }
        }
    }
}

#[component]
fn FacetTab(facet: FacetKey) -> Element {
    let context = use_context::<FacetPanelContext>();
    let mut panel = context.panel;
    let is_active = panel.read().active_facet() == facet;
    let selected_count = context.draft.read().selection.get(facet).len();
    let (border_color, color) = if is_active { ("#2563EB", "#2563EB") } else { ("transparent", "#374151") };
    rsx! {
        button {
            style: "
                padding: 6px 12px;
                border: none;
                border-bottom: 3px solid {border_color};
                background: none;
                color: {color};
                font-size: 15px;
                font-weight: 500;
                cursor: pointer;
            ",
            onclick: move |_| panel.write().select_tab(facet),
            "{facet.tab_label()}"
            if selected_count > 0 {
                span {
                    style: "margin-left: 6px; padding: 0 6px; border-radius: 9999px; background-color: #DBEAFE; font-size: 12px;",
                    "{selected_count}"
                }
            }
        }
    }
}

#[component]
fn SelectionSummary() -> Element {
    let context = use_context::<FacetPanelContext>();
    let mut panel = context.panel;
    let selections = context.draft.read().selection.all_selections();
    let is_open = panel.read().is_open();
    let placeholder = format!("{}を選択してください", panel.read().active_facet().label());
    rsx! {
        div {
            role: "button",
            style: "
                flex: 1;
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                align-items: center;
                gap: 6px;
                min-height: 44px;
                padding: 6px 10px;
                border: 1px solid #D1D5DB;
                border-radius: 8px;
                background-color: white;
                cursor: pointer;
                box-sizing: border-box;
            ",
            onclick: move |_| panel.write().toggle_summary(),
            if selections.is_empty() {
                span { style: "color: #9CA3AF; font-size: 15px;", "{placeholder}" }
            }
            for selected in selections {
                SelectionBadge { key: "{selected.facet}-{selected.value}", facet: selected.facet, value: selected.value.clone() }
            }
            div { style: "flex-grow: 1;" }
            if is_open {
                Icon { icon: MdArrowDropUp, style: "width: 24px; height: 24px; color: #6B7280;" }
            } else {
                Icon { icon: MdArrowDropDown, style: "width: 24px; height: 24px; color: #6B7280;" }
            }
        }
    }
}

#[component]
fn SelectionBadge(facet: FacetKey, value: String) -> Element {
    let mut draft = use_context::<FacetPanelContext>().draft;
    let removed = value.clone();
    rsx! {
        span {
            style: "
                display: flex;
                align-items: center;
                gap: 4px;
                padding: 2px 4px 2px 10px;
                border-radius: 9999px;
                background-color: #DBEAFE;
                color: #1E3A8A;
                font-size: 13px;
            ",
            "{value}"
            button {
                title: "選択を解除",
                style: "display: flex; border: none; background: none; padding: 0; cursor: pointer; color: #1E3A8A;",
                onclick: move |e: MouseEvent| {
                    // keep the summary from toggling the panel
                    e.stop_propagation();
                    draft.write().selection.clear(facet, &removed);
                },
                Icon { icon: MdClose, style: "width: 16px; height: 16px;" }
            }
        }
    }
}

#[component]
fn FacetOptionList(values: Vec<String>) -> Element {
    let mut panel = use_context::<FacetPanelContext>().panel;
    let Some(facet) = panel.read().open_facet() else {
        return rsx! {};
    };
    let visible = panel.read().visible_options(&values).to_vec();
    let has_hidden = panel.read().has_hidden_options(&values);
    rsx! {
        div {
            style: "
                position: absolute;
                top: calc(100% + 6px);
                left: 0px;
                right: 0px;
                z-index: 1;
                display: flex;
                flex-direction: column;
                gap: 10px;
                padding: 14px;
                max-height: calc(100vh - 200px);
                overflow-y: auto;
                background-color: white;
                border: 1px solid rgba(0,0,0,0.2);
                border-radius: 10px;
                box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.1);
            ",
            if values.is_empty() {
                div { style: "color: #6B7280; font-size: 14px;", "選択肢がありません" }
            }
            div {
                style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 8px;",
                for value in visible {
                    FacetOptionButton { key: "{value}", facet, value: value.clone() }
                }
            }
            if has_hidden {
                button {
                    style: "align-self: center; border: none; background: none; color: #2563EB; font-size: 14px; cursor: pointer;",
                    onclick: move |_| panel.write().expand(),
                    "もっと見る"
                }
            }
        }
    }
}

#[component]
fn FacetOptionButton(facet: FacetKey, value: String) -> Element {
    let mut draft = use_context::<FacetPanelContext>().draft;
    let is_selected = draft.read().selection.is_selected(facet, &value);
    let (background, color, border) = if is_selected {
        ("#2563EB", "white", "#2563EB")
    } else {
        ("white", "#111827", "#D1D5DB")
    };
    let toggled = value.clone();
    rsx! {
        button {
            style: "
                padding: 6px 14px;
                border: 1px solid {border};
                border-radius: 9999px;
                background-color: {background};
                color: {color};
                font-size: 14px;
                cursor: pointer;
            ",
            onclick: move |_| {
                draft.write().selection.toggle(facet, &toggled);
            },
            "{value}"
        }
    }
}
