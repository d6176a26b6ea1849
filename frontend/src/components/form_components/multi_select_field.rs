//! Multi-select dropdown: badges for the chosen values, a panel of toggle buttons below.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdArrowDropDown, MdClose}};

use super::FIELD_LABEL_STYLE;

#[component]
pub fn MultiSelectField(
    label: String,
    options: Vec<String>,
    selected: Vec<String>,
    on_toggle: Callback<String>,
    on_remove: Callback<String>,
) -> Element {
    let mut is_open = use_signal(|| false);
    rsx! {
        div {
            style: "display: flex; flex-direction: column; position: relative;",
            span { style: FIELD_LABEL_STYLE, "{label}" }
            if is_open() {
                div {
                    style: "position: fixed; top: 0px; left: 0px; width: 100vw; height: 100vh; z-index: 999;",
                    onmousedown: move |_| is_open.set(false),
                }
            }
            div {
                role: "button",
                style: "
                    position: relative;
                    z-index: 1001;
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    gap: 6px;
                    min-height: 40px;
                    padding: 4px 8px;
                    border: 1px solid #D1D5DB;
                    border-radius: 6px;
                    background-color: white;
                    cursor: pointer;
                    box-sizing: border-box;
                ",
                onclick: move |_| {
                    let open = is_open();
                    is_open.set(!open);
                },
                if selected.is_empty() {
                    span { style: "color: #9CA3AF; font-size: 14px;", "選択してください" }
                }
                for value in selected.iter().cloned() {
                    ChosenBadge { key: "{value}", value: value.clone(), on_remove }
                }
                div { style: "flex-grow: 1;" }
                Icon { icon: MdArrowDropDown, style: "width: 22px; height: 22px; color: #6B7280;" }
            }
            if is_open() {
                div {
                    style: "
                        position: absolute;
                        top: 100%;
                        left: 0px;
                        right: 0px;
                        z-index: 1000;
                        margin-top: 4px;
                        display: flex;
                        flex-wrap: wrap;
                        gap: 6px;
                        padding: 10px;
                        max-height: 260px;
                        overflow-y: auto;
                        background-color: white;
                        border: 1px solid rgba(0,0,0,0.2);
                        border-radius: 8px;
                        box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.1);
                    ",
                    if options.is_empty() {
                        span { style: "color: #6B7280; font-size: 14px;", "選択肢がありません" }
                    }
                    for value in options.iter().cloned() {
                        OptionToggle { key: "{value}", is_selected: selected.contains(&value), value: value.clone(), on_toggle }
                    }
                }
            }
        }
    }
}

#[component]
fn ChosenBadge(value: String, on_remove: Callback<String>) -> Element {
    let removed = value.clone();
    rsx! {
        span {
            style: "display: flex; align-items: center; gap: 4px; padding: 2px 4px 2px 10px; border-radius: 9999px; background-color: #DBEAFE; color: #1E3A8A; font-size: 13px;",
            "{value}"
            button {
                r#type: "button",
                style: "display: flex; border: none; background: none; padding: 0; cursor: pointer; color: #1E3A8A;",
                onclick: move |e: MouseEvent| {
                    e.stop_propagation();
                    on_remove(removed.clone());
                },
                Icon { icon: MdClose, style: "width: 16px; height: 16px;" }
            }
        }
    }
}

#[component]
fn OptionToggle(value: String, is_selected: bool, on_toggle: Callback<String>) -> Element {
    let (background, color, border) = if is_selected {
        ("#2563EB", "white", "#2563EB")
    } else {
        ("white", "#111827", "#D1D5DB")
    };
    let toggled = value.clone();
    rsx! {
        button {
            r#type: "button",
            style: "padding: 4px 12px; border: 1px solid {border}; border-radius: 9999px; background-color: {background}; color: {color}; font-size: 13px; cursor: pointer;",
            onclick: move |_| on_toggle(toggled.clone()),
            "{value}"
        }
    }
}
