use common::project::Project;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdWork, md_communication_icons::MdLocationOn}};

use crate::routes::Route;

#[component]
pub fn ProjectCard(project: ReadSignal<Project>) -> Element {
    let project = project.read().clone();
    let location = project.location.clone().unwrap_or_default();
    let work_style = project.work_style.clone().unwrap_or_default();
    rsx! {
        Link {
            to: Route::ProjectDetailPage { project_id: project.id.clone() },
            div {
                class: "x-project-card",
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 10px;
                    padding: 16px;
                    background-color: white;
                    border: 1px solid #E5E7EB;
                    border-radius: 10px;
                    box-shadow: 0 1px 4px 0 rgba(0, 0, 0, 0.06);
                    color: #111827;
                    text-decoration: none;
                ",
                h3 {
                    style: "margin: 0; font-size: 17px; font-weight: 700; line-height: 1.4;",
                    "{project.name}"
                }
                div {
                    style: "font-size: 15px;",
                    span { style: "color: #6B7280; margin-right: 8px;", "単価/月" }
                    span { style: "font-weight: 700; color: #2563EB;", "{project.price_label()}" }
                }
                div {
                    style: "display: flex; flex-direction: row; gap: 16px; font-size: 14px; color: #374151;",
                    if !location.is_empty() {
                        span {
                            style: "display: flex; align-items: center; gap: 4px;",
                            Icon { icon: MdLocationOn, style: "width: 16px; height: 16px;" }
                            "{location}"
                        }
                    }
                    if !work_style.is_empty() {
                        span {
                            style: "display: flex; align-items: center; gap: 4px;",
                            Icon { icon: MdWork, style: "width: 16px; height: 16px;" }
                            "{work_style}"
                        }
                    }
                }
                TagList { tags: project.tags() }
            }
        }
    }
}

#[component]
pub fn TagList(tags: ReadSignal<Vec<String>>) -> Element {
    let tags = tags.read().clone();
    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 6px;",
            for tag in tags {
                span {
                    key: "{tag}",
                    style: "
                        font-size: 12px;
                        padding: 2px 8px;
                        border-radius: 9999px;
                        background-color: #EFF6FF;
                        color: #1D4ED8;
                    ",
                    "{tag}"
                }
            }
        }
    }
}
