use dioxus::prelude::*;

use common::search_query::CatalogSearch;
use crate::components::catalog_components::catalog_view::CatalogView;


/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "ZENSHIN Freelance" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                width: 100%;
                box-sizing: border-box;
            ",

            Hero {}
            CatalogView { search: CatalogSearch::default(), current_page: 0_u64 }
        }
    }
}

#[component]
fn Hero() -> Element {
    let mut show_detail = use_signal(|| false);
    rsx! {
        section {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 8px;
                padding: 36px 16px 12px 16px;
                text-align: center;
                color: #0F172A;
            ",
            h1 {
                style: "margin: 0; font-size: 26px; font-weight: 700;",
                "フリーランスエンジニアのための案件掲示板"
            }
            p { style: "margin: 0; font-size: 16px;", "新規登録で案件獲得時に最大15,000円獲得" }
            button {
                style: "border: none; background: none; color: #2563EB; text-decoration: underline; font-size: 14px; cursor: pointer;",
                onclick: move |_| {
                    let shown = show_detail();
                    show_detail.set(!shown);
                },
                if show_detail() { "閉じる" } else { "詳細を見る" }
            }
            if show_detail() {
                div {
                    style: "font-size: 14px; color: #374151; line-height: 1.8;",
                    p { style: "margin: 0;", "・登録は無料、5分で完了" }
                    p { style: "margin: 0;", "・非公開の高単価案件に応募可能" }
                    p { style: "margin: 0;", "・マッチすれば即日稼働もOK" }
                }
            }
        }
    }
}
