//! Top navigation bar component.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdAccountCircle, MdExitToApp, MdSearch};
use dioxus_free_icons::icons::md_social_icons::{MdPerson, MdPersonAdd};
use dioxus_free_icons::{Icon, IconShape};

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::data_definitions::session_context::SessionContext;
use crate::routes::Route;
use common::search_query::CatalogSearch;


/// Shared page layout: header on top, routed page below.
#[component]
pub fn Navbar() -> Element {
    rsx! {

        div {
            id:"x-nav-container",

            style:"
                display:flex;
                flex-direction: column;
                width: 100%;
                min-height: 100vh;
                background-color: #F9FAFB;
            ",

            div {
                id:"x-nav-header",
                style:"
                    display:flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 24px;
                    height: 60px;
                    padding: 0 24px;
                    background-color: #1C212D;
                    box-sizing: border-box;
                ",

                NavbarLogo{},

                // empty space
                div {
                    style: "flex-grow:1;"
                }
                NavbarAccountLinks{},
            },

            div {
                id:"x-page-container",
                style: "flex-grow:1; width: 100%;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }

    }
}

#[component]
fn NavbarLogo() -> Element {
    rsx! {
        Link {
            to: Route::HomePage {},
            span {
                style: "color: white; font-size: 20px; font-weight: 700; letter-spacing: 0.5px;",
                "ZENSHIN Freelance"
            }
        }
        IconLink { to: Route::search_page_from_query(CatalogSearch::default()), icon: MdSearch, label: "案件をさがす" }
    }
}

#[component]
fn NavbarAccountLinks() -> Element {
    let session_context = use_context::<SessionContext>();
    let signed_in = session_context.is_signed_in();
    let nav = navigator();
    let on_sign_out = move |_: MouseEvent| {
        spawn(async move {
            session_context.sign_out().await;
            nav.push(Route::HomePage {});
        });
    };
    rsx! {
        div {
            style: "
                display:flex;
                flex-direction: row;
                gap: 20px;
                align-items: center;
            ",

            if signed_in {
                IconLink { to: Route::ProfilePage { }, icon: MdAccountCircle, label: "プロフィール" }
                button {
                    style: "display: flex; align-items: center; gap: 6px; border: none; background: none; color: white; font-size: 14px; cursor: pointer;",
                    onclick: on_sign_out,
                    Icon { icon: MdExitToApp, style: "width: 22px; height: 22px;" }
                    "ログアウト"
                }
            } else {
                IconLink { to: Route::SignupPage { }, icon: MdPersonAdd, label: "新規登録" }
                IconLink { to: Route::LoginPage { }, icon: MdPerson, label: "ログイン" }
            }
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static> (to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            span {
                style: "display: flex; align-items: center; gap: 6px; color: white; font-size: 14px;",
                Icon { icon: icon, style: "width: 22px; height: 22px;" }
                "{label}"
            }
        }
    }
}
