use common::{backend_error::failure_message, project::ProjectDetail};
use dioxus::prelude::*;

use crate::{
    api::{NOT_FOUND_CODE, NOT_SIGNED_IN_CODE, catalog_api::get_project_detail, error_code, error_message, profile_api::apply_to_project},
    components::{
        catalog_components::project_card::TagList,
        error_boundary::ComponentErrorDisplay,
        form_components::form_message::{FormMessage, FormMessageView},
        suspend_boundary::SuspendWrapper,
    },
    data_definitions::{browser::alert, session_context::SessionContext},
    pages::PRIMARY_BUTTON_STYLE,
    routes::Route,
};

const LOGIN_REQUIRED_MESSAGE: &str = "応募するにはログインが必要です。ログインページに移動します。";

#[component]
pub fn ProjectDetailPage(project_id: String) -> Element {
    rsx! {
        Title { "案件詳細 - ZENSHIN Freelance" }
        div {
            style: "max-width: 768px; margin: 0 auto; padding: 32px 16px; box-sizing: border-box;",
            SuspendWrapper {
                ProjectDetailView { project_id }
            }
        }
    }
}

#[component]
fn ProjectDetailView(project_id: ReadSignal<String>) -> Element {
    let detail = use_resource(move || get_project_detail(project_id())).suspend()?.cloned();
    let detail = match detail {
        Err(e) if error_code(&e) == Some(NOT_FOUND_CODE) => return rsx! { ProjectNotFound {} },
        Err(e) => return rsx! {
            ComponentErrorDisplay { error_txt: failure_message("案件の取得に失敗しました：", error_message(&e)) }
        },
        Ok(d) => d,
    };
    rsx! {
        ProjectDetailBody { detail }
    }
}

#[component]
fn ProjectDetailBody(detail: ReadSignal<ProjectDetail>) -> Element {
    let detail = detail.read().clone();
    let location = detail.location.clone().unwrap_or_default();
    let work_style = detail.work_style.clone().unwrap_or_default();
    let description = detail.description.clone().unwrap_or_default();
    rsx! {
        Title { "{detail.name} - ZENSHIN Freelance" }
        article {
            style: "display: flex; flex-direction: column; gap: 10px; color: #111827;",
            h1 { style: "margin: 0 0 8px 0; font-size: 24px; font-weight: 700;", "{detail.name}" }
            p { style: "margin: 0; color: #4B5563;", "{detail.price_line()}" }
            p { style: "margin: 0; color: #4B5563;", "勤務地: {location}" }
            p { style: "margin: 0; color: #4B5563;", "働き方: {work_style}" }
            p { style: "margin: 8px 0; color: #4B5563; white-space: pre-wrap;", "{description}" }

            h2 { style: "margin: 8px 0 0 0; font-size: 16px; font-weight: 700;", "必要なスキル" }
            TagList { tags: detail.skills.clone() }

            h2 { style: "margin: 8px 0 0 0; font-size: 16px; font-weight: 700;", "ポジション" }
            TagList { tags: detail.positions.clone() }

            ApplyButton { project_id: detail.id.clone() }
        }
    }
}

#[component]
fn ProjectNotFound() -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; gap: 16px; padding: 48px 0;",
            h1 { style: "margin: 0; font-size: 22px; color: #111827;", "案件が見つかりません" }
            Link { to: Route::HomePage {}, span { style: "color: #2563EB;", "案件一覧へ戻る" } }
        }
    }
}

#[component]
fn ApplyButton(project_id: ReadSignal<String>) -> Element {
    let mut session_context = use_context::<SessionContext>();
    let mut checking = use_signal(|| false);
    let mut message = use_signal(|| None::<FormMessage>);
    let nav = navigator();

    let on_apply = move |_: MouseEvent| {
        let Some(access_token) = session_context.access_token() else {
            alert(LOGIN_REQUIRED_MESSAGE);
            nav.push(Route::LoginPage {});
            return;
        };
        checking.set(true);
        spawn(async move {
            match apply_to_project(access_token, project_id()).await {
                Ok(()) => message.set(Some(FormMessage::Success("応募が完了しました。".to_string()))),
                Err(e) if error_code(&e) == Some(NOT_SIGNED_IN_CODE) => {
                    session_context.set_session(None);
                    alert(LOGIN_REQUIRED_MESSAGE);
                    nav.push(Route::LoginPage {});
                }
                Err(e) => message.set(Some(FormMessage::Failure(failure_message("応募に失敗しました：", error_message(&e))))),
            }
            checking.set(false);
        });
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 10px; margin-top: 16px;",
            button {
                style: "{PRIMARY_BUTTON_STYLE} width: 100%;",
                disabled: checking(),
                onclick: on_apply,
                if checking() { "確認中..." } else { "応募する" }
            }
            FormMessageView { message: message() }
        }
    }
}
