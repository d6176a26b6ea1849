use common::{backend_error::failure_message, forms::Credentials};
use dioxus::prelude::*;

use crate::{
    api::{auth_api::sign_in, error_message},
    components::form_components::{
        form_message::{FormMessage, FormMessageView},
        text_input_field::TextInputField,
    },
    data_definitions::session_context::SessionContext,
    pages::{FORM_CARD_STYLE, PRIMARY_BUTTON_STYLE},
    routes::Route,
};

#[component]
pub fn LoginPage() -> Element {
    let mut session_context = use_context::<SessionContext>();
    let mut credentials = use_signal(Credentials::default);
    let mut message = use_signal(|| None::<FormMessage>);
    let mut submitting = use_signal(|| false);
    let nav = navigator();

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        submitting.set(true);
        spawn(async move {
            match sign_in(credentials()).await {
                Ok(session) => {
                    session_context.set_session(Some(session));
                    nav.push(Route::HomePage {});
                }
                Err(e) => message.set(Some(FormMessage::Failure(failure_message("ログインに失敗しました：", error_message(&e))))),
            }
            submitting.set(false);
        });
    };

    rsx! {
        Title { "ログイン - ZENSHIN Freelance" }
        form {
            style: FORM_CARD_STYLE,
            onsubmit: on_submit,
            h1 { style: "margin: 0; font-size: 22px; font-weight: 700;", "ログイン" }
            TextInputField {
                label: "メールアドレス",
                name: "email",
                input_type: "email",
                required: true,
                value: credentials.read().email.clone(),
                oninput: move |v: String| credentials.write().email = v,
            }
            TextInputField {
                label: "パスワード",
                name: "password",
                input_type: "password",
                required: true,
                value: credentials.read().password.clone(),
                oninput: move |v: String| credentials.write().password = v,
            }
            button { r#type: "submit", style: PRIMARY_BUTTON_STYLE, disabled: submitting(), "ログイン" }
            FormMessageView { message: message() }
            Link { to: Route::SignupPage {}, span { style: "font-size: 14px; color: #2563EB;", "アカウントをお持ちでない方は新規登録" } }
        }
    }
}
