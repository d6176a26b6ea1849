use common::{backend_error::failure_message, forms::Credentials};
use dioxus::prelude::*;

use crate::{
    api::{auth_api::sign_up, error_message},
    components::form_components::{
        form_message::{FormMessage, FormMessageView},
        text_input_field::TextInputField,
    },
    pages::{FORM_CARD_STYLE, PRIMARY_BUTTON_STYLE},
    routes::Route,
};

/// Email signup. The confirmation mail links back to the profile page.
#[component]
pub fn SignupPage() -> Element {
    let mut credentials = use_signal(Credentials::default);
    let mut message = use_signal(|| None::<FormMessage>);
    let mut submitting = use_signal(|| false);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        submitting.set(true);
        spawn(async move {
            let outcome = match sign_up(credentials()).await {
                Ok(()) => FormMessage::Success("登録が完了しました。認証メールをご確認ください。".to_string()),
                Err(e) => FormMessage::Failure(failure_message("登録に失敗しました：", error_message(&e))),
            };
            message.set(Some(outcome));
            submitting.set(false);
        });
    };

    rsx! {
        Title { "新規登録 - ZENSHIN Freelance" }
        form {
            style: FORM_CARD_STYLE,
            onsubmit: on_submit,
            h1 { style: "margin: 0; font-size: 22px; font-weight: 700;", "新規登録" }
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
            button { r#type: "submit", style: PRIMARY_BUTTON_STYLE, disabled: submitting(), "登録する" }
            FormMessageView { message: message() }
            Link { to: Route::LoginPage {}, span { style: "font-size: 14px; color: #2563EB;", "アカウントをお持ちの方はログイン" } }
        }
    }
}
