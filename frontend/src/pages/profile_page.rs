//! Profile registration: basic info plus the optional proposal preferences.

use common::{
    backend_error::failure_message,
    facet::{Facet, FacetKey},
    forms::{
        BASIC_TEXT_FIELDS, COUNTRY_OPTIONS, ConcurrentProject, JAPANESE_LEVEL_OPTIONS, Nationality, PREFECTURE_OPTIONS,
        PROPOSAL_TEXT_FIELDS, ProfileForm, ProposalDetails, UNIT_PRICE_OPTIONS, VISA_STATUS_OPTIONS, WorkOnsite,
    },
};
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::{
    api::{NOT_SIGNED_IN_CODE, catalog_api::load_facets, error_code, error_message, profile_api::submit_profile},
    components::form_components::{
        form_message::{FormMessage, FormMessageView},
        multi_select_field::MultiSelectField,
        select_field::SelectField,
        text_input_field::{TextAreaField, TextInputField},
    },
    data_definitions::session_context::SessionContext,
    pages::{FORM_CARD_STYLE, PRIMARY_BUTTON_STYLE},
};

const USER_LOOKUP_FAILED: &str = "ユーザー情報の取得に失敗しました。ログイン状態を確認してください。";

fn owned(options: &[&str]) -> Vec<String> {
    options.iter().map(|o| o.to_string()).collect()
}

fn update_details(mut form: Signal<ProfileForm>, update: impl FnOnce(&mut ProposalDetails)) {
    if let Some(details) = form.write().proposal.details_mut() {
        update(details);
    }
}

#[component]
pub fn ProfilePage() -> Element {
    let session_context = use_context::<SessionContext>();
    let mut form = use_signal(ProfileForm::default);
    let mut message = use_signal(|| None::<FormMessage>);
    let mut submitting = use_signal(|| false);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        let Some(access_token) = session_context.access_token() else {
            message.set(Some(FormMessage::Failure(USER_LOOKUP_FAILED.to_string())));
            return;
        };
        submitting.set(true);
        spawn(async move {
            let outcome = match submit_profile(access_token, form()).await {
                Ok(()) => FormMessage::Success("プロフィールの登録が完了しました！".to_string()),
                Err(e) if error_code(&e) == Some(NOT_SIGNED_IN_CODE) => FormMessage::Failure(USER_LOOKUP_FAILED.to_string()),
                Err(e) => FormMessage::Failure(failure_message("プロフィール保存に失敗しました：", error_message(&e))),
            };
            message.set(Some(outcome));
            submitting.set(false);
        });
    };

    let allowed = form.read().proposal.is_allowed();

    rsx! {
        Title { "プロフィール登録 - ZENSHIN Freelance" }
        form {
            style: "{FORM_CARD_STYLE} max-width: 720px;",
            onsubmit: on_submit,
            h1 { style: "margin: 0; font-size: 22px; font-weight: 700;", "プロフィール登録" }

            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px;",
                for field in BASIC_TEXT_FIELDS.iter() {
                    TextInputField {
                        key: "{field.name}",
                        label: field.label.to_string(),
                        name: field.name.to_string(),
                        input_type: field.input_type.to_string(),
                        value: (field.get)(&form.read().basics).clone(),
                        oninput: move |v: String| (field.set)(&mut form.write().basics, v),
                    }
                }
            }

            fieldset {
                style: "display: flex; gap: 20px; border: none; padding: 0; margin: 0;",
                legend { style: "font-size: 14px; font-weight: 500; color: #374151; margin-bottom: 6px;", "案件の提案を受け取る" }
                label {
                    input {
                        r#type: "radio",
                        name: "allowProposal",
                        checked: allowed,
                        onchange: move |_| form.write().proposal.set_allowed(true),
                    }
                    " 可"
                }
                label {
                    input {
                        r#type: "radio",
                        name: "allowProposal",
                        checked: !allowed,
                        onchange: move |_| form.write().proposal.set_allowed(false),
                    }
                    " 不可"
                }
            }

            if allowed {
                ProposalFields { form }
            }

            button { r#type: "submit", style: PRIMARY_BUTTON_STYLE, disabled: submitting(), "登録する" }
            FormMessageView { message: message() }
        }
    }
}

#[component]
fn ProposalFields(form: Signal<ProfileForm>) -> Element {
    let facets = use_resource(move || async move {
        match load_facets().await {
            Ok(facets) => facets,
            Err(e) => {
                warn!("profile options unavailable: {e}");
                Vec::new()
            }
        }
    });
    let options_for = move |key: FacetKey| -> Vec<String> {
        facets.read().as_ref().and_then(|list: &Vec<Facet>| list.iter().find(|f| f.key == key).map(|f| f.values.clone())).unwrap_or_default()
    };

    let Some(details) = form.read().proposal.details().cloned() else {
        return rsx! {};
    };
    let foreign = match &details.nationality {
        Nationality::Japan => None,
        Nationality::Foreign { visa_status, japanese_level, .. } => Some((visa_status.clone(), japanese_level.clone())),
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 12px;",
            SelectField {
                label: "居住地",
                name: "residence",
                value: details.residence.clone(),
                options: owned(PREFECTURE_OPTIONS),
                onchange: move |v: String| update_details(form, |d| d.residence = v),
            }
            for field in PROPOSAL_TEXT_FIELDS.iter() {
                TextInputField {
                    key: "{field.name}",
                    label: field.label.to_string(),
                    name: field.name.to_string(),
                    input_type: field.input_type.to_string(),
                    value: (field.get)(&details).clone(),
                    oninput: move |v: String| update_details(form, |d| (field.set)(d, v)),
                }
            }
            SelectField {
                label: "国籍",
                name: "nationality",
                value: details.nationality.country().to_string(),
                options: owned(COUNTRY_OPTIONS),
                onchange: move |v: String| update_details(form, |d| {
                    let current = std::mem::take(&mut d.nationality);
                    d.nationality = current.with_country(&v);
                }),
            }
            if let Some((visa_status, japanese_level)) = foreign {
                SelectField {
                    label: "在留資格",
                    name: "workVisaStatus",
                    value: visa_status,
                    options: owned(VISA_STATUS_OPTIONS),
                    onchange: move |v: String| update_details(form, |d| {
                        if let Nationality::Foreign { visa_status, .. } = &mut d.nationality {
                            *visa_status = v;
                        }
                    }),
                }
                SelectField {
                    label: "日本語レベル",
                    name: "japaneseLevel",
                    value: japanese_level,
                    options: owned(JAPANESE_LEVEL_OPTIONS),
                    onchange: move |v: String| update_details(form, |d| {
                        if let Nationality::Foreign { japanese_level, .. } = &mut d.nationality {
                            *japanese_level = v;
                        }
                    }),
                }
            }
            SelectField {
                label: "希望単価",
                name: "desiredUnitPrice",
                value: details.desired_unit_price.clone(),
                options: owned(UNIT_PRICE_OPTIONS),
                onchange: move |v: String| update_details(form, |d| d.desired_unit_price = v),
            }
            SelectField {
                label: "出社可否",
                name: "workOnsite",
                value: details.work_onsite.label().to_string(),
                options: WorkOnsite::ALL.iter().map(|w| w.label().to_string()).collect::<Vec<_>>(),
                onchange: move |v: String| update_details(form, |d| {
                    if let Some(choice) = WorkOnsite::from_label(&v) {
                        d.work_onsite = choice;
                    }
                }),
            }
            TextInputField {
                label: "稼働開始可能日",
                name: "availableFrom",
                input_type: "date",
                value: details.start_date.clone(),
                oninput: move |v: String| update_details(form, |d| d.start_date = v),
            }
            SelectField {
                label: "並行案件",
                name: "concurrentProjects",
                value: details.concurrent_project.label().to_string(),
                options: ConcurrentProject::ALL.iter().map(|c| c.label().to_string()).collect::<Vec<_>>(),
                onchange: move |v: String| update_details(form, |d| {
                    if let Some(choice) = ConcurrentProject::from_label(&v) {
                        d.concurrent_project = choice;
                    }
                }),
            }
            MultiSelectField {
                label: "スキル",
                options: options_for(FacetKey::Skill),
                selected: details.skills.to_vec(),
                on_toggle: move |v: String| update_details(form, |d| {
                    d.skills.toggle(&v);
                }),
                on_remove: move |v: String| update_details(form, |d| d.skills.clear(&v)),
            }
            MultiSelectField {
                label: "希望ポジション",
                options: options_for(FacetKey::Position),
                selected: details.desired_positions.to_vec(),
                on_toggle: move |v: String| update_details(form, |d| {
                    d.desired_positions.toggle(&v);
                }),
                on_remove: move |v: String| update_details(form, |d| d.desired_positions.clear(&v)),
            }
            TextAreaField {
                label: "自己PR",
                name: "selfPr",
                value: details.self_pr.clone(),
                oninput: move |v: String| update_details(form, |d| d.self_pr = v),
            }
        }
    }
}
