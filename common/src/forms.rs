//! Typed form records for the signup, login and profile screens.

use serde::{Deserialize, Serialize};

use crate::selection::OrderedSelection;

pub const PREFECTURE_OPTIONS: &[&str] = &["東京都", "大阪府", "福岡県"];
pub const COUNTRY_OPTIONS: &[&str] = &[JAPAN, "アメリカ", "中国"];
pub const VISA_STATUS_OPTIONS: &[&str] = &["技術・人文知識・国際業務", "永住者", "家族滞在"];
pub const JAPANESE_LEVEL_OPTIONS: &[&str] = &["N1", "N2", "N3", "ビジネス会話"];
pub const UNIT_PRICE_OPTIONS: &[&str] = &["〜30万円", "31〜50万円", "51〜70万円", "71万円〜"];

const JAPAN: &str = "日本";

/// Email and password, as entered on the signup and login screens.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BasicInfo {
    pub last_name: String,
    pub first_name: String,
    pub last_name_kana: String,
    pub first_name_kana: String,
    pub phone: String,
    pub birth_date: String,
    pub referral_code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WorkOnsite {
    #[default]
    Possible,
    NotPossible,
    Negotiable,
}

impl WorkOnsite {
    pub const ALL: [WorkOnsite; 3] = [WorkOnsite::Possible, WorkOnsite::NotPossible, WorkOnsite::Negotiable];

    pub fn label(&self) -> &'static str {
        match self {
            WorkOnsite::Possible => "可能",
            WorkOnsite::NotPossible => "不可",
            WorkOnsite::Negotiable => "応相談",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConcurrentProject {
    #[default]
    Yes,
    No,
}

impl ConcurrentProject {
    pub const ALL: [ConcurrentProject; 2] = [ConcurrentProject::Yes, ConcurrentProject::No];

    pub fn label(&self) -> &'static str {
        match self {
            ConcurrentProject::Yes => "あり",
            ConcurrentProject::No => "なし",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.label() == label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Nationality {
    #[default]
    Japan,
    Foreign { country: String, visa_status: String, japanese_level: String },
}

impl Nationality {
    /// Switching to another country keeps the visa and language answers already given.
    pub fn with_country(self, country: &str) -> Self {
        if country == JAPAN {
            return Nationality::Japan;
        }
        match self {
            Nationality::Japan => Nationality::Foreign {
                country: country.to_string(),
                visa_status: String::new(),
                japanese_level: String::new(),
            },
            Nationality::Foreign { visa_status, japanese_level, .. } => {
                Nationality::Foreign { country: country.to_string(), visa_status, japanese_level }
            }
        }
    }

    pub fn country(&self) -> &str {
        match self {
            Nationality::Japan => JAPAN,
            Nationality::Foreign { country, .. } => country,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProposalDetails {
    pub residence: String,
    pub nearest_station: String,
    pub work_frequency: String,
    pub ng_companies: String,
    pub nationality: Nationality,
    pub desired_unit_price: String,
    pub work_onsite: WorkOnsite,
    pub start_date: String,
    pub concurrent_project: ConcurrentProject,
    pub skills: OrderedSelection,
    pub desired_positions: OrderedSelection,
    pub self_pr: String,
}

/// Whether the user accepts project proposals. Only acceptance carries the follow-up answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalChoice {
    Allowed(ProposalDetails),
    Declined,
}

impl Default for ProposalChoice {
    fn default() -> Self {
        ProposalChoice::Allowed(ProposalDetails::default())
    }
}

impl ProposalChoice {
    pub fn is_allowed(&self) -> bool {
        matches!(self, ProposalChoice::Allowed(_))
    }

    /// Declining drops the follow-up answers; allowing again starts from a blank set.
    pub fn set_allowed(&mut self, allowed: bool) {
        if allowed == self.is_allowed() {
            return;
        }
        *self = if allowed { ProposalChoice::default() } else { ProposalChoice::Declined };
    }

    pub fn details(&self) -> Option<&ProposalDetails> {
        match self {
            ProposalChoice::Allowed(details) => Some(details),
            ProposalChoice::Declined => None,
        }
    }

    pub fn details_mut(&mut self) -> Option<&mut ProposalDetails> {
        match self {
            ProposalChoice::Allowed(details) => Some(details),
            ProposalChoice::Declined => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProfileForm {
    pub basics: BasicInfo,
    pub proposal: ProposalChoice,
}

/// A free-text input bound to one field of `T`.
pub struct TextFieldSpec<T> {
    pub name: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
    pub get: fn(&T) -> &String,
    pub set: fn(&mut T, String),
}

pub const BASIC_TEXT_FIELDS: &[TextFieldSpec<BasicInfo>] = &[
    TextFieldSpec { name: "lastName", label: "姓", input_type: "text", get: |f| &f.last_name, set: |f, v| f.last_name = v },
    TextFieldSpec { name: "firstName", label: "名", input_type: "text", get: |f| &f.first_name, set: |f, v| f.first_name = v },
    TextFieldSpec { name: "lastNameKana", label: "セイ", input_type: "text", get: |f| &f.last_name_kana, set: |f, v| f.last_name_kana = v },
    TextFieldSpec { name: "firstNameKana", label: "メイ", input_type: "text", get: |f| &f.first_name_kana, set: |f, v| f.first_name_kana = v },
    TextFieldSpec { name: "phone", label: "電話番号", input_type: "tel", get: |f| &f.phone, set: |f, v| f.phone = v },
    TextFieldSpec { name: "birthDate", label: "生年月日", input_type: "date", get: |f| &f.birth_date, set: |f, v| f.birth_date = v },
    TextFieldSpec { name: "referralCode", label: "リファラルコード", input_type: "text", get: |f| &f.referral_code, set: |f, v| f.referral_code = v },
];

pub const PROPOSAL_TEXT_FIELDS: &[TextFieldSpec<ProposalDetails>] = &[
    TextFieldSpec { name: "nearestStation", label: "最寄り駅", input_type: "text", get: |f| &f.nearest_station, set: |f, v| f.nearest_station = v },
    TextFieldSpec { name: "workFrequency", label: "稼働頻度", input_type: "text", get: |f| &f.work_frequency, set: |f, v| f.work_frequency = v },
    TextFieldSpec { name: "ngCompanies", label: "NG企業", input_type: "text", get: |f| &f.ng_companies, set: |f, v| f.ng_companies = v },
];

/// Row written to the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfileRecord {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub first_name_kana: String,
    pub last_name_kana: String,
    pub phone_number: Option<String>,
    pub birthday: Option<String>,
    pub referral_code: Option<String>,
    pub allow_proposal: bool,
    pub residence: Option<String>,
    pub nearest_station: Option<String>,
    pub work_onsite: Option<String>,
    pub available_from: Option<String>,
    pub work_frequency: Option<String>,
    pub desired_unit_price: Option<String>,
    pub concurrent_projects: Option<String>,
    pub ng_companies: Option<String>,
    pub nationality: Option<String>,
    pub work_visa_status: Option<String>,
    pub japanese_level: Option<String>,
    pub skills: Option<Vec<String>>,
    pub desired_positions: Option<Vec<String>>,
    pub self_pr: Option<String>,
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() { None } else { Some(value.to_string()) }
}

impl ProfileForm {
    pub fn to_record(&self, user_id: &str) -> UserProfileRecord {
        let basics = &self.basics;
        let mut record = UserProfileRecord {
            user_id: user_id.to_string(),
            first_name: basics.first_name.trim().to_string(),
            last_name: basics.last_name.trim().to_string(),
            first_name_kana: basics.first_name_kana.trim().to_string(),
            last_name_kana: basics.last_name_kana.trim().to_string(),
            phone_number: non_empty(&basics.phone),
            birthday: non_empty(&basics.birth_date),
            referral_code: non_empty(&basics.referral_code),
            allow_proposal: self.proposal.is_allowed(),
            residence: None,
            nearest_station: None,
            work_onsite: None,
            available_from: None,
            work_frequency: None,
            desired_unit_price: None,
            concurrent_projects: None,
            ng_companies: None,
            nationality: None,
            work_visa_status: None,
            japanese_level: None,
            skills: None,
            desired_positions: None,
            self_pr: None,
        };
        let ProposalChoice::Allowed(details) = &self.proposal else {
            return record;
        };
        record.residence = non_empty(&details.residence);
        record.nearest_station = non_empty(&details.nearest_station);
        record.work_onsite = Some(details.work_onsite.label().to_string());
        record.available_from = non_empty(&details.start_date);
        record.work_frequency = non_empty(&details.work_frequency);
        record.desired_unit_price = non_empty(&details.desired_unit_price);
        record.concurrent_projects = Some(details.concurrent_project.label().to_string());
        record.ng_companies = non_empty(&details.ng_companies);
        record.nationality = Some(details.nationality.country().to_string());
        if let Nationality::Foreign { visa_status, japanese_level, .. } = &details.nationality {
            record.work_visa_status = non_empty(visa_status);
            record.japanese_level = non_empty(japanese_level);
        }
        record.skills = Some(details.skills.to_vec());
        record.desired_positions = Some(details.desired_positions.to_vec());
        record.self_pr = non_empty(&details.self_pr);
        record
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn basics() -> BasicInfo {
        BasicInfo {
            last_name: "山田".into(),
            first_name: "太郎".into(),
            last_name_kana: "ヤマダ".into(),
            first_name_kana: "タロウ".into(),
            phone: "090-0000-0000".into(),
            birth_date: "1990-04-01".into(),
            referral_code: "".into(),
        }
    }

    #[test]
    fn declined_profile_writes_no_proposal_columns() {
        let form = ProfileForm { basics: basics(), proposal: ProposalChoice::Declined };
        let record = form.to_record("user-1");
        assert_eq!(record.user_id, "user-1");
        assert!(!record.allow_proposal);
        assert_eq!(record.referral_code, None);
        assert_eq!(record.residence, None);
        assert_eq!(record.work_onsite, None);
        assert_eq!(record.skills, None);
    }

    #[test]
    fn allowed_profile_writes_details() {
        let mut details = ProposalDetails {
            residence: "東京都".into(),
            desired_unit_price: "71万円〜".into(),
            work_onsite: WorkOnsite::Negotiable,
            concurrent_project: ConcurrentProject::No,
            ..Default::default()
        };
        details.skills.toggle("React");
        details.skills.toggle("TypeScript");
        details.desired_positions.toggle("PM");
        let form = ProfileForm { basics: basics(), proposal: ProposalChoice::Allowed(details) };

        let record = form.to_record("user-1");
        assert!(record.allow_proposal);
        assert_eq!(record.residence.as_deref(), Some("東京都"));
        assert_eq!(record.work_onsite.as_deref(), Some("応相談"));
        assert_eq!(record.concurrent_projects.as_deref(), Some("なし"));
        assert_eq!(record.nationality.as_deref(), Some("日本"));
        assert_eq!(record.work_visa_status, None);
        assert_eq!(record.skills, Some(vec!["React".to_string(), "TypeScript".to_string()]));
        assert_eq!(record.desired_positions, Some(vec!["PM".to_string()]));
    }

    #[test]
    fn foreign_nationality_carries_visa_answers() {
        let nationality = Nationality::Japan.with_country("中国");
        let Nationality::Foreign { visa_status, .. } = &nationality else { panic!("expected foreign") };
        assert!(visa_status.is_empty());

        let nationality = Nationality::Foreign {
            country: "中国".into(),
            visa_status: "永住者".into(),
            japanese_level: "N1".into(),
        }
        .with_country("アメリカ");
        assert_eq!(nationality.country(), "アメリカ");

        let form = ProfileForm {
            basics: basics(),
            proposal: ProposalChoice::Allowed(ProposalDetails { nationality, ..Default::default() }),
        };
        let record = form.to_record("u");
        assert_eq!(record.nationality.as_deref(), Some("アメリカ"));
        assert_eq!(record.work_visa_status.as_deref(), Some("永住者"));
        assert_eq!(record.japanese_level.as_deref(), Some("N1"));
        assert_eq!(Nationality::Japan.with_country("日本"), Nationality::Japan);
    }

    #[test]
    fn proposal_choice_switches_variants() {
        let mut choice = ProposalChoice::default();
        if let Some(details) = choice.details_mut() {
            details.residence = "大阪府".into();
        }
        choice.set_allowed(true);
        assert_eq!(choice.details_mut().map(|d| d.residence.clone()), Some("大阪府".to_string()));
        choice.set_allowed(false);
        assert_eq!(choice, ProposalChoice::Declined);
        assert!(choice.details_mut().is_none());
        choice.set_allowed(true);
        assert_eq!(choice, ProposalChoice::Allowed(ProposalDetails::default()));
    }

    #[test]
    fn field_tables_bind_their_fields() {
        let mut info = BasicInfo::default();
        for (i, field) in BASIC_TEXT_FIELDS.iter().enumerate() {
            (field.set)(&mut info, format!("v{i}"));
        }
        for (i, field) in BASIC_TEXT_FIELDS.iter().enumerate() {
            assert_eq!((field.get)(&info), &format!("v{i}"), "{}", field.name);
        }
        assert_eq!(WorkOnsite::from_label("不可"), Some(WorkOnsite::NotPossible));
        assert_eq!(ConcurrentProject::from_label("なし"), Some(ConcurrentProject::No));
        assert!(Credentials { email: "a@b.c".into(), password: "pw".into() }.is_complete());
        assert!(!Credentials::default().is_complete());
    }
}
