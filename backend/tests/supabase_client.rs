use backend::{
    api::{
        applications::apply_to_project,
        auth::{current_user, sign_in, sign_up},
        facet_options::load_all_facets,
        profile::submit_profile,
        projects::{get_project_detail, list_projects},
    },
    db_utils::{supabase_client::SupabaseClient, supabase_config::BackendConfig},
};
use common::{
    backend_error::{AuthErrorReason, BackendError},
    facet::{FacetKey, AREA_OPTIONS},
    forms::{BasicInfo, Credentials, ProfileForm, ProposalChoice},
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ANON_KEY: &str = "anon-key";

fn client(server: &MockServer) -> SupabaseClient {
    SupabaseClient::new(BackendConfig::new(server.uri(), ANON_KEY))
}

fn credentials(email: &str, password: &str) -> Credentials {
    Credentials { email: email.to_string(), password: password.to_string() }
}

#[tokio::test]
async fn list_projects_reads_joined_rows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/projects"))
        .and(query_param(
            "select",
            "project_id,project_name,unit_price,prefecture,work_style,project_skills(skills(name)),project_positions(positions(name))",
        ))
        .and(query_param("order", "created_at.desc"))
        .and(header("apikey", ANON_KEY))
        .and(header("authorization", "Bearer anon-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "project_id": "p-1",
                "project_name": "運送会社向けDXサービス新規構築",
                "unit_price": 100,
                "prefecture": "東京都",
                "work_style": "フルリモート",
                "project_skills": [{ "skills": { "name": "PHP" } }],
                "project_positions": [{ "positions": { "name": "PM" } }]
            },
            {
                "project_id": "p-2",
                "project_name": "電子決済サービス開発",
                "unit_price": null,
                "prefecture": null,
                "work_style": null,
                "project_skills": [],
                "project_positions": []
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let projects = list_projects(&client(&server)).await.unwrap();
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].name, "運送会社向けDXサービス新規構築");
    assert!(projects[0].skills.contains("PHP"));
    assert!(projects[0].positions.contains("PM"));
    assert_eq!(projects[1].unit_price, None);
}

#[tokio::test]
async fn fetch_failure_becomes_query_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/projects"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": "PGRST200",
            "message": "Could not find a relationship between 'projects' and 'project_skills'"
        })))
        .mount(&server)
        .await;

    let err = list_projects(&client(&server)).await.unwrap_err();
    assert_eq!(
        err,
        BackendError::Query("Could not find a relationship between 'projects' and 'project_skills'".to_string())
    );
}

#[tokio::test]
async fn project_detail_filters_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/projects"))
        .and(query_param("project_id", "eq.p-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "project_id": "p-1",
            "project_name": "電子決済サービス開発",
            "unit_price": 80,
            "prefecture": "大阪府",
            "work_style": "一部リモート",
            "description": "決済APIの設計",
            "project_skills": [{ "skills": { "name": "Go" } }],
            "project_positions": []
        }])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/projects"))
        .and(query_param("project_id", "eq.missing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let detail = get_project_detail(&client(&server), "p-1").await.unwrap();
    assert_eq!(detail.description.as_deref(), Some("決済APIの設計"));
    assert_eq!(detail.skills, vec!["Go"]);

    let err = get_project_detail(&client(&server), "missing").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn sign_in_returns_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "password"))
        .and(body_json(json!({ "email": "taro@example.com", "password": "secret" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "user-token",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "refresh",
            "user": { "id": "u-1", "email": "taro@example.com", "role": "authenticated" }
        })))
        .mount(&server)
        .await;

    let session = sign_in(&client(&server), credentials(" taro@example.com ", "secret")).await.unwrap();
    assert_eq!(session.access_token, "user-token");
    assert_eq!(session.user_id(), "u-1");
    assert_eq!(session.expires_in, Some(3600));
}

#[tokio::test]
async fn sign_in_maps_bad_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": 400,
            "error_code": "invalid_credentials",
            "msg": "Invalid login credentials"
        })))
        .mount(&server)
        .await;

    let err = sign_in(&client(&server), credentials("taro@example.com", "wrong")).await.unwrap_err();
    assert_eq!(err, BackendError::Auth(AuthErrorReason::InvalidCredentials));
}

#[tokio::test]
async fn sign_in_reports_unconfirmed_email() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "Email not confirmed"
        })))
        .mount(&server)
        .await;

    let err = sign_in(&client(&server), credentials("taro@example.com", "secret")).await.unwrap_err();
    assert_eq!(err, BackendError::Auth(AuthErrorReason::EmailNotConfirmed));
}

#[tokio::test]
async fn incomplete_credentials_never_reach_the_service() {
    let server = MockServer::start().await;
    Mock::given(method("POST")).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

    let err = sign_up(&client(&server), credentials("", "secret")).await.unwrap_err();
    assert!(matches!(err, BackendError::Auth(AuthErrorReason::Other(_))));
}

#[tokio::test]
async fn sign_up_sends_profile_redirect() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .and(query_param("redirect_to", "http://localhost:8080/profile"))
        .and(body_json(json!({ "email": "hanako@example.com", "password": "secret" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "u-2", "email": "hanako@example.com" })))
        .expect(1)
        .mount(&server)
        .await;

    sign_up(&client(&server), credentials("hanako@example.com", "secret")).await.unwrap();
}

#[tokio::test]
async fn sign_up_maps_duplicate_email() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "code": 422,
            "error_code": "user_already_exists",
            "msg": "User already registered"
        })))
        .mount(&server)
        .await;

    let err = sign_up(&client(&server), credentials("hanako@example.com", "secret")).await.unwrap_err();
    assert_eq!(err, BackendError::Auth(AuthErrorReason::EmailTaken));
}

#[tokio::test]
async fn current_user_depends_on_the_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .and(header("authorization", "Bearer good-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "u-1", "email": "taro@example.com" })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .and(header("authorization", "Bearer stale-token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "code": 401, "error_code": "bad_jwt", "msg": "invalid JWT" })))
        .mount(&server)
        .await;

    let anonymous = current_user(&client(&server)).await.unwrap();
    assert_eq!(anonymous, None);

    let stale = current_user(&client(&server).with_access_token(Some("stale-token".into()))).await.unwrap();
    assert_eq!(stale, None);

    let user = current_user(&client(&server).with_access_token(Some("good-token".into()))).await.unwrap();
    assert_eq!(user.map(|u| u.id), Some("u-1".to_string()));
}

#[tokio::test]
async fn profile_is_inserted_as_the_user() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/users"))
        .and(header("authorization", "Bearer user-token"))
        .and(header("prefer", "return=minimal"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let form = ProfileForm {
        basics: BasicInfo { last_name: "山田".into(), first_name: "太郎".into(), ..Default::default() },
        proposal: ProposalChoice::Declined,
    };
    let user_client = client(&server).with_access_token(Some("user-token".into()));
    submit_profile(&user_client, "u-1", &form).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body[0]["user_id"], "u-1");
    assert_eq!(body[0]["allow_proposal"], false);
    assert_eq!(body[0]["residence"], serde_json::Value::Null);
}

#[tokio::test]
async fn profile_write_failure_keeps_service_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/users"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "code": "23505",
            "message": "duplicate key value violates unique constraint \"users_pkey\""
        })))
        .mount(&server)
        .await;

    let err = submit_profile(&client(&server), "u-1", &ProfileForm::default()).await.unwrap_err();
    assert_eq!(err, BackendError::Write("duplicate key value violates unique constraint \"users_pkey\"".to_string()));
}

#[tokio::test]
async fn applying_requires_a_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "u-1" })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/applications"))
        .and(body_json(json!({ "project_id": "p-1", "user_id": "u-1" })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let err = apply_to_project(&client(&server), "p-1").await.unwrap_err();
    assert_eq!(err, BackendError::Auth(AuthErrorReason::NotSignedIn));

    apply_to_project(&client(&server).with_access_token(Some("user-token".into())), "p-1").await.unwrap();
}

#[tokio::test]
async fn facet_options_fall_back_to_empty_on_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/skills"))
        .and(query_param("select", "name"))
        .and(query_param("order", "id.asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "name": "Rust" }, { "name": "React" }])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/positions"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let facets = load_all_facets(&client(&server)).await;
    let keys: Vec<FacetKey> = facets.iter().map(|f| f.key).collect();
    assert_eq!(keys, FacetKey::ALL.to_vec());
    assert_eq!(facets[0].values, vec!["Rust", "React"]);
    assert!(facets[1].values.is_empty());
    assert_eq!(facets[2].values.len(), AREA_OPTIONS.len());
}
