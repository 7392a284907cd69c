
use portfolio_frontend::{
    entities::contact_me::ContactFormSubmission,
    errors::FetchError,
    repositories::portfolio_api::PortfolioApi,
};
use serde_json::{json, Value};
use test_utils::*;

#[actix_rt::test]
async fn projects_are_unwrapped_from_data_envelope() {
    let server = TestApi::spawn().await;
    server.seed_portfolio();

    let projects = server.api().get_projects().await.unwrap();

    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].title, "Atlas");
    assert_eq!(projects[0].tech_stack, ["Rust", "Tokio", "Axum", "Postgres", "Redis"]);
    assert_eq!(projects[1].github_link, None);
}

#[actix_rt::test]
async fn project_detail_requests_the_right_id() {
    let server = TestApi::spawn().await;
    server.seed_portfolio();

    let project = server.api().get_project(1).await.unwrap();

    assert_eq!(project.description, "Maps for everyone, in detail");
    assert_eq!(server.requests_to("GET", "/projects/1").len(), 1);
}

#[actix_rt::test]
async fn every_request_sends_json_headers() {
    let server = TestApi::spawn().await;
    server.seed_portfolio();

    server.api().get_experiences().await.unwrap();

    let request = &server.requests_to("GET", "/experiences")[0];
    assert_eq!(request.accept.as_deref(), Some("application/json"));
    assert_eq!(request.content_type.as_deref(), Some("application/json"));
}

#[actix_rt::test]
async fn bare_skill_array_is_an_unexpected_shape() {
    let server = TestApi::spawn().await;
    server.respond_json(
        "GET",
        "/skills",
        200,
        json!([{"id": 1, "name": "Rust", "proficiency": 90, "years": 3, "category": "Backend"}]),
    );

    let err = server.api().get_skills().await.unwrap_err();

    assert!(matches!(err, FetchError::UnexpectedShape(ref msg) if msg.starts_with("/skills")));
}

#[actix_rt::test]
async fn enveloped_skills_decode() {
    let server = TestApi::spawn().await;
    server.seed_portfolio();

    let skills = server.api().get_skills().await.unwrap();

    assert_eq!(skills[0].name, "React");
    assert_eq!(skills[1].description, "");
}

#[actix_rt::test]
async fn non_2xx_is_a_status_error() {
    let server = TestApi::spawn().await;
    server.respond_json("GET", "/experiences", 500, json!({"detail": "boom"}));

    let err = server.api().get_experiences().await.unwrap_err();

    assert_eq!(err, FetchError::Status(500));
    assert_eq!(err.to_string(), "HTTP error! status: 500");
}

#[actix_rt::test]
async fn html_response_is_rejected_as_not_json() {
    let server = TestApi::spawn().await;
    server.respond_raw("GET", "/social-media", 200, "text/html", "<html>maintenance</html>");

    let err = server.api().get_social_media_links().await.unwrap_err();

    assert!(matches!(err, FetchError::NotJson(ref ct) if ct.starts_with("text/html")));
}

#[actix_rt::test]
async fn truncated_json_is_malformed() {
    let server = TestApi::spawn().await;
    server.respond_raw("GET", "/admin-contact", 200, "application/json", r#"{"email": "dev@"#);

    let err = server.api().get_admin_contact().await.unwrap_err();

    assert!(matches!(err, FetchError::MalformedPayload(_)));
}

#[actix_rt::test]
async fn unreachable_server_is_a_network_error() {
    let server = TestApi::spawn().await;
    let mut config = server.config.clone();
    config.api_base_url = "http://127.0.0.1:9/api".to_string();
    let api = portfolio_frontend::repositories::http_api::HttpPortfolioApi::new(&config).unwrap();

    let err = api.get_projects().await.unwrap_err();

    assert!(matches!(err, FetchError::Network(_)));
}

#[actix_rt::test]
async fn contact_submission_posts_the_fields() {
    let server = TestApi::spawn().await;
    server.respond_json("POST", "/contact", 201, json!({"id": 7}));

    server
        .api()
        .submit_contact(&ContactFormSubmission::new("Ada", "ada@example.com", "Hello"))
        .await
        .unwrap();

    let posted = &server.requests_to("POST", "/contact")[0];
    let body: Value = serde_json::from_str(&posted.body).unwrap();
    assert_eq!(body, json!({"name": "Ada", "email": "ada@example.com", "message": "Hello"}));
}

#[actix_rt::test]
async fn contact_submission_only_checks_status() {
    let server = TestApi::spawn().await;
    server.respond_raw("POST", "/contact", 200, "text/plain", "ok");
    assert!(server.api().submit_contact(&ContactFormSubmission::default()).await.is_ok());

    server.respond_json("POST", "/contact", 400, json!({"email": ["invalid"]}));
    let err = server
        .api()
        .submit_contact(&ContactFormSubmission::default())
        .await
        .unwrap_err();
    assert_eq!(err, FetchError::Status(400));
}
