//! Integration tests for `PageClient` using wiremock HTTP mocks.

use fsamap_core::RawDistrict;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fsamap_scraper::{extract_rep_page, PageClient, ScraperError};

fn test_client() -> PageClient {
    PageClient::new(5, "fsamap-test/0.1").expect("failed to build test PageClient")
}

#[tokio::test]
async fn fetch_html_returns_body_and_sends_user_agent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wiki/List_of_postal_codes_of_Canada:_K"))
        .and(header("user-agent", "fsamap-test/0.1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<table></table>"))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/wiki/List_of_postal_codes_of_Canada:_K", server.uri());
    let body = test_client().fetch_html(&url).await.expect("should fetch");
    assert_eq!(body, "<table></table>");
}

#[tokio::test]
async fn fetched_rep_page_feeds_the_extractor() {
    let server = MockServer::start().await;

    let page = r#"<div class="field--name-field-party">Green Party of Ontario</div>
        <div class="field--name-field-email-address"><div class="field__item">MSchreiner-QP@ola.org</div></div>"#;
    Mock::given(method("GET"))
        .and(path("/en/members/all/mike-schreiner"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page))
        .mount(&server)
        .await;

    let url = format!("{}/en/members/all/mike-schreiner", server.uri());
    let html = test_client().fetch_html(&url).await.expect("should fetch");
    let rep = extract_rep_page(&html);
    assert_eq!(rep.party.as_deref(), Some("Green Party of Ontario"));
    assert_eq!(rep.email(), Some("mschreiner-qp@ola.org"));
    assert!(rep.phone().is_none());
}

#[tokio::test]
async fn fetch_json_parses_raw_districts() {
    let server = MockServer::start().await;

    let body = json!([{
        "id": 30,
        "name": "Etobicoke North",
        "municipalities": ["Toronto"],
        "population": 117_601,
        "areaSquareKm": 48.0,
        "mppUrl": "/en/members/all/doug-ford",
        "mppName": "Hon. Doug Ford"
    }]);

    Mock::given(method("GET"))
        .and(path("/districts.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let url = format!("{}/districts.json", server.uri());
    let raws: Vec<RawDistrict> = test_client().fetch_json(&url).await.expect("should parse");
    assert_eq!(raws.len(), 1);
    assert_eq!(raws[0].id, 30);
    assert_eq!(raws[0].mpp_name, "Hon. Doug Ford");
    assert_eq!(raws[0].mpp_url, "/en/members/all/doug-ford");
}

#[tokio::test]
async fn not_found_maps_to_not_found_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let url = format!("{}/missing", server.uri());
    let err = test_client().fetch_html(&url).await.unwrap_err();
    assert!(
        matches!(err, ScraperError::NotFound { ref url } if url.ends_with("/missing")),
        "expected NotFound, got: {err:?}"
    );
}

#[tokio::test]
async fn server_error_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/busy", server.uri());
    let err = test_client().fetch_html(&url).await.unwrap_err();
    assert!(
        matches!(err, ScraperError::UnexpectedStatus { status: 503, .. }),
        "expected UnexpectedStatus(503), got: {err:?}"
    );
}

#[tokio::test]
async fn malformed_json_maps_to_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let url = format!("{}/districts.json", server.uri());
    let err = test_client()
        .fetch_json::<Vec<RawDistrict>>(&url)
        .await
        .unwrap_err();
    assert!(
        matches!(err, ScraperError::Deserialize { ref context, .. } if context == &url),
        "expected Deserialize, got: {err:?}"
    );
}
