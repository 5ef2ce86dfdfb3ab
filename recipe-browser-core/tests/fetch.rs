//! Catalog fetch against a local HTTP server standing in for the recipes API.

use axum::{Router, http::StatusCode, routing::get};
use recipe_browser_core::{
    AppStatus, ClientConfig, FETCH_ERROR_MESSAGE, RecipeClient, RecipeError, ResultsView,
    load_catalog, render,
};
use std::time::Duration;
use tokio::net::TcpListener;

const PAYLOAD: &str = r#"{"recipes":[
    {"id":1,"name":"Chicken Alfredo","cuisine":"Italian","rating":4.5,"reviewCount":12,"prepTimeMinutes":15,"cookTimeMinutes":20,"difficulty":"Easy","tags":["Pasta"],"image":"https://example.com/1.webp"},
    {"id":2,"name":"Beef Stew","cuisine":"American","rating":4.8,"reviewCount":40,"prepTimeMinutes":25,"cookTimeMinutes":120,"difficulty":"Medium","tags":["Stew","Comfort"],"image":"https://example.com/2.webp"}
],"total":2,"skip":0,"limit":30}"#;

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn config(endpoint: String) -> ClientConfig {
    ClientConfig {
        endpoint,
        timeout: Some(Duration::from_secs(5)),
    }
}

#[tokio::test]
async fn fetch_all_decodes_the_collection() {
    let base = serve(Router::new().route("/recipes/", get(|| async { PAYLOAD }))).await;
    let client = RecipeClient::with_config(config(format!("{}/recipes/", base))).unwrap();

    let catalog = client.fetch_all().await.unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.recipes[0].name, "Chicken Alfredo");
    assert_eq!(catalog.recipes[1].tags, vec!["Stew", "Comfort"]);
    assert!(catalog.fetched_at.is_some());
}

#[tokio::test]
async fn server_error_is_a_status_failure() {
    let base = serve(Router::new().route(
        "/recipes/",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    ))
    .await;

    let result = load_catalog(config(format!("{}/recipes/", base))).await;
    assert!(matches!(result, Err(RecipeError::Status(500))));
}

#[tokio::test]
async fn malformed_body_is_a_json_failure() {
    let base = serve(Router::new().route("/recipes/", get(|| async { "{\"recipes\": 7}" }))).await;

    let result = load_catalog(config(format!("{}/recipes/", base))).await;
    assert!(matches!(result, Err(RecipeError::Json(_))));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_network_failure() {
    // Bind then drop so the port is very likely closed.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = load_catalog(config(format!("http://{}/recipes/", addr))).await;
    assert!(matches!(result, Err(RecipeError::Network(_))));
}

#[tokio::test]
async fn failed_load_renders_the_fixed_message() {
    let base = serve(Router::new().route(
        "/recipes/",
        get(|| async { (StatusCode::NOT_FOUND, "missing") }),
    ))
    .await;

    let mut status = AppStatus::Loading;
    status.finish_loading(load_catalog(config(format!("{}/recipes/", base))).await);

    assert_eq!(
        render(&status),
        ResultsView::Error {
            message: FETCH_ERROR_MESSAGE.to_string()
        }
    );
    assert_eq!(status.interact(|s| s.toggle_layout()), None);
}

#[tokio::test]
async fn successful_load_renders_a_listing() {
    let base = serve(Router::new().route("/recipes/", get(|| async { PAYLOAD }))).await;

    let mut status = AppStatus::Loading;
    status.finish_loading(load_catalog(config(format!("{}/recipes/", base))).await);

    match render(&status) {
        ResultsView::Listing {
            cards, pagination, ..
        } => {
            assert_eq!(cards.len(), 2);
            assert_eq!(cards[1].details_line, "Prep: 25min | Cook: 120min | Medium");
            assert!(pagination.is_none());
        }
        other => panic!("expected listing, got {:?}", other),
    }
}

#[tokio::test]
async fn image_bytes_are_returned_verbatim() {
    let base = serve(Router::new().route(
        "/img/1.webp",
        get(|| async { vec![0x52u8, 0x49, 0x46, 0x46] }),
    ))
    .await;
    let client = RecipeClient::new().unwrap();

    let bytes = client
        .get_image_bytes(&format!("{}/img/1.webp", base))
        .await
        .unwrap();
    assert_eq!(bytes, vec![0x52, 0x49, 0x46, 0x46]);

    let missing = client.get_image_bytes(&format!("{}/img/2.webp", base)).await;
    assert!(matches!(missing, Err(RecipeError::Status(404))));
}
