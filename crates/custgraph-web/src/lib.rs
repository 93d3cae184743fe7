//! custgraph Web Server
//!
//! Axum-based front-end for listing, searching and editing customers.

pub mod routes;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use custgraph_core::CustomerStore;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::health::index))
        .route(
            "/search",
            get(routes::search::search_form).post(routes::search::search_customers),
        )
        .route("/customers", get(routes::customers::list_customers))
        .route("/test", get(routes::customers::contact_names))
        // Forms
        .route("/add", get(routes::forms::add_form))
        .route("/delete", get(routes::forms::delete_form))
        .route("/update/{contact_name}", get(routes::forms::edit_form))
        // Mutations
        .route("/addCustomer", post(routes::customers::add_customer))
        .route("/updateCustomer", post(routes::customers::update_customer))
        .route("/deleteCustomer", post(routes::customers::delete_customer))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the web server on `host:port` until the process is stopped.
pub async fn run_server(store: Arc<dyn CustomerStore>, host: &str, port: u16) -> anyhow::Result<()> {
    let app = create_router(AppState::new(store));

    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    tracing::info!("Web server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use async_trait::async_trait;
    use custgraph_core::{CustError, CustResult, Customer, CustomerUpdate, MemoryStore, NewCustomer};
    use tower::ServiceExt;

    /// A store whose backend is unreachable.
    struct UnreachableStore;

    fn refused<T>() -> CustResult<T> {
        Err(CustError::store("connection refused"))
    }

    #[async_trait]
    impl CustomerStore for UnreachableStore {
        async fn ping(&self) -> CustResult<()> {
            refused()
        }
        async fn list_customers(&self) -> CustResult<Vec<Customer>> {
            refused()
        }
        async fn search_customers(&self, _term: &str) -> CustResult<Vec<Customer>> {
            refused()
        }
        async fn add_customer(&self, _customer: &NewCustomer) -> CustResult<Vec<Customer>> {
            refused()
        }
        async fn update_customer(&self, _update: &CustomerUpdate) -> CustResult<Vec<Customer>> {
            refused()
        }
        async fn delete_customer(&self, _contact_name: &str) -> CustResult<()> {
            refused()
        }
        async fn contact_names(&self) -> CustResult<Vec<String>> {
            refused()
        }
    }

    fn app(store: Arc<MemoryStore>) -> Router {
        create_router(AppState::new(store))
    }

    async fn get(router: &Router, uri: &str) -> Response {
        router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_form(router: &Router, uri: &str, form: &str) -> Response {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap();
        router.clone().oneshot(request).await.unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn names(router: &Router) -> Vec<String> {
        let response = get(router, "/test").await;
        assert_eq!(response.status(), StatusCode::OK);
        serde_json::from_str(&body_text(response).await).unwrap()
    }

    async fn seed(store: &MemoryStore, name: &str, company: &str, address: &str) {
        store
            .add_customer(&NewCustomer {
                contact_name: Some(name.to_string()),
                company_name: Some(company.to_string()),
                address: Some(address.to_string()),
                phone: Some("555".to_string()),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_health_check_reports_plain_text() {
        let router = app(Arc::new(MemoryStore::new()));
        let response = get(&router, "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "Hello Neo4j!");
    }

    #[tokio::test]
    async fn test_add_then_delete_scenario() {
        let router = app(Arc::new(MemoryStore::new()));

        let response = post_form(
            &router,
            "/addCustomer",
            "contactName=Alice&companyName=Acme&address=1+Main+St&phone=555",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let listing = body_text(get(&router, "/customers").await).await;
        assert_eq!(listing.matches("class=\"customer\"").count(), 1);
        assert!(listing.contains("Alice"));
        assert!(listing.contains("Acme"));
        assert!(listing.contains("1 Main St"));
        assert!(listing.contains("555"));

        let response = post_form(&router, "/deleteCustomer", "name=Alice").await;
        assert_eq!(response.status(), StatusCode::OK);
        let message: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(message["message"], "Customer Alice has been deleted.");

        let listing = body_text(get(&router, "/customers").await).await;
        assert_eq!(listing.matches("class=\"customer\"").count(), 0);
        assert!(names(&router).await.is_empty());
    }

    #[tokio::test]
    async fn test_listing_counts_distinct_customers() {
        let router = app(Arc::new(MemoryStore::new()));
        for i in 0..4 {
            let form = format!("contactName=c{i}&companyName=Co{i}");
            post_form(&router, "/addCustomer", &form).await;
        }
        let listing = body_text(get(&router, "/customers").await).await;
        assert_eq!(listing.matches("class=\"customer\"").count(), 4);
        assert_eq!(names(&router).await.len(), 4);
    }

    #[tokio::test]
    async fn test_add_existing_keeps_original_fields() {
        let store = Arc::new(MemoryStore::new());
        seed(&store, "Alice", "Acme", "1 Main St").await;
        let router = app(store.clone());

        let response = post_form(&router, "/addCustomer", "contactName=Alice&companyName=Globex").await;
        let body = body_text(response).await;
        assert!(body.contains("Acme"));
        assert!(!body.contains("Globex"));

        let stored = store.list_customers().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].company_name.as_deref(), Some("Acme"));
    }

    #[tokio::test]
    async fn test_add_without_contact_name_is_bad_request() {
        let router = app(Arc::new(MemoryStore::new()));
        let response = post_form(&router, "/addCustomer", "companyName=Acme").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(names(&router).await.is_empty());
    }

    #[tokio::test]
    async fn test_update_renames_existing_customer() {
        let store = Arc::new(MemoryStore::new());
        seed(&store, "Alice", "Acme", "1 Main St").await;
        let router = app(store);

        let response = post_form(
            &router,
            "/updateCustomer",
            "oldName=Alice&contactName=Alicia&companyName=Acme+Ltd&address=2+Main+St&phone=556",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("Alicia"));
        assert!(body.contains("Acme Ltd"));
        assert_eq!(names(&router).await, vec!["Alicia".to_string()]);
    }

    #[tokio::test]
    async fn test_update_unknown_name_lists_nothing() {
        let store = Arc::new(MemoryStore::new());
        seed(&store, "Alice", "Acme", "1 Main St").await;
        let before = store.list_customers().await.unwrap();
        let router = app(store.clone());

        let response = post_form(
            &router,
            "/updateCustomer",
            "oldName=Nobody&contactName=Somebody&companyName=X&address=Y&phone=Z",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert_eq!(body.matches("class=\"customer\"").count(), 0);
        assert_eq!(store.list_customers().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_update_missing_field_is_rejected() {
        let router = app(Arc::new(MemoryStore::new()));
        let response = post_form(&router, "/updateCustomer", "oldName=Alice&contactName=Alicia").await;
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_delete_removes_relationships_and_unknown_is_noop() {
        let store = Arc::new(MemoryStore::new());
        seed(&store, "Alice", "Acme", "1 Main St").await;
        seed(&store, "Bob", "Globex", "2 Elm St").await;
        store.relate("Alice", "Bob").await;
        let router = app(store.clone());

        let response = post_form(&router, "/deleteCustomer", "name=Alice").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(store.relationship_count().await, 0);
        assert_eq!(names(&router).await, vec!["Bob".to_string()]);

        let response = post_form(&router, "/deleteCustomer", "name=Nobody").await;
        assert_eq!(response.status(), StatusCode::OK);
        let message: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(message["message"], "Customer Nobody has been deleted.");
        assert_eq!(names(&router).await, vec!["Bob".to_string()]);
    }

    #[tokio::test]
    async fn test_search_returns_matching_customers() {
        let store = Arc::new(MemoryStore::new());
        seed(&store, "Alice", "Acme", "1 Main St").await;
        seed(&store, "Bob", "Globex", "2 Elm St").await;
        let router = app(store);

        let body = body_text(post_form(&router, "/search", "search_input=Elm").await).await;
        assert_eq!(body.matches("class=\"customer\"").count(), 1);
        assert!(body.contains("Bob"));

        let body = body_text(post_form(&router, "/search", "search_input=Nowhere").await).await;
        assert_eq!(body.matches("class=\"customer\"").count(), 0);

        let body = body_text(post_form(&router, "/search", "").await).await;
        assert_eq!(body.matches("class=\"customer\"").count(), 2);
    }

    #[tokio::test]
    async fn test_form_pages_render() {
        let router = app(Arc::new(MemoryStore::new()));
        for (uri, marker) in [
            ("/search", "name=\"search_input\""),
            ("/add", "action=\"/addCustomer\""),
            ("/delete", "action=\"/deleteCustomer\""),
            ("/update/Alice", "name=\"oldName\" value=\"Alice\""),
        ] {
            let response = get(&router, uri).await;
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
            assert!(body_text(response).await.contains(marker), "{uri}");
        }
    }

    #[tokio::test]
    async fn test_contact_names_survive_repeated_calls() {
        let store = Arc::new(MemoryStore::new());
        seed(&store, "Alice", "Acme", "1 Main St").await;
        let router = app(store);

        assert_eq!(names(&router).await, vec!["Alice".to_string()]);
        assert_eq!(names(&router).await, vec!["Alice".to_string()]);
        let listing = body_text(get(&router, "/customers").await).await;
        assert!(listing.contains("Alice"));
    }

    #[tokio::test]
    async fn test_health_check_reports_raw_error_text() {
        let router = create_router(AppState::new(Arc::new(UnreachableStore)));
        let response = get(&router, "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "Error: connection refused");
    }

    #[tokio::test]
    async fn test_store_failures_are_server_errors() {
        let router = create_router(AppState::new(Arc::new(UnreachableStore)));

        let response = get(&router, "/customers").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_text(response).await.contains("connection refused"));

        assert_eq!(get(&router, "/test").await.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = post_form(&router, "/addCustomer", "contactName=Alice").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = post_form(&router, "/deleteCustomer", "name=Alice").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = post_form(&router, "/search", "search_input=Acme").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_edit_link_round_trips_names_with_slashes() {
        let store = Arc::new(MemoryStore::new());
        seed(&store, "A/B", "Acme", "1 Main St").await;
        let router = app(store);

        let listing = body_text(get(&router, "/customers").await).await;
        let start = listing.find("href=\"/update/").unwrap() + "href=\"".len();
        let end = start + listing[start..].find('"').unwrap();
        let href = &listing[start..end];
        assert_eq!(href, "/update/A%2FB");

        let response = get(&router, href).await;
        assert_eq!(response.status(), StatusCode::OK);
        let form = body_text(response).await;
        assert!(
            form.contains("name=\"oldName\" value=\"A/B\"")
                || form.contains("name=\"oldName\" value=\"A&#x2f;B\""),
            "{form}"
        );
    }
}
