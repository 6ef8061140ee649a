//! The API client and its request helper.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use civic_core::ports::{HttpRequest, HttpTransport, TenantProvider};
use civic_core::{ClientConfig, ClientError};
use civic_types::{AuthResponse, Citizen, LoginRequest, RegisterRequest};

use crate::options::RequestOptions;
use crate::path;

/// Header carrying the tenant on every request.
pub const TENANT_HEADER: &str = "x-tenant-id";

const CONTENT_TYPE: &str = "Content-Type";
const JSON: &str = "application/json";

/// Client bound to one backend origin and one tenant.
///
/// The tenant is captured when the client is built and never refreshed.
/// Cloning is cheap; clones share the transport.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    tenant_id: Option<String>,
    transport: Arc<dyn HttpTransport>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("tenant_id", &self.tenant_id)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Start building a client over `transport`.
    pub fn builder(transport: Arc<dyn HttpTransport>) -> ApiClientBuilder {
        ApiClientBuilder {
            transport,
            base_url: None,
            config: None,
            tenant_id: None,
        }
    }

    /// Default client: reqwest transport, `API_BASE_URL` or the local
    /// default, and no tenant.
    #[cfg(feature = "http")]
    pub fn from_env() -> Self {
        Self::builder(Arc::new(civic_infra::ReqwestTransport::new())).build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tenant_id(&self) -> Option<&str> {
        self.tenant_id.as_deref()
    }

    /// POST /auth/login
    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, ClientError> {
        self.request(path::LOGIN, RequestOptions::post_json(credentials)?)
            .await
    }

    /// POST /auth/register
    pub async fn register(&self, user: &RegisterRequest) -> Result<AuthResponse, ClientError> {
        self.request(path::REGISTER, RequestOptions::post_json(user)?)
            .await
    }

    /// GET /citizens/search?q=<query>
    pub async fn search_citizens(&self, query: &str) -> Result<Vec<Citizen>, ClientError> {
        self.request(&path::citizen_search(query), RequestOptions::get())
            .await
    }

    /// GET /citizens/:id
    pub async fn get_citizen(&self, id: &str) -> Result<Citizen, ClientError> {
        self.request(&path::citizen(id), RequestOptions::get()).await
    }

    /// Send `endpoint` (relative to the base URL) and decode the JSON reply.
    ///
    /// Non-2xx statuses fail with [`ClientError::Http`]; nothing is retried.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T, ClientError> {
        let request = HttpRequest {
            method: options.method,
            url: format!("{}{}", self.base_url, endpoint),
            headers: self.headers(options.headers),
            body: options.body,
        };

        tracing::debug!(
            method = %request.method,
            url = %request.url,
            tenant = self.tenant_id.as_deref().unwrap_or(""),
            "Sending API request"
        );

        let response = self.transport.send(request).await?;

        if !response.is_success() {
            tracing::warn!(
                status = response.status,
                status_text = %response.status_text,
                endpoint,
                "API request failed"
            );
            return Err(ClientError::Http {
                status: response.status,
                status_text: response.status_text,
                body: response.body,
            });
        }

        serde_json::from_slice(&response.body).map_err(ClientError::Decode)
    }

    fn headers(&self, overrides: Vec<(String, String)>) -> Vec<(String, String)> {
        let mut headers = vec![
            (CONTENT_TYPE.to_string(), JSON.to_string()),
            (
                TENANT_HEADER.to_string(),
                self.tenant_id.clone().unwrap_or_default(),
            ),
        ];

        for (name, value) in overrides {
            headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(&name));
            headers.push((name, value));
        }

        headers
    }
}

/// Builder for [`ApiClient`].
pub struct ApiClientBuilder {
    transport: Arc<dyn HttpTransport>,
    base_url: Option<String>,
    config: Option<ClientConfig>,
    tenant_id: Option<String>,
}

impl ApiClientBuilder {
    /// Explicit base URL; takes priority over `API_BASE_URL`.
    ///
    /// Used as given apart from trailing slashes, which are dropped.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Use an already resolved configuration, skipping the environment.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Snapshot the tenant from `provider` now.
    pub fn tenant_provider(mut self, provider: &dyn TenantProvider) -> Self {
        self.tenant_id = provider.tenant_id();
        self
    }

    pub fn build(self) -> ApiClient {
        let config = match self.config {
            Some(config) => config,
            None => ClientConfig::from_env(self.base_url.as_deref()),
        };

        ApiClient {
            base_url: config.base_url,
            tenant_id: self.tenant_id,
            transport: self.transport,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{TimeZone, Utc};
    use civic_core::TransportError;
    use civic_core::ports::Method;
    use civic_infra::{FixedTenant, InMemoryTenantStore, NoTenant, StubTransport};
    use civic_types::{Gender, Role, User};
    use serde_json::json;

    const BASE: &str = "http://api.test:3001";

    fn client(stub: &Arc<StubTransport>, tenant: &dyn TenantProvider) -> ApiClient {
        ApiClient::builder(stub.clone())
            .base_url(BASE)
            .tenant_provider(tenant)
            .build()
    }

    fn sample_user() -> User {
        User {
            id: "u-1".to_string(),
            email: "dara@example.kh".to_string(),
            name: "Sok Dara".to_string(),
            tenant_id: "phnom-penh".to_string(),
            role: Role::Citizen,
        }
    }

    fn sample_citizen(id: &str) -> Citizen {
        let stamp = Utc.with_ymd_and_hms(2023, 11, 15, 8, 30, 0).unwrap();
        Citizen {
            id: id.to_string(),
            first_name: "Sok".to_string(),
            last_name: "Dara".to_string(),
            date_of_birth: chrono::NaiveDate::from_ymd_opt(1990, 4, 13).unwrap(),
            gender: Gender::Male,
            address: "Street 51, Phnom Penh".to_string(),
            tenant_id: "phnom-penh".to_string(),
            created_at: stamp,
            updated_at: stamp,
        }
    }

    #[tokio::test]
    async fn test_login_posts_credentials() {
        let expected = AuthResponse {
            token: "opaque-token".to_string(),
            user: sample_user(),
        };
        let stub = Arc::new(StubTransport::new().with_json(200, &expected));
        let api = client(&stub, &NoTenant);

        let resp = api
            .login(&LoginRequest::new("dara@example.kh", "s3cret-pass"))
            .await
            .unwrap();

        assert_eq!(resp, expected);
        let sent = stub.last_request().await.unwrap();
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.url, "http://api.test:3001/auth/login");
        let body: serde_json::Value = serde_json::from_slice(&sent.body.unwrap()).unwrap();
        assert_eq!(body, json!({"email": "dara@example.kh", "password": "s3cret-pass"}));
    }

    #[tokio::test]
    async fn test_register_posts_payload() {
        let expected = AuthResponse {
            token: "fresh-token".to_string(),
            user: sample_user(),
        };
        let stub = Arc::new(StubTransport::new().with_json(201, &expected));
        let api = client(&stub, &NoTenant);

        let req = RegisterRequest::new("dara@example.kh", "s3cret-pass", "Sok Dara")
            .with_role(Role::Citizen);
        let resp = api.register(&req).await.unwrap();

        assert_eq!(resp.token, "fresh-token");
        let sent = stub.last_request().await.unwrap();
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.url, "http://api.test:3001/auth/register");
        let body: serde_json::Value = serde_json::from_slice(&sent.body.unwrap()).unwrap();
        assert_eq!(body["name"], "Sok Dara");
        assert_eq!(body["role"], "citizen");
    }

    #[tokio::test]
    async fn test_search_encodes_query() {
        let stub = Arc::new(StubTransport::new().with_json(200, &vec![sample_citizen("c-1")]));
        let api = client(&stub, &NoTenant);

        let found = api.search_citizens("Sok Dara").await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].full_name(), "Sok Dara");
        let sent = stub.last_request().await.unwrap();
        assert_eq!(sent.method, Method::Get);
        assert_eq!(sent.url, "http://api.test:3001/citizens/search?q=Sok%20Dara");
        assert!(sent.body.is_none());
    }

    #[tokio::test]
    async fn test_get_citizen_path() {
        let stub = Arc::new(StubTransport::new().with_json(200, &sample_citizen("c-42")));
        let api = client(&stub, &NoTenant);

        let citizen = api.get_citizen("c-42").await.unwrap();

        assert_eq!(citizen.id, "c-42");
        assert_eq!(
            stub.last_request().await.unwrap().url,
            "http://api.test:3001/citizens/c-42"
        );
    }

    #[tokio::test]
    async fn test_get_citizen_id_sent_raw() {
        let stub = Arc::new(StubTransport::new().with_json(200, &sample_citizen("a/b c")));
        let api = client(&stub, &NoTenant);

        api.get_citizen("a/b c").await.unwrap();

        assert_eq!(
            stub.last_request().await.unwrap().url,
            "http://api.test:3001/citizens/a/b c"
        );
    }

    #[tokio::test]
    async fn test_get_citizen_accepts_timestamp_birth_date() {
        let mut body = serde_json::to_value(sample_citizen("c-7")).unwrap();
        body["dateOfBirth"] = json!("1990-04-13T00:00:00.000Z");
        let stub = Arc::new(StubTransport::new().with_json(200, &body));
        let api = client(&stub, &NoTenant);

        let citizen = api.get_citizen("c-7").await.unwrap();

        assert_eq!(
            citizen.date_of_birth,
            chrono::NaiveDate::from_ymd_opt(1990, 4, 13).unwrap()
        );
    }

    #[tokio::test]
    async fn test_not_found_surfaces_status() {
        let stub = Arc::new(StubTransport::new().with_status(404));
        let api = client(&stub, &NoTenant);

        let err = api.get_citizen("nonexistent").await.unwrap_err();

        assert_eq!(err.status(), Some(404));
        assert!(err.to_string().contains("404"));
        assert_eq!(err.to_string(), "API Error: 404 Not Found");
    }

    #[tokio::test]
    async fn test_any_status_from_400_fails() {
        for status in [400, 401, 403, 409, 422, 500, 503] {
            let stub = Arc::new(StubTransport::new().with_json(status, &json!({"ok": false})));
            let api = client(&stub, &NoTenant);

            let result: Result<serde_json::Value, _> =
                api.request("/anything", RequestOptions::get()).await;

            assert_eq!(result.unwrap_err().status(), Some(status));
        }
    }

    #[tokio::test]
    async fn test_failure_body_kept_for_api_error() {
        let stub = Arc::new(StubTransport::new().with_json(
            409,
            &json!({"message": "Email already registered", "code": "DUPLICATE_EMAIL"}),
        ));
        let api = client(&stub, &NoTenant);

        let err = api
            .register(&RegisterRequest::new("dara@example.kh", "pw", "Sok Dara"))
            .await
            .unwrap_err();

        assert_eq!(err.api_error().unwrap().code, "DUPLICATE_EMAIL");
    }

    #[tokio::test]
    async fn test_success_body_returned_unchanged() {
        let payload = json!({"nested": {"list": [1, 2, 3]}, "flag": true});
        let stub = Arc::new(StubTransport::new().with_json(200, &payload));
        let api = client(&stub, &NoTenant);

        let value: serde_json::Value = api.request("/custom", RequestOptions::get()).await.unwrap();

        assert_eq!(value, payload);
    }

    #[tokio::test]
    async fn test_default_headers_with_tenant() {
        let stub = Arc::new(StubTransport::new().with_json(200, &Vec::<Citizen>::new()));
        let api = client(&stub, &FixedTenant::new("siem-reap"));

        api.search_citizens("x").await.unwrap();

        let sent = stub.last_request().await.unwrap();
        assert_eq!(sent.header("content-type"), Some("application/json"));
        assert_eq!(sent.header(TENANT_HEADER), Some("siem-reap"));
        assert_eq!(api.tenant_id(), Some("siem-reap"));
    }

    #[tokio::test]
    async fn test_tenant_header_empty_without_tenant() {
        let stub = Arc::new(StubTransport::new().with_json(200, &Vec::<Citizen>::new()));
        let api = client(&stub, &NoTenant);

        api.search_citizens("x").await.unwrap();

        let sent = stub.last_request().await.unwrap();
        assert_eq!(sent.header(TENANT_HEADER), Some(""));
        assert_eq!(api.tenant_id(), None);
    }

    #[tokio::test]
    async fn test_caller_headers_override_defaults() {
        let stub = Arc::new(StubTransport::new().with_json(200, &json!({})));
        let api = client(&stub, &FixedTenant::new("kandal"));

        let options = RequestOptions::method(Method::Put)
            .header("X-Tenant-Id", "override")
            .header("Authorization", "Bearer abc");
        let _: serde_json::Value = api.request("/citizens/c-1", options).await.unwrap();

        let sent = stub.last_request().await.unwrap();
        assert_eq!(sent.method, Method::Put);
        assert_eq!(sent.header(TENANT_HEADER), Some("override"));
        assert_eq!(sent.header("authorization"), Some("Bearer abc"));
        let tenant_headers = sent
            .headers
            .iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case(TENANT_HEADER))
            .count();
        assert_eq!(tenant_headers, 1);
    }

    #[tokio::test]
    async fn test_tenant_snapshot_taken_at_build() {
        let store = InMemoryTenantStore::with_tenant("kampot");
        let stub = Arc::new(StubTransport::new().with_json(200, &Vec::<Citizen>::new()));
        let api = client(&stub, &store);

        store.set("kep");
        api.search_citizens("x").await.unwrap();

        let sent = stub.last_request().await.unwrap();
        assert_eq!(sent.header(TENANT_HEADER), Some("kampot"));
    }

    #[tokio::test]
    async fn test_undecodable_body_is_decode_error() {
        let stub = Arc::new(StubTransport::new().with_json(200, &json!({"unexpected": true})));
        let api = client(&stub, &NoTenant);

        let err = api.get_citizen("c-1").await.unwrap_err();

        assert!(matches!(err, ClientError::Decode(_)));
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let stub = Arc::new(
            StubTransport::new().with_error(TransportError::Connection("refused".to_string())),
        );
        let api = client(&stub, &NoTenant);

        let err = api.search_citizens("x").await.unwrap_err();

        assert!(matches!(err, ClientError::Transport(TransportError::Connection(_))));
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn test_no_retry_on_failure() {
        let stub = Arc::new(StubTransport::new().with_status(503).with_status(200));
        let api = client(&stub, &NoTenant);

        let _ = api.get_citizen("c-1").await;

        assert_eq!(stub.requests().await.len(), 1);
        assert_eq!(stub.pending().await, 1);
    }

    #[test]
    fn test_default_base_url_without_argument_or_env() {
        let stub = Arc::new(StubTransport::new());
        let api = ApiClient::builder(stub)
            .config(ClientConfig::resolve(None, None))
            .build();

        assert_eq!(api.base_url(), "http://localhost:3001");
    }

    #[test]
    fn test_explicit_base_url_used() {
        let stub = Arc::new(StubTransport::new());
        let api = ApiClient::builder(stub).base_url("https://pms.gov.kh/api/").build();

        assert_eq!(api.base_url(), "https://pms.gov.kh/api");
    }
}
