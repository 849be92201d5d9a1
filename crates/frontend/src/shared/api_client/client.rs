use std::fmt::Display;

use contracts::shared::pagination::{PageQuery, PagedList, PAGINATION_HEADER};
use contracts::system::auth::{LoginRequest, LoginResponse, LOGIN_PATH};
use contracts::system::users::user_permissions_path;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::{ApiError, ApiResult};
use super::form::FormBody;
use super::interceptor;
use super::pagination::{page_query_suffix, parse_pagination_header, query_suffix};
use crate::shared::config::{app_config, join_url};
use crate::system::auth::storage;

/// Thin wrapper over `gloo_net` shared by every page.
///
/// Adds the base URL and the bearer token, and routes every failure
/// through [`interceptor::intercept`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Client bound to the application configuration.
    pub fn shared() -> Self {
        Self::new(app_config().api_base_url.clone())
    }

    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match storage::get_token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn send(&self, request: Request, intercept: bool) -> ApiResult<Response> {
        let label = format!("{} {}", request.method(), request.url());
        log::debug!("→ {}", label);

        let result = match request.send().await {
            Ok(response) if response.ok() => Ok(response),
            Ok(response) => {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                Err(ApiError::from_status(status, &body))
            }
            Err(e) => Err(ApiError::Network(e.to_string())),
        };

        match result {
            Ok(response) => {
                log::debug!("← {} {}", response.status(), label);
                Ok(response)
            }
            Err(err) => {
                log::error!("✗ {}: {}", label, err);
                if intercept {
                    interceptor::intercept(&err);
                }
                Err(err)
            }
        }
    }

    async fn send_form(&self, builder: RequestBuilder, form: FormBody) -> ApiResult<Response> {
        let form_data = form.to_form_data()?;
        let request = self
            .authorize(builder)
            .body(form_data)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        self.send(request, true).await
    }

    async fn fetch(&self, path: &str) -> ApiResult<Response> {
        let request = self
            .authorize(Request::get(&self.url(path)))
            .build()
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        self.send(request, true).await
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// GET a list or object at `path`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.fetch(path).await?;
        decode(response).await
    }

    /// GET with query parameters encoded by `serde_qs`.
    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> ApiResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize,
    {
        let path = format!("{}{}", path, query_suffix(query)?);
        self.get(&path).await
    }

    /// GET `{path}/{id}`.
    pub async fn find<T: DeserializeOwned>(&self, path: &str, id: impl Display) -> ApiResult<T> {
        self.get(&format!("{}/{}", path, id)).await
    }

    /// GET one page; page metadata comes from the `x-pagination` header.
    pub async fn find_paged_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &PageQuery,
    ) -> ApiResult<PagedList<T>> {
        let response = self
            .fetch(&format!("{}{}", path, page_query_suffix(query)?))
            .await?;
        let header = response.headers().get(PAGINATION_HEADER);
        let items: Vec<T> = decode(response).await?;
        let meta = parse_pagination_header(header.as_deref(), items.len())?;
        Ok(PagedList { items, meta })
    }

    // ------------------------------------------------------------------
    // Writes (multipart)
    // ------------------------------------------------------------------

    /// POST a new resource. Callers that do not need the created entity ask
    /// for `serde::de::IgnoredAny`, which also accepts an empty body.
    pub async fn create<T: DeserializeOwned>(&self, path: &str, form: FormBody) -> ApiResult<T> {
        let response = self.send_form(Request::post(&self.url(path)), form).await?;
        decode(response).await
    }

    pub async fn patch(&self, path: &str, id: impl Display, form: FormBody) -> ApiResult<()> {
        self.patch_at(&format!("{}/{}", path, id), form).await
    }

    pub async fn patch_at(&self, path: &str, form: FormBody) -> ApiResult<()> {
        self.send_form(Request::patch(&self.url(path)), form)
            .await
            .map(|_| ())
    }

    pub async fn put(&self, path: &str, id: impl Display, form: FormBody) -> ApiResult<()> {
        self.put_at(&format!("{}/{}", path, id), form).await
    }

    pub async fn put_at(&self, path: &str, form: FormBody) -> ApiResult<()> {
        self.send_form(Request::put(&self.url(path)), form)
            .await
            .map(|_| ())
    }

    /// DELETE `{path}/{id}`.
    pub async fn remove(&self, path: &str, id: impl Display) -> ApiResult<()> {
        let request = self
            .authorize(Request::delete(&self.url(&format!("{}/{}", path, id))))
            .build()
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        self.send(request, true).await.map(|_| ())
    }

    // ------------------------------------------------------------------
    // Authentication
    // ------------------------------------------------------------------

    /// Exchanges credentials for a token and stores it.
    ///
    /// Failures are returned to the sign-in form instead of redirecting.
    pub async fn sign_in(&self, email: &str, password: &str) -> ApiResult<String> {
        let body = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let request = Request::post(&self.url(LOGIN_PATH))
            .json(&body)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = self.send(request, false).await?;
        let login: LoginResponse = decode(response).await?;
        storage::save_token(&login.token);
        Ok(login.token)
    }

    pub fn sign_out(&self) {
        storage::clear_token();
    }

    /// Permission values granted to `user_id` through its roles.
    pub async fn permissions(&self, user_id: &str) -> ApiResult<Vec<String>> {
        self.get(&user_permissions_path(user_id)).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    decode_body(&text)
}

pub(crate) fn decode_body<T: DeserializeOwned>(text: &str) -> ApiResult<T> {
    let text = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_brand::Brand;

    #[test]
    fn test_empty_body_decodes_to_unit_and_none() {
        decode_body::<()>("").unwrap();
        assert_eq!(decode_body::<Option<Brand>>("  ").unwrap(), None);
    }

    #[test]
    fn test_body_decodes_dto() {
        let brands: Vec<Brand> = decode_body(r#"[{"id":1,"name":"Acme"}]"#).unwrap();
        assert_eq!(brands[0].name, "Acme");
        assert!(matches!(
            decode_body::<Vec<Brand>>("<html>"),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn test_url_join() {
        let client = ApiClient::new("http://localhost:5000");
        assert_eq!(client.url("/brands"), "http://localhost:5000/brands");
    }
}
