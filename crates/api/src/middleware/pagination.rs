//! Tower layer that validates pagination query parameters ahead of handlers.
//!
//! On success the validated values are stored in the request extensions as
//! [`PageValues`] (keyed by the configured parameter names) and as a typed
//! [`Pagination`], and the echo headers are appended to the inner response.
//! A header of the same name already set by the handler is kept as is.
//! On failure the layer answers `400` itself and the inner service never runs.

use std::collections::HashMap;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderName, HeaderValue, Request, Uri};
use axum::response::{IntoResponse, Response};
use futures::future::BoxFuture;
use pagekit_core::{Pagination, PaginationConfig, PaginationContext};
use tower::{Layer, Service};

use crate::error::AppError;

/// Validated pagination values keyed by the configured parameter names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageValues(HashMap<String, i64>);

impl PageValues {
    pub fn get(&self, key: &str) -> Option<i64> {
        self.0.get(key).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Handler extractor for the values published by [`PaginationLayer`].
///
/// ```ignore
/// async fn list(Paginated(p): Paginated) -> AppResult<Json<()>> {
///     tracing::info!(page = p.page, size = p.size, "listing");
///     Ok(Json(()))
/// }
/// ```
///
/// Rejects with 500 when the route is not wrapped by the layer.
#[derive(Debug, Clone, Copy)]
pub struct Paginated(pub Pagination);

impl<S> FromRequestParts<S> for Paginated
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Pagination>()
            .copied()
            .map(Paginated)
            .ok_or_else(missing_layer)
    }
}

impl<S> FromRequestParts<S> for PageValues
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<PageValues>()
            .cloned()
            .ok_or_else(missing_layer)
    }
}

fn missing_layer() -> AppError {
    AppError::InternalError("pagination layer is not installed on this route".into())
}

/// The per-request view handed to the pagination core.
struct RequestScope {
    query: Vec<(String, String)>,
    values: PageValues,
    headers: HeaderMap,
}

impl RequestScope {
    fn from_uri(uri: &Uri) -> Self {
        let query = match Query::<Vec<(String, String)>>::try_from_uri(uri) {
            Ok(Query(pairs)) => pairs,
            Err(err) => {
                tracing::debug!(error = %err, "Undecodable query string, using defaults");
                Vec::new()
            }
        };

        Self {
            query,
            values: PageValues::default(),
            headers: HeaderMap::new(),
        }
    }
}

impl PaginationContext for RequestScope {
    fn query_or(&self, key: &str, default: &str) -> String {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .unwrap_or_else(|| default.to_string())
    }

    fn set_value(&mut self, key: &str, value: i64) {
        self.values.0.insert(key.to_string(), value);
    }

    fn set_header(&mut self, name: &str, value: &str) {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                self.headers.insert(name, value);
            }
            _ => tracing::warn!(header = name, "Skipping invalid pagination header"),
        }
    }
}

/// [`Layer`] applying [`PaginationService`] with a shared configuration.
#[derive(Debug, Clone)]
pub struct PaginationLayer {
    config: Arc<PaginationConfig>,
}

impl PaginationLayer {
    pub fn new(config: PaginationConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn from_shared(config: Arc<PaginationConfig>) -> Self {
        Self { config }
    }
}

impl Default for PaginationLayer {
    fn default() -> Self {
        Self::new(PaginationConfig::default())
    }
}

impl<S> Layer<S> for PaginationLayer {
    type Service = PaginationService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        PaginationService {
            inner,
            config: Arc::clone(&self.config),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaginationService<S> {
    inner: S,
    config: Arc<PaginationConfig>,
}

impl<S, B> Service<Request<B>> for PaginationService<S>
where
    S: Service<Request<B>, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = Response;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<B>) -> Self::Future {
        let mut scope = RequestScope::from_uri(req.uri());

        let pagination = match pagekit_core::intercept(&self.config, &mut scope) {
            Ok(pagination) => pagination,
            Err(err) => {
                tracing::debug!(
                    error = %err,
                    kind = ?err.kind(),
                    param = err.param(),
                    "Rejected pagination parameters"
                );
                let response = AppError::from(err).into_response();
                return Box::pin(async move { Ok(response) });
            }
        };

        tracing::debug!(
            page = pagination.page,
            size = pagination.size,
            "Accepted pagination parameters"
        );

        let RequestScope {
            values, headers, ..
        } = scope;
        req.extensions_mut().insert(values);
        req.extensions_mut().insert(pagination);

        // The clone may not be ready; keep the instance that was polled.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        Box::pin(async move {
            let mut response = inner.call(req).await?;
            for (name, value) in headers.iter() {
                response
                    .headers_mut()
                    .entry(name.clone())
                    .or_insert_with(|| value.clone());
            }
            Ok(response)
        })
    }
}
