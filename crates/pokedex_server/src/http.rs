//! HTTP transport for the Pokédex schema.
//!
//! Routes:
//! - POST `<endpoint>` - GraphQL queries and mutations
//! - GET `<endpoint>` and GET `/` - GraphiQL, unless disabled
//! - OPTIONS `<endpoint>` - CORS preflight
//! - GET `/health` - Health check

use async_graphql::http::GraphiQLSource;
use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::{Body, Incoming};
use hyper::header::{
    HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE,
};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use serde::Serialize;
use std::convert::Infallible;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::graphql::PokedexSchema;

pub type BoxBody = http_body_util::combinators::BoxBody<Bytes, hyper::Error>;

const JSON: &str = "application/json";
const HTML: &str = "text/html; charset=utf-8";
const HEALTH: &str = r#"{"status":"healthy"}"#;

fn full<T: Into<Bytes>>(chunk: T) -> BoxBody {
    Full::new(chunk.into())
        .map_err(|never| match never {})
        .boxed()
}

fn response(
    status: StatusCode,
    content_type: Option<&'static str>,
    body: impl Into<Bytes>,
) -> Response<BoxBody> {
    let mut response = Response::new(full(body));
    *response.status_mut() = status;
    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    if let Some(content_type) = content_type {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    }
    response
}

fn json_response<T: Serialize>(status: StatusCode, data: &T) -> Response<BoxBody> {
    match serde_json::to_vec(data) {
        Ok(body) => response(status, Some(JSON), body),
        Err(e) => {
            error!("Failed to serialize response: {}", e);
            response(
                StatusCode::INTERNAL_SERVER_ERROR,
                Some(JSON),
                r#"{"errors":[{"message":"Internal server error"}]}"#,
            )
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response<BoxBody> {
    json_response(status, &serde_json::json!({ "errors": [{ "message": message }] }))
}

fn cors_preflight() -> Response<BoxBody> {
    let mut response = response(StatusCode::OK, None, Bytes::new());
    let headers = response.headers_mut();
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type, Authorization"),
    );
    response
}

/// Executes a JSON-encoded GraphQL request against `schema`.
///
/// A body that is not a GraphQL request object gets `400` with an `errors`
/// array. Execution errors are reported in the response body with `200`.
pub async fn handle_graphql_request(body: Bytes, schema: &PokedexSchema) -> Response<BoxBody> {
    let request: async_graphql::Request = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            debug!("Rejected request body: {}", e);
            return error_response(StatusCode::BAD_REQUEST, &format!("Invalid JSON: {}", e));
        }
    };

    debug!(
        operation = request.operation_name.as_deref().unwrap_or("<anonymous>"),
        "Executing query: {}",
        request.query.chars().take(100).collect::<String>()
    );

    let result = schema.execute(request).await;
    if result.is_err() {
        debug!(errors = result.errors.len(), "Query finished with errors");
    }
    json_response(StatusCode::OK, &result)
}

/// HTTP server exposing a [`PokedexSchema`].
pub struct PokedexServer {
    config: ServerConfig,
    schema: PokedexSchema,
    graphiql: String,
}

impl PokedexServer {
    pub fn new(config: ServerConfig, schema: PokedexSchema) -> Self {
        let graphiql = GraphiQLSource::build().endpoint(&config.endpoint).finish();
        Self {
            config,
            schema,
            graphiql,
        }
    }

    /// Dispatches one request by method and path.
    pub async fn route(&self, method: &Method, path: &str, body: Bytes) -> Response<BoxBody> {
        let endpoint = self.config.endpoint.as_str();
        match (method, path) {
            (&Method::GET, "/health") => response(StatusCode::OK, Some(JSON), HEALTH),

            (&Method::POST, p) if p == endpoint => handle_graphql_request(body, &self.schema).await,

            (&Method::GET, p) if self.config.playground && (p == endpoint || p == "/") => {
                response(StatusCode::OK, Some(HTML), self.graphiql.clone())
            }

            (&Method::OPTIONS, p) if p == endpoint => cors_preflight(),

            _ => response(StatusCode::NOT_FOUND, Some(JSON), r#"{"error":"Not Found"}"#),
        }
    }

    async fn handle<B>(&self, req: Request<B>) -> Response<BoxBody>
    where
        B: Body,
        B::Error: std::fmt::Display,
    {
        let (parts, body) = req.into_parts();
        let body = match body.collect().await {
            Ok(collected) => collected.to_bytes(),
            Err(e) => {
                debug!("Failed to read request body: {}", e);
                return error_response(StatusCode::BAD_REQUEST, "Failed to read body");
            }
        };
        debug!(method = %parts.method, path = parts.uri.path(), "request");
        self.route(&parts.method, parts.uri.path(), body).await
    }

    /// Binds the configured address and serves until Ctrl-C.
    pub async fn run(self) -> ServerResult<()> {
        let addr = self.config.socket_addr()?;
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;

        info!("Listening on http://{}{}", addr, self.config.endpoint);
        if self.config.playground {
            info!("GraphiQL: http://{}{}", addr, self.config.endpoint);
        }

        let server = Arc::new(self);
        loop {
            let (stream, peer) = tokio::select! {
                accepted = listener.accept() => accepted.map_err(ServerError::Accept)?,
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutting down");
                    return Ok(());
                }
            };

            let io = TokioIo::new(stream);
            let server = Arc::clone(&server);
            tokio::spawn(async move {
                let service = service_fn(move |req: Request<Incoming>| {
                    let server = Arc::clone(&server);
                    async move { Ok::<_, Infallible>(server.handle(req).await) }
                });

                if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                    if !err.is_incomplete_message() {
                        error!(%peer, "Connection error: {:?}", err);
                    }
                }
            });
        }
    }
}
