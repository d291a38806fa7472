//! Blocking HTTP/1.1 transport built on hyper
//!
//! Each round trip dials a fresh connection, optionally through a proxy and
//! TLS, and drives it on a process-wide current-thread tokio runtime.
//! Threads that already carry a tokio context (async tasks, `spawn_blocking`
//! workers) hand the round trip to a scoped helper thread, since a runtime
//! cannot be entered from inside another one.

use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;
use http::header::{CONTENT_LENGTH, HOST, PROXY_AUTHORIZATION};
use http::{HeaderValue, Version};
use http_body_util::{BodyExt, Full};
use hyper_util::rt::TokioIo;
use once_cell::sync::OnceCell;
use tokio::runtime::{Builder, Runtime};
use url::Url;

use super::Transport;
use crate::config::TransportConfig;
use crate::connect::{self, Route, tcp};
use crate::error::{self, Result};
use crate::http::{HttpRequest, HttpResponse};

static RUNTIME: OnceCell<Runtime> = OnceCell::new();

fn runtime() -> Result<&'static Runtime> {
    RUNTIME.get_or_try_init(|| {
        Builder::new_current_thread()
            .enable_all()
            .thread_name("chainreq-transport")
            .build()
            .map_err(|e| error::request(format!("failed to start transport runtime: {e}")))
    })
}

/// Hyper-based HTTP/1.1 transport with proxy and rustls support
#[derive(Debug, Default, Clone, Copy)]
pub struct HyperTransport;

impl HyperTransport {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Transport for HyperTransport {
    fn round_trip(&self, request: &HttpRequest, config: &TransportConfig) -> Result<HttpResponse> {
        let runtime = runtime()?;
        if tokio::runtime::Handle::try_current().is_err() {
            return runtime.block_on(send(request, config));
        }

        std::thread::scope(|scope| {
            scope
                .spawn(|| runtime.block_on(send(request, config)))
                .join()
                .unwrap_or_else(|_| Err(error::request("transport thread panicked")))
        })
    }
}

/// `Proxy-Authorization` value from the proxy URL's userinfo
fn proxy_authorization(proxy: &Url) -> Option<HeaderValue> {
    if proxy.username().is_empty() {
        return None;
    }
    let credentials = format!("{}:{}", proxy.username(), proxy.password().unwrap_or_default());
    let mut value = HeaderValue::from_str(&format!("Basic {}", STANDARD.encode(credentials))).ok()?;
    value.set_sensitive(true);
    Some(value)
}

/// Request target for the request line
fn request_target(request: &HttpRequest, route: &Route) -> String {
    if route.absolute_form {
        let mut url = request.url().clone();
        url.set_fragment(None);
        url.to_string()
    } else {
        request.origin_form()
    }
}

fn to_hyper_request(
    request: &HttpRequest,
    route: &Route,
    proxy_auth: Option<&HeaderValue>,
) -> Result<http::Request<Full<Bytes>>> {
    let target = request_target(request, route);
    let body = request.body().cloned().unwrap_or_default();

    let mut hyper_request = http::Request::builder()
        .method(request.method().clone())
        .uri(target.as_str())
        .version(Version::HTTP_11)
        .body(Full::new(body.clone()))
        .map_err(|e| error::builder(e).with_url(request.url().clone()))?;

    let headers = hyper_request.headers_mut();
    for (name, value) in request.headers() {
        headers.append(name.clone(), value.clone());
    }
    if !headers.contains_key(HOST) {
        if let Some(host) = request.host_header().and_then(|h| HeaderValue::from_str(&h).ok()) {
            headers.insert(HOST, host);
        }
    }
    if request.body().is_some() {
        headers.insert(CONTENT_LENGTH, HeaderValue::from(body.len()));
    }
    if route.absolute_form {
        if let Some(auth) = proxy_auth {
            headers.insert(PROXY_AUTHORIZATION, auth.clone());
        }
    }
    Ok(hyper_request)
}

async fn send(request: &HttpRequest, config: &TransportConfig) -> Result<HttpResponse> {
    let route = Route::plan(request.url(), config)?;
    let proxy_auth = config.proxy.as_ref().and_then(proxy_authorization);
    let hyper_request = to_hyper_request(request, &route, proxy_auth.as_ref())?;

    let stream = tcp::dial(&route.dial_host, route.dial_port, config.timeout).await?;
    let exchange = exchange(stream, hyper_request, request.url(), &route, config, proxy_auth.as_ref());
    match config.timeout {
        Some(limit) => with_deadline(limit, exchange).await,
        None => exchange.await,
    }
}

async fn with_deadline<F>(limit: Duration, exchange: F) -> Result<HttpResponse>
where
    F: std::future::Future<Output = Result<HttpResponse>>,
{
    tokio::time::timeout(limit, exchange)
        .await
        .map_err(|_| error::timeout())?
}

async fn exchange(
    stream: tokio::net::TcpStream,
    hyper_request: http::Request<Full<Bytes>>,
    url: &Url,
    route: &Route,
    config: &TransportConfig,
    proxy_auth: Option<&HeaderValue>,
) -> Result<HttpResponse> {
    let io = connect::establish(stream, route, config, proxy_auth).await?;

    let (mut sender, conn) = hyper::client::conn::http1::handshake(TokioIo::new(io))
        .await
        .map_err(|e| error::connect(e).with_url(url.clone()))?;
    let connection = tokio::spawn(async move {
        if let Err(e) = conn.await {
            tracing::debug!(target: "chainreq_client::transport", "connection closed with error: {}", e);
        }
    });

    let result = async {
        let response = sender
            .send_request(hyper_request)
            .await
            .map_err(|e| error::request(e).with_url(url.clone()))?;
        let (parts, body) = response.into_parts();
        let body = body
            .collect()
            .await
            .map_err(|e| error::body(e).with_url(url.clone()))?
            .to_bytes();
        Ok(HttpResponse::new(parts.status, parts.version, parts.headers, url.clone(), body))
    }
    .await;

    drop(sender);
    connection.abort();
    result
}
