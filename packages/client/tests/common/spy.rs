//! Recording transport double

use std::sync::Mutex;

use bytes::Bytes;
use chainreq_client::{
    HeaderMap, HeaderValue, HttpRequest, HttpResponse, Result, StatusCode, Transport, TransportConfig,
    Version,
};

type Responder = dyn Fn(&HttpRequest) -> Result<HttpResponse> + Send + Sync;

/// Transport double that records every request and answers from a closure
pub struct SpyTransport {
    responder: Box<Responder>,
    requests: Mutex<Vec<HttpRequest>>,
    configs: Mutex<Vec<TransportConfig>>,
}

impl SpyTransport {
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&HttpRequest) -> Result<HttpResponse> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            requests: Mutex::new(Vec::new()),
            configs: Mutex::new(Vec::new()),
        }
    }

    /// Answers every request with `200 OK` and body `ok`
    pub fn ok() -> Self {
        Self::new(|request| Ok(respond(request, StatusCode::OK, &[], "ok")))
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().expect("spy lock poisoned").clone()
    }

    pub fn configs(&self) -> Vec<TransportConfig> {
        self.configs.lock().expect("spy lock poisoned").clone()
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().expect("spy lock poisoned").len()
    }
}

impl Transport for SpyTransport {
    fn round_trip(&self, request: &HttpRequest, config: &TransportConfig) -> Result<HttpResponse> {
        self.requests.lock().expect("spy lock poisoned").push(request.clone());
        self.configs.lock().expect("spy lock poisoned").push(config.clone());
        (self.responder)(request)
    }
}

/// Build a response for `request` with the given headers and body
pub fn respond(request: &HttpRequest, status: StatusCode, headers: &[(&'static str, &str)], body: &str) -> HttpResponse {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        map.append(*name, HeaderValue::from_str(value).expect("test header should be valid"));
    }
    HttpResponse::new(
        status,
        Version::HTTP_11,
        map,
        request.url().clone(),
        Bytes::copy_from_slice(body.as_bytes()),
    )
}
