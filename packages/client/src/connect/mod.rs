//! Connection establishment
//!
//! Dials the origin (or the configured HTTP proxy) under the connect
//! timeout, then layers an optional `CONNECT` tunnel and rustls session on
//! top. The result is a boxed duplex stream handed to the HTTP/1.1 codec.

pub mod http_connect;
pub mod tcp;
pub mod tls;

use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use url::{Host, Url};

use crate::config::TransportConfig;
use crate::error::{self, Result};

/// Duplex byte stream carrying one HTTP/1.1 connection
pub trait Io: AsyncRead + AsyncWrite + Send + Unpin {}

impl<T: AsyncRead + AsyncWrite + Send + Unpin> Io for T {}

pub type BoxedIo = Box<dyn Io>;

/// Where a request's TCP connection terminates and how the request line is written
#[derive(Debug, Clone)]
pub struct Route {
    /// Host and port the socket connects to (origin or proxy)
    pub dial_host: String,
    pub dial_port: u16,
    /// Origin host and port, used for SNI and `CONNECT` authority
    pub origin_host: String,
    pub origin_authority: String,
    pub tls: bool,
    /// Plain-HTTP request through a proxy: absolute-form request target
    pub absolute_form: bool,
    /// Tunnel through the proxy before TLS
    pub tunnel: bool,
}

/// Socket-address form of a URL host; IPv6 literals lose their brackets
#[must_use]
pub fn host_of(url: &Url) -> Option<String> {
    match url.host()? {
        Host::Domain(domain) => Some(domain.to_string()),
        Host::Ipv4(addr) => Some(addr.to_string()),
        Host::Ipv6(addr) => Some(addr.to_string()),
    }
}

impl Route {
    /// Plan the connection for `url` under `config`
    ///
    /// # Errors
    ///
    /// Returns a builder error for URLs without a host or with a scheme
    /// other than `http`/`https`, and for proxies not spoken to over `http`.
    pub fn plan(url: &Url, config: &TransportConfig) -> Result<Self> {
        let tls = match url.scheme() {
            "http" => false,
            "https" => true,
            _ => return Err(error::url_bad_scheme(url.clone())),
        };
        let origin_host = host_of(url)
            .ok_or_else(|| error::invalid_url(format!("{url} has no host")).with_url(url.clone()))?;
        let origin_port = url.port_or_known_default().unwrap_or(if tls { 443 } else { 80 });
        let origin_authority = format!("{}:{origin_port}", url.host_str().unwrap_or(&origin_host));

        match &config.proxy {
            None => Ok(Self {
                dial_host: origin_host.clone(),
                dial_port: origin_port,
                origin_host,
                origin_authority,
                tls,
                absolute_form: false,
                tunnel: false,
            }),
            Some(proxy) => {
                if proxy.scheme() != "http" {
                    return Err(error::builder(format!(
                        "unsupported proxy scheme {:?}",
                        proxy.scheme()
                    )));
                }
                let dial_host = host_of(proxy)
                    .ok_or_else(|| error::invalid_url(format!("proxy {proxy} has no host")))?;
                let dial_port = proxy.port_or_known_default().unwrap_or(80);
                Ok(Self {
                    dial_host,
                    dial_port,
                    origin_host,
                    origin_authority,
                    tls,
                    absolute_form: !tls,
                    tunnel: tls,
                })
            }
        }
    }
}

/// Turn a dialed socket into the stream the request is written to
///
/// # Errors
///
/// Propagates tunnel and TLS handshake failures as connect errors.
pub async fn establish(
    stream: TcpStream,
    route: &Route,
    config: &TransportConfig,
    proxy_auth: Option<&http::HeaderValue>,
) -> Result<BoxedIo> {
    let stream = if route.tunnel {
        http_connect::establish_connect_tunnel(stream, &route.origin_authority, proxy_auth).await?
    } else {
        stream
    };

    if route.tls {
        let tls_stream = tls::handshake(stream, &route.origin_host, &config.tls).await?;
        Ok(Box::new(tls_stream))
    } else {
        Ok(Box::new(stream))
    }
}
