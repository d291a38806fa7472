use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// A Result alias where the Err case is `chainreq_client::Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents errors raised while building or sending a request.
#[derive(Clone)]
pub struct Error {
    pub inner: Box<Inner>,
}

#[derive(Clone)]
pub struct Inner {
    pub kind: Kind,
    pub source: Option<Arc<dyn StdError + Send + Sync>>,
    pub url: Option<url::Url>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Malformed request intent, recorded before any network activity
    Builder,
    Request,
    Redirect,
    Body,
    /// TCP, proxy or TLS connection establishment failures
    Connect,
    /// Connect-phase or round-trip deadline exceeded
    Timeout,
}

impl Error {
    pub fn new(kind: Kind) -> Error {
        Error {
            inner: Box::new(Inner { kind, source: None, url: None }),
        }
    }

    #[must_use = "Error builder methods return a new Error and should be used"]
    pub fn with<E: Into<Box<dyn StdError + Send + Sync>>>(mut self, source: E) -> Error {
        self.inner.source = Some(Arc::from(source.into()));
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: url::Url) -> Self {
        self.inner.url = Some(url);
        self
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.inner.kind
    }

    /// Get the URL associated with this error, if any
    #[must_use]
    pub fn url(&self) -> Option<&url::Url> {
        self.inner.url.as_ref()
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_struct("chainreq_client::Error");

        f.field("kind", &self.inner.kind);

        if let Some(ref source) = self.inner.source {
            f.field("source", source);
        }

        if let Some(ref url) = self.inner.url {
            f.field("url", &url.as_str());
        }

        f.finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.kind {
            Kind::Builder => f.write_str("builder error")?,
            Kind::Request => f.write_str("error sending request")?,
            Kind::Redirect => f.write_str("error following redirect")?,
            Kind::Body => f.write_str("request or response body error")?,
            Kind::Connect => f.write_str("error establishing connection")?,
            Kind::Timeout => f.write_str("request timeout")?,
        }

        if let Some(url) = &self.inner.url {
            write!(f, " for url ({url})")?;
        }

        if let Some(source) = &self.inner.source {
            write!(f, ": {source}")?;
        }

        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner
            .source
            .as_ref()
            .map(|err| &**err as &(dyn StdError + 'static))
    }
}
