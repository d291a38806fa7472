//! Error list returned by terminal calls

use std::fmt;

use chainreq_client::HttpError;

/// Ordered, non-empty list of errors from one terminal call
///
/// Holds either every construction error recorded while the request was
/// configured, or the single transport error that ended execution.
#[derive(Debug, Clone)]
pub struct Errors(Vec<HttpError>);

impl Errors {
    pub(crate) fn new(errors: Vec<HttpError>) -> Self {
        debug_assert!(!errors.is_empty());
        Self(errors)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&HttpError> {
        self.0.first()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[HttpError] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HttpError> {
        self.0.iter()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<HttpError> {
        self.0
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_slice() {
            [single] => write!(f, "{single}"),
            errors => {
                write!(f, "{} errors: ", errors.len())?;
                for (i, error) in errors.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{error}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for Errors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.first().map(|e| e as &(dyn std::error::Error + 'static))
    }
}

impl IntoIterator for Errors {
    type Item = HttpError;
    type IntoIter = std::vec::IntoIter<HttpError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a HttpError;
    type IntoIter = std::slice::Iter<'a, HttpError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<HttpError> for Errors {
    fn from(error: HttpError) -> Self {
        Self(vec![error])
    }
}
