use std::fmt;

use url::Url;
use uuid::Uuid;

use crate::error::{Error, Result};

pub const BASE_URL: &str = "https://api.xero.com/api.xro/2.0/";

/// A resource path under the API base, optionally scoped to one identifier.
///
/// Turned into a full URL with [`XeroEndpoint::to_url`], which appends query
/// parameters in the order given and leaves their keys untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XeroEndpoint {
    path: &'static str,
    id: Option<Uuid>,
}

impl XeroEndpoint {
    #[must_use]
    pub const fn collection(path: &'static str) -> Self {
        Self { path, id: None }
    }

    #[must_use]
    pub const fn single(path: &'static str, id: Uuid) -> Self {
        Self { path, id: Some(id) }
    }

    #[must_use]
    pub fn path(&self) -> &'static str {
        self.path
    }

    #[must_use]
    pub fn id(&self) -> Option<Uuid> {
        self.id
    }

    /// Resolves the endpoint against `base`, which must end with `/`.
    pub fn to_url(&self, base: &Url, query: &[(String, String)]) -> Result<Url> {
        let mut url = base.join(self.path).map_err(|_| Error::InvalidEndpoint)?;

        if let Some(id) = self.id {
            url.path_segments_mut()
                .map_err(|()| Error::InvalidEndpoint)?
                .push(&id.to_string());
        }

        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }

        Ok(url)
    }
}

impl fmt::Display for XeroEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "{}/{id}", self.path),
            None => f.write_str(self.path),
        }
    }
}

/// Makes sure `base` ends with a `/`, so that resource paths
/// are joined beneath it rather than replacing its last segment.
#[must_use]
pub fn normalize_base_url(mut base: Url) -> Url {
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base
}

pub(crate) fn default_base_url() -> Result<Url> {
    Url::parse(BASE_URL).map_err(|_| Error::InvalidEndpoint)
}
