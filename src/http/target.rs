use std::net::SocketAddr;

use reqwest::Url;

use crate::error::{AppError, AppResult, HttpError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

/// The endpoint under test, parsed once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    scheme: Scheme,
    host: String,
    port: u16,
    path: String,
    url: Url,
}

impl Target {
    /// Parses an absolute URL. Only `https` is accepted unless `allow_http` is set.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL is malformed, has no host, or uses a
    /// scheme that is not permitted.
    pub fn parse(raw: &str, allow_http: bool) -> AppResult<Self> {
        let url = Url::parse(raw.trim()).map_err(|err| {
            AppError::http(HttpError::InvalidUrl {
                url: raw.to_owned(),
                source: err,
            })
        })?;

        let scheme = match url.scheme() {
            "https" => Scheme::Https,
            "http" if allow_http => Scheme::Http,
            other => {
                return Err(AppError::http(HttpError::UnsupportedScheme {
                    url: raw.to_owned(),
                    scheme: other.to_owned(),
                }));
            }
        };

        let host = match url.host_str() {
            Some(host) if !host.is_empty() => host.to_owned(),
            Some(_) | None => {
                return Err(AppError::http(HttpError::UrlMissingHost {
                    url: raw.to_owned(),
                }));
            }
        };

        let port = url.port_or_known_default().ok_or_else(|| {
            AppError::http(HttpError::UrlMissingPort {
                url: raw.to_owned(),
            })
        })?;

        let mut path = if url.path().is_empty() {
            "/".to_owned()
        } else {
            url.path().to_owned()
        };
        if let Some(query) = url.query() {
            path.push('?');
            path.push_str(query);
        }

        Ok(Self {
            scheme,
            host,
            port,
            path,
            url,
        })
    }

    #[must_use]
    pub const fn scheme(&self) -> Scheme {
        self.scheme
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Path plus query string; never empty.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Resolves the host to socket addresses.
    ///
    /// # Errors
    ///
    /// Returns an error when resolution fails or yields no address.
    pub fn resolve(&self) -> AppResult<Vec<SocketAddr>> {
        let addrs = self.url.socket_addrs(|| None).map_err(|err| {
            AppError::http(HttpError::ResolveHost {
                host: self.host.clone(),
                port: self.port,
                source: err,
            })
        })?;
        if addrs.is_empty() {
            return Err(AppError::http(HttpError::NoAddressesResolved {
                host: self.host.clone(),
            }));
        }
        Ok(addrs)
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}://{}:{}{}",
            self.scheme.as_str(),
            self.host,
            self.port,
            self.path
        )
    }
}
