//! Splitting a command-line URL into the hostname, port and path of a request.
//!
//! This is deliberately not an RFC 3986 parser. The accepted shape is
//! `[http://|https://]HOSTNAME[:PORT][/PATH]`, and everything after the first
//! `/` is taken verbatim as the path, colons included.
use crate::error::{Error, Result};
use std::fmt;
use std::str;

pub const DEFAULT_PORT: &str = "80";

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    fn prefix(self) -> &'static str {
        match self {
            Scheme::Http => "http://",
            Scheme::Https => "https://",
        }
    }

    /// Removes a leading `http://` or `https://` from `s`. The match is
    /// case-sensitive.
    pub fn strip(s: &str) -> (Option<Scheme>, &str) {
        for scheme in [Scheme::Https, Scheme::Http].iter().copied() {
            if let Some(rest) = s.strip_prefix(scheme.prefix()) {
                return (Some(scheme), rest);
            }
        }
        (None, s)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Scheme::Http => write!(f, "http"),
            Scheme::Https => write!(f, "https"),
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct ParsedUrl {
    hostname: String,
    port: String,
    path: String,
}

impl ParsedUrl {
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    /// The request target without its leading `/`.
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Tokenize `url` into hostname, port and path.
///
/// A missing port becomes `"80"` and a missing path becomes `""`. The port is
/// only looked for before the first `/`.
pub fn parse(url: &str) -> Result<ParsedUrl> {
    if url.is_empty() {
        return Err(Error::malformed("empty url"));
    }

    let (_, rest) = Scheme::strip(url);
    if rest.is_empty() {
        return Err(Error::malformed(format!("'{}' has no hostname", url)));
    }

    let (host_and_port, path) = match rest.find('/') {
        Some(pos) => (&rest[..pos], &rest[pos + 1..]),
        None => (rest, ""),
    };

    let (hostname, port) = match host_and_port.find(':') {
        Some(pos) => (&host_and_port[..pos], &host_and_port[pos + 1..]),
        None => (host_and_port, DEFAULT_PORT),
    };

    if hostname.is_empty() {
        return Err(Error::malformed(format!("'{}' has no hostname", url)));
    }
    if port.is_empty() {
        return Err(Error::malformed(format!("'{}' has an empty port", url)));
    }

    Ok(ParsedUrl {
        hostname: hostname.into(),
        port: port.into(),
        path: path.into(),
    })
}

impl str::FromStr for ParsedUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

impl fmt::Display for ParsedUrl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}/{}", self.hostname, self.port, self.path)
    }
}
