use crate::error::{Error, Result};
use std::fmt;

/// Largest request `build_request` will produce, counting one byte of slack
/// for a terminator.
pub const MAX_REQUEST_SIZE: usize = 16384;

/// Lines of the request end with a bare `\n`, not `\r\n`.
const LINE_END: &str = "\n";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct HttpVersion {
    major: u32,
    minor: u32,
}

impl HttpVersion {
    fn new(major: u32, minor: u32) -> Self {
        HttpVersion { major, minor }
    }
}

impl fmt::Display for HttpVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "HTTP/{}.{}", self.major, self.minor)
    }
}

#[cfg(test)]
mod http_version_tests {
    use super::HttpVersion;
    use std::string::ToString;

    #[test]
    fn display() {
        assert_eq!(&HttpVersion::new(1, 1).to_string(), "HTTP/1.1");
        assert_eq!(&HttpVersion::new(1, 0).to_string(), "HTTP/1.0");
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum HttpMethod {
    Get,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
        }
    }
}

#[cfg(test)]
mod http_method_tests {
    use super::HttpMethod;
    use std::string::ToString;

    #[test]
    fn display() {
        assert_eq!(&HttpMethod::Get.to_string(), "GET");
    }
}

/// A request line plus the `Host` and `Connection: close` headers.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct HttpRequest<'a> {
    method: HttpMethod,
    path: &'a str,
    version: HttpVersion,
    hostname: &'a str,
    port: &'a str,
}

impl<'a> HttpRequest<'a> {
    pub fn get(hostname: &'a str, port: &'a str, path: &'a str) -> Self {
        HttpRequest {
            method: HttpMethod::Get,
            path,
            version: HttpVersion::new(1, 1),
            hostname,
            port,
        }
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// Render the request, failing instead of truncating when it would not
    /// fit in `MAX_REQUEST_SIZE`.
    pub fn serialize(&self) -> Result<Vec<u8>> {
        let request = self.to_string();
        if request.len() >= MAX_REQUEST_SIZE {
            return Err(Error::RequestTooLarge {
                size: request.len(),
                max: MAX_REQUEST_SIZE,
            });
        }
        Ok(request.into_bytes())
    }
}

impl<'a> fmt::Display for HttpRequest<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} /{} {}{}", self.method, self.path, self.version, LINE_END)?;
        write!(f, "Host: {}:{}{}", self.hostname, self.port, LINE_END)?;
        write!(f, "Connection: close{}", LINE_END)?;
        write!(f, "{}", LINE_END)?;
        Ok(())
    }
}

/// Build the bytes of a `GET /<path>` request for `hostname:port`.
pub fn build_request(hostname: &str, port: &str, path: &str) -> Result<Vec<u8>> {
    HttpRequest::get(hostname, port, path).serialize()
}
