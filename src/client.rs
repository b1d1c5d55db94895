//! Sending one request and streaming the reply.
//!
//! # Example
//! ```no_run
//! use http_get::client::{self, ClientConfig};
//!
//! fn main() -> http_get::error::Result<()> {
//!     let config = ClientConfig::default();
//!     client::get::<std::net::TcpStream, _>("example.com/", std::io::stdout(), &config)?;
//!     Ok(())
//! }
//! ```
use crate::error::{Error, Result};
use crate::protocol;
use crate::url::{self, ParsedUrl, Scheme};
use std::io;

/// Size of the buffer each `read` from the connection fills.
pub const DEFAULT_RECV_BUFFER_SIZE: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub recv_buffer_size: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            recv_buffer_size: DEFAULT_RECV_BUFFER_SIZE,
        }
    }
}

/// Represents the ability to open a connection to `hostname:port`.
pub trait StreamConnector {
    type Stream: io::Read + io::Write;
    fn open_connection(hostname: &str, port: &str) -> Result<Self::Stream>;
}

impl StreamConnector for std::net::TcpStream {
    type Stream = std::net::TcpStream;

    fn open_connection(hostname: &str, port: &str) -> Result<Self::Stream> {
        let target = format!("{}:{}", hostname, port);
        let port: u16 = port.parse().map_err(|_| {
            Error::connection(
                target.as_str(),
                io::Error::new(io::ErrorKind::InvalidInput, "invalid port number"),
            )
        })?;

        let addrs = std::net::ToSocketAddrs::to_socket_addrs(&(hostname, port))
            .map_err(|e| Error::connection(target.as_str(), e))?;

        let mut last_error = None;
        for addr in addrs {
            tracing::debug!("trying {}", addr);
            match std::net::TcpStream::connect(addr) {
                Ok(stream) => {
                    tracing::info!("connected to {} ({})", target, addr);
                    return Ok(stream);
                }
                Err(e) => {
                    tracing::debug!("connect to {} failed: {}", addr, e);
                    last_error = Some(e);
                }
            }
        }

        Err(Error::connection(
            target,
            last_error.unwrap_or_else(|| {
                io::Error::new(io::ErrorKind::AddrNotAvailable, "no addresses found")
            }),
        ))
    }
}

/// Write the request for `url` to `stream`. Returns the number of bytes sent.
pub fn send_request<S: io::Write>(stream: &mut S, url: &ParsedUrl) -> Result<usize> {
    let request = protocol::build_request(url.hostname(), url.port(), url.path())?;
    tracing::debug!("sending request:\n{}", String::from_utf8_lossy(&request));

    stream.write_all(&request).map_err(Error::SendError)?;
    stream.flush().map_err(Error::SendError)?;
    Ok(request.len())
}

/// Copy everything `stream` yields into `out` until the peer closes the
/// connection. Each chunk is flushed to `out` as soon as it is read.
pub fn receive_response<S: io::Read, W: io::Write>(
    stream: &mut S,
    mut out: W,
    config: &ClientConfig,
) -> Result<u64> {
    let mut buf = vec![0u8; config.recv_buffer_size.max(1)];
    let mut total = 0;
    loop {
        let n = match stream.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(Error::ReceiveError(e)),
        };
        tracing::trace!("received {} bytes", n);
        out.write_all(&buf[..n])?;
        out.flush()?;
        total += n as u64;
    }
    tracing::info!("connection closed after {} bytes", total);
    Ok(total)
}

/// Fetch `url` over a connection opened by `C` and stream the raw response,
/// status line and headers included, into `out`.
pub fn get<C: StreamConnector, W: io::Write>(
    url: &str,
    out: W,
    config: &ClientConfig,
) -> Result<u64> {
    if let (Some(Scheme::Https), _) = Scheme::strip(url) {
        tracing::warn!("TLS is not supported, fetching {} over plain http", url);
    }
    let url = url::parse(url)?;
    let mut stream = C::open_connection(url.hostname(), url.port())?;
    send_request(&mut stream, &url)?;
    receive_response(&mut stream, out, config)
}

#[cfg(test)]
struct ScriptedStream {
    chunks: Vec<io::Result<Vec<u8>>>,
    written: Vec<u8>,
}

#[cfg(test)]
impl ScriptedStream {
    fn new(chunks: Vec<io::Result<Vec<u8>>>) -> Self {
        ScriptedStream {
            chunks,
            written: vec![],
        }
    }
}

#[cfg(test)]
impl io::Read for ScriptedStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.chunks.is_empty() {
            return Ok(0);
        }
        let chunk = self.chunks.remove(0)?;
        assert!(chunk.len() <= buf.len());
        buf[..chunk.len()].copy_from_slice(&chunk);
        Ok(chunk.len())
    }
}

#[cfg(test)]
impl io::Write for ScriptedStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
