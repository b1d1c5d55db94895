use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input could not be split into a usable hostname and port.
    #[error("malformed url: {0}")]
    MalformedUrl(String),

    /// The formatted request would not fit in `max` bytes.
    #[error("request of {size} bytes exceeds the {max} byte limit")]
    RequestTooLarge { size: usize, max: usize },

    #[error("could not connect to {target}")]
    ConnectionError {
        target: String,
        #[source]
        source: io::Error,
    },

    #[error("could not send request")]
    SendError(#[source] io::Error),

    #[error("could not receive response")]
    ReceiveError(#[source] io::Error),

    /// Writing the response to the output sink failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<R> = std::result::Result<R, Error>;

impl Error {
    pub(crate) fn malformed<S: Into<String>>(msg: S) -> Self {
        Error::MalformedUrl(msg.into())
    }

    pub(crate) fn connection<T: Into<String>>(target: T, source: io::Error) -> Self {
        Error::ConnectionError {
            target: target.into(),
            source,
        }
    }
}
