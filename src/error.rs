use std::io;
use thiserror::Error;
use crate::context::RetryClass;

/// An error that can occur during DDC/CI communication.
#[derive(Error, Debug)]
pub enum Error {
    /// Fatal I2C communication error
    #[error("DDC/CI I2C error: {0}")]
    I2c(#[source] io::Error),
    /// DDC/CI protocol error or transmission corruption
    #[error("DDC/CI error: {0}")]
    Ddc(#[from] ErrorCode),
    /// The display never produced a usable reply within the permitted tries
    #[error("maximum DDC retries exceeded for {class} exchange after {tries} tries: {last}")]
    RetriesExhausted {
        /// Operation class whose try limit was reached
        class: RetryClass,
        /// Number of attempts made
        tries: u16,
        /// The failure seen on the last attempt
        last: Box<Error>,
    },
    /// Every attempt read back only zero bytes
    #[error("all {tries} tries of {class} exchange read only zero bytes")]
    AllTriesZero {
        /// Operation class whose try limit was reached
        class: RetryClass,
        /// Number of attempts made
        tries: u16,
    },
    /// A multi-part value grew past the configured maximum
    #[error("multi-part data exceeds the maximum of {limit} bytes")]
    DataOverflow {
        /// Configured maximum length
        limit: usize,
    },
    /// The display is locked by another thread
    #[error("display is in use by another thread")]
    Busy,
    /// The display is already locked by the calling thread
    #[error("display is already locked by the current thread")]
    AlreadyLocked,
    /// Rejected configuration value
    #[error("invalid configuration: {0}")]
    Config(String),
    /// Feature code has no metadata and synthesis was not requested
    #[error("unknown VCP feature code 0x{0:02x}")]
    UnknownFeature(u8),
}

/// DDC/CI protocol errors
#[derive(Error, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCode {
    /// Checksum mismatch
    #[error("DDC/CI checksum mismatch: expected 0x{expected:02x}, received 0x{actual:02x}")]
    ChecksumMismatch {
        /// Checksum computed over the received frame
        expected: u8,
        /// Checksum byte carried by the frame
        actual: u8,
    },
    /// DDC/CI invalid packet length
    #[error("invalid DDC/CI length: declared {declared} bytes, {actual} available")]
    LengthMismatch {
        /// Length from the frame's length byte
        declared: usize,
        /// Bytes actually present
        actual: usize,
    },
    /// Expected opcode mismatch
    #[error("unexpected DDC/CI command 0x{actual:02x}, expected 0x{expected:02x}")]
    UnexpectedCommand {
        /// Reply opcode the request calls for
        expected: u8,
        /// Opcode received
        actual: u8,
    },
    /// Frame is not addressed as expected
    #[error("unexpected DDC/CI address byte 0x{0:02x}")]
    InvalidEnvelope(u8),
    /// DDC Null Message
    #[error("DDC/CI null response")]
    NullResponse,
    /// Read returned only zero bytes
    #[error("DDC/CI read returned all zero bytes")]
    ReadAllZero,
    /// Expected matching offset from DDC/CI
    #[error("invalid multi-part offset: expected {expected}, received {actual}")]
    InvalidOffset {
        /// Offset that was requested
        expected: u16,
        /// Offset in the reply
        actual: u16,
    },
    /// Display reported the feature as unsupported
    #[error("unsupported VCP feature code 0x{0:02x}")]
    UnsupportedFeature(u8),
    /// Expected data mismatch
    #[error("invalid DDC/CI data")]
    InvalidData,
    /// Custom unspecified error
    #[error("{0}")]
    Invalid(String),
}

impl ErrorCode {
    /// Whether the exchange engine may try again after this error.
    ///
    /// Corruption is only retried once per exchange; see [`is_corruption`](Self::is_corruption).
    pub fn is_retryable(&self) -> bool {
        match *self {
            ErrorCode::ChecksumMismatch { .. }
            | ErrorCode::LengthMismatch { .. }
            | ErrorCode::UnexpectedCommand { .. }
            | ErrorCode::InvalidEnvelope(_)
            | ErrorCode::ReadAllZero => true,
            ErrorCode::NullResponse
            | ErrorCode::InvalidOffset { .. }
            | ErrorCode::UnsupportedFeature(_)
            | ErrorCode::InvalidData
            | ErrorCode::Invalid(_) => false,
        }
    }

    /// Frame corruption counted against the single protocol retry.
    pub fn is_corruption(&self) -> bool {
        match *self {
            ErrorCode::ChecksumMismatch { .. }
            | ErrorCode::LengthMismatch { .. }
            | ErrorCode::UnexpectedCommand { .. }
            | ErrorCode::InvalidEnvelope(_) => true,
            _ => false,
        }
    }
}

impl Error {
    /// The protocol error code, if this is a protocol failure.
    pub fn code(&self) -> Option<&ErrorCode> {
        match *self {
            Error::Ddc(ref code) => Some(code),
            _ => None,
        }
    }

    /// True when the display answered but the feature is not supported.
    pub fn is_unsupported(&self) -> bool {
        match *self {
            Error::Ddc(ErrorCode::UnsupportedFeature(_)) | Error::Ddc(ErrorCode::NullResponse) => true,
            _ => false,
        }
    }

    /// True when the display failed to answer within the permitted tries.
    pub fn is_exhausted(&self) -> bool {
        match *self {
            Error::RetriesExhausted { .. } | Error::AllTriesZero { .. } => true,
            _ => false,
        }
    }
}

/// Whether a transport error is transient.
///
/// `EBUSY`, `EAGAIN`, `EIO`, timeouts and interrupted calls are bus hiccups.
/// Missing devices and permission failures are not.
pub fn is_retryable_io(e: &io::Error) -> bool {
    const EPERM: i32 = 1;
    const ENOENT: i32 = 2;
    const EINTR: i32 = 4;
    const EIO: i32 = 5;
    const ENXIO: i32 = 6;
    const EAGAIN: i32 = 11;
    const EACCES: i32 = 13;
    const EBUSY: i32 = 16;
    const ENODEV: i32 = 19;
    const ETIMEDOUT: i32 = 110;

    match e.raw_os_error() {
        Some(EBUSY) | Some(EAGAIN) | Some(EIO) | Some(ETIMEDOUT) | Some(EINTR) => true,
        Some(ENODEV) | Some(ENXIO) | Some(EACCES) | Some(EPERM) | Some(ENOENT) => false,
        _ => match e.kind() {
            io::ErrorKind::WouldBlock
            | io::ErrorKind::TimedOut
            | io::ErrorKind::Interrupted => true,
            _ => false,
        },
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::I2c(e)
    }
}

impl From<Error> for io::Error {
    fn from(e: Error) -> io::Error {
        match e {
            Error::I2c(e) => e,
            Error::Ddc(e) => io::Error::new(io::ErrorKind::InvalidData, e),
            e @ Error::RetriesExhausted { .. } | e @ Error::AllTriesZero { .. } =>
                io::Error::new(io::ErrorKind::TimedOut, e),
            e @ Error::Busy | e @ Error::AlreadyLocked =>
                io::Error::new(io::ErrorKind::WouldBlock, e),
            e => io::Error::new(io::ErrorKind::Other, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_classification() {
        assert!(is_retryable_io(&io::Error::from_raw_os_error(16)));
        assert!(is_retryable_io(&io::Error::from_raw_os_error(5)));
        assert!(!is_retryable_io(&io::Error::from_raw_os_error(19)));
        assert!(!is_retryable_io(&io::Error::from_raw_os_error(13)));
        assert!(is_retryable_io(&io::Error::new(io::ErrorKind::TimedOut, "slow")));
        assert!(!is_retryable_io(&io::Error::new(io::ErrorKind::Other, "?")));
    }

    #[test]
    fn protocol_classification() {
        assert!(ErrorCode::ChecksumMismatch { expected: 1, actual: 2 }.is_retryable());
        assert!(ErrorCode::ReadAllZero.is_retryable());
        assert!(!ErrorCode::ReadAllZero.is_corruption());
        assert!(!ErrorCode::NullResponse.is_retryable());
        assert!(!ErrorCode::UnsupportedFeature(0x10).is_retryable());
    }

    #[test]
    fn into_io_error() {
        let e: io::Error = Error::Ddc(ErrorCode::InvalidData).into();
        assert_eq!(e.kind(), io::ErrorKind::InvalidData);
        let e: io::Error = Error::Busy.into();
        assert_eq!(e.kind(), io::ErrorKind::WouldBlock);
    }
}
