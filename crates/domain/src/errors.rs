use thiserror::Error;

use crate::header::{OpCode, ResponseCode};

/// Non-retryable wire format failures raised by the codec.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireError {
    #[error("datagram ended mid-record")]
    UnexpectedEof,

    #[error("invalid label length byte {0:#04x}")]
    InvalidLabel(u8),

    #[error("compression pointer target {0} is past the end of the datagram")]
    PointerOutOfRange(usize),

    #[error("compression pointer chain exceeds the hop limit")]
    PointerLoop,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DnsError {
    #[error("malformed message: {0}")]
    Wire(#[from] WireError),

    #[error("unsupported opcode {0}")]
    UnsupportedOpcode(OpCode),

    #[error("upstream I/O error: {0}")]
    UpstreamIo(String),

    #[error("upstream did not reply within the deadline")]
    UpstreamTimeout,

    #[error("upstream rejected the query with {0}")]
    UpstreamRejected(ResponseCode),

    #[error("upstream returned no answers")]
    NoAnswers,
}

impl DnsError {
    /// RCODE reported to the client when this failure surfaces in a response.
    pub fn response_code(&self) -> ResponseCode {
        match self {
            DnsError::UnsupportedOpcode(_) => ResponseCode::NotImplemented,
            _ => ResponseCode::ServerFailure,
        }
    }
}
