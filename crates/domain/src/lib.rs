pub mod config;
pub mod errors;
pub mod header;
pub mod message;
pub mod name;
pub mod question;
pub mod record;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, ServerConfig, UpstreamConfig};
pub use errors::{DnsError, WireError};
pub use header::{DnsHeader, HeaderFlags, OpCode, ResponseCode, HEADER_LEN};
pub use message::DnsMessage;
pub use question::Question;
pub use record::ResourceRecord;
