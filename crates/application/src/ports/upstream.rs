use async_trait::async_trait;
use relay_dns_domain::{DnsError, DnsMessage};

/// Carries one query/response round-trip to the configured resolver.
///
/// Implementations must be safe for concurrent round-trips; the forwarder
/// dispatches one `send` per sub-query task.
#[async_trait]
pub trait Upstream: Send + Sync {
    async fn send(&self, query: &DnsMessage) -> Result<DnsMessage, DnsError>;
}
