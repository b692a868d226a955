//! UDP resolver client (RFC 1035 §4.2.1).
//!
//! One query/response round-trip per call: bind an ephemeral socket,
//! write the query, read one datagram, decode and validate. No framing,
//! no EDNS(0) negotiation; the response buffer caps replies at 512 bytes.

use async_trait::async_trait;
use relay_dns_application::ports::Upstream;
use relay_dns_domain::{DnsError, DnsMessage, ResponseCode};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;

/// Maximum UDP DNS response size without EDNS(0)
const MAX_RESPONSE_SIZE: usize = 512;

/// DNS-over-UDP client for a fixed upstream resolver
pub struct UdpUpstream {
    resolver_addr: SocketAddr,
    timeout: Duration,
}

impl UdpUpstream {
    pub fn new(resolver_addr: SocketAddr, timeout: Duration) -> Self {
        Self {
            resolver_addr,
            timeout,
        }
    }

    pub fn resolver_addr(&self) -> SocketAddr {
        self.resolver_addr
    }
}

#[async_trait]
impl Upstream for UdpUpstream {
    async fn send(&self, query: &DnsMessage) -> Result<DnsMessage, DnsError> {
        // Ephemeral local port, one socket per round-trip
        let bind_addr: SocketAddr = if self.resolver_addr.is_ipv4() {
            "0.0.0.0:0".parse().unwrap()
        } else {
            "[::]:0".parse().unwrap()
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| DnsError::UpstreamIo(format!("Failed to bind UDP socket: {}", e)))?;
        socket.connect(self.resolver_addr).await.map_err(|e| {
            DnsError::UpstreamIo(format!(
                "Failed to connect to resolver {}: {}",
                self.resolver_addr, e
            ))
        })?;

        let query_bytes = query.to_bytes();
        let bytes_sent = tokio::time::timeout(self.timeout, socket.send(&query_bytes))
            .await
            .map_err(|_| DnsError::UpstreamTimeout)?
            .map_err(|e| {
                DnsError::UpstreamIo(format!(
                    "Failed to send query to {}: {}",
                    self.resolver_addr, e
                ))
            })?;

        debug!(
            resolver = %self.resolver_addr,
            bytes_sent = bytes_sent,
            "upstream query sent"
        );

        let mut recv_buf = [0u8; MAX_RESPONSE_SIZE];
        let bytes_received = tokio::time::timeout(self.timeout, socket.recv(&mut recv_buf))
            .await
            .map_err(|_| DnsError::UpstreamTimeout)?
            .map_err(|e| {
                DnsError::UpstreamIo(format!(
                    "Failed to receive response from {}: {}",
                    self.resolver_addr, e
                ))
            })?;

        debug!(
            resolver = %self.resolver_addr,
            bytes_received = bytes_received,
            "upstream response received"
        );

        let reply = DnsMessage::from_bytes(&recv_buf[..bytes_received])?;

        let rcode = reply.header.flags.rcode;
        if rcode != ResponseCode::NoError {
            return Err(DnsError::UpstreamRejected(rcode));
        }
        if reply.header.ancount == 0 || reply.answers.len() != usize::from(reply.header.ancount) {
            return Err(DnsError::NoAnswers);
        }

        Ok(reply)
    }
}
