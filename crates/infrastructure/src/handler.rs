use relay_dns_application::use_cases::ForwardQuery;
use relay_dns_domain::DnsMessage;
use tracing::{info, warn};

/// Bridges the raw datagram boundary and the forwarding use case: decode
/// one inbound datagram, run the forwarder, encode the reply.
pub struct DatagramHandler {
    forwarder: ForwardQuery,
}

impl DatagramHandler {
    pub fn new(forwarder: ForwardQuery) -> Self {
        Self { forwarder }
    }

    /// Returns the encoded reply, or `None` when the datagram cannot be
    /// parsed (the request is dropped and no reply is sent).
    pub async fn handle(&self, datagram: &[u8]) -> Option<Vec<u8>> {
        let request = match DnsMessage::from_bytes(datagram) {
            Ok(msg) => msg,
            Err(e) => {
                warn!(error = %e, bytes = datagram.len(), "dropping unparseable datagram");
                return None;
            }
        };

        info!(
            id = request.header.id,
            questions = request.questions.len(),
            "query received"
        );

        let response = self.forwarder.execute(&request).await;
        Some(response.to_bytes())
    }
}
