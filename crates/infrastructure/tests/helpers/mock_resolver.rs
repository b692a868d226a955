#![allow(dead_code)]

use relay_dns_domain::{DnsMessage, ResourceRecord, ResponseCode};
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// What the mock resolver does with each received query.
#[derive(Clone)]
pub enum MockBehavior {
    /// Reply with one answer carrying this RDATA.
    Answer(Vec<u8>),
    /// Reply with the given RCODE and no answers.
    Rcode(ResponseCode),
    /// Reply NOERROR with an empty answer section.
    EmptyAnswer,
    /// Never reply.
    Silent,
}

/// In-process upstream resolver bound to an ephemeral localhost port.
pub struct MockResolver {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockResolver {
    pub async fn start(behavior: MockBehavior) -> Result<(Self, SocketAddr), std::io::Error> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let local_addr = socket.local_addr()?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if let Some(response) = build_response(&buf[..len], &behavior) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok((
            Self {
                addr: local_addr,
                shutdown_tx: Some(shutdown_tx),
            },
            local_addr,
        ))
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockResolver {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn build_response(query_bytes: &[u8], behavior: &MockBehavior) -> Option<Vec<u8>> {
    let query = DnsMessage::from_bytes(query_bytes).ok()?;

    match behavior {
        MockBehavior::Silent => None,
        MockBehavior::Rcode(rcode) => {
            let mut reply = DnsMessage::response_to(&query);
            reply.header.flags.rcode = *rcode;
            Some(reply.to_bytes())
        }
        MockBehavior::EmptyAnswer => Some(DnsMessage::response_to(&query).to_bytes()),
        MockBehavior::Answer(rdata) => {
            let question = query.questions.first()?;
            let mut reply = DnsMessage::response_to(&query);
            reply.add_answers([ResourceRecord {
                name: question.name.clone(),
                rtype: question.qtype,
                rclass: question.qclass,
                ttl: 60,
                rdata: rdata.clone(),
            }]);
            Some(reply.to_bytes())
        }
    }
}
