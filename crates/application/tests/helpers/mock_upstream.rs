#![allow(dead_code)]

use async_trait::async_trait;
use relay_dns_application::ports::Upstream;
use relay_dns_domain::{DnsError, DnsMessage, ResourceRecord};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Upstream double answering from a fixed name → RDATA table, with optional
/// per-name artificial delay and per-name failures. Every dispatched
/// sub-query is recorded for inspection.
pub struct MockUpstream {
    records: HashMap<String, Vec<u8>>,
    delays: HashMap<String, Duration>,
    failing: HashMap<String, DnsError>,
    seen: Mutex<Vec<DnsMessage>>,
}

impl MockUpstream {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
            delays: HashMap::new(),
            failing: HashMap::new(),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn with_record(mut self, name: &str, rdata: &[u8]) -> Self {
        self.records.insert(name.to_string(), rdata.to_vec());
        self
    }

    pub fn with_delay(mut self, name: &str, delay: Duration) -> Self {
        self.delays.insert(name.to_string(), delay);
        self
    }

    pub fn with_failure(mut self, name: &str, error: DnsError) -> Self {
        self.failing.insert(name.to_string(), error);
        self
    }

    pub fn seen_queries(&self) -> Vec<DnsMessage> {
        self.seen.lock().unwrap().clone()
    }
}

impl Default for MockUpstream {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Upstream for MockUpstream {
    async fn send(&self, query: &DnsMessage) -> Result<DnsMessage, DnsError> {
        self.seen.lock().unwrap().push(query.clone());

        let name = query.questions[0].name.clone();
        if let Some(delay) = self.delays.get(&name) {
            tokio::time::sleep(*delay).await;
        }
        if let Some(error) = self.failing.get(&name) {
            return Err(error.clone());
        }

        let rdata = self.records.get(&name).ok_or(DnsError::NoAnswers)?;
        let mut reply = DnsMessage::response_to(query);
        reply.add_answers([ResourceRecord {
            name,
            rtype: query.questions[0].qtype,
            rclass: query.questions[0].qclass,
            ttl: 60,
            rdata: rdata.clone(),
        }]);
        Ok(reply)
    }
}
