use std::sync::Arc;

use relay_dns_domain::{DnsError, DnsMessage, OpCode, Question, ResourceRecord, ResponseCode};
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::ports::Upstream;

/// Forwards one inbound request: splits it into single-question sub-queries,
/// dispatches each through the upstream port on its own task, and assembles
/// the aggregated response.
///
/// The i-th answer of the output corresponds to the i-th question of the
/// input regardless of upstream completion order: replies land in an
/// index-keyed slot, never by arrival order.
pub struct ForwardQuery {
    upstream: Arc<dyn Upstream>,
}

impl ForwardQuery {
    pub fn new(upstream: Arc<dyn Upstream>) -> Self {
        Self { upstream }
    }

    pub async fn execute(&self, request: &DnsMessage) -> DnsMessage {
        let mut response = DnsMessage::response_to(request);

        let opcode = request.header.flags.opcode;
        if opcode != OpCode::StandardQuery {
            let err = DnsError::UnsupportedOpcode(opcode);
            warn!(opcode = %opcode, "refusing query");
            response.header.flags.rcode = err.response_code();
            return response;
        }

        let mut slots: Vec<Option<ResourceRecord>> = vec![None; request.questions.len()];
        let mut failed = false;

        let mut tasks = JoinSet::new();
        for (index, question) in request.questions.iter().enumerate() {
            let upstream = Arc::clone(&self.upstream);
            let sub_query = build_sub_query(index, question.clone());
            tasks.spawn(async move {
                let result = upstream.send(&sub_query).await;
                (index, result)
            });
        }

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, Ok(reply))) => match reply.answers.into_iter().next() {
                    Some(answer) => {
                        debug!(question = index, "sub-query answered");
                        slots[index] = Some(answer);
                    }
                    None => failed = true,
                },
                Ok((index, Err(err))) => {
                    warn!(question = index, error = %err, "sub-query failed");
                    failed = true;
                }
                Err(err) => {
                    warn!(error = %err, "sub-query task aborted");
                    failed = true;
                }
            }
        }

        if failed {
            response.header.flags.rcode = ResponseCode::ServerFailure;
        }
        response.add_answers(slots.into_iter().flatten());
        response
    }
}

/// One upstream query per question: fresh header with the question index as
/// ID, zero flags, QDCOUNT = 1.
fn build_sub_query(index: usize, question: Question) -> DnsMessage {
    let mut sub_query = DnsMessage::default();
    sub_query.header.id = index as u16;
    sub_query.add_questions([question]);
    sub_query
}
