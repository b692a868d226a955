use crate::errors::WireError;
use crate::header::{DnsHeader, HeaderFlags, HEADER_LEN};
use crate::question::Question;
use crate::record::ResourceRecord;

/// A DNS message: header, ordered questions, ordered answers.
///
/// The header counts track the stored sections: `qdcount == questions.len()`
/// and `ancount == answers.len()` hold for every message built through the
/// mutators. Authority and additional records are consumed during decode for
/// cursor alignment but never kept.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DnsMessage {
    pub header: DnsHeader,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
}

impl DnsMessage {
    /// Builds the response skeleton for `request`: same ID, QR set, OPCODE
    /// and RD copied, questions mirrored, everything else zero.
    pub fn response_to(request: &DnsMessage) -> DnsMessage {
        DnsMessage {
            header: DnsHeader {
                id: request.header.id,
                flags: HeaderFlags {
                    qr: true,
                    opcode: request.header.flags.opcode,
                    rd: request.header.flags.rd,
                    ..HeaderFlags::default()
                },
                qdcount: request.questions.len() as u16,
                ..DnsHeader::default()
            },
            questions: request.questions.clone(),
            answers: Vec::new(),
        }
    }

    pub fn add_questions(&mut self, questions: impl IntoIterator<Item = Question>) {
        let before = self.questions.len();
        self.questions.extend(questions);
        self.header.qdcount += (self.questions.len() - before) as u16;
    }

    pub fn add_answers(&mut self, answers: impl IntoIterator<Item = ResourceRecord>) {
        let before = self.answers.len();
        self.answers.extend(answers);
        self.header.ancount += (self.answers.len() - before) as u16;
    }

    /// Serializes the message big-endian: header, questions, answers.
    /// Names are always emitted in expanded form.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(512);
        self.header.write_to(&mut buf);
        for question in &self.questions {
            question.write_to(&mut buf);
        }
        for answer in &self.answers {
            answer.write_to(&mut buf);
        }
        buf
    }

    /// Parses a full datagram: header, QDCOUNT questions, ANCOUNT answers.
    /// Authority and additional records are parsed and discarded so the
    /// cursor stays aligned; their counts are zeroed to match the model.
    pub fn from_bytes(datagram: &[u8]) -> Result<Self, WireError> {
        let mut header = DnsHeader::read(datagram)?;
        let mut pos = HEADER_LEN;

        let mut questions = Vec::with_capacity(usize::from(header.qdcount));
        for _ in 0..header.qdcount {
            let (question, consumed) = Question::read(datagram, pos)?;
            pos += consumed;
            questions.push(question);
        }

        let mut answers = Vec::with_capacity(usize::from(header.ancount));
        for _ in 0..header.ancount {
            let (answer, consumed) = ResourceRecord::read(datagram, pos)?;
            pos += consumed;
            answers.push(answer);
        }

        for _ in 0..usize::from(header.nscount) + usize::from(header.arcount) {
            let (_, consumed) = ResourceRecord::read(datagram, pos)?;
            pos += consumed;
        }
        header.nscount = 0;
        header.arcount = 0;

        Ok(Self {
            header,
            questions,
            answers,
        })
    }
}
