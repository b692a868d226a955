use crate::errors::WireError;
use crate::name;

/// One entry of the question section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    pub qtype: u16,
    pub qclass: u16,
}

impl Question {
    pub fn new(name: impl Into<String>, qtype: u16, qclass: u16) -> Self {
        Self {
            name: name.into(),
            qtype,
            qclass,
        }
    }

    pub fn write_to(&self, buf: &mut Vec<u8>) {
        name::write_name(buf, &self.name);
        buf.extend_from_slice(&self.qtype.to_be_bytes());
        buf.extend_from_slice(&self.qclass.to_be_bytes());
    }

    /// Decodes one question at `pos`; returns it with the bytes consumed.
    pub fn read(datagram: &[u8], pos: usize) -> Result<(Self, usize), WireError> {
        let (name, name_len) = name::read_name(datagram, pos)?;
        let fixed = datagram
            .get(pos + name_len..pos + name_len + 4)
            .ok_or(WireError::UnexpectedEof)?;
        let question = Self {
            name,
            qtype: u16::from_be_bytes([fixed[0], fixed[1]]),
            qclass: u16::from_be_bytes([fixed[2], fixed[3]]),
        };
        Ok((question, name_len + 4))
    }
}
