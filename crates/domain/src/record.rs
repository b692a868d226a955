use crate::errors::WireError;
use crate::name;

/// A resource record with opaque RDATA. RDLENGTH is derived from the
/// payload length on encode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: String,
    pub rtype: u16,
    pub rclass: u16,
    pub ttl: u32,
    pub rdata: Vec<u8>,
}

impl ResourceRecord {
    pub fn write_to(&self, buf: &mut Vec<u8>) {
        name::write_name(buf, &self.name);
        buf.extend_from_slice(&self.rtype.to_be_bytes());
        buf.extend_from_slice(&self.rclass.to_be_bytes());
        buf.extend_from_slice(&self.ttl.to_be_bytes());
        buf.extend_from_slice(&(self.rdata.len() as u16).to_be_bytes());
        buf.extend_from_slice(&self.rdata);
    }

    /// Decodes one record at `pos`; returns it with the bytes consumed.
    pub fn read(datagram: &[u8], pos: usize) -> Result<(Self, usize), WireError> {
        let (name, name_len) = name::read_name(datagram, pos)?;
        let fixed_start = pos + name_len;
        let fixed = datagram
            .get(fixed_start..fixed_start + 10)
            .ok_or(WireError::UnexpectedEof)?;
        let rdlength = usize::from(u16::from_be_bytes([fixed[8], fixed[9]]));
        let rdata_start = fixed_start + 10;
        let rdata = datagram
            .get(rdata_start..rdata_start + rdlength)
            .ok_or(WireError::UnexpectedEof)?;
        let record = Self {
            name,
            rtype: u16::from_be_bytes([fixed[0], fixed[1]]),
            rclass: u16::from_be_bytes([fixed[2], fixed[3]]),
            ttl: u32::from_be_bytes([fixed[4], fixed[5], fixed[6], fixed[7]]),
            rdata: rdata.to_vec(),
        };
        Ok((record, name_len + 10 + rdlength))
    }
}
