//! Domain name wire form (RFC 1035 §3.1, §4.1.4).
//!
//! A name is a sequence of length-prefixed labels terminated by a zero
//! octet. Any label position may instead hold a two-octet compression
//! pointer (top bits `11`, remaining 14 bits an absolute offset into the
//! datagram) splicing in a label sequence found elsewhere in the message.
//! The decoder accepts pointers; the encoder always emits expanded names.

use crate::errors::WireError;

/// Upper bound on pointer indirections while decoding one name. Any chain
/// longer than this is treated as a loop.
const MAX_POINTER_HOPS: usize = 32;

/// Appends the wire form of `name` to `buf`: one length byte per
/// dot-separated label followed by the label bytes, then a zero terminator.
/// The RFC 1035 label and name length limits are the caller's concern.
pub fn write_name(buf: &mut Vec<u8>, name: &str) {
    if !name.is_empty() {
        for label in name.split('.') {
            buf.push(label.len() as u8);
            buf.extend_from_slice(label.as_bytes());
        }
    }
    buf.push(0x00);
}

/// Decodes the name starting at `pos`, following compression pointers by
/// absolute offset into `datagram`.
///
/// Returns the dot-joined name and the number of bytes the name occupies
/// at `pos` itself: label bytes through the terminator, or exactly 2 when
/// the name ends in a pointer. Bytes reached through pointers are not
/// counted.
pub fn read_name(datagram: &[u8], pos: usize) -> Result<(String, usize), WireError> {
    let mut labels = Vec::new();
    let consumed = read_labels(datagram, pos, &mut labels, 0)?;
    Ok((labels.join("."), consumed))
}

fn read_labels(
    datagram: &[u8],
    start: usize,
    labels: &mut Vec<String>,
    hops: usize,
) -> Result<usize, WireError> {
    if hops > MAX_POINTER_HOPS {
        return Err(WireError::PointerLoop);
    }

    let mut pos = start;
    loop {
        let head = *datagram.get(pos).ok_or(WireError::UnexpectedEof)?;
        pos += 1;

        if head == 0x00 {
            return Ok(pos - start);
        }

        match head & 0xC0 {
            0xC0 => {
                let low = *datagram.get(pos).ok_or(WireError::UnexpectedEof)?;
                pos += 1;
                let target = usize::from(u16::from_be_bytes([head & 0x3F, low]));
                if target >= datagram.len() {
                    return Err(WireError::PointerOutOfRange(target));
                }
                read_labels(datagram, target, labels, hops + 1)?;
                return Ok(pos - start);
            }
            0x00 => {
                let end = pos + usize::from(head);
                let label = datagram.get(pos..end).ok_or(WireError::UnexpectedEof)?;
                labels.push(String::from_utf8_lossy(label).into_owned());
                pos = end;
            }
            _ => return Err(WireError::InvalidLabel(head)),
        }
    }
}
