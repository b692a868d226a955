use relay_dns_domain::{
    DnsHeader, DnsMessage, HeaderFlags, OpCode, Question, ResourceRecord, ResponseCode,
};

fn query(id: u16, names: &[&str]) -> DnsMessage {
    let mut msg = DnsMessage {
        header: DnsHeader {
            id,
            flags: HeaderFlags {
                rd: true,
                ..HeaderFlags::default()
            },
            ..DnsHeader::default()
        },
        ..DnsMessage::default()
    };
    msg.add_questions(names.iter().map(|n| Question::new(*n, 1, 1)));
    msg
}

#[test]
fn test_add_questions_keeps_count_in_sync() {
    let mut msg = DnsMessage::default();
    assert_eq!(msg.header.qdcount, 0);

    msg.add_questions([Question::new("a.com", 1, 1), Question::new("b.com", 1, 1)]);
    assert_eq!(msg.header.qdcount, 2);
    assert_eq!(msg.questions.len(), 2);

    msg.add_questions([Question::new("c.com", 28, 1)]);
    assert_eq!(msg.header.qdcount, 3);
    assert_eq!(msg.questions.len(), 3);
}

#[test]
fn test_add_answers_keeps_count_in_sync() {
    let mut msg = DnsMessage::default();
    let record = ResourceRecord {
        name: "a.com".to_string(),
        rtype: 1,
        rclass: 1,
        ttl: 60,
        rdata: vec![1, 2, 3, 4],
    };

    msg.add_answers([record.clone()]);
    assert_eq!(msg.header.ancount, 1);

    msg.add_answers([record.clone(), record]);
    assert_eq!(msg.header.ancount, 3);
    assert_eq!(msg.answers.len(), 3);
}

#[test]
fn test_response_skeleton_mirrors_request() {
    let request = query(0xB187, &["a.com", "b.com"]);
    let response = DnsMessage::response_to(&request);

    assert_eq!(response.header.id, 0xB187);
    assert!(response.header.flags.qr);
    assert_eq!(response.header.flags.opcode, OpCode::StandardQuery);
    assert!(response.header.flags.rd);
    assert_eq!(response.header.flags.rcode, ResponseCode::NoError);
    assert_eq!(response.header.qdcount, 2);
    assert_eq!(response.questions, request.questions);
    assert_eq!(response.header.ancount, 0);
    assert!(response.answers.is_empty());
}

#[test]
fn test_response_skeleton_zeroes_remaining_flags() {
    let mut request = query(7, &["a.com"]);
    request.header.flags.ra = true;
    request.header.flags.aa = true;
    request.header.flags.z = 0b111;
    request.header.nscount = 9;

    let response = DnsMessage::response_to(&request);
    assert!(!response.header.flags.ra);
    assert!(!response.header.flags.aa);
    assert!(!response.header.flags.tc);
    assert_eq!(response.header.flags.z, 0);
    assert_eq!(response.header.nscount, 0);
    assert_eq!(response.header.arcount, 0);
}

#[test]
fn test_response_skeleton_copies_opcode() {
    let mut request = query(1, &["a.com"]);
    request.header.flags.opcode = OpCode::InverseQuery;
    let response = DnsMessage::response_to(&request);
    assert_eq!(response.header.flags.opcode, OpCode::InverseQuery);
}
