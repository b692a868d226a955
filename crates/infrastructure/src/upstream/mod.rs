mod udp;

pub use udp::UdpUpstream;
