pub mod handler;
pub mod upstream;

pub use handler::DatagramHandler;
pub use upstream::UdpUpstream;
