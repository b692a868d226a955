use relay_dns_infrastructure::handler::DatagramHandler;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::{error, info};

/// Inbound datagrams are read into a buffer of this size; anything longer
/// is truncated by the transport.
const MAX_DATAGRAM_SIZE: usize = 512;

/// Binds the listen socket and runs the receive loop. Each datagram is
/// handled on its own task so a slow upstream never blocks the listener.
pub async fn serve(bind_addr: SocketAddr, handler: DatagramHandler) -> anyhow::Result<()> {
    let socket = Arc::new(create_udp_socket(bind_addr)?);
    let handler = Arc::new(handler);

    info!(bind_address = %bind_addr, "DNS server ready");

    let mut recv_buf = [0u8; MAX_DATAGRAM_SIZE];
    loop {
        let (len, peer) = match socket.recv_from(&mut recv_buf).await {
            Ok(received) => received,
            Err(e) => {
                error!(error = %e, "UDP recv error");
                continue;
            }
        };

        let datagram = recv_buf[..len].to_vec();
        let handler = Arc::clone(&handler);
        let socket = Arc::clone(&socket);
        tokio::spawn(async move {
            if let Some(response) = handler.handle(&datagram).await {
                if let Err(e) = socket.send_to(&response, peer).await {
                    error!(peer = %peer, error = %e, "failed to send response");
                }
            }
        });
    }
}

fn create_udp_socket(socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };
    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}
