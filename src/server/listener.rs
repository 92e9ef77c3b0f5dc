// Listener construction
// Builds the TCP listener through socket2 so socket options are explicit.

use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Create a `TcpListener` bound to `addr` with `SO_REUSEADDR` enabled.
///
/// Fails if the port is already taken or the process lacks permission to
/// bind; that failure is fatal and reported by the caller.
pub fn bind(addr: SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    // SO_REUSEADDR: allows rebinding a port left in TIME_WAIT by a
    // previous run.
    socket.set_reuse_address(true)?;

    // Non-blocking mode for async compatibility.
    socket.set_nonblocking(true)?;

    socket.bind(&addr.into())?;
    socket.listen(128)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[tokio::test]
    async fn binds_an_ephemeral_port() {
        let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, 0));
        let listener = bind(addr).expect("ephemeral bind should succeed");
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[tokio::test]
    async fn taken_port_is_a_bind_error() {
        let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, 0));
        let first = bind(addr).expect("ephemeral bind should succeed");
        let taken = first.local_addr().unwrap();
        assert!(bind(taken).is_err());
    }
}
