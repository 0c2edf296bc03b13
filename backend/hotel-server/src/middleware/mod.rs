pub mod error_details;
pub mod rate_limit;
pub mod request_logging;

use axum::extract::{ConnectInfo, Request};

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Peer address of the connection. Without connect info (in-process test
/// clients) every request shares the unspecified address.
pub fn client_ip(request: &Request) -> IpAddr {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
}
