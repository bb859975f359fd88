//! Document fixtures.

use std::net::SocketAddr;
use tokio::net::TcpListener;

pub use docext::testing::{docx_archive, sample_docx, sample_pdf};

/// A local address with nothing listening on it.
pub async fn closed_port() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

/// Number of entries left in a staging directory.
pub fn entries_in(dir: &std::path::Path) -> usize {
    std::fs::read_dir(dir).unwrap().count()
}
