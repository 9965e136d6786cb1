use std::net::{Ipv4Addr, SocketAddr};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// How a stub host answers a discovery request.
#[derive(Clone)]
pub enum StubReply {
    Json(u16, &'static str),
    /// Accepts the connection and never writes a response.
    Silent,
}

/// A one-route HTTP server bound to a single loopback address.
pub struct StubServer {
    pub addr: SocketAddr,
    task: JoinHandle<()>,
}

impl StubServer {
    /// Binds `host:port`; port `0` picks a free one.
    pub async fn bind(host: Ipv4Addr, port: u16, reply: StubReply) -> anyhow::Result<Self> {
        let listener = TcpListener::bind((host, port)).await?;
        let addr = listener.local_addr()?;

        let task = tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    return;
                };
                let reply = reply.clone();
                tokio::spawn(async move {
                    let mut buf = [0u8; 1024];
                    let _ = stream.read(&mut buf).await;

                    match reply {
                        StubReply::Json(status, body) => {
                            let response = format!(
                                "HTTP/1.1 {status} OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                                body.len()
                            );
                            let _ = stream.write_all(response.as_bytes()).await;
                            let _ = stream.shutdown().await;
                        }
                        StubReply::Silent => {
                            tokio::time::sleep(std::time::Duration::from_secs(60)).await;
                        }
                    }
                });
            }
        });

        Ok(Self { addr, task })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

pub fn loopback(last: u8) -> Ipv4Addr {
    Ipv4Addr::new(127, 0, 0, last)
}
