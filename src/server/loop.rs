// Server loop module
// Accepts connections until the shutdown signal fires

use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::handle_connection;
use crate::config::AppState;
use crate::logger;

/// Accept connections and hand each one to its own local task.
///
/// Returns once `shutdown` is notified. Accept errors are logged and the loop
/// keeps going. Must run inside a `LocalSet`.
#[allow(clippy::ignored_unit_patterns)]
pub async fn start_server_loop(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: Arc<Notify>,
) {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        handle_connection(stream, peer_addr, Arc::clone(&state));
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            _ = shutdown.notified() => {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::server::create_listener;
    use crate::store::tests::{hold_connection, seeded_store};
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;
    use tokio::task::LocalSet;

    async fn raw_get(addr: std::net::SocketAddr, path: &str) -> String {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        let request = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
        stream.write_all(request.as_bytes()).await.unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        response
    }

    #[tokio::test]
    async fn test_serves_over_tcp_until_shutdown() {
        let mut config = Config::load().unwrap();
        config.logging.access_log = false;
        let state = Arc::new(AppState::new(config, seeded_store(1..=10)));

        let listener = create_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();
        let shutdown = Arc::new(Notify::new());

        let local = LocalSet::new();
        local
            .run_until(async move {
                let server = tokio::task::spawn_local(start_server_loop(
                    listener,
                    state,
                    Arc::clone(&shutdown),
                ));

                let customers = raw_get(addr, "/customers").await;
                assert!(customers.starts_with("HTTP/1.1 200 OK"), "{customers}");
                assert!(customers.to_ascii_lowercase().contains("access-control-allow-origin: *"));
                assert!(customers.contains(r#""CustomerID":7"#));
                assert!(!customers.contains(r#""CustomerID":8"#));

                let missing = raw_get(addr, "/unknown").await;
                assert!(missing.starts_with("HTTP/1.1 404 Not Found"), "{missing}");
                assert!(missing.ends_with("\r\n\r\nNot Found"), "{missing}");

                shutdown.notify_one();
                server.await.unwrap();
            })
            .await;
    }

    #[tokio::test]
    async fn test_slow_query_still_gets_response() {
        let mut config = Config::load().unwrap();
        config.logging.access_log = false;
        config.performance.header_read_timeout = 1;
        let state = Arc::new(AppState::new(config, seeded_store(1..=10)));

        // Keep the query waiting on the connection well past the header timeout
        let holder = hold_connection(Arc::clone(&state.store), Duration::from_secs(2));

        let listener = create_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();
        let shutdown = Arc::new(Notify::new());

        let local = LocalSet::new();
        local
            .run_until(async move {
                let server = tokio::task::spawn_local(start_server_loop(
                    listener,
                    state,
                    Arc::clone(&shutdown),
                ));

                let customers = raw_get(addr, "/customers").await;
                assert!(customers.starts_with("HTTP/1.1 200 OK"), "{customers}");
                assert!(customers.contains(r#""CustomerID":7"#), "{customers}");

                shutdown.notify_one();
                server.await.unwrap();
            })
            .await;

        holder.join().unwrap();
    }
}
