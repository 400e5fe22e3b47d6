use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

pub(crate) struct ServerHandle {
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
    hits: Arc<AtomicU64>,
}

impl ServerHandle {
    pub(crate) fn hits(&self) -> u64 {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

/// How the fixture answers each accepted connection.
#[derive(Debug, Clone, Copy)]
enum Reply {
    Status(u16),
    /// `302` to `/final` for every other path, `200` on `/final`.
    RedirectToFinal,
    /// Reads the request and never answers.
    Silent,
}

/// Spawns a local HTTP/1.1 server answering every request with `status`.
pub(crate) fn spawn_status_server(status: u16) -> Result<(String, ServerHandle), String> {
    spawn_server(Reply::Status(status))
}

/// Spawns a server that redirects every path to `/final`, which answers `200`.
pub(crate) fn spawn_redirect_server() -> Result<(String, ServerHandle), String> {
    spawn_server(Reply::RedirectToFinal)
}

/// Spawns a server that accepts connections and reads requests but never replies.
pub(crate) fn spawn_silent_server() -> Result<(String, ServerHandle), String> {
    spawn_server(Reply::Silent)
}

fn spawn_server(reply: Reply) -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("set_nonblocking failed: {}", err))?;

    let (shutdown_tx, shutdown_rx) = mpsc::channel();
    let hits = Arc::new(AtomicU64::new(0));
    let server_hits = Arc::clone(&hits);

    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            match listener.accept() {
                Ok((stream, _)) => {
                    let hits = Arc::clone(&server_hits);
                    thread::spawn(move || handle_client(stream, reply, &hits));
                }
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(5));
                }
                Err(_) => break,
            }
        }
    });

    Ok((
        format!("http://{}/posts/1", addr),
        ServerHandle {
            shutdown: shutdown_tx,
            thread: Some(handle),
            hits,
        },
    ))
}

/// Returns a URL on a local port with nothing listening.
pub(crate) fn refused_url() -> Result<String, String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind spare port failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("spare port addr failed: {}", err))?;
    drop(listener);
    Ok(format!("http://{}/", addr))
}

fn handle_client(mut stream: TcpStream, reply: Reply, hits: &AtomicU64) {
    if stream.set_nonblocking(false).is_err() {
        return;
    }
    let mut buffer = [0u8; 2048];
    let Ok(read) = stream.read(&mut buffer) else {
        return;
    };
    hits.fetch_add(1, Ordering::SeqCst);

    let request = String::from_utf8_lossy(buffer.get(..read).unwrap_or_default());
    let path = request.split_whitespace().nth(1).unwrap_or("/");
    let response = match reply {
        Reply::Status(status) => plain_response(status),
        Reply::RedirectToFinal if path == "/final" => plain_response(200),
        Reply::RedirectToFinal => {
            "HTTP/1.1 302 Found\r\nLocation: /final\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                .to_owned()
        }
        Reply::Silent => {
            // Hold the connection open until the client gives up.
            while matches!(stream.read(&mut buffer), Ok(n) if n > 0) {}
            return;
        }
    };
    if stream.write_all(response.as_bytes()).is_err() {
        return;
    }
    if stream.flush().is_err() {
        return;
    }
    drop(stream.shutdown(Shutdown::Both));
}

fn plain_response(status: u16) -> String {
    format!(
        "HTTP/1.1 {} Test\r\nContent-Length: 2\r\nConnection: close\r\n\r\nOK",
        status
    )
}
