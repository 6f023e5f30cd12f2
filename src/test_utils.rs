use std::collections::HashMap;
use std::sync::mpsc;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::thread;

use tiny_http::{Response, Server};

const LOCALHOST_BINDING: &str = "0.0.0.0:0";

/// Minimal HTTP server for exercising the `ApiClient` and the loaders
/// against canned responses. Every request is counted per path so tests can
/// assert that an endpoint was (or was not) hit.
pub struct TestServer {
    stop_signal: Sender<()>,
    server_thread: thread::JoinHandle<()>,
    hits: Arc<Mutex<HashMap<String, usize>>>,
    pub base_url: String,
}

impl TestServer {
    /// Starts the server with a map of path -> (status code, body).
    /// Unmapped paths answer 404.
    pub fn start(responses: impl IntoIterator<Item = (&'static str, (u16, String))>) -> Self {
        let responses: HashMap<String, (u16, String)> = responses
            .into_iter()
            .map(|(path, response)| (path.to_owned(), response))
            .collect();

        let (tx, rx) = mpsc::channel();

        let server = Server::http(LOCALHOST_BINDING).unwrap();
        let base_url =
            format!("http://{}", server.server_addr().to_ip().unwrap()).replace("0.0.0.0", "localhost");

        let hits = Arc::new(Mutex::new(HashMap::new()));
        let thread_hits = Arc::clone(&hits);

        let server_thread = thread::spawn(move || loop {
            if rx.try_recv().is_ok() {
                break;
            }

            if let Ok(Some(request)) = server.recv_timeout(std::time::Duration::from_millis(100)) {
                *thread_hits
                    .lock()
                    .unwrap()
                    .entry(request.url().to_owned())
                    .or_insert(0) += 1;

                match responses.get(request.url()) {
                    None => {
                        request
                            .respond(Response::from_string("Not found").with_status_code(404))
                            .unwrap();
                    }
                    Some((status, body)) => {
                        request
                            .respond(Response::from_string(body).with_status_code(*status))
                            .unwrap();
                    }
                }
            }
        });

        TestServer {
            stop_signal: tx,
            server_thread,
            hits,
            base_url,
        }
    }

    /// Number of requests received for the given path since startup.
    pub fn hits(&self, path: &str) -> usize {
        self.hits.lock().unwrap().get(path).copied().unwrap_or(0)
    }

    pub fn stop(self) {
        self.stop_signal.send(()).unwrap();
        self.server_thread.join().unwrap();
    }
}
