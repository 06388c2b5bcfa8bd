//! Shared helpers for integration tests.

use contact_greeter::telemetry::{build_subscriber, LogBuffer};
use tracing_subscriber::EnvFilter;

/// Run `f` with logs captured into the returned buffer.
#[allow(dead_code)]
pub fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, LogBuffer) {
    let logs = LogBuffer::new();
    let subscriber = build_subscriber(EnvFilter::new("debug"), logs.clone(), false);
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, logs)
}

/// JSON body of a contacts table response.
#[allow(dead_code)]
pub fn rows_body(rows: &[(&str, &str)]) -> String {
    let rows: Vec<serde_json::Value> = rows
        .iter()
        .map(|(name, phone)| {
            serde_json::json!({
                "nome_contato": name,
                "numero_telefone": phone
            })
        })
        .collect();
    serde_json::Value::Array(rows).to_string()
}

/// Start a listener that reads one request and closes the socket without
/// answering. Returns its base URL.
#[allow(dead_code)]
pub fn closing_server() -> (String, std::thread::JoinHandle<()>) {
    use std::io::Read;
    use std::net::TcpListener;

    let listener = TcpListener::bind("127.0.0.1:0").expect("bind listener");
    let url = format!("http://{}", listener.local_addr().expect("local addr"));

    let handle = std::thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
        }
    });

    (url, handle)
}
