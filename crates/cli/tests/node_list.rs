use std::process::Command;
use std::{
    io::{Read, Write},
    net::TcpListener,
    sync::{Arc, Mutex},
    thread,
};

fn serve_once(listener: TcpListener, body: String) -> (thread::JoinHandle<()>, Arc<Mutex<String>>) {
    let seen_request = Arc::new(Mutex::new(String::new()));
    let seen_clone = seen_request.clone();
    let server = thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let n = stream.read(&mut buf).expect("read request");
            *seen_clone.lock().expect("lock request") =
                String::from_utf8_lossy(&buf[..n]).to_string();

            let response = format!(
                "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            stream
                .write_all(response.as_bytes())
                .expect("write response");
        }
    });
    (server, seen_request)
}

fn fabricctl(endpoint: &str, config_home: &std::path::Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fabricctl"));
    cmd.env("FABRICCTL_ENDPOINT", endpoint)
        .env("XDG_CONFIG_HOME", config_home)
        .env_remove("FABRICCTL_PROFILE")
        .env_remove("FABRICCTL_TOKEN");
    cmd
}

#[test]
fn node_list_prints_json_and_sends_server_timeout() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let addr = listener.local_addr().expect("listener addr");
    let body = serde_json::json!({
        "ContinuationToken": "",
        "Items": [
            {
                "Name": "_Node_0",
                "IpAddressOrFQDN": "10.0.0.4",
                "Type": "NodeType0",
                "NodeStatus": "Up",
                "HealthState": "Ok",
                "IsSeedNode": true,
                "UpgradeDomain": "0",
                "FaultDomain": "fd:/0"
            }
        ]
    })
    .to_string();
    let (server, seen_request) = serve_once(listener, body);
    let config_home = tempfile::tempdir().expect("tempdir");

    let output = fabricctl(&format!("http://{addr}"), config_home.path())
        .args(["node", "list", "--json", "--server-timeout", "30"])
        .output()
        .expect("run cli");

    server.join().expect("server thread");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let request = seen_request.lock().expect("lock request").clone();
    let request_line = request.lines().next().unwrap_or_default();
    assert!(request_line.starts_with("GET /Nodes?"), "{request_line}");
    assert!(request_line.contains("api-version=6.3"), "{request_line}");
    assert!(request_line.contains("timeout=30"), "{request_line}");

    let nodes: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is json");
    assert_eq!(nodes[0]["Name"], "_Node_0");
    assert_eq!(nodes[0]["NodeStatus"], "Up");
}

#[test]
fn missing_node_is_reported_as_not_found() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let addr = listener.local_addr().expect("listener addr");
    let server = thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf).expect("read request");
            stream
                .write_all(b"HTTP/1.1 204 No Content\r\nconnection: close\r\n\r\n")
                .expect("write response");
        }
    });
    let config_home = tempfile::tempdir().expect("tempdir");

    let output = fabricctl(&format!("http://{addr}"), config_home.path())
        .args(["node", "show", "_Node_9"])
        .output()
        .expect("run cli");

    server.join().expect("server thread");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("node '_Node_9' not found"), "{stderr}");
}
