use std::io::{BufRead, BufReader, Read, Write};
use std::process::{Child, ChildStdout, Command, Stdio};
use std::time::{Duration, Instant};

use serde_json::{json, Value};

const SERVER_TIMEOUT: Duration = Duration::from_secs(5);
const SHUTDOWN_GRACE_PERIOD: Duration = Duration::from_millis(200);

const SAMPLE_ATLAS: &str = "# A.1 - Root [Scope]  <!-- UUID:  -->\n\
                            \n\
                            ## A.1.0.3.1 - Note [Annotation]  <!-- UUID: 8650a584-01f8-45d6-882b-c14eab9879c4 -->\n\
                            Text right after the title\n";

#[test]
fn initialize_advertises_capabilities() {
    let mut server = spawn_server();
    let mut reader = take_reader(&mut server);

    send_lsp_message(&mut server, &create_initialize_request());
    let response = read_response(&mut reader, 1);

    assert_eq!(response["jsonrpc"], "2.0");
    let capabilities = &response["result"]["capabilities"];
    assert!(capabilities.is_object(), "Capabilities should be an object");
    assert_eq!(capabilities["hoverProvider"], true);
    assert_eq!(capabilities["documentSymbolProvider"], true);
    assert_eq!(response["result"]["serverInfo"]["name"], "atlas-ls");

    shutdown_server(server);
}

#[test]
fn did_open_publishes_diagnostics_and_outline() {
    let mut server = spawn_server();
    let mut reader = take_reader(&mut server);

    send_lsp_message(&mut server, &create_initialize_request());
    read_response(&mut reader, 1);
    send_lsp_message(
        &mut server,
        &json!({ "jsonrpc": "2.0", "method": "initialized", "params": {} }),
    );

    send_lsp_message(
        &mut server,
        &json!({
            "jsonrpc": "2.0",
            "method": "textDocument/didOpen",
            "params": {
                "textDocument": {
                    "uri": "file:///atlas.md",
                    "languageId": "markdown",
                    "version": 1,
                    "text": SAMPLE_ATLAS
                }
            }
        }),
    );

    let published = read_until(&mut reader, |msg| {
        msg["method"] == "textDocument/publishDiagnostics"
    });
    let diagnostics = published["params"]["diagnostics"]
        .as_array()
        .expect("diagnostics array");

    // empty uuid (line 0), nesting (line 2), missing blank line (line 3)
    let summary: Vec<(i64, &str)> = diagnostics
        .iter()
        .map(|d| {
            (
                d["range"]["start"]["line"].as_i64().unwrap_or(-1),
                d["code"].as_str().unwrap_or(""),
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![(0, "uuid"), (2, "nesting"), (3, "blank-line")]
    );
    assert!(diagnostics.iter().all(|d| d["source"] == "atlas-lint"));

    send_lsp_message(
        &mut server,
        &json!({
            "jsonrpc": "2.0",
            "id": 2,
            "method": "textDocument/documentSymbol",
            "params": { "textDocument": { "uri": "file:///atlas.md" } }
        }),
    );
    let response = read_response(&mut reader, 2);
    let symbols = response["result"].as_array().expect("symbol array");

    assert_eq!(symbols.len(), 1);
    assert_eq!(symbols[0]["name"], "A.1 - Root");
    assert_eq!(symbols[0]["children"][0]["detail"], "Annotation");

    shutdown_server(server);
}

fn spawn_server() -> Child {
    let bin_path = std::env::var("CARGO_BIN_EXE_atlas-ls")
        .unwrap_or_else(|_| "target/debug/atlas-ls".to_string());

    Command::new(bin_path)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .env("ATLAS_LS_TEST_EXIT", "1")
        .spawn()
        .expect("Failed to spawn language server")
}

fn take_reader(child: &mut Child) -> BufReader<ChildStdout> {
    let stdout = child
        .stdout
        .take()
        .expect("Child stdout should be available");
    BufReader::new(stdout)
}

fn create_initialize_request() -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "initialize",
        "params": {
            "processId": null,
            "rootUri": null,
            "capabilities": {},
            "clientInfo": { "name": "test-client", "version": "1.0" }
        }
    })
}

fn send_lsp_message(child: &mut Child, message: &Value) {
    let body = message.to_string();
    let request = format!("Content-Length: {}\r\n\r\n{}", body.len(), body);

    let stdin = child
        .stdin
        .as_mut()
        .expect("Child stdin should be available");
    stdin
        .write_all(request.as_bytes())
        .expect("Failed to write request");
    stdin.flush().expect("Failed to flush stdin");
}

/// Read messages until one with the given response id arrives
fn read_response(reader: &mut BufReader<ChildStdout>, id: i64) -> Value {
    read_until(reader, |msg| msg["id"].as_i64() == Some(id))
}

/// Read messages, skipping notifications that don't match
fn read_until(reader: &mut BufReader<ChildStdout>, matches: impl Fn(&Value) -> bool) -> Value {
    let start_time = Instant::now();
    loop {
        if start_time.elapsed() > SERVER_TIMEOUT {
            panic!("Timeout waiting for matching message");
        }
        let message = read_message(reader);
        if matches(&message) {
            return message;
        }
    }
}

fn read_message(reader: &mut BufReader<ChildStdout>) -> Value {
    let mut content_length = None;

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => panic!("Unexpected EOF while reading headers"),
            Ok(_) => {
                if line.trim().is_empty() {
                    // End of headers - we've consumed the empty line
                    break;
                }

                if let Some(length_str) = line.strip_prefix("Content-Length:") {
                    content_length = Some(
                        length_str
                            .trim()
                            .parse::<usize>()
                            .expect("Invalid Content-Length header"),
                    );
                }
            }
            Err(e) => panic!("Error reading headers: {}", e),
        }
    }

    let mut body = vec![0u8; content_length.expect("Missing Content-Length header")];
    reader.read_exact(&mut body).expect("Failed to read message body");

    let body = String::from_utf8(body).expect("Message body should be valid UTF-8");
    serde_json::from_str(&body).unwrap_or_else(|e| panic!("Invalid JSON message: {}\nBody: {}", e, body))
}

fn shutdown_server(mut child: Child) {
    // Close stdin to signal we're done
    drop(child.stdin.take());

    // Give the server a moment to exit gracefully
    std::thread::sleep(SHUTDOWN_GRACE_PERIOD);

    match child.try_wait() {
        Ok(Some(_)) => {}
        Ok(None) => {
            // Still running, force termination
            let _ = child.kill();
            let _ = child.wait();
        }
        Err(e) => panic!("Error checking server status: {}", e),
    }
}
