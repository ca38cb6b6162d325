#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rinternlog::config::Config;
use rinternlog::errors::{AppError, AppResult};
use rinternlog::models::{ActivityRecord, AttendanceRecord};
use rinternlog::store::{RemoteStore, Row};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fs;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::thread;
use tempfile::TempDir;

pub const ATTENDANCE_HEADER: &str =
    "Nome,Data,Entrada,Saída,Horas,Assinatura Estagiário,Assinatura Supervisor";
pub const DIARY_HEADER: &str = "Nome,Data,Atividade,Assinatura Supervisor";

// ---------------------------------------------------------------------------
// Library-level helpers
// ---------------------------------------------------------------------------

/// In-memory remote table store.
#[derive(Default)]
pub struct MemoryRemote {
    pub tables: RefCell<HashMap<String, Vec<Row>>>,
    pub fail_inserts: bool,
    pub selects: Cell<usize>,
}

impl MemoryRemote {
    pub fn failing() -> Self {
        Self {
            fail_inserts: true,
            ..Self::default()
        }
    }

    pub fn seed(&self, table: &str, row: serde_json::Value) {
        let serde_json::Value::Object(map) = row else {
            panic!("seed rows must be objects");
        };
        self.tables
            .borrow_mut()
            .entry(table.to_string())
            .or_default()
            .push(map);
    }

    pub fn rows(&self, table: &str) -> Vec<Row> {
        self.tables.borrow().get(table).cloned().unwrap_or_default()
    }
}

impl RemoteStore for MemoryRemote {
    fn select_all(&self, table: &str) -> AppResult<Vec<Row>> {
        self.selects.set(self.selects.get() + 1);
        Ok(self.rows(table))
    }

    fn insert(&self, table: &str, row: &Row) -> AppResult<()> {
        if self.fail_inserts {
            return Err(AppError::Remote("connection refused".into()));
        }
        self.tables
            .borrow_mut()
            .entry(table.to_string())
            .or_default()
            .push(row.clone());
        Ok(())
    }
}

/// Config whose mirrors live in a fresh temp dir.
pub fn temp_config() -> (TempDir, Config) {
    let dir = TempDir::new().expect("temp dir");
    let cfg = Config {
        data_dir: dir.path().join("data").to_string_lossy().to_string(),
        ..Config::default()
    };
    (dir, cfg)
}

pub fn attendance(name: &str, date: &str, hours: f64) -> AttendanceRecord {
    AttendanceRecord {
        name: name.to_string(),
        date: chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("date"),
        time_in: chrono::NaiveTime::from_hms_opt(7, 0, 0).expect("time"),
        time_out: chrono::NaiveTime::from_hms_opt(13, 0, 0).expect("time"),
        hours,
        intern_signature: name.to_string(),
        supervisor_signature: "Dra. Helena".to_string(),
    }
}

pub fn activity(name: &str, date: &str, text: &str, supervisor: &str) -> ActivityRecord {
    ActivityRecord {
        name: name.to_string(),
        date: chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("date"),
        activity: text.to_string(),
        supervisor_signature: supervisor.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Binary helpers
// ---------------------------------------------------------------------------

/// Isolated HOME + data dir for one CLI test.
pub struct Sandbox {
    pub root: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("temp dir"),
        }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.path().join("data")
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root.path().join(rel)
    }

    /// `rinternlog --data-dir <sandbox>/data`, no credentials set.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("rinternlog");
        cmd.env("HOME", self.root.path())
            .env("APPDATA", self.root.path())
            .env_remove("SUPABASE_URL")
            .env_remove("SUPABASE_KEY")
            .env_remove("RUST_LOG")
            .current_dir(self.root.path())
            .arg("--data-dir")
            .arg(self.data_dir());
        cmd
    }

    /// Same as [`Sandbox::cmd`] with credentials pointing at `url`.
    pub fn cmd_with_remote(&self, url: &str) -> Command {
        let mut cmd = self.cmd();
        cmd.env("SUPABASE_URL", url).env("SUPABASE_KEY", "test-key");
        cmd
    }

    pub fn write_mirror(&self, file: &str, content: &str) {
        fs::create_dir_all(self.data_dir()).expect("data dir");
        fs::write(self.data_dir().join(file), content).expect("write mirror");
    }

    pub fn read_mirror(&self, file: &str) -> String {
        fs::read_to_string(self.data_dir().join(file)).expect("read mirror")
    }
}

/// Loopback HTTP stub answering every request with a fixed status line.
pub struct FakeRemote {
    pub url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FakeRemote {
    pub fn start(status_line: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub");
        let addr = listener.local_addr().expect("stub addr");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { break };
                let req = read_request(&mut stream);
                seen.lock().expect("lock").push(req);

                let body = "[]";
                let resp = format!(
                    "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(resp.as_bytes());
                let _ = stream.flush();
            }
        });

        Self {
            url: format!("http://{addr}"),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("lock").clone()
    }
}

fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = stream.read(&mut chunk).unwrap_or(0);
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..pos]).to_string();
            let len = head
                .lines()
                .find_map(|l| {
                    let (k, v) = l.split_once(':')?;
                    if k.trim().eq_ignore_ascii_case("content-length") {
                        v.trim().parse::<usize>().ok()
                    } else {
                        None
                    }
                })
                .unwrap_or(0);
            if buf.len() >= pos + 4 + len {
                break;
            }
        }
    }

    String::from_utf8_lossy(&buf).to_string()
}
