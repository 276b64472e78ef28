#![cfg(test)]
use std::collections::HashMap;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use reconr_common::config::Config;
use reconr_common::error::RunError;
use reconr_core::process::{CommandRunner, Invocation};

/// Replies with canned stdout per program; unknown programs are "not found".
pub struct ScriptedRunner {
    replies: HashMap<String, Vec<u8>>,
    calls: Mutex<Vec<Invocation>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self {
            replies: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn reply(mut self, program: &str, stdout: &str) -> Self {
        self.replies.insert(program.to_owned(), stdout.as_bytes().to_vec());
        self
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_to(&self, program: &str) -> Option<Invocation> {
        self.calls().into_iter().find(|call| call.program == program)
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(&self, invocation: &Invocation) -> Result<Vec<u8>, RunError> {
        self.calls.lock().unwrap().push(invocation.clone());
        self.replies
            .get(&invocation.program)
            .cloned()
            .ok_or_else(|| RunError::Io {
                program: invocation.program.clone(),
                source: io::Error::from(io::ErrorKind::NotFound),
            })
    }
}

pub fn config(root: &Path) -> Config {
    Config {
        output_root: root.to_path_buf(),
        ..Config::default()
    }
}
