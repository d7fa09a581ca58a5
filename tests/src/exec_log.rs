use crate::logging_driver::{AdapterOp, OpKind};
use std::sync::{Arc, Mutex};

/// A wrapper around the operations log that provides a clean API for tests
pub struct ExecLog {
    ops: Arc<Mutex<Vec<AdapterOp>>>,
}

impl ExecLog {
    pub(crate) fn new(ops: Arc<Mutex<Vec<AdapterOp>>>) -> Self {
        Self { ops }
    }

    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// Check if any logged statement's SQL starts with `prefix`
    pub fn any_starting_with(&self, prefix: &str) -> bool {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .any(|op| op.sql.starts_with(prefix))
    }

    pub fn count(&self, kind: OpKind) -> usize {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter(|op| op.kind == kind)
            .count()
    }

    pub fn clear(&mut self) {
        self.ops.lock().unwrap().clear();
    }

    /// Remove and return the first operation from the log
    pub fn pop(&mut self) -> Option<AdapterOp> {
        let mut ops = self.ops.lock().unwrap();
        if ops.is_empty() {
            None
        } else {
            Some(ops.remove(0))
        }
    }

    /// SQL text of every logged statement, oldest first
    pub fn statements(&self) -> Vec<String> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .map(|op| op.sql.clone())
            .collect()
    }
}
