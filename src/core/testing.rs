// src/core/testing.rs
//
// In-crate test doubles.

use std::cell::RefCell;
use std::collections::HashMap;

use super::net::Transport;
use crate::error::NetError;

/// Serves canned bodies by exact URL; anything else is a request error.
#[derive(Default)]
pub struct Scripted {
    bodies: HashMap<String, String>,
    pub calls: RefCell<Vec<String>>,
}

impl Scripted {
    pub fn serve(mut self, url: &str, body: &str) -> Self {
        self.bodies.insert(s!(url), s!(body));
        self
    }
}

impl Transport for Scripted {
    fn get_text(&self, url: &str) -> Result<String, NetError> {
        self.calls.borrow_mut().push(s!(url));
        self.bodies
            .get(url)
            .cloned()
            .ok_or_else(|| NetError::Request { url: s!(url), reason: s!("unreachable") })
    }
}
