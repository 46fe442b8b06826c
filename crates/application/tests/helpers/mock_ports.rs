#![allow(dead_code)]

use async_trait::async_trait;
use erlide_application::ports::{LocalHostResolver, NodeProbe, Notifier, PeerProvider};
use erlide_domain::{DomainError, NameMode, Notification, Severity};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

type ProbeKey = (NameMode, Option<String>);

/// Peer that answers from a fixed table and records every probe.
#[derive(Clone, Default)]
pub struct MockNodeProbe {
    answers: Arc<Mutex<HashMap<ProbeKey, String>>>,
    failures: Arc<Mutex<HashMap<ProbeKey, DomainError>>>,
    calls: Arc<Mutex<Vec<ProbeKey>>>,
}

impl MockNodeProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_answer(self, mode: NameMode, hint: Option<&str>, name: &str) -> Self {
        self.answers
            .lock()
            .unwrap()
            .insert((mode, hint.map(str::to_string)), name.to_string());
        self
    }

    pub fn with_failure(self, mode: NameMode, hint: Option<&str>, error: DomainError) -> Self {
        self.failures
            .lock()
            .unwrap()
            .insert((mode, hint.map(str::to_string)), error);
        self
    }

    pub fn calls(&self) -> Vec<ProbeKey> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl NodeProbe for MockNodeProbe {
    async fn probe_name(
        &self,
        mode: NameMode,
        hint: Option<&str>,
    ) -> Result<Option<String>, DomainError> {
        let key = (mode, hint.map(str::to_string));
        self.calls.lock().unwrap().push(key.clone());

        if let Some(err) = self.failures.lock().unwrap().get(&key).cloned() {
            return Err(err);
        }
        Ok(self.answers.lock().unwrap().get(&key).cloned())
    }
}

pub struct MockLocalHostResolver {
    long: Result<String, DomainError>,
    short: Result<String, DomainError>,
}

impl MockLocalHostResolver {
    pub fn new(long: &str, short: &str) -> Self {
        Self {
            long: Ok(long.to_string()),
            short: Ok(short.to_string()),
        }
    }

    pub fn failing() -> Self {
        Self {
            long: Err(DomainError::LocalResolution("unknown host".to_string())),
            short: Err(DomainError::LocalResolution("unknown host".to_string())),
        }
    }
}

#[async_trait]
impl LocalHostResolver for MockLocalHostResolver {
    async fn resolve(&self, mode: NameMode) -> Result<String, DomainError> {
        match mode {
            NameMode::Long => self.long.clone(),
            NameMode::Short => self.short.clone(),
        }
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn modal_errors(&self) -> usize {
        self.count(Severity::ModalError)
    }

    pub fn warnings(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.notifications
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.severity == severity)
            .count()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: &Notification) {
        self.notifications.lock().unwrap().push(notification.clone());
    }
}

pub struct MockPeerProvider {
    peer: Option<MockNodeProbe>,
}

impl MockPeerProvider {
    pub fn with_peer(peer: MockNodeProbe) -> Self {
        Self { peer: Some(peer) }
    }

    pub fn empty() -> Self {
        Self { peer: None }
    }
}

impl PeerProvider for MockPeerProvider {
    fn default_peer(&self) -> Option<Arc<dyn NodeProbe>> {
        self.peer
            .clone()
            .map(|p| Arc::new(p) as Arc<dyn NodeProbe>)
    }
}
