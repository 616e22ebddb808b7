//! Port for the identity of the local messaging session.

use msglog_domain::Jid;

/// Resolves which device the running session is logged in as.
///
/// Clients that have not finished pairing have no identity yet and return
/// `None`.
pub trait SessionIdentity: Send + Sync {
    fn device_jid(&self) -> Option<Jid>;
}

/// A session whose identity is known up front.
#[derive(Debug, Clone)]
pub struct StaticSession {
    jid: Option<Jid>,
}

impl StaticSession {
    pub fn new(jid: Jid) -> Self {
        Self { jid: Some(jid) }
    }

    /// A session that has not been paired.
    pub fn unpaired() -> Self {
        Self { jid: None }
    }
}

impl SessionIdentity for StaticSession {
    fn device_jid(&self) -> Option<Jid> {
        self.jid.clone()
    }
}
