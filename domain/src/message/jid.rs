//! Participant identifiers (JIDs).
//!
//! A JID has the shape `user[.agent][:device]@server`. The agent and device
//! parts identify one linked device of an account; they are stripped before
//! an identifier is written to the message log.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default server for individual accounts.
pub const DEFAULT_USER_SERVER: &str = "s.whatsapp.net";

/// A participant identifier (Value Object).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Jid {
    user: String,
    agent: u8,
    device: u16,
    server: String,
}

impl Jid {
    /// Creates a JID without device qualifiers.
    pub fn new(user: impl Into<String>, server: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            agent: 0,
            device: 0,
            server: server.into(),
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn device(&self) -> u16 {
        self.device
    }

    pub fn agent(&self) -> u8 {
        self.agent
    }

    /// Returns the account-level JID with agent and device stripped.
    pub fn to_non_device(&self) -> Self {
        Self::new(self.user.clone(), self.server.clone())
    }

    /// Identifier as written to the message log: the user part of the
    /// account-level JID.
    pub fn log_id(&self) -> String {
        self.to_non_device().user
    }
}

impl FromStr for Jid {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (local, server) = match s.split_once('@') {
            Some((local, server)) => (local, server),
            None => (s, ""),
        };
        if local.is_empty() || server.contains('@') {
            return Err(DomainError::InvalidJid(s.to_string()));
        }

        let (user_agent, device) = match local.split_once(':') {
            Some((rest, device)) => {
                let device = device
                    .parse::<u16>()
                    .map_err(|_| DomainError::InvalidDevice(s.to_string()))?;
                (rest, device)
            }
            None => (local, 0),
        };

        // Only a numeric suffix after the last dot is an agent qualifier.
        let (user, agent) = match user_agent.rsplit_once('.') {
            Some((user, agent)) if !user.is_empty() => match agent.parse::<u8>() {
                Ok(agent) => (user, agent),
                Err(_) => (user_agent, 0),
            },
            _ => (user_agent, 0),
        };

        if user.is_empty() {
            return Err(DomainError::InvalidJid(s.to_string()));
        }

        Ok(Self {
            user: user.to_string(),
            agent,
            device,
            server: server.to_string(),
        })
    }
}

impl TryFrom<String> for Jid {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Jid> for String {
    fn from(jid: Jid) -> Self {
        jid.to_string()
    }
}

impl fmt::Display for Jid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.user)?;
        if self.agent != 0 {
            write!(f, ".{}", self.agent)?;
        }
        if self.device != 0 {
            write!(f, ":{}", self.device)?;
        }
        if !self.server.is_empty() {
            write!(f, "@{}", self.server)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_user_jid() {
        let jid: Jid = "12345@s.whatsapp.net".parse().unwrap();
        assert_eq!(jid.user(), "12345");
        assert_eq!(jid.server(), DEFAULT_USER_SERVER);
        assert_eq!((jid.agent(), jid.device()), (0, 0));
        assert_eq!(jid.to_string(), "12345@s.whatsapp.net");
    }

    #[test]
    fn test_parse_device_qualified_jid() {
        let jid: Jid = "12345.1:7@s.whatsapp.net".parse().unwrap();
        assert_eq!(jid.user(), "12345");
        assert_eq!(jid.agent(), 1);
        assert_eq!(jid.device(), 7);
        assert_eq!(jid.to_string(), "12345.1:7@s.whatsapp.net");
    }

    #[test]
    fn test_to_non_device_strips_qualifiers() {
        let jid: Jid = "12345:7@s.whatsapp.net".parse().unwrap();
        assert_eq!(jid.to_non_device().to_string(), "12345@s.whatsapp.net");
        assert_eq!(jid.log_id(), "12345");
    }

    #[test]
    fn test_parse_bare_user() {
        let jid: Jid = "99999".parse().unwrap();
        assert_eq!(jid.user(), "99999");
        assert_eq!(jid.server(), "");
        assert_eq!(jid.to_string(), "99999");
    }

    #[test]
    fn test_group_jid_keeps_dash() {
        let jid: Jid = "120363-1700000000@g.us".parse().unwrap();
        assert_eq!(jid.user(), "120363-1700000000");
        assert_eq!(jid.server(), "g.us");
    }

    #[test]
    fn test_non_numeric_dot_is_part_of_user() {
        let jid: Jid = "status.broadcast@broadcast".parse().unwrap();
        assert_eq!(jid.user(), "status.broadcast");
        assert_eq!(jid.agent(), 0);
    }

    #[test]
    fn test_parse_rejects_empty_user() {
        assert_eq!(
            "@s.whatsapp.net".parse::<Jid>(),
            Err(DomainError::InvalidJid("@s.whatsapp.net".to_string()))
        );
        assert!("".parse::<Jid>().is_err());
    }

    #[test]
    fn test_parse_rejects_bad_device() {
        assert!(matches!(
            "12345:abc@s.whatsapp.net".parse::<Jid>(),
            Err(DomainError::InvalidDevice(_))
        ));
    }

    #[test]
    fn test_new_has_no_device_qualifier() {
        let jid = Jid::new("555", DEFAULT_USER_SERVER);
        assert_eq!(jid.to_string(), "555@s.whatsapp.net");
        assert_eq!(jid.log_id(), "555");
    }

    #[test]
    fn test_serde_as_string() {
        let jid: Jid = serde_json::from_str("\"12345:2@s.whatsapp.net\"").unwrap();
        assert_eq!(jid.device(), 2);
        assert_eq!(
            serde_json::to_string(&jid).unwrap(),
            "\"12345:2@s.whatsapp.net\""
        );
        assert!(serde_json::from_str::<Jid>("\"@nope\"").is_err());
    }
}
