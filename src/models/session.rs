//! Browser session state for the signed-in user.
//!
//! Authentication itself is an external collaborator; this only tracks
//! who the UI believes is signed in, persisted to localStorage so a
//! reload keeps the header greeting.

use serde::{Deserialize, Serialize};

use crate::config::SESSION_STORAGE_KEY;
use crate::utils::dom;

/// Current session state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum SessionState {
    #[default]
    Guest,
    SignedIn {
        full_name: String,
        email: String,
    },
}

impl SessionState {
    pub fn is_signed_in(&self) -> bool {
        matches!(self, Self::SignedIn { .. })
    }

    /// Name shown in the header: first name if signed in, "guest" otherwise.
    pub fn display_name(&self) -> String {
        match self {
            Self::Guest => "guest".to_string(),
            Self::SignedIn { full_name, .. } => full_name
                .split_whitespace()
                .next()
                .unwrap_or("member")
                .to_string(),
        }
    }

    /// Restore the persisted session, defaulting to Guest.
    pub fn load() -> Self {
        dom::local_storage()
            .and_then(|storage| storage.get_item(SESSION_STORAGE_KEY).ok().flatten())
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default()
    }

    /// Persist this session. Best-effort; private browsing may refuse.
    pub fn store(&self) {
        if let Some(storage) = dom::local_storage()
            && let Ok(json) = serde_json::to_string(self)
        {
            let _ = storage.set_item(SESSION_STORAGE_KEY, &json);
        }
    }

    /// Drop the persisted session.
    pub fn clear_persisted() {
        if let Some(storage) = dom::local_storage() {
            let _ = storage.remove_item(SESSION_STORAGE_KEY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(SessionState::Guest.display_name(), "guest");
        let session = SessionState::SignedIn {
            full_name: "Sarah Lim".to_string(),
            email: "sarah@siswa.um.edu.my".to_string(),
        };
        assert_eq!(session.display_name(), "Sarah");
    }

    #[test]
    fn test_session_serde_round_trip() {
        let session = SessionState::SignedIn {
            full_name: "Alex Tan".to_string(),
            email: "alex@um.edu.my".to_string(),
        };
        let json = serde_json::to_string(&session).unwrap();
        let back: SessionState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }
}
