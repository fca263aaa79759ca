//! Persistent demo session identity.
//!
//! The signed-in user is a local, trust-free construct: a JSON file next
//! to the application holds the identity between launches. Writes go
//! through a sibling temp file and a rename so a crash never leaves a
//! half-written session behind.

use std::fs;
use std::io::ErrorKind;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::info;
use uuid::Uuid;

use demo_data::{DemoAccount, DemoRole};

use crate::domain::identity::{ContactProfile, ContactProfilePatch, Identity, Role};

/// Errors raised by session persistence.
#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    /// Reading the session file failed for a reason other than absence.
    #[error("failed to read session file at {path}: {source}")]
    Read {
        /// Session file location.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The session file exists but does not parse.
    #[error("corrupt session file at {path}: {source}")]
    Corrupt {
        /// Session file location.
        path: Utf8PathBuf,
        /// Underlying parse failure.
        #[source]
        source: serde_json::Error,
    },
    /// Writing or removing the session file failed.
    #[error("failed to write session file at {path}: {source}")]
    Write {
        /// Session file location.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// An operation needs a signed-in identity and none exists.
    #[error("not logged in")]
    NotLoggedIn,
    /// A login or rename was attempted with a blank display name.
    #[error("display name must not be blank")]
    EmptyName,
}

/// File-backed store for the signed-in identity.
pub struct SessionStore {
    path: Utf8PathBuf,
    current: Option<Identity>,
}

impl SessionStore {
    /// Open the store, loading any persisted identity. A missing file
    /// means logged out, not an error.
    ///
    /// # Errors
    ///
    /// [`SessionError::Read`] when the file cannot be read, and
    /// [`SessionError::Corrupt`] when it exists but does not parse.
    pub fn open(path: Utf8PathBuf) -> Result<Self, SessionError> {
        let current = match fs::read(&path) {
            Ok(bytes) => {
                let identity = serde_json::from_slice(&bytes).map_err(|source| {
                    SessionError::Corrupt {
                        path: path.clone(),
                        source,
                    }
                })?;
                Some(identity)
            }
            Err(source) if source.kind() == ErrorKind::NotFound => None,
            Err(source) => {
                return Err(SessionError::Read {
                    path: path.clone(),
                    source,
                });
            }
        };
        Ok(Self { path, current })
    }

    /// The signed-in identity, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    /// Sign in with a display name and role.
    ///
    /// Craftsmen sign in against their craftsman record and keep that id
    /// as their session id; everyone else gets a generated one.
    ///
    /// # Errors
    ///
    /// [`SessionError::EmptyName`] when the trimmed name is blank, and
    /// [`SessionError::Write`] when persisting fails.
    pub fn login(
        &mut self,
        name: &str,
        role: Role,
        craftsman_id: Option<String>,
    ) -> Result<&Identity, SessionError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SessionError::EmptyName);
        }
        let id = match (&role, &craftsman_id) {
            (Role::Craftsman, Some(craftsman_id)) => craftsman_id.clone(),
            _ => format!("user_{}", Uuid::new_v4().simple()),
        };
        let identity = Identity {
            id,
            name: name.to_owned(),
            role,
            craftsman_id,
            profile: ContactProfile::default(),
        };
        self.replace(identity)
    }

    /// Sign in as one of the bundled demo accounts.
    ///
    /// # Errors
    ///
    /// [`SessionError::Write`] when persisting fails.
    pub fn login_demo(&mut self, account: &DemoAccount) -> Result<&Identity, SessionError> {
        let identity = Identity {
            id: account.id.to_owned(),
            name: account.name.to_owned(),
            role: match account.role {
                DemoRole::Craftsman => Role::Craftsman,
                DemoRole::Customer => Role::Customer,
            },
            craftsman_id: account.craftsman_id.map(str::to_owned),
            profile: ContactProfile::default(),
        };
        self.replace(identity)
    }

    /// Sign out and remove the persisted file. Already being logged out
    /// is a no-op.
    ///
    /// # Errors
    ///
    /// [`SessionError::Write`] when the file exists but cannot be
    /// removed.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(source) if source.kind() == ErrorKind::NotFound => {}
            Err(source) => {
                return Err(SessionError::Write {
                    path: self.path.clone(),
                    source,
                });
            }
        }
        if self.current.take().is_some() {
            info!("session ended");
        }
        Ok(())
    }

    /// Update the saved contact details of the signed-in identity.
    ///
    /// # Errors
    ///
    /// [`SessionError::NotLoggedIn`] without a session, and
    /// [`SessionError::Write`] when persisting fails.
    pub fn update_profile(
        &mut self,
        patch: &ContactProfilePatch,
    ) -> Result<&Identity, SessionError> {
        let Some(current) = self.current.as_mut() else {
            return Err(SessionError::NotLoggedIn);
        };
        if let Some(phone) = &patch.phone {
            current.profile.phone = phone.clone();
        }
        if let Some(email) = &patch.email {
            current.profile.email = email.clone();
        }
        if let Some(address) = &patch.address {
            current.profile.address = address.clone();
        }
        self.persist()?;
        self.current.as_ref().ok_or(SessionError::NotLoggedIn)
    }

    /// Rename the signed-in identity.
    ///
    /// # Errors
    ///
    /// [`SessionError::NotLoggedIn`] without a session,
    /// [`SessionError::EmptyName`] for a blank name, and
    /// [`SessionError::Write`] when persisting fails.
    pub fn update_name(&mut self, name: &str) -> Result<&Identity, SessionError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SessionError::EmptyName);
        }
        let Some(current) = self.current.as_mut() else {
            return Err(SessionError::NotLoggedIn);
        };
        current.name = name.to_owned();
        self.persist()?;
        self.current.as_ref().ok_or(SessionError::NotLoggedIn)
    }

    fn replace(&mut self, identity: Identity) -> Result<&Identity, SessionError> {
        info!(id = %identity.id, role = identity.role.as_str(), "session started");
        self.current = Some(identity);
        self.persist()?;
        self.current.as_ref().ok_or(SessionError::NotLoggedIn)
    }

    fn persist(&self) -> Result<(), SessionError> {
        let Some(identity) = &self.current else {
            return Ok(());
        };
        let bytes = serde_json::to_vec_pretty(identity).map_err(|source| SessionError::Write {
            path: self.path.clone(),
            source: std::io::Error::new(ErrorKind::InvalidData, source),
        })?;
        let temp = temp_sibling(&self.path);
        fs::write(&temp, bytes).map_err(|source| SessionError::Write {
            path: temp.clone(),
            source,
        })?;
        fs::rename(&temp, &self.path).map_err(|source| SessionError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

fn temp_sibling(path: &Utf8Path) -> Utf8PathBuf {
    let mut name = path.as_str().to_owned();
    name.push_str(".tmp");
    Utf8PathBuf::from(name)
}
