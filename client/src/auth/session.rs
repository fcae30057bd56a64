use std::time::SystemTime;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use shared::types::Identity;

use super::codec;
use super::store::{StoreError, TokenStore};

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// The client's authentication state.
///
/// Invariant: an identity exists iff a credential is held and was valid when
/// it was set. The two always change together; there is no state where one
/// is present without the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated {
        identity: Identity,
        /// The raw bearer token, as sent to the backend on API calls.
        credential: String,
    },
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated { identity, .. } => Some(identity),
        }
    }

    pub fn credential(&self) -> Option<&str> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated { credential, .. } => Some(credential.as_str()),
        }
    }
}

/// What a `set_credential` call did to the session.
///
/// Replacement of one signed-in subject by another without an intervening
/// logout is allowed (a fresh login simply wins), but it is reported
/// explicitly instead of happening silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionTransition {
    /// Anonymous → Authenticated.
    SignedIn,
    /// Same subject re-authenticated (e.g. a fresh token after re-login).
    Renewed,
    /// A different subject took over the session.
    Replaced { previous_subject: String },
    /// The session is (now) Anonymous. Covers explicit logout as well as
    /// invalid or expired credentials, which clear state the same way.
    SignedOut,
}

// ---------------------------------------------------------------------------
// Session store
// ---------------------------------------------------------------------------

/// Single source of truth for "who is signed in", synchronized with the
/// durable token slot.
///
/// All mutation goes through [`SessionStore::set_credential`]; every
/// transition publishes a fresh [`Session`] snapshot to all subscribers.
/// Reads are snapshot reads; no locking on the consumer side.
pub struct SessionStore {
    store: Box<dyn TokenStore>,
    tx: watch::Sender<Session>,
}

impl SessionStore {
    /// A store starting out `Anonymous`. Call [`initialize`](Self::initialize)
    /// to pick up a persisted credential.
    pub fn new(store: impl TokenStore + 'static) -> Self {
        let (tx, _rx) = watch::channel(Session::Anonymous);
        Self {
            store: Box::new(store),
            tx,
        }
    }

    /// One-time startup read of the persisted credential, fed through the
    /// same validation path as any other credential change. A stored token
    /// that is missing, malformed or expired leaves the session `Anonymous`
    /// and wipes the slot.
    pub fn initialize(&self) -> Result<SessionTransition, StoreError> {
        let persisted = self.store.load()?;
        debug!(
            "Initializing session ({} persisted credential)",
            if persisted.is_some() { "found" } else { "no" }
        );
        self.set_credential(persisted.as_deref())
    }

    /// The single mutation entry point.
    ///
    /// `None` signs out. `Some(raw)` decodes and expiry-checks the
    /// credential: a good one becomes the new session (and is persisted), a
    /// bad one is treated exactly like `None`: bad credentials are never
    /// kept, never surfaced as errors. Only storage IO failures propagate.
    pub fn set_credential(&self, raw: Option<&str>) -> Result<SessionTransition, StoreError> {
        let accepted = raw.and_then(|raw| match codec::decode(raw) {
            Ok(claims) if claims.is_expired_at(SystemTime::now()) => {
                info!("Credential is expired; clearing session");
                None
            }
            Ok(claims) => Some((claims, raw)),
            Err(err) => {
                warn!("Discarding credential that failed to decode: {err}");
                None
            }
        });

        match accepted {
            Some((claims, raw)) => {
                let identity = Identity::from_claims(&claims);

                // Persist first, publish second: a publish without a
                // mirrored slot would break the storage invariant.
                self.store.save(raw)?;

                let transition = {
                    let current = self.tx.borrow();
                    match current.identity() {
                        None => SessionTransition::SignedIn,
                        Some(prev) if prev.subject_id == identity.subject_id => {
                            SessionTransition::Renewed
                        }
                        Some(prev) => {
                            warn!(
                                "Signed-in subject changed from {} to {} without a logout",
                                prev.subject_id, identity.subject_id
                            );
                            SessionTransition::Replaced {
                                previous_subject: prev.subject_id.clone(),
                            }
                        }
                    }
                };

                info!(
                    "Session authenticated: {} ({})",
                    identity.display_name, identity.role
                );
                self.tx.send_replace(Session::Authenticated {
                    identity,
                    credential: raw.to_string(),
                });
                Ok(transition)
            }
            None => {
                self.store.clear()?;
                if self.tx.borrow().is_authenticated() {
                    info!("Session signed out");
                }
                self.tx.send_replace(Session::Anonymous);
                Ok(SessionTransition::SignedOut)
            }
        }
    }

    /// Store a fresh credential after a successful authentication exchange.
    pub fn login(&self, raw: &str) -> Result<SessionTransition, StoreError> {
        self.set_credential(Some(raw))
    }

    pub fn logout(&self) -> Result<SessionTransition, StoreError> {
        self.set_credential(None)
    }

    // ── Snapshot reads ────────────────────────────────────────────────────────

    /// The latest published session snapshot.
    pub fn current(&self) -> Session {
        self.tx.borrow().clone()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.tx.borrow().identity().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.tx.borrow().is_authenticated()
    }

    /// Subscribe to session snapshots. Each published transition marks the
    /// receiver changed; `borrow_and_update` yields the latest state.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.tx.subscribe()
    }
}
