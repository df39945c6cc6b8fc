use std::sync::{Arc, RwLock, RwLockWriteGuard};

use tracing::{debug, info};

use reactfact_db::{KeyValueStore, keys, load_json, save_json};
use reactfact_types::api::FriendsView;
use reactfact_types::models::avatar_for;
use reactfact_types::{Friend, FriendStatus, User};

use crate::error::{Result, StateError};
use crate::session::SessionStore;

#[derive(Clone, Default)]
struct Lists {
    owner: Option<String>,
    friends: Vec<Friend>,
    pending: Vec<Friend>,
    sent: Vec<Friend>,
}

/// Friend relations of the signed-in user, mirrored to storage under
/// per-user keys.
///
/// The owner is read from the session on every call, with the session
/// lock held, so a sign-in or sign-out can never land between the owner
/// check and the write.
///
/// Nothing here talks to the other party: sent requests stay `requested`
/// forever unless something outside this process accepts them.
pub struct FriendsStore {
    storage: Arc<dyn KeyValueStore>,
    session: Arc<SessionStore>,
    lists: RwLock<Lists>,
}

impl FriendsStore {
    pub fn new(storage: Arc<dyn KeyValueStore>, session: Arc<SessionStore>) -> Self {
        Self {
            storage,
            session,
            lists: RwLock::new(Lists::default()),
        }
    }

    /// The signed-in user's lists; all empty when nobody is signed in.
    pub fn snapshot(&self) -> Result<FriendsView> {
        self.session.with_user(|user| {
            let lists = self.synced(user)?;
            Ok(FriendsView {
                friends: lists.friends.clone(),
                pending_requests: lists.pending.clone(),
                sent_requests: lists.sent.clone(),
            })
        })
    }

    /// Record an outgoing request. Ids already sent to or befriended are
    /// left alone.
    pub fn add_friend(&self, user_id: &str) -> Result<()> {
        let user_id = non_blank(user_id)?;
        self.mutate(|lists| {
            let known = lists.sent.iter().chain(&lists.friends).any(|f| f.id == user_id);
            if !known {
                lists.sent.push(Friend {
                    id: user_id.to_string(),
                    username: placeholder_name(user_id),
                    avatar: Some(avatar_for(user_id)),
                    status: FriendStatus::Requested,
                });
            }
            !known
        })
    }

    /// Record an incoming request from `user_id`.
    pub fn receive_request(&self, user_id: &str, username: Option<&str>) -> Result<()> {
        let user_id = non_blank(user_id)?;
        self.mutate(|lists| {
            let known = lists.pending.iter().chain(&lists.friends).any(|f| f.id == user_id);
            if !known {
                let username = username
                    .map(str::trim)
                    .filter(|u| !u.is_empty())
                    .map(str::to_string)
                    .unwrap_or_else(|| placeholder_name(user_id));
                lists.pending.push(Friend {
                    id: user_id.to_string(),
                    username,
                    avatar: Some(avatar_for(user_id)),
                    status: FriendStatus::Pending,
                });
            }
            !known
        })
    }

    pub fn accept_friend_request(&self, user_id: &str) -> Result<()> {
        self.mutate(|lists| {
            let Some(pos) = lists.pending.iter().position(|f| f.id == user_id) else {
                return false;
            };
            let mut friend = lists.pending.remove(pos);
            friend.status = FriendStatus::Accepted;
            lists.friends.push(friend);
            true
        })
    }

    pub fn reject_friend_request(&self, user_id: &str) -> Result<()> {
        self.mutate(|lists| {
            let before = lists.pending.len();
            lists.pending.retain(|f| f.id != user_id);
            lists.pending.len() != before
        })
    }

    pub fn remove_friend(&self, user_id: &str) -> Result<()> {
        self.mutate(|lists| {
            let before = lists.friends.len();
            lists.friends.retain(|f| f.id != user_id);
            lists.friends.len() != before
        })
    }

    /// Apply `f` to a copy of the owner's lists; if it reports a change,
    /// persist all three lists and only then commit the copy.
    fn mutate<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Lists) -> bool,
    {
        self.session.with_user(|user| {
            let user = user.ok_or(StateError::NotSignedIn)?;
            let mut lists = self.synced(Some(user))?;

            let mut next = lists.clone();
            if !f(&mut next) {
                return Ok(());
            }

            let storage = self.storage.as_ref();
            save_json(storage, &keys::friends(&user.id), &next.friends)?;
            save_json(storage, &keys::pending_requests(&user.id), &next.pending)?;
            save_json(storage, &keys::sent_requests(&user.id), &next.sent)?;

            info!(
                "Friends of {} now: {} accepted, {} pending, {} sent",
                user.id,
                next.friends.len(),
                next.pending.len(),
                next.sent.len()
            );
            *lists = next;
            Ok(())
        })
    }

    /// Lock the cached lists, reloading them first if they belong to
    /// someone other than `user`.
    fn synced(&self, user: Option<&User>) -> Result<RwLockWriteGuard<'_, Lists>> {
        let owner = user.map(|u| u.id.as_str());
        let mut lists = self.lists.write()?;
        if lists.owner.as_deref() != owner {
            *lists = self.load(owner)?;
        }
        Ok(lists)
    }

    fn load(&self, owner: Option<&str>) -> Result<Lists> {
        let Some(id) = owner else {
            return Ok(Lists::default());
        };
        let storage = self.storage.as_ref();
        let lists = Lists {
            owner: Some(id.to_string()),
            friends: load_json(storage, &keys::friends(id))?.unwrap_or_default(),
            pending: load_json(storage, &keys::pending_requests(id))?.unwrap_or_default(),
            sent: load_json(storage, &keys::sent_requests(id))?.unwrap_or_default(),
        };
        debug!(
            "Loaded friends for {}: {} accepted, {} pending, {} sent",
            id,
            lists.friends.len(),
            lists.pending.len(),
            lists.sent.len()
        );
        Ok(lists)
    }
}

fn non_blank(user_id: &str) -> Result<&str> {
    let user_id = user_id.trim();
    if user_id.is_empty() {
        return Err(StateError::EmptyUserId);
    }
    Ok(user_id)
}

fn placeholder_name(user_id: &str) -> String {
    format!("user_{}", user_id.chars().take(6).collect::<String>())
}
