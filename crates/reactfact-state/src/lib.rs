pub mod catalogue;
pub mod composer;
pub mod error;
pub mod friends;
pub mod ids;
pub mod seed;
pub mod session;
pub mod settings;

use std::sync::Arc;

use chrono::Utc;

use reactfact_db::KeyValueStore;
use reactfact_types::{Comment, Reaction};

pub use catalogue::Catalogue;
pub use composer::Draft;
pub use error::{Result, StateError};
pub use friends::FriendsStore;
pub use session::SessionStore;
pub use settings::SettingsStore;

/// Every store the application uses, built once at startup.
pub struct Context {
    pub session: Arc<SessionStore>,
    pub friends: FriendsStore,
    pub catalogue: Catalogue,
    pub settings: SettingsStore,
}

impl Context {
    /// Restore the session and preferences from `storage`. Friend lists
    /// follow whoever the session holds.
    pub fn open(storage: Arc<dyn KeyValueStore>, catalogue: Catalogue) -> Result<Self> {
        let session = Arc::new(SessionStore::restore(storage.clone())?);
        let friends = FriendsStore::new(storage.clone(), session.clone());
        let settings = SettingsStore::restore(storage)?;

        Ok(Self {
            session,
            friends,
            catalogue,
            settings,
        })
    }

    /// Compose and post a reaction as the signed-in user.
    pub fn react(&self, fact_id: &str, draft: &Draft) -> Result<Reaction> {
        let user = self.session.require_user()?;
        let reaction = composer::compose_reaction(&user, fact_id, draft, Utc::now())?;
        self.catalogue.add_reaction(reaction.clone())?;
        Ok(reaction)
    }

    /// Compose and post a reply as the signed-in user.
    pub fn reply(&self, reaction_id: &str, draft: &Draft) -> Result<Comment> {
        let user = self.session.require_user()?;
        let comment = composer::compose_comment(&user, reaction_id, draft, Utc::now())?;
        self.catalogue.add_comment(comment.clone())?;
        Ok(comment)
    }
}
