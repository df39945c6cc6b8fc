use std::sync::RwLock;

use chrono::{DateTime, Utc};
use tracing::debug;

use reactfact_types::api::SortOrder;
use reactfact_types::{Comment, Fact, Reaction};

use crate::error::{Result, StateError};
use crate::{ids, seed};

struct Content {
    facts: Vec<Fact>,
    reactions: Vec<Reaction>,
}

/// Input for [`Catalogue::add_fact`].
#[derive(Debug, Clone)]
pub struct NewFact {
    pub title: String,
    pub content: String,
    pub source: Option<String>,
    pub image_url: Option<String>,
    pub category: String,
}

/// Facts and the reactions attached to them. Memory only: everything
/// posted here is gone on restart.
pub struct Catalogue {
    content: RwLock<Content>,
}

impl Catalogue {
    pub fn new(facts: Vec<Fact>, reactions: Vec<Reaction>) -> Self {
        Self {
            content: RwLock::new(Content { facts, reactions }),
        }
    }

    pub fn seeded() -> Self {
        Self::seeded_at(Utc::now())
    }

    pub fn seeded_at(now: DateTime<Utc>) -> Self {
        Self::new(seed::facts(now), seed::reactions(now))
    }

    pub fn facts(&self) -> Result<Vec<Fact>> {
        Ok(self.content.read()?.facts.clone())
    }

    pub fn fact(&self, id: &str) -> Result<Option<Fact>> {
        Ok(self.content.read()?.facts.iter().find(|f| f.id == id).cloned())
    }

    /// Every reaction whose `fact_id` matches, in list order.
    pub fn reactions_for_fact(&self, fact_id: &str) -> Result<Vec<Reaction>> {
        self.filtered(|r| r.fact_id == fact_id)
    }

    pub fn reactions_by_user(&self, user_id: &str) -> Result<Vec<Reaction>> {
        self.filtered(|r| r.user_id == user_id)
    }

    pub fn all_reactions(&self) -> Result<Vec<Reaction>> {
        Ok(self.content.read()?.reactions.clone())
    }

    pub fn sorted_reactions(&self, order: SortOrder) -> Result<Vec<Reaction>> {
        let mut reactions = self.all_reactions()?;
        sort_reactions(&mut reactions, order);
        Ok(reactions)
    }

    /// Newest first: the reaction goes to the front of the list.
    pub fn add_reaction(&self, reaction: Reaction) -> Result<()> {
        let mut content = self.content.write()?;
        if !content.facts.iter().any(|f| f.id == reaction.fact_id) {
            return Err(StateError::FactNotFound(reaction.fact_id));
        }
        debug!("Reaction {} added to fact {}", reaction.id, reaction.fact_id);
        content.reactions.insert(0, reaction);
        Ok(())
    }

    /// Replies read top to bottom: the comment goes to the end.
    pub fn add_comment(&self, comment: Comment) -> Result<()> {
        let mut content = self.content.write()?;
        let reaction = content
            .reactions
            .iter_mut()
            .find(|r| r.id == comment.reaction_id)
            .ok_or_else(|| StateError::ReactionNotFound(comment.reaction_id.clone()))?;
        debug!("Comment {} added to reaction {}", comment.id, reaction.id);
        reaction.comments.push(comment);
        Ok(())
    }

    /// Flip the like on a reaction. Returns the new `(likes, is_liked)`.
    pub fn toggle_reaction_like(&self, reaction_id: &str) -> Result<(u32, bool)> {
        let mut content = self.content.write()?;
        let reaction = content
            .reactions
            .iter_mut()
            .find(|r| r.id == reaction_id)
            .ok_or_else(|| StateError::ReactionNotFound(reaction_id.to_string()))?;
        Ok(toggle(&mut reaction.likes, &mut reaction.is_liked))
    }

    pub fn toggle_comment_like(&self, reaction_id: &str, comment_id: &str) -> Result<(u32, bool)> {
        let mut content = self.content.write()?;
        let reaction = content
            .reactions
            .iter_mut()
            .find(|r| r.id == reaction_id)
            .ok_or_else(|| StateError::ReactionNotFound(reaction_id.to_string()))?;
        let comment = reaction
            .comments
            .iter_mut()
            .find(|c| c.id == comment_id)
            .ok_or_else(|| StateError::CommentNotFound(comment_id.to_string()))?;
        Ok(toggle(&mut comment.likes, &mut comment.is_liked))
    }

    /// Append a fact to the feed. No endpoint exposes this.
    pub fn add_fact(&self, new: NewFact) -> Result<Fact> {
        let now = Utc::now();
        let fact = Fact {
            id: ids::generate("f", now),
            title: new.title,
            content: new.content,
            source: new.source,
            image_url: new.image_url,
            category: new.category,
            created_at: now,
        };
        self.content.write()?.facts.push(fact.clone());
        Ok(fact)
    }

    fn filtered<P>(&self, keep: P) -> Result<Vec<Reaction>>
    where
        P: Fn(&Reaction) -> bool,
    {
        let content = self.content.read()?;
        Ok(content.reactions.iter().filter(|r| keep(r)).cloned().collect())
    }
}

/// Stable: reactions that tie keep their relative order.
pub fn sort_reactions(reactions: &mut [Reaction], order: SortOrder) {
    match order {
        SortOrder::Newest => reactions.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::Popular => reactions.sort_by(|a, b| b.likes.cmp(&a.likes)),
    }
}

fn toggle(likes: &mut u32, is_liked: &mut Option<bool>) -> (u32, bool) {
    let liked = !is_liked.unwrap_or(false);
    *likes = if liked { likes.saturating_add(1) } else { likes.saturating_sub(1) };
    *is_liked = Some(liked);
    (*likes, liked)
}
