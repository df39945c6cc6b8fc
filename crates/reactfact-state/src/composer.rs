use chrono::{DateTime, Utc};

use reactfact_types::api::ComposeRequest;
use reactfact_types::{Comment, Reaction, User};

use crate::error::{Result, StateError};
use crate::ids;

/// Text and/or GIF typed into a reaction or reply form.
#[derive(Debug, Clone, Default)]
pub struct Draft {
    pub text: String,
    pub gif_url: Option<String>,
}

#[cfg(test)]
impl Draft {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            gif_url: None,
        }
    }

    pub fn with_gif(mut self, url: impl Into<String>) -> Self {
        self.gif_url = Some(url.into());
        self
    }
}

impl Draft {
    fn trimmed_text(&self) -> &str {
        self.text.trim()
    }

    fn gif(&self) -> Option<String> {
        self.gif_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .map(str::to_string)
    }

    /// The submit button is live only when this holds.
    pub fn is_submittable(&self) -> bool {
        !self.trimmed_text().is_empty() || self.gif().is_some()
    }
}

impl From<ComposeRequest> for Draft {
    fn from(req: ComposeRequest) -> Self {
        Self {
            text: req.text,
            gif_url: req.gif_url,
        }
    }
}

pub fn compose_reaction(user: &User, fact_id: &str, draft: &Draft, now: DateTime<Utc>) -> Result<Reaction> {
    if !draft.is_submittable() {
        return Err(StateError::EmptyReaction);
    }

    let text = draft.trimmed_text();
    Ok(Reaction {
        id: ids::generate("r", now),
        fact_id: fact_id.to_string(),
        user_id: user.id.clone(),
        username: user.username.clone(),
        user_avatar: Some(user.avatar.clone()),
        text: (!text.is_empty()).then(|| text.to_string()),
        gif_url: draft.gif(),
        likes: 0,
        is_liked: None,
        created_at: now,
        comments: Vec::new(),
    })
}

pub fn compose_comment(user: &User, reaction_id: &str, draft: &Draft, now: DateTime<Utc>) -> Result<Comment> {
    if !draft.is_submittable() {
        return Err(StateError::EmptyComment);
    }

    Ok(Comment {
        id: ids::generate("c", now),
        reaction_id: reaction_id.to_string(),
        user_id: user.id.clone(),
        username: user.username.clone(),
        user_avatar: Some(user.avatar.clone()),
        text: draft.trimmed_text().to_string(),
        gif_url: draft.gif(),
        created_at: now,
        likes: 0,
        is_liked: None,
    })
}
