use serde::{Deserialize, Serialize};

use crate::models::{Fact, Friend, Gif, Reaction, Theme, User};

// -- Session --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub user: Option<User>,
    pub is_authenticated: bool,
}

impl SessionView {
    pub fn from_user(user: Option<User>) -> Self {
        Self {
            is_authenticated: user.is_some(),
            user,
        }
    }
}

// -- Profile --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateProfileRequest {
    pub username: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendsView {
    pub friends: Vec<Friend>,
    pub pending_requests: Vec<Friend>,
    pub sent_requests: Vec<Friend>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub user: User,
    #[serde(flatten)]
    pub friends: FriendsView,
    pub avatar_choices: Vec<String>,
}

// -- Friends --

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AddFriendRequest {
    pub user_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct IncomingFriendRequest {
    pub user_id: String,
    #[serde(default)]
    pub username: Option<String>,
}

// -- Reactions & comments --

/// Body of both the reaction form and the reply form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ComposeRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub gif_url: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Newest,
    Popular,
}

#[derive(Debug, Default, Deserialize)]
pub struct ReactionsQuery {
    #[serde(default)]
    pub sort: SortOrder,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    pub likes: u32,
    pub is_liked: bool,
}

// -- Views --

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactCard {
    pub fact: Fact,
    pub reaction_count: usize,
    pub reactions: Vec<Reaction>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FeedView {
    pub session: SessionView,
    pub facts: Vec<FactCard>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalReaction {
    pub fact_title: String,
    pub reaction: Reaction,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GlobalReactionsView {
    pub sort: SortOrder,
    pub reactions: Vec<GlobalReaction>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MyReactionsView {
    pub reactions: Vec<Reaction>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsView {
    pub theme: Theme,
    pub app_name: String,
    pub version: String,
}

// -- GIFs --

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GifTab {
    #[default]
    Trending,
    Funny,
    Science,
}

impl GifTab {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trending => "trending",
            Self::Funny => "funny",
            Self::Science => "science",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GifSearchQuery {
    #[serde(default)]
    pub q: String,
}

/// What the GIF selector currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GifPanel {
    pub tab: GifTab,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    pub loading: bool,
    pub gifs: Vec<Gif>,
}

// -- Errors --

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
