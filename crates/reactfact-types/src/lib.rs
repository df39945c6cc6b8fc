pub mod api;
pub mod models;

pub use models::{Comment, Fact, Friend, FriendStatus, Gif, Reaction, Theme, User};
