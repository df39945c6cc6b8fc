//! Built-in content. Timestamps are relative to the moment the catalogue
//! is built, so the feed always looks recent.

use chrono::{DateTime, Duration, Utc};

use reactfact_types::models::avatar_for;
use reactfact_types::{Comment, Fact, Reaction};

pub fn facts(now: DateTime<Utc>) -> Vec<Fact> {
    vec![
        Fact {
            id: "1".into(),
            title: "Bananas Are Berries, But Strawberries Aren't".into(),
            content: "Botanically speaking, bananas are classified as berries, while strawberries are considered 'aggregate accessory fruits'. This is because bananas develop from a single flower with one ovary, while strawberries develop from a flower with multiple ovaries.".into(),
            source: Some("Botanical Journal".into()),
            image_url: Some("https://images.unsplash.com/photo-1571771894821-ce9b6c11b08e".into()),
            category: "Science".into(),
            created_at: now - Duration::days(2),
        },
        Fact {
            id: "2".into(),
            title: "Honey Never Spoils".into(),
            content: "Archaeologists have found pots of honey in ancient Egyptian tombs that are over 3,000 years old and still perfectly good to eat. Honey's low moisture content, acidic pH, and hydrogen peroxide production create an environment where bacteria cannot survive.".into(),
            source: None,
            image_url: Some("https://images.unsplash.com/photo-1587049352851-8d4e89133924".into()),
            category: "Food".into(),
            created_at: now - Duration::days(1),
        },
        Fact {
            id: "3".into(),
            title: "A Day on Venus is Longer Than a Year on Venus".into(),
            content: "Venus rotates extremely slowly. It takes about 243 Earth days to complete one rotation, while it only takes 225 Earth days to orbit the Sun. This means a day on Venus (sunrise to sunrise) is longer than its year!".into(),
            source: Some("NASA".into()),
            image_url: None,
            category: "Space".into(),
            created_at: now,
        },
        Fact {
            id: "4".into(),
            title: "Octopuses Have Three Hearts".into(),
            content: "Octopuses have one main heart that pumps blood around the body and two additional hearts that pump blood specifically to the gills. Their blood is also blue due to a copper-rich protein called hemocyanin.".into(),
            source: None,
            image_url: Some("https://images.unsplash.com/photo-1545671913-b89ac1b4ac10".into()),
            category: "Marine Biology".into(),
            created_at: now,
        },
        Fact {
            id: "5".into(),
            title: "The First Computer Bug Was an Actual Bug".into(),
            content: "The term 'bug' to describe computer glitches originated in 1947 when Grace Hopper found a moth stuck in a relay of the Harvard Mark II computer. She taped the moth in her logbook with the note, 'First actual case of bug being found.'".into(),
            source: Some("Computer History Museum".into()),
            image_url: None,
            category: "Technology".into(),
            created_at: now,
        },
    ]
}

fn seeded_comment(
    id: &str,
    reaction_id: &str,
    user_id: &str,
    username: &str,
    text: &str,
    likes: u32,
    created_at: DateTime<Utc>,
) -> Comment {
    Comment {
        id: id.into(),
        reaction_id: reaction_id.into(),
        user_id: user_id.into(),
        username: username.into(),
        user_avatar: Some(avatar_for(username)),
        text: text.into(),
        gif_url: None,
        created_at,
        likes,
        is_liked: None,
    }
}

pub fn reactions(now: DateTime<Utc>) -> Vec<Reaction> {
    vec![
        Reaction {
            id: "r1".into(),
            fact_id: "1".into(),
            user_id: "user1".into(),
            username: "fruitlover".into(),
            user_avatar: Some(avatar_for("fruitlover")),
            text: Some("Mind blown! I've been living a lie about strawberries all this time.".into()),
            gif_url: None,
            likes: 42,
            is_liked: None,
            created_at: now - Duration::hours(5),
            comments: vec![seeded_comment(
                "c1",
                "r1",
                "user2",
                "botanist_bob",
                "Wait until you learn about raspberries!",
                8,
                now - Duration::hours(4),
            )],
        },
        Reaction {
            id: "r2".into(),
            fact_id: "2".into(),
            user_id: "user3".into(),
            username: "history_buff".into(),
            user_avatar: Some(avatar_for("history_buff")),
            text: Some("Ancient Egyptians were truly ahead of their time in preservation techniques.".into()),
            gif_url: Some("https://media.tenor.com/VszqpvMyhYEAAAAd/ancient-egypt-simpsons.gif".into()),
            likes: 27,
            is_liked: None,
            created_at: now - Duration::hours(12),
            comments: vec![],
        },
        Reaction {
            id: "r3".into(),
            fact_id: "3".into(),
            user_id: "user4".into(),
            username: "space_explorer".into(),
            user_avatar: Some(avatar_for("space_explorer")),
            text: Some("Venus is truly bizarre! Imagine a day lasting longer than a year!".into()),
            gif_url: None,
            likes: 54,
            is_liked: None,
            created_at: now - Duration::hours(8),
            comments: vec![seeded_comment(
                "c2",
                "r3",
                "user5",
                "galaxy_girl",
                "The concept of 'day' and 'year' gets really confusing on other planets!",
                15,
                now - Duration::hours(7),
            )],
        },
    ]
}
