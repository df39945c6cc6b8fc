//! Offline GIF catalogue, used when no Tenor API key is configured.

use reactfact_types::Gif;

use crate::GifSource;

const DEFAULT_BUCKET: &str = "trending";

const BUCKETS: &[(&str, &[(&str, &str)])] = &[
    (
        "trending",
        &[
            ("fb-trending-1", "https://media.tenor.com/2roX3uxz_68AAAAC/cat-space.gif"),
            ("fb-trending-2", "https://media.tenor.com/Y8oQ3QZt9-kAAAAC/mind-blown.gif"),
            ("fb-trending-3", "https://media.tenor.com/ZXrWbPpVE1kAAAAC/thumbs-up.gif"),
            ("fb-trending-4", "https://media.tenor.com/5lLcKZgmIhgAAAAC/the-office-wow.gif"),
        ],
    ),
    (
        "funny",
        &[
            ("fb-funny-1", "https://media.tenor.com/3hDd8SEhHZ0AAAAC/laughing-lol.gif"),
            ("fb-funny-2", "https://media.tenor.com/tSgqpLcTXLIAAAAC/dog-funny.gif"),
            ("fb-funny-3", "https://media.tenor.com/kHcmsxlKHEAAAAAC/rock-one-eyebrow-raised.gif"),
        ],
    ),
    (
        "science",
        &[
            ("fb-science-1", "https://media.tenor.com/Fx5Q0iUSrCkAAAAC/science-bill-nye.gif"),
            ("fb-science-2", "https://media.tenor.com/9pGT1dXbE3EAAAAC/chemistry-explosion.gif"),
            ("fb-science-3", "https://media.tenor.com/OK8z3I6p5ygAAAAC/neil-degrasse-tyson-mind-blown.gif"),
        ],
    ),
    (
        "wow",
        &[
            ("fb-wow-1", "https://media.tenor.com/5lLcKZgmIhgAAAAC/the-office-wow.gif"),
            ("fb-wow-2", "https://media.tenor.com/Y8oQ3QZt9-kAAAAC/mind-blown.gif"),
        ],
    ),
    (
        "sad",
        &[
            ("fb-sad-1", "https://media.tenor.com/uXjzC7s4JkoAAAAC/crying-sad.gif"),
            ("fb-sad-2", "https://media.tenor.com/ZyYFBW5QR5EAAAAC/pikachu-sad.gif"),
        ],
    ),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackGifs;

impl FallbackGifs {
    /// Category lookup: trimmed, case-insensitive; anything unknown gets
    /// the trending bucket.
    pub fn bucket(&self, category: &str) -> Vec<Gif> {
        let wanted = category.trim().to_lowercase();
        let entries = BUCKETS
            .iter()
            .find(|(name, _)| *name == wanted)
            .or_else(|| BUCKETS.iter().find(|(name, _)| *name == DEFAULT_BUCKET))
            .map(|(_, entries)| *entries)
            .unwrap_or_default();

        entries
            .iter()
            .map(|(id, url)| Gif {
                id: id.to_string(),
                url: url.to_string(),
                preview: url.to_string(),
            })
            .collect()
    }
}

impl GifSource for FallbackGifs {
    async fn search(&self, query: &str) -> Vec<Gif> {
        self.bucket(query)
    }

    async fn trending(&self) -> Vec<Gif> {
        self.bucket(DEFAULT_BUCKET)
    }
}
