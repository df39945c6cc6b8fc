use chrono::{DateTime, Utc};
use rand::Rng;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 9;

/// `<prefix>-<millis>-<9 base36 chars>`. Unique enough for one device;
/// not a cryptographic guarantee.
pub fn generate(prefix: &str, now: DateTime<Utc>) -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect();
    format!("{}-{}-{}", prefix, now.timestamp_millis(), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_is_prefix_millis_suffix() {
        let now = DateTime::from_timestamp_millis(1_700_000_000_123).unwrap();
        let id = generate("r", now);
        let parts: Vec<&str> = id.split('-').collect();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "r");
        assert_eq!(parts[1], "1700000000123");
        assert_eq!(parts[2].len(), 9);
        assert!(parts[2].bytes().all(|b| BASE36.contains(&b)));
    }

    #[test]
    fn same_instant_gives_different_ids() {
        let now = Utc::now();
        assert_ne!(generate("c", now), generate("c", now));
    }
}
