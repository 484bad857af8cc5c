//! Synthetic data helpers used by generated seeders
//!
//! Thin wrappers over `fake` and `rand` so generated code stays short and
//! only depends on this crate. Foreign key values are drawn from a bounded
//! range and are not validated against actual target-table row counts;
//! resulting constraint violations surface as counted per-record failures.

use chrono::{Duration, NaiveDate, NaiveDateTime, Utc};
use fake::faker::address::en::{BuildingNumber, CityName, StreetName};
use fake::faker::internet::en::FreeEmail;
use fake::faker::lorem::en::{Paragraph, Sentence, Word, Words};
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use rand::distributions::Alphanumeric;
use rand::seq::SliceRandom;
use rand::Rng;
use rust_decimal::Decimal;

/// One lowercase lorem word.
pub fn word() -> String {
    Word().fake()
}

/// `n` lorem words joined with spaces.
pub fn words(n: usize) -> String {
    Words(n..n + 1).fake::<Vec<String>>().join(" ")
}

pub fn sentence() -> String {
    Sentence(4..10).fake()
}

pub fn paragraph() -> String {
    Paragraph(2..5).fake()
}

/// Short title-cased phrase.
pub fn title() -> String {
    Words(2..5)
        .fake::<Vec<String>>()
        .into_iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn name() -> String {
    Name().fake()
}

pub fn email() -> String {
    FreeEmail().fake()
}

pub fn phone() -> String {
    PhoneNumber().fake()
}

pub fn url() -> String {
    format!("https://www.example.com/{}", slug())
}

/// URL-safe slug with a random suffix to keep collisions rare.
pub fn slug() -> String {
    let base = Words(2..4).fake::<Vec<String>>().join("-");
    format!("{}-{}", base, token(4).to_lowercase())
}

pub fn address() -> String {
    format!(
        "{} {}, {}",
        BuildingNumber().fake::<String>(),
        StreetName().fake::<String>(),
        CityName().fake::<String>()
    )
}

/// Prefixed reference code, e.g. `ORD-7F3K2Q9D`.
pub fn code(prefix: &str) -> String {
    format!("{}-{}", prefix, token(8).to_uppercase())
}

/// Random alphanumeric token of the given length.
pub fn token(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

pub fn int_between(lo: i64, hi: i64) -> i64 {
    rand::thread_rng().gen_range(lo..=hi)
}

/// Price with two decimal places, between `lo` and `hi` whole units.
pub fn price(lo: i64, hi: i64) -> Decimal {
    let cents = rand::thread_rng().gen_range(lo * 100..=hi * 100);
    Decimal::new(cents, 2)
}

pub fn chance(p: f64) -> bool {
    rand::thread_rng().gen_bool(p)
}

/// Uniform pick from a non-empty option list.
pub fn pick<'a>(options: &[&'a str]) -> &'a str {
    options.choose(&mut rand::thread_rng()).copied().unwrap_or("")
}

/// Datetime within the last year, to the second.
pub fn datetime_recent() -> NaiveDateTime {
    let mut rng = rand::thread_rng();
    let offset = Duration::days(rng.gen_range(0..365)) + Duration::seconds(rng.gen_range(0..86_400));
    Utc::now().naive_utc() - offset
}

/// Date up to `years` years in the past.
pub fn date_past(years: i64) -> NaiveDate {
    let days = rand::thread_rng().gen_range(0..years.max(1) * 365);
    Utc::now().date_naive() - Duration::days(days)
}

/// Small JSON object for `json` columns.
pub fn metadata() -> serde_json::Value {
    serde_json::json!({
        "source": "seed",
        "tags": [word(), word()],
    })
}

/// Bounded foreign key reference in `1..=ceiling`.
pub fn foreign_key(ceiling: i64) -> i64 {
    rand::thread_rng().gen_range(1..=ceiling.max(1))
}

/// Nullable foreign key: absent roughly one time in five.
pub fn foreign_key_opt(ceiling: i64) -> Option<i64> {
    if chance(0.8) {
        Some(foreign_key(ceiling))
    } else {
        None
    }
}

/// Wrap a value for a nullable column; absent roughly three times in ten.
pub fn optional<T>(value: T) -> Option<T> {
    if chance(0.7) {
        Some(value)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foreign_key_stays_in_range() {
        for _ in 0..100 {
            let fk = foreign_key(10);
            assert!((1..=10).contains(&fk));
        }
    }

    #[test]
    fn test_foreign_key_tolerates_zero_ceiling() {
        assert_eq!(foreign_key(0), 1);
    }

    #[test]
    fn test_price_has_two_decimal_places() {
        for _ in 0..20 {
            let p = price(1, 500);
            assert_eq!(p.scale(), 2);
            assert!(p >= Decimal::new(100, 2));
            assert!(p <= Decimal::new(50_000, 2));
        }
    }

    #[test]
    fn test_pick_returns_a_listed_option() {
        let options = ["pending", "paid", "failed"];
        for _ in 0..20 {
            assert!(options.contains(&pick(&options)));
        }
    }

    #[test]
    fn test_pick_empty_is_total() {
        assert_eq!(pick(&[]), "");
    }

    #[test]
    fn test_code_carries_prefix() {
        let c = code("ORD");
        assert!(c.starts_with("ORD-"));
        assert_eq!(c.len(), "ORD-".len() + 8);
    }

    #[test]
    fn test_slug_is_lowercase_hyphenated() {
        let s = slug();
        assert!(!s.contains(' '));
        assert_eq!(s, s.to_lowercase());
    }

    #[test]
    fn test_datetime_recent_is_in_the_past() {
        assert!(datetime_recent() <= Utc::now().naive_utc());
    }
}
