//! Value checks performed by Reader actions.

use crate::routing::values::MatchedValues;

/// Permalinks dated in or before this year are not treated as posts.
pub const EARLIEST_POST_YEAR: i64 = 1900;

/// Parse a site id (under `site_key`) and a `post_id`.
pub fn site_and_post_id(values: &MatchedValues, site_key: &str) -> Option<(i64, i64)> {
    let site_id = values.parse(site_key)?;
    let post_id = values.parse("post_id")?;
    Some((site_id, post_id))
}

/// Whether the date segments of a `/:post_year/:post_month/:post_day/:post_name`
/// match look like a real post date. Missing or unparsable parts count as 0.
pub fn is_valid_wpcom_permalink(values: &MatchedValues) -> bool {
    let year = values.parse::<i64>("post_year").unwrap_or(0);
    let month = values.parse::<i64>("post_month").unwrap_or(0);
    let day = values.parse::<i64>("post_day").unwrap_or(0);

    is_year(year) && is_month(month) && is_day(day)
}

fn is_year(year: i64) -> bool {
    year > EARLIEST_POST_YEAR
}

fn is_month(month: i64) -> bool {
    (1..=12).contains(&month)
}

fn is_day(day: i64) -> bool {
    (1..=31).contains(&day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: &str, month: &str, day: &str) -> MatchedValues {
        [
            ("post_year", year),
            ("post_month", month),
            ("post_day", day),
            ("post_name", "hello-world"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_valid_dates() {
        assert!(is_valid_wpcom_permalink(&date("1999", "01", "15")));
        assert!(is_valid_wpcom_permalink(&date("1901", "12", "31")));
        assert!(is_valid_wpcom_permalink(&date("2024", "1", "1")));
    }

    #[test]
    fn test_date_bounds() {
        assert!(!is_valid_wpcom_permalink(&date("1800", "01", "15")));
        assert!(!is_valid_wpcom_permalink(&date("1900", "01", "15")));
        assert!(!is_valid_wpcom_permalink(&date("1999", "00", "15")));
        assert!(!is_valid_wpcom_permalink(&date("1999", "13", "15")));
        assert!(!is_valid_wpcom_permalink(&date("1999", "01", "0")));
        assert!(!is_valid_wpcom_permalink(&date("1999", "01", "32")));
    }

    #[test]
    fn test_non_numeric_dates() {
        assert!(!is_valid_wpcom_permalink(&date("read", "list", "someone")));
        assert!(!is_valid_wpcom_permalink(&MatchedValues::new()));
    }

    #[test]
    fn test_site_and_post_id() {
        let values: MatchedValues = [("feed_id", "42"), ("post_id", "7")].into_iter().collect();
        assert_eq!(site_and_post_id(&values, "feed_id"), Some((42, 7)));
        assert_eq!(site_and_post_id(&values, "blog_id"), None);

        let values: MatchedValues = [("feed_id", "abc"), ("post_id", "7")].into_iter().collect();
        assert_eq!(site_and_post_id(&values, "feed_id"), None);
    }
}
