//! View-Model Mappers
//!
//! Typed derivation functions over the loosely-shaped backend records, one
//! set per entity kind. Fallback rules live here and nowhere else, so every
//! screen renders missing data the same way.

use chrono::{DateTime, Utc};

use crate::models::{Author, Post, Profile, Watch};

pub const UNKNOWN_USER: &str = "Unknown User";

/// Display name for a profile. Prefers the linked account's legal name, then
/// the profile's own display name, then the username.
pub fn profile_name(profile: &Profile) -> String {
    if let Some(user) = &profile.user {
        let name = format!(
            "{} {}",
            user.first_name.as_deref().unwrap_or(""),
            user.surname.as_deref().unwrap_or("")
        );
        let name = name.trim();
        if !name.is_empty() {
            return name.to_string();
        }
    }
    profile
        .display_name
        .clone()
        .or_else(|| profile.username.clone())
        .unwrap_or_else(|| UNKNOWN_USER.to_string())
}

pub fn profile_email(profile: &Profile) -> String {
    profile
        .user
        .as_ref()
        .and_then(|u| u.email.clone())
        .unwrap_or_else(|| "No email".to_string())
}

/// Derived moderation status: an explicitly deactivated profile is
/// "inactive", one with blocks against it is "suspended", otherwise "active".
pub fn profile_status(profile: &Profile) -> &'static str {
    if profile.is_active == Some(false) {
        "inactive"
    } else if !profile.blocked_users.is_empty() {
        "suspended"
    } else {
        "active"
    }
}

pub fn author_name(author: Option<&Author>) -> String {
    author
        .and_then(|a| a.full_name.clone().or_else(|| a.display_name.clone()))
        .unwrap_or_else(|| UNKNOWN_USER.to_string())
}

/// Post kind, inferred from attachments when the backend didn't set one.
pub fn post_kind(post: &Post) -> String {
    if let Some(kind) = &post.kind {
        return kind.clone();
    }
    if post.photos.is_some() {
        "image".to_string()
    } else if post.video.is_some() {
        "video".to_string()
    } else if post.link.is_some() {
        "link".to_string()
    } else {
        "text".to_string()
    }
}

pub fn watch_kind(watch: &Watch) -> String {
    watch.kind.clone().unwrap_or_else(|| "watch".to_string())
}

/// Millisecond sort key for an optional ISO-8601 timestamp. Missing or
/// unparseable timestamps sort as oldest.
pub fn timestamp_key(value: Option<&str>) -> i64 {
    value
        .and_then(|v| DateTime::parse_from_rfc3339(v).ok())
        .map(|dt| dt.timestamp_millis())
        .unwrap_or(i64::MIN)
}

pub fn format_date(value: Option<&str>) -> String {
    value
        .and_then(|v| DateTime::parse_from_rfc3339(v).ok())
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

pub fn format_datetime(value: Option<&str>) -> String {
    value
        .and_then(|v| DateTime::parse_from_rfc3339(v).ok())
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Coarse relative time for "last active" columns.
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - then).num_hours();
    if hours < 1 {
        "Just now".to_string()
    } else if hours < 24 {
        format!("{hours} hours ago")
    } else {
        let days = hours / 24;
        if days < 7 {
            format!("{days} days ago")
        } else {
            then.format("%Y-%m-%d").to_string()
        }
    }
}

/// Last-active label for a profile, relative to now.
pub fn last_active(profile: &Profile) -> String {
    match profile
        .user
        .as_ref()
        .and_then(|u| u.last_login.as_deref())
        .and_then(|v| DateTime::parse_from_rfc3339(v).ok())
    {
        Some(then) => relative_time(then.with_timezone(&Utc), Utc::now()),
        None => "Unknown".to_string(),
    }
}

/// Uppercase initials for the avatar chrome, at most two characters.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(|c| c.to_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserAccount;
    use chrono::TimeZone;

    fn profile_with_user(first: &str, last: &str) -> Profile {
        Profile {
            id: "p".to_string(),
            user: Some(UserAccount {
                first_name: Some(first.to_string()),
                surname: Some(last.to_string()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_profile_name_prefers_account_name() {
        let mut profile = profile_with_user("Alice", "Ng");
        profile.display_name = Some("ali".to_string());
        assert_eq!(profile_name(&profile), "Alice Ng");
    }

    #[test]
    fn test_profile_name_fallback_chain() {
        let mut profile = Profile::default();
        assert_eq!(profile_name(&profile), UNKNOWN_USER);

        profile.username = Some("ali99".to_string());
        assert_eq!(profile_name(&profile), "ali99");

        profile.display_name = Some("Ali".to_string());
        assert_eq!(profile_name(&profile), "Ali");

        // A user record with blank names falls through to the profile fields.
        profile.user = Some(UserAccount::default());
        assert_eq!(profile_name(&profile), "Ali");
    }

    #[test]
    fn test_profile_email_fallback() {
        assert_eq!(profile_email(&Profile::default()), "No email");
    }

    #[test]
    fn test_profile_status_derivation() {
        let mut profile = Profile::default();
        assert_eq!(profile_status(&profile), "active");

        profile.blocked_users = vec!["x".to_string()];
        assert_eq!(profile_status(&profile), "suspended");

        // Explicit deactivation wins over blocks.
        profile.is_active = Some(false);
        assert_eq!(profile_status(&profile), "inactive");
    }

    #[test]
    fn test_author_name_fallbacks() {
        assert_eq!(author_name(None), UNKNOWN_USER);
        let author = Author {
            display_name: Some("dee".to_string()),
            ..Default::default()
        };
        assert_eq!(author_name(Some(&author)), "dee");
    }

    #[test]
    fn test_post_kind_inference() {
        let mut post = Post::default();
        assert_eq!(post_kind(&post), "text");
        post.photos = Some("u".to_string());
        assert_eq!(post_kind(&post), "image");
        post.kind = Some("story".to_string());
        assert_eq!(post_kind(&post), "story");
    }

    #[test]
    fn test_watch_kind_drives_type_facet() {
        let typed = Watch {
            kind: Some("watch".to_string()),
            ..Default::default()
        };
        let untyped = Watch::default();

        // Untyped entries fall back to "watch", so the facet still catches them.
        assert_eq!(watch_kind(&untyped), "watch");
        assert!(crate::list::matches_facet("watch", &watch_kind(&typed)));
        assert!(crate::list::matches_facet("watch", &watch_kind(&untyped)));
        assert!(crate::list::matches_facet("all", &watch_kind(&untyped)));
    }

    #[test]
    fn test_timestamp_key_orders_unparseable_oldest() {
        let good = timestamp_key(Some("2024-03-01T12:00:00.000Z"));
        assert!(good > timestamp_key(Some("not a date")));
        assert_eq!(timestamp_key(None), i64::MIN);
        assert!(good > timestamp_key(Some("2024-02-29T12:00:00.000Z")));
    }

    #[test]
    fn test_relative_time_buckets() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        let mins_ago = Utc.with_ymd_and_hms(2024, 3, 10, 11, 30, 0).unwrap();
        let hours_ago = Utc.with_ymd_and_hms(2024, 3, 10, 7, 0, 0).unwrap();
        let days_ago = Utc.with_ymd_and_hms(2024, 3, 8, 12, 0, 0).unwrap();
        let long_ago = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        assert_eq!(relative_time(mins_ago, now), "Just now");
        assert_eq!(relative_time(hours_ago, now), "5 hours ago");
        assert_eq!(relative_time(days_ago, now), "2 days ago");
        assert_eq!(relative_time(long_ago, now), "2024-01-01");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Nora Vik"), "NV");
        assert_eq!(initials("plainname"), "P");
        assert_eq!(initials(""), "");
    }
}
