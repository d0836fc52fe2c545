//! Backend Models
//!
//! Data structures matching the Connect backend's records. The backend owns
//! these schemas; the console only consumes and partially edits them, so
//! nearly every field is optional or defaulted.

use serde::{Deserialize, Serialize};

/// Logged-in administrator, as persisted alongside the bearer token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Account record nested under a profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(rename = "DOB", default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_login: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub user: Option<UserAccount>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub profile_pic: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub friends: Vec<String>,
    #[serde(default)]
    pub following: Vec<String>,
    #[serde(default)]
    pub blocked_users: Vec<String>,
    #[serde(default)]
    pub present_address: Option<String>,
    #[serde(default)]
    pub permanent_address: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Post author as embedded by the backend (already denormalized).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub feelings: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub audience: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub photos: Option<String>,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub reacts: Vec<serde_json::Value>,
    #[serde(default)]
    pub comments: Vec<serde_json::Value>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Short-form video entry ("watch").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Watch {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub feeling: Option<String>,
    #[serde(default)]
    pub audience: Option<String>,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub reacts: Vec<serde_json::Value>,
    #[serde(default)]
    pub comments: Vec<serde_json::Value>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Moderation report against a profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub reported_by: Option<Profile>,
    #[serde(default)]
    pub reported_profile: Option<Profile>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Global site settings (the "general" section of the remote config).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    #[serde(default)]
    pub site_title: String,
    #[serde(default)]
    pub site_description: String,
    #[serde(default)]
    pub site_url: String,
    #[serde(default)]
    pub site_logo: Option<String>,
    #[serde(default)]
    pub show_ads: bool,
    #[serde(default)]
    pub register_new_account: bool,
    #[serde(default)]
    pub is_maintenance_mode: bool,
    #[serde(default)]
    pub default_theme: String,
    #[serde(default)]
    pub default_language: String,
    #[serde(default)]
    pub default_timezone: String,
    #[serde(default)]
    pub apk_url: String,
    #[serde(default)]
    pub app_version: String,
    #[serde(default)]
    pub is_new_version_available: bool,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_title: "Connect".to_string(),
            site_description: "A modern social platform for connecting people".to_string(),
            site_url: String::new(),
            site_logo: None,
            show_ads: false,
            register_new_account: false,
            is_maintenance_mode: false,
            default_theme: "dark".to_string(),
            default_language: "en".to_string(),
            default_timezone: "UTC".to_string(),
            apk_url: String::new(),
            app_version: String::new(),
            is_new_version_available: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsTotals {
    #[serde(default)]
    pub users: u64,
    #[serde(default)]
    pub profiles: u64,
    #[serde(default)]
    pub active_profiles: u64,
    #[serde(default)]
    pub posts: u64,
    #[serde(default)]
    pub watches: u64,
    #[serde(default)]
    pub comments: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    #[serde(default)]
    pub totals: StatsTotals,
    #[serde(default)]
    pub recent_activities: Vec<ActivityEntry>,
}

/// `/upload` response: the hosted URL under one of two keys.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub secure_url: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl UploadResponse {
    /// Hosted URL, preferring the secure variant.
    pub fn hosted_url(self) -> Option<String> {
        self.secure_url.or(self.url)
    }
}

// ========================
// Request Payloads
// ========================

#[derive(Debug, Clone, Serialize)]
pub struct LoginPayload<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(flatten)]
    pub admin: Admin,
}

/// Whole-draft update for a post. Submitted wholesale, never diffed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    pub caption: String,
    pub content: String,
    pub text: String,
    pub feelings: String,
    pub location: String,
    pub audience: String,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photos: Option<String>,
}

impl PostDraft {
    pub fn from_post(post: &Post) -> Self {
        Self {
            caption: post.caption.clone().unwrap_or_default(),
            content: post.content.clone().unwrap_or_default(),
            text: post.text.clone().unwrap_or_default(),
            feelings: post.feelings.clone().unwrap_or_default(),
            location: post.location.clone().unwrap_or_default(),
            audience: post.audience.clone().unwrap_or_else(|| "public".to_string()),
            is_active: post.is_active.unwrap_or(true),
            photos: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    pub first_name: String,
    pub surname: String,
    pub email: String,
    pub bio: String,
    pub gender: String,
    #[serde(rename = "DOB")]
    pub dob: String,
    pub present_address: String,
    pub permanent_address: String,
    pub is_active: bool,
}

impl ProfileDraft {
    pub fn from_profile(profile: &Profile) -> Self {
        let user = profile.user.clone().unwrap_or_default();
        Self {
            first_name: user.first_name.unwrap_or_default(),
            surname: user.surname.unwrap_or_default(),
            email: user.email.unwrap_or_default(),
            bio: profile.bio.clone().unwrap_or_default(),
            gender: user.gender.unwrap_or_default(),
            dob: user.dob.unwrap_or_default(),
            present_address: profile.present_address.clone().unwrap_or_default(),
            permanent_address: profile.permanent_address.clone().unwrap_or_default(),
            is_active: profile.is_active.unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchDraft {
    pub caption: String,
    pub feeling: String,
    pub audience: String,
}

impl WatchDraft {
    pub fn from_watch(watch: &Watch) -> Self {
        Self {
            caption: watch.caption.clone().unwrap_or_default(),
            feeling: watch.feeling.clone().unwrap_or_default(),
            audience: watch.audience.clone().unwrap_or_else(|| "public".to_string()),
        }
    }
}

/// Administrative password reset for a profile's account.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetPasswordPayload<'a> {
    pub new_password: &'a str,
    pub confirm_password: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportStatusPayload<'a> {
    pub status: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_draft_seeds_every_editable_field() {
        let post: Post = serde_json::from_value(serde_json::json!({
            "_id": "p1",
            "caption": "old caption",
            "content": "body",
            "text": "plain",
            "feelings": "happy",
            "location": "Oslo",
            "audience": "friends",
            "isActive": false,
            "photos": "https://cdn/img.jpg"
        }))
        .unwrap();

        let draft = PostDraft::from_post(&post);
        assert_eq!(draft.caption, "old caption");
        assert_eq!(draft.content, "body");
        assert_eq!(draft.text, "plain");
        assert_eq!(draft.feelings, "happy");
        assert_eq!(draft.location, "Oslo");
        assert_eq!(draft.audience, "friends");
        assert!(!draft.is_active);
        // The existing hosted image is never resubmitted unless replaced.
        assert_eq!(draft.photos, None);
    }

    #[test]
    fn test_post_draft_without_new_image_omits_photos() {
        let draft = PostDraft {
            caption: "new".to_string(),
            audience: "public".to_string(),
            is_active: true,
            ..Default::default()
        };
        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(body["caption"], "new");
        assert!(body.get("photos").is_none());
    }

    #[test]
    fn test_post_draft_merges_uploaded_url() {
        let draft = PostDraft {
            photos: Some("https://cdn/hosted.jpg".to_string()),
            ..Default::default()
        };
        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(body["photos"], "https://cdn/hosted.jpg");
    }

    #[test]
    fn test_profile_draft_falls_back_on_missing_user() {
        let profile = Profile {
            id: "a".to_string(),
            bio: Some("hi".to_string()),
            ..Default::default()
        };
        let draft = ProfileDraft::from_profile(&profile);
        assert_eq!(draft.first_name, "");
        assert_eq!(draft.bio, "hi");
        assert!(draft.is_active);
    }

    #[test]
    fn test_profile_draft_preserves_date_of_birth() {
        let profile: Profile = serde_json::from_value(serde_json::json!({
            "_id": "p",
            "user": { "_id": "u", "DOB": "1990-01-01" }
        }))
        .unwrap();

        let draft = ProfileDraft::from_profile(&profile);
        assert_eq!(draft.dob, "1990-01-01");

        // An untouched save must write the stored date back, not blank it.
        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(body["DOB"], "1990-01-01");
    }

    #[test]
    fn test_loose_profile_parses_with_missing_fields() {
        let profile: Profile =
            serde_json::from_value(serde_json::json!({ "_id": "p", "username": "ali" })).unwrap();
        assert_eq!(profile.id, "p");
        assert_eq!(profile.username.as_deref(), Some("ali"));
        assert!(profile.friends.is_empty());
    }

    #[test]
    fn test_upload_response_prefers_secure_url() {
        let both: UploadResponse = serde_json::from_value(serde_json::json!({
            "secure_url": "https://s", "url": "http://u"
        }))
        .unwrap();
        assert_eq!(both.hosted_url().as_deref(), Some("https://s"));

        let plain: UploadResponse =
            serde_json::from_value(serde_json::json!({ "url": "http://u" })).unwrap();
        assert_eq!(plain.hosted_url().as_deref(), Some("http://u"));
    }

    #[test]
    fn test_login_response_flattens_admin() {
        let res: LoginResponse = serde_json::from_value(serde_json::json!({
            "accessToken": "tok",
            "_id": "adm1",
            "fullName": "Nora Vik",
            "role": "Administrator"
        }))
        .unwrap();
        assert_eq!(res.access_token, "tok");
        assert_eq!(res.admin.full_name.as_deref(), Some("Nora Vik"));
    }
}
