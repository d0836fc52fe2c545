//! Status Badge Component

use leptos::prelude::*;

fn badge_class(status: &str) -> &'static str {
    match status {
        "active" | "reviewed" => "badge badge-green",
        "inactive" | "open" => "badge badge-yellow",
        "suspended" => "badge badge-red",
        _ => "badge badge-gray",
    }
}

#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    let class = badge_class(&status);
    view! { <span class=class>{status}</span> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_class_mapping() {
        assert_eq!(badge_class("active"), "badge badge-green");
        assert_eq!(badge_class("suspended"), "badge badge-red");
        assert_eq!(badge_class("something-else"), "badge badge-gray");
    }
}
