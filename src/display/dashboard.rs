//! Dashboard and landing text

use crate::services::Dashboard;

use super::post::{author_lookup, format_post_list};

/// Text shown when the binary runs without a subcommand
pub fn landing() -> String {
    [
        "Archive Our Youth",
        "",
        "Explore our youth's visions and creations for wellbeing.",
        "",
        "  archive submit            share something in the submission wizard",
        "  archive post list         browse the gallery",
        "  archive post show <ID>    open a post",
        "  archive dashboard         see your own posts (needs --user)",
        "",
        "Run `archive --help` for every command.",
    ]
    .join("\n")
}

/// Format a user's dashboard
pub fn format_dashboard(dashboard: &Dashboard, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", dashboard.user.name));
    output.push_str(&format!("  Handle:        @{}\n", dashboard.user.handle));
    output.push_str(&format!(
        "  Member Since:  {}\n",
        dashboard.member_since.format(date_format)
    ));
    output.push_str(&format!("  Posts:         {}\n", dashboard.post_count()));
    output.push_str(&format!("  Total Views:   {}\n\n", dashboard.total_views));

    if dashboard.posts.is_empty() {
        output.push_str("You haven't posted anything yet. Run `archive submit` to share something.");
    } else {
        let authors = author_lookup(vec![dashboard.user.clone()]);
        output.push_str(&format_post_list(&dashboard.posts, &authors, date_format));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;

    #[test]
    fn test_empty_dashboard() {
        let user = User::new("jo");
        let dashboard = Dashboard {
            member_since: user.created_at,
            user,
            posts: vec![],
            total_views: 0,
        };
        let output = format_dashboard(&dashboard, "%Y-%m-%d");
        assert!(output.starts_with("jo\n"));
        assert!(output.contains("Member Since:"));
        assert!(output.contains("Posts:         0"));
        assert!(output.contains("haven't posted"));
    }

    #[test]
    fn test_landing_mentions_submit() {
        assert!(landing().contains("archive submit"));
    }
}
