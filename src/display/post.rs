//! Post display formatting
//!
//! The gallery table and the single-post detail view.

use std::collections::HashMap;

use crate::models::{ContentType, Post, User, UserId};

/// Gallery titles longer than this are cut with an ellipsis
pub const GALLERY_TITLE_LEN: usize = 50;

/// Author label used for posts without a user
pub const ANONYMOUS: &str = "Anonymous";

/// Users keyed by id, for resolving post authors
pub type AuthorLookup = HashMap<UserId, User>;

/// Build an [`AuthorLookup`] from a user list
pub fn author_lookup(users: Vec<User>) -> AuthorLookup {
    users.into_iter().map(|u| (u.id, u)).collect()
}

/// Display name of a post's author
pub fn author_label(post: &Post, authors: &AuthorLookup) -> String {
    post.user_id
        .and_then(|id| authors.get(&id))
        .map(|u| u.name.clone())
        .unwrap_or_else(|| ANONYMOUS.to_string())
}

/// Format the gallery as a table
pub fn format_post_list(posts: &[Post], authors: &AuthorLookup, date_format: &str) -> String {
    if posts.is_empty() {
        return "No posts found.".to_string();
    }

    let rows: Vec<[String; 6]> = posts
        .iter()
        .map(|p| {
            [
                p.id.to_string(),
                p.content_type.to_string(),
                p.short_title(GALLERY_TITLE_LEN),
                author_label(p, authors),
                p.views.to_string(),
                p.created_at.format(date_format).to_string(),
            ]
        })
        .collect();

    let headers = ["ID", "Type", "Title", "Author", "Views", "Posted"];
    let mut widths = headers.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = String::new();
    output.push_str(&format_row(&headers.map(String::from), &widths));
    output.push_str(&format_row(&widths.map(|w| "-".repeat(w)), &widths));
    for row in &rows {
        output.push_str(&format_row(row, &widths));
    }
    output.push_str(&format!(
        "\n{} post{}",
        posts.len(),
        if posts.len() == 1 { "" } else { "s" }
    ));

    output
}

fn format_row(cells: &[String; 6], widths: &[usize; 6]) -> String {
    // Views is right-aligned, everything else left-aligned
    format!(
        "{:<w0$}  {:<w1$}  {:<w2$}  {:<w3$}  {:>w4$}  {}\n",
        cells[0],
        cells[1],
        cells[2],
        cells[3],
        cells[4],
        cells[5],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
        w3 = widths[3],
        w4 = widths[4],
    )
}

/// Render a post's media the way the detail page shows it
pub fn format_media(post: &Post) -> String {
    match post.content_type {
        ContentType::Text => post.content.clone(),
        ContentType::Image => format!("Image: {}", post.content),
        ContentType::Video => format!("Video: {}", post.content),
        ContentType::Audio => format!("Audio: {}", post.content),
        ContentType::Pdf => format!("View externally: {}", post.content),
    }
}

/// Format a single post's detail view
pub fn format_post_details(post: &Post, author: Option<&User>, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", post.title));
    output.push_str(&format!("{}\n\n", "=".repeat(post.title.chars().count().max(3))));

    output.push_str(&format!("  ID:        {}\n", post.id));
    output.push_str(&format!("  Type:      {}\n", post.content_type));
    output.push_str(&format!(
        "  Author:    {}\n",
        author.map(|u| u.name.as_str()).unwrap_or(ANONYMOUS)
    ));
    output.push_str(&format!(
        "  Posted:    {}\n",
        post.created_at.format(date_format)
    ));
    output.push_str(&format!("  Views:     {}\n", post.views));
    if let Some(location) = &post.location {
        output.push_str(&format!("  Location:  {}\n", location));
    }
    if !post.tags.is_empty() {
        output.push_str(&format!("  Tags:      {}\n", post.tags.join(", ")));
    }
    if let Some(thumbnail) = &post.thumbnail {
        output.push_str(&format!("  Cover:     {}\n", thumbnail));
    }

    output.push('\n');
    output.push_str(&format_media(post));
    output.push('\n');

    if let Some(description) = &post.description {
        output.push_str(&format!("\n{}\n", description));
    }

    if !post.research_questions.is_empty() {
        output.push_str("\nResearch questions:\n");
        for question in &post.research_questions {
            output.push_str(&format!("  - {}\n", question));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Submission;

    const DATE: &str = "%Y-%m-%d";

    fn post(content_type: ContentType, title: &str, content: &str) -> Post {
        let submission = Submission {
            title: title.into(),
            content: content.into(),
            tags: vec!["youth".into()],
            ..Submission::new(content_type)
        };
        Post::from_submission(&submission, None)
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_post_list(&[], &AuthorLookup::new(), DATE), "No posts found.");
    }

    #[test]
    fn test_list_truncates_titles_and_labels_anonymous() {
        let long = "a".repeat(60);
        let p = post(ContentType::Text, &long, "words");
        let output = format_post_list(&[p], &AuthorLookup::new(), DATE);

        assert!(output.contains(&format!("{}...", "a".repeat(50))));
        assert!(!output.contains(&"a".repeat(51)));
        assert!(output.contains(ANONYMOUS));
        assert!(output.ends_with("1 post"));
    }

    #[test]
    fn test_list_shows_author_name() {
        let user = User::new("jo");
        let mut p = post(ContentType::Text, "Hi", "words");
        p.user_id = Some(user.id);
        let output = format_post_list(&[p], &author_lookup(vec![user]), DATE);
        assert!(output.contains("jo"));
        assert!(!output.contains(ANONYMOUS));
    }

    #[test]
    fn test_pdf_detail_links_externally() {
        let p = post(ContentType::Pdf, "Essay", "https://cdn.example/essay.pdf");
        let output = format_post_details(&p, None, DATE);
        assert!(output.contains("View externally: https://cdn.example/essay.pdf"));
        assert!(output.contains("Author:    Anonymous"));
    }

    #[test]
    fn test_text_detail_is_inline() {
        let p = post(ContentType::Text, "Note", "Just words.");
        assert_eq!(format_media(&p), "Just words.");
    }
}
