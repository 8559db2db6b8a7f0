//! Post CLI commands
//!
//! Gallery browsing, the detail view, deletion, and a non-interactive
//! submit that drives the same wizard controller as the TUI.

use std::path::PathBuf;

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{author_lookup, format_post_details, format_post_list};
use crate::error::{ArchiveError, ArchiveResult};
use crate::models::{ContentType, GallerySort, User};
use crate::services::{ArchiveEndpoint, PostFilter, PostService, UserService};
use crate::storage::Storage;
use crate::upload::{LocalUploadService, UploadKind, UploadService};
use crate::wizard::{Rejected, Step, SubmissionEndpoint, Success, WizardController};

/// Post subcommands
#[derive(Subcommand)]
pub enum PostCommands {
    /// Publish a post without the interactive wizard
    Submit {
        /// Content type: text, image, video, audio or pdf
        #[arg(short = 't', long = "type", value_parser = parse_content_type, default_value = "text")]
        content_type: ContentType,
        /// Post title
        #[arg(long)]
        title: String,
        /// Body of a text post
        #[arg(short, long, conflicts_with = "file")]
        content: Option<String>,
        /// Media file to upload for image, video, audio and PDF posts
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Cover image file (video, audio and PDF posts)
        #[arg(long)]
        thumbnail: Option<PathBuf>,
        /// Description (not used for text posts)
        #[arg(short, long)]
        description: Option<String>,
        /// Tag (repeatable, 1 to 8)
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Research question this post responds to (repeatable)
        #[arg(long = "question")]
        questions: Vec<String>,
        /// Where you are
        #[arg(long)]
        location: Option<String>,
        /// Agree to the research-use consent terms
        #[arg(long)]
        agree: bool,
    },
    /// Browse the gallery
    List {
        /// Keyword to search for in titles
        #[arg(short, long)]
        keyword: Option<String>,
        /// Only posts with this tag (repeatable, at most 5)
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Only posts of this type
        #[arg(short = 't', long = "type", value_parser = parse_content_type)]
        content_type: Option<ContentType>,
        /// latest, oldest, most-popular or least-popular
        #[arg(short, long, value_parser = parse_sort)]
        sort: Option<GallerySort>,
        /// Maximum number of posts to list
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show a post (counts as a view)
    Show {
        /// Post ID
        post: String,
    },
    /// Delete one of your own posts
    Delete {
        /// Post ID
        post: String,
    },
}

fn parse_content_type(s: &str) -> Result<ContentType, String> {
    ContentType::parse(s).ok_or_else(|| {
        format!("unknown content type '{}' (expected text, image, video, audio or pdf)", s)
    })
}

fn parse_sort(s: &str) -> Result<GallerySort, String> {
    GallerySort::parse(s).ok_or_else(|| {
        format!(
            "unknown sort '{}' (expected latest, oldest, most-popular or least-popular)",
            s
        )
    })
}

/// Upload the media for a prepared draft and submit it
///
/// Every URL stored along the way is pushed to `stored` so the caller can
/// discard the files if publishing fails.
fn upload_and_submit<U: UploadService, E: SubmissionEndpoint>(
    wizard: &mut WizardController,
    uploads: &U,
    media: Option<(PathBuf, UploadKind)>,
    thumbnail: Option<PathBuf>,
    stored: &mut Vec<String>,
    author: Option<&User>,
    endpoint: &E,
) -> ArchiveResult<Success> {
    if let Some((file, kind)) = media {
        let url = uploads.upload(&file, kind)?;
        stored.push(url.clone());
        wizard.set_content(url);
    }
    if let Some(thumbnail) = thumbnail {
        let url = uploads.upload(&thumbnail, UploadKind::Image)?;
        stored.push(url.clone());
        wizard.set_thumbnail(Some(url));
    }

    wizard.go_to(Step::Confirm.index());
    wizard
        .submit(author, endpoint)
        .map_err(|e| ArchiveError::Validation(e.to_string()))
}

/// Handle a post command
pub fn handle_post_command(
    storage: &Storage,
    settings: &Settings,
    user: Option<&str>,
    cmd: PostCommands,
) -> ArchiveResult<()> {
    let service = PostService::new(storage);
    let users = UserService::new(storage);

    match cmd {
        PostCommands::Submit {
            content_type,
            title,
            content,
            file,
            thumbnail,
            description,
            tags,
            questions,
            location,
            agree,
        } => {
            // Refuse before any file is copied into uploads/
            if !agree {
                return Err(ArchiveError::Validation(Rejected::ConsentRequired.to_string()));
            }

            let author = users.identify_optional(user)?;
            let uploads = LocalUploadService::new(storage.paths());

            let mut wizard = WizardController::new();
            wizard.set_content_type(content_type);
            wizard.set_title(title);
            wizard.set_description(description);
            wizard.set_location(location);
            for tag in &tags {
                wizard
                    .add_tag(tag)
                    .map_err(|e| ArchiveError::Validation(format!("Tag '{}': {}", tag, e)))?;
            }
            for question in &questions {
                wizard.add_research_question(question);
            }
            wizard.toggle_consent();

            let media = match (UploadKind::for_content(content_type), file, content) {
                (Some(kind), Some(file), _) => Some((file, kind)),
                (Some(_), None, _) => {
                    return Err(ArchiveError::Validation(format!(
                        "{} posts need --file",
                        content_type
                    )))
                }
                (None, _, Some(content)) => {
                    wizard.set_content(content);
                    None
                }
                (None, Some(_), None) => {
                    return Err(ArchiveError::Validation(
                        "Text posts take --content, not --file".into(),
                    ))
                }
                (None, None, None) => None,
            };
            if thumbnail.is_some() && !content_type.accepts_thumbnail() {
                return Err(ArchiveError::Validation(format!(
                    "{} posts do not have a cover image",
                    content_type
                )));
            }

            let mut stored = Vec::new();
            let result = upload_and_submit(
                &mut wizard,
                &uploads,
                media,
                thumbnail,
                &mut stored,
                author.as_ref(),
                &ArchiveEndpoint::new(storage),
            );
            let success = match result {
                Ok(success) => success,
                Err(e) => {
                    for url in &stored {
                        let _ = uploads.discard(url);
                    }
                    return Err(e);
                }
            };

            println!("Your post has been published! ({})", success.post_id);
            if success.anonymous {
                println!("Posted anonymously.");
            }
        }

        PostCommands::List {
            keyword,
            tags,
            content_type,
            sort,
            limit,
        } => {
            let filter = PostFilter {
                keyword,
                tags,
                content_type,
                sort: sort.unwrap_or(settings.default_sort),
            };
            let mut posts = service.list(&filter)?;
            posts.truncate(limit.unwrap_or(settings.page_size));

            let authors = author_lookup(users.list()?);
            println!("{}", format_post_list(&posts, &authors, &settings.date_format));
        }

        PostCommands::Show { post } => {
            let post = service.view(&post)?;
            let author: Option<User> = match post.user_id {
                Some(id) => storage.users.get(id)?,
                None => None,
            };
            print!(
                "{}",
                format_post_details(&post, author.as_ref(), &settings.date_format)
            );
        }

        PostCommands::Delete { post } => {
            let actor = match user {
                Some(handle) => users.find(handle)?,
                None => None,
            };
            let deleted = service.delete(&post, actor.as_ref())?;
            println!("Deleted post: {} ({})", deleted.title, deleted.id);
        }
    }

    Ok(())
}
