//! Display formatting for terminal output

pub mod dashboard;
pub mod post;

pub use dashboard::{format_dashboard, landing};
pub use post::{
    author_label, author_lookup, format_media, format_post_details, format_post_list,
    AuthorLookup, ANONYMOUS,
};
