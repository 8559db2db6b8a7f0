use anyhow::Result;
use clap::{Parser, Subcommand};

use archive::cli::{
    handle_export_command, handle_history_command, handle_post_command, ExportFormat,
    PostCommands,
};
use archive::config::{paths::ArchivePaths, settings::Settings};
use archive::display::{format_dashboard, landing};
use archive::services::{PostService, UserService};
use archive::storage::Storage;

#[derive(Parser)]
#[command(
    name = "archive",
    version,
    about = "Archive Our Youth submission portal",
    long_about = "Archive Our Youth collects young people's creative work about \
                  wellbeing. Submit text, images, video, audio or PDF documents \
                  through a guided wizard and browse the archive from the terminal."
)]
struct Cli {
    /// Your handle; omit to act anonymously
    #[arg(short, long, global = true, env = "ARCHIVE_USER")]
    user: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive submission wizard
    #[command(alias = "submit")]
    Tui,

    /// Browse, show, submit and delete posts
    #[command(subcommand)]
    Post(PostCommands),

    /// Show your posts and view counts (requires --user)
    Dashboard,

    /// Export the archive
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Initialize the archive data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ArchivePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Tui) => {
            let author = UserService::new(&storage).identify_optional(cli.user.as_deref())?;
            archive::tui::run_tui(&storage, &settings, author)?;
        }
        Some(Commands::Post(cmd)) => {
            handle_post_command(&storage, &settings, cli.user.as_deref(), cmd)?;
        }
        Some(Commands::Dashboard) => {
            let Some(handle) = cli.user.as_deref() else {
                anyhow::bail!("The dashboard needs a handle. Pass --user or set ARCHIVE_USER.");
            };
            let users = UserService::new(&storage);
            let user = users.identify(handle)?;
            let dashboard = users.dashboard(&user)?;
            println!("{}", format_dashboard(&dashboard, &settings.date_format));
        }
        Some(Commands::Export {
            format,
            output,
            pretty,
        }) => {
            handle_export_command(&storage, format, output, pretty)?;
        }
        Some(Commands::History { limit }) => {
            handle_history_command(&storage, limit)?;
        }
        Some(Commands::Init) => {
            println!("Initializing Archive Our Youth at: {}", paths.base_dir().display());
            archive::storage::init::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'archive tui' to submit your first post.");
        }
        Some(Commands::Config) => {
            println!("Archive Our Youth Configuration");
            println!("===============================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Data directory:    {}", paths.data_dir().display());
            println!("Uploads directory: {}", paths.uploads_dir().display());
            println!("Audit log:         {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Date format:  {}", settings.date_format);
            println!("  Default sort: {}", settings.default_sort);
            println!("  Page size:    {}", settings.page_size);
            println!("  Consent form: {}", settings.consent_form_url);
            println!();
            println!("Posts in archive: {}", PostService::new(&storage).count()?);
        }
        None => {
            println!("{}", landing());
        }
    }

    Ok(())
}
