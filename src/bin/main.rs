use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use gallery_client::{
    ApiClient, GalleryController, MediaMetadata, MediaRepository, NotificationQueue,
    SearchFormValues, Settings, UploadFile, VisibilityChoice,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gallery_client-cli", about = "Operator CLI for a remote media gallery")]
struct Cli {
    /// Path to the YAML settings file.
    #[arg(long, default_value = "config/gallery.yaml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List media items, optionally filtered by metadata fields.
    List {
        #[arg(long)]
        source: Option<String>,
        #[arg(long)]
        copyright: Option<String>,
        #[arg(long)]
        dataset_release: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        data_processing_stages: Option<String>,
        #[arg(long)]
        coordinates: Option<String>,
        /// Visibility constraint.
        #[arg(long, value_enum, default_value = "all")]
        visibility: VisibilityArg,
    },
    /// Upload one file with its metadata.
    Upload {
        file: PathBuf,
        #[arg(long, default_value = "")]
        source: String,
        #[arg(long, default_value = "")]
        copyright: String,
        #[arg(long, default_value = "")]
        dataset_release: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        data_processing_stages: String,
        #[arg(long, default_value = "")]
        coordinates: String,
        /// Mark the item as publicly visible.
        #[arg(long)]
        public: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum VisibilityArg {
    All,
    Public,
    Private,
}

impl From<VisibilityArg> for VisibilityChoice {
    fn from(arg: VisibilityArg) -> Self {
        match arg {
            VisibilityArg::All => Self::All,
            VisibilityArg::Public => Self::Public,
            VisibilityArg::Private => Self::Private,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::from_file(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&settings.logging.level)?)
        .init();

    let api = Arc::new(ApiClient::new(&settings.api.base_url));
    let repository = Arc::new(MediaRepository::new(api));
    let notifications = NotificationQueue::new(Duration::from_secs(
        settings.notifications.dismiss_after_secs,
    ));
    let controller = GalleryController::new(repository, notifications);

    match cli.command {
        Command::List {
            source,
            copyright,
            dataset_release,
            description,
            data_processing_stages,
            coordinates,
            visibility,
        } => {
            let form = SearchFormValues {
                source: source.unwrap_or_default(),
                copyright: copyright.unwrap_or_default(),
                dataset_release: dataset_release.unwrap_or_default(),
                description: description.unwrap_or_default(),
                data_processing_stages: data_processing_stages.unwrap_or_default(),
                coordinates: coordinates.unwrap_or_default(),
                visibility: visibility.into(),
            };
            let state = controller.search_images(form).await;
            if let Some(error) = state.error {
                anyhow::bail!(error);
            }
            if state.items.is_empty() {
                println!("No images yet. Upload your first image!");
            }
            for item in state.items {
                println!(
                    "{}\t{}\t{}\t{}",
                    item.filename, item.source, item.copyright, item.registration_date
                );
            }
        }
        Command::Upload {
            file,
            source,
            copyright,
            dataset_release,
            description,
            data_processing_stages,
            coordinates,
            public,
        } => {
            let upload = UploadFile::from_path(&file).await?;
            let metadata = MediaMetadata {
                source,
                copyright,
                dataset_release,
                description,
                data_processing_stages,
                coordinates,
                is_public: public,
            };
            let outcome = controller.upload_image(Some(upload), metadata).await;
            for toast in controller.toasts() {
                println!("[{}] {}", toast.severity, toast.message);
            }
            if !outcome.success {
                anyhow::bail!(outcome.error.unwrap_or_else(|| "Upload failed".to_string()));
            }
        }
    }

    Ok(())
}
