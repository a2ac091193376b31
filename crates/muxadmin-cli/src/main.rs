//! muxadmin — command-line client for the Mux video uploader admin API.
//!
//! Set MUXADMIN_TOKEN and MUXADMIN_BACKEND_URL (optionally MUXADMIN_PLUGIN_ID).
//! Uses Bearer auth.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use muxadmin_api_client::{
    ApiClient, AssetUpdatePatch, MuxSettings, SearchCriterion, SortCriterion, TokenPurpose,
    UploadInfo, UploadMedia, UploadOrigin,
};
use muxadmin_cli::{find_by_remote_id, format_asset_table, init_tracing, read_upload_file};
use muxadmin_core::models::{SearchField, SortDirection};
use muxadmin_detail::{DetailController, DetailPermissions};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "muxadmin", about = "Mux video uploader admin CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show whether the plugin has video host credentials
    Status,
    /// Save plugin settings
    Settings {
        #[arg(long)]
        access_token: String,
        #[arg(long)]
        secret_key: String,
        #[arg(long)]
        webhook_signing_secret: String,
        #[arg(long)]
        playback_signing_id: Option<String>,
        #[arg(long)]
        playback_signing_secret: Option<String>,
    },
    /// Upload a video from a local file or a URL
    Upload {
        /// Asset title
        #[arg(long)]
        title: String,
        /// Upload origin: from_computer or from_url
        #[arg(long)]
        origin: String,
        /// Local file (from_computer)
        #[arg(long)]
        file: Option<std::path::PathBuf>,
        /// Remote video URL (from_url)
        #[arg(long)]
        url: Option<String>,
        /// Require signed playback
        #[arg(long)]
        signed: bool,
    },
    /// List assets with optional search, sort and pagination
    List {
        /// Search field: by_title or by_asset_id
        #[arg(long, requires = "search")]
        search_by: Option<String>,
        /// Search value (case-insensitive contains)
        #[arg(long)]
        search: Option<String>,
        /// Sort field
        #[arg(long)]
        sort: Option<String>,
        /// Sort descending
        #[arg(long, requires = "sort")]
        desc: bool,
        /// Offset for pagination
        #[arg(long, default_value = "0")]
        offset: u32,
        /// Maximum number of items
        #[arg(long, default_value = "10")]
        limit: u32,
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
    },
    /// Update an asset's title and/or readiness
    Update {
        /// Asset ID
        id: u64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        ready: Option<bool>,
    },
    /// Delete an asset here and on the video host
    Delete {
        /// Asset ID
        id: u64,
    },
    /// Print a thumbnail URL (does not call the API unless --signed)
    Thumbnail {
        playback_id: String,
        /// Explicit token to append
        #[arg(long, conflicts_with = "signed")]
        token: Option<String>,
        /// Request a thumbnail token first
        #[arg(long)]
        signed: bool,
    },
    /// Request a signed token
    Sign {
        playback_id: String,
        /// Token type: thumbnail or playback
        #[arg(long = "type", default_value = "playback")]
        purpose: String,
    },
    /// Open the detail view for an asset (looked up by remote asset id) and
    /// apply edits or a delete
    Edit {
        /// Remote asset id
        asset_id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        ready: Option<bool>,
        /// Enter delete confirmation instead of submitting edits
        #[arg(long, conflicts_with_all = ["title", "ready"])]
        delete: bool,
        /// Confirm the delete (otherwise it is cancelled)
        #[arg(long, requires = "delete")]
        yes: bool,
        /// Print the player embed snippet
        #[arg(long)]
        snippet: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Table,
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}

async fn run_edit(
    client: ApiClient,
    asset_id: String,
    title: Option<String>,
    ready: Option<bool>,
    delete: bool,
    yes: bool,
    snippet: bool,
) -> anyhow::Result<()> {
    let Some(asset) = find_by_remote_id(&client, &asset_id).await? else {
        bail!("No asset with remote id {}", asset_id);
    };

    let mut controller = DetailController::new(client);
    controller.open(asset, DetailPermissions::default());

    if let Some(message) = controller.error_message() {
        tracing::warn!(message, "Asset reported a processing error");
    }
    if snippet {
        let (code, notice) = controller.copy_code_snippet()?;
        println!("{}", code);
        tracing::info!("{}", notice.message());
    }

    if delete {
        controller.toggle_delete_warning()?;
        if !yes {
            controller.cancel_delete()?;
            return print_json(&serde_json::json!({ "deleted": false, "cancelled": true }));
        }
        let outcome = controller.confirm_delete().await?;
        return print_json(&serde_json::json!({
            "deleted": true,
            "outcome": format!("{:?}", outcome)
        }));
    }

    if let Some(title) = title {
        controller.set_title(title)?;
    }
    if let Some(ready) = ready {
        controller.set_ready(ready)?;
    }
    let outcome = controller.submit().await?;
    print_json(&serde_json::json!({
        "submitted": true,
        "outcome": format!("{:?}", outcome)
    }))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let client = ApiClient::from_env()
        .context("Failed to create API client. Set MUXADMIN_TOKEN and MUXADMIN_BACKEND_URL")?;

    match cli.command {
        Commands::Status => {
            let status = client.is_configured().await?;
            print_json(&serde_json::json!({ "configured": status.is_configured() }))?;
        }
        Commands::Settings {
            access_token,
            secret_key,
            webhook_signing_secret,
            playback_signing_id,
            playback_signing_secret,
        } => {
            let settings = MuxSettings {
                access_token,
                secret_key,
                webhook_signing_secret,
                playback_signing_id,
                playback_signing_secret,
            };
            let response = client.save_settings(&settings).await?;
            print_json(&serde_json::json!({ "success": true, "response": response }))?;
        }
        Commands::Upload {
            title,
            origin,
            file,
            url,
            signed,
        } => {
            let origin: UploadOrigin = origin.parse()?;
            let media = match (origin, file, url) {
                (UploadOrigin::FromComputer, Some(path), _) => read_upload_file(&path)?,
                (UploadOrigin::FromUrl, _, Some(url)) => UploadMedia::Url(url),
                (UploadOrigin::FromComputer, None, _) => {
                    bail!("--file is required for from_computer")
                }
                (UploadOrigin::FromUrl, _, None) => bail!("--url is required for from_url"),
            };
            let info = UploadInfo {
                title,
                media,
                origin,
                signed,
            };
            let response = client.upload_video(&info).await?;
            print_json(&response)?;
        }
        Commands::List {
            search_by,
            search,
            sort,
            desc,
            offset,
            limit,
            format,
        } => {
            let search = match search {
                Some(value) => {
                    let field: SearchField =
                        search_by.as_deref().unwrap_or("by_title").parse()?;
                    Some(SearchCriterion { field, value })
                }
                None => None,
            };
            let sort = sort.map(|field| SortCriterion {
                field,
                direction: if desc {
                    SortDirection::Desc
                } else {
                    SortDirection::Asc
                },
            });
            let page = client
                .list_assets(search.as_ref(), sort.as_ref(), offset, limit)
                .await?;
            match format {
                OutputFormat::Json => print_json(&page)?,
                OutputFormat::Table => println!("{}", format_asset_table(&page)),
            }
        }
        Commands::Update { id, title, ready } => {
            let mut patch = AssetUpdatePatch::new(id);
            patch.title = title;
            patch.is_ready = ready;
            if patch.is_empty() {
                bail!("Nothing to update: pass --title and/or --ready");
            }
            let asset = client.update_asset(&patch).await?;
            print_json(&asset)?;
        }
        Commands::Delete { id } => {
            client.delete_asset_by_id(id).await?;
            print_json(
                &serde_json::json!({ "success": true, "message": format!("Asset {} deleted", id) }),
            )?;
        }
        Commands::Thumbnail {
            playback_id,
            token,
            signed,
        } => {
            let url = if signed {
                client.signed_thumbnail_url(Some(&playback_id)).await?
            } else {
                client.thumbnail_url(Some(&playback_id), token.as_deref())
            };
            print_json(&serde_json::json!({ "thumbnail_url": url }))?;
        }
        Commands::Sign {
            playback_id,
            purpose,
        } => {
            let purpose: TokenPurpose = purpose.parse()?;
            let token = client.playback_token(&playback_id, purpose).await?;
            print_json(&token)?;
        }
        Commands::Edit {
            asset_id,
            title,
            ready,
            delete,
            yes,
            snippet,
        } => run_edit(client, asset_id, title, ready, delete, yes, snippet).await?,
    }

    Ok(())
}
