use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use brailler::api;
use brailler::assets::{AssetCategory, AssetLoader};
use brailler::models::{AppConfig, RenderForm};
use brailler::rendering::render_bytes;
use brailler::server;

#[derive(Parser)]
#[command(name = "brailler")]
#[command(about = "Turn PNG and JPEG images into Unicode braille art")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve,
    /// Render an image file to stdout
    Render {
        /// PNG or JPEG file to render
        path: PathBuf,

        /// Characters per row
        #[arg(short, long)]
        width: Option<usize>,

        /// Rows (default: keep the image aspect ratio)
        #[arg(short = 'H', long)]
        height: Option<usize>,

        /// Exposure from 0 (darker) to 100 (brighter)
        #[arg(short, long)]
        exposure: Option<f64>,

        /// normal, contrast, edge, smooth or brightness
        #[arg(short, long)]
        style: Option<String>,

        /// Theme the output will be shown on: light or dark
        #[arg(short, long)]
        theme: Option<String>,

        /// Invert the dots
        #[arg(short, long)]
        invert: bool,

        /// Print a JSON array of rows instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Extract embedded assets to filesystem for customization
    Init {
        /// Extract config.yaml
        #[arg(long)]
        config: bool,

        /// Extract the browser client
        #[arg(long = "static")]
        static_files: bool,

        /// Extract all assets
        #[arg(long)]
        all: bool,

        /// Overwrite existing files
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Brailler API",
        description = "Turn PNG and JPEG images into Unicode braille art",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(api::handle_render),
    components(schemas(api::RenderUpload, api::ErrorResponse, RenderForm)),
    tags((name = "Render", description = "Braille art rendering"))
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Render {
            path,
            width,
            height,
            exposure,
            style,
            theme,
            invert,
            json,
        }) => {
            let form = RenderForm {
                width: width.map(|v| v.to_string()),
                height: height.map(|v| v.to_string()),
                brightness: exposure.map(|v| v.to_string()),
                style,
                theme,
                invert: invert.then(|| "on".to_string()),
            };
            run_render_command(&path, &form, json)
        }
        Some(Commands::Init {
            config,
            static_files,
            all,
            force,
            list,
        }) => run_init_command(config, static_files, all, force, list),
        Some(Commands::Serve) | None => run_server().await,
    }
}

/// Render an image file to stdout (no server needed)
fn run_render_command(path: &Path, form: &RenderForm, json: bool) -> anyhow::Result<()> {
    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "brailler=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let asset_loader = AssetLoader::from_env();
    let config = AppConfig::load_from_assets(&asset_loader);

    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let output = render_bytes(&bytes, form, &config)?;

    if json {
        println!("{}", serde_json::to_string(output.rows())?);
    } else {
        println!("{}", output.to_text());
    }

    Ok(())
}

fn run_init_command(
    config: bool,
    static_files: bool,
    all: bool,
    force: bool,
    list: bool,
) -> anyhow::Result<()> {
    if list {
        println!("Embedded assets:\n");
        println!("Static:");
        for f in AssetLoader::list_embedded(AssetCategory::Static) {
            println!("  {f}");
        }
        println!("\nConfig:");
        for f in AssetLoader::list_embedded(AssetCategory::Config) {
            println!("  {f}");
        }
        return Ok(());
    }

    // Determine which categories to extract
    let mut categories = Vec::new();
    if all || config {
        categories.push(AssetCategory::Config);
    }
    if all || static_files {
        categories.push(AssetCategory::Static);
    }

    if categories.is_empty() {
        anyhow::bail!(
            "No categories specified. Use --all, --config or --static \
             (run 'brailler init --list' to see embedded assets)"
        );
    }

    let report = AssetLoader::from_env().init(&categories, force)?;

    if !report.written.is_empty() {
        println!("Extracted {} files:", report.written.len());
        for f in &report.written {
            println!("  + {f}");
        }
    }
    if !report.skipped.is_empty() {
        println!(
            "\nSkipped {} existing files (use --force to overwrite):",
            report.skipped.len()
        );
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    if report.written.is_empty() && report.skipped.is_empty() {
        println!("No files to extract.");
    }

    Ok(())
}

async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "brailler=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let asset_loader = Arc::new(AssetLoader::from_env());

    tracing::info!(
        config = %asset_loader.config_file().map(|p| p.display().to_string()).unwrap_or_else(|| "embedded".to_string()),
        client = %asset_loader.static_dir().map(|p| p.display().to_string()).unwrap_or_else(|| "embedded".to_string()),
        "Asset sources configured"
    );

    let state = server::create_app_state(asset_loader);

    let app = server::build_router(state)
        // OpenAPI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Brailler server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
