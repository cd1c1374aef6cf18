//! Mediavault CLI binary.
//!
//! This binary provides command-line access to mediavault's functionality:
//! - Store, resolve and delete artifacts in the content store
//! - Upload, inspect and remove product media records
//! - Replay product-deleted events through the cascade consumer

use clap::Parser;
use mediavault::{MediaVaultConfig, ObservabilityConfig, init_observability, shutdown_observability};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{
        Cli, Commands, consume_events, delete_artifact, list_records, remove_record,
        resolve_artifact, show_record, store_file, upload_file,
    };

    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing; --verbose wins over RUST_LOG
    let observability = ObservabilityConfig::from_flags(cli.verbose, cli.json_logs);
    let guard = init_observability(&observability)?;

    let config = MediaVaultConfig::load(cli.config.as_deref())?;

    // Execute the requested command
    let result = match cli.command {
        Commands::Store {
            file,
            filename,
            mime_type,
        } => store_file(&config, &file, filename, mime_type).await,

        Commands::Resolve { path } => resolve_artifact(&config, &path).await,

        Commands::Delete { path } => delete_artifact(&config, &path).await,

        Commands::Upload {
            file,
            product_id,
            seller_id,
            filename,
            mime_type,
            format,
        } => {
            upload_file(
                &config,
                &file,
                &product_id,
                &seller_id,
                filename,
                mime_type,
                format,
            )
            .await
        }

        Commands::Show { id, format } => show_record(&config, &id, format).await,

        Commands::List {
            product_id,
            seller_id,
            format,
        } => list_records(&config, product_id.as_deref(), seller_id.as_deref(), format).await,

        Commands::Remove { id, seller_id } => remove_record(&config, &id, &seller_id).await,

        Commands::Consume { input, topic } => {
            consume_events(&config, input.as_deref(), topic).await
        }
    };

    shutdown_observability(guard);
    result?;
    Ok(())
}
