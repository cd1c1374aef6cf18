//! Media record command handlers.

use super::commands::OutputFormat;
use super::{open_records, open_storage, read_candidate};
use mediavault::{JsonError, MediaRecord, MediaService, MediaVaultConfig, MediaVaultResult};
use std::path::Path;

async fn open_service(config: &MediaVaultConfig) -> MediaVaultResult<MediaService> {
    Ok(MediaService::new(
        open_storage(config)?,
        open_records(config).await?,
    ))
}

fn print_record(record: &MediaRecord, format: OutputFormat) -> MediaVaultResult<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(record).map_err(JsonError::from)?);
        }
        OutputFormat::Human => {
            println!("id:         {}", record.id);
            println!("image path: {}", record.image_path);
            println!("product:    {}", record.product_id);
            println!("seller:     {}", record.seller_id);
        }
    }
    Ok(())
}

/// Upload a local file for a product.
pub async fn upload_file(
    config: &MediaVaultConfig,
    file: &Path,
    product_id: &str,
    seller_id: &str,
    filename: Option<String>,
    mime_type: Option<String>,
    format: OutputFormat,
) -> MediaVaultResult<()> {
    let service = open_service(config).await?;
    let candidate = read_candidate(file, filename, mime_type).await?;

    let record = service.upload_media(&candidate, product_id, seller_id).await?;
    print_record(&record, format)
}

/// Show one record and the location of its artifact.
pub async fn show_record(
    config: &MediaVaultConfig,
    id: &str,
    format: OutputFormat,
) -> MediaVaultResult<()> {
    let service = open_service(config).await?;
    let record = service.get_media_by_id(id).await?;
    print_record(&record, format)?;

    if let OutputFormat::Human = format {
        match service.open_media(id).await {
            Ok((location, content_type)) => {
                println!("location:   {}", location.display());
                println!("type:       {}", content_type);
            }
            Err(e) => println!("location:   unavailable ({})", e),
        }
    }
    Ok(())
}

/// List the records of a product, of a seller, or of a seller's product.
pub async fn list_records(
    config: &MediaVaultConfig,
    product_id: Option<&str>,
    seller_id: Option<&str>,
    format: OutputFormat,
) -> MediaVaultResult<()> {
    let service = open_service(config).await?;
    let records = match (product_id, seller_id) {
        (Some(product_id), Some(seller_id)) => {
            service
                .get_media_by_seller_and_product(seller_id, product_id)
                .await?
        }
        (Some(product_id), None) => service.get_media_by_product(product_id).await?,
        (None, Some(seller_id)) => service.get_media_by_seller(seller_id).await?,
        (None, None) => Vec::new(),
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&records).map_err(JsonError::from)?);
        }
        OutputFormat::Human => {
            println!("{:-<80}", "");
            for record in &records {
                println!(
                    "{}  {}  product={}  seller={}",
                    record.id, record.image_path, record.product_id, record.seller_id
                );
            }
            println!("{:-<80}", "");
            println!("Total: {} records", records.len());
        }
    }
    Ok(())
}

/// Remove a record and its artifact on behalf of `seller_id`.
pub async fn remove_record(
    config: &MediaVaultConfig,
    id: &str,
    seller_id: &str,
) -> MediaVaultResult<()> {
    let service = open_service(config).await?;
    service.delete_media(id, seller_id).await?;
    println!("Removed {}", id);
    Ok(())
}
