use std::path::Path;

use anyhow::Result;

use crate::services::upload::{HttpUploader, MediaFile, MediaUploader};
use crate::Config;

pub async fn run(config: &Path, file: &Path) -> Result<()> {
    let config = Config::load(config)?;
    let uploader = HttpUploader::new(&config.upload)?;

    let url = uploader.upload(&MediaFile::read(file)?).await?;
    println!("{url}");
    Ok(())
}
