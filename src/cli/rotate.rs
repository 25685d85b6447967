use std::path::Path;

use anyhow::Result;
use chrono::Utc;

use crate::services::lessons;
use crate::store::HttpStore;
use crate::Config;

pub async fn run(config: &Path) -> Result<()> {
    let config = Config::load(config)?;
    let store = HttpStore::new(&config.store)?;

    let count = lessons::rotate_current(&store, Utc::now().date_naive()).await?;
    if count == 0 {
        println!("No lesson for today");
    } else {
        println!("Current lesson updated ({count} set)");
    }
    Ok(())
}
