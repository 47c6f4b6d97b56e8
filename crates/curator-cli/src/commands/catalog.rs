//! Catalog commands: add one item, bulk import, browse.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Subcommand};
use serde_json::json;

use curator_core::models::{FeatureMatrix, NewItem};
use curator_session::LabelingSession;

/// Arguments for `curator add`.
#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub artist: String,

    #[arg(long)]
    pub year: i32,

    /// Image file to copy into the images directory
    #[arg(long)]
    pub image: PathBuf,
}

/// Arguments for `curator import`.
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// JSON array of `{title, artist, year, image_path}` objects
    #[arg(long)]
    pub items: PathBuf,

    /// Binary feature matrix: `count: u32 LE`, `dims: u32 LE`, then f32 LE values
    #[arg(long)]
    pub features: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum ItemsCommands {
    /// Every item in catalog order
    List,
    /// One item by external id
    Get { id: i64 },
}

pub fn add(session: &LabelingSession, args: AddArgs) -> anyhow::Result<serde_json::Value> {
    let record = session.add_item(&args.title, &args.artist, args.year, &args.image)?;
    Ok(json!({ "status": "success", "item": record }))
}

fn read_items(path: &Path) -> anyhow::Result<Vec<NewItem>> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("reading items from {}", path.display()))?;
    serde_json::from_str(&source).with_context(|| format!("parsing {}", path.display()))
}

fn read_features(path: &Path) -> anyhow::Result<FeatureMatrix> {
    let bytes =
        std::fs::read(path).with_context(|| format!("reading features from {}", path.display()))?;
    Ok(FeatureMatrix::from_le_bytes(&bytes)?)
}

pub fn import(session: &LabelingSession, args: ImportArgs) -> anyhow::Result<serde_json::Value> {
    let items = read_items(&args.items)?;
    let features = args.features.as_deref().map(read_features).transpose()?;
    let feature_rows = features.as_ref().map(FeatureMatrix::rows);

    let stored = session.import(items, features)?;
    Ok(json!({
        "status": "success",
        "imported": stored.len(),
        "feature_rows": feature_rows,
    }))
}

pub fn handle_items_command(
    session: &LabelingSession,
    action: ItemsCommands,
) -> anyhow::Result<serde_json::Value> {
    match action {
        ItemsCommands::List => Ok(serde_json::to_value(session.list_items()?)?),
        ItemsCommands::Get { id } => Ok(serde_json::to_value(session.get_item(id)?)?),
    }
}
