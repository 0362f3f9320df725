//! Catalog browsing commands: tree, contents, search.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use explorer_core::error::AppError;
use explorer_entity::{File, Folder};
use explorer_service::{FolderService, count_nodes, max_depth};

use crate::output::{self, OutputFormat};

/// Arguments for the contents command
#[derive(Debug, Args)]
pub struct ContentsArgs {
    /// Folder ID
    pub id: String,
}

/// Arguments for the search command
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Case-insensitive name fragment
    pub query: String,
}

/// Folder display row
#[derive(Debug, Serialize, Tabled)]
struct FolderRow {
    /// Folder ID
    id: String,
    /// Name
    name: String,
    /// Path
    path: String,
}

impl From<&Folder> for FolderRow {
    fn from(folder: &Folder) -> Self {
        Self {
            id: folder.id.to_string(),
            name: folder.name.clone(),
            path: folder.path.clone(),
        }
    }
}

/// File display row
#[derive(Debug, Serialize, Tabled)]
struct FileRow {
    /// File ID
    id: String,
    /// Name with extension
    name: String,
    /// Human-readable size
    size: String,
}

impl From<&File> for FileRow {
    fn from(file: &File) -> Self {
        Self {
            id: file.id.to_string(),
            name: file.full_name(),
            size: file.formatted_size(),
        }
    }
}

async fn open_service(config_path: &str) -> Result<FolderService, AppError> {
    let config = super::load_config(config_path)?;
    let stores = super::open_store(&config).await?;
    Ok(FolderService::new(stores.store()))
}

/// Print the assembled hierarchy
pub async fn tree(config_path: &str, format: OutputFormat) -> Result<(), AppError> {
    let service = open_service(config_path).await?;
    let forest = service.get_hierarchy().await?;

    match format {
        OutputFormat::Json => output::print_json(&forest),
        OutputFormat::Table => {
            if forest.is_empty() {
                println!("No folders found.");
                return Ok(());
            }
            let mut lines = Vec::new();
            render_tree(&forest, 0, &mut lines);
            for line in &lines {
                println!("{line}");
            }
            println!(
                "\n{} folders, depth {}",
                count_nodes(&forest),
                max_depth(&forest)
            );
        }
    }

    Ok(())
}

/// One line per folder, indented two spaces per level.
fn render_tree(forest: &[Folder], depth: usize, lines: &mut Vec<String>) {
    let mut stack: Vec<(&Folder, usize)> = forest.iter().rev().map(|f| (f, depth)).collect();
    while let Some((folder, level)) = stack.pop() {
        lines.push(format!("{}{}/", "  ".repeat(level), folder.name));
        stack.extend(
            folder
                .subfolders
                .iter()
                .flatten()
                .rev()
                .map(|child| (child, level + 1)),
        );
    }
}

/// Print one folder's contents
pub async fn contents(
    args: &ContentsArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let service = open_service(config_path).await?;
    let contents = service.get_folder_contents(&args.id.as_str().into()).await?;

    match format {
        OutputFormat::Json => output::print_json(&contents),
        OutputFormat::Table => {
            output::print_kv("Folder", &contents.folder.name);
            output::print_kv("Path", &contents.folder.path);
            output::print_kv("Entries", &contents.entry_count().to_string());

            output::print_heading("Subfolders");
            let folders: Vec<FolderRow> = contents.subfolders.iter().map(FolderRow::from).collect();
            output::print_table(&folders);

            output::print_heading("Files");
            let files: Vec<FileRow> = contents.files.iter().map(FileRow::from).collect();
            output::print_table(&files);
        }
    }

    Ok(())
}

/// Print folder and file matches
pub async fn search(
    args: &SearchArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let service = open_service(config_path).await?;
    let results = service.search(&args.query).await?;

    match format {
        OutputFormat::Json => output::print_json(&results),
        OutputFormat::Table => {
            output::print_heading("Folders");
            let folders: Vec<FolderRow> = results.folders.iter().map(FolderRow::from).collect();
            output::print_table(&folders);

            output::print_heading("Files");
            let files: Vec<FileRow> = results.files.iter().map(FileRow::from).collect();
            output::print_table(&files);
        }
    }

    Ok(())
}
