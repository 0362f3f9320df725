//! Demo catalog used by `explorer-cli seed` and the integration tests.

use serde::Serialize;
use tracing::info;

use explorer_core::result::AppResult;
use explorer_entity::{CreateFile, CreateFolder, Folder};

use crate::store::FolderSeeder;

const KB: u64 = 1024;
const MB: u64 = 1024 * KB;

/// Counts of what a seeding run inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    /// Folders inserted.
    pub folders: usize,
    /// Files inserted.
    pub files: usize,
}

/// Insert the demo catalog:
///
/// ```text
/// Documents/            resume.pdf, notes.txt
///   Personal/           budget.xlsx
///   Work/               presentation.pptx
///     Projects/         project-plan.docx
/// Music/                favorite-song.mp3
/// Pictures/             vacation.jpg, family.png
/// ```
pub async fn seed_demo_catalog(seeder: &dyn FolderSeeder) -> AppResult<SeedSummary> {
    info!("Seeding demo catalog");

    let documents = seeder.insert_folder(CreateFolder::root("Documents")).await?;
    let pictures = seeder.insert_folder(CreateFolder::root("Pictures")).await?;
    let music = seeder.insert_folder(CreateFolder::root("Music")).await?;

    let work = seeder
        .insert_folder(CreateFolder::child_of(&documents, "Work"))
        .await?;
    let personal = seeder
        .insert_folder(CreateFolder::child_of(&documents, "Personal"))
        .await?;
    let projects = seeder
        .insert_folder(CreateFolder::child_of(&work, "Projects"))
        .await?;

    let files: [(&Folder, &str, &str, u64); 8] = [
        (&documents, "resume", "pdf", MB),
        (&documents, "notes", "txt", 5 * KB),
        (&work, "presentation", "pptx", 5 * MB),
        (&personal, "budget", "xlsx", 2 * MB),
        (&projects, "project-plan", "docx", 3 * MB / 2),
        (&pictures, "vacation", "jpg", 3 * MB),
        (&pictures, "family", "png", 5 * MB / 2),
        (&music, "favorite-song", "mp3", 4 * MB),
    ];

    for (folder, name, extension, size) in files {
        seeder
            .insert_file(CreateFile {
                folder_id: folder.id.clone(),
                name: name.to_string(),
                extension: extension.to_string(),
                size,
            })
            .await?;
    }

    let summary = SeedSummary {
        folders: 6,
        files: files.len(),
    };
    info!(
        folders = summary.folders,
        files = summary.files,
        "Seeding completed"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryFolderStore;
    use crate::store::FolderStore;

    #[tokio::test]
    async fn test_seed_populates_memory_store() {
        let store = MemoryFolderStore::new();
        let summary = seed_demo_catalog(&store).await.unwrap();

        assert_eq!(summary, SeedSummary { folders: 6, files: 8 });
        assert_eq!(store.folder_count(), 6);
        assert_eq!(store.file_count(), 8);

        let projects = store.search_folders("projects").await.unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].path, "Documents/Work/Projects");
    }
}
