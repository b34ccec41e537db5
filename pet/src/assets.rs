use std::fs;
use std::path::{Path, PathBuf};

const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

/// Asset subdirectories, all hanging off one root.
#[derive(Clone, Debug, PartialEq)]
pub struct AssetDirs {
    pub animations: PathBuf,
    pub memes: PathBuf,
    pub icons: PathBuf,
    pub emojis: PathBuf,
    pub punishment: PathBuf,
}

impl AssetDirs {
    pub fn under(root: &Path) -> Self {
        Self {
            animations: root.join("animations"),
            memes: root.join("memes"),
            icons: root.join("icons"),
            emojis: root.join("emojis"),
            punishment: root.join("punishment"),
        }
    }
}

/// Lists the displayable images directly inside `dir`, sorted by path.
/// A missing or unreadable directory lists as empty.
pub fn scan_images(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            log::debug!("asset directory {} not readable: {err}", dir.display());
            return Vec::new();
        }
    };

    let mut images: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| has_image_extension(path))
        .collect();
    // read_dir order is platform dependent
    images.sort();
    images
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// On-demand view over the asset directories. Scans are not cached, so
/// files dropped into the directories show up on the next call.
#[derive(Clone, Debug)]
pub struct AssetCatalog {
    dirs: AssetDirs,
}

impl AssetCatalog {
    pub fn new(dirs: AssetDirs) -> Self {
        Self { dirs }
    }

    pub fn dirs(&self) -> &AssetDirs {
        &self.dirs
    }

    pub fn animations(&self) -> Vec<PathBuf> {
        scan_images(&self.dirs.animations)
    }

    pub fn memes(&self) -> Vec<PathBuf> {
        scan_images(&self.dirs.memes)
    }

    pub fn emojis(&self) -> Vec<PathBuf> {
        scan_images(&self.dirs.emojis)
    }

    pub fn punishment(&self) -> Vec<PathBuf> {
        scan_images(&self.dirs.punishment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("murka-assets-{tag}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn scan_filters_by_extension_case_insensitively() {
        let dir = scratch_dir("scan");
        for name in ["a.png", "b.txt", "c.GIF", "d.jpeg", "notes.md"] {
            fs::write(dir.join(name), b"x").unwrap();
        }

        let images = scan_images(&dir);
        let names: Vec<_> = images
            .iter()
            .filter_map(|path| path.file_name())
            .collect();
        assert_eq!(names, ["a.png", "c.GIF", "d.jpeg"]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_directory_scans_empty() {
        assert!(scan_images(Path::new("/nonexistent/murka-memes")).is_empty());
    }

    #[test]
    fn catalog_exposes_subdirectories() {
        let root = scratch_dir("catalog");
        let dirs = AssetDirs::under(&root);
        fs::create_dir_all(&dirs.memes).unwrap();
        fs::write(dirs.memes.join("cat.gif"), b"x").unwrap();

        let catalog = AssetCatalog::new(dirs);
        assert_eq!(catalog.memes().len(), 1);
        assert!(catalog.emojis().is_empty());

        fs::remove_dir_all(&root).unwrap();
    }
}
