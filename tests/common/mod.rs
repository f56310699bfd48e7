use std::path::Path;

use tempfile::TempDir;

/// Create a temporary export directory holding the given followers and
/// following documents under their default names. Either may be omitted.
/// The caller must hold onto `TempDir` to keep the directory alive.
pub fn setup_export_dir(followers: Option<&[u8]>, following: Option<&[u8]>) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    if let Some(content) = followers {
        std::fs::write(dir.path().join("followers_1.json"), content).unwrap();
    }
    if let Some(content) = following {
        std::fs::write(dir.path().join("following.json"), content).unwrap();
    }
    dir
}

pub fn read_to_string(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}
