use std::path::PathBuf;
use std::sync::OnceLock;

/// Workspace root: the parent of this crate's manifest directory.
fn workspace_root() -> PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    PathBuf::from(manifest_dir).parent().unwrap().to_path_buf()
}

fn test_output_dir() -> &'static PathBuf {
    static DIR: OnceLock<PathBuf> = OnceLock::new();
    DIR.get_or_init(|| {
        let dir = workspace_root().join("test_output");
        std::fs::create_dir_all(&dir).expect("Failed to create test_output directory");
        dir
    })
}

/// Path inside `<workspace>/test_output`. The file itself is not touched.
pub fn test_output_path(name: &str) -> PathBuf {
    test_output_dir().join(name)
}

/// Writes `bytes` to `test_output/<name>` and returns the path.
pub fn write_test_file(name: &str, bytes: &[u8]) -> PathBuf {
    let path = test_output_path(name);
    std::fs::write(&path, bytes)
        .unwrap_or_else(|e| panic!("Failed to write {}: {}", path.display(), e));
    path
}

/// Path inside `test_output` that is guaranteed not to exist.
pub fn missing_test_path(name: &str) -> PathBuf {
    let path = test_output_path(name);
    let _ = std::fs::remove_file(&path);
    path
}
