//! Common file system operations with unified error handling

use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

/// Count regular files in a tree (progress totals for directory copies)
pub fn count_files(root: &Path) -> u64 {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .count() as u64
}

/// Copy a directory recursively, invoking `on_file` after each copied file
pub fn copy_dir_recursive(
    src: &Path,
    dst: &Path,
    on_file: &mut dyn FnMut(&Path),
) -> io::Result<()> {
    if !dst.exists() {
        fs::create_dir_all(dst)?;
    }

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let entry_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if entry_path.is_dir() {
            fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&entry_path, &dst_path, on_file)?;
        } else {
            fs::copy(&entry_path, &dst_path)?;
            on_file(&entry_path);
        }
    }

    Ok(())
}
