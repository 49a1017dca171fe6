use crate::Result;
use path_macro::path;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};
use walkdir::WalkDir;

const ROLE_DIR_NAME: &str = "controller";
const TEMPLATE_DIR_PATH: &str = "templates";
const TEMPLATE_PATH: &str = "gitconfig.j2";

/// Every directory named `controller` at any depth below `roles_dir`, in
/// file name order.
pub fn controller_role_dirs<P: AsRef<Path>>(roles_dir: P) -> Result<Vec<PathBuf>> {
    let roles_dir = roles_dir.as_ref();
    if !roles_dir.is_dir() {
        debug!(path = %roles_dir.display(), "no roles directory");
        return Ok(Vec::new());
    }

    let mut dirs = Vec::new();
    for entry in WalkDir::new(roles_dir).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_dir() && entry.file_name() == ROLE_DIR_NAME {
            dirs.push(entry.into_path());
        }
    }
    Ok(dirs)
}

/// Copies `source` to `<role>/templates/gitconfig.j2` for every controller
/// role, overwriting existing templates. Nothing happens when `source` does
/// not exist. Returns the files written.
pub fn propagate_gitconfig<S, R>(source: S, roles_dir: R) -> Result<Vec<PathBuf>>
where
    S: AsRef<Path>,
    R: AsRef<Path>,
{
    let source = source.as_ref();
    if !source.is_file() {
        debug!(path = %source.display(), "no git config to propagate");
        return Ok(Vec::new());
    }

    let mut written = Vec::new();
    for role in controller_role_dirs(roles_dir)? {
        let templates = path![role / TEMPLATE_DIR_PATH];
        fs::create_dir_all(&templates)?;

        let dest = path![templates / TEMPLATE_PATH];
        fs::copy(source, &dest)?;
        info!(path = %dest.display(), "copied git config template");
        written.push(dest);
    }
    Ok(written)
}
