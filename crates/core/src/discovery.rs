//! Resolution of test assembly paths handed to the runner

use crate::error::{Error, Result};
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Resolve the given files to normalized assembly paths, keeping their order.
///
/// Every file must exist. Solution and project files are rejected: building the
/// list of outputs for them requires MSBuild evaluation, which is not done here.
pub fn resolve_assemblies<P: AsRef<Path>>(files: &[P]) -> Result<Vec<String>> {
    let mut assemblies = Vec::with_capacity(files.len());

    for file in files {
        let file = file.as_ref();
        match file.extension().and_then(|ext| ext.to_str()) {
            Some("sln") | Some("csproj") => {
                return Err(Error::ConfigError(format!(
                    "Project and solution files are not supported, pass the built assembly instead: {}",
                    file.display()
                )));
            }
            _ => {}
        }

        if !file.exists() {
            return Err(Error::AssemblyNotFound(file.to_path_buf()));
        }

        let normalized = normalize_path(file);
        debug!("Resolved assembly {}", normalized.display());
        assemblies.push(normalized.to_string_lossy().into_owned());
    }

    Ok(assemblies)
}

/// Lexically normalize a path: drop `.` segments and fold `..` into its parent
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let can_pop = matches!(
                    normalized.components().next_back(),
                    Some(Component::Normal(_))
                );
                if can_pop {
                    normalized.pop();
                } else if !matches!(
                    normalized.components().next_back(),
                    Some(Component::RootDir) | Some(Component::Prefix(_))
                ) {
                    normalized.push("..");
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    if normalized.as_os_str().is_empty() {
        normalized.push(".");
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(Path::new("a/./b/../c.dll")), PathBuf::from("a/c.dll"));
        assert_eq!(normalize_path(Path::new("a//b.dll")), PathBuf::from("a/b.dll"));
        assert_eq!(normalize_path(Path::new("../x/y.dll")), PathBuf::from("../x/y.dll"));
        assert_eq!(normalize_path(Path::new("/../y.dll")), PathBuf::from("/y.dll"));
        assert_eq!(normalize_path(Path::new("./")), PathBuf::from("."));
    }

    #[test]
    fn test_resolves_existing_assemblies_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let bin = temp_dir.path().join("bin");
        fs::create_dir_all(&bin).unwrap();
        fs::write(bin.join("B.Tests.dll"), b"").unwrap();
        fs::write(bin.join("A.Tests.dll"), b"").unwrap();

        let inputs = [
            bin.join("B.Tests.dll"),
            temp_dir.path().join("bin/../bin/./A.Tests.dll"),
        ];
        let resolved = resolve_assemblies(&inputs).unwrap();
        assert_eq!(
            resolved,
            vec![
                bin.join("B.Tests.dll").to_string_lossy().into_owned(),
                bin.join("A.Tests.dll").to_string_lossy().into_owned(),
            ]
        );
    }

    #[test]
    fn test_missing_assembly_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("Missing.dll");
        let err = resolve_assemblies(&[&missing]).unwrap_err();
        assert!(matches!(err, Error::AssemblyNotFound(ref path) if path == &missing));
        assert!(err.to_string().contains("Missing.dll"));
    }

    #[test]
    fn test_project_files_are_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let project = temp_dir.path().join("Tests.csproj");
        fs::write(&project, "<Project />").unwrap();

        let err = resolve_assemblies(&[&project]).unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
        assert!(resolve_assemblies(&[Path::new("All.sln")]).is_err());
    }
}
