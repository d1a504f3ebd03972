use crate::core::{
    column::{IndicatorColumn, Label},
    config::Config,
    error::{GitTreeStatusError, Result},
    git::GitRunner,
    resolver::Candidate,
};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const SKIPPED_DIRS: [&str; 1] = [".git"];

/// One rendered row of the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    pub label: Label,
    /// 0 for the tree root
    pub depth: usize,
    pub name: String,
}

impl TreeLine {
    pub fn render(&self, config: &Config) -> String {
        let indent = "  ".repeat(self.depth.saturating_sub(1));
        format!("{} {}{}", self.label.paint(config), indent, self.name)
    }
}

pub fn execute_tree<G: GitRunner + Clone>(
    path: &Path,
    depth: Option<usize>,
    config: Config,
    git: G,
) -> Result<()> {
    let mut column = IndicatorColumn::new(git, config);

    for line in collect_tree(&mut column, path, depth)? {
        println!("{}", line.render(column.config()));
    }

    Ok(())
}

/// Walk `path` and label every entry, root first, siblings sorted by name
pub fn collect_tree<G: GitRunner>(
    column: &mut IndicatorColumn<G>,
    path: &Path,
    depth: Option<usize>,
) -> Result<Vec<TreeLine>> {
    let root = canonical(path)?;

    let mut lines = vec![TreeLine {
        label: column.label(&Candidate::root(&root)),
        depth: 0,
        name: root.display().to_string(),
    }];

    let walker = WalkDir::new(&root)
        .min_depth(1)
        .max_depth(depth.unwrap_or(usize::MAX))
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            !SKIPPED_DIRS
                .iter()
                .any(|skipped| entry.file_name() == *skipped)
        });

    for entry in walker {
        let entry = entry?;
        let is_directory = entry.file_type().is_dir();

        let mut name = entry.file_name().to_string_lossy().into_owned();
        if is_directory {
            name.push('/');
        }

        let candidate = Candidate {
            path: entry.path().to_path_buf(),
            is_directory,
            is_root: false,
        };

        lines.push(TreeLine {
            label: column.label(&candidate),
            depth: entry.depth(),
            name,
        });
    }

    Ok(lines)
}

pub(crate) fn canonical(path: &Path) -> Result<PathBuf> {
    path.canonicalize()
        .map_err(|_| GitTreeStatusError::path_not_found(path))
}
