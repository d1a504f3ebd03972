use crate::commands::tree::canonical;
use crate::core::{
    error::Result,
    git::GitRunner,
    indicator::IndicatorCategory,
    resolver::{Candidate, IndicatorResolver},
};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathIndicator {
    pub path: String,
    pub indicator: Option<IndicatorCategory>,
}

pub fn execute_status<G: GitRunner + Clone>(
    paths: &[PathBuf],
    json: bool,
    include_ignored: bool,
    git: G,
) -> Result<()> {
    let mut resolver = IndicatorResolver::new(git, include_ignored);
    let indicators = collect_indicators(&mut resolver, paths)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&indicators)?);
        return Ok(());
    }

    for entry in &indicators {
        let indicator = entry
            .indicator
            .map(|category| category.as_str())
            .unwrap_or("-");
        println!("{indicator}\t{}", entry.path);
    }

    Ok(())
}

/// Resolve each path against the repository enclosing it.
///
/// Every path is preceded by a root candidate for its directory, so consecutive paths
/// in one repository share a single status snapshot.
pub fn collect_indicators<G: GitRunner>(
    resolver: &mut IndicatorResolver<G>,
    paths: &[PathBuf],
) -> Result<Vec<PathIndicator>> {
    let mut indicators = Vec::with_capacity(paths.len());

    for path in paths {
        let absolute = canonical(path)?;
        let is_directory = absolute.is_dir();

        let directory = if is_directory {
            absolute.as_path()
        } else {
            absolute.parent().unwrap_or(Path::new("/"))
        };
        resolver.resolve(&Candidate::root(directory));

        let indicator = resolver.resolve(&Candidate {
            path: absolute.clone(),
            is_directory,
            is_root: false,
        });

        indicators.push(PathIndicator {
            path: path.display().to_string(),
            indicator,
        });
    }

    Ok(indicators)
}
