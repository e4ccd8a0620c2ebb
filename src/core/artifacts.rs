//! Typed artifact store for the static site's data directory.
//!
//! Pipelines hand data to each other through files (rankings feed history and
//! predictions, predictions feed matchups). [`Artifact`] pins down the path
//! convention in one place:
//!
//! ```text
//! <data_dir>/teams.json
//! <data_dir>/<season>/week<w>/{power_rankings,matchups,projections,matchup_predictions}.json
//! <data_dir>/<season>/{history,standings,rosters_min}.json
//! ```
//!
//! Writes go to a sibling temp file and are renamed into place, so a crash
//! leaves either the previous artifact or none, never a partial one.

use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};

use crate::cli::types::{Season, Week};

/// Every JSON document the pipelines read or write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Teams,
    PowerRankings { season: Season, week: Week },
    Matchups { season: Season, week: Week },
    Projections { season: Season, week: Week },
    MatchupPredictions { season: Season, week: Week },
    History { season: Season },
    Standings { season: Season },
    RostersMin { season: Season },
}

impl Artifact {
    /// Path relative to the data directory.
    pub fn relative_path(&self) -> PathBuf {
        let weekly = |season: &Season, week: &Week, file: &str| {
            PathBuf::from(season.to_string())
                .join(week.dir_name())
                .join(file)
        };

        match self {
            Artifact::Teams => PathBuf::from("teams.json"),
            Artifact::PowerRankings { season, week } => weekly(season, week, "power_rankings.json"),
            Artifact::Matchups { season, week } => weekly(season, week, "matchups.json"),
            Artifact::Projections { season, week } => weekly(season, week, "projections.json"),
            Artifact::MatchupPredictions { season, week } => {
                weekly(season, week, "matchup_predictions.json")
            }
            Artifact::History { season } => PathBuf::from(season.to_string()).join("history.json"),
            Artifact::Standings { season } => {
                PathBuf::from(season.to_string()).join("standings.json")
            }
            Artifact::RostersMin { season } => {
                PathBuf::from(season.to_string()).join("rosters_min.json")
            }
        }
    }
}

/// Filesystem-backed store rooted at `<docs_dir>/data`.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    data_dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Store for a site root; data lives in its `data` subdirectory.
    pub fn for_docs_dir(docs_dir: &Path) -> Self {
        Self::new(docs_dir.join("data"))
    }

    pub fn path(&self, artifact: Artifact) -> PathBuf {
        self.data_dir.join(artifact.relative_path())
    }

    pub fn exists(&self, artifact: Artifact) -> bool {
        self.path(artifact).is_file()
    }

    /// Serialize as pretty JSON and write atomically. Returns the final path.
    pub fn write_json<T: Serialize + ?Sized>(&self, artifact: Artifact, value: &T) -> Result<PathBuf> {
        let path = self.path(artifact);
        let mut body = serde_json::to_string_pretty(value)
            .with_context(|| format!("serializing {}", path.display()))?;
        body.push('\n');
        write_atomic(&path, body.as_bytes())?;
        Ok(path)
    }

    /// Read and deserialize an artifact. `Ok(None)` when the file is absent;
    /// unreadable or malformed files are errors.
    pub fn read_json<T: DeserializeOwned>(&self, artifact: Artifact) -> Result<Option<T>> {
        let path = self.path(artifact);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e).with_context(|| format!("reading {}", path.display())),
        };
        let value = serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
        Ok(Some(value))
    }
}

/// Write `contents` to `path` via a temp file in the same directory and a rename.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }

    let file_name = path
        .file_name()
        .with_context(|| format!("{} has no file name", path.display()))?;
    let mut tmp_name = file_name.to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    let written = fill_and_rename(&tmp_path, path, contents);
    if written.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    written
}

fn fill_and_rename(tmp_path: &Path, path: &Path, contents: &[u8]) -> Result<()> {
    let mut f = fs::File::create(tmp_path)
        .with_context(|| format!("creating {}", tmp_path.display()))?;
    f.write_all(contents)
        .and_then(|_| f.sync_all())
        .with_context(|| format!("writing {}", tmp_path.display()))?;
    drop(f);

    fs::rename(tmp_path, path)
        .with_context(|| format!("moving {} into place", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use tempfile::tempdir;

    #[test]
    fn test_path_convention() {
        let season = Season::new(2025);
        let week = Week::new(3);

        assert_eq!(Artifact::Teams.relative_path(), PathBuf::from("teams.json"));
        assert_eq!(
            Artifact::PowerRankings { season, week }.relative_path(),
            PathBuf::from("2025/week3/power_rankings.json")
        );
        assert_eq!(
            Artifact::MatchupPredictions { season, week }.relative_path(),
            PathBuf::from("2025/week3/matchup_predictions.json")
        );
        assert_eq!(
            Artifact::History { season }.relative_path(),
            PathBuf::from("2025/history.json")
        );
        assert_eq!(
            Artifact::RostersMin { season }.relative_path(),
            PathBuf::from("2025/rosters_min.json")
        );
    }

    #[test]
    fn test_for_docs_dir_uses_data_subdirectory() {
        let store = ArtifactStore::for_docs_dir(Path::new("/srv/site"));
        assert_eq!(store.path(Artifact::Teams), PathBuf::from("/srv/site/data/teams.json"));
    }

    #[test]
    fn test_write_then_read_creates_directories() {
        let dir = tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());
        let artifact = Artifact::Matchups {
            season: Season::new(2025),
            week: Week::new(1),
        };

        let written = store.write_json(artifact, &json!({ "matchups": [] })).unwrap();

        assert!(written.ends_with("2025/week1/matchups.json"));
        assert!(store.exists(artifact));
        let back: Value = store.read_json(artifact).unwrap().unwrap();
        assert_eq!(back, json!({ "matchups": [] }));
    }

    #[test]
    fn test_read_missing_is_none() {
        let dir = tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());

        let value: Option<Value> = store.read_json(Artifact::Teams).unwrap();
        assert!(value.is_none());
        assert!(!store.exists(Artifact::Teams));
    }

    #[test]
    fn test_read_malformed_is_error() {
        let dir = tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());
        fs::write(store.path(Artifact::Teams), "{ not json").unwrap();

        let result: Result<Option<Value>> = store.read_json(Artifact::Teams);
        assert!(result.is_err());
    }

    #[test]
    fn test_write_overwrites_and_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());

        store.write_json(Artifact::Teams, &json!({ "v": 1 })).unwrap();
        store.write_json(Artifact::Teams, &json!({ "v": 2 })).unwrap();

        let back: Value = store.read_json(Artifact::Teams).unwrap().unwrap();
        assert_eq!(back["v"], 2);
        assert!(!dir.path().join("teams.json.tmp").exists());
    }

    #[test]
    fn test_failed_rename_removes_temp_file() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("teams.json");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep"), "x").unwrap();

        assert!(write_atomic(&target, b"{}").is_err());
        assert!(!dir.path().join("teams.json.tmp").exists());
        assert!(target.join("keep").is_file());
    }

    #[test]
    fn test_output_is_pretty_with_trailing_newline() {
        let dir = tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());

        let path = store.write_json(Artifact::Teams, &json!({ "a": [1] })).unwrap();
        let raw = fs::read_to_string(path).unwrap();

        assert_eq!(raw, "{\n  \"a\": [\n    1\n  ]\n}\n");
    }
}
