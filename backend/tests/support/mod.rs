#![allow(dead_code)]

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};

use tempfile::TempDir;
use ytdash::db::{DashboardConfig, DatasetRepository, RepositoryFactory};

static ENV_LOCK: Mutex<()> = Mutex::new(());

pub const HEADER: &str = "title,description,publishedDate,channelName,views,duration,isShort";

/// Runs `f` with environment variables temporarily modified.
///
/// Restores the variables on unwind and serializes access to the process
/// environment, since tests run in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// Write a category CSV with the standard header.
pub fn write_csv(dir: &Path, name: &str, rows: &[&str]) {
    let mut content = format!("{}\n", HEADER);
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    fs::write(dir.join(name), content).expect("write fixture csv");
}

/// A data directory with small gaming, movies and music datasets.
///
/// Music: Lofi (3 videos, 600 views), Pop (2 videos, 2000 views), Jazz (1 video, 50 views).
pub fn sample_data_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    write_csv(
        dir.path(),
        "gaming.csv",
        &[
            "Speedrun WR,any%,2024-03-01T12:00:00Z,Runner,1500,900,False",
            "Boss fight,,2024-03-01T18:30:00Z,Runner,500,1200,False",
            "Quick tip,tip,2024-03-02T08:00:00Z,Tips,90,40,True",
        ],
    );
    write_csv(
        dir.path(),
        "movies.csv",
        &[
            "Trailer,official,2024-03-05T10:00:00Z,Studio A,10000,150,False",
            "Review,spoilers,2024-03-06T10:00:00Z,Critic,2500,1300,False",
        ],
    );
    write_csv(
        dir.path(),
        "music.csv",
        &[
            "Beats 1,chill,2024-03-01T00:00:00Z,Lofi,100,3600,False",
            "Hit single,,2024-03-01T09:00:00Z,Pop,900,200,False",
            "Beats 2,chill,2024-03-02T00:00:00Z,Lofi,300,45,True",
            "Standard,live,2024-03-03T20:00:00Z,Jazz,50,500,False",
            "Hit single 2,,2024-03-04T09:00:00Z,Pop,1100,210,False",
            "Beats 3,chill,2024-03-04T00:00:00Z,Lofi,200,7200,False",
        ],
    );
    dir
}

/// Configuration pointing at `dir`.
pub fn config_for(dir: &Path) -> DashboardConfig {
    let mut config = DashboardConfig::default();
    config.datasets.data_dir = dir.to_path_buf();
    config
}

/// Repository loaded from [`sample_data_dir`]; the directory guard is returned alongside.
pub fn sample_repository() -> (TempDir, Arc<dyn DatasetRepository>) {
    let dir = sample_data_dir();
    let repo = RepositoryFactory::load_from_config(&config_for(dir.path()))
        .expect("sample datasets load");
    (dir, repo)
}
