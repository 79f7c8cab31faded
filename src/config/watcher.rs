use anyhow::{Context, Result};
use notify::event::EventKind;
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::mpsc::channel;
use std::time::Duration;
use tracing::{debug, error, info};

/// Watches a single configuration file and calls back when it is written.
///
/// The parent directory is watched rather than the file itself so editors that
/// replace the file on save are still picked up.
pub struct ConfigWatcher {
    _watcher: RecommendedWatcher,
    path: PathBuf,
}

impl ConfigWatcher {
    pub fn new<F>(path: &Path, on_change: F) -> Result<Self>
    where
        F: Fn() + Send + 'static,
    {
        let file_name = path
            .file_name()
            .map(OsString::from)
            .context("configuration path has no file name")?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let (tx, rx) = channel::<notify::Result<Event>>();
        let mut watcher = RecommendedWatcher::new(tx, Config::default())?;
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;
        info!("Watching configuration file: {}", path.display());

        std::thread::spawn(move || {
            while let Ok(received) = rx.recv() {
                match received {
                    Ok(event) if is_relevant(&event, &file_name) => {
                        // Let the writer finish before re-reading.
                        std::thread::sleep(Duration::from_millis(100));
                        while rx.try_recv().is_ok() {}
                        info!("Configuration change detected, reloading...");
                        on_change();
                    }
                    Ok(event) => debug!(kind = ?event.kind, "Ignoring unrelated file event"),
                    Err(e) => error!("Watch error: {:?}", e),
                }
            }
            debug!("Configuration watcher stopped");
        });

        Ok(Self {
            _watcher: watcher,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn is_relevant(event: &Event, file_name: &OsString) -> bool {
    let touches_file = event
        .paths
        .iter()
        .any(|p| p.file_name() == Some(file_name.as_os_str()));
    touches_file && matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_))
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, ModifyKind, RemoveKind};

    fn event(kind: EventKind, path: &str) -> Event {
        Event::new(kind).add_path(PathBuf::from(path))
    }

    #[test]
    fn test_relevant_events() {
        let name = OsString::from("api-explorer.toml");
        assert!(is_relevant(
            &event(EventKind::Modify(ModifyKind::Any), "/etc/app/api-explorer.toml"),
            &name
        ));
        assert!(is_relevant(
            &event(EventKind::Create(CreateKind::File), "api-explorer.toml"),
            &name
        ));
        assert!(!is_relevant(
            &event(EventKind::Remove(RemoveKind::File), "api-explorer.toml"),
            &name
        ));
        assert!(!is_relevant(
            &event(EventKind::Modify(ModifyKind::Any), "/etc/app/other.toml"),
            &name
        ));
    }

    #[test]
    fn test_watches_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api-explorer.toml");
        let watcher = ConfigWatcher::new(&path, || {}).unwrap();
        assert_eq!(watcher.path(), path.as_path());
    }
}
