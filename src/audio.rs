use rand::seq::SliceRandom;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use tracing::{debug, warn};

const SOUND_EXTENSIONS: &[&str] = &["wav", "mp3", "ogg"];

/// Players tried in order; the first one that spawns wins
#[cfg(target_os = "macos")]
const PLAYERS: &[&str] = &["afplay"];
#[cfg(not(target_os = "macos"))]
const PLAYERS: &[&str] = &["paplay", "aplay", "ffplay"];

pub trait AudioCue {
    /// Start a random alarm sound
    fn play_random_alarm(&mut self);
    /// Silence anything still playing
    fn stop(&mut self);
}

/// List sound files in `dir`, sorted by name
pub fn discover_sounds(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut sounds: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| SOUND_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
                .unwrap_or(false)
        })
        .collect();
    sounds.sort();
    sounds
}

/// Plays alarm files through an external player process
pub struct SystemAlarm {
    sounds: Vec<PathBuf>,
    playing: Option<Child>,
}

impl SystemAlarm {
    pub fn new(alarms_dir: &Path) -> Self {
        let sounds = discover_sounds(alarms_dir);
        debug!(count = sounds.len(), dir = %alarms_dir.display(), "Discovered alarm sounds");
        Self {
            sounds,
            playing: None,
        }
    }

    fn spawn_player(sound: &Path) -> Option<Child> {
        for player in PLAYERS {
            let mut command = Command::new(player);
            if *player == "ffplay" {
                command.args(["-nodisp", "-autoexit", "-loglevel", "quiet"]);
            }
            let spawned = command
                .arg(sound)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn();
            if let Ok(child) = spawned {
                return Some(child);
            }
        }
        warn!(sound = %sound.display(), "No audio player available");
        None
    }
}

impl AudioCue for SystemAlarm {
    fn play_random_alarm(&mut self) {
        self.stop();
        let Some(sound) = self.sounds.choose(&mut rand::thread_rng()) else {
            return;
        };
        self.playing = Self::spawn_player(sound);
    }

    fn stop(&mut self) {
        if let Some(mut child) = self.playing.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

impl Drop for SystemAlarm {
    fn drop(&mut self) {
        self.stop();
    }
}
