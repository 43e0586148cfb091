//! Audio cues and background music
//!
//! Sound is strictly fire-and-forget: nothing returned from here feeds back
//! into gameplay. A missing or unreadable asset mutes that one cue, gets
//! logged, and play carries on.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::settings::Settings;

/// Quietest gain handed to a backend; volume 0 would otherwise be -inf dB
pub const MIN_GAIN_DB: f32 = -80.0;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Enemy defeated from above
    Stomp,
    /// Collectible picked up
    Pickup,
    /// Player took damage
    Hurt,
    /// Player lost a life
    LifeLost,
    /// Last life lost
    GameOver,
    /// Score threshold reached
    LevelComplete,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 6] = [
        SoundEffect::Stomp,
        SoundEffect::Pickup,
        SoundEffect::Hurt,
        SoundEffect::LifeLost,
        SoundEffect::GameOver,
        SoundEffect::LevelComplete,
    ];

    /// Registry name of the cue
    pub fn name(&self) -> &'static str {
        match self {
            SoundEffect::Stomp => "stomp",
            SoundEffect::Pickup => "pickup",
            SoundEffect::Hurt => "hurt",
            SoundEffect::LifeLost => "life_lost",
            SoundEffect::GameOver => "game_over",
            SoundEffect::LevelComplete => "level_complete",
        }
    }
}

/// Why a sound could not be loaded or played
#[derive(Debug)]
pub enum AudioError {
    UnknownSound(String),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Backend(String),
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioError::UnknownSound(name) => write!(f, "no sound loaded under '{name}'"),
            AudioError::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            AudioError::Backend(msg) => write!(f, "audio backend error: {msg}"),
        }
    }
}

impl std::error::Error for AudioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AudioError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Raw encoded audio loaded from disk
#[derive(Debug, Clone)]
pub struct Clip {
    pub name: String,
    pub data: Vec<u8>,
}

impl Clip {
    pub fn load(name: &str, path: &Path) -> Result<Self, AudioError> {
        let data = std::fs::read(path).map_err(|source| AudioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            name: name.to_string(),
            data,
        })
    }
}

/// Whatever actually makes noise
pub trait AudioBackend {
    /// Start a one-shot clip from the beginning
    fn play_clip(&mut self, clip: &Clip, gain_db: f32) -> Result<(), AudioError>;
    /// Replace the background track and loop it
    fn loop_music(&mut self, clip: &Clip, gain_db: f32) -> Result<(), AudioError>;
    fn stop_music(&mut self);
    /// Adjust the gain of the playing background track, if any
    fn set_music_gain(&mut self, _gain_db: f32) {}
}

/// Backend for headless runs: accepts everything, plays nothing
#[derive(Debug, Default)]
pub struct SilentBackend;

impl AudioBackend for SilentBackend {
    fn play_clip(&mut self, clip: &Clip, gain_db: f32) -> Result<(), AudioError> {
        log::trace!("(silent) {} at {gain_db:.1} dB", clip.name);
        Ok(())
    }

    fn loop_music(&mut self, clip: &Clip, gain_db: f32) -> Result<(), AudioError> {
        log::trace!("(silent) music {} at {gain_db:.1} dB", clip.name);
        Ok(())
    }

    fn stop_music(&mut self) {}
}

/// Convert a linear 0..1 volume to decibels
pub fn gain_db(volume: f32) -> f32 {
    if volume <= 0.0 {
        return MIN_GAIN_DB;
    }
    (20.0 * volume.clamp(0.0, 1.0).log10()).max(MIN_GAIN_DB)
}

/// Audio manager for the game
pub struct AudioManager {
    backend: Box<dyn AudioBackend>,
    clips: HashMap<String, Clip>,
    music_playing: bool,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(Box::new(SilentBackend))
    }
}

impl AudioManager {
    pub fn new(backend: Box<dyn AudioBackend>) -> Self {
        Self {
            backend,
            clips: HashMap::new(),
            music_playing: false,
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,
        }
    }

    /// Apply volume settings and load the configured cue table
    pub fn configure(&mut self, settings: &Settings) {
        self.set_master_volume(settings.master_volume);
        self.set_sfx_volume(settings.sfx_volume);
        self.set_music_volume(settings.music_volume);
        self.set_muted(settings.muted);
        for (name, path) in &settings.sounds {
            // Failures are already logged; the cue just stays silent
            let _ = self.load_sound(name, path);
        }
    }

    /// Load a cue from disk under `name`, replacing any previous one
    pub fn load_sound(&mut self, name: &str, path: impl AsRef<Path>) -> Result<(), AudioError> {
        match Clip::load(name, path.as_ref()) {
            Ok(clip) => {
                log::debug!("Loaded sound '{name}' ({} bytes)", clip.data.len());
                self.clips.insert(name.to_string(), clip);
                Ok(())
            }
            Err(e) => {
                log::warn!("Could not load sound '{name}': {e}");
                Err(e)
            }
        }
    }

    pub fn is_loaded(&self, name: &str) -> bool {
        self.clips.contains_key(name)
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
        self.refresh_music_gain();
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Set music volume (0.0 - 1.0)
    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
        self.refresh_music_gain();
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        self.refresh_music_gain();
    }

    fn refresh_music_gain(&mut self) {
        if self.music_playing {
            let gain = gain_db(self.effective_music_volume());
            self.backend.set_music_gain(gain);
        }
    }

    /// Get effective effect volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    fn effective_music_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.music_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        self.play_sound(effect.name());
    }

    /// Play a named cue. Unknown names and backend failures are logged.
    pub fn play_sound(&mut self, name: &str) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        let Some(clip) = self.clips.get(name) else {
            log::warn!("{}", AudioError::UnknownSound(name.to_string()));
            return;
        };
        if let Err(e) = self.backend.play_clip(clip, gain_db(vol)) {
            log::warn!("Failed to play '{name}': {e}");
        }
    }

    /// Start looping a music track, replacing whatever was playing
    pub fn play_background_music(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let clip = match Clip::load("music", path) {
            Ok(clip) => clip,
            Err(e) => {
                log::warn!("Could not load music: {e}");
                return;
            }
        };
        if self.music_playing {
            self.backend.stop_music();
        }
        let gain = gain_db(self.effective_music_volume());
        match self.backend.loop_music(&clip, gain) {
            Ok(()) => {
                self.music_playing = true;
                log::info!("Playing music {}", path.display());
            }
            Err(e) => {
                self.music_playing = false;
                log::warn!("Failed to start music {}: {e}", path.display());
            }
        }
    }

    pub fn stop_background_music(&mut self) {
        if self.music_playing {
            self.backend.stop_music();
            self.music_playing = false;
        }
    }

    pub fn is_music_playing(&self) -> bool {
        self.music_playing
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Play(String, f32),
        Loop(String),
        Stop,
    }

    #[derive(Clone, Default)]
    struct Recorder {
        calls: Rc<RefCell<Vec<Call>>>,
        fail: bool,
    }

    impl AudioBackend for Recorder {
        fn play_clip(&mut self, clip: &Clip, gain_db: f32) -> Result<(), AudioError> {
            if self.fail {
                return Err(AudioError::Backend("device lost".into()));
            }
            self.calls
                .borrow_mut()
                .push(Call::Play(clip.name.clone(), gain_db));
            Ok(())
        }

        fn loop_music(&mut self, clip: &Clip, _gain_db: f32) -> Result<(), AudioError> {
            self.calls.borrow_mut().push(Call::Loop(clip.name.clone()));
            Ok(())
        }

        fn stop_music(&mut self) {
            self.calls.borrow_mut().push(Call::Stop);
        }
    }

    fn temp_sound(tag: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "street_buds_{tag}_{}.wav",
            std::process::id()
        ));
        std::fs::write(&path, b"RIFF....WAVE").unwrap();
        path
    }

    #[test]
    fn test_gain_db() {
        assert_eq!(gain_db(1.0), 0.0);
        assert!((gain_db(0.5) - -6.0206).abs() < 0.001);
        assert_eq!(gain_db(0.0), MIN_GAIN_DB);
        assert_eq!(gain_db(-1.0), MIN_GAIN_DB);
    }

    #[test]
    fn test_play_loaded_sound() {
        let recorder = Recorder::default();
        let calls = recorder.calls.clone();
        let mut audio = AudioManager::new(Box::new(recorder));
        audio.set_master_volume(1.0);
        let path = temp_sound("stomp");
        audio.load_sound("stomp", &path).unwrap();

        audio.play(SoundEffect::Stomp);
        assert_eq!(*calls.borrow(), vec![Call::Play("stomp".into(), 0.0)]);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_failures_are_swallowed() {
        let recorder = Recorder {
            fail: true,
            ..Default::default()
        };
        let calls = recorder.calls.clone();
        let mut audio = AudioManager::new(Box::new(recorder));

        let err = audio.load_sound("pickup", "/definitely/not/here.wav");
        assert!(matches!(err, Err(AudioError::Io { .. })));
        assert!(!audio.is_loaded("pickup"));

        // Unknown cue and failing backend both just log
        audio.play(SoundEffect::Pickup);
        let path = temp_sound("hurt");
        audio.load_sound("hurt", &path).unwrap();
        audio.play(SoundEffect::Hurt);
        assert!(calls.borrow().is_empty());

        audio.play_background_music("/definitely/not/music.wav");
        assert!(!audio.is_music_playing());
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_muted_plays_nothing() {
        let recorder = Recorder::default();
        let calls = recorder.calls.clone();
        let mut audio = AudioManager::new(Box::new(recorder));
        let path = temp_sound("muted");
        audio.load_sound("stomp", &path).unwrap();
        audio.set_muted(true);
        audio.play(SoundEffect::Stomp);
        assert!(calls.borrow().is_empty());
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_music_replaces_previous_track() {
        let recorder = Recorder::default();
        let calls = recorder.calls.clone();
        let mut audio = AudioManager::new(Box::new(recorder));
        let path = temp_sound("music");

        audio.play_background_music(&path);
        audio.play_background_music(&path);
        audio.stop_background_music();
        assert!(!audio.is_music_playing());
        assert_eq!(
            *calls.borrow(),
            vec![
                Call::Loop("music".into()),
                Call::Stop,
                Call::Loop("music".into()),
                Call::Stop,
            ]
        );
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_volume_clamps() {
        let mut audio = AudioManager::default();
        audio.set_master_volume(3.0);
        audio.set_sfx_volume(-1.0);
        assert_eq!(audio.effective_volume(), 0.0);
        audio.set_sfx_volume(0.5);
        assert_eq!(audio.effective_volume(), 0.5);
    }

    #[test]
    fn test_every_effect_has_a_distinct_name() {
        let names: std::collections::HashSet<_> =
            SoundEffect::ALL.iter().map(|e| e.name()).collect();
        assert_eq!(names.len(), SoundEffect::ALL.len());
    }
}
