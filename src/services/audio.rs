//! Fire-and-forget sound playback by alias.
//!
//! `SoundBank` is an owned alias registry on top of an `AudioBackend`.
//! Every command is best effort: failures are logged and swallowed so
//! playback problems never interrupt animation.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// One-way sound commands consumed by reels and screens.
///
/// Services are shared between reels, possibly on different threads.
pub trait AudioService: Send + Sync {
    /// Register `url` under `alias`, replacing any previous sound.
    fn add(&self, alias: &str, url: &str);
    /// Restart the sound from the beginning.
    fn play(&self, alias: &str);
    fn stop(&self, alias: &str);
    /// Release the sound and forget the alias.
    fn unload(&self, alias: &str);
}

/// Identifier of a voice loaded into a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VoiceId(pub u64);

/// Errors reported by an audio backend.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AudioError {
    #[error("Failed to load sound from {url}: {reason}")]
    Load { url: String, reason: String },
    #[error("Playback failed: {reason}")]
    Playback { reason: String },
}

/// Underlying audio engine. Access is serialized by `SoundBank`.
pub trait AudioBackend: Send {
    fn load(&mut self, url: &str) -> Result<VoiceId, AudioError>;
    fn play(&mut self, voice: VoiceId) -> Result<(), AudioError>;
    fn stop(&mut self, voice: VoiceId) -> Result<(), AudioError>;
    fn unload(&mut self, voice: VoiceId) -> Result<(), AudioError>;
}

/// Backend that accepts every command and produces no sound.
#[derive(Debug, Default)]
pub struct SilentBackend {
    next_voice: u64,
}

impl AudioBackend for SilentBackend {
    fn load(&mut self, url: &str) -> Result<VoiceId, AudioError> {
        self.next_voice += 1;
        log::trace!("Silent voice {} for {}", self.next_voice, url);
        Ok(VoiceId(self.next_voice))
    }

    fn play(&mut self, _voice: VoiceId) -> Result<(), AudioError> {
        Ok(())
    }

    fn stop(&mut self, _voice: VoiceId) -> Result<(), AudioError> {
        Ok(())
    }

    fn unload(&mut self, _voice: VoiceId) -> Result<(), AudioError> {
        Ok(())
    }
}

struct BankState<B> {
    backend: B,
    sounds: HashMap<String, VoiceId>,
}

/// Alias registry over an audio backend.
pub struct SoundBank<B: AudioBackend> {
    state: Mutex<BankState<B>>,
}

impl<B: AudioBackend> SoundBank<B> {
    pub fn new(backend: B) -> Self {
        Self {
            state: Mutex::new(BankState {
                backend,
                sounds: HashMap::new(),
            }),
        }
    }

    /// Check whether an alias is registered.
    pub fn contains(&self, alias: &str) -> bool {
        self.lock().sounds.contains_key(alias)
    }

    /// Number of registered aliases.
    pub fn len(&self) -> usize {
        self.lock().sounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run `f` against the backend.
    pub fn with_backend<R>(&self, f: impl FnOnce(&mut B) -> R) -> R {
        f(&mut self.lock().backend)
    }

    fn lock(&self) -> MutexGuard<'_, BankState<B>> {
        // Commands are cosmetic; keep going with whatever state survived a panic
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<B: AudioBackend + Default> Default for SoundBank<B> {
    fn default() -> Self {
        Self::new(B::default())
    }
}

impl<B: AudioBackend> AudioService for SoundBank<B> {
    fn add(&self, alias: &str, url: &str) {
        let mut state = self.lock();
        let BankState { backend, sounds } = &mut *state;

        if let Some(old) = sounds.remove(alias) {
            if let Err(e) = backend.unload(old) {
                log::warn!("Failed to unload previous sound {}: {}", alias, e);
            }
        }

        match backend.load(url) {
            Ok(voice) => {
                sounds.insert(alias.to_string(), voice);
            }
            Err(e) => log::warn!("Failed to register sound {} at {}: {}", alias, url, e),
        }
    }

    fn play(&self, alias: &str) {
        let mut state = self.lock();
        let BankState { backend, sounds } = &mut *state;

        let Some(&voice) = sounds.get(alias) else {
            log::warn!("Sound {} not found, was it registered?", alias);
            return;
        };
        if let Err(e) = backend.stop(voice).and_then(|()| backend.play(voice)) {
            log::warn!("Error playing sound {}: {}", alias, e);
        }
    }

    fn stop(&self, alias: &str) {
        let mut state = self.lock();
        let BankState { backend, sounds } = &mut *state;

        if let Some(&voice) = sounds.get(alias) {
            if let Err(e) = backend.stop(voice) {
                log::warn!("Error stopping sound {}: {}", alias, e);
            }
        }
    }

    fn unload(&self, alias: &str) {
        let mut state = self.lock();
        let BankState { backend, sounds } = &mut *state;

        if let Some(voice) = sounds.remove(alias) {
            if let Err(e) = backend.unload(voice) {
                log::warn!("Error unloading sound {}: {}", alias, e);
            }
        }
    }
}
