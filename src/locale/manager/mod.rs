//! Translation manager: the active locale, the phrase cache and change notification.

use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use parking_lot::ReentrantMutex;
use tracing::{debug, info};

use super::listeners::{Listeners, Subscription};
use super::phrases::{Params, PhraseTable};
use super::resolve::resolve;
use crate::error::{UbersetzError, UbersetzResult};

#[derive(Debug, Default)]
struct LocaleState {
    active: Option<String>,
    /// Locale -> phrases. Entries are never evicted.
    cache: HashMap<String, PhraseTable>,
}

/// Resolves message keys against the phrase table of the active locale.
///
/// Construct one at startup and share it (`Arc<TranslationManager>`) with
/// whatever needs to translate. All operations take `&self`: the cache and the
/// active locale sit behind a single lock, so a locale switch is atomic with
/// respect to [`translate`](Self::translate). Activations are serialized
/// together with their listener dispatch, so listeners see locale changes in
/// the same order they were applied.
///
/// # Example
///
/// ```
/// use ubersetz::{TranslationManager, params, parse_phrases};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let manager = TranslationManager::new();
/// manager.set_locale_sync("en", Some(parse_phrases(r#"{ "items": "{count} item", "items_plural": "{count} items" }"#)?))?;
///
/// assert_eq!(manager.translate("items", Some(&params! { "count" => 1 }), "")?, "1 item");
/// assert_eq!(manager.translate("items", Some(&params! { "count" => 4 }), "")?, "4 items");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct TranslationManager {
    state: RwLock<LocaleState>,
    /// Held from the state update through listener dispatch. Re-entrant so a
    /// listener can activate another locale on the same thread.
    activation: ReentrantMutex<()>,
    listeners: Listeners,
}

impl TranslationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// The active locale, or `None` before the first successful activation.
    pub fn active_locale(&self) -> Option<String> {
        self.read().active.clone()
    }

    /// Cache `phrases` for `locale`, replacing any table already cached.
    ///
    /// Does not change the active locale. Fails with
    /// [`UbersetzError::MissingPhrases`] when `phrases` is `None`.
    pub fn load_locale_sync(&self, locale: &str, phrases: Option<PhraseTable>) -> UbersetzResult<()> {
        let phrases = require_phrases(locale, phrases)?;
        store(&mut self.write(), locale, phrases);
        Ok(())
    }

    /// Async form of [`load_locale_sync`](Self::load_locale_sync).
    ///
    /// The work happens on the first poll; the future never suspends.
    pub async fn load_locale(&self, locale: &str, phrases: Option<PhraseTable>) -> UbersetzResult<()> {
        self.load_locale_sync(locale, phrases)
    }

    /// Make `locale` the active locale and notify change listeners.
    ///
    /// The first activation of a locale must supply its phrases, otherwise
    /// [`UbersetzError::MissingPhrases`] is returned and nothing changes. Once a
    /// locale is cached, phrases passed on later activations are ignored; use
    /// [`load_locale_sync`](Self::load_locale_sync) to replace them.
    ///
    /// Concurrent activations from other threads wait until this one has
    /// notified every listener.
    pub fn set_locale_sync(&self, locale: &str, phrases: Option<PhraseTable>) -> UbersetzResult<()> {
        let _activation = self.activation.lock();
        {
            let mut state = self.write();
            if !state.cache.contains_key(locale) {
                store(&mut state, locale, require_phrases(locale, phrases)?);
            } else if phrases.is_some() {
                debug!("Locale '{}' already cached, ignoring supplied phrases", locale);
            }
            state.active = Some(locale.to_string());
        }

        info!("Active locale set to '{}'", locale);
        let notified = self.listeners.notify(locale);
        debug!("Notified {} locale change listener(s)", notified);
        Ok(())
    }

    /// Async form of [`set_locale_sync`](Self::set_locale_sync).
    ///
    /// Listeners have already run by the time the future resolves.
    pub async fn set_locale(&self, locale: &str, phrases: Option<PhraseTable>) -> UbersetzResult<()> {
        self.set_locale_sync(locale, phrases)
    }

    /// Translate `key` in the active locale.
    ///
    /// A numeric `count` parameter other than 1 selects `<key>_plural` when the
    /// table has it. A missing entry resolves to `default`, or to `key` when
    /// `default` is empty. `{name}` placeholders are then filled from `params`.
    ///
    /// Only fails with [`UbersetzError::NoActiveLocale`] when no locale is active.
    pub fn translate(&self, key: &str, params: Option<&Params>, default: &str) -> UbersetzResult<String> {
        let state = self.read();
        let phrases = state
            .active
            .as_deref()
            .and_then(|locale| state.cache.get(locale))
            .ok_or(UbersetzError::NoActiveLocale)?;

        Ok(resolve(phrases, key, params, default))
    }

    /// Register a handler called with the new locale after every activation.
    ///
    /// Handlers run synchronously, in registration order, on the thread that
    /// activated the locale. The handler stays registered while the returned
    /// [`Subscription`] is alive: binding it to `_` (`let _ = ...`) drops it at
    /// once and the handler never runs. Keep it in a named binding or a field.
    pub fn on_locale_change(&self, handler: impl Fn(&str) + Send + Sync + 'static) -> Subscription {
        self.listeners.subscribe(handler)
    }

    /// Every cached locale, sorted.
    pub fn loaded_locales(&self) -> Vec<String> {
        let mut locales: Vec<String> = self.read().cache.keys().cloned().collect();
        locales.sort();
        locales
    }

    pub fn is_loaded(&self, locale: &str) -> bool {
        self.read().cache.contains_key(locale)
    }

    /// Whether the active locale has a non-empty entry for `key`.
    pub fn has_key(&self, key: &str) -> bool {
        let state = self.read();
        state
            .active
            .as_deref()
            .and_then(|locale| state.cache.get(locale))
            .and_then(|phrases| phrases.get(key))
            .is_some_and(|value| !value.is_empty())
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn read(&self) -> RwLockReadGuard<'_, LocaleState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, LocaleState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn require_phrases(locale: &str, phrases: Option<PhraseTable>) -> UbersetzResult<PhraseTable> {
    phrases.ok_or_else(|| UbersetzError::MissingPhrases {
        locale: locale.to_string(),
    })
}

fn store(state: &mut LocaleState, locale: &str, phrases: PhraseTable) {
    debug!("Caching {} phrase(s) for locale '{}'", phrases.len(), locale);
    state.cache.insert(locale.to_string(), phrases);
}
