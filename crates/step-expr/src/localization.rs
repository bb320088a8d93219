//! Fluent-backed messages for user-facing diagnostics.
//!
//! Errors raised by the matcher and the registry render through this module,
//! so a test suite can read failures in its own language. English is loaded
//! on first use; a thread can switch language temporarily with
//! [`ScopedLocalization`].

use std::cell::RefCell;
use std::sync::{LazyLock, PoisonError, RwLock};

use fluent::FluentArgs;
use i18n_embed::I18nEmbedError;
use i18n_embed::fluent::{FluentLanguageLoader, fluent_language_loader};
use rust_embed::RustEmbed;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

/// Fluent resources embedded in the crate.
///
/// # Examples
/// ```
/// # use step_expr::localization::Localizations;
/// # use i18n_embed::fluent::fluent_language_loader;
/// # use unic_langid::langid;
/// let loader = fluent_language_loader!();
/// let selected = i18n_embed::select(&loader, &Localizations, &[langid!("fr")]).unwrap();
/// assert!(selected.contains(&langid!("fr")));
/// ```
#[derive(RustEmbed)]
#[folder = "i18n"]
pub struct Localizations;

static LANGUAGE_LOADER: LazyLock<RwLock<FluentLanguageLoader>> = LazyLock::new(|| {
    let loader = fluent_language_loader!();
    i18n_embed::select(&loader, &Localizations, &[unic_langid::langid!("en-US")])
        .unwrap_or_else(|error| panic!("failed to load default English translations: {error}"));
    RwLock::new(loader)
});

thread_local! {
    static OVERRIDE_LOADER: RefCell<Option<FluentLanguageLoader>> = const { RefCell::new(None) };
}

/// Errors from localization setup.
#[derive(Debug, Error)]
pub enum LocalizationError {
    /// The global loader lock was poisoned.
    #[error("localization state is poisoned")]
    Poisoned,
    /// Loading or selecting Fluent resources failed.
    #[error("failed to load localization resources: {0}")]
    Loader(#[from] I18nEmbedError),
}

/// Guard installing a thread-local loader until it is dropped.
#[must_use]
pub struct ScopedLocalization {
    previous: Option<FluentLanguageLoader>,
}

impl ScopedLocalization {
    /// Load `requested` into a fresh loader and make it current for this thread.
    ///
    /// # Errors
    ///
    /// Returns [`LocalizationError::Loader`] if the resources cannot be loaded.
    pub fn new(requested: &[LanguageIdentifier]) -> Result<Self, LocalizationError> {
        let loader = fluent_language_loader!();
        i18n_embed::select(&loader, &Localizations, requested)?;
        let previous = OVERRIDE_LOADER.with(|cell| cell.replace(Some(loader)));
        Ok(Self { previous })
    }
}

impl Drop for ScopedLocalization {
    fn drop(&mut self) {
        let previous = self.previous.take();
        OVERRIDE_LOADER.with(|cell| {
            *cell.borrow_mut() = previous;
        });
    }
}

/// Select the best matching languages on the global loader.
///
/// # Errors
///
/// Returns [`LocalizationError::Poisoned`] if the global lock is poisoned or
/// [`LocalizationError::Loader`] when resource selection fails.
pub fn select_localizations(
    requested: &[LanguageIdentifier],
) -> Result<Vec<LanguageIdentifier>, LocalizationError> {
    let guard = LANGUAGE_LOADER
        .read()
        .map_err(|_| LocalizationError::Poisoned)?;
    Ok(i18n_embed::select(&*guard, &Localizations, requested)?)
}

/// Languages currently active for this thread.
#[must_use]
pub fn current_languages() -> Vec<LanguageIdentifier> {
    with_loader(|loader| loader.current_languages())
}

/// Render a message without arguments.
///
/// # Examples
/// ```
/// # use step_expr::localization;
/// assert_eq!(
///     localization::message("transform-integer-out-of-range"),
///     "integer out of range"
/// );
/// ```
#[must_use]
pub fn message(id: &str) -> String {
    with_loader(|loader| loader.get(id))
}

/// Render a message with arguments supplied by `configure`.
///
/// # Examples
/// ```
/// # use step_expr::localization;
/// let rendered = localization::message_with_args("parameter-type-custom-exists", |args| {
///     args.set("name", "color".to_string());
/// });
/// assert!(rendered.contains("color"));
/// ```
#[must_use]
pub fn message_with_args<F>(id: &str, configure: F) -> String
where
    F: FnOnce(&mut FluentArgs<'static>),
{
    let mut args: FluentArgs<'static> = FluentArgs::new();
    configure(&mut args);
    with_loader(|loader| loader.get_args_fluent(id, Some(&args)))
}

fn with_loader<R>(callback: impl FnOnce(&FluentLanguageLoader) -> R) -> R {
    OVERRIDE_LOADER.with(|cell| {
        let borrow = cell.borrow();
        if let Some(loader) = borrow.as_ref() {
            return callback(loader);
        }
        drop(borrow);
        let guard = LANGUAGE_LOADER
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        callback(&guard)
    })
}

/// Remove the Unicode directional isolates Fluent places around arguments.
#[must_use]
pub fn strip_directional_isolates(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(*c, '\u{2066}' | '\u{2067}' | '\u{2068}' | '\u{2069}'))
        .collect()
}
