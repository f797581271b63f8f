//! Translation loading and localization
/// Translations resource loader
mod loader;
/// Applies translations to localizable elements
mod localizer;
/// Translation dictionary
mod translation;

pub use loader::load_translations;
pub use localizer::apply_i18n;
pub use translation::{
    TranslationMap,
    flatten_json,
};
