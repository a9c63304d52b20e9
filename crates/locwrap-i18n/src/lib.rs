#![forbid(unsafe_code)]

//! Translation catalogs for locwrap.
//!
//! Loads per-locale JSON translation files into a [`TranslationCatalog`]
//! and serves them through a [`Localizer`], which wraps every string with
//! [`locwrap_text`] before handing it back.
//!
//! # Example
//! ```
//! use locwrap_i18n::{Category, Field, Localizer, TranslationCatalog};
//!
//! let mut catalog = TranslationCatalog::new();
//! catalog.insert(Category::Stars, "Star_Haste", Field::Name, "เร่งความเร็ว");
//!
//! let localizer = Localizer::new(catalog);
//! assert_eq!(
//!     localizer.resolve(Category::Stars, "Star_Haste", &Field::Name, "Haste"),
//!     "เร่งความเร็ว"
//! );
//! assert_eq!(
//!     localizer.resolve(Category::Stars, "Star_Slow", &Field::Name, "Slow"),
//!     "Slow"
//! );
//! ```

pub mod catalog;
pub mod key_log;
pub mod localizer;

pub use catalog::{Category, Field, I18nError, TranslationCatalog};
pub use key_log::KeyLog;
pub use localizer::{Localizer, override_or};
