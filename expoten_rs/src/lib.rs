//! # expoten
//!
//! Browser-independent core of the EXPOTEN product landing page.
//!
//! The landing crate (Leptos, client-side rendered) keeps one
//! [`ProductPageState`] in a reactive signal and renders it; this crate owns
//! what that state means and how the hero card is exported.
//!
//! ## Modules
//!
//! - [`state`] - the page state aggregate
//! - [`gallery`] - photo collection and carousel navigation
//! - [`overlay`] - partner logo overlay and its five anchors
//! - [`export`] - JPG/PDF export settings, PDF page layout and writer
//! - [`data_url`] - `data:` URL codec for uploads and canvas output
//! - [`config`] - brand configuration (`brand.toml`)
//! - [`checks`] - footer self-check badges
//! - [`cct`] - colour temperature scale
//!
//! ## Example
//!
//! ```rust
//! use expoten::{BrandConfig, ProductPageState};
//!
//! let config = BrandConfig::default();
//! let mut state = ProductPageState::new(&config);
//! state.gallery.prev();
//! assert_eq!(state.gallery.caption(), "Фото 6 / 6");
//! ```

pub mod cct;
pub mod checks;
pub mod config;
pub mod data_url;
pub mod error;
pub mod export;
pub mod gallery;
pub mod overlay;
pub mod state;

pub use cct::{CCT_SEGMENTS, CctSegment};
pub use checks::{SelfCheck, run_self_checks};
pub use config::BrandConfig;
pub use data_url::DataUrl;
pub use error::{ExpotenError, Result};
pub use export::{ExportFormat, PdfLayout, write_pdf};
pub use gallery::{Gallery, VIEW_TILES};
pub use overlay::{LogoAnchor, LogoOverlay, Rect, Size, cover_crop};
pub use state::ProductPageState;
