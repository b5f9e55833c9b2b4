//! Everything the product page can change, in one value.

use crate::config::BrandConfig;
use crate::gallery::Gallery;
use crate::overlay::LogoOverlay;

/// Interactive state of the product page.
///
/// The view owns a single reactive cell holding this struct and hands it to
/// each section; sections mutate it only through these methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductPageState {
    pub gallery: Gallery,
    pub logo: LogoOverlay,
    pub contacts_background: Option<String>,
    pub show_right_blocks: bool,
}

impl ProductPageState {
    pub fn new(config: &BrandConfig) -> Self {
        Self {
            gallery: Gallery::new(config.gallery.default_images.clone()),
            logo: LogoOverlay::new(config.overlay.default_opacity),
            contacts_background: None,
            show_right_blocks: true,
        }
    }

    pub fn add_photos(&mut self, uploaded: Vec<String>) {
        self.gallery.prepend(uploaded);
    }

    pub fn set_logo(&mut self, data: String) {
        tracing::debug!(bytes = data.len(), "logo replaced");
        self.logo.set_data(data);
    }

    pub fn clear_logo(&mut self) {
        tracing::debug!("logo cleared");
        self.logo.clear();
    }

    pub fn set_contacts_background(&mut self, data: String) {
        tracing::debug!(bytes = data.len(), "contacts background replaced");
        self.contacts_background = Some(data);
    }
}

impl Default for ProductPageState {
    fn default() -> Self {
        Self::new(&BrandConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::LogoAnchor;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_with_demo_gallery_and_no_uploads() {
        let state = ProductPageState::default();
        assert_eq!(state.gallery.len(), 6);
        assert_eq!(state.gallery.active(), 0);
        assert!(!state.logo.is_visible());
        assert_eq!(state.logo.opacity(), 80);
        assert_eq!(state.logo.anchor, LogoAnchor::TopLeft);
        assert!(!state.logo.invert);
        assert_eq!(state.contacts_background, None);
        assert!(state.show_right_blocks);
    }

    #[test]
    fn uploads_replace_single_slots() {
        let mut state = ProductPageState::default();
        state.set_logo("data:image/png;base64,AA==".into());
        state.set_logo("data:image/svg+xml;base64,BB==".into());
        assert_eq!(state.logo.data(), Some("data:image/svg+xml;base64,BB=="));

        state.set_contacts_background("data:image/jpeg;base64,CC==".into());
        state.set_contacts_background("data:image/jpeg;base64,DD==".into());
        assert_eq!(
            state.contacts_background.as_deref(),
            Some("data:image/jpeg;base64,DD==")
        );
    }

    #[test]
    fn photo_upload_goes_to_the_front() {
        let mut state = ProductPageState::default();
        state.gallery.next();
        state.add_photos(vec!["new1".into(), "new2".into()]);
        assert_eq!(state.gallery.active(), 0);
        assert_eq!(&state.gallery.images()[..2], &["new1", "new2"]);
        assert_eq!(state.gallery.len(), 8);
    }

    #[test]
    fn clearing_logo_keeps_other_state() {
        let mut state = ProductPageState::default();
        state.set_logo("data:image/png;base64,AA==".into());
        state.logo.set_opacity(10);
        state.show_right_blocks = false;
        state.clear_logo();
        assert!(!state.logo.is_visible());
        assert_eq!(state.logo.opacity(), 10);
        assert!(!state.show_right_blocks);
    }
}
