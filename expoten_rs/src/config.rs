//! Brand configuration for the landing page.
//!
//! Loads the `brand.toml` embedded at compile time. Every section is optional;
//! missing keys fall back to the built-in EXPOTEN defaults.

use serde::Deserialize;

use crate::error::Result;

const EMBEDDED_BRAND_TOML: &str = include_str!("../brand.toml");

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BrandConfig {
    pub brand: BrandInfo,
    pub gallery: GalleryConfig,
    pub export: ExportConfig,
    pub overlay: OverlayConfig,
    pub logging: LoggingConfig,
}

/// Texts and contact lines shown on the page
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BrandInfo {
    pub name: String,
    pub tagline: String,
    pub site_url: String,
    pub site_label: String,
    pub phone_href: String,
    pub phone_label: String,
    pub inn_line: String,
    pub company_line: String,
    pub copyright: String,
    /// Document `<title>`
    pub document_title: String,
    /// Document meta description
    pub document_description: String,
}

impl Default for BrandInfo {
    fn default() -> Self {
        Self {
            name: "EXPOTEN".into(),
            tagline: "Производим освещение и МАФ".into(),
            site_url: "https://www.expoten.ru".into(),
            site_label: "WWW.EXPOTEN.RU".into(),
            phone_href: "tel:+79274236666".into(),
            phone_label: "+7 927 423-66-66 Радик".into(),
            inn_line: "89181010098 Марат".into(),
            company_line: "ООО \"МЭНСО\" 2012–2025".into(),
            copyright: "© ООО \"МЭНСО\" 2012–2025 • Демо-страница. Фирменный знак EXPOTEN используется по макету, без изменений композиции.".into(),
            document_title: "EXPOTEN — лендинг".into(),
            document_description: "Демо-страница EXPOTEN: галерея, логотип-оверлей, экспорт JPG/PDF".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Photos shown before anything is uploaded
    pub default_images: Vec<String>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        let ids = [
            "1511919884226-fd3cad34687c",
            "1513694203232-719a280e022f",
            "1505691938895-1758d7feb511",
            "1484154218962-a197022b5858",
            "1524758870432-af57e54afa26",
            "1545153996-ec3056d0507c",
        ];
        Self {
            default_images: ids
                .iter()
                .map(|id| {
                    format!(
                        "https://images.unsplash.com/photo-{id}?q=80&w=1200&auto=format&fit=crop"
                    )
                })
                .collect(),
        }
    }
}

/// Card export settings. Page geometry is in millimetres.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Upscaling factor applied when rasterizing the hero card
    pub scale: f64,
    pub jpg_filename: String,
    pub jpg_quality: f64,
    pub pdf_filename: String,
    pub pdf_quality: f64,
    pub page_width_mm: f64,
    pub page_height_mm: f64,
    pub margin_mm: f64,
    /// Rounded corners of the exported card, CSS px (matches the page stylesheet)
    pub card_radius_px: f64,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            scale: 2.0,
            jpg_filename: "EXPOTEN-card.jpg".into(),
            jpg_quality: 0.92,
            pdf_filename: "EXPOTEN-card.pdf".into(),
            pdf_quality: 0.95,
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            margin_mm: 10.0,
            card_radius_px: 16.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Initial logo opacity, percent
    pub default_opacity: u8,
    /// Distance between the logo and the card edge, CSS px
    pub inset_px: f64,
    /// Largest share of the card width the logo may take
    pub max_width_fraction: f64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            default_opacity: 80,
            inset_px: 12.0,
            max_width_fraction: 0.28,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `trace`, `debug`, `info`, `warn` or `error`
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

impl BrandConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Parse the configuration compiled into the binary.
    pub fn try_embedded() -> Result<Self> {
        Self::from_toml_str(EMBEDDED_BRAND_TOML)
    }

    /// Load the configuration compiled into the binary.
    /// Returns default config if the embedded file is invalid.
    pub fn embedded() -> Self {
        match Self::try_embedded() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to parse embedded brand.toml: {e}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_config_parses() {
        let config = BrandConfig::from_toml_str(EMBEDDED_BRAND_TOML).expect("embedded toml");
        assert_eq!(config.brand.name, "EXPOTEN");
        assert_eq!(config.gallery.default_images.len(), 6);
        assert_eq!(config.export.jpg_filename, "EXPOTEN-card.jpg");
        assert_eq!(config.export.pdf_filename, "EXPOTEN-card.pdf");
    }

    #[test]
    fn embedded_matches_builtin_defaults() {
        assert_eq!(BrandConfig::embedded(), BrandConfig::default());
        assert_eq!(
            BrandConfig::try_embedded().expect("embedded toml").export.card_radius_px,
            16.0
        );
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config = BrandConfig::from_toml_str(
            r#"
[export]
scale = 3.0

[logging]
level = "debug"
"#,
        )
        .expect("partial toml");
        assert_eq!(config.export.scale, 3.0);
        assert_eq!(config.export.margin_mm, 10.0);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.brand, BrandInfo::default());
        assert_eq!(config.overlay.default_opacity, 80);
    }

    #[test]
    fn invalid_config_is_an_error() {
        let err = BrandConfig::from_toml_str("[export]\nscale = \"big\"").unwrap_err();
        assert!(err.to_string().contains("invalid brand configuration"));
    }
}
