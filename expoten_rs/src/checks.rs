//! Sanity badges rendered in the page footer.
//!
//! Not a test harness: a handful of cheap checks over the configuration and
//! the static catalogs, evaluated once at startup.

use std::collections::HashSet;

use crate::cct::CCT_SEGMENTS;
use crate::config::BrandConfig;
use crate::export::{ExportFormat, PdfLayout};
use crate::overlay::LogoAnchor;

/// Smallest demo gallery the page layout is designed for.
pub const MIN_DEMO_IMAGES: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelfCheck {
    pub label: &'static str,
    pub ok: bool,
}

pub fn run_self_checks(config: &BrandConfig) -> Vec<SelfCheck> {
    let export = &config.export;

    let jpg_ok = ExportFormat::Jpg.filename(export).ends_with(".jpg")
        && quality_in_range(ExportFormat::Jpg.jpeg_quality(export));

    let pdf_ok = ExportFormat::Pdf.filename(export).ends_with(".pdf")
        && quality_in_range(ExportFormat::Pdf.jpeg_quality(export))
        && PdfLayout::fit(1600, 1200, export).is_ok_and(|layout| {
            layout.width > 0.0
                && layout.x + layout.width <= export.page_width_mm
                && layout.y + layout.height <= export.page_height_mm
        });

    let keys: HashSet<&str> = LogoAnchor::ALL.iter().map(|a| a.as_str()).collect();
    let anchors_ok = keys.len() == LogoAnchor::ALL.len()
        && LogoAnchor::ALL
            .iter()
            .all(|a| a.as_str().parse::<LogoAnchor>().ok() == Some(*a));

    let checks = vec![
        SelfCheck {
            label: "Есть 4 сегмента CCT",
            ok: CCT_SEGMENTS.len() == 4,
        },
        SelfCheck {
            label: "Есть демо-изображения",
            ok: config.gallery.default_images.len() >= MIN_DEMO_IMAGES,
        },
        SelfCheck {
            label: "Экспорт JPG настроен",
            ok: jpg_ok,
        },
        SelfCheck {
            label: "Экспорт PDF настроен",
            ok: pdf_ok,
        },
        SelfCheck {
            label: "Позиции логотипа обрабатываются",
            ok: anchors_ok,
        },
    ];

    let failed = checks.iter().filter(|c| !c.ok).count();
    if failed > 0 {
        tracing::warn!(failed, "self-checks failed");
    }
    checks
}

fn quality_in_range(q: f64) -> bool {
    q > 0.0 && q <= 1.0
}
