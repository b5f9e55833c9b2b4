//! Partner logo overlay on the hero card.
//!
//! The same anchor drives two renderers: a CSS rule for the live page and a
//! pixel rectangle for the canvas used by the exports.

use std::fmt;
use std::str::FromStr;

use crate::config::OverlayConfig;
use crate::error::ExpotenError;

/// Drop shadow under the logo, on the page and on the exported canvas.
pub const LOGO_SHADOW: &str = "drop-shadow(0 3px 6px rgba(0, 0, 0, 0.15))";

/// Where the logo is pinned on the card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LogoAnchor {
    #[default]
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Center,
}

impl LogoAnchor {
    pub const ALL: [LogoAnchor; 5] = [
        LogoAnchor::TopLeft,
        LogoAnchor::TopRight,
        LogoAnchor::BottomLeft,
        LogoAnchor::BottomRight,
        LogoAnchor::Center,
    ];

    /// Stable key used as the `<option>` value.
    pub fn as_str(self) -> &'static str {
        match self {
            LogoAnchor::TopLeft => "top-left",
            LogoAnchor::TopRight => "top-right",
            LogoAnchor::BottomLeft => "bottom-left",
            LogoAnchor::BottomRight => "bottom-right",
            LogoAnchor::Center => "center",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LogoAnchor::TopLeft => "Сверху слева",
            LogoAnchor::TopRight => "Сверху справа",
            LogoAnchor::BottomLeft => "Снизу слева",
            LogoAnchor::BottomRight => "Снизу справа",
            LogoAnchor::Center => "По центру",
        }
    }

    /// Inline CSS that pins an absolutely positioned element to this anchor.
    pub fn css_position(self, inset_px: f64) -> String {
        match self {
            LogoAnchor::TopLeft => format!("top: {inset_px}px; left: {inset_px}px;"),
            LogoAnchor::TopRight => format!("top: {inset_px}px; right: {inset_px}px;"),
            LogoAnchor::BottomLeft => format!("bottom: {inset_px}px; left: {inset_px}px;"),
            LogoAnchor::BottomRight => format!("bottom: {inset_px}px; right: {inset_px}px;"),
            LogoAnchor::Center => {
                "top: 50%; left: 50%; transform: translate(-50%, -50%);".to_string()
            }
        }
    }

    /// Rectangle of a `logo`-sized image inside `container`, in the same units.
    ///
    /// The logo is only ever scaled down: its width stays within
    /// `max_width_fraction` of the container and its height within the
    /// container minus both insets.
    pub fn place(self, container: Size, logo: Size, inset: f64, max_width_fraction: f64) -> Rect {
        let fitted = fit_logo(container, logo, inset, max_width_fraction);
        let right = container.width - inset - fitted.width;
        let bottom = container.height - inset - fitted.height;
        let (x, y) = match self {
            LogoAnchor::TopLeft => (inset, inset),
            LogoAnchor::TopRight => (right, inset),
            LogoAnchor::BottomLeft => (inset, bottom),
            LogoAnchor::BottomRight => (right, bottom),
            LogoAnchor::Center => (
                (container.width - fitted.width) / 2.0,
                (container.height - fitted.height) / 2.0,
            ),
        };
        Rect {
            x: x.max(0.0),
            y: y.max(0.0),
            width: fitted.width,
            height: fitted.height,
        }
    }
}

impl fmt::Display for LogoAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogoAnchor {
    type Err = ExpotenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogoAnchor::ALL
            .into_iter()
            .find(|anchor| anchor.as_str() == s)
            .ok_or_else(|| ExpotenError::UnknownAnchor(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `wanted` corner radius, limited so opposite corners never overlap.
    pub fn corner_radius(self, wanted: f64) -> f64 {
        wanted.min(self.width / 2.0).min(self.height / 2.0).max(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn contains(&self, other: &Rect) -> bool {
        const EPS: f64 = 1e-9;
        other.x + EPS >= self.x
            && other.y + EPS >= self.y
            && other.x + other.width <= self.x + self.width + EPS
            && other.y + other.height <= self.y + self.height + EPS
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

fn fit_logo(container: Size, logo: Size, inset: f64, max_width_fraction: f64) -> Size {
    if logo.width <= 0.0 || logo.height <= 0.0 {
        return Size::new(0.0, 0.0);
    }
    let max_w = (container.width * max_width_fraction).max(0.0);
    let max_h = (container.height - 2.0 * inset).max(0.0);
    let scale = (max_w / logo.width).min(max_h / logo.height).min(1.0);
    Size::new(logo.width * scale, logo.height * scale)
}

/// Source rectangle that crops an image of `natural` size to fill `target`
/// the way `object-fit: cover` does (centered crop, aspect preserved).
pub fn cover_crop(natural: Size, target: Size) -> Rect {
    if natural.width <= 0.0 || natural.height <= 0.0 || target.width <= 0.0 || target.height <= 0.0
    {
        return Rect {
            x: 0.0,
            y: 0.0,
            width: natural.width.max(0.0),
            height: natural.height.max(0.0),
        };
    }
    let scale = (target.width / natural.width).max(target.height / natural.height);
    let width = target.width / scale;
    let height = target.height / scale;
    Rect {
        x: (natural.width - width) / 2.0,
        y: (natural.height - height) / 2.0,
        width,
        height,
    }
}

/// Logo image and its display parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoOverlay {
    data: Option<String>,
    opacity: u8,
    pub anchor: LogoAnchor,
    pub invert: bool,
}

impl Default for LogoOverlay {
    fn default() -> Self {
        Self::new(OverlayConfig::default().default_opacity)
    }
}

impl LogoOverlay {
    pub fn new(opacity: u8) -> Self {
        Self {
            data: None,
            opacity: opacity.min(100),
            anchor: LogoAnchor::default(),
            invert: false,
        }
    }

    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.data.is_some()
    }

    pub fn set_data(&mut self, data: String) {
        self.data = Some(data);
    }

    /// Drop the logo image. Opacity, anchor and inversion are kept for the next upload.
    pub fn clear(&mut self) {
        self.data = None;
    }

    pub fn opacity(&self) -> u8 {
        self.opacity
    }

    /// Percent, clamped to 0..=100.
    pub fn set_opacity(&mut self, percent: u8) {
        self.opacity = percent.min(100);
    }

    /// Opacity as a 0.0..=1.0 alpha value.
    pub fn alpha(&self) -> f64 {
        f64::from(self.opacity) / 100.0
    }

    /// Inline style for the overlay `<img>`.
    ///
    /// Bounded the same way as [`LogoAnchor::place`]: width by the configured
    /// fraction, height by the card minus both insets.
    pub fn css_style(&self, config: &OverlayConfig) -> String {
        let filter = if self.invert {
            format!("invert(1) {LOGO_SHADOW}")
        } else {
            LOGO_SHADOW.to_string()
        };
        format!(
            "position: absolute; max-width: {:.0}%; max-height: calc(100% - {}px); \
             object-fit: contain; {} opacity: {}; filter: {filter};",
            config.max_width_fraction * 100.0,
            2.0 * config.inset_px,
            self.anchor.css_position(config.inset_px),
            self.alpha()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    const CARD: Size = Size {
        width: 800.0,
        height: 600.0,
    };

    #[test]
    fn anchor_keys_round_trip() {
        for anchor in LogoAnchor::ALL {
            assert_eq!(anchor.as_str().parse::<LogoAnchor>().unwrap(), anchor);
            assert_eq!(anchor.to_string(), anchor.as_str());
        }
        assert!(matches!(
            "middle".parse::<LogoAnchor>(),
            Err(ExpotenError::UnknownAnchor(s)) if s == "middle"
        ));
    }

    #[test]
    fn anchors_have_distinct_css_rules() {
        let rules: HashSet<String> = LogoAnchor::ALL
            .into_iter()
            .map(|a| a.css_position(12.0))
            .collect();
        assert_eq!(rules.len(), LogoAnchor::ALL.len());
        assert_eq!(
            LogoAnchor::BottomRight.css_position(12.0),
            "bottom: 12px; right: 12px;"
        );
    }

    #[test]
    fn anchors_place_logo_without_overlap() {
        let logo = Size::new(200.0, 100.0);
        let rects: Vec<Rect> = LogoAnchor::ALL
            .into_iter()
            .map(|a| a.place(CARD, logo, 12.0, 0.28))
            .collect();
        for (i, a) in rects.iter().enumerate() {
            for b in rects.iter().skip(i + 1) {
                assert!(!a.intersects(b), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn placement_stays_inside_container() {
        let bounds = Rect {
            x: 0.0,
            y: 0.0,
            width: CARD.width,
            height: CARD.height,
        };
        let logos = [
            Size::new(50.0, 50.0),
            Size::new(4000.0, 1000.0),
            Size::new(100.0, 5000.0),
        ];
        for anchor in LogoAnchor::ALL {
            for logo in logos {
                let rect = anchor.place(CARD, logo, 12.0, 0.28);
                assert!(bounds.contains(&rect), "{anchor} {logo:?} -> {rect:?}");
                assert!(rect.width <= CARD.width * 0.28 + 1e-9);
            }
        }
    }

    #[test]
    fn small_logo_is_not_upscaled() {
        let rect = LogoAnchor::TopLeft.place(CARD, Size::new(40.0, 20.0), 12.0, 0.28);
        assert_eq!(
            rect,
            Rect {
                x: 12.0,
                y: 12.0,
                width: 40.0,
                height: 20.0
            }
        );
    }

    #[test]
    fn wide_logo_is_bounded_and_keeps_aspect() {
        let rect = LogoAnchor::BottomRight.place(CARD, Size::new(1000.0, 250.0), 12.0, 0.28);
        assert!((rect.width - 224.0).abs() < 1e-9);
        assert!((rect.height - 56.0).abs() < 1e-9);
        assert!((rect.x - (800.0 - 12.0 - 224.0)).abs() < 1e-9);
        assert!((rect.y - (600.0 - 12.0 - 56.0)).abs() < 1e-9);
    }

    #[test]
    fn center_is_centered() {
        let rect = LogoAnchor::Center.place(CARD, Size::new(100.0, 50.0), 12.0, 0.28);
        assert_eq!(rect.x + rect.width / 2.0, 400.0);
        assert_eq!(rect.y + rect.height / 2.0, 300.0);
    }

    #[test]
    fn cover_crop_trims_the_long_side() {
        // 16:9 photo into a 4:3 card: sides are cut
        let crop = cover_crop(Size::new(1600.0, 900.0), Size::new(800.0, 600.0));
        assert!((crop.height - 900.0).abs() < 1e-9);
        assert!((crop.width - 1200.0).abs() < 1e-9);
        assert!((crop.x - 200.0).abs() < 1e-9);
        assert_eq!(crop.y, 0.0);

        // portrait photo: top and bottom are cut
        let crop = cover_crop(Size::new(600.0, 1200.0), Size::new(800.0, 600.0));
        assert!((crop.width - 600.0).abs() < 1e-9);
        assert!((crop.height - 450.0).abs() < 1e-9);
        assert!((crop.y - 375.0).abs() < 1e-9);
    }

    #[test]
    fn opacity_maps_to_alpha() {
        let mut logo = LogoOverlay::default();
        assert_eq!(logo.opacity(), 80);
        logo.set_opacity(0);
        assert_eq!(logo.alpha(), 0.0);
        logo.set_opacity(100);
        assert_eq!(logo.alpha(), 1.0);
        logo.set_opacity(250);
        assert_eq!(logo.opacity(), 100);
    }

    #[test]
    fn clear_hides_overlay_whatever_the_settings() {
        for anchor in LogoAnchor::ALL {
            for invert in [false, true] {
                for opacity in [0, 37, 100] {
                    let mut logo = LogoOverlay::default();
                    logo.set_data("data:image/png;base64,AAAA".into());
                    logo.anchor = anchor;
                    logo.invert = invert;
                    logo.set_opacity(opacity);
                    assert!(logo.is_visible());
                    logo.clear();
                    assert!(!logo.is_visible());
                    assert_eq!(logo.data(), None);
                    assert_eq!(logo.anchor, anchor);
                }
            }
        }
    }

    #[test]
    fn css_style_combines_transforms() {
        let config = OverlayConfig::default();
        let mut logo = LogoOverlay::default();
        logo.anchor = LogoAnchor::Center;
        logo.set_opacity(50);
        let style = logo.css_style(&config);
        assert!(style.contains("max-width: 28%"));
        assert!(style.contains("translate(-50%, -50%)"));
        assert!(style.contains("opacity: 0.5;"));
        assert!(!style.contains("invert"));
        assert!(style.ends_with(&format!("filter: {LOGO_SHADOW};")));

        logo.invert = true;
        assert!(
            logo.css_style(&config)
                .ends_with(&format!("filter: invert(1) {LOGO_SHADOW};"))
        );
    }

    #[test]
    fn css_style_bounds_height_like_canvas_placement() {
        let config = OverlayConfig::default();
        let style = LogoOverlay::default().css_style(&config);
        assert!(style.contains("max-height: calc(100% - 24px);"), "{style}");
        assert!(style.contains("object-fit: contain;"));

        // A very tall logo is held to the card height minus insets on the canvas too
        let rect = LogoAnchor::TopLeft.place(
            CARD,
            Size::new(100.0, 5000.0),
            config.inset_px,
            config.max_width_fraction,
        );
        assert!((rect.height - (CARD.height - 2.0 * config.inset_px)).abs() < 1e-9);
    }

    #[test]
    fn corner_radius_fits_the_card() {
        assert_eq!(CARD.corner_radius(16.0), 16.0);
        assert_eq!(Size::new(20.0, 10.0).corner_radius(16.0), 5.0);
        assert_eq!(CARD.corner_radius(-3.0), 0.0);
    }
}
