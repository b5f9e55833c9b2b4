//! Hero card to canvas.
//!
//! Redraws the card from its parts instead of snapshotting the DOM: the
//! active photo (cropped like `object-fit: cover`), the logo overlay with its
//! opacity and inversion, and the photo counter pill, all clipped to the
//! card's rounded corners. The navigation arrows are page controls and are
//! left out.

use expoten::config::OverlayConfig;
use expoten::{ExpotenError, ProductPageState, Result, Size, cover_crop};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, HtmlImageElement};

use super::{browser_error, document};

const PHOTO_SELECTOR: &str = "img.hero-photo";
const LOGO_SELECTOR: &str = "img.hero-logo";

const PILL_HEIGHT: f64 = 22.0;
const PILL_PADDING: f64 = 8.0;
const PILL_FONT: &str = "11px system-ui, sans-serif";

pub async fn rasterize_card(
    hero: &HtmlElement,
    state: &ProductPageState,
    overlay: &OverlayConfig,
    scale: f64,
    corner_radius: f64,
    background: Option<&str>,
) -> Result<HtmlCanvasElement> {
    let bounds = hero.get_bounding_client_rect();
    let card = Size::new(bounds.width(), bounds.height());
    let px_width = (card.width * scale).round().max(0.0) as u32;
    let px_height = (card.height * scale).round().max(0.0) as u32;
    if px_width == 0 || px_height == 0 {
        return Err(ExpotenError::EmptyRaster {
            width: px_width,
            height: px_height,
        });
    }

    let canvas: HtmlCanvasElement = document()?
        .create_element("canvas")
        .map_err(browser_error)?
        .dyn_into()
        .map_err(|_| ExpotenError::Browser("created element is not a canvas".into()))?;
    canvas.set_width(px_width);
    canvas.set_height(px_height);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(browser_error)?
        .ok_or_else(|| ExpotenError::Browser("2d context unavailable".into()))?
        .dyn_into()
        .map_err(|_| ExpotenError::Browser("unexpected 2d context type".into()))?;
    ctx.scale(scale, scale).map_err(browser_error)?;

    if let Some(fill) = background {
        ctx.set_fill_style_str(fill);
        ctx.fill_rect(0.0, 0.0, card.width, card.height);
    }
    clip_rounded(&ctx, card, card.corner_radius(corner_radius))?;

    if let Some(photo) = find_image(hero, PHOTO_SELECTOR)? {
        decoded(&photo).await?;
        let natural = Size::new(
            f64::from(photo.natural_width()),
            f64::from(photo.natural_height()),
        );
        let src = cover_crop(natural, card);
        ctx.draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
            &photo, src.x, src.y, src.width, src.height, 0.0, 0.0, card.width, card.height,
        )
        .map_err(browser_error)?;
    }

    if state.logo.is_visible() {
        if let Some(logo) = find_image(hero, LOGO_SELECTOR)? {
            decoded(&logo).await?;
            draw_logo(&ctx, &logo, state, overlay, card)?;
        }
    }

    draw_caption(&ctx, &state.gallery.caption(), card)?;
    Ok(canvas)
}

/// Restrict further drawing to the card's rounded rectangle.
fn clip_rounded(ctx: &CanvasRenderingContext2d, card: Size, radius: f64) -> Result<()> {
    let (w, h) = (card.width, card.height);
    ctx.begin_path();
    ctx.move_to(radius, 0.0);
    ctx.arc_to(w, 0.0, w, h, radius).map_err(browser_error)?;
    ctx.arc_to(w, h, 0.0, h, radius).map_err(browser_error)?;
    ctx.arc_to(0.0, h, 0.0, 0.0, radius).map_err(browser_error)?;
    ctx.arc_to(0.0, 0.0, w, 0.0, radius).map_err(browser_error)?;
    ctx.close_path();
    ctx.clip();
    Ok(())
}

fn draw_logo(
    ctx: &CanvasRenderingContext2d,
    logo: &HtmlImageElement,
    state: &ProductPageState,
    overlay: &OverlayConfig,
    card: Size,
) -> Result<()> {
    let natural = Size::new(
        f64::from(logo.natural_width()),
        f64::from(logo.natural_height()),
    );
    let rect = state
        .logo
        .anchor
        .place(card, natural, overlay.inset_px, overlay.max_width_fraction);

    ctx.save();
    ctx.set_global_alpha(state.logo.alpha());
    if state.logo.invert {
        ctx.set_filter("invert(1)");
    }
    ctx.set_shadow_color("rgba(0, 0, 0, 0.15)");
    ctx.set_shadow_blur(6.0);
    ctx.set_shadow_offset_y(3.0);
    let drawn = ctx.draw_image_with_html_image_element_and_dw_and_dh(
        logo,
        rect.x,
        rect.y,
        rect.width,
        rect.height,
    );
    ctx.restore();
    drawn.map_err(browser_error)
}

fn draw_caption(ctx: &CanvasRenderingContext2d, caption: &str, card: Size) -> Result<()> {
    ctx.set_font(PILL_FONT);
    let text_width = ctx.measure_text(caption).map_err(browser_error)?.width();
    let x = 12.0;
    let y = card.height - 12.0 - PILL_HEIGHT;

    ctx.set_fill_style_str("rgba(255, 255, 255, 0.8)");
    ctx.fill_rect(x, y, text_width + 2.0 * PILL_PADDING, PILL_HEIGHT);
    ctx.set_fill_style_str("#27272a");
    ctx.set_text_baseline("middle");
    ctx.fill_text(caption, x + PILL_PADDING, y + PILL_HEIGHT / 2.0)
        .map_err(browser_error)
}

fn find_image(root: &HtmlElement, selector: &str) -> Result<Option<HtmlImageElement>> {
    Ok(root
        .query_selector(selector)
        .map_err(browser_error)?
        .and_then(|el| el.dyn_into::<HtmlImageElement>().ok()))
}

/// Wait until the browser has the image bitmap ready for drawing.
async fn decoded(img: &HtmlImageElement) -> Result<()> {
    JsFuture::from(img.decode())
        .await
        .map(|_| ())
        .map_err(browser_error)
}
