// EXPOTEN product page, Leptos 0.8 CSR

mod browser;
mod logging;
mod sections;

use std::sync::LazyLock;

use expoten::{BrandConfig, ProductPageState};
use leptos::html::Div;
use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use sections::*;

// Parse errors are kept until logging is up, then reported from `main`
static BRAND: LazyLock<Result<BrandConfig, String>> =
    LazyLock::new(|| BrandConfig::try_embedded().map_err(|e| e.to_string()));
static FALLBACK: LazyLock<BrandConfig> = LazyLock::new(BrandConfig::default);

fn brand() -> &'static BrandConfig {
    brand_or(&BRAND, &FALLBACK)
}

fn brand_or<'a>(
    loaded: &'a Result<BrandConfig, String>,
    fallback: &'a BrandConfig,
) -> &'a BrandConfig {
    loaded.as_ref().unwrap_or(fallback)
}

fn main() {
    console_error_panic_hook::set_once();
    logging::init(&brand().logging.level);
    if let Err(e) = &*BRAND {
        tracing::warn!("embedded brand.toml rejected, using defaults: {e}");
    }
    tracing::info!(images = brand().gallery.default_images.len(), "mounting product page");
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    provide_meta_context();
    let config = brand();
    let state = RwSignal::new(ProductPageState::new(config));
    let hero_ref = NodeRef::<Div>::new();

    view! {
        <Title text=config.brand.document_title.as_str() />
        <Meta name="description" content=config.brand.document_description.as_str() />
        <Header config=config />
        <main class="page">
            <section class="page-primary">
                <Hero state=state config=config hero_ref=hero_ref />
                <Thumbnails state=state />
                <CctScale />
                <Views state=state />
                <ExportBar state=state config=config hero_ref=hero_ref />
            </section>
            <aside class="page-aside">
                <UploadPanel state=state />
                <RightBlocks state=state />
                <Contacts state=state config=config />
            </aside>
        </main>
        <Footer config=config />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_config_falls_back_to_defaults() {
        let fallback = BrandConfig::default();
        let rejected: Result<BrandConfig, String> = Err("bad toml".into());
        assert_eq!(brand_or(&rejected, &fallback), &fallback);

        let mut custom = BrandConfig::default();
        custom.logging.level = "debug".into();
        let loaded = Ok(custom);
        assert_eq!(brand_or(&loaded, &fallback).logging.level, "debug");
    }
}
