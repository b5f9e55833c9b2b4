use expoten::BrandConfig;
use leptos::prelude::*;

#[component]
pub fn Header(config: &'static BrandConfig) -> impl IntoView {
    let brand = &config.brand;
    view! {
        <header class="site-header">
            <div class="site-header-inner">
                <BrandMark name=brand.name.as_str() tagline=brand.tagline.as_str() />
                <div class="site-header-links">
                    <a href=brand.site_url.as_str() target="_blank" rel="noreferrer">
                        {brand.site_label.as_str()}
                    </a>
                    <span class="sep">"|"</span>
                    <a href=brand.phone_href.as_str()>{brand.phone_label.as_str()}</a>
                </div>
            </div>
        </header>
    }
}

/// Green bracket mark next to the brand name.
#[component]
fn BrandMark(name: &'static str, tagline: &'static str) -> impl IntoView {
    view! {
        <div class="brand">
            <svg width="36" height="28" viewBox="0 0 36 28" fill="none" xmlns="http://www.w3.org/2000/svg">
                <path d="M2 6C2 3.79086 3.79086 2 6 2H22" stroke="#2BC26B" stroke-width="3" stroke-linecap="round" />
                <path d="M2 22C2 24.2091 3.79086 26 6 26H22" stroke="#2BC26B" stroke-width="3" stroke-linecap="round" />
                <path d="M2 6V22" stroke="#2BC26B" stroke-width="3" stroke-linecap="round" />
            </svg>
            <div class="brand-text">
                <div class="brand-name">{name}</div>
                <div class="brand-tagline">{tagline}</div>
            </div>
        </div>
    }
}
