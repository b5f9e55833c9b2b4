use expoten::{BrandConfig, ProductPageState};
use leptos::html::Div;
use leptos::prelude::*;

/// The card that gets exported: active photo, optional logo, counter and arrows.
#[component]
pub fn Hero(
    state: RwSignal<ProductPageState>,
    config: &'static BrandConfig,
    hero_ref: NodeRef<Div>,
) -> impl IntoView {
    let photo = move || state.with(|s| s.gallery.active_src().unwrap_or_default().to_string());
    let caption = move || state.with(|s| s.gallery.caption());
    let logo_src = move || state.with(|s| s.logo.data().unwrap_or_default().to_string());
    let logo_style = move || state.with(|s| s.logo.css_style(&config.overlay));

    view! {
        <div node_ref=hero_ref class="hero-card">
            <img class="hero-photo" src=photo alt="Светильник" crossorigin="anonymous" />
            <Show when=move || state.with(|s| s.logo.is_visible())>
                <img class="hero-logo" src=logo_src style=logo_style alt="Логотип партнёра" />
            </Show>
            <div class="hero-bar">
                <div class="hero-caption">{caption}</div>
                <div class="hero-nav">
                    <button class="hero-nav-btn" on:click=move |_| state.update(|s| s.gallery.prev())>
                        "←"
                    </button>
                    <button class="hero-nav-btn" on:click=move |_| state.update(|s| s.gallery.next())>
                        "→"
                    </button>
                </div>
            </div>
        </div>
    }
}
