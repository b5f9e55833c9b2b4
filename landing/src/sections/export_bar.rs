use expoten::{BrandConfig, ExportFormat, ProductPageState};
use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser::export_card;

#[component]
pub fn ExportBar(
    state: RwSignal<ProductPageState>,
    config: &'static BrandConfig,
    hero_ref: NodeRef<Div>,
) -> impl IntoView {
    let export = move |format: ExportFormat| {
        // Nothing rendered yet, nothing to export
        let Some(hero) = hero_ref.get() else {
            return;
        };
        let snapshot = state.get_untracked();
        spawn_local(async move {
            if let Err(e) = export_card(format, hero.into(), snapshot, config).await {
                tracing::error!(
                    file = format.filename(&config.export),
                    "card export failed: {e}"
                );
            }
        });
    };

    view! {
        <div class="export-bar">
            <button class="btn btn-primary" on:click=move |_| export(ExportFormat::Jpg)>
                "Скачать JPG"
            </button>
            <button class="btn btn-secondary" on:click=move |_| export(ExportFormat::Pdf)>
                "Скачать PDF"
            </button>
        </div>
    }
}
