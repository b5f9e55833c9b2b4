use expoten::{BrandConfig, ProductPageState};
use leptos::ev;
use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser::files::{read_as_data_url, take_files};

/// Contact lines over an optional uploaded background.
#[component]
pub fn Contacts(state: RwSignal<ProductPageState>, config: &'static BrandConfig) -> impl IntoView {
    let background_input = NodeRef::<Input>::new();
    let brand = &config.brand;

    let on_background = move |_: ev::Event| {
        let Some(file) = take_files(background_input).into_iter().next() else {
            return;
        };
        spawn_local(async move {
            match read_as_data_url(file).await {
                Ok(url) => state.update(|s| s.set_contacts_background(url)),
                Err(e) => tracing::warn!("contacts background upload failed: {e}"),
            }
        });
    };

    view! {
        <div class="panel contacts">
            <div class="contacts-head">
                <div class="panel-title">"Фон секции контактов"</div>
                <input node_ref=background_input type="file" accept="image/*" on:change=on_background />
            </div>
            <div class="contacts-body">
                {move || {
                    state
                        .with(|s| s.contacts_background.clone())
                        .map(|src| view! { <img class="contacts-bg" src=src alt="contacts-bg" /> })
                }}
                <div class="contacts-veil">
                    <div class="contacts-lines">
                        <div>
                            <span class="muted">"Сайт:"</span>
                            " "
                            <a href=brand.site_url.as_str() target="_blank" rel="noreferrer">
                                {brand.site_label.as_str()}
                            </a>
                        </div>
                        <div>
                            <span class="muted">"Тел.:"</span>
                            " "
                            <a href=brand.phone_href.as_str()>{brand.phone_label.as_str()}</a>
                        </div>
                        <div>
                            <span class="muted">"ИНН:"</span>
                            " "
                            {brand.inn_line.as_str()}
                        </div>
                        <div class="contacts-company">{brand.company_line.as_str()}</div>
                    </div>
                </div>
            </div>
        </div>
    }
}
