use expoten::{LogoAnchor, ProductPageState};
use leptos::ev;
use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser::files::{read_all, read_as_data_url, take_files};

/// Photo and logo uploads plus the logo display controls.
#[component]
pub fn UploadPanel(state: RwSignal<ProductPageState>) -> impl IntoView {
    let photos_input = NodeRef::<Input>::new();
    let logo_input = NodeRef::<Input>::new();

    let on_photos = move |_: ev::Event| {
        let files = take_files(photos_input);
        if files.is_empty() {
            return;
        }
        spawn_local(async move {
            match read_all(files).await {
                Ok(urls) => state.update(|s| s.add_photos(urls)),
                Err(e) => tracing::warn!("photo upload failed: {e}"),
            }
        });
    };

    let on_logo = move |_: ev::Event| {
        let Some(file) = take_files(logo_input).into_iter().next() else {
            return;
        };
        spawn_local(async move {
            match read_as_data_url(file).await {
                Ok(url) => state.update(|s| s.set_logo(url)),
                Err(e) => tracing::warn!("logo upload failed: {e}"),
            }
        });
    };

    view! {
        <div class="panel">
            <div class="panel-title">"Добавить фотографии"</div>
            <input node_ref=photos_input type="file" accept="image/*" multiple on:change=on_photos />
            <div class="panel-hint">"Можно загрузить несколько; они появятся в карусели."</div>
            <hr class="panel-rule" />
            <div class="panel-title">"Добавить логотип"</div>
            <input node_ref=logo_input type="file" accept="image/*,.svg" on:change=on_logo />
            <Show when=move || state.with(|s| s.logo.is_visible())>
                <LogoControls state=state />
            </Show>
        </div>
    }
}

#[component]
fn LogoControls(state: RwSignal<ProductPageState>) -> impl IntoView {
    let on_opacity = move |ev: ev::Event| {
        if let Ok(percent) = event_target_value(&ev).parse::<u8>() {
            state.update(|s| s.logo.set_opacity(percent));
        }
    };
    let on_invert = move |ev: ev::Event| {
        let checked = event_target_checked(&ev);
        state.update(|s| s.logo.invert = checked);
    };
    let on_anchor = move |ev: ev::Event| match event_target_value(&ev).parse::<LogoAnchor>() {
        Ok(anchor) => state.update(|s| s.logo.anchor = anchor),
        Err(e) => tracing::warn!("{e}"),
    };

    view! {
        <div class="logo-controls">
            <label class="control">
                "Непрозрачность"
                <input
                    type="range"
                    min="0"
                    max="100"
                    prop:value=move || state.with(|s| s.logo.opacity().to_string())
                    on:input=on_opacity
                />
            </label>
            <label class="control">
                "Инверсия"
                <input
                    type="checkbox"
                    prop:checked=move || state.with(|s| s.logo.invert)
                    on:change=on_invert
                />
            </label>
            <label class="control control-wide">
                "Позиция"
                // Selection lives on the options: the select has no options yet
                // when its own properties are applied
                <select on:change=on_anchor>
                    {LogoAnchor::ALL
                        .into_iter()
                        .map(|anchor| {
                            view! {
                                <option
                                    value=anchor.as_str()
                                    prop:selected=anchor_selected(state, anchor)
                                >
                                    {anchor.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            <button class="btn btn-outline control-wide" on:click=move |_| state.update(|s| s.clear_logo())>
                "Сбросить логотип"
            </button>
        </div>
    }
}

fn anchor_selected(
    state: RwSignal<ProductPageState>,
    anchor: LogoAnchor,
) -> impl Fn() -> bool + Send + Sync + Copy + 'static {
    move || state.with(|s| s.logo.anchor == anchor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remounted_select_follows_kept_anchor() {
        let state = RwSignal::new(ProductPageState::default());
        state.update(|s| {
            s.set_logo("data:image/png;base64,AA==".into());
            s.logo.anchor = LogoAnchor::Center;
            s.clear_logo();
            s.set_logo("data:image/png;base64,BB==".into());
        });

        let selected: Vec<LogoAnchor> = LogoAnchor::ALL
            .into_iter()
            .filter(|a| anchor_selected(state, *a)())
            .collect();
        assert_eq!(selected, vec![LogoAnchor::Center]);
    }
}
