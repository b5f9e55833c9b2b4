use expoten::ProductPageState;
use leptos::ev;
use leptos::prelude::*;

/// Optional photo groups cut from the gallery.
#[component]
pub fn RightBlocks(state: RwSignal<ProductPageState>) -> impl IntoView {
    let on_toggle = move |ev: ev::Event| {
        let checked = event_target_checked(&ev);
        state.update(|s| s.show_right_blocks = checked);
    };
    // Only a new upload changes these groups; slider drags and toggles must not
    // rebuild the images
    let revision = Memo::new(move |_| state.with(|s| s.gallery.revision()));
    let with_background = Memo::new(move |_| {
        revision.track();
        state.with_untracked(|s| s.gallery.with_background().to_vec())
    });
    let no_background = Memo::new(move |_| {
        revision.track();
        state.with_untracked(|s| s.gallery.no_background().to_vec())
    });

    view! {
        <div class="panel">
            <div class="panel-row">
                <div class="panel-title">"Доп. фотоблоки справа"</div>
                <label class="control">
                    <input
                        type="checkbox"
                        prop:checked=move || state.with(|s| s.show_right_blocks)
                        on:change=on_toggle
                    />
                    " Показать"
                </label>
            </div>
            <Show when=move || state.with(|s| s.show_right_blocks)>
                <PhotoGroup title="Фотографии с фоном" alt_prefix="bg" photos=with_background.into() />
                <PhotoGroup title="Фотографии без фона/макро" alt_prefix="nobg" photos=no_background.into() />
            </Show>
        </div>
    }
}

#[component]
fn PhotoGroup(
    title: &'static str,
    alt_prefix: &'static str,
    photos: Signal<Vec<String>>,
) -> impl IntoView {
    view! {
        <div class="photo-group">
            <div class="panel-hint">{title}</div>
            <div class="photo-group-grid">
                {move || {
                    photos
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(i, src)| {
                            view! {
                                <img class="photo-group-img" src=src alt=format!("{alt_prefix}-{i}") crossorigin="anonymous" />
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
