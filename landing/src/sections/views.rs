use expoten::{ProductPageState, VIEW_TILES};
use leptos::ev;
use leptos::prelude::*;

/// Four "Вид №" tiles; tile `v` always shows photo `v mod N`.
#[component]
pub fn Views(state: RwSignal<ProductPageState>) -> impl IntoView {
    view! {
        <div class="views">
            {(0..VIEW_TILES)
                .map(|tile| {
                    let src = move || {
                        state.with(|s| s.gallery.view_src(tile).unwrap_or_default().to_string())
                    };
                    let open = move |_: ev::MouseEvent| {
                        state.update(|s| {
                            if let Some(index) = s.gallery.view_index(tile) {
                                s.gallery.select(index);
                            }
                        })
                    };
                    view! {
                        <button class="view-tile" on:click=open>
                            <div class="view-tile-image">
                                <img src=src alt=format!("view-{}", tile + 1) crossorigin="anonymous" />
                            </div>
                            <div class="view-tile-label">{format!("Вид №{}", tile + 1)}</div>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
