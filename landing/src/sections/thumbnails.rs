use expoten::ProductPageState;
use leptos::prelude::*;

#[component]
pub fn Thumbnails(state: RwSignal<ProductPageState>) -> impl IntoView {
    // Keyed on the gallery revision so slider drags and toggles neither copy
    // the sources nor rebuild the strip
    let revision = Memo::new(move |_| state.with(|s| s.gallery.revision()));
    let images = move || {
        revision.track();
        state.with_untracked(|s| s.gallery.images().to_vec())
    };
    let active = Memo::new(move |_| state.with(|s| s.gallery.active()));

    view! {
        <div class="thumbs">
            <For
                each=move || images().into_iter().enumerate()
                key=|(i, src)| (*i, src.clone())
                children=move |(i, src)| {
                    view! {
                        <button
                            class=move || thumb_class(active.get() == i)
                            on:click=move |_| state.update(|s| s.gallery.select(i))
                        >
                            <img src=src alt="thumb" crossorigin="anonymous" />
                        </button>
                    }
                }
            />
        </div>
    }
}

fn thumb_class(active: bool) -> &'static str {
    if active { "thumb active" } else { "thumb" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_active_thumb_is_highlighted() {
        assert_eq!(thumb_class(true), "thumb active");
        assert_eq!(thumb_class(false), "thumb");
    }
}
