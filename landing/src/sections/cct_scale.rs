use expoten::{CCT_SEGMENTS, CctSegment};
use leptos::prelude::*;

/// Colour temperature strip; a segment is outlined while hovered.
#[component]
pub fn CctScale() -> impl IntoView {
    let (hovered, set_hovered) = signal(None::<usize>);

    view! {
        <div class="cct">
            <div class="cct-title">"Цветовая температура (CCT)"</div>
            <div class="cct-grid">
                {CCT_SEGMENTS
                    .iter()
                    .enumerate()
                    .map(|(i, segment)| {
                        view! {
                            <button
                                class=move || segment_class(segment, hovered.get() == Some(i))
                                title=segment.title()
                                on:mouseenter=move |_| set_hovered.set(Some(i))
                                on:mouseleave=move |_| set_hovered.set(None)
                            >
                                <div class="cct-kelvin">{format!("{}K", segment.kelvin)}</div>
                                <div class="cct-label">{segment.label}</div>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

fn segment_class(segment: &CctSegment, hovered: bool) -> String {
    if hovered {
        format!("cct-segment {} hovered", segment.tint)
    } else {
        format!("cct-segment {}", segment.tint)
    }
}
