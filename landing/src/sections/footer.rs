use expoten::{BrandConfig, run_self_checks};
use leptos::prelude::*;

#[component]
pub fn Footer(config: &'static BrandConfig) -> impl IntoView {
    let checks = run_self_checks(config);
    view! {
        <footer class="site-footer">
            <div class="badges">
                {checks
                    .into_iter()
                    .map(|check| view! { <CheckBadge ok=check.ok label=check.label /> })
                    .collect_view()}
            </div>
            <p class="footer-copyright">{config.brand.copyright.as_str()}</p>
        </footer>
    }
}

#[component]
fn CheckBadge(ok: bool, label: &'static str) -> impl IntoView {
    view! { <div class=badge_class(ok)>{badge_mark(ok)} " " {label}</div> }
}

fn badge_class(ok: bool) -> &'static str {
    if ok { "badge badge-ok" } else { "badge badge-fail" }
}

fn badge_mark(ok: bool) -> &'static str {
    if ok { "✓" } else { "✕" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_reflects_result() {
        assert_eq!(badge_class(true), "badge badge-ok");
        assert_eq!(badge_mark(true), "✓");
        assert_eq!(badge_class(false), "badge badge-fail");
        assert_eq!(badge_mark(false), "✕");
    }
}
