use leptos::prelude::*;
use leptos_use::{use_window_scroll, use_window_size};

use crate::config::SiteConfig;
use crate::motion::map_range;

use super::use_portfolio;

/// Share of the page scrolled, 0 at the top and 1 at the bottom.
fn page_progress(scroll_y: f64, document_h: f64, viewport_h: f64) -> f64 {
    let range = document_h - viewport_h;
    if range <= 0.0 {
        return 0.0;
    }
    (scroll_y / range).clamp(0.0, 1.0)
}

/// Back-to-top visibility: fades in across the last quarter of the page.
fn back_to_top_opacity(progress: f64) -> f64 {
    map_range(progress, (0.75, 1.0), (0.0, 1.0))
}

#[component]
pub fn Footer() -> impl IntoView {
    let portfolio = use_portfolio();
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let (_, scroll_y) = use_window_scroll();
    let window_size = use_window_size();

    let opacity = RwSignal::new(0.0);

    // effects only run in the browser, where the document can be measured
    Effect::new(move |_| {
        let y = scroll_y.get();
        let viewport_h = window_size.height.get();
        let document_h = document()
            .document_element()
            .map(|el| el.scroll_height() as f64)
            .unwrap_or_default();
        opacity.set(back_to_top_opacity(page_progress(y, document_h, viewport_h)));
    });

    let socials = portfolio
        .socials
        .iter()
        .map(|social| {
            view! {
                <li>
                    <a
                        href=social.href.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label=social.label.clone()
                        class="flex h-10 w-10 items-center justify-center rounded-full border border-border text-lg transition-colors hover:bg-hover"
                    >
                        <i class=social.icon.clone()></i>
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <footer class="relative border-t border-border px-6 py-10">
            <div class="mx-auto flex max-w-6xl flex-col items-center justify-between gap-6 md:flex-row">
                <p class="text-sm text-muted-foreground">
                    {format!("© {} {}. All rights reserved.", config.copyright_year(), portfolio.profile.name)}
                </p>
                <ul class="flex gap-3">{socials}</ul>
            </div>
            <button
                type="button"
                aria-label="Back to top"
                class="fixed bottom-6 right-6 z-40 flex h-11 w-11 items-center justify-center rounded-full bg-primary text-primary-foreground shadow-lg transition-opacity duration-300"
                style=move || format!("opacity: {};", opacity.get())
                class:pointer-events-none=move || opacity.get() <= 0.0
                on:click=move |_| window().scroll_to_with_x_and_y(0.0, 0.0)
            >
                "↑"
            </button>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_to_top_hidden_until_three_quarters() {
        assert_eq!(back_to_top_opacity(page_progress(0.0, 4000.0, 1000.0)), 0.0);
        assert_eq!(back_to_top_opacity(page_progress(2250.0, 4000.0, 1000.0)), 0.0);
        assert!((back_to_top_opacity(page_progress(2625.0, 4000.0, 1000.0)) - 0.5).abs() < 1e-9);
        assert_eq!(back_to_top_opacity(page_progress(3000.0, 4000.0, 1000.0)), 1.0);
    }

    #[test]
    fn test_short_page_has_no_progress() {
        assert_eq!(page_progress(0.0, 800.0, 1000.0), 0.0);
    }
}
