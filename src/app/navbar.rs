use std::time::Duration;

use leptos::{ev, prelude::*};
use leptos_use::{use_document, use_event_listener, use_window_scroll, use_window_size};

use crate::config::SiteConfig;
use crate::content::SectionId;
use crate::motion::{active_section, Easing, NavState, NAV_TOP_THRESHOLD};
use crate::theme::{Theme, THEME_TRANSITION_MS};

use super::{use_portfolio, ScrollLock};

/// Document offsets of the sections currently on the page.
fn section_tops(scroll_y: f64) -> Vec<(SectionId, f64)> {
    let document = document();
    SectionId::ALL
        .into_iter()
        .filter_map(|section| {
            let el = document.get_element_by_id(section.id())?;
            Some((section, el.get_bounding_client_rect().top() + scroll_y))
        })
        .collect()
}

#[component]
pub fn Navbar() -> impl IntoView {
    let profile = &use_portfolio().profile;
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let hide_delay = Duration::from_millis(config.nav_hide_delay_ms);

    let nav = RwSignal::new(NavState::default());
    let lock = expect_context::<ScrollLock>();
    let menu_open = lock.menu;
    let hide_timer = StoredValue::new(None::<TimeoutHandle>);
    let (_, scroll_y) = use_window_scroll();
    let window_size = use_window_size();

    let clear_timer = move || {
        if let Some(Some(handle)) = hide_timer.try_update_value(Option::take) {
            handle.clear();
        }
    };

    // restarts the hide countdown, or just cancels it when `arm` is false
    let rearm = move |arm: bool| {
        clear_timer();
        if !arm {
            return;
        }
        match set_timeout_with_handle(
            move || {
                if !menu_open.get_untracked() {
                    nav.try_update(|n| n.hide());
                }
            },
            hide_delay,
        ) {
            Ok(handle) => hide_timer.set_value(Some(handle)),
            Err(e) => log::warn!("couldn't arm navbar hide timer: {e:?}"),
        }
    };

    Effect::new(move |_| {
        let y = scroll_y.get();
        let viewport_h = window_size.height.get();
        let measured = if y < NAV_TOP_THRESHOLD {
            None
        } else {
            active_section(y, viewport_h, &section_tops(y))
        };
        if let Some(arm) = nav.try_update(|n| n.on_scroll(y, measured)) {
            rearm(arm);
        }
    });
    on_cleanup(clear_timer);

    let on_activity = move || {
        if let Some(arm) = nav.try_update(|n| n.on_activity()) {
            rearm(arm);
        }
    };
    let _ = use_event_listener(use_document(), ev::mousemove, move |_| on_activity());
    let _ = use_event_listener(use_document(), ev::touchstart, move |_| on_activity());
    let _ = use_event_listener(use_document(), ev::mousedown, move |_| on_activity());
    let _ = use_event_listener(use_document(), ev::keydown, move |e| {
        if e.key() == "Escape" {
            menu_open.try_set(false);
        }
    });
    on_cleanup(move || {
        menu_open.try_set(false);
    });

    let nav_style = move || {
        format!(
            "transform: translateY({}); transition: transform 0.4s {};",
            if nav.with(|n| n.visible) { "0" } else { "-110%" },
            Easing::Smooth.css(),
        )
    };

    let links = move |mobile: bool| {
        SectionId::ALL
            .into_iter()
            .map(|section| {
                let is_active = move || nav.with(|n| n.active == section);
                view! {
                    <li>
                        <a
                            href=section.href()
                            class={
                                if mobile {
                                    "block py-3 text-2xl font-bold"
                                } else {
                                    "rounded-full px-3 py-1.5 text-sm font-medium transition-colors hover:bg-hover"
                                }
                            }
                            class:text-primary=is_active
                            aria-current=move || is_active().then_some("page")
                            on:click=move |_| {
                                menu_open.set(false);
                                nav.update(|n| n.set_active(section));
                            }
                        >
                            {section.label()}
                        </a>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <header class="fixed inset-x-0 top-0 z-50 px-4 pt-4" style=nav_style>
            <nav
                class="mx-auto flex max-w-6xl items-center justify-between rounded-full border border-border bg-background/80 px-5 py-2 backdrop-blur"
                aria-label="Primary"
            >
                <a href=SectionId::Home.href() class="text-lg font-black tracking-tight">
                    {profile.name.clone()}
                </a>
                <ul class="hidden items-center gap-1 md:flex">{links(false)}</ul>
                <div class="flex items-center gap-2">
                    <ThemeToggle />
                    <button
                        type="button"
                        class="rounded-full p-2 md:hidden"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| menu_open.update(|o| *o = !*o)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </nav>
            <Show when=move || menu_open.get()>
                <ul class="mx-auto mt-2 max-w-6xl rounded-3xl border border-border bg-background px-6 py-4 md:hidden">
                    {links(true)}
                </ul>
            </Show>
        </header>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();
    let transitioning = RwSignal::new(false);

    let toggle = move |_| {
        if transitioning.get_untracked() {
            return;
        }
        transitioning.set(true);
        theme.update(|t| *t = t.toggle());
        set_timeout(
            move || {
                transitioning.try_set(false);
            },
            Duration::from_millis(THEME_TRANSITION_MS),
        );
    };

    view! {
        <button
            type="button"
            class=move || {
                if transitioning.get() {
                    "rounded-full border border-border p-2 transition-transform duration-300 rotate-180"
                } else {
                    "rounded-full border border-border p-2 transition-transform duration-300"
                }
            }
            aria-label=move || theme.get().toggle_label()
            title=move || theme.get().toggle_label()
            on:click=toggle
        >
            {move || match theme.get() {
                Theme::Dark => "☀",
                Theme::Light => "☾",
            }}
        </button>
    }
}
