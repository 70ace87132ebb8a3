use std::time::Duration;

use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::motion::{Easing, LoaderTimeline};

use super::use_reduced_motion;

const TEXT_COLOR: &str = "#0B0F14";
const LINE_COLOR: &str = "#ffffff";

#[component]
pub fn Loader(text: &'static str, on_complete: Callback<()>) -> impl IntoView {
    let mobile = use_media_query("(max-width: 767px)");
    let reduced_motion = use_reduced_motion();
    let timeline = Memo::new(move |_| LoaderTimeline::new(text, mobile.get()));
    let started = RwSignal::new(false);

    Effect::new(move |_| {
        if reduced_motion.get_untracked() {
            on_complete.run(());
            return;
        }
        // let the first frame paint the resting pose so transitions fire
        request_animation_frame(move || {
            started.try_set(true);
        });
        let total = timeline.with_untracked(|t| t.total_duration());
        set_timeout(
            move || on_complete.run(()),
            Duration::from_secs_f64(total),
        );
    });

    let ease_out = Easing::Power2Out.css();
    let ease_in_out = Easing::Power2InOut.css();

    let overlay_style = move || {
        timeline.with(|t| {
            format!(
                "opacity: {}; transition: opacity {}s linear {}s;",
                if started.get() { 0 } else { 1 },
                t.overlay_fade_duration(),
                t.overlay_fade_start(),
            )
        })
    };

    let lines = move || {
        let ease_in_out = ease_in_out.clone();
        timeline.with(|t| {
            let width = t.line_width_percent();
            let duration = t.line_duration();
            t.line_starts()
                .into_iter()
                .map(|delay| {
                    let ease_in_out = ease_in_out.clone();
                    view! {
                        <div
                            class="h-full"
                            style=move || {
                                format!(
                                    "background-color: {LINE_COLOR}; width: {width}%; transform: translateY({}); transition: transform {duration}s {ease_in_out} {delay}s;",
                                    if started.get() { "-100%" } else { "0%" },
                                )
                            }
                        ></div>
                    }
                })
                .collect_view()
        })
    };

    let letters = move || {
        let ease_out = ease_out.clone();
        timeline.with(|t| {
            let fade_start = t.text_fade_start();
            let fade = t.text_fade_duration();
            let rise = t.letter_duration();
            t.letters()
                .into_iter()
                .enumerate()
                .map(|(i, c)| {
                    let delay = t.letter_delay(i);
                    let ease_out = ease_out.clone();
                    let c = if c == ' ' { '\u{00A0}' } else { c };
                    view! {
                        <span
                            class="inline-block"
                            style=move || {
                                let shown = started.get();
                                format!(
                                    "transform: translateY({}); opacity: {}; transition: transform {rise}s {ease_out} {delay}s, opacity {fade}s linear {fade_start}s;",
                                    if shown { "0%" } else { "100%" },
                                    if shown { 0 } else { 1 },
                                )
                            }
                        >
                            {c.to_string()}
                        </span>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div
            class="fixed inset-0 z-[200] flex overflow-hidden pointer-events-none"
            style=overlay_style
            aria-hidden="true"
        >
            {lines}
            <div class="absolute inset-0 flex items-center justify-center px-4">
                <div class="overflow-hidden">
                    <p
                        class="flex whitespace-nowrap tracking-tight uppercase font-bold leading-none"
                        style=format!("font-size: clamp(1.1rem, 5.2vw, 6.25rem); color: {TEXT_COLOR};")
                    >
                        {letters}
                    </p>
                </div>
            </div>
            <p class="absolute bottom-4 right-4 text-[10px] uppercase tracking-wide text-black/70 md:hidden">
                "Best experienced on desktop."
            </p>
        </div>
    }
}
