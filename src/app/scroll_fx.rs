use std::time::Duration;

use leptos::{html, prelude::*};
use leptos_use::{use_element_bounding, use_window_size, UseElementBoundingReturn};

use crate::content::HeroSlide;
use crate::motion::{
    pinned_progress, snap_positions, BgTransition, Easing, FxDurations, RailSide, ScrollFx,
};

use super::use_reduced_motion;

const RAIL_ROW_EM: f64 = 2.2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FxColors {
    pub text: &'static str,
    pub overlay: &'static str,
    pub page_bg: &'static str,
    pub stage_bg: &'static str,
}

impl Default for FxColors {
    fn default() -> Self {
        Self {
            text: "rgba(230,237,243,0.92)",
            overlay: "rgba(11,15,20,0.45)",
            page_bg: "#0B0F14",
            stage_bg: "#121821",
        }
    }
}

/// Commits a started transition once its animation is over and releases the
/// scroll snap lock. Timers firing after unmount are no-ops.
fn settle(fx: RwSignal<ScrollFx>, with_scroll: bool) {
    let Some((change, release)) =
        fx.try_with_untracked(|f| (f.durations().change, f.snap_release_ms(with_scroll)))
    else {
        return;
    };
    set_timeout(
        move || {
            fx.try_update(|f| f.finish_transition());
        },
        Duration::from_secs_f64(change),
    );
    set_timeout(
        move || {
            fx.try_update(|f| f.finish_snap());
        },
        Duration::from_millis(release),
    );
}

/// Full-screen pinned slideshow. The stage sticks to the viewport while the
/// page scrolls through a region one viewport tall per slide; each step swaps
/// background, title words and the highlighted rail labels together.
#[component]
pub fn FullScreenScrollFx(
    slides: Vec<HeroSlide>,
    #[prop(optional)] durations: FxDurations,
    #[prop(optional)] bg_transition: BgTransition,
    #[prop(default = 4.0)] parallax: f64,
    #[prop(optional)] initial: usize,
    #[prop(optional)] colors: FxColors,
    #[prop(default = true)] show_progress: bool,
    #[prop(default = "Full screen scroll slideshow")] aria_label: &'static str,
    #[prop(into)] footer: String,
    children: Children,
) -> impl IntoView {
    let total = slides.len();
    let fx = RwSignal::new(
        ScrollFx::new(total, initial, durations, false).with_background(bg_transition, parallax),
    );
    let reduced_motion = use_reduced_motion();
    Effect::new(move |_| {
        let reduce = reduced_motion.get();
        fx.update(|f| f.set_reduce_motion(reduce));
    });

    let region_ref = NodeRef::<html::Div>::new();
    let UseElementBoundingReturn { top, height, .. } = use_element_bounding(region_ref);
    let window_size = use_window_size();

    Effect::new(move |_| {
        let progress = pinned_progress(top.get(), height.get(), window_size.height.get());
        if !fx.try_with_untracked(|f| f.steps_on(progress)).unwrap_or(false) {
            return;
        }
        if let Some(Some(t)) = fx.try_update(|f| f.on_progress(progress)) {
            log::debug!("scroll fx {} -> {}", t.from, t.to);
            settle(fx, false);
        }
    });

    let jump = move |to: usize| {
        if fx.try_update(|f| f.go_to(to)).flatten().is_none() {
            return;
        }
        settle(fx, true);
        let Some(region) = region_ref.get_untracked() else {
            return;
        };
        let scroll_y = window().scroll_y().unwrap_or_default();
        let region_top = region.get_bounding_client_rect().top() + scroll_y;
        let positions = snap_positions(region_top, region.offset_height() as f64, total);
        if let Some(pos) = positions.get(to) {
            window().scroll_to_with_x_and_y(0.0, *pos);
        }
    };

    let d = durations.change;
    let track_style = move || {
        let index = fx.with(|f| f.displayed());
        format!(
            "top: 50%; transform: translateY({}em); transition: transform {}s {};",
            ScrollFx::rail_offset(0.0, RAIL_ROW_EM, index),
            d * 0.9,
            Easing::Power3Out.css(),
        )
    };

    let backgrounds = slides
        .iter()
        .enumerate()
        .map(|(i, slide)| {
            let image_filter = slide.image_filter.clone().unwrap_or_default();
            let overlay = slide
                .overlay
                .clone()
                .unwrap_or_else(|| colors.overlay.to_string());
            let background = slide.background.clone();
            view! {
                <div
                    class="absolute inset-0 will-change-transform"
                    style=move || fx.with(|f| f.background_pose(i).style())
                >
                    <img
                        src=background
                        alt=""
                        class="absolute inset-0 h-full w-full object-cover"
                        style=format!("filter: {image_filter};")
                        loading=if i == 0 { "eager" } else { "lazy" }
                    />
                    <div class="absolute inset-0" style=format!("background: {overlay};")></div>
                </div>
            }
        })
        .collect_view();

    let titles = slides
        .iter()
        .enumerate()
        .map(|(i, slide)| {
            let words = slide
                .words()
                .into_iter()
                .map(str::to_string)
                .collect::<Vec<_>>();
            let count = words.len();
            let words = words
                .into_iter()
                .enumerate()
                .map(|(w, word)| {
                    view! {
                        <span class="inline-block overflow-hidden align-bottom">
                            <span style=move || fx.with(|f| f.word_pose(i, w, count).style())>
                                {word}
                            </span>
                        </span>
                        {(w + 1 < count).then_some(" ")}
                    }
                })
                .collect_view();
            view! {
                <h3
                    class="absolute inset-x-0 text-center font-black leading-none"
                    style="font-size: clamp(2.6rem, 7vw, 6.2rem);"
                    aria-hidden=move || (fx.with(|f| f.displayed()) != i).to_string()
                >
                    {words}
                </h3>
            }
        })
        .collect_view();

    let rail = move |side: RailSide| {
        slides
            .iter()
            .enumerate()
            .map(|(i, slide)| {
                let label = match side {
                    RailSide::Left => slide.left_label.clone(),
                    RailSide::Right => slide.right_label.clone(),
                };
                view! {
                    <li style=format!("height: {RAIL_ROW_EM}em;")>
                        <button
                            type="button"
                            class="uppercase tracking-[0.2em] cursor-pointer"
                            class:active=move || fx.with(|f| f.rail_pose(i, side).active)
                            style=move || fx.with(|f| f.rail_pose(i, side).style())
                            on:click=move |_| jump(i)
                        >
                            {label}
                        </button>
                    </li>
                }
            })
            .collect_view()
    };
    let left_rail = rail(RailSide::Left);
    let right_rail = rail(RailSide::Right);

    let counter = move || ScrollFx::counter_label(fx.with(|f| f.displayed()));
    let total_label = ScrollFx::counter_label(total.saturating_sub(1));
    let progress_style = move || {
        format!(
            "width: {}%; transition: width {d}s {};",
            fx.with(|f| f.progress_percent()),
            Easing::Power3Out.css(),
        )
    };

    view! {
        <div
            node_ref=region_ref
            class="relative"
            style=format!(
                "height: {}vh; background: {}; color: {};",
                total.max(1) * 100,
                colors.page_bg,
                colors.text,
            )
            role="region"
            aria-label=aria_label
        >
            <div
                class="sticky top-0 h-screen w-full overflow-hidden"
                style=format!("background: {};", colors.stage_bg)
            >
                {backgrounds}
                <div class="relative z-10 grid h-full grid-rows-[auto_1fr_auto] px-8 pt-28 pb-8">
                    <div>{children()}</div>
                    <div class="relative grid grid-cols-[1fr_3fr_1fr] items-center">
                        <div class="relative h-full overflow-hidden text-left" style="font-size: clamp(0.9rem, 1.8vw, 1.4rem);">
                            <ul class="absolute inset-x-0" style=track_style>
                                {left_rail}
                            </ul>
                        </div>
                        <div class="relative h-full flex items-center">
                            <div class="relative w-full" style="height: 1.1em; font-size: clamp(2.6rem, 7vw, 6.2rem);">
                                {titles}
                            </div>
                        </div>
                        <div class="relative h-full overflow-hidden text-right" style="font-size: clamp(0.9rem, 1.8vw, 1.4rem);">
                            <ul class="absolute inset-x-0" style=track_style>
                                {right_rail}
                            </ul>
                        </div>
                    </div>
                    <div class="flex items-end justify-between gap-6">
                        <div class="font-bold" style="font-size: clamp(1.1rem, 3.6vw, 2.8rem);">
                            {footer}
                        </div>
                        <Show when=move || show_progress>
                            <div class="flex min-w-48 items-center gap-3 font-mono text-sm">
                                <span>{counter}</span>
                                <div class="relative h-px flex-1 bg-white/20">
                                    <div class="absolute inset-y-0 left-0 bg-white" style=progress_style></div>
                                </div>
                                <span>{total_label.clone()}</span>
                            </div>
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}
