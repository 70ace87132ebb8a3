use leptos::{html, prelude::*};
use leptos_use::{use_element_bounding, use_media_query, use_window_size, UseElementBoundingReturn};

use crate::content::ExperienceEntry;
use crate::motion::{pinned_progress, rail_fill_percent, timeline_index, Easing, RevealDirection};

use super::reveal::ScrollReveal;
use super::use_portfolio;

#[component]
pub fn Experience() -> impl IntoView {
    let entries = &use_portfolio().experiences;
    let stacked = entries.clone();
    let pinned = entries.clone();
    let desktop = use_media_query("(min-width: 1024px)");

    view! {
        <div class="mx-auto max-w-6xl px-6 pt-24 md:pt-32">
            <ScrollReveal blur=true class="mb-12 text-center">
                <span class="text-xs uppercase tracking-[0.4em] text-primary">"Journey"</span>
                <h2 class="mt-2 text-4xl md:text-5xl font-black">"Experience"</h2>
            </ScrollReveal>
        </div>
        <Show
            when=move || desktop.get()
            fallback=move || view! { <StackedTimeline entries=stacked.clone() /> }
        >
            <PinnedTimeline entries=pinned.clone() />
        </Show>
    }
}

/// Desktop layout: the timeline pins while the page scrolls through one
/// viewport per entry, and the entry owning the current share is highlighted.
#[component]
fn PinnedTimeline(entries: Vec<ExperienceEntry>) -> impl IntoView {
    let count = entries.len();
    let region_ref = NodeRef::<html::Div>::new();
    let UseElementBoundingReturn { top, height, .. } = use_element_bounding(region_ref);
    let window_size = use_window_size();

    let progress =
        Memo::new(move |_| pinned_progress(top.get(), height.get(), window_size.height.get()));
    let active = Memo::new(move |_| timeline_index(progress.get(), count));

    let ease = Easing::Card.css();
    let rail_style = {
        let ease = ease.clone();
        move || {
            format!(
                "height: {}%; transition: height 0.5s {ease};",
                rail_fill_percent(progress.get(), count),
            )
        }
    };

    let cards = entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            let ease = ease.clone();
            let left = i % 2 == 0;
            let card_style = move || {
                let on = active.get() == i;
                format!(
                    "opacity: {}; transform: translateX({}px) scale({}); transition: opacity 0.5s {ease}, transform 0.5s {ease};",
                    if on { 1.0 } else { 0.35 },
                    match (on, left) {
                        (true, _) => 0,
                        (false, true) => -24,
                        (false, false) => 24,
                    },
                    if on { 1.0 } else { 0.96 },
                )
            };
            view! {
                <li
                    class="relative grid grid-cols-2 gap-16"
                    aria-current=move || (active.get() == i).then_some("step")
                >
                    <span
                        class="absolute left-1/2 top-6 h-3 w-3 -translate-x-1/2 rounded-full border-2 border-primary transition-colors duration-300"
                        class:bg-primary={move || active.get() >= i}
                        class:bg-background={move || active.get() < i}
                    ></span>
                    <div class={if left { "" } else { "col-start-2" }} style=card_style>
                        <ExperienceCard entry=entry />
                    </div>
                </li>
            }
        })
        .collect_view();

    view! {
        <div
            node_ref=region_ref
            class="relative"
            style=format!("height: {}vh;", count.max(1) * 100)
        >
            <div class="sticky top-0 flex h-screen items-center overflow-hidden">
                <div class="relative mx-auto w-full max-w-6xl px-6">
                    <div class="absolute left-1/2 top-0 h-full w-px -translate-x-1/2 bg-border">
                        <div class="w-full bg-primary" style=rail_style></div>
                    </div>
                    <ol class="relative flex flex-col gap-8">{cards}</ol>
                    <p class="absolute bottom-0 right-6 font-mono text-sm text-muted-foreground">
                        {move || format!("{:02} / {:02}", active.get() + 1, count)}
                    </p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn StackedTimeline(entries: Vec<ExperienceEntry>) -> impl IntoView {
    let cards = entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            view! {
                <li class="relative pl-8">
                    <span class="absolute left-0 top-6 h-3 w-3 -translate-x-1/2 rounded-full bg-primary"></span>
                    <ScrollReveal direction=RevealDirection::Right delay={0.1 * i as f64}>
                        <ExperienceCard entry=entry />
                    </ScrollReveal>
                </li>
            }
        })
        .collect_view();

    view! {
        <ol class="relative mx-auto flex max-w-2xl flex-col gap-10 border-l border-border px-6 pb-24">
            {cards}
        </ol>
    }
}

#[component]
fn ExperienceCard(entry: ExperienceEntry) -> impl IntoView {
    let ExperienceEntry {
        title,
        company,
        location,
        period,
        description,
        achievements,
        technologies,
        link,
    } = entry;

    let achievements = achievements
        .into_iter()
        .map(|a| view! { <li>{a}</li> })
        .collect_view();
    let technologies = technologies
        .into_iter()
        .map(|t| {
            view! {
                <li class="rounded-md bg-hover px-2 py-0.5 text-xs font-mono">{t}</li>
            }
        })
        .collect_view();
    let company = if link.is_empty() || link == "#" {
        view! { <span>{company}</span> }.into_any()
    } else {
        view! {
            <a href=link target="_blank" rel="noopener noreferrer" class="hover:text-primary">
                {company}
            </a>
        }
        .into_any()
    };

    view! {
        <article class="rounded-2xl border border-border bg-card p-6 shadow-sm">
            <header class="mb-3 flex flex-wrap items-baseline justify-between gap-2">
                <h3 class="text-xl font-bold">{title}</h3>
                <span class="font-mono text-xs text-muted-foreground">{period}</span>
            </header>
            <p class="mb-3 text-sm font-semibold text-primary">
                {company}" · "{location}
            </p>
            <p class="mb-4 text-sm leading-relaxed text-muted-foreground">{description}</p>
            <ul class="mb-4 list-disc space-y-1 pl-5 text-sm">{achievements}</ul>
            <ul class="flex flex-wrap gap-2">{technologies}</ul>
        </article>
    }
}
