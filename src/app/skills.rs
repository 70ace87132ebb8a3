use leptos::{html, prelude::*};

use crate::content::SkillCategory;
use crate::motion::{Easing, RevealDirection};

use super::reveal::{use_revealed, ScrollReveal};
use super::{use_portfolio, use_reduced_motion};

/// Delay before a proficiency bar fills, once its category is on screen.
fn bar_delay(category: usize, skill: usize) -> f64 {
    category as f64 * 0.1 + skill as f64 * 0.07 + 0.4
}

#[component]
pub fn Skills() -> impl IntoView {
    let categories = &use_portfolio().skill_categories;
    let hovered = RwSignal::new(None::<usize>);

    let cards = categories
        .iter()
        .enumerate()
        .map(|(i, category)| {
            let direction = if i % 2 == 0 {
                RevealDirection::Left
            } else {
                RevealDirection::Right
            };
            view! {
                <ScrollReveal direction=direction delay={0.1 * i as f64}>
                    <SkillCard index=i category=category.clone() hovered=hovered />
                </ScrollReveal>
            }
        })
        .collect_view();

    view! {
        <div class="mx-auto max-w-6xl px-6 py-24 md:py-32">
            <ScrollReveal blur=true class="mb-12 text-center">
                <span class="text-xs uppercase tracking-[0.4em] text-primary">"Toolbox"</span>
                <h2 class="mt-2 text-4xl md:text-5xl font-black">"Skills"</h2>
            </ScrollReveal>
            <div class="grid gap-6 md:grid-cols-2">{cards}</div>
        </div>
    }
}

#[component]
fn SkillCard(index: usize, category: SkillCategory, hovered: RwSignal<Option<usize>>) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let revealed = use_revealed(target);
    let reduced_motion = use_reduced_motion();
    let dimmed = move || hovered.get().is_some_and(|h| h != index);
    let ease = Easing::Power3Out.css();

    let bars = category
        .skills
        .into_iter()
        .enumerate()
        .map(|(s, skill)| {
            let ease = ease.clone();
            let level = skill.level.min(100);
            let delay = bar_delay(index, s);
            let bar_style = move || {
                let width = if revealed.get() { level } else { 0 };
                if reduced_motion.get() {
                    format!("width: {width}%;")
                } else {
                    format!("width: {width}%; transition: width 1.2s {ease} {delay}s;")
                }
            };
            view! {
                <li>
                    <div class="mb-1 flex justify-between text-sm">
                        <span class="font-medium">{skill.name}</span>
                        <span class="font-mono text-muted-foreground">{format!("{level}%")}</span>
                    </div>
                    <div
                        class="h-1.5 overflow-hidden rounded-full bg-hover"
                        role="progressbar"
                        aria-valuemin="0"
                        aria-valuemax="100"
                        aria-valuenow=level.to_string()
                    >
                        <div class=format!("h-full rounded-full {}", category.accent.bg_class()) style=bar_style></div>
                    </div>
                </li>
            }
        })
        .collect_view();

    view! {
        <div
            node_ref=target
            class=move || {
                if dimmed() {
                    "h-full rounded-2xl border border-border bg-card p-6 transition-opacity duration-300 opacity-50"
                } else {
                    "h-full rounded-2xl border border-border bg-card p-6 transition-opacity duration-300"
                }
            }
            on:mouseenter=move |_| hovered.set(Some(index))
            on:mouseleave=move |_| hovered.set(None)
        >
            <h3 class=format!("text-2xl font-bold {}", category.accent.text_class())>
                {category.title}
            </h3>
            <p class="mb-6 mt-1 text-sm text-muted-foreground">{category.description}</p>
            <ul class="flex flex-col gap-4">{bars}</ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_delay_staggers_by_category_then_skill() {
        assert!((bar_delay(0, 0) - 0.4).abs() < 1e-9);
        assert!((bar_delay(1, 0) - 0.5).abs() < 1e-9);
        assert!((bar_delay(1, 2) - 0.64).abs() < 1e-9);
    }
}
