use leptos::prelude::*;

use crate::motion::RevealDirection;

use super::reveal::ScrollReveal;
use super::use_portfolio;

#[component]
pub fn About() -> impl IntoView {
    let profile = &use_portfolio().profile;

    let paragraphs = profile
        .about
        .iter()
        .enumerate()
        .map(|(i, text)| {
            view! {
                <ScrollReveal delay={0.15 + 0.1 * i as f64}>
                    <p class="text-base md:text-lg leading-relaxed text-muted-foreground">
                        {text.clone()}
                    </p>
                </ScrollReveal>
            }
        })
        .collect_view();

    let core_skills = profile
        .core_skills
        .iter()
        .map(|skill| {
            view! {
                <li class="rounded-full border border-border bg-card px-3 py-1 text-xs font-medium">
                    {skill.clone()}
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="mx-auto grid max-w-6xl items-center gap-12 px-6 py-24 md:grid-cols-[2fr_3fr] md:py-32">
            <ScrollReveal direction=RevealDirection::Left distance=60.0 scale=true class="relative mx-auto w-full max-w-sm">
                <div class="relative aspect-[4/5] overflow-hidden rounded-3xl border border-border bg-card">
                    <img
                        src=profile.portrait_url.clone()
                        alt=format!("Portrait of {}", profile.name)
                        class="h-full w-full object-cover"
                        loading="lazy"
                    />
                </div>
                <div class="absolute -bottom-4 -right-4 rounded-2xl border border-border bg-background px-4 py-3 shadow-lg">
                    <span class="block text-xs uppercase tracking-widest text-muted-foreground">"Based in"</span>
                    <span class="font-semibold">{profile.location.clone()}</span>
                </div>
            </ScrollReveal>
            <div class="flex flex-col gap-6">
                <ScrollReveal blur=true>
                    <span class="text-xs uppercase tracking-[0.4em] text-primary">"About"</span>
                    <h2 class="mt-2 text-4xl md:text-5xl font-black">
                        {profile.role.clone()}
                    </h2>
                </ScrollReveal>
                {paragraphs}
                <ScrollReveal delay=0.4>
                    <h3 class="mb-3 text-sm uppercase tracking-widest text-muted-foreground">"Core skills"</h3>
                    <ul class="flex flex-wrap gap-2">{core_skills}</ul>
                </ScrollReveal>
            </div>
        </div>
    }
}
