use leptos::prelude::*;

use crate::content::{ClientProject, Project};
use crate::motion::RevealDirection;

use super::reveal::ScrollReveal;
use super::use_portfolio;

fn has_link(url: &str) -> bool {
    !url.is_empty() && url != "#"
}

#[component]
pub fn Projects() -> impl IntoView {
    let portfolio = use_portfolio();

    let projects = portfolio
        .projects
        .iter()
        .cloned()
        .enumerate()
        .map(|(i, project)| view! { <ProjectRow project=project flipped={i % 2 == 1} /> })
        .collect_view();

    let clients = portfolio
        .client_projects
        .iter()
        .cloned()
        .enumerate()
        .map(|(i, client)| {
            view! {
                <ScrollReveal delay={0.1 * i as f64} scale=true>
                    <ClientCard client=client />
                </ScrollReveal>
            }
        })
        .collect_view();

    view! {
        <div class="mx-auto max-w-6xl px-6 py-24 md:py-32">
            <ScrollReveal blur=true class="mb-16 text-center">
                <span class="text-xs uppercase tracking-[0.4em] text-primary">"Work"</span>
                <h2 class="mt-2 text-4xl md:text-5xl font-black">"Projects"</h2>
            </ScrollReveal>
            <div class="flex flex-col gap-24">{projects}</div>
            <Show when=move || !portfolio.client_projects.is_empty()>
                <h3 class="mb-8 mt-32 text-center text-2xl font-bold">"Client Work"</h3>
            </Show>
            <div class="grid gap-6 md:grid-cols-3">{clients}</div>
        </div>
    }
}

#[component]
fn ProjectRow(project: Project, flipped: bool) -> impl IntoView {
    let Project {
        number,
        title,
        subtitle,
        description,
        image,
        live_url,
        github_url,
        tags,
    } = project;

    let tags = tags
        .into_iter()
        .map(|t| {
            view! {
                <li class="rounded-full border border-border px-3 py-1 text-xs font-mono">{t}</li>
            }
        })
        .collect_view();

    let live = has_link(&live_url).then(|| {
        view! {
            <a
                href=live_url
                target="_blank"
                rel="noopener noreferrer"
                class="rounded-full bg-primary px-4 py-2 text-sm font-semibold text-primary-foreground hover:opacity-90"
            >
                "Live Demo"
            </a>
        }
    });
    let github = has_link(&github_url).then(|| {
        view! {
            <a
                href=github_url
                target="_blank"
                rel="noopener noreferrer"
                class="rounded-full border border-border px-4 py-2 text-sm font-semibold hover:bg-hover"
            >
                "Source"
            </a>
        }
    });

    let (image_side, text_side) = if flipped {
        (RevealDirection::Right, RevealDirection::Left)
    } else {
        (RevealDirection::Left, RevealDirection::Right)
    };
    let image_alt = title.clone();

    view! {
        <article class="grid items-center gap-10 md:grid-cols-2">
            <ScrollReveal direction=image_side distance=60.0 class={if flipped { "md:order-2" } else { "" }}>
                <div class="overflow-hidden rounded-2xl border border-border bg-card">
                    <img
                        src=image
                        alt=image_alt
                        class="aspect-video w-full object-cover transition-transform duration-500 hover:scale-105"
                        loading="lazy"
                    />
                </div>
            </ScrollReveal>
            <ScrollReveal direction=text_side delay=0.15>
                <span class="font-mono text-sm text-muted-foreground">{number}</span>
                <h3 class="mt-2 text-3xl font-black">{title}</h3>
                <p class="mt-1 text-primary">{subtitle}</p>
                <p class="mt-4 leading-relaxed text-muted-foreground">{description}</p>
                <ul class="mt-4 flex flex-wrap gap-2">{tags}</ul>
                <div class="mt-6 flex gap-3">
                    {live}
                    {github}
                </div>
            </ScrollReveal>
        </article>
    }
}

#[component]
fn ClientCard(client: ClientProject) -> impl IntoView {
    let link = has_link(&client.live_url).then_some(client.live_url);
    view! {
        <article class="flex h-full flex-col overflow-hidden rounded-2xl border border-border bg-card">
            <img src=client.image alt=client.title.clone() class="aspect-video w-full object-cover" loading="lazy" />
            <div class="flex flex-1 flex-col gap-2 p-5">
                <h4 class="text-lg font-bold">{client.title}</h4>
                <p class="flex-1 text-sm text-muted-foreground">{client.description}</p>
                {link.map(|href| {
                    view! {
                        <a href=href target="_blank" rel="noopener noreferrer" class="text-sm font-semibold text-primary hover:underline">
                            "Visit site"
                        </a>
                    }
                })}
            </div>
        </article>
    }
}
