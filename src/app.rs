mod about;
mod contact;
mod experience;
mod footer;
mod hero;
mod loader;
mod navbar;
mod projects;
mod reveal;
mod scroll_fx;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;
use leptos_use::use_media_query;

use crate::config::{
    SiteConfig, LOADER_TEXT, SITE_DESCRIPTION, SITE_KEYWORDS, SITE_TITLE,
};
use crate::content::{portfolio, Portfolio, SectionId};
use crate::motion::Easing;
#[cfg(feature = "hydrate")]
use crate::theme::THEME_STORAGE_KEY;
use crate::theme::Theme;

use about::About;
use contact::Contact;
use experience::Experience;
use footer::Footer;
use hero::Hero;
use loader::Loader;
use navbar::Navbar;
use projects::Projects;
use skills::Skills;

/// `prefers-reduced-motion: reduce`, shared by every animated section.
#[derive(Debug, Clone, Copy)]
pub struct ReducedMotion(pub Signal<bool>);

/// Reasons the page must not scroll: the intro overlay, the success modal and
/// the mobile menu.
#[derive(Debug, Clone, Copy)]
pub struct ScrollLock {
    pub loading: RwSignal<bool>,
    pub modal: RwSignal<bool>,
    pub menu: RwSignal<bool>,
}

impl ScrollLock {
    fn locked(&self) -> bool {
        self.loading.get() || self.modal.get() || self.menu.get()
    }
}

pub fn use_portfolio() -> &'static Portfolio {
    expect_context::<&'static Portfolio>()
}

pub fn use_reduced_motion() -> Signal<bool> {
    use_context::<ReducedMotion>()
        .map(|r| r.0)
        .unwrap_or_else(|| Signal::derive(|| false))
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="preconnect" href="https://fonts.googleapis.com" />
                <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="anonymous" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let config = SiteConfig::default();
    provide_context(config.clone());

    let theme = RwSignal::new(Theme::default());
    #[cfg(feature = "hydrate")]
    {
        let (stored_theme, set_stored_theme, _) =
            use_local_storage::<Theme, JsonSerdeWasmCodec>(THEME_STORAGE_KEY);
        Effect::watch(
            || (),
            move |_, _, _| theme.set(stored_theme.get_untracked()),
            true,
        );
        Effect::watch(
            move || theme.get(),
            move |t, _, _| set_stored_theme.set(*t),
            false,
        );
    }
    provide_context(theme);

    let reduced_motion = use_media_query("(prefers-reduced-motion: reduce)");
    provide_context(ReducedMotion(reduced_motion));

    let lock = ScrollLock {
        loading: RwSignal::new(true),
        modal: RwSignal::new(false),
        menu: RwSignal::new(false),
    };
    provide_context(lock);

    let content = match portfolio() {
        Ok(p) => p,
        Err(e) => {
            log::error!("{e}");
            return view! {
                <Title text="Unavailable" />
                <main class="flex min-h-screen items-center justify-center p-8 text-center">
                    <p>"This page couldn't be loaded. Please try again later."</p>
                </main>
            }
            .into_any();
        }
    };
    provide_context(content);

    let loading = lock.loading;
    let on_loaded = Callback::new(move |_: ()| loading.set(false));

    view! {
        <Html {..} class=move || theme.get().class() />
        <Body {..} class=move || if lock.locked() { "overflow-hidden" } else { "" } />
        // sets the document title
        <Title formatter=|title: String| {
            if title.is_empty() { SITE_TITLE.to_string() } else { format!("{title} | {SITE_TITLE}") }
        } />
        <Meta name="description" content=SITE_DESCRIPTION />
        <Meta name="keywords" content=SITE_KEYWORDS />
        <Meta name="theme-color" content=move || theme.get().theme_color() />
        <Meta name="color-scheme" content=move || theme.get().color_scheme() />
        <Meta property="og:title" content=SITE_TITLE />
        <Meta property="og:description" content=SITE_DESCRIPTION />
        <Meta property="og:type" content="website" />

        <div
            class="relative"
            style=move || {
                format!(
                    "opacity: {}; transition: opacity 0.8s {};",
                    if loading.get() { 0 } else { 1 },
                    Easing::Enter.css(),
                )
            }
        >
            <Router>
                <Routes fallback=NotFound>
                    <Route path=path!("/") view=IndexPage />
                </Routes>
            </Router>
        </div>
        <Show when=move || loading.get()>
            <Loader text=LOADER_TEXT on_complete=on_loaded />
        </Show>
    }
    .into_any()
}

/// Renders the single page: navigation, every section in scroll order, footer.
#[component]
fn IndexPage() -> impl IntoView {
    let sections = SectionId::ALL
        .into_iter()
        .map(|section| {
            let body = match section {
                SectionId::Home => view! { <Hero /> }.into_any(),
                SectionId::About => view! { <About /> }.into_any(),
                SectionId::Experience => view! { <Experience /> }.into_any(),
                SectionId::Skills => view! { <Skills /> }.into_any(),
                SectionId::Projects => view! { <Projects /> }.into_any(),
                SectionId::Contact => view! { <Contact /> }.into_any(),
            };
            view! {
                <section id=section.id() tabindex="-1">
                    {body}
                </section>
            }
        })
        .collect_view();

    view! {
        <Title text="" />
        <Navbar />
        <main class="relative z-10">{sections}</main>
        <Footer />
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Title text="Not Found" />
        <main class="flex min-h-screen flex-col items-center justify-center gap-6 p-8 text-center">
            <h1 class="text-6xl font-black">"404"</h1>
            <p class="text-muted-foreground">"Oops! This page doesn't exist."</p>
            <a
                href="/"
                class="rounded-full border border-border bg-card px-5 py-2.5 text-sm font-semibold hover:bg-hover"
            >
                "Return home"
            </a>
        </main>
    }
}
