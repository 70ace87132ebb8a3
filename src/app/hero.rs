use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::content::SectionId;

use super::scroll_fx::{FullScreenScrollFx, FxColors};
use super::use_portfolio;

// must not create a scroll container, or the sticky stage stops pinning
const HERO_WRAPPER_CLASS: &str = "relative overflow-x-clip";

#[component]
pub fn Hero() -> impl IntoView {
    let portfolio = use_portfolio();
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let profile = &portfolio.profile;

    view! {
        <div class=HERO_WRAPPER_CLASS>
            <FullScreenScrollFx
                slides=portfolio.hero_slides.clone()
                durations=config.fx_durations
                colors=FxColors::default()
                aria_label="Highlights"
                footer="Selected Highlights"
            >
                <div class="mx-auto flex max-w-3xl flex-col items-center gap-3 text-center normal-case">
                    <span class="text-xs tracking-[0.45em] text-muted-foreground">"HELLO, I AM"</span>
                    <h1 class="text-[clamp(2.2rem,5.2vw,4.6rem)] font-black leading-tight text-foreground">
                        {profile.name.clone()}
                    </h1>
                    <p class="mx-auto max-w-2xl text-center text-sm sm:text-base md:text-lg text-muted-foreground leading-relaxed">
                        {profile.tagline.clone()}
                    </p>
                    <div class="mt-2 flex flex-wrap items-center justify-center gap-3">
                        <a
                            href=profile.resume_url.clone()
                            class="inline-flex items-center gap-2 rounded-full bg-primary text-primary-foreground border border-border px-5 py-2.5 text-sm font-semibold transition-all duration-200 hover:bg-hover"
                        >
                            "Resume"
                        </a>
                        <a
                            href=SectionId::Contact.href()
                            class="inline-flex items-center gap-2 rounded-full border border-border text-foreground bg-card px-5 py-2.5 text-sm font-semibold transition-colors duration-200 hover:bg-hover"
                        >
                            "Connect"
                        </a>
                    </div>
                </div>
            </FullScreenScrollFx>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapper_lets_stage_stick() {
        for scrolling in ["overflow-hidden", "overflow-auto", "overflow-scroll", "overflow-y-"] {
            assert!(!HERO_WRAPPER_CLASS.contains(scrolling), "{scrolling}");
        }
    }
}
