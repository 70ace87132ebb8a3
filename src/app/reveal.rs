use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::motion::{Reveal, RevealDirection};

use super::use_reduced_motion;

const REVEAL_MARGIN: &str = "-100px";

/// Flips to true the first time `target` scrolls into view, and stays true.
pub fn use_revealed(target: NodeRef<html::Div>) -> ReadSignal<bool> {
    let (revealed, set_revealed) = signal(false);
    let _ = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            if entries.iter().any(|e| e.is_intersecting()) {
                set_revealed.set(true);
            }
        },
        UseIntersectionObserverOptions::default().root_margin(REVEAL_MARGIN.to_string()),
    );
    revealed
}

#[component]
pub fn ScrollReveal(
    #[prop(optional)] direction: RevealDirection,
    #[prop(default = 30.0)] distance: f64,
    #[prop(optional)] delay: f64,
    #[prop(default = 0.6)] duration: f64,
    #[prop(optional)] blur: bool,
    #[prop(optional)] scale: bool,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let reveal = Reveal {
        direction,
        distance,
        delay,
        duration,
        blur,
        scale,
    };
    let target = NodeRef::<html::Div>::new();
    let revealed = use_revealed(target);
    let reduced_motion = use_reduced_motion();

    view! {
        <div
            node_ref=target
            class=class
            style=move || reveal.style(revealed.get(), reduced_motion.get())
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margin_shrinks_every_side() {
        assert_eq!(REVEAL_MARGIN, "-100px");
    }
}
