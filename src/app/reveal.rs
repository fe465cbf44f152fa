//! Viewport-visibility tracking for scroll-triggered animations.

use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

/// Tracks whether `target` has crossed `threshold` (fraction of the element
/// that must be onscreen).
///
/// With `once = true` the signal flips to `true` on the first qualifying
/// intersection and the observation is dropped, so it never reverts. With
/// `once = false` it follows the current intersection state in both
/// directions. The underlying observer is registered on mount and torn down
/// on unmount either way.
pub fn use_reveal(target: NodeRef<html::Section>, threshold: f64, once: bool) -> Signal<bool> {
    let (visible, set_visible) = signal(false);

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            for entry in entries {
                if entry.is_intersecting() {
                    set_visible(true);
                } else if !once {
                    set_visible(false);
                }
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
    );

    if once {
        Effect::new(move |_| {
            if visible() {
                stop();
            }
        });
    }

    visible.into()
}

/// Top-level page section that fades in the first time it scrolls into view.
/// The caller supplies the `NodeRef` so the nav can observe the same element
/// for active-link tracking.
#[component]
pub fn RevealSection(
    id: &'static str,
    node_ref: NodeRef<html::Section>,
    children: Children,
) -> impl IntoView {
    let visible = use_reveal(node_ref, 0.1, true);

    view! {
        <section
            id=id
            node_ref=node_ref
            class=move || {
                if visible() { "section-reveal is-visible" } else { "section-reveal" }
            }
        >
            {children()}
        </section>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealAnimation {
    #[default]
    FadeUp,
    FadeDown,
    FadeLeft,
    FadeRight,
    ZoomIn,
}

impl RevealAnimation {
    fn hidden_class(&self) -> &'static str {
        match self {
            RevealAnimation::FadeUp => "opacity-0 translate-y-8",
            RevealAnimation::FadeDown => "opacity-0 -translate-y-8",
            RevealAnimation::FadeLeft => "opacity-0 translate-x-8",
            RevealAnimation::FadeRight => "opacity-0 -translate-x-8",
            RevealAnimation::ZoomIn => "opacity-0 scale-95",
        }
    }
}

/// Smaller animated block used inside sections: header rows, columns, cards.
#[component]
pub fn AnimatedSection(
    #[prop(optional)] animation: RevealAnimation,
    #[prop(default = 0.1)] threshold: f64,
    #[prop(default = true)] once: bool,
    #[prop(default = "")] class: &'static str,
    #[prop(default = 0)] delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal(node_ref, threshold, once);

    view! {
        <section
            node_ref=node_ref
            class=move || {
                let state = if visible() {
                    "opacity-100 translate-x-0 translate-y-0 scale-100"
                } else {
                    animation.hidden_class()
                };
                format!("{class} transition-all duration-700 {state}")
            }
            style:transition-delay=format!("{delay_ms}ms")
        >
            {children()}
        </section>
    }
}
