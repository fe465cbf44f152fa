use leptos::prelude::*;
use leptos_use::{
    use_intersection_observer_with_options, use_window_scroll, UseIntersectionObserverOptions,
};

use super::theme::ThemeToggle;
use super::SectionRefs;

/// Fraction of a section that must be onscreen before its nav link lights up.
const ACTIVE_THRESHOLD: f64 = 0.3;

#[component]
pub fn Nav() -> impl IntoView {
    let refs = expect_context::<SectionRefs>();
    let (active, set_active) = signal("home");
    let (menu_open, set_menu_open) = signal(false);

    // Whichever section most recently crosses the threshold becomes active.
    // When several cross in the same batch, the last callback to run wins;
    // the ordering is not guaranteed and not relied upon.
    for (id, _, node_ref) in refs.entries() {
        use_intersection_observer_with_options(
            node_ref,
            move |entries, _| {
                if entries.iter().any(|entry| entry.is_intersecting()) {
                    set_active(id);
                }
            },
            UseIntersectionObserverOptions::default().thresholds(vec![ACTIVE_THRESHOLD]),
        );
    }

    let (_, scroll_y) = use_window_scroll();
    let scrolled = move || scroll_y() > 50.0;

    let desktop_link = move |(id, label, _): (&'static str, &'static str, _)| {
        view! {
            <a
                href=format!("#{id}")
                class=move || {
                    if active() == id {
                        "px-4 py-2 rounded-lg text-sm font-medium text-primary"
                    } else {
                        "px-4 py-2 rounded-lg text-sm font-medium text-muted hover:text-foreground transition-colors"
                    }
                }
            >
                {label}
            </a>
        }
    };

    let mobile_link = move |(id, label, _): (&'static str, &'static str, _)| {
        view! {
            <a
                href=format!("#{id}")
                on:click=move |_| set_menu_open(false)
                class=move || {
                    if active() == id {
                        "px-6 py-4 rounded-lg text-lg font-medium bg-primary/15 text-primary"
                    } else {
                        "px-6 py-4 rounded-lg text-lg font-medium text-muted hover:text-foreground transition-colors"
                    }
                }
            >
                {label}
            </a>
        }
    };

    view! {
        // Desktop bar
        <nav class=move || {
            if scrolled() {
                "fixed top-0 left-0 right-0 z-40 hidden lg:flex items-center justify-between px-8 py-4 transition-all duration-300 bg-background/80 backdrop-blur-md shadow-md"
            } else {
                "fixed top-0 left-0 right-0 z-40 hidden lg:flex items-center justify-between px-8 py-4 transition-all duration-300 bg-transparent"
            }
        }>
            <a href="#home" class="text-xl font-bold text-primary">
                "Narayana"
            </a>
            <div class="flex items-center space-x-1">
                {refs.entries().map(desktop_link).collect_view()}
            </div>
            <div class="flex items-center space-x-2">
                <a
                    href="https://github.com/Narayaaana11"
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label="GitHub Profile"
                    class="text-muted hover:text-foreground text-xl"
                >
                    <i class="devicon-github-plain"></i>
                </a>
                <a
                    href="https://www.linkedin.com/in/narayaaana/"
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label="LinkedIn Profile"
                    class="text-muted hover:text-foreground text-xl"
                >
                    <i class="devicon-linkedin-plain"></i>
                </a>
                <ThemeToggle />
                <a
                    href="#contact"
                    class="px-4 py-2 rounded-lg bg-primary text-background font-medium hover:bg-primary/90 transition-colors"
                >
                    "Contact Me"
                </a>
            </div>
        </nav>

        // Mobile toggle
        <div class="fixed top-3 right-3 z-50 lg:hidden">
            <button
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
                class=move || {
                    if scrolled() || menu_open() {
                        "p-3 rounded-lg bg-background/80 backdrop-blur-md shadow-md"
                    } else {
                        "p-3 rounded-lg bg-transparent"
                    }
                }
                aria-label="Toggle menu"
                aria-expanded=move || menu_open().to_string()
            >
                {move || if menu_open() { "✕" } else { "☰" }}
            </button>
        </div>

        // Mobile menu
        {move || {
            menu_open()
                .then(|| {
                    view! {
                        <div class="fixed inset-0 z-40 bg-background/95 backdrop-blur-md pt-20 px-4 pb-6 lg:hidden flex flex-col overflow-y-auto">
                            <div class="flex flex-col space-y-2">
                                {refs.entries().map(mobile_link).collect_view()}
                            </div>
                            <div class="mt-auto flex justify-center space-x-6">
                                <a
                                    href="https://github.com/Narayaaana11"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label="GitHub Profile"
                                    class="text-muted hover:text-foreground text-2xl"
                                >
                                    <i class="devicon-github-plain"></i>
                                </a>
                                <a
                                    href="https://www.linkedin.com/in/narayaaana/"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label="LinkedIn Profile"
                                    class="text-muted hover:text-foreground text-2xl"
                                >
                                    <i class="devicon-linkedin-plain"></i>
                                </a>
                                <ThemeToggle />
                            </div>
                        </div>
                    }
                })
        }}
    }
}
