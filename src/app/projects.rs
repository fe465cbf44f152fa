use leptos::prelude::*;
use leptos_use::{use_interval_fn_with_options, Pausable, UseIntervalFnOptions};

use crate::content::{featured_projects, Carousel, Project, PROJECTS};

use super::reveal::{AnimatedSection, RevealAnimation};

/// Auto-advance cadence while the carousel view is showing.
const AUTO_ADVANCE_MS: u64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProjectsView {
    Grid,
    Carousel,
}

#[component]
pub fn Projects() -> impl IntoView {
    let featured = featured_projects();
    let (view_mode, set_view_mode) = signal(ProjectsView::Grid);
    let (carousel, set_carousel) = signal(Carousel::new(featured.len()));
    let (detail, set_detail) = signal(None::<&'static Project>);

    let Pausable { pause, resume, .. } = use_interval_fn_with_options(
        move || set_carousel.update(|c| c.next()),
        AUTO_ADVANCE_MS,
        UseIntervalFnOptions::default().immediate(false),
    );

    // run the timer only while the carousel view is showing
    {
        let pause = pause.clone();
        let resume = resume.clone();
        Effect::new(move |_| match view_mode() {
            ProjectsView::Carousel => resume(),
            ProjectsView::Grid => pause(),
        });
    }

    // manual navigation restarts the interval from the new slide instead of
    // letting a nearly-elapsed tick advance right past it
    let restart = {
        let pause = pause.clone();
        let resume = resume.clone();
        move || {
            if view_mode.get_untracked() == ProjectsView::Carousel {
                pause();
                resume();
            }
        }
    };

    let view_button = move |mode: ProjectsView, label: &'static str| {
        view! {
            <button
                class=move || {
                    if view_mode() == mode {
                        "px-4 py-2 rounded-xl text-sm sm:text-base bg-primary text-background"
                    } else {
                        "px-4 py-2 rounded-xl text-sm sm:text-base border border-muted/50 text-muted hover:text-foreground transition-colors"
                    }
                }
                on:click=move |_| set_view_mode(mode)
            >
                {label}
            </button>
        }
    };

    let indicators = {
        let restart = restart.clone();
        let count = featured.len();
        move || {
            (0..count)
                .map(|i| {
                    let restart = restart.clone();
                    view! {
                        <button
                            on:click=move |_| {
                                set_carousel.update(|c| c.select(i));
                                restart();
                            }
                            class=move || {
                                if carousel().index() == i {
                                    "h-2 w-8 rounded-full bg-primary transition-all duration-300"
                                } else {
                                    "h-2 w-2 rounded-full bg-primary/30 hover:bg-primary/50 transition-all duration-300"
                                }
                            }
                            aria-label=format!("Go to slide {}", i + 1)
                        ></button>
                    }
                })
                .collect_view()
        }
    };

    let prev = {
        let restart = restart.clone();
        move |_| {
            set_carousel.update(|c| c.prev());
            restart();
        }
    };
    let next = {
        let restart = restart.clone();
        move |_| {
            set_carousel.update(|c| c.next());
            restart();
        }
    };

    let current_slide = {
        let featured = featured.clone();
        move || featured[carousel().index()]
    };

    view! {
        <div class="py-16 sm:py-20 lg:py-32 min-h-screen relative">
            <div class="container mx-auto px-3 sm:px-4 lg:px-8">
                <AnimatedSection class="text-center mb-8 sm:mb-12 lg:mb-16">
                    <h2 class="text-2xl sm:text-3xl lg:text-5xl font-bold mb-3 sm:mb-4 text-primary">
                        "My Projects"
                    </h2>
                    <p class="text-sm sm:text-base lg:text-lg text-muted max-w-2xl mx-auto">
                        "Explore my portfolio of projects showcasing my skills and experience in web development, mobile applications, and software engineering."
                    </p>
                    <div class="flex justify-center gap-2 sm:gap-4 mt-4 sm:mt-6">
                        {view_button(ProjectsView::Grid, "Grid View")}
                        {view_button(ProjectsView::Carousel, "Carousel View")}
                    </div>
                </AnimatedSection>

                {move || match view_mode() {
                    ProjectsView::Grid => {
                        view! {
                            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-3 sm:gap-4 lg:gap-6">
                                {PROJECTS
                                    .iter()
                                    .map(|project| view! { <ProjectCard project set_detail /> })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    }
                    ProjectsView::Carousel => {
                        let project = current_slide();
                        view! {
                            <div class="relative overflow-hidden rounded-xl border border-muted/50 shadow-lg">
                                <div class="relative aspect-[16/9] lg:aspect-[21/9]">
                                    <img
                                        src=project.image
                                        alt=project.title
                                        class="w-full h-full object-cover"
                                    />
                                    <div class="absolute inset-0 bg-gradient-to-t from-background via-background/50 to-transparent"></div>
                                    <div class="absolute bottom-0 left-0 right-0 p-6 lg:p-10">
                                        <div class="max-w-3xl">
                                            <div class="flex flex-wrap gap-2 mb-4">
                                                {project
                                                    .tags
                                                    .iter()
                                                    .map(|tag| {
                                                        view! {
                                                            <span class="text-xs px-2 py-1 rounded bg-background/80 backdrop-blur-sm">
                                                                {*tag}
                                                            </span>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                            <h3 class="text-2xl lg:text-3xl font-bold mb-2">
                                                {project.title}
                                            </h3>
                                            <p class="text-muted mb-6 max-w-2xl">
                                                {project.description}
                                            </p>
                                            <div class="flex flex-wrap gap-3">
                                                <button
                                                    class="px-4 py-2 rounded-lg bg-primary text-background hover:bg-primary/90"
                                                    on:click=move |_| set_detail(Some(project))
                                                >
                                                    "View Details"
                                                </button>
                                                <ProjectLinks project />
                                            </div>
                                        </div>
                                    </div>
                                </div>
                                <div class="absolute bottom-4 right-4 flex gap-2">
                                    <button
                                        on:click=prev.clone()
                                        class="h-8 w-8 rounded-full bg-background/80 backdrop-blur-sm border border-muted/50 hover:bg-primary/20"
                                        aria-label="Previous project"
                                    >
                                        "‹"
                                    </button>
                                    <button
                                        on:click=next.clone()
                                        class="h-8 w-8 rounded-full bg-background/80 backdrop-blur-sm border border-muted/50 hover:bg-primary/20"
                                        aria-label="Next project"
                                    >
                                        "›"
                                    </button>
                                </div>
                                <div class="absolute bottom-4 left-0 right-0">
                                    <div class="flex justify-center gap-2">{indicators()}</div>
                                </div>
                            </div>
                        }
                            .into_any()
                    }
                }}

                // details modal
                {move || {
                    detail()
                        .map(|project| {
                            view! {
                                <div class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-background/80 backdrop-blur-md">
                                    <div class="bg-card w-full max-w-4xl max-h-[90vh] overflow-y-auto rounded-xl shadow-xl border border-muted/50">
                                        <div class="relative aspect-video overflow-hidden rounded-t-xl">
                                            <img
                                                src=project.image
                                                alt=project.title
                                                class="w-full h-full object-cover"
                                            />
                                            <button
                                                on:click=move |_| set_detail(None)
                                                class="absolute top-4 right-4 h-8 w-8 rounded-full bg-background/80 backdrop-blur-sm hover:bg-background"
                                                aria-label="Close details"
                                            >
                                                "✕"
                                            </button>
                                        </div>
                                        <div class="p-6">
                                            <div class="flex flex-wrap gap-2 mb-4">
                                                {project
                                                    .tags
                                                    .iter()
                                                    .map(|tag| {
                                                        view! {
                                                            <span class="text-xs px-2 py-1 rounded bg-muted/20">
                                                                {*tag}
                                                            </span>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                            <h3 class="text-2xl font-bold mb-4">{project.title}</h3>
                                            <p class="text-muted mb-6">{project.description}</p>
                                            <div class="flex flex-wrap gap-3">
                                                <ProjectLinks project />
                                            </div>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                }}
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(project: &'static Project, set_detail: WriteSignal<Option<&'static Project>>) -> impl IntoView {
    view! {
        <AnimatedSection animation=RevealAnimation::FadeUp class="h-full">
            <div class="overflow-hidden h-full flex flex-col border border-muted/50 hover:border-primary/50 transition-all duration-300 rounded-xl bg-card">
                <div class="relative aspect-video overflow-hidden bg-muted/20">
                    <img
                        src=project.image
                        alt=project.title
                        loading="lazy"
                        class="w-full h-full object-cover transition-transform duration-500 hover:scale-110"
                    />
                    <div class="absolute bottom-0 left-0 right-0 p-3 flex flex-wrap gap-1 sm:gap-2">
                        {project
                            .tags
                            .iter()
                            .take(2)
                            .map(|tag| {
                                view! {
                                    <span class="text-xs px-2 py-1 rounded bg-background/80 backdrop-blur-sm">
                                        {*tag}
                                    </span>
                                }
                            })
                            .collect_view()}
                        {(project.tags.len() > 2)
                            .then(|| {
                                view! {
                                    <span class="text-xs px-2 py-1 rounded bg-background/80 backdrop-blur-sm">
                                        "+" {project.tags.len() - 2}
                                    </span>
                                }
                            })}
                    </div>
                </div>
                <div class="p-3 sm:p-5 flex flex-col flex-grow">
                    <h3 class="text-base sm:text-xl font-semibold mb-2">{project.title}</h3>
                    <p class="text-muted text-xs sm:text-sm mb-4 flex-grow line-clamp-2">
                        {project.description}
                    </p>
                    <div class="flex gap-2 sm:gap-3 mt-auto">
                        <button
                            class="flex-1 rounded-lg text-xs sm:text-sm border border-muted/50 py-2 hover:border-primary/50 transition-colors"
                            on:click=move |_| set_detail(Some(project))
                        >
                            "Details"
                        </button>
                        <ProjectLinks project />
                    </div>
                </div>
            </div>
        </AnimatedSection>
    }
}

#[component]
fn ProjectLinks(project: &'static Project) -> impl IntoView {
    view! {
        {project
            .github_url
            .map(|url| {
                view! {
                    <a
                        href=url
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="GitHub"
                        class="px-3 py-2 rounded-lg border border-muted/50 text-sm hover:border-primary/50 transition-colors"
                    >
                        "Code"
                    </a>
                }
            })}
        {project
            .live_demo_url
            .map(|url| {
                view! {
                    <a
                        href=url
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="Live Demo"
                        class="px-3 py-2 rounded-lg border border-muted/50 text-sm hover:border-primary/50 transition-colors"
                    >
                        "Live Demo"
                    </a>
                }
            })}
    }
}
