use leptos::prelude::*;

use crate::content::{filter_skills, skills_in_category, Category, Skill};

use super::reveal::{AnimatedSection, RevealAnimation};

#[component]
pub fn Skills() -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let (active_category, set_active_category) = signal(None::<Category>);
    // name of the card currently showing its description side
    let (flipped, set_flipped) = signal(None::<&'static str>);

    let filtered = Memo::new(move |_| filter_skills(&query(), active_category()));

    let category_chip = move |category: Category| {
        let chip_class = move || {
            if active_category() == Some(category) {
                "cursor-pointer px-4 py-2 rounded-full text-sm bg-primary text-background transition-all duration-300"
            } else {
                "cursor-pointer px-4 py-2 rounded-full text-sm bg-muted/20 text-muted hover:scale-105 transition-all duration-300"
            }
        };
        view! {
            <button
                class=chip_class
                // selecting the active category again clears the filter
                on:click=move |_| {
                    set_active_category
                        .update(|current| {
                            *current = if *current == Some(category) {
                                None
                            } else {
                                Some(category)
                            };
                        })
                }
            >
                {category.label()}
            </button>
        }
    };

    view! {
        <div class="py-16 sm:py-20 lg:py-24 relative overflow-hidden">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <AnimatedSection animation=RevealAnimation::FadeDown class="text-center mb-12 sm:mb-16">
                    <h2 class="text-3xl sm:text-4xl lg:text-6xl font-bold mb-4 sm:mb-6">
                        "Technical " <span class="text-primary">"Skills"</span>
                    </h2>
                    <p class="text-base sm:text-lg text-muted max-w-3xl mx-auto leading-relaxed">
                        "Explore my technical expertise and professional capabilities across different domains and technologies."
                    </p>
                </AnimatedSection>

                // Search and category filter
                <div class="mb-12 sm:mb-16 space-y-6">
                    <div class="relative max-w-md mx-auto">
                        <input
                            type="text"
                            placeholder="Search skills..."
                            prop:value=query
                            on:input:target=move |ev| set_query(ev.target().value())
                            class="w-full px-4 py-2 rounded-md border border-muted/50 bg-background focus:outline-none focus:ring-2 focus:ring-primary/20 transition-all duration-300"
                        />
                    </div>
                    <div class="flex flex-wrap justify-center gap-3 sm:gap-4">
                        <button
                            class=move || {
                                if active_category().is_none() {
                                    "cursor-pointer px-4 py-2 rounded-full text-sm bg-primary text-background transition-all duration-300"
                                } else {
                                    "cursor-pointer px-4 py-2 rounded-full text-sm bg-muted/20 text-muted hover:scale-105 transition-all duration-300"
                                }
                            }
                            on:click=move |_| set_active_category(None)
                        >
                            "All Skills"
                        </button>
                        {Category::ALL.map(category_chip).collect_view()}
                    </div>
                </div>

                // Skill cards
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-4 sm:gap-6">
                    <For
                        each=move || filtered()
                        key=|skill| skill.name
                        children=move |skill| {
                            view! { <SkillCard skill flipped set_flipped /> }
                        }
                    />
                </div>

                // Empty search state
                {move || {
                    filtered()
                        .is_empty()
                        .then(|| {
                            view! {
                                <div class="text-center py-12 sm:py-16">
                                    <p class="text-muted text-lg">
                                        "No skills found matching your search."
                                    </p>
                                    <p class="text-sm text-muted mt-2">
                                        "Try adjusting your search terms or filters."
                                    </p>
                                </div>
                            }
                        })
                }}

                // Per-category summary
                <div class="mt-16 sm:mt-20 grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-4 xl:grid-cols-7 gap-4 sm:gap-6">
                    {Category::ALL
                        .map(|category| {
                            view! {
                                <div class="p-4 sm:p-6 rounded-xl bg-card shadow-card text-center hover:scale-105 transition-all duration-300">
                                    <h3 class=format!(
                                        "font-semibold text-xs sm:text-sm mb-2 {}",
                                        category.accent_class(),
                                    )>{category.label()}</h3>
                                    <div class="text-xl sm:text-2xl font-bold text-primary">
                                        {skills_in_category(category)}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

/// Flip card: front shows name/level, back shows the description. Only one
/// card is flipped at a time; clicking the flipped card turns it back.
#[component]
fn SkillCard(
    skill: &'static Skill,
    flipped: ReadSignal<Option<&'static str>>,
    set_flipped: WriteSignal<Option<&'static str>>,
) -> impl IntoView {
    let is_flipped = move || flipped() == Some(skill.name);

    let icon = move || match skill.icon_url {
        Some(url) => view! {
            <img
                src=url
                alt=format!("{} icon", skill.name)
                class="h-6 w-6 object-cover rounded"
            />
        }
        .into_any(),
        None => view! {
            <span class=format!(
                "text-xl font-bold {}",
                skill.category.accent_class(),
            )>{skill.name.chars().next().unwrap_or('?').to_string()}</span>
        }
        .into_any(),
    };

    view! {
        <div
            class="relative h-48 sm:h-52 rounded-xl bg-card shadow-card cursor-pointer overflow-hidden hover:shadow-xl transition-all duration-500"
            on:click=move |_| {
                set_flipped
                    .update(|current| {
                        *current = if *current == Some(skill.name) {
                            None
                        } else {
                            Some(skill.name)
                        };
                    })
            }
        >
            // front
            <div class=move || {
                if is_flipped() {
                    "absolute inset-0 p-4 sm:p-6 flex flex-col justify-between opacity-0 transition-opacity duration-300"
                } else {
                    "absolute inset-0 p-4 sm:p-6 flex flex-col justify-between opacity-100 transition-opacity duration-300"
                }
            }>
                <div class="flex items-center justify-between">
                    <div class="p-2 rounded-lg bg-primary/10">{icon}</div>
                    <span class=format!(
                        "text-xs px-2 py-1 rounded border border-current {}",
                        skill.level.accent_class(),
                    )>{skill.level.label()}</span>
                </div>
                <div class="space-y-2">
                    <h3 class="font-semibold text-base sm:text-lg leading-tight">{skill.name}</h3>
                    <div class="flex items-center gap-2 text-xs sm:text-sm text-muted">
                        <span>{skill.category.label()}</span>
                    </div>
                    {skill
                        .experience
                        .map(|experience| {
                            view! {
                                <div class="text-xs text-primary font-medium">
                                    {experience} " • " {skill.projects.unwrap_or(0)} " projects"
                                </div>
                            }
                        })}
                </div>
            </div>

            // back
            <div class=move || {
                if is_flipped() {
                    "absolute inset-0 p-4 sm:p-6 flex flex-col justify-center opacity-100 transition-opacity duration-300 bg-card"
                } else {
                    "absolute inset-0 p-4 sm:p-6 flex flex-col justify-center opacity-0 transition-opacity duration-300 bg-card"
                }
            }>
                <div class="text-center space-y-3">
                    <h3 class="font-semibold text-sm sm:text-base">{skill.name}</h3>
                    <p class="text-xs text-muted leading-relaxed">{skill.description}</p>
                    <span class=format!(
                        "inline-block text-xs px-2 py-1 rounded bg-muted/20 {}",
                        skill.level.accent_class(),
                    )>{skill.level.label()}</span>
                </div>
            </div>
        </div>
    }
}
