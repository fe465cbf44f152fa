use leptos::prelude::*;

use crate::content::LANGUAGES;

use super::reveal::{AnimatedSection, RevealAnimation};

#[component]
pub fn Languages() -> impl IntoView {
    view! {
        <div class="py-16 sm:py-20 lg:py-32 relative">
            <div class="container mx-auto px-3 sm:px-4 lg:px-8 w-full">
                <AnimatedSection animation=RevealAnimation::FadeDown class="text-center mb-12 sm:mb-16 lg:mb-24">
                    <h2 class="text-2xl sm:text-3xl lg:text-5xl font-bold mb-3 sm:mb-6">
                        "Language " <span class="text-primary">"Skills"</span>
                    </h2>
                    <p class="text-sm sm:text-base lg:text-lg text-muted max-w-2xl mx-auto px-2">
                        "Multilingual communication abilities enabling effective collaboration across diverse teams and cultures."
                    </p>
                </AnimatedSection>

                <div class="max-w-4xl mx-auto">
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-4 sm:gap-6">
                        {LANGUAGES
                            .iter()
                            .enumerate()
                            .map(|(i, language)| {
                                view! {
                                    <AnimatedSection
                                        animation=RevealAnimation::ZoomIn
                                        delay_ms=(i as u32) * 100
                                    >
                                        <div class="p-4 sm:p-6 rounded-xl bg-card shadow-card hover:shadow-xl transition-all duration-300">
                                            <div class="flex items-center justify-between mb-3 sm:mb-4">
                                                <div class="flex items-center gap-2 sm:gap-3 min-w-0">
                                                    <span class="text-lg sm:text-2xl flex-shrink-0">
                                                        {language.flag}
                                                    </span>
                                                    <div class="min-w-0">
                                                        <h3 class="font-semibold text-sm sm:text-lg">
                                                            {language.name}
                                                        </h3>
                                                        <span class="text-xs px-2 py-1 rounded bg-muted/20 text-muted">
                                                            {language.level}
                                                        </span>
                                                    </div>
                                                </div>
                                                <div class="text-lg sm:text-2xl font-bold text-primary flex-shrink-0">
                                                    {language.proficiency} "%"
                                                </div>
                                            </div>
                                            <div class="h-2 rounded-full bg-muted/20 overflow-hidden">
                                                <div
                                                    class="h-full rounded-full bg-primary transition-all duration-700"
                                                    style:width=format!("{}%", language.proficiency)
                                                ></div>
                                            </div>
                                            <p class="text-xs sm:text-sm text-muted mt-3">
                                                {language.description}
                                            </p>
                                        </div>
                                    </AnimatedSection>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
