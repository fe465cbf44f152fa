use leptos::prelude::*;

use crate::content::{EducationItem, EducationStatus, ACHIEVEMENTS, EDUCATION};

use super::reveal::{AnimatedSection, RevealAnimation};

#[component]
pub fn Education() -> impl IntoView {
    view! {
        <div class="py-16 sm:py-20 lg:py-32 relative">
            <div class="container mx-auto px-3 sm:px-4 lg:px-8 w-full">
                <AnimatedSection animation=RevealAnimation::FadeDown class="text-center mb-12 sm:mb-16 lg:mb-24">
                    <h2 class="text-2xl sm:text-3xl lg:text-5xl font-bold mb-3 sm:mb-6">
                        "Education & " <span class="text-primary">"Achievements"</span>
                    </h2>
                    <p class="text-sm sm:text-base lg:text-lg text-muted max-w-2xl mx-auto px-2">
                        "My academic journey and notable accomplishments in the field of computer science and technology."
                    </p>
                </AnimatedSection>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 lg:gap-12">
                    <AnimatedSection animation=RevealAnimation::FadeRight class="space-y-6 sm:space-y-8">
                        <h3 class="text-xl sm:text-2xl font-semibold mb-6 sm:mb-8">
                            "🎓 Academic Background"
                        </h3>
                        <div class="relative">
                            // timeline line
                            <div class="absolute left-4 sm:left-6 top-8 bottom-8 w-px bg-muted/50"></div>
                            <div class="space-y-6 sm:space-y-8">
                                {EDUCATION
                                    .iter()
                                    .map(|item| view! { <EducationCard item /> })
                                    .collect_view()}
                            </div>
                        </div>
                    </AnimatedSection>

                    <AnimatedSection animation=RevealAnimation::FadeLeft class="space-y-6 sm:space-y-8">
                        <h3 class="text-xl sm:text-2xl font-semibold mb-6 sm:mb-8">
                            "🏆 Achievements & Certifications"
                        </h3>
                        <div class="p-4 sm:p-6 rounded-xl bg-card shadow-card">
                            <h4 class="font-semibold mb-4 text-sm sm:text-base">
                                "Notable Accomplishments"
                            </h4>
                            <div class="space-y-3">
                                {ACHIEVEMENTS
                                    .iter()
                                    .map(|achievement| {
                                        view! {
                                            <div class="flex items-start gap-3">
                                                <div class="w-2 h-2 bg-primary rounded-full mt-2 flex-shrink-0"></div>
                                                <p class="text-sm text-muted">{*achievement}</p>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                        <div class="grid grid-cols-2 gap-4">
                            <div class="p-6 rounded-xl bg-card shadow-card text-center">
                                <div class="text-2xl font-bold text-primary mb-1">"7.85"</div>
                                <div class="text-xs text-muted">"Current SGPA"</div>
                                <div class="text-xs text-muted mt-1">"MCA Program"</div>
                            </div>
                            <div class="p-6 rounded-xl bg-card shadow-card text-center">
                                <div class="text-2xl font-bold text-primary mb-1">"7.24"</div>
                                <div class="text-xs text-muted">"Final CGPA"</div>
                                <div class="text-xs text-muted mt-1">"BCA Degree"</div>
                            </div>
                        </div>
                    </AnimatedSection>
                </div>
            </div>
        </div>
    }
}

#[component]
fn EducationCard(item: &'static EducationItem) -> impl IntoView {
    let status_class = match item.status {
        EducationStatus::Current => "mb-2 text-xs px-2 py-1 rounded bg-primary text-background",
        EducationStatus::Completed => "mb-2 text-xs px-2 py-1 rounded bg-muted/20 text-muted",
    };

    view! {
        <div class="relative ml-10 sm:ml-12 p-4 sm:p-6 rounded-xl bg-card shadow-card hover:shadow-xl transition-all duration-300">
            // timeline dot
            <div class="absolute -left-10 sm:-left-12 top-6 w-3 h-3 sm:w-4 sm:h-4 rounded-full bg-primary border-4 border-background"></div>
            <div class="space-y-3 sm:space-y-4">
                <div class="flex items-start justify-between gap-2 flex-wrap">
                    <div class="min-w-0">
                        <span class=status_class>{item.status.label()}</span>
                        <h4 class="text-base sm:text-xl font-bold">{item.degree}</h4>
                        <p class="text-xs sm:text-sm text-muted font-medium">{item.institution}</p>
                    </div>
                    <span class="text-xs sm:text-sm px-2 py-1 rounded border border-muted/50 flex-shrink-0">
                        {item.grade}
                    </span>
                </div>
                <div class="flex items-center gap-2 sm:gap-4 text-xs sm:text-sm text-muted flex-wrap">
                    <span>"📅 " {item.duration}</span>
                    <span>"📍 " {item.location}</span>
                </div>
                <p class="text-xs sm:text-sm text-muted leading-relaxed">{item.description}</p>
                <div>
                    <h5 class="font-medium mb-2 text-xs sm:text-sm">"Key Subjects & Skills"</h5>
                    <div class="flex flex-wrap gap-2">
                        {item
                            .highlights
                            .iter()
                            .map(|highlight| {
                                view! {
                                    <span class="text-xs px-2 py-1 rounded bg-muted/20">
                                        {*highlight}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
