use leptos::prelude::*;

use super::reveal::{AnimatedSection, RevealAnimation};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <div class="py-16 sm:py-20 lg:py-32 relative overflow-hidden">
            <div class="container mx-auto px-3 sm:px-4 lg:px-8 relative z-10 w-full">
                <AnimatedSection animation=RevealAnimation::FadeDown class="text-center mb-12 sm:mb-16 lg:mb-24">
                    <h2 class="text-2xl sm:text-3xl lg:text-6xl font-bold mb-3 sm:mb-6">
                        "About " <span class="text-primary">"Me"</span>
                    </h2>
                    <p class="text-sm sm:text-base lg:text-xl text-muted max-w-3xl mx-auto leading-relaxed px-2">
                        "Get to know more about my journey, passion, and aspirations in the world of technology."
                    </p>
                </AnimatedSection>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-6 sm:gap-8 lg:gap-16 items-center">
                    <AnimatedSection animation=RevealAnimation::FadeRight class="flex justify-center">
                        <div class="p-4 sm:p-8 rounded-2xl bg-card shadow-card hover:scale-[1.02] transition-all duration-500">
                            <img
                                src="/profile.jpg"
                                alt="Narayana Thota profile"
                                loading="lazy"
                                class="w-56 h-56 sm:w-64 sm:h-64 lg:w-80 lg:h-80 object-cover rounded-2xl border border-muted/20"
                            />
                        </div>
                    </AnimatedSection>

                    <AnimatedSection animation=RevealAnimation::FadeLeft class="space-y-4 sm:space-y-8 px-2 sm:px-0">
                        <h3 class="text-xl sm:text-2xl lg:text-4xl font-semibold leading-tight">
                            "Passionate Developer & " <span class="text-primary">"Problem Solver"</span>
                        </h3>
                        <p class="text-sm sm:text-base text-muted leading-relaxed">
                            "I'm an MCA student at Aditya University with a strong foundation in full-stack web development. I enjoy taking an idea from a whiteboard sketch to a deployed application, and I care as much about the experience of the people using it as about the code underneath."
                        </p>
                        <p class="text-sm sm:text-base text-muted leading-relaxed">
                            "Most of my work lives in the MERN stack — MongoDB, Express, React and Node — with TypeScript and Tailwind CSS on top. Recently I've been exploring systems programming and cloud platforms to round out the picture."
                        </p>
                        <div class="grid grid-cols-2 gap-4">
                            <div class="p-4 rounded-xl bg-card shadow-card text-center">
                                <div class="text-2xl font-bold text-primary mb-1">"25+"</div>
                                <div class="text-xs text-muted">"Projects Built"</div>
                            </div>
                            <div class="p-4 rounded-xl bg-card shadow-card text-center">
                                <div class="text-2xl font-bold text-primary mb-1">"3+"</div>
                                <div class="text-xs text-muted">"Years Learning"</div>
                            </div>
                        </div>
                        <div class="flex flex-wrap gap-2">
                            <span class="text-xs px-3 py-1 rounded-full bg-primary/10 text-primary">
                                "🎓 MCA Student"
                            </span>
                            <span class="text-xs px-3 py-1 rounded-full bg-primary/10 text-primary">
                                "📍 Andhra Pradesh, India"
                            </span>
                            <span class="text-xs px-3 py-1 rounded-full bg-primary/10 text-primary">
                                "💼 Open to Opportunities"
                            </span>
                        </div>
                    </AnimatedSection>
                </div>
            </div>
        </div>
    }
}
