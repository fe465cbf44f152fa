use leptos::prelude::*;

use super::reveal::{AnimatedSection, RevealAnimation};

// Tech stack strip under the intro copy, served from the devicon CDN.
static TECH_STACK: &[(&str, &str)] = &[
    ("React", "https://cdn.jsdelivr.net/gh/devicons/devicon@latest/icons/react/react-original.svg"),
    (
        "TypeScript",
        "https://cdn.jsdelivr.net/gh/devicons/devicon@latest/icons/typescript/typescript-original.svg",
    ),
    (
        "JavaScript",
        "https://cdn.jsdelivr.net/gh/devicons/devicon@latest/icons/javascript/javascript-original.svg",
    ),
    (
        "Node.js",
        "https://cdn.jsdelivr.net/gh/devicons/devicon@latest/icons/nodejs/nodejs-original.svg",
    ),
    (
        "Python",
        "https://cdn.jsdelivr.net/gh/devicons/devicon@latest/icons/python/python-original.svg",
    ),
    (
        "MongoDB",
        "https://cdn.jsdelivr.net/gh/devicons/devicon@latest/icons/mongodb/mongodb-original.svg",
    ),
    ("CSS3", "https://cdn.jsdelivr.net/gh/devicons/devicon@latest/icons/css3/css3-original.svg"),
    ("HTML5", "https://cdn.jsdelivr.net/gh/devicons/devicon@latest/icons/html5/html5-original.svg"),
    ("Git", "https://cdn.jsdelivr.net/gh/devicons/devicon@latest/icons/git/git-original.svg"),
    ("Vite", "https://cdn.jsdelivr.net/gh/devicons/devicon@latest/icons/vitejs/vitejs-original.svg"),
];

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col justify-center items-center text-center px-4 relative">
            <AnimatedSection animation=RevealAnimation::FadeDown threshold=0.0>
                <p class="text-primary font-medium mb-4">"Hi, my name is"</p>
                <h1 class="text-4xl sm:text-5xl lg:text-7xl font-bold mb-4">"Narayana Thota"</h1>
                <h2 class="text-2xl sm:text-3xl lg:text-4xl font-semibold text-muted mb-6">
                    "Full-Stack Developer"
                </h2>
                <p class="text-base sm:text-lg text-muted max-w-2xl mx-auto leading-relaxed mb-8">
                    "I build accessible, performant web applications end to end — from responsive interfaces to the APIs and databases behind them."
                </p>
            </AnimatedSection>

            <AnimatedSection delay_ms=200>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4 mb-10">
                    <a
                        href="#projects"
                        class="px-6 py-3 rounded-lg bg-primary text-background font-medium hover:bg-primary/90 transition-all duration-300"
                    >
                        "View My Work"
                    </a>
                    <a
                        href="/resume.pdf"
                        download="NarayanaThotaResume.pdf"
                        class="px-6 py-3 rounded-lg border border-primary/50 text-primary font-medium hover:bg-primary/10 transition-all duration-300"
                    >
                        "Download Resume"
                    </a>
                    <div class="flex gap-3">
                        <a
                            href="https://github.com/Narayaaana11"
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="GitHub Profile"
                            class="text-muted hover:text-foreground text-2xl transition-colors"
                        >
                            <i class="devicon-github-plain"></i>
                        </a>
                        <a
                            href="https://www.linkedin.com/in/narayaaana/"
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label="LinkedIn Profile"
                            class="text-muted hover:text-foreground text-2xl transition-colors"
                        >
                            <i class="devicon-linkedin-plain"></i>
                        </a>
                        <a
                            href="mailto:narayaaana11@gmail.com"
                            aria-label="Email"
                            class="text-muted hover:text-foreground text-2xl transition-colors"
                        >
                            "✉"
                        </a>
                    </div>
                </div>

                <div class="flex flex-wrap justify-center gap-4 max-w-xl mx-auto">
                    {TECH_STACK
                        .iter()
                        .map(|(name, url)| {
                            view! {
                                <img
                                    src=*url
                                    alt=format!("{name} logo")
                                    title=*name
                                    class="h-8 w-8 opacity-80 hover:opacity-100 hover:scale-110 transition-all duration-300"
                                    loading="lazy"
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </AnimatedSection>

            <a
                href="#about"
                aria-label="Scroll to about section"
                class="absolute bottom-8 text-muted hover:text-foreground animate-bounce text-2xl"
            >
                "⌄"
            </a>
        </div>
    }
}
