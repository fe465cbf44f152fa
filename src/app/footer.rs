use chrono::Datelike;
use leptos::prelude::*;

static FOOTER_LINKS: &[(&str, &str)] = &[
    ("About", "#about"),
    ("Skills", "#skills"),
    ("Projects", "#projects"),
    ("Education", "#education"),
    ("Contact", "#contact"),
];

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="relative py-6 sm:py-10 border-t border-muted/50 mt-16">
            <div class="container mx-auto px-3 sm:px-4 lg:px-8 w-full">
                <a
                    href="#home"
                    aria-label="Scroll to top"
                    class="absolute -top-5 left-1/2 -translate-x-1/2 h-10 w-10 rounded-full bg-primary text-background flex items-center justify-center hover:bg-primary/90 transition-all duration-300"
                >
                    "↑"
                </a>

                <div class="grid grid-cols-1 sm:grid-cols-3 gap-6 sm:gap-8 text-center sm:text-left">
                    <div class="space-y-2">
                        <h3 class="text-base sm:text-xl font-bold text-primary">"Narayana Thota"</h3>
                        <p class="text-xs sm:text-sm text-muted">"Full-Stack Developer"</p>
                    </div>
                    <nav aria-label="Footer navigation" class="flex justify-center">
                        <ul class="flex flex-wrap justify-center gap-x-4 sm:gap-x-6 gap-y-2 text-xs sm:text-sm">
                            {FOOTER_LINKS
                                .iter()
                                .map(|(label, href)| {
                                    view! {
                                        <li>
                                            <a
                                                href=*href
                                                class="text-muted hover:text-primary transition-colors duration-300"
                                            >
                                                {*label}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </nav>
                    <div class="flex flex-col items-center sm:items-end gap-2 sm:gap-3">
                        <div class="flex justify-center gap-4 sm:gap-6">
                            <a
                                href="https://github.com/Narayaaana11"
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label="GitHub Profile"
                                class="text-muted hover:text-primary transition-colors duration-300 text-xl"
                            >
                                <i class="devicon-github-plain"></i>
                            </a>
                            <a
                                href="https://www.linkedin.com/in/narayaaana/"
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label="LinkedIn Profile"
                                class="text-muted hover:text-primary transition-colors duration-300 text-xl"
                            >
                                <i class="devicon-linkedin-plain"></i>
                            </a>
                            <a
                                href="mailto:narayaaana11@gmail.com"
                                aria-label="Email"
                                class="text-muted hover:text-primary transition-colors duration-300 text-xl"
                            >
                                "✉"
                            </a>
                        </div>
                        <p class="text-xs text-muted">
                            "© " {year} " Narayana Thota. Built with Rust & Leptos."
                        </p>
                    </div>
                </div>
            </div>
        </footer>
    }
}
