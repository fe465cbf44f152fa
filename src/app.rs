mod about;
mod contact;
mod education;
mod footer;
mod hero;
mod languages;
mod nav;
mod projects;
mod reveal;
mod skills;
mod theme;

use leptos::{html, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::About;
use contact::Contact;
use education::Education;
use footer::Footer;
use hero::Hero;
use languages::Languages;
use nav::Nav;
use projects::Projects;
use reveal::RevealSection;
use skills::Skills;
use theme::ThemeMode;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

/// One `NodeRef` per top-level page section, created by the root page and
/// shared through context so the nav can observe the same elements the
/// reveal wrappers render.
#[derive(Clone, Copy)]
pub(crate) struct SectionRefs {
    pub home: NodeRef<html::Section>,
    pub about: NodeRef<html::Section>,
    pub skills: NodeRef<html::Section>,
    pub projects: NodeRef<html::Section>,
    pub education: NodeRef<html::Section>,
    pub languages: NodeRef<html::Section>,
    pub contact: NodeRef<html::Section>,
}

impl SectionRefs {
    fn new() -> Self {
        SectionRefs {
            home: NodeRef::new(),
            about: NodeRef::new(),
            skills: NodeRef::new(),
            projects: NodeRef::new(),
            education: NodeRef::new(),
            languages: NodeRef::new(),
            contact: NodeRef::new(),
        }
    }

    /// Sections in page order, with the nav label for each.
    pub fn entries(&self) -> [(&'static str, &'static str, NodeRef<html::Section>); 7] {
        [
            ("home", "Home", self.home),
            ("about", "About", self.about),
            ("skills", "Skills", self.skills),
            ("projects", "Projects", self.projects),
            ("education", "Education", self.education),
            ("languages", "Languages", self.languages),
            ("contact", "Contact", self.contact),
        ]
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    theme::provide_theme_context();

    view! {
        // sets the document title
        <Title formatter=|title| format!("Narayana Thota - {title}") />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

#[component]
fn PortfolioPage() -> impl IntoView {
    let refs = SectionRefs::new();
    provide_context(refs);
    let theme = theme::use_theme();

    view! {
        <Title text="Portfolio" />
        <div class=move || match theme.mode() {
            ThemeMode::Dark => {
                "dark min-h-screen bg-background text-foreground relative overflow-hidden"
            }
            ThemeMode::Light => {
                "min-h-screen bg-background text-foreground relative overflow-hidden"
            }
        }>
            <Nav />
            <main class="relative">
                // the hero sits above the fold; it never waits for a reveal
                <section id="home" node_ref=refs.home>
                    <Hero />
                </section>
                <div class="space-y-16 sm:space-y-20 lg:space-y-32 px-3 sm:px-4 lg:px-8">
                    <RevealSection id="about" node_ref=refs.about>
                        <About />
                    </RevealSection>
                    <RevealSection id="skills" node_ref=refs.skills>
                        <Skills />
                    </RevealSection>
                    <RevealSection id="projects" node_ref=refs.projects>
                        <Projects />
                    </RevealSection>
                    <RevealSection id="education" node_ref=refs.education>
                        <Education />
                    </RevealSection>
                    <RevealSection id="languages" node_ref=refs.languages>
                        <Languages />
                    </RevealSection>
                    <RevealSection id="contact" node_ref=refs.contact>
                        <Contact />
                    </RevealSection>
                </div>
            </main>
            <Footer />
        </div>
    }
}
