use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::email::{self, is_submittable, TemplateParams, OWNER_EMAIL};

use super::reveal::{AnimatedSection, RevealAnimation};

/// How long a result notice stays on screen.
const NOTICE_MS: f64 = 6000.0;

struct ContactMethod {
    label: &'static str,
    value: &'static str,
    href: &'static str,
}

static CONTACT_METHODS: &[ContactMethod] = &[
    ContactMethod {
        label: "Email",
        value: OWNER_EMAIL,
        href: "mailto:narayaaana11@gmail.com",
    },
    ContactMethod {
        label: "Phone",
        value: "+91-630-125-3789",
        href: "tel:+916301253789",
    },
    ContactMethod {
        label: "Location",
        value: "Andhra Pradesh, India",
        href: "#",
    },
];

struct SocialLink {
    label: &'static str,
    href: &'static str,
    icon_class: &'static str,
}

static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "https://github.com/Narayaaana11",
        icon_class: "devicon-github-plain",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/narayaaana/",
        icon_class: "devicon-linkedin-plain",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Notice {
    Success,
    ConfigError,
    DeliveryError,
}

impl Notice {
    fn title(&self) -> &'static str {
        match self {
            Notice::Success => "Message Sent Successfully!",
            Notice::ConfigError => "Configuration Error",
            Notice::DeliveryError => "Error Sending Message",
        }
    }

    fn body(&self) -> &'static str {
        match self {
            Notice::Success => "Thank you for reaching out. I'll get back to you soon.",
            Notice::ConfigError => {
                "Email service is not properly configured. Please contact me directly."
            }
            Notice::DeliveryError => {
                "There was an error sending your message. Please try again or contact me directly."
            }
        }
    }

    fn class(&self) -> &'static str {
        match self {
            Notice::Success => "mt-4 p-4 rounded-lg border border-primary/50 bg-primary/10",
            Notice::ConfigError | Notice::DeliveryError => {
                "mt-4 p-4 rounded-lg border border-red/50 bg-red/10"
            }
        }
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email_addr, set_email_addr) = signal(String::new());
    let (subject, set_subject) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (notice, set_notice) = signal(None::<Notice>);

    let UseTimeoutFnReturn {
        start: start_dismiss,
        ..
    } = use_timeout_fn(move |_: ()| set_notice(None), NOTICE_MS);

    let show_notice = move |n: Notice| {
        set_notice(Some(n));
        start_dismiss(());
    };

    let can_submit =
        move || is_submittable(&name(), &email_addr(), &message()) && !submitting();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked()
            || !is_submittable(
                &name.get_untracked(),
                &email_addr.get_untracked(),
                &message.get_untracked(),
            )
        {
            return;
        }
        set_submitting(true);

        // credentials are validated before anything leaves the browser
        let config = match email::config_from_build_env() {
            Ok(config) => config,
            Err(err) => {
                log::error!("{err}");
                show_notice(Notice::ConfigError);
                set_submitting(false);
                return;
            }
        };

        let params = TemplateParams::new(
            name.get_untracked(),
            email_addr.get_untracked(),
            subject.get_untracked(),
            message.get_untracked(),
        );

        let show_notice = show_notice.clone();
        spawn_local(async move {
            match email::send(&config, &params).await {
                Ok(()) => {
                    // entered data only clears on confirmed delivery
                    set_name(String::new());
                    set_email_addr(String::new());
                    set_subject(String::new());
                    set_message(String::new());
                    show_notice(Notice::Success);
                }
                Err(err) => {
                    log::error!("contact form delivery failed: {err}");
                    show_notice(Notice::DeliveryError);
                }
            }
            set_submitting(false);
        });
    };

    view! {
        <div class="py-16 sm:py-20 lg:py-32 relative">
            <div class="container mx-auto px-3 sm:px-4 lg:px-8 w-full">
                <AnimatedSection animation=RevealAnimation::FadeDown class="text-center mb-12 sm:mb-16 lg:mb-20">
                    <h2 class="text-2xl sm:text-3xl lg:text-5xl font-bold mb-3 sm:mb-6">
                        "Get In " <span class="text-primary">"Touch"</span>
                    </h2>
                    <p class="text-sm sm:text-base lg:text-lg text-muted max-w-2xl mx-auto px-2">
                        "Ready to collaborate or discuss opportunities? I'd love to hear from you. Let's connect and create something amazing together."
                    </p>
                </AnimatedSection>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 lg:gap-12 max-w-6xl mx-auto">
                    // contact info column
                    <AnimatedSection animation=RevealAnimation::FadeRight class="space-y-6 sm:space-y-8">
                        <div>
                            <h3 class="text-xl sm:text-2xl font-semibold mb-3 sm:mb-6">
                                "Let's Connect"
                            </h3>
                            <p class="text-sm sm:text-base text-muted mb-6 sm:mb-8 leading-relaxed">
                                "Whether you have a project in mind, want to discuss collaboration opportunities, or simply want to say hello, I'm always excited to connect with fellow developers."
                            </p>
                        </div>
                        <div class="space-y-3 sm:space-y-4">
                            {CONTACT_METHODS
                                .iter()
                                .map(|method| {
                                    view! {
                                        <div class="p-3 sm:p-4 rounded-xl bg-card shadow-card hover:shadow-xl transition-all duration-300">
                                            <a
                                                href=method.href
                                                class="flex items-center gap-3 sm:gap-4 text-muted hover:text-foreground transition-colors duration-300"
                                            >
                                                <div class="min-w-0">
                                                    <div class="text-xs sm:text-sm font-medium">
                                                        {method.label}
                                                    </div>
                                                    <div class="text-xs sm:text-sm break-all">
                                                        {method.value}
                                                    </div>
                                                </div>
                                            </a>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div>
                            <h4 class="font-semibold mb-3 sm:mb-4 text-sm sm:text-base">
                                "Follow Me"
                            </h4>
                            <div class="flex gap-4">
                                {SOCIAL_LINKS
                                    .iter()
                                    .map(|link| {
                                        view! {
                                            <a
                                                href=link.href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                aria-label=link.label
                                                class="h-10 w-10 sm:h-12 sm:w-12 rounded-lg flex items-center justify-center bg-card shadow-card text-xl text-muted hover:text-foreground transition-all duration-300"
                                            >
                                                <i class=link.icon_class></i>
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                        <div class="p-4 sm:p-6 rounded-xl bg-card shadow-card">
                            <div class="flex items-center gap-3 mb-2 sm:mb-3">
                                <div class="w-2.5 h-2.5 bg-primary rounded-full animate-pulse flex-shrink-0"></div>
                                <h4 class="font-semibold text-sm sm:text-base">
                                    "Currently Available"
                                </h4>
                            </div>
                            <p class="text-xs sm:text-sm text-muted">
                                "I'm actively seeking new opportunities and open to freelance projects. Response time: Usually within 24 hours."
                            </p>
                        </div>
                    </AnimatedSection>

                    // form column
                    <AnimatedSection animation=RevealAnimation::FadeLeft>
                        <div class="p-4 sm:p-8 rounded-xl bg-card shadow-card">
                            <h3 class="text-xl sm:text-2xl font-semibold mb-4 sm:mb-6">
                                "Send a Message"
                            </h3>
                            <form on:submit=on_submit class="space-y-4 sm:space-y-6">
                                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4 sm:gap-6">
                                    <div class="space-y-2">
                                        <label for="name" class="text-xs sm:text-sm">
                                            "Full Name *"
                                        </label>
                                        <input
                                            id="name"
                                            type="text"
                                            placeholder="Your name"
                                            prop:value=name
                                            on:input:target=move |ev| set_name(ev.target().value())
                                            class="w-full px-3 py-2 rounded-md border border-muted/50 bg-background focus:outline-none focus:border-primary/50 text-sm"
                                        />
                                    </div>
                                    <div class="space-y-2">
                                        <label for="email" class="text-xs sm:text-sm">
                                            "Email Address *"
                                        </label>
                                        <input
                                            id="email"
                                            type="email"
                                            placeholder="your.email@example.com"
                                            prop:value=email_addr
                                            on:input:target=move |ev| set_email_addr(ev.target().value())
                                            class="w-full px-3 py-2 rounded-md border border-muted/50 bg-background focus:outline-none focus:border-primary/50 text-sm"
                                        />
                                    </div>
                                </div>
                                <div class="space-y-2">
                                    <label for="subject" class="text-xs sm:text-sm">"Subject"</label>
                                    <input
                                        id="subject"
                                        type="text"
                                        placeholder="What's this about?"
                                        prop:value=subject
                                        on:input:target=move |ev| set_subject(ev.target().value())
                                        class="w-full px-3 py-2 rounded-md border border-muted/50 bg-background focus:outline-none focus:border-primary/50 text-sm"
                                    />
                                </div>
                                <div class="space-y-2">
                                    <label for="message" class="text-xs sm:text-sm">
                                        "Message *"
                                    </label>
                                    <textarea
                                        id="message"
                                        rows=4
                                        placeholder="Tell me about your project or idea..."
                                        prop:value=message
                                        on:input:target=move |ev| set_message(ev.target().value())
                                        class="w-full px-3 py-2 rounded-md border border-muted/50 bg-background focus:outline-none focus:border-primary/50 resize-none text-sm"
                                    ></textarea>
                                </div>
                                <button
                                    type="submit"
                                    disabled=move || !can_submit()
                                    class="w-full py-2 sm:py-3 rounded-lg bg-primary text-background font-medium transition-all duration-300 disabled:opacity-50 disabled:cursor-not-allowed text-sm sm:text-base"
                                >
                                    {move || if submitting() { "Sending..." } else { "Send Message" }}
                                </button>
                                <p class="text-xs text-muted text-center">
                                    "By sending this message, you agree that I may contact you regarding your inquiry."
                                </p>
                            </form>

                            {move || {
                                notice()
                                    .map(|n| {
                                        view! {
                                            <div class=n.class() role="status">
                                                <div class="font-semibold text-sm">{n.title()}</div>
                                                <p class="text-xs text-muted mt-1">{n.body()}</p>
                                            </div>
                                        }
                                    })
                            }}
                        </div>
                    </AnimatedSection>
                </div>
            </div>
        </div>
    }
}
