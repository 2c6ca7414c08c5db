//! Landing page component
//!
//! A single scrolling page for AegntSite:
//! - SEO meta tags
//! - Hero with the assessment and waitlist calls to action
//! - Problem, solution and how-it-works sections
//! - Guarantee
//! - Assessment request form
//! - Waitlist call to action
//! - Footer with the contact modal

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::leads::WaitlistForm;
use crate::ui::common::BaseModal;
use crate::ui::icon::{Icon, icons};
use crate::ui::leads::{AssessmentRequestForm, ContactModal, LeadFormController, WaitlistSignupForm};

/// Landing page component with scroll-based reveal animations
#[component]
pub fn LandingPage() -> impl IntoView {
    let (show_waitlist, set_show_waitlist) = signal(false);
    let (show_contact, set_show_contact) = signal(false);

    // The hero modal and the CTA section each keep their own form state
    let modal_waitlist = LeadFormController::<WaitlistForm>::new();
    let section_waitlist = LeadFormController::<WaitlistForm>::new();

    let close_waitlist = Callback::new(move |_| {
        set_show_waitlist.set(false);
        modal_waitlist.reset();
    });
    let close_contact = Callback::new(move |_| set_show_contact.set(false));

    view! {
        <SeoMeta />

        <div class="landing-root">
            <Hero on_join=Callback::new(move |_| set_show_waitlist.set(true)) />
            <ProblemSection />
            <SolutionSection />
            <HowItWorksSection />
            <GuaranteeSection />

            <section id="assessment" class="landing-section landing-section-tinted">
                <div class="landing-container">
                    <SectionHeading
                        title="Get a personalized website assessment"
                        subtitle="Submit your website for a detailed human review. I'll personally analyze your design, user experience, and conversion potential with AI-powered insights."
                    />

                    <div class="landing-grid">
                        {ASSESSMENT_FEATURES
                            .iter()
                            .map(|(icon, title, description)| {
                                view! { <InfoCard icon=*icon title=*title description=*description /> }
                            })
                            .collect_view()}
                    </div>

                    <div class="landing-form-card landing-scroll-animate">
                        <AssessmentRequestForm />
                    </div>
                </div>
            </section>

            <section id="waitlist" class="landing-section landing-section-dark">
                <div class="landing-container landing-narrow">
                    <SectionHeading
                        title="Ready for agentic growth?"
                        subtitle="Join performance-driven leaders getting early access to the future of conversion optimization."
                    />
                    <div class="landing-form-card landing-scroll-animate">
                        <WaitlistSignupForm controller=section_waitlist id_prefix="waitlist" />
                    </div>
                </div>
            </section>

            <Footer on_contact=Callback::new(move |_| set_show_contact.set(true)) />

            <BaseModal
                title="Join the waitlist"
                subtitle="Get early access to AegntSite's private beta."
                is_open=show_waitlist.into()
                on_close=close_waitlist
            >
                <WaitlistSignupForm
                    controller=modal_waitlist
                    id_prefix="hero-waitlist"
                    on_done=close_waitlist
                />
            </BaseModal>

            <ContactModal is_open=show_contact.into() on_close=close_contact />

            <LandingStyles />
            <ScrollAnimationScript />
        </div>
    }
}

const PROBLEMS: &[(&str, &str, &str)] = &[
    (
        icons::CLOCK,
        "Development cycles kill momentum",
        "Critical optimization fixes take weeks to deploy. Your conversion opportunities die in development queues.",
    ),
    (
        icons::SEARCH,
        "Can't prove what drives revenue",
        "You're spending thousands on tools and agencies, but can't isolate which changes actually increase conversions.",
    ),
    (
        icons::EYE,
        "Optimization happens in silos",
        "Your teams optimize in isolation. Nobody owns the complete conversion funnel or the final outcome.",
    ),
];

const SOLUTION_STEPS: &[(&str, &str, &str)] = &[
    (
        "01",
        "Predictive revenue auditing",
        "Our causal inference engine predicts the exact revenue impact of every fix before deployment.",
    ),
    (
        "02",
        "Brand-aligned autonomous design",
        "Generate conversion-optimized designs that maintain your brand identity and aesthetic standards.",
    ),
    (
        "03",
        "Zero-touch deployment",
        "Generate production code and deploy changes safely with automated rollback protection.",
    ),
];

const HOW_IT_WORKS_STEPS: &[(&str, &str, &str)] = &[
    (
        "01",
        "Connect your stack",
        "Secure OAuth integration with your CMS, analytics, and repositories. SOC 2 compliant setup in under 60 seconds.",
    ),
    (
        "02",
        "Review insights",
        "See exactly what will change, why it matters, and the predicted revenue impact. Approve with confidence.",
    ),
    (
        "03",
        "Deploy and measure",
        "Watch conversion rates climb in real-time. Our causal engine isolates the impact with statistical precision.",
    ),
];

const ASSESSMENT_FEATURES: &[(&str, &str, &str)] = &[
    (
        icons::SEARCH,
        "Deep Analysis",
        "Comprehensive review of your site's structure, content, and user experience",
    ),
    (
        icons::EYE,
        "Design Critique",
        "Professional assessment of visual hierarchy, branding, and aesthetic appeal",
    ),
    (
        icons::TRENDING_UP,
        "Growth Opportunities",
        "Actionable recommendations to boost conversions and user engagement",
    ),
];

#[component]
fn Hero(on_join: Callback<()>) -> impl IntoView {
    view! {
        <section class="landing-hero">
            <div class="landing-hero-content">
                <h1 class="landing-hero-title landing-fade-in-up">
                    "What if your website was "
                    <span class="landing-highlight">"your star employee?"</span>
                </h1>
                <p class="landing-hero-subtitle landing-fade-in-up landing-delay-200">
                    "AegntSite is the world's first agency for "<em>"self-evolving"</em>
                    " websites that audit, redesign and deploy guaranteed conversion lifts while you focus on the "
                    <em>"human"</em>" things."
                </p>

                <div class="landing-hero-actions landing-fade-in-up landing-delay-400">
                    // Smooth scrolling comes from `scroll-behavior` in the stylesheet
                    <a href="#assessment" class="landing-btn-glass">
                        "Get free assessment"
                        <Icon name=icons::ARROW_RIGHT class="icon-text" />
                    </a>
                    <button
                        type="button"
                        class="landing-btn-glass"
                        on:click=move |_| on_join.run(())
                    >
                        "Join the waitlist"
                        <Icon name=icons::ARROW_RIGHT class="icon-text" />
                    </button>
                </div>

                <div class="landing-scroll-hint" aria-hidden="true">
                    <Icon name=icons::CHEVRON_DOWN class="w-6 h-6" />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProblemSection() -> impl IntoView {
    view! {
        <section class="landing-section">
            <div class="landing-container">
                <SectionHeading
                    title="Self-improving websites are the future"
                    subtitle="Every day of delayed optimization is lost revenue. The current process is fundamentally broken."
                />
                <div class="landing-grid">
                    {PROBLEMS
                        .iter()
                        .map(|(icon, title, description)| {
                            view! { <InfoCard icon=*icon title=*title description=*description /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SolutionSection() -> impl IntoView {
    view! {
        <section class="landing-section landing-section-dark">
            <div class="landing-container">
                <SectionHeading
                    title="Websites that optimize themselves"
                    subtitle="One agent that audits, designs and ships. Every change is predicted, reviewed and measured."
                />
                <StepList steps=SOLUTION_STEPS />
            </div>
        </section>
    }
}

#[component]
fn HowItWorksSection() -> impl IntoView {
    view! {
        <section class="landing-section">
            <div class="landing-container">
                <SectionHeading
                    title="From audit to revenue lift in three steps"
                    subtitle="Enterprise-grade setup in minutes. Guaranteed results while you focus on strategy."
                />
                <StepList steps=HOW_IT_WORKS_STEPS />
            </div>
        </section>
    }
}

#[component]
fn GuaranteeSection() -> impl IntoView {
    view! {
        <section class="landing-section landing-section-tinted">
            <div class="landing-container landing-narrow">
                <SectionHeading title="We guarantee your results" />
                <div class="landing-guarantee-card landing-scroll-animate">
                    <div class="landing-icon-badge">
                        <Icon name=icons::SHIELD class="w-6 h-6" />
                    </div>
                    <p>
                        "Our causal inference engine predicts conversion lifts with 94% accuracy. Every deployment comes with our "
                        <strong>"Conversion Warranty"</strong>
                        ": if we don't deliver the predicted revenue lift, you get a full service credit."
                    </p>
                    <p class="landing-guarantee-tagline">
                        "Backed by statistical science. Guaranteed by us."
                    </p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Footer(on_contact: Callback<()>) -> impl IntoView {
    view! {
        <footer class="landing-footer">
            <div class="landing-container landing-footer-inner">
                <div>
                    <h3 class="landing-footer-brand">"AegntSite"</h3>
                    <p class="landing-footer-tagline">
                        "The world's first agentic website optimization platform"
                    </p>
                </div>
                <div class="landing-footer-contact">
                    <button
                        type="button"
                        class="landing-btn-link"
                        on:click=move |_| on_contact.run(())
                    >
                        <Icon name=icons::MAIL class="icon-text" />
                        "Contact us"
                    </button>
                    <p class="landing-footer-note">"Have questions? We'd love to hear from you."</p>
                </div>
            </div>
            <div class="landing-container landing-footer-bottom">
                "© 2025 AegntSite. All rights reserved."
            </div>
        </footer>
    }
}

#[component]
fn SectionHeading(
    title: &'static str,
    #[prop(optional)]
    subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="landing-heading landing-scroll-animate">
            <h2>{title}</h2>
            {subtitle.map(|s| view! { <p>{s}</p> })}
        </div>
    }
}

/// Card with an icon badge, used by the problem and assessment sections
#[component]
fn InfoCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="landing-card landing-scroll-animate">
            <div class="landing-icon-badge">
                <Icon name=icon class="w-6 h-6" />
            </div>
            <h3>{title}</h3>
            <p>{description}</p>
        </div>
    }
}

#[component]
fn StepList(steps: &'static [(&'static str, &'static str, &'static str)]) -> impl IntoView {
    view! {
        <ol class="landing-steps">
            {steps
                .iter()
                .map(|(number, title, description)| {
                    view! {
                        <li class="landing-step landing-scroll-animate">
                            <span class="landing-step-number">{*number}</span>
                            <div>
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </div>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="AegntSite - Self-Evolving Websites" />

        <Meta name="description" content="AegntSite builds self-evolving websites that audit, redesign and deploy guaranteed conversion lifts. Get a free website assessment or join the private beta." />
        <Meta name="keywords" content="conversion rate optimization, CRO, website assessment, agentic optimization, AI website design, conversion warranty" />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content="https://aegntsite.com/" />
        <Meta property="og:title" content="AegntSite - Self-Evolving Websites" />
        <Meta property="og:description" content="Websites that audit, redesign and deploy guaranteed conversion lifts while you focus on the human things." />

        // Twitter
        <Meta property="twitter:card" content="summary" />
        <Meta property="twitter:title" content="AegntSite - Self-Evolving Websites" />
        <Meta property="twitter:description" content="Websites that audit, redesign and deploy guaranteed conversion lifts while you focus on the human things." />

        <Link rel="canonical" href="https://aegntsite.com/" />
    }
}

/// CSS for the entrance and scroll reveal animations
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            html { scroll-behavior: smooth; }

            @keyframes landing-fade-in-up {
                from { opacity: 0; transform: translateY(30px); }
                to { opacity: 1; transform: translateY(0); }
            }
            .landing-fade-in-up {
                opacity: 0;
                animation: landing-fade-in-up 0.8s ease-out forwards;
            }
            .landing-delay-200 { animation-delay: 0.2s; }
            .landing-delay-400 { animation-delay: 0.4s; }

            .landing-scroll-animate {
                opacity: 0;
                transform: translateY(40px);
                transition: opacity 0.7s ease-out, transform 0.7s ease-out;
            }
            .landing-scroll-animate.visible {
                opacity: 1;
                transform: translateY(0);
            }

            @keyframes landing-bounce {
                0%, 100% { transform: translate(-50%, 0); }
                50% { transform: translate(-50%, -8px); }
            }
            .landing-scroll-hint {
                position: absolute;
                bottom: 2rem;
                left: 50%;
                animation: landing-bounce 1.5s infinite;
            }

            @media (prefers-reduced-motion: reduce) {
                html { scroll-behavior: auto; }
                .landing-fade-in-up,
                .landing-scroll-animate {
                    opacity: 1;
                    transform: none;
                    animation: none;
                    transition: none;
                }
                .landing-scroll-hint { animation: none; }
            }
            "#
        </style>
    }
}

/// Script for scroll-triggered animations using IntersectionObserver
#[component]
fn ScrollAnimationScript() -> impl IntoView {
    view! {
        <script>
            r#"
            (function() {
                function initScrollAnimations() {
                    const targets = document.querySelectorAll('.landing-scroll-animate');
                    if (!('IntersectionObserver' in window)) {
                        targets.forEach(el => el.classList.add('visible'));
                        return;
                    }

                    const observer = new IntersectionObserver((entries) => {
                        entries.forEach(entry => {
                            if (entry.isIntersecting) {
                                entry.target.classList.add('visible');
                                observer.unobserve(entry.target);
                            }
                        });
                    }, {
                        threshold: 0.1,
                        rootMargin: '0px 0px -50px 0px'
                    });

                    targets.forEach(el => observer.observe(el));
                }

                if (document.readyState === 'loading') {
                    document.addEventListener('DOMContentLoaded', initScrollAnimations);
                } else {
                    initScrollAnimations();
                }
            })();
            "#
        </script>
    }
}
