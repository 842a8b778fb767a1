use yew::prelude::*;

use crate::config;
use crate::contact::ContactForm;
use crate::effects::anchor::AnchorLink;
use crate::effects::counter::StatCounter;
use crate::effects::parallax::GradientOrbs;
use crate::effects::reveal::use_reveal_on_scroll;
use crate::effects::tilt::TiltCard;

const PROBLEMS: [(&str, &str); 3] = [
    ("Drowning in busywork", "Your team spends hours on copy-paste, data entry and follow-ups that a machine could do."),
    ("Leads slipping away", "Enquiries sit unanswered overnight and prospects move on to whoever replied first."),
    ("Tools that don't talk", "Spreadsheets, inboxes and CRMs each hold part of the picture and none of them agree."),
];

const SERVICES: [(&str, &str); 4] = [
    ("Workflow Automation", "We map your repetitive processes and wire them together so they run on their own."),
    ("AI Chatbots", "Answer customer questions around the clock and hand warm leads straight to your team."),
    ("Web Development", "Fast, modern websites that turn visitors into enquiries."),
    ("Consulting", "Not sure where to start? We'll audit your operations and show you where automation pays off."),
];

const REASONS: [(&str, &str); 3] = [
    ("Built around you", "No templates. Every automation is designed for how your business actually works."),
    ("Fast turnaround", "Most projects go live within two weeks, not two quarters."),
    ("Ongoing support", "We stay on after launch to tune, extend and fix whatever comes up."),
];

const STEPS: [(&str, &str); 3] = [
    ("Discover", "A free call to understand your goals and the processes slowing you down."),
    ("Build", "We design, build and test your automations alongside your team."),
    ("Grow", "You get your time back; we keep improving things as you scale."),
];

const TESTIMONIALS: [(&str, &str, &str); 2] = [
    ("Yukto automated our entire onboarding flow. What took a day now takes minutes.", "Priya S.", "Operations Lead"),
    ("Our chatbot books appointments while we sleep. Best investment we made this year.", "Marcus T.", "Clinic Owner"),
];

#[function_component(Home)]
pub fn home() -> Html {
    use_reveal_on_scroll();

    html! {
        <main class="landing-page">
            <section id="home" class="hero">
                <GradientOrbs count={3} />
                <div class="hero-content">
                    <h1>{"Automate the busywork. "}<span class="gradient-text">{"Grow the business."}</span></h1>
                    <p class="hero-subtitle">
                        {"We build custom automations, AI assistants and websites that save small teams hours every week."}
                    </p>
                    <div class="hero-buttons">
                        <AnchorLink href="#contact" class="btn btn-primary">{"Get a Free Consultation"}</AnchorLink>
                        <AnchorLink href="#services" class="btn btn-secondary">{"See What We Do"}</AnchorLink>
                    </div>
                    <div class="hero-stats">
                        <div class="stat">
                            <StatCounter target={50} suffix="+" />
                            <span class="stat-label">{"Processes automated"}</span>
                        </div>
                        <div class="stat">
                            <StatCounter target={20} suffix="h" />
                            <span class="stat-label">{"Saved per week, on average"}</span>
                        </div>
                        <div class="stat">
                            <StatCounter target={24} suffix="h" />
                            <span class="stat-label">{"Response time"}</span>
                        </div>
                    </div>
                </div>
                <div class="hero-visual">
                    <div class="visual-card">
                        <span class="visual-label">{"Invoices processed today"}</span>
                        <span class="visual-value">{"128"}</span>
                    </div>
                </div>
            </section>

            <section id="problems" class="problems">
                <h2>{"Sound familiar?"}</h2>
                <div class="problems-grid">
                    { for PROBLEMS.iter().map(|(title, body)| html! {
                        <div class="problem-card">
                            <h3>{*title}</h3>
                            <p>{*body}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="services" class="services">
                <h2>{"What we do"}</h2>
                <div class="services-grid">
                    { for SERVICES.iter().map(|(title, body)| html! {
                        <TiltCard class="service-card">
                            <h3>{*title}</h3>
                            <p>{*body}</p>
                        </TiltCard>
                    }) }
                </div>
            </section>

            <section id="why-us" class="why-us">
                <h2>{"Why Yukto"}</h2>
                <div class="why-grid">
                    { for REASONS.iter().map(|(title, body)| html! {
                        <TiltCard class="why-card">
                            <h3>{*title}</h3>
                            <p>{*body}</p>
                        </TiltCard>
                    }) }
                </div>
            </section>

            <section id="process" class="process">
                <h2>{"How it works"}</h2>
                <ol class="process-steps">
                    { for STEPS.iter().enumerate().map(|(i, (title, body))| html! {
                        <li class="process-step">
                            <span class="step-number">{ (i + 1).to_string() }</span>
                            <h3>{*title}</h3>
                            <p>{*body}</p>
                        </li>
                    }) }
                </ol>
            </section>

            <section id="testimonials" class="testimonials">
                <h2>{"What clients say"}</h2>
                <div class="testimonials-grid">
                    { for TESTIMONIALS.iter().map(|(quote, name, role)| html! {
                        <TiltCard class="testimonial-card">
                            <p class="testimonial-quote">{*quote}</p>
                            <p class="testimonial-author">{*name}<span>{" · "}{*role}</span></p>
                        </TiltCard>
                    }) }
                </div>
            </section>

            <section id="contact" class="contact">
                <div class="contact-info">
                    <h2>{"Let's talk"}</h2>
                    <p>{"Tell us what's eating your team's time. We'll reply within 24 hours."}</p>
                    <p>
                        {"Prefer email? "}
                        <a href={format!("mailto:{}", config::FALLBACK_EMAIL)}>{config::FALLBACK_EMAIL}</a>
                    </p>
                </div>
                <ContactForm />
            </section>

            <footer class="footer">
                <p>{"© Yukto. All rights reserved."}</p>
            </footer>
        </main>
    }
}
