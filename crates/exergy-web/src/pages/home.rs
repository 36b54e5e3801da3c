//! Home Page

use leptos::prelude::*;

use exergy_core::site::{
    BRAND_BLUE, DEMO_BOOKING_URL, PARTNERSHIP_BOOKING_URL, Route, SOLUTIONS, TEAM,
};

use crate::browser::{open_in_new_tab, scroll_to_contact};
use crate::components::PageShell;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageShell route=Route::Home>
            <Hero />
            <Features />
            <WhatSetsUsApart />
            <Projects />
            <CoreSolutions />
            <Team />
        </PageShell>
    }
}

/// "Book a Demo" / "Contact Us" button pair
#[component]
fn CallToAction(booking_url: &'static str) -> impl IntoView {
    view! {
        <div class="cta">
            <button
                class="btn btn-primary"
                style=format!("background-color: {BRAND_BLUE}")
                on:click=move |_| open_in_new_tab(booking_url)
            >
                "Book a Demo →"
            </button>
            <button
                class="btn btn-outline"
                on:click=move |ev| {
                    ev.prevent_default();
                    scroll_to_contact();
                }
            >
                "Contact Us"
            </button>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <header class="hero">
            <div class="hero-content">
                <h1>"Process Learning Engine" <br /> "for Food Production"</h1>
                <p class="tagline">
                    "A system that captures, analyzes, and learns from each production run."
                </p>
                <CallToAction booking_url=DEMO_BOOKING_URL />
            </div>
        </header>
    }
}

#[component]
fn Features() -> impl IntoView {
    view! {
        <section class="features">
            <div class="feature">
                <div class="feature-text">
                    <h3>"Data → Insights"</h3>
                    <p>
                        "Your industrial systems generate massive amounts of data every day. Exergy transforms it into actionable insights and recommendations, giving engineers and decision-makers the clarity they need to improve performance and reliability."
                    </p>
                </div>
                <img src="/data-insights.jpg" alt="Data to Insights" class="feature-image" />
            </div>

            <div class="feature feature-reversed">
                <img src="/aipowered.jpg" alt="AI-Powered Efficiency" class="feature-image" />
                <div class="feature-text">
                    <h3>"AI-Powered" <br /> "Efficiency"</h3>
                    <p>
                        "Discover the sweet spot for your process. Our tool pinpoints the optimal operating parameters to ensure consistent yield, removing guesswork and eliminating operator trial-and-error."
                    </p>
                </div>
            </div>

            <div class="feature">
                <div class="feature-text">
                    <h3>"Sustainable" <br /> "Operations"</h3>
                    <p>
                        "Exergy's solutions are designed not only for productivity but also for impact. By reducing waste, energy consumption, and material intensity, we help companies move toward more sustainable and resource-efficient industrial processes."
                    </p>
                </div>
                <img
                    src="/sustainableoperations.jpg"
                    alt="Sustainable Operations"
                    class="feature-image"
                />
            </div>
        </section>
    }
}

#[component]
fn ImageCard(image: &'static str, alt: &'static str, title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="image-card">
            <img src=image alt=alt />
            <div class="image-card-shade"></div>
            <div class="image-card-body">
                <h3>{title}</h3>
                {children()}
            </div>
        </div>
    }
}

#[component]
fn WhatSetsUsApart() -> impl IntoView {
    view! {
        <section class="apart">
            <div class="section-heading">
                <h2>"What Sets Us Apart"</h2>
                <p>"Unique expertise and technology that delivers measurable results"</p>
            </div>
            <div class="card-grid three">
                <ImageCard image="/combinedexpertise.jpg" alt="Combined Expertise" title="Combined Expertise">
                    <p>
                        "Our unique strength lies in combining deep process engineering knowledge with advanced data science capabilities. This dual expertise enables us to create AI solutions that truly understand industrial processes and deliver practical, implementable results."
                    </p>
                </ImageCard>
                <ImageCard image="/hybridmodeling.jpg" alt="Hybrid Modeling Approach" title="Hybrid Modeling Approach">
                    <p>
                        "We use cutting-edge hybrid modeling that combines physics-based knowledge with machine learning. Our iterative system continuously learns and improves as you feed it more data, becoming smarter and more accurate over time."
                    </p>
                </ImageCard>
                <ImageCard image="/provenroi.jpg" alt="Proven ROI" title="Proven ROI">
                    <p>
                        "We aim for a minimum of 10x return on investment for our clients. Our solutions enable both sustainability and efficiency, delivering measurable outcomes in reduced waste, energy savings, and improved productivity that directly impact your bottom line."
                    </p>
                </ImageCard>
            </div>
        </section>
    }
}

#[component]
fn Projects() -> impl IntoView {
    view! {
        <section class="projects">
            <div class="section-heading">
                <h2>"Projects & Partnerships" <br /> "That Drive Impact"</h2>
                <p>
                    "Whether you are a research institution or an industrial company, Exergy offers the expertise and technology to turn collaboration into results. From co-developing innovative methodologies to deploying scalable AI-driven solutions, we're ready to create impact together."
                </p>
            </div>
            <div class="card-grid two">
                <ImageCard
                    image="/aidriven.jpg"
                    alt="AI-Assisted Packaging Recycling in Food Industry"
                    title="AI-Driven Packaging Recycling for the Food Industry"
                >
                    <p>
                        "Developing advanced AI models to optimize packaging recycling processes in the food industry. Our solution enables food manufacturers to reduce packaging waste, improve circular economy practices, and meet sustainability targets while maintaining product safety and quality standards."
                    </p>
                    <span class="btn btn-ghost">"Learn More →"</span>
                </ImageCard>
                <ImageCard
                    image="/shapingfuture.jpg"
                    alt="AI-Assisted Food Production Process Modeling"
                    title="Shaping the Future of Food Production with AI-Assisted Process Modeling"
                >
                    <p>
                        "Revolutionizing food production through advanced AI-driven process modeling that optimizes quality, safety, and efficiency while reducing environmental impact."
                    </p>
                    <span class="btn btn-ghost">"Learn More →"</span>
                </ImageCard>
            </div>
            <div class="projects-cta">
                <p>"Get in touch to explore how we can collaborate."</p>
                <CallToAction booking_url=PARTNERSHIP_BOOKING_URL />
            </div>
        </section>
    }
}

#[component]
fn CoreSolutions() -> impl IntoView {
    view! {
        <section class="solutions">
            <div class="section-heading">
                <h2>"Our Core Solutions"</h2>
                <p>"Advanced AI models tailored for industrial process optimization"</p>
            </div>
            <div class="card-grid three">
                {SOLUTIONS
                    .into_iter()
                    .map(|solution| {
                        view! {
                            <div class="solution-card">
                                <div
                                    class="solution-tile"
                                    style=format!("background-color: {}", solution.tile_color)
                                >
                                    <img src=solution.image alt=solution.title />
                                </div>
                                <h3>{solution.title}</h3>
                                <p>{solution.summary}</p>
                                <ul class="highlights">
                                    {solution
                                        .highlights
                                        .into_iter()
                                        .map(|item| {
                                            view! {
                                                <li>
                                                    <span
                                                        class="dot"
                                                        style=format!("background-color: {BRAND_BLUE}")
                                                    ></span>
                                                    {item}
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Team() -> impl IntoView {
    view! {
        <section class="team">
            <div class="section-heading">
                <h2>"Meet Our Team"</h2>
                <p>"Expert process engineers and data scientists driving innovation"</p>
            </div>
            <div class="card-grid four">
                {TEAM
                    .into_iter()
                    .map(|member| {
                        view! {
                            <a
                                href=member.linkedin
                                target="_blank"
                                rel="noopener noreferrer"
                                class="team-card"
                            >
                                <div
                                    class="avatar"
                                    style=format!("background-color: {}", member.accent_background())
                                >
                                    <span style=format!("color: {}", member.accent)>
                                        {member.initials()}
                                    </span>
                                </div>
                                <h3>{member.name}</h3>
                                <p>{member.role}</p>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
