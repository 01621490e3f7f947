use leptos::prelude::*;

use crate::components::{lead_form_signal, Footer, LeadFormPanel, PackageGrid};
use crate::config;
use crate::models::{SERVICES, TESTIMONIAL, WORKS};
use crate::services::navigator::{self, Document, Section};

#[component]
pub fn HomePage() -> impl IntoView {
    // Owned here so package cards can fill in the contact form
    let lead_form = lead_form_signal();

    view! {
        <div class="home-page">
            <section class="hero">
                <div class="hero-copy">
                    <span class="eyebrow">"eBook Promotion Specialist"</span>
                    <h1>
                        "Get Your Book Ready to " <span class="accent">"Rank, Sell & Reach"</span>
                        " More Readers"
                    </h1>
                    <p class="description">
                        "I help authors format their books, find the right keywords, set up categories, "
                        "design covers, and promote their books in active reading communities."
                    </p>
                    <div class="cta-buttons">
                        <button
                            class="btn btn-primary"
                            on:click=move |_| navigator::go_to_section(&Document, Section::Contact)
                        >
                            "Get a Free Check"
                        </button>
                        <button
                            class="btn btn-secondary"
                            on:click=move |_| navigator::go_to_section(&Document, Section::Packages)
                        >
                            "View Packages"
                        </button>
                    </div>
                </div>
                <div class="hero-stat">
                    <p class="stat-value">"100+"</p>
                    <p class="stat-label">"Authors Helped"</p>
                </div>
            </section>

            <section id=Section::About.id() class="about">
                <h2>"About Me"</h2>
                <p>
                    "I am an eBook specialist who has worked with hundreds of authors across different genres. "
                    "I started by helping new writers format and prepare their books for publishing, and over time "
                    "I expanded into keyword research, categories setup, book cover design, and marketing support."
                </p>
                <p>
                    "Today, I work with authors who want a smooth publishing process and real results. "
                    "My goal is simple: help you get more visibility, more readers, and more sales."
                </p>
            </section>

            <section id=Section::Services.id() class="services">
                <h2>"Professional Services"</h2>
                <p class="subtitle">"Everything you need to turn your manuscript into a bestseller."</p>
                <div class="features">
                    {SERVICES
                        .iter()
                        .map(|s| {
                            view! {
                                <div class="feature">
                                    <img src=s.image alt=s.title/>
                                    <h3>{s.title}</h3>
                                    <p>{s.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="works">
                <h2>"My Works"</h2>
                <p class="subtitle">
                    "Here are some of the books I've worked on. Each project includes formatting, setup, or promotional support."
                </p>
                <div class="works-grid">
                    {WORKS
                        .iter()
                        .enumerate()
                        .map(|(i, src)| view! { <img src={*src} alt=format!("Book {}", i + 1)/> })
                        .collect_view()}
                </div>
                <blockquote class="testimonial">
                    <p>{TESTIMONIAL.quote}</p>
                    <cite>{TESTIMONIAL.author}</cite>
                    <span class="credit">{TESTIMONIAL.credit}</span>
                </blockquote>
            </section>

            <section id=Section::Packages.id() class="packages">
                <h2>"Book Club Campaign Packages"</h2>
                <p class="subtitle">"Tailored to Elevate Your Story"</p>
                <PackageGrid controller=lead_form/>
            </section>

            <section id=Section::Contact.id() class="contact">
                <div class="contact-intro">
                    <h2>"Ready to get started?"</h2>
                    <p>
                        "Send me a message with your book title and what you need help with. "
                        "I'll reply as fast as I can."
                    </p>
                    <a href=format!("mailto:{}", config::CONTACT_EMAIL)>{config::CONTACT_EMAIL}</a>
                    <p>{config::CONTACT_PHONE}</p>

                    <h3>"To Begin, Please provide:"</h3>
                    <ul>
                        <li>"Book file (PDF or ePub)"</li>
                        <li>"Preferred sales link (Amazon, Goodreads, etc.)"</li>
                        <li>"Optional promo assets (cover, tagline, etc.)"</li>
                    </ul>
                    <h4>"For invoicing:"</h4>
                    <p>"Full name, Email address, Location (state and country)"</p>
                </div>
                <LeadFormPanel controller=lead_form/>
            </section>

            <Footer/>
        </div>
    }
}
