use leptos::prelude::*;

use crate::config;
use crate::services::navigator::{self, Document, Section};
use crate::services::{ScrollObserver, WindowScroll};

#[component]
pub fn Nav() -> impl IntoView {
    let (condensed, set_condensed) = signal(false);

    // Listen for the lifetime of the nav bar only
    let observer = ScrollObserver::attach(&WindowScroll, move |c| set_condensed.set(c));
    on_cleanup(move || drop(observer));

    let link = move |section: Section, label: &'static str| {
        view! {
            <button class="nav-link" on:click=move |_| navigator::go_to_section(&Document, section)>
                {label}
            </button>
        }
    };

    view! {
        <nav class="main-nav" class:condensed=move || condensed.get()>
            <div class="nav-brand" on:click=move |_| navigator::scroll_to_top(&Document)>
                <span class="brand-mark">"KJ"</span>
                <span class="brand-name">{config::BRAND}</span>
            </div>

            <div class="nav-links">
                {link(Section::About, "About")}
                {link(Section::Services, "Services")}
                {link(Section::Packages, "Packages")}
                <button
                    class="btn btn-primary btn-small"
                    on:click=move |_| navigator::go_to_section(&Document, Section::Contact)
                >
                    "Get Free Check"
                </button>
            </div>
        </nav>
    }
}
