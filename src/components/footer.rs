use chrono::Datelike;
use leptos::prelude::*;

use crate::config;
use crate::models::SERVICES;
use crate::services::navigator::{self, Document, Section};

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-about">
                    <span class="brand-name">{config::BRAND}</span>
                    <p>
                        "Helping authors transform their books into professional, visible, and successful works "
                        "through specialized formatting, design, and community promotion."
                    </p>
                </div>

                <div>
                    <h4>"Services"</h4>
                    <ul>
                        {SERVICES
                            .iter()
                            .map(|s| {
                                view! {
                                    <li>
                                        <button
                                            class="footer-link"
                                            on:click=move |_| navigator::go_to_section(&Document, Section::Services)
                                        >
                                            {s.title}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div>
                    <h4>"Contact"</h4>
                    <ul>
                        <li>{config::CONTACT_EMAIL}</li>
                        <li>{config::CONTACT_PHONE}</li>
                        <li>{config::LOCATION_TAG}</li>
                    </ul>
                </div>
            </div>

            <div class="footer-bottom">
                <p>"© " {year} " Katie Jones Reads. All rights reserved."</p>
            </div>
        </footer>
    }
}
