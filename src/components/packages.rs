use leptos::prelude::*;

use crate::models::package::{self, PackageOffer};
use crate::services::Document;

use super::LeadFormSignal;

#[component]
pub fn PackageGrid(controller: LeadFormSignal) -> impl IntoView {
    view! {
        <div class="package-grid">
            {package::catalog()
                .iter()
                .map(|offer| view! { <PackageCard offer=offer controller=controller/> })
                .collect_view()}
        </div>
    }
}

#[component]
fn PackageCard(offer: &'static PackageOffer, controller: LeadFormSignal) -> impl IntoView {
    let choose = move |_| controller.update(|c| c.select_package(offer.name, &Document));

    view! {
        <div class="package-card" class:recommended=offer.is_recommended()>
            <div class="package-header">
                <h3>{offer.name}</h3>
                {offer.badge.map(|badge| {
                    view! { <span class="package-badge">{badge.label()}</span> }
                })}
            </div>
            <div class="package-price">{offer.price}</div>

            <ul class="package-features">
                {offer
                    .features
                    .iter()
                    .map(|feature| view! { <li>{*feature}</li> })
                    .collect_view()}
            </ul>

            <button class="btn btn-primary btn-block" on:click=choose>
                "Choose " {offer.short_name()}
            </button>
        </div>
    }
}
