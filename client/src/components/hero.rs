//! Hero banner with the patient-care call to action.

use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__text">
                <h1>"Welcome to BAHO"</h1>
                <p>"Accessible, affordable, and high-quality healthcare for everyone in Africa."</p>
                <a href="/patient-care" class="hero__button">
                    "Start Patient Care"
                </a>
            </div>
        </section>
    }
}
