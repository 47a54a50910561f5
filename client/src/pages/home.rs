//! Landing page: hero, impact statistics, services grid, chat widget.

use leptos::prelude::*;

use crate::components::chat_widget::ChatWidget;
use crate::components::hero::Hero;
use crate::components::impact::ImpactSection;
use crate::components::services::ServicesSection;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <Hero/>
            <ImpactSection/>
            <ServicesSection/>
            <ChatWidget/>
        </div>
    }
}
