//! Services grid — the eight service cards with their section links.

use leptos::prelude::*;

struct Service {
    title: &'static str,
    blurb: &'static str,
    href: &'static str,
    image: &'static str,
}

const SERVICES: [Service; 8] = [
    Service {
        title: "TeleCare / Telemedicine",
        blurb: "Video consultations, online appointments, and specialist access for everyone, anywhere.",
        href: "/telecare",
        image: "/assets/services/telecare.jpg",
    },
    Service {
        title: "BAHO Meds (e-Pharmacy)",
        blurb: "Order online prescriptions, chronic medication packs, and have them delivered to your home.",
        href: "/pharmacy",
        image: "/assets/services/pharmacy.jpg",
    },
    Service {
        title: "Diagnostics & Lab Services",
        blurb: "Blood tests, infectious disease screening, and preventive checkups at your convenience.",
        href: "/diagnostics",
        image: "/assets/services/diagnostics.jpg",
    },
    Service {
        title: "ChronicCare / Disease Management",
        blurb: "Manage diabetes, hypertension, HIV/AIDS, and more with ongoing support and subscriptions.",
        href: "/chroniccare",
        image: "/assets/services/chroniccare.jpg",
    },
    Service {
        title: "LifeTrack (Maternal & Child Health)",
        blurb: "Pregnancy & child monitoring, immunizations, and nutritional guidance for mothers and children.",
        href: "/lifetrack",
        image: "/assets/services/lifetrack.jpg",
    },
    Service {
        title: "Mental Health & Counseling",
        blurb: "Tele-counseling, therapy, and stress management for youth, adults, and corporates.",
        href: "/mental",
        image: "/assets/services/mental.jpg",
    },
    Service {
        title: "Preventive & Wellness Programs",
        blurb: "Fitness, nutrition, and lifestyle coaching for urban population and corporate clients.",
        href: "/preventive",
        image: "/assets/services/preventive.jpg",
    },
    Service {
        title: "GlobalCare / Medical Tourism",
        blurb: "High-value procedures, concierge services, and international referrals for specialized care.",
        href: "/globalcare",
        image: "/assets/services/globalcare.jpg",
    },
];

#[component]
pub fn ServicesSection() -> impl IntoView {
    view! {
        <section class="services">
            <h2>"Our Services"</h2>
            <div class="services__cards">
                {SERVICES
                    .iter()
                    .map(|service| {
                        view! {
                            <div class="services__card">
                                <img src=service.image alt=service.title class="services__image"/>
                                <h3>{service.title}</h3>
                                <p>{service.blurb}</p>
                                <a href=service.href class="services__button">
                                    "Learn More"
                                </a>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
