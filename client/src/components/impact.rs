//! Impact statistics section with the animated count-up.

use leptos::prelude::*;

use crate::state::stats::{ANIMATION_DURATION_MS, IMPACT_STATS, is_complete, projected_value};

#[cfg(feature = "hydrate")]
const TICK_MS: u32 = 50;

/// Impact cards counting up from zero to their targets. The count-up runs
/// once, ticks on a timer, and stops itself at the targets; without a
/// browser the final values render directly.
#[component]
pub fn ImpactSection() -> impl IntoView {
    let elapsed_ms = RwSignal::new(0.0_f64);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            while !is_complete(elapsed_ms.get_untracked(), ANIMATION_DURATION_MS) {
                gloo_timers::future::TimeoutFuture::new(TICK_MS).await;
                elapsed_ms.update(|t| *t += f64::from(TICK_MS));
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        elapsed_ms.set(ANIMATION_DURATION_MS);
    }

    view! {
        <section class="impact">
            <div class="impact__cards">
                {IMPACT_STATS
                    .iter()
                    .map(|stat| {
                        let target = stat.target;
                        let suffix = stat.suffix;
                        let label = stat.label;
                        view! {
                            <div class="impact__card">
                                <h3>
                                    {move || {
                                        format!(
                                            "{}{}",
                                            projected_value(target, elapsed_ms.get(), ANIMATION_DURATION_MS),
                                            suffix,
                                        )
                                    }}
                                </h3>
                                <p>{label}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
