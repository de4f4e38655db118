use leptos::prelude::*;
use leptos_use::use_interval_fn;

use crate::content::portfolio;
use crate::motion::particles::ParticleField;

/// Field of drifting dots behind the page. Seeded on the client only, so the
/// server renders an empty layer and hydration never disagrees on positions.
#[component]
pub fn Particles() -> impl IntoView {
    let config = &portfolio().motion;
    let count = config.particle_count;
    let field = RwSignal::new(ParticleField::default());

    Effect::new(move |_| {
        let seed = chrono::Utc::now().timestamp_millis().unsigned_abs();
        field.set(ParticleField::seeded(count, seed));
    });

    let _ = use_interval_fn(move || field.update(ParticleField::advance), config.particle_tick_ms);

    view! {
        <div class="fixed inset-0 pointer-events-none z-0" aria-hidden="true">
            <For
                each=move || 0..field.with(|f| f.particles().len())
                key=|i| *i
                let:i
            >
                <div
                    class="absolute rounded-full bg-cyan-400"
                    style=move || {
                        field.with(|f| f.particles().get(i).map(|p| p.style()).unwrap_or_default())
                    }
                />
            </For>
        </div>
    }
}
