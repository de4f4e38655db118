use leptos::{html, prelude::*};
use leptos_use::{use_interval_fn_with_options, utils::Pausable, UseIntervalFnOptions};

use super::reveal::{use_hydrated, use_reveal};
use crate::content::portfolio;
use crate::motion::counter::CounterRamp;

/// Counters that ramp up from zero the first time the strip scrolls into view.
#[component]
pub fn StatsStrip() -> impl IntoView {
    let content = portfolio();
    let config = &content.motion;
    let targets = content.stats.iter().map(|s| s.target).collect::<Vec<_>>();
    let target = NodeRef::<html::Div>::new();
    let reveal = use_reveal(target, "stats-section".to_string());
    let shown = reveal.shown;
    let hydrated = use_hydrated();

    let ramp = StoredValue::new(CounterRamp::new(config.counter_steps));
    let (values, set_values) = signal(vec![0u64; targets.len()]);
    let (finished, set_finished) = signal(false);

    let Pausable { pause, resume, .. } = use_interval_fn_with_options(
        move || {
            let running = ramp.try_update_value(CounterRamp::advance).unwrap_or(false);
            let current = ramp.with_value(|r| targets.iter().map(|t| r.value(*t)).collect());
            set_values.set(current);
            if !running {
                set_finished.set(true);
            }
        },
        config.counter_step_ms(),
        UseIntervalFnOptions::default().immediate(false),
    );

    Effect::new(move |_| {
        if shown.get() && !ramp.with_value(CounterRamp::is_done) {
            resume();
        }
    });
    Effect::new(move |_| {
        if finished.get() {
            pause();
        }
    });

    view! {
        <section class="py-20 px-6 relative">
            <div node_ref=target data-animate-id="stats-section" class="max-w-6xl mx-auto">
                <div class="grid grid-cols-2 md:grid-cols-4 gap-8">
                    {content
                        .stats
                        .iter()
                        .enumerate()
                        .map(|(i, stat)| {
                            let class = move || {
                                format!(
                                    "text-center p-6 bg-gradient-to-br from-slate-800/50 to-slate-900/50 backdrop-blur-sm rounded-2xl border border-slate-700/50 hover:border-cyan-400/50 transition-all duration-500 {}",
                                    if reveal.concealed.get() { "opacity-0 translate-y-10" } else { "opacity-100 translate-y-0" },
                                )
                            };
                            let full = stat.target;
                            // static markup shows the finished count
                            let value = move || {
                                if hydrated.get() {
                                    values.with(|v| v.get(i).copied().unwrap_or_default())
                                } else {
                                    full
                                }
                            };
                            view! {
                                <div class=class style=format!("transition-delay: {}ms;", i * 100)>
                                    <div class="text-3xl mb-4">{stat.glyph.clone()}</div>
                                    <div class="text-4xl font-bold text-white mb-2">
                                        {value}
                                        {stat.suffix.clone()}
                                    </div>
                                    <div class="text-slate-400 text-sm">{stat.label.clone()}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::reveal::provide_reveal_context;

    #[test]
    fn test_server_markup_shows_final_counts() {
        Owner::new().with(|| {
            provide_reveal_context(&portfolio().motion);
            let html = view! { <StatsStrip /> }.to_html();
            assert!(html.contains("1500"));
            assert!(html.contains("opacity-100 translate-y-0"));
            assert!(!html.contains("opacity-0 translate-y-10"));
        });
    }
}
