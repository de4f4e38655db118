use std::time::Duration;

use leptos::{leptos_dom::helpers::TimeoutHandle, prelude::*};

use super::reveal::{use_hydrated, Reveal};
use crate::content::portfolio;
use crate::motion::typing::{Cadence, TypeCycler};

#[component]
pub fn Hero() -> impl IntoView {
    let content = portfolio();
    view! {
        <section id="hero" class="min-h-screen flex items-center justify-center px-6 relative">
            <div class="max-w-5xl mx-auto text-center relative z-10">
                <Reveal id="hero-title">
                    <div class="mb-8 inline-block">
                        <div class="px-6 py-2 bg-gradient-to-r from-cyan-500/20 to-blue-500/20 border border-cyan-400/30 rounded-full backdrop-blur-sm">
                            <span class="text-cyan-400 font-semibold">{content.greeting.clone()}</span>
                        </div>
                    </div>
                    <h1 class="text-6xl md:text-8xl font-bold mb-6">
                        <span class="bg-gradient-to-r from-cyan-400 via-blue-500 to-purple-600 bg-clip-text text-transparent">
                            {content.name.clone()}
                        </span>
                    </h1>
                    <div class="h-16 mb-8">
                        <p class="text-2xl md:text-4xl text-slate-300">
                            <TypedTitle />
                            <span class="inline-block w-1 h-8 md:h-10 bg-cyan-400 ml-1 animate-pulse" />
                        </p>
                    </div>
                    <p class="text-lg text-slate-400 max-w-2xl mx-auto mb-12 leading-relaxed">
                        {content.tagline.clone()}
                    </p>
                    <div class="flex flex-wrap justify-center gap-4 mb-12">
                        <a
                            href="#projects"
                            class="group px-8 py-4 bg-gradient-to-r from-cyan-500 to-blue-500 rounded-full font-semibold hover:scale-105 hover:shadow-lg hover:shadow-cyan-500/50 transition-all duration-300 flex items-center gap-2"
                        >
                            "View Projects"
                            <span class="group-hover:translate-x-1 transition-transform">"→"</span>
                        </a>
                        <a
                            href="#contact"
                            class="px-8 py-4 border-2 border-cyan-400/50 rounded-full font-semibold hover:bg-cyan-400/10 hover:scale-105 transition-all duration-300 backdrop-blur-sm"
                        >
                            "Get in Touch"
                        </a>
                    </div>
                    <div class="flex justify-center gap-6">
                        {content
                            .socials
                            .iter()
                            .map(|s| {
                                view! {
                                    <a
                                        href=s.href.clone()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=s.label.clone()
                                        class="p-3 bg-slate-800/50 border border-slate-700/50 rounded-full hover:border-cyan-400/50 hover:bg-cyan-400/10 hover:scale-110 transition-all duration-300 text-slate-400 hover:text-cyan-400 text-2xl"
                                    >
                                        <i class=s.icon.clone() />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </Reveal>
            </div>
            <div class="absolute bottom-10 left-1/2 -translate-x-1/2 animate-bounce text-cyan-400 text-3xl">
                "⌄"
            </div>
        </section>
    }
}

/// Typewriter cycling through the portfolio titles. Each tick schedules the
/// next one; the pending timeout is cleared when the view goes away.
#[component]
fn TypedTitle() -> impl IntoView {
    let content = portfolio();
    let cycler = StoredValue::new(
        TypeCycler::new(content.titles.as_slice(), Cadence::from(&content.motion)).ok(),
    );
    let (text, set_text) = signal(String::new());
    let (tick, set_tick) = signal(0u64);
    let pending = StoredValue::new(None::<TimeoutHandle>);
    let hydrated = use_hydrated();
    let resting = content.titles.first().cloned().unwrap_or_default();

    Effect::new(move |_| {
        tick.track();
        let Some(delay) = cycler.with_value(|c| c.as_ref().map(TypeCycler::delay)) else {
            return;
        };
        let handle = set_timeout_with_handle(
            move || {
                let typed = cycler
                    .try_update_value(|c| {
                        c.as_mut().map(|c| {
                            c.tick();
                            c.text()
                        })
                    })
                    .flatten();
                if let Some(typed) = typed {
                    set_text.set(typed);
                    set_tick.update(|t| *t += 1);
                }
            },
            Duration::from_millis(delay),
        );
        pending.set_value(handle.ok());
    });

    on_cleanup(move || {
        if let Some(Some(h)) = pending.try_get_value() {
            h.clear();
        }
    });

    // static markup shows the first title in full
    let shown = move || if hydrated.get() { text.get() } else { resting.clone() };

    view! { <span>{shown}</span> }
}
