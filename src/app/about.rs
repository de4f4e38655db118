use leptos::prelude::*;

use super::reveal::Reveal;
use crate::content::portfolio;

#[component]
pub fn About() -> impl IntoView {
    let content = portfolio();
    let text_ids = ["about-text-1", "about-text-2"];

    view! {
        <section id="about" class="py-20 px-6 relative">
            <div class="max-w-6xl mx-auto">
                <Reveal id="about-title" class="text-4xl md:text-5xl font-bold mb-16 text-center">
                    <h2>
                        <span class="bg-gradient-to-r from-cyan-400 to-blue-500 bg-clip-text text-transparent">
                            "About Me"
                        </span>
                    </h2>
                </Reveal>
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <Reveal id="about-image" hidden="opacity-0 -translate-x-10">
                        <div class="relative group">
                            <div class="absolute inset-0 bg-gradient-to-r from-cyan-500 to-blue-500 rounded-2xl blur-2xl opacity-30 group-hover:opacity-50 transition-opacity duration-500" />
                            <div class="relative aspect-square bg-gradient-to-br from-slate-800 to-slate-900 rounded-2xl border-2 border-cyan-400/30 overflow-hidden group-hover:border-cyan-400/60 transition-all duration-500">
                                <img
                                    src=content.portrait.clone()
                                    alt=content.name.clone()
                                    class="w-full h-full object-cover group-hover:scale-110 transition-transform duration-700"
                                />
                            </div>
                        </div>
                    </Reveal>
                    <Reveal id="about-content" class="space-y-6" hidden="opacity-0 translate-x-10">
                        {content
                            .about
                            .iter()
                            .zip(text_ids)
                            .enumerate()
                            .map(|(i, (paragraph, id))| {
                                view! {
                                    <Reveal
                                        id=id
                                        class="text-lg text-slate-300 leading-relaxed"
                                        delay_ms=(i as u32 + 1) * 100
                                    >
                                        <p>{paragraph.clone()}</p>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                        <Reveal id="about-badges" class="flex flex-wrap gap-3 pt-4" delay_ms=300>
                            {content
                                .badges
                                .iter()
                                .map(|badge| {
                                    view! {
                                        <span class="px-4 py-2 bg-cyan-500/10 border border-cyan-400/30 rounded-full text-cyan-400 text-sm hover:bg-cyan-500/20 hover:scale-105 transition-all duration-300 cursor-default">
                                            {badge.clone()}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </Reveal>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
