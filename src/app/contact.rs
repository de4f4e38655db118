use leptos::prelude::*;

use super::reveal::Reveal;
use crate::content::{build_year, portfolio};

#[component]
pub fn Contact() -> impl IntoView {
    let content = portfolio();

    view! {
        <section id="contact" class="py-20 px-6 relative">
            <div class="max-w-4xl mx-auto text-center">
                <Reveal id="contact-title" class="text-4xl md:text-5xl font-bold mb-8">
                    <h2>
                        <span class="bg-gradient-to-r from-cyan-400 to-blue-500 bg-clip-text text-transparent">
                            "Let's Work Together"
                        </span>
                    </h2>
                </Reveal>
                <Reveal
                    id="contact-text"
                    class="text-xl text-slate-300 mb-12 leading-relaxed"
                    delay_ms=100
                >
                    <p>
                        "I'm always interested in hearing about new projects and opportunities. Whether you have a question or just want to say hi, feel free to reach out!"
                    </p>
                </Reveal>
                <div class="grid md:grid-cols-3 gap-6 mb-12">
                    {content
                        .socials
                        .iter()
                        .enumerate()
                        .map(|(i, s)| {
                            view! {
                                <Reveal
                                    id=format!("contact-{i}")
                                    hidden="opacity-0 translate-y-10 scale-95"
                                    delay_ms=i as u32 * 100
                                >
                                    <a
                                        href=s.href.clone()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="group block p-6 bg-gradient-to-br from-slate-800/50 to-slate-900/50 backdrop-blur-sm rounded-2xl border border-slate-700/50 hover:border-cyan-400/50 hover:scale-105 transition-all duration-500"
                                    >
                                        <i class=format!(
                                            "{} text-4xl text-cyan-400 mb-4 inline-block group-hover:scale-110 transition-transform",
                                            s.icon,
                                        ) />
                                        <h3 class="font-semibold mb-2 text-white">{s.label.clone()}</h3>
                                        <p class="text-sm text-slate-400 break-all">{s.display.clone()}</p>
                                    </a>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
                <Reveal id="contact-cta" delay_ms=300>
                    <a
                        href=format!("mailto:{}", content.email)
                        class="inline-block px-12 py-4 bg-gradient-to-r from-cyan-500 to-blue-500 rounded-full font-semibold text-lg hover:scale-105 hover:shadow-2xl hover:shadow-cyan-500/50 transition-all duration-300"
                    >
                        "Send Me a Message"
                    </a>
                </Reveal>
            </div>
        </section>
        <footer class="py-8 px-6 border-t border-slate-800 relative">
            <div class="max-w-6xl mx-auto text-center text-slate-400">
                <p>{format!("© {} {}. Built with Rust & Leptos.", build_year(), content.name)}</p>
            </div>
        </footer>
    }
}
