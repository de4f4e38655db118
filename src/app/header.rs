use leptos::prelude::*;

use super::signals::use_page_signals;
use crate::content::portfolio;

const NAV_LINKS: [(&str, &str); 4] = [
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

/// Scroll progress bar plus the fixed navigation. Each link highlights while
/// its section sits under the probe line.
#[component]
pub fn Header() -> impl IntoView {
    let signals = use_page_signals();
    let (menu_open, set_menu_open) = signal(false);
    let short_name = portfolio().short_name.clone();

    let link_class = move |id: &'static str| {
        move || {
            if signals.active_section.get() == id {
                "transition-all duration-300 hover:text-cyan-400 hover:scale-110 text-cyan-400"
            } else {
                "transition-all duration-300 hover:text-cyan-400 hover:scale-110 text-slate-300"
            }
        }
    };

    view! {
        <div
            class="fixed top-0 left-0 h-1 bg-gradient-to-r from-cyan-400 via-blue-500 to-purple-600 z-50 transition-all duration-300"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || format!("{:.0}", signals.progress.get())
            style=move || format!("width: {:.2}%;", signals.progress.get())
        />
        <nav class="fixed top-0 w-full bg-slate-950/80 backdrop-blur-lg border-b border-cyan-500/20 z-40">
            <div class="max-w-6xl mx-auto px-6 py-4 flex justify-between items-center">
                <a
                    href="#hero"
                    class="text-2xl font-bold bg-gradient-to-r from-cyan-400 to-blue-500 bg-clip-text text-transparent hover:scale-110 transition-transform duration-300"
                >
                    {short_name}
                </a>
                <div class="hidden md:flex gap-8">
                    {NAV_LINKS
                        .iter()
                        .map(|&(id, label)| {
                            view! {
                                <a href=format!("#{id}") class=link_class(id)>
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <button
                    class="md:hidden text-cyan-400 text-2xl"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <div class="md:hidden bg-slate-900/95 backdrop-blur-lg border-t border-cyan-500/20">
                    {NAV_LINKS
                        .iter()
                        .map(|&(id, label)| {
                            view! {
                                <a
                                    href=format!("#{id}")
                                    class="block px-6 py-3 hover:bg-cyan-500/10 hover:text-cyan-400 transition-colors text-slate-300"
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}
