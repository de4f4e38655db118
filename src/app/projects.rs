use leptos::{either::Either, html, prelude::*};
use leptos_use::{use_interval_fn, utils::Pausable};

use super::reveal::{use_reveal, Reveal};
use crate::content::{portfolio, Project};
use crate::motion::deck::Deck;

#[component]
pub fn Projects() -> impl IntoView {
    let content = portfolio();

    let body = match Deck::new(content.projects.len()) {
        Ok(deck) => Either::Left(view! { <ProjectDeck deck=RwSignal::new(deck) /> }),
        Err(e) => {
            log::debug!("no project deck: {e}");
            Either::Right(())
        }
    };

    view! {
        <section id="projects" class="py-20 px-6 relative overflow-hidden">
            <div class="max-w-6xl mx-auto">
                <Reveal id="projects-title" class="text-4xl md:text-5xl font-bold mb-4 text-center">
                    <h2>
                        <span class="bg-gradient-to-r from-cyan-400 via-blue-500 to-purple-600 bg-clip-text text-transparent">
                            "Featured Projects"
                        </span>
                    </h2>
                </Reveal>
                <Reveal id="projects-subtitle" class="text-center text-slate-400 text-base mb-12">
                    <p>"Swipe through the deck of things I've built"</p>
                </Reveal>
                {body}
            </div>
        </section>
    }
}

#[component]
fn ProjectDeck(deck: RwSignal<Deck>) -> impl IntoView {
    let content = portfolio();

    // autoplay pauses while the pointer is over the deck
    let autoplay = content.motion.deck_autoplay_ms.map(|ms| {
        let Pausable { pause, resume, .. } =
            use_interval_fn(move || deck.update(Deck::next), ms);
        (pause, resume)
    });
    let (pause, resume) = match autoplay {
        Some((pause, resume)) => (Some(pause), Some(resume)),
        None => (None, None),
    };

    view! {
        <div
            class="relative h-[450px] flex items-center justify-center [perspective:1500px]"
            on:mouseenter=move |_| {
                if let Some(pause) = &pause {
                    pause();
                }
            }
            on:mouseleave=move |_| {
                if let Some(resume) = &resume {
                    resume();
                }
            }
        >
            {content
                .projects
                .iter()
                .enumerate()
                .map(|(i, project)| view! { <ProjectCard index=i project=project.clone() deck /> })
                .collect_view()}
        </div>
        <div class="flex justify-center items-center gap-4 mt-8">
            <button
                aria-label="Previous project"
                class="p-3 bg-slate-800/50 border border-slate-700/50 rounded-full hover:border-cyan-400/50 hover:bg-cyan-400/10 transition-all duration-300 text-cyan-400"
                on:click=move |_| deck.update(Deck::prev)
            >
                "‹"
            </button>
            <div class="flex gap-2">
                {(0..content.projects.len())
                    .map(|i| {
                        view! {
                            <button
                                aria-label=format!("Show project {}", i + 1)
                                class=move || {
                                    if deck.with(|d| d.active() == i) {
                                        "h-1.5 rounded-full transition-all duration-300 w-6 bg-cyan-400"
                                    } else {
                                        "h-1.5 rounded-full transition-all duration-300 w-1.5 bg-slate-600 hover:bg-slate-500"
                                    }
                                }
                                on:click=move |_| deck.update(|d| d.jump(i))
                            />
                        }
                    })
                    .collect_view()}
            </div>
            <button
                aria-label="Next project"
                class="p-3 bg-slate-800/50 border border-slate-700/50 rounded-full hover:border-cyan-400/50 hover:bg-cyan-400/10 transition-all duration-300 text-cyan-400"
                on:click=move |_| deck.update(Deck::next)
            >
                "›"
            </button>
        </div>
    }
}

#[component]
fn ProjectCard(index: usize, project: Project, deck: RwSignal<Deck>) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let reveal = use_reveal(target, format!("project-{index}"));
    let placement = Memo::new(move |_| deck.with(|d| d.transform(index)));
    let is_active = move || deck.with(|d| d.active() == index);

    let style = move || {
        format!(
            "{} transition-delay: {}ms;",
            placement.with(|p| p.style()),
            index * 50
        )
    };
    let outer_class = move || {
        format!(
            "absolute w-full max-w-sm transition-all duration-700 ease-out cursor-pointer {}",
            if reveal.concealed.get() { "invisible" } else { "" }
        )
    };
    let frame_class = move || {
        format!(
            "relative bg-gradient-to-br from-slate-800/95 to-slate-900/95 backdrop-blur-xl rounded-2xl overflow-hidden border-2 transition-all duration-500 {}",
            if is_active() {
                "border-cyan-400/80 shadow-2xl shadow-cyan-500/50"
            } else {
                "border-slate-700/30 shadow-xl hover:border-cyan-400/50"
            }
        )
    };
    let gradient = project.gradient.clone();

    view! {
        <div
            node_ref=target
            data-animate-id=format!("project-{index}")
            class=outer_class
            style=style
            on:click=move |_| {
                if !is_active() {
                    deck.update(|d| d.jump(index));
                }
            }
        >
            <div class=frame_class>
                <div class=move || {
                    format!(
                        "bg-gradient-to-r {gradient} transition-all duration-500 {}",
                        if is_active() { "h-2" } else { "h-1.5" },
                    )
                } />
                <div class="p-6">
                    <h3 class=move || {
                        format!(
                            "text-xl font-bold mb-2 transition-colors duration-300 {}",
                            if is_active() { "text-cyan-400" } else { "text-white" },
                        )
                    }>{project.title.clone()}</h3>
                    <p class="text-slate-400 text-sm mb-4 leading-relaxed">
                        {project.description.clone()}
                    </p>
                    <ul class="space-y-1 mb-4">
                        {project
                            .features
                            .iter()
                            .map(|f| {
                                view! {
                                    <li class="text-xs text-slate-400 flex items-center gap-2">
                                        <span class="text-cyan-400">"✓"</span>
                                        {f.clone()}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <div class="grid grid-cols-3 gap-2 mb-4">
                        {project
                            .stats
                            .iter()
                            .map(|(label, value)| {
                                view! {
                                    <div class="text-center p-2 bg-slate-800/50 rounded-lg">
                                        <div class="text-sm font-bold text-white">{value.clone()}</div>
                                        <div class="text-[10px] uppercase text-slate-500">
                                            {label.clone()}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="flex flex-wrap gap-2">
                        {project
                            .tech
                            .iter()
                            .map(|t| {
                                view! {
                                    <span class="px-2 py-1 text-xs bg-slate-700/50 text-slate-300 rounded-md border border-slate-600/30">
                                        {t.clone()}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
