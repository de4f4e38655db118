use leptos::{html, prelude::*};

use super::reveal::{use_reveal, Reveal};
use crate::content::{portfolio, Skill};
use crate::motion::deck::resolve_stack_card;

#[component]
pub fn Skills() -> impl IntoView {
    let content = portfolio();
    let (hovered, set_hovered) = signal(None::<usize>);

    view! {
        <section id="skills" class="py-20 px-6 relative overflow-hidden">
            <div class="max-w-6xl mx-auto">
                <Reveal id="skills-title" class="text-4xl md:text-5xl font-bold mb-4 text-center">
                    <h2>
                        <span class="bg-gradient-to-r from-cyan-400 via-blue-500 to-purple-600 bg-clip-text text-transparent">
                            "Technical Arsenal"
                        </span>
                    </h2>
                </Reveal>
                <Reveal id="skills-subtitle" class="text-center text-slate-400 text-base mb-12">
                    <p>"Mastering the tools that build the future"</p>
                </Reveal>
                <div class="grid md:grid-cols-2 gap-x-12 gap-y-6 relative">
                    {content
                        .skills
                        .iter()
                        .enumerate()
                        .map(|(i, skill)| {
                            view! {
                                <SkillCard
                                    index=i
                                    skill=skill.clone()
                                    hovered
                                    on_enter=move || set_hovered.set(Some(i))
                                    on_leave=move || set_hovered.set(None)
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard<E, L>(
    index: usize,
    skill: Skill,
    hovered: ReadSignal<Option<usize>>,
    on_enter: E,
    on_leave: L,
) -> impl IntoView
where
    E: Fn() + 'static,
    L: Fn() + 'static,
{
    let target = NodeRef::<html::Div>::new();
    let reveal = use_reveal(target, format!("skill-{index}"));
    let card = Memo::new(move |_| resolve_stack_card(index, hovered.get()));
    let is_hovered = move || card.with(|c| c.hovered);

    let outer_class = move || {
        if reveal.concealed.get() {
            "relative opacity-0 translate-y-10"
        } else {
            "relative opacity-100"
        }
    };
    let inner_class = move || {
        format!(
            "relative bg-gradient-to-br from-slate-800/90 to-slate-900/90 backdrop-blur-xl rounded-2xl p-5 border-2 overflow-hidden {}",
            if is_hovered() {
                "border-cyan-400/80 shadow-2xl shadow-cyan-500/50"
            } else {
                "border-slate-700/30 shadow-lg"
            }
        )
    };
    let color = skill.color.clone();
    let accent_class = move || {
        format!(
            "absolute inset-0 bg-gradient-to-br {color} transition-opacity duration-700 {}",
            if is_hovered() { "opacity-20" } else { "opacity-0" }
        )
    };
    let level = skill.level;

    view! {
        <div
            node_ref=target
            data-animate-id=format!("skill-{index}")
            class=outer_class
            style=move || card.with(|c| c.style(index))
            on:mouseenter=move |_| on_enter()
            on:mouseleave=move |_| on_leave()
        >
            <div class=inner_class style=move || card.with(|c| c.inner_style())>
                <div class=accent_class />
                <div class="relative flex items-start gap-4">
                    <div class=move || {
                        format!(
                            "p-3 rounded-xl bg-gradient-to-br {} text-2xl transition-all duration-500 {}",
                            skill.color,
                            if is_hovered() { "scale-110 rotate-12 shadow-lg" } else { "" },
                        )
                    }>{skill.glyph.clone()}</div>
                    <div class="flex-1 min-w-0">
                        <h3 class=move || {
                            format!(
                                "text-lg font-bold mb-1 transition-colors duration-300 {}",
                                if is_hovered() { "text-cyan-400" } else { "text-white" },
                            )
                        }>{skill.name.clone()}</h3>
                        <div class="flex items-center gap-3 text-xs text-slate-400 mb-3">
                            <span>{skill.category.clone()}</span>
                            <span>"•"</span>
                            <span>{format!("{} projects", skill.projects)}</span>
                        </div>
                        <div class="flex items-center justify-between mb-2 text-sm">
                            <span class="text-slate-400">"Proficiency"</span>
                            <span class=move || {
                                format!(
                                    "font-bold transition-all duration-500 {}",
                                    if is_hovered() { "text-cyan-400 scale-110" } else { "text-slate-500" },
                                )
                            }>
                                {move || if is_hovered() { format!("{level}%") } else { "???".to_string() }}
                            </span>
                        </div>
                        <div class="h-2 bg-slate-700/50 rounded-full overflow-hidden">
                            <div
                                class="h-full bg-gradient-to-r from-cyan-400 to-blue-500 rounded-full transition-all duration-700"
                                style=move || {
                                    format!("width: {}%;", if is_hovered() { level } else { 0 })
                                }
                            />
                        </div>
                        <p class=move || {
                            format!(
                                "text-xs text-slate-500 mt-3 transition-opacity duration-300 {}",
                                if is_hovered() { "opacity-0" } else { "opacity-100" },
                            )
                        }>"Hover to reveal"</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
