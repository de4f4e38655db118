use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    about::About, contact::Contact, header::Header, hero::Hero, intro::ZoomIntro,
    particles::Particles, projects::Projects, reveal::provide_reveal_context,
    signals::provide_page_signals, skills::Skills, stats::StatsStrip,
};
use crate::content::portfolio;
use crate::motion::gradient::resolve_gradient;

#[component]
pub fn HomePage() -> impl IntoView {
    let content = portfolio();
    let signals = provide_page_signals(&content.motion);
    provide_reveal_context(&content.motion);

    let background = move || {
        format!(
            "background: {};",
            resolve_gradient(signals.progress.get(), &content.keyframes).css()
        )
    };
    let highlight = move || format!("background: {};", signals.pointer.get().highlight_css());

    view! {
        <Title text="Portfolio" />
        <div
            class="min-h-screen text-white overflow-x-hidden transition-colors duration-1000"
            style=background
        >
            <div class="fixed inset-0 pointer-events-none z-0" style=highlight />
            <Particles />
            <Header />
            <ZoomIntro />
            <main class="relative z-10">
                <Hero />
                <StatsStrip />
                <About />
                <Skills />
                <Projects />
                <Contact />
            </main>
        </div>
    }
}
