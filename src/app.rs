mod about;
mod contact;
mod header;
mod hero;
mod homepage;
mod intro;
mod particles;
mod projects;
mod reveal;
mod signals;
mod skills;
mod stats;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::portfolio;
use homepage::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-slate-950">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let name = portfolio().name.clone();

    view! {
        <Title formatter=move |title| format!("{name} - {title}") />
        <Meta name="description" content=portfolio().tagline.clone() />

        <Router>
            <Routes fallback=NotFound>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Not Found" />
        <main class="min-h-screen flex flex-col items-center justify-center text-white gap-6">
            <h1 class="text-6xl font-bold bg-gradient-to-r from-cyan-400 to-blue-500 bg-clip-text text-transparent">
                "404"
            </h1>
            <p class="text-slate-400">"Nothing lives at this address."</p>
            <a href="/" class="px-6 py-3 border-2 border-cyan-400/50 rounded-full hover:bg-cyan-400/10">
                "Back to the portfolio"
            </a>
        </main>
    }
}
