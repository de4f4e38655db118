use leptos::{ev, html, prelude::*};
use leptos_use::{use_event_listener, use_media_query, use_window};

use crate::app::signals::use_page_signals;
use crate::content::portfolio;
use crate::motion::pin::{PinController, PinFrame, PinState, Readiness};

fn pin_state_name(state: PinState) -> &'static str {
    match state {
        PinState::Idle => "idle",
        PinState::PinnedAnimating => "pinned",
        PinState::Released => "released",
    }
}

/// Full-screen photo that the page zooms into while the first stretch of
/// scrolling is pinned.
///
/// Server-rendered and pre-hydration markup is the static frame. The scroll
/// trigger is only built once the client has mounted, measured the container
/// and confirmed that motion is allowed.
#[component]
pub fn ZoomIntro() -> impl IntoView {
    let content = portfolio();
    let config = content.motion.clone();
    let span = config.pin_span;
    let signals = use_page_signals();
    let reduced_motion = use_media_query("(prefers-reduced-motion: reduce)");

    let controller = StoredValue::new(match PinController::new(config.clone()) {
        Ok(c) => Some(c),
        Err(e) => {
            log::warn!("intro disabled: {e}");
            None
        }
    });
    let (layout_rev, set_layout_rev) = signal(0u32);
    let (ready, set_ready) = signal(false);
    let trigger = NodeRef::<html::Div>::new();

    let measure = move || {
        trigger.get_untracked().map(|el| {
            el.get_bounding_client_rect().top() + window().scroll_y().unwrap_or_default()
        })
    };

    // readiness gate
    Effect::new(move |_| {
        let allowed = !reduced_motion.get();
        let top = measure();
        let readiness = controller
            .try_update_value(|c| {
                let c = c.as_mut()?;
                match (allowed, top) {
                    (true, Some(top)) => {
                        c.mark_ready();
                        c.layout(top);
                    }
                    _ => c.mark_unavailable(),
                }
                Some(c.readiness())
            })
            .flatten();
        set_ready.set(readiness == Some(Readiness::Ready));
        set_layout_rev.update(|r| *r += 1);
    });

    let _ = use_event_listener(use_window(), ev::resize, move |_| {
        if !ready.get_untracked() {
            return;
        }
        if let Some(top) = measure() {
            controller.update_value(|c| {
                if let Some(c) = c {
                    c.layout(top);
                }
            });
            set_layout_rev.update(|r| *r += 1);
        }
    });

    on_cleanup(move || {
        controller.try_update_value(|c| {
            if let Some(c) = c {
                c.teardown();
            }
        });
    });

    let fallback = PinFrame::static_fallback(&config);
    let snapshot = Memo::new(move |_| {
        layout_rev.track();
        let y = signals.metrics.get().offset;
        controller
            .with_value(|c| c.as_ref().map(|c| (c.frame(y), c.state(y))))
            .unwrap_or((fallback, PinState::Idle))
    });
    let frame = move || snapshot.get().0;

    let wrapper_style = move || {
        if ready.get() {
            format!("height: calc(100vh + {span}px);")
        } else {
            "height: 100vh;".to_string()
        }
    };

    view! {
        <div node_ref=trigger class="relative w-full" style=wrapper_style>
            <div
                class="sticky top-0 h-screen w-full overflow-hidden"
                data-pin-state=move || pin_state_name(snapshot.get().1)
            >
                <div class="absolute inset-0 w-full h-full" style=move || frame().image_style()>
                    <img
                        src=content.intro_image.clone()
                        alt="Developer workspace"
                        class="w-full h-full object-cover"
                    />
                    <div class="absolute inset-0 bg-gradient-to-b from-transparent via-slate-900/50 to-slate-900" />
                </div>

                <div class="absolute inset-0 opacity-20 intro-grid" />
                <div class="absolute bottom-40 right-20 w-40 h-40 border-2 border-blue-400/20 rotate-45 animate-pulse pointer-events-none" />
                <div class="absolute top-1/4 right-1/4 w-64 h-64 bg-cyan-500/10 rounded-full blur-3xl animate-pulse pointer-events-none" />
                <div class="absolute bottom-1/3 left-1/4 w-80 h-80 bg-blue-500/10 rounded-full blur-3xl animate-pulse pointer-events-none" />

                <div
                    class="absolute inset-0 bg-gradient-to-br from-slate-900 via-blue-900 to-slate-900"
                    style=move || frame().overlay_style()
                />

                <div
                    class="absolute inset-0 flex items-center justify-center"
                    style=move || frame().content_style()
                >
                    <div class="text-center px-6 relative">
                        <div class="absolute inset-0 -m-20 pointer-events-none">
                            <div class="absolute inset-0 border-2 border-cyan-400/20 rounded-full animate-ping [animation-duration:3s]" />
                            <div class="absolute inset-0 border-2 border-blue-400/20 rounded-full animate-ping [animation-duration:4s] [animation-delay:1s]" />
                        </div>
                        <h1 class="text-6xl md:text-8xl font-bold mb-6 relative">
                            <span class="bg-gradient-to-r from-cyan-400 via-blue-500 to-purple-600 bg-clip-text text-transparent inline-block animate-gradient">
                                "Welcome"
                            </span>
                        </h1>
                        <p class="text-xl md:text-2xl text-slate-300 max-w-2xl mx-auto mb-4">
                            "Scroll to explore my journey"
                        </p>
                        <div class="h-1 w-32 mx-auto bg-gradient-to-r from-cyan-400 to-blue-500 rounded-full animate-pulse" />
                        <div class="mt-12 flex flex-col items-center gap-3 animate-bounce text-cyan-400 text-3xl">
                            "⌄"
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
