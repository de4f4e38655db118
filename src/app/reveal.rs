use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::motion::{
    reveal::{is_concealed, RevealOptions, VisibilitySet},
    MotionConfig,
};

#[derive(Debug, Clone, Copy)]
struct RevealContext {
    visible: RwSignal<VisibilitySet>,
    hydrated: RwSignal<bool>,
    options: RevealOptions,
}

/// Entrance state of one observed element.
#[derive(Debug, Clone, Copy)]
pub struct RevealState {
    /// The element has crossed the reveal threshold at least once.
    pub shown: Signal<bool>,
    /// Hidden classes apply. Only ever true after hydration.
    pub concealed: Signal<bool>,
}

pub fn provide_reveal_context(config: &MotionConfig) {
    let hydrated = RwSignal::new(false);
    // effects only run in the browser, after hydration has matched the server markup
    Effect::new(move |_| hydrated.set(true));
    provide_context(RevealContext {
        visible: RwSignal::new(VisibilitySet::default()),
        hydrated,
        options: RevealOptions::from(config),
    });
}

/// `false` on the server and while hydrating, `true` once the client is live.
pub fn use_hydrated() -> Signal<bool> {
    let ctx = expect_context::<RevealContext>();
    ctx.hydrated.into()
}

/// Watch `target` until it first crosses the reveal threshold, record it under
/// `id`, then stop observing.
pub fn use_reveal(target: NodeRef<html::Div>, id: String) -> RevealState {
    let ctx = expect_context::<RevealContext>();
    let options = ctx.options;
    let key = id.clone();
    let shown = Signal::derive(move || ctx.visible.with(|v| v.is_visible(&key)));
    let concealed = Signal::derive(move || is_concealed(ctx.hydrated.get(), shown.get()));

    let observer = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let hit = entries
                .iter()
                .any(|e| e.is_intersecting() && options.intersects(e.intersection_ratio()));
            if hit && !ctx.visible.with_untracked(|v| v.is_visible(&id)) {
                ctx.visible.update(|v| {
                    v.on_element_intersect(&id);
                });
            }
        },
        UseIntersectionObserverOptions::default()
            .thresholds(vec![options.threshold])
            .root_margin(options.root_margin()),
    );

    let stop = observer.stop;
    Effect::new(move |_| {
        if shown.get() {
            stop();
        }
    });

    RevealState { shown, concealed }
}

/// Wrapper that fades and slides its children in on first appearance.
#[component]
pub fn Reveal(
    #[prop(into)] id: String,
    #[prop(optional, into)] class: String,
    /// Classes applied until revealed.
    #[prop(default = "opacity-0 translate-y-10")]
    hidden: &'static str,
    #[prop(optional)] delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let reveal = use_reveal(target, id.clone());
    let class = move || {
        let state = if reveal.concealed.get() {
            hidden
        } else {
            "opacity-100 translate-x-0 translate-y-0 scale-100"
        };
        format!("transition-all duration-1000 {class} {state}")
    };
    let style = (delay_ms > 0).then(|| format!("transition-delay: {delay_ms}ms;"));

    view! {
        <div node_ref=target data-animate-id=id class=class style=style>
            {children()}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_server_markup_is_revealed() {
        Owner::new().with(|| {
            provide_reveal_context(&MotionConfig::default());
            let html = view! {
                <Reveal id="about-title">
                    <p>"hello"</p>
                </Reveal>
            }
            .to_html();
            assert!(html.contains("hello"));
            assert!(html.contains("opacity-100"));
            assert!(!html.contains("opacity-0"));
        });
    }

    #[test]
    fn test_server_markup_custom_hidden_classes_skipped() {
        Owner::new().with(|| {
            provide_reveal_context(&MotionConfig::default());
            let html = view! {
                <Reveal id="about-image" hidden="opacity-0 -translate-x-10">
                    <p>"portrait"</p>
                </Reveal>
            }
            .to_html();
            assert!(!html.contains("-translate-x-10"));
            assert!(!html.contains("opacity-0"));
        });
    }
}
