use leptos::{ev, leptos_dom::helpers::AnimationFrameRequestHandle, prelude::*};
use leptos_use::{
    use_event_listener, use_event_listener_with_options, use_window, UseEventListenerOptions,
};

use crate::motion::{
    signal::{active_section, FrameGate, PointerPosition, ScrollMetrics, SectionBounds, SECTIONS},
    MotionConfig,
};

/// Page-wide input signals, written only by the listeners set up in
/// [`provide_page_signals`].
#[derive(Debug, Clone, Copy)]
pub struct PageSignals {
    pub metrics: ReadSignal<ScrollMetrics>,
    pub progress: Memo<f64>,
    pub pointer: ReadSignal<PointerPosition>,
    pub active_section: ReadSignal<&'static str>,
}

pub fn use_page_signals() -> PageSignals {
    expect_context::<PageSignals>()
}

fn sample_scroll() -> ScrollMetrics {
    let win = window();
    let offset = win.scroll_y().unwrap_or_default();
    let viewport_height = win
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default();
    let document_height = document()
        .document_element()
        .map(|el| f64::from(el.scroll_height()))
        .unwrap_or_default();
    ScrollMetrics {
        offset,
        document_height,
        viewport_height,
    }
}

fn sample_active_section(probe: f64) -> Option<&'static str> {
    let doc = document();
    let bounds = SECTIONS
        .iter()
        .filter_map(|&id| {
            let rect = doc.get_element_by_id(id)?.get_bounding_client_rect();
            Some(SectionBounds {
                id,
                top: rect.top(),
                bottom: rect.bottom(),
            })
        })
        .collect::<Vec<_>>();
    active_section(&bounds, probe)
}

/// Scroll and pointer listeners, each coalesced to one update per frame.
/// Listeners and any pending frame are released with the owning view.
pub fn provide_page_signals(config: &MotionConfig) -> PageSignals {
    let probe = config.section_probe;
    let (metrics, set_metrics) = signal(ScrollMetrics::default());
    let (pointer, set_pointer) = signal(PointerPosition::default());
    let (section, set_section) = signal(SECTIONS[0]);
    let progress = Memo::new(move |_| metrics.with(ScrollMetrics::progress));

    let scroll_gate = StoredValue::new(FrameGate::default());
    let scroll_frame = StoredValue::new(None::<AnimationFrameRequestHandle>);
    let pointer_gate = StoredValue::new(FrameGate::default());
    let pointer_frame = StoredValue::new(None::<AnimationFrameRequestHandle>);
    let latest_pointer = StoredValue::new(PointerPosition::default());

    let on_scroll = move || {
        if !scroll_gate.try_update_value(FrameGate::request).unwrap_or(false) {
            return;
        }
        let handle = request_animation_frame_with_handle(move || {
            set_metrics.set(sample_scroll());
            if let Some(id) = sample_active_section(probe) {
                if section.get_untracked() != id {
                    set_section.set(id);
                }
            }
            scroll_gate.update_value(FrameGate::complete);
        });
        match handle {
            Ok(h) => scroll_frame.set_value(Some(h)),
            Err(_) => {
                log::debug!("animation frame unavailable, sampling scroll inline");
                set_metrics.set(sample_scroll());
                scroll_gate.update_value(FrameGate::complete);
            }
        }
    };

    let _ = use_event_listener_with_options(
        use_window(),
        ev::scroll,
        move |_| on_scroll(),
        UseEventListenerOptions::default().passive(true),
    );
    let _ = use_event_listener(use_window(), ev::resize, move |_| on_scroll());

    let _ = use_event_listener(use_window(), ev::mousemove, move |e| {
        latest_pointer.set_value(PointerPosition {
            x: f64::from(e.client_x()),
            y: f64::from(e.client_y()),
        });
        if !pointer_gate.try_update_value(FrameGate::request).unwrap_or(false) {
            return;
        }
        let handle = request_animation_frame_with_handle(move || {
            set_pointer.set(latest_pointer.get_value());
            pointer_gate.update_value(FrameGate::complete);
        });
        match handle {
            Ok(h) => pointer_frame.set_value(Some(h)),
            Err(_) => pointer_gate.update_value(FrameGate::complete),
        }
    });

    // first sample once mounted
    Effect::new(move |_| on_scroll());

    on_cleanup(move || {
        for frame in [scroll_frame, pointer_frame] {
            if let Some(Some(h)) = frame.try_get_value() {
                h.cancel();
            }
        }
    });

    let signals = PageSignals {
        metrics,
        progress,
        pointer,
        active_section: section,
    };
    provide_context(signals);
    signals
}
