//! Theme State
//!
//! Dark/light mode shared through context. The mode is mirrored onto the
//! document root as the `light` class; nothing is persisted.

use leptos::*;
use noxchrono::theme::{ThemeMode, LIGHT_CLASS};

/// Theme context provided to all components
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub mode: RwSignal<ThemeMode>,
}

impl ThemeState {
    pub fn toggle(&self) {
        self.mode.update(|mode| *mode = mode.toggled());
    }
}

/// Provide theme state, starting from whatever the root element says
pub fn provide_theme() {
    let mode = create_rw_signal(current_root_theme());

    create_effect(move |_| apply_theme(mode.get()));

    provide_context(ThemeState { mode });
}

fn root_element() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.document_element()
}

/// Mode currently expressed by the document root
pub fn current_root_theme() -> ThemeMode {
    root_element()
        .map(|root| ThemeMode::from_root_class(root.class_list().contains(LIGHT_CLASS)))
        .unwrap_or_default()
}

/// Add or remove the `light` class on the document root
pub fn apply_theme(mode: ThemeMode) {
    let Some(root) = root_element() else {
        return;
    };

    if let Err(e) = root.class_list().toggle_with_force(LIGHT_CLASS, mode.is_light()) {
        web_sys::console::error_1(&e);
    }
}
