//! Explicit theme context: one provider at the root, one toggle entry point.
//! The preference is persisted to local storage on the client, the same way
//! the rest of the app persists small bits of browser state.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    mode: Signal<ThemeMode>,
    set_mode: WriteSignal<ThemeMode>,
}

impl ThemeContext {
    pub fn mode(&self) -> ThemeMode {
        self.mode.get()
    }

    pub fn toggle(&self) {
        self.set_mode.update(|mode| *mode = mode.toggled());
    }
}

pub fn provide_theme_context() {
    #[cfg(feature = "hydrate")]
    let (mode, set_mode, _) = use_local_storage::<ThemeMode, JsonSerdeWasmCodec>("theme");

    #[cfg(not(feature = "hydrate"))]
    let (mode, set_mode) = {
        let (mode, set_mode) = signal(ThemeMode::default());
        (Signal::from(mode), set_mode)
    };

    provide_context(ThemeContext { mode, set_mode });
}

pub fn use_theme() -> ThemeContext {
    expect_context()
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
        <button
            on:click=move |_| theme.toggle()
            class="h-9 w-9 rounded-md border border-muted/50 bg-background/50 hover:bg-muted/30 transition-colors duration-300"
            aria-label="Toggle theme"
        >
            {move || match theme.mode() {
                ThemeMode::Dark => "☀",
                ThemeMode::Light => "☾",
            }}
        </button>
    }
}
