use leptos::prelude::*;

#[derive(Clone, Copy, Default)]
pub enum BadgeTone {
    #[default]
    Muted,
    Emphasis,
}

impl BadgeTone {
    fn class(self) -> &'static str {
        match self {
            BadgeTone::Muted => "px-3 py-1 text-sm rounded-full border border-slate-800 bg-slate-900/50 text-slate-300",
            BadgeTone::Emphasis => "px-3 py-1 text-lg font-bold rounded-full text-white",
        }
    }
}

#[component]
pub fn Badge(
    children: Children,
    #[prop(optional)] tone: BadgeTone,
) -> impl IntoView {
    view! {
        <span class=tone.class()>
            {children()}
        </span>
    }
}
