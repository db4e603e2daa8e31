//! Inline SVG icons (stroke style, 24x24 viewBox)

use leptos::prelude::*;

#[component]
fn Icon(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=class
        >
            {children()}
        </svg>
    }
}

#[component]
pub fn Copy(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <Icon class>
            <rect x="9" y="9" width="13" height="13" rx="2" ry="2" />
            <path d="M5 15H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h9a2 2 0 0 1 2 2v1" />
        </Icon>
    }
}

#[component]
pub fn Play(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <Icon class>
            <polygon points="6 3 20 12 6 21 6 3" />
        </Icon>
    }
}

#[component]
pub fn FileText(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <Icon class>
            <path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z" />
            <polyline points="14 2 14 8 20 8" />
            <line x1="16" y1="13" x2="8" y2="13" />
            <line x1="16" y1="17" x2="8" y2="17" />
        </Icon>
    }
}

#[component]
pub fn Github(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <Icon class>
            <path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4" />
            <path d="M9 18c-4.51 2-5-2-7-2" />
        </Icon>
    }
}

#[component]
pub fn Languages(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <Icon class>
            <path d="m5 8 6 6" />
            <path d="m4 14 6-6 2-3" />
            <path d="M2 5h12" />
            <path d="M7 2h1" />
            <path d="m22 22-5-10-5 10" />
            <path d="M14 18h6" />
        </Icon>
    }
}
