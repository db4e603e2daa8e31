//! Wheel picker for the endpoint carousel
//!
//! Shows the current endpoint between its cyclic neighbours. Clicking a
//! neighbour selects it; every index rendered here comes from the
//! carousel's own window, so selections are always in range.

use gateway_landing_core::Phrase;
use leptos::prelude::*;

use crate::state::use_page;

const RADIUS: usize = 1;

#[component]
pub fn EndpointWheel() -> impl IntoView {
    let page = use_page();

    view! {
        <div
            role="listbox"
            aria-label=move || page.text(Phrase::EndpointPicker)
            class="flex flex-col items-end h-8 overflow-hidden font-mono text-xs leading-none select-none"
        >
            {move || {
                let current = page.snapshot().endpoint_index;
                page.endpoint_window(RADIUS)
                    .into_iter()
                    .map(|(index, path)| {
                        let selected = index == current;
                        let class = if selected {
                            "py-0.5 text-slate-100 font-semibold cursor-default"
                        } else {
                            "py-0.5 text-slate-500 opacity-60 hover:opacity-100 cursor-pointer"
                        };
                        view! {
                            <span
                                role="option"
                                aria-selected=selected.to_string()
                                class=class
                                on:click=move |_| page.select_endpoint(index)
                            >
                                {path}
                            </span>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
