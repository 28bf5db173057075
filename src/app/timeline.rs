//! Vertical timeline parts. Each part is an ordinary component; callers compose them
//! and pass `is_last` down explicitly.

use leptos::prelude::*;

#[component]
pub fn Timeline(children: Children) -> impl IntoView {
    view! { <div class="relative flex flex-col gap-0">{children()}</div> }
}

#[component]
pub fn TimelineItem(#[prop(optional)] is_last: bool, children: Children) -> impl IntoView {
    view! {
        <div class=if is_last { "relative flex gap-4" } else { "relative flex gap-4 pb-8" }>
            {children()}
        </div>
    }
}

/// Dot marking an item; draws the connector to the next item unless `is_last`.
#[component]
pub fn TimelineIndicator(#[prop(optional)] is_last: bool) -> impl IntoView {
    view! {
        <div class="relative flex flex-col items-center">
            <div class="size-3 rounded-full bg-primary ring-4 ring-background z-10 shrink-0 mt-1.5"></div>
            {(!is_last).then(|| view! { <div class="w-px flex-1 bg-border"></div> })}
        </div>
    }
}

#[component]
pub fn TimelineContent(children: Children) -> impl IntoView {
    view! { <div class="flex-1 min-w-0">{children()}</div> }
}

#[component]
pub fn TimelineHeader(children: Children) -> impl IntoView {
    view! {
        <div class="flex flex-col sm:flex-row sm:items-center gap-1 sm:gap-3">{children()}</div>
    }
}

#[component]
pub fn TimelineDescription(children: Children) -> impl IntoView {
    view! { <p class="text-sm text-muted mt-1">{children()}</p> }
}
