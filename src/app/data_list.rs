use std::hash::Hash;

use leptos::prelude::*;

static DEFAULT_EMPTY_MESSAGE: &str = "No items to display.";

/// Keyed grid over a reactive list, with a message when the list is empty.
#[component]
pub fn DataList<T, K, KF, R, V>(
    #[prop(into)] items: Signal<Vec<T>>,
    key: KF,
    render: R,
    #[prop(optional)] empty_message: Option<&'static str>,
    #[prop(optional)] class: &'static str,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    K: Eq + Hash + 'static,
    KF: Fn(&T) -> K + Clone + Send + Sync + 'static,
    R: Fn(T) -> V + Clone + Send + Sync + 'static,
    V: IntoView + 'static,
{
    let empty_message = empty_message.unwrap_or(DEFAULT_EMPTY_MESSAGE);
    view! {
        <Show
            when=move || items.with(|i| !i.is_empty())
            fallback=move || view! { <div class="text-center py-8 text-muted text-sm">{empty_message}</div> }
        >
            <div class=format!("grid gap-4 {class}")>
                <For each=move || items.get() key=key.clone() children=render.clone() />
            </div>
        </Show>
    }
}
