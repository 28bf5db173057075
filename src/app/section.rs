use leptos::prelude::*;

use crate::portfolio::SectionId;

/// Anchored page section with the shared heading block.
#[component]
pub fn Section(
    id: SectionId,
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
    #[prop(optional)] muted: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            id=id.as_str()
            class=if muted { "py-20 sm:py-28 bg-muted/30" } else { "py-20 sm:py-28" }
        >
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="max-w-3xl mx-auto text-center mb-12">
                    <h2 class="text-3xl sm:text-4xl font-bold tracking-tight">{title}</h2>
                    <div class="mt-2 h-1 w-12 bg-primary rounded-full mx-auto"></div>
                    {subtitle.map(|s| view! { <p class="mt-4 text-muted">{s}</p> })}
                </div>
                {children()}
            </div>
        </section>
    }
}
