use leptos::{either::Either, prelude::*};

use crate::icons::icon_class;
use crate::portfolio::PersonalInfo;

static BUILD_YEAR: &str = env!("BUILD_YEAR");
static BUILD_TIME: &str = env!("BUILD_TIME");

#[component]
pub fn Footer(personal: &'static PersonalInfo) -> impl IntoView {
    let links = personal
        .social_links
        .iter()
        .map(|link| {
            let content = match icon_class(&link.icon) {
                Some(class) => Either::Left(view! { <i class=class></i> }),
                None => Either::Right(view! { <span class="text-sm">{link.label.clone()}</span> }),
            };
            view! {
                <a
                    href=link.url.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label=link.label.clone()
                    class="inline-flex items-center justify-center size-9 rounded-md hover:bg-accent text-muted hover:text-foreground"
                >
                    {content}
                </a>
            }
        })
        .collect_view();
    view! {
        <footer class="border-t border-border bg-muted/20">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <div class="flex flex-col sm:flex-row items-center justify-between gap-4">
                    <div class="flex items-center gap-2">{links}</div>
                    <p class="text-xs text-muted" title=format!("Last built {BUILD_TIME}")>
                        "© " {BUILD_YEAR} " " {personal.name.clone()} ". Built with Rust & Leptos."
                    </p>
                </div>
            </div>
        </footer>
    }
}
