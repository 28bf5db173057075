use leptos::prelude::*;

use super::section::Section;
use crate::portfolio::{PersonalInfo, SectionId};
use crate::utils::initials;

#[component]
pub fn About(personal: &'static PersonalInfo) -> impl IntoView {
    let avatar = match personal.avatar_url.clone() {
        Some(src) => view! {
            <img src=src alt=personal.name.clone() class="size-32 rounded-xl object-cover" />
        }
        .into_any(),
        None => view! {
            <div class="size-32 rounded-xl bg-gradient-to-br from-primary/20 to-primary/5 flex items-center justify-center text-4xl font-bold text-primary">
                {initials(&personal.name)}
            </div>
        }
        .into_any(),
    };
    view! {
        <Section id=SectionId::About title="About Me">
            <div class="max-w-4xl mx-auto">
                <div class="rounded-xl border border-border p-6 flex flex-col md:flex-row gap-8 items-start">
                    <div class="shrink-0 mx-auto md:mx-0">{avatar}</div>
                    <div class="flex-1 space-y-4">
                        <p class="text-muted leading-relaxed">{personal.bio.clone()}</p>
                        <div class="flex flex-wrap gap-3">
                            <span class="inline-flex items-center gap-1.5 rounded-full border border-border px-3 py-1 text-xs">
                                <i class="ti ti-map-pin"></i>
                                {personal.location.clone()}
                            </span>
                            <a
                                href=format!("mailto:{}", personal.email)
                                class="inline-flex items-center gap-1.5 rounded-full border border-border px-3 py-1 text-xs hover:text-primary"
                            >
                                <i class="ti ti-mail"></i>
                                {personal.email.clone()}
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </Section>
    }
}
