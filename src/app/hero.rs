use leptos::{ev::MouseEvent, prelude::*};

use super::scroll::{scroll_to, ScrollTarget};
use crate::portfolio::{PersonalInfo, SectionId};

#[component]
pub fn Hero(personal: &'static PersonalInfo) -> impl IntoView {
    let go = |section: SectionId| move |_: MouseEvent| scroll_to(ScrollTarget::Section(section));
    view! {
        <section
            id=SectionId::Hero.as_str()
            class="relative min-h-screen flex items-center justify-center overflow-hidden"
        >
            <div class="absolute inset-0 pointer-events-none">
                <div class="absolute top-1/4 left-1/2 -translate-x-1/2 w-[600px] h-[400px] bg-primary/10 rounded-full blur-3xl animate-pulse"></div>
            </div>

            <div class="container mx-auto px-4 sm:px-6 lg:px-8 relative z-10 text-center">
                <div class="max-w-3xl mx-auto">
                    <p class="text-sm sm:text-base text-muted font-medium tracking-wider uppercase">
                        "Hello, I'm"
                    </p>
                    <h1 class="mt-4 text-4xl sm:text-5xl md:text-7xl font-bold tracking-tight">
                        {personal.name.clone()}
                    </h1>
                    <p class="mt-4 text-xl sm:text-2xl md:text-3xl text-primary font-semibold">
                        {personal.title.clone()}
                    </p>
                    <p class="mt-6 text-base sm:text-lg text-muted max-w-xl mx-auto">
                        {personal.subtitle.clone()}
                    </p>
                    <div class="mt-10 flex flex-col sm:flex-row gap-4 justify-center">
                        <button
                            class="group inline-flex items-center justify-center px-6 py-3 rounded-md bg-primary text-primary-foreground font-medium"
                            on:click=go(SectionId::Contact)
                        >
                            <i class="ti ti-mail mr-2 group-hover:scale-110 transition-transform"></i>
                            "Get in Touch"
                        </button>
                        <button
                            class="inline-flex items-center justify-center px-6 py-3 rounded-md border border-border font-medium hover:bg-accent"
                            on:click=go(SectionId::Projects)
                        >
                            "View My Work"
                        </button>
                        {personal
                            .resume_url
                            .clone()
                            .map(|href| {
                                view! {
                                    <a
                                        href=href
                                        download=""
                                        class="inline-flex items-center justify-center px-6 py-3 rounded-md font-medium text-muted hover:text-foreground"
                                    >
                                        <i class="ti ti-download mr-2"></i>
                                        "Resume"
                                    </a>
                                }
                            })}
                    </div>
                </div>
            </div>

            <button
                class="absolute bottom-8 left-1/2 -translate-x-1/2 text-muted hover:text-foreground transition-colors animate-bounce focus:outline-none"
                aria-label="Scroll to about"
                on:click=go(SectionId::About)
            >
                <i class="ti ti-arrow-down text-2xl"></i>
            </button>
        </section>
    }
}
