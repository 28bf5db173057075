use leptos::{either::Either, prelude::*};

use super::scroll::{scroll_to, ScrollTarget};
use crate::portfolio::{NavItem, SectionId};
use crate::theme::Theme;

#[component]
pub fn Navbar(
    nav_items: &'static [NavItem],
    name: String,
    theme: ReadSignal<Theme>,
    toggle_theme: Callback<()>,
) -> impl IntoView {
    let (mobile_open, set_mobile_open) = signal(false);

    let nav_click = move |section: SectionId| {
        scroll_to(ScrollTarget::Section(section));
        set_mobile_open.set(false);
    };

    let links = move |class: &'static str| {
        nav_items
            .iter()
            .map(|item| {
                let section = item.section_id;
                view! {
                    <button class=class on:click=move |_| nav_click(section)>
                        {item.label.clone()}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 bg-background/80 backdrop-blur-md border-b border-border">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex h-16 items-center justify-between">
                    <button
                        class="text-lg font-bold tracking-tight hover:text-primary transition-colors focus:outline-none focus:text-primary"
                        on:click=move |_| scroll_to(ScrollTarget::Section(SectionId::Hero))
                    >
                        {name}
                    </button>

                    <div class="hidden md:flex items-center gap-1">
                        {links(
                            "px-3 py-2 text-sm font-medium text-muted hover:text-foreground focus:text-primary focus:outline-none transition-colors rounded-md hover:bg-accent",
                        )}
                        <div class="ml-4">
                            <ThemeSwitch theme toggle_theme />
                        </div>
                    </div>

                    <div class="flex md:hidden items-center gap-2">
                        <ThemeSwitch theme toggle_theme />
                        <button
                            class="inline-flex items-center justify-center size-8 rounded-md hover:bg-accent"
                            aria-label="Toggle menu"
                            aria-expanded=move || mobile_open.get().to_string()
                            on:click=move |_| set_mobile_open.update(|open| *open = !*open)
                        >
                            {move || {
                                if mobile_open.get() {
                                    Either::Left(view! { <i class="ti ti-x text-xl"></i> })
                                } else {
                                    Either::Right(view! { <i class="ti ti-menu-2 text-xl"></i> })
                                }
                            }}
                        </button>
                    </div>
                </div>
            </div>

            <div class=move || {
                if mobile_open.get() {
                    "md:hidden border-t border-border bg-background/95 overflow-hidden transition-all duration-300 max-h-64 opacity-100"
                } else {
                    "md:hidden border-t border-border bg-background/95 overflow-hidden transition-all duration-300 max-h-0 opacity-0"
                }
            }>
                <div class="container mx-auto px-4 py-2 flex flex-col gap-1">
                    {links(
                        "px-3 py-2.5 text-sm font-medium text-muted hover:text-foreground transition-colors rounded-md hover:bg-accent text-left",
                    )}
                </div>
            </div>
        </nav>
    }
}

#[component]
fn ThemeSwitch(theme: ReadSignal<Theme>, toggle_theme: Callback<()>) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2">
            <i class="ti ti-sun text-sm text-muted"></i>
            <button
                type="button"
                role="switch"
                aria-label="Dark mode"
                aria-checked=move || theme.get().is_dark().to_string()
                class=move || {
                    if theme.get().is_dark() {
                        "relative inline-flex h-5 w-9 items-center rounded-full bg-primary transition-colors"
                    } else {
                        "relative inline-flex h-5 w-9 items-center rounded-full bg-border transition-colors"
                    }
                }
                on:click=move |_| toggle_theme.run(())
            >
                <span class=move || {
                    if theme.get().is_dark() {
                        "inline-block size-4 rounded-full bg-background shadow transition-transform translate-x-4"
                    } else {
                        "inline-block size-4 rounded-full bg-background shadow transition-transform translate-x-0.5"
                    }
                }></span>
            </button>
            <i class="ti ti-moon text-sm text-muted"></i>
        </div>
    }
}
