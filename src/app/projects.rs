use leptos::{ev, prelude::*};

use super::data_list::DataList;
use super::section::Section;
use crate::portfolio::{Project, ProjectStatus, SectionId};
use crate::projects::ProjectBrowser;
use crate::utils::{detail_description, is_featured, projects_by_status};

static EMPTY_MESSAGE: &str = "No projects match the selected filters.";

fn status_badge_class(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Completed => "bg-green/15 text-green",
        ProjectStatus::InProgress => "bg-yellow/15 text-yellow",
        ProjectStatus::Planned => "bg-blue/15 text-blue",
    }
}

#[component]
pub fn Projects(projects: &'static [Project]) -> impl IntoView {
    let browser = RwSignal::new(ProjectBrowser::default());
    let visible = Signal::derive(move || browser.with(|b| b.visible(projects)));

    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            browser.update(|b| b.dismiss());
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <Section
            id=SectionId::Projects
            title="Projects"
            subtitle="A selection of projects I've built and contributed to"
        >
            <div class="max-w-6xl mx-auto">
                <div class="flex justify-end mb-6">
                    <StatusMenu browser projects />
                </div>
                <DataList
                    items=visible
                    key=|p: &&'static Project| p.id.clone()
                    render=move |project: &'static Project| {
                        view! { <ProjectCard project on_open=move || browser.update(|b| b.select(&project.id)) /> }
                    }
                    empty_message=EMPTY_MESSAGE
                    class="grid-cols-1 md:grid-cols-2 lg:grid-cols-3"
                />
            </div>
            {move || {
                browser
                    .with(|b| b.selected(projects))
                    .map(|project| {
                        view! { <ProjectDialog project on_close=move || browser.update(|b| b.dismiss()) /> }
                    })
            }}
        </Section>
    }
}

#[component]
fn StatusMenu(browser: RwSignal<ProjectBrowser>, projects: &'static [Project]) -> impl IntoView {
    let (open, set_open) = signal(false);
    let count = move || browser.with(|b| b.filter().len());
    view! {
        <div class="relative">
            <button
                class="inline-flex items-center gap-2 rounded-md border border-border px-3 py-1.5 text-sm hover:bg-accent"
                aria-haspopup="menu"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                <i class="ti ti-filter"></i>
                "Filter"
                <span class="text-xs text-muted">{move || format!("({})", count())}</span>
            </button>
            <Show when=move || open.get()>
                <div
                    role="menu"
                    class="absolute right-0 z-20 mt-2 w-48 rounded-md border border-border bg-background p-1 shadow-lg"
                >
                    <p class="px-2 py-1.5 text-xs font-semibold text-muted">"Filter by status"</p>
                    {ProjectStatus::ALL
                        .into_iter()
                        .map(|status| {
                            let checked = move || browser.with(|b| b.filter().contains(status));
                            let count = projects_by_status(projects, status).len();
                            view! {
                                <button
                                    role="menuitemcheckbox"
                                    aria-checked=move || checked().to_string()
                                    class="flex w-full items-center gap-2 rounded px-2 py-1.5 text-sm hover:bg-accent"
                                    on:click=move |_| {
                                        if !browser.try_update(|b| b.toggle_status(status)).unwrap_or(false) {
                                            log::debug!("kept last status filter {}", status.label());
                                        }
                                    }
                                >
                                    <i class=move || {
                                        if checked() { "ti ti-square-check" } else { "ti ti-square" }
                                    }></i>
                                    <span class="flex-1 text-left">{status.label()}</span>
                                    <span class="text-xs text-muted">{count}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ProjectCard(project: &'static Project, on_open: impl Fn() + Send + Sync + 'static) -> impl IntoView {
    let featured = is_featured(project).then(|| {
        view! {
            <span class="absolute top-3 right-3 inline-flex items-center gap-1 rounded-full bg-primary px-2 py-0.5 text-xs text-primary-foreground">
                <i class="ti ti-star"></i>
                "Featured"
            </span>
        }
    });
    let tech = project
        .tech_stack
        .iter()
        .map(|t| view! { <span class="rounded-md bg-secondary px-2 py-0.5 text-xs">{t.clone()}</span> })
        .collect_view();
    view! {
        <article
            class="relative flex flex-col rounded-xl border border-border p-5 cursor-pointer hover:ring-1 hover:ring-primary/30 transition-all"
            tabindex="0"
            on:click=move |_| on_open()
        >
            {featured}
            <div class="flex items-center gap-2 mb-2">
                <h3 class="font-semibold">{project.title.clone()}</h3>
                <span class=format!(
                    "rounded-full px-2 py-0.5 text-xs {}",
                    status_badge_class(project.status),
                )>{project.status.label()}</span>
            </div>
            <p class="text-sm text-muted flex-1">{project.description.clone()}</p>
            <div class="flex flex-wrap gap-1.5 mt-4">{tech}</div>
            <ProjectLinks project />
        </article>
    }
}

/// External links; clicks stay on the link and don't open the detail dialog.
#[component]
fn ProjectLinks(project: &'static Project) -> impl IntoView {
    let link = |href: &Option<String>, icon: &'static str, label: &'static str| {
        href.clone().map(|href| {
            view! {
                <a
                    href=href
                    target="_blank"
                    rel="noopener noreferrer"
                    class="inline-flex items-center gap-1 text-sm text-muted hover:text-primary"
                    on:click=|ev| ev.stop_propagation()
                >
                    <i class=format!("ti {icon}")></i>
                    {label}
                </a>
            }
        })
    };
    view! {
        <div class="flex gap-4 mt-4">
            {link(&project.live_url, "ti-external-link", "Live")}
            {link(&project.repo_url, "ti-brand-github", "Code")}
        </div>
    }
}

#[component]
fn ProjectDialog(project: &'static Project, on_close: impl Fn() + Clone + Send + Sync + 'static) -> impl IntoView {
    let close = on_close.clone();
    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
            <div class="absolute inset-0 bg-black/60" on:click=move |_| close()></div>
            <div
                role="dialog"
                aria-modal="true"
                aria-labelledby="project-dialog-title"
                class="relative w-full max-w-2xl max-h-[85vh] overflow-y-auto rounded-xl border border-border bg-background p-6 shadow-xl"
            >
                <button
                    class="absolute top-4 right-4 text-muted hover:text-foreground"
                    aria-label="Close"
                    on:click=move |_| on_close()
                >
                    <i class="ti ti-x"></i>
                </button>
                <h3 id="project-dialog-title" class="text-xl font-bold pr-8">
                    {project.title.clone()}
                </h3>
                <span class=format!(
                    "inline-block mt-2 rounded-full px-2 py-0.5 text-xs {}",
                    status_badge_class(project.status),
                )>{project.status.label()}</span>
                <p class="mt-4 text-sm leading-relaxed">{detail_description(project).to_string()}</p>
                <h4 class="mt-6 text-sm font-semibold">"Tech Stack"</h4>
                <div class="flex flex-wrap gap-1.5 mt-2">
                    {project
                        .tech_stack
                        .iter()
                        .map(|t| view! { <span class="rounded-md bg-secondary px-2 py-0.5 text-xs">{t.clone()}</span> })
                        .collect_view()}
                </div>
                <ProjectLinks project />
            </div>
        </div>
    }
}
