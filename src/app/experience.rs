use leptos::{either::Either, prelude::*};

use super::section::Section;
use super::timeline::{
    Timeline, TimelineContent, TimelineDescription, TimelineHeader, TimelineIndicator,
    TimelineItem,
};
use crate::portfolio::{ExperienceEntry, SectionId};
use crate::utils::{date_range, is_work, sort_experience};

#[component]
pub fn Experience(entries: &'static [ExperienceEntry]) -> impl IntoView {
    let sorted = sort_experience(entries);
    let total = sorted.len();
    let items = sorted
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let is_last = index + 1 == total;
            view! {
                <TimelineItem is_last>
                    <TimelineIndicator is_last />
                    <TimelineContent>
                        <ExperienceCard entry />
                    </TimelineContent>
                </TimelineItem>
            }
        })
        .collect_view();

    view! {
        <Section
            id=SectionId::Experience
            title="Experience"
            subtitle="My professional journey and education"
            muted=true
        >
            <div class="max-w-3xl mx-auto">
                <Timeline>{items}</Timeline>
            </div>
        </Section>
    }
}

#[component]
fn ExperienceCard(entry: &'static ExperienceEntry) -> impl IntoView {
    let icon = if is_work(entry) {
        Either::Left(view! { <i class="ti ti-briefcase text-primary shrink-0"></i> })
    } else {
        Either::Right(view! { <i class="ti ti-school text-primary shrink-0"></i> })
    };
    let highlights = (!entry.highlights.is_empty()).then(|| {
        view! {
            <ul class="text-sm text-muted space-y-1 mt-2">
                {entry
                    .highlights
                    .iter()
                    .map(|h| {
                        view! {
                            <li class="flex gap-2">
                                <span class="text-primary shrink-0">"•"</span>
                                {h.clone()}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
    });
    view! {
        <div class="rounded-xl border border-border p-5 space-y-3 hover:ring-1 hover:ring-primary/20 transition-all">
            <TimelineHeader>
                <div class="flex items-center gap-2">
                    {icon}
                    <h3 class="font-semibold">{entry.role.clone()}</h3>
                </div>
                <span class="inline-flex rounded-full border border-border px-2.5 py-0.5 text-xs">
                    {entry.company.clone()}
                </span>
            </TimelineHeader>
            <p class="text-xs text-muted">{date_range(entry)}</p>
            <TimelineDescription>{entry.description.clone()}</TimelineDescription>
            {highlights}
        </div>
    }
}
