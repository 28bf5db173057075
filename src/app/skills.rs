use leptos::prelude::*;

use super::section::Section;
use crate::icons::icon_class;
use crate::portfolio::{SectionId, Skill};
use crate::utils::{category_averages, group_skills_by_category, radar_vertices, RadarPoint};

const CHART_SIZE: f64 = 280.0;
const CHART_RADIUS: f64 = 100.0;

#[component]
pub fn Skills(skills: &'static [Skill]) -> impl IntoView {
    let grouped = group_skills_by_category(skills);
    let averages = category_averages(skills);

    let cards = grouped
        .into_iter()
        .filter(|(_, items)| !items.is_empty())
        .map(|(category, items)| {
            view! {
                <div class="rounded-xl border border-border p-4">
                    <h3 class="text-sm font-semibold mb-3">{category.label()}</h3>
                    <div class="flex flex-wrap gap-2">
                        {items.into_iter().map(|skill| view! { <SkillBadge skill /> }).collect_view()}
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <Section
            id=SectionId::Skills
            title="Skills & Technologies"
            subtitle="Technologies I work with and my proficiency across different areas"
            muted=true
        >
            <div class="max-w-6xl mx-auto grid grid-cols-1 lg:grid-cols-[1fr_1.5fr] gap-8">
                <div class="rounded-xl border border-border p-4">
                    <h3 class="font-semibold mb-4">"Proficiency Overview"</h3>
                    <RadarChart points=averages />
                </div>
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">{cards}</div>
            </div>
        </Section>
    }
}

#[component]
fn SkillBadge(skill: Skill) -> impl IntoView {
    let icon = skill
        .icon
        .as_deref()
        .and_then(icon_class)
        .map(|class| view! { <i class=format!("{class} text-xs")></i> });
    view! {
        <span
            class="inline-flex items-center gap-1 rounded-md bg-secondary px-2 py-0.5 text-sm cursor-default hover:bg-primary/10 transition-colors"
            title=format!("Proficiency: {}%", skill.proficiency)
        >
            {icon}
            {skill.name}
        </span>
    }
}

/// Spider chart of per-category averages drawn as inline SVG.
#[component]
fn RadarChart(points: Vec<RadarPoint>) -> impl IntoView {
    if points.is_empty() {
        return view! { <p class="text-sm text-muted">"No skills listed yet."</p> }.into_any();
    }
    let center = CHART_SIZE / 2.0;
    let to_attr = |vertices: Vec<(f64, f64)>| {
        vertices
            .into_iter()
            .map(|(x, y)| format!("{x:.1},{y:.1}"))
            .collect::<Vec<_>>()
            .join(" ")
    };
    let full = points
        .iter()
        .map(|p| RadarPoint {
            value: p.full_mark,
            ..p.clone()
        })
        .collect::<Vec<_>>();
    let rings = [0.25, 0.5, 0.75, 1.0]
        .into_iter()
        .map(|scale| {
            let ring = to_attr(radar_vertices(&full, center, CHART_RADIUS * scale));
            view! { <polygon points=ring class="fill-none stroke-border" /> }
        })
        .collect_view();
    let outer = radar_vertices(&full, center, CHART_RADIUS);
    let spokes = outer
        .iter()
        .map(|(x, y)| {
            view! {
                <line
                    x1=format!("{center:.1}")
                    y1=format!("{center:.1}")
                    x2=format!("{x:.1}")
                    y2=format!("{y:.1}")
                    class="stroke-border"
                />
            }
        })
        .collect_view();
    let labels = radar_vertices(&full, center, CHART_RADIUS + 22.0)
        .into_iter()
        .zip(points.iter())
        .map(|((x, y), p)| {
            view! {
                <text x=format!("{x:.1}") y=format!("{y:.1}") text-anchor="middle" dominant-baseline="middle" class="fill-current text-[11px]">
                    {p.category.clone()}
                </text>
            }
        })
        .collect_view();
    let shape = to_attr(radar_vertices(&points, center, CHART_RADIUS));
    let bars = points
        .iter()
        .map(|p| {
            view! {
                <li class="space-y-1">
                    <div class="flex justify-between text-xs">
                        <span>{p.category.clone()}</span>
                        <span class="text-muted">{format!("{}%", p.value)}</span>
                    </div>
                    <div class="h-1.5 rounded-full bg-secondary overflow-hidden">
                        <div
                            class="h-full rounded-full bg-primary"
                            style=format!("width: {}%", p.value * 100 / p.full_mark.max(1))
                        ></div>
                    </div>
                </li>
            }
        })
        .collect_view();

    view! {
        <figure>
            <svg
                viewBox=format!("0 0 {CHART_SIZE} {CHART_SIZE}")
                class="w-full max-w-[320px] mx-auto text-foreground"
                role="img"
                aria-label="Average proficiency per skill category"
            >
                {rings}
                {spokes}
                <polygon points=shape class="fill-primary/30 stroke-primary" />
                {labels}
            </svg>
            <figcaption>
                <ul class="mt-4 space-y-2">{bars}</ul>
            </figcaption>
        </figure>
    }
    .into_any()
}
