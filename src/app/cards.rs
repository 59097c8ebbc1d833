//! Card renderers: one record + its position in, one animated card out.
//!
//! Cards never mutate their record; missing optional fields render a
//! placeholder rather than failing.

use leptos::{either::Either, prelude::*};

use super::collection::{AnimatedCard, CardCtx};
use crate::records::{
    CertificationRecord, JobRecord, Metric, ProjectRecord, ServiceRecord, SkillGroupRecord,
    TrafficStats,
};

/// Image slot with a defined placeholder for absent imagery.
#[component]
pub fn CardImage(
    src: Option<&'static str>,
    alt: &'static str,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    match src {
        Some(src) => Either::Left(view! { <img src=src alt=alt class=class /> }),
        None => Either::Right(
            view! { <div class="flex items-center justify-center w-full h-full text-gray-500 text-sm">"Coming soon"</div> },
        ),
    }
}

#[component]
pub fn JobCard(job: JobRecord, index: usize, ctx: CardCtx) -> impl IntoView {
    let card_class = format!(
        "w-full {} rounded-xl shadow p-6 border border-gray-200 text-black",
        job.accent
    );
    view! {
        <AnimatedCard ctx=ctx index=index>
            <div class=card_class>
                <div class="flex items-center gap-3 mb-4">
                    <div class="w-10 h-10">
                        <CardImage src=job.logo alt=job.company class="w-10 h-10 object-contain" />
                    </div>
                    <h3 class="text-lg font-semibold text-gray-900">{job.company}</h3>
                </div>
                <p class="text-xl text-red-800 mb-4">{job.role}</p>
                <p class="text-sm font-bold text-gray-800 mb-4">{job.dates}</p>
                <p class="text-black">{job.description}</p>
            </div>
        </AnimatedCard>
    }
}

#[component]
pub fn CertificationCard(cert: CertificationRecord, index: usize, ctx: CardCtx) -> impl IntoView {
    view! {
        <AnimatedCard ctx=ctx index=index>
            <a
                href=cert.link
                target="_blank"
                rel="noopener noreferrer"
                class="flex flex-col items-center border rounded-lg shadow-md p-6 bg-orange-100 transition hover:shadow-xl hover:scale-105 duration-200"
            >
                <div class="h-16 mb-4">
                    <CardImage src=cert.logo alt=cert.issuer class="h-16 object-contain" />
                </div>
                <h4 class="text-lg font-bold text-red-800 text-center">{cert.name}</h4>
                <p class="text-sm text-gray-600">{cert.issuer}</p>
            </a>
        </AnimatedCard>
    }
}

#[component]
pub fn SkillGroupCard(group: SkillGroupRecord, index: usize, ctx: CardCtx) -> impl IntoView {
    view! {
        <AnimatedCard
            ctx=ctx
            index=index
            class="bg-white/5 rounded-lg p-4 shadow-sm hover:shadow-md transition duration-300 text-left"
        >
            <h4 class="flex items-center text-lg font-semibold mb-3">
                <span class="mr-2">{group.icon}</span>
                {group.label}
            </h4>
            <ul class="space-y-1">
                {group
                    .skills
                    .iter()
                    .map(|skill| {
                        view! {
                            <li class="hover:text-red-400 transition duration-200">
                                "• "
                                {*skill}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </AnimatedCard>
    }
}

#[component]
fn Stat(
    label: &'static str,
    metric: Metric,
    #[prop(optional)] extra: Option<String>,
) -> impl IntoView {
    let change_class = if metric.is_positive() {
        "text-xs text-green-400"
    } else {
        "text-xs text-red-400"
    };
    view! {
        <div>
            <p class="text-gray-400">{label}</p>
            <p class="font-bold text-lg">
                {metric.value}
                " "
                <span class=change_class>{metric.change}</span>
            </p>
            {extra.map(|extra| view! { <p class="text-xs text-gray-500">{extra}</p> })}
        </div>
    }
}

#[component]
fn StatsGrid(stats: TrafficStats) -> impl IntoView {
    let devices = format!(
        "💻 {} / 📱 {}",
        stats.devices.desktop, stats.devices.mobile
    );
    view! {
        <div class="grid grid-cols-2 gap-4 text-white text-sm mb-4">
            <Stat label="Visits" metric=stats.visits extra=devices />
            <Stat label="Unique Visitors" metric=stats.unique_visitors />
            <Stat label="Conversion" metric=stats.conversion />
            <Stat label="Pages / Visit" metric=stats.pages_per_visit />
            <Stat label="Avg. Duration" metric=stats.avg_visit_duration />
            <Stat label="Bounce Rate" metric=stats.bounce_rate />
        </div>
    }
}

#[component]
pub fn ProjectCard(project: ProjectRecord, index: usize, ctx: CardCtx) -> impl IntoView {
    view! {
        <AnimatedCard
            ctx=ctx
            index=index
            class="rounded-2xl bg-white/5 shadow-xl flex flex-col overflow-hidden border border-white/10 transition-all duration-300 hover:scale-[1.045]"
        >
            <div class="h-52 bg-black flex items-center justify-center overflow-hidden">
                <CardImage
                    src=project.image
                    alt=project.title
                    class="object-cover h-full w-full transition-transform duration-300 hover:scale-[1.07]"
                />
            </div>
            <div class="flex flex-col flex-1 px-6 py-5">
                <h3 class="text-xl font-bold text-orange-100 mb-2">{project.title}</h3>
                <p class="text-sm text-gray-400 mb-3">{project.description}</p>
                {project.stats.map(|stats| view! { <StatsGrid stats=stats /> })}
                {project
                    .link
                    .map(|link| {
                        view! {
                            <a
                                href=link
                                target="_blank"
                                rel="noopener noreferrer"
                                class="mt-auto inline-block bg-red-800 text-orange-100 font-semibold px-4 py-2 rounded-lg hover:bg-red-700 transition-colors duration-200 text-center"
                            >
                                "View Website"
                            </a>
                        }
                    })}
                {project
                    .credits_semrush()
                    .then(|| {
                        view! {
                            <div class="mt-3 flex items-center justify-center space-x-2">
                                <img src="/sem.jpg" alt="Semrush Logo" class="h-5" />
                                <span class="text-xs text-gray-400">"Powered by Semrush"</span>
                            </div>
                        }
                    })}
            </div>
        </AnimatedCard>
    }
}

/// Design projects render as plain image tiles.
#[component]
pub fn DesignTile(project: ProjectRecord, index: usize, ctx: CardCtx) -> impl IntoView {
    view! {
        <AnimatedCard
            ctx=ctx
            index=index
            class="w-80 h-80 rounded-xl overflow-hidden bg-black flex items-center justify-center border border-white/10 shadow-xl"
        >
            <CardImage src=project.image alt=project.title class="object-cover w-full h-full" />
        </AnimatedCard>
    }
}

#[component]
pub fn ServiceCard(service: ServiceRecord, index: usize, ctx: CardCtx) -> impl IntoView {
    view! {
        <AnimatedCard
            ctx=ctx
            index=index
            class="relative rounded-xl border border-white/10 bg-white/5 backdrop-blur-md px-6 pt-16 pb-8 transition-transform hover:scale-[1.02] hover:-translate-y-1.5 hover:shadow-xl shadow-black/30"
        >
            <div class="absolute -top-7 left-6 bg-gradient-to-br from-orange-100 to-orange-500 text-black font-semibold text-sm w-12 h-12 rounded-full flex items-center justify-center shadow-md border border-orange-100">
                {service.badge}
            </div>
            <h3 class="text-xl font-semibold text-orange-100 mb-2">{service.title}</h3>
            <p class="text-orange-100 text-base leading-relaxed">{service.description}</p>
        </AnimatedCard>
    }
}
