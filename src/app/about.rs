use leptos::prelude::*;
use leptos_meta::Title;

use super::cards::{CertificationCard, JobCard, SkillGroupCard};
use super::collection::{CollectionView, Trigger};
use crate::motion::Role;
use crate::records::{CERTIFICATIONS, JOBS, SKILL_GROUPS};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About Me" />
        <div class="container mx-auto max-w-screen-xl px-4 sm:px-6 lg:px-8 py-12 space-y-16">
            <CollectionView
                items=JOBS.to_vec()
                role=Role::Job
                trigger=Trigger::Immediate
                heading="💼 Work Background"
                class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6"
                render=|job, i, ctx| view! { <JobCard job=job index=i ctx=ctx /> }.into_any()
            />
            <CollectionView
                items=SKILL_GROUPS.to_vec()
                role=Role::SkillGroup
                trigger=Trigger::OnVisible
                heading="🛠️ My Skills & Tools"
                class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-4 gap-6"
                render=|group, i, ctx| {
                    view! { <SkillGroupCard group=group index=i ctx=ctx /> }.into_any()
                }
            />
            <CollectionView
                items=CERTIFICATIONS.to_vec()
                role=Role::Certification
                trigger=Trigger::OnVisible
                heading="📜 Certifications"
                class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6"
                render=|cert, i, ctx| {
                    view! { <CertificationCard cert=cert index=i ctx=ctx /> }.into_any()
                }
            />
        </div>
    }
}
