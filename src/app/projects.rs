use leptos::prelude::*;
use leptos_meta::Title;

use super::cards::{DesignTile, ProjectCard};
use super::collection::{CollectionView, Trigger};
use crate::motion::Role;
use crate::records::{DESIGN_PROJECTS, SEO_PROJECTS, WEB_PROJECTS};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    view! {
        <Title text="Projects" />
        <div class="container mx-auto max-w-screen-xl px-4 sm:px-6 lg:px-8 py-12 space-y-20">
            <CollectionView
                items=WEB_PROJECTS.to_vec()
                role=Role::Project
                trigger=Trigger::Immediate
                heading="Web Development Projects"
                class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8"
                render=|project, i, ctx| {
                    view! { <ProjectCard project=project index=i ctx=ctx /> }.into_any()
                }
            />
            <CollectionView
                items=SEO_PROJECTS.to_vec()
                role=Role::Project
                trigger=Trigger::OnVisible
                heading="SEO Services"
                class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8"
                render=|project, i, ctx| {
                    view! { <ProjectCard project=project index=i ctx=ctx /> }.into_any()
                }
            />
            <CollectionView
                items=DESIGN_PROJECTS.to_vec()
                role=Role::Project
                trigger=Trigger::OnVisible
                heading="Graphic Design Projects"
                class="flex flex-wrap justify-center gap-8"
                render=|project, i, ctx| {
                    view! { <DesignTile project=project index=i ctx=ctx /> }.into_any()
                }
            />
        </div>
    }
}
