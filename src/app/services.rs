use leptos::prelude::*;
use leptos_meta::Title;

use super::cards::ServiceCard;
use super::collection::{CollectionView, Trigger};
use crate::motion::Role;
use crate::records::SERVICES;

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <Title text="Services" />
        <div class="container mx-auto max-w-screen-md px-4 sm:px-6 lg:px-8 py-12">
            <CollectionView
                items=SERVICES.to_vec()
                role=Role::Service
                trigger=Trigger::OnVisible
                heading="My Services"
                class="grid grid-cols-1 sm:grid-cols-2 gap-x-8 gap-y-14 mt-8"
                render=|service, i, ctx| {
                    view! { <ServiceCard service=service index=i ctx=ctx /> }.into_any()
                }
            />
            <p class="text-center text-orange-100/70 mt-10">
                "Here are the services I provide to help you succeed online."
            </p>
        </div>
    }
}
