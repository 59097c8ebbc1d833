use leptos::prelude::*;
use leptos_router::{components::*, hooks::use_location};

const LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/about", "About"),
    ("/projects", "Projects"),
    ("/services", "Services"),
];

#[component]
pub fn Nav() -> impl IntoView {
    let (open, set_open) = signal(false);
    let location = use_location();
    let link_class = move |href: &'static str| {
        if location.pathname.get() == href {
            "text-red-500 font-semibold transition"
        } else {
            "hover:text-red-400 transition"
        }
    };

    view! {
        <header class="sticky top-0 z-40 bg-black/70 backdrop-blur-md shadow-lg">
            <div class="container mx-auto max-w-screen-xl px-4 sm:px-6 lg:px-8 py-4 flex items-center justify-between">
                <A href="/" attr:class="text-2xl font-bold text-orange-100 hover:text-red-400 transition">
                    "Amos Segera"
                </A>
                <nav class="hidden md:flex items-center space-x-8">
                    {LINKS
                        .iter()
                        .map(|&(href, label)| {
                            view! {
                                <A href=href attr:class=move || link_class(href)>
                                    {label}
                                </A>
                            }
                        })
                        .collect_view()}
                </nav>
                <button
                    class="md:hidden text-2xl"
                    aria-label="Toggle navigation"
                    on:click=move |_| set_open.update(|o| *o = !*o)
                >
                    {move || if open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            {move || {
                open.get()
                    .then(|| {
                        view! {
                            <nav class="md:hidden flex flex-col space-y-3 px-6 pb-4">
                                {LINKS
                                    .iter()
                                    .map(|&(href, label)| {
                                        view! {
                                            <A
                                                href=href
                                                attr:class=move || link_class(href)
                                                on:click=move |_| set_open.set(false)
                                            >
                                                {label}
                                            </A>
                                        }
                                    })
                                    .collect_view()}
                            </nav>
                        }
                    })
            }}
        </header>
    }
}
