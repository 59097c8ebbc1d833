mod about;
mod cards;
mod collection;
mod home;
mod nav;
mod projects;
mod services;
mod toast;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use collection::provide_reduced_motion;
use nav::Nav;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-gradient-to-r from-black to-gray-900 text-orange-100">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    // Process-wide reduced-motion preference, read once per resolution.
    provide_reduced_motion();

    view! {
        // sets the document title
        <Title formatter=|title| format!("Amos Segera - {title}") />

        <Router>
            <Nav />
            <main class="flex flex-col flex-grow w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=home::HomePage />
                    <Route path=path!("/about") view=about::AboutPage />
                    <Route path=path!("/projects") view=projects::ProjectsPage />
                    <Route path=path!("/services") view=services::ServicesPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="mt-auto py-6 text-center text-sm text-orange-100/60">
            <p title=env!("BUILD_TIME")>
                "© 2025 Amos Segera · v"
                {env!("CARGO_PKG_VERSION")}
            </p>
        </footer>
    }
}
