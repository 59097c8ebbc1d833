use std::time::Duration;

use leptos::{ev::SubmitEvent, html::Div, prelude::*, task::spawn_local};
use leptos_meta::Title;

use super::collection::{entrance_ctx, use_reduced_motion, AnimatedCard, CardCtx, Trigger};
use super::toast::Toast;
use crate::contact::{
    ContactFlow, ContactState, EmailJsSender, NotificationSender, SendError, SubmitError,
    NOTICE_WINDOW_MS,
};
use crate::motion;
use crate::records::{SOCIAL_LINKS, TAGLINE};

#[component]
pub fn HomePage() -> impl IntoView {
    let hero = NodeRef::<Div>::new();
    let ctx = entrance_ctx(hero, Trigger::Immediate, "fade-up");

    // the profile image pops rather than slides
    let reduced = use_reduced_motion();
    let image_ctx = CardCtx {
        entered: ctx.entered,
        profile: Signal::derive(move || {
            motion::resolve_with("card-pop", reduced.get())
                .expect("motion profile should be registered")
        }),
    };

    view! {
        <Title text="Home" />
        <div
            node_ref=hero
            class="min-h-screen py-12 px-3 sm:px-4 md:px-6 lg:px-8 text-orange-100 relative"
        >
            <div class="flex flex-col-reverse lg:flex-row items-center justify-between container mx-auto max-w-screen-xl gap-10 py-8">
                <div class="w-full lg:w-1/2 space-y-5 sm:space-y-7 mt-4 lg:mt-0">
                    <AnimatedCard ctx=ctx index=0>
                        <h1 class="text-3xl sm:text-4xl lg:text-5xl font-extrabold text-center lg:text-left">
                            "SEO Growth Strategist &"
                            <br />
                            "Web Developer"
                        </h1>
                    </AnimatedCard>
                    <AnimatedCard ctx=ctx index=1>
                        <p class="text-base sm:text-lg lg:text-xl text-center lg:text-left leading-relaxed">
                            {TAGLINE}
                        </p>
                    </AnimatedCard>
                    <AnimatedCard ctx=ctx index=2>
                        <ContactForm />
                    </AnimatedCard>
                    <AnimatedCard ctx=ctx index=3 class="mt-8 flex justify-center lg:justify-start">
                        <a
                            href="/Segera.pdf"
                            download="Segera.pdf"
                            class="w-full sm:w-auto bg-red-800 hover:bg-red-700 text-orange-100 rounded-lg px-4 py-2.5 font-semibold shadow-md hover:scale-105 transition inline-flex items-center justify-center space-x-2"
                        >
                            <i class="extra-download"></i>
                            <span>"My Resume"</span>
                        </a>
                    </AnimatedCard>
                    <div class="flex justify-center lg:justify-start space-x-4 sm:space-x-5 mt-14">
                        {SOCIAL_LINKS
                            .iter()
                            .enumerate()
                            .map(|(i, social)| {
                                view! {
                                    <AnimatedCard ctx=ctx index={4 + i}>
                                        <a
                                            href=social.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=social.label
                                            class="text-2xl hover:text-red-600 hover:scale-125 transition"
                                        >
                                            <i class=social.icon></i>
                                        </a>
                                    </AnimatedCard>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="w-full lg:w-1/2 flex justify-center">
                    <AnimatedCard ctx=image_ctx index=0>
                        <img
                            src="/profile.png"
                            alt="Profile"
                            class="rounded-2xl shadow-lg w-56 h-56 sm:w-72 sm:h-72 md:w-[360px] md:h-[360px] lg:w-[500px] lg:h-[500px] object-cover border-8 border-orange-100/10 hover:scale-[1.025] transition"
                        />
                    </AnimatedCard>
                </div>
            </div>
        </div>
    }
}

/// Email-capture form driving the contact request flow. At most one
/// request is in flight; the flow's own guard ignores repeat submits.
#[component]
fn ContactForm() -> impl IntoView {
    let flow = RwSignal::new(ContactFlow::new());
    let timer = StoredValue::new_local(None::<TimeoutHandle>);

    let arm_notice_timer = move || {
        if let Some(handle) = timer.get_value() {
            handle.clear();
        }
        let handle = set_timeout_with_handle(
            move || {
                timer.set_value(None);
                flow.update(|f| f.window_elapsed());
            },
            Duration::from_millis(NOTICE_WINDOW_MS),
        )
        .ok();
        timer.set_value(handle);
    };

    // don't fire a dismiss against a torn-down form
    on_cleanup(move || {
        if let Some(handle) = timer.get_value() {
            handle.clear();
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(outcome) = flow.try_update(|f| f.begin_submit()) else {
            return;
        };
        match outcome {
            Ok(request) => {
                spawn_local(async move {
                    let result = match EmailJsSender::from_env() {
                        Some(sender) => sender.send(&request).await,
                        None => Err(SendError::NotConfigured),
                    };
                    if let Err(err) = &result {
                        log::error!("contact request failed: {err}");
                    }
                    flow.update(|f| f.complete(result));
                    arm_notice_timer();
                });
            }
            Err(SubmitError::InvalidAddress) => {
                // the input's native validation surfaces this; no send issued
                log::debug!("rejected malformed contact address");
            }
            Err(SubmitError::InFlight) => {}
        }
    };

    view! {
        {move || flow.with(|f| f.notice()).map(|notice| view! { <Toast notice=notice /> })}
        <form
            on:submit=on_submit
            class="flex flex-col sm:flex-row sm:space-x-3 space-y-3 sm:space-y-0 mt-5 sm:mt-7 w-full max-w-md mx-auto lg:mx-0"
        >
            <input
                type="email"
                required
                placeholder="Your Email Address"
                prop:value=move || flow.with(|f| f.address().to_string())
                on:input=move |ev| {
                    let address = event_target_value(&ev);
                    flow.update(|f| f.set_address(address));
                }
                class="w-full sm:w-auto rounded-lg px-4 py-2.5 bg-orange-100 text-black focus:outline-none focus:ring-4 focus:ring-red-500 transition"
            />
            <button
                type="submit"
                class="w-full sm:w-auto bg-red-800 hover:bg-red-700 text-orange-100 rounded-lg px-4 py-2.5 font-semibold shadow-md hover:scale-105 transition"
            >
                {move || {
                    if flow.with(|f| f.state()) == ContactState::Submitting {
                        "Sending..."
                    } else {
                        "Request Service"
                    }
                }}
            </button>
            <a
                href="tel:+254703687830"
                class="w-full sm:w-auto bg-red-800 hover:bg-red-700 text-orange-100 rounded-lg px-4 py-2.5 font-semibold shadow-md hover:scale-105 transition inline-flex items-center justify-center space-x-2"
            >
                <i class="extra-phone"></i>
                <span>"Call Me"</span>
            </a>
        </form>
    }
}
