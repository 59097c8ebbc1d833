//! Collection View: renders an ordered record store as animated cards
//! with orchestrated group-level stagger.

use leptos::{html::Div, prelude::*};
use leptos_use::{use_intersection_observer, use_media_query};

use crate::motion::{self, MotionProfile, Role};

/// When a collection starts its entrance: on mount for above-the-fold
/// content, on first viewport intersection for everything below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Immediate,
    OnVisible,
}

#[derive(Clone, Copy)]
struct ReducedMotion(Signal<bool>);

/// Installs the ambient reduced-motion preference. Called once from App.
pub fn provide_reduced_motion() {
    let prefers = use_media_query("(prefers-reduced-motion: reduce)");
    provide_context(ReducedMotion(prefers));
}

pub fn use_reduced_motion() -> Signal<bool> {
    use_context::<ReducedMotion>()
        .map(|r| r.0)
        .unwrap_or_else(|| Signal::derive(|| false))
}

/// Entrance state for one collection. `has_entered` is monotone for the
/// lifetime of the mount: it flips false -> true exactly once and later
/// intersection callbacks are ignored.
pub fn use_entrance(node: NodeRef<Div>, trigger: Trigger) -> ReadSignal<bool> {
    let (entered, set_entered) = signal(false);
    match trigger {
        Trigger::Immediate => {
            Effect::new(move |_| {
                // let the initial state paint for one frame so the
                // transition has something to run from
                request_animation_frame(move || set_entered.set(true));
            });
        }
        Trigger::OnVisible => {
            use_intersection_observer(node, move |entries, _| {
                if entered.get_untracked() {
                    return;
                }
                if entries.iter().any(|entry| entry.is_intersecting()) {
                    set_entered.set(true);
                }
            });
        }
    }
    entered
}

/// Everything a card needs to compute its visual state: the shared
/// entrance signal and the (reduced-motion aware) profile.
#[derive(Clone, Copy)]
pub struct CardCtx {
    pub entered: Signal<bool>,
    pub profile: Signal<&'static MotionProfile>,
}

/// Builds a [`CardCtx`] from an entrance trigger and a registered
/// profile name. An unregistered name is a programming error and panics
/// rather than degrading silently.
pub fn entrance_ctx(node: NodeRef<Div>, trigger: Trigger, profile_name: &'static str) -> CardCtx {
    let reduced = use_reduced_motion();
    let entered = use_entrance(node, trigger);
    let profile = Signal::derive(move || {
        motion::resolve_with(profile_name, reduced.get())
            .expect("motion profile should be registered")
    });
    CardCtx {
        entered: entered.into(),
        profile,
    }
}

/// One animated card: applies the profile's visual state and the delay
/// computed from this card's position.
#[component]
pub fn AnimatedCard(
    ctx: CardCtx,
    index: usize,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let style = move || ctx.profile.get().inline_style(ctx.entered.get(), index);
    view! {
        <div class=class style=style>
            {children()}
        </div>
    }
}

/// Renders an ordered record store as a stagger-choreographed card set.
///
/// Render order equals store order and each card's delay is
/// non-decreasing in its index. The container itself fades in with zero
/// delay, so it is never later than its first child. An empty store
/// renders an empty, still-valid container.
#[component]
pub fn CollectionView<T, F>(
    items: Vec<T>,
    role: Role,
    trigger: Trigger,
    /// Optional section heading, animated at index 0; cards then start
    /// at index 1 so the heading leads the stagger.
    #[prop(optional)]
    heading: Option<&'static str>,
    #[prop(optional)] class: &'static str,
    render: F,
) -> impl IntoView
where
    T: Clone + 'static,
    F: Fn(T, usize, CardCtx) -> AnyView + 'static,
{
    let node = NodeRef::<Div>::new();
    let ctx = entrance_ctx(node, trigger, role.profile_name());
    let heading_ctx = CardCtx {
        entered: ctx.entered,
        profile: {
            let reduced = use_reduced_motion();
            Signal::derive(move || {
                motion::resolve_with("fade-up", reduced.get())
                    .expect("motion profile should be registered")
            })
        },
    };

    let reduced = use_reduced_motion();
    let container = Signal::derive(move || {
        motion::resolve_with("container-stagger", reduced.get())
            .expect("motion profile should be registered")
    });
    let container_style = move || container.get().inline_style(ctx.entered.get(), 0);

    let offset = usize::from(heading.is_some());
    view! {
        <div node_ref=node style=container_style class="mb-8">
            {heading
                .map(|text| {
                    view! {
                        <AnimatedCard ctx=heading_ctx index=0 class="w-full flex justify-center">
                            <h3 class="text-2xl font-semibold text-orange-100 text-center mb-6">
                                {text}
                            </h3>
                        </AnimatedCard>
                    }
                })}
            <div class=class>
                {items
                    .into_iter()
                    .enumerate()
                    .map(|(i, item)| render(item, i + offset, ctx))
                    .collect_view()}
            </div>
        </div>
    }
}
