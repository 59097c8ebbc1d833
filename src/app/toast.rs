use leptos::prelude::*;

use crate::contact::{Notice, NoticeKind};

/// Transient notification banner. Display lifetime is owned by the
/// contact flow; this component only renders the current notice.
#[component]
pub fn Toast(notice: Notice) -> impl IntoView {
    let tone = match notice.kind {
        NoticeKind::Success => "bg-green-700 border-green-500",
        NoticeKind::Error => "bg-red-800 border-red-600",
    };
    let class = format!(
        "fixed top-6 right-6 z-50 px-5 py-3 rounded-lg border shadow-lg text-orange-100 {tone}"
    );
    view! {
        <div class=class role="status">
            {notice.message}
        </div>
    }
}
