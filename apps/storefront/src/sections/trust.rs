use leptos::prelude::*;

#[component]
pub fn TrustBar() -> impl IntoView {
    view! {
        <div class="trust-bar">
            <span><strong>"2,400+"</strong> " students enrolled"</span>
            <span><strong>"48 hr"</strong> " evaluation turnaround"</span>
            <span><strong>"ICAI"</strong> " pattern papers"</span>
            <span><strong>"4.8/5"</strong> " average rating"</span>
        </div>
    }
}
