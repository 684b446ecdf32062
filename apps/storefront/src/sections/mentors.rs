use leptos::prelude::*;
use prep_router::View;

#[component]
pub fn MentorsSection(on_navigate: Callback<(View, Option<String>)>) -> impl IntoView {
    view! {
        <section>
            <div class="section-inner">
                <h2>"Your Mentors"</h2>
                <div class="card-grid">
                    <div class="info-card">
                        <h3>"CA Meera Shah"</h3>
                        <p>"AIR 14 - Costing and FM. Evaluated 3,000+ answer sheets."</p>
                    </div>
                    <div class="info-card">
                        <h3>"CA Rohit Nair"</h3>
                        <p>"Direct Tax. Known for remarks longer than the answers."</p>
                    </div>
                    <div class="info-card">
                        <h3>"CA Ananya Iyer"</h3>
                        <p>"Audit and Law. Runs the weekly doubt-solving sessions."</p>
                    </div>
                </div>
                <button
                    class="link-button"
                    on:click=move |_| on_navigate.run((View::MentorsDetail, None))
                >
                    "Meet the full team"
                </button>
            </div>
        </section>
    }
}
