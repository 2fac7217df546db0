use leptos::prelude::*;

#[component]
pub fn Statistics() -> impl IntoView {
    view! {
        <section class="statistics preserve-bg">
            <div class="container">
                <div class="stat-grid">
                    <Stat value="2,500+" label="Businesses onboarded" />
                    <Stat value="40M" label="Messages delivered each month" />
                    <Stat value="3.2x" label="Average lift in reply rate" />
                    <Stat value="24/7" label="Support coverage" />
                </div>
            </div>
        </section>
    }
}

#[component]
fn Stat(value: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="stat">
            <span class="stat-value">{value}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}
