use crate::dashboard::ui::dashboard::CompanyDashboard;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <CompanyDashboard />
    }
}
