use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboard::api;
use crate::dashboard::autocomplete;
use crate::dashboard::state::{
    self, ActiveTab, ANALYTICS_EMPTY_STATE, ANALYTICS_ERROR, ANALYTICS_NO_DATA,
    DESCRIPTION_PLACEHOLDER, REPORTS_EMPTY_STATE, REPORTS_ERROR, STAT_PLACEHOLDER,
};

/// Browser alert, the page's only error surface besides the panes
fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Company dashboard page
///
/// Owns every piece of transient UI state as signals and wires the search,
/// autocomplete, category filter, tab switching and clear behaviors to the
/// backend fetches. Nothing survives a reload.
#[component]
pub fn CompanyDashboard() -> impl IntoView {
    let (companies, set_companies) = signal::<Vec<String>>(Vec::new());
    let (company_input, set_company_input) = signal(String::new());
    let (suggestions, set_suggestions) = signal::<Vec<String>>(Vec::new());
    let (category, set_category) = signal("all".to_string());
    let (active_tab, set_active_tab) = signal(ActiveTab::Overview);

    // Overview pane
    let (graph_container_visible, set_graph_container_visible) = signal(true);
    let (placeholder_visible, set_placeholder_visible) = signal(true);
    let (graph_visible, set_graph_visible) = signal(false);
    let (graph_html, set_graph_html) = signal(String::new());
    let (total_companies, set_total_companies) = signal(STAT_PLACEHOLDER.to_string());
    let (categories_stat, set_categories_stat) = signal(STAT_PLACEHOLDER.to_string());
    let (hierarchy_depth, set_hierarchy_depth) = signal(STAT_PLACEHOLDER.to_string());
    let (description, set_description) = signal(DESCRIPTION_PLACEHOLDER.to_string());
    let (company_heading, set_company_heading) = signal(String::new());

    // Reports / analytics panes
    let (reports_heading, set_reports_heading) = signal(String::new());
    let (analytics_heading, set_analytics_heading) = signal(String::new());
    let (reports_html, set_reports_html) = signal(REPORTS_EMPTY_STATE.to_string());
    let (analytics_html, set_analytics_html) = signal(ANALYTICS_EMPTY_STATE.to_string());

    // Preload the company list for autocomplete
    wasm_bindgen_futures::spawn_local(async move {
        match api::fetch_companies().await {
            Ok(list) => set_companies.set(list),
            Err(e) => log::error!("Failed to load company list: {}", e),
        }
    });

    // In-flight requests are not tracked; responses apply in arrival order
    let update_graph = move |company: String, category: String| {
        set_placeholder_visible.set(true);
        set_graph_visible.set(false);

        spawn_local(async move {
            match api::fetch_graph_data(&company, &category).await {
                Ok(response) => match state::graph_view(response) {
                    Some(view) => {
                        set_graph_html.set(view.plot);
                        set_placeholder_visible.set(false);
                        set_graph_visible.set(true);

                        if let Some(total) = view.total_companies {
                            set_total_companies.set(total);
                        }
                        if let Some(categories) = view.categories {
                            set_categories_stat.set(categories);
                        }
                        if let Some(depth) = view.hierarchy_depth {
                            set_hierarchy_depth.set(depth);
                        }
                        set_description.set(view.description);

                        let heading = state::company_heading(&company);
                        set_company_heading.set(heading.clone());
                        set_reports_heading.set(heading.clone());
                        set_analytics_heading.set(heading);
                    }
                    None => {
                        alert("Graph data is missing.");
                        set_placeholder_visible.set(true);
                        set_graph_visible.set(false);
                    }
                },
                Err(e) => {
                    log::error!("Error fetching graph data: {}", e);
                    alert(&format!("Error fetching graph data: {}", e));
                    set_placeholder_visible.set(true);
                    set_graph_visible.set(false);
                }
            }
        });
    };

    let load_reports = move || {
        let company = company_input.get().trim().to_string();
        if company.is_empty() {
            set_reports_html.set(REPORTS_EMPTY_STATE.to_string());
            return;
        }

        spawn_local(async move {
            match api::fetch_reports(&company).await {
                Ok(fragment) => {
                    set_reports_html.set(fragment);
                    set_reports_heading.set(state::company_heading(&company));
                }
                Err(e) => {
                    log::error!("Failed to load reports: {}", e);
                    set_reports_html.set(REPORTS_ERROR.to_string());
                }
            }
        });
    };

    let load_analytics = move || {
        let company = company_input.get().trim().to_string();
        if company.is_empty() {
            set_analytics_html.set(ANALYTICS_EMPTY_STATE.to_string());
            return;
        }

        spawn_local(async move {
            match api::fetch_analytics(&company).await {
                Ok(response) => match response.plot {
                    Some(plot) => {
                        set_analytics_html.set(plot);
                        set_analytics_heading.set(state::company_heading(&company));
                    }
                    None => set_analytics_html.set(ANALYTICS_NO_DATA.to_string()),
                },
                Err(e) => {
                    log::error!("Failed to load analytics: {}", e);
                    set_analytics_html.set(ANALYTICS_ERROR.to_string());
                }
            }
        });
    };

    let handle_company_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        set_suggestions.set(autocomplete::filter_suggestions(&companies.get(), &value));
        set_company_input.set(value);
    };

    let handle_search = move |_| {
        let company = company_input.get().trim().to_string();
        if company.is_empty() {
            alert("Please select a company first.");
            return;
        }

        match active_tab.get() {
            ActiveTab::Overview => {
                update_graph(company, category.get());
                set_graph_container_visible.set(true);
            }
            ActiveTab::Reports => {
                load_reports();
                set_graph_container_visible.set(false);
            }
            ActiveTab::Analytics => {
                load_analytics();
                set_graph_container_visible.set(false);
            }
        }
    };

    let handle_category_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        set_category.set(value.clone());

        let company = company_input.get().trim().to_string();
        if company.is_empty() {
            alert("Please select a company first.");
            return;
        }

        update_graph(company, value);
    };

    let handle_clear = move |_| {
        set_company_input.set(String::new());
        set_suggestions.set(Vec::new());

        // Back to the placeholder; the stale markup stays hidden behind it
        set_graph_visible.set(false);
        set_placeholder_visible.set(true);

        set_total_companies.set(STAT_PLACEHOLDER.to_string());
        set_categories_stat.set(STAT_PLACEHOLDER.to_string());
        set_hierarchy_depth.set(STAT_PLACEHOLDER.to_string());
        set_description.set(DESCRIPTION_PLACEHOLDER.to_string());

        set_company_heading.set(String::new());
        set_reports_heading.set(String::new());
        set_analytics_heading.set(String::new());

        set_reports_html.set(REPORTS_EMPTY_STATE.to_string());
        set_analytics_html.set(ANALYTICS_EMPTY_STATE.to_string());
    };

    let switch_tab = move |tab: ActiveTab| {
        set_active_tab.set(tab);

        match tab {
            ActiveTab::Overview => {
                set_graph_container_visible.set(true);
                if company_input.get().trim().is_empty() {
                    set_placeholder_visible.set(true);
                } else {
                    set_graph_visible.set(true);
                    set_placeholder_visible.set(false);
                }
            }
            ActiveTab::Reports => {
                load_reports();
                set_graph_container_visible.set(false);
                set_graph_visible.set(false);
                set_placeholder_visible.set(false);
            }
            ActiveTab::Analytics => {
                load_analytics();
                set_graph_container_visible.set(false);
                set_graph_visible.set(false);
                set_placeholder_visible.set(false);
            }
        }
    };

    let nav_link_class = move |tab: ActiveTab| {
        if active_tab.get() == tab {
            "nav-link active"
        } else {
            "nav-link"
        }
    };
    let pane_class = move |tab: ActiveTab| {
        if active_tab.get() == tab {
            "tab-pane fade show active"
        } else {
            "tab-pane fade"
        }
    };
    // The classes carry the contract; the style keeps panes exclusive
    // without a stylesheet
    let pane_style = move |tab: ActiveTab| {
        if active_tab.get() == tab {
            "display: block;"
        } else {
            "display: none;"
        }
    };

    view! {
        <div class="container" style="max-width: 1280px; margin: 0 auto; padding: 16px;">
            <h2>"Company Dashboard"</h2>

            // Search bar with autocomplete, category filter and actions
            <div class="search-bar" style="display: flex; gap: 8px; align-items: flex-start; margin-bottom: 8px;">
                <div style="position: relative; flex: 1;">
                    <input
                        type="text"
                        id="company-search"
                        class="form-control"
                        placeholder="Search for a company..."
                        autocomplete="off"
                        prop:value=move || company_input.get()
                        on:input=handle_company_input
                    />
                    <ul
                        id="autocomplete-list"
                        class="list-group"
                        style=move || {
                            if suggestions.get().is_empty() {
                                "display: none;"
                            } else {
                                "display: block; position: absolute; width: 100%; z-index: 10; \
                                 background: white; border: 1px solid #ddd; list-style: none; \
                                 margin: 0; padding: 0;"
                            }
                        }
                    >
                        {move || {
                            suggestions
                                .get()
                                .into_iter()
                                .map(|company| {
                                    let value = company.clone();
                                    view! {
                                        <li
                                            class="list-group-item autocomplete-item"
                                            style="padding: 6px 12px; cursor: pointer;"
                                            on:click=move |_| {
                                                set_company_input.set(value.clone());
                                                set_suggestions.set(Vec::new());
                                            }
                                        >
                                            {company}
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </div>

                <select
                    id="category-filter"
                    class="form-select"
                    prop:value=move || category.get()
                    on:change=handle_category_change
                >
                    <option value="all">"All"</option>
                    <option value="new_company">"New companies"</option>
                    <option value="update">"Updates"</option>
                </select>

                <button type="button" id="search-btn" class="btn btn-primary" on:click=handle_search>
                    "Search"
                </button>
                <button type="button" id="clear-search" class="btn btn-secondary" on:click=handle_clear>
                    "Clear"
                </button>
            </div>

            // Tab navigation
            <ul class="nav nav-tabs" style="display: flex; gap: 4px; list-style: none; padding: 0;">
                <li class="nav-item">
                    <a
                        class=move || nav_link_class(ActiveTab::Overview)
                        href="#overview"
                        on:click=move |ev| {
                            ev.prevent_default();
                            switch_tab(ActiveTab::Overview);
                        }
                    >
                        "Overview"
                    </a>
                </li>
                <li class="nav-item">
                    <a
                        class=move || nav_link_class(ActiveTab::Reports)
                        href="#reports"
                        on:click=move |ev| {
                            ev.prevent_default();
                            switch_tab(ActiveTab::Reports);
                        }
                    >
                        "Reports"
                    </a>
                </li>
                <li class="nav-item">
                    <a
                        class=move || nav_link_class(ActiveTab::Analytics)
                        href="#analytics"
                        on:click=move |ev| {
                            ev.prevent_default();
                            switch_tab(ActiveTab::Analytics);
                        }
                    >
                        "Analytics"
                    </a>
                </li>
            </ul>

            <div class="tab-content">
                // Overview
                <div
                    id="overview"
                    class=move || pane_class(ActiveTab::Overview)
                    style=move || pane_style(ActiveTab::Overview)
                >
                    <h4>
                        "Overview "
                        <span id="selected-company-name">{move || company_heading.get()}</span>
                    </h4>

                    <div
                        id="graph-container"
                        style=move || {
                            if graph_container_visible.get() {
                                "display: block;"
                            } else {
                                "display: none;"
                            }
                        }
                    >
                        <div
                            id="graph-placeholder"
                            style=move || {
                                if placeholder_visible.get() {
                                    "display: block; padding: 60px; text-align: center; \
                                     color: #666; background: #f9f9f9; border: 1px dashed #ccc;"
                                } else {
                                    "display: none;"
                                }
                            }
                        >
                            "Search for a company to display its hierarchy graph."
                        </div>
                        <div
                            id="graph"
                            style=move || {
                                if graph_visible.get() {
                                    "display: block;"
                                } else {
                                    "display: none;"
                                }
                            }
                            inner_html=move || graph_html.get()
                        ></div>
                    </div>

                    <div class="statistics" style="display: flex; gap: 16px; margin-top: 12px;">
                        <div class="stat-card">
                            "Total companies: "
                            <span id="total-companies">{move || total_companies.get()}</span>
                        </div>
                        <div class="stat-card">
                            "Categories: "
                            <span id="categories">{move || categories_stat.get()}</span>
                        </div>
                        <div class="stat-card">
                            "Hierarchy depth: "
                            <span id="hierarchy-depth">{move || hierarchy_depth.get()}</span>
                        </div>
                    </div>

                    <p id="company-description" style="margin-top: 12px; color: #444;">
                        {move || description.get()}
                    </p>
                </div>

                // Reports
                <div
                    id="reports"
                    class=move || pane_class(ActiveTab::Reports)
                    style=move || pane_style(ActiveTab::Reports)
                >
                    <h4>
                        "Reports "
                        <span id="reports-company-name">{move || reports_heading.get()}</span>
                    </h4>
                    <div id="reports-content" inner_html=move || reports_html.get()></div>
                </div>

                // Analytics
                <div
                    id="analytics"
                    class=move || pane_class(ActiveTab::Analytics)
                    style=move || pane_style(ActiveTab::Analytics)
                >
                    <h4>
                        "Analytics "
                        <span id="analytics-company-name">{move || analytics_heading.get()}</span>
                    </h4>
                    <div id="analytics-content" inner_html=move || analytics_html.get()></div>
                </div>
            </div>
        </div>
    }
}
