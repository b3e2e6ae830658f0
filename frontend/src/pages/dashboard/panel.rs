use crate::components::layout::Layout;
use crate::pages::dashboard::{
    components::{SummaryCards, TrendChart},
    utils::{build_trend, TrendPoint, TREND_DAYS},
};
use crate::pages::directory::{
    panel::DirectoryLoader, use_directory_view_model, DirectoryOptions, EmployeeDirectory,
};
use crate::state::directory::DirectoryState;
use crate::utils::hr::{
    build_status_map, count_availability, last_n_dates, today_iso_date, AvailabilityCounts,
};
use leptos::*;

fn dashboard_signals(
    state: RwSignal<DirectoryState>,
) -> (Signal<AvailabilityCounts>, Signal<Vec<TrendPoint>>) {
    let counts = Signal::derive(move || {
        state.with(|s| {
            count_availability(&s.employees, &build_status_map(&s.attendance, &today_iso_date()))
        })
    });
    let trend = Signal::derive(move || {
        state.with(|s| build_trend(&s.employees, &s.attendance, &last_n_dates(TREND_DAYS)))
    });
    (counts, trend)
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_directory_view_model();
    let (counts, trend) = dashboard_signals(vm.state);

    view! {
        <Layout>
            <DirectoryLoader vm=vm error_title="Unable to load dashboard data">
                <div class="space-y-6">
                    <SummaryCards counts=counts />
                    <TrendChart points=trend />
                    <EmployeeDirectory vm=vm options=DirectoryOptions::dashboard() />
                </div>
            </DirectoryLoader>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::directory::DirectoryViewModel;
    use crate::test_support::helpers::employee;
    use crate::test_support::ssr::{render_to_string, text_content};

    #[test]
    fn dashboard_page_shows_spinner_while_loading() {
        let html = render_to_string(move || view! { <DashboardPage /> });
        assert!(html.contains("HR Suite"));
        assert!(html.contains("animate-spin"));
        assert!(!html.contains("Attendance Overview"));
    }

    #[test]
    fn dashboard_sections_render_from_state() {
        let html = render_to_string(move || {
            let vm = DirectoryViewModel::new();
            vm.state.update(|s| {
                s.replace_collections(
                    vec![employee("1", "Ann", "Engineering"), employee("2", "Bob", "Ops")],
                    Vec::new(),
                )
            });
            let (counts, trend) = dashboard_signals(vm.state);
            view! {
                <SummaryCards counts=counts />
                <TrendChart points=trend />
                <EmployeeDirectory vm=vm options=DirectoryOptions::dashboard() />
            }
        });
        let text = text_content(&html);
        assert!(text.contains("Location Unknown"));
        assert!(text.contains("of 2 employees"));
        assert!(text.contains("Attendance Overview"));
        assert!(text.contains("Employee Listing"));
        assert_eq!(html.matches("stroke-dasharray").count(), 4);
    }
}
