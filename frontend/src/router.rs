use leptos::*;
use leptos_router::*;

use crate::{
    api::ApiClient,
    config::ClientConfig,
    pages::{
        attendance::AttendancePage, dashboard::DashboardPage, employees::EmployeesPage,
        people::PeoplePage,
    },
};

pub const ROUTE_PATHS: &[&str] = &["/", "/dashboard", "/attendance", "/employ", "/all-employ"];

pub fn mount_app(config: ClientConfig) {
    mount_to_body(move || app_root(config));
}

pub fn app_root(config: ClientConfig) -> impl IntoView {
    provide_context(ApiClient::new(config));
    view! {
        <Router>
            <Routes>
                <Route path="/" view=DashboardPage/>
                <Route path="/dashboard" view=DashboardPage/>
                <Route path="/attendance" view=AttendancePage/>
                <Route path="/employ" view=PeoplePage/>
                <Route path="/all-employ" view=EmployeesPage/>
            </Routes>
        </Router>
    }
}
