use crate::components::layout::Layout;
use crate::pages::directory::{
    panel::DirectoryLoader, use_directory_view_model, DirectoryOptions, EmployeeDirectory,
};
use leptos::*;

#[component]
pub fn PeoplePage() -> impl IntoView {
    let vm = use_directory_view_model();

    view! {
        <Layout>
            <DirectoryLoader vm=vm error_title="Unable to load employee data">
                <EmployeeDirectory vm=vm options=DirectoryOptions::people() />
            </DirectoryLoader>
        </Layout>
    }
}
