fn main() {
    #[cfg(target_arch = "wasm32")]
    hr_dashboard_frontend::start();
}
