fn main() {
    leptos::mount::mount_to_body(relaypanel_adapter_dashboard_leptos::App);
}
