use explorar_app::App;

fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::info!("csr mode - mounting to body");

    leptos::mount::mount_to_body(App);
}
