use fleet_console::components::App;
use fleet_console::config::CONFIG;

fn main() {
    console_error_panic_hook::set_once();

    if CONFIG.enable_logging {
        wasm_logger::init(wasm_logger::Config::default());
    } else {
        wasm_logger::init(wasm_logger::Config::new(log::Level::Warn));
    }

    log::info!("🚚 Fleet Console arrancando ({})...", CONFIG.environment);

    yew::Renderer::<App>::new().render();
}
