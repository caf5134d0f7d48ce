use turnos_pwa::config::CONFIG;
use turnos_pwa::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Sistema de Turnos starting ({})...", CONFIG.environment);

    yew::Renderer::<App>::new().render();
}
