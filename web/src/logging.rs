use tracing::Level;
use tracing_wasm::WASMLayerConfigBuilder;

fn max_level(debug_build: bool) -> Level {
    if debug_build { Level::DEBUG } else { Level::INFO }
}

/// Routes `tracing` events to the browser console
pub fn init() {
    let config = WASMLayerConfigBuilder::new()
        .set_max_level(max_level(cfg!(debug_assertions)))
        .build();
    tracing_wasm::set_as_global_default_with_config(config);
}
