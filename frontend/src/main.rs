use budget_advisor_frontend::components::App;

fn main() {
    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default();

    tracing::info!("starting finance assistant");
    yew::Renderer::<App>::new().render();
}
