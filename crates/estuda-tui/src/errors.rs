pub fn init() -> color_eyre::Result<()> {
    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install()?;

    let panic_hook = panic_hook.into_panic_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // The terminal must be restored before the panic report prints.
        let _ = crate::tui::restore();
        panic_hook(panic_info);
    }));

    Ok(())
}
