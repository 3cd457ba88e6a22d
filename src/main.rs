//! Pieloader - a pie-slice loading indicator demo
//! Built with iced: one indicator, an Increment button and a Spin button

mod app;
mod features;
mod ui;

fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .window_size((420.0, 520.0))
        .antialiasing(true)
        .run()?;

    Ok(())
}
