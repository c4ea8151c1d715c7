use tracing::Level;

pub fn setup_tracing(json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false);
    if json {
        // ANSI color codes are noise once the lines are shipped somewhere else.
        builder.with_ansi(false).without_time().json().init();
    } else {
        builder.without_time().init();
    }
}
