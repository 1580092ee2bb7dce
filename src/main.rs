use std::process;

use tracing_subscriber::EnvFilter;

use pageviews::PageViews;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut page_views = PageViews::default();
    let series = match page_views.load() {
        Ok(series) => series,
        Err(e) => {
            tracing::error!("{}", e);
            process::exit(1);
        }
    };

    println!("Data count after cleaning: {}", series.len());

    let drawn = page_views
        .draw_line_plot(&series)
        .and_then(|_| page_views.draw_bar_plot(&series))
        .and_then(|_| page_views.draw_box_plot(&series));

    if let Err(e) = drawn {
        tracing::error!("{}", e);
        process::exit(1);
    }
}
