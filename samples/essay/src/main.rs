//! essay
//!
//! Prints the essay index page to stdout.
//!
//! ```bash
//! cargo run -p essay
//! MONOVIEW_PRETTY=2 RUST_LOG=essay=debug,monoview=trace cargo run -p essay
//! ```

use std::io::{self, Write};

use monoview::html::Renderer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use essay::config::render_options_from_env;
use essay::model::sample_site;
use essay::views::{page, published_tag_count};

fn main() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "essay=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let site = sample_site();
    let options = render_options_from_env();
    tracing::debug!(?options, "render options");

    let tags = published_tag_count().run(&site).into_inner();
    tracing::info!(
        essays = site.essays.len(),
        published_tags = tags,
        "rendering essay index"
    );

    let rendered = Renderer::new(options).render(&page(&site));
    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    if !rendered.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()
}
