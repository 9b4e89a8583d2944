//! Render a small landing page to stdout
//!
//! ```text
//! RUST_LOG=debug cargo run -p ugui --example hello -- [config.json]
//! ```

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use ugui::{Config, MemoryIcons, Page, attrs, colorhash, props};

const STAR_SVG: &str = r#"<svg viewBox="0 0 24 24"><path d="M12 2l3 7h7l-5.5 4 2 7-6.5-4.5L5.5 20l2-7L2 9h7z"/></svg>"#;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            Config::from_json(&json)?
        }
        None => Config::pretty(2).with_pack("og"),
    };
    tracing::info!(
        version = ugui::VERSION,
        pack = ?config.pack,
        minify = config.minify,
        "rendering page"
    );

    let mut page = Page::new(&config)?.with_icons(MemoryIcons::new().with("star", STAR_SVG));
    page.open("head", attrs! {})?.tag("title", attrs! {}, "uGUI demo")?;

    {
        let mut body = page.open("body", attrs! {})?;
        {
            let mut nav = body.open_named("NavBar", props! {})?;
            nav.component("NavItem", props! { label: "Home", url: "/" })?;
            nav.component("NavItem", props! { label: "Docs", url: "/docs" })?;
        }
        {
            let mut hero =
                body.open_named("Hero", props! { title: "uGUI", subtitle: "Pages from Rust" })?;
            hero.component("Button", props! { text: "Get started", material_icon: "star" })?;
        }
        let mut grid = body.open_named("Grid", props! { cols: 2 })?;
        for name in ["alpha", "beta"] {
            let mut card = grid.open_named("Card", props! { title: name })?;
            card.tag("span", attrs! { style: format!("color: {}", colorhash(name)) }, name)?;
        }
    }

    println!("{}", page.render());
    Ok(())
}
