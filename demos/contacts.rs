//! Walks one client through three requests of a sortable contacts table.
//!
//! ```sh
//! RUST_LOG=debug cargo run --example contacts
//! ```

use sortkit::prelude::*;
use tracing_subscriber::EnvFilter;

const COLUMNS: &[(&str, Option<&str>)] = &[
    ("id", None),
    ("last_name", Some("Name")),
    ("phone", None),
    ("address", None),
];

async fn render_table(session: &MemorySession, request: RequestContext) -> anyhow::Result<()> {
    println!("GET {} {:?}", request.path, request.params);

    let mut sort = SortHelper::init(session, request, "last_name", SortOrder::Asc, None)?;
    sort.update().await?;

    println!("  ORDER BY {}", sort.clause()?);
    println!("  <thead><tr>");
    for (column, caption) in COLUMNS {
        let mut options = HeaderOptions::new();
        if let Some(caption) = caption {
            options = options.caption(*caption);
        }
        if *column == "address" {
            options = options.attr("width", 200);
        }
        println!("    {}", sort.header_cell(column, &options)?.into_string());
    }
    println!("  </tr></thead>\n");
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let session = MemorySession::new();
    let list = || RequestContext::new("/contacts").with_route("contacts", "list");

    // First visit: default sort
    render_table(&session, list()).await?;

    // Click "Phone" while searching
    render_table(
        &session,
        list()
            .with_param("sort_key", "phone")
            .with_param("sort_order", "asc")
            .with_param("q", "smith"),
    )
    .await?;

    // Come back later: the session remembers the phone sort
    render_table(&session, list()).await?;

    Ok(())
}
