//! List entries through the filter composer and query router.
//!
//! The command sets the same selections an interactive client would and
//! prints the router's first emission.

use reflect_core::{Entry, FilterComposer, QueryRouter};
use tracing::debug;

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::constants::DEFAULT_LIST_LIMIT;
use crate::helpers::{parse_category, parse_mood, parse_output_format};
use crate::output::{entries_json, print_entry_list};
use crate::ui::{blank_line, header, hint, print};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())?;
    let composer = FilterComposer::new();
    if let Some(ref text) = args.search {
        composer.set_search(text.clone());
    }
    if let Some(ref value) = args.mood {
        composer.set_mood(Some(parse_mood(value)?));
    }
    if let Some(ref value) = args.category {
        composer.set_category(Some(parse_category(value)?));
    }

    let store = ctx.open_store()?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let (description, emitted) = if args.favorites {
        let mut live = store.favorites();
        ("favorites".to_string(), runtime.block_on(live.next()))
    } else {
        let router = QueryRouter::new(&store, &composer);
        let mut entries = router.entries();
        let emitted = runtime.block_on(entries.next());
        (entries.query().describe(), emitted)
    };
    debug!(query = %description, "Listing entries");

    let mut entries: Vec<Entry> = match emitted {
        Some(result) => result?,
        None => anyhow::bail!("Journal closed before the query produced results"),
    };
    entries.truncate(args.limit.unwrap_or(DEFAULT_LIST_LIMIT));

    let ui_ctx = ctx.ui_context(args.json, Some(format));
    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&entries_json(&entries))?);
        return Ok(());
    }

    if !ctx.quiet() && ui_ctx.mode.is_pretty() {
        print(&ui_ctx, &header(&ui_ctx, "list", Some(description.as_str())));
        blank_line(&ui_ctx);
    }
    if entries.is_empty() {
        if !ctx.quiet() {
            print(&ui_ctx, &hint(&ui_ctx, "No entries match. Run `reflect add` to write one."));
        }
        return Ok(());
    }

    print_entry_list(&ui_ctx, &entries, ctx.date_format()?);
    Ok(())
}
