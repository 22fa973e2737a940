//! Add entry command handler.

use reflect_core::NewEntry;

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::helpers::{parse_category, parse_datetime, parse_mood};
use crate::ui::{blank_line, hint, print, receipt};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let mut new_entry =
        NewEntry::new(args.title.clone(), args.body.clone()).favorite(args.favorite);

    if let Some(ref value) = args.mood {
        new_entry = new_entry.with_mood(parse_mood(value)?);
    }
    if let Some(ref value) = args.category {
        new_entry = new_entry.with_category(parse_category(value)?);
    }
    if let Some(ref value) = args.attachment {
        new_entry = new_entry.with_attachment(value.clone());
    }
    if let Some(ref value) = args.date {
        new_entry = new_entry.with_created_at(parse_datetime(value)?);
    }

    let store = ctx.open_store()?;
    let id = store.insert(new_entry)?;

    if ctx.quiet() {
        return Ok(());
    }

    let entry = store.require(id)?;
    let ui_ctx = ctx.ui_context(false, None);
    let dates = ctx.date_format()?;
    let mut items = vec![
        ("ID", id.to_string()),
        ("Created", dates.render(entry.created_at)),
    ];
    if let Some(mood) = entry.mood {
        items.push(("Mood", mood.tag().to_string()));
    }
    if let Some(category) = entry.category {
        items.push(("Category", category.tag().to_string()));
    }

    print(&ui_ctx, &receipt(&ui_ctx, "Added entry", &items));
    if ui_ctx.mode.is_pretty() {
        blank_line(&ui_ctx);
        let next = format!("reflect show {}  \u{00B7}  reflect list", id);
        print(&ui_ctx, &hint(&ui_ctx, &next));
    }
    Ok(())
}
