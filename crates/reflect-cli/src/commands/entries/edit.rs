//! Edit entry command handler.

use crate::app::AppContext;
use crate::cli::EditArgs;
use crate::errors::CliError;
use crate::helpers::{parse_category, parse_entry_id, parse_mood};
use crate::ui::{print, receipt};

pub fn handle_edit(ctx: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    let id = parse_entry_id(&args.id)?;

    let changes_requested = args.title.is_some()
        || args.body.is_some()
        || args.mood.is_some()
        || args.clear_mood
        || args.category.is_some()
        || args.clear_category
        || args.attachment.is_some()
        || args.clear_attachment;
    if !changes_requested {
        return Err(CliError::invalid_input("Nothing to change")
            .with_hint("Pass --title, --body, --mood, --category or --attachment.")
            .into());
    }

    // Parse tags before touching the store so bad input never opens it.
    let mood = args.mood.as_deref().map(parse_mood).transpose()?;
    let category = args.category.as_deref().map(parse_category).transpose()?;

    let store = ctx.open_store()?;
    let mut entry = store.require(id)?;

    if let Some(ref title) = args.title {
        entry.title = title.clone();
    }
    if let Some(ref body) = args.body {
        entry.body = body.clone();
    }
    if mood.is_some() || args.clear_mood {
        entry.mood = mood;
    }
    if category.is_some() || args.clear_category {
        entry.category = category;
    }
    if args.attachment.is_some() || args.clear_attachment {
        entry.attachment = args.attachment.clone();
    }

    let updated = store.update(entry)?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        let dates = ctx.date_format()?;
        let items = [
            ("ID", updated.id.to_string()),
            ("Modified", dates.render(updated.modified_at)),
        ];
        print(&ui_ctx, &receipt(&ui_ctx, "Updated entry", &items));
    }
    Ok(())
}
