use crate::app::AppContext;
use crate::cli::IdArgs;
use crate::helpers::parse_entry_id;
use crate::ui::{print, receipt};

pub fn handle_favorite(ctx: &AppContext, args: &IdArgs) -> anyhow::Result<()> {
    let id = parse_entry_id(&args.id)?;
    let store = ctx.open_store()?;
    let entry = store.toggle_favorite(id)?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        let title = if entry.favorite {
            "Marked favorite"
        } else {
            "Removed favorite"
        };
        let items = [
            ("ID", entry.id.to_string()),
            ("Favorite", entry.favorite.to_string()),
        ];
        print(&ui_ctx, &receipt(&ui_ctx, title, &items));
    }
    Ok(())
}
