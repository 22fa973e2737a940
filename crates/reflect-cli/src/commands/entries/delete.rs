use crate::app::AppContext;
use crate::cli::IdArgs;
use crate::helpers::parse_entry_id;
use crate::ui::{print, receipt};

/// Delete is idempotent: a missing ID succeeds and reports `removed=false`.
pub fn handle_delete(ctx: &AppContext, args: &IdArgs) -> anyhow::Result<()> {
    let id = parse_entry_id(&args.id)?;
    let store = ctx.open_store()?;
    let removed = store.delete(id)?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        let title = if removed {
            "Deleted entry"
        } else {
            "Nothing to delete"
        };
        let items = [("ID", id.to_string()), ("Removed", removed.to_string())];
        print(&ui_ctx, &receipt(&ui_ctx, title, &items));
    }
    Ok(())
}
