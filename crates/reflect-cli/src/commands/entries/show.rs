use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::helpers::parse_entry_id;
use crate::output::{entry_json, print_entry};

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let id = parse_entry_id(&args.id)?;
    let store = ctx.open_store()?;
    let entry = store.require(id)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entry_json(&entry))?);
        return Ok(());
    }

    let ui_ctx = ctx.ui_context(false, None);
    print_entry(&ui_ctx, &entry, ctx.date_format()?, ctx.quiet());
    Ok(())
}
