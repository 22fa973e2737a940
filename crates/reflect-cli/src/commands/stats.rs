use tracing::debug;

use crate::app::AppContext;
use crate::cli::StatsArgs;
use crate::output::{print_stats, stats_json};
use crate::ui::{blank_line, header, print};

pub fn handle_stats(ctx: &AppContext, args: &StatsArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let stats = store.stats()?;
    debug!(total = stats.total, streak = stats.streak, "Computed journal stats");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats_json(&stats))?);
        return Ok(());
    }

    let ui_ctx = ctx.ui_context(false, None);
    if !ctx.quiet() && ui_ctx.mode.is_pretty() {
        print(&ui_ctx, &header(&ui_ctx, "stats", None));
        blank_line(&ui_ctx);
    }
    print_stats(&ui_ctx, &stats);
    Ok(())
}
