use anyhow::{Result, bail};
use tracing::info;

use rcm_cli::seed::load_residents;
use rcm_core::{PAGE_SIZES, ResidentManager, SortDirection, SortField};
use rcm_export::{FileDownloadSink, export_residents};

use crate::cli::{ExportArgs, FilterArgs, ListArgs, StatsArgs};
use crate::render::{resident_table, stats_table};

pub fn run_list(args: &ListArgs) -> Result<()> {
    if !PAGE_SIZES.contains(&args.page_size) {
        bail!("page size must be one of {PAGE_SIZES:?}");
    }
    let mut manager = manager_from(args.seed.as_path(), &args.filters)?;
    manager.set_page_size(args.page_size);
    manager.set_page(args.page);

    let page = manager.page();
    println!("{}", resident_table(&page));
    println!(
        "Page {} of {} — {} of {} resident(s) visible",
        manager.params().current_page,
        manager.total_pages(),
        manager.visible().len(),
        manager.residents().len(),
    );
    Ok(())
}

pub fn run_stats(args: &StatsArgs) -> Result<()> {
    let residents = load_residents(&args.seed)?;
    let manager = ResidentManager::new(residents);
    println!("{}", stats_table(&manager.stats()));
    Ok(())
}

pub fn run_export(args: &ExportArgs) -> Result<()> {
    let mut manager = manager_from(args.seed.as_path(), &args.filters)?;

    if args.select_all {
        for id in manager.visible_ids() {
            manager.toggle_select(id);
        }
    } else {
        if args.select.is_empty() {
            bail!("nothing selected: pass --select <ID,...> or --select-all");
        }
        for id in &args.select {
            manager.toggle_select(*id);
        }
    }

    let rows = manager
        .export_selected()
        .map_err(|err| anyhow::anyhow!(err.user_message()))?;
    let mut sink = FileDownloadSink::new(args.output_dir.clone());
    let name = export_residents(&rows, manager.today(), &mut sink)?;
    info!(rows = rows.len(), file = %name, "export complete");
    println!("Wrote {} resident(s) to {}", rows.len(), sink.path_for(&name).display());
    Ok(())
}

/// Loads the seed and applies the shared filter/sort flags.
fn manager_from(seed: &std::path::Path, filters: &FilterArgs) -> Result<ResidentManager> {
    let residents = load_residents(seed)?;
    let mut manager = ResidentManager::new(residents);
    if let Some(search) = &filters.search {
        manager.set_search_query(search.clone());
    }
    manager.set_status_filter(filters.status.into());
    manager.set_active_tab(filters.tab.into());
    manager.set_age_range(filters.min_age, filters.max_age);
    manager.set_join_date_range(filters.joined_after, filters.joined_before);

    // set_sort toggles on a repeated field, so only touch it when the field
    // or direction actually needs to change.
    let field: SortField = filters.sort.into();
    if manager.params().sort_field != field {
        manager.set_sort(field);
    }
    let want = if filters.desc {
        SortDirection::Desc
    } else {
        SortDirection::Asc
    };
    if manager.params().sort_direction != want {
        manager.set_sort(field);
    }
    Ok(manager)
}
