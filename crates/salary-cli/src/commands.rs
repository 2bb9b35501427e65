use anyhow::{Context, Result, anyhow};
use salary_core::{FilterState, Paginator, TableView};
use salary_ingest::{import_salary_csv, write_dataset};
use tracing::{info, info_span};

use salary_cli::browse::{FilterRequest, apply_filters, open_dataset, open_session, select_year};
use salary_cli::config::Settings;
use salary_cli::render::{filter_summary, list_table, records_table};

use crate::cli::{BrowseArgs, ConvertArgs, OptionsArgs, YearArgs};

pub fn run_years(settings: &Settings) -> Result<()> {
    let mut session = open_session(settings);
    let years = session.load_years().context("load years")?;
    println!("{}", list_table("Year", years));
    Ok(())
}

pub fn run_locations(settings: &Settings, args: &YearArgs) -> Result<()> {
    let mut session = open_session(settings);
    select_year(&mut session, args.year.as_deref())?;
    let year = session.selected_year().unwrap_or_default().to_string();
    println!("{}", list_table(&format!("Locations {year}"), &session.locations().labels()));
    Ok(())
}

pub fn run_browse(settings: &Settings, args: &BrowseArgs) -> Result<()> {
    let mut session = open_session(settings);
    let dataset = open_dataset(
        &mut session,
        args.dataset.year.year.as_deref(),
        args.dataset.location.as_deref(),
    )?;
    let span = info_span!("browse", year = %dataset.year, location = %dataset.location);
    let _guard = span.enter();

    let mut state = FilterState::new(dataset.records);
    apply_filters(
        &mut state,
        &FilterRequest {
            college: args.college.as_deref(),
            department: args.department.as_deref(),
            name: args.name.as_deref(),
        },
    )?;

    let sort = settings.browse_sort(args.sort, args.desc)?;
    let page_size = args.page_size.unwrap_or(settings.page_size);
    let mut paginator = Paginator::new(page_size).context("page size")?;
    if args.page == 0 {
        return Err(anyhow!("page numbers start at 1"));
    }
    paginator.set_page(args.page - 1);

    let mut view = TableView::new(sort, paginator);
    let page = view.render(&state);
    info!(
        visible = page.info.total,
        page = page.info.page_index + 1,
        "records rendered"
    );

    println!("{}", filter_summary(&dataset.year, &dataset.location, &state));
    println!("{}", records_table(&page, args.expand));
    println!("{}", page.info.label());
    Ok(())
}

pub fn run_options(settings: &Settings, args: &OptionsArgs) -> Result<()> {
    let mut session = open_session(settings);
    let dataset = open_dataset(
        &mut session,
        args.dataset.year.year.as_deref(),
        args.dataset.location.as_deref(),
    )?;
    let mut state = FilterState::new(dataset.records);
    apply_filters(
        &mut state,
        &FilterRequest {
            college: args.college.as_deref(),
            department: args.department.as_deref(),
            name: None,
        },
    )?;
    let header = match (state.selected_college(), state.selected_department()) {
        (None, _) => "College".to_string(),
        (Some(college), None) => format!("Department ({college})"),
        (Some(_), Some(_)) => "Filters complete".to_string(),
    };
    println!("{}", list_table(&header, &state.options(&args.query)));
    Ok(())
}

pub fn run_convert(args: &ConvertArgs) -> Result<()> {
    let records = import_salary_csv(&args.input)
        .with_context(|| format!("import {}", args.input.display()))?;
    write_dataset(&args.output, &records)
        .with_context(|| format!("write {}", args.output.display()))?;
    println!(
        "Wrote {} records to {}",
        records.len(),
        args.output.display()
    );
    Ok(())
}
