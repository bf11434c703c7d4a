use crate::cli::commands::{AppContext, load_report};
use crate::cli::parser::{Commands, WindowArgs};
use crate::errors::AppResult;
use crate::models::EmployeeReport;
use crate::ui::messages::warning;
use crate::utils::colors::{color_for_status, colorize};
use crate::utils::formatting::{hours, rate};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::List { file } = cmd {
        let report = load_report(file, &WindowArgs::default(), ctx)?;

        if report.employees.is_empty() {
            warning("No employees found.");
            return Ok(());
        }

        print_employees(&report.employees, ctx.cfg.show_utilization);
    }
    Ok(())
}

fn print_employees(rows: &[EmployeeReport], show_utilization: bool) {
    let mut columns = vec![
        Column::new("ID", 10),
        Column::new("NAME", 24),
        Column::new("JOBS", 5),
        Column::new("ASSIGN", 7),
    ];
    if show_utilization {
        columns.push(Column::new("UTIL", 8));
    }
    columns.push(Column::new("NET/DAY", 8));
    columns.push(Column::new("FREE/DAY", 9));
    columns.push(Column::new("STATUS", 16));

    let mut table = Table::new(columns);

    for r in rows {
        let e = &r.employee;
        let mut row = vec![
            e.emp_id.clone(),
            e.name.clone(),
            e.project_count.to_string(),
            e.assignments.len().to_string(),
        ];
        if show_utilization {
            row.push(rate(e.summary.true_utilization_rate));
        }
        row.push(hours(e.summary.net_available_hours));
        row.push(hours(e.summary.available_capacity_hours));
        row.push(colorize(e.status().label(), color_for_status(e.status())));
        table.add_row(row);
    }

    print!("{}", table.render());
}
