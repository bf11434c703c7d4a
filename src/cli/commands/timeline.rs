use crate::cli::commands::{AppContext, load_report, select_employees};
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::models::{DailyUtilizationSample, EmployeeReport, TimelineWindow};
use crate::utils::colors::{color_for_rate, colorize, colorize_day};
use crate::utils::formatting::{bold, hours, rate, separator};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Timeline {
        file,
        emp,
        days,
        window,
    } = cmd
    {
        let report = load_report(file, window, ctx)?;
        let selected = select_employees(&report, emp)?;

        print_window(&report.window);

        for r in selected {
            print_employee(r, &ctx.cfg.separator_char, ctx.cfg.show_utilization);
            if *days {
                print_days(&r.timeline.daily, ctx.cfg.show_utilization);
            }
        }
    }
    Ok(())
}

fn print_window(window: &TimelineWindow) {
    println!(
        "Window: {} → {} ({} days)",
        window.start,
        window.end,
        window.days()
    );
}

fn print_employee(r: &EmployeeReport, sep: &str, show_utilization: bool) {
    let t = &r.timeline;

    println!("\n{}", bold(&format!("{} ({})", r.employee.name, r.employee.emp_id)));
    println!("{}", separator(sep, 40));
    println!("Working days:   {}", t.working_days);
    println!("Chargeable:     {}", hours(t.chargeable_hours));
    println!("Absence:        {}", hours(t.absence_hours));
    println!("Net available:  {}", hours(t.net_available_hours));
    println!("Free capacity:  {}", hours(t.available_capacity_hours));

    if show_utilization {
        let label = rate(t.utilization_rate);
        let suffix = if t.is_over_allocated() {
            " (over-allocated)"
        } else {
            ""
        };
        println!(
            "Utilization:    {}{}",
            colorize(&label, color_for_rate(t.utilization_rate)),
            suffix
        );
    }
}

fn print_days(daily: &[DailyUtilizationSample], show_utilization: bool) {
    let mut columns = vec![
        Column::new("DATE", 12),
        Column::new("DAY", 4),
        Column::new("CHARGE", 7),
        Column::new("ABSENCE", 8),
        Column::new("OTHER", 6),
        Column::new("NET", 6),
    ];
    if show_utilization {
        columns.push(Column::new("UTIL", 8));
    }
    columns.push(Column::new("FREE", 6));

    let mut table = Table::new(columns);

    for d in daily {
        let kind = if d.is_public_holiday {
            "HOL"
        } else if d.is_weekend {
            "WE"
        } else {
            ""
        };

        let mut row = vec![
            colorize_day(&d.date.to_string(), d.is_working_day),
            kind.to_string(),
            hours(d.chargeable_hours),
            hours(d.absence_hours),
            hours(d.other_hours),
            hours(d.net_available_hours),
        ];
        if show_utilization {
            row.push(rate(d.utilization_rate));
        }
        row.push(hours(d.available_capacity_hours));
        table.add_row(row);
    }

    println!();
    print!("{}", table.render());
}
