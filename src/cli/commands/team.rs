use crate::cli::commands::{AppContext, load_report};
use crate::cli::parser::{Commands, WindowArgs};
use crate::errors::AppResult;
use crate::models::TeamStats;
use crate::ui::messages::header;
use crate::utils::colors::{color_for_category, color_for_rate, colorize};
use crate::utils::formatting::{hours, rate, rate_bar};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Team { file } = cmd {
        let report = load_report(file, &WindowArgs::default(), ctx)?;
        print_team(&report.team);
    }
    Ok(())
}

fn print_team(team: &TeamStats) {
    header("Team availability");

    println!("Employees:        {}", team.total);
    println!("Available:        {}", team.available);
    println!("Partially booked: {}", team.partially_booked);
    println!("Fully booked:     {}", team.fully_booked);
    println!();

    let overall = rate(team.overall_utilization_rate);
    println!(
        "Utilization:      {} {}",
        colorize(&overall, color_for_rate(team.overall_utilization_rate)),
        rate_bar(team.overall_utilization_rate, 20)
    );
    println!("Chargeable:       {}", hours(team.total_chargeable_hours));
    println!("Remaining:        {}", hours(team.remaining_hours()));

    if team.category_breakdown.is_empty() {
        return;
    }

    println!();
    let mut table = Table::new(vec![
        Column::new("CATEGORY", 26),
        Column::new("ASSIGNMENTS", 12),
        Column::new("HOURS/DAY", 10),
    ]);

    for (category, b) in &team.category_breakdown {
        table.add_row(vec![
            colorize(category.label(), color_for_category(*category)),
            b.count.to_string(),
            hours(b.total_hours),
        ]);
    }

    print!("{}", table.render());
}
