use crate::cli::commands::{AppContext, load_report, select_employees};
use crate::cli::parser::{Commands, WindowArgs};
use crate::errors::AppResult;
use crate::models::ConsolidatedJob;
use crate::utils::colors::{color_for_category, colorize};
use crate::utils::formatting::{bold, pad_left, pad_right};

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Periods { file, emp } = cmd {
        let report = load_report(file, &WindowArgs::default(), ctx)?;

        for r in select_employees(&report, emp)? {
            println!("\n{}", bold(&format!("{} ({})", r.employee.name, r.employee.emp_id)));

            if r.jobs.is_empty() {
                println!("  no assignments");
                continue;
            }

            for job in &r.jobs {
                print_job(job);
            }
        }
    }
    Ok(())
}

fn print_job(job: &ConsolidatedJob) {
    let mut title = format!(
        "  {} [{}] {}",
        job.job_name,
        job.job_code,
        colorize(job.category.label(), color_for_category(job.category))
    );
    if job.periods.len() > 1 {
        title.push_str(&format!(" - {} periods", job.periods.len()));
    }
    if job.has_provisional {
        title.push_str(" - provisional");
    }
    println!("{title}");

    for p in &job.periods {
        println!(
            "    {} → {}  {}  {}  {}",
            p.start,
            p.end,
            pad_left(&format!("{:.0}%", p.utilization), 5),
            pad_left(&format!("{:.1}h/day", p.hours_per_day), 9),
            pad_right(&p.status, 2),
        );
    }
}
