use crate::cli::parser::Commands;
use crate::core::stats::{bar, count_by_supervisor, summarize_attendance};
use crate::errors::AppResult;
use crate::models::{ActivityRecord, AttendanceRecord};
use crate::store::Store;
use crate::ui::messages::{header, info};
use crate::utils::table::Table;

const BAR_WIDTH: usize = 30;

pub fn handle(cmd: &Commands, store: &Store<'_>) -> AppResult<()> {
    if let Commands::Stats { source } = cmd {
        let attendance = store.load_from::<AttendanceRecord>(*source)?;
        let diaries = store.load_from::<ActivityRecord>(*source)?;

        print_attendance(attendance.rows());
        println!();
        print_supervisors(diaries.rows());
    }
    Ok(())
}

fn print_attendance(records: &[AttendanceRecord]) {
    header("Hours per intern");

    let Some(s) = summarize_attendance(records) else {
        info("No attendance data found.");
        return;
    };

    println!("Total hours logged:        {:.1} h", s.total_hours);
    println!("Mean hours per record:     {:.2} h", s.mean_hours);

    let (Some(top), Some(bottom)) = (&s.top_total, &s.bottom_total) else {
        println!();
        info(format!(
            "{:.1} hours logged, but no record carries an intern name.",
            s.total_hours
        ));
        return;
    };

    let rows: Vec<Vec<String>> = s
        .per_intern
        .iter()
        .map(|ih| {
            vec![
                ih.name.clone(),
                format!("{:.1}", ih.hours),
                format!("{:.1}%", s.share(ih.hours) * 100.0),
                bar(ih.hours, top.hours, BAR_WIDTH),
            ]
        })
        .collect();

    println!("Longest single record:     {}", s.top_single);
    println!("Most hours (sum):          {}", top.name);
    println!();

    let table = Table::fitted(&["Intern", "Hours", "Share", ""], rows, BAR_WIDTH);
    print!("{}", table.render());
    println!();

    println!(
        "Summary: {:.1} hours logged in total, spread across {} interns.",
        s.total_hours,
        s.intern_count()
    );
    println!(
        "Most active: {} with {:.1} hours, the largest internship load.",
        top.name, top.hours
    );
    println!(
        "Lightest load: {} with {:.1} hours logged so far.",
        bottom.name, bottom.hours
    );
}

fn print_supervisors(records: &[ActivityRecord]) {
    header("Diaries validated per supervisor");

    let counts = count_by_supervisor(records);
    let Some(most) = counts.first() else {
        info("No field diary entries to analyse.");
        return;
    };

    let max = most.diaries as f64;
    let rows: Vec<Vec<String>> = counts
        .iter()
        .map(|c| {
            vec![
                c.supervisor.clone(),
                c.diaries.to_string(),
                bar(c.diaries as f64, max, BAR_WIDTH),
            ]
        })
        .collect();
    let table = Table::fitted(&["Supervisor", "Diaries", ""], rows, BAR_WIDTH);
    print!("{}", table.render());
    println!();
    println!(
        "Supervisor {} validated {} diaries, the most active so far.",
        most.supervisor, most.diaries
    );
}
