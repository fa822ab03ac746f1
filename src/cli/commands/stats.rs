use super::list::print_record;
use crate::AppContext;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET};

pub fn handle(ctx: &mut AppContext) -> AppResult<()> {
    let stats = ctx.store.stats(ctx.cfg.recent_limit);

    println!();
    println!(
        "{}• Measurements:{} {}{}{}",
        CYAN, RESET, GREEN, stats.total_measurements, RESET
    );
    println!(
        "{}• Appointments:{} {}{}{}",
        CYAN, RESET, GREEN, stats.total_appointments, RESET
    );

    if !stats.recent_measurements.is_empty() {
        println!("{}• Recent measurements:{}", CYAN, RESET);
        for record in &stats.recent_measurements {
            print_record(record);
        }
    }
    if !stats.recent_appointments.is_empty() {
        println!("{}• Recent appointments:{}", CYAN, RESET);
        for record in &stats.recent_appointments {
            print_record(record);
        }
    }

    match &stats.latest {
        Some(record) => {
            println!("{}• Most recent submission:{}", CYAN, RESET);
            print_record(record);
        }
        None => println!("{}• Most recent submission:{} {GREY}--{RESET}", CYAN, RESET),
    }

    println!();
    Ok(())
}
