use super::list::print_record;
use crate::AppContext;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::{CYAN, RESET};

pub fn handle(cmd: &Commands, ctx: &mut AppContext) -> AppResult<()> {
    if let Commands::Search { query, kind } = cmd {
        let results = ctx.store.search(query, *kind);
        info(format!("{} match(es) for '{}'", results.total(), query));

        if !results.measurements.is_empty() {
            println!("{CYAN}Measurements{RESET}");
            for record in &results.measurements {
                print_record(record);
            }
        }
        if !results.appointments.is_empty() {
            println!("{CYAN}Appointments{RESET}");
            for record in &results.appointments {
                print_record(record);
            }
        }
    }
    Ok(())
}
