use crate::AppContext;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::models::kind::RecordKind;
use crate::models::record::Record;
use crate::utils::colors::{CYAN, GREY, RESET, color_for_optional_field};

pub fn handle(cmd: &Commands, ctx: &mut AppContext) -> AppResult<()> {
    if let Commands::List { kind } = cmd {
        let kinds: Vec<RecordKind> = match kind {
            Some(k) => vec![*k],
            None => RecordKind::all().to_vec(),
        };

        for k in kinds {
            let records = ctx.store.records(k);
            println!();
            println!("{}{}{} ({})", CYAN, k.label(), RESET, records.len());
            if records.is_empty() {
                println!("  {GREY}none{RESET}");
                continue;
            }
            for record in records {
                print_record(record);
            }
        }
        println!();
    }
    Ok(())
}

pub(crate) fn print_record(record: &Record) {
    let name = record.value_of("Name");
    let service = record.value_of("Service Type");
    let when = record
        .created_at()
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| record.timestamp.clone());
    // ids are normally ASCII uuids, but the mirror is hand-editable
    let short_id: String = record.id.chars().take(8).collect();

    println!(
        "  {GREY}{}{RESET}  {}  {}{}{RESET}  [{}{}{RESET}]",
        short_id,
        when,
        color_for_optional_field(Some(name.as_str())),
        if name.is_empty() { "--" } else { name.as_str() },
        color_for_optional_field(Some(service.as_str())),
        if service.is_empty() { "--" } else { service.as_str() },
    );
}
