use super::{field_map, submit_form};
use crate::AppContext;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::models::form::FormType;

/// Submit the appointment booking form.
pub fn handle(cmd: &Commands, ctx: &mut AppContext) -> AppResult<()> {
    if let Commands::Book {
        name,
        email,
        phone,
        date,
        time,
        service,
        notes,
        no_draft,
    } = cmd
    {
        let values = field_map(&[
            ("Name", name),
            ("Email", email),
            ("Contact Number", phone),
            ("Preferred Date", date),
            ("Preferred Time", time),
            ("Service Type", service),
            ("Notes", notes),
        ]);

        submit_form(ctx, FormType::Appointment, values, *no_draft)?;
    }
    Ok(())
}
