use super::{field_map, submit_form};
use crate::AppContext;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::models::form::FormType;

/// Submit the measurement intake form.
pub fn handle(cmd: &Commands, ctx: &mut AppContext) -> AppResult<()> {
    if let Commands::Measure {
        name,
        email,
        phone,
        bust,
        waist,
        shoulder_width,
        sleeve_length,
        service,
        notes,
        no_draft,
    } = cmd
    {
        let values = field_map(&[
            ("Name", name),
            ("Email", email),
            ("Contact Number", phone),
            ("Bust", bust),
            ("Waist", waist),
            ("Shoulder Width", shoulder_width),
            ("Sleeve Length", sleeve_length),
            ("Service Type", service),
            ("Notes", notes),
        ]);

        submit_form(ctx, FormType::Measurement, values, *no_draft)?;
    }
    Ok(())
}
