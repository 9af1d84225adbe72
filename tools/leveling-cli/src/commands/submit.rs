//! Fill and submit a storefront form.

use anyhow::{Context as _, Result};
use dialoguer::{Confirm, Input, Password, Select};
use leveling_storefront::forms::{FieldSpec, InputKind};
use leveling_storefront::FormKind;

use super::SubmitArgs;
use crate::context::Context;

/// Run the submit command.
pub async fn run(args: SubmitArgs, ctx: &Context) -> Result<()> {
    let kind = FormKind::parse(&args.form)?;
    let interactive = !args.no_input && !ctx.output.is_json() && console::user_attended();

    let mut values = args.fields;
    for field in kind.fields() {
        let given = values
            .iter()
            .any(|(name, value)| name == field.name && !value.is_empty());
        if given || !interactive {
            continue;
        }
        values.push((field.name.to_string(), prompt(field)?));
    }

    let path = format!("/{}", kind.name());
    let mut session = ctx.open(&path, ctx.host(None, None), false);
    session.load_modules();

    let submission = session
        .submit(kind, &values)
        .with_context(|| format!("{} form rejected", kind.name()))?;

    if ctx.output.is_json() {
        ctx.output.json(&submission);
    } else {
        ctx.output.success(&format!("Submitted {} form", kind.name()));
        for (name, value) in &submission.values {
            ctx.output.kv(name, value);
        }
        if kind == FormKind::Help {
            ctx.output.info(&format!(
                "Confirmation shows for {} ms",
                ctx.config.deferred.help_reset_ms
            ));
        }
    }
    session.finish();

    Ok(())
}

fn prompt(field: &FieldSpec) -> Result<String> {
    let value = match field.input {
        InputKind::Password => Password::new().with_prompt(field.label).interact()?,
        InputKind::Checkbox => {
            let accepted = Confirm::new()
                .with_prompt(field.label)
                .default(false)
                .interact()?;
            if accepted {
                "on".to_string()
            } else {
                String::new()
            }
        }
        InputKind::Select(options) => {
            // The first option is the empty prompt.
            let choices = options.get(1..).unwrap_or_default();
            let labels: Vec<&str> = choices.iter().map(|(_, label)| *label).collect();
            let selection = Select::new()
                .with_prompt(field.label)
                .items(&labels)
                .default(0)
                .interact()?;
            choices
                .get(selection)
                .map(|(value, _)| value.to_string())
                .unwrap_or_default()
        }
        _ => Input::<String>::new()
            .with_prompt(field.label)
            .allow_empty(true)
            .interact_text()
            .with_context(|| format!("Failed to read {}", field.label))?,
    };
    Ok(value)
}
